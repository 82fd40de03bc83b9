use crate::api::{ApiClient, ApiError, Vehicle};
use std::rc::Rc;

#[derive(Clone)]
pub struct AdminDashboardRepository {
    client: Rc<ApiClient>,
}

impl Default for AdminDashboardRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl AdminDashboardRepository {
    pub fn new() -> Self {
        Self {
            client: Rc::new(ApiClient::new()),
        }
    }

    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    /// Full stock across every status.
    pub async fn fetch_stock(&self) -> Result<Vec<Vehicle>, ApiError> {
        self.client.list_admin_vehicles(None).await
    }
}
