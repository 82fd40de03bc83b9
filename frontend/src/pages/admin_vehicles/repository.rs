use crate::api::{ApiClient, ApiError, Vehicle, VehiclePayload, VehicleStatus};
use std::rc::Rc;

#[derive(Debug, Clone, PartialEq)]
pub struct SaveRequest {
    /// `Some` updates the record with this id; `None` inserts.
    pub id: Option<String>,
    pub payload: VehiclePayload,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SaveOutcome {
    Created(Vehicle),
    Updated(Vehicle),
}

#[derive(Clone)]
pub struct AdminVehiclesRepository {
    client: Rc<ApiClient>,
}

impl Default for AdminVehiclesRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl AdminVehiclesRepository {
    pub fn new() -> Self {
        Self {
            client: Rc::new(ApiClient::new()),
        }
    }

    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn fetch_vehicles(
        &self,
        status: Option<VehicleStatus>,
    ) -> Result<Vec<Vehicle>, ApiError> {
        self.client.list_admin_vehicles(status).await
    }

    pub async fn save(&self, request: SaveRequest) -> Result<SaveOutcome, ApiError> {
        match request.id {
            Some(id) => self
                .client
                .update_vehicle(&id, &request.payload)
                .await
                .map(SaveOutcome::Updated),
            None => self
                .client
                .create_vehicle(&request.payload)
                .await
                .map(SaveOutcome::Created),
        }
    }

    pub async fn delete(&self, id: String) -> Result<(), ApiError> {
        self.client.delete_vehicle(&id).await
    }
}
