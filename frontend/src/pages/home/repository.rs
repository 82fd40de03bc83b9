use crate::api::{ApiClient, ApiError, Vehicle};
use std::rc::Rc;

#[derive(Clone)]
pub struct HomeRepository {
    client: Rc<ApiClient>,
}

impl Default for HomeRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl HomeRepository {
    pub fn new() -> Self {
        Self {
            client: Rc::new(ApiClient::new()),
        }
    }

    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn fetch_available_vehicles(&self) -> Result<Vec<Vehicle>, ApiError> {
        self.client.list_public_vehicles().await
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::vehicle;
    use httpmock::prelude::*;

    #[tokio::test]
    async fn fetches_public_listing() {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(GET).path("/api/vehicles");
            then.status(200)
                .json_body(serde_json::to_value(vec![vehicle("v1")]).unwrap());
        });

        let repo =
            HomeRepository::new_with_client(Rc::new(ApiClient::new_with_base_url(server.url("/api"))));
        let vehicles = repo.fetch_available_vehicles().await.unwrap();
        assert_eq!(vehicles.len(), 1);
        mock.assert();
    }
}
