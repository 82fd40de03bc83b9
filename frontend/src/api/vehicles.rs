use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use serde_json::Value;

use super::{
    client::ApiClient,
    types::{ApiError, Vehicle, VehiclePayload, VehicleStatus},
};

impl ApiClient {
    /// Available vehicles, featured first, as published on the site.
    pub async fn list_public_vehicles(&self) -> Result<Vec<Vehicle>, ApiError> {
        let url = self.endpoint("/vehicles").await;
        self.execute(self.http_client().get(url)).await
    }

    pub async fn list_admin_vehicles(
        &self,
        status: Option<VehicleStatus>,
    ) -> Result<Vec<Vehicle>, ApiError> {
        let mut url = self.endpoint("/admin/vehicles").await;
        if let Some(status) = status {
            url.push_str("?status=");
            url.push_str(&utf8_percent_encode(status.as_str(), NON_ALPHANUMERIC).to_string());
        }
        self.execute(self.with_auth(self.http_client().get(url)))
            .await
    }

    pub async fn create_vehicle(&self, payload: &VehiclePayload) -> Result<Vehicle, ApiError> {
        let url = self.endpoint("/admin/vehicles").await;
        self.execute(self.with_auth(self.http_client().post(url).json(payload)))
            .await
    }

    pub async fn update_vehicle(
        &self,
        id: &str,
        payload: &VehiclePayload,
    ) -> Result<Vehicle, ApiError> {
        let url = self
            .endpoint(&format!(
                "/admin/vehicles/{}",
                utf8_percent_encode(id, NON_ALPHANUMERIC)
            ))
            .await;
        self.execute(self.with_auth(self.http_client().put(url).json(payload)))
            .await
    }

    pub async fn delete_vehicle(&self, id: &str) -> Result<(), ApiError> {
        let url = self
            .endpoint(&format!(
                "/admin/vehicles/{}",
                utf8_percent_encode(id, NON_ALPHANUMERIC)
            ))
            .await;
        self.execute::<Value>(self.with_auth(self.http_client().delete(url)))
            .await
            .map(|_| ())
    }
}
