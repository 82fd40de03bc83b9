use serde_json::Value;

use super::{
    client::ApiClient,
    types::{ApiError, Credentials, LoginResponse, SessionResponse, UserResponse},
};
use crate::utils::storage as storage_utils;

impl ApiClient {
    /// Exchanges credentials for a token and keeps it for later requests.
    pub async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError> {
        let url = self.endpoint("/auth/login").await;
        let response: LoginResponse = self
            .execute(self.http_client().post(url).json(credentials))
            .await?;
        storage_utils::store_access_token(&response.access_token).map_err(ApiError::unknown)?;
        Ok(response)
    }

    pub async fn signup(&self, credentials: &Credentials) -> Result<UserResponse, ApiError> {
        let url = self.endpoint("/auth/signup").await;
        self.execute(self.http_client().post(url).json(credentials))
            .await
    }

    /// Local token is dropped even when the server call fails.
    pub async fn logout(&self) -> Result<(), ApiError> {
        let url = self.endpoint("/auth/logout").await;
        let result = self
            .execute::<Value>(self.with_auth(self.http_client().post(url)))
            .await;
        storage_utils::clear_access_token();
        result.map(|_| ())
    }

    pub async fn me(&self) -> Result<SessionResponse, ApiError> {
        if storage_utils::access_token().is_none() {
            return Err(ApiError {
                error: "Not signed in".into(),
                code: "UNAUTHORIZED".into(),
                details: None,
            });
        }
        let url = self.endpoint("/auth/me").await;
        self.execute(self.with_auth(self.http_client().get(url)))
            .await
    }
}
