use crate::api::{ApiClient, ApiError, Credentials, LoginResponse, SessionResponse, UserResponse};
use std::rc::Rc;

#[derive(Clone)]
pub struct AuthRepository {
    client: Rc<ApiClient>,
}

impl Default for AuthRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthRepository {
    pub fn new() -> Self {
        Self {
            client: Rc::new(ApiClient::new()),
        }
    }

    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn sign_in(&self, credentials: Credentials) -> Result<LoginResponse, ApiError> {
        self.client.login(&credentials).await
    }

    pub async fn sign_up(&self, credentials: Credentials) -> Result<UserResponse, ApiError> {
        self.client.signup(&credentials).await
    }

    pub async fn sign_out(&self) -> Result<(), ApiError> {
        self.client.logout().await
    }

    pub async fn session(&self) -> Result<SessionResponse, ApiError> {
        self.client.me().await
    }
}
