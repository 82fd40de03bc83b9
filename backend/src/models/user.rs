//! Models that represent back-office users, credentials and role metadata.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::types::UserId;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
/// Database representation of an account able to sign in to the back office.
pub struct User {
    /// Unique identifier for the user.
    #[schema(value_type = String, format = Uuid)]
    pub id: UserId,
    /// Login e-mail, unique and stored lower-cased.
    pub email: String,
    /// Argon2 hash of the user's password.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Role resolved by the session lookup.
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::Type, ToSchema, Default)]
#[sqlx(type_name = "TEXT", rename_all = "snake_case")]
/// Supported user roles stored in the database.
pub enum UserRole {
    /// Signed-up account waiting for an administrator to grant access.
    #[default]
    User,
    /// Administrator allowed into the back office.
    Admin,
}

impl UserRole {
    /// Returns the canonical snake_case representation of the role.
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::User => "user",
            UserRole::Admin => "admin",
        }
    }
}

impl Serialize for UserRole {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for UserRole {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.to_ascii_lowercase().as_str() {
            "user" => Ok(UserRole::User),
            "admin" => Ok(UserRole::Admin),
            _ => Err(serde::de::Error::unknown_variant(&s, &["user", "admin"])),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
/// E-mail and password pair used for both sign-in and sign-up.
pub struct Credentials {
    #[validate(email(code = "invalid_email"))]
    pub email: String,
    #[validate(length(min = 6, code = "password_too_short"))]
    pub password: String,
}

impl Credentials {
    /// Lower-cased, trimmed e-mail used as the lookup key.
    pub fn normalized_email(&self) -> String {
        self.email.trim().to_ascii_lowercase()
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
/// Payload used by administrators to grant or revoke back-office access.
pub struct UpdateRoleRequest {
    pub role: UserRole,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
/// Token and session data returned after a successful sign-in.
pub struct LoginResponse {
    pub access_token: String,
    pub user: UserResponse,
    pub is_admin: bool,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
/// Current session as seen by the client: who is signed in and whether they are an admin.
pub struct SessionResponse {
    pub user: UserResponse,
    pub is_admin: bool,
}

impl From<User> for SessionResponse {
    fn from(user: User) -> Self {
        let is_admin = user.is_admin();
        SessionResponse {
            user: user.into(),
            is_admin,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
/// Public-facing representation of a user returned by the API.
pub struct UserResponse {
    pub id: String,
    pub email: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        UserResponse {
            id: user.id.to_string(),
            email: user.email,
            role: user.role.as_str().to_string(),
            created_at: user.created_at,
        }
    }
}

impl User {
    /// Constructs a new user with a freshly generated identifier.
    pub fn new(email: String, password_hash: String, role: UserRole) -> Self {
        let now = Utc::now();
        Self {
            id: UserId::new(),
            email,
            password_hash,
            role,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self.role, UserRole::Admin)
    }
}
