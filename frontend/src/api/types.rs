use chrono::{DateTime, Utc};
use leptos::*;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub email: String,
    pub role: String,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub user: UserResponse,
    #[serde(default)]
    pub is_admin: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionResponse {
    pub user: UserResponse,
    #[serde(default)]
    pub is_admin: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VehicleCategory {
    #[default]
    OnibusUrbano,
    OnibusRodoviario,
    Caminhao,
    Especial,
}

impl VehicleCategory {
    pub const ALL: [VehicleCategory; 4] = [
        VehicleCategory::OnibusUrbano,
        VehicleCategory::OnibusRodoviario,
        VehicleCategory::Caminhao,
        VehicleCategory::Especial,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleCategory::OnibusUrbano => "onibus_urbano",
            VehicleCategory::OnibusRodoviario => "onibus_rodoviario",
            VehicleCategory::Caminhao => "caminhao",
            VehicleCategory::Especial => "especial",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            VehicleCategory::OnibusUrbano => "Ônibus Urbano",
            VehicleCategory::OnibusRodoviario => "Ônibus Rodoviário",
            VehicleCategory::Caminhao => "Caminhão",
            VehicleCategory::Especial => "Especial",
        }
    }

    /// Unrecognised values fall into `Especial`.
    pub fn from_raw(raw: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == raw.trim())
            .unwrap_or(VehicleCategory::Especial)
    }
}

impl<'de> Deserialize<'de> for VehicleCategory {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::from_raw(&raw))
    }
}

impl fmt::Display for VehicleCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VehicleStatus {
    #[default]
    Disponivel,
    Vendido,
    Reservado,
}

impl VehicleStatus {
    pub const ALL: [VehicleStatus; 3] = [
        VehicleStatus::Disponivel,
        VehicleStatus::Vendido,
        VehicleStatus::Reservado,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleStatus::Disponivel => "disponivel",
            VehicleStatus::Vendido => "vendido",
            VehicleStatus::Reservado => "reservado",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            VehicleStatus::Disponivel => "Disponível",
            VehicleStatus::Vendido => "Vendido",
            VehicleStatus::Reservado => "Reservado",
        }
    }

    /// Unrecognised values are read as `Reservado`, which keeps them off the public site.
    pub fn from_raw(raw: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == raw.trim())
            .unwrap_or(VehicleStatus::Reservado)
    }
}

impl<'de> Deserialize<'de> for VehicleStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::from_raw(&raw))
    }
}

impl fmt::Display for VehicleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: String,
    pub title: String,
    pub description: String,
    pub vehicle_type: VehicleCategory,
    pub manufacturer: String,
    pub model: String,
    pub year: i32,
    pub mileage: i32,
    pub price: f64,
    pub location: String,
    #[serde(default)]
    pub featured: bool,
    pub status: VehicleStatus,
    #[serde(default)]
    pub seats: Option<i32>,
    #[serde(default)]
    pub fuel_type: Option<String>,
    #[serde(default)]
    pub transmission: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub images: Option<Vec<String>>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Vehicle {
    pub fn cover_image(&self) -> &str {
        self.images
            .as_ref()
            .and_then(|images| images.first())
            .map(String::as_str)
            .filter(|url| !url.trim().is_empty())
            .unwrap_or("/placeholder.svg")
    }
}

/// Full writable record; inserts and updates both send every field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehiclePayload {
    pub title: String,
    pub description: String,
    pub vehicle_type: VehicleCategory,
    pub manufacturer: String,
    pub model: String,
    pub year: i32,
    pub mileage: i32,
    pub price: f64,
    pub location: String,
    pub featured: bool,
    pub status: VehicleStatus,
    pub seats: Option<i32>,
    pub fuel_type: Option<String>,
    pub transmission: Option<String>,
    pub color: Option<String>,
    pub images: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, thiserror::Error)]
#[error("{error}")]
pub struct ApiError {
    pub error: String,
    pub code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl From<ApiError> for String {
    fn from(error: ApiError) -> Self {
        error.error
    }
}

impl IntoView for ApiError {
    fn into_view(self) -> View {
        self.error.into_view()
    }
}

impl ApiError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "VALIDATION_ERROR".to_string(),
            details: None,
        }
    }

    pub fn unknown(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "UNKNOWN".to_string(),
            details: None,
        }
    }

    pub fn request_failed(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "REQUEST_FAILED".to_string(),
            details: None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.code == "UNAUTHORIZED"
    }

    /// Field-level messages carried by a backend validation error.
    pub fn validation_messages(&self) -> Vec<String> {
        self.details
            .as_ref()
            .and_then(|details| details.get("errors"))
            .and_then(Value::as_array)
            .map(|errors| {
                errors
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default()
    }
}
