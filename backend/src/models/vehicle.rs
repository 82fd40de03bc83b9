//! Vehicle listings: the single entity sold through the site.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;
use std::str::FromStr;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::types::VehicleId;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, sqlx::Type, ToSchema,
)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "TEXT", rename_all = "snake_case")]
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
}

impl fmt::Display for VehicleCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VehicleCategory {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or(())
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, sqlx::Type, ToSchema,
)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "TEXT", rename_all = "snake_case")]
pub enum VehicleStatus {
    /// Visible on the public site.
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

    pub fn is_public(&self) -> bool {
        matches!(self, VehicleStatus::Disponivel)
    }
}

impl fmt::Display for VehicleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VehicleStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Vehicle {
    #[schema(value_type = String, format = Uuid)]
    pub id: VehicleId,
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
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Vehicle {
    pub fn from_payload(payload: VehiclePayload) -> Self {
        let now = Utc::now();
        let mut vehicle = Self {
            id: VehicleId::new(),
            title: String::new(),
            description: String::new(),
            vehicle_type: VehicleCategory::default(),
            manufacturer: String::new(),
            model: String::new(),
            year: 0,
            mileage: 0,
            price: 0.0,
            location: String::new(),
            featured: false,
            status: VehicleStatus::default(),
            seats: None,
            fuel_type: None,
            transmission: None,
            color: None,
            images: None,
            created_at: now,
            updated_at: now,
        };
        vehicle.apply(payload);
        vehicle.updated_at = now;
        vehicle
    }

    /// Replaces every writable field with the payload's values.
    pub fn apply(&mut self, payload: VehiclePayload) {
        let payload = payload.normalized();
        self.title = payload.title;
        self.description = payload.description;
        self.vehicle_type = payload.vehicle_type;
        self.manufacturer = payload.manufacturer;
        self.model = payload.model;
        self.year = payload.year;
        self.mileage = payload.mileage;
        self.price = payload.price;
        self.location = payload.location;
        self.featured = payload.featured;
        self.status = payload.status;
        self.seats = payload.seats;
        self.fuel_type = payload.fuel_type;
        self.transmission = payload.transmission;
        self.color = payload.color;
        self.images = payload.images;
        self.updated_at = Utc::now();
    }
}

/// Full writable field set; used for inserts and whole-record updates alike.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct VehiclePayload {
    #[validate(custom(function = "crate::validation::rules::validate_required_text"))]
    pub title: String,
    #[validate(custom(function = "crate::validation::rules::validate_required_text"))]
    pub description: String,
    #[serde(default)]
    pub vehicle_type: VehicleCategory,
    #[validate(custom(function = "crate::validation::rules::validate_required_text"))]
    pub manufacturer: String,
    #[validate(custom(function = "crate::validation::rules::validate_required_text"))]
    pub model: String,
    #[validate(range(min = 1900, max = 2100, code = "year_out_of_range"))]
    pub year: i32,
    #[validate(range(min = 0, code = "mileage_negative"))]
    pub mileage: i32,
    #[serde(default)]
    #[validate(range(min = 0.0, code = "price_negative"))]
    pub price: f64,
    #[validate(custom(function = "crate::validation::rules::validate_required_text"))]
    pub location: String,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub status: VehicleStatus,
    #[serde(default)]
    #[validate(range(min = 0, code = "seats_negative"))]
    pub seats: Option<i32>,
    #[serde(default)]
    pub fuel_type: Option<String>,
    #[serde(default)]
    pub transmission: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    #[validate(custom(function = "crate::validation::rules::validate_image_urls"))]
    pub images: Option<Vec<String>>,
}

impl VehiclePayload {
    /// Trims text and turns blank optional fields into `None`.
    pub fn normalized(self) -> Self {
        Self {
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            manufacturer: self.manufacturer.trim().to_string(),
            model: self.model.trim().to_string(),
            location: self.location.trim().to_string(),
            fuel_type: non_blank(self.fuel_type),
            transmission: non_blank(self.transmission),
            color: non_blank(self.color),
            images: self
                .images
                .map(|urls| {
                    urls.into_iter()
                        .map(|url| url.trim().to_string())
                        .collect::<Vec<_>>()
                })
                .filter(|urls| !urls.is_empty()),
            ..self
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Row ordering used by the two listing flavours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VehicleOrdering {
    /// Public listing: featured first, then newest.
    FeaturedFirst,
    /// Back-office listing: newest first.
    NewestFirst,
}

impl VehicleOrdering {
    pub fn order_by_clause(&self) -> &'static str {
        match self {
            VehicleOrdering::FeaturedFirst => "featured DESC, created_at DESC",
            VehicleOrdering::NewestFirst => "created_at DESC",
        }
    }
}

/// Selection passed to the repository: optional status equality plus ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VehicleQuery {
    pub status: Option<VehicleStatus>,
    pub ordering: VehicleOrdering,
}

impl VehicleQuery {
    pub fn public_listing() -> Self {
        Self {
            status: Some(VehicleStatus::Disponivel),
            ordering: VehicleOrdering::FeaturedFirst,
        }
    }

    pub fn admin_listing(status: Option<VehicleStatus>) -> Self {
        Self {
            status,
            ordering: VehicleOrdering::NewestFirst,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct AdminVehicleListQuery {
    /// Optional status filter (`disponivel`, `vendido`, `reservado`).
    pub status: Option<String>,
}


#[cfg(test)]
mod tests {
    use super::fixtures::payload;
    use super::*;

    #[test]
    fn enums_use_portuguese_snake_case_wire_values() {
        assert_eq!(
            serde_json::to_string(&VehicleCategory::OnibusRodoviario).unwrap(),
            "\"onibus_rodoviario\""
        );
        assert_eq!(
            serde_json::to_string(&VehicleStatus::Disponivel).unwrap(),
            "\"disponivel\""
        );
        assert!(serde_json::from_str::<VehicleStatus>("\"available\"").is_err());
    }

    #[test]
    fn from_str_is_case_insensitive() {
        assert_eq!(
            "CAMINHAO".parse::<VehicleCategory>(),
            Ok(VehicleCategory::Caminhao)
        );
        assert_eq!(" vendido ".parse::<VehicleStatus>(), Ok(VehicleStatus::Vendido));
        assert!("all".parse::<VehicleStatus>().is_err());
    }

    #[test]
    fn only_available_vehicles_are_public() {
        assert!(VehicleStatus::Disponivel.is_public());
        assert!(!VehicleStatus::Vendido.is_public());
        assert!(!VehicleStatus::Reservado.is_public());
    }

    #[test]
    fn payload_validation_accepts_complete_form() {
        assert!(payload().validate().is_ok());
    }

    #[test]
    fn payload_validation_rejects_blank_required_fields() {
        let mut blank = payload();
        blank.title = "   ".into();
        blank.location = String::new();
        let errors = blank.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("title"));
        assert!(fields.contains_key("location"));
        assert!(!fields.contains_key("model"));
    }

    #[test]
    fn payload_validation_rejects_out_of_range_numbers() {
        let mut bad = payload();
        bad.year = 1850;
        bad.mileage = -10;
        bad.price = -1.0;
        let errors = bad.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("year"));
        assert!(fields.contains_key("mileage"));
        assert!(fields.contains_key("price"));
    }

    #[test]
    fn payload_defaults_fill_optional_fields() {
        let json = serde_json::json!({
            "title": "Volvo FH 540",
            "description": "Cavalo mecânico",
            "manufacturer": "Volvo",
            "model": "FH 540",
            "year": 2021,
            "mileage": 150000,
            "location": "Curitiba, PR"
        });
        let parsed: VehiclePayload = serde_json::from_value(json).unwrap();
        assert_eq!(parsed.vehicle_type, VehicleCategory::OnibusUrbano);
        assert_eq!(parsed.status, VehicleStatus::Disponivel);
        assert_eq!(parsed.price, 0.0);
        assert!(!parsed.featured);
        assert!(parsed.images.is_none());
    }

    #[test]
    fn normalized_trims_text_and_drops_blank_optionals() {
        let mut raw = payload();
        raw.title = "  Volvo B270F  ".into();
        raw.color = Some("  ".into());
        raw.images = Some(vec![]);
        let normalized = raw.normalized();
        assert_eq!(normalized.title, "Volvo B270F");
        assert!(normalized.color.is_none());
        assert!(normalized.images.is_none());
    }

    #[test]
    fn apply_replaces_every_writable_field() {
        let mut vehicle = Vehicle::from_payload(payload());
        let created_at = vehicle.created_at;
        let id = vehicle.id;

        let mut update = payload();
        update.status = VehicleStatus::Vendido;
        update.featured = false;
        update.seats = None;
        vehicle.apply(update);

        assert_eq!(vehicle.id, id);
        assert_eq!(vehicle.created_at, created_at);
        assert_eq!(vehicle.status, VehicleStatus::Vendido);
        assert!(!vehicle.featured);
        assert!(vehicle.seats.is_none());
    }

    #[test]
    fn orderings_match_listing_rules() {
        assert_eq!(
            VehicleQuery::public_listing().ordering.order_by_clause(),
            "featured DESC, created_at DESC"
        );
        assert_eq!(
            VehicleQuery::public_listing().status,
            Some(VehicleStatus::Disponivel)
        );
        let admin = VehicleQuery::admin_listing(None);
        assert_eq!(admin.ordering.order_by_clause(), "created_at DESC");
        assert!(admin.status.is_none());
    }
}
