use crate::api::{Vehicle, VehicleCategory, VehiclePayload, VehicleStatus};
use chrono::Datelike;

pub const ALL: &str = "all";
pub const DEFAULT_FUEL: &str = "Diesel";
pub const DEFAULT_TRANSMISSION: &str = "Manual";

/// Dialog state. Numeric inputs stay as typed until submit.
#[derive(Debug, Clone, PartialEq)]
pub struct VehicleFormState {
    pub title: String,
    pub description: String,
    pub vehicle_type: VehicleCategory,
    pub manufacturer: String,
    pub model: String,
    pub year: String,
    pub mileage: String,
    pub price: String,
    pub location: String,
    pub featured: bool,
    pub status: VehicleStatus,
    pub seats: String,
    pub fuel_type: String,
    pub transmission: String,
    pub color: String,
    pub images: Option<Vec<String>>,
}

impl Default for VehicleFormState {
    fn default() -> Self {
        Self::with_year(chrono::Utc::now().year())
    }
}

impl VehicleFormState {
    pub fn with_year(year: i32) -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            vehicle_type: VehicleCategory::OnibusUrbano,
            manufacturer: String::new(),
            model: String::new(),
            year: year.to_string(),
            mileage: "0".into(),
            price: "0".into(),
            location: String::new(),
            featured: false,
            status: VehicleStatus::Disponivel,
            seats: "0".into(),
            fuel_type: DEFAULT_FUEL.into(),
            transmission: DEFAULT_TRANSMISSION.into(),
            color: String::new(),
            images: None,
        }
    }

    pub fn from_vehicle(vehicle: &Vehicle) -> Self {
        Self {
            title: vehicle.title.clone(),
            description: vehicle.description.clone(),
            vehicle_type: vehicle.vehicle_type,
            manufacturer: vehicle.manufacturer.clone(),
            model: vehicle.model.clone(),
            year: vehicle.year.to_string(),
            mileage: vehicle.mileage.to_string(),
            price: format_price_input(vehicle.price),
            location: vehicle.location.clone(),
            featured: vehicle.featured,
            status: vehicle.status,
            seats: vehicle.seats.unwrap_or(0).to_string(),
            fuel_type: vehicle
                .fuel_type
                .clone()
                .unwrap_or_else(|| DEFAULT_FUEL.into()),
            transmission: vehicle
                .transmission
                .clone()
                .unwrap_or_else(|| DEFAULT_TRANSMISSION.into()),
            color: vehicle.color.clone().unwrap_or_default(),
            images: vehicle.images.clone(),
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Presence check on the starred fields; the backend owns range validation.
    /// Returns the labels of the missing fields.
    pub fn validate_required(&self) -> Result<VehiclePayload, Vec<&'static str>> {
        let mut missing = Vec::new();
        let mut require = |value: &str, label: &'static str| {
            if value.trim().is_empty() {
                missing.push(label);
            }
        };
        require(&self.title, "Título");
        require(&self.description, "Descrição");
        require(&self.manufacturer, "Fabricante");
        require(&self.model, "Modelo");
        require(&self.location, "Localização");

        let year = self.year.trim().parse::<i32>().ok();
        if year.is_none() {
            missing.push("Ano");
        }
        let mileage = self.mileage.trim().parse::<i32>().ok();
        if mileage.is_none() {
            missing.push("Km");
        }

        match (year, mileage) {
            (Some(year), Some(mileage)) if missing.is_empty() => {
                Ok(self.to_payload(year, mileage))
            }
            _ => Err(missing),
        }
    }

    fn to_payload(&self, year: i32, mileage: i32) -> VehiclePayload {
        VehiclePayload {
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            vehicle_type: self.vehicle_type,
            manufacturer: self.manufacturer.trim().to_string(),
            model: self.model.trim().to_string(),
            year,
            mileage,
            price: self.price.trim().parse::<f64>().unwrap_or(0.0),
            location: self.location.trim().to_string(),
            featured: self.featured,
            status: self.status,
            seats: self.seats.trim().parse::<i32>().ok(),
            fuel_type: optional_text(&self.fuel_type),
            transmission: optional_text(&self.transmission),
            color: optional_text(&self.color),
            images: self.images.clone(),
        }
    }
}

fn optional_text(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn format_price_input(price: f64) -> String {
    if price.fract() == 0.0 {
        format!("{:.0}", price)
    } else {
        price.to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminFilters {
    pub search: String,
    pub category: String,
    pub status: String,
}

impl Default for AdminFilters {
    fn default() -> Self {
        Self {
            search: String::new(),
            category: ALL.into(),
            status: ALL.into(),
        }
    }
}

impl AdminFilters {
    /// Status is applied by the store listing; `None` means every status.
    pub fn status_filter(&self) -> Option<VehicleStatus> {
        match self.status.trim() {
            "" | ALL => None,
            raw => Some(VehicleStatus::from_raw(raw)),
        }
    }

    pub fn is_active(&self) -> bool {
        *self != Self::default()
    }

    /// Search over title, manufacturer and model plus the category select.
    pub fn apply(&self, vehicles: &[Vehicle]) -> Vec<Vehicle> {
        let needle = self.search.trim().to_lowercase();
        let category = match self.category.trim() {
            "" | ALL => None,
            raw => Some(VehicleCategory::from_raw(raw)),
        };
        vehicles
            .iter()
            .filter(|vehicle| category.map_or(true, |c| vehicle.vehicle_type == c))
            .filter(|vehicle| {
                needle.is_empty()
                    || [&vehicle.title, &vehicle.manufacturer, &vehicle.model]
                        .iter()
                        .any(|field| field.to_lowercase().contains(&needle))
            })
            .cloned()
            .collect()
    }
}

pub fn total_label(count: usize) -> String {
    format!("Total de {} veículo(s)", count)
}

pub fn empty_message(filters_active: bool) -> &'static str {
    if filters_active {
        "Nenhum veículo encontrado com os filtros selecionados."
    } else {
        "Nenhum veículo cadastrado. Clique em \"Novo Veículo\" para adicionar."
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::vehicle;

    fn filled_form() -> VehicleFormState {
        VehicleFormState {
            title: "Scania R450".into(),
            description: "Cavalo mecânico".into(),
            vehicle_type: VehicleCategory::Caminhao,
            manufacturer: "Scania".into(),
            model: "R450".into(),
            mileage: "410000".into(),
            price: "520000".into(),
            location: "Campinas, SP".into(),
            ..VehicleFormState::with_year(2020)
        }
    }

    #[test]
    fn defaults_match_new_vehicle_dialog() {
        let form = VehicleFormState::with_year(2026);
        assert_eq!(form.year, "2026");
        assert_eq!(form.mileage, "0");
        assert_eq!(form.price, "0");
        assert_eq!(form.seats, "0");
        assert_eq!(form.vehicle_type, VehicleCategory::OnibusUrbano);
        assert_eq!(form.status, VehicleStatus::Disponivel);
        assert_eq!(form.fuel_type, "Diesel");
        assert_eq!(form.transmission, "Manual");
        assert!(form.color.is_empty());
        assert!(!form.featured);
    }

    #[test]
    fn blank_required_field_blocks_payload() {
        let mut form = filled_form();
        form.manufacturer = "   ".into();
        form.location.clear();
        assert_eq!(
            form.validate_required().unwrap_err(),
            vec!["Fabricante", "Localização"]
        );
    }

    #[test]
    fn unparsable_year_or_mileage_is_missing() {
        let mut form = filled_form();
        form.year = "".into();
        form.mileage = "muito".into();
        assert_eq!(form.validate_required().unwrap_err(), vec!["Ano", "Km"]);
    }

    #[test]
    fn complete_form_builds_trimmed_payload() {
        let mut form = filled_form();
        form.title = "  Scania R450  ".into();
        form.color = " ".into();
        let payload = form.validate_required().unwrap();
        assert_eq!(payload.title, "Scania R450");
        assert_eq!(payload.year, 2020);
        assert_eq!(payload.mileage, 410_000);
        assert_eq!(payload.price, 520_000.0);
        assert_eq!(payload.seats, Some(0));
        assert_eq!(payload.fuel_type.as_deref(), Some("Diesel"));
        assert_eq!(payload.color, None);
    }

    #[test]
    fn blank_price_defaults_to_zero() {
        let mut form = filled_form();
        form.price = "".into();
        assert_eq!(form.validate_required().unwrap().price, 0.0);
    }

    #[test]
    fn editing_maps_missing_optionals_to_defaults() {
        let existing = Vehicle {
            seats: None,
            fuel_type: None,
            transmission: None,
            color: None,
            price: 180_000.0,
            ..vehicle("v1")
        };
        let form = VehicleFormState::from_vehicle(&existing);
        assert_eq!(form.seats, "0");
        assert_eq!(form.fuel_type, "Diesel");
        assert_eq!(form.transmission, "Manual");
        assert_eq!(form.color, "");
        assert_eq!(form.price, "180000");
        assert_eq!(form.year, "2018");
    }

    #[test]
    fn admin_filters_search_title_manufacturer_and_model() {
        let vehicles = vec![
            Vehicle {
                manufacturer: "Volvo".into(),
                title: "Caminhão pesado".into(),
                model: "FH".into(),
                vehicle_type: VehicleCategory::Caminhao,
                ..vehicle("v1")
            },
            vehicle("v2"),
        ];
        let by_manufacturer = AdminFilters {
            search: "volvo".into(),
            ..AdminFilters::default()
        };
        assert_eq!(by_manufacturer.apply(&vehicles).len(), 1);

        let by_model = AdminFilters {
            search: "of-17".into(),
            ..AdminFilters::default()
        };
        assert_eq!(by_model.apply(&vehicles)[0].id, "v2");

        let by_category = AdminFilters {
            category: "caminhao".into(),
            ..AdminFilters::default()
        };
        assert_eq!(by_category.apply(&vehicles)[0].id, "v1");

        assert_eq!(AdminFilters::default().apply(&vehicles).len(), 2);
    }

    #[test]
    fn status_filter_maps_all_to_none() {
        assert_eq!(AdminFilters::default().status_filter(), None);
        let sold = AdminFilters {
            status: "vendido".into(),
            ..AdminFilters::default()
        };
        assert_eq!(sold.status_filter(), Some(VehicleStatus::Vendido));
        assert!(sold.is_active());
        assert!(!AdminFilters::default().is_active());
    }

    #[test]
    fn labels_for_totals_and_empty_states() {
        assert_eq!(total_label(3), "Total de 3 veículo(s)");
        assert!(empty_message(false).starts_with("Nenhum veículo cadastrado"));
        assert_eq!(
            empty_message(true),
            "Nenhum veículo encontrado com os filtros selecionados."
        );
    }
}
