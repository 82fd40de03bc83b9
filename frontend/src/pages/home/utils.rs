//! Client-side filtering of the public vehicle listing.
//!
//! Filter inputs are kept as the raw strings typed into the form. A blank or
//! non-numeric value means "no constraint"; every active predicate must match.

use crate::api::{Vehicle, VehicleCategory};

pub const ALL_CATEGORIES: &str = "all";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingFilters {
    pub category: String,
    pub manufacturer: String,
    pub year_from: String,
    pub year_to: String,
    pub price_max: String,
    pub search: String,
}

impl Default for ListingFilters {
    fn default() -> Self {
        Self {
            category: ALL_CATEGORIES.to_string(),
            manufacturer: String::new(),
            year_from: String::new(),
            year_to: String::new(),
            price_max: String::new(),
            search: String::new(),
        }
    }
}

impl ListingFilters {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        self.predicates().is_empty()
    }

    /// Active predicates in form order.
    pub fn predicates(&self) -> Vec<ListingPredicate> {
        let mut predicates = Vec::new();
        let category = self.category.trim();
        if !category.is_empty() && category != ALL_CATEGORIES {
            predicates.push(ListingPredicate::Category(VehicleCategory::from_raw(category)));
        }
        if let Some(needle) = non_blank(&self.manufacturer) {
            predicates.push(ListingPredicate::Manufacturer(needle));
        }
        if let Some(year) = parse_number::<i32>(&self.year_from) {
            predicates.push(ListingPredicate::YearFrom(year));
        }
        if let Some(year) = parse_number::<i32>(&self.year_to) {
            predicates.push(ListingPredicate::YearTo(year));
        }
        if let Some(price) = parse_number::<f64>(&self.price_max) {
            predicates.push(ListingPredicate::PriceMax(price));
        }
        if let Some(needle) = non_blank(&self.search) {
            predicates.push(ListingPredicate::Search(needle));
        }
        predicates
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ListingPredicate {
    Category(VehicleCategory),
    /// Lower-cased needle.
    Manufacturer(String),
    YearFrom(i32),
    YearTo(i32),
    PriceMax(f64),
    /// Lower-cased needle matched against title, description and model.
    Search(String),
}

impl ListingPredicate {
    pub fn matches(&self, vehicle: &Vehicle) -> bool {
        match self {
            ListingPredicate::Category(category) => vehicle.vehicle_type == *category,
            ListingPredicate::Manufacturer(needle) => contains_ci(&vehicle.manufacturer, needle),
            ListingPredicate::YearFrom(year) => vehicle.year >= *year,
            ListingPredicate::YearTo(year) => vehicle.year <= *year,
            ListingPredicate::PriceMax(price) => vehicle.price <= *price,
            ListingPredicate::Search(needle) => {
                contains_ci(&vehicle.title, needle)
                    || contains_ci(&vehicle.description, needle)
                    || contains_ci(&vehicle.model, needle)
            }
        }
    }
}

/// Keeps source order; predicates combine with logical AND.
pub fn apply_predicates(vehicles: &[Vehicle], predicates: &[ListingPredicate]) -> Vec<Vehicle> {
    vehicles
        .iter()
        .filter(|vehicle| predicates.iter().all(|predicate| predicate.matches(vehicle)))
        .cloned()
        .collect()
}

pub fn apply_filters(vehicles: &[Vehicle], filters: &ListingFilters) -> Vec<Vehicle> {
    apply_predicates(vehicles, &filters.predicates())
}

pub fn featured_count(vehicles: &[Vehicle]) -> usize {
    vehicles.iter().filter(|vehicle| vehicle.featured).count()
}

pub fn featured_summary(count: usize) -> Option<String> {
    (count > 0).then(|| format!("{} veículos em destaque disponíveis", count))
}

fn non_blank(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_lowercase())
}

fn parse_number<T: std::str::FromStr>(raw: &str) -> Option<T> {
    raw.trim().parse::<T>().ok()
}

fn contains_ci(haystack: &str, lowered_needle: &str) -> bool {
    haystack.to_lowercase().contains(lowered_needle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::VehicleStatus;
    use crate::test_support::helpers::vehicle;

    fn with_year(id: &str, year: i32) -> Vehicle {
        Vehicle {
            year,
            ..vehicle(id)
        }
    }

    fn fleet() -> Vec<Vehicle> {
        vec![
            Vehicle {
                title: "Marcopolo Paradiso G7".into(),
                vehicle_type: VehicleCategory::OnibusRodoviario,
                manufacturer: "Marcopolo".into(),
                model: "Paradiso 1200".into(),
                year: 2019,
                price: 450_000.0,
                featured: true,
                ..vehicle("v1")
            },
            Vehicle {
                title: "Volvo FH 540".into(),
                description: "Cavalo mecânico 6x4".into(),
                vehicle_type: VehicleCategory::Caminhao,
                manufacturer: "Volvo".into(),
                model: "FH 540".into(),
                year: 2021,
                price: 620_000.0,
                ..vehicle("v2")
            },
            Vehicle {
                vehicle_type: VehicleCategory::OnibusUrbano,
                year: 2015,
                price: 120_000.0,
                status: VehicleStatus::Disponivel,
                ..vehicle("v3")
            },
        ]
    }

    fn ids(vehicles: &[Vehicle]) -> Vec<&str> {
        vehicles.iter().map(|v| v.id.as_str()).collect()
    }

    #[test]
    fn year_from_keeps_only_newer_vehicles() {
        let vehicles = vec![with_year("a", 2015), with_year("b", 2020), with_year("c", 2022)];
        let filters = ListingFilters {
            year_from: "2018".into(),
            ..ListingFilters::default()
        };
        let years: Vec<i32> = apply_filters(&vehicles, &filters)
            .iter()
            .map(|v| v.year)
            .collect();
        assert_eq!(years, vec![2020, 2022]);
    }

    #[test]
    fn empty_filters_return_full_set_in_source_order() {
        let filters = ListingFilters::default();
        assert!(filters.is_empty());
        assert_eq!(ids(&apply_filters(&fleet(), &filters)), vec!["v1", "v2", "v3"]);
    }

    #[test]
    fn predicate_order_does_not_change_result() {
        let filters = ListingFilters {
            manufacturer: "o".into(),
            year_from: "2016".into(),
            price_max: "700000".into(),
            search: "a".into(),
            ..ListingFilters::default()
        };
        let forward = filters.predicates();
        let mut reversed = forward.clone();
        reversed.reverse();
        let mut rotated = forward.clone();
        rotated.rotate_left(1);

        let expected = apply_predicates(&fleet(), &forward);
        assert_eq!(apply_predicates(&fleet(), &reversed), expected);
        assert_eq!(apply_predicates(&fleet(), &rotated), expected);

        let staged = apply_predicates(
            &apply_predicates(&fleet(), &forward[..2]),
            &forward[2..],
        );
        assert_eq!(staged, expected);
    }

    #[test]
    fn manufacturer_and_search_are_case_insensitive_substrings() {
        let by_manufacturer = ListingFilters {
            manufacturer: "VOL".into(),
            ..ListingFilters::default()
        };
        assert_eq!(ids(&apply_filters(&fleet(), &by_manufacturer)), vec!["v2"]);

        let by_description = ListingFilters {
            search: "MECÂNICO".into(),
            ..ListingFilters::default()
        };
        assert_eq!(ids(&apply_filters(&fleet(), &by_description)), vec!["v2"]);

        let by_model = ListingFilters {
            search: "paradiso".into(),
            ..ListingFilters::default()
        };
        assert_eq!(ids(&apply_filters(&fleet(), &by_model)), vec!["v1"]);
    }

    #[test]
    fn category_all_means_no_constraint() {
        let all = ListingFilters {
            category: "all".into(),
            ..ListingFilters::default()
        };
        assert_eq!(apply_filters(&fleet(), &all).len(), 3);

        let trucks = ListingFilters {
            category: "caminhao".into(),
            ..ListingFilters::default()
        };
        assert_eq!(ids(&apply_filters(&fleet(), &trucks)), vec!["v2"]);
    }

    #[test]
    fn year_range_and_price_cap_combine() {
        let filters = ListingFilters {
            year_from: "2016".into(),
            year_to: "2020".into(),
            price_max: "500000".into(),
            ..ListingFilters::default()
        };
        assert_eq!(ids(&apply_filters(&fleet(), &filters)), vec!["v1"]);
    }

    #[test]
    fn non_numeric_inputs_count_as_empty() {
        let filters = ListingFilters {
            year_from: "dois mil".into(),
            year_to: " ".into(),
            price_max: "R$".into(),
            ..ListingFilters::default()
        };
        assert!(filters.is_empty());
        assert_eq!(apply_filters(&fleet(), &filters).len(), 3);
    }

    #[test]
    fn reset_restores_defaults() {
        let mut filters = ListingFilters {
            category: "caminhao".into(),
            search: "volvo".into(),
            ..ListingFilters::default()
        };
        filters.reset();
        assert_eq!(filters, ListingFilters::default());
    }

    #[test]
    fn featured_summary_only_when_any_featured() {
        assert_eq!(featured_count(&fleet()), 1);
        assert_eq!(
            featured_summary(1).as_deref(),
            Some("1 veículos em destaque disponíveis")
        );
        assert_eq!(featured_summary(0), None);
    }
}
