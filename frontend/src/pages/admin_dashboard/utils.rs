use crate::api::{Vehicle, VehicleStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthlyPoint {
    pub month: &'static str,
    pub sales: u32,
    pub views: u32,
}

/// Hard-coded sample series; there is no persisted sales history.
pub const MONTHLY_SAMPLE: [MonthlyPoint; 6] = [
    MonthlyPoint { month: "Jan", sales: 4, views: 450 },
    MonthlyPoint { month: "Fev", sales: 3, views: 380 },
    MonthlyPoint { month: "Mar", sales: 6, views: 520 },
    MonthlyPoint { month: "Abr", sales: 5, views: 490 },
    MonthlyPoint { month: "Mai", sales: 7, views: 610 },
    MonthlyPoint { month: "Jun", sales: 8, views: 680 },
];

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardStats {
    pub total: usize,
    pub available: usize,
    pub sold: usize,
    pub total_value: f64,
    pub monthly_views: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupCount {
    pub label: &'static str,
    pub count: usize,
}

impl DashboardStats {
    pub fn from_vehicles(vehicles: &[Vehicle], monthly_views: u32) -> Self {
        let count_status = |status: VehicleStatus| {
            vehicles
                .iter()
                .filter(|vehicle| vehicle.status == status)
                .count()
        };
        Self {
            total: vehicles.len(),
            available: count_status(VehicleStatus::Disponivel),
            sold: count_status(VehicleStatus::Vendido),
            total_value: vehicles.iter().map(|vehicle| vehicle.price).sum(),
            monthly_views,
        }
    }
}

/// Placeholder metric in `1000..6000`.
pub fn placeholder_monthly_views(seed: u32) -> u32 {
    1000 + seed % 5000
}

pub fn clock_seed() -> u32 {
    chrono::Utc::now().timestamp_subsec_nanos()
}

fn count_by(labels: impl Iterator<Item = &'static str>) -> Vec<GroupCount> {
    let mut groups: Vec<GroupCount> = Vec::new();
    for label in labels {
        match groups.iter_mut().find(|group| group.label == label) {
            Some(group) => group.count += 1,
            None => groups.push(GroupCount { label, count: 1 }),
        }
    }
    groups
}

/// Counts per category label in first-seen order.
pub fn group_by_category(vehicles: &[Vehicle]) -> Vec<GroupCount> {
    count_by(vehicles.iter().map(|vehicle| vehicle.vehicle_type.label()))
}

pub fn group_by_status(vehicles: &[Vehicle]) -> Vec<GroupCount> {
    count_by(vehicles.iter().map(|vehicle| vehicle.status.label()))
}

/// Bar width as a percentage of the largest value.
pub fn share_percent(value: usize, max: usize) -> u32 {
    if max == 0 {
        0
    } else {
        ((value as f64 / max as f64) * 100.0).round() as u32
    }
}
