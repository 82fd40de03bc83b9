pub mod distribution;
pub mod monthly;
pub mod stat_card;

pub use distribution::DistributionPanel;
pub use monthly::MonthlyPerformance;
pub use stat_card::StatCard;
