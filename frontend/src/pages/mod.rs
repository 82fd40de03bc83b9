pub mod admin_dashboard;
pub mod admin_vehicles;
pub mod auth;
pub mod home;

pub use admin_dashboard::AdminDashboardPage;
pub use admin_vehicles::AdminVehiclesPage;
pub use auth::AuthPage;
pub use home::HomePage;
