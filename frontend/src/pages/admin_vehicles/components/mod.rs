pub mod filters;
pub mod form_dialog;
pub mod list;

pub use filters::AdminVehicleFilters;
pub use form_dialog::VehicleFormDialog;
pub use list::VehicleList;
