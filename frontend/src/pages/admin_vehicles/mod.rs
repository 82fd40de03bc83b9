use leptos::*;
use leptos_meta::Title;

pub mod components;
pub mod repository;
pub mod utils;
pub mod view_model;

mod panel;

pub use panel::AdminVehiclesPanel;

#[component]
pub fn AdminVehiclesPage() -> impl IntoView {
    view! {
        <Title text="Veículos | 3BUS Admin"/>
        <AdminVehiclesPanel />
    }
}
