use leptos::*;
use leptos_meta::Title;

pub mod components;
pub mod repository;
pub mod utils;
pub mod view_model;

mod panel;

pub use panel::{FeaturedVehicles, HomePanel};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="3BUS | Ônibus e Caminhões Seminovos"/>
        <HomePanel />
    }
}
