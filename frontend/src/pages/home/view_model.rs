use super::{
    repository::HomeRepository,
    utils::{apply_filters, featured_count, ListingFilters},
};
use crate::{
    api::{ApiClient, ApiError, Vehicle},
    state::toast::use_toast,
};
use leptos::*;
use std::rc::Rc;

#[derive(Clone, Copy)]
pub struct FeaturedVehiclesViewModel {
    pub vehicles_resource: Resource<(), Result<Vec<Vehicle>, ApiError>>,
    pub filters: RwSignal<ListingFilters>,
    pub filtered: Memo<Vec<Vehicle>>,
    pub featured: Memo<usize>,
}

impl FeaturedVehiclesViewModel {
    pub fn clear_filters(&self) {
        self.filters.update(|filters| filters.reset());
    }
}

pub fn use_featured_vehicles_view_model() -> FeaturedVehiclesViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = HomeRepository::new_with_client(Rc::new(api));
    let toast = use_toast();

    let vehicles_resource = create_resource(
        || (),
        move |_| {
            let repo = repository.clone();
            async move { repo.fetch_available_vehicles().await }
        },
    );

    let filters = create_rw_signal(ListingFilters::default());

    let loaded = move || {
        vehicles_resource
            .get()
            .and_then(Result::ok)
            .unwrap_or_default()
    };
    let filtered = create_memo(move |_| apply_filters(&loaded(), &filters.get()));
    let featured = create_memo(move |_| featured_count(&loaded()));

    create_effect(move |_| {
        if let Some(Err(err)) = vehicles_resource.get() {
            log::error!("failed to load vehicles: {}", err);
            toast.error("Erro ao carregar veículos");
        }
    });

    FeaturedVehiclesViewModel {
        vehicles_resource,
        filters,
        filtered,
        featured,
    }
}
