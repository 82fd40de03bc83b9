use super::{
    repository::AdminDashboardRepository,
    utils::{
        clock_seed, group_by_category, group_by_status, placeholder_monthly_views, DashboardStats,
        GroupCount,
    },
};
use crate::{
    api::{ApiClient, ApiError, Vehicle},
    state::toast::use_toast,
};
use leptos::*;
use std::rc::Rc;

#[derive(Clone, Copy)]
pub struct AdminDashboardViewModel {
    pub stock_resource: Resource<(), Result<Vec<Vehicle>, ApiError>>,
    pub stats: Memo<DashboardStats>,
    pub by_category: Memo<Vec<GroupCount>>,
    pub by_status: Memo<Vec<GroupCount>>,
}

pub fn use_admin_dashboard_view_model() -> AdminDashboardViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = AdminDashboardRepository::new_with_client(Rc::new(api));
    let toast = use_toast();
    let monthly_views = placeholder_monthly_views(clock_seed());

    let stock_resource = create_resource(
        || (),
        move |_| {
            let repo = repository.clone();
            async move { repo.fetch_stock().await }
        },
    );

    let stock = move || stock_resource.get().and_then(Result::ok).unwrap_or_default();
    let stats = create_memo(move |_| DashboardStats::from_vehicles(&stock(), monthly_views));
    let by_category = create_memo(move |_| group_by_category(&stock()));
    let by_status = create_memo(move |_| group_by_status(&stock()));

    create_effect(move |_| {
        if let Some(Err(err)) = stock_resource.get() {
            log::error!("failed to load dashboard stock: {}", err);
            toast.error("Erro ao carregar veículos");
        }
    });

    AdminDashboardViewModel {
        stock_resource,
        stats,
        by_category,
        by_status,
    }
}
