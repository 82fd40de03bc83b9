use super::{
    components::{AdminVehicleFilters, VehicleFormDialog, VehicleList},
    utils::{empty_message, total_label},
    view_model::{use_admin_vehicles_view_model, AdminVehiclesViewModel, DELETE_CONFIRMATION},
};
use crate::components::{
    confirm_dialog::ConfirmDialog,
    layout::{AdminLayout, LoadingSpinner},
};
use leptos::*;

#[component]
pub fn AdminVehiclesPanel() -> impl IntoView {
    let vm = use_admin_vehicles_view_model();
    view! {
        <AdminLayout>
            <VehicleManagement vm=vm />
        </AdminLayout>
    }
}

#[component]
fn VehicleManagement(vm: AdminVehiclesViewModel) -> impl IntoView {
    let vehicles = Signal::derive(move || vm.filtered.get());
    let empty = Signal::derive(move || empty_message(vm.filters.with(|f| f.is_active())));
    let confirm_open = Signal::derive(move || vm.pending_delete.with(Option::is_some));
    let delete_pending = vm.delete_action.pending();

    view! {
        <div class="space-y-6">
            <div class="flex flex-wrap items-center justify-between gap-4">
                <div>
                    <h1 class="text-3xl font-bold text-fg">"Gerenciar Veículos"</h1>
                    <p class="text-fg-muted">{move || total_label(vm.filtered.with(Vec::len))}</p>
                </div>
                <button
                    type="button"
                    class="px-4 py-2 rounded-md text-sm font-semibold bg-action-primary-bg text-action-primary-text hover:bg-action-primary-bg-hover"
                    on:click=move |_| vm.open_new()
                >
                    "Novo Veículo"
                </button>
            </div>
            <AdminVehicleFilters filters=vm.filters />
            <Transition fallback=move || view! {
                <div class="text-center text-fg-muted">
                    <LoadingSpinner />
                    <p>"Carregando..."</p>
                </div>
            }>
                {move || vm.vehicles_resource.get().map(|_| view! {
                    <VehicleList
                        vehicles=vehicles
                        empty_message=empty
                        on_edit=Callback::new(move |vehicle| vm.open_edit(&vehicle))
                        on_delete=Callback::new(move |id| vm.request_delete(id))
                    />
                })}
            </Transition>
            <VehicleFormDialog vm=vm />
            <ConfirmDialog
                is_open=confirm_open
                title="Excluir veículo"
                message=DELETE_CONFIRMATION.to_string()
                on_confirm=Callback::new(move |_| vm.confirm_delete())
                on_cancel=Callback::new(move |_| vm.cancel_delete())
                confirm_label="Excluir"
                confirm_disabled=Signal::derive(move || delete_pending.get())
                destructive=true
            />
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::{admin_user, provide_auth};
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn renders_heading_total_and_new_button() {
        let html = render_to_string(|| {
            provide_auth(Some(admin_user()));
            view! { <AdminVehiclesPanel /> }
        });
        assert!(html.contains("Gerenciar Veículos"));
        assert!(html.contains("Total de 0 veículo(s)"));
        assert!(html.contains("Novo Veículo"));
        assert!(html.contains("Filtros"));
        assert!(html.contains("Buscar por título, marca ou modelo..."));
    }
}
