use crate::{
    api::{VehicleCategory, VehicleStatus},
    pages::admin_vehicles::utils::{AdminFilters, ALL},
};
use leptos::*;

#[component]
pub fn AdminVehicleFilters(filters: RwSignal<AdminFilters>) -> impl IntoView {
    let input_class = "w-full rounded-md border border-border bg-surface-elevated px-3 py-2 text-sm text-fg";
    view! {
        <div class="rounded-lg border border-border bg-surface-elevated p-4 space-y-3">
            <h3 class="text-sm font-semibold text-fg">"Filtros"</h3>
            <div class="grid grid-cols-1 md:grid-cols-3 gap-3">
                <input
                    class=input_class
                    placeholder="Buscar por título, marca ou modelo..."
                    prop:value=move || filters.get().search
                    on:input=move |ev| filters.update(|f| f.search = event_target_value(&ev))
                />
                <select
                    class=input_class
                    aria-label="Tipo"
                    prop:value=move || filters.get().category
                    on:change=move |ev| filters.update(|f| f.category = event_target_value(&ev))
                >
                    <option value=ALL>"Todos os tipos"</option>
                    {VehicleCategory::ALL
                        .iter()
                        .map(|c| view! { <option value=c.as_str()>{c.label()}</option> })
                        .collect_view()}
                </select>
                <select
                    class=input_class
                    aria-label="Status"
                    prop:value=move || filters.get().status
                    on:change=move |ev| filters.update(|f| f.status = event_target_value(&ev))
                >
                    <option value=ALL>"Todos os status"</option>
                    {VehicleStatus::ALL
                        .iter()
                        .map(|s| view! { <option value=s.as_str()>{s.label()}</option> })
                        .collect_view()}
                </select>
            </div>
        </div>
    }
}
