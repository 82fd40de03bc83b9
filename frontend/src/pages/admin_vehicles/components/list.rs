use crate::{
    api::{Vehicle, VehicleStatus},
    components::empty_state::EmptyState,
    utils::format::{format_brl, format_integer},
};
use leptos::*;

fn status_badge_class(status: VehicleStatus) -> &'static str {
    match status {
        VehicleStatus::Disponivel => "px-2 py-0.5 rounded text-xs font-semibold bg-status-success-bg text-status-success-text",
        VehicleStatus::Reservado => "px-2 py-0.5 rounded text-xs font-semibold bg-status-warning-bg text-status-warning-text",
        VehicleStatus::Vendido => "px-2 py-0.5 rounded text-xs font-semibold bg-surface-muted text-fg-muted",
    }
}

#[component]
pub fn VehicleList(
    vehicles: Signal<Vec<Vehicle>>,
    #[prop(into)] empty_message: MaybeSignal<&'static str>,
    on_edit: Callback<Vehicle>,
    on_delete: Callback<String>,
) -> impl IntoView {
    view! {
        <Show
            when=move || !vehicles.with(Vec::is_empty)
            fallback=move || view! { <EmptyState title=empty_message.get() /> }
        >
            <div class="space-y-4">
                <For
                    each=move || vehicles.get()
                    key=|vehicle| (vehicle.id.clone(), vehicle.updated_at)
                    children=move |vehicle| {
                        let for_edit = vehicle.clone();
                        let id = vehicle.id.clone();
                        view! {
                            <article class="rounded-lg border border-border bg-surface-elevated p-5">
                                <div class="flex flex-wrap items-start justify-between gap-4">
                                    <div class="space-y-2">
                                        <div class="flex flex-wrap items-center gap-2">
                                            <h3 class="text-lg font-semibold text-fg">{vehicle.title.clone()}</h3>
                                            {vehicle.featured.then(|| view! {
                                                <span class="px-2 py-0.5 rounded text-xs font-bold bg-action-primary-bg text-action-primary-text">
                                                    "DESTAQUE"
                                                </span>
                                            })}
                                            <span class=status_badge_class(vehicle.status)>{vehicle.status.label()}</span>
                                            <span class="px-2 py-0.5 rounded text-xs border border-border text-fg-muted">
                                                {vehicle.vehicle_type.label()}
                                            </span>
                                        </div>
                                        <dl class="grid grid-cols-2 md:grid-cols-5 gap-x-6 gap-y-1 text-sm">
                                            <div><dt class="text-fg-muted">"Fabricante"</dt><dd class="text-fg">{vehicle.manufacturer.clone()}</dd></div>
                                            <div><dt class="text-fg-muted">"Modelo"</dt><dd class="text-fg">{vehicle.model.clone()}</dd></div>
                                            <div><dt class="text-fg-muted">"Ano"</dt><dd class="text-fg">{vehicle.year}</dd></div>
                                            <div><dt class="text-fg-muted">"Km"</dt><dd class="text-fg">{format_integer(i64::from(vehicle.mileage))}</dd></div>
                                            <div><dt class="text-fg-muted">"Preço"</dt><dd class="text-fg">{format_brl(vehicle.price)}</dd></div>
                                        </dl>
                                    </div>
                                    <div class="flex gap-2">
                                        <button
                                            type="button"
                                            class="px-3 py-1.5 rounded-md text-sm border border-border text-fg hover:bg-action-ghost-bg-hover"
                                            on:click=move |_| on_edit.call(for_edit.clone())
                                        >
                                            "Editar"
                                        </button>
                                        <button
                                            type="button"
                                            class="px-3 py-1.5 rounded-md text-sm bg-action-danger-bg text-action-danger-text hover:bg-action-danger-bg-hover"
                                            on:click=move |_| on_delete.call(id.clone())
                                        >
                                            "Excluir"
                                        </button>
                                    </div>
                                </div>
                            </article>
                        }
                    }
                />
            </div>
        </Show>
    }
}
