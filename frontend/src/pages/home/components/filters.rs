use crate::{
    api::VehicleCategory,
    pages::home::utils::{ListingFilters, ALL_CATEGORIES},
};
use leptos::*;

#[component]
pub fn VehicleFilters(filters: RwSignal<ListingFilters>, on_clear: Callback<()>) -> impl IntoView {
    let input_class = "w-full rounded-md border border-border bg-surface-elevated px-3 py-2 text-sm text-fg";
    let label_class = "block text-sm font-medium text-fg mb-1";

    view! {
        <div class="rounded-lg border border-border bg-surface-elevated p-6 mb-8">
            <div class="flex items-center justify-between mb-4">
                <h3 class="text-lg font-semibold text-fg">"Filtrar Veículos"</h3>
                <button
                    type="button"
                    class="text-sm text-fg-muted hover:text-fg"
                    on:click=move |_| on_clear.call(())
                >
                    "Limpar Filtros"
                </button>
            </div>
            <div class="grid grid-cols-1 md:grid-cols-3 lg:grid-cols-6 gap-4">
                <div>
                    <label class=label_class for="filter-search">"Buscar"</label>
                    <input
                        id="filter-search"
                        class=input_class
                        placeholder="Buscar por título, modelo..."
                        prop:value=move || filters.get().search
                        on:input=move |ev| filters.update(|f| f.search = event_target_value(&ev))
                    />
                </div>
                <div>
                    <label class=label_class for="filter-category">"Tipo de Veículo"</label>
                    <select
                        id="filter-category"
                        class=input_class
                        prop:value=move || filters.get().category
                        on:change=move |ev| filters.update(|f| f.category = event_target_value(&ev))
                    >
                        <option value=ALL_CATEGORIES>"Todos os tipos"</option>
                        {VehicleCategory::ALL
                            .iter()
                            .map(|category| view! {
                                <option value=category.as_str()>{category.label()}</option>
                            })
                            .collect_view()}
                    </select>
                </div>
                <div>
                    <label class=label_class for="filter-manufacturer">"Fabricante"</label>
                    <input
                        id="filter-manufacturer"
                        class=input_class
                        placeholder="Ex: Mercedes, Volvo..."
                        prop:value=move || filters.get().manufacturer
                        on:input=move |ev| filters.update(|f| f.manufacturer = event_target_value(&ev))
                    />
                </div>
                <div>
                    <label class=label_class for="filter-year-from">"Ano de"</label>
                    <input
                        id="filter-year-from"
                        type="number"
                        class=input_class
                        placeholder="2010"
                        prop:value=move || filters.get().year_from
                        on:input=move |ev| filters.update(|f| f.year_from = event_target_value(&ev))
                    />
                </div>
                <div>
                    <label class=label_class for="filter-year-to">"Ano até"</label>
                    <input
                        id="filter-year-to"
                        type="number"
                        class=input_class
                        placeholder="2024"
                        prop:value=move || filters.get().year_to
                        on:input=move |ev| filters.update(|f| f.year_to = event_target_value(&ev))
                    />
                </div>
                <div>
                    <label class=label_class for="filter-price-max">"Preço máximo (R$)"</label>
                    <input
                        id="filter-price-max"
                        type="number"
                        class=input_class
                        placeholder="500000"
                        prop:value=move || filters.get().price_max
                        on:input=move |ev| filters.update(|f| f.price_max = event_target_value(&ev))
                    />
                </div>
            </div>
        </div>
    }
}
