use crate::api::VehicleCategory;
use leptos::*;

/// Indicative stock counts shown on the marketing page.
pub const CATEGORY_CARDS: [(VehicleCategory, &str, &str, &str); 4] = [
    (
        VehicleCategory::OnibusUrbano,
        "Ônibus Urbanos",
        "45+",
        "Modelos para transporte urbano com acessibilidade e conforto",
    ),
    (
        VehicleCategory::OnibusRodoviario,
        "Ônibus Rodoviários",
        "30+",
        "Veículos para longas distâncias com máximo conforto",
    ),
    (
        VehicleCategory::Caminhao,
        "Caminhões",
        "60+",
        "Linha completa de caminhões leves, médios e pesados",
    ),
    (
        VehicleCategory::Especial,
        "Veículos Especiais",
        "20+",
        "Frotas sob encomenda e veículos customizados",
    ),
];

#[component]
pub fn CategoriesSection() -> impl IntoView {
    view! {
        <section id="categories" class="py-20 bg-surface">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="text-center mb-12">
                    <h2 class="text-3xl font-bold text-fg">"Nossas Categorias"</h2>
                    <p class="mt-4 text-fg-muted">
                        "Ampla variedade de veículos comerciais para atender todas as suas necessidades"
                    </p>
                </div>
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6">
                    {CATEGORY_CARDS
                        .iter()
                        .map(|(category, title, count, description)| view! {
                            <article
                                class="rounded-lg border border-border bg-surface-elevated p-6 hover:shadow-lg"
                                data-category=category.as_str()
                            >
                                <h3 class="text-lg font-semibold text-fg">{*title}</h3>
                                <p class="mt-2 text-sm text-fg-muted">{*description}</p>
                                <p class="mt-4 text-sm font-semibold text-action-primary-bg">
                                    {format!("{} veículos", count)}
                                </p>
                            </article>
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
