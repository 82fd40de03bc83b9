use super::{
    components::{
        AboutSection, CategoriesSection, ContactSection, Footer, HeroSection, Navigation,
        VehicleCard, VehicleFilters,
    },
    utils::featured_summary,
    view_model::{use_featured_vehicles_view_model, FeaturedVehiclesViewModel},
};
use crate::components::empty_state::EmptyState;
use leptos::*;

#[component]
pub fn HomePanel() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-surface">
            <Navigation />
            <main>
                <HeroSection />
                <FeaturedVehicles />
                <CategoriesSection />
                <AboutSection />
                <ContactSection />
            </main>
            <Footer />
        </div>
    }
}

#[component]
pub fn FeaturedVehicles() -> impl IntoView {
    let vm = use_featured_vehicles_view_model();
    view! { <FeaturedVehiclesView vm=vm /> }
}

#[component]
fn FeaturedVehiclesView(vm: FeaturedVehiclesViewModel) -> impl IntoView {
    let on_clear = Callback::new(move |_| vm.clear_filters());

    view! {
        <section id="featured" class="py-20 bg-surface">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="text-center mb-12">
                    <h2 class="text-3xl font-bold text-fg">"Veículos em Destaque"</h2>
                    <p class="mt-4 text-fg-muted">
                        "Confira nossa seleção especial de veículos com as melhores condições e preços do mercado"
                    </p>
                    {move || featured_summary(vm.featured.get()).map(|summary| view! {
                        <p class="mt-2 text-sm font-semibold text-action-primary-bg">{summary}</p>
                    })}
                </div>
                <VehicleFilters filters=vm.filters on_clear=on_clear />
                <Suspense fallback=move || view! {
                    <p class="text-center text-fg-muted py-12">"Carregando veículos..."</p>
                }>
                    {move || {
                        vm.vehicles_resource.get().map(|_| {
                            let vehicles = vm.filtered.get();
                            if vehicles.is_empty() {
                                view! {
                                    <EmptyState title="Nenhum veículo encontrado com os filtros selecionados." />
                                }
                                .into_view()
                            } else {
                                view! {
                                    <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
                                        {vehicles
                                            .into_iter()
                                            .map(|vehicle| view! { <VehicleCard vehicle=vehicle /> })
                                            .collect_view()}
                                    </div>
                                }
                                .into_view()
                            }
                        })
                    }}
                </Suspense>
            </div>
        </section>
    }
}
