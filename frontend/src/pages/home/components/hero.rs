use leptos::*;

pub const HERO_STATS: [(&str, &str); 4] = [
    ("200+", "Veículos Vendidos"),
    ("15+", "Anos no Mercado"),
    ("98%", "Satisfação"),
    ("24/7", "Suporte"),
];

#[component]
pub fn HeroSection() -> impl IntoView {
    view! {
        <section class="relative bg-surface-muted py-20 lg:py-32">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 text-center">
                <h1 class="text-4xl font-extrabold text-fg sm:text-5xl lg:text-6xl">
                    "Encontre o seu próximo"
                    <span class="block text-action-primary-bg">"bom negócio"</span>
                </h1>
                <p class="mt-6 max-w-2xl mx-auto text-lg text-fg-muted">
                    "Especialistas em ônibus, caminhões e veículos pesados com qualidade garantida e atendimento profissional"
                </p>
                <div class="mt-8 flex flex-col sm:flex-row justify-center gap-4">
                    <a href="#featured" class="px-8 py-3 rounded-md text-base font-semibold bg-action-primary-bg text-action-primary-text hover:bg-action-primary-bg-hover">
                        "Ver Estoque Completo"
                    </a>
                    <a href="#contact" class="px-8 py-3 rounded-md text-base font-semibold border border-border text-fg hover:bg-action-ghost-bg-hover">
                        "Ofertas Especiais"
                    </a>
                </div>
                <dl class="mt-16 grid grid-cols-2 md:grid-cols-4 gap-8">
                    {HERO_STATS
                        .iter()
                        .map(|(value, label)| view! {
                            <div>
                                <dt class="text-3xl font-bold text-action-primary-bg">{*value}</dt>
                                <dd class="mt-1 text-sm text-fg-muted">{*label}</dd>
                            </div>
                        })
                        .collect_view()}
                </dl>
            </div>
        </section>
    }
}
