use super::WHATSAPP_URL;
use leptos::*;

const FEATURES: [(&str, &str); 4] = [
    (
        "Garantia de Qualidade",
        "Todos os veículos passam por rigorosa inspeção e revisão completa",
    ),
    (
        "Experiência Comprovada",
        "Mais de 15 anos de expertise no mercado de veículos pesados",
    ),
    (
        "Atendimento Personalizado",
        "Equipe especializada pronta para encontrar a solução ideal",
    ),
    (
        "Entrega Rápida",
        "Documentação em dia e veículos prontos para uso imediato",
    ),
];

#[component]
pub fn AboutSection() -> impl IntoView {
    view! {
        <section id="about" class="py-20 bg-surface-muted">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="text-center mb-12">
                    <h2 class="text-3xl font-bold text-fg">"Por que escolher a 3bus?"</h2>
                    <p class="mt-4 text-fg-muted">
                        "Somos referência no mercado de veículos comerciais, oferecendo qualidade, confiança e suporte completo"
                    </p>
                </div>
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6">
                    {FEATURES
                        .iter()
                        .map(|(title, description)| view! {
                            <div class="rounded-lg bg-surface-elevated p-6 text-center">
                                <h3 class="text-lg font-semibold text-fg">{*title}</h3>
                                <p class="mt-2 text-sm text-fg-muted">{*description}</p>
                            </div>
                        })
                        .collect_view()}
                </div>
                <div class="mt-16 rounded-lg bg-action-primary-bg text-action-primary-text p-10 text-center">
                    <h3 class="text-2xl font-bold">"Pronto para encontrar seu próximo veículo?"</h3>
                    <div class="mt-6 flex flex-col sm:flex-row justify-center gap-4">
                        <a href="#contact" class="px-6 py-3 rounded-md font-semibold bg-surface-elevated text-fg">
                            "Fale com um Especialista"
                        </a>
                        <a href=WHATSAPP_URL target="_blank" rel="noopener noreferrer" class="px-6 py-3 rounded-md font-semibold border border-border">
                            "WhatsApp"
                        </a>
                    </div>
                </div>
            </div>
        </section>
    }
}
