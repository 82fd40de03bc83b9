use super::{CONTACT_EMAIL, PHONE_DISPLAY, PHONE_HREF, WHATSAPP_URL};
use leptos::*;

#[component]
pub fn ContactSection() -> impl IntoView {
    let mailto = format!("mailto:{}", CONTACT_EMAIL);
    view! {
        <section id="contact" class="py-20 bg-surface">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="text-center mb-12">
                    <h2 class="text-3xl font-bold text-fg">"Entre em Contato"</h2>
                    <p class="mt-4 text-fg-muted">
                        "Estamos prontos para atendê-lo e oferecer as melhores soluções para o seu negócio"
                    </p>
                </div>
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6">
                    <div class="rounded-lg border border-border p-6">
                        <h3 class="font-semibold text-fg">"Telefone"</h3>
                        <a href=PHONE_HREF class="mt-2 block text-fg-muted hover:text-fg">{PHONE_DISPLAY}</a>
                    </div>
                    <div class="rounded-lg border border-border p-6">
                        <h3 class="font-semibold text-fg">"Email"</h3>
                        <a href=mailto class="mt-2 block text-fg-muted hover:text-fg">{CONTACT_EMAIL}</a>
                    </div>
                    <div class="rounded-lg border border-border p-6">
                        <h3 class="font-semibold text-fg">"Endereço"</h3>
                        <p class="mt-2 text-fg-muted">"São Paulo, SP - Brasil"</p>
                    </div>
                    <div class="rounded-lg border border-border p-6">
                        <h3 class="font-semibold text-fg">"Horário"</h3>
                        <p class="mt-2 text-fg-muted">"Seg-Sex: 8h-18h | Sáb: 8h-12h"</p>
                    </div>
                </div>
                <div class="mt-12 text-center">
                    <p class="text-fg-muted">"Prefere conversar pelo WhatsApp? Clique no botão abaixo!"</p>
                    <a
                        href=WHATSAPP_URL
                        target="_blank"
                        rel="noopener noreferrer"
                        class="mt-4 inline-block px-8 py-3 rounded-md font-semibold bg-status-success-bg text-status-success-text"
                    >
                        "Chamar no WhatsApp"
                    </a>
                </div>
            </div>
        </section>
    }
}
