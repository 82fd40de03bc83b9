use crate::state::auth::use_auth;
use leptos::*;

const LINKS: [(&str, &str); 4] = [
    ("Veículos em Destaque", "#featured"),
    ("Categorias", "#categories"),
    ("Sobre Nós", "#about"),
    ("Contato", "#contact"),
];

#[component]
pub fn Navigation() -> impl IntoView {
    let (auth, _) = use_auth();
    let (menu_open, set_menu_open) = create_signal(false);
    let is_admin = create_memo(move |_| auth.get().is_admin);

    let links = move || {
        LINKS
            .iter()
            .map(|(label, href)| {
                view! {
                    <a
                        href=*href
                        class="text-fg-muted hover:text-fg px-3 py-2 text-sm font-medium"
                        on:click=move |_| set_menu_open.set(false)
                    >
                        {*label}
                    </a>
                }
            })
            .collect_view()
    };

    let account_link = move || {
        if is_admin.get() {
            view! {
                <a href="/admin" class="px-4 py-2 rounded-md text-sm font-semibold border border-border text-fg hover:bg-action-ghost-bg-hover">
                    "Painel Admin"
                </a>
            }
        } else {
            view! {
                <a href="/auth" class="px-4 py-2 rounded-md text-sm font-semibold border border-border text-fg hover:bg-action-ghost-bg-hover">
                    "Login"
                </a>
            }
        }
    };

    view! {
        <header class="sticky top-0 z-50 bg-surface-elevated border-b border-border shadow-sm">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <a href="/" class="text-2xl font-extrabold text-action-primary-bg">"3BUS"</a>
                    <nav class="hidden md:flex items-center space-x-2">{links}</nav>
                    <div class="hidden md:flex items-center gap-2">
                        <a href="#contact" class="px-4 py-2 rounded-md text-sm font-semibold bg-action-primary-bg text-action-primary-text hover:bg-action-primary-bg-hover">
                            "Fale Conosco"
                        </a>
                        {account_link}
                    </div>
                    <button
                        type="button"
                        class="md:hidden inline-flex items-center justify-center p-2 rounded-md text-fg-muted hover:text-fg"
                        on:click=move |_| set_menu_open.update(|open| *open = !*open)
                        aria-expanded=move || menu_open.get()
                        aria-controls="site-mobile-nav"
                    >
                        <span class="sr-only">
                            {move || if menu_open.get() { "Fechar menu" } else { "Abrir menu" }}
                        </span>
                        "☰"
                    </button>
                </div>
                <Show when=move || menu_open.get()>
                    <nav id="site-mobile-nav" class="md:hidden flex flex-col py-3 border-t border-border">
                        {links}
                        {account_link}
                    </nav>
                </Show>
            </div>
        </header>
    }
}
