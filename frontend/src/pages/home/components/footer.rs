use super::{categories::CATEGORY_CARDS, CONTACT_EMAIL};
use chrono::Datelike;
use leptos::*;

const QUICK_LINKS: [(&str, &str); 4] = [
    ("Veículos em Destaque", "#featured"),
    ("Categorias", "#categories"),
    ("Sobre Nós", "#about"),
    ("Contato", "#contact"),
];

pub fn copyright_line(year: i32) -> String {
    format!("© {} 3Bus. Todos os direitos reservados.", year)
}

#[component]
pub fn Footer() -> impl IntoView {
    let year = chrono::Utc::now().year();
    let mailto = format!("mailto:{}", CONTACT_EMAIL);
    view! {
        <footer class="bg-surface-inverse text-fg-inverse py-12">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 grid grid-cols-1 md:grid-cols-4 gap-8">
                <div>
                    <h3 class="text-xl font-bold">"3Bus"</h3>
                    <p class="mt-2 text-sm opacity-80">
                        "Especialistas em vendas de ônibus, caminhões e veículos pesados com qualidade garantida."
                    </p>
                </div>
                <div>
                    <h4 class="font-semibold">"Links Rápidos"</h4>
                    <ul class="mt-2 space-y-1 text-sm opacity-80">
                        {QUICK_LINKS
                            .iter()
                            .map(|(label, href)| view! { <li><a href=*href>{*label}</a></li> })
                            .collect_view()}
                    </ul>
                </div>
                <div>
                    <h4 class="font-semibold">"Categorias"</h4>
                    <ul class="mt-2 space-y-1 text-sm opacity-80">
                        {CATEGORY_CARDS
                            .iter()
                            .map(|(_, title, _, _)| view! { <li>{*title}</li> })
                            .collect_view()}
                    </ul>
                </div>
                <div>
                    <h4 class="font-semibold">"Redes Sociais"</h4>
                    <ul class="mt-2 space-y-1 text-sm opacity-80">
                        <li><a href="https://facebook.com" target="_blank" rel="noopener noreferrer">"Facebook"</a></li>
                        <li><a href="https://instagram.com" target="_blank" rel="noopener noreferrer">"Instagram"</a></li>
                        <li><a href="https://linkedin.com" target="_blank" rel="noopener noreferrer">"LinkedIn"</a></li>
                        <li><a href=mailto>"Email"</a></li>
                    </ul>
                </div>
            </div>
            <p class="mt-8 text-center text-xs opacity-70">{copyright_line(year)}</p>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::copyright_line;

    #[test]
    fn copyright_uses_given_year() {
        assert_eq!(
            copyright_line(2026),
            "© 2026 3Bus. Todos os direitos reservados."
        );
    }
}
