use super::{components::AuthForm, view_model::use_auth_view_model};
use leptos::*;

#[component]
pub fn AuthPanel() -> impl IntoView {
    let vm = use_auth_view_model();
    view! {
        <div class="min-h-screen flex items-center justify-center bg-surface-muted py-12 px-4">
            <AuthForm vm=vm />
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::provide_auth;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn renders_sign_in_tab_by_default() {
        let html = render_to_string(|| {
            provide_auth(None);
            view! { <AuthPanel /> }
        });
        assert!(html.contains("Área Administrativa"));
        assert!(html.contains("Cadastrar"));
        assert!(html.contains("seu@email.com"));
        assert!(html.contains("Entrar"));
        assert!(html.contains("Voltar para o site"));
        assert!(!html.contains("Criar Conta"));
    }
}
