use crate::{
    state::{
        auth::{self, use_auth},
        toast::{use_toast, ToastKind},
    },
    utils::navigation,
};
use leptos::*;

pub const ADMIN_MENU: [(&str, &str); 2] = [("Dashboard", "/admin"), ("Veículos", "/admin/vehicles")];

pub fn is_active_menu_item(current_path: &str, href: &str) -> bool {
    current_path.trim_end_matches('/') == href
}

#[component]
pub fn AdminLayout(children: Children) -> impl IntoView {
    let (auth, _set_auth) = use_auth();
    let sign_out_action = auth::use_sign_out_action();
    let sign_out_pending = sign_out_action.pending();
    let current_path = navigation::current_path();

    create_effect(move |_| {
        if let Some(result) = sign_out_action.value().get() {
            if let Err(err) = result {
                log::warn!("sign-out failed: {}", err);
            }
            navigation::redirect_to("/auth");
        }
    });

    let on_sign_out = move |_| {
        if sign_out_pending.get_untracked() {
            return;
        }
        sign_out_action.dispatch(());
    };

    let menu = ADMIN_MENU
        .iter()
        .map(|(label, href)| {
            let class = if is_active_menu_item(&current_path, href) {
                "flex items-center gap-3 px-4 py-2 rounded-md text-sm font-medium bg-action-primary-bg text-action-primary-text"
            } else {
                "flex items-center gap-3 px-4 py-2 rounded-md text-sm font-medium text-fg-muted hover:text-fg hover:bg-action-ghost-bg-hover"
            };
            view! { <a href=*href class=class>{*label}</a> }
        })
        .collect_view();

    view! {
        <div class="min-h-screen flex bg-surface">
            <aside class="w-64 bg-surface-elevated border-r border-border flex flex-col">
                <div class="h-16 flex items-center px-6 border-b border-border">
                    <span class="text-xl font-bold text-fg">"3BUS Admin"</span>
                </div>
                <nav class="flex-1 p-4 space-y-1">{menu}</nav>
                <div class="p-4 border-t border-border space-y-2">
                    <p class="text-xs text-fg-muted truncate">
                        {move || auth.get().email().unwrap_or_default().to_string()}
                    </p>
                    <button
                        on:click=on_sign_out
                        class="w-full text-left text-fg-muted hover:text-fg px-4 py-2 rounded-md text-sm font-medium disabled:opacity-50 hover:bg-action-ghost-bg-hover"
                        disabled=move || sign_out_pending.get()
                    >
                        "Sair"
                    </button>
                </div>
            </aside>
            <main class="flex-1 p-8 overflow-y-auto">{children()}</main>
        </div>
    }
}

#[component]
pub fn ToastViewport() -> impl IntoView {
    let toast = use_toast();
    view! {
        <div class="fixed bottom-4 right-4 z-[80] space-y-2" aria-live="polite">
            <For
                each=move || toast.queue.get().items
                key=|item| item.id
                children=move |item| {
                    let class = match item.kind {
                        ToastKind::Success => "bg-status-success-bg border border-status-success-border text-status-success-text px-4 py-3 rounded shadow",
                        ToastKind::Error => "bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded shadow",
                    };
                    let id = item.id;
                    view! {
                        <div class=class role="status">
                            <span class="text-sm">{item.message}</span>
                            <button
                                type="button"
                                aria-label="Fechar"
                                class="ml-3 text-xs opacity-75"
                                on:click=move |_| toast.dismiss(id)
                            >
                                "✕"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="flex justify-center items-center p-8">
            <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-action-primary-bg"></div>
        </div>
    }
}

#[component]
pub fn ErrorMessage(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded mb-4">
            <p class="text-sm">{message}</p>
        </div>
    }
}

#[component]
pub fn SuccessMessage(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="bg-status-success-bg border border-status-success-border text-status-success-text px-4 py-3 rounded mb-4">
            <p class="text-sm">{message}</p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::is_active_menu_item;

    #[test]
    fn active_menu_item_matches_exact_path() {
        assert!(is_active_menu_item("/admin", "/admin"));
        assert!(is_active_menu_item("/admin/vehicles/", "/admin/vehicles"));
        assert!(!is_active_menu_item("/admin/vehicles", "/admin"));
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::state::toast::{ToastContext, ToastQueue};
    use crate::test_support::helpers::{admin_user, provide_auth};
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn admin_layout_renders_menu_user_and_children() {
        let html = render_to_string(move || {
            provide_auth(Some(admin_user()));
            view! { <AdminLayout><div>"painel"</div></AdminLayout> }
        });
        assert!(html.contains("3BUS Admin"));
        assert!(html.contains("Dashboard"));
        assert!(html.contains("Veículos"));
        assert!(html.contains("admin@3bus.com.br"));
        assert!(html.contains("Sair"));
        assert!(html.contains("painel"));
    }

    #[test]
    fn toast_viewport_lists_queued_messages() {
        let html = render_to_string(move || {
            let mut queue = ToastQueue::default();
            queue.push(ToastKind::Success, "Veículo excluído com sucesso!");
            provide_context(ToastContext {
                queue: create_rw_signal(queue),
            });
            view! { <ToastViewport /> }
        });
        assert!(html.contains("Veículo excluído com sucesso!"));
    }

    #[test]
    fn renders_feedback_components() {
        let html = render_to_string(move || {
            view! {
                <div>
                    <LoadingSpinner />
                    <ErrorMessage message="Email inválido" />
                    <SuccessMessage message="Conta criada" />
                </div>
            }
        });
        assert!(html.contains("animate-spin"));
        assert!(html.contains("Email inválido"));
        assert!(html.contains("Conta criada"));
    }
}
