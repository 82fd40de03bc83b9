use crate::{components::layout::LoadingSpinner, state::auth::use_auth, utils::navigation};
use leptos::*;

pub const SIGN_IN_PATH: &str = "/auth";

/// Renders children only for a loaded admin session; anyone else is sent to `/auth`.
#[component]
pub fn RequireAdmin(children: ChildrenFn) -> impl IntoView {
    let (auth, _) = use_auth();
    let is_authenticated = create_memo(move |_| auth.get().is_authenticated);
    let is_loading = create_memo(move |_| auth.get().loading);
    let is_admin = create_memo(move |_| auth.get().is_admin);
    create_effect(move |_| {
        let state = auth.get();
        if let Some(target) = redirect_target(state.is_authenticated, state.loading, state.is_admin)
        {
            navigation::redirect_to(target);
        }
    });
    view! {
        <Show
            when=move || {
                should_render_admin_children(is_authenticated.get(), is_loading.get(), is_admin.get())
            }
            fallback=move || {
                if is_loading.get() {
                    view! { <LoadingSpinner /> }.into_view()
                } else {
                    ().into_view()
                }
            }
        >
            {children()}
        </Show>
    }
}

fn should_render_admin_children(is_authenticated: bool, is_loading: bool, is_admin: bool) -> bool {
    is_authenticated && is_admin && !is_loading
}

fn redirect_target(is_authenticated: bool, is_loading: bool, is_admin: bool) -> Option<&'static str> {
    if is_loading || (is_authenticated && is_admin) {
        None
    } else {
        Some(SIGN_IN_PATH)
    }
}

#[cfg(test)]
mod tests {
    use super::{redirect_target, should_render_admin_children, SIGN_IN_PATH};

    #[test]
    fn admin_guard_blocks_until_loaded_admin() {
        assert!(!should_render_admin_children(false, true, false));
        assert!(!should_render_admin_children(false, false, true));
        assert!(!should_render_admin_children(true, true, true));
        assert!(!should_render_admin_children(true, false, false));
        assert!(should_render_admin_children(true, false, true));
    }

    #[test]
    fn redirect_waits_for_session_load() {
        assert_eq!(redirect_target(false, true, false), None);
        assert_eq!(redirect_target(true, true, false), None);
    }

    #[test]
    fn redirect_sends_anonymous_and_non_admin_to_sign_in() {
        assert_eq!(redirect_target(false, false, false), Some(SIGN_IN_PATH));
        assert_eq!(redirect_target(true, false, false), Some(SIGN_IN_PATH));
        assert_eq!(redirect_target(true, false, true), None);
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::RequireAdmin;
    use crate::state::auth::AuthState;
    use crate::test_support::helpers::{admin_user, provide_auth, regular_user};
    use crate::test_support::ssr::render_to_string;
    use leptos::*;

    #[test]
    fn require_admin_renders_children_for_admin_user() {
        let html = render_to_string(move || {
            provide_auth(Some(admin_user()));
            view! {
                <RequireAdmin>
                    {|| view! { <div>"admin-protected"</div> }}
                </RequireAdmin>
            }
        });
        assert!(html.contains("admin-protected"));
    }

    #[test]
    fn require_admin_hides_children_for_regular_user() {
        let html = render_to_string(move || {
            provide_auth(Some(regular_user()));
            view! {
                <RequireAdmin>
                    {|| view! { <div>"admin-protected"</div> }}
                </RequireAdmin>
            }
        });
        assert!(!html.contains("admin-protected"));
    }

    #[test]
    fn require_admin_shows_spinner_while_session_loads() {
        let html = render_to_string(move || {
            let (auth, set_auth) = create_signal(AuthState {
                loading: true,
                ..AuthState::default()
            });
            provide_context((auth, set_auth));
            view! {
                <RequireAdmin>
                    {|| view! { <div>"admin-protected"</div> }}
                </RequireAdmin>
            }
        });
        assert!(html.contains("animate-spin"));
        assert!(!html.contains("admin-protected"));
    }
}
