use crate::{
    components::layout::{ErrorMessage, SuccessMessage},
    pages::auth::{utils::AuthTab, view_model::AuthViewModel},
};
use leptos::*;

#[component]
pub fn AuthForm(vm: AuthViewModel) -> impl IntoView {
    let pending = Signal::derive(move || vm.pending());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        vm.submit();
    };

    let tab_button = move |tab: AuthTab| {
        view! {
            <button
                type="button"
                class=move || {
                    if vm.tab.get() == tab {
                        "flex-1 py-2 text-sm font-semibold border-b-2 border-action-primary-bg text-fg"
                    } else {
                        "flex-1 py-2 text-sm font-medium text-fg-muted hover:text-fg"
                    }
                }
                on:click=move |_| vm.switch_tab(tab)
            >
                {tab.label()}
            </button>
        }
    };

    view! {
        <div class="w-full max-w-md rounded-lg border border-border bg-surface-elevated shadow-lg p-8 space-y-6">
            <div class="text-center">
                <h1 class="text-3xl font-extrabold text-action-primary-bg">"3BUS"</h1>
                <p class="mt-1 text-sm text-fg-muted">"Área Administrativa"</p>
            </div>
            <div class="flex border-b border-border">
                {tab_button(AuthTab::SignIn)}
                {tab_button(AuthTab::SignUp)}
            </div>
            {move || vm.notice.get().map(|notice| view! { <SuccessMessage message=notice /> })}
            {move || {
                vm.errors
                    .get()
                    .into_iter()
                    .map(|message| view! { <ErrorMessage message=message /> })
                    .collect_view()
            }}
            <form class="space-y-4" on:submit=on_submit novalidate=true>
                <div>
                    <label for="auth-email" class="block text-sm font-medium text-fg mb-1">"Email"</label>
                    <input
                        id="auth-email"
                        name="email"
                        type="email"
                        autocomplete="email"
                        placeholder="seu@email.com"
                        class="w-full rounded-md border border-border bg-surface px-3 py-2 text-sm text-fg"
                        prop:value=move || vm.email.get()
                        on:input=move |ev| vm.email.set(event_target_value(&ev))
                    />
                </div>
                <div>
                    <label for="auth-password" class="block text-sm font-medium text-fg mb-1">"Senha"</label>
                    <input
                        id="auth-password"
                        name="password"
                        type="password"
                        autocomplete="current-password"
                        class="w-full rounded-md border border-border bg-surface px-3 py-2 text-sm text-fg"
                        prop:value=move || vm.password.get()
                        on:input=move |ev| vm.password.set(event_target_value(&ev))
                    />
                </div>
                <Show when=move || vm.tab.get() == AuthTab::SignUp>
                    <p class="text-xs text-fg-muted">
                        "Após o cadastro, um administrador precisa aprovar seu acesso admin"
                    </p>
                </Show>
                <button
                    type="submit"
                    class="w-full py-2 rounded-md text-sm font-semibold bg-action-primary-bg text-action-primary-text hover:bg-action-primary-bg-hover disabled:opacity-50"
                    disabled=move || pending.get()
                >
                    {move || vm.tab.get().submit_label(pending.get())}
                </button>
            </form>
            <div class="text-center">
                <a href="/" class="text-sm text-fg-muted hover:text-fg">"Voltar para o site"</a>
            </div>
        </div>
    }
}
