use leptos::*;

#[component]
pub fn StatCard(
    #[prop(into)] title: String,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] caption: String,
) -> impl IntoView {
    view! {
        <div class="rounded-lg border border-border bg-surface-elevated p-6">
            <p class="text-sm font-medium text-fg-muted">{title}</p>
            <p class="mt-2 text-3xl font-bold text-fg">{move || value.get()}</p>
            <p class="mt-1 text-xs text-fg-muted">{caption}</p>
        </div>
    }
}
