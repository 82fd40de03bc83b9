use crate::pages::admin_dashboard::utils::{share_percent, GroupCount};
use leptos::*;

#[component]
pub fn DistributionPanel(
    #[prop(into)] title: String,
    #[prop(into)] subtitle: String,
    groups: Memo<Vec<GroupCount>>,
) -> impl IntoView {
    view! {
        <div class="rounded-lg border border-border bg-surface-elevated p-6">
            <h3 class="text-lg font-semibold text-fg">{title}</h3>
            <p class="text-sm text-fg-muted mb-4">{subtitle}</p>
            <ul class="space-y-3">
                {move || {
                    let groups = groups.get();
                    let max = groups.iter().map(|group| group.count).max().unwrap_or(0);
                    groups
                        .into_iter()
                        .map(|group| {
                            let width = format!("width: {}%", share_percent(group.count, max));
                            view! {
                                <li>
                                    <div class="flex justify-between text-sm text-fg">
                                        <span>{group.label}</span>
                                        <span class="font-semibold">{group.count}</span>
                                    </div>
                                    <div class="mt-1 h-2 rounded bg-surface-muted">
                                        <div class="h-2 rounded bg-action-primary-bg" style=width></div>
                                    </div>
                                </li>
                            }
                        })
                        .collect_view()
                }}
            </ul>
        </div>
    }
}
