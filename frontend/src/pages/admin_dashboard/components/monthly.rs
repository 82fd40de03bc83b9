use crate::pages::admin_dashboard::utils::{share_percent, MONTHLY_SAMPLE};
use leptos::*;

#[component]
pub fn MonthlyPerformance() -> impl IntoView {
    let max_views = MONTHLY_SAMPLE
        .iter()
        .map(|point| point.views as usize)
        .max()
        .unwrap_or(0);

    view! {
        <div class="rounded-lg border border-border bg-surface-elevated p-6">
            <h3 class="text-lg font-semibold text-fg">"Desempenho Mensal"</h3>
            <p class="text-sm text-fg-muted mb-4">"Vendas e visualizações nos últimos 6 meses"</p>
            <table class="w-full text-sm">
                <thead>
                    <tr class="text-left text-fg-muted">
                        <th class="py-1">"Mês"</th>
                        <th class="py-1">"Vendas"</th>
                        <th class="py-1">"Visualizações"</th>
                    </tr>
                </thead>
                <tbody>
                    {MONTHLY_SAMPLE
                        .iter()
                        .map(|point| {
                            let width = format!(
                                "width: {}%",
                                share_percent(point.views as usize, max_views)
                            );
                            view! {
                                <tr class="border-t border-border">
                                    <td class="py-2 text-fg">{point.month}</td>
                                    <td class="py-2 text-fg">{point.sales}</td>
                                    <td class="py-2">
                                        <div class="flex items-center gap-2">
                                            <div class="h-2 rounded bg-action-primary-bg" style=width></div>
                                            <span class="text-fg-muted">{point.views}</span>
                                        </div>
                                    </td>
                                </tr>
                            }
                        })
                        .collect_view()}
                </tbody>
            </table>
        </div>
    }
}
