use super::{
    components::{DistributionPanel, MonthlyPerformance, StatCard},
    utils::DashboardStats,
    view_model::{use_admin_dashboard_view_model, AdminDashboardViewModel},
};
use crate::{
    components::layout::{AdminLayout, LoadingSpinner},
    utils::format::{format_integer, format_thousands_brl},
};
use leptos::*;

#[component]
pub fn AdminDashboardPanel() -> impl IntoView {
    let vm = use_admin_dashboard_view_model();
    view! {
        <AdminLayout>
            <DashboardContent vm=vm />
        </AdminLayout>
    }
}

#[component]
fn DashboardContent(vm: AdminDashboardViewModel) -> impl IntoView {
    let stats = vm.stats;
    let card = move |f: fn(&DashboardStats) -> String| {
        Signal::derive(move || stats.with(f))
    };

    view! {
        <div class="space-y-8">
            <div>
                <h1 class="text-3xl font-bold text-fg">"Dashboard"</h1>
                <p class="text-fg-muted">"Visão geral do desempenho e estatísticas"</p>
            </div>
            {move || vm.stock_resource.loading().get().then(|| view! { <LoadingSpinner /> })}
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-5 gap-4">
                <StatCard
                    title="Total de Veículos"
                    value=card(|s| s.total.to_string())
                    caption="no estoque"
                />
                <StatCard
                    title="Disponíveis"
                    value=card(|s| s.available.to_string())
                    caption="prontos para venda"
                />
                <StatCard
                    title="Vendidos"
                    value=card(|s| s.sold.to_string())
                    caption="este mês"
                />
                <StatCard
                    title="Valor Total"
                    value=card(|s| format_thousands_brl(s.total_value))
                    caption="em estoque"
                />
                <StatCard
                    title="Visualizações"
                    value=card(|s| format_integer(i64::from(s.monthly_views)))
                    caption="este mês"
                />
            </div>
            <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
                <DistributionPanel
                    title="Veículos por Tipo"
                    subtitle="Distribuição do estoque por categoria"
                    groups=vm.by_category
                />
                <DistributionPanel
                    title="Status dos Veículos"
                    subtitle="Distribuição por disponibilidade"
                    groups=vm.by_status
                />
            </div>
            <MonthlyPerformance />
        </div>
    }
}
