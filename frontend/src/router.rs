use leptos::*;
use leptos_meta::provide_meta_context;
use leptos_router::*;

use crate::{
    api::ApiClient,
    components::{guard::RequireAdmin, layout::ToastViewport},
    pages::{AdminDashboardPage, AdminVehiclesPage, AuthPage, HomePage},
    state::{auth::AuthProvider, toast::ToastProvider},
};

pub const ROUTE_PATHS: &[&str] = &["/", "/auth", "/admin", "/admin/vehicles"];

pub const PROTECTED_ROUTE_PATHS: &[&str] = &["/admin", "/admin/vehicles"];

pub const PUBLIC_ROUTE_PATHS: &[&str] = &["/", "/auth"];

pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_meta_context();
    provide_context(ApiClient::new());
    view! {
        <ToastProvider>
            <AuthProvider>
                <Router>
                    <Routes>
                        <Route path="/" view=HomePage/>
                        <Route path="/auth" view=AuthPage/>
                        <Route path="/admin" view=ProtectedDashboard/>
                        <Route path="/admin/vehicles" view=ProtectedVehicles/>
                    </Routes>
                </Router>
            </AuthProvider>
            <ToastViewport/>
        </ToastProvider>
    }
}

#[component]
fn ProtectedDashboard() -> impl IntoView {
    view! { <RequireAdmin><AdminDashboardPage/></RequireAdmin> }
}

#[component]
fn ProtectedVehicles() -> impl IntoView {
    view! { <RequireAdmin><AdminVehiclesPage/></RequireAdmin> }
}
