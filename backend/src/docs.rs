#![allow(dead_code)] // OpenAPI doc stubs are only referenced by utoipa macros.

use crate::models::{
    user::{Credentials, LoginResponse, SessionResponse, UpdateRoleRequest, UserResponse, UserRole},
    vehicle::{AdminVehicleListQuery, Vehicle, VehicleCategory, VehiclePayload, VehicleStatus},
};
use utoipa::{
    openapi::security::{Http, HttpAuthScheme, SecurityScheme},
    Modify, OpenApi,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        signup_doc,
        login_doc,
        logout_doc,
        me_doc,
        list_available_vehicles_doc,
        get_available_vehicle_doc,
        admin_list_vehicles_doc,
        admin_create_vehicle_doc,
        admin_update_vehicle_doc,
        admin_delete_vehicle_doc,
        admin_list_users_doc,
        admin_update_user_role_doc
    ),
    components(
        schemas(
            Credentials,
            LoginResponse,
            SessionResponse,
            UserResponse,
            UserRole,
            UpdateRoleRequest,
            Vehicle,
            VehiclePayload,
            VehicleCategory,
            VehicleStatus,
            AdminVehicleListQuery
        )
    ),
    modifiers(&SecuritySchemes),
    tags(
        (name = "Auth", description = "Sign-up, sign-in and session lookup"),
        (name = "Vehicles", description = "Public vehicle listing"),
        (name = "Admin", description = "Back-office vehicle and user management")
    ),
    security(("BearerAuth" = []))
)]
pub struct ApiDoc;

struct SecuritySchemes;

impl Modify for SecuritySchemes {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_default();

        let mut bearer = Http::new(HttpAuthScheme::Bearer);
        bearer.bearer_format = Some("JWT".to_string());

        components.add_security_scheme("BearerAuth", SecurityScheme::Http(bearer));
    }
}

#[utoipa::path(
    post,
    path = "/api/auth/signup",
    request_body = Credentials,
    responses(
        (status = 201, description = "Account created without admin access", body = UserResponse),
        (status = 400, description = "Invalid e-mail or short password"),
        (status = 409, description = "E-mail already registered")
    ),
    tag = "Auth",
    security(())
)]
fn signup_doc() {}

#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = Credentials,
    responses(
        (status = 200, description = "Signed in", body = LoginResponse),
        (status = 401, description = "Invalid credentials")
    ),
    tag = "Auth",
    security(())
)]
fn login_doc() {}

#[utoipa::path(
    post,
    path = "/api/auth/logout",
    responses((status = 200, description = "Token revoked", body = serde_json::Value)),
    tag = "Auth"
)]
fn logout_doc() {}

#[utoipa::path(
    get,
    path = "/api/auth/me",
    responses(
        (status = 200, description = "Current session and role", body = SessionResponse),
        (status = 401, description = "No session")
    ),
    tag = "Auth"
)]
fn me_doc() {}

#[utoipa::path(
    get,
    path = "/api/vehicles",
    responses((status = 200, description = "Available vehicles, featured first", body = [Vehicle])),
    tag = "Vehicles",
    security(())
)]
fn list_available_vehicles_doc() {}

#[utoipa::path(
    get,
    path = "/api/vehicles/{id}",
    params(("id" = String, Path, description = "Vehicle ID")),
    responses(
        (status = 200, body = Vehicle),
        (status = 404, description = "Missing or not available")
    ),
    tag = "Vehicles",
    security(())
)]
fn get_available_vehicle_doc() {}

#[utoipa::path(
    get,
    path = "/api/admin/vehicles",
    params(AdminVehicleListQuery),
    responses((status = 200, description = "All vehicles, newest first", body = [Vehicle])),
    tag = "Admin"
)]
fn admin_list_vehicles_doc() {}

#[utoipa::path(
    post,
    path = "/api/admin/vehicles",
    request_body = VehiclePayload,
    responses(
        (status = 201, body = Vehicle),
        (status = 400, description = "Required field missing")
    ),
    tag = "Admin"
)]
fn admin_create_vehicle_doc() {}

#[utoipa::path(
    put,
    path = "/api/admin/vehicles/{id}",
    params(("id" = String, Path, description = "Vehicle ID")),
    request_body = VehiclePayload,
    responses(
        (status = 200, body = Vehicle),
        (status = 404, description = "Vehicle not found")
    ),
    tag = "Admin"
)]
fn admin_update_vehicle_doc() {}

#[utoipa::path(
    delete,
    path = "/api/admin/vehicles/{id}",
    params(("id" = String, Path, description = "Vehicle ID")),
    responses(
        (status = 200, body = serde_json::Value),
        (status = 404, description = "Vehicle not found")
    ),
    tag = "Admin"
)]
fn admin_delete_vehicle_doc() {}

#[utoipa::path(
    get,
    path = "/api/admin/users",
    responses((status = 200, body = [UserResponse])),
    tag = "Admin"
)]
fn admin_list_users_doc() {}

#[utoipa::path(
    put,
    path = "/api/admin/users/{id}/role",
    params(("id" = String, Path, description = "User ID")),
    request_body = UpdateRoleRequest,
    responses(
        (status = 200, body = UserResponse),
        (status = 404, description = "User not found")
    ),
    tag = "Admin"
)]
fn admin_update_user_role_doc() {}
