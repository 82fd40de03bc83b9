pub mod ssr;

pub mod helpers {
    use crate::api::{UserResponse, Vehicle, VehicleCategory, VehicleStatus};
    use crate::state::auth::AuthState;
    use leptos::*;

    pub fn admin_user() -> UserResponse {
        UserResponse {
            id: "u-admin".into(),
            email: "admin@3bus.com.br".into(),
            role: "admin".into(),
            created_at: None,
        }
    }

    pub fn regular_user() -> UserResponse {
        UserResponse {
            id: "u-regular".into(),
            email: "vendedor@3bus.com.br".into(),
            role: "user".into(),
            created_at: None,
        }
    }

    pub fn provide_auth(
        user: Option<UserResponse>,
    ) -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
        let is_admin = user.as_ref().map(|u| u.role == "admin").unwrap_or(false);
        let (auth, set_auth) = create_signal(AuthState {
            is_authenticated: user.is_some(),
            is_admin,
            user,
            loading: false,
        });
        provide_context((auth, set_auth));
        (auth, set_auth)
    }

    pub fn vehicle(id: &str) -> Vehicle {
        Vehicle {
            id: id.into(),
            title: "Mercedes-Benz OF-1721 Urbano".into(),
            description: "Motor dianteiro, suspensão a ar".into(),
            vehicle_type: VehicleCategory::OnibusUrbano,
            manufacturer: "Mercedes-Benz".into(),
            model: "OF-1721".into(),
            year: 2018,
            mileage: 250_000,
            price: 180_000.0,
            location: "São Paulo, SP".into(),
            featured: false,
            status: VehicleStatus::Disponivel,
            seats: Some(40),
            fuel_type: Some("Diesel".into()),
            transmission: Some("Manual".into()),
            color: None,
            images: None,
            created_at: None,
            updated_at: None,
        }
    }
}
