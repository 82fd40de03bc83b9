use crate::{
    api::{ApiClient, ApiError, Credentials, SessionResponse, UserResponse},
    pages::auth::repository::AuthRepository,
};
use leptos::*;
use std::rc::Rc;

pub type AuthContext = (ReadSignal<AuthState>, WriteSignal<AuthState>);

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthState {
    pub user: Option<UserResponse>,
    pub is_admin: bool,
    pub is_authenticated: bool,
    pub loading: bool,
}

impl AuthState {
    fn signed_in(session: SessionResponse) -> Self {
        Self {
            user: Some(session.user),
            is_admin: session.is_admin,
            is_authenticated: true,
            loading: false,
        }
    }

    fn signed_out() -> Self {
        Self::default()
    }

    pub fn email(&self) -> Option<&str> {
        self.user.as_ref().map(|user| user.email.as_str())
    }
}

fn auth_repository() -> AuthRepository {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    AuthRepository::new_with_client(Rc::new(api))
}

fn create_auth_context() -> AuthContext {
    let (auth_state, set_auth_state) = create_signal(AuthState {
        loading: true,
        ..AuthState::default()
    });

    let repo = auth_repository();
    spawn_local(async move {
        refresh_session(&repo, set_auth_state).await;
    });

    (auth_state, set_auth_state)
}

#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let ctx = create_auth_context();
    provide_context::<AuthContext>(ctx);
    view! { <>{children()}</> }
}

pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().unwrap_or_else(|| create_signal(AuthState::default()))
}

/// Resolves session and admin role from the stored token.
pub async fn refresh_session(repo: &AuthRepository, set_auth_state: WriteSignal<AuthState>) {
    match repo.session().await {
        Ok(session) => set_auth_state.set(AuthState::signed_in(session)),
        Err(err) => {
            if !err.is_unauthorized() {
                log::warn!("session lookup failed: {}", err);
            }
            set_auth_state.set(AuthState::signed_out());
        }
    }
}

pub async fn sign_in_request(
    credentials: Credentials,
    repo: &AuthRepository,
    set_auth_state: WriteSignal<AuthState>,
) -> Result<(), ApiError> {
    set_auth_state.update(|state| state.loading = true);

    match repo.sign_in(credentials).await {
        Ok(response) => {
            set_auth_state.set(AuthState::signed_in(SessionResponse {
                user: response.user,
                is_admin: response.is_admin,
            }));
            Ok(())
        }
        Err(error) => {
            set_auth_state.update(|state| state.loading = false);
            Err(error)
        }
    }
}

/// Sign-up does not start a session; admin access is granted separately.
pub async fn sign_up_request(
    credentials: Credentials,
    repo: &AuthRepository,
) -> Result<UserResponse, ApiError> {
    repo.sign_up(credentials).await
}

pub async fn sign_out(
    repo: &AuthRepository,
    set_auth_state: WriteSignal<AuthState>,
) -> Result<(), ApiError> {
    let result = repo.sign_out().await;
    set_auth_state.set(AuthState::signed_out());
    result
}

pub fn use_sign_in_action() -> Action<Credentials, Result<(), ApiError>> {
    let (_auth, set_auth) = use_auth();
    let repo = auth_repository();

    create_action(move |credentials: &Credentials| {
        let payload = credentials.clone();
        let repo = repo.clone();
        async move { sign_in_request(payload, &repo, set_auth).await }
    })
}

pub fn use_sign_up_action() -> Action<Credentials, Result<UserResponse, ApiError>> {
    let repo = auth_repository();

    create_action(move |credentials: &Credentials| {
        let payload = credentials.clone();
        let repo = repo.clone();
        async move { sign_up_request(payload, &repo).await }
    })
}

pub fn use_sign_out_action() -> Action<(), Result<(), ApiError>> {
    let (_auth, set_auth) = use_auth();
    let repo = auth_repository();

    create_action(move |_: &()| {
        let repo = repo.clone();
        async move { sign_out(&repo, set_auth).await }
    })
}
