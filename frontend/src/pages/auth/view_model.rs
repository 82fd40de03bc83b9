use super::utils::{validate_credentials, AuthTab};
use crate::{
    api::{ApiError, Credentials, UserResponse},
    state::{
        auth::{self, use_auth, AuthState},
        toast::use_toast,
    },
    utils::navigation,
};
use leptos::*;

pub const ADMIN_HOME: &str = "/admin";
pub const SIGN_UP_NOTICE: &str =
    "Conta criada. Após o cadastro, um administrador precisa aprovar seu acesso admin.";
pub const AWAITING_APPROVAL_NOTICE: &str =
    "Sua conta ainda não tem acesso administrativo. Aguarde a aprovação de um administrador.";

/// What `/auth` does with the current session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStep {
    /// Session still loading, or nobody signed in.
    Stay,
    EnterBackOffice,
    /// Signed in without the admin role: the guard would send it straight back here.
    AwaitApproval,
}

pub fn session_step(state: &AuthState) -> SessionStep {
    if state.loading || !state.is_authenticated {
        SessionStep::Stay
    } else if state.is_admin {
        SessionStep::EnterBackOffice
    } else {
        SessionStep::AwaitApproval
    }
}

#[derive(Clone, Copy)]
pub struct AuthViewModel {
    pub tab: RwSignal<AuthTab>,
    pub email: RwSignal<String>,
    pub password: RwSignal<String>,
    pub errors: RwSignal<Vec<&'static str>>,
    pub notice: RwSignal<Option<String>>,
    pub sign_in_action: Action<Credentials, Result<(), ApiError>>,
    pub sign_up_action: Action<Credentials, Result<UserResponse, ApiError>>,
    pub sign_out_action: Action<(), Result<(), ApiError>>,
}

impl AuthViewModel {
    pub fn pending(&self) -> bool {
        self.sign_in_action.pending().get() || self.sign_up_action.pending().get()
    }

    pub fn switch_tab(&self, tab: AuthTab) {
        self.tab.set(tab);
        self.errors.set(Vec::new());
    }

    /// Validates locally; nothing is sent when a field is invalid.
    pub fn submit(&self) -> bool {
        match validate_credentials(&self.email.get_untracked(), &self.password.get_untracked()) {
            Ok(credentials) => {
                self.errors.set(Vec::new());
                self.notice.set(None);
                match self.tab.get_untracked() {
                    AuthTab::SignIn => self.sign_in_action.dispatch(credentials),
                    AuthTab::SignUp => self.sign_up_action.dispatch(credentials),
                }
                true
            }
            Err(errors) => {
                self.errors
                    .set(errors.into_iter().map(|error| error.message).collect());
                false
            }
        }
    }
}

pub fn use_auth_view_model() -> AuthViewModel {
    let (auth, _) = use_auth();
    let toast = use_toast();
    let vm = AuthViewModel {
        tab: create_rw_signal(AuthTab::default()),
        email: create_rw_signal(String::new()),
        password: create_rw_signal(String::new()),
        errors: create_rw_signal(Vec::new()),
        notice: create_rw_signal(None),
        sign_in_action: auth::use_sign_in_action(),
        sign_up_action: auth::use_sign_up_action(),
        sign_out_action: auth::use_sign_out_action(),
    };

    create_effect(move |_| match auth.with(session_step) {
        SessionStep::EnterBackOffice => navigation::redirect_to(ADMIN_HOME),
        SessionStep::AwaitApproval => {
            vm.notice.set(Some(AWAITING_APPROVAL_NOTICE.to_string()));
            vm.sign_out_action.dispatch(());
        }
        SessionStep::Stay => {}
    });

    create_effect(move |_| {
        if let Some(Err(err)) = vm.sign_in_action.value().get() {
            toast.error(err.error);
        }
    });

    create_effect(move |_| {
        if let Some(result) = vm.sign_up_action.value().get() {
            match result {
                Ok(user) => {
                    log::info!("account created for {}", user.email);
                    vm.password.set(String::new());
                    vm.tab.set(AuthTab::SignIn);
                    vm.notice.set(Some(SIGN_UP_NOTICE.to_string()));
                }
                Err(err) => toast.error(err.error),
            }
        }
    });

    vm
}
