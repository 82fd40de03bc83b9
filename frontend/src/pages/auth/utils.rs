use crate::api::Credentials;
use validator::ValidateEmail;

pub const MIN_PASSWORD_LEN: usize = 6;
pub const INVALID_EMAIL: &str = "Email inválido";
pub const SHORT_PASSWORD: &str = "A senha deve ter no mínimo 6 caracteres";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthTab {
    #[default]
    SignIn,
    SignUp,
}

impl AuthTab {
    pub fn label(&self) -> &'static str {
        match self {
            AuthTab::SignIn => "Login",
            AuthTab::SignUp => "Cadastrar",
        }
    }

    pub fn submit_label(&self, pending: bool) -> &'static str {
        match (self, pending) {
            (AuthTab::SignIn, false) => "Entrar",
            (AuthTab::SignIn, true) => "Entrando...",
            (AuthTab::SignUp, false) => "Criar Conta",
            (AuthTab::SignUp, true) => "Cadastrando...",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

/// Same address rule the backend applies to `Credentials`.
pub fn is_valid_email(raw: &str) -> bool {
    let email = raw.trim();
    !email.is_empty() && email.to_string().validate_email()
}

/// Same rules for both tabs; every failing field is reported.
pub fn validate_credentials(email: &str, password: &str) -> Result<Credentials, Vec<FieldError>> {
    let mut errors = Vec::new();
    if !is_valid_email(email) {
        errors.push(FieldError {
            field: "email",
            message: INVALID_EMAIL,
        });
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        errors.push(FieldError {
            field: "password",
            message: SHORT_PASSWORD,
        });
    }
    if errors.is_empty() {
        Ok(Credentials {
            email: email.trim().to_string(),
            password: password.to_string(),
        })
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_well_formed_credentials_and_trims_email() {
        let credentials = validate_credentials(" gerente@3bus.com.br ", "onibus2024").unwrap();
        assert_eq!(credentials.email, "gerente@3bus.com.br");
        assert_eq!(credentials.password, "onibus2024");
    }

    #[test]
    fn reports_both_fields_when_both_invalid() {
        let errors = validate_credentials("gerente", "123").unwrap_err();
        let messages: Vec<&str> = errors.iter().map(|e| e.message).collect();
        assert_eq!(messages, vec![INVALID_EMAIL, SHORT_PASSWORD]);
    }

    #[test]
    fn password_length_counts_characters() {
        assert!(validate_credentials("a@b.co", "ônibus").is_ok());
        let errors = validate_credentials("a@b.co", "12345").unwrap_err();
        assert_eq!(errors[0].field, "password");
    }

    #[test]
    fn email_shape_rules() {
        assert!(is_valid_email("contato@3bus.com.br"));
        assert!(is_valid_email(" vendas@3bus.com.br "));
        assert!(!is_valid_email("@3bus.com"));
        assert!(!is_valid_email("a b@3bus.com"));
        assert!(!is_valid_email("a@@3bus.com"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn tab_labels_follow_pending_state() {
        assert_eq!(AuthTab::SignIn.submit_label(false), "Entrar");
        assert_eq!(AuthTab::SignIn.submit_label(true), "Entrando...");
        assert_eq!(AuthTab::SignUp.submit_label(false), "Criar Conta");
        assert_eq!(AuthTab::SignUp.submit_label(true), "Cadastrando...");
    }
}
