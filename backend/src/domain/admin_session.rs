use tracing::info;

use crate::domain::Credentials;
use crate::error::BookingError;

/// Whether the admin has unlocked slot management and export.
/// There is no expiry; the flag lasts until logout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AdminSession {
    authenticated: bool,
}

impl AdminSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn login(&mut self, password: &str, credentials: &Credentials) -> Result<(), BookingError> {
        if credentials.verify_admin_password(password) {
            info!("Admin session authenticated");
            self.authenticated = true;
            Ok(())
        } else {
            info!("Admin login rejected");
            Err(BookingError::InvalidCredential)
        }
    }

    pub fn logout(&mut self) {
        info!("Admin session cleared");
        self.authenticated = false;
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    pub fn require_admin(&self) -> Result<(), BookingError> {
        if self.authenticated {
            Ok(())
        } else {
            Err(BookingError::NotAuthorized)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn credentials() -> Credentials {
        Credentials::new("admin123", vec!["OTP123".to_string()])
    }

    #[test]
    fn test_login_success_then_logout() {
        let mut session = AdminSession::new();
        assert_eq!(session.require_admin(), Err(BookingError::NotAuthorized));

        session.login("admin123", &credentials()).unwrap();
        assert!(session.is_authenticated());
        assert!(session.require_admin().is_ok());

        session.logout();
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_failed_login_leaves_session_unchanged() {
        let mut session = AdminSession::new();
        assert_eq!(
            session.login("wrong", &credentials()),
            Err(BookingError::InvalidCredential)
        );
        assert!(!session.is_authenticated());

        session.login("admin123", &credentials()).unwrap();
        assert!(session.login("wrong", &credentials()).is_err());
        assert!(session.is_authenticated());
    }

    #[test]
    fn test_logout_is_unconditional() {
        let mut session = AdminSession::new();
        session.logout();
        assert!(!session.is_authenticated());
    }
}
