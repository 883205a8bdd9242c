use tracing::info;

/// Secrets the service checks requests against, injected at startup
#[derive(Clone)]
pub struct Credentials {
    admin_password: String,
    one_time_passwords: Vec<String>,
}

impl Credentials {
    pub fn new(admin_password: impl Into<String>, one_time_passwords: Vec<String>) -> Self {
        Self {
            admin_password: admin_password.into(),
            one_time_passwords,
        }
    }

    /// Exact, case-sensitive comparison with the admin secret
    pub fn verify_admin_password(&self, attempt: &str) -> bool {
        info!("Checking admin password (length: {})", attempt.len());
        attempt == self.admin_password
    }

    /// Exact, case-sensitive membership in the one-time password allow-list
    pub fn accepts_one_time_password(&self, attempt: &str) -> bool {
        self.one_time_passwords.iter().any(|valid| valid == attempt)
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("admin_password", &"<redacted>")
            .field("one_time_passwords", &self.one_time_passwords.len())
            .finish()
    }
}
