//! Authentication use case.
//!
//! `AuthGate` verifies credentials against the HR account and the stored
//! employee records, and owns the current-session slot.

use std::sync::{Arc, OnceLock};

use hrdesk_core::config::{DEFAULT_HR_PASSWORD, HrSettings};
use hrdesk_core::credential::CredentialHasher;
use hrdesk_core::employee::EmployeeRepository;
use hrdesk_core::session::{Role, SessionRepository, User};
use hrdesk_core::{HrError, Result};

/// Decides who is signed in and which role-specific surface they reach.
pub struct AuthGate {
    hr_username: String,
    /// Filled on the first HR sign-in attempt when no hash is configured.
    hr_password_hash: OnceLock<String>,
    employees: Arc<dyn EmployeeRepository>,
    sessions: Arc<dyn SessionRepository>,
    hasher: Arc<dyn CredentialHasher>,
}

impl AuthGate {
    /// Builds the gate from `[hr]` settings. Without a configured hash the
    /// built-in HR password is hashed on the first HR sign-in attempt.
    pub fn from_settings(
        settings: &HrSettings,
        employees: Arc<dyn EmployeeRepository>,
        sessions: Arc<dyn SessionRepository>,
        hasher: Arc<dyn CredentialHasher>,
    ) -> Self {
        Self {
            hr_username: settings.username.clone(),
            hr_password_hash: settings
                .password_hash
                .clone()
                .map(OnceLock::from)
                .unwrap_or_default(),
            employees,
            sessions,
            hasher,
        }
    }

    fn hr_password_hash(&self) -> Result<&str> {
        if let Some(hash) = self.hr_password_hash.get() {
            return Ok(hash);
        }
        let hash = self.hasher.hash(DEFAULT_HR_PASSWORD)?;
        Ok(self.hr_password_hash.get_or_init(|| hash))
    }

    /// Resolves credentials to a user without touching the session.
    ///
    /// The HR account is checked first, then employees in store order; the
    /// first employee whose username matches and whose hash verifies wins.
    pub async fn authenticate(&self, username: &str, password: &str) -> Result<Option<User>> {
        if username == self.hr_username && self.hasher.verify(password, self.hr_password_hash()?) {
            return Ok(Some(User::hr(username)));
        }

        let employees = self.employees.list_all().await?;
        let matched = employees.into_iter().find(|employee| {
            employee.username == username
                && employee.has_credentials()
                && self.hasher.verify(password, &employee.password_hash)
        });

        Ok(matched.map(|employee| User::employee(username, employee.id)))
    }

    /// Verifies credentials and, on success, stores the session.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(User))`: Signed in
    /// - `Ok(None)`: Credentials did not match any account
    /// - `Err(_)`: The store could not be read or written
    pub async fn login_user(&self, username: &str, password: &str) -> Result<Option<User>> {
        let user = self.authenticate(username, password).await?;
        match &user {
            Some(user) => {
                self.sessions.save(user).await?;
                tracing::info!(user_id = %user.id, role = %user.role, "Signed in");
            }
            None => tracing::warn!("Rejected sign-in attempt"),
        }
        Ok(user)
    }

    /// Sign-in through a role-specific login screen.
    ///
    /// Fails with `InvalidCredentials` both for wrong credentials and for
    /// valid credentials of the other role; no session is stored in either
    /// case.
    pub async fn login_as(&self, role: Role, username: &str, password: &str) -> Result<User> {
        match self.authenticate(username, password).await? {
            Some(user) if user.role == role => {
                self.sessions.save(&user).await?;
                tracing::info!(user_id = %user.id, role = %user.role, "Signed in");
                Ok(user)
            }
            Some(user) => {
                tracing::warn!(
                    selected = %role,
                    actual = %user.role,
                    "Rejected sign-in for the wrong login type"
                );
                Err(HrError::InvalidCredentials)
            }
            None => {
                tracing::warn!(selected = %role, "Rejected sign-in attempt");
                Err(HrError::InvalidCredentials)
            }
        }
    }

    /// Clears the session unconditionally.
    pub async fn logout(&self) -> Result<()> {
        self.sessions.clear().await?;
        tracing::info!("Signed out");
        Ok(())
    }

    pub async fn current_user(&self) -> Result<Option<User>> {
        self.sessions.load().await
    }

    /// The current user, provided they hold `role`.
    pub async fn require_role(&self, role: Role) -> Result<User> {
        match self.current_user().await? {
            Some(user) if user.role == role => Ok(user),
            Some(user) => Err(HrError::unauthorized(format!(
                "signed in as {}, this requires {}",
                user.role, role
            ))),
            None => Err(HrError::unauthorized("not signed in")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hrdesk_core::config::DEFAULT_HR_USERNAME;
    use hrdesk_core::employee::Employee;
    use hrdesk_infrastructure::{JsonEmployeeRepository, JsonSessionRepository};
    use tempfile::TempDir;

    /// Reversible stand-in so tests do not pay for Argon2.
    struct PrefixHasher;

    impl CredentialHasher for PrefixHasher {
        fn hash(&self, password: &str) -> Result<String> {
            Ok(format!("hashed:{}", password))
        }

        fn verify(&self, password: &str, password_hash: &str) -> bool {
            !password_hash.is_empty() && password_hash == format!("hashed:{}", password)
        }
    }

    struct Fixture {
        gate: AuthGate,
        employees: Arc<JsonEmployeeRepository>,
        sessions: Arc<JsonSessionRepository>,
        _temp_dir: TempDir,
    }

    fn fixture() -> Fixture {
        let temp_dir = TempDir::new().unwrap();
        let employees = Arc::new(JsonEmployeeRepository::with_dir(temp_dir.path()));
        let sessions = Arc::new(JsonSessionRepository::with_dir(temp_dir.path()));
        let gate = AuthGate::from_settings(
            &HrSettings::default(),
            employees.clone(),
            sessions.clone(),
            Arc::new(PrefixHasher),
        );
        Fixture {
            gate,
            employees,
            sessions,
            _temp_dir: temp_dir,
        }
    }

    fn account(id: &str, username: &str, password: &str) -> Employee {
        Employee {
            id: id.to_string(),
            employee_name: username.to_string(),
            username: username.to_string(),
            password_hash: if password.is_empty() {
                String::new()
            } else {
                format!("hashed:{}", password)
            },
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_builtin_hr_login() {
        let f = fixture();
        let user = f
            .gate
            .login_user(DEFAULT_HR_USERNAME, DEFAULT_HR_PASSWORD)
            .await
            .unwrap()
            .unwrap();

        assert_eq!(user.id, "hr-1");
        assert_eq!(user.role, Role::Hr);
        assert_eq!(f.sessions.load().await.unwrap(), Some(user));
    }

    #[tokio::test]
    async fn test_wrong_password_leaves_session_empty() {
        let f = fixture();
        let user = f.gate.login_user(DEFAULT_HR_USERNAME, "nope").await.unwrap();
        assert!(user.is_none());
        assert!(f.gate.current_user().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_employee_login_resolves_employee_id() {
        let f = fixture();
        f.employees.save(&account("1700000000000", "asha", "pw1")).await.unwrap();

        let user = f.gate.login_user("asha", "pw1").await.unwrap().unwrap();
        assert_eq!(user.role, Role::Employee);
        assert_eq!(user.id, "emp-1700000000000");
        assert_eq!(user.employee_id.as_deref(), Some("1700000000000"));
    }

    #[tokio::test]
    async fn test_first_matching_employee_wins() {
        let f = fixture();
        f.employees.save(&account("1", "dup", "same")).await.unwrap();
        f.employees.save(&account("2", "dup", "same")).await.unwrap();

        let user = f.gate.login_user("dup", "same").await.unwrap().unwrap();
        assert_eq!(user.employee_id.as_deref(), Some("1"));
    }

    #[tokio::test]
    async fn test_empty_password_never_matches() {
        let f = fixture();
        f.employees.save(&account("1", "nopass", "")).await.unwrap();

        assert!(f.gate.login_user("nopass", "").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_login_as_wrong_role_is_rejected_without_session() {
        let f = fixture();
        f.employees.save(&account("1", "asha", "pw1")).await.unwrap();

        let err = f
            .gate
            .login_as(Role::Hr, "asha", "pw1")
            .await
            .unwrap_err();
        assert_eq!(err, HrError::InvalidCredentials);
        assert_eq!(err.to_string(), "Invalid credentials or incorrect login type");
        assert!(f.gate.current_user().await.unwrap().is_none());

        let err = f
            .gate
            .login_as(Role::Employee, DEFAULT_HR_USERNAME, DEFAULT_HR_PASSWORD)
            .await
            .unwrap_err();
        assert_eq!(err, HrError::InvalidCredentials);
        assert!(f.gate.current_user().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_login_as_matching_role() {
        let f = fixture();
        let user = f
            .gate
            .login_as(Role::Hr, DEFAULT_HR_USERNAME, DEFAULT_HR_PASSWORD)
            .await
            .unwrap();
        assert!(user.is_hr());
        assert_eq!(f.gate.require_role(Role::Hr).await.unwrap(), user);
    }

    #[tokio::test]
    async fn test_require_role() {
        let f = fixture();
        assert!(f.gate.require_role(Role::Hr).await.unwrap_err().is_auth());

        f.employees.save(&account("1", "asha", "pw1")).await.unwrap();
        f.gate.login_user("asha", "pw1").await.unwrap();
        assert!(f.gate.require_role(Role::Hr).await.unwrap_err().is_auth());
        assert!(f.gate.require_role(Role::Employee).await.is_ok());
    }

    #[tokio::test]
    async fn test_logout_clears_session() {
        let f = fixture();
        f.gate
            .login_user(DEFAULT_HR_USERNAME, DEFAULT_HR_PASSWORD)
            .await
            .unwrap();
        f.gate.logout().await.unwrap();
        assert!(f.gate.current_user().await.unwrap().is_none());

        // logging out twice is fine
        f.gate.logout().await.unwrap();
    }

    #[tokio::test]
    async fn test_configured_hash_replaces_builtin_password() {
        let temp_dir = TempDir::new().unwrap();
        let settings = HrSettings {
            username: "hr@example.com".to_string(),
            password_hash: Some("hashed:changed".to_string()),
        };
        let gate = AuthGate::from_settings(
            &settings,
            Arc::new(JsonEmployeeRepository::with_dir(temp_dir.path())),
            Arc::new(JsonSessionRepository::with_dir(temp_dir.path())),
            Arc::new(PrefixHasher),
        );

        assert!(
            gate.login_user("hr@example.com", DEFAULT_HR_PASSWORD)
                .await
                .unwrap()
                .is_none()
        );
        assert!(
            gate.login_user("hr@example.com", "changed")
                .await
                .unwrap()
                .is_some()
        );
    }

    /// Counts `hash` calls so tests can see when the HR password is hashed.
    #[derive(Default)]
    struct CountingHasher {
        hashes: std::sync::atomic::AtomicUsize,
    }

    impl CountingHasher {
        fn hashes(&self) -> usize {
            self.hashes.load(std::sync::atomic::Ordering::SeqCst)
        }
    }

    impl CredentialHasher for CountingHasher {
        fn hash(&self, password: &str) -> Result<String> {
            self.hashes.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
            PrefixHasher.hash(password)
        }

        fn verify(&self, password: &str, password_hash: &str) -> bool {
            PrefixHasher.verify(password, password_hash)
        }
    }

    #[tokio::test]
    async fn test_builtin_hr_password_is_hashed_only_for_hr_sign_in() {
        let temp_dir = TempDir::new().unwrap();
        let employees = Arc::new(JsonEmployeeRepository::with_dir(temp_dir.path()));
        employees.save(&account("1", "asha", "pw1")).await.unwrap();
        let hasher = Arc::new(CountingHasher::default());
        let gate = AuthGate::from_settings(
            &HrSettings::default(),
            employees,
            Arc::new(JsonSessionRepository::with_dir(temp_dir.path())),
            hasher.clone(),
        );

        assert!(gate.current_user().await.unwrap().is_none());
        assert!(gate.require_role(Role::Hr).await.is_err());
        gate.login_user("asha", "pw1").await.unwrap().unwrap();
        gate.logout().await.unwrap();
        assert_eq!(hasher.hashes(), 0);

        assert!(gate.login_user(DEFAULT_HR_USERNAME, "nope").await.unwrap().is_none());
        gate.login_as(Role::Hr, DEFAULT_HR_USERNAME, DEFAULT_HR_PASSWORD)
            .await
            .unwrap();
        gate.login_user(DEFAULT_HR_USERNAME, DEFAULT_HR_PASSWORD)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(hasher.hashes(), 1);
    }
}
