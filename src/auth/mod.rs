//! Who is logged in.
//!
//! [`AuthSession`] pairs the auth endpoints with the persisted token and
//! produces [`AuthSnapshot`]s; the UI keeps the latest snapshot in
//! [`context::AuthContext`] and never touches the token directly.

pub mod context;
mod guard;

use tracing::{info, warn};

use crate::api::{ApiClient, ApiError, Credentials, Id, LoginResponse, User, UserUpdate};
use crate::storage::TokenStore;

pub use guard::{Access, Requirement};

/// Current auth state. Without a valid token `user` is `None` and
/// `logged_in` is false.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthSnapshot {
    pub logged_in: bool,
    pub user: Option<User>,
    pub loading: bool,
}

impl AuthSnapshot {
    /// State before the startup profile check has finished.
    pub fn initial() -> Self {
        Self {
            logged_in: false,
            user: None,
            loading: true,
        }
    }

    pub fn logged_out() -> Self {
        Self {
            logged_in: false,
            user: None,
            loading: false,
        }
    }

    pub fn logged_in(user: User) -> Self {
        Self {
            logged_in: true,
            user: Some(user),
            loading: false,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.logged_in && self.user.as_ref().is_some_and(|u| u.is_admin)
    }
}

/// The auth endpoints a session needs.
pub trait AuthBackend {
    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError>;
    async fn logout(&self) -> Result<(), ApiError>;
    async fn current_user(&self) -> Result<User, ApiError>;
    async fn update_user(&self, id: Id, update: &UserUpdate) -> Result<(), ApiError>;
    async fn delete_user(&self, id: Id, confirmation: &Credentials) -> Result<(), ApiError>;
}

impl AuthBackend for ApiClient {
    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError> {
        ApiClient::login(self, credentials).await
    }

    async fn logout(&self) -> Result<(), ApiError> {
        ApiClient::logout(self).await
    }

    async fn current_user(&self) -> Result<User, ApiError> {
        ApiClient::current_user(self).await
    }

    async fn update_user(&self, id: Id, update: &UserUpdate) -> Result<(), ApiError> {
        ApiClient::update_user(self, id, update).await
    }

    async fn delete_user(&self, id: Id, confirmation: &Credentials) -> Result<(), ApiError> {
        ApiClient::delete_user(self, id, confirmation).await
    }
}

#[derive(Debug, Clone)]
pub struct AuthSession<B, S> {
    backend: B,
    tokens: S,
}

impl<B: AuthBackend, S: TokenStore> AuthSession<B, S> {
    pub fn new(backend: B, tokens: S) -> Self {
        Self { backend, tokens }
    }

    /// Startup check. With no stored token nothing is fetched; a rejected
    /// token is discarded.
    pub async fn bootstrap(&self) -> AuthSnapshot {
        if self.tokens.get().is_none() {
            return AuthSnapshot::logged_out();
        }
        self.refresh().await
    }

    /// Re-derive the snapshot from `GET /user`.
    pub async fn refresh(&self) -> AuthSnapshot {
        match self.backend.current_user().await {
            Ok(user) => {
                info!("Session restored for {}", user.email);
                AuthSnapshot::logged_in(user)
            }
            Err(e) => {
                warn!("Stored token rejected: {}", e);
                self.tokens.clear();
                AuthSnapshot::logged_out()
            }
        }
    }

    pub async fn login(&self, credentials: &Credentials) -> Result<AuthSnapshot, ApiError> {
        if credentials.email.trim().is_empty() || credentials.password.is_empty() {
            return Err(ApiError::Validation(
                "Email and password are required".to_string(),
            ));
        }

        let resp = self.backend.login(credentials).await?;
        let (token, user) = match (resp.token, resp.user) {
            (Some(token), Some(user)) if !token.is_empty() => (token, user),
            _ => return Err(ApiError::Auth("Invalid response from server".to_string())),
        };

        self.tokens.set(&token);
        info!("Logged in as {}", user.email);
        Ok(AuthSnapshot::logged_in(user))
    }

    /// Server-side invalidation is best effort; local state is always cleared.
    pub async fn logout(&self) -> AuthSnapshot {
        if let Err(e) = self.backend.logout().await {
            warn!("Logout failed: {}", e);
        }
        self.tokens.clear();
        info!("Logged out");
        AuthSnapshot::logged_out()
    }

    /// Push the edit, then trust only what the server reports back.
    pub async fn update_profile(
        &self,
        user: &User,
        update: &UserUpdate,
    ) -> Result<AuthSnapshot, ApiError> {
        self.backend.update_user(user.id, update).await?;
        Ok(self.refresh().await)
    }

    /// Deletes the account after re-checking the credentials. On failure the
    /// token is left untouched.
    pub async fn delete_account(
        &self,
        user: &User,
        confirmation: &Credentials,
    ) -> Result<AuthSnapshot, ApiError> {
        if !confirmation.email.trim().eq_ignore_ascii_case(&user.email) {
            return Err(ApiError::Validation(
                "Email does not match the signed-in account".to_string(),
            ));
        }
        if confirmation.password.is_empty() {
            return Err(ApiError::Validation("Password is required".to_string()));
        }

        self.backend.delete_user(user.id, confirmation).await?;
        self.tokens.clear();
        info!("Account {} deleted", user.id);
        Ok(AuthSnapshot::logged_out())
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};

    use futures::executor::block_on;

    use super::*;
    use crate::storage::memory::MemoryTokenStore;

    const PASSWORD: &str = "s3cret";

    fn alice() -> User {
        User {
            id: 1,
            name: "Alice".to_string(),
            email: "alice@cinehall.test".to_string(),
            is_admin: false,
        }
    }

    /// Accepts a single token and a single password.
    #[derive(Default)]
    struct FakeBackend {
        tokens: MemoryTokenStore,
        user: RefCell<Option<User>>,
        profile_calls: Cell<u32>,
        logout_fails: bool,
        omit_token: bool,
    }

    impl FakeBackend {
        fn with_user(tokens: &MemoryTokenStore) -> Self {
            Self {
                tokens: tokens.clone(),
                user: RefCell::new(Some(alice())),
                ..Self::default()
            }
        }
    }

    impl AuthBackend for &FakeBackend {
        async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError> {
            if credentials.password != PASSWORD {
                return Err(ApiError::Auth("Invalid credentials".to_string()));
            }
            Ok(LoginResponse {
                token: (!self.omit_token).then(|| "valid-token".to_string()),
                user: self.user.borrow().clone(),
            })
        }

        async fn logout(&self) -> Result<(), ApiError> {
            if self.logout_fails {
                return Err(ApiError::Network("connection reset".to_string()));
            }
            Ok(())
        }

        async fn current_user(&self) -> Result<User, ApiError> {
            self.profile_calls.set(self.profile_calls.get() + 1);
            match (self.tokens.get().as_deref(), self.user.borrow().clone()) {
                (Some("valid-token"), Some(user)) => Ok(user),
                _ => Err(ApiError::Auth("Unauthenticated.".to_string())),
            }
        }

        async fn update_user(&self, _id: Id, update: &UserUpdate) -> Result<(), ApiError> {
            if let Some(user) = self.user.borrow_mut().as_mut() {
                user.name = update.name.clone();
                user.email = update.email.clone();
            }
            Ok(())
        }

        async fn delete_user(&self, _id: Id, confirmation: &Credentials) -> Result<(), ApiError> {
            if confirmation.password != PASSWORD {
                return Err(ApiError::Auth("The provided password is incorrect.".to_string()));
            }
            self.user.borrow_mut().take();
            Ok(())
        }
    }

    fn credentials(password: &str) -> Credentials {
        Credentials {
            email: "alice@cinehall.test".to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn test_no_token_at_startup_skips_profile_fetch() {
        let tokens = MemoryTokenStore::default();
        let backend = FakeBackend::with_user(&tokens);
        let session = AuthSession::new(&backend, tokens.clone());

        let snapshot = block_on(session.bootstrap());

        assert_eq!(snapshot, AuthSnapshot::logged_out());
        assert_eq!(backend.profile_calls.get(), 0);
    }

    #[test]
    fn test_expired_token_is_cleared_at_startup() {
        let tokens = MemoryTokenStore::with_token("expired");
        let backend = FakeBackend::with_user(&tokens);
        let session = AuthSession::new(&backend, tokens.clone());

        let snapshot = block_on(session.bootstrap());

        assert!(!snapshot.logged_in);
        assert!(snapshot.user.is_none());
        assert!(tokens.get().is_none());
    }

    #[test]
    fn test_refresh_is_idempotent_with_valid_token() {
        let tokens = MemoryTokenStore::with_token("valid-token");
        let backend = FakeBackend::with_user(&tokens);
        let session = AuthSession::new(&backend, tokens.clone());

        let first = block_on(session.bootstrap());
        let second = block_on(session.refresh());

        assert_eq!(first, AuthSnapshot::logged_in(alice()));
        assert_eq!(first, second);
    }

    #[test]
    fn test_login_stores_token_and_profile() {
        let tokens = MemoryTokenStore::default();
        let backend = FakeBackend::with_user(&tokens);
        let session = AuthSession::new(&backend, tokens.clone());

        let snapshot = block_on(session.login(&credentials(PASSWORD))).unwrap();

        assert!(snapshot.logged_in);
        assert_eq!(snapshot.user, Some(alice()));
        assert_eq!(tokens.get().as_deref(), Some("valid-token"));
    }

    #[test]
    fn test_login_rejected_leaves_state_untouched() {
        let tokens = MemoryTokenStore::default();
        let backend = FakeBackend::with_user(&tokens);
        let session = AuthSession::new(&backend, tokens.clone());

        let err = block_on(session.login(&credentials("wrong"))).unwrap_err();

        assert_eq!(err, ApiError::Auth("Invalid credentials".to_string()));
        assert!(tokens.get().is_none());
    }

    #[test]
    fn test_login_without_token_is_invalid_response() {
        let tokens = MemoryTokenStore::default();
        let backend = FakeBackend {
            omit_token: true,
            ..FakeBackend::with_user(&tokens)
        };
        let session = AuthSession::new(&backend, tokens.clone());

        let err = block_on(session.login(&credentials(PASSWORD))).unwrap_err();
        assert_eq!(err, ApiError::Auth("Invalid response from server".to_string()));
    }

    #[test]
    fn test_login_requires_both_fields() {
        let tokens = MemoryTokenStore::default();
        let backend = FakeBackend::with_user(&tokens);
        let session = AuthSession::new(&backend, tokens.clone());

        let err = block_on(session.login(&credentials(""))).unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
    }

    #[test]
    fn test_logout_clears_even_when_server_fails() {
        let tokens = MemoryTokenStore::with_token("valid-token");
        let backend = FakeBackend {
            logout_fails: true,
            ..FakeBackend::with_user(&tokens)
        };
        let session = AuthSession::new(&backend, tokens.clone());

        let snapshot = block_on(session.logout());

        assert_eq!(snapshot, AuthSnapshot::logged_out());
        assert!(tokens.get().is_none());
    }

    #[test]
    fn test_update_profile_rereads_from_server() {
        let tokens = MemoryTokenStore::with_token("valid-token");
        let backend = FakeBackend::with_user(&tokens);
        let session = AuthSession::new(&backend, tokens.clone());
        let update = UserUpdate {
            name: "Alice B.".to_string(),
            email: "alice@cinehall.test".to_string(),
        };

        let snapshot = block_on(session.update_profile(&alice(), &update)).unwrap();

        assert_eq!(snapshot.user.map(|u| u.name), Some("Alice B.".to_string()));
        assert_eq!(backend.profile_calls.get(), 1);
    }

    #[test]
    fn test_delete_account_wrong_password_keeps_session() {
        let tokens = MemoryTokenStore::with_token("valid-token");
        let backend = FakeBackend::with_user(&tokens);
        let session = AuthSession::new(&backend, tokens.clone());

        let err = block_on(session.delete_account(&alice(), &credentials("wrong"))).unwrap_err();

        assert!(matches!(err, ApiError::Auth(_)));
        assert_eq!(tokens.get().as_deref(), Some("valid-token"));
        assert_eq!(block_on(session.refresh()), AuthSnapshot::logged_in(alice()));
    }

    #[test]
    fn test_delete_account_email_mismatch_never_calls_server() {
        let tokens = MemoryTokenStore::with_token("valid-token");
        let backend = FakeBackend::with_user(&tokens);
        let session = AuthSession::new(&backend, tokens.clone());
        let confirmation = Credentials {
            email: "mallory@cinehall.test".to_string(),
            password: PASSWORD.to_string(),
        };

        let err = block_on(session.delete_account(&alice(), &confirmation)).unwrap_err();

        assert!(matches!(err, ApiError::Validation(_)));
        assert!(backend.user.borrow().is_some());
    }

    #[test]
    fn test_delete_account_clears_session() {
        let tokens = MemoryTokenStore::with_token("valid-token");
        let backend = FakeBackend::with_user(&tokens);
        let session = AuthSession::new(&backend, tokens.clone());

        let snapshot = block_on(session.delete_account(&alice(), &credentials(PASSWORD))).unwrap();

        assert_eq!(snapshot, AuthSnapshot::logged_out());
        assert!(tokens.get().is_none());
    }

    #[test]
    fn test_admin_flag_requires_login() {
        let admin = User {
            is_admin: true,
            ..alice()
        };
        assert!(AuthSnapshot::logged_in(admin).is_admin());
        assert!(!AuthSnapshot::logged_in(alice()).is_admin());
        assert!(!AuthSnapshot::initial().is_admin());
    }
}
