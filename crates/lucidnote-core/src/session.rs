//! Identity provider contract.
//!
//! Pages that show notes or the canvas call [`require_user`] and send the
//! visitor to the sign-in view on [`AuthError::NotSignedIn`].

use crate::storage::{BoxFuture, UserId};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::RwLock;
use thiserror::Error;
use uuid::Uuid;

/// Authentication errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("Not signed in")]
    NotSignedIn,
    #[error("Invalid email or password")]
    InvalidCredentials,
    #[error("An account already exists for {0}")]
    AlreadyRegistered(String),
    #[error("Identity provider error: {0}")]
    Backend(String),
}

/// Result type for session operations.
pub type AuthResult<T> = Result<T, AuthError>;

/// A signed-in user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub email: String,
}

/// Third-party sign-in providers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OAuthProvider {
    Google,
}

/// Identity provider used by the host pages.
#[cfg(not(target_arch = "wasm32"))]
pub trait SessionProvider: Send + Sync {
    /// The signed-in user, if any.
    fn current_user(&self) -> BoxFuture<'_, AuthResult<Option<User>>>;

    fn sign_in(&self, email: &str, password: &str) -> BoxFuture<'_, AuthResult<User>>;

    fn sign_up(&self, email: &str, password: &str) -> BoxFuture<'_, AuthResult<User>>;

    fn sign_in_with_oauth(&self, provider: OAuthProvider) -> BoxFuture<'_, AuthResult<User>>;

    fn sign_out(&self) -> BoxFuture<'_, AuthResult<()>>;
}

/// Identity provider used by the host pages (WASM version without Send + Sync).
#[cfg(target_arch = "wasm32")]
pub trait SessionProvider {
    /// The signed-in user, if any.
    fn current_user(&self) -> BoxFuture<'_, AuthResult<Option<User>>>;

    fn sign_in(&self, email: &str, password: &str) -> BoxFuture<'_, AuthResult<User>>;

    fn sign_up(&self, email: &str, password: &str) -> BoxFuture<'_, AuthResult<User>>;

    fn sign_in_with_oauth(&self, provider: OAuthProvider) -> BoxFuture<'_, AuthResult<User>>;

    fn sign_out(&self) -> BoxFuture<'_, AuthResult<()>>;
}

/// Resolve the signed-in user or fail with [`AuthError::NotSignedIn`].
pub async fn require_user<P: SessionProvider + ?Sized>(provider: &P) -> AuthResult<User> {
    provider.current_user().await?.ok_or(AuthError::NotSignedIn)
}

/// A registered account. OAuth accounts have no password.
struct Account {
    password: Option<String>,
    user: User,
}

#[derive(Default)]
struct Accounts {
    by_email: HashMap<String, Account>,
    current: Option<User>,
}

/// In-memory identity provider for tests and local runs.
#[derive(Default)]
pub struct MemorySessionProvider {
    accounts: RwLock<Accounts>,
}

impl MemorySessionProvider {
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_error(e: impl std::fmt::Display) -> AuthError {
    AuthError::Backend(format!("Lock error: {}", e))
}

fn normalize(email: &str) -> String {
    email.trim().to_lowercase()
}

impl SessionProvider for MemorySessionProvider {
    fn current_user(&self) -> BoxFuture<'_, AuthResult<Option<User>>> {
        Box::pin(async move {
            let accounts = self.accounts.read().map_err(lock_error)?;
            Ok(accounts.current.clone())
        })
    }

    fn sign_in(&self, email: &str, password: &str) -> BoxFuture<'_, AuthResult<User>> {
        let email = normalize(email);
        let password = password.to_string();
        Box::pin(async move {
            let mut accounts = self.accounts.write().map_err(lock_error)?;
            let user = match accounts.by_email.get(&email) {
                Some(Account {
                    password: Some(stored),
                    user,
                }) if *stored == password => user.clone(),
                _ => return Err(AuthError::InvalidCredentials),
            };
            log::info!("Signed in {}", user.email);
            accounts.current = Some(user.clone());
            Ok(user)
        })
    }

    fn sign_up(&self, email: &str, password: &str) -> BoxFuture<'_, AuthResult<User>> {
        let email = normalize(email);
        let password = password.to_string();
        Box::pin(async move {
            let mut accounts = self.accounts.write().map_err(lock_error)?;
            if accounts.by_email.contains_key(&email) {
                return Err(AuthError::AlreadyRegistered(email));
            }
            let user = User {
                id: Uuid::new_v4(),
                email: email.clone(),
            };
            accounts.by_email.insert(
                email,
                Account {
                    password: Some(password),
                    user: user.clone(),
                },
            );
            accounts.current = Some(user.clone());
            Ok(user)
        })
    }

    fn sign_in_with_oauth(&self, provider: OAuthProvider) -> BoxFuture<'_, AuthResult<User>> {
        Box::pin(async move {
            let mut accounts = self.accounts.write().map_err(lock_error)?;
            let email = match provider {
                OAuthProvider::Google => "oauth@google".to_string(),
            };
            let user = accounts
                .by_email
                .entry(email.clone())
                .or_insert_with(|| Account {
                    password: None,
                    user: User {
                        id: Uuid::new_v4(),
                        email,
                    },
                })
                .user
                .clone();
            accounts.current = Some(user.clone());
            Ok(user)
        })
    }

    fn sign_out(&self) -> BoxFuture<'_, AuthResult<()>> {
        Box::pin(async move {
            let mut accounts = self.accounts.write().map_err(lock_error)?;
            accounts.current = None;
            Ok(())
        })
    }
}
