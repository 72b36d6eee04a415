//! Authentication capability.
//!
//! The login screen talks to an [`Authenticator`]. The prototype ships with
//! [`SimulatedAuthenticator`], which waits a fixed delay and accepts any
//! credentials. A real backend only needs another implementation.

use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use thiserror::Error;

/// Email/password pair entered on the login screen.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

// Password never reaches logs.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// An authenticated session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub account: String,
}

impl Session {
    /// Name to greet the user with; anonymous sessions have an empty account.
    pub fn display_name(&self) -> &str {
        if self.account.trim().is_empty() {
            "guest"
        } else {
            &self.account
        }
    }
}

/// Failure kinds for a login attempt.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("network failure: {0}")]
    NetworkFailure(String),
    #[error("login timed out after {0:?}")]
    Timeout(Duration),
}

impl AuthError {
    /// Message shown under the login form.
    pub fn user_message(&self) -> String {
        match self {
            AuthError::InvalidCredentials => {
                "Incorrect email or password. Please try again.".to_string()
            }
            AuthError::NetworkFailure(_) => {
                "Unable to reach the server. Check your connection and retry.".to_string()
            }
            AuthError::Timeout(_) => "The server took too long to respond. Please retry.".to_string(),
        }
    }

    /// Whether the form should stay open for another attempt.
    pub fn is_retryable(&self) -> bool {
        match self {
            AuthError::InvalidCredentials
            | AuthError::NetworkFailure(_)
            | AuthError::Timeout(_) => true,
        }
    }
}

pub type AuthFuture = Pin<Box<dyn Future<Output = Result<Session, AuthError>> + Send>>;

/// Pluggable authentication backend.
pub trait Authenticator: Send + Sync {
    fn attempt(&self, credentials: Credentials) -> AuthFuture;
}

/// Accepts any credentials after a fixed delay.
#[derive(Debug, Clone, Copy)]
pub struct SimulatedAuthenticator {
    delay: Duration,
}

impl SimulatedAuthenticator {
    pub const DEFAULT_DELAY: Duration = Duration::from_millis(1500);

    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for SimulatedAuthenticator {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DELAY)
    }
}

impl Authenticator for SimulatedAuthenticator {
    fn attempt(&self, credentials: Credentials) -> AuthFuture {
        let delay = self.delay;
        Box::pin(async move {
            tracing::debug!(?delay, "simulating login");
            tokio::time::sleep(delay).await;
            Ok(Session {
                account: credentials.email,
            })
        })
    }
}

/// Runs an attempt under a timeout. `None` waits indefinitely.
pub async fn attempt_with_timeout(
    authenticator: &dyn Authenticator,
    credentials: Credentials,
    timeout: Option<Duration>,
) -> Result<Session, AuthError> {
    let attempt = authenticator.attempt(credentials);
    match timeout {
        Some(limit) => tokio::time::timeout(limit, attempt)
            .await
            .unwrap_or(Err(AuthError::Timeout(limit))),
        None => attempt.await,
    }
}
