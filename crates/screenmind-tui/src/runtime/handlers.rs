//! Effect handlers for the TUI runtime.
//!
//! Handlers are async functions that perform I/O and return the `UiEvent`
//! describing the outcome. They never touch `AppState`; the runtime spawns
//! them and routes the result through the inbox.

use std::sync::Arc;
use std::time::Duration;

use screenmind_core::auth::{self, Authenticator, Credentials};
use tokio_util::sync::CancellationToken;

use crate::events::UiEvent;

/// Runs one login attempt, racing it against cancellation.
pub async fn login_attempt(
    authenticator: Arc<dyn Authenticator>,
    credentials: Credentials,
    timeout: Option<Duration>,
    cancel: Option<CancellationToken>,
) -> UiEvent {
    let attempt = auth::attempt_with_timeout(authenticator.as_ref(), credentials, timeout);
    match cancel {
        Some(token) => tokio::select! {
            () = token.cancelled() => UiEvent::LoginCancelled,
            result = attempt => UiEvent::LoginResult(result),
        },
        None => UiEvent::LoginResult(attempt.await),
    }
}

#[cfg(test)]
mod tests {
    use screenmind_core::auth::{AuthError, AuthFuture, Session, SimulatedAuthenticator};

    use super::*;

    struct Hanging;

    impl Authenticator for Hanging {
        fn attempt(&self, _credentials: Credentials) -> AuthFuture {
            Box::pin(std::future::pending::<Result<Session, AuthError>>())
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_wins_over_pending_attempt() {
        let token = CancellationToken::new();
        let handle = tokio::spawn(login_attempt(
            Arc::new(SimulatedAuthenticator::default()),
            Credentials::default(),
            None,
            Some(token.clone()),
        ));
        token.cancel();
        assert!(matches!(handle.await.unwrap(), UiEvent::LoginCancelled));
    }

    #[tokio::test(start_paused = true)]
    async fn test_hanging_backend_times_out() {
        let event = login_attempt(
            Arc::new(Hanging),
            Credentials::default(),
            Some(Duration::from_secs(10)),
            Some(CancellationToken::new()),
        )
        .await;
        assert!(matches!(
            event,
            UiEvent::LoginResult(Err(AuthError::Timeout(limit))) if limit == Duration::from_secs(10)
        ));
    }
}
