//! UI effect types.
//!
//! Effects are commands returned by the reducer that the runtime executes.
//! They represent I/O and task spawning only (no direct UI mutations).
//!
//! This keeps the reducer pure: it only mutates state and returns effects,
//! never performs I/O or spawns tasks directly.

use screenmind_core::auth::Credentials;
use tokio_util::sync::CancellationToken;

use crate::common::{TaskId, TaskKind};

/// Login-screen links that have no destination yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceholderAction {
    ForgotPassword,
    CreateAccount,
}

impl PlaceholderAction {
    pub fn description(self) -> &'static str {
        match self {
            PlaceholderAction::ForgotPassword => "Navigate to forgot password",
            PlaceholderAction::CreateAccount => "Navigate to signup",
        }
    }
}

/// Effects returned by the reducer for the runtime to execute.
#[derive(Debug)]
pub enum UiEffect {
    /// Quit the application.
    Quit,

    /// Run a login attempt with the authenticator.
    AttemptLogin {
        task: TaskId,
        credentials: Credentials,
    },

    /// Record a tap on a link that has no screen behind it.
    LogPlaceholder { action: PlaceholderAction },

    /// Cancel an in-progress task.
    CancelTask {
        kind: TaskKind,
        token: Option<CancellationToken>,
    },
}
