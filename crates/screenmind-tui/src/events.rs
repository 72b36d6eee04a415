//! UI events consumed by the reducer.
//!
//! Terminal input, ticks and async task results all arrive as `UiEvent`s
//! and are processed one at a time by `update::update`.

use crossterm::event::Event;
use screenmind_core::auth::{AuthError, Session};

use crate::common::{TaskCompleted, TaskKind, TaskStarted};

#[derive(Debug)]
pub enum UiEvent {
    /// Periodic tick (drives spinner animation and rendering).
    Tick,

    /// Raw terminal event (key, paste, resize).
    Terminal(Event),

    /// An async task was spawned.
    TaskStarted { kind: TaskKind, started: TaskStarted },

    /// An async task finished; `result` is the event it produced.
    TaskCompleted {
        kind: TaskKind,
        completed: TaskCompleted<Box<UiEvent>>,
    },

    /// Outcome of a login attempt.
    LoginResult(Result<Session, AuthError>),

    /// The pending login attempt was cancelled before it finished.
    LoginCancelled,
}
