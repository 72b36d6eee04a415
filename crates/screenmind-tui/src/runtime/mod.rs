//! TUI runtime - owns terminal, runs event loop, executes effects.
//!
//! This is the "Elm runtime" boundary: all side effects happen here.
//! The reducer stays pure and produces effects; this module executes them.
//!
//! Structure:
//! - `mod.rs`: Core runtime (TuiRuntime, event loop, effect dispatch)
//! - `inbox.rs`: Inbox channel types
//! - `handlers.rs`: Async effect handlers

pub(crate) mod handlers;
mod inbox;

use std::future::Future;
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event;
use inbox::{UiEventReceiver, UiEventSender};
use screenmind_core::auth::{Authenticator, Credentials};
use screenmind_core::config::Config;
use screenmind_core::dashboard::Providers;
use screenmind_core::interrupt;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::common::{TaskCompleted, TaskId, TaskKind, TaskStarted};
use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::state::AppState;
use crate::terminal::{self, Tui};
use crate::{render, update};

/// Tick interval while a task is running (spinner animation).
pub const FRAME_DURATION: Duration = Duration::from_millis(16);

/// Poll duration when idle.
pub const IDLE_POLL_DURATION: Duration = Duration::from_millis(100);

/// Full-screen TUI runtime.
///
/// Owns the terminal and state. Runs the event loop and executes effects.
/// Terminal state is restored on drop, panic, or a second Ctrl+C.
pub struct TuiRuntime {
    terminal: Tui,
    pub state: AppState,
    /// Inbox sender - spawned tasks send events here.
    inbox_tx: UiEventSender,
    /// Inbox receiver - runtime drains this each frame.
    inbox_rx: UiEventReceiver,
    authenticator: Arc<dyn Authenticator>,
    last_tick: Instant,
}

impl TuiRuntime {
    /// Creates a new TUI runtime. Must be called from within a tokio runtime.
    pub fn new(
        config: Config,
        providers: &Providers,
        authenticator: Arc<dyn Authenticator>,
    ) -> Result<Self> {
        // Panic hook goes in BEFORE entering the alternate screen.
        terminal::install_panic_hook();
        interrupt::set_restore_hook(|| {
            let _ = terminal::restore_terminal();
        });
        interrupt::reset();

        let terminal = terminal::setup_terminal().context("Failed to setup terminal")?;
        let state = AppState::new(config, providers);
        let (inbox_tx, inbox_rx) = mpsc::unbounded_channel();

        Ok(Self {
            terminal,
            state,
            inbox_tx,
            inbox_rx,
            authenticator,
            last_tick: Instant::now(),
        })
    }

    /// Runs the main event loop until the user quits.
    pub fn run(&mut self) -> Result<()> {
        let mut dirty = true;

        while !self.state.should_quit {
            // Only an external SIGINT lands here; raw mode delivers Ctrl+C as a key.
            if interrupt::is_interrupted() {
                tracing::info!("interrupted, shutting down");
                self.cancel_pending_tasks();
                self.state.should_quit = true;
                return Err(interrupt::InterruptedError.into());
            }

            for event in self.collect_events()? {
                if matches!(event, UiEvent::Tick | UiEvent::Terminal(_)) {
                    dirty = true;
                }
                let effects = update::update(&mut self.state, event);
                self.execute_effects(effects);
            }

            if dirty && !self.state.should_quit {
                self.terminal.draw(|frame| render::render(&self.state, frame))?;
                dirty = false;
            }
        }

        Ok(())
    }

    // ========================================================================
    // Event Collection
    // ========================================================================

    /// Collects events from the inbox and the terminal, plus a Tick when due.
    fn collect_events(&mut self) -> Result<Vec<UiEvent>> {
        let mut events = Vec::new();

        let tick_interval = if self.state.tasks.is_any_running() {
            FRAME_DURATION
        } else {
            IDLE_POLL_DURATION
        };

        while let Ok(ev) = self.inbox_rx.try_recv() {
            events.push(ev);
        }

        // Don't block when there is already work to do.
        let poll_duration = if events.is_empty() {
            tick_interval.saturating_sub(self.last_tick.elapsed())
        } else {
            Duration::ZERO
        };

        if event::poll(poll_duration)? {
            events.push(UiEvent::Terminal(event::read()?));
            while event::poll(Duration::ZERO)? {
                events.push(UiEvent::Terminal(event::read()?));
            }
        }

        if self.last_tick.elapsed() >= tick_interval {
            events.push(UiEvent::Tick);
            self.last_tick = Instant::now();
        }

        Ok(events)
    }

    // ========================================================================
    // Effect Dispatch
    // ========================================================================

    fn execute_effects(&mut self, effects: Vec<UiEffect>) {
        for effect in effects {
            self.execute_effect(effect);
        }
    }

    fn execute_effect(&mut self, effect: UiEffect) {
        match effect {
            UiEffect::Quit => {
                self.state.should_quit = true;
            }
            UiEffect::AttemptLogin { task, credentials } => {
                spawn_login(
                    &self.inbox_tx,
                    Arc::clone(&self.authenticator),
                    self.state.config.auth_timeout(),
                    task,
                    credentials,
                );
            }
            UiEffect::LogPlaceholder { action } => {
                tracing::info!("{}", action.description());
            }
            UiEffect::CancelTask { kind, token } => {
                tracing::debug!(?kind, "cancelling task");
                if let Some(token) = token {
                    token.cancel();
                }
            }
        }
    }

    fn cancel_pending_tasks(&self) {
        if let Some(token) = self.state.tasks.state(TaskKind::Login).cancel.as_ref() {
            token.cancel();
        }
    }
}

impl Drop for TuiRuntime {
    fn drop(&mut self) {
        self.cancel_pending_tasks();
        let _ = terminal::restore_terminal();
    }
}

/// Starts a login attempt as a cancelable `TaskKind::Login` task.
fn spawn_login(
    tx: &UiEventSender,
    authenticator: Arc<dyn Authenticator>,
    timeout: Option<Duration>,
    task: TaskId,
    credentials: Credentials,
) {
    // Credentials stay out of the log file.
    tracing::info!(task = task.0, ?timeout, "login attempt");
    spawn_task(tx, TaskKind::Login, task, true, move |cancel| {
        handlers::login_attempt(authenticator, credentials, timeout, cancel)
    });
}

/// Spawns an async task with a uniform TaskStarted/TaskCompleted lifecycle.
///
/// `TaskStarted` is queued before the task runs, so the reducer always
/// sees it ahead of the matching `TaskCompleted`.
fn spawn_task<F, Fut>(tx: &UiEventSender, kind: TaskKind, id: TaskId, cancelable: bool, f: F)
where
    F: FnOnce(Option<CancellationToken>) -> Fut + Send + 'static,
    Fut: Future<Output = UiEvent> + Send + 'static,
{
    let tx = tx.clone();
    let cancel = cancelable.then(CancellationToken::new);
    let started = TaskStarted {
        id,
        cancel: cancel.clone(),
    };
    let _ = tx.send(UiEvent::TaskStarted { kind, started });
    tokio::spawn(async move {
        let inner = f(cancel).await;
        let completed = TaskCompleted {
            id,
            result: Box::new(inner),
        };
        let _ = tx.send(UiEvent::TaskCompleted { kind, completed });
    });
}
