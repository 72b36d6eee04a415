//! TUI reducer (update function).
//!
//! All state mutations happen here. The runtime calls `update(app, event)`
//! and executes the returned effects.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use screenmind_core::auth::{AuthError, Session};

use crate::common::TaskKind;
use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::features::{dashboard, login};
use crate::navigation::Route;
use crate::state::AppState;

/// The main reducer function.
///
/// Takes the current state and an event, mutates state, and returns effects
/// for the runtime to execute.
pub fn update(app: &mut AppState, event: UiEvent) -> Vec<UiEffect> {
    match event {
        UiEvent::Tick => {
            app.spinner_frame = app.spinner_frame.wrapping_add(1);
            vec![]
        }
        UiEvent::Terminal(term_event) => handle_terminal_event(app, term_event),
        UiEvent::TaskStarted { kind, started } => {
            app.tasks.state_mut(kind).on_started(&started);
            vec![]
        }
        UiEvent::TaskCompleted { kind, completed } => {
            if app.tasks.state_mut(kind).finish_if_active(completed.id) {
                update(app, *completed.result)
            } else {
                tracing::debug!(?kind, task = completed.id.0, "dropping stale task result");
                vec![]
            }
        }
        UiEvent::LoginResult(result) => handle_login_result(app, result),
        UiEvent::LoginCancelled => {
            app.login.finish_loading();
            vec![]
        }
    }
}

fn handle_terminal_event(app: &mut AppState, event: Event) -> Vec<UiEffect> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(app, key),
        Event::Paste(text) => {
            if app.nav.current() == Route::Login {
                login::handle_paste(&mut app.login, &text);
            }
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    if ctrl && matches!(key.code, KeyCode::Char('c' | 'q')) {
        return quit_effects(app);
    }

    match app.nav.current() {
        Route::Login => login::handle_key(&mut app.login, &mut app.task_seq, key),
        Route::Home { .. } => {
            let effects = dashboard::handle_key(&mut app.nav, key);
            if effects.iter().any(|e| matches!(e, UiEffect::Quit)) {
                return quit_effects(app);
            }
            effects
        }
    }
}

/// Quits, cancelling any pending login first.
fn quit_effects(app: &AppState) -> Vec<UiEffect> {
    let mut effects = Vec::new();
    let login_task = app.tasks.state(TaskKind::Login);
    if login_task.is_running() {
        effects.push(UiEffect::CancelTask {
            kind: TaskKind::Login,
            token: login_task.cancel.clone(),
        });
    }
    effects.push(UiEffect::Quit);
    effects
}

fn handle_login_result(app: &mut AppState, result: Result<Session, AuthError>) -> Vec<UiEffect> {
    // The login screen may already be gone; never touch its state then.
    if app.nav.current() != Route::Login {
        tracing::debug!("login result arrived after leaving the login screen");
        return vec![];
    }

    match login::handle_login_result(&mut app.login, result) {
        login::LoginOutcome::Authenticated(session) => {
            tracing::info!(tab = %app.config.default_tab, "logged in");
            app.session = Some(session);
            app.nav.replace(Route::Home {
                tab: app.config.default_tab,
            });
        }
        login::LoginOutcome::Failed => {}
    }
    vec![]
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use screenmind_core::auth::{Credentials, SimulatedAuthenticator};
    use screenmind_core::config::Config;
    use screenmind_core::dashboard::{Tab, stub_providers};
    use tokio::time::Instant;

    use super::*;
    use crate::common::{TaskCompleted, TaskId, TaskStarted};
    use crate::navigation::AuthStatus;
    use crate::runtime::handlers;

    fn app() -> AppState {
        AppState::new(Config::default(), &stub_providers())
    }

    fn key(code: KeyCode) -> UiEvent {
        UiEvent::Terminal(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)))
    }

    fn type_text(app: &mut AppState, text: &str) {
        for c in text.chars() {
            update(app, key(KeyCode::Char(c)));
        }
    }

    /// Submits and returns the task id and credentials of the attempt.
    fn submit(app: &mut AppState) -> (TaskId, Credentials) {
        app.login.focus = login::Focus::Submit;
        let effects = update(app, key(KeyCode::Enter));
        let [UiEffect::AttemptLogin { task, credentials }] = effects.as_slice() else {
            panic!("expected a single login attempt, got {effects:?}");
        };
        update(
            app,
            UiEvent::TaskStarted {
                kind: TaskKind::Login,
                started: TaskStarted {
                    id: *task,
                    cancel: None,
                },
            },
        );
        (*task, credentials.clone())
    }

    fn complete(app: &mut AppState, id: TaskId, event: UiEvent) -> Vec<UiEffect> {
        update(
            app,
            UiEvent::TaskCompleted {
                kind: TaskKind::Login,
                completed: TaskCompleted {
                    id,
                    result: Box::new(event),
                },
            },
        )
    }

    fn ok_session() -> UiEvent {
        UiEvent::LoginResult(Ok(Session {
            account: String::new(),
        }))
    }

    #[test]
    fn test_submit_sets_loading_immediately() {
        let mut app = app();
        submit(&mut app);
        assert!(app.login.is_loading);
        assert_eq!(app.nav.status(), AuthStatus::LoggedOut);
    }

    #[test]
    fn test_empty_credentials_still_log_in() {
        let mut app = app();
        let (task, credentials) = submit(&mut app);
        assert_eq!(credentials, Credentials::default());

        complete(&mut app, task, ok_session());

        assert!(!app.login.is_loading);
        assert_eq!(app.nav.current(), Route::Home { tab: Tab::Usage });
    }

    #[test]
    fn test_second_submit_while_loading_is_ignored() {
        let mut app = app();
        submit(&mut app);
        let effects = update(&mut app, key(KeyCode::Enter));
        assert!(effects.is_empty());
    }

    #[test]
    fn test_login_is_unreachable_after_replace() {
        let mut app = app();
        let (task, _) = submit(&mut app);
        complete(&mut app, task, ok_session());

        update(&mut app, key(KeyCode::Esc));
        update(&mut app, key(KeyCode::Backspace));

        assert_eq!(app.nav.status(), AuthStatus::LoggedIn);
        assert!(!app.nav.can_go_back());
    }

    #[test]
    fn test_stale_task_result_is_dropped() {
        let mut app = app();
        let (task, _) = submit(&mut app);

        complete(&mut app, TaskId(task.0 + 1), ok_session());

        assert!(app.login.is_loading);
        assert_eq!(app.nav.current(), Route::Login);
    }

    #[test]
    fn test_result_after_leaving_login_is_ignored() {
        let mut app = app();
        let (task, _) = submit(&mut app);
        complete(&mut app, task, ok_session());
        app.nav.select_tab(Tab::Sleep);

        update(&mut app, UiEvent::LoginResult(Err(AuthError::InvalidCredentials)));

        assert_eq!(app.nav.current(), Route::Home { tab: Tab::Sleep });
        assert!(app.login.error.is_none());
    }

    #[test]
    fn test_failed_login_stays_on_login_with_message() {
        let mut app = app();
        let (task, _) = submit(&mut app);
        complete(
            &mut app,
            task,
            UiEvent::LoginResult(Err(AuthError::Timeout(Duration::from_secs(10)))),
        );

        assert_eq!(app.nav.current(), Route::Login);
        assert!(!app.login.is_loading);
        assert!(app.login.error.is_some());

        // Retry-eligible.
        let (retry, _) = submit(&mut app);
        assert_ne!(retry, task);
    }

    #[test]
    fn test_default_tab_comes_from_config() {
        let config = Config {
            default_tab: Tab::Social,
            ..Config::default()
        };
        let mut app = AppState::new(config, &stub_providers());
        let (task, _) = submit(&mut app);
        complete(&mut app, task, ok_session());
        assert_eq!(app.nav.active_tab(), Some(Tab::Social));
    }

    #[test]
    fn test_switching_tabs_never_changes_content() {
        let mut app = app();
        let (task, _) = submit(&mut app);
        complete(&mut app, task, ok_session());

        let before: Vec<_> = Tab::all()
            .iter()
            .map(|tab| app.dashboard.snapshot(*tab).clone())
            .collect();
        for code in [
            KeyCode::Right,
            KeyCode::Right,
            KeyCode::Char('4'),
            KeyCode::Left,
            KeyCode::Char('1'),
        ] {
            update(&mut app, key(code));
        }
        let after: Vec<_> = Tab::all()
            .iter()
            .map(|tab| app.dashboard.snapshot(*tab).clone())
            .collect();

        assert_eq!(before, after);
        assert_eq!(app.nav.active_tab(), Some(Tab::Usage));
    }

    #[test]
    fn test_ctrl_c_cancels_pending_login_and_quits() {
        let mut app = app();
        submit(&mut app);

        let effects = update(
            &mut app,
            UiEvent::Terminal(Event::Key(KeyEvent::new(
                KeyCode::Char('c'),
                KeyModifiers::CONTROL,
            ))),
        );

        assert!(matches!(
            effects.as_slice(),
            [
                UiEffect::CancelTask {
                    kind: TaskKind::Login,
                    ..
                },
                UiEffect::Quit
            ]
        ));
    }

    #[test]
    fn test_cancelled_login_clears_loading() {
        let mut app = app();
        let (task, _) = submit(&mut app);
        complete(&mut app, task, UiEvent::LoginCancelled);
        assert!(!app.login.is_loading);
        assert_eq!(app.nav.current(), Route::Login);
    }

    #[test]
    fn test_paste_fills_focused_field() {
        let mut app = app();
        update(
            &mut app,
            UiEvent::Terminal(Event::Paste("a@b.com".to_string())),
        );
        assert_eq!(app.login.email.value(), "a@b.com");
    }

    #[tokio::test(start_paused = true)]
    async fn test_login_scenario_with_simulated_delay() {
        let mut app = app();
        type_text(&mut app, "a@b.com");
        update(&mut app, key(KeyCode::Tab));
        type_text(&mut app, "x");

        let started = Instant::now();
        let (task, credentials) = submit(&mut app);
        assert!(app.login.is_loading);
        assert_eq!(credentials, Credentials::new("a@b.com", "x"));

        let authenticator = Arc::new(SimulatedAuthenticator::new(app.config.login_delay()));
        let event =
            handlers::login_attempt(authenticator, credentials, app.config.auth_timeout(), None)
                .await;
        assert!(started.elapsed() >= Duration::from_millis(1500));

        complete(&mut app, task, event);

        assert!(!app.login.is_loading);
        assert_eq!(app.nav.current(), Route::Home { tab: Tab::Usage });
        assert_eq!(
            app.session.as_ref().map(Session::display_name),
            Some("a@b.com")
        );
        assert!(app.login.email.is_empty());
    }
}
