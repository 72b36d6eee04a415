//! Login feature reducer.
//!
//! Handles form editing, submission and attempt results. Navigation is left
//! to the root reducer, which acts on the returned [`LoginOutcome`].

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use screenmind_core::auth::{AuthError, Session};

use super::state::{Focus, LoginState};
use crate::common::TaskSeq;
use crate::effects::{PlaceholderAction, UiEffect};

/// What the root reducer should do after a login attempt completes.
#[derive(Debug, PartialEq, Eq)]
pub enum LoginOutcome {
    Authenticated(Session),
    Failed,
}

/// Starts a login attempt with the current field values.
///
/// No validation happens here; the authenticator decides.
pub fn submit(login: &mut LoginState, task_seq: &mut TaskSeq) -> Vec<UiEffect> {
    if !login.begin_submit() {
        return vec![];
    }
    let task = task_seq.next_id();
    tracing::info!(task = task.0, "login submitted");
    vec![UiEffect::AttemptLogin {
        task,
        credentials: login.credentials(),
    }]
}

/// Handles a key press while the login screen is visible.
pub fn handle_key(login: &mut LoginState, task_seq: &mut TaskSeq, key: KeyEvent) -> Vec<UiEffect> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Char('t') if ctrl => {
            login.toggle_password_visibility();
            vec![]
        }
        KeyCode::Tab | KeyCode::Down => {
            login.focus = login.focus.next();
            vec![]
        }
        KeyCode::BackTab | KeyCode::Up => {
            login.focus = login.focus.prev();
            vec![]
        }
        KeyCode::Enter => activate(login, task_seq),
        KeyCode::Char(' ') if !login.focus.is_text_input() => activate(login, task_seq),
        _ if login.is_editable() => {
            edit_focused_field(login, key);
            vec![]
        }
        _ => vec![],
    }
}

/// Inserts pasted text into the focused field.
pub fn handle_paste(login: &mut LoginState, text: &str) {
    if !login.is_editable() {
        return;
    }
    if let Some(field) = login.focused_field_mut() {
        field.insert_str(text);
    }
}

/// Applies a finished attempt to the form.
pub fn handle_login_result(
    login: &mut LoginState,
    result: Result<Session, AuthError>,
) -> LoginOutcome {
    login.finish_loading();
    match result {
        Ok(session) => {
            login.discard_draft();
            LoginOutcome::Authenticated(session)
        }
        Err(err) => {
            tracing::warn!(error = %err, retryable = err.is_retryable(), "login failed");
            login.error = Some(err.user_message());
            LoginOutcome::Failed
        }
    }
}

fn activate(login: &mut LoginState, task_seq: &mut TaskSeq) -> Vec<UiEffect> {
    match login.focus {
        Focus::Email | Focus::Password | Focus::Submit => submit(login, task_seq),
        Focus::VisibilityToggle => {
            login.toggle_password_visibility();
            vec![]
        }
        Focus::ForgotPassword => vec![UiEffect::LogPlaceholder {
            action: PlaceholderAction::ForgotPassword,
        }],
        Focus::CreateAccount => vec![UiEffect::LogPlaceholder {
            action: PlaceholderAction::CreateAccount,
        }],
    }
}

fn edit_focused_field(login: &mut LoginState, key: KeyEvent) {
    let Some(field) = login.focused_field_mut() else {
        return;
    };
    let plain = !key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT);

    match key.code {
        KeyCode::Char(c) if plain => field.insert_char(c),
        KeyCode::Backspace => field.delete_prev_char(),
        KeyCode::Delete => field.delete_next_char(),
        KeyCode::Left => field.move_left(),
        KeyCode::Right => field.move_right(),
        KeyCode::Home => field.move_home(),
        KeyCode::End => field.move_end(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use screenmind_core::auth::Credentials;

    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_text(login: &mut LoginState, seq: &mut TaskSeq, text: &str) {
        for c in text.chars() {
            handle_key(login, seq, key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn test_typing_goes_to_focused_field() {
        let mut login = LoginState::new();
        let mut seq = TaskSeq::default();

        type_text(&mut login, &mut seq, "a@b.com");
        handle_key(&mut login, &mut seq, key(KeyCode::Tab));
        type_text(&mut login, &mut seq, "x");

        assert_eq!(login.credentials(), Credentials::new("a@b.com", "x"));
    }

    #[test]
    fn test_enter_submits_current_fields() {
        let mut login = LoginState::new();
        let mut seq = TaskSeq::default();
        type_text(&mut login, &mut seq, "a@b.com");

        let effects = handle_key(&mut login, &mut seq, key(KeyCode::Enter));

        assert!(login.is_loading);
        assert!(matches!(
            effects.as_slice(),
            [UiEffect::AttemptLogin { credentials, .. }] if credentials.email == "a@b.com"
        ));
    }

    #[test]
    fn test_editing_ignored_while_loading() {
        let mut login = LoginState::new();
        let mut seq = TaskSeq::default();
        submit(&mut login, &mut seq);

        type_text(&mut login, &mut seq, "late");
        handle_paste(&mut login, "pasted");

        assert!(login.email.is_empty());
    }

    #[test]
    fn test_space_on_toggle_flips_visibility() {
        let mut login = LoginState::new();
        let mut seq = TaskSeq::default();
        login.focus = Focus::VisibilityToggle;

        handle_key(&mut login, &mut seq, key(KeyCode::Char(' ')));
        assert!(login.is_password_visible);
    }

    #[test]
    fn test_ctrl_t_toggles_from_text_field() {
        let mut login = LoginState::new();
        let mut seq = TaskSeq::default();

        handle_key(
            &mut login,
            &mut seq,
            KeyEvent::new(KeyCode::Char('t'), KeyModifiers::CONTROL),
        );
        assert!(login.is_password_visible);
        assert!(login.email.is_empty());
    }

    #[test]
    fn test_links_only_log() {
        let mut login = LoginState::new();
        let mut seq = TaskSeq::default();
        login.focus = Focus::ForgotPassword;

        let effects = handle_key(&mut login, &mut seq, key(KeyCode::Enter));
        assert!(matches!(
            effects.as_slice(),
            [UiEffect::LogPlaceholder {
                action: PlaceholderAction::ForgotPassword
            }]
        ));

        login.focus = Focus::CreateAccount;
        let effects = handle_key(&mut login, &mut seq, key(KeyCode::Enter));
        assert!(matches!(
            effects.as_slice(),
            [UiEffect::LogPlaceholder {
                action: PlaceholderAction::CreateAccount
            }]
        ));
        assert!(!login.is_loading);
    }

    #[test]
    fn test_failed_result_keeps_form_and_shows_message() {
        let mut login = LoginState::new();
        let mut seq = TaskSeq::default();
        type_text(&mut login, &mut seq, "a@b.com");
        submit(&mut login, &mut seq);

        let outcome = handle_login_result(&mut login, Err(AuthError::InvalidCredentials));

        assert_eq!(outcome, LoginOutcome::Failed);
        assert!(!login.is_loading);
        assert_eq!(login.email.value(), "a@b.com");
        assert_eq!(
            login.error.as_deref(),
            Some(AuthError::InvalidCredentials.user_message().as_str())
        );
        // Retry is allowed.
        assert_eq!(submit(&mut login, &mut seq).len(), 1);
    }
}
