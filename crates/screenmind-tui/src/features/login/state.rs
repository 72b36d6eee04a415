//! Login form state.

use screenmind_core::auth::Credentials;

use crate::common::TextField;

/// Keyboard focus within the login form, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Email,
    Password,
    VisibilityToggle,
    Submit,
    ForgotPassword,
    CreateAccount,
}

impl Focus {
    const ORDER: [Focus; 6] = [
        Focus::Email,
        Focus::Password,
        Focus::VisibilityToggle,
        Focus::Submit,
        Focus::ForgotPassword,
        Focus::CreateAccount,
    ];

    fn position(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    #[must_use]
    pub fn next(self) -> Focus {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    #[must_use]
    pub fn prev(self) -> Focus {
        Self::ORDER[(self.position() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }

    pub fn is_text_input(self) -> bool {
        matches!(self, Focus::Email | Focus::Password)
    }
}

/// Transient state of the login screen.
#[derive(Debug, Clone, Default)]
pub struct LoginState {
    pub email: TextField,
    pub password: TextField,
    pub focus: Focus,
    pub is_loading: bool,
    pub is_password_visible: bool,
    /// Message from the last failed attempt.
    pub error: Option<String>,
}

impl LoginState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn credentials(&self) -> Credentials {
        Credentials::new(self.email.value(), self.password.value())
    }

    /// Inputs and the submit button are disabled while loading.
    pub fn is_editable(&self) -> bool {
        !self.is_loading
    }

    pub fn toggle_password_visibility(&mut self) {
        self.is_password_visible = !self.is_password_visible;
    }

    /// Enters the loading state. Returns false if an attempt is already running.
    pub fn begin_submit(&mut self) -> bool {
        if self.is_loading {
            return false;
        }
        self.is_loading = true;
        self.error = None;
        true
    }

    pub fn finish_loading(&mut self) {
        self.is_loading = false;
    }

    /// Drops the credential draft once the screen is left behind.
    pub fn discard_draft(&mut self) {
        self.email.clear();
        self.password.clear();
        self.is_password_visible = false;
        self.focus = Focus::Email;
    }

    pub fn focused_field_mut(&mut self) -> Option<&mut TextField> {
        match self.focus {
            Focus::Email => Some(&mut self.email),
            Focus::Password => Some(&mut self.password),
            _ => None,
        }
    }
}
