//! Root stack navigator.
//!
//! Holds the route history for the two top-level screens. The last entry is
//! the visible screen. Tab selection lives inside the `Home` route so the
//! whole navigation state is one value.

use screenmind_core::dashboard::Tab;

/// Top-level screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Login,
    Home { tab: Tab },
}

impl Route {
    pub fn name(self) -> &'static str {
        match self {
            Route::Login => "Login",
            Route::Home { .. } => "HomeStack",
        }
    }
}

/// Authentication status derived from the visible route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthStatus {
    LoggedOut,
    LoggedIn,
}

#[derive(Debug, Clone)]
pub struct Navigator {
    history: Vec<Route>,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator {
    /// Starts at the login screen.
    pub fn new() -> Self {
        Self {
            history: vec![Route::Login],
        }
    }

    pub fn current(&self) -> Route {
        self.history.last().copied().unwrap_or(Route::Login)
    }

    pub fn status(&self) -> AuthStatus {
        match self.current() {
            Route::Login => AuthStatus::LoggedOut,
            Route::Home { .. } => AuthStatus::LoggedIn,
        }
    }

    pub fn depth(&self) -> usize {
        self.history.len()
    }

    pub fn can_go_back(&self) -> bool {
        self.history.len() > 1
    }

    pub fn push(&mut self, route: Route) {
        tracing::debug!(route = route.name(), "push");
        self.history.push(route);
    }

    /// Discards the whole history and shows `route`.
    pub fn replace(&mut self, route: Route) {
        tracing::info!(from = self.current().name(), to = route.name(), "replace");
        self.history.clear();
        self.history.push(route);
    }

    /// Pops the visible route. Returns false when it is the only one.
    pub fn back(&mut self) -> bool {
        if !self.can_go_back() {
            return false;
        }
        self.history.pop();
        true
    }

    /// Active tab when the home screen is visible.
    pub fn active_tab(&self) -> Option<Tab> {
        match self.current() {
            Route::Home { tab } => Some(tab),
            Route::Login => None,
        }
    }

    /// Switches tabs in place. No-op outside the home screen.
    pub fn select_tab(&mut self, tab: Tab) -> bool {
        match self.history.last_mut() {
            Some(Route::Home { tab: active }) => {
                *active = tab;
                true
            }
            _ => false,
        }
    }
}
