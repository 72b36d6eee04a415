//! Application state composition.
//!
//! ## State Hierarchy
//!
//! ```text
//! AppState
//! ├── nav: Navigator          (route history + active tab)
//! ├── login: LoginState       (credential draft, loading/visibility flags)
//! ├── dashboard: DashboardState (per-tab snapshots)
//! ├── session: Option<Session>
//! ├── task_seq: TaskSeq       (async task id generator)
//! └── tasks: Tasks            (task lifecycle state)
//! ```
//!
//! Only the reducer mutates this; render functions take it by `&`.

use screenmind_core::auth::Session;
use screenmind_core::config::Config;
use screenmind_core::dashboard::Providers;

use crate::common::{TaskSeq, Tasks};
use crate::features::dashboard::DashboardState;
use crate::features::login::LoginState;
use crate::navigation::Navigator;

pub struct AppState {
    /// Flag indicating the app should quit.
    pub should_quit: bool,
    /// Root navigation (login vs home, active tab).
    pub nav: Navigator,
    /// Login form state.
    pub login: LoginState,
    /// Dashboard content for each tab.
    pub dashboard: DashboardState,
    /// Session established by the last successful login.
    pub session: Option<Session>,
    /// Task id sequence for async operations.
    pub task_seq: TaskSeq,
    /// Task lifecycle state for async operations.
    pub tasks: Tasks,
    /// Spinner animation frame counter.
    pub spinner_frame: usize,
    pub config: Config,
}

impl AppState {
    pub fn new(config: Config, providers: &Providers) -> Self {
        Self {
            should_quit: false,
            nav: Navigator::new(),
            login: LoginState::new(),
            dashboard: DashboardState::from_providers(providers),
            session: None,
            task_seq: TaskSeq::default(),
            tasks: Tasks::default(),
            spinner_frame: 0,
            config,
        }
    }
}
