//! Login feature slice (state/update/render).

mod render;
mod state;
mod update;

pub use render::render_login;
pub use state::{Focus, LoginState};
pub use update::{LoginOutcome, handle_key, handle_login_result, handle_paste, submit};
