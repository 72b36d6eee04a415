//! Dashboard feature slice: the four placeholder tabs of the home screen.

mod render;
mod state;
mod update;

pub use render::{render_dashboard, render_home};
pub use state::DashboardState;
pub use update::handle_key;
