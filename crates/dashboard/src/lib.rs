//! Screen state, refresh orchestration, and card rendering.

pub mod refresh;
pub mod render;
pub mod screen;
pub mod state;

#[cfg(test)]
mod testutil;

pub use refresh::Refresher;
pub use render::{render_dashboard, ProbabilityTier};
pub use screen::Screen;
pub use state::{new_shared_state, AppState, SharedState};
