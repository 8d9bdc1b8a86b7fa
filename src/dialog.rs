//! Interactive popup showing the ranked view
//!
//! Read-only: the dialog lists entries in the order it was given and only
//! moves a highlight over them.

mod dialog_events;
mod dialog_render;
mod dialog_state;

pub use dialog_events::run_dialog;
pub use dialog_render::render_dialog;
pub use dialog_state::StatsDialog;
