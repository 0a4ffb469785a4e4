//! Reusable UI components

mod button;
mod dialog;

pub use button::{render_send_button, render_tab_button, BUTTON_HEIGHT};
pub use dialog::render_error_dialog;
