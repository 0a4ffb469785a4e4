//! Application state module

mod app_state;
mod forms;
mod profile;

pub use app_state::*;
pub use forms::*;
pub use profile::*;
