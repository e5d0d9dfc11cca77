//! Application state module

mod app_state;
mod page;
mod scroll_state;

pub use app_state::*;
pub use page::*;
