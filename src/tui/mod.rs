//! TUI module: Terminal User Interface using Ratatui.
//!
//! A single screen with the vehicle form on the left and the price
//! prediction on the right.

mod app;
mod styles;
mod ui;

pub use app::App;
pub use styles::ShowroomTheme;
