//! egui front end
//!
//! All game logic lives in [`GameController`](crate::GameController); this
//! module only draws it and forwards clicks and key presses.

mod app;
mod board_view;
mod theme;

pub use app::GomokuApp;
