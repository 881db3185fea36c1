//! UI widgets with no counterpart in the game model

pub mod button;
pub mod dialog;

pub use button::Button;
pub use dialog::{DialogChoice, InputDialog};
