//! Reusable UI components
//!
//! All components emit plain class names; styling lives in the shell's
//! global stylesheet.

mod button;
mod music_option;
mod upload_tile;

pub use button::*;
pub use music_option::*;
pub use upload_tile::*;
