//! Story Card UI Components
//!
//! Dioxus components shared by the card view and the editor panel,
//! styled by the storybook palette in the desktop shell's theme.
//!
//! ## Palette
//!
//! - **Holly red (#c21e1e)**: titles, primary actions
//! - **Pine (#2f5d40)**: secondary actions, borders
//! - **Peach (#f9bca4)**: page background, dashed upload tiles
//! - **Cocoa (#4a3728)**: body text

pub mod components;

pub use components::*;
