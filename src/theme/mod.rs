//! Theme for Story Card.

mod styles;

pub use styles::GLOBAL_STYLES;
