//! Services layer - business operations.
//!
//! This module contains the two working parts of the plugin:
//! - Preset discovery over loaded style rules
//! - Projection of the settings record onto the style target

pub mod projector;
pub mod scanner;

pub use projector::Projector;
pub use scanner::{CssFileSource, FixtureSource, StyleSource};
