//! Domain layer - core data structures and types.
//!
//! This module contains the fundamental domain models:
//! - The settings record and its defaults
//! - Preset and type catalogs, plus the cycle helper
//! - The style target handle

pub mod catalog;
pub mod settings;
pub mod target;

pub use catalog::{cycle_next, primary_type_catalog, secondary_type_catalog, PresetCatalog};
pub use settings::StyleSettings;
pub use target::StyleTarget;
