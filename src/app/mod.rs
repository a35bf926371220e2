//! Application layer - organized by Clean Architecture principles.
//!
//! # Structure
//!
//! - `domain/` - Core data structures (settings record, catalogs, style target)
//! - `services/` - Business operations (preset scanning, projection)
//! - `infrastructure/` - External integrations (persistence, error)
//! - `state.rs` - Plugin coordinator

pub mod domain;
pub mod infrastructure;
pub mod services;
pub mod state;

// Re-exports for convenient external access
pub use domain::{cycle_next, PresetCatalog, StyleSettings, StyleTarget};
pub use infrastructure::{AppError, JsonFileStore, MemoryStore, Result, SettingsStore};
pub use services::{CssFileSource, FixtureSource, Projector, StyleSource};
pub use state::{Command, LogNotifier, Notifier, StylePlugin};
