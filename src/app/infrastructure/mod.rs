//! Infrastructure layer - external integrations.
//!
//! This module contains code that interfaces with the host:
//! - Settings persistence (the injected load/save pair)
//! - Error types

pub mod error;
pub mod storage;

pub use error::{AppError, Result};
pub use storage::{JsonFileStore, MemoryStore, SettingsStore};
