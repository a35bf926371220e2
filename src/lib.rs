//! stylepad - theme preset and appearance switcher core.
//!
//! The host-independent heart of a cosmetic style plugin for notepad-style
//! applications: a flat settings record persisted as JSON, a preset catalog
//! scanned from whatever style rules are loaded, and a projector that maps
//! the record onto a shared body-like style target. The host supplies
//! persistence (a [`SettingsStore`]) and a toast channel (a [`Notifier`]);
//! everything else lives here and runs without a style engine, which keeps
//! the whole mechanism testable against fixture selector lists.
//!
//! ```
//! use stylepad::{Command, FixtureSource, LogNotifier, MemoryStore, StylePlugin};
//!
//! let source = FixtureSource::new(&[".preset-alpha", ".preset-beta"]);
//! let mut plugin = StylePlugin::new(MemoryStore::new(), LogNotifier, Box::new(source));
//! plugin.onload()?;
//!
//! plugin.dispatch(Command::CyclePresetOverride)?;
//! assert!(plugin.target().has_class("preset-alpha"));
//!
//! plugin.onunload();
//! assert!(plugin.target().is_empty());
//! # Ok::<(), stylepad::AppError>(())
//! ```

pub mod app;

pub use app::{
    cycle_next, AppError, Command, CssFileSource, FixtureSource, JsonFileStore, LogNotifier,
    MemoryStore, Notifier, PresetCatalog, Projector, Result, SettingsStore, StylePlugin,
    StyleSettings, StyleSource, StyleTarget,
};
