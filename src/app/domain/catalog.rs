use crate::app::services::scanner::{self, StyleSource};

/// The closed type vocabulary. Order is the cycling order; never scanned,
/// never changes at runtime.
pub const TYPE_NAMES: [&str; 18] = [
    "normal", "fire", "water", "electric", "grass", "ice", "fighting", "poison", "ground",
    "flying", "psychic", "bug", "rock", "ghost", "dragon", "dark", "steel", "fairy",
];

/// Class tokens for the primary type dimension.
pub fn primary_type_catalog() -> Vec<String> {
    TYPE_NAMES
        .iter()
        .map(|name| format!("primary-type-{}", name))
        .collect()
}

/// Class tokens for the secondary type dimension.
pub fn secondary_type_catalog() -> Vec<String> {
    TYPE_NAMES
        .iter()
        .map(|name| format!("secondary-type-{}", name))
        .collect()
}

/// Next entry after `current`, wrapping past the end.
///
/// A `current` not present in the catalog acts like index -1, so the first
/// entry comes back. Callers must not pass an empty catalog; they surface a
/// "nothing to cycle" notice instead of calling.
pub fn cycle_next<'a>(catalog: &'a [String], current: &str) -> &'a str {
    debug_assert!(!catalog.is_empty());
    let index = catalog
        .iter()
        .position(|entry| entry == current)
        .map(|i| i as isize)
        .unwrap_or(-1);
    let next = (index + 1) as usize % catalog.len();
    &catalog[next]
}

/// Lazily computed, explicitly invalidated cache of the scanned presets.
///
/// The scan walks whatever the injected [`StyleSource`] can see right now, so
/// the cache must be cleared whenever the host swaps themes or snippets.
#[derive(Debug, Default)]
pub struct PresetCatalog {
    cached: Option<Vec<String>>,
}

impl PresetCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached catalog, scanning the source first if needed.
    pub fn get_or_compute(&mut self, source: &dyn StyleSource) -> &[String] {
        if self.cached.is_none() {
            self.cached = Some(scanner::scan_presets(source));
        }
        self.cached.as_deref().unwrap_or(&[])
    }

    /// Clear the cache; the next `get_or_compute` rescans.
    pub fn invalidate(&mut self) {
        self.cached = None;
    }

    pub fn is_cached(&self) -> bool {
        self.cached.is_some()
    }
}
