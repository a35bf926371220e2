use std::collections::{BTreeMap, BTreeSet};

/// The shared body-like handle the projector writes to.
///
/// Stands in for the document body of the host: a class list plus inline
/// custom properties. The host mirrors this state onto its real display
/// surface after every projection. Ordered containers keep iteration
/// deterministic so two projections of the same record compare equal.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleTarget {
    classes: BTreeSet<String>,
    properties: BTreeMap<String, String>,
}

impl StyleTarget {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_class(&mut self, class: &str) {
        self.classes.insert(class.to_string());
    }

    pub fn remove_class(&mut self, class: &str) {
        self.classes.remove(class);
    }

    /// Drop every class starting with `prefix`. Idempotent.
    pub fn remove_classes_with_prefix(&mut self, prefix: &str) {
        self.classes.retain(|c| !c.starts_with(prefix));
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.classes.iter().map(String::as_str)
    }

    pub fn set_property(&mut self, name: &str, value: &str) {
        self.properties.insert(name.to_string(), value.to_string());
    }

    pub fn remove_property(&mut self, name: &str) {
        self.properties.remove(name);
    }

    pub fn property(&self, name: &str) -> Option<&str> {
        self.properties.get(name).map(String::as_str)
    }

    pub fn properties(&self) -> impl Iterator<Item = (&str, &str)> {
        self.properties
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty() && self.properties.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_roundtrip() {
        let mut target = StyleTarget::new();
        target.add_class("preset-alpha");
        assert!(target.has_class("preset-alpha"));
        target.remove_class("preset-alpha");
        assert!(!target.has_class("preset-alpha"));
    }

    #[test]
    fn test_remove_classes_with_prefix() {
        let mut target = StyleTarget::new();
        target.add_class("preset-alpha");
        target.add_class("preset-beta");
        target.add_class("is-mobile");
        target.remove_classes_with_prefix("preset-");
        assert!(!target.has_class("preset-alpha"));
        assert!(!target.has_class("preset-beta"));
        assert!(target.has_class("is-mobile"));

        // Removing again is a no-op
        target.remove_classes_with_prefix("preset-");
        assert!(target.has_class("is-mobile"));
    }

    #[test]
    fn test_property_roundtrip() {
        let mut target = StyleTarget::new();
        target.set_property("--stylepad-blur", "4px");
        assert_eq!(target.property("--stylepad-blur"), Some("4px"));
        target.set_property("--stylepad-blur", "0px");
        assert_eq!(target.property("--stylepad-blur"), Some("0px"));
        target.remove_property("--stylepad-blur");
        assert_eq!(target.property("--stylepad-blur"), None);
        assert!(target.is_empty());
    }

    #[test]
    fn test_deterministic_equality() {
        let mut a = StyleTarget::new();
        a.add_class("preset-alpha");
        a.set_property("font-weight", "400");

        let mut b = StyleTarget::new();
        b.set_property("font-weight", "400");
        b.add_class("preset-alpha");

        assert_eq!(a, b);
    }
}
