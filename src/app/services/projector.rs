use crate::app::domain::settings::StyleSettings;
use crate::app::domain::target::StyleTarget;

/// Class namespaces this plugin generates. Everything matching one of these
/// is stripped before each projection and on teardown.
pub const CLASS_PREFIXES: [&str; 4] = ["preset-", "primary-type-", "secondary-type-", "stylepad-"];

const ROUNDED_TAGS_CLASS: &str = "stylepad-rounded-tags";
const ACCENTED_TAGS_CLASS: &str = "stylepad-accented-tags";

/// Every property any `apply` path can set. Teardown removes exactly this
/// list, so it must stay a superset of the writes below.
pub const OWNED_PROPERTIES: [&str; 30] = [
    "font-weight",
    "--file-line-width",
    "--stylepad-bold-color",
    "--stylepad-italic-color",
    "--stylepad-comment-color",
    "--stylepad-toolbar-rows",
    "--stylepad-table-border-style",
    "--table-background",
    "--stylepad-table-cell-width",
    "--stylepad-tag-pointer-events",
    "--system-status-background",
    "--blockquote-border-color",
    "--blockquote-border-thickness",
    "--stylepad-blockquote-style",
    "--stylepad-blockquote-alignment",
    "--stylepad-callout-background-color",
    "--stylepad-callout-icon",
    "--embed-max-height",
    "--stylepad-embed-title",
    "--stylepad-calendar-pointer-events",
    "--stylepad-calendar-border-color",
    "--stylepad-calendar-dayofweek-color",
    "--stylepad-calendar-dayofweek-background-color",
    "--stylepad-calendar-weekend-border-color",
    "--stylepad-calendar-dayofweek-border-width",
    "--font-interface",
    "--font-text",
    "--font-print",
    "--font-monospace",
    "--stylepad-blur",
];

/// Maps the settings record onto the style target.
///
/// Stateless: the observable target state after `apply` is a pure function
/// of the record, and applying the same record twice changes nothing.
#[derive(Debug, Default)]
pub struct Projector;

impl Projector {
    pub fn new() -> Self {
        Self
    }

    /// Project `settings` onto `target`, replacing any previous projection.
    pub fn apply(&self, settings: &StyleSettings, target: &mut StyleTarget) {
        self.remove_generated_classes(target);

        target.set_property("font-weight", &settings.font_weight.to_string());
        target.set_property("--file-line-width", &format!("{}%", settings.font_width));

        let accent = if settings.formatted_accent {
            "var(--stylepad-accent-1)"
        } else {
            "var(--text-normal)"
        };
        target.set_property("--stylepad-bold-color", accent);
        target.set_property("--stylepad-italic-color", accent);
        target.set_property("--stylepad-comment-color", accent);

        target.set_property(
            "--stylepad-toolbar-rows",
            &settings.mobile_toolbar_rows.to_string(),
        );

        let table_borders = if settings.table_style { "separate" } else { "collapse" };
        target.set_property("--stylepad-table-border-style", table_borders);
        let table_background = if settings.table_color {
            "var(--color-accent)"
        } else {
            "var(--background-primary)"
        };
        target.set_property("--table-background", table_background);
        let table_cell_width = if settings.table_width { "max-content" } else { "fit-content" };
        target.set_property("--stylepad-table-cell-width", table_cell_width);

        let tag_pointer = if settings.tag_interaction { "auto" } else { "none" };
        target.set_property("--stylepad-tag-pointer-events", tag_pointer);

        let statusbar = if settings.mobile_statusbar {
            "var(--color-accent)"
        } else {
            "var(--background-primary)"
        };
        target.set_property("--system-status-background", statusbar);

        let blockquote_border = if settings.blockquote_border {
            "var(--color-accent)"
        } else {
            "var(--text-normal)"
        };
        target.set_property("--blockquote-border-color", blockquote_border);
        if settings.blockquote_style {
            target.set_property("--blockquote-border-thickness", "0px");
            target.set_property("--stylepad-blockquote-style", "italic");
            target.set_property("--stylepad-blockquote-alignment", "center");
        } else {
            target.set_property("--blockquote-border-thickness", "2px");
            target.set_property("--stylepad-blockquote-style", "normal");
            target.set_property("--stylepad-blockquote-alignment", "start");
        }

        let callout_background = if settings.callout_background {
            "var(--color-accent)"
        } else {
            "var(--background-primary)"
        };
        target.set_property("--stylepad-callout-background-color", callout_background);
        let callout_icon = if settings.callout_icon { "block" } else { "none" };
        target.set_property("--stylepad-callout-icon", callout_icon);

        target.set_property("--embed-max-height", &format!("{}px", settings.embed_height));
        let embed_title = if settings.embed_title { "block" } else { "none" };
        target.set_property("--stylepad-embed-title", embed_title);

        let calendar_pointer = if settings.calendar_interaction { "auto" } else { "none" };
        target.set_property("--stylepad-calendar-pointer-events", calendar_pointer);
        if settings.calendar_style {
            target.set_property("--stylepad-calendar-border-color", "transparent");
            target.set_property(
                "--stylepad-calendar-dayofweek-color",
                "var(--stylepad-calendar-color)",
            );
            target.set_property("--stylepad-calendar-dayofweek-background-color", "transparent");
            target.set_property(
                "--stylepad-calendar-weekend-border-color",
                "var(--stylepad-accent-1)",
            );
            target.set_property("--stylepad-calendar-dayofweek-border-width", "1px");
        } else {
            target.set_property("--stylepad-calendar-border-color", "var(--stylepad-accent-1)");
            target.set_property("--stylepad-calendar-dayofweek-color", "var(--stylepad-night-0)");
            target.set_property(
                "--stylepad-calendar-dayofweek-background-color",
                "var(--stylepad-accent-1)",
            );
            target.set_property("--stylepad-calendar-weekend-border-color", "transparent");
            target.set_property("--stylepad-calendar-dayofweek-border-width", "0px");
        }

        // A non-blank preset override wins outright over the type classes
        if settings.preset_is_blank() {
            target.add_class(&settings.primary_type);
            target.add_class(&settings.secondary_type);
        } else {
            let token = settings.preset_override.trim().to_lowercase();
            target.add_class(&format!("preset-{}", token));
        }

        // Independent toggle classes; the two tag switches do not read
        // each other's state
        if settings.tag_shape {
            target.add_class(ROUNDED_TAGS_CLASS);
        }
        if settings.tag_accent {
            target.add_class(ACCENTED_TAGS_CLASS);
        }

        // Privacy last, independent of everything above
        if settings.privacy_redacted {
            target.set_property("--font-interface", "var(--stylepad-redacted)");
            target.set_property("--font-text", "var(--stylepad-redacted)");
            target.set_property("--font-print", "var(--stylepad-redacted)");
            target.set_property("--font-monospace", "var(--stylepad-redacted)");
        } else {
            target.set_property("--font-interface", "var(--font-interface-override)");
            target.set_property("--font-text", "var(--font-text-override)");
            target.set_property("--font-print", "var(--font-print-override)");
            target.set_property("--font-monospace", "var(--font-monospace-override)");
        }
        let blur = if settings.privacy_blur { "4px" } else { "0px" };
        target.set_property("--stylepad-blur", blur);
    }

    /// Remove every class and property this plugin ever generates, restoring
    /// the target to its pre-activation state.
    pub fn teardown(&self, target: &mut StyleTarget) {
        self.remove_generated_classes(target);
        for name in OWNED_PROPERTIES {
            target.remove_property(name);
        }
    }

    fn remove_generated_classes(&self, target: &mut StyleTarget) {
        for prefix in CLASS_PREFIXES {
            target.remove_classes_with_prefix(prefix);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply_fresh(settings: &StyleSettings) -> StyleTarget {
        let mut target = StyleTarget::new();
        Projector::new().apply(settings, &mut target);
        target
    }

    #[test]
    fn test_apply_is_idempotent() {
        let settings = StyleSettings {
            preset_override: "alpha".to_string(),
            privacy_blur: true,
            ..Default::default()
        };
        let projector = Projector::new();
        let mut target = StyleTarget::new();
        projector.apply(&settings, &mut target);
        let first = target.clone();
        projector.apply(&settings, &mut target);
        assert_eq!(target, first);
    }

    #[test]
    fn test_apply_is_pure_function_of_settings() {
        let projector = Projector::new();

        let mut a = StyleTarget::new();
        projector.apply(
            &StyleSettings {
                preset_override: "beta".to_string(),
                ..Default::default()
            },
            &mut a,
        );
        projector.apply(&StyleSettings::default(), &mut a);

        // No history dependence: a fresh projection of the defaults matches
        let b = apply_fresh(&StyleSettings::default());
        assert_eq!(a, b);
    }

    #[test]
    fn test_preset_override_suppresses_type_classes() {
        let target = apply_fresh(&StyleSettings {
            preset_override: "Alpha ".to_string(),
            ..Default::default()
        });
        assert!(target.has_class("preset-alpha"));
        assert!(!target.has_class("primary-type-normal"));
        assert!(!target.has_class("secondary-type-flying"));
    }

    #[test]
    fn test_blank_override_applies_exactly_the_type_classes() {
        let target = apply_fresh(&StyleSettings::default());
        assert!(target.has_class("primary-type-normal"));
        assert!(target.has_class("secondary-type-flying"));
        assert!(!target.classes().any(|c| c.starts_with("preset-")));
    }

    #[test]
    fn test_stale_preset_class_cleared_on_change() {
        let projector = Projector::new();
        let mut target = StyleTarget::new();
        projector.apply(
            &StyleSettings {
                preset_override: "alpha".to_string(),
                ..Default::default()
            },
            &mut target,
        );
        projector.apply(
            &StyleSettings {
                preset_override: "beta".to_string(),
                ..Default::default()
            },
            &mut target,
        );
        assert!(!target.has_class("preset-alpha"));
        assert!(target.has_class("preset-beta"));
    }

    #[test]
    fn test_boolean_pairs_never_left_unset() {
        let on = apply_fresh(&StyleSettings {
            table_style: true,
            tag_interaction: true,
            callout_icon: true,
            ..Default::default()
        });
        assert_eq!(on.property("--stylepad-table-border-style"), Some("separate"));
        assert_eq!(on.property("--stylepad-tag-pointer-events"), Some("auto"));
        assert_eq!(on.property("--stylepad-callout-icon"), Some("block"));

        let off = apply_fresh(&StyleSettings::default());
        assert_eq!(off.property("--stylepad-table-border-style"), Some("collapse"));
        assert_eq!(off.property("--stylepad-tag-pointer-events"), Some("none"));
        assert_eq!(off.property("--stylepad-callout-icon"), Some("none"));
    }

    #[test]
    fn test_numeric_values_and_units() {
        let target = apply_fresh(&StyleSettings {
            font_weight: 600,
            font_width: 80,
            mobile_toolbar_rows: 3,
            embed_height: 1200,
            ..Default::default()
        });
        assert_eq!(target.property("font-weight"), Some("600"));
        assert_eq!(target.property("--file-line-width"), Some("80%"));
        assert_eq!(target.property("--stylepad-toolbar-rows"), Some("3"));
        assert_eq!(target.property("--embed-max-height"), Some("1200px"));
    }

    #[test]
    fn test_privacy_redacted_swaps_font_families() {
        let on = apply_fresh(&StyleSettings {
            privacy_redacted: true,
            ..Default::default()
        });
        for prop in ["--font-interface", "--font-text", "--font-print", "--font-monospace"] {
            assert_eq!(on.property(prop), Some("var(--stylepad-redacted)"));
        }

        let off = apply_fresh(&StyleSettings::default());
        assert_eq!(off.property("--font-text"), Some("var(--font-text-override)"));
    }

    #[test]
    fn test_privacy_blur_radius() {
        let on = apply_fresh(&StyleSettings {
            privacy_blur: true,
            ..Default::default()
        });
        assert_eq!(on.property("--stylepad-blur"), Some("4px"));
        let off = apply_fresh(&StyleSettings::default());
        assert_eq!(off.property("--stylepad-blur"), Some("0px"));
    }

    #[test]
    fn test_tag_toggles_are_independent() {
        let shape_only = apply_fresh(&StyleSettings {
            tag_shape: true,
            ..Default::default()
        });
        assert!(shape_only.has_class("stylepad-rounded-tags"));
        assert!(!shape_only.has_class("stylepad-accented-tags"));

        let accent_only = apply_fresh(&StyleSettings {
            tag_accent: true,
            ..Default::default()
        });
        assert!(!accent_only.has_class("stylepad-rounded-tags"));
        assert!(accent_only.has_class("stylepad-accented-tags"));
    }

    #[test]
    fn test_teardown_restores_pre_activation_state() {
        let projector = Projector::new();
        let mut target = StyleTarget::new();
        target.add_class("theme-dark"); // host-owned, must survive
        target.set_property("--host-prop", "1");

        projector.apply(
            &StyleSettings {
                preset_override: "alpha".to_string(),
                tag_shape: true,
                privacy_redacted: true,
                privacy_blur: true,
                calendar_style: true,
                blockquote_style: true,
                ..Default::default()
            },
            &mut target,
        );
        projector.teardown(&mut target);

        let classes: Vec<&str> = target.classes().collect();
        assert_eq!(classes, ["theme-dark"]);
        let props: Vec<(&str, &str)> = target.properties().collect();
        assert_eq!(props, [("--host-prop", "1")]);
    }

    #[test]
    fn test_owned_properties_cover_every_apply_write() {
        // Exercise both arms of every conditional write, then check teardown
        // removes everything
        let projector = Projector::new();
        for settings in [
            StyleSettings::default(),
            StyleSettings {
                formatted_accent: false,
                tag_interaction: true,
                table_style: true,
                table_color: true,
                table_width: false,
                mobile_statusbar: true,
                blockquote_border: true,
                blockquote_style: true,
                callout_background: true,
                callout_icon: true,
                embed_title: true,
                calendar_interaction: true,
                calendar_style: true,
                privacy_redacted: true,
                privacy_blur: true,
                ..Default::default()
            },
        ] {
            let mut target = StyleTarget::new();
            projector.apply(&settings, &mut target);
            projector.teardown(&mut target);
            assert!(target.is_empty());
        }
    }
}
