use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Slider bounds, mirrored by the host's settings UI.
pub const FONT_WEIGHT_RANGE: (u32, u32) = (200, 800);
pub const FONT_WIDTH_RANGE: (u32, u32) = (50, 100);
pub const TOOLBAR_ROWS_RANGE: (u32, u32) = (1, 4);
pub const EMBED_HEIGHT_RANGE: (u32, u32) = (100, 8000);

/// The full settings record for the style switcher.
///
/// Every recognized option always has a value: fields absent from a persisted
/// record fall back to their serde defaults on load, so a record deserialized
/// from any partial JSON is complete. Unknown keys written by newer versions
/// (or by other tools sharing the file) are kept in `extra` and written back
/// untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleSettings {
    /// Preset class token (without the `preset-` prefix). Blank means
    /// "no override": the two type classes apply instead.
    #[serde(default)]
    pub preset_override: String,

    #[serde(default = "default_primary_type")]
    pub primary_type: String,

    #[serde(default = "default_secondary_type")]
    pub secondary_type: String,

    #[serde(default = "default_font_weight")]
    pub font_weight: u32,

    /// Viewable line width in percent.
    #[serde(default = "default_font_width")]
    pub font_width: u32,

    #[serde(default = "default_formatted_accent")]
    pub formatted_accent: bool,

    #[serde(default)]
    pub tag_interaction: bool,

    #[serde(default)]
    pub tag_shape: bool,

    #[serde(default)]
    pub tag_accent: bool,

    #[serde(default)]
    pub table_style: bool,

    #[serde(default)]
    pub table_color: bool,

    #[serde(default = "default_table_width")]
    pub table_width: bool,

    #[serde(default)]
    pub mobile_statusbar: bool,

    #[serde(default = "default_toolbar_rows")]
    pub mobile_toolbar_rows: u32,

    #[serde(default)]
    pub blockquote_border: bool,

    #[serde(default)]
    pub blockquote_style: bool,

    #[serde(default)]
    pub callout_background: bool,

    #[serde(default)]
    pub callout_icon: bool,

    /// Maximum embed height in pixels.
    #[serde(default = "default_embed_height")]
    pub embed_height: u32,

    #[serde(default)]
    pub embed_title: bool,

    #[serde(default)]
    pub calendar_interaction: bool,

    #[serde(default)]
    pub calendar_style: bool,

    #[serde(default)]
    pub privacy_redacted: bool,

    #[serde(default)]
    pub privacy_blur: bool,

    /// Unrecognized keys, preserved across load/save.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn default_primary_type() -> String {
    "primary-type-normal".to_string()
}

fn default_secondary_type() -> String {
    "secondary-type-flying".to_string()
}

fn default_font_weight() -> u32 {
    400
}

fn default_font_width() -> u32 {
    100
}

fn default_formatted_accent() -> bool {
    true
}

fn default_table_width() -> bool {
    true
}

fn default_toolbar_rows() -> u32 {
    2
}

fn default_embed_height() -> u32 {
    4000
}

impl Default for StyleSettings {
    fn default() -> Self {
        Self {
            preset_override: String::new(),
            primary_type: default_primary_type(),
            secondary_type: default_secondary_type(),
            font_weight: default_font_weight(),
            font_width: default_font_width(),
            formatted_accent: default_formatted_accent(),
            tag_interaction: false,
            tag_shape: false,
            tag_accent: false,
            table_style: false,
            table_color: false,
            table_width: default_table_width(),
            mobile_statusbar: false,
            mobile_toolbar_rows: default_toolbar_rows(),
            blockquote_border: false,
            blockquote_style: false,
            callout_background: false,
            callout_icon: false,
            embed_height: default_embed_height(),
            embed_title: false,
            calendar_interaction: false,
            calendar_style: false,
            privacy_redacted: false,
            privacy_blur: false,
            extra: Map::new(),
        }
    }
}

impl StyleSettings {
    /// True when no preset override is in effect (blank or whitespace).
    pub fn preset_is_blank(&self) -> bool {
        self.preset_override.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = StyleSettings::default();
        assert_eq!(settings.preset_override, "");
        assert_eq!(settings.primary_type, "primary-type-normal");
        assert_eq!(settings.secondary_type, "secondary-type-flying");
        assert_eq!(settings.font_weight, 400);
        assert_eq!(settings.font_width, 100);
        assert!(settings.formatted_accent);
        assert!(settings.table_width);
        assert_eq!(settings.mobile_toolbar_rows, 2);
        assert_eq!(settings.embed_height, 4000);
        assert!(!settings.privacy_redacted);
        assert!(!settings.privacy_blur);
        assert!(settings.extra.is_empty());
    }

    #[test]
    fn test_serialize_deserialize() {
        let settings = StyleSettings::default();
        let json = serde_json::to_string(&settings).unwrap();
        let loaded: StyleSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(settings, loaded);
    }

    #[test]
    fn test_partial_config() {
        // Simulate an old config missing newer fields
        let json = r#"{"font_weight": 700, "privacy_blur": true}"#;
        let settings: StyleSettings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.font_weight, 700); // file value wins
        assert!(settings.privacy_blur);
        assert_eq!(settings.font_width, 100); // default fills the gap
        assert!(settings.formatted_accent);
    }

    #[test]
    fn test_unknown_keys_preserved() {
        let json = r#"{"font_weight": 300, "futureOption": "keep-me"}"#;
        let settings: StyleSettings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.extra.get("futureOption").unwrap(), "keep-me");

        let out = serde_json::to_string(&settings).unwrap();
        assert!(out.contains("futureOption"));
        assert!(out.contains("keep-me"));
    }

    #[test]
    fn test_defaults_within_slider_bounds() {
        let settings = StyleSettings::default();
        assert!((FONT_WEIGHT_RANGE.0..=FONT_WEIGHT_RANGE.1).contains(&settings.font_weight));
        assert!((FONT_WIDTH_RANGE.0..=FONT_WIDTH_RANGE.1).contains(&settings.font_width));
        assert!((TOOLBAR_ROWS_RANGE.0..=TOOLBAR_ROWS_RANGE.1).contains(&settings.mobile_toolbar_rows));
        assert!((EMBED_HEIGHT_RANGE.0..=EMBED_HEIGHT_RANGE.1).contains(&settings.embed_height));
    }

    #[test]
    fn test_preset_is_blank() {
        let mut settings = StyleSettings::default();
        assert!(settings.preset_is_blank());
        settings.preset_override = "   ".to_string();
        assert!(settings.preset_is_blank());
        settings.preset_override = "alpha".to_string();
        assert!(!settings.preset_is_blank());
    }
}
