use crate::app::domain::catalog::{self, PresetCatalog};
use crate::app::domain::settings::StyleSettings;
use crate::app::domain::target::StyleTarget;
use crate::app::infrastructure::error::Result;
use crate::app::infrastructure::storage::{self, SettingsStore};
use crate::app::services::projector::Projector;
use crate::app::services::scanner::StyleSource;

/// User-facing commands, invocable by id (ribbon buttons, hotkeys).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    CyclePresetOverride,
    CyclePrimaryType,
    CycleSecondaryType,
    TogglePrivacyBlur,
}

impl Command {
    pub fn id(&self) -> &'static str {
        match self {
            Self::CyclePresetOverride => "cycle-preset-override",
            Self::CyclePrimaryType => "cycle-primary-type",
            Self::CycleSecondaryType => "cycle-secondary-type",
            Self::TogglePrivacyBlur => "toggle-privacy-blur",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "cycle-preset-override" => Some(Self::CyclePresetOverride),
            "cycle-primary-type" => Some(Self::CyclePrimaryType),
            "cycle-secondary-type" => Some(Self::CycleSecondaryType),
            "toggle-privacy-blur" => Some(Self::TogglePrivacyBlur),
            _ => None,
        }
    }

    pub fn all() -> &'static [Command] {
        &[
            Self::CyclePresetOverride,
            Self::CyclePrimaryType,
            Self::CycleSecondaryType,
            Self::TogglePrivacyBlur,
        ]
    }
}

/// Ephemeral user-visible messages (toasts in the host UI).
pub trait Notifier {
    fn notify(&self, message: &str);
}

/// Default notifier for hosts without a toast surface.
#[derive(Debug, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, message: &str) {
        log::info!("{}", message);
    }
}

/// Plugin coordinator: owns the settings record, the preset cache, and the
/// style target, and wires persistence to projection.
///
/// Every mutation goes through [`save_settings`](Self::save_settings), which
/// persists and then re-projects. A save without a re-render is never valid,
/// so the two are coupled here and nowhere else.
pub struct StylePlugin<S: SettingsStore, N: Notifier> {
    settings: StyleSettings,
    presets: PresetCatalog,
    target: StyleTarget,
    projector: Projector,
    store: S,
    notifier: N,
    source: Box<dyn StyleSource>,
}

impl<S: SettingsStore, N: Notifier> StylePlugin<S, N> {
    pub fn new(store: S, notifier: N, source: Box<dyn StyleSource>) -> Self {
        Self {
            settings: StyleSettings::default(),
            presets: PresetCatalog::new(),
            target: StyleTarget::new(),
            projector: Projector::new(),
            store,
            notifier,
            source,
        }
    }

    /// Load persisted settings over the defaults and project them once.
    pub fn onload(&mut self) -> Result<()> {
        self.settings = storage::load_settings(&self.store)?;
        self.projector.apply(&self.settings, &mut self.target);
        Ok(())
    }

    /// Strip every generated class and property from the target.
    pub fn onunload(&mut self) {
        self.projector.teardown(&mut self.target);
    }

    /// Persist the full record, then re-project it.
    pub fn save_settings(&mut self) -> Result<()> {
        self.store.save(&self.settings)?;
        self.projector.apply(&self.settings, &mut self.target);
        Ok(())
    }

    /// Mutate one or more fields, then persist and re-project.
    ///
    /// This is the path host settings UIs go through for sliders and toggles.
    pub fn update(&mut self, mutate: impl FnOnce(&mut StyleSettings)) -> Result<()> {
        mutate(&mut self.settings);
        self.save_settings()
    }

    /// Scanned preset catalog, cached after the first scan.
    pub fn available_presets(&mut self) -> &[String] {
        self.presets.get_or_compute(self.source.as_ref())
    }

    /// Drop the preset cache; call when the host's style sheets change.
    pub fn invalidate_presets(&mut self) {
        self.presets.invalidate();
    }

    pub fn dispatch(&mut self, command: Command) -> Result<()> {
        match command {
            Command::CyclePresetOverride => self.cycle_preset(),
            Command::CyclePrimaryType => self.cycle_primary_type(),
            Command::CycleSecondaryType => self.cycle_secondary_type(),
            Command::TogglePrivacyBlur => self.toggle_privacy_blur(),
        }
    }

    /// Advance the preset override through the scanned catalog, wrapping.
    pub fn cycle_preset(&mut self) -> Result<()> {
        let presets = self.presets.get_or_compute(self.source.as_ref());
        if presets.is_empty() {
            self.notifier.notify("No available presets found.");
            return Ok(());
        }
        let next = catalog::cycle_next(presets, &self.settings.preset_override).to_string();
        self.settings.preset_override = next.clone();
        self.save_settings()?;
        self.notifier
            .notify(&format!("Preset changed to: {}", capitalize(&next)));
        Ok(())
    }

    pub fn cycle_primary_type(&mut self) -> Result<()> {
        let types = catalog::primary_type_catalog();
        let next = catalog::cycle_next(&types, &self.settings.primary_type).to_string();
        self.settings.primary_type = next.clone();
        self.save_settings()?;
        let name = next.trim_start_matches("primary-type-");
        self.notifier
            .notify(&format!("Primary type changed to: {}", capitalize(name)));
        Ok(())
    }

    pub fn cycle_secondary_type(&mut self) -> Result<()> {
        let types = catalog::secondary_type_catalog();
        let next = catalog::cycle_next(&types, &self.settings.secondary_type).to_string();
        self.settings.secondary_type = next.clone();
        self.save_settings()?;
        let name = next.trim_start_matches("secondary-type-");
        self.notifier
            .notify(&format!("Secondary type changed to: {}", capitalize(name)));
        Ok(())
    }

    pub fn toggle_privacy_blur(&mut self) -> Result<()> {
        self.settings.privacy_blur = !self.settings.privacy_blur;
        self.save_settings()?;
        self.notifier.notify(if self.settings.privacy_blur {
            "Privacy blur enabled"
        } else {
            "Privacy blur disabled"
        });
        Ok(())
    }

    pub fn settings(&self) -> &StyleSettings {
        &self.settings
    }

    pub fn target(&self) -> &StyleTarget {
        &self.target
    }
}

/// Upper-case the first character, for notice text.
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
