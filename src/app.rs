//! App core for CardStyler.
//!
//! Owns the settings engine, the style engine with its injected sink, and the
//! settings-panel view state. Every configuration mutation funnels through
//! here: persist first, then clear-and-reapply the style targets, so the sink
//! never reflects a state that was not at least queued for persistence.

use tracing::{info, warn};

use crate::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use crate::services::style_engine::{StyleEngine, StyleEngineTrait, StyleSink};
use crate::types::embed::EmbedKind;
use crate::types::settings::StylerSettings;
use crate::ui::settings_panel::SettingsPanel;

/// Central struct wiring settings mutations to persistence and restyling.
pub struct App<S: StyleSink> {
    settings_engine: SettingsEngine,
    style_engine: StyleEngine<S>,
    panel: SettingsPanel,
}

impl<S: StyleSink> App<S> {
    /// Creates the app with an injected style sink. `path_override` selects
    /// the settings file; `None` uses the platform config directory.
    pub fn new(path_override: Option<String>, sink: S) -> Self {
        Self {
            settings_engine: SettingsEngine::new(path_override),
            style_engine: StyleEngine::new(sink),
            panel: SettingsPanel::new(),
        }
    }

    /// Startup sequence: load stored settings, sync the panel, apply styles.
    ///
    /// A missing settings file silently yields the defaults. Malformed stored
    /// data is logged and replaced by the defaults; the broken file is left
    /// on disk until the next effective mutation overwrites it.
    pub fn startup(&mut self) {
        if let Err(e) = self.settings_engine.load() {
            warn!("failed to load stored settings, using defaults: {}", e);
        }
        let apply_all = self.settings_engine.get_settings().apply_all_embed;
        self.panel.sync_targets(self.settings_engine.get_settings());
        self.panel.refresh_target_fields(apply_all);
        self.style_engine.apply(self.settings_engine.get_settings());
        info!(
            config_path = self.settings_engine.get_config_path(),
            "cardstyler started"
        );
    }

    /// Shutdown: remove every active style target. In-memory settings are
    /// simply dropped; persistence already happened on each mutation.
    pub fn shutdown(&mut self) {
        self.style_engine.clear();
    }

    /// Sets the master feature gate. No-op if already in that state.
    pub fn set_feature_enabled(&mut self, value: bool) {
        if self.settings_engine.set_enabled(value) {
            self.save_and_reapply();
        }
    }

    /// Command-style convenience for `set_feature_enabled(true)`.
    pub fn enable(&mut self) {
        self.set_feature_enabled(true);
    }

    /// Command-style convenience for `set_feature_enabled(false)`.
    pub fn disable(&mut self) {
        self.set_feature_enabled(false);
    }

    /// Sets the uniform-treatment flag and refreshes the dependent fields.
    /// The target selection itself is untouched.
    pub fn set_apply_to_all(&mut self, value: bool) {
        if self.settings_engine.set_apply_all(value) {
            self.panel.refresh_target_fields(value);
            self.save_and_reapply();
        }
    }

    /// Adds or removes one embed kind from the target selection. No-op (no
    /// persist, no reapply) when membership is already as requested.
    pub fn set_target_selected(&mut self, kind: EmbedKind, selected: bool) {
        if self.settings_engine.set_target_selected(kind, selected) {
            self.panel.sync_targets(self.settings_engine.get_settings());
            self.save_and_reapply();
        }
    }

    /// Persist, then reapply.
    ///
    /// A failed write is swallowed: the in-memory settings stay authoritative
    /// and are still applied to the sink. Worst case the configuration
    /// reverts on next load; writes are whole-object replacements, so no
    /// corruption is possible.
    fn save_and_reapply(&mut self) {
        if let Err(e) = self.settings_engine.save() {
            warn!("settings write failed, keeping in-memory state: {}", e);
        }
        self.style_engine.apply(self.settings_engine.get_settings());
    }

    pub fn settings(&self) -> &StylerSettings {
        self.settings_engine.get_settings()
    }

    pub fn panel(&self) -> &SettingsPanel {
        &self.panel
    }

    /// Mutable panel access for host-driven view changes (e.g. collapsing a
    /// section). Configuration state is not reachable through the panel.
    pub fn panel_mut(&mut self) -> &mut SettingsPanel {
        &mut self.panel
    }

    pub fn sink(&self) -> &S {
        self.style_engine.sink()
    }
}
