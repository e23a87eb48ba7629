//! Settings-panel view state.
//!
//! One toggle field per embed kind. While apply-to-all is on, the per-kind
//! fields are disabled and hidden; their prior visibility is saved so turning
//! apply-to-all back off restores whatever the panel showed before, and the
//! underlying target selection is never touched.

use crate::types::embed::EmbedKind;
use crate::types::settings::StylerSettings;

/// View state of one per-kind toggle control.
#[derive(Debug)]
pub struct ToggleField {
    pub kind: EmbedKind,
    /// Whether the toggle reads as on (kind is in the target selection).
    pub checked: bool,
    /// Whether the control accepts input.
    pub enabled: bool,
    /// Whether the control is shown.
    pub visible: bool,
    /// Visibility before apply-to-all hid the field. `None` while the field
    /// is under its own control.
    saved_visible: Option<bool>,
}

impl ToggleField {
    fn new(kind: EmbedKind) -> Self {
        Self {
            kind,
            checked: false,
            enabled: true,
            visible: true,
            saved_visible: None,
        }
    }

    /// Display label for the field.
    pub fn label(&self) -> &'static str {
        self.kind.display()
    }
}

/// View state for the styler's settings panel.
#[derive(Debug)]
pub struct SettingsPanel {
    fields: Vec<ToggleField>,
}

impl SettingsPanel {
    /// Creates a panel with one field per embed kind, all enabled and visible.
    pub fn new() -> Self {
        Self {
            fields: EmbedKind::ALL.iter().map(|k| ToggleField::new(*k)).collect(),
        }
    }

    pub fn fields(&self) -> &[ToggleField] {
        &self.fields
    }

    /// The panel is constructed with a field for every kind, so lookup
    /// always succeeds.
    pub fn field(&self, kind: EmbedKind) -> &ToggleField {
        match self.fields.iter().find(|f| f.kind == kind) {
            Some(field) => field,
            None => unreachable!(),
        }
    }

    fn field_mut(&mut self, kind: EmbedKind) -> &mut ToggleField {
        match self.fields.iter_mut().find(|f| f.kind == kind) {
            Some(field) => field,
            None => unreachable!(),
        }
    }

    /// Hides a field independently of apply-to-all (host panels can collapse
    /// sections). Saved-visibility restore honors this state.
    pub fn set_field_visible(&mut self, kind: EmbedKind, visible: bool) {
        self.field_mut(kind).visible = visible;
    }

    /// Syncs each field's checked state from the current target selection.
    pub fn sync_targets(&mut self, settings: &StylerSettings) {
        for field in &mut self.fields {
            field.checked = settings.has_target(field.kind);
        }
    }

    /// Refreshes the dependent fields after the apply-to-all flag changed.
    ///
    /// On `true` each field is disabled and hidden, saving its prior
    /// visibility first; a repeated refresh must not overwrite an already
    /// saved value. On `false` each field is re-enabled and its saved
    /// visibility restored.
    pub fn refresh_target_fields(&mut self, apply_all: bool) {
        if apply_all {
            for field in &mut self.fields {
                field.enabled = false;
                if field.saved_visible.is_none() {
                    field.saved_visible = Some(field.visible);
                }
                field.visible = false;
            }
        } else {
            for field in &mut self.fields {
                field.enabled = true;
                if let Some(visible) = field.saved_visible.take() {
                    field.visible = visible;
                }
            }
        }
    }
}

impl Default for SettingsPanel {
    fn default() -> Self {
        Self::new()
    }
}
