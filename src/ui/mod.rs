// CardStyler settings-panel view state
// Models the widget state the settings UI renders; holds no configuration data.

pub mod settings_panel;
