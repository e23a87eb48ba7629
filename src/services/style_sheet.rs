//! Stylesheet sink — renders the active style targets into CSS rule text.
//!
//! The host injects the rendered text into a single global `<style>` element
//! identified by `STYLE_ELEMENT_ID`. This module only generates rule text;
//! it does not parse or apply CSS.

use std::collections::BTreeSet;

use crate::services::style_engine::StyleSink;
use crate::types::style::StyleTarget;

/// Id of the global style element owned by the styler.
pub const STYLE_ELEMENT_ID: &str = "cardstyler-style";

/// Builds the suppression rules for one target.
///
/// Three blocks per target, one per card state. The normal state also drops
/// the border and shadow; focus and hover keep theirs so the card outline
/// stays visible while interacting.
fn build_rules(target: StyleTarget) -> String {
    let fragment = target.selector_fragment();
    let label = target.label();

    let mut rules = String::new();

    rules.push_str(&format!(
        "\n/* {label}: Normal State */\n\
         .canvas-node:not(.is-focused):not(:hover):has(.canvas-node-content{fragment}) .canvas-node-container {{\n\
         \tbackground-color: transparent;\n\
         \tborder-color: transparent;\n\
         \tbox-shadow: none;\n\
         }}\n\
         .canvas-node:not(.is-focused):not(:hover):has(.canvas-node-content{fragment}) .canvas-node-content {{\n\
         \tbackground-color: transparent;\n\
         }}\n"
    ));

    rules.push_str(&format!(
        "\n/* {label}: Focus State */\n\
         .canvas-node.is-focused:has(.canvas-node-content{fragment}) .canvas-node-container {{\n\
         \tbackground-color: transparent;\n\
         }}\n\
         .canvas-node.is-focused:has(.canvas-node-content{fragment}) .canvas-node-content {{\n\
         \tbackground-color: transparent;\n\
         }}\n"
    ));

    rules.push_str(&format!(
        "\n/* {label}: Hover State */\n\
         .canvas-node:hover:has(.canvas-node-content{fragment}) .canvas-node-container {{\n\
         \tbackground-color: transparent;\n\
         }}\n\
         .canvas-node:hover:has(.canvas-node-content{fragment}) .canvas-node-content {{\n\
         \tbackground-color: transparent;\n\
         }}\n"
    ));

    rules
}

/// Stylesheet sink holding the rendered rule text for the global style element.
#[derive(Debug, Default)]
pub struct StyleSheet {
    rules: String,
}

impl StyleSheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Id the host should give the style element this text is injected into.
    pub fn element_id(&self) -> &'static str {
        STYLE_ELEMENT_ID
    }

    /// Current rule text. Empty when no targets are active.
    pub fn css(&self) -> &str {
        &self.rules
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl StyleSink for StyleSheet {
    fn deactivate_all(&mut self) {
        self.rules.clear();
    }

    fn activate(&mut self, targets: &BTreeSet<StyleTarget>) {
        for target in targets {
            self.rules.push_str(&build_rules(*target));
        }
    }
}
