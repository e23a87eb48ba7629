use serde::{Deserialize, Serialize};

use super::embed::EmbedKind;

/// Persisted styler configuration.
///
/// Stored as a flat JSON object. Missing keys fall back to the field's
/// default (struct-level `serde(default)`), so loading a partial object
/// overlays the stored fields onto the defaults key-by-key. A stored
/// `targets` array replaces the default wholesale.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct StylerSettings {
    /// Master gate for the whole feature. Kept explicit so a non-empty
    /// `targets` selection survives while the feature is paused.
    pub enabled: bool,
    /// Apply the treatment to every card, bypassing `targets`.
    #[serde(rename = "applyAllEmbed")]
    pub apply_all_embed: bool,
    /// Explicit selection, meaningful only when `apply_all_embed` is false.
    /// Ordered, but semantically a set: no duplicate kinds.
    pub targets: Vec<EmbedKind>,
}

impl Default for StylerSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            apply_all_embed: false,
            targets: vec![EmbedKind::Image, EmbedKind::Canvas],
        }
    }
}

impl StylerSettings {
    /// Membership test by kind identifier.
    pub fn has_target(&self, kind: EmbedKind) -> bool {
        self.targets.contains(&kind)
    }

    /// Drops duplicate targets, keeping the first occurrence of each kind.
    /// Stored data is not trusted to uphold the set invariant.
    pub fn dedup_targets(&mut self) {
        let mut seen: Vec<EmbedKind> = Vec::with_capacity(EmbedKind::ALL.len());
        self.targets.retain(|kind| {
            if seen.contains(kind) {
                false
            } else {
                seen.push(*kind);
                true
            }
        });
    }
}
