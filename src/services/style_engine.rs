//! Style Engine — derives the active style targets from the settings and
//! drives the clear/apply protocol against an injected style sink.

use std::collections::BTreeSet;

use tracing::debug;

use crate::types::embed::EmbedKind;
use crate::types::settings::StylerSettings;
use crate::types::style::StyleTarget;

/// The external surface where active style targets are recorded.
///
/// A single global resource mutated only through the engine's clear/apply
/// pair, never partially.
pub trait StyleSink {
    /// Removes every possible style target, active or not.
    fn deactivate_all(&mut self);
    /// Activates exactly the given targets.
    fn activate(&mut self, targets: &BTreeSet<StyleTarget>);
}

/// Pure derivation of the active style-target set from the settings.
///
/// Exactly one of three outcomes, in dominance order:
/// - feature disabled: empty set;
/// - apply-to-all: the single wildcard target (even when `targets` is empty);
/// - otherwise: one target per selected kind (empty selection yields the
///   empty set, a distinct outcome from apply-to-all).
pub fn resolve(settings: &StylerSettings) -> BTreeSet<StyleTarget> {
    if !settings.enabled {
        return BTreeSet::new();
    }
    if settings.apply_all_embed {
        return BTreeSet::from([StyleTarget::AllEmbeds]);
    }
    settings
        .targets
        .iter()
        .map(|kind| StyleTarget::Embed(*kind))
        .collect()
}

/// Trait defining the style engine interface.
pub trait StyleEngineTrait {
    fn clear(&mut self);
    fn apply(&mut self, settings: &StylerSettings);
}

/// Style engine owning the injected sink.
pub struct StyleEngine<S: StyleSink> {
    sink: S,
}

impl<S: StyleSink> StyleEngine<S> {
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    /// Read access to the sink, for rendering and inspection.
    pub fn sink(&self) -> &S {
        &self.sink
    }
}

impl<S: StyleSink> StyleEngineTrait for StyleEngine<S> {
    /// Deactivates every possible target unconditionally, so a following
    /// `apply` never leaves stale targets active.
    fn clear(&mut self) {
        self.sink.deactivate_all();
    }

    /// Clear-then-activate with the resolved target set.
    fn apply(&mut self, settings: &StylerSettings) {
        self.clear();
        let targets = resolve(settings);
        debug!(active = targets.len(), "applied style targets");
        self.sink.activate(&targets);
    }
}

/// Symbolic class-list sink: records the active targets as a set.
///
/// The "DOM class list" flavor of the style surface, also used as the
/// observable sink in tests.
#[derive(Debug, Default)]
pub struct ClassList {
    active: BTreeSet<StyleTarget>,
}

impl ClassList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> &BTreeSet<StyleTarget> {
        &self.active
    }

    pub fn is_active(&self, target: StyleTarget) -> bool {
        self.active.contains(&target)
    }

    /// Whether any active target's treatment affects cards of the given kind.
    pub fn affects(&self, kind: EmbedKind) -> bool {
        self.active.iter().any(|t| t.covers(kind))
    }
}

impl StyleSink for ClassList {
    fn deactivate_all(&mut self) {
        self.active.clear();
    }

    fn activate(&mut self, targets: &BTreeSet<StyleTarget>) {
        self.active.extend(targets.iter().copied());
    }
}
