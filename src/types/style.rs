use std::fmt;

use super::embed::EmbedKind;

/// A symbolic identifier naming one visual-treatment rule.
///
/// `AllEmbeds` is the wildcard covering every embed kind with a single rule;
/// `Embed(kind)` scopes the treatment to one kind. The wildcard and the union
/// of the three per-kind targets cover the same cards (see `covers`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StyleTarget {
    AllEmbeds,
    Embed(EmbedKind),
}

impl StyleTarget {
    /// Whether this target's treatment affects cards of the given kind.
    pub fn covers(&self, kind: EmbedKind) -> bool {
        match self {
            StyleTarget::AllEmbeds => true,
            StyleTarget::Embed(k) => *k == kind,
        }
    }

    /// Selector fragment narrowing a rule to this target's cards.
    /// Empty for the wildcard: the rule then matches every card.
    pub fn selector_fragment(&self) -> String {
        match self {
            StyleTarget::AllEmbeds => String::new(),
            StyleTarget::Embed(kind) => kind.selector_fragment(),
        }
    }

    /// Label used in generated rule comments.
    pub fn label(&self) -> String {
        match self {
            StyleTarget::AllEmbeds => "ALL".to_string(),
            StyleTarget::Embed(kind) => kind.selector_fragment(),
        }
    }
}

impl fmt::Display for StyleTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
