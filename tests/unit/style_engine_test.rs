//! Integration-level unit tests for the style resolver and the clear/apply
//! protocol, including the three-branch totality of `resolve` and the
//! wildcard/union parity of the "apply to all" representation.

use std::collections::BTreeSet;

use cardstyler::services::style_engine::{resolve, ClassList, StyleEngine, StyleEngineTrait, StyleSink};
use cardstyler::services::style_sheet::StyleSheet;
use cardstyler::types::embed::EmbedKind;
use cardstyler::types::settings::StylerSettings;
use cardstyler::types::style::StyleTarget;
use rstest::rstest;

fn settings(enabled: bool, apply_all: bool, targets: Vec<EmbedKind>) -> StylerSettings {
    StylerSettings {
        enabled,
        apply_all_embed: apply_all,
        targets,
    }
}

/// Every combination of (gate, apply-all, selection) maps to exactly one of
/// the three outcomes: empty set, wildcard, or the exact subset — never a mix.
#[rstest]
#[case(false, false, vec![], "empty")]
#[case(false, false, vec![EmbedKind::Image], "empty")]
#[case(false, true, vec![], "empty")]
#[case(false, true, vec![EmbedKind::Image, EmbedKind::Canvas], "empty")]
#[case(true, true, vec![], "wildcard")]
#[case(true, true, vec![EmbedKind::Markdown], "wildcard")]
#[case(true, false, vec![], "empty")]
#[case(true, false, vec![EmbedKind::Image], "subset")]
#[case(true, false, vec![EmbedKind::Image, EmbedKind::Canvas, EmbedKind::Markdown], "subset")]
fn test_resolve_totality_and_exclusivity(
    #[case] enabled: bool,
    #[case] apply_all: bool,
    #[case] targets: Vec<EmbedKind>,
    #[case] expected: &str,
) {
    let resolved = resolve(&settings(enabled, apply_all, targets.clone()));

    match expected {
        "empty" => assert!(resolved.is_empty()),
        "wildcard" => {
            assert_eq!(resolved, BTreeSet::from([StyleTarget::AllEmbeds]));
        }
        "subset" => {
            let expected_set: BTreeSet<StyleTarget> =
                targets.iter().map(|k| StyleTarget::Embed(*k)).collect();
            assert_eq!(resolved, expected_set);
            assert!(!resolved.contains(&StyleTarget::AllEmbeds));
        }
        other => panic!("unknown expectation: {}", other),
    }
}

/// Apply-to-all dominates an empty explicit selection; the two states are
/// distinct outcomes.
#[test]
fn test_apply_all_dominates_empty_selection() {
    let with_flag = resolve(&settings(true, true, vec![]));
    let without_flag = resolve(&settings(true, false, vec![]));

    assert_eq!(with_flag, BTreeSet::from([StyleTarget::AllEmbeds]));
    assert!(without_flag.is_empty());
    assert_ne!(with_flag, without_flag);
}

/// Switching the selection from Image to Markdown must leave no residue:
/// after the second apply, Image's target is inactive and Markdown's active.
#[test]
fn test_clear_before_apply_leaves_no_stale_targets() {
    let mut engine = StyleEngine::new(ClassList::new());

    engine.apply(&settings(true, false, vec![EmbedKind::Image]));
    assert!(engine.sink().is_active(StyleTarget::Embed(EmbedKind::Image)));

    engine.apply(&settings(true, false, vec![EmbedKind::Markdown]));
    assert!(!engine.sink().is_active(StyleTarget::Embed(EmbedKind::Image)));
    assert!(engine.sink().is_active(StyleTarget::Embed(EmbedKind::Markdown)));
    assert_eq!(engine.sink().active().len(), 1);
}

/// After any apply, the active set equals `resolve` of the same settings.
#[rstest]
#[case(settings(true, false, vec![EmbedKind::Canvas]))]
#[case(settings(true, true, vec![]))]
#[case(settings(false, true, vec![EmbedKind::Image]))]
#[case(settings(true, false, vec![]))]
fn test_active_set_equals_resolve(#[case] s: StylerSettings) {
    let mut engine = StyleEngine::new(ClassList::new());
    // Start from a dirty state to make the clear step observable.
    engine.apply(&settings(true, true, vec![]));

    engine.apply(&s);
    assert_eq!(*engine.sink().active(), resolve(&s));
}

/// The wildcard target and the union of the three per-kind targets cover the
/// same cards.
#[test]
fn test_wildcard_and_union_parity() {
    let mut wildcard = ClassList::new();
    wildcard.activate(&BTreeSet::from([StyleTarget::AllEmbeds]));

    let mut union = ClassList::new();
    let all: BTreeSet<StyleTarget> = EmbedKind::ALL.iter().map(|k| StyleTarget::Embed(*k)).collect();
    union.activate(&all);

    for kind in EmbedKind::ALL {
        assert_eq!(
            wildcard.affects(kind),
            union.affects(kind),
            "coverage must agree for {}",
            kind
        );
    }
}

/// The stylesheet sink honors the same clear/apply protocol as the class
/// list: re-applying renders only the new selection's rules.
#[test]
fn test_stylesheet_sink_through_engine() {
    let mut engine = StyleEngine::new(StyleSheet::new());

    engine.apply(&settings(true, false, vec![EmbedKind::Image]));
    assert!(engine.sink().css().contains(".image-embed"));

    engine.apply(&settings(true, false, vec![EmbedKind::Markdown]));
    assert!(!engine.sink().css().contains(".image-embed"));
    assert!(engine.sink().css().contains(".markdown-embed"));

    engine.apply(&settings(false, false, vec![EmbedKind::Markdown]));
    assert!(engine.sink().is_empty());
}
