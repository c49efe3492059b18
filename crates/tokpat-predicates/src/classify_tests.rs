use std::sync::Arc;

use tokpat_core::{Classified, LexerRule};

use crate::TokenClassifier;
use crate::test_utils::{InapplicableRule, Rules, Tk, exact, keyword_rules};

#[test]
fn dialect_agnostic_classifies_everything_as_unknown() {
    let classifier = TokenClassifier::<Tk>::dialect_agnostic();

    assert_eq!(
        classifier.classify("SELECT"),
        Classified::new("SELECT", Some(Tk::Unknown))
    );
    assert_eq!(
        classifier.classify("not a token"),
        Classified::new("not a token", Some(Tk::Unknown))
    );
    assert!(!classifier.is_dialect_specific());
    assert_eq!(classifier.rule_count(), 0);
}

#[test]
fn dialect_specific_uses_rule_kind() {
    let classifier = TokenClassifier::dialect_specific(&keyword_rules());

    assert_eq!(classifier.classify("SELECT").kind(), Some(&Tk::Keyword));
    assert_eq!(classifier.classify("FROM").kind(), Some(&Tk::Keyword));
    assert_eq!(classifier.classify("42").kind(), Some(&Tk::Number));
    assert!(classifier.is_dialect_specific());
    assert_eq!(classifier.rule_count(), 3);
}

#[test]
fn unrecognized_text_has_no_kind() {
    let classifier = TokenClassifier::dialect_specific(&keyword_rules());

    let classified = classifier.classify("select");

    assert_eq!(classified.text(), "select");
    assert_eq!(classified.kind(), None);
}

#[test]
fn first_matching_rule_wins() {
    let rules = Rules(vec![
        exact("x", Some(Tk::Keyword)),
        exact("x", Some(Tk::Ident)),
    ]);
    let classifier = TokenClassifier::dialect_specific(&rules);

    assert_eq!(classifier.classify("x").kind(), Some(&Tk::Keyword));
}

#[test]
fn later_rule_applies_when_earlier_ones_do_not_match() {
    let rules = Rules(vec![
        exact("y", Some(Tk::Keyword)),
        exact("x", Some(Tk::Ident)),
    ]);
    let classifier = TokenClassifier::dialect_specific(&rules);

    assert_eq!(classifier.classify("x").kind(), Some(&Tk::Ident));
}

#[test]
fn inapplicable_rules_are_skipped() {
    let rules = Rules(vec![
        Arc::new(InapplicableRule) as Arc<dyn LexerRule<Tk>>,
        exact("x", Some(Tk::Ident)),
    ]);
    let classifier = TokenClassifier::dialect_specific(&rules);

    assert_eq!(classifier.classify("x").kind(), Some(&Tk::Ident));
    assert_eq!(classifier.classify("z").kind(), None);
}

#[test]
fn rule_without_kind_payload_yields_other() {
    let rules = Rules(vec![exact(";", None)]);
    let classifier = TokenClassifier::dialect_specific(&rules);

    assert_eq!(classifier.classify(";").kind(), Some(&Tk::Other));
}

#[test]
fn each_rule_starts_from_a_fresh_cursor() {
    // The first rule reads "xz" before rejecting it.
    let rules = Rules(vec![
        exact("xy", Some(Tk::Keyword)),
        exact("xz", Some(Tk::Ident)),
    ]);
    let classifier = TokenClassifier::dialect_specific(&rules);

    assert_eq!(classifier.classify("xz").kind(), Some(&Tk::Ident));
}

#[test]
fn rule_decides_on_partial_consumption() {
    let classifier = TokenClassifier::dialect_specific(&keyword_rules());

    assert_eq!(classifier.classify("12ab").kind(), Some(&Tk::Number));
}

#[test]
fn classification_is_deterministic() {
    let classifier = TokenClassifier::dialect_specific(&keyword_rules());

    for text in ["SELECT", "select", "42", ""] {
        assert_eq!(classifier.classify(text), classifier.classify(text));
    }
}

#[test]
fn clones_share_rules() {
    let classifier = TokenClassifier::dialect_specific(&keyword_rules());
    let clone = classifier.clone();

    assert_eq!(clone.rule_count(), 3);
    assert_eq!(clone.classify("FROM"), classifier.classify("FROM"));
}

#[test]
fn debug_lists_rule_names() {
    let agnostic = TokenClassifier::<Tk>::dialect_agnostic();
    let specific = TokenClassifier::dialect_specific(&keyword_rules());

    assert_eq!(format!("{agnostic:?}"), "TokenClassifier(dialect-agnostic)");
    assert_eq!(
        format!("{specific:?}"),
        r#"TokenClassifier(["SELECT", "FROM", "rule"])"#
    );
}
