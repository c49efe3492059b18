use indoc::indoc;

use crate::test_utils::Tk;
use crate::{ExpandError, Kind, PredicateNode, TokenEntry, TokenPredicateFabric, inputs};

fn render(sequences: &[Vec<TokenEntry<Tk>>]) -> String {
    let mut out = String::new();
    for seq in sequences {
        let line: Vec<String> = seq.iter().map(ToString::to_string).collect();
        out.push_str(&line.join(" "));
        out.push('\n');
    }
    out
}

#[test]
fn entry_expands_to_itself() {
    let node: PredicateNode<Tk> = TokenEntry::text("x").into();

    assert_eq!(node.expand(), vec![vec![TokenEntry::text("x")]]);
}

#[test]
fn empty_sequence_expands_to_one_empty_sequence() {
    let node = PredicateNode::<Tk>::sequence([]);

    assert_eq!(node.expand(), vec![Vec::<TokenEntry<Tk>>::new()]);
}

#[test]
fn empty_alternative_expands_to_nothing() {
    let node = PredicateNode::<Tk>::alternative([]);

    assert!(node.expand().is_empty());
}

#[test]
fn expansion_order_is_deterministic() {
    let fabric = TokenPredicateFabric::<Tk>::make_default();
    let node = fabric.sequence(inputs![
        "DROP",
        fabric.alternative(["TABLE", "VIEW"]),
        fabric.optional(["IF", "EXISTS"]),
        Kind(Tk::Ident),
    ]);

    assert_eq!(
        render(&node.expand()),
        indoc! {r#"
            "DROP":<Unknown> "TABLE":<Unknown> <Ident>
            "DROP":<Unknown> "TABLE":<Unknown> "IF":<Unknown> "EXISTS":<Unknown> <Ident>
            "DROP":<Unknown> "VIEW":<Unknown> <Ident>
            "DROP":<Unknown> "VIEW":<Unknown> "IF":<Unknown> "EXISTS":<Unknown> <Ident>
        "#}
    );
}

#[test]
fn bounded_expansion_fails_past_limit() {
    let fabric = TokenPredicateFabric::<Tk>::make_default();
    let bit = fabric.alternative(["0", "1"]);
    let node = fabric.sequence([bit.clone(), bit.clone(), bit]);

    assert_eq!(node.expand_bounded(8).map(|s| s.len()), Ok(8));
    assert_eq!(node.expand_bounded(7), Err(ExpandError::TooManyVariants(7)));
    assert_eq!(
        ExpandError::TooManyVariants(7).to_string(),
        "pattern expands to more than 7 token sequences"
    );
}

#[test]
fn deep_nesting_expands_without_overflow() {
    let mut node: PredicateNode<Tk> = TokenEntry::text("x").into();
    for _ in 0..50_000 {
        node = PredicateNode::sequence([node]);
    }
    assert_eq!(node.expand(), vec![vec![TokenEntry::text("x")]]);

    let mut node: PredicateNode<Tk> = TokenEntry::text("x").into();
    for _ in 0..10_000 {
        node = PredicateNode::optional(node);
    }
    let sequences = node.expand();
    assert_eq!(sequences.len(), 10_001);
    assert_eq!(sequences.iter().filter(|s| s.is_empty()).count(), 10_000);
    assert_eq!(node.expand_bounded(10_000), Err(ExpandError::TooManyVariants(10_000)));
}

#[test]
fn unbounded_expansion_agrees_with_bounded() {
    let fabric = TokenPredicateFabric::<Tk>::make_default();
    let node = fabric.sequence(inputs![
        fabric.alternative(["CREATE", "DROP"]),
        fabric.optional(["TEMP"]),
        "TABLE",
    ]);

    let sequences = node.expand();

    assert_eq!(sequences.len(), 4);
    assert_eq!(node.expand_bounded(4), Ok(sequences));
    assert_eq!(node.expand_bounded(3), Err(ExpandError::TooManyVariants(3)));
}
