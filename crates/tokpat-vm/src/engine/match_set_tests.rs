use tokpat_predicates::{Kind, TokenPredicateFabric, any, inputs};
use tokpat_sql::{SqlDialect, SqlRuleSet, SqlTokenKind, lex, significant};

use crate::{MatchReport, MatchSpan, Matcher};

fn fabric() -> TokenPredicateFabric<SqlTokenKind> {
    let rules = SqlRuleSet::new(&SqlDialect::ansi()).unwrap();
    TokenPredicateFabric::make_dialect_specific(&rules)
}

#[test]
fn accessors() {
    let toks = significant(lex("a.b.c", &SqlDialect::ansi()));
    let f = fabric();
    let qualified = f.sequence(inputs![
        Kind(SqlTokenKind::Identifier),
        f.optional(inputs![".", any()]),
        f.optional(inputs![".", any()]),
    ]);

    let set = Matcher::new(&toks).match_at(&qualified, 0).unwrap();

    assert_eq!(set.start(), 0);
    assert_eq!(set.len(), 3);
    assert!(set.contains(3));
    assert!(!set.contains(4));
    assert_eq!(set.longest(), Some(5));
    assert_eq!(set.trace(5).and_then(|t| t.head().copied()), Some(4));
    assert_eq!(set.span(4), None);
    assert_eq!(set.traces().len(), 3);
}

#[test]
fn report_lists_spans_in_found_order() {
    let toks = significant(lex("DROP TABLE IF EXISTS t", &SqlDialect::ansi()));
    let f = fabric();
    let node = f.sequence(inputs!["DROP", "TABLE", f.optional(["IF", "EXISTS"])]);

    let report = Matcher::new(&toks).match_at(&node, 0).unwrap().report();

    assert_eq!(
        report,
        MatchReport {
            start: 0,
            matches: vec![
                MatchSpan {
                    end: 2,
                    tokens: vec![0, 1],
                },
                MatchSpan {
                    end: 4,
                    tokens: vec![0, 1, 2, 3],
                },
            ],
        }
    );
    insta::assert_snapshot!(
        serde_json::to_string(&report).unwrap(),
        @r#"{"start":0,"matches":[{"end":2,"tokens":[0,1]},{"end":4,"tokens":[0,1,2,3]}]}"#
    );
}

#[test]
fn empty_report() {
    let toks = significant(lex("x", &SqlDialect::ansi()));
    let set = Matcher::new(&toks).match_at(&fabric().token("SELECT"), 0).unwrap();

    assert_eq!(set.longest(), None);
    assert_eq!(
        serde_json::to_value(set.report()).unwrap(),
        serde_json::json!({ "start": 0, "matches": [] })
    );
}
