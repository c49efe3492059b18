use crate::{SqlDialect, SqlTokenKind};

#[test]
fn ansi_word_lookup_ignores_case() {
    let dialect = SqlDialect::ansi();

    assert_eq!(dialect.word_kind("select"), SqlTokenKind::Keyword);
    assert_eq!(dialect.word_kind("SeLeCt"), SqlTokenKind::Keyword);
    assert_eq!(dialect.word_kind("Integer"), SqlTokenKind::Type);
    assert_eq!(dialect.word_kind("count"), SqlTokenKind::Function);
    assert_eq!(dialect.word_kind("customers"), SqlTokenKind::Identifier);
}

#[test]
fn keyword_wins_over_type_and_function() {
    let dialect = SqlDialect::new("custom")
        .with_functions(["left"])
        .with_types(["left"])
        .with_keywords(["left"]);

    assert_eq!(dialect.word_kind("LEFT"), SqlTokenKind::Keyword);
}

#[test]
fn type_wins_over_function() {
    let dialect = SqlDialect::new("custom")
        .with_functions(["date"])
        .with_types(["date"]);

    assert_eq!(dialect.word_kind("date"), SqlTokenKind::Type);
}

#[test]
fn empty_dialect_knows_only_identifiers() {
    let dialect = SqlDialect::new("bare");

    assert_eq!(dialect.name(), "bare");
    assert_eq!(dialect.keywords().count(), 0);
    assert_eq!(dialect.word_kind("SELECT"), SqlTokenKind::Identifier);
}

#[test]
fn extending_keeps_existing_words() {
    let dialect = SqlDialect::ansi().with_keywords(["merge", "MERGE"]);

    assert_eq!(dialect.word_kind("merge"), SqlTokenKind::Keyword);
    assert_eq!(dialect.word_kind("select"), SqlTokenKind::Keyword);
    assert_eq!(dialect.keywords().filter(|k| *k == "MERGE").count(), 1);
}

#[test]
fn delimiters_are_case_insensitive() {
    let dialect = SqlDialect::ansi().with_delimiters(["go", "/"]);

    assert!(dialect.is_delimiter("GO"));
    assert!(dialect.is_delimiter("Go"));
    assert!(dialect.is_delimiter("/"));
    assert!(!dialect.is_delimiter(";"));
    assert_eq!(dialect.delimiters().collect::<Vec<_>>(), ["GO", "/"]);
}

#[test]
fn default_is_ansi() {
    assert_eq!(SqlDialect::default(), SqlDialect::ansi());
    assert_eq!(SqlDialect::default().name(), "ansi");
}
