//! SQL dialect vocabulary.
//!
//! A dialect is a set of reserved words split into keywords, data types and
//! function names, plus any statement delimiters beyond `;`. Word lookup is
//! case-insensitive.

use indexmap::IndexSet;

use crate::SqlTokenKind;

/// Operators recognized in every dialect, longest first where prefixes overlap.
pub const OPERATORS: &[&str] = &[
    "<>", "!=", "<=", ">=", "||", "::", "=", "<", ">", "+", "-", "*", "/", "%",
];

const ANSI_KEYWORDS: &[&str] = &[
    "ADD", "ALL", "ALTER", "AND", "ANY", "AS", "ASC", "BETWEEN", "BY", "CASE", "CHECK",
    "COLUMN", "CONSTRAINT", "CREATE", "CROSS", "DEFAULT", "DELETE", "DESC", "DISTINCT", "DROP",
    "ELSE", "END", "EXISTS", "FOREIGN", "FROM", "FULL", "GROUP", "HAVING", "IF", "IN", "INDEX",
    "INNER", "INSERT", "INTO", "IS", "JOIN", "KEY", "LEFT", "LIKE", "LIMIT", "NOT", "NULL", "OFFSET",
    "ON", "OR", "ORDER", "OUTER", "PRIMARY", "REFERENCES", "RIGHT", "SELECT", "SET", "TABLE",
    "THEN", "UNION", "UNIQUE", "UPDATE", "USING", "VALUES", "VIEW", "WHEN", "WHERE", "WITH",
];

const ANSI_TYPES: &[&str] = &[
    "BIGINT", "BLOB", "BOOLEAN", "CHAR", "CLOB", "DATE", "DECIMAL", "DOUBLE", "FLOAT",
    "INT", "INTEGER", "NUMERIC", "REAL", "SMALLINT", "TEXT", "TIME", "TIMESTAMP", "VARCHAR",
];

const ANSI_FUNCTIONS: &[&str] = &[
    "ABS", "AVG", "CAST", "COALESCE", "COUNT", "CURRENT_DATE", "CURRENT_TIMESTAMP", "LENGTH",
    "LOWER", "MAX", "MIN", "NULLIF", "ROUND", "SUBSTRING", "SUM", "TRIM", "UPPER",
];

/// Word sets and delimiters of one SQL dialect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SqlDialect {
    name: String,
    keywords: IndexSet<String>,
    types: IndexSet<String>,
    functions: IndexSet<String>,
    delimiters: IndexSet<String>,
}

fn upper_set<I>(words: I) -> IndexSet<String>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    words
        .into_iter()
        .map(|w| w.as_ref().to_ascii_uppercase())
        .collect()
}

impl SqlDialect {
    /// Dialect with no reserved words.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            keywords: IndexSet::new(),
            types: IndexSet::new(),
            functions: IndexSet::new(),
            delimiters: IndexSet::new(),
        }
    }

    /// Core ANSI SQL vocabulary.
    pub fn ansi() -> Self {
        Self::new("ansi")
            .with_keywords(ANSI_KEYWORDS)
            .with_types(ANSI_TYPES)
            .with_functions(ANSI_FUNCTIONS)
    }

    pub fn with_keywords<I>(mut self, words: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.keywords.extend(upper_set(words));
        self
    }

    pub fn with_types<I>(mut self, words: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.types.extend(upper_set(words));
        self
    }

    pub fn with_functions<I>(mut self, words: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.functions.extend(upper_set(words));
        self
    }

    /// Extra statement delimiters, such as `GO` or `/`.
    pub fn with_delimiters<I>(mut self, delimiters: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.delimiters.extend(upper_set(delimiters));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn keywords(&self) -> impl Iterator<Item = &str> {
        self.keywords.iter().map(String::as_str)
    }

    pub fn delimiters(&self) -> impl Iterator<Item = &str> {
        self.delimiters.iter().map(String::as_str)
    }

    /// Kind of a word: keyword, then type, then function, else identifier.
    pub fn word_kind(&self, word: &str) -> SqlTokenKind {
        let upper = word.to_ascii_uppercase();
        if self.keywords.contains(&upper) {
            SqlTokenKind::Keyword
        } else if self.types.contains(&upper) {
            SqlTokenKind::Type
        } else if self.functions.contains(&upper) {
            SqlTokenKind::Function
        } else {
            SqlTokenKind::Identifier
        }
    }

    pub fn is_delimiter(&self, text: &str) -> bool {
        self.delimiters.contains(&text.to_ascii_uppercase())
    }
}

impl Default for SqlDialect {
    fn default() -> Self {
        Self::ansi()
    }
}
