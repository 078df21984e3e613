//! Filter predicate construction
//!
//! All constraints are optional and compose with logical AND. Contradictory
//! combinations are accepted and simply match nothing.

use std::collections::BTreeSet;

use rusqlite::types::Value;

/// Sort direction for the listing.
///
/// When given, the listing is ordered by `length` in this direction;
/// without it the default order is by `word`, descending.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    /// Parse a direction name as given on the command line.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "asc" => Some(Self::Asc),
            "desc" => Some(Self::Desc),
            _ => None,
        }
    }

    pub(crate) const fn order_clause(self) -> &'static str {
        match self {
            Self::Asc => "ORDER BY length ASC",
            Self::Desc => "ORDER BY length DESC",
        }
    }
}

/// Optional constraints over the word table, AND-composed.
#[derive(Debug, Clone, Default)]
pub struct WordFilter {
    /// Allowed characters; matches words made only of these characters.
    pub charset: Option<String>,
    /// Exact match on the language tag.
    pub language: Option<String>,
    /// `length <= max_length`
    pub max_length: Option<i64>,
    /// `length >= min_length`
    pub min_length: Option<i64>,
}

impl WordFilter {
    /// Render the filter as a `WHERE` clause plus its bound parameters.
    ///
    /// Returns an empty clause when no constraint is set. An empty
    /// allowed-characters set can match no word at all, so it renders as a
    /// never-true clause instead of an empty (and invalid) character class.
    pub(crate) fn where_clause(&self) -> (String, Vec<Value>) {
        let mut clauses: Vec<&str> = Vec::new();
        let mut params: Vec<Value> = Vec::new();

        if let Some(charset) = &self.charset {
            if charset.trim().is_empty() {
                clauses.push("1 = 0");
            } else {
                clauses.push("word REGEXP ?");
                params.push(Value::from(charset_class(charset)));
            }
        }
        if let Some(language) = &self.language {
            clauses.push("language = ?");
            params.push(Value::from(language.clone()));
        }
        if let Some(max) = self.max_length {
            clauses.push("length <= ?");
            params.push(Value::from(max));
        }
        if let Some(min) = self.min_length {
            clauses.push("length >= ?");
            params.push(Value::from(min));
        }

        if clauses.is_empty() {
            (String::new(), params)
        } else {
            (format!("WHERE {}", clauses.join(" AND ")), params)
        }
    }
}

/// Build the character-class pattern for an allowed-characters string.
///
/// Input characters are trimmed and de-duplicated as a set; their order is
/// irrelevant. `"pale"` and `"aelpp"` both yield `^[aelp]+$`, matched
/// case-insensitively by the store's `REGEXP` function.
#[must_use]
pub fn charset_class(chars: &str) -> String {
    let set: BTreeSet<char> = chars.trim().chars().collect();

    let mut class = String::from("^[");
    for c in set {
        // ']' and '\' would terminate or escape the class; a leading '^'
        // would negate it
        if c == ']' || c == '\\' || c == '^' {
            class.push('\\');
        }
        class.push(c);
    }
    class.push_str("]+$");
    class
}
