//! Named-placeholder template substitution
//!
//! Citation templates are fixed strings with `$name` placeholders, one per
//! record field (plus derived clauses such as the edition text). Substitution
//! fails loudly when a placeholder has no bound value instead of silently
//! inserting blank text, so a template/model mismatch surfaces as an error.

use crate::types::CitationError;
use std::collections::HashMap;
use std::fmt;

/// A fixed citation template with `$name` placeholders
///
/// A placeholder is a `$` followed by an identifier (ASCII letter or
/// underscore, then letters, digits, or underscores). A `$` followed by
/// anything else is literal text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Template {
    text: &'static str,
}

impl Template {
    /// Wrap a template string
    pub const fn new(text: &'static str) -> Self {
        Template { text }
    }

    /// The raw template text
    pub fn text(&self) -> &'static str {
        self.text
    }

    /// Replace every placeholder with its bound value
    ///
    /// Pure function of the template and bindings; safe to call repeatedly.
    ///
    /// # Errors
    ///
    /// Returns [`CitationError::MissingPlaceholder`] if the template
    /// references a name with no binding.
    pub fn substitute(&self, bindings: &Bindings) -> Result<String, CitationError> {
        let mut output = String::with_capacity(self.text.len());
        let mut rest = self.text;

        while let Some(position) = rest.find('$') {
            output.push_str(&rest[..position]);
            rest = &rest[position + 1..];

            let name_len = placeholder_len(rest);
            if name_len == 0 {
                output.push('$');
                continue;
            }

            let name = &rest[..name_len];
            let value = bindings
                .get(name)
                .ok_or_else(|| CitationError::missing_placeholder(name))?;
            output.push_str(value);
            rest = &rest[name_len..];
        }

        output.push_str(rest);
        Ok(output)
    }
}

/// Length of the identifier starting at the beginning of `text`, or 0 if
/// `text` does not start with one.
fn placeholder_len(text: &str) -> usize {
    let mut chars = text.char_indices();
    match chars.next() {
        Some((_, first)) if first.is_ascii_alphabetic() || first == '_' => {}
        _ => return 0,
    }
    for (index, c) in chars {
        if !c.is_ascii_alphanumeric() && c != '_' {
            return index;
        }
    }
    text.len()
}

/// Placeholder name to value map built by the strategies
///
/// Values are stored pre-rendered as strings; `set` accepts anything
/// displayable so numeric fields bind without manual conversion.
#[derive(Debug, Clone, Default)]
pub struct Bindings {
    values: HashMap<&'static str, String>,
}

impl Bindings {
    /// Create an empty binding set
    pub fn new() -> Self {
        Bindings::default()
    }

    /// Bind a placeholder name to a value, consuming and returning the set
    /// for chaining
    pub fn set(mut self, name: &'static str, value: impl fmt::Display) -> Self {
        self.values.insert(name, value.to_string());
        self
    }

    /// Look up a bound value by placeholder name
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_substitute_replaces_all_placeholders() {
        let template = Template::new("$authors ($year) $title");
        let bindings = Bindings::new()
            .set("authors", "Иванов И.М.")
            .set("year", 2020)
            .set("title", "Наука как искусство");

        assert_eq!(
            template.substitute(&bindings).unwrap(),
            "Иванов И.М. (2020) Наука как искусство"
        );
    }

    #[test]
    fn test_substitute_fails_on_unbound_placeholder() {
        let template = Template::new("$authors ($year)");
        let bindings = Bindings::new().set("authors", "Иванов И.М.");

        assert_eq!(
            template.substitute(&bindings).unwrap_err(),
            CitationError::missing_placeholder("year")
        );
    }

    #[test]
    fn test_substitute_allows_empty_binding_value() {
        // Derived clauses such as an absent edition bind to empty text,
        // which is not the same as an unbound placeholder.
        let template = Template::new("$title ($edition) $city");
        let bindings = Bindings::new()
            .set("title", "Наука")
            .set("edition", "")
            .set("city", "СПб.");

        assert_eq!(template.substitute(&bindings).unwrap(), "Наука () СПб.");
    }

    #[rstest]
    #[case::trailing_dollar("price: 100$", "price: 100$")]
    #[case::dollar_before_digit("$1 coin", "$1 coin")]
    #[case::dollar_before_space("a $ b", "a $ b")]
    #[case::double_dollar("$$title", "$Наука")]
    fn test_substitute_leaves_literal_dollars(#[case] text: &'static str, #[case] expected: &str) {
        let template = Template::new(text);
        let bindings = Bindings::new().set("title", "Наука");

        assert_eq!(template.substitute(&bindings).unwrap(), expected);
    }

    #[test]
    fn test_substitute_placeholder_at_end() {
        let template = Template::new("журнал: $journal");
        let bindings = Bindings::new().set("journal", "Наука");

        assert_eq!(template.substitute(&bindings).unwrap(), "журнал: Наука");
    }

    #[test]
    fn test_substitute_is_idempotent() {
        let template = Template::new("$a и $b");
        let bindings = Bindings::new().set("a", "раз").set("b", "два");

        let first = template.substitute(&bindings).unwrap();
        let second = template.substitute(&bindings).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_placeholder_name_stops_at_non_identifier() {
        let template = Template::new("$pages с.");
        let bindings = Bindings::new().set("pages", 999);

        assert_eq!(template.substitute(&bindings).unwrap(), "999 с.");
    }
}
