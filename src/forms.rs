//! Form decoding and validation for snippet creation
//!
//! The store accepts whatever it is given; these checks are where titles,
//! contents and lifetimes get rejected before they reach it.

use std::collections::BTreeMap;
use serde::{Deserialize, Serialize};

/// Title length limit, counted in characters rather than bytes
pub const MAX_TITLE_CHARS: usize = 100;

/// Lifetimes (in days) a snippet may be created with
pub const PERMITTED_EXPIRES: &[i64] = &[1, 7, 365];

/// Lifetime preselected on an empty form
pub const DEFAULT_EXPIRES: i64 = 365;

/// Collects per-field error messages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Validator {
    pub field_errors: BTreeMap<String, String>,
}

impl Validator {
    pub fn valid(&self) -> bool {
        self.field_errors.is_empty()
    }

    /// Record `message` for `key` unless the field already has an error.
    pub fn add_field_error(&mut self, key: &str, message: &str) {
        self.field_errors
            .entry(key.to_string())
            .or_insert_with(|| message.to_string());
    }

    pub fn check_field(&mut self, ok: bool, key: &str, message: &str) {
        if !ok {
            self.add_field_error(key, message);
        }
    }
}

pub fn not_blank(value: &str) -> bool {
    !value.trim().is_empty()
}

pub fn max_chars(value: &str, n: usize) -> bool {
    value.chars().count() <= n
}

pub fn permitted_value<T: PartialEq>(value: &T, permitted: &[T]) -> bool {
    permitted.contains(value)
}

/// The create-snippet form as submitted by the browser.
///
/// Missing fields decode as empty strings so that they surface as
/// validation errors rather than decoding failures.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SnippetCreateForm {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub expires: String,
    #[serde(skip_deserializing)]
    pub validator: Validator,
}

impl SnippetCreateForm {
    /// A blank form with the default lifetime selected
    pub fn blank() -> Self {
        Self {
            expires: DEFAULT_EXPIRES.to_string(),
            ..Default::default()
        }
    }

    pub fn new(title: impl Into<String>, content: impl Into<String>, expires: i64) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            expires: expires.to_string(),
            validator: Validator::default(),
        }
    }

    /// Run every check, returning the lifetime in days when the form is valid.
    ///
    /// Errors are kept on the form so it can be rendered again.
    pub fn validate(&mut self) -> Option<i64> {
        let mut v = Validator::default();

        v.check_field(not_blank(&self.title), "title", "This field cannot be blank");
        v.check_field(
            max_chars(&self.title, MAX_TITLE_CHARS),
            "title",
            "This field cannot be more than 100 characters long",
        );
        v.check_field(not_blank(&self.content), "content", "This field cannot be blank");

        let expires = self.expires.trim().parse::<i64>().ok();
        v.check_field(
            expires.is_some_and(|days| permitted_value(&days, PERMITTED_EXPIRES)),
            "expires",
            "This field must equal 1, 7 or 365",
        );

        self.validator = v;
        if self.validator.valid() { expires } else { None }
    }

    pub fn field_errors(&self) -> &BTreeMap<String, String> {
        &self.validator.field_errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_form() {
        let mut form = SnippetCreateForm::new("Title", "Some content", 7);
        assert_eq!(form.validate(), Some(7));
        assert!(form.field_errors().is_empty());
    }

    #[test]
    fn test_blank_fields() {
        let mut form = SnippetCreateForm::new("   ", "\n\t", 1);
        assert_eq!(form.validate(), None);
        assert_eq!(form.field_errors()["title"], "This field cannot be blank");
        assert_eq!(form.field_errors()["content"], "This field cannot be blank");
        assert!(!form.field_errors().contains_key("expires"));
    }

    #[test]
    fn test_title_length_counts_characters() {
        let mut form = SnippetCreateForm::new("é".repeat(100), "content", 365);
        assert_eq!(form.validate(), Some(365));

        let mut form = SnippetCreateForm::new("a".repeat(101), "content", 365);
        assert_eq!(form.validate(), None);
        assert_eq!(
            form.field_errors()["title"],
            "This field cannot be more than 100 characters long"
        );
    }

    #[test]
    fn test_expires_must_be_permitted() {
        for days in [0, 2, -1, 30] {
            let mut form = SnippetCreateForm::new("t", "c", days);
            assert_eq!(form.validate(), None);
            assert_eq!(form.field_errors()["expires"], "This field must equal 1, 7 or 365");
        }

        let mut form = SnippetCreateForm::blank();
        form.title = "t".into();
        form.content = "c".into();
        form.expires = "soon".into();
        assert_eq!(form.validate(), None);
    }

    #[test]
    fn test_first_error_per_field_wins() {
        let mut v = Validator::default();
        v.add_field_error("title", "first");
        v.add_field_error("title", "second");
        assert_eq!(v.field_errors["title"], "first");
        assert!(!v.valid());
    }

    #[test]
    fn test_revalidation_clears_old_errors() {
        let mut form = SnippetCreateForm::new("", "content", 7);
        assert_eq!(form.validate(), None);

        form.title = "fixed".into();
        assert_eq!(form.validate(), Some(7));
        assert!(form.field_errors().is_empty());
    }
}
