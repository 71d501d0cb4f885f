//! Culture identifier
//!
//! A `Locale` names a culture such as `en-US` or `tr-TR`. The empty name is
//! the invariant culture, which is also the default.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Culture identifier (`language[-REGION]`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Locale(String);

impl Locale {
    /// The invariant culture
    pub fn invariant() -> Self {
        Self(String::new())
    }

    /// Parse a culture name
    ///
    /// Accepts ASCII alphanumerics separated by `-` or `_`; underscores are
    /// normalised to `-`. Returns `None` for anything else. Surrounding
    /// whitespace is ignored and an empty name yields the invariant culture.
    ///
    /// # Example
    ///
    /// ```
    /// use verity_core_types::Locale;
    ///
    /// let locale = Locale::parse("tr_TR").unwrap();
    /// assert_eq!(locale.as_str(), "tr-TR");
    /// assert_eq!(locale.language(), "tr");
    /// assert!(Locale::parse("en US").is_none());
    /// ```
    pub fn parse(name: &str) -> Option<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Some(Self::invariant());
        }
        let valid = name
            .split(['-', '_'])
            .all(|part| !part.is_empty() && part.chars().all(|c| c.is_ascii_alphanumeric()));
        valid.then(|| Self(name.replace('_', "-")))
    }

    /// Get the culture name (empty for the invariant culture)
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this is the invariant culture
    pub fn is_invariant(&self) -> bool {
        self.0.is_empty()
    }

    /// Lowercase language subtag (`"tr"` for `tr-TR`, empty when invariant)
    pub fn language(&self) -> String {
        self.0
            .split('-')
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase()
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_invariant() {
            write!(f, "(invariant)")
        } else {
            write!(f, "{}", self.0)
        }
    }
}
