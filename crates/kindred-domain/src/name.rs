//! Personal names

use serde::{Deserialize, Serialize};
use std::fmt;

/// The name parts of a person as recorded by the source data
///
/// Every part is optional in practice; empty strings are skipped when the
/// full name is rendered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonalName {
    /// Given name
    pub forename: String,

    /// Middle name(s)
    pub middle: String,

    /// Current surname
    pub surname: String,

    /// Surname at birth, if different from the current one
    pub birth_surname: String,

    /// Informal name, rendered in double quotes
    pub nickname: String,

    /// Generational or honorific suffix, e.g. "Jr."
    pub suffix: String,
}

impl PersonalName {
    /// Create a name from a forename and a surname
    ///
    /// # Examples
    ///
    /// ```
    /// use kindred_domain::PersonalName;
    ///
    /// let name = PersonalName::new("Rose", "Fitzgerald");
    /// assert_eq!(name.full(), "Rose Fitzgerald");
    /// ```
    pub fn new(forename: impl Into<String>, surname: impl Into<String>) -> Self {
        Self {
            forename: forename.into(),
            surname: surname.into(),
            ..Self::default()
        }
    }

    /// Set the nickname
    pub fn with_nickname(mut self, nickname: impl Into<String>) -> Self {
        self.nickname = nickname.into();
        self
    }

    /// Set the middle name
    pub fn with_middle(mut self, middle: impl Into<String>) -> Self {
        self.middle = middle.into();
        self
    }

    /// Set the surname at birth
    pub fn with_birth_surname(mut self, birth_surname: impl Into<String>) -> Self {
        self.birth_surname = birth_surname.into();
        self
    }

    /// Set the suffix
    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    /// Render the full name
    ///
    /// Parts appear in the order forename, "nickname", middle, birth surname,
    /// surname, suffix.
    pub fn full(&self) -> String {
        let nickname = if self.nickname.is_empty() {
            String::new()
        } else {
            format!("\"{}\"", self.nickname)
        };

        [
            self.forename.as_str(),
            nickname.as_str(),
            self.middle.as_str(),
            self.birth_surname.as_str(),
            self.surname.as_str(),
            self.suffix.as_str(),
        ]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
    }

    /// Whether every part is empty
    pub fn is_empty(&self) -> bool {
        self.full().is_empty()
    }
}

impl fmt::Display for PersonalName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full())
    }
}
