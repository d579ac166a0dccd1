//! Person module - the individuals a population is made of

use crate::PersonalName;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Externally assigned, unique identifier of a person
///
/// IDs come from the source data (for GEDCOM files they look like `@I42@`)
/// and are compared as plain strings. Their ordering is lexicographic, which
/// is what tie-breaks between equally distant common ancestors rely on.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PersonId(String);

impl PersonId {
    /// Create a PersonId from any string-like value
    ///
    /// # Examples
    ///
    /// ```
    /// use kindred_domain::PersonId;
    ///
    /// let id = PersonId::new("@I0@");
    /// assert_eq!(id.as_str(), "@I0@");
    /// ```
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Get the ID as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PersonId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for PersonId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl Borrow<str> for PersonId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for PersonId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for PersonId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// An individual that existed, is thought to have existed, or still exists
///
/// `parents`, `children` and `spouses` hold IDs of other people in the same
/// population. They are back-references built by the ingestion step and do
/// not own anything. An empty list means "none known"; ingestion must supply
/// the list even when it is empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    /// Unique identifier
    pub id: PersonId,

    /// Display name
    #[serde(default)]
    pub name: PersonalName,

    /// Birth date, as rendered by the source data
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<String>,

    /// Death date, as rendered by the source data
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub death_date: Option<String>,

    /// IDs of parents
    #[serde(default)]
    pub parents: Vec<PersonId>,

    /// IDs of children
    #[serde(default)]
    pub children: Vec<PersonId>,

    /// IDs of spouses or partners
    #[serde(default)]
    pub spouses: Vec<PersonId>,
}

impl Person {
    /// Create a person with no name, dates or links
    pub fn new(id: impl Into<PersonId>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    /// Set the name
    pub fn with_name(mut self, name: PersonalName) -> Self {
        self.name = name;
        self
    }

    /// Set the birth date
    pub fn with_birth_date(mut self, date: impl Into<String>) -> Self {
        self.birth_date = Some(date.into());
        self
    }

    /// Set the death date
    pub fn with_death_date(mut self, date: impl Into<String>) -> Self {
        self.death_date = Some(date.into());
        self
    }

    /// Set the parent IDs
    pub fn with_parents<I, T>(mut self, parents: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<PersonId>,
    {
        self.parents = parents.into_iter().map(Into::into).collect();
        self
    }

    /// Set the child IDs
    pub fn with_children<I, T>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<PersonId>,
    {
        self.children = children.into_iter().map(Into::into).collect();
        self
    }

    /// Set the spouse IDs
    pub fn with_spouses<I, T>(mut self, spouses: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<PersonId>,
    {
        self.spouses = spouses.into_iter().map(Into::into).collect();
        self
    }

    /// Copy of this person without any family links
    ///
    /// Relationship paths hold snapshots so a result never drags the
    /// population graph along with it.
    pub fn snapshot(&self) -> Person {
        Person {
            id: self.id.clone(),
            name: self.name.clone(),
            birth_date: self.birth_date.clone(),
            death_date: self.death_date.clone(),
            parents: Vec::new(),
            children: Vec::new(),
            spouses: Vec::new(),
        }
    }
}
