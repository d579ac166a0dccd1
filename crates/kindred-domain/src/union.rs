//! Union module - marriages and partnerships

use crate::PersonId;
use serde::{Deserialize, Serialize};

/// A relationship between two people, usually resulting in children
///
/// Either partner may be unknown. Unions are produced by ingestion; the
/// relationship engine only reads them to describe in-law results.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Union {
    /// Identifier from the source data, absent for unions synthesized from
    /// spouse links
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// First partner
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub person1: Option<PersonId>,

    /// Second partner
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub person2: Option<PersonId>,

    /// Children of the union
    #[serde(default)]
    pub children: Vec<PersonId>,

    /// When the union started
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,

    /// When the union ended
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
}

impl Union {
    /// Synthesize a union between two known people
    pub fn between(person1: PersonId, person2: PersonId) -> Self {
        Self {
            person1: Some(person1),
            person2: Some(person2),
            ..Self::default()
        }
    }

    /// Whether the person is one of the partners
    pub fn involves(&self, id: &PersonId) -> bool {
        self.person1.as_ref() == Some(id) || self.person2.as_ref() == Some(id)
    }

    /// Whether this union joins exactly these two people, in either order
    pub fn joins(&self, a: &PersonId, b: &PersonId) -> bool {
        match (&self.person1, &self.person2) {
            (Some(p1), Some(p2)) => (p1 == a && p2 == b) || (p1 == b && p2 == a),
            _ => false,
        }
    }

    /// Partners that are known
    pub fn partners(&self) -> impl Iterator<Item = &PersonId> {
        self.person1.iter().chain(self.person2.iter())
    }
}
