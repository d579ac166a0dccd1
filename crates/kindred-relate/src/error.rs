//! Error types for the relationship engine

use kindred_domain::{PersonId, RelationshipType};
use thiserror::Error;

/// Errors that can occur while relating two people
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RelateError {
    /// An ID passed to a query is not part of the population
    #[error("person with id {0} not found")]
    PersonNotFound(PersonId),

    /// No blood path and no single-marriage bridge exists
    #[error("it appears that these people are unrelated")]
    Unrelated,

    /// The classifier reached an inconsistent state; this is an engine bug
    #[error("lineage {side}: {source}")]
    Lineage {
        /// Which side of the query failed, 1 or 2
        side: u8,
        /// What was inconsistent
        #[source]
        source: LineageError,
    },

    /// Configuration rejected at construction
    #[error("Configuration error: {0}")]
    Config(String),
}

impl RelateError {
    /// Whether this is the expected "unrelated" outcome rather than a failure
    pub fn is_unrelated(&self) -> bool {
        matches!(self, RelateError::Unrelated)
    }

    /// Whether this reports an unknown person ID
    pub fn is_not_found(&self) -> bool {
        matches!(self, RelateError::PersonNotFound(_))
    }
}

/// Internal invariant violations raised while describing a lineage
///
/// Each variant names a combination of type and generational distance that
/// the classifier should never produce.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LineageError {
    /// A descendant-side type with a non-positive distance
    #[error("generations removed ({generations_removed}) must be > 0 for {relationship_type}")]
    DescendantRemoval {
        /// The type being described
        relationship_type: RelationshipType,
        /// The offending distance
        generations_removed: i32,
    },

    /// An ancestor-side type with a non-negative distance
    #[error("generations removed ({generations_removed}) must be < 0 for {relationship_type}")]
    AncestorRemoval {
        /// The type being described
        relationship_type: RelationshipType,
        /// The offending distance
        generations_removed: i32,
    },

    /// Cousins whose common ancestor is less than two generations back
    #[error("generations since common ancestor ({0}) must be < -1")]
    CousinDepth(i32),

    /// An in-law type handed to the blood classifier
    #[error("{0} is not a consanguineous relationship")]
    NotConsanguineous(RelationshipType),

    /// An ancestral line without even its starting person
    #[error("ancestral line is empty")]
    EmptyLine,
}
