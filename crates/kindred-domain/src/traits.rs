//! Trait definitions for the query boundary
//!
//! Outer layers (the CLI, renderers) depend on this trait rather than on a
//! concrete engine.

use crate::MutualRelationship;

/// Trait for answering "how are these two people related?"
///
/// Implemented by the relationship engine (kindred-relate)
pub trait KinshipResolver {
    /// Error type for relate operations
    type Error;

    /// Relate the person at `person1` to the person at `person2`
    fn relate(&self, person1: &str, person2: &str) -> Result<MutualRelationship, Self::Error>;
}
