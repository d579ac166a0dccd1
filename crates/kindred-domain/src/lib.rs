//! Kindred Domain Layer
//!
//! This crate contains the data model shared by the relationship engine and
//! its collaborators. It carries no traversal logic: people, unions and the
//! relationship descriptors produced by a query are plain values here.
//!
//! ## Key Concepts
//!
//! - **Person**: an individual with references (by ID) to parents, children
//!   and spouses. References never imply ownership.
//! - **Union**: a marriage or partnership between up to two people
//! - **Relationship**: how one person relates to another, with a description,
//!   a signed generational distance and the path that connects them
//! - **MutualRelationship**: both directions of a query plus the link that
//!   ties them together (a common ancestor or a union)
//!
//! ## Architecture
//!
//! - Only `serde` as an external dependency, so records can be ingested
//!   from and rendered to JSON by outer layers
//! - Trait definitions for the query boundary live in [`traits`]

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod name;
pub mod person;
pub mod relationship;
pub mod traits;
pub mod union;

// Re-exports for convenience
pub use name::PersonalName;
pub use person::{Person, PersonId};
pub use relationship::{Link, MutualRelationship, Relationship, RelationshipType, AFFINAL_OFFSET};
pub use traits::KinshipResolver;
pub use union::Union;
