//! Kindred Relationship Engine
//!
//! Given a population of people linked by parent and spouse references,
//! determines how any two of them are related.
//!
//! # Overview
//!
//! A query runs in up to two phases:
//!
//! 1. **Blood**: walk every ancestral path upward from both people, pick the
//!    nearest common ancestor, and classify the two lines into a
//!    relationship type plus a description such as "2nd cousin 1x removed".
//! 2. **Marriage**: with no common ancestor, check whether the two are
//!    married, or whether a spouse of one is a blood relative of the other.
//!    The result is then reported as its in-law counterpart.
//!
//! # Architecture
//!
//! ```text
//! people → PersonIndex → ancestor search ×2 → common ancestor → lineage
//!                                     └─ (none) → spouse bridge → in-law
//! ```
//!
//! # Example Usage
//!
//! ```
//! use kindred_domain::Person;
//! use kindred_relate::Relator;
//!
//! let relator = Relator::new(vec![
//!     Person::new("gran"),
//!     Person::new("mom").with_parents(["gran"]),
//!     Person::new("aunt").with_parents(["gran"]),
//!     Person::new("me").with_parents(["mom"]),
//!     Person::new("cousin").with_parents(["aunt"]),
//! ]);
//!
//! let found = relator.relate("me", "cousin").unwrap();
//! assert_eq!(found.r1.description, "1st cousin");
//!
//! let found = relator.relate("me", "aunt").unwrap();
//! assert_eq!(found.r1.description, "niece/nephew");
//! assert_eq!(found.r2.description, "aunt/uncle");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod affinal;
pub mod ancestry;
pub mod common;
mod config;
mod error;
pub mod index;
pub mod lineage;
mod relator;

pub use config::{RelatorConfig, MAX_GENERATIONS_TO_RELATE};
pub use error::{LineageError, RelateError};
pub use index::PersonIndex;
pub use relator::Relator;
