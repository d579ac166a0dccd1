//! Ancestor path search
//!
//! Walks upward from a starting person through every parent edge and records
//! each path found to each ancestor. The starting person is recorded too, with
//! the single-element path to themself, so that a direct ancestor of the other
//! query person shows up as a common entry. A parent already on the current
//! path is skipped, which cuts malformed cycles short while leaving pedigree
//! collapse with all its distinct paths.
//!
//! The two searches of a query share one [`VisitedSet`]. The second search
//! notices every ancestor the first one already completed; that is how
//! convergence between the two lines is detected. Giving each search its own
//! set would hide convergence, so the set is passed by `&mut` and never
//! cloned.

use crate::index::PersonIndex;
use kindred_domain::PersonId;
use std::collections::{BTreeMap, HashSet};

/// A path of IDs from a starting person up to an ancestor, both inclusive
pub type AncestorPath = Vec<PersonId>;

/// Ancestors reached by a search, keyed by ancestor ID
///
/// Each ancestor keeps every path that reached it; pedigree collapse yields
/// several. Keys iterate in lexicographic ID order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AncestorPaths {
    paths: BTreeMap<PersonId, Vec<AncestorPath>>,
}

impl AncestorPaths {
    fn add(&mut self, id: &PersonId, path: AncestorPath) {
        self.paths.entry(id.clone()).or_default().push(path);
    }

    /// Every recorded path to an ancestor, in discovery order
    pub fn paths_to(&self, id: &str) -> &[AncestorPath] {
        self.paths.get(id).map(Vec::as_slice).unwrap_or_default()
    }

    /// The shortest path to an ancestor; the earliest discovered wins ties
    pub fn shortest(&self, id: &str) -> Option<&AncestorPath> {
        self.paths_to(id)
            .iter()
            .reduce(|best, path| if path.len() < best.len() { path } else { best })
    }

    /// Whether the ancestor was reached
    pub fn contains(&self, id: &str) -> bool {
        self.paths.contains_key(id)
    }

    /// Reached ancestor IDs in lexicographic order
    pub fn ids(&self) -> impl Iterator<Item = &PersonId> {
        self.paths.keys()
    }

    /// Number of distinct ancestors reached, the start included
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// Whether nothing was reached
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

/// People whose ancestry has been fully walked, shared by both searches of a
/// query
#[derive(Debug, Clone, Default)]
pub struct VisitedSet(HashSet<PersonId>);

impl VisitedSet {
    /// Whether the person has been walked already
    pub fn contains(&self, id: &str) -> bool {
        self.0.contains(id)
    }

    fn insert(&mut self, id: &PersonId) {
        if !self.0.contains(id.as_str()) {
            self.0.insert(id.clone());
        }
    }

    /// Number of walked people
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether nobody has been walked
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Find every path from `start` to every ancestor within `max_generations`
///
/// `label` only tags log events so the two sides of a query can be told
/// apart.
pub fn find_ancestor_paths(
    index: &PersonIndex,
    start: &PersonId,
    max_generations: usize,
    visited: &mut VisitedSet,
    label: &str,
) -> AncestorPaths {
    let mut search = Search {
        index,
        max_generations,
        visited,
        label,
        found: AncestorPaths::default(),
        converged: 0,
    };
    search.walk(0, &[], start);

    tracing::debug!(
        label,
        start = %start,
        ancestors = search.found.len(),
        converged = search.converged,
        "ancestor search complete"
    );
    search.found
}

struct Search<'a> {
    index: &'a PersonIndex,
    max_generations: usize,
    visited: &'a mut VisitedSet,
    label: &'a str,
    found: AncestorPaths,
    converged: usize,
}

impl Search<'_> {
    fn walk(&mut self, generation: usize, previous: &[PersonId], id: &PersonId) {
        if generation >= self.max_generations {
            tracing::debug!(label = self.label, id = %id, "generation cap reached");
            return;
        }

        let mut path = Vec::with_capacity(previous.len() + 1);
        path.extend_from_slice(previous);
        path.push(id.clone());

        if self.visited.contains(id.as_str()) {
            tracing::debug!(label = self.label, id = %id, "already visited person");
            self.converged += 1;
        }

        let index = self.index;
        for parent in index.parent_ids_of(id.as_str()) {
            if path.contains(parent) {
                tracing::warn!(label = self.label, id = %id, parent = %parent, "parent edge closes a cycle");
                continue;
            }
            self.walk(generation + 1, &path, parent);
        }

        self.found.add(id, path);
        self.visited.insert(id);
    }
}
