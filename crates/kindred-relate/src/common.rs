//! Common ancestor resolution

use crate::ancestry::{AncestorPath, AncestorPaths};
use kindred_domain::PersonId;

/// The chosen common ancestor and the shortest path to it from each side
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommonAncestor {
    /// Ancestor shared by both sides
    pub id: PersonId,
    /// Shortest path from person 1 to the ancestor
    pub path1: AncestorPath,
    /// Shortest path from person 2 to the ancestor
    pub path2: AncestorPath,
}

/// Pick a common ancestor from two searches, or `None` when the ancestries
/// are disjoint
///
/// Candidates are visited in ascending ID order. The first candidate is
/// taken; every later candidate whose side-1 path is no longer than the
/// current side-1 path, or whose side-2 path is no longer than the current
/// side-2 path, replaces it. With equal lengths the lexicographically greatest
/// ID therefore wins. The ordering is arbitrary with respect to genealogy but
/// stable, so the same input always yields the same ancestor and paths.
pub fn resolve_common_ancestor(paths1: &AncestorPaths, paths2: &AncestorPaths) -> Option<CommonAncestor> {
    let common_ids: Vec<&PersonId> = paths1.ids().filter(|id| paths2.contains(id.as_str())).collect();
    tracing::debug!(common_ids = ?common_ids, "common ancestor candidates");

    let mut best: Option<CommonAncestor> = None;

    for id in common_ids {
        let (Some(left), Some(right)) = (paths1.shortest(id.as_str()), paths2.shortest(id.as_str())) else {
            continue;
        };

        let replace = match &best {
            None => true,
            Some(current) => left.len() <= current.path1.len() || right.len() <= current.path2.len(),
        };
        tracing::debug!(id = %id, left = left.len(), right = right.len(), replace, "common paths");

        if replace {
            best = Some(CommonAncestor {
                id: id.clone(),
                path1: left.clone(),
                path2: right.clone(),
            });
        }
    }

    best
}
