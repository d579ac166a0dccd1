//! Person index - lookup structures built once per population

use kindred_domain::{Person, PersonId, Union};
use std::collections::{BTreeSet, HashMap};

/// Lookup structures over a population
///
/// Built once, then only read. ID sets are ordered so that every traversal
/// over them is deterministic.
#[derive(Debug, Clone, Default)]
pub struct PersonIndex {
    people: HashMap<PersonId, Person>,
    parents: HashMap<PersonId, BTreeSet<PersonId>>,
    spouses: HashMap<PersonId, BTreeSet<PersonId>>,
    unions: Vec<Union>,
}

impl PersonIndex {
    /// Build the index from a flat list of people
    ///
    /// Parent and spouse references to IDs outside the population are
    /// dropped. When an ID appears twice, the later record wins.
    pub fn build(people: impl IntoIterator<Item = Person>) -> Self {
        let mut by_id: HashMap<PersonId, Person> = HashMap::new();
        for person in people {
            if by_id.contains_key(&person.id) {
                tracing::warn!(id = %person.id, "duplicate person id, keeping the later record");
            }
            by_id.insert(person.id.clone(), person);
        }

        let mut parents = HashMap::with_capacity(by_id.len());
        let mut spouses = HashMap::with_capacity(by_id.len());

        for person in by_id.values() {
            let parent_ids = Self::known_ids(&by_id, &person.id, &person.parents, "parent");
            let spouse_ids = Self::known_ids(&by_id, &person.id, &person.spouses, "spouse");

            parents.insert(person.id.clone(), parent_ids);
            spouses.insert(person.id.clone(), spouse_ids);
        }

        Self {
            people: by_id,
            parents,
            spouses,
            unions: Vec::new(),
        }
    }

    /// Register unions from the source data
    ///
    /// These are only used to describe in-law results.
    pub fn with_unions(mut self, unions: impl IntoIterator<Item = Union>) -> Self {
        self.unions.extend(unions);
        self
    }

    fn known_ids(
        by_id: &HashMap<PersonId, Person>,
        owner: &PersonId,
        ids: &[PersonId],
        kind: &str,
    ) -> BTreeSet<PersonId> {
        ids.iter()
            .filter(|id| {
                let known = by_id.contains_key(*id);
                if !known {
                    tracing::debug!(id = %owner, reference = %id, kind, "dropping reference to unknown person");
                }
                known
            })
            .cloned()
            .collect()
    }

    /// Get a person by ID
    pub fn lookup(&self, id: &str) -> Option<&Person> {
        self.people.get(id)
    }

    /// IDs of a person's parents, empty when unknown
    pub fn parent_ids_of(&self, id: &str) -> impl Iterator<Item = &PersonId> {
        self.parents.get(id).into_iter().flatten()
    }

    /// IDs of a person's spouses, empty when unknown
    pub fn spouse_ids_of(&self, id: &str) -> impl Iterator<Item = &PersonId> {
        self.spouses.get(id).into_iter().flatten()
    }

    /// Whether both people list each other as spouses
    pub fn are_spouses(&self, a: &str, b: &str) -> bool {
        let lists = |x: &str, y: &str| self.spouses.get(x).is_some_and(|set| set.contains(y));
        lists(a, b) && lists(b, a)
    }

    /// A registered union joining these two people, in either order
    pub fn union_between(&self, a: &PersonId, b: &PersonId) -> Option<&Union> {
        self.unions.iter().find(|union| union.joins(a, b))
    }

    /// Snapshot the people along a path of IDs
    ///
    /// IDs in a path always come from the index itself; an unknown ID yields
    /// a bare person carrying only that ID.
    pub fn snapshot_path(&self, ids: &[PersonId]) -> Vec<Person> {
        ids.iter().map(|id| self.snapshot(id)).collect()
    }

    /// Snapshot a single person
    pub fn snapshot(&self, id: &PersonId) -> Person {
        self.lookup(id.as_str())
            .map(Person::snapshot)
            .unwrap_or_else(|| Person::new(id.clone()))
    }

    /// All indexed people, in no particular order
    pub fn people(&self) -> impl Iterator<Item = &Person> {
        self.people.values()
    }

    /// Number of indexed people
    pub fn len(&self) -> usize {
        self.people.len()
    }

    /// Whether the index holds nobody
    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn family() -> Vec<Person> {
        vec![
            Person::new("mom").with_spouses(["dad"]),
            Person::new("dad").with_spouses(["mom"]),
            Person::new("kid").with_parents(["mom", "dad", "ghost"]),
            Person::new("lover").with_spouses(["kid"]),
        ]
    }

    #[test]
    fn test_lookup() {
        let index = PersonIndex::build(family());
        assert_eq!(index.len(), 4);
        assert!(index.lookup("kid").is_some());
        assert!(index.lookup("nobody").is_none());
    }

    #[test]
    fn test_parent_ids_are_sorted_and_known() {
        let index = PersonIndex::build(family());
        let parents: Vec<&str> = index.parent_ids_of("kid").map(PersonId::as_str).collect();
        assert_eq!(parents, vec!["dad", "mom"]);
        assert_eq!(index.parent_ids_of("nobody").count(), 0);
    }

    #[test]
    fn test_spouses_must_be_mutual() {
        let index = PersonIndex::build(family());
        assert!(index.are_spouses("mom", "dad"));
        assert!(index.are_spouses("dad", "mom"));
        // one-sided claim
        assert!(!index.are_spouses("lover", "kid"));
        assert!(!index.are_spouses("nobody", "mom"));
    }

    #[test]
    fn test_union_between_either_order() {
        let union = Union {
            id: Some("@F1@".to_string()),
            ..Union::between(PersonId::new("mom"), PersonId::new("dad"))
        };
        let index = PersonIndex::build(family()).with_unions([union]);

        let found = index.union_between(&PersonId::new("dad"), &PersonId::new("mom"));
        assert_eq!(found.and_then(|u| u.id.as_deref()), Some("@F1@"));
        assert!(index.union_between(&PersonId::new("kid"), &PersonId::new("mom")).is_none());
    }

    #[test]
    fn test_duplicate_id_keeps_later_record() {
        let index = PersonIndex::build(vec![
            Person::new("a").with_birth_date("1900"),
            Person::new("a").with_birth_date("1901"),
        ]);
        assert_eq!(index.len(), 1);
        assert_eq!(index.lookup("a").and_then(|p| p.birth_date.as_deref()), Some("1901"));
    }

    #[test]
    fn test_snapshot_path_strips_links() {
        let index = PersonIndex::build(family());
        let path = index.snapshot_path(&[PersonId::new("kid"), PersonId::new("mom")]);
        assert_eq!(path.len(), 2);
        assert!(path.iter().all(|p| p.parents.is_empty() && p.spouses.is_empty()));
    }
}
