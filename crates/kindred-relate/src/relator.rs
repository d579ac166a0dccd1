//! The Relator - entry point for relationship queries

use crate::affinal;
use crate::ancestry::{find_ancestor_paths, VisitedSet};
use crate::common::resolve_common_ancestor;
use crate::config::RelatorConfig;
use crate::error::RelateError;
use crate::index::PersonIndex;
use crate::lineage::{classify, Lineage};
use kindred_domain::{
    KinshipResolver, Link, MutualRelationship, Person, PersonId, Relationship, Union,
};

/// Determines how two people of a population are related
///
/// The index is built once at construction and only read afterwards, so a
/// `Relator` can be shared across threads and queried concurrently.
///
/// # Examples
///
/// ```
/// use kindred_domain::{Person, RelationshipType};
/// use kindred_relate::Relator;
///
/// let relator = Relator::new(vec![
///     Person::new("mom"),
///     Person::new("ann").with_parents(["mom"]),
///     Person::new("bob").with_parents(["mom"]),
/// ]);
///
/// let found = relator.relate("ann", "bob").unwrap();
/// assert_eq!(found.r1.relationship_type, RelationshipType::Sibling);
/// assert_eq!(found.common_person().map(|p| p.id.as_str()), Some("mom"));
/// ```
#[derive(Debug, Clone)]
pub struct Relator {
    index: PersonIndex,
    config: RelatorConfig,
}

impl Relator {
    /// Build a relator with the default configuration
    pub fn new(people: impl IntoIterator<Item = Person>) -> Self {
        Self {
            index: PersonIndex::build(people),
            config: RelatorConfig::default(),
        }
    }

    /// Build a relator with a custom configuration
    ///
    /// # Errors
    /// Returns `RelateError::Config` if the configuration is invalid
    pub fn with_config(people: impl IntoIterator<Item = Person>, config: RelatorConfig) -> Result<Self, RelateError> {
        Self::with_unions(people, Vec::new(), config)
    }

    /// Build a relator that also knows the unions of the population
    ///
    /// In-law results then report the registered union (with its ID and
    /// dates) instead of one synthesized from spouse links.
    ///
    /// # Errors
    /// Returns `RelateError::Config` if the configuration is invalid
    pub fn with_unions(
        people: impl IntoIterator<Item = Person>,
        unions: impl IntoIterator<Item = Union>,
        config: RelatorConfig,
    ) -> Result<Self, RelateError> {
        config.validate().map_err(RelateError::Config)?;
        let index = PersonIndex::build(people).with_unions(unions);
        tracing::debug!(people = index.len(), max_generations = config.max_generations, "built person index");
        Ok(Self { index, config })
    }

    /// Relate the person at `person1` to the person at `person2`
    ///
    /// Blood relationships are tried first. If there is none, direct marriage
    /// and then a single marriage bridge through either person's spouses are
    /// tried.
    ///
    /// # Errors
    /// - `RelateError::PersonNotFound` for an unknown ID
    /// - `RelateError::Unrelated` when neither blood nor one marriage links them
    /// - `RelateError::Lineage` when classification hits an inconsistency
    pub fn relate(&self, person1: &str, person2: &str) -> Result<MutualRelationship, RelateError> {
        let p1 = self.require(person1)?;
        let p2 = self.require(person2)?;

        match self.relate_by_blood(&p1.id, &p2.id) {
            Ok(found) => return Ok(found),
            Err(RelateError::Unrelated) => {
                tracing::debug!(p1 = %p1.id, p2 = %p2.id, "no blood relation, trying marriage");
            }
            Err(e) => return Err(e),
        }

        let mut found = affinal::affiliate(self, &p1.id, &p2.id)?;
        found.r1.source_id = p1.id.clone();
        found.r1.target_id = p2.id.clone();
        found.r2.source_id = p2.id.clone();
        found.r2.target_id = p1.id.clone();
        Ok(found)
    }

    /// Look up a person by ID
    pub fn person(&self, id: &str) -> Option<&Person> {
        self.index.lookup(id)
    }

    /// The underlying index
    pub fn index(&self) -> &PersonIndex {
        &self.index
    }

    /// The active configuration
    pub fn config(&self) -> &RelatorConfig {
        &self.config
    }

    fn require(&self, id: &str) -> Result<&Person, RelateError> {
        self.index
            .lookup(id)
            .ok_or_else(|| RelateError::PersonNotFound(PersonId::new(id)))
    }

    /// Blood relationship only; `Unrelated` when the ancestries are disjoint
    pub(crate) fn relate_by_blood(&self, p1: &PersonId, p2: &PersonId) -> Result<MutualRelationship, RelateError> {
        if p1 == p2 {
            let line = [p1.clone()];
            let (l1, l2) = self.classify_logged(p1, p2, &line, &line)?;
            return Ok(MutualRelationship {
                r1: self.relationship(p1, p2, l1, &line),
                r2: self.relationship(p2, p1, l2, &line),
                link: Link::CommonPerson(self.index.snapshot(p1)),
            });
        }

        let max_generations = self.config.max_generations;
        let mut visited = VisitedSet::default();
        // The first pass marks everything above p1. The second pass reuses the
        // same set, which is what lets it notice where the lines converge.
        let p1_paths = find_ancestor_paths(&self.index, p1, max_generations, &mut visited, "p1");
        let p2_paths = find_ancestor_paths(&self.index, p2, max_generations, &mut visited, "p2");

        let Some(common) = resolve_common_ancestor(&p1_paths, &p2_paths) else {
            tracing::debug!(p1 = %p1, p2 = %p2, "no common ancestor");
            return Err(RelateError::Unrelated);
        };

        let ancestor = self.index.snapshot(&common.id);
        tracing::info!(id = %ancestor.id, name = %ancestor.name, "found most recent common ancestor");

        let (l1, l2) = self.classify_logged(p1, p2, &common.path1, &common.path2)?;
        Ok(MutualRelationship {
            r1: self.relationship(p1, p2, l1, &common.path1),
            r2: self.relationship(p2, p1, l2, &common.path2),
            link: Link::CommonPerson(ancestor),
        })
    }

    fn classify_logged(
        &self,
        p1: &PersonId,
        p2: &PersonId,
        line1: &[PersonId],
        line2: &[PersonId],
    ) -> Result<(Lineage, Lineage), RelateError> {
        classify(line1, line2).map_err(|e| {
            tracing::error!(
                p1 = %p1,
                p2 = %p2,
                line1 = ?line1,
                line2 = ?line2,
                error = %e,
                "could not classify lineage"
            );
            e
        })
    }

    fn relationship(&self, source: &PersonId, target: &PersonId, lineage: Lineage, line: &[PersonId]) -> Relationship {
        Relationship {
            source_id: source.clone(),
            target_id: target.clone(),
            relationship_type: lineage.relationship_type,
            description: lineage.description,
            generations_removed: lineage.generations_removed,
            path: self.index.snapshot_path(line),
        }
    }
}

impl KinshipResolver for Relator {
    type Error = RelateError;

    fn relate(&self, person1: &str, person2: &str) -> Result<MutualRelationship, Self::Error> {
        Relator::relate(self, person1, person2)
    }
}
