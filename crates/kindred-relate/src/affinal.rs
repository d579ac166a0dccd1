//! In-law resolution
//!
//! Used once a blood search has come back empty. Two people are in-laws when
//! they are married to each other, or when a spouse of one is a blood
//! relative of the other. Only a single marriage is ever crossed.

use crate::error::RelateError;
use crate::index::PersonIndex;
use crate::lineage::describe;
use crate::relator::Relator;
use kindred_domain::{Link, MutualRelationship, PersonId, Relationship, RelationshipType, Union};

/// A blood relationship between a spouse of one query person and the other
/// query person
#[derive(Debug)]
struct SpouseBridge {
    spouse: PersonId,
    blood: MutualRelationship,
    union: Union,
}

impl SpouseBridge {
    /// The bridging couple as an ordered pair, the same whichever partner
    /// the bridge was found from
    fn couple_key<'a>(&'a self, person: &'a PersonId) -> (&'a PersonId, &'a PersonId) {
        if self.spouse <= *person {
            (&self.spouse, person)
        } else {
            (person, &self.spouse)
        }
    }
}

/// Relate two people who share no ancestry through at most one marriage
pub(crate) fn affiliate(relator: &Relator, p1: &PersonId, p2: &PersonId) -> Result<MutualRelationship, RelateError> {
    let index = relator.index();

    if index.are_spouses(p1.as_str(), p2.as_str()) {
        tracing::debug!(p1 = %p1, p2 = %p2, "people are married to each other");
        let union = index
            .union_between(p1, p2)
            .cloned()
            .unwrap_or_else(|| Union::between(p1.clone(), p2.clone()));
        return Ok(MutualRelationship {
            r1: spouse_relationship(index, p1, p2),
            r2: spouse_relationship(index, p2, p1),
            link: Link::Union(union),
        });
    }

    // When both people have a bridging spouse, the couple that sorts first
    // wins so that swapping the arguments swaps r1 and r2 exactly.
    let from_p1 = relate_spouses(relator, p1, p2)?;
    let from_p2 = relate_spouses(relator, p2, p1)?;
    let use_p1 = match (&from_p1, &from_p2) {
        (Some(a), Some(b)) => a.couple_key(p1) <= b.couple_key(p2),
        (Some(_), None) => true,
        (None, _) => false,
    };

    if use_p1 {
        if let Some(found) = from_p1 {
            let (other_rel, person_rel, union) = bridge(index, p1, found, p2)?;
            return Ok(MutualRelationship {
                r1: person_rel,
                r2: other_rel,
                link: Link::Union(union),
            });
        }
    } else if let Some(found) = from_p2 {
        let (other_rel, person_rel, union) = bridge(index, p2, found, p1)?;
        return Ok(MutualRelationship {
            r1: other_rel,
            r2: person_rel,
            link: Link::Union(union),
        });
    }

    tracing::debug!(p1 = %p1, p2 = %p2, "no marriage connects these people");
    Err(RelateError::Unrelated)
}

fn spouse_relationship(index: &PersonIndex, source: &PersonId, target: &PersonId) -> Relationship {
    Relationship {
        source_id: source.clone(),
        target_id: target.clone(),
        relationship_type: RelationshipType::Spouse,
        description: RelationshipType::Spouse.as_str().to_string(),
        generations_removed: 0,
        path: vec![index.snapshot(source)],
    }
}

/// Find the first spouse of `person`, in ID order, who is a blood relative of
/// `other`
fn relate_spouses(relator: &Relator, person: &PersonId, other: &PersonId) -> Result<Option<SpouseBridge>, RelateError> {
    let index = relator.index();

    for spouse in index.spouse_ids_of(person.as_str()) {
        let blood = match relator.relate_by_blood(spouse, other) {
            Ok(blood) => blood,
            Err(RelateError::Unrelated) => continue,
            Err(e) => return Err(e),
        };

        tracing::debug!(
            person = %person,
            other = %other,
            spouse = %spouse,
            r1 = %blood.r1.relationship_type,
            r2 = %blood.r2.relationship_type,
            "spouse is a blood relative"
        );

        let union = index
            .union_between(spouse, person)
            .cloned()
            .unwrap_or_else(|| Union::between(spouse.clone(), person.clone()));
        return Ok(Some(SpouseBridge {
            spouse: spouse.clone(),
            blood,
            union,
        }));
    }

    Ok(None)
}

/// Turn the blood relationship between a spouse of `person` and `other` into
/// the in-law relationship between `person` and `other`
///
/// Returns the relationship from `other` to `person`, the one from `person`
/// to `other`, and the connecting union.
fn bridge(
    index: &PersonIndex,
    person: &PersonId,
    found: SpouseBridge,
    other: &PersonId,
) -> Result<(Relationship, Relationship, Union), RelateError> {
    let SpouseBridge { blood, union, .. } = found;

    let mut other_rel = relabel(invert(&blood.r1, 1)?);
    let mut person_rel = relabel(invert(&blood.r2, 2)?);

    // Sibling-level in-law paths should lead from `other` to the marriage,
    // so splice in the part of `other`'s own line up to the shared person.
    let sibling_level = matches!(
        other_rel.relationship_type,
        RelationshipType::SiblingInLaw
            | RelationshipType::AuntUncleInLaw
            | RelationshipType::NieceNephewInLaw
            | RelationshipType::CousinInLaw
    );
    if sibling_level && !other_rel.path.iter().any(|p| &p.id == other) {
        let common = blood.common_person().map(|p| &p.id);
        let anchor = blood
            .r2
            .path
            .iter()
            .position(|p| Some(&p.id) == common || union.involves(&p.id))
            .unwrap_or(0);

        let mut path = blood.r2.path[..anchor].to_vec();
        path.append(&mut other_rel.path);
        other_rel.path = path;
    }

    let spouses_on_path: Vec<&PersonId> = other_rel
        .path
        .iter()
        .map(|p| &p.id)
        .filter(|id| index.are_spouses(person.as_str(), id.as_str()))
        .collect();
    if let [spouse] = spouses_on_path.as_slice() {
        if *spouse != person {
            person_rel.path = vec![index.snapshot(person), index.snapshot(spouse)];
        }
    }

    other_rel.source_id = other.clone();
    other_rel.target_id = person.clone();
    person_rel.source_id = person.clone();
    person_rel.target_id = other.clone();

    Ok((other_rel, person_rel, union))
}

/// Flip a blood relationship to the opposite vantage point
///
/// The type is inverted, the generational distance negated and the path
/// reversed. Cousin depth is taken from the new source's side of the
/// ancestor, which is the reversed path's hops plus the flipped distance.
fn invert(relationship: &Relationship, side: u8) -> Result<Relationship, RelateError> {
    let relationship_type = relationship.relationship_type.inverse();
    let generations_removed = -relationship.generations_removed;

    let mut path = relationship.path.clone();
    path.reverse();

    let hops = path.len() as i32 - 1;
    let depth = if relationship.relationship_type == RelationshipType::Cousin {
        -(hops + generations_removed)
    } else {
        hops
    };

    let description = describe(relationship_type, generations_removed, depth).map_err(|source| {
        tracing::error!(
            source_id = %relationship.source_id,
            target_id = %relationship.target_id,
            relationship_type = %relationship.relationship_type,
            generations_removed = relationship.generations_removed,
            error = %source,
            "could not invert lineage"
        );
        RelateError::Lineage { side, source }
    })?;

    Ok(Relationship {
        source_id: relationship.target_id.clone(),
        target_id: relationship.source_id.clone(),
        relationship_type,
        description,
        generations_removed,
        path,
    })
}

/// Move a blood relationship to its in-law counterpart
fn relabel(mut relationship: Relationship) -> Relationship {
    if relationship.relationship_type.is_affinal() {
        tracing::debug!(relationship_type = %relationship.relationship_type, "type is already affinal");
        return relationship;
    }

    relationship.relationship_type = relationship.relationship_type.to_affinal();
    if relationship.relationship_type == RelationshipType::Spouse {
        relationship.description = RelationshipType::Spouse.as_str().to_string();
    } else {
        relationship.description.push_str(" in-law");
    }
    relationship
}
