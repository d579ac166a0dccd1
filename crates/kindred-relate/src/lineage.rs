//! Consanguineous lineage classification
//!
//! Given the two ancestral lines that meet at a common ancestor, work out the
//! blood relationship each way and render its description. The approach
//! follows the well known two-distance cousin chart: the number of hops from
//! each person to the shared ancestor is enough to name the relationship.

use crate::error::{LineageError, RelateError};
use kindred_domain::{PersonId, RelationshipType};

/// Cousins further removed than this are described as "distant cousin"
pub const MAX_COUSIN_REMOVAL: i32 = 20;

/// One direction of a classified blood relationship
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lineage {
    /// Type of relationship
    pub relationship_type: RelationshipType,
    /// Signed generational distance
    pub generations_removed: i32,
    /// Rendered description
    pub description: String,
}

/// Classify the relationship between the starting people of two ancestral
/// lines
///
/// Both lines start with their query person and end with the common
/// ancestor. Returns the relationship from line 1's person to line 2's
/// person, and its inverse.
pub fn classify(line1: &[PersonId], line2: &[PersonId]) -> Result<(Lineage, Lineage), RelateError> {
    if line1.is_empty() {
        return Err(RelateError::Lineage { side: 1, source: LineageError::EmptyLine });
    }
    if line2.is_empty() {
        return Err(RelateError::Lineage { side: 2, source: LineageError::EmptyLine });
    }

    let removed1 = line1.len() as i32 - line2.len() as i32;
    let removed2 = -removed1;

    // hops from each person to the common ancestor
    let dist1 = line1.len() as i32 - 1;
    let dist2 = line2.len() as i32 - 1;

    use RelationshipType::*;
    let (type1, type2) = if dist1 == 0 && dist2 == 0 && line1[0] == line2[0] {
        (Oneself, Oneself)
    } else if dist1 == 0 {
        (Parent, Child)
    } else if dist2 == 0 {
        (Child, Parent)
    } else if dist1 == dist2 {
        if dist1 == 1 {
            (Sibling, Sibling)
        } else {
            (Cousin, Cousin)
        }
    } else if dist1 == 1 {
        (AuntUncle, NieceNephew)
    } else if dist2 == 1 {
        (NieceNephew, AuntUncle)
    } else {
        (Cousin, Cousin)
    };

    // cousin descriptions count generations back to the ancestor as negative
    let (depth1, depth2) = if type1 == Cousin { (-dist1, -dist2) } else { (dist1, dist2) };

    let description1 =
        describe(type1, removed1, depth1).map_err(|source| RelateError::Lineage { side: 1, source })?;
    let description2 =
        describe(type2, removed2, depth2).map_err(|source| RelateError::Lineage { side: 2, source })?;

    Ok((
        Lineage {
            relationship_type: type1,
            generations_removed: removed1,
            description: description1,
        },
        Lineage {
            relationship_type: type2,
            generations_removed: removed2,
            description: description2,
        },
    ))
}

/// Render the description of a blood relationship
///
/// `generations_since_common_ancestor` only matters for cousins, where it is
/// the negated number of hops from the source person to the shared ancestor.
pub fn describe(
    relationship_type: RelationshipType,
    generations_removed: i32,
    generations_since_common_ancestor: i32,
) -> Result<String, LineageError> {
    use RelationshipType::*;
    let name = relationship_type.as_str();

    match relationship_type {
        Oneself | Sibling => Ok(name.to_string()),
        Child | NieceNephew => {
            if generations_removed <= 0 {
                return Err(LineageError::DescendantRemoval {
                    relationship_type,
                    generations_removed,
                });
            }
            Ok(with_generation_prefix(name, generations_removed, "grand "))
        }
        Parent => {
            if generations_removed >= 0 {
                return Err(LineageError::AncestorRemoval {
                    relationship_type,
                    generations_removed,
                });
            }
            Ok(with_generation_prefix(name, -generations_removed, "grand "))
        }
        AuntUncle => {
            if generations_removed >= 0 {
                return Err(LineageError::AncestorRemoval {
                    relationship_type,
                    generations_removed,
                });
            }
            Ok(with_generation_prefix(name, -generations_removed, "great "))
        }
        Cousin => describe_cousin(generations_removed, generations_since_common_ancestor),
        Spouse | SiblingInLaw | ChildInLaw | ParentInLaw | AuntUncleInLaw | CousinInLaw | NieceNephewInLaw => {
            Err(LineageError::NotConsanguineous(relationship_type))
        }
    }
}

/// `generations` is the positive distance; `second` is the prefix used at
/// exactly two generations.
fn with_generation_prefix(name: &str, generations: i32, second: &str) -> String {
    match generations {
        1 => name.to_string(),
        2 => format!("{second}{name}"),
        n => format!("{}grand {name}", "great ".repeat((n - 2) as usize)),
    }
}

fn describe_cousin(generations_removed: i32, generations_since_common_ancestor: i32) -> Result<String, LineageError> {
    // the shared ancestor must be at least two generations back
    if generations_since_common_ancestor > -2 {
        return Err(LineageError::CousinDepth(generations_since_common_ancestor));
    }

    let mut degree = -generations_since_common_ancestor - 1;

    if generations_removed == 0 {
        return Ok(format!("{} cousin", ordinal(degree)));
    }
    if generations_removed.abs() > MAX_COUSIN_REMOVAL {
        return Ok("distant cousin".to_string());
    }

    // The degree is set by whichever side is closer to the ancestor. A
    // positive removal means the source is the further one.
    if generations_removed > 0 {
        degree -= generations_removed;
    }
    Ok(format!("{} cousin {}x removed", ordinal(degree), generations_removed.abs()))
}

/// Format a number with its English ordinal suffix
///
/// # Examples
///
/// ```
/// use kindred_relate::lineage::ordinal;
///
/// assert_eq!(ordinal(1), "1st");
/// assert_eq!(ordinal(12), "12th");
/// assert_eq!(ordinal(23), "23rd");
/// ```
pub fn ordinal(n: i32) -> String {
    let suffix = match (n.rem_euclid(100), n.rem_euclid(10)) {
        (11..=13, _) => "th",
        (_, 1) => "st",
        (_, 2) => "nd",
        (_, 3) => "rd",
        _ => "th",
    };
    format!("{n}{suffix}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(ids: &[&str]) -> Vec<PersonId> {
        ids.iter().map(|id| PersonId::new(*id)).collect()
    }

    fn pair(line1: &[&str], line2: &[&str]) -> (Lineage, Lineage) {
        classify(&line(line1), &line(line2)).unwrap()
    }

    #[test]
    fn test_self() {
        let (l1, l2) = pair(&["a"], &["a"]);
        assert_eq!(l1.relationship_type, RelationshipType::Oneself);
        assert_eq!(l2.relationship_type, RelationshipType::Oneself);
        assert_eq!(l1.generations_removed, 0);
        assert_eq!(l1.description, "self");
    }

    #[test]
    fn test_parent_and_child() {
        let (l1, l2) = pair(&["dad"], &["kid", "dad"]);
        assert_eq!(l1.relationship_type, RelationshipType::Parent);
        assert_eq!(l1.generations_removed, -1);
        assert_eq!(l1.description, "parent");
        assert_eq!(l2.relationship_type, RelationshipType::Child);
        assert_eq!(l2.generations_removed, 1);
        assert_eq!(l2.description, "child");
    }

    #[test]
    fn test_grandparent_and_grandchild() {
        let (l1, l2) = pair(&["kid", "dad", "gp"], &["gp"]);
        assert_eq!(l1.relationship_type, RelationshipType::Child);
        assert_eq!(l1.generations_removed, 2);
        assert_eq!(l1.description, "grand child");
        assert_eq!(l2.relationship_type, RelationshipType::Parent);
        assert_eq!(l2.generations_removed, -2);
        assert_eq!(l2.description, "grand parent");
    }

    #[test]
    fn test_great_grandparent() {
        let (l1, _) = pair(&["ggp"], &["kid", "dad", "gp", "ggp"]);
        assert_eq!(l1.description, "great grand parent");
        let (l1, _) = pair(&["gggp"], &["kid", "dad", "gp", "ggp", "gggp"]);
        assert_eq!(l1.description, "great great grand parent");
    }

    #[test]
    fn test_siblings() {
        let (l1, l2) = pair(&["a", "mom"], &["b", "mom"]);
        assert_eq!(l1.relationship_type, RelationshipType::Sibling);
        assert_eq!(l2.relationship_type, RelationshipType::Sibling);
        assert_eq!(l1.generations_removed, 0);
        assert_eq!(l1.description, "sibling");
    }

    #[test]
    fn test_aunt_and_niece() {
        let (l1, l2) = pair(&["aunt", "gp"], &["kid", "dad", "gp"]);
        assert_eq!(l1.relationship_type, RelationshipType::AuntUncle);
        assert_eq!(l1.description, "aunt/uncle");
        assert_eq!(l1.generations_removed, -1);
        assert_eq!(l2.relationship_type, RelationshipType::NieceNephew);
        assert_eq!(l2.description, "niece/nephew");
        assert_eq!(l2.generations_removed, 1);
    }

    #[test]
    fn test_great_aunt_and_grand_niece() {
        let (l1, l2) = pair(&["kid", "dad", "gp", "ggp"], &["aunt", "ggp"]);
        assert_eq!(l1.description, "grand niece/nephew");
        assert_eq!(l1.generations_removed, 2);
        assert_eq!(l2.description, "great aunt/uncle");
        assert_eq!(l2.generations_removed, -2);

        let (_, l2) = pair(&["kid", "dad", "gp", "ggp", "gggp"], &["aunt", "gggp"]);
        assert_eq!(l2.description, "great grand aunt/uncle");
    }

    #[test]
    fn test_first_cousins() {
        let (l1, l2) = pair(&["a", "mom", "gp"], &["b", "dad", "gp"]);
        assert_eq!(l1.relationship_type, RelationshipType::Cousin);
        assert_eq!(l1.description, "1st cousin");
        assert_eq!(l2.description, "1st cousin");
    }

    #[test]
    fn test_first_cousins_once_removed_both_ways() {
        let (l1, l2) = pair(&["a", "mom", "gp"], &["b", "dad", "aunt", "gp"]);
        assert_eq!(l1.description, "1st cousin 1x removed");
        assert_eq!(l1.generations_removed, -1);
        assert_eq!(l2.description, "1st cousin 1x removed");
        assert_eq!(l2.generations_removed, 1);
    }

    #[test]
    fn test_second_cousins_twice_removed() {
        let (l1, l2) = pair(&["a", "b", "c", "ggp"], &["v", "w", "x", "y", "z", "ggp"]);
        assert_eq!(l1.description, "2nd cousin 2x removed");
        assert_eq!(l2.description, "2nd cousin 2x removed");
    }

    #[test]
    fn test_distant_cousin() {
        assert_eq!(describe(RelationshipType::Cousin, 21, -25).unwrap(), "distant cousin");
        assert_eq!(describe(RelationshipType::Cousin, -21, -3).unwrap(), "distant cousin");
        assert_eq!(describe(RelationshipType::Cousin, 20, -22).unwrap(), "1st cousin 20x removed");
    }

    #[test]
    fn test_inconsistent_signs_are_errors() {
        assert_eq!(
            describe(RelationshipType::Child, 0, 0),
            Err(LineageError::DescendantRemoval {
                relationship_type: RelationshipType::Child,
                generations_removed: 0,
            })
        );
        assert!(describe(RelationshipType::Parent, 1, 0).is_err());
        assert!(describe(RelationshipType::AuntUncle, 2, 0).is_err());
        assert!(describe(RelationshipType::NieceNephew, -1, 0).is_err());
        assert_eq!(describe(RelationshipType::Cousin, 0, -1), Err(LineageError::CousinDepth(-1)));
        assert_eq!(
            describe(RelationshipType::SiblingInLaw, 0, 0),
            Err(LineageError::NotConsanguineous(RelationshipType::SiblingInLaw))
        );
    }

    #[test]
    fn test_error_messages_name_the_value() {
        let err = describe(RelationshipType::Child, 0, 0).unwrap_err();
        assert_eq!(err.to_string(), "generations removed (0) must be > 0 for child");
    }

    #[test]
    fn test_two_distinct_roots_surface_an_error() {
        let err = classify(&line(&["a"]), &line(&["b"])).unwrap_err();
        assert!(matches!(err, RelateError::Lineage { side: 1, .. }));
    }

    #[test]
    fn test_empty_line() {
        let err = classify(&[], &line(&["a"])).unwrap_err();
        assert_eq!(err, RelateError::Lineage { side: 1, source: LineageError::EmptyLine });
    }

    #[test]
    fn test_ordinals() {
        let cases = [
            (1, "1st"),
            (2, "2nd"),
            (3, "3rd"),
            (4, "4th"),
            (11, "11th"),
            (12, "12th"),
            (13, "13th"),
            (21, "21st"),
            (22, "22nd"),
            (101, "101st"),
            (111, "111th"),
        ];
        for (n, expected) in cases {
            assert_eq!(ordinal(n), expected);
        }
    }
}
