//! Relationship module - how one person relates to another

use crate::{Person, PersonId, Union};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Distance between a consanguineous type and its affinal counterpart
///
/// Affinal discriminants are laid out so that `consanguineous + AFFINAL_OFFSET`
/// lands on the matching in-law type.
pub const AFFINAL_OFFSET: u8 = RelationshipType::Spouse as u8 - RelationshipType::Oneself as u8;

/// Kind of relationship between two people
///
/// The first seven variants are consanguineous (by blood), the last seven are
/// affinal (by marriage). Variant order matters, see [`AFFINAL_OFFSET`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum RelationshipType {
    /// The same person on both sides
    #[serde(rename = "self")]
    Oneself = 1,

    /// Shares a parent
    #[serde(rename = "sibling")]
    Sibling = 2,

    /// Descendant in a direct line
    #[serde(rename = "child")]
    Child = 3,

    /// Ancestor in a direct line
    #[serde(rename = "parent")]
    Parent = 4,

    /// Sibling of an ancestor
    #[serde(rename = "aunt/uncle")]
    AuntUncle = 5,

    /// Shares an ancestor two or more generations back
    #[serde(rename = "cousin")]
    Cousin = 6,

    /// Descendant of a sibling
    #[serde(rename = "niece/nephew")]
    NieceNephew = 7,

    /// Married or partnered
    #[serde(rename = "spouse")]
    Spouse = 8,

    /// Sibling of a spouse, or spouse of a sibling
    #[serde(rename = "sibling in-law")]
    SiblingInLaw = 9,

    /// Spouse of a child
    #[serde(rename = "child in-law")]
    ChildInLaw = 10,

    /// Parent of a spouse
    #[serde(rename = "parent in-law")]
    ParentInLaw = 11,

    /// Aunt or uncle through marriage
    #[serde(rename = "aunt/uncle in-law")]
    AuntUncleInLaw = 12,

    /// Cousin through marriage
    #[serde(rename = "cousin in-law")]
    CousinInLaw = 13,

    /// Niece or nephew through marriage
    #[serde(rename = "niece/nephew in-law")]
    NieceNephewInLaw = 14,
}

impl RelationshipType {
    /// Every relationship type, in discriminant order
    pub const ALL: [RelationshipType; 14] = [
        RelationshipType::Oneself,
        RelationshipType::Sibling,
        RelationshipType::Child,
        RelationshipType::Parent,
        RelationshipType::AuntUncle,
        RelationshipType::Cousin,
        RelationshipType::NieceNephew,
        RelationshipType::Spouse,
        RelationshipType::SiblingInLaw,
        RelationshipType::ChildInLaw,
        RelationshipType::ParentInLaw,
        RelationshipType::AuntUncleInLaw,
        RelationshipType::CousinInLaw,
        RelationshipType::NieceNephewInLaw,
    ];

    /// Get the relationship name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            RelationshipType::Oneself => "self",
            RelationshipType::Sibling => "sibling",
            RelationshipType::Child => "child",
            RelationshipType::Parent => "parent",
            RelationshipType::AuntUncle => "aunt/uncle",
            RelationshipType::Cousin => "cousin",
            RelationshipType::NieceNephew => "niece/nephew",
            RelationshipType::Spouse => "spouse",
            RelationshipType::SiblingInLaw => "sibling in-law",
            RelationshipType::ChildInLaw => "child in-law",
            RelationshipType::ParentInLaw => "parent in-law",
            RelationshipType::AuntUncleInLaw => "aunt/uncle in-law",
            RelationshipType::CousinInLaw => "cousin in-law",
            RelationshipType::NieceNephewInLaw => "niece/nephew in-law",
        }
    }

    /// Look up a type by its discriminant
    pub fn from_repr(value: u8) -> Option<Self> {
        match value {
            1 => Some(RelationshipType::Oneself),
            2 => Some(RelationshipType::Sibling),
            3 => Some(RelationshipType::Child),
            4 => Some(RelationshipType::Parent),
            5 => Some(RelationshipType::AuntUncle),
            6 => Some(RelationshipType::Cousin),
            7 => Some(RelationshipType::NieceNephew),
            8 => Some(RelationshipType::Spouse),
            9 => Some(RelationshipType::SiblingInLaw),
            10 => Some(RelationshipType::ChildInLaw),
            11 => Some(RelationshipType::ParentInLaw),
            12 => Some(RelationshipType::AuntUncleInLaw),
            13 => Some(RelationshipType::CousinInLaw),
            14 => Some(RelationshipType::NieceNephewInLaw),
            _ => None,
        }
    }

    /// Whether this is a relationship by marriage
    pub fn is_affinal(&self) -> bool {
        *self as u8 >= RelationshipType::Spouse as u8
    }

    /// Whether this is a relationship by blood
    pub fn is_consanguineous(&self) -> bool {
        !self.is_affinal()
    }

    /// The type seen from the other person's side
    ///
    /// Parent and child swap, as do aunt/uncle and niece/nephew. Symmetric
    /// types map to themselves.
    pub fn inverse(&self) -> Self {
        match self {
            RelationshipType::Child => RelationshipType::Parent,
            RelationshipType::Parent => RelationshipType::Child,
            RelationshipType::AuntUncle => RelationshipType::NieceNephew,
            RelationshipType::NieceNephew => RelationshipType::AuntUncle,
            RelationshipType::ChildInLaw => RelationshipType::ParentInLaw,
            RelationshipType::ParentInLaw => RelationshipType::ChildInLaw,
            RelationshipType::AuntUncleInLaw => RelationshipType::NieceNephewInLaw,
            RelationshipType::NieceNephewInLaw => RelationshipType::AuntUncleInLaw,
            RelationshipType::Oneself
            | RelationshipType::Sibling
            | RelationshipType::Cousin
            | RelationshipType::Spouse
            | RelationshipType::SiblingInLaw
            | RelationshipType::CousinInLaw => *self,
        }
    }

    /// The in-law counterpart of a blood relationship
    ///
    /// Affinal types are returned unchanged. `Oneself` maps to `Spouse`.
    pub fn to_affinal(&self) -> Self {
        if self.is_affinal() {
            return *self;
        }
        Self::from_repr(*self as u8 + AFFINAL_OFFSET).unwrap_or(*self)
    }
}

impl fmt::Display for RelationshipType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for RelationshipType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("Invalid relationship type: {}", s))
    }
}

/// A unidirectional description of how the person at `source_id` relates to
/// the person at `target_id`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relationship {
    /// The vantage point
    pub source_id: PersonId,

    /// The person being related to
    pub target_id: PersonId,

    /// Type of relationship
    #[serde(rename = "type")]
    pub relationship_type: RelationshipType,

    /// Human-readable elaboration of the type, e.g. "2nd cousin 1x removed"
    pub description: String,

    /// Signed generational distance; negative when the target is on the
    /// descendant side of the source (the source is the elder line), positive
    /// when the target is on the ancestor side
    pub generations_removed: i32,

    /// For blood relationships, the path from the source to the common
    /// ancestor. For in-law relationships, the path from the source through
    /// the connecting marriage.
    pub path: Vec<Person>,
}

impl Relationship {
    /// IDs along the path, in order
    pub fn path_ids(&self) -> Vec<&PersonId> {
        self.path.iter().map(|p| &p.id).collect()
    }
}

/// What ties the two sides of a [`MutualRelationship`] together
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Link {
    /// Nearest common ancestor, for blood relationships
    CommonPerson(Person),

    /// Connecting marriage, for in-law relationships
    Union(Union),
}

/// The result of relating two people: both directions plus their link
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MutualRelationship {
    /// From person 1 to person 2
    pub r1: Relationship,

    /// From person 2 to person 1
    pub r2: Relationship,

    /// Common ancestor or connecting union
    pub link: Link,
}

impl MutualRelationship {
    /// The common ancestor, when related by blood
    pub fn common_person(&self) -> Option<&Person> {
        match &self.link {
            Link::CommonPerson(person) => Some(person),
            Link::Union(_) => None,
        }
    }

    /// The connecting union, when related by marriage
    pub fn union(&self) -> Option<&Union> {
        match &self.link {
            Link::Union(union) => Some(union),
            Link::CommonPerson(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_affinal_offset_maps_each_blood_type() {
        assert_eq!(RelationshipType::Oneself.to_affinal(), RelationshipType::Spouse);
        assert_eq!(RelationshipType::Sibling.to_affinal(), RelationshipType::SiblingInLaw);
        assert_eq!(RelationshipType::Child.to_affinal(), RelationshipType::ChildInLaw);
        assert_eq!(RelationshipType::Parent.to_affinal(), RelationshipType::ParentInLaw);
        assert_eq!(RelationshipType::AuntUncle.to_affinal(), RelationshipType::AuntUncleInLaw);
        assert_eq!(RelationshipType::Cousin.to_affinal(), RelationshipType::CousinInLaw);
        assert_eq!(
            RelationshipType::NieceNephew.to_affinal(),
            RelationshipType::NieceNephewInLaw
        );
    }

    #[test]
    fn test_affinal_types_are_unchanged() {
        for t in RelationshipType::ALL.into_iter().filter(|t| t.is_affinal()) {
            assert_eq!(t.to_affinal(), t);
        }
    }

    #[test]
    fn test_families_split_evenly() {
        let blood = RelationshipType::ALL.iter().filter(|t| t.is_consanguineous()).count();
        assert_eq!(blood, 7);
        assert_eq!(AFFINAL_OFFSET, 7);
    }

    #[test]
    fn test_names() {
        assert_eq!(RelationshipType::AuntUncle.to_string(), "aunt/uncle");
        assert_eq!(RelationshipType::CousinInLaw.to_string(), "cousin in-law");
        assert_eq!(
            "niece/nephew in-law".parse::<RelationshipType>(),
            Ok(RelationshipType::NieceNephewInLaw)
        );
        assert!("second cousin".parse::<RelationshipType>().is_err());
    }

    #[test]
    fn test_serde_uses_display_names() {
        let json = serde_json::to_string(&RelationshipType::AuntUncleInLaw).unwrap();
        assert_eq!(json, "\"aunt/uncle in-law\"");

        let parsed: RelationshipType = serde_json::from_str("\"self\"").unwrap();
        assert_eq!(parsed, RelationshipType::Oneself);
    }

    #[test]
    fn test_link_is_exclusive() {
        let relationship = Relationship {
            source_id: PersonId::new("a"),
            target_id: PersonId::new("b"),
            relationship_type: RelationshipType::Spouse,
            description: "spouse".to_string(),
            generations_removed: 0,
            path: vec![Person::new("a")],
        };
        let mutual = MutualRelationship {
            r1: relationship.clone(),
            r2: relationship,
            link: Link::Union(Union::between(PersonId::new("a"), PersonId::new("b"))),
        };

        assert!(mutual.union().is_some());
        assert!(mutual.common_person().is_none());
    }
}
