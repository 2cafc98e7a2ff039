//! Normalized SNOMED CT relationship row.

use crate::{well_known, ConceptId};

/// A directed relationship edge from the `relationships` table.
///
/// The edge points from `source_id` to `destination_id` and is labeled by
/// the numeric `rel_type`. `rel_text` is a human-readable label populated
/// by a post-import fix-up for a small set of known type codes; all other
/// edges keep an empty label.
///
/// # Examples
///
/// ```
/// use vocab_types::Relationship;
///
/// let relationship = Relationship {
///     relationship_id: 100000028,
///     source_id: 73211009,        // Diabetes mellitus
///     destination_id: 362969004,  // Disorder of endocrine system
///     rel_type: 116680003,        // IS_A
///     rel_text: "isa".to_string(),
///     active: true,
/// };
///
/// assert!(relationship.is_is_a());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Relationship {
    /// Unique identifier for this relationship.
    pub relationship_id: ConceptId,
    /// Source concept (subject).
    pub source_id: ConceptId,
    /// Destination concept (object/value).
    pub destination_id: ConceptId,
    /// Relationship type (e.g., IS_A, Finding site).
    pub rel_type: ConceptId,
    /// Human-readable label, empty unless set by the post-import fix-up.
    pub rel_text: String,
    /// Whether this relationship is active.
    pub active: bool,
}

impl Relationship {
    /// Returns true if this is an IS_A (subtype) relationship.
    pub fn is_is_a(&self) -> bool {
        self.rel_type == well_known::IS_A
    }

    /// Returns true if this is a finding-site relationship.
    pub fn is_finding_site(&self) -> bool {
        self.rel_type == well_known::FINDING_SITE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_relationship(rel_type: ConceptId) -> Relationship {
        Relationship {
            relationship_id: 100000028,
            source_id: 73211009,
            destination_id: 362969004,
            rel_type,
            rel_text: String::new(),
            active: true,
        }
    }

    #[test]
    fn test_is_a() {
        assert!(make_relationship(116680003).is_is_a());
        assert!(!make_relationship(363698007).is_is_a());
    }

    #[test]
    fn test_finding_site() {
        assert!(make_relationship(363698007).is_finding_site());
        assert!(!make_relationship(116680003).is_finding_site());
    }
}
