//! Normalized SNOMED CT description row.

use crate::ConceptId;

/// A normalized description row from the `descriptions` table.
///
/// One row per concept per language variant, produced by the importer from
/// a SNOMED CT description release file.
///
/// # Examples
///
/// ```
/// use vocab_types::{Description, DescriptionKind};
///
/// let description = Description {
///     concept_id: 215350009,
///     language: "en".to_string(),
///     term: "Accidental fall".to_string(),
///     kind: DescriptionKind::Full,
///     active: true,
/// };
///
/// assert_eq!(description.kind.as_str(), "full");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Description {
    /// The concept this description belongs to.
    pub concept_id: ConceptId,
    /// ISO language code (e.g., "en").
    pub language: String,
    /// The description text/term.
    pub term: String,
    /// Kind of description (synonym, fully specified name, or other).
    pub kind: DescriptionKind,
    /// Whether this description is active.
    pub active: bool,
}

impl Description {
    /// Returns true if this term should be de-emphasized when rendered.
    ///
    /// Synonyms and inactive terms are greyed out in HTML output.
    pub fn is_secondary(&self) -> bool {
        self.kind == DescriptionKind::Synonym || !self.active
    }
}

/// Kind of a SNOMED CT description, derived from its type identifier.
///
/// The release file carries a type identifier per row; only the synonym and
/// fully-specified-name types are distinguished, everything else maps to
/// [`DescriptionKind::Other`].
///
/// # Examples
///
/// ```
/// use vocab_types::DescriptionKind;
///
/// assert_eq!(DescriptionKind::from_type_id(900000000000013009), DescriptionKind::Synonym);
/// assert_eq!(DescriptionKind::from_type_id(900000000000003001), DescriptionKind::Full);
/// assert_eq!(DescriptionKind::from_type_id(42), DescriptionKind::Other);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DescriptionKind {
    /// Synonym - additional acceptable term for the concept.
    Synonym,
    /// Fully specified name.
    Full,
    /// Any other description type.
    #[default]
    Other,
}

impl DescriptionKind {
    /// Type identifier for synonym descriptions.
    pub const SYNONYM_TYPE_ID: ConceptId = 900000000000013009;
    /// Type identifier for fully specified names.
    pub const FULL_TYPE_ID: ConceptId = 900000000000003001;

    /// Maps a description type identifier to a kind.
    ///
    /// Unrecognized identifiers map to [`DescriptionKind::Other`].
    pub fn from_type_id(type_id: ConceptId) -> Self {
        match type_id {
            Self::SYNONYM_TYPE_ID => Self::Synonym,
            Self::FULL_TYPE_ID => Self::Full,
            _ => Self::Other,
        }
    }

    /// Returns the stored string form of this kind.
    ///
    /// [`DescriptionKind::Other`] is stored as an empty string.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Synonym => "synonym",
            Self::Full => "full",
            Self::Other => "",
        }
    }

    /// Parses the stored string form back into a kind.
    pub fn from_str_value(value: &str) -> Self {
        match value {
            "synonym" => Self::Synonym,
            "full" => Self::Full,
            _ => Self::Other,
        }
    }
}
