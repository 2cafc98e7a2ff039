//! Query result row types for UMLS and RxNorm lookups.
//!
//! One named record per query shape, replacing positional tuple access.

use crate::Rxcui;

/// A UMLS concept description row: name, source vocabulary, semantic type.
///
/// Produced by looking a CUI up in the UMLS `descriptions` table.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConceptName {
    /// The concept name (STR).
    pub name: String,
    /// Abbreviated source vocabulary name (SAB), e.g. "SNOMEDCT".
    pub source: String,
    /// Semantic type (STY).
    pub semantic_type: String,
}

/// An RxNorm atom row from RXNCONSO: name, term type, and atom identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RxAtom {
    /// The atom name (STR).
    pub name: String,
    /// Term type (TTY), e.g. "BN" for brand name, "IN" for ingredient.
    pub term_type: String,
    /// RxNorm atom identifier (RXAUI).
    pub atom_id: String,
}

/// A directed RXNREL edge projection: the related concept and the relation
/// attribute connecting it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RelatedConcept {
    /// The related RXCUI (RXCUI2).
    pub rxcui: Rxcui,
    /// The relation attribute (RELA), e.g. "has_tradename".
    pub relation: String,
}

/// A VA drug-class cache row.
///
/// Once a class is discovered for `rxcui` via a relation chain that passed
/// through `original_rxcui`, the mapping is persisted so future lookups on
/// `rxcui` short-circuit the graph search. Entries are never invalidated.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DrugClassEntry {
    /// The concept the resolution started from (the cache key).
    pub rxcui: Rxcui,
    /// The related concept the class was actually found on.
    pub original_rxcui: Rxcui,
    /// The VA drug class name.
    pub class_name: String,
}
