//! Identifier type aliases.
//!
//! SNOMED CT concept identifiers and RxNorm concept identifiers (RXCUIs)
//! are stored as SQLite integers, which are 64-bit and signed.

/// A SNOMED CT concept or component identifier.
///
/// # Examples
///
/// ```
/// use vocab_types::ConceptId;
///
/// let concept_id: ConceptId = 215350009;
/// let is_a_type: ConceptId = 116680003; // IS_A relationship type
/// ```
pub type ConceptId = i64;

/// An RxNorm concept unique identifier (RXCUI).
pub type Rxcui = i64;
