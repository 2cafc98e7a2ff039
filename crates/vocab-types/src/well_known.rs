//! Well-known identifiers and fixed lookup tables.
//!
//! This module provides constants for the relationship type codes the
//! post-import fix-up recognizes, the UMLS sources considered "preferred",
//! and the RxNorm term-type priority list used to pick the best atom name.
//!
//! # Examples
//!
//! ```
//! use vocab_types::well_known;
//!
//! let type_id: i64 = 116680003;
//! assert_eq!(type_id, well_known::IS_A);
//! assert_eq!(well_known::PREFERRED_SOURCES, ["SNOMEDCT", "MTH"]);
//! ```

use crate::ConceptId;

// =============================================================================
// Relationship types with a human-readable label
// =============================================================================

/// IS_A (subtype) relationship - 116680003.
///
/// Labeled `"isa"` by the post-import fix-up.
pub const IS_A: ConceptId = 116680003;

/// Finding site relationship - 363698007.
///
/// Labeled `"finding_site"` by the post-import fix-up.
pub const FINDING_SITE: ConceptId = 363698007;

// =============================================================================
// UMLS
// =============================================================================

/// UMLS source vocabularies used when a lookup asks for preferred names only.
pub const PREFERRED_SOURCES: [&str; 2] = ["SNOMEDCT", "MTH"];

// =============================================================================
// RxNorm
// =============================================================================

/// RXNSAT attribute name carrying the VA drug class.
pub const VA_CLASS_ATTRIBUTE: &str = "VA_CLASS_NAME";

/// Term-type priority for picking the single best RxNorm atom name.
///
/// The first term type present among a concept's atoms wins; if none of
/// these are present, the first atom in store order is used.
pub const PREFERRED_TERM_TYPES: [&str; 8] =
    ["BN", "IN", "PIN", "SBDC", "SCDC", "SBD", "SCD", "MIN"];
