//! # vocab-lookup
//!
//! Cross-reference lookups over the vocabulary databases.
//!
//! Provides code lookups for UMLS (by CUI), SNOMED CT (by concept id) and
//! RxNorm (by RXCUI), thin plain-text/HTML meaning formatters over the
//! structured results, and the VA drug-class resolver: a bounded graph
//! search over the RxNorm relation table that memoizes discovered classes
//! into a write-through cache table.
//!
//! Every lookup borrows an explicitly constructed [`vocab_store::VocabStore`];
//! a miss is always an `Ok` empty/absent value, never an error.

#![warn(missing_docs)]

mod drug_class;
mod rxnorm;
mod snomed;
mod umls;

pub use drug_class::DrugClassResolver;
pub use rxnorm::RxNormLookup;
pub use snomed::SnomedLookup;
pub use umls::UmlsLookup;
