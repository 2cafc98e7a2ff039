//! # vocab-types
//!
//! Type definitions for medical vocabulary records.
//!
//! This crate provides the row types shared by the importer and the lookup
//! layers: normalized SNOMED CT descriptions and relationships, UMLS concept
//! names, RxNorm atoms and relation edges, and the VA drug-class cache entry.
//! It also carries the fixed configuration tables (relation-kind priority
//! order, term-type mappings, preferred sources) used by the drug-class
//! resolver.
//!
//! ## Features
//!
//! - `serde` (default): Enables serialization/deserialization support via
//!   serde. Disable this feature for zero-dependency usage.

#![warn(missing_docs)]

mod config;
mod description;
mod ids;
mod relationship;
mod rows;
pub mod well_known;

pub use config::ClassifierConfig;
pub use description::{Description, DescriptionKind};
pub use ids::{ConceptId, Rxcui};
pub use relationship::Relationship;
pub use rows::{ConceptName, DrugClassEntry, RelatedConcept, RxAtom};
