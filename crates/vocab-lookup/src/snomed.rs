//! SNOMED CT code lookup.

use vocab_store::{params, StoreResult, VocabStore};
use vocab_types::{ConceptId, Description, DescriptionKind};

/// Looks up concept ids in the normalized SNOMED `descriptions` table.
///
/// Unlike the UMLS lookup there is no negation or source filtering; those
/// are UMLS-specific.
pub struct SnomedLookup<'a> {
    store: &'a VocabStore,
}

impl<'a> SnomedLookup<'a> {
    /// Creates a lookup over the SNOMED database.
    pub fn new(store: &'a VocabStore) -> Self {
        Self { store }
    }

    /// Returns the description rows for a concept, in store order.
    pub fn lookup_code(&self, concept_id: ConceptId) -> StoreResult<Vec<Description>> {
        self.store.query_all(
            "SELECT lang, term, kind, active FROM descriptions WHERE concept_id = ?1",
            params![concept_id],
            |row| {
                Ok(Description {
                    concept_id,
                    language: row.get::<_, Option<String>>(0)?.unwrap_or_default(),
                    term: row.get(1)?,
                    kind: DescriptionKind::from_str_value(
                        &row.get::<_, Option<String>>(2)?.unwrap_or_default(),
                    ),
                    active: row.get::<_, i64>(3)? != 0,
                })
            },
        )
    }

    /// Renders all matches for a concept id as one string.
    ///
    /// HTML output greys out synonyms and inactive terms; plain text joins
    /// the bare terms with `", "`. Returns an empty string when nothing
    /// matches.
    pub fn lookup_code_meaning(&self, concept_id: ConceptId, no_html: bool) -> StoreResult<String> {
        let names: Vec<String> = self
            .lookup_code(concept_id)?
            .iter()
            .map(|desc| {
                if !no_html && desc.is_secondary() {
                    format!("<span style=\"color:#888;\">{}</span>", desc.term)
                } else {
                    desc.term.clone()
                }
            })
            .collect();

        let separator = if no_html { ", " } else { "<br/>\n" };
        Ok(names.join(separator))
    }
}
