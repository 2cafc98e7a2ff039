//! UMLS code lookup.

use vocab_store::{params, StoreResult, VocabStore};
use vocab_types::{well_known, ConceptName};

/// Prefix attached to every result name when the identifier was negated.
const NEGATION_PREFIX: &str = "[NEGATED] ";

/// Looks up CUIs in the UMLS `descriptions` table.
///
/// The table is a pre-extracted projection of MRCONSO keyed by CUI and
/// carrying name, source vocabulary, and semantic type; looking there is
/// much faster than combing through the full MRCONSO table.
pub struct UmlsLookup<'a> {
    store: &'a VocabStore,
}

impl<'a> UmlsLookup<'a> {
    /// Creates a lookup over the UMLS database.
    pub fn new(store: &'a VocabStore) -> Self {
        Self { store }
    }

    /// Returns the description rows matching a CUI, in store order.
    ///
    /// A leading `-` marks negation: it is stripped before lookup and every
    /// result name gets a `"[NEGATED] "` prefix. A trailing `@suffix` is
    /// stripped and ignored. When `preferred` is true only the SNOMED CT
    /// and Metathesaurus sources are reported.
    ///
    /// An empty identifier yields an empty result, not an error.
    pub fn lookup_code(&self, cui: &str, preferred: bool) -> StoreResult<Vec<ConceptName>> {
        if cui.is_empty() {
            return Ok(Vec::new());
        }

        let (negated, cui) = match cui.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, cui),
        };

        // Only the portion before '@' is the lookup key.
        let lookup_cui = cui.split('@').next().unwrap_or(cui);

        let sql = if preferred {
            let sources: Vec<String> = well_known::PREFERRED_SOURCES
                .iter()
                .map(|s| format!("'{}'", s))
                .collect();
            format!(
                "SELECT STR, SAB, STY FROM descriptions WHERE CUI = ?1 AND SAB IN ({})",
                sources.join(", ")
            )
        } else {
            "SELECT STR, SAB, STY FROM descriptions WHERE CUI = ?1".to_string()
        };

        let mut rows = self.store.query_all(&sql, params![lookup_cui], |row| {
            Ok(ConceptName {
                name: row.get(0)?,
                source: row.get(1)?,
                semantic_type: row.get(2)?,
            })
        })?;

        if negated {
            for row in &mut rows {
                row.name = format!("{}{}", NEGATION_PREFIX, row.name);
            }
        }

        Ok(rows)
    }

    /// Renders the matches for a CUI as one string.
    ///
    /// Plain text joins `"name (source)  [semantic_type]"` with `", "`;
    /// HTML wraps the source in a colored span and joins with line breaks.
    /// Returns an empty string when nothing matches.
    pub fn lookup_code_meaning(
        &self,
        cui: &str,
        preferred: bool,
        no_html: bool,
    ) -> StoreResult<String> {
        let names: Vec<String> = self
            .lookup_code(cui, preferred)?
            .iter()
            .map(|row| {
                if no_html {
                    format!("{} ({})  [{}]", row.name, row.source, row.semantic_type)
                } else {
                    format!(
                        "{} (<span style=\"color:#090;\">{}</span>: {})",
                        row.name, row.source, row.semantic_type
                    )
                }
            })
            .collect();

        let separator = if no_html { ", " } else { "<br/>\n" };
        Ok(names.join(separator))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_store() -> VocabStore {
        let store = VocabStore::open_in_memory().unwrap();
        store
            .create_table_if_absent("descriptions", "(CUI TEXT, STR TEXT, SAB TEXT, STY TEXT)")
            .unwrap();
        for (cui, name, sab, sty) in [
            ("C0002962", "Angina Pectoris", "MTH", "Disease or Syndrome"),
            ("C0002962", "Angina pectoris", "SNOMEDCT", "Disease or Syndrome"),
            ("C0002962", "Stenocardia", "MSH", "Disease or Syndrome"),
        ] {
            store
                .execute(
                    "INSERT INTO descriptions (CUI, STR, SAB, STY) VALUES (?1, ?2, ?3, ?4)",
                    params![cui, name, sab, sty],
                )
                .unwrap();
        }
        store
    }

    #[test]
    fn test_empty_cui_yields_empty_result() {
        let store = make_store();
        let lookup = UmlsLookup::new(&store);
        assert!(lookup.lookup_code("", true).unwrap().is_empty());
        assert_eq!(lookup.lookup_code_meaning("", true, true).unwrap(), "");
    }

    #[test]
    fn test_preferred_filters_sources() {
        let store = make_store();
        let lookup = UmlsLookup::new(&store);

        let all = lookup.lookup_code("C0002962", false).unwrap();
        let preferred = lookup.lookup_code("C0002962", true).unwrap();

        assert_eq!(all.len(), 3);
        assert_eq!(preferred.len(), 2);
        assert!(preferred
            .iter()
            .all(|row| row.source == "MTH" || row.source == "SNOMEDCT"));
        // Preferred rows are a subset of the unfiltered rows.
        assert!(preferred.iter().all(|row| all.contains(row)));
    }

    #[test]
    fn test_negation_round_trip() {
        let store = make_store();
        let lookup = UmlsLookup::new(&store);

        let plain = lookup.lookup_code("C0002962", true).unwrap();
        let negated = lookup.lookup_code("-C0002962", true).unwrap();

        assert_eq!(plain.len(), negated.len());
        for (p, n) in plain.iter().zip(&negated) {
            assert_eq!(n.name, format!("[NEGATED] {}", p.name));
            assert_eq!(n.source, p.source);
            assert_eq!(n.semantic_type, p.semantic_type);
        }
    }

    #[test]
    fn test_suffix_is_stripped() {
        let store = make_store();
        let lookup = UmlsLookup::new(&store);

        let with_suffix = lookup.lookup_code("C0002962@HX", false).unwrap();
        let without = lookup.lookup_code("C0002962", false).unwrap();
        assert_eq!(with_suffix, without);
    }

    #[test]
    fn test_meaning_formatting() {
        let store = make_store();
        let lookup = UmlsLookup::new(&store);

        let plain = lookup.lookup_code_meaning("C0002962", true, true).unwrap();
        assert!(plain.contains("Angina Pectoris (MTH)  [Disease or Syndrome]"));
        assert!(plain.contains(", "));

        let html = lookup.lookup_code_meaning("C0002962", true, false).unwrap();
        assert!(html.contains("<span style=\"color:#090;\">MTH</span>"));
        assert!(html.contains("<br/>\n"));
    }
}
