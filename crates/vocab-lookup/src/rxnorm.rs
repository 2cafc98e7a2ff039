//! RxNorm code lookup and relation projections.

use std::collections::HashSet;

use vocab_store::{params, StoreResult, VocabStore};
use vocab_types::{well_known, RelatedConcept, RxAtom, Rxcui};

/// Looks up RXCUIs in the RxNorm tables (RXNCONSO, RXNREL).
///
/// Also provides the term-type and relation projections the drug-class
/// resolver feeds on; those are pure reads and carry no caching.
pub struct RxNormLookup<'a> {
    store: &'a VocabStore,
}

impl<'a> RxNormLookup<'a> {
    /// Creates a lookup over the RxNorm database.
    pub fn new(store: &'a VocabStore) -> Self {
        Self { store }
    }

    /// Returns the English atoms for an RXCUI, in store order.
    pub fn lookup_atoms(&self, rxcui: Rxcui) -> StoreResult<Vec<RxAtom>> {
        self.store.query_all(
            "SELECT STR, TTY, RXAUI FROM RXNCONSO WHERE RXCUI = ?1 AND LAT = 'ENG'",
            params![rxcui],
            |row| {
                Ok(RxAtom {
                    name: row.get(0)?,
                    term_type: row.get(1)?,
                    atom_id: row.get(2)?,
                })
            },
        )
    }

    /// Renders the meaning of an RXCUI, or `None` when nothing matches.
    ///
    /// With `preferred` the matches collapse to the single best atom: the
    /// first term type of the fixed priority list that is present wins, and
    /// if none is present the first row in store order is used. Without
    /// `preferred` all matches are reported.
    pub fn lookup_code_meaning(
        &self,
        rxcui: Rxcui,
        preferred: bool,
        no_html: bool,
    ) -> StoreResult<Option<String>> {
        let found = self.lookup_atoms(rxcui)?;
        if found.is_empty() {
            return Ok(None);
        }

        let render = |atom: &RxAtom| {
            if no_html {
                format!("{} [{}]", atom.name, atom.term_type)
            } else {
                format!(
                    "<span title=\"RXAUI: {}\">{} <span style=\"color:#888;\">[{}]</span></span>",
                    atom.atom_id, atom.name, atom.term_type
                )
            }
        };

        let names: Vec<String> = if preferred {
            let best = well_known::PREFERRED_TERM_TYPES
                .iter()
                .find_map(|tty| found.iter().find(|atom| atom.term_type == *tty))
                .unwrap_or(&found[0]);
            vec![render(best)]
        } else {
            found.iter().map(render).collect()
        };

        let separator = if no_html { "; " } else { "<br/>\n" };
        Ok(Some(names.join(separator)))
    }

    /// Returns the set of term types attached to an RXCUI.
    pub fn lookup_term_types(&self, rxcui: Rxcui) -> StoreResult<HashSet<String>> {
        let ttys = self.store.query_all(
            "SELECT TTY FROM RXNCONSO WHERE RXCUI = ?1",
            params![rxcui],
            |row| row.get(0),
        )?;
        Ok(ttys.into_iter().collect())
    }

    /// Returns the outgoing relation edges of an RXCUI, in store order.
    ///
    /// With a relation attribute the edges are filtered to that attribute;
    /// without one all edges are returned.
    pub fn lookup_related(
        &self,
        rxcui: Rxcui,
        relation: Option<&str>,
    ) -> StoreResult<Vec<RelatedConcept>> {
        let mapper = |row: &vocab_store::Row<'_>| {
            Ok(RelatedConcept {
                rxcui: row.get(0)?,
                relation: row.get::<_, Option<String>>(1)?.unwrap_or_default(),
            })
        };

        match relation {
            Some(rela) => self.store.query_all(
                "SELECT RXCUI2, RELA FROM RXNREL WHERE RXCUI1 = ?1 AND RELA = ?2",
                params![rxcui, rela],
                mapper,
            ),
            None => self.store.query_all(
                "SELECT RXCUI2, RELA FROM RXNREL WHERE RXCUI1 = ?1",
                params![rxcui],
                mapper,
            ),
        }
    }
}
