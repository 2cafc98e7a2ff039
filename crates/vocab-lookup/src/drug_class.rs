//! VA drug-class resolution.
//!
//! Maps an RxNorm concept to its therapeutic (VA) drug class through a
//! layered search: cache table, direct attribute, first-degree relation
//! graph walk over a priority-ordered relation table, and an optional
//! second-degree recursion. Discovered mappings are written through to the
//! `VA_DRUG_CLASS` cache table so later resolutions short-circuit.

use std::collections::HashSet;

use vocab_store::{params, StoreResult, VocabStore};
use vocab_types::{well_known, ClassifierConfig, Rxcui};

use crate::rxnorm::RxNormLookup;

/// Name of the drug-class cache table.
const CACHE_TABLE: &str = "VA_DRUG_CLASS";

/// Resolves RxNorm concepts to VA drug classes.
///
/// The resolver is the only writer of the cache table and creates it
/// idempotently at construction. All other tables are read-only.
///
/// # Example
///
/// ```ignore
/// use vocab_lookup::DrugClassResolver;
/// use vocab_store::VocabStore;
///
/// let store = VocabStore::open("databases/rxnorm.db")?;
/// let resolver = DrugClassResolver::new(&store)?;
/// match resolver.find_drug_class(328406, false)? {
///     Some(class) => println!("{}", class),
///     None => println!("not found"),
/// }
/// ```
pub struct DrugClassResolver<'a> {
    store: &'a VocabStore,
    rxnorm: RxNormLookup<'a>,
    config: ClassifierConfig,
}

impl<'a> DrugClassResolver<'a> {
    /// Creates a resolver with the standard priority tables.
    pub fn new(store: &'a VocabStore) -> StoreResult<Self> {
        Self::with_config(store, ClassifierConfig::default())
    }

    /// Creates a resolver with a caller-supplied configuration.
    pub fn with_config(store: &'a VocabStore, config: ClassifierConfig) -> StoreResult<Self> {
        store.create_table_if_absent(
            CACHE_TABLE,
            "(
                RXCUI INTEGER PRIMARY KEY,
                RXCUI_ORIGINAL INTEGER,
                VA TEXT
            )",
        )?;
        store.create_index_if_absent("va_original_index", CACHE_TABLE, "RXCUI_ORIGINAL")?;

        Ok(Self {
            store,
            rxnorm: RxNormLookup::new(store),
            config,
        })
    }

    /// Finds the VA drug class for an RXCUI.
    ///
    /// Layers are tried in order, each only if the previous yields nothing:
    /// cached mapping, direct `VA_CLASS_NAME` attribute, first-degree
    /// relation search, and (when `deep` is set) a second-degree recursion
    /// over all non-excluded relations of the immediate relations.
    ///
    /// Returns `None` when no class can be found; a miss is never an error.
    pub fn find_drug_class(&self, rxcui: Rxcui, deep: bool) -> StoreResult<Option<String>> {
        let mut visited = HashSet::new();
        self.resolve(rxcui, deep, &mut visited)
    }

    fn resolve(
        &self,
        rxcui: Rxcui,
        deep: bool,
        visited: &mut HashSet<Rxcui>,
    ) -> StoreResult<Option<String>> {
        // Guard against relation cycles in the recursive layer.
        if !visited.insert(rxcui) {
            return Ok(None);
        }

        if let Some(class) = self.cached_class(rxcui)? {
            return Ok(Some(class));
        }

        if let Some(class) = self.attribute_class(rxcui)? {
            return Ok(Some(class));
        }

        // No direct class, check relations.
        let ttys = self.rxnorm.lookup_term_types(rxcui)?;
        tracing::debug!(rxcui, term_types = ?ttys, "checking relations for drug class");

        for (relation, mapped) in &self.config.priority {
            if !mapped.iter().any(|tty| ttys.contains(tty)) {
                continue;
            }

            for related in self.rxnorm.lookup_related(rxcui, Some(relation))? {
                if let Some(class) = self.attribute_class(related.rxcui)? {
                    self.store_drug_class(rxcui, related.rxcui, &class);
                    tracing::debug!(
                        rxcui,
                        related = related.rxcui,
                        relation = relation.as_str(),
                        class = class.as_str(),
                        "found drug class via relation"
                    );
                    return Ok(Some(class));
                }
            }
        }

        if deep {
            for related in self.rxnorm.lookup_related(rxcui, None)? {
                if self.config.is_excluded(&related.relation) {
                    continue;
                }

                tracing::debug!(
                    related = related.rxcui,
                    relation = related.relation.as_str(),
                    "second degree relation"
                );
                if let Some(class) = self.resolve(related.rxcui, false, visited)? {
                    return Ok(Some(class));
                }
            }
        }

        Ok(None)
    }

    /// Looks the RXCUI up in the cache table.
    fn cached_class(&self, rxcui: Rxcui) -> StoreResult<Option<String>> {
        self.store.query_one(
            "SELECT VA FROM VA_DRUG_CLASS WHERE RXCUI = ?1",
            params![rxcui],
            |row| row.get(0),
        )
    }

    /// Looks for the VA class attribute in RXNSAT.
    fn attribute_class(&self, rxcui: Rxcui) -> StoreResult<Option<String>> {
        self.store.query_one(
            "SELECT ATV FROM RXNSAT WHERE RXCUI = ?1 AND ATN = ?2",
            params![rxcui, well_known::VA_CLASS_ATTRIBUTE],
            |row| row.get(0),
        )
    }

    /// Persists a discovered mapping into the cache table.
    ///
    /// The write is its own transaction; on failure it is rolled back and
    /// the resolution result is unaffected, only the memoization is lost.
    fn store_drug_class(&self, rxcui: Rxcui, found_via: Rxcui, class_name: &str) -> bool {
        match self.try_store(rxcui, found_via, class_name) {
            Ok(()) => true,
            Err(err) => {
                tracing::warn!(rxcui, error = %err, "failed to cache drug class mapping");
                let _ = self.store.rollback();
                false
            }
        }
    }

    fn try_store(&self, rxcui: Rxcui, found_via: Rxcui, class_name: &str) -> StoreResult<()> {
        self.store.begin()?;
        self.store.execute_insert(
            "INSERT OR REPLACE INTO VA_DRUG_CLASS
                (RXCUI, RXCUI_ORIGINAL, VA)
                VALUES (?1, ?2, ?3)",
            params![rxcui, found_via, class_name],
        )?;
        self.store.commit()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_store() -> VocabStore {
        let store = VocabStore::open_in_memory().unwrap();
        store
            .create_table_if_absent(
                "RXNCONSO",
                "(RXCUI INTEGER, LAT TEXT, STR TEXT, TTY TEXT, RXAUI TEXT)",
            )
            .unwrap();
        store
            .create_table_if_absent("RXNSAT", "(RXCUI INTEGER, ATN TEXT, ATV TEXT)")
            .unwrap();
        store
            .create_table_if_absent("RXNREL", "(RXCUI1 INTEGER, RXCUI2 INTEGER, RELA TEXT)")
            .unwrap();
        store
    }

    fn insert_tty(store: &VocabStore, rxcui: i64, tty: &str) {
        store
            .execute(
                "INSERT INTO RXNCONSO (RXCUI, LAT, STR, TTY, RXAUI)
                    VALUES (?1, 'ENG', 'name', ?2, '0')",
                params![rxcui, tty],
            )
            .unwrap();
    }

    fn insert_class(store: &VocabStore, rxcui: i64, class_name: &str) {
        store
            .execute(
                "INSERT INTO RXNSAT (RXCUI, ATN, ATV) VALUES (?1, 'VA_CLASS_NAME', ?2)",
                params![rxcui, class_name],
            )
            .unwrap();
    }

    fn insert_edge(store: &VocabStore, from: i64, to: i64, relation: &str) {
        store
            .execute(
                "INSERT INTO RXNREL (RXCUI1, RXCUI2, RELA) VALUES (?1, ?2, ?3)",
                params![from, to, relation],
            )
            .unwrap();
    }

    #[test]
    fn test_direct_attribute_short_circuits() {
        let store = make_store();
        insert_class(&store, 1, "CV350");
        // A relation that would yield a different class must never be
        // consulted when the attribute hit succeeds.
        insert_tty(&store, 1, "SBD");
        insert_edge(&store, 1, 2, "has_tradename");
        insert_class(&store, 2, "WRONG");

        let resolver = DrugClassResolver::new(&store).unwrap();
        assert_eq!(
            resolver.find_drug_class(1, false).unwrap().as_deref(),
            Some("CV350")
        );

        // Direct hits are not memoized; only graph discoveries are.
        assert_eq!(store.count_rows(CACHE_TABLE).unwrap(), 0);
    }

    #[test]
    fn test_cache_layer_wins_over_attribute() {
        let store = make_store();
        let resolver = DrugClassResolver::new(&store).unwrap();

        store
            .execute(
                "INSERT INTO VA_DRUG_CLASS (RXCUI, RXCUI_ORIGINAL, VA) VALUES (1, 9, 'CACHED')",
                [],
            )
            .unwrap();
        insert_class(&store, 1, "ATTRIBUTE");

        assert_eq!(
            resolver.find_drug_class(1, false).unwrap().as_deref(),
            Some("CACHED")
        );
    }

    #[test]
    fn test_priority_order_respected() {
        let store = make_store();
        // TTY set matches both has_tradename (SBD) and isa (SCDG); the
        // earlier priority entry must win.
        insert_tty(&store, 1, "SBD");
        insert_tty(&store, 1, "SCDG");
        insert_edge(&store, 1, 2, "has_tradename");
        insert_edge(&store, 1, 3, "isa");
        insert_class(&store, 2, "TRADENAME_CLASS");
        insert_class(&store, 3, "ISA_CLASS");

        let resolver = DrugClassResolver::new(&store).unwrap();
        assert_eq!(
            resolver.find_drug_class(1, false).unwrap().as_deref(),
            Some("TRADENAME_CLASS")
        );
    }

    #[test]
    fn test_later_kind_examined_when_earlier_yields_nothing() {
        let store = make_store();
        // has_tradename matches the TTY filter but its related concept has
        // no class; isa must then be tried.
        insert_tty(&store, 1, "SBD");
        insert_tty(&store, 1, "SCDG");
        insert_edge(&store, 1, 2, "has_tradename");
        insert_edge(&store, 1, 3, "isa");
        insert_class(&store, 3, "ISA_CLASS");

        let resolver = DrugClassResolver::new(&store).unwrap();
        assert_eq!(
            resolver.find_drug_class(1, false).unwrap().as_deref(),
            Some("ISA_CLASS")
        );
    }

    #[test]
    fn test_cache_write_through() {
        let store = make_store();
        insert_tty(&store, 1, "SBD");
        insert_edge(&store, 1, 2, "has_tradename");
        insert_class(&store, 2, "CV350");

        let resolver = DrugClassResolver::new(&store).unwrap();
        assert_eq!(
            resolver.find_drug_class(1, false).unwrap().as_deref(),
            Some("CV350")
        );

        let cached: Option<(i64, String)> = store
            .query_one(
                "SELECT RXCUI_ORIGINAL, VA FROM VA_DRUG_CLASS WHERE RXCUI = 1",
                [],
                |row| Ok((row.get(0)?, row.get(1)?)),
            )
            .unwrap();
        assert_eq!(cached, Some((2, "CV350".to_string())));

        // Remove the relation rows: the second resolution must succeed via
        // the cache layer alone.
        store.execute("DELETE FROM RXNREL", []).unwrap();
        store.execute("DELETE FROM RXNSAT", []).unwrap();
        assert_eq!(
            resolver.find_drug_class(1, false).unwrap().as_deref(),
            Some("CV350")
        );
    }

    #[test]
    fn test_second_degree_requires_deep() {
        let store = make_store();
        // 1 has no TTY rows, so the first-degree search finds nothing; the
        // class is two hops away.
        insert_edge(&store, 1, 2, "contains");
        insert_class(&store, 2, "DEEP_CLASS");

        let resolver = DrugClassResolver::new(&store).unwrap();
        assert!(resolver.find_drug_class(1, false).unwrap().is_none());
        assert_eq!(
            resolver.find_drug_class(1, true).unwrap().as_deref(),
            Some("DEEP_CLASS")
        );
    }

    #[test]
    fn test_second_degree_exclusions() {
        let store = make_store();
        insert_edge(&store, 1, 2, "constitutes");
        insert_edge(&store, 1, 3, "dose_form_of");
        insert_class(&store, 2, "EXCLUDED_A");
        insert_class(&store, 3, "EXCLUDED_B");

        let resolver = DrugClassResolver::new(&store).unwrap();
        assert!(resolver.find_drug_class(1, true).unwrap().is_none());
    }

    #[test]
    fn test_relation_cycle_terminates() {
        let store = make_store();
        insert_edge(&store, 1, 2, "related_to");
        insert_edge(&store, 2, 1, "related_to");

        let resolver = DrugClassResolver::new(&store).unwrap();
        assert!(resolver.find_drug_class(1, true).unwrap().is_none());
    }

    #[test]
    fn test_substituted_priority_table() {
        let store = make_store();
        insert_tty(&store, 1, "XX");
        insert_edge(&store, 1, 2, "custom_relation");
        insert_class(&store, 2, "CUSTOM");

        let config = ClassifierConfig {
            priority: vec![("custom_relation".to_string(), vec!["XX".to_string()])],
            excluded_relations: Vec::new(),
        };
        let resolver = DrugClassResolver::with_config(&store, config).unwrap();
        assert_eq!(
            resolver.find_drug_class(1, false).unwrap().as_deref(),
            Some("CUSTOM")
        );
    }
}
