//! Drug-class resolver configuration tables.

/// Configuration for the VA drug-class graph search.
///
/// Carries the ordered relation-kind priority table with the term-type set
/// that qualifies a concept for each relation kind, and the relation
/// attributes excluded from the second-degree search. The tables are
/// ordinary data so tests can substitute alternate priorities.
///
/// # Examples
///
/// ```
/// use vocab_types::ClassifierConfig;
///
/// let config = ClassifierConfig::default();
/// assert_eq!(config.priority[0].0, "has_tradename");
/// assert!(config.excluded_relations.contains(&"constitutes".to_string()));
/// ```
#[derive(Debug, Clone)]
pub struct ClassifierConfig {
    /// Relation kinds in strict priority order, each with the term types
    /// that make the relation kind applicable to a concept.
    pub priority: Vec<(String, Vec<String>)>,
    /// Relation attributes never followed in the second-degree search.
    pub excluded_relations: Vec<String>,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        let owned = |items: &[&str]| items.iter().map(|s| s.to_string()).collect::<Vec<_>>();

        Self {
            priority: vec![
                ("has_tradename".to_string(), owned(&["BD", "CD", "DP", "SBD", "SY"])),
                ("part_of".to_string(), owned(&["IN", "MIN", "FN", "PT"])),
                ("consists_of".to_string(), owned(&["SBDC", "SCDC", "TMSY"])),
                ("has_dose_form".to_string(), owned(&["CD", "DF", "FN", "PT"])),
                (
                    "has_ingredient".to_string(),
                    owned(&["BN", "FN", "MH", "N1", "PEN", "PM", "PT", "SU", "SY"]),
                ),
                ("isa".to_string(), owned(&["SCDG", "TMSY"])),
            ],
            excluded_relations: owned(&["constitutes", "dose_form_of"]),
        }
    }
}

impl ClassifierConfig {
    /// Returns true if the given relation attribute is excluded from the
    /// second-degree search.
    pub fn is_excluded(&self, relation: &str) -> bool {
        self.excluded_relations.iter().any(|r| r == relation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_priority_order() {
        let config = ClassifierConfig::default();
        let kinds: Vec<&str> = config.priority.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(
            kinds,
            [
                "has_tradename",
                "part_of",
                "consists_of",
                "has_dose_form",
                "has_ingredient",
                "isa"
            ]
        );
    }

    #[test]
    fn test_excluded_relations() {
        let config = ClassifierConfig::default();
        assert!(config.is_excluded("constitutes"));
        assert!(config.is_excluded("dose_form_of"));
        assert!(!config.is_excluded("has_tradename"));
    }
}
