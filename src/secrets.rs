use std::collections::{BTreeMap, HashMap};

/// A named bundle of string fields returned verbatim to authenticated callers.
pub type SecretRecord = BTreeMap<&'static str, String>;

/// Immutable table of secrets, built once at startup. The set of names is
/// fixed for the lifetime of the process.
#[derive(Debug, Clone)]
pub struct SecretStore {
    records: HashMap<&'static str, SecretRecord>,
}

impl SecretStore {
    pub fn new(root_flag: &str) -> Self {
        let records = HashMap::from([
            (
                "root-flag",
                SecretRecord::from([
                    ("flag", root_flag.to_string()),
                    (
                        "message",
                        "Congratulations! You achieved full compromise of the Cloud Fragment."
                            .to_string(),
                    ),
                ]),
            ),
            (
                "db-password",
                SecretRecord::from([
                    ("value", "pr0d_db_p4ssw0rd_2024!".to_string()),
                    ("note", "Not the flag you're looking for".to_string()),
                ]),
            ),
            (
                "api-key",
                SecretRecord::from([
                    ("value", "sk_live_xyzABC123def456".to_string()),
                    ("note", "Not the flag you're looking for".to_string()),
                ]),
            ),
        ]);

        Self { records }
    }

    /// Names of every stored secret, in no particular order.
    pub fn names(&self) -> Vec<String> {
        self.records.keys().map(|name| name.to_string()).collect()
    }

    /// Exact, case-sensitive lookup by name.
    pub fn get(&self, name: &str) -> Option<&SecretRecord> {
        self.records.get(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_are_fixed() {
        let store = SecretStore::new("HTB{test}");

        let mut names = store.names();
        names.sort();

        assert_eq!(names, vec!["api-key", "db-password", "root-flag"]);
    }

    #[test]
    fn test_root_flag_record_carries_configured_flag() {
        let store = SecretStore::new("HTB{configured}");

        let record = store.get("root-flag").unwrap();

        assert_eq!(record["flag"], "HTB{configured}");
        assert!(record["message"].starts_with("Congratulations!"));
    }

    #[test]
    fn test_lookup_is_exact() {
        let store = SecretStore::new("HTB{test}");

        assert!(store.get("api-key").is_some());
        assert!(store.get("API-KEY").is_none());
        assert!(store.get("api").is_none());
        assert!(store.get("api-key/").is_none());
        assert!(store.get("").is_none());
    }
}
