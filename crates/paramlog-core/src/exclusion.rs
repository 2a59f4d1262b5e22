use serde::{Deserialize, Serialize};

/// Field names filtered out of the logs when no list is configured.
pub const DEFAULT_EXCLUSIONS: [&str; 4] = ["Password", "PasswordConfirmation", "CreditCard", "CVC"];

/// Ordered, case-insensitive list of parameter names whose values must never
/// be logged.
///
/// Never empty: constructing from an empty sequence yields
/// [`DEFAULT_EXCLUSIONS`]. Entries keep their original spelling for display;
/// matching compares uppercase forms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct ExclusionList {
    entries: Vec<String>,
}

impl ExclusionList {
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let entries: Vec<String> = entries.into_iter().map(Into::into).collect();
        if entries.is_empty() {
            return Self::default();
        }
        Self { entries }
    }

    /// Append more names after the current entries.
    pub fn extend<I, S>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.entries.extend(entries.into_iter().map(Into::into));
        self
    }

    /// First entry, in list order, equal to `key` ignoring case.
    pub fn find(&self, key: &str) -> Option<&str> {
        let key = key.to_uppercase();
        self.entries
            .iter()
            .find(|entry| entry.to_uppercase() == key)
            .map(String::as_str)
    }

    pub fn is_excluded(&self, key: &str) -> bool {
        self.find(key).is_some()
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }
}

impl Default for ExclusionList {
    fn default() -> Self {
        Self {
            entries: DEFAULT_EXCLUSIONS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl From<Vec<String>> for ExclusionList {
    fn from(entries: Vec<String>) -> Self {
        Self::new(entries)
    }
}

impl From<ExclusionList> for Vec<String> {
    fn from(list: ExclusionList) -> Self {
        list.entries
    }
}
