//! Parameter containers handed to the redaction step.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Field name → every value submitted under that name, in submission order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParameterMap(BTreeMap<String, Vec<String>>);

impl ParameterMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `value` to the values already held under `key`.
    pub fn add(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.entry(key.into()).or_default().push(value.into());
    }

    /// Replace every value held under `key`.
    pub fn insert(&mut self, key: impl Into<String>, values: Vec<String>) {
        self.0.insert(key.into(), values);
    }

    pub fn get(&self, key: &str) -> Option<&[String]> {
        self.0.get(key).map(Vec::as_slice)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for ParameterMap
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (k, v) in iter {
            map.add(k, v);
        }
        map
    }
}

/// Decoded `multipart/form-data` body. Uploaded files are represented by
/// their filename only; contents are never retained.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MultipartForm {
    pub values: Vec<(String, String)>,
    pub files: Vec<(String, String)>,
}

impl MultipartForm {
    /// Value fields first, then file fields mapped to their filenames.
    pub fn to_parameter_map(&self) -> ParameterMap {
        let mut map = ParameterMap::new();
        for (name, value) in &self.values {
            map.add(name.as_str(), value.as_str());
        }
        for (name, filename) in &self.files {
            map.add(name.as_str(), filename.as_str());
        }
        map
    }
}

/// Body fields of a non-GET request as decoded by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormSubmission {
    Standard(ParameterMap),
    Multipart(MultipartForm),
}

impl FormSubmission {
    pub fn fields(&self) -> ParameterMap {
        match self {
            Self::Standard(map) => map.clone(),
            Self::Multipart(form) => form.to_parameter_map(),
        }
    }
}

/// The resolved parameter set of a request.
///
/// Hosts whose parameters are not a name → values mapping hand them over as
/// `Other`; those are logged without redaction.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Params {
    Values(ParameterMap),
    Other(serde_json::Value),
}

impl From<ParameterMap> for Params {
    fn from(map: ParameterMap) -> Self {
        Self::Values(map)
    }
}
