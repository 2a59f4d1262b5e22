use std::env;

use serde::Deserialize;

use crate::error::ParamLogError;
use crate::exclusion::ExclusionList;

/// Largest form body buffered for logging. Matches axum's default body limit.
pub const DEFAULT_MAX_FORM_BYTES: usize = 2 * 1024 * 1024;

#[derive(Debug, Clone, Deserialize)]
pub struct ParamLogConfig {
    #[serde(default)]
    pub exclusions: ExclusionList,
    #[serde(default = "default_max_form_bytes")]
    pub max_form_bytes: usize,
}

fn default_max_form_bytes() -> usize {
    DEFAULT_MAX_FORM_BYTES
}

impl Default for ParamLogConfig {
    fn default() -> Self {
        Self {
            exclusions: ExclusionList::default(),
            max_form_bytes: DEFAULT_MAX_FORM_BYTES,
        }
    }
}

impl ParamLogConfig {
    /// Read `PARAMLOG_EXCLUDE` (comma-separated names) and
    /// `PARAMLOG_MAX_FORM_BYTES`. Unset variables keep their defaults.
    pub fn from_env() -> Result<Self, ParamLogError> {
        Self::from_vars(
            env::var("PARAMLOG_EXCLUDE").ok().as_deref(),
            env::var("PARAMLOG_MAX_FORM_BYTES").ok().as_deref(),
        )
    }

    pub fn from_vars(
        exclude: Option<&str>,
        max_form_bytes: Option<&str>,
    ) -> Result<Self, ParamLogError> {
        let mut config = Self::default();

        if let Some(raw) = exclude {
            config.exclusions = ExclusionList::new(parse_list(raw));
        }

        if let Some(raw) = max_form_bytes {
            config.max_form_bytes = raw.trim().parse().map_err(|e| {
                ParamLogError::Config(format!("invalid PARAMLOG_MAX_FORM_BYTES {raw:?}: {e}"))
            })?;
        }

        Ok(config)
    }
}

fn parse_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_vars_keep_defaults() {
        let config = ParamLogConfig::from_vars(None, None).unwrap();
        assert_eq!(config.exclusions, ExclusionList::default());
        assert_eq!(config.max_form_bytes, DEFAULT_MAX_FORM_BYTES);
    }

    #[test]
    fn exclude_list_is_split_and_trimmed() {
        let config = ParamLogConfig::from_vars(Some(" Token, ,ssn "), None).unwrap();
        assert_eq!(config.exclusions.entries(), ["Token", "ssn"]);
    }

    #[test]
    fn blank_exclude_list_means_defaults() {
        let config = ParamLogConfig::from_vars(Some(" , "), None).unwrap();
        assert_eq!(config.exclusions, ExclusionList::default());
    }

    #[test]
    fn bad_size_is_a_config_error() {
        let err = ParamLogConfig::from_vars(None, Some("lots")).unwrap_err();
        assert!(matches!(err, ParamLogError::Config(_)));
    }

    #[test]
    fn deserializes_with_defaults() {
        let config: ParamLogConfig =
            serde_json::from_str(r#"{"exclusions": ["ApiKey"]}"#).unwrap();
        assert_eq!(config.exclusions.entries(), ["ApiKey"]);
        assert_eq!(config.max_form_bytes, DEFAULT_MAX_FORM_BYTES);

        let config: ParamLogConfig = serde_json::from_str(r#"{"exclusions": []}"#).unwrap();
        assert_eq!(config.exclusions, ExclusionList::default());
    }
}
