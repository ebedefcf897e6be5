//! Configuration shared by the logger and the filesystem facade.
//!
//! An [`IoConfig`] is built once at startup, either programmatically or from
//! the environment, and handed to [`Logger::new`](crate::Logger::new) and
//! [`FileSystem::new`](crate::FileSystem::new).
//!
//! | Variable | Values | Effect |
//! |---|---|---|
//! | `FOUNDATION_IO_DEBUG` | `1` / `true` | emit `debug` output |
//! | `FOUNDATION_IO_EXTENSION_MATCH` | `suffix` / `legacy` | extension filter rule |
//!
//! Colors follow the `colored` crate's own `NO_COLOR` / `CLICOLOR_FORCE`
//! handling.

use std::path::PathBuf;
use std::str::FromStr;

/// Environment variable enabling debug output.
pub const DEBUG_ENV: &str = "FOUNDATION_IO_DEBUG";

/// Environment variable selecting the extension filter rule.
pub const EXTENSION_MATCH_ENV: &str = "FOUNDATION_IO_EXTENSION_MATCH";

/// How [`reduce`](crate::fs::reduce) decides that a filename has an extension.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExtensionMatch {
    /// The name ends with the extension.
    #[default]
    Suffix,
    /// The extension occurs anywhere in the name and the character where the
    /// suffix would start equals the extension's first character. Accepts
    /// some names that do not end with the extension.
    Legacy,
}

impl FromStr for ExtensionMatch {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "suffix" => Ok(Self::Suffix),
            "legacy" => Ok(Self::Legacy),
            other => Err(format!("unknown extension match rule: {other}")),
        }
    }
}

/// Process-level settings for the I/O layer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IoConfig {
    /// Whether `debug` severity output is emitted.
    pub debugging: bool,
    /// Rule used when filtering listings by extension.
    pub extension_match: ExtensionMatch,
    /// Directory relative paths resolve against; the working directory when unset.
    pub base_path: Option<PathBuf>,
}

impl IoConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read settings from the environment, falling back to defaults for
    /// anything unset or unparseable.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup (the environment in production).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let debugging = lookup(DEBUG_ENV)
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);
        let extension_match = lookup(EXTENSION_MATCH_ENV)
            .and_then(|v| v.parse().ok())
            .unwrap_or_default();

        Self {
            debugging,
            extension_match,
            base_path: None,
        }
    }

    #[must_use]
    pub fn with_debugging(mut self, debugging: bool) -> Self {
        self.debugging = debugging;
        self
    }

    #[must_use]
    pub fn with_extension_match(mut self, extension_match: ExtensionMatch) -> Self {
        self.extension_match = extension_match;
        self
    }

    #[must_use]
    pub fn with_base_path(mut self, base_path: impl Into<PathBuf>) -> Self {
        self.base_path = Some(base_path.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = IoConfig::default();
        assert!(!config.debugging);
        assert_eq!(config.extension_match, ExtensionMatch::Suffix);
        assert!(config.base_path.is_none());
    }

    #[test]
    fn test_from_lookup() {
        let config = IoConfig::from_lookup(lookup(&[
            (DEBUG_ENV, "TRUE"),
            (EXTENSION_MATCH_ENV, "legacy"),
        ]));
        assert!(config.debugging);
        assert_eq!(config.extension_match, ExtensionMatch::Legacy);

        let config = IoConfig::from_lookup(lookup(&[(DEBUG_ENV, "1")]));
        assert!(config.debugging);

        let config = IoConfig::from_lookup(lookup(&[(DEBUG_ENV, "no")]));
        assert!(!config.debugging);
    }

    #[test]
    fn test_unparseable_match_falls_back() {
        let config = IoConfig::from_lookup(lookup(&[(EXTENSION_MATCH_ENV, "fuzzy")]));
        assert_eq!(config.extension_match, ExtensionMatch::Suffix);
        assert!("fuzzy".parse::<ExtensionMatch>().is_err());
        assert_eq!(" Suffix ".parse::<ExtensionMatch>(), Ok(ExtensionMatch::Suffix));
    }

    #[test]
    fn test_builders() {
        let config = IoConfig::new()
            .with_debugging(true)
            .with_extension_match(ExtensionMatch::Legacy)
            .with_base_path("/srv/app");
        assert!(config.debugging);
        assert_eq!(config.extension_match, ExtensionMatch::Legacy);
        assert_eq!(config.base_path, Some(PathBuf::from("/srv/app")));
    }
}
