//! Naming rules that decide which executables count as plugins.

use serde::Deserialize;

fn default_valid_binaries() -> Vec<String> {
    vec!["aws".to_string(), "ocm".to_string()]
}

fn default_valid_prefixes() -> Vec<String> {
    vec!["rosa".to_string()]
}

/// Accepted plugin names for a [`PluginResolver`](crate::PluginResolver).
///
/// Passed into the resolver at construction instead of living in process-wide
/// state, so each resolver (and each test) can carry its own sets.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ResolverConfig {
    /// Executable names accepted as-is, without a prefix.
    #[serde(default = "default_valid_binaries")]
    pub valid_binaries: Vec<String>,

    /// Prefixes such that `<prefix>-<name>` provides the subcommand `<name>`.
    #[serde(default = "default_valid_prefixes")]
    pub valid_prefixes: Vec<String>,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            valid_binaries: default_valid_binaries(),
            valid_prefixes: default_valid_prefixes(),
        }
    }
}

impl ResolverConfig {
    pub fn new<B, P>(valid_binaries: B, valid_prefixes: P) -> Self
    where
        B: IntoIterator,
        B::Item: Into<String>,
        P: IntoIterator,
        P::Item: Into<String>,
    {
        Self {
            valid_binaries: valid_binaries.into_iter().map(Into::into).collect(),
            valid_prefixes: valid_prefixes.into_iter().map(Into::into).collect(),
        }
    }

    /// Return the logical plugin name for `file_name`, or `None` if the file
    /// does not follow the naming rules.
    ///
    /// An exact valid binary keeps its own name; `<prefix>-<rest>` yields `<rest>`.
    pub fn matches(&self, file_name: &str) -> Option<String> {
        if self.is_valid_binary(file_name) {
            return Some(file_name.to_string());
        }

        self.valid_prefixes.iter().find_map(|prefix| {
            file_name
                .strip_prefix(prefix.as_str())
                .and_then(|rest| rest.strip_prefix('-'))
                .map(str::to_string)
        })
    }

    pub fn is_valid_binary(&self, name: &str) -> bool {
        self.valid_binaries.iter().any(|b| b == name)
    }
}
