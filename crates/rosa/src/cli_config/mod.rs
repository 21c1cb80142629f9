//! CLI configuration for plugin naming rules.
//!
//! Read from an optional TOML file; every key has a default, so a missing file
//! and an empty file behave the same.

pub(crate) mod loader;

pub(crate) use loader::load_cli_config;

use rosa_plugin::ResolverConfig;
use serde::Deserialize;

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub(crate) struct CliConfig {
    /// Which executables on PATH count as plugins.
    #[serde(default)]
    pub plugins: ResolverConfig,
}
