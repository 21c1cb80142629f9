//! Plugin discovery and dispatch for the `rosa` CLI.
//!
//! A plugin is any executable on the search path whose file name is either one of
//! the configured valid binaries (e.g. `aws`, `ocm`) or starts with `<prefix>-`
//! for one of the configured valid prefixes (e.g. `rosa-foo` provides `rosa foo`).
//!
//! # Modules
//!
//! - [`config`] — The accepted binary names and prefixes
//! - [`search_path`] — Splitting and normalizing the platform search path
//! - [`executable`] — Platform executability rules as a pure function
//! - [`resolver`] — `PluginResolver`: directory scan and command dispatch
//! - [`error`] — Error types for scanning and dispatch

pub mod config;
pub mod error;
pub mod executable;
pub mod resolver;
pub mod search_path;

pub use config::ResolverConfig;
pub use error::{PluginError, PluginResult};
pub use executable::{is_executable, FileMeta, Platform};
pub use resolver::{Plugin, PluginHandler, PluginResolver};
pub use search_path::SearchPath;
