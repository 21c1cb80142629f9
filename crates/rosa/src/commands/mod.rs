//! Command handlers for the rosa CLI.

pub(crate) mod dispatch;
pub(crate) mod plugin;
pub(crate) mod version;

pub(crate) use dispatch::dispatch_to_plugin;
pub(crate) use plugin::handle_plugin_subcommand;
pub(crate) use version::handle_version_command;
