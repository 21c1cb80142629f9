//! Plugin inspection commands.

use rosa_plugin::{Plugin, PluginHandler};

use crate::output::{self, OutputFormat};
use crate::PluginCommands;

pub(crate) fn handle_plugin_subcommand(
    cmd: PluginCommands,
    handler: &impl PluginHandler,
) -> anyhow::Result<()> {
    match cmd {
        PluginCommands::List { output: format } => list_plugins(handler, format),
    }
}

fn list_plugins(handler: &impl PluginHandler, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => {
            // Keep stdout parseable: scan warnings go to stderr.
            let plugins = handler.find_plugins_to(&mut anstream::stderr().lock())?;
            output::plain(serde_json::to_string_pretty(&plugins)?);
        }
        OutputFormat::Text => print_plugins(&handler.find_plugins()?),
    }

    Ok(())
}

fn print_plugins(plugins: &[Plugin]) {
    if plugins.is_empty() {
        output::warning("No plugins found on PATH.");
        output::blank();
        output::hint("A plugin is an executable on PATH named 'rosa-<command>'.");
        output::hint("It runs as 'rosa <command> [args...]'.");
        return;
    }

    output::header("Plugins found on PATH:");
    output::blank();
    for plugin in plugins {
        output::item(&plugin.name);
        output::label("    Path", plugin.path.display());
    }
}
