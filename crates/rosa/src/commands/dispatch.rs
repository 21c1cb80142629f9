//! Dispatch of unknown subcommands to plugin executables.

use rosa_plugin::{PluginError, PluginHandler};

use crate::output;

/// Run `args[0]` as a plugin and return the process exit code for `rosa`.
///
/// A plugin that exits unsuccessfully passes its own exit code through; it has
/// already reported its failure on the inherited streams.
pub(crate) fn dispatch_to_plugin(
    handler: &impl PluginHandler,
    args: &[String],
) -> anyhow::Result<u8> {
    match handler.handle_plugin_command(args) {
        Ok(true) => Ok(0),
        Ok(false) => {
            let name = args.first().map(String::as_str).unwrap_or_default();
            output::error(format!("unknown command \"{name}\" for \"rosa\""));
            output::error_hint("Run 'rosa --help' for usage.");
            Ok(1)
        }
        Err(e @ PluginError::Exit { .. }) => {
            tracing::debug!(error = %e, "Plugin exited unsuccessfully");
            Ok(e.exit_code()
                .and_then(|code| u8::try_from(code).ok())
                .filter(|code| *code != 0)
                .unwrap_or(1))
        }
        Err(e) => Err(e.into()),
    }
}
