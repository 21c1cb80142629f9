//! `rosa` — command line tool for Red Hat OpenShift Service on AWS.
//!
//! Built-in subcommands are handled here; any other subcommand name is handed
//! to the plugin resolver, which runs `rosa-<name>` (or a valid binary such as
//! `aws`) from the search path.

mod cli_config;
mod commands;
mod output;

use std::process::ExitCode;

use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use rosa_plugin::PluginResolver;
use tracing_subscriber::EnvFilter;

use crate::output::OutputFormat;

#[derive(Debug, Parser)]
#[command(
    name = "rosa",
    version,
    about = "Command line tool for ROSA.",
    long_about = "Command line tool for Red Hat OpenShift Service on AWS.\n\
                  Subcommands that are not built in are looked up as plugins: \
                  executables on PATH named 'rosa-<command>'.",
    styles = output::clap_styles()
)]
struct Cli {
    /// Enable debug mode.
    #[arg(long, global = true)]
    debug: bool,

    /// When to color the output.
    #[arg(long, value_enum, global = true, default_value_t = ColorMode::Auto)]
    color: ColorMode,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ColorMode {
    Auto,
    Always,
    Never,
}

impl ColorMode {
    fn apply(self) {
        let choice = match self {
            Self::Auto => anstream::ColorChoice::Auto,
            Self::Always => anstream::ColorChoice::Always,
            Self::Never => anstream::ColorChoice::Never,
        };
        choice.write_global();
    }
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Inspect plugins available on PATH
    #[command(subcommand)]
    Plugin(PluginCommands),

    /// Print the version of the tool
    Version,

    /// Any other command is dispatched to a plugin
    #[command(external_subcommand)]
    External(Vec<String>),
}

#[derive(Debug, Subcommand)]
pub(crate) enum PluginCommands {
    /// List all plugin executables found on PATH
    List {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        output: OutputFormat,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    cli.color.apply();
    init_tracing(cli.debug);

    let Some(command) = cli.command else {
        // A bare `rosa` prints help and succeeds.
        return match Cli::command().print_help() {
            Ok(()) => ExitCode::SUCCESS,
            Err(_) => ExitCode::FAILURE,
        };
    };

    match run(command) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            output::error(format!("Failed to execute root command: {e}"));
            ExitCode::FAILURE
        }
    }
}

fn run(command: Commands) -> anyhow::Result<u8> {
    let cli_config = cli_config::load_cli_config();
    let resolver = PluginResolver::new(cli_config.plugins);

    match command {
        Commands::Plugin(cmd) => commands::handle_plugin_subcommand(cmd, &resolver)?,
        Commands::Version => commands::handle_version_command(),
        Commands::External(args) => return commands::dispatch_to_plugin(&resolver, &args),
    }

    Ok(0)
}

/// Log to stderr. `RUST_LOG` is honoured unless `--debug` is given.
///
/// Call after the colour choice is applied; ANSI output follows it.
fn init_tracing(debug: bool) {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) if !debug => filter,
        _ if debug => EnvFilter::new("rosa=debug,rosa_plugin=debug"),
        _ => EnvFilter::new("rosa=warn,rosa_plugin=warn"),
    };
    let ansi = anstream::AutoStream::choice(&std::io::stderr()) != anstream::ColorChoice::Never;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(ansi)
        .init();
}
