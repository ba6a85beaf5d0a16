//! Cutline command-line entry point.

mod commands;

use anyhow::Result;
use clap::Parser;

use cutline::cli::{Cli, Commands, ConfigCommands};

/// Install the stderr log subscriber.
///
/// RUST_LOG wins when set; otherwise `--verbose` selects debug output.
fn init_logging(verbose: bool) {
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if verbose {
            "cutline=debug".to_string()
        } else {
            "cutline=warn".to_string()
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Inspect { media, json } => commands::inspect::handle(&media, json),
        Commands::Poi { media, kind, json } => commands::poi::handle_list(&media, kind, json),
        Commands::Find { media, kind, time } => commands::poi::handle_find(&media, kind, time),
        Commands::Convert {
            media,
            real,
            cut,
            percent,
        } => commands::convert::handle(&media, real, cut, percent),
        Commands::Play {
            media,
            kind,
            step,
            time_format,
        } => commands::play::handle(&media, kind, step, time_format),
        Commands::Config(cmd) => match cmd {
            ConfigCommands::Show => commands::config::handle_show(),
            ConfigCommands::Edit => commands::config::handle_edit(),
            ConfigCommands::Migrate { yes } => commands::config::handle_migrate(yes),
        },
        Commands::Completions { shell } => commands::completions::handle(shell),
    }
}
