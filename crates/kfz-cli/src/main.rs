//! Kfz CLI - Command-line interface for the chat-to-XML assistant.

use clap::Parser;
use kfz_assistant::Assistant;
use kfz_cli::commands;
use kfz_cli::{load_extractor_config, Cli, Command, Formatter};
use std::io;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    let formatter = Formatter::new(!cli.no_color);

    if let Err(e) = run(cli, &formatter) {
        eprintln!("{}", formatter.error(&e.to_string()));
        std::process::exit(1);
    }
}

fn run(cli: Cli, formatter: &Formatter) -> kfz_cli::Result<()> {
    // Quiet unless RUST_LOG asks for more
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(filter)
        .init();

    let config = load_extractor_config(cli.config.as_deref())?;
    let assistant = Assistant::from_config(config)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::Extract(args) => {
            commands::execute_extract(args, &assistant, formatter, io::stdin().lock(), &mut out)?;
        }
        Command::Fields(args) => {
            commands::execute_fields(args, &assistant, formatter, &mut out)?;
        }
    }

    Ok(())
}
