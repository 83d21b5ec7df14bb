//! Claimgraph CLI - turn patent claim text into a feature graph and markers.

use clap::Parser;
use claimgraph_cli::{commands, Cli, Command};
use claimgraph_store::CaseStore;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> claimgraph_cli::Result<()> {
    let cli = Cli::parse();
    let store = CaseStore::new(cli.data_dir);

    match cli.command {
        Command::Extract(args) => commands::execute_extract(args, &cli.case, &store)?,
        Command::Network(args) => commands::execute_network(args, &cli.case, &store)?,
        Command::Markers => commands::execute_markers(&cli.case, &store)?,
        Command::Show(args) => commands::execute_show(args, &cli.case, &store)?,
    }

    Ok(())
}
