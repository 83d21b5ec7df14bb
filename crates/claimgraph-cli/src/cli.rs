//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Claimgraph CLI - turn patent claim text into a feature graph and markers.
#[derive(Debug, Parser)]
#[command(name = "claimgraph")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Data directory holding case documents
    #[arg(short, long, global = true, default_value = "data")]
    pub data_dir: PathBuf,

    /// Case identifier (normalized to uppercase)
    pub case: String,

    #[command(subcommand)]
    pub command: Command,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract features and rebuild the claim table from claim text
    Extract(ExtractArgs),

    /// Build or edit the feature graph
    Network(NetworkArgs),

    /// Generate markers from the stored graph
    Markers,

    /// Print sections of the case document
    Show(ShowArgs),
}

/// Arguments for the extract command.
#[derive(Debug, Parser)]
pub struct ExtractArgs {
    /// Read claim text from a file (one claim per line) instead of stdin
    #[arg(short, long)]
    pub file: Option<PathBuf>,
}

/// Arguments for the network command.
#[derive(Debug, Parser)]
pub struct NetworkArgs {
    #[command(subcommand)]
    pub action: NetworkAction,
}

/// Graph build and edit actions.
#[derive(Debug, Subcommand)]
pub enum NetworkAction {
    /// (Re)build the graph from the stored claim table
    Build {
        /// Rebuild even if a graph already exists, discarding edits
        #[arg(long)]
        force: bool,
    },

    /// Add a node by hand
    AddNode {
        /// Node id (feature text)
        id: String,
    },

    /// Delete a node and its incident edges
    DelNode {
        /// Node id
        id: String,
    },

    /// Add a directed edge between existing nodes
    AddEdge {
        /// Source node id
        from: String,
        /// Target node id
        to: String,
        /// Edge label
        #[arg(short, long, default_value = "")]
        label: String,
    },

    /// Delete an edge
    DelEdge {
        /// Source node id
        from: String,
        /// Target node id
        to: String,
    },
}

/// Arguments for the show command.
#[derive(Debug, Parser)]
pub struct ShowArgs {
    /// Section to print
    #[arg(value_enum, default_value_t = ShowSection::Claims)]
    pub section: ShowSection,
}

/// Case-document sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ShowSection {
    /// Claims with features highlighted
    Claims,
    /// Raw and edited feature tables
    Features,
    /// The concatenated role table
    Table,
    /// The feature graph
    Network,
    /// The stored markers
    Markers,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_command() {
        let cli = Cli::parse_from(["claimgraph", "EP100", "extract", "--file", "claims.txt"]);
        assert_eq!(cli.case, "EP100");
        match cli.command {
            Command::Extract(args) => {
                assert_eq!(args.file.unwrap(), PathBuf::from("claims.txt"));
            }
            _ => panic!("Expected Extract command"),
        }
    }

    #[test]
    fn test_network_add_edge() {
        let cli = Cli::parse_from([
            "claimgraph",
            "ep100",
            "network",
            "add-edge",
            "widget",
            "frame",
            "--label",
            "comprising",
        ]);
        match cli.command {
            Command::Network(NetworkArgs {
                action: NetworkAction::AddEdge { from, to, label },
            }) => {
                assert_eq!(from, "widget");
                assert_eq!(to, "frame");
                assert_eq!(label, "comprising");
            }
            _ => panic!("Expected AddEdge action"),
        }
    }

    #[test]
    fn test_show_defaults_to_claims() {
        let cli = Cli::parse_from(["claimgraph", "EP100", "show"]);
        match cli.command {
            Command::Show(args) => assert_eq!(args.section, ShowSection::Claims),
            _ => panic!("Expected Show command"),
        }
    }

    #[test]
    fn test_data_dir_flag() {
        let cli = Cli::parse_from(["claimgraph", "--data-dir", "/tmp/x", "EP100", "markers"]);
        assert_eq!(cli.data_dir, PathBuf::from("/tmp/x"));
        assert!(matches!(cli.command, Command::Markers));
    }
}
