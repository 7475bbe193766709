//! CLI command definitions using clap.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

use crate::config::OutputFormat;

/// hopgraph - directed graph analysis
#[derive(Parser, Debug)]
#[command(name = "hopgraph")]
#[command(version)]
#[command(about = "Reachability, ranking, partition, distance and Eulerian analyses of directed graphs")]
#[command(
    long_about = "hopgraph loads a graph written as one 'VERTEX [: fields] > NEIGHBOUR ...' line per vertex and answers a single question about it."
)]
pub struct Cli {
    /// Configuration file (TOML, or JSON with a .json extension)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Report format, overriding configuration and environment
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Graph file in adjacency-list format
    #[arg(value_name = "GRAPH_FILE")]
    pub graph: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Print the adjacency listing
    Show,

    /// Is there a directed path between two vertices?
    Path {
        /// Start vertex
        from: String,

        /// End vertex
        to: String,
    },

    /// Print a fewest-hops route between two vertices
    Route {
        /// Start vertex
        from: String,

        /// End vertex
        to: String,
    },

    /// Is every vertex reachable ignoring edge direction?
    Connected,

    /// Is the graph acyclic?
    Dag,

    /// Rank vertices by longest path from a source (acyclic graphs only)
    Topo,

    /// Count and list weakly connected partitions
    Partitions,

    /// Hop distance from one vertex to every other
    Distances {
        /// Source vertex
        from: String,
    },

    /// In- and out-degree distributions
    Degrees,

    /// Eulerian circuit, if one exists
    Euler,

    /// Size and structural properties at a glance
    Summary,
}

impl Cli {
    /// Tracing filter implied by `-v` flags, if any.
    #[must_use]
    pub const fn verbosity_filter(&self) -> Option<&'static str> {
        match self.verbose {
            0 => None,
            1 => Some("debug"),
            _ => Some("trace"),
        }
    }
}
