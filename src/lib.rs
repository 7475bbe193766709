#![forbid(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

//! # hopgraph
//!
//! Loads adjacency-list text files into a [`hopgraph_engine::Graph`] and
//! answers structural questions about them: reachability, acyclicity,
//! ranking, partitions, hop distances, degree distributions and Eulerian
//! circuits.
//!
//! ```
//! use hopgraph::loader::{LoadOptions, parse_graph};
//!
//! # fn main() -> hopgraph::Result<()> {
//! let graph = parse_graph("a > b\nb > c\nc >\n", &LoadOptions::default())?;
//! assert!(graph.is_dag());
//! assert_eq!(graph.count_partitions(), 1);
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod json;
pub mod loader;
pub mod report;
pub mod result;

pub use config::{HopgraphConfig, OutputFormat};
pub use error::Error;
pub use hopgraph_engine;
pub use report::Report;
pub use result::{Result, ResultExt};
