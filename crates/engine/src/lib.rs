//! # hopgraph-engine
//!
//! Generic directed-graph engine.
//!
//! A [`Graph`] owns its [`Node`]s in an arena addressed by [`NodeId`] and
//! looks them up by payload equality. On top of plain construction and edge
//! bookkeeping it offers:
//!
//! - reachability ([`Graph::has_path`]) and undirected-style connectivity
//!   ([`Graph::is_connected`], [`Graph::count_partitions`])
//! - cycle detection ([`Graph::is_dag`]) and longest-path topological ranking
//!   ([`Graph::topo_sort`])
//! - hop-count distances and routes ([`Graph::shortest_distances`],
//!   [`Graph::shortest_path`])
//! - degree distributions ([`Graph::out_degrees`], [`Graph::in_degrees`])
//! - Eulerian circuits ([`Graph::eulerian_circuit`])
//!
//! Algorithms annotate nodes through a shared per-node [`State`] slot. Every
//! public algorithm resets that slot before it starts and again before it
//! returns, so [`Graph::check_state`] with [`State::Unset`] holds between
//! calls.
//!
//! # Example
//!
//! ```
//! use hopgraph_engine::Graph;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut graph = Graph::new();
//! for node in ["a", "b", "c"] {
//!     graph.add_node(node)?;
//! }
//! graph.add_edge(&"a", &"b")?;
//! graph.add_edge(&"b", &"c")?;
//! graph.add_edge(&"c", &"a")?;
//!
//! assert!(!graph.is_dag());
//! assert!(graph.is_eulerian());
//! assert_eq!(graph.to_string(), "a > b\nb > c\nc > a\n");
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![forbid(clippy::unwrap_used)]
#![forbid(clippy::panic)]
#![deny(clippy::expect_used)]

pub mod algorithms;
pub mod error;
pub mod graph;
pub mod node;

pub use algorithms::{DegreeDistribution, Ranking, UNREACHABLE};
pub use error::{GraphError, GraphResult};
pub use graph::Graph;
pub use node::{Node, NodeId, State};
