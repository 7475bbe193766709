//! CLI command handlers.
//!
//! Every handler is a pure query over a loaded graph and returns a
//! [`Report`]; rendering and printing happen in the binary.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

use hopgraph_engine::{Graph, GraphError};
use tracing::debug;

use crate::cli::Commands;
use crate::report::{Adjacency, Report};
use crate::result::Result;

/// Execute a CLI command against `graph`.
///
/// # Errors
///
/// Returns `MissingVertex` when a command names a vertex the graph does not
/// contain.
pub fn execute(command: &Commands, graph: &Graph<String>) -> Result<Report> {
    debug!(?command, "Executing command");
    match command {
        Commands::Show => Ok(cmd_show(graph)),
        Commands::Path { from, to } => cmd_path(graph, from, to),
        Commands::Route { from, to } => cmd_route(graph, from, to),
        Commands::Connected => Ok(Report::Connected {
            connected: graph.is_connected(),
        }),
        Commands::Dag => Ok(Report::Dag {
            dag: graph.is_dag(),
        }),
        Commands::Topo => Ok(Report::Topo {
            ranks: graph.topo_sort(),
        }),
        Commands::Partitions => Ok(cmd_partitions(graph)),
        Commands::Distances { from } => cmd_distances(graph, from),
        Commands::Degrees => Ok(Report::Degrees {
            out_degrees: graph.out_degrees(),
            in_degrees: graph.in_degrees(),
        }),
        Commands::Euler => Ok(cmd_euler(graph)),
        Commands::Summary => Ok(cmd_summary(graph)),
    }
}

fn cmd_show(graph: &Graph<String>) -> Report {
    let adjacency = graph
        .adjacency()
        .map(|(vertex, successors)| Adjacency {
            vertex: vertex.clone(),
            successors: successors.into_iter().cloned().collect(),
        })
        .collect();
    Report::Show { adjacency }
}

fn cmd_path(graph: &Graph<String>, from: &str, to: &str) -> Result<Report> {
    let (from, to) = (from.to_string(), to.to_string());
    let reachable = graph.has_path(&from, &to)?;
    Ok(Report::Path {
        from,
        to,
        reachable,
    })
}

fn cmd_route(graph: &Graph<String>, from: &str, to: &str) -> Result<Report> {
    let (from, to) = (from.to_string(), to.to_string());
    let route = graph.shortest_path(&from, &to)?;
    Ok(Report::Route { from, to, route })
}

fn cmd_partitions(graph: &Graph<String>) -> Report {
    let partitions = graph.partitions();
    Report::Partitions {
        count: partitions.len(),
        partitions,
    }
}

fn cmd_distances(graph: &Graph<String>, from: &str) -> Result<Report> {
    let from = from.to_string();
    if !graph.contains(&from) {
        return Err(GraphError::missing_vertex(&from).into());
    }
    let distances = graph.shortest_distances(&from);
    Ok(Report::Distances { from, distances })
}

fn cmd_euler(graph: &Graph<String>) -> Report {
    let circuit = graph.eulerian_circuit();
    Report::Euler {
        eulerian: circuit.is_some(),
        circuit,
    }
}

fn cmd_summary(graph: &Graph<String>) -> Report {
    Report::Summary {
        vertices: graph.size(),
        edges: graph.edge_count(),
        connected: graph.is_connected(),
        dag: graph.is_dag(),
        partitions: graph.count_partitions(),
        eulerian: graph.is_eulerian(),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::loader::{LoadOptions, parse_graph};

    fn triangle() -> Graph<String> {
        parse_graph("a > b\nb > c\nc > a\n", &LoadOptions::default()).unwrap()
    }

    #[test]
    fn test_route_on_triangle() {
        let report = execute(
            &Commands::Route {
                from: "a".to_string(),
                to: "c".to_string(),
            },
            &triangle(),
        )
        .unwrap();
        assert_eq!(report.render_text().unwrap(), "a -> b -> c\n");
    }

    #[test]
    fn test_topo_on_cycle_is_none() {
        let report = execute(&Commands::Topo, &triangle()).unwrap();
        assert_eq!(report, Report::Topo { ranks: None });
    }

    #[test]
    fn test_distances_unknown_source_is_missing_vertex() {
        let err = execute(
            &Commands::Distances {
                from: "z".to_string(),
            },
            &triangle(),
        )
        .unwrap_err();
        assert!(matches!(err, Error::Graph(GraphError::MissingVertex(ref v)) if v == "z"));
    }

    #[test]
    fn test_euler_on_triangle() {
        let report = execute(&Commands::Euler, &triangle()).unwrap();
        assert_eq!(report.render_text().unwrap(), "a b c a\n");
    }

    #[test]
    fn test_show_lists_every_vertex() {
        let report = execute(&Commands::Show, &triangle()).unwrap();
        assert_eq!(report.render_text().unwrap(), "a > b\nb > c\nc > a\n");
    }

    #[test]
    fn test_show_after_removal_lists_only_survivors() {
        let mut graph = triangle();
        graph.remove_node(&"b".to_string());
        let report = execute(&Commands::Show, &graph).unwrap();
        assert_eq!(
            report,
            Report::Show {
                adjacency: vec![
                    Adjacency {
                        vertex: "a".to_string(),
                        successors: vec![],
                    },
                    Adjacency {
                        vertex: "c".to_string(),
                        successors: vec!["a".to_string()],
                    },
                ],
            }
        );
    }
}
