//! Adjacency-list text format.
//!
//! One vertex per line:
//!
//! ```text
//! # comment
//! PAYLOAD [: fields] > [NEIGHBOUR ...]
//! ```
//!
//! Everything between `:` and `>` is free text the engine never sees. All
//! payloads are declared before any edge is added, so a line may name a
//! neighbour declared further down the file.

use std::path::Path;

use hopgraph_engine::Graph;
use tracing::debug;

use crate::config::HopgraphConfig;
use crate::error::Error;
use crate::result::Result;

/// Loader switches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadOptions {
    /// Create a vertex for a neighbour that has no line of its own.
    pub auto_declare: bool,
}

impl From<&HopgraphConfig> for LoadOptions {
    fn from(config: &HopgraphConfig) -> Self {
        Self {
            auto_declare: config.auto_declare,
        }
    }
}

/// A parsed, non-blank, non-comment line.
#[derive(Debug, PartialEq, Eq)]
struct Record<'a> {
    line: usize,
    payload: &'a str,
    neighbours: Vec<&'a str>,
}

fn parse_record(line: usize, text: &str) -> Result<Record<'_>> {
    let (head, tail) = text
        .split_once('>')
        .ok_or_else(|| Error::invalid_record(line, "missing '>' separator"))?;

    let payload = head.split_once(':').map_or(head, |(name, _fields)| name).trim();
    if payload.is_empty() {
        return Err(Error::invalid_record(line, "empty vertex name"));
    }

    Ok(Record {
        line,
        payload,
        neighbours: tail.split_whitespace().collect(),
    })
}

fn records(input: &str) -> Result<Vec<Record<'_>>> {
    input
        .lines()
        .enumerate()
        .map(|(index, text)| (index.saturating_add(1), text.trim()))
        .filter(|(_, text)| !text.is_empty() && !text.starts_with('#'))
        .map(|(line, text)| parse_record(line, text))
        .collect()
}

/// Build a graph from adjacency-list text.
///
/// # Errors
///
/// - `InvalidRecord` for a line without `>`, an empty vertex name, or (unless
///   `auto_declare` is set) a neighbour that is never declared
/// - `DuplicateVertex` when two lines declare the same vertex
pub fn parse_graph(input: &str, options: &LoadOptions) -> Result<Graph<String>> {
    let records = records(input)?;
    let mut graph = Graph::new();

    for record in &records {
        graph.add_node(record.payload.to_string())?;
    }

    for record in &records {
        let from = record.payload.to_string();
        for &neighbour in &record.neighbours {
            let to = neighbour.to_string();
            if !graph.contains(&to) {
                if !options.auto_declare {
                    return Err(Error::invalid_record(
                        record.line,
                        format!("neighbour '{neighbour}' is never declared"),
                    ));
                }
                debug!(vertex = %to, line = record.line, "Auto-declaring neighbour");
                graph.add_node(to.clone())?;
            }
            graph.add_edge(&from, &to)?;
        }
    }

    debug!(
        vertices = graph.size(),
        edges = graph.edge_count(),
        "Graph loaded"
    );
    Ok(graph)
}

/// Read and parse a graph file.
///
/// # Errors
///
/// Returns `FileReadFailed` if the file cannot be read, otherwise any error
/// from [`parse_graph`].
pub fn load_file(path: &Path, options: &LoadOptions) -> Result<Graph<String>> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| Error::file_read_failed(path, e.to_string()))?;
    parse_graph(&contents, options)
}
