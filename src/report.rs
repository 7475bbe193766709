//! Command results and their text/JSON renderings.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt::{self, Write as _};

use hopgraph_engine::UNREACHABLE;
use itertools::Itertools;
use serde::Serialize;

use crate::config::OutputFormat;
use crate::error::Error;
use crate::json::{JsonSerializable, JsonSuccess};
use crate::result::Result;

/// One vertex and its successors, in insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Adjacency {
    pub vertex: String,
    pub successors: Vec<String>,
}

/// The answer to one command.
///
/// Questions without an answer (no ranking for a cyclic graph, no circuit
/// for a non-Eulerian one) carry `None` rather than failing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "command", rename_all = "lowercase")]
pub enum Report {
    Show {
        adjacency: Vec<Adjacency>,
    },
    Path {
        from: String,
        to: String,
        reachable: bool,
    },
    Route {
        from: String,
        to: String,
        route: Option<Vec<String>>,
    },
    Connected {
        connected: bool,
    },
    Dag {
        dag: bool,
    },
    Topo {
        ranks: Option<BTreeMap<u32, BTreeSet<String>>>,
    },
    Partitions {
        count: usize,
        partitions: Vec<BTreeSet<String>>,
    },
    Distances {
        from: String,
        distances: BTreeMap<String, i64>,
    },
    Degrees {
        out_degrees: BTreeMap<usize, BTreeSet<String>>,
        in_degrees: BTreeMap<usize, BTreeSet<String>>,
    },
    Euler {
        eulerian: bool,
        circuit: Option<Vec<String>>,
    },
    Summary {
        vertices: usize,
        edges: usize,
        connected: bool,
        dag: bool,
        partitions: usize,
        eulerian: bool,
    },
}

fn yes_no(flag: bool) -> &'static str {
    if flag { "yes" } else { "no" }
}

fn joined(members: &BTreeSet<String>) -> String {
    members.iter().join(" ")
}

fn write_distribution(
    out: &mut String,
    label: &str,
    distribution: &BTreeMap<usize, BTreeSet<String>>,
) -> fmt::Result {
    writeln!(out, "{label}:")?;
    for (degree, members) in distribution {
        writeln!(out, "  {degree}: {}", joined(members))?;
    }
    Ok(())
}

impl Report {
    /// Human-readable lines, each terminated by a newline.
    ///
    /// # Errors
    ///
    /// Returns `RenderFailed` if formatting a line fails.
    pub fn render_text(&self) -> Result<String> {
        let mut out = String::new();
        self.write_text(&mut out)
            .map_err(|e| Error::render_failed(e.to_string()))?;
        Ok(out)
    }

    fn write_text(&self, out: &mut String) -> fmt::Result {
        match self {
            Self::Show { adjacency } => {
                for entry in adjacency {
                    writeln!(out, "{} > {}", entry.vertex, entry.successors.iter().join(" "))?;
                }
            }
            Self::Path { from, to, reachable } => {
                writeln!(out, "{from} -> {to}: {}", yes_no(*reachable))?;
            }
            Self::Route { route, .. } => match route {
                Some(steps) => writeln!(out, "{}", steps.iter().join(" -> "))?,
                None => writeln!(out, "none")?,
            },
            Self::Connected { connected } => writeln!(out, "{}", yes_no(*connected))?,
            Self::Dag { dag } => writeln!(out, "{}", yes_no(*dag))?,
            Self::Topo { ranks } => match ranks {
                Some(ranks) => {
                    for (rank, members) in ranks {
                        writeln!(out, "{rank}: {}", joined(members))?;
                    }
                }
                None => writeln!(out, "none")?,
            },
            Self::Partitions { count, partitions } => {
                writeln!(out, "{count}")?;
                for members in partitions {
                    writeln!(out, "  {}", joined(members))?;
                }
            }
            Self::Distances { distances, .. } => {
                for (vertex, &hops) in distances {
                    if hops == UNREACHABLE {
                        writeln!(out, "{vertex}: unreachable")?;
                    } else {
                        writeln!(out, "{vertex}: {hops}")?;
                    }
                }
            }
            Self::Degrees {
                out_degrees,
                in_degrees,
            } => {
                write_distribution(out, "out", out_degrees)?;
                write_distribution(out, "in", in_degrees)?;
            }
            Self::Euler { circuit, .. } => match circuit {
                Some(steps) => writeln!(out, "{}", steps.iter().join(" "))?,
                None => writeln!(out, "none")?,
            },
            Self::Summary {
                vertices,
                edges,
                connected,
                dag,
                partitions,
                eulerian,
            } => {
                writeln!(out, "vertices: {vertices}")?;
                writeln!(out, "edges: {edges}")?;
                writeln!(out, "connected: {}", yes_no(*connected))?;
                writeln!(out, "dag: {}", yes_no(*dag))?;
                writeln!(out, "partitions: {partitions}")?;
                writeln!(out, "eulerian: {}", yes_no(*eulerian))?;
            }
        }
        Ok(())
    }

    /// Pretty JSON wrapped in the standard success envelope.
    ///
    /// # Errors
    ///
    /// Returns `JsonSerializeFailed` if serialization fails.
    pub fn render_json(&self) -> Result<String> {
        JsonSuccess::new(self).to_json()
    }

    /// Render in the requested format.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`Report::render_text`] or
    /// [`Report::render_json`].
    pub fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Text => self.render_text(),
            OutputFormat::Json => self.render_json().map(|json| format!("{json}\n")),
        }
    }
}
