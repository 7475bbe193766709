//! Eulerian circuits (Hierholzer).
//!
//! The circuit is grown by closing a walk from the first node, then
//! repeatedly splicing a fresh closed walk in at the earliest circuit node
//! that still has unused outgoing edges.

use std::collections::{HashMap, VecDeque};
use std::fmt;
use std::hash::Hash;

use tracing::{debug, trace};

use crate::graph::Graph;
use crate::node::NodeId;

/// Per-node queue of outgoing edges the circuit has not used yet.
type UnusedEdges = HashMap<NodeId, VecDeque<NodeId>>;

impl<T> Graph<T>
where
    T: Clone + Eq + Hash + Ord + fmt::Display,
{
    /// True iff the graph is connected and every node's in-degree equals
    /// its out-degree.
    #[must_use]
    pub fn is_eulerian(&self) -> bool {
        let balanced = self
            .live()
            .all(|(_, node)| node.in_degree() == node.out_degree());
        let eulerian = balanced && self.is_connected();
        debug!(balanced, eulerian, "eulerian check");
        eulerian
    }

    /// A closed walk using every edge exactly once, as the sequence of
    /// payloads visited. Starts and ends at the first node added.
    ///
    /// Returns `None` when the graph is not Eulerian and an empty walk for
    /// the empty graph.
    ///
    /// # Examples
    ///
    /// ```
    /// use hopgraph_engine::Graph;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let mut graph = Graph::new();
    /// for node in ["a", "b", "c"] {
    ///     graph.add_node(node)?;
    /// }
    /// graph.add_edge(&"a", &"b")?;
    /// graph.add_edge(&"b", &"c")?;
    /// graph.add_edge(&"c", &"a")?;
    ///
    /// assert_eq!(graph.eulerian_circuit(), Some(vec!["a", "b", "c", "a"]));
    /// # Ok(())
    /// # }
    /// ```
    #[must_use]
    pub fn eulerian_circuit(&self) -> Option<Vec<T>> {
        if !self.is_eulerian() {
            return None;
        }
        let Some(start) = self.ids().first().copied() else {
            return Some(Vec::new());
        };

        let mut unused: UnusedEdges = self
            .live()
            .map(|(id, node)| (id, node.outgoing().iter().copied().collect()))
            .collect();

        let mut circuit = close_walk(&mut unused, start);
        while let Some(position) = circuit
            .iter()
            .position(|id| unused.get(id).is_some_and(|edges| !edges.is_empty()))
        {
            let Some(&pivot) = circuit.get(position) else {
                break;
            };
            let detour = close_walk(&mut unused, pivot);
            trace!(position, length = detour.len(), "splicing sub-circuit");
            circuit.splice(position..=position, detour);
        }

        debug!(edges = circuit.len().saturating_sub(1), "eulerian circuit built");
        Some(
            circuit
                .into_iter()
                .filter_map(|id| self.payload(id).cloned())
                .collect(),
        )
    }
}

/// Follow unused edges out of `start` until the walk returns to `start` or
/// runs out of edges. In a balanced graph it can only get stuck at `start`.
fn close_walk(unused: &mut UnusedEdges, start: NodeId) -> Vec<NodeId> {
    let mut walk = vec![start];
    let mut current = start;

    while let Some(next) = unused.get_mut(&current).and_then(VecDeque::pop_front) {
        walk.push(next);
        if next == start {
            break;
        }
        current = next;
    }
    walk
}
