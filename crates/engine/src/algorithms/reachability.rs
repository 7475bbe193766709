//! Reachability, connectivity and partition labelling.
//!
//! Connectivity and partitions treat edges as undirected: a node joins a
//! marked region when any edge, in either direction, links it to that region.
//! The expansion is a repeated full scan until nothing changes, which costs
//! O(V²) per region.

use std::collections::BTreeSet;
use std::fmt;
use std::hash::Hash;

use tracing::{debug, trace};

use crate::error::GraphResult;
use crate::graph::{Graph, Scratch};
use crate::node::{NodeId, State};

impl<T> Graph<T>
where
    T: Clone + Eq + Hash + Ord + fmt::Display,
{
    /// True iff `to` can be reached from `from` along directed edges.
    ///
    /// A node always reaches itself.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::MissingVertex`](crate::GraphError::MissingVertex)
    /// if either endpoint is absent.
    ///
    /// # Examples
    ///
    /// ```
    /// use hopgraph_engine::Graph;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let mut graph = Graph::new();
    /// graph.add_node("a")?;
    /// graph.add_node("b")?;
    /// graph.add_edge(&"a", &"b")?;
    ///
    /// assert!(graph.has_path(&"a", &"b")?);
    /// assert!(!graph.has_path(&"b", &"a")?);
    /// # Ok(())
    /// # }
    /// ```
    pub fn has_path(&self, from: &T, to: &T) -> GraphResult<bool> {
        let (source, target) = self.require_pair(from, to)?;
        if source == target {
            return Ok(true);
        }

        let _scratch = Scratch::new(self);
        let found = self.mark_reachable(source, Some(target));
        debug!(from = %from, to = %to, found, "path query");
        Ok(found)
    }

    /// True iff every node ends up in a single region when edges are
    /// followed in either direction. The empty graph is connected.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        let _scratch = Scratch::new(self);
        let ids = self.ids();
        let connected = ids.iter().all(|&start| {
            self.reset_all();
            self.mark_reachable(start, None);
            self.expand_region(&ids, State::Visited);
            self.check_state(State::Visited)
        });
        debug!(connected, nodes = self.size(), "connectivity check");
        connected
    }

    /// Number of regions the graph splits into when edges are followed in
    /// either direction.
    #[must_use]
    pub fn count_partitions(&self) -> usize {
        let _scratch = Scratch::new(self);
        let count = self.label_partitions();
        debug!(count, "partition count");
        count
    }

    /// Members of each region, in the order regions were discovered.
    #[must_use]
    pub fn partitions(&self) -> Vec<BTreeSet<T>> {
        let _scratch = Scratch::new(self);
        let mut groups = vec![BTreeSet::new(); self.label_partitions()];

        for (_, node) in self.live() {
            if let State::Partition(label) = node.state() {
                if let Some(group) = usize::try_from(label)
                    .ok()
                    .and_then(|label| groups.get_mut(label))
                {
                    group.insert(node.data().clone());
                }
            }
        }
        groups
    }
}

impl<T> Graph<T> {
    /// Depth-first walk from `start` marking every reached node
    /// [`State::Visited`]. Stops early and returns `true` once `goal` is
    /// reached.
    pub(crate) fn mark_reachable(&self, start: NodeId, goal: Option<NodeId>) -> bool {
        self.set_state(start, State::Visited);
        let mut stack = vec![start];

        while let Some(current) = stack.pop() {
            if goal == Some(current) {
                return true;
            }
            for &next in self.successor_ids(current) {
                if self.state_of(next) != State::Visited {
                    self.set_state(next, State::Visited);
                    stack.push(next);
                }
            }
        }
        false
    }

    /// Mark every unset node among `ids` that is adjacent to a node carrying
    /// `mark` with `mark`, rescanning until a full pass adds nothing. Returns
    /// how many nodes were added.
    pub(crate) fn expand_region(&self, ids: &[NodeId], mark: State) -> usize {
        let mut added = 0usize;

        loop {
            let mut changed = false;
            for &id in ids {
                if self.state_of(id) != State::Unset {
                    continue;
                }
                if self.adjacent_ids(id).any(|other| self.state_of(other) == mark) {
                    self.set_state(id, mark);
                    added = added.saturating_add(1);
                    changed = true;
                }
            }
            if !changed {
                break;
            }
        }

        trace!(?mark, added, "region expanded");
        added
    }

    /// Label every node with [`State::Partition`] and return the number of
    /// labels handed out. Expects all slots to start unset.
    fn label_partitions(&self) -> usize {
        let ids = self.ids();
        let mut count = 0usize;
        let mut label = 0u32;

        for &seed in &ids {
            if self.state_of(seed) != State::Unset {
                continue;
            }
            let mark = State::Partition(label);
            self.set_state(seed, mark);
            self.expand_region(&ids, mark);
            count = count.saturating_add(1);
            label = label.saturating_add(1);
        }
        count
    }
}
