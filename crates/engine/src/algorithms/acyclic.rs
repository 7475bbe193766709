//! Cycle detection and topological ranking.

use std::collections::{BTreeMap, BTreeSet, VecDeque};
use std::fmt;
use std::hash::Hash;

use tracing::{debug, trace};

use crate::graph::{Graph, Scratch};
use crate::node::{NodeId, State};

/// Rank → payloads holding that rank.
pub type Ranking<T> = BTreeMap<u32, BTreeSet<T>>;

impl<T> Graph<T>
where
    T: Clone + Eq + Hash + Ord + fmt::Display,
{
    /// True iff no node can reach itself through one or more edges.
    ///
    /// A self-loop counts as a cycle.
    #[must_use]
    pub fn is_dag(&self) -> bool {
        let _scratch = Scratch::new(self);
        let acyclic = self.ids().into_iter().all(|origin| {
            self.reset_all();
            let cyclic = self.loops_back(origin);
            if let Some(payload) = self.payload(origin).filter(|_| cyclic) {
                trace!(origin = %payload, "cycle through node");
            }
            !cyclic
        });
        debug!(acyclic, "acyclicity check");
        acyclic
    }

    /// Rank every node so that each edge points to a strictly higher rank.
    ///
    /// A node's rank is the length of the longest path reaching it, so all
    /// sources sit at rank 0. Returns `None` when the graph has a cycle.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::collections::BTreeSet;
    /// use hopgraph_engine::Graph;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let mut graph = Graph::new();
    /// for node in ["a", "b", "c"] {
    ///     graph.add_node(node)?;
    /// }
    /// graph.add_edge(&"a", &"b")?;
    /// graph.add_edge(&"a", &"c")?;
    ///
    /// let ranking = graph.topo_sort().ok_or("cyclic")?;
    /// assert_eq!(ranking.get(&1), Some(&BTreeSet::from(["b", "c"])));
    /// # Ok(())
    /// # }
    /// ```
    #[must_use]
    pub fn topo_sort(&self) -> Option<Ranking<T>> {
        if !self.is_dag() {
            debug!("topological ranking skipped, graph has a cycle");
            return None;
        }

        let _scratch = Scratch::new(self);
        self.reset(State::Rank(0));

        // Longest-path relaxation; terminates because there is no cycle.
        let mut queue: VecDeque<NodeId> = self.ids().into();
        while let Some(current) = queue.pop_front() {
            let rank = self.rank_of(current);
            let next_rank = rank.saturating_add(1);
            for &next in self.successor_ids(current) {
                if self.rank_of(next) <= rank {
                    self.set_state(next, State::Rank(next_rank));
                    queue.push_back(next);
                }
            }
        }

        let ranking = self.live().fold(Ranking::new(), |mut ranking, (id, node)| {
            ranking
                .entry(self.rank_of(id))
                .or_insert_with(BTreeSet::new)
                .insert(node.data().clone());
            ranking
        });
        debug!(levels = ranking.len(), "topological ranking computed");
        Some(ranking)
    }
}

impl<T> Graph<T> {
    /// True iff a walk starting along `origin`'s out-edges comes back to it.
    fn loops_back(&self, origin: NodeId) -> bool {
        let mut stack = self.successor_ids(origin).to_vec();

        while let Some(current) = stack.pop() {
            if current == origin {
                return true;
            }
            if self.state_of(current) == State::Visited {
                continue;
            }
            self.set_state(current, State::Visited);
            stack.extend(
                self.successor_ids(current)
                    .iter()
                    .filter(|&&next| self.state_of(next) != State::Visited),
            );
        }
        false
    }

    fn rank_of(&self, id: NodeId) -> u32 {
        match self.state_of(id) {
            State::Rank(rank) => rank,
            _ => 0,
        }
    }
}
