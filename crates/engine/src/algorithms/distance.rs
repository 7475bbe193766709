//! Unweighted shortest distances and routes.
//!
//! Every edge costs one hop. Distances are computed by label-correcting
//! relaxation: a node is re-expanded only when its recorded distance strictly
//! drops.

use std::collections::{BTreeMap, VecDeque};
use std::fmt;
use std::hash::Hash;

use tracing::{debug, warn};

use crate::error::GraphResult;
use crate::graph::{Graph, Scratch};
use crate::node::{NodeId, State};

/// Distance reported for nodes that cannot be reached from the source.
pub const UNREACHABLE: i64 = -1;

const INFINITY: u32 = u32::MAX;

impl<T> Graph<T>
where
    T: Clone + Eq + Hash + Ord + fmt::Display,
{
    /// Hop count from `from` to every node, [`UNREACHABLE`] where no path
    /// exists.
    ///
    /// An absent source yields an empty map.
    ///
    /// # Examples
    ///
    /// ```
    /// use hopgraph_engine::{Graph, UNREACHABLE};
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let mut graph = Graph::new();
    /// for node in ["a", "b", "c"] {
    ///     graph.add_node(node)?;
    /// }
    /// graph.add_edge(&"a", &"b")?;
    ///
    /// let distances = graph.shortest_distances(&"a");
    /// assert_eq!(distances.get(&"b"), Some(&1));
    /// assert_eq!(distances.get(&"c"), Some(&UNREACHABLE));
    /// # Ok(())
    /// # }
    /// ```
    #[must_use]
    pub fn shortest_distances(&self, from: &T) -> BTreeMap<T, i64> {
        let Some(source) = self.id_of(from) else {
            warn!(source = %from, "distance query from unknown vertex");
            return BTreeMap::new();
        };

        let _scratch = Scratch::new(self);
        self.reset(State::Distance(INFINITY));
        self.set_state(source, State::Distance(0));

        let mut stack = vec![source];
        while let Some(current) = stack.pop() {
            let candidate = self.distance_of(current).saturating_add(1);
            for &next in self.successor_ids(current) {
                if candidate < self.distance_of(next) {
                    self.set_state(next, State::Distance(candidate));
                    stack.push(next);
                }
            }
        }

        let distances: BTreeMap<T, i64> = self
            .live()
            .map(|(id, node)| {
                let distance = match self.distance_of(id) {
                    INFINITY => UNREACHABLE,
                    hops => i64::from(hops),
                };
                (node.data().clone(), distance)
            })
            .collect();
        debug!(source = %from, reached = distances.values().filter(|&&d| d != UNREACHABLE).count(), "distances computed");
        distances
    }

    /// Same as [`Graph::shortest_distances`].
    #[must_use]
    pub fn dijkstra(&self, from: &T) -> BTreeMap<T, i64> {
        self.shortest_distances(from)
    }

    /// One of the fewest-hop routes from `from` to `to`, both ends included.
    ///
    /// Returns `Ok(None)` when `to` is unreachable.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::MissingVertex`](crate::GraphError::MissingVertex)
    /// if either endpoint is absent.
    pub fn shortest_path(&self, from: &T, to: &T) -> GraphResult<Option<Vec<T>>> {
        let (source, target) = self.require_pair(from, to)?;

        let _scratch = Scratch::new(self);
        self.set_state(source, State::Visited);

        let mut queue = VecDeque::from([source]);
        while let Some(current) = queue.pop_front() {
            if current == target {
                break;
            }
            for &next in self.successor_ids(current) {
                if self.state_of(next) == State::Unset {
                    self.set_state(next, State::Predecessor(current));
                    queue.push_back(next);
                }
            }
        }

        if self.state_of(target) == State::Unset {
            debug!(from = %from, to = %to, "no route");
            return Ok(None);
        }

        let mut route = vec![target];
        let mut cursor = target;
        while let State::Predecessor(previous) = self.state_of(cursor) {
            route.push(previous);
            cursor = previous;
        }
        route.reverse();

        debug!(from = %from, to = %to, hops = route.len().saturating_sub(1), "route found");
        Ok(Some(
            route
                .into_iter()
                .filter_map(|id| self.payload(id).cloned())
                .collect(),
        ))
    }
}

impl<T> Graph<T> {
    fn distance_of(&self, id: NodeId) -> u32 {
        match self.state_of(id) {
            State::Distance(hops) => hops,
            _ => INFINITY,
        }
    }
}
