//! Degree distributions.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::hash::Hash;

use crate::graph::Graph;
use crate::node::Node;

/// Degree → payloads with that degree.
pub type DegreeDistribution<T> = BTreeMap<usize, BTreeSet<T>>;

impl<T> Graph<T>
where
    T: Clone + Eq + Hash + Ord + fmt::Display,
{
    /// Payloads grouped by number of outgoing edges.
    #[must_use]
    pub fn out_degrees(&self) -> DegreeDistribution<T> {
        self.group_by_degree(Node::out_degree)
    }

    /// Payloads grouped by number of incoming edges.
    #[must_use]
    pub fn in_degrees(&self) -> DegreeDistribution<T> {
        self.group_by_degree(Node::in_degree)
    }

    fn group_by_degree(&self, degree: impl Fn(&Node<T>) -> usize) -> DegreeDistribution<T> {
        self.live()
            .fold(DegreeDistribution::new(), |mut groups, (_, node)| {
                groups
                    .entry(degree(node))
                    .or_insert_with(BTreeSet::new)
                    .insert(node.data().clone());
                groups
            })
    }
}
