//! # Graph container
//!
//! Arena of [`Node`]s addressed by [`NodeId`], with a payload index for
//! lookups by value. Removal leaves a tombstone in the arena so ids stay
//! stable and iteration stays in insertion order.

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use itertools::Itertools;
use tracing::debug;

use crate::error::{GraphError, GraphResult};
use crate::node::{Node, NodeId, State};

/// Directed graph over payloads of type `T`.
///
/// Payload equality is vertex identity: two payloads that compare equal
/// cannot both be present.
///
/// Every algorithm borrows the graph immutably and annotates nodes through
/// their interior-mutable state slot, so `Graph` is deliberately `!Sync`.
#[derive(Debug, Clone)]
pub struct Graph<T> {
    /// Slots are never reclaimed: removed nodes stay as `None`, so the arena
    /// grows with every `add_node` over the graph's lifetime.
    nodes: Vec<Option<Node<T>>>,
    index: HashMap<T, NodeId>,
}

impl<T> Graph<T> {
    /// Create a new empty graph
    ///
    /// # Examples
    ///
    /// ```
    /// use hopgraph_engine::Graph;
    ///
    /// let graph: Graph<&str> = Graph::new();
    /// assert_eq!(graph.size(), 0);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Number of nodes currently in the graph.
    #[must_use]
    pub fn size(&self) -> usize {
        self.index.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Number of directed edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.live().map(|(_, node)| node.out_degree()).sum()
    }

    /// Set every node's state slot to `state`.
    pub fn reset(&self, state: State) {
        self.live().for_each(|(_, node)| node.set_state(state));
    }

    /// Set every node's state slot back to [`State::Unset`].
    pub fn reset_all(&self) {
        self.reset(State::Unset);
    }

    /// True iff every node's state slot equals `state`.
    #[must_use]
    pub fn check_state(&self, state: State) -> bool {
        self.live().all(|(_, node)| node.state() == state)
    }

    /// The payload stored under `id`, if that node is still present.
    #[must_use]
    pub fn payload(&self, id: NodeId) -> Option<&T> {
        self.node(id).map(Node::data)
    }

    /// Payloads in insertion order.
    pub fn payloads(&self) -> impl Iterator<Item = &T> {
        self.live().map(|(_, node)| node.data())
    }

    /// Each payload paired with its successors, both in insertion order.
    pub fn adjacency(&self) -> impl Iterator<Item = (&T, Vec<&T>)> {
        self.live().map(|(_, node)| {
            let successors = node
                .outgoing()
                .iter()
                .filter_map(|&id| self.payload(id))
                .collect();
            (node.data(), successors)
        })
    }

    /// The node stored under `id`, if it is still present.
    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<&Node<T>> {
        self.nodes.get(id.index()).and_then(Option::as_ref)
    }

    fn node_mut(&mut self, id: NodeId) -> Option<&mut Node<T>> {
        self.nodes.get_mut(id.index()).and_then(Option::as_mut)
    }

    /// Live nodes in insertion order.
    pub(crate) fn live(&self) -> impl Iterator<Item = (NodeId, &Node<T>)> {
        self.nodes
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| slot.as_ref().map(|node| (NodeId::new(index), node)))
    }

    pub(crate) fn ids(&self) -> Vec<NodeId> {
        self.live().map(|(id, _)| id).collect()
    }

    pub(crate) fn state_of(&self, id: NodeId) -> State {
        self.node(id).map_or(State::Unset, Node::state)
    }

    pub(crate) fn set_state(&self, id: NodeId, state: State) {
        if let Some(node) = self.node(id) {
            node.set_state(state);
        }
    }

    pub(crate) fn successor_ids(&self, id: NodeId) -> &[NodeId] {
        match self.node(id) {
            Some(node) => node.outgoing(),
            None => &[],
        }
    }

    pub(crate) fn predecessor_ids(&self, id: NodeId) -> &[NodeId] {
        match self.node(id) {
            Some(node) => node.incoming(),
            None => &[],
        }
    }

    /// Neighbours across an edge in either direction.
    pub(crate) fn adjacent_ids(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.successor_ids(id)
            .iter()
            .chain(self.predecessor_ids(id))
            .copied()
    }
}

impl<T> Graph<T>
where
    T: Clone + Eq + Hash + Ord + fmt::Display,
{
    /// Add a node holding `data`
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::DuplicateVertex`] if an equal payload is already present.
    ///
    /// # Examples
    ///
    /// ```
    /// use hopgraph_engine::{Graph, GraphError};
    ///
    /// let mut graph = Graph::new();
    /// assert!(graph.add_node("a").is_ok());
    /// assert_eq!(graph.add_node("a"), Err(GraphError::DuplicateVertex("a".into())));
    /// ```
    pub fn add_node(&mut self, data: T) -> GraphResult<NodeId> {
        if self.index.contains_key(&data) {
            return Err(GraphError::duplicate_vertex(&data));
        }

        let id = NodeId::new(self.nodes.len());
        debug!(vertex = %data, %id, "adding node");
        self.index.insert(data.clone(), id);
        self.nodes.push(Some(Node::new(data)));
        Ok(id)
    }

    /// Add the directed edge `from -> to`. Adding an existing edge is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::MissingVertex`] if either endpoint is absent.
    pub fn add_edge(&mut self, from: &T, to: &T) -> GraphResult<()> {
        let (source, target) = self.require_pair(from, to)?;

        let inserted = self
            .node_mut(source)
            .is_some_and(|node| node.link_out(target));
        if inserted {
            if let Some(node) = self.node_mut(target) {
                node.link_in(source);
            }
            debug!(from = %from, to = %to, "added edge");
        }
        Ok(())
    }

    /// Remove the directed edge `from -> to`. Removing a missing edge is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::MissingVertex`] if either endpoint is absent.
    pub fn remove_edge(&mut self, from: &T, to: &T) -> GraphResult<()> {
        let (source, target) = self.require_pair(from, to)?;

        let removed = self
            .node_mut(source)
            .is_some_and(|node| node.unlink_out(target));
        if removed {
            if let Some(node) = self.node_mut(target) {
                node.unlink_in(source);
            }
            debug!(from = %from, to = %to, "removed edge");
        }
        Ok(())
    }

    /// Remove the node holding `data` along with every edge touching it.
    ///
    /// Returns whether a node was removed; an absent payload is a no-op.
    pub fn remove_node(&mut self, data: &T) -> bool {
        let Some(id) = self.index.remove(data) else {
            return false;
        };
        let Some(node) = self.nodes.get_mut(id.index()).and_then(Option::take) else {
            return false;
        };

        for &target in node.outgoing() {
            if let Some(neighbour) = self.node_mut(target) {
                neighbour.unlink_in(id);
            }
        }
        for &source in node.incoming() {
            if let Some(neighbour) = self.node_mut(source) {
                neighbour.unlink_out(id);
            }
        }

        debug!(vertex = %data, %id, "removed node");
        true
    }

    #[must_use]
    pub fn contains(&self, data: &T) -> bool {
        self.index.contains_key(data)
    }

    #[must_use]
    pub fn id_of(&self, data: &T) -> Option<NodeId> {
        self.index.get(data).copied()
    }

    /// Outgoing neighbours of `data`, in edge insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::MissingVertex`] if `data` is absent.
    pub fn successors(&self, data: &T) -> GraphResult<Vec<&T>> {
        let id = self.require(data)?;
        Ok(self.payloads_of(self.successor_ids(id)))
    }

    /// Nodes with an edge into `data`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::MissingVertex`] if `data` is absent.
    pub fn predecessors(&self, data: &T) -> GraphResult<Vec<&T>> {
        let id = self.require(data)?;
        Ok(self.payloads_of(self.predecessor_ids(id)))
    }

    pub(crate) fn require(&self, data: &T) -> GraphResult<NodeId> {
        self.id_of(data)
            .ok_or_else(|| GraphError::missing_vertex(data))
    }

    pub(crate) fn require_pair(&self, from: &T, to: &T) -> GraphResult<(NodeId, NodeId)> {
        Ok((self.require(from)?, self.require(to)?))
    }

    pub(crate) fn payloads_of(&self, ids: &[NodeId]) -> Vec<&T> {
        ids.iter().filter_map(|&id| self.payload(id)).collect()
    }
}

impl<T> Default for Graph<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// One line per node: `PAYLOAD > NEIGHBOUR NEIGHBOUR ...`.
impl<T: fmt::Display> fmt::Display for Graph<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (data, successors) in self.adjacency() {
            writeln!(f, "{} > {}", data, successors.iter().join(" "))?;
        }
        Ok(())
    }
}

/// Holds the reset protocol for one algorithm run.
///
/// Construction clears every state slot and dropping clears them again, so
/// callers never observe traversal scratch, early returns included.
pub(crate) struct Scratch<'g, T> {
    graph: &'g Graph<T>,
}

impl<'g, T> Scratch<'g, T> {
    pub(crate) fn new(graph: &'g Graph<T>) -> Self {
        graph.reset_all();
        Self { graph }
    }
}

impl<T> Drop for Scratch<'_, T> {
    fn drop(&mut self) {
        self.graph.reset_all();
    }
}
