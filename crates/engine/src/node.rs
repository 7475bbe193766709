//! Vertex storage: stable ids, the per-node state slot, and edge bookkeeping.

use std::cell::Cell;
use std::fmt;

/// Engine-assigned vertex identity.
///
/// Ids are handed out sequentially by [`Graph::add_node`](crate::Graph::add_node)
/// and are never reused, so an id held across a removal can only ever miss.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);

impl NodeId {
    pub(crate) const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Position of this node's slot in the graph arena.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Scratch annotation carried by every node.
///
/// Each algorithm gives the slot its own meaning. The public algorithm entry
/// points always leave every node at [`State::Unset`] when they return.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum State {
    #[default]
    Unset,
    Visited,
    Rank(u32),
    Distance(u32),
    Partition(u32),
    Predecessor(NodeId),
}

/// A vertex: immutable payload, outgoing and incoming edge sets, state slot.
///
/// Edge sets are kept as insertion-ordered vectors with set semantics; the
/// graph guarantees `b ∈ a.outgoing ⇔ a ∈ b.incoming`.
#[derive(Debug, Clone)]
pub struct Node<T> {
    data: T,
    outgoing: Vec<NodeId>,
    incoming: Vec<NodeId>,
    state: Cell<State>,
}

impl<T> Node<T> {
    pub(crate) const fn new(data: T) -> Self {
        Self {
            data,
            outgoing: Vec::new(),
            incoming: Vec::new(),
            state: Cell::new(State::Unset),
        }
    }

    #[must_use]
    pub const fn data(&self) -> &T {
        &self.data
    }

    /// Outgoing neighbours in the order their edges were added.
    #[must_use]
    pub fn outgoing(&self) -> &[NodeId] {
        &self.outgoing
    }

    /// Nodes with an edge pointing at this one.
    #[must_use]
    pub fn incoming(&self) -> &[NodeId] {
        &self.incoming
    }

    #[must_use]
    pub fn out_degree(&self) -> usize {
        self.outgoing.len()
    }

    #[must_use]
    pub fn in_degree(&self) -> usize {
        self.incoming.len()
    }

    #[must_use]
    pub fn state(&self) -> State {
        self.state.get()
    }

    pub(crate) fn set_state(&self, state: State) {
        self.state.set(state);
    }

    #[must_use]
    pub fn has_edge_to(&self, target: NodeId) -> bool {
        self.outgoing.contains(&target)
    }

    /// Returns `false` when the edge was already present.
    pub(crate) fn link_out(&mut self, target: NodeId) -> bool {
        if self.outgoing.contains(&target) {
            return false;
        }
        self.outgoing.push(target);
        true
    }

    pub(crate) fn link_in(&mut self, source: NodeId) {
        if !self.incoming.contains(&source) {
            self.incoming.push(source);
        }
    }

    /// Returns `false` when there was no such edge.
    pub(crate) fn unlink_out(&mut self, target: NodeId) -> bool {
        let before = self.outgoing.len();
        self.outgoing.retain(|&id| id != target);
        self.outgoing.len() != before
    }

    pub(crate) fn unlink_in(&mut self, source: NodeId) {
        self.incoming.retain(|&id| id != source);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_node_has_no_edges_and_unset_state() {
        let node = Node::new("a");
        assert_eq!(node.data(), &"a");
        assert_eq!(node.out_degree(), 0);
        assert_eq!(node.in_degree(), 0);
        assert_eq!(node.state(), State::Unset);
    }

    #[test]
    fn test_link_out_is_idempotent_and_keeps_order() {
        let mut node = Node::new(0u8);
        assert!(node.link_out(NodeId::new(3)));
        assert!(node.link_out(NodeId::new(1)));
        assert!(!node.link_out(NodeId::new(3)));
        assert_eq!(node.outgoing(), &[NodeId::new(3), NodeId::new(1)]);
    }

    #[test]
    fn test_unlink_out_reports_whether_edge_existed() {
        let mut node = Node::new(0u8);
        node.link_out(NodeId::new(2));
        assert!(node.unlink_out(NodeId::new(2)));
        assert!(!node.unlink_out(NodeId::new(2)));
        assert!(!node.has_edge_to(NodeId::new(2)));
    }

    #[test]
    fn test_state_slot_round_trips_through_cell() {
        let node = Node::new('x');
        node.set_state(State::Rank(4));
        assert_eq!(node.state(), State::Rank(4));
        node.set_state(State::Predecessor(NodeId::new(7)));
        assert_eq!(node.state(), State::Predecessor(NodeId::new(7)));
    }

    #[test]
    fn test_node_id_display() {
        assert_eq!(NodeId::new(12).to_string(), "#12");
    }
}
