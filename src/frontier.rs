//! The queue of pending node groups that drives breadth-first traversal.
//!
//! A group is either the root alone or the children of exactly one visited node. Groups are
//! stored *primed*: the next member is already pulled from the underlying iterator, so an
//! empty group cannot exist and checking for pending nodes needs no mutable access.
//! Children are only ever appended at the back and a group leaves the front once it is
//! fully consumed, which keeps the members in level order across groups.

use std::collections::VecDeque;
use std::mem;
use tracing::trace;

struct NodeGroup<I: Iterator> {
    head: I::Item,
    /// `None` for the root group
    rest: Option<I>,
    /// Depth of all members
    depth: usize,
}

impl<I: Iterator> NodeGroup<I> {
    fn singleton(node: I::Item, depth: usize) -> Self {
        NodeGroup {
            head: node,
            rest: None,
            depth,
        }
    }

    /// Returns `None` for an empty sequence of members.
    fn from_members(mut members: I, depth: usize) -> Option<Self> {
        let head = members.next()?;
        Some(NodeGroup {
            head,
            rest: Some(members),
            depth,
        })
    }

    /// Moves on to the following member and returns the previous head. `None` if the
    /// head is the last member (which is left in place).
    fn advance(&mut self) -> Option<I::Item> {
        let next = self.rest.as_mut()?.next()?;
        Some(mem::replace(&mut self.head, next))
    }
}

/// FIFO of primed node groups.
pub(crate) struct Frontier<I: Iterator> {
    groups: VecDeque<NodeGroup<I>>,
}

impl<I: Iterator> Frontier<I> {
    /// A frontier holding the root as its only group
    pub(crate) fn seeded(root: I::Item) -> Self {
        let mut groups = VecDeque::new();
        groups.push_back(NodeGroup::singleton(root, 0));
        Frontier { groups }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Number of queued groups. Each holds at least one pending node.
    pub(crate) fn len(&self) -> usize {
        self.groups.len()
    }

    /// The next node to visit without consuming it.
    pub(crate) fn front(&self) -> Option<&I::Item> {
        self.groups.front().map(|group| &group.head)
    }

    /// Consumes the next node and returns it together with its depth. The front group is
    /// dropped once its last member is taken.
    pub(crate) fn pop(&mut self) -> Option<(usize, I::Item)> {
        let group = self.groups.front_mut()?;
        let depth = group.depth;
        match group.advance() {
            Some(node) => Some((depth, node)),
            None => {
                let group = self.groups.pop_front()?;
                trace!(depth, groups = self.groups.len(), "Dequeued exhausted group");
                Some((depth, group.head))
            }
        }
    }

    /// Appends the children of a visited node. Empty sequences are not queued.
    pub(crate) fn push(&mut self, members: I, depth: usize) {
        if let Some(group) = NodeGroup::from_members(members, depth) {
            self.groups.push_back(group);
            trace!(depth, groups = self.groups.len(), "Enqueued child group");
        }
    }
}
