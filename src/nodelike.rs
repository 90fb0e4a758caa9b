//! Definition of the interfaces a tree has to offer for level order iteration.
//!
//! Nodes are usually cheap handles into a tree (references, `Rc`s, arena indices bundled
//! with a reference to the arena). The only thing a traversal needs from them is the
//! ordered sequence of their children.

use crate::{LevelOrderIterator, TryLevelOrderIterator};

/// A node that can produce its children.
///
/// The children are returned as an iterator over nodes of the same type. The iterator is
/// consumed lazily and it is called at most once per node during a traversal. Implementations
/// are expected to be side-effect free and to describe an acyclic structure. A node reachable
/// as its own descendant makes a traversal unbounded.
pub trait Nodelike: Sized {
    type Children: Iterator<Item = Self>;

    /// Ordered sequence of the node's children (left to right).
    fn children(&self) -> Self::Children;

    /// Lazily iterate over the subtree rooted at this node in breadth-first order.
    fn iter_breadth(self) -> LevelOrderIterator<Self> {
        LevelOrderIterator::new(self)
    }
}

/// A node whose children may fail to be produced, for instance because they are
/// loaded from a backing store.
pub trait TryNodelike: Sized {
    type Children: Iterator<Item = Self>;
    type Error;

    fn try_children(&self) -> Result<Self::Children, Self::Error>;

    /// Lazily iterate over the subtree rooted at this node in breadth-first order. Errors
    /// of [TryNodelike::try_children] are yielded once, then the iteration stops.
    fn try_iter_breadth(self) -> TryLevelOrderIterator<Self> {
        TryLevelOrderIterator::new(self)
    }
}
