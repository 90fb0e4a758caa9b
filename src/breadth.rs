//! Breadth-first (level order) traversal implementations.
//!
//! All iterators in this module are lazy: a node's children are requested right after the
//! node has been yielded and the child sequence is kept as a single pending group rather than
//! being collected. Memory is thus bounded by the width of the traversal front, never by
//! the size of the tree.

use crate::{frontier::Frontier, Nodelike, TraversalError, TryNodelike};
use std::iter::FusedIterator;
use tracing::{debug, trace};
use tracing_attributes::instrument;

/// Iterator that visits all nodes of a tree in breadth-first order: all nodes at depth *d*
/// before any node at depth *d+1*, nodes of equal depth left to right.
///
/// ```
/// use levelorder::{LevelOrderIterator, Nodelike};
///
/// struct Node(u32, Vec<Node>);
///
/// impl<'a> Nodelike for &'a Node {
///     type Children = std::slice::Iter<'a, Node>;
///
///     fn children(&self) -> Self::Children {
///         self.1.iter()
///     }
/// }
///
/// let tree = Node(0, vec![Node(1, vec![Node(3, vec![])]), Node(2, vec![])]);
/// let loads: Vec<u32> = LevelOrderIterator::new(&tree).map(|n| n.0).collect();
/// assert_eq!(loads, [0, 1, 2, 3]);
/// ```
pub struct LevelOrderIterator<N: Nodelike> {
    frontier: Frontier<N::Children>,
}

impl<N: Nodelike> LevelOrderIterator<N> {
    #[instrument(level = "trace", skip_all)]
    pub fn new(root: N) -> Self {
        trace!("Seeding frontier with the root");
        LevelOrderIterator {
            frontier: Frontier::seeded(root),
        }
    }

    /// Constructor for a root that may be missing. Fails with [TraversalError::RootNotSet]
    /// if there is none.
    pub fn try_new(root: Option<N>) -> Result<Self, TraversalError> {
        root.map(Self::new).ok_or(TraversalError::RootNotSet)
    }

    /// Whether there are nodes left to visit. Does not advance the iterator.
    pub fn has_more(&self) -> bool {
        !self.frontier.is_empty()
    }

    /// The next node in level order, or [TraversalError::Exhausted] once all nodes have
    /// been visited. See also [Iterator::next].
    pub fn next_node(&mut self) -> Result<N, TraversalError> {
        self.advance()
            .map(|(_, node)| node)
            .ok_or(TraversalError::Exhausted)
    }

    /// Number of node groups (the root or the children of a visited node) waiting to be visited.
    pub fn pending_groups(&self) -> usize {
        self.frontier.len()
    }

    /// Turns this into an iterator that also yields the depth of each node (the root has depth 0).
    pub fn with_depth(self) -> WithDepth<N> {
        WithDepth(self)
    }

    fn advance(&mut self) -> Option<(usize, N)> {
        let children = self.frontier.front()?.children();
        let (depth, node) = self.frontier.pop()?;
        self.frontier.push(children, depth + 1);
        if self.frontier.is_empty() {
            debug!(depth, "Level order traversal exhausted");
        }
        Some((depth, node))
    }
}

impl<N: Nodelike> Iterator for LevelOrderIterator<N> {
    type Item = N;

    fn next(&mut self) -> Option<Self::Item> {
        self.advance().map(|(_, node)| node)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // every pending group holds at least one node
        (self.frontier.len(), None)
    }
}

impl<N: Nodelike> FusedIterator for LevelOrderIterator<N> {}

/// Level order iteration that yields `(depth, node)` pairs. Obtained from
/// [LevelOrderIterator::with_depth].
pub struct WithDepth<N: Nodelike>(LevelOrderIterator<N>);

impl<N: Nodelike> WithDepth<N> {
    pub fn has_more(&self) -> bool {
        self.0.has_more()
    }
}

impl<N: Nodelike> Iterator for WithDepth<N> {
    type Item = (usize, N);

    fn next(&mut self) -> Option<Self::Item> {
        self.0.advance()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<N: Nodelike> FusedIterator for WithDepth<N> {}

/// Breadth-first iterator over a tree whose children can fail to be produced.
///
/// The error of the node in question is yielded unchanged and halts the iteration: the failing
/// node stays unconsumed at the front of the queue and all further calls return `None`.
pub struct TryLevelOrderIterator<N: TryNodelike> {
    frontier: Frontier<N::Children>,
    halted: bool,
}

impl<N: TryNodelike> TryLevelOrderIterator<N> {
    #[instrument(level = "trace", skip_all)]
    pub fn new(root: N) -> Self {
        trace!("Seeding frontier with the root");
        TryLevelOrderIterator {
            frontier: Frontier::seeded(root),
            halted: false,
        }
    }

    pub fn try_new(root: Option<N>) -> Result<Self, TraversalError<N::Error>> {
        root.map(Self::new).ok_or(TraversalError::RootNotSet)
    }

    /// Whether there are nodes left to visit. `false` after a failure.
    pub fn has_more(&self) -> bool {
        !self.halted && !self.frontier.is_empty()
    }

    /// Whether the iteration stopped because children could not be produced
    pub fn is_halted(&self) -> bool {
        self.halted
    }

    /// The next node in level order. A failure of the child capability is returned as
    /// [TraversalError::Children]; afterwards, and after the last node, the result is
    /// [TraversalError::Exhausted].
    pub fn next_node(&mut self) -> Result<N, TraversalError<N::Error>> {
        match self.advance() {
            Some(Ok(node)) => Ok(node),
            Some(Err(error)) => Err(TraversalError::Children(error)),
            None => Err(TraversalError::Exhausted),
        }
    }

    pub fn pending_groups(&self) -> usize {
        self.frontier.len()
    }

    fn advance(&mut self) -> Option<Result<N, N::Error>> {
        if self.halted {
            return None;
        }
        // Children are requested before the front moves such that a failure leaves the
        // queue untouched
        let children = self.frontier.front()?.try_children();
        let children = match children {
            Ok(children) => children,
            Err(error) => {
                self.halted = true;
                debug!(
                    groups = self.frontier.len(),
                    "Halting level order traversal: children could not be produced"
                );
                return Some(Err(error));
            }
        };
        let (depth, node) = self.frontier.pop()?;
        self.frontier.push(children, depth + 1);
        if self.frontier.is_empty() {
            debug!(depth, "Level order traversal exhausted");
        }
        Some(Ok(node))
    }
}

impl<N: TryNodelike> Iterator for TryLevelOrderIterator<N> {
    type Item = Result<N, N::Error>;

    fn next(&mut self) -> Option<Self::Item> {
        self.advance()
    }
}

impl<N: TryNodelike> FusedIterator for TryLevelOrderIterator<N> {}

/// Breadth-first iterator for node types that do not implement [Nodelike]. The children of
/// a node are produced by a function. Obtained from [level_order_by].
pub struct LevelOrderBy<N, F, I>
where
    F: FnMut(&N) -> I,
    I: IntoIterator<Item = N>,
{
    frontier: Frontier<I::IntoIter>,
    children: F,
}

/// Lazily iterate over the tree rooted at `root` in breadth-first order, with `children`
/// producing the ordered children of a node.
///
/// ```
/// use levelorder::level_order_by;
///
/// // complete binary tree with 7 nodes, stored as a heap
/// let order: Vec<usize> = level_order_by(0, |&i| (2 * i + 1..=2 * i + 2).filter(|&c| c < 7)).collect();
/// assert_eq!(order, [0, 1, 2, 3, 4, 5, 6]);
/// ```
pub fn level_order_by<N, F, I>(root: N, children: F) -> LevelOrderBy<N, F, I>
where
    F: FnMut(&N) -> I,
    I: IntoIterator<Item = N>,
{
    LevelOrderBy {
        frontier: Frontier::seeded(root),
        children,
    }
}

impl<N, F, I> LevelOrderBy<N, F, I>
where
    F: FnMut(&N) -> I,
    I: IntoIterator<Item = N>,
{
    pub fn has_more(&self) -> bool {
        !self.frontier.is_empty()
    }
}

impl<N, F, I> Iterator for LevelOrderBy<N, F, I>
where
    F: FnMut(&N) -> I,
    I: IntoIterator<Item = N>,
{
    type Item = N;

    fn next(&mut self) -> Option<Self::Item> {
        let children = (self.children)(self.frontier.front()?).into_iter();
        let (depth, node) = self.frontier.pop()?;
        self.frontier.push(children, depth + 1);
        Some(node)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.frontier.len(), None)
    }
}

impl<N, F, I> FusedIterator for LevelOrderBy<N, F, I>
where
    F: FnMut(&N) -> I,
    I: IntoIterator<Item = N>,
{
}
