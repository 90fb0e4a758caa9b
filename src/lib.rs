//! ## About
//!
//! This crate provides a lazy, pull-based breadth-first (level order) traversal over any
//! tree-shaped data structure whose nodes can produce an ordered sequence of children. It does
//! not come with a tree of its own: implement [Nodelike] (or [TryNodelike] if producing
//! children can fail) for a node handle of your tree, or pass a closure to [level_order_by].
//!
//! The traversal never flattens the tree. It keeps a queue of *node groups*, each being the
//! root or the not yet visited children of one visited node. Groups are appended in the order
//! their parents were visited, so the nodes come out level by level and left to right.
//!
//! Trees are assumed to be acyclic. This is not checked; a node that is its own descendant
//! leads to an unbounded traversal.
//!
//! See [LevelOrderIterator] to get started.
//!
//! ## Naming conventions
//! * Traits – adjectives that indicate capability and behavior
//! * Structs – substantives that indicate entities implementing a behavior
//! * Methods – imperative forms with the exception of getters and factories, which
//!             are uses substantives (i.e., omit a `get_` prefix) much like the standard library.

pub mod breadth;
pub mod errors;
mod frontier;
pub mod nodelike;

pub use breadth::{level_order_by, LevelOrderBy, LevelOrderIterator, TryLevelOrderIterator, WithDepth};
pub use errors::TraversalError;
pub use nodelike::{Nodelike, TryNodelike};
