//! Provides the error type used throughout this crate.

use std::convert::Infallible;
use thiserror::Error;

/// Errors raised by the level order iterators.
///
/// `E` is the error type of a fallible child capability ([crate::TryNodelike]).
/// It defaults to [Infallible] for trees whose children can always be produced.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum TraversalError<E = Infallible> {
    /// An iterator was requested without a root node.
    #[error("No root node set")]
    RootNotSet,
    /// A node was requested after the traversal finished (or halted).
    #[error("Iterator is exhausted")]
    Exhausted,
    /// The collaborator failed to produce the children of a node.
    #[error("Could not produce children: {0}")]
    Children(#[source] E),
}
