//! Test trees used by the integration tests.
#![allow(dead_code)]

use levelorder::{Nodelike, TryNodelike};
use std::slice;
use thiserror::Error;

/// Owned tree node carrying a load
#[derive(Debug, Clone, PartialEq)]
pub struct TreeNode<T> {
    pub load: T,
    pub children: Vec<TreeNode<T>>,
}

impl<T> TreeNode<T> {
    pub fn new(load: T, children: Vec<TreeNode<T>>) -> Self {
        TreeNode { load, children }
    }

    pub fn leaf(load: T) -> Self {
        TreeNode::new(load, vec![])
    }

    /// Number of nodes in the subtree
    pub fn size(&self) -> usize {
        1 + self.children.iter().map(TreeNode::size).sum::<usize>()
    }
}

impl<'a, T> Nodelike for &'a TreeNode<T> {
    type Children = slice::Iter<'a, TreeNode<T>>;

    fn children(&self) -> Self::Children {
        let node: &'a TreeNode<T> = self;
        node.children.iter()
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Children of {0} are not available")]
pub struct Unavailable(pub &'static str);

/// Node whose children cannot be produced if its load is `poisoned`
#[derive(Debug, Clone, Copy)]
pub struct Fallible<'a> {
    pub node: &'a TreeNode<&'static str>,
    pub poisoned: &'static str,
}

pub struct FallibleChildren<'a> {
    children: slice::Iter<'a, TreeNode<&'static str>>,
    poisoned: &'static str,
}

impl<'a> Iterator for FallibleChildren<'a> {
    type Item = Fallible<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let poisoned = self.poisoned;
        self.children.next().map(|node| Fallible { node, poisoned })
    }
}

impl<'a> TryNodelike for Fallible<'a> {
    type Children = FallibleChildren<'a>;
    type Error = Unavailable;

    fn try_children(&self) -> Result<Self::Children, Self::Error> {
        if self.node.load == self.poisoned {
            return Err(Unavailable(self.poisoned));
        }
        Ok(FallibleChildren {
            children: self.node.children.iter(),
            poisoned: self.poisoned,
        })
    }
}

// Layout of the tree
//        root
//       /    \
//     c1      c2
//    /  \
//  g1    g2
pub fn scenario_tree() -> TreeNode<&'static str> {
    TreeNode::new(
        "root",
        vec![
            TreeNode::new("c1", vec![TreeNode::leaf("g1"), TreeNode::leaf("g2")]),
            TreeNode::leaf("c2"),
        ],
    )
}
