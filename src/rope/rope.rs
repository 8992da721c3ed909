use std::fmt;
use std::mem::take;

use tracing::debug;

use super::cleanup::cleanup;
use super::concat::concatenate;
use super::rebalance::rebalance;
use super::split::split;
use super::Node;
use crate::error::RopeError;

/// Two halves produced by a split.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pair<T> {
    pub left: T,
    pub right: T,
}

impl<T> Pair<T> {
    pub fn new(left: T, right: T) -> Self {
        Self { left, right }
    }

    pub fn into_tuple(self) -> (T, T) {
        (self.left, self.right)
    }
}

/// A string stored as a binary tree of text fragments.
///
/// Offsets and lengths count `char`s. Every edit is built from two
/// primitives: [`Rope::split`] and [`Rope::concatenate`]. The tree is never
/// rebalanced implicitly; call [`Rope::rebalance`] after long edit sessions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rope {
    root: Node,
}

impl Rope {
    pub fn new(text: &str) -> Self {
        Self { root: Node::new_leaf(text) }
    }

    /// Wraps an existing tree. Cached weights and depths are recomputed from
    /// the leaf text, so hand-built nodes need not get them right.
    pub fn from_node(node: Node) -> Self {
        let (node, _) = node.recount();
        Self::from_tree(node)
    }

    fn from_tree(node: Node) -> Self {
        match cleanup(node) {
            Node::Pending => Self::default(),
            root => Self { root },
        }
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    pub fn len(&self) -> usize {
        self.root.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    pub fn depth(&self) -> usize {
        self.root.depth()
    }

    pub fn leaf_count(&self) -> usize {
        self.root.leaf_count()
    }

    pub fn concatenate(left: Rope, right: Rope) -> Rope {
        Self::from_tree(concatenate(left.root, right.root))
    }

    pub fn append(&mut self, text: &str) {
        *self = Self::concatenate(take(self), Self::new(text));
    }

    /// Splits the rope into `[0, index)` and `[index, len)`.
    pub fn split(self, index: usize) -> Result<Pair<Rope>, RopeError> {
        RopeError::check(index, 0, self.len())?;
        debug!(index, len = self.len(), depth = self.depth(), "splitting rope");

        let Pair { left, right } = split(self.root, index);
        Ok(Pair::new(Self::from_tree(left), Self::from_tree(right)))
    }

    /// Keeps `[0, index)` in place and returns the rest as a new rope.
    pub fn split_off(&mut self, index: usize) -> Result<Rope, RopeError> {
        RopeError::check(index, 0, self.len())?;

        let Pair { left, right } = take(self).split(index)?;
        *self = left;
        Ok(right)
    }

    pub fn insert(&mut self, index: usize, text: &str) -> Result<(), RopeError> {
        RopeError::check(index, 0, self.len())?;

        let Pair { left, right } = take(self).split(index)?;
        let head = Self::concatenate(left, Self::new(text));
        *self = Self::concatenate(head, right);
        Ok(())
    }

    pub fn delete(&mut self, index: usize, size: usize) -> Result<(), RopeError> {
        RopeError::check(index, size, self.len())?;

        let Pair { left, right } = take(self).split(index)?;
        let Pair { left: removed, right } = right.split(size)?;
        debug!(index, size, removed = removed.len(), "deleted span");

        *self = Self::concatenate(left, right);
        Ok(())
    }

    pub fn rebalance(&mut self) {
        let before = self.depth();
        *self = Self::from_tree(rebalance(take(&mut self.root)));
        debug!(before, after = self.depth(), leaves = self.leaf_count(), "rebalanced rope");
    }

    pub fn to_text(&self) -> String {
        let mut result = String::with_capacity(self.len());
        self.root.collect_text(&mut result);
        result
    }
}

impl Default for Rope {
    fn default() -> Self {
        Self { root: Node::empty() }
    }
}

impl From<&str> for Rope {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for Rope {
    fn from(text: String) -> Self {
        Self { root: Node::leaf(text) }
    }
}

impl fmt::Display for Rope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.root, f)
    }
}
