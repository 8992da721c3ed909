use std::fmt;
use std::mem::take;

/// A node of the rope tree.
///
/// Branches always own both children. A child left behind by a split at a
/// boundary is [`Node::Pending`] until cleanup removes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Leaf {
        text: String,
        weight: usize,
    },
    Branch {
        left: Box<Node>,
        right: Box<Node>,
        weight: usize,
        depth: usize,
    },
    Pending,
}

impl Node {
    pub fn new_leaf(text: &str) -> Self {
        Self::leaf(text.to_string())
    }

    pub(crate) fn leaf(text: String) -> Self {
        Node::Leaf { weight: text.chars().count(), text }
    }

    pub(crate) fn empty() -> Self {
        Self::leaf(String::new())
    }

    /// Builds a branch over two subtrees, deriving weight and depth from them.
    pub fn new_branch(left: Self, right: Self) -> Self {
        Node::Branch {
            weight: left.len(),
            depth: left.depth().max(right.depth()) + 1,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Character count of this node's text for a leaf, of its left subtree for a branch.
    pub fn weight(&self) -> usize {
        match self {
            Node::Leaf { weight, .. } | Node::Branch { weight, .. } => *weight,
            Node::Pending => 0,
        }
    }

    /// Height of the subtree below this node; leaves are 0.
    pub fn depth(&self) -> usize {
        match self {
            Node::Branch { depth, .. } => *depth,
            Node::Leaf { .. } | Node::Pending => 0,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Node::Leaf { weight, .. } => *weight,
            Node::Branch { weight, right, .. } => weight + right.len(),
            Node::Pending => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }

    /// True for nodes that hold no text and no children.
    pub(crate) fn is_vacant(&self) -> bool {
        match self {
            Node::Pending => true,
            Node::Leaf { text, .. } => text.is_empty(),
            Node::Branch { .. } => false,
        }
    }

    pub fn text(&self) -> Option<&str> {
        match self {
            Node::Leaf { text, .. } => Some(text),
            _ => None,
        }
    }

    pub fn left(&self) -> Option<&Node> {
        match self {
            Node::Branch { left, .. } => Some(left.as_ref()),
            _ => None,
        }
    }

    pub fn right(&self) -> Option<&Node> {
        match self {
            Node::Branch { right, .. } => Some(right.as_ref()),
            _ => None,
        }
    }

    pub fn leaf_count(&self) -> usize {
        match self {
            Node::Leaf { .. } => 1,
            Node::Branch { left, right, .. } => left.leaf_count() + right.leaf_count(),
            Node::Pending => 0,
        }
    }

    pub(crate) fn collect_text(&self, result: &mut String) {
        match self {
            Node::Leaf { text, .. } => result.push_str(text),
            Node::Branch { left, right, .. } => {
                left.collect_text(result);
                right.collect_text(result);
            }
            Node::Pending => {}
        }
    }

    /// Rebuilds cached weights and depths from the text, returning the subtree length.
    pub(crate) fn recount(self) -> (Node, usize) {
        match self {
            Node::Leaf { text, .. } => {
                let leaf = Self::leaf(text);
                let len = leaf.weight();
                (leaf, len)
            }
            Node::Branch { mut left, mut right, .. } => {
                let (counted, weight) = take(&mut *left).recount();
                *left = counted;
                let (counted, rest) = take(&mut *right).recount();
                *right = counted;

                let depth = left.depth().max(right.depth()) + 1;
                (Node::Branch { left, right, weight, depth }, weight + rest)
            }
            Node::Pending => (Node::Pending, 0),
        }
    }

    fn write_text(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Leaf { text, .. } => f.write_str(text),
            Node::Branch { left, right, .. } => {
                left.write_text(f)?;
                right.write_text(f)
            }
            Node::Pending => Ok(()),
        }
    }

    /// Moves every leaf, left to right, into `leaves`.
    pub(crate) fn collect_leaves(self, leaves: &mut Vec<Node>) {
        match self {
            Node::Branch { left, right, .. } => {
                left.collect_leaves(leaves);
                right.collect_leaves(leaves);
            }
            leaf @ Node::Leaf { .. } => leaves.push(leaf),
            Node::Pending => {}
        }
    }
}

impl Default for Node {
    fn default() -> Self {
        Node::empty()
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_text(f)
    }
}
