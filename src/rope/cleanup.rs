use std::mem::take;

use super::Node;

/// Canonicalizes a subtree after a split or a graft.
///
/// Vacant children are dropped and a branch left with a single child is
/// replaced by that child, so the result contains no [`Node::Pending`] and no
/// empty leaves, except for a fully vacant input which comes back as `Pending`.
/// Surviving branches keep their boxes.
pub(crate) fn cleanup(node: Node) -> Node {
    clean(node).0
}

/// Cleans `node` and returns it with its length.
fn clean(node: Node) -> (Node, usize) {
    match node {
        Node::Branch { mut left, mut right, .. } => {
            let (cleaned, weight) = clean(take(&mut *left));
            *left = cleaned;
            let (cleaned, rest) = clean(take(&mut *right));
            *right = cleaned;

            match (left.is_vacant(), right.is_vacant()) {
                (true, true) => (Node::Pending, 0),
                (true, false) => (*right, rest),
                (false, true) => (*left, weight),
                (false, false) => {
                    let depth = left.depth().max(right.depth()) + 1;
                    (Node::Branch { left, right, weight, depth }, weight + rest)
                }
            }
        }
        leaf @ Node::Leaf { .. } if leaf.is_vacant() => (Node::Pending, 0),
        Node::Leaf { text, weight } => (Node::Leaf { text, weight }, weight),
        Node::Pending => (Node::Pending, 0),
    }
}
