use tracing::trace;

use super::{Node, Pair};

/// Cuts `node` so that the left half holds characters `[0, index)` and the
/// right half holds the rest. Subtrees off the cut path move over whole.
///
/// The halves may contain [`Node::Pending`] placeholders and must be cleaned
/// before use. `index` must not exceed `node.len()`.
pub(crate) fn split(node: Node, index: usize) -> Pair<Node> {
    match node {
        Node::Leaf { text, weight } => split_leaf(text, weight, index),
        Node::Branch { left, right, weight, .. } => {
            if index < weight {
                let Pair { left: head, right: tail } = split(*left, index);
                Pair::new(head, Node::new_branch(tail, *right))
            } else {
                let Pair { left: head, right: tail } = split(*right, index - weight);
                Pair::new(Node::new_branch(*left, head), tail)
            }
        }
        Node::Pending => Pair::new(Node::Pending, Node::Pending),
    }
}

fn split_leaf(mut text: String, weight: usize, index: usize) -> Pair<Node> {
    debug_assert!(index <= weight, "split index {} past leaf of length {}", index, weight);
    trace!(index, weight, "splitting leaf");

    if index == 0 {
        return Pair::new(Node::Pending, Node::Leaf { text, weight });
    }
    if index >= weight {
        return Pair::new(Node::Leaf { text, weight }, Node::Pending);
    }

    let at = text.char_indices().nth(index).map_or(text.len(), |(at, _)| at);
    let tail = text.split_off(at);
    Pair::new(Node::Leaf { text, weight: index }, Node::Leaf { text: tail, weight: weight - index })
}
