use super::cleanup::cleanup;
use super::Node;

/// Joins two trees under a fresh root and cleans the result.
pub(crate) fn concatenate(left: Node, right: Node) -> Node {
    cleanup(Node::new_branch(left, right))
}
