use super::Node;

/// Rebuilds `node` as a tree of minimal height over the same leaf sequence.
///
/// Leaves are bisected by count, not by character weight, so a rope with a
/// few very long leaves stays skewed in characters.
pub(crate) fn rebalance(node: Node) -> Node {
    let mut leaves = Vec::new();
    node.collect_leaves(&mut leaves);

    let count = leaves.len();
    combine(&mut leaves.into_iter(), count)
}

fn combine<I>(leaves: &mut I, count: usize) -> Node
where
    I: Iterator<Item = Node>,
{
    if count <= 1 {
        return leaves.next().unwrap_or(Node::Pending);
    }

    let middle = count / 2;
    let left = combine(leaves, middle);
    let right = combine(leaves, count - middle);
    Node::new_branch(left, right)
}
