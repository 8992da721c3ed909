mod cleanup;
mod concat;
mod node;
mod rebalance;
mod rope;
mod split;

pub use self::node::Node;
pub use self::rope::{Pair, Rope};
