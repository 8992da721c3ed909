use std::sync::Once;

use text_rope::{Pair, Rope, RopeError};
use tracing::info;

fn setup_test_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_test_writer()
            .try_init();
    });
}

/// Appends, deletes and inserts at the front, middle and end.
fn edit_session(mut rope: Rope) -> Rope {
    rope.append("bim");
    rope.append("beloe");
    rope.append("uho");
    rope.delete(0, 1).unwrap();
    rope.insert(rope.len() / 2, " dama").unwrap();
    rope.delete(3, 5).unwrap();
    rope.insert(rope.len(), " samokat!").unwrap();
    rope.insert(0, "sobaka ").unwrap();
    rope
}

#[test]
fn rebalance_after_edit_session() {
    setup_test_logging();
    let mut rope = edit_session(Rope::new("da"));
    info!(depth = rope.depth(), leaves = rope.leaf_count(), "edited");

    assert_eq!(rope.to_text(), "sobaka abiamaloeuho samokat!");
    assert_eq!(rope.depth(), 5);
    assert_eq!(rope.leaf_count(), 7);

    rope.rebalance();
    assert_eq!(rope.to_text(), "sobaka abiamaloeuho samokat!");
    assert_eq!(rope.len(), 28);
    assert_eq!(rope.depth(), 3);
    assert_eq!(rope.leaf_count(), 7);
}

#[test]
fn split_after_edit_session() {
    setup_test_logging();
    let mut rope = Rope::new("da");
    rope.append("net");

    let Pair { left, right } = rope.clone().split(2).unwrap();
    assert_eq!(left.to_text(), "da");
    assert_eq!(right.to_text(), "net");

    let rope = edit_session(rope);
    assert_eq!(rope.to_text(), "sobaka anedamabeloeuho samokat!");

    let half = rope.len() / 2;
    let Pair { left, right } = rope.split(half).unwrap();
    assert_eq!(left.to_text(), "sobaka anedamab");
    assert_eq!(right.to_text(), "eloeuho samokat!");
}

#[test]
fn delete_then_reinsert_round_trip() {
    setup_test_logging();
    let mut rope = Rope::new("da");
    rope.append("net");
    rope.delete(1, 2).unwrap();
    assert_eq!(rope.to_text(), "det");

    rope.insert(1, "an").unwrap();
    let Pair { left, right } = rope.split(2).unwrap();
    assert_eq!(left.to_text(), "da");
    assert_eq!(right.to_text(), "net");
}

#[test]
fn delete_to_empty_and_grow_again() {
    setup_test_logging();
    let mut rope = Rope::new("da");
    rope.delete(0, 1).unwrap();
    assert_eq!(rope.to_text(), "a");
    rope.delete(0, 1).unwrap();
    assert_eq!(rope.to_text(), "");
    assert_eq!(rope.len(), 0);

    assert_eq!(rope.delete(0, 1), Err(RopeError::OutOfRange { offset: 0, size: 1, len: 0 }));

    rope.append("bim");
    rope.append("beloe");
    rope.append("uho");
    rope.delete(3, 5).unwrap();
    assert_eq!(rope.to_text(), "bimuho");
}

#[test]
fn concatenate_keeps_both_trees() {
    setup_test_logging();
    let mut left = Rope::new("sobaka");
    left.append(" da");
    let right = Rope::from(" samokat!".to_string());

    let joined = Rope::concatenate(left, right);
    assert_eq!(joined.to_string(), "sobaka da samokat!");
    assert_eq!(joined.root().weight(), 9);
    assert_eq!(joined.depth(), 2);
    assert_eq!(Rope::concatenate(joined.clone(), Rope::default()), joined);
}
