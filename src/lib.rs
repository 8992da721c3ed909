//! A rope: a string kept as a binary tree of text fragments so that
//! insertion, deletion and splitting do not copy the whole text.
//!
//! ```
//! use text_rope::Rope;
//!
//! let mut rope = Rope::new("da");
//! rope.append("net");
//! rope.insert(0, "sobaka ").unwrap();
//! assert_eq!(rope.to_text(), "sobaka danet");
//! ```

pub mod error;
pub mod rope;

pub use self::error::RopeError;
pub use self::rope::{Node, Pair, Rope};
