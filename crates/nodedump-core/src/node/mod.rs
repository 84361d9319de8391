//! B+tree node descriptor decoding.
//!
//! Leaf nodes store `degree - 1` entries (key plus data pointer) followed by
//! previous/next sibling pointers. Internal nodes store a first child
//! pointer followed by `degree - 1` key/child-pointer pairs. Both shapes
//! start with a one-byte flags header and end with a free-form tail.
//!
//! Widths are counted in hex characters (two per byte). The reader never
//! fails on short input; missing characters simply produce shorter fields.

pub mod error;
pub mod layout;
pub mod parser;
pub mod reader;
