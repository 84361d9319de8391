//! Field widths of the node descriptor, in hex characters.

use std::ops::Range;

/// Flags byte at the start of every node.
pub const HEADER_RANGE: Range<usize> = 0..2;
pub const HEADER_LEN: usize = HEADER_RANGE.end;

/// 8-byte long key.
pub const KEY_LEN: usize = 16;

/// Pointer sub-fields relative to the pointer start: type, position, chunk.
pub const POINTER_TYPE_RANGE: Range<usize> = 0..2;
pub const POINTER_POSITION_RANGE: Range<usize> = 2..18;
pub const POINTER_CHUNK_RANGE: Range<usize> = 18..26;
pub const POINTER_LEN: usize = POINTER_CHUNK_RANGE.end;

/// Key followed by a pointer; the stride of both entry loops.
pub const ENTRY_LEN: usize = KEY_LEN + POINTER_LEN;

/// Leaf entry sub-fields relative to the entry start.
pub const LEAF_KEY_RANGE: Range<usize> = 0..KEY_LEN;
pub const LEAF_POINTER_TYPE_RANGE: Range<usize> = 16..18;
pub const LEAF_POINTER_POSITION_RANGE: Range<usize> = 18..34;
pub const LEAF_POINTER_CHUNK_RANGE: Range<usize> = 34..42;

/// Previous and next sibling pointers trailing the leaf entries.
pub const LEAF_SIBLING_COUNT: usize = 2;

/// Tail characters are shown in groups of this size.
pub const TAIL_CHUNK_LEN: usize = 4;

/// Length of a leaf descriptor with `entries` entries and no tail.
pub const fn leaf_fixed_len(entries: usize) -> usize {
    HEADER_LEN + entries * ENTRY_LEN + LEAF_SIBLING_COUNT * POINTER_LEN
}

/// Length of an internal descriptor with `entries` key/child pairs and no tail.
pub const fn internal_fixed_len(entries: usize) -> usize {
    HEADER_LEN + POINTER_LEN + entries * ENTRY_LEN
}

/// Shift a relative range to an absolute offset.
pub fn at(offset: usize, range: &Range<usize>) -> Range<usize> {
    offset + range.start..offset + range.end
}
