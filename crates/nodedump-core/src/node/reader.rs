use std::ops::Range;

/// Character-indexed view over a node descriptor.
///
/// Ranges are clamped to the descriptor length, so reads past the end
/// return a truncated or empty slice instead of failing.
pub struct DescriptorReader<'a> {
    data: &'a str,
    // Byte offset of every character start, plus `data.len()`.
    boundaries: Vec<usize>,
}

impl<'a> DescriptorReader<'a> {
    pub fn new(data: &'a str) -> Self {
        let boundaries = data
            .char_indices()
            .map(|(idx, _)| idx)
            .chain(std::iter::once(data.len()))
            .collect();
        Self { data, boundaries }
    }

    /// Number of characters in the descriptor.
    pub fn len(&self) -> usize {
        self.boundaries.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn read(&self, range: Range<usize>) -> &'a str {
        let start = self.byte_offset(range.start);
        let end = self.byte_offset(range.end);
        if start >= end {
            return "";
        }
        self.data.get(start..end).unwrap_or("")
    }

    pub fn read_owned(&self, range: Range<usize>) -> String {
        self.read(range).to_string()
    }

    /// Everything from `offset` to the end, split into `size`-character groups.
    ///
    /// The last group may be shorter; an offset at or past the end yields none.
    pub fn chunks_from(&self, offset: usize, size: usize) -> Vec<&'a str> {
        let size = size.max(1);
        (offset..self.len())
            .step_by(size)
            .map(|start| self.read(start..start + size))
            .collect()
    }

    fn byte_offset(&self, char_offset: usize) -> usize {
        self.boundaries
            .get(char_offset)
            .copied()
            .unwrap_or(self.data.len())
    }
}
