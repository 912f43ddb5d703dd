use crate::CountError;

/// A sub-range `[offset, offset + len)` of a buffer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ByteRange {
    /// Index of the first byte in the range.
    pub offset: usize,
    /// Number of bytes in the range.
    pub len: usize,
}

impl ByteRange {
    /// Create a range starting at `offset` spanning `len` bytes.
    #[must_use]
    pub const fn new(offset: usize, len: usize) -> Self {
        Self { offset, len }
    }

    /// One past the last index, or `None` if it does not fit in `usize`.
    #[must_use]
    pub const fn end(self) -> Option<usize> {
        self.offset.checked_add(self.len)
    }

    /// Borrow the bytes this range covers.
    ///
    /// An empty range is valid anywhere up to and including `buf.len()`.
    ///
    /// # Errors
    ///
    /// Returns [`CountError::OutOfRange`] if the range is not contained in
    /// `buf`.
    pub fn slice(self, buf: &[u8]) -> Result<&[u8], CountError> {
        self.end()
            .and_then(|end| buf.get(self.offset..end))
            .ok_or(CountError::OutOfRange {
                offset: self.offset,
                len: self.len,
                buffer_len: buf.len(),
            })
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(0, 0, 0)]
    #[case(4, 0, 4)]
    #[case(1, 2, 4)]
    #[case(0, 4, 4)]
    fn slice_accepts_contained_ranges(#[case] offset: usize, #[case] len: usize, #[case] buf_len: usize) {
        let buf = vec![7u8; buf_len];
        let view = ByteRange::new(offset, len).slice(&buf).unwrap();
        assert_eq!(view.len(), len);
    }

    #[rstest]
    #[case(1, 0, 0)]
    #[case(5, 0, 4)]
    #[case(0, 5, 4)]
    #[case(3, 2, 4)]
    #[case(usize::MAX, 2, 4)]
    #[case(2, usize::MAX, 4)]
    fn slice_rejects_ranges_past_the_end(
        #[case] offset: usize,
        #[case] len: usize,
        #[case] buf_len: usize,
    ) {
        let buf = vec![0u8; buf_len];
        assert_eq!(
            ByteRange::new(offset, len).slice(&buf),
            Err(CountError::OutOfRange {
                offset,
                len,
                buffer_len: buf_len
            })
        );
    }

    #[test]
    fn end_reports_overflow() {
        assert_eq!(ByteRange::new(3, 4).end(), Some(7));
        assert_eq!(ByteRange::new(usize::MAX, 1).end(), None);
    }
}
