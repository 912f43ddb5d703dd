//! Splits a range into an unaligned head, an aligned body of whole chunks and
//! a short tail.

use crate::reference;

#[derive(Debug, Clone, Copy)]
pub(crate) struct Zones<'a> {
    pub(crate) head: &'a [u8],
    /// Starts on an `align` boundary; length is a multiple of `chunk`.
    pub(crate) body: &'a [u8],
    pub(crate) tail: &'a [u8],
}

impl<'a> Zones<'a> {
    /// `align` must be a power of two.
    #[inline]
    pub(crate) fn split(haystack: &'a [u8], align: usize, chunk: usize) -> Self {
        debug_assert!(align.is_power_of_two());
        debug_assert!(chunk > 0 && chunk % align == 0);

        // `align_offset` may answer `usize::MAX`; the whole range is head then.
        let head_len = haystack.as_ptr().align_offset(align).min(haystack.len());
        let (head, rest) = haystack.split_at(head_len);
        let body_len = rest.len() - rest.len() % chunk;
        let (body, tail) = rest.split_at(body_len);
        Self { head, body, tail }
    }

    /// Matches in the head and tail, counted with the scalar loop.
    #[inline]
    pub(crate) fn count_edges(&self, target: u8) -> usize {
        reference::count(self.head, target) + reference::count(self.tail, target)
    }
}
