//! Configuration shared by codecs: byte order and length limits.

use core::{
    fmt,
    ops::{Bound, RangeBounds},
};

/// The byte order used to lay out multi-byte numeric fields.
///
/// Structural codecs fix their byte order at construction and apply it to every
/// field they contain. The default is little-endian.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum ByteOrder {
    /// Least-significant byte first.
    #[default]
    Little,
    /// Most-significant byte first.
    Big,
}

impl fmt::Display for ByteOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Little => f.write_str("little-endian"),
            Self::Big => f.write_str("big-endian"),
        }
    }
}

/// Bounds the length of a variable-size value read from untrusted input.
///
/// # Examples
///
/// ```
/// use tessera_codec::LenRange;
///
/// let range = LenRange::new(1..=64);
/// assert!(range.contains(64));
/// assert!(!range.contains(0));
///
/// let any = LenRange::from(..);
/// assert!(any.contains(usize::MAX));
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct LenRange {
    start: Bound<usize>,
    end: Bound<usize>,
}

impl LenRange {
    /// Creates a limit from any range of lengths.
    pub fn new(r: impl RangeBounds<usize>) -> Self {
        Self {
            start: r.start_bound().cloned(),
            end: r.end_bound().cloned(),
        }
    }

    /// Accepts only `len`.
    pub fn exact(len: usize) -> Self {
        Self::new(len..=len)
    }

    /// Returns true if `len` is within the limit.
    pub fn contains(&self, len: usize) -> bool {
        let above_start = match self.start {
            Bound::Included(s) => len >= s,
            Bound::Excluded(s) => len > s,
            Bound::Unbounded => true,
        };
        let below_end = match self.end {
            Bound::Included(e) => len <= e,
            Bound::Excluded(e) => len < e,
            Bound::Unbounded => true,
        };
        above_start && below_end
    }
}

impl Default for LenRange {
    fn default() -> Self {
        Self::new(..)
    }
}

macro_rules! impl_from_range {
    ($($range:ty),*) => {
        $(
            impl From<$range> for LenRange {
                fn from(r: $range) -> Self {
                    Self::new(r)
                }
            }
        )*
    };
}

impl_from_range!(
    core::ops::Range<usize>,
    core::ops::RangeInclusive<usize>,
    core::ops::RangeFrom<usize>,
    core::ops::RangeTo<usize>,
    core::ops::RangeToInclusive<usize>,
    core::ops::RangeFull
);

impl RangeBounds<usize> for LenRange {
    fn start_bound(&self) -> Bound<&usize> {
        self.start.as_ref()
    }

    fn end_bound(&self) -> Bound<&usize> {
        self.end.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_order() {
        assert_eq!(ByteOrder::default(), ByteOrder::Little);
        assert_eq!(ByteOrder::Big.to_string(), "big-endian");
    }

    #[test]
    fn test_len_range_bounds() {
        let half_open = LenRange::new(5..10);
        assert!(!half_open.contains(4));
        assert!(half_open.contains(5));
        assert!(half_open.contains(9));
        assert!(!half_open.contains(10));

        let closed = LenRange::new(..=3);
        assert!(closed.contains(0));
        assert!(closed.contains(3));
        assert!(!closed.contains(4));

        let from = LenRange::from(2..);
        assert!(!from.contains(1));
        assert!(from.contains(usize::MAX));

        let exact = LenRange::exact(7);
        assert!(exact.contains(7));
        assert!(!exact.contains(6));
        assert!(!exact.contains(8));
    }

    #[test]
    fn test_len_range_default_is_unbounded() {
        let range = LenRange::default();
        assert!(range.contains(0));
        assert!(range.contains(u16::MAX as usize));
        assert_eq!(range.start_bound(), Bound::Unbounded);
        assert_eq!(range.end_bound(), Bound::Unbounded);
    }

    #[test]
    fn test_len_range_empty() {
        #[allow(clippy::reversed_empty_ranges)]
        let empty = LenRange::new(6..=5);
        assert!(!empty.contains(5));
        assert!(!empty.contains(6));
    }
}
