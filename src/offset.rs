//! Offset correction from tokenized-text coordinates back to the original
//! input, for when a [`crate::char_filter::CharFilter`] rewrote the text.
use smallvec::SmallVec;

pub trait OffsetCorrector {
    fn correct_offset(&self, offset: usize) -> usize;
}

/// No rewriting happened upstream.
#[derive(Debug, Clone, Copy, Default)]
pub struct Identity;

impl OffsetCorrector for Identity {
    #[inline(always)]
    fn correct_offset(&self, offset: usize) -> usize {
        offset
    }
}

/// Piecewise-constant correction map.
///
/// Each entry `(offset, diff)` says: from `offset` on (in filtered-text
/// coordinates) add `diff` to reach the original input, until the next
/// entry. Diffs are cumulative and may be negative when the filter grew the
/// text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OffsetMap {
    entries: SmallVec<[(usize, isize); 4]>,
}

impl OffsetMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that from `offset` onwards the cumulative diff is `diff`.
    /// Offsets must be added in non-decreasing order; a repeated offset
    /// replaces the previous diff.
    pub fn add(&mut self, offset: usize, diff: isize) {
        match self.entries.last_mut() {
            Some(last) if last.0 == offset => last.1 = diff,
            Some(last) if last.0 > offset => {
                debug_assert!(false, "offset map entries out of order");
            }
            _ => self.entries.push((offset, diff)),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    fn diff_at(&self, offset: usize) -> isize {
        // Last entry with entry.0 <= offset
        let idx = self.entries.partition_point(|&(o, _)| o <= offset);
        idx.checked_sub(1)
            .and_then(|i| self.entries.get(i))
            .map_or(0, |&(_, d)| d)
    }
}

impl OffsetCorrector for OffsetMap {
    #[inline]
    fn correct_offset(&self, offset: usize) -> usize {
        offset.saturating_add_signed(self.diff_at(offset))
    }
}

/// Corrections of several filters run one after another. The map of the
/// last filter is applied first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OffsetChain {
    maps: SmallVec<[OffsetMap; 2]>,
}

impl OffsetChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the map of the next filter in the chain.
    pub fn push(&mut self, map: OffsetMap) {
        if !map.is_empty() {
            self.maps.push(map);
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.maps.is_empty()
    }
}

impl OffsetCorrector for OffsetChain {
    #[inline]
    fn correct_offset(&self, offset: usize) -> usize {
        self.maps
            .iter()
            .rev()
            .fold(offset, |offset, map| map.correct_offset(offset))
    }
}

impl<T: OffsetCorrector + ?Sized> OffsetCorrector for &T {
    #[inline(always)]
    fn correct_offset(&self, offset: usize) -> usize {
        (**self).correct_offset(offset)
    }
}
