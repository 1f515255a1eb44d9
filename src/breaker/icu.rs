//! ICU4X dictionary word segmentation behind the [`BoundaryEngine`] contract.
use super::{BoundaryCursor, BoundaryEngine};
use icu_segmenter::{WordSegmenter, WordSegmenterBorrowed, options::WordBreakInvariantOptions};
use std::fmt;

/// Dictionary-based word boundaries from ICU4X compiled data.
///
/// Thai, Lao, Khmer and Myanmar runs are segmented by dictionary; everything
/// else follows the UAX #29 word rules. Under those rules a run of native
/// digits followed directly by ASCII digits is a single `Numeric` word,
/// which is exactly the kind of span [`super::BoundaryCorrector`] repairs.
///
/// All boundaries of a text are computed on `set_text`; `next` is a cursor
/// step.
pub struct IcuWordEngine {
    segmenter: WordSegmenterBorrowed<'static>,
    cursor: BoundaryCursor,
}

impl IcuWordEngine {
    pub fn new() -> Self {
        Self {
            segmenter: WordSegmenter::new_dictionary(WordBreakInvariantOptions::default()),
            cursor: BoundaryCursor::default(),
        }
    }
}

impl Default for IcuWordEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for IcuWordEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IcuWordEngine")
            .field("cursor", &self.cursor)
            .finish_non_exhaustive()
    }
}

impl BoundaryEngine for IcuWordEngine {
    fn set_text(&mut self, text: &str) {
        self.cursor
            .load(self.segmenter.segment_str(text), text.len());
    }

    #[inline]
    fn current(&self) -> Option<usize> {
        self.cursor.current()
    }

    #[inline]
    fn next(&mut self) -> Option<usize> {
        self.cursor.next()
    }
}
