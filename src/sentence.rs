use crate::span::TextSpan;
use icu_segmenter::{
    SentenceSegmenter, SentenceSegmenterBorrowed, options::SentenceBreakInvariantOptions,
};
use smallvec::SmallVec;
use std::fmt;

/// UAX #29 sentence spans over a buffer window.
///
/// Spans are contiguous, non-empty, and together cover the whole window, so
/// every character reaches the word tokenizer exactly once.
pub struct SentenceSplitter {
    segmenter: SentenceSegmenterBorrowed<'static>,
}

impl SentenceSplitter {
    pub fn new() -> Self {
        Self {
            segmenter: SentenceSegmenter::new(SentenceBreakInvariantOptions::default()),
        }
    }

    /// Sentence spans of `text`, relative to `text`.
    pub fn split(&self, text: &str) -> SmallVec<[TextSpan; 16]> {
        let mut spans = SmallVec::new();
        let mut prev = 0;
        for b in self.segmenter.segment_str(text) {
            if b > prev && b <= text.len() {
                spans.push(TextSpan { start: prev, end: b });
                prev = b;
            }
        }
        if prev < text.len() {
            spans.push(TextSpan {
                start: prev,
                end: text.len(),
            });
        }
        spans
    }
}

impl Default for SentenceSplitter {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for SentenceSplitter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SentenceSplitter").finish_non_exhaustive()
    }
}
