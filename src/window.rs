//! Where to cut the input into buffer windows.
use crate::{
    breaker::{BoundaryEngine, IcuWordEngine},
    sentence::SentenceSplitter,
    unicode::is_safe_end,
};
use icu_segmenter::{GraphemeClusterSegmenter, GraphemeClusterSegmenterBorrowed};
use std::fmt;

/// Bytes past the capacity limit shown to the segmenters, so the sentence
/// or word around the cut is seen whole.
const CUT_LOOKAHEAD: usize = 96;

/// Picks window ends that never split a word the engines would keep whole.
///
/// Preference, latest candidate within the capacity first:
/// 1. after a line or paragraph break
/// 2. a sentence boundary
/// 3. after whitespace
/// 4. a word boundary
/// 5. a grapheme cluster boundary
/// 6. a char boundary
pub struct WindowCutter {
    sentences: SentenceSplitter,
    words: IcuWordEngine,
    graphemes: GraphemeClusterSegmenterBorrowed<'static>,
}

impl WindowCutter {
    pub fn new() -> Self {
        Self {
            sentences: SentenceSplitter::new(),
            words: IcuWordEngine::new(),
            graphemes: GraphemeClusterSegmenter::new(),
        }
    }

    /// End of the window of at most `capacity` bytes starting at `start`.
    /// Always past `start` when `start < text.len()`.
    pub fn window_end(&mut self, text: &str, start: usize, capacity: usize) -> usize {
        let limit = start.saturating_add(capacity);
        if limit >= text.len() {
            return text.len();
        }
        let cut = floor_char_boundary(text, limit);
        if cut <= start {
            // one character wider than the capacity
            return text
                .get(start..)
                .and_then(|rest| rest.chars().next())
                .map_or(text.len(), |c| start + c.len_utf8());
        }
        let Some(window) = text.get(start..cut) else {
            return cut;
        };
        if let Some(end) = last_safe_end(window) {
            return start + end;
        }

        let context_end = floor_char_boundary(text, limit.saturating_add(CUT_LOOKAHEAD));
        let context = text.get(start..context_end).unwrap_or(window);
        let local = self
            .last_sentence_end(context, window.len())
            .or_else(|| last_whitespace_end(window))
            .or_else(|| self.last_word_boundary(context, window.len()))
            .or_else(|| self.last_grapheme_boundary(context, window.len()));
        match local {
            Some(end) => start + end,
            None => {
                log::debug!("window {start}..{cut} cut inside a grapheme cluster");
                cut
            }
        }
    }

    fn last_sentence_end(&self, context: &str, cut: usize) -> Option<usize> {
        self.sentences
            .split(context)
            .iter()
            .map(|s| s.end)
            .filter(|&end| end <= cut)
            .last()
    }

    fn last_word_boundary(&mut self, context: &str, cut: usize) -> Option<usize> {
        self.words.set_text(context);
        let words = &mut self.words;
        std::iter::from_fn(|| words.next())
            .take_while(|&b| b <= cut)
            .last()
    }

    fn last_grapheme_boundary(&self, context: &str, cut: usize) -> Option<usize> {
        self.graphemes
            .segment_str(context)
            .filter(|&b| b > 0)
            .take_while(|&b| b <= cut)
            .last()
    }
}

impl Default for WindowCutter {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for WindowCutter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WindowCutter").finish_non_exhaustive()
    }
}

/// Largest char boundary `<= at`, clamped to the text.
fn floor_char_boundary(text: &str, at: usize) -> usize {
    let mut at = at.min(text.len());
    while !text.is_char_boundary(at) {
        at -= 1;
    }
    at
}

fn last_safe_end(window: &str) -> Option<usize> {
    window
        .char_indices()
        .rev()
        .find(|&(_, c)| is_safe_end(c))
        .map(|(i, c)| i + c.len_utf8())
}

fn last_whitespace_end(window: &str) -> Option<usize> {
    window
        .char_indices()
        .rev()
        .find(|&(_, c)| c.is_whitespace())
        .map(|(i, c)| i + c.len_utf8())
}
