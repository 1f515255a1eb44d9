//! Script-seam correction on top of a dictionary engine.
//!
//! A dictionary engine tuned for the native script does not model numerals,
//! so a single `next()` can swallow a native-digit run glued to an ASCII
//! digit run (`๑๒๓456`), or a Latin word glued to native digits
//! (`abc๑๒๓`). [`BoundaryCorrector`] rescans every span the engine reports
//! and inserts extra boundaries wherever a native character directly touches
//! a foreign letter or digit:
//!
//! ```text
//! engine:     |๑๒๓456|
//! corrected:  |๑๒๓|456|
//!
//! engine:     |๑๒๓ 456|     (space between the runs)
//! corrected:  |๑๒๓ 456|     separators suppress the split
//! ```
//!
//! Splits at separators are left to the engine. Spans made of a single
//! script are passed through untouched and nothing is queued.
use super::BoundaryEngine;
use crate::{
    script::NativeScript,
    unicode::{ScriptClass, classify, is_transition},
};
use smallvec::SmallVec;

#[derive(Debug, Clone)]
pub struct BoundaryCorrector<E: BoundaryEngine> {
    engine: E,
    script: NativeScript,
    text: String,
    // Boundaries found by the last scan, not yet consumed. Strictly
    // increasing; when non-empty the tail is the engine's current boundary.
    pending: SmallVec<[usize; 8]>,
    head: usize,
}

impl<E: BoundaryEngine> BoundaryCorrector<E> {
    pub fn new(engine: E, script: NativeScript) -> Self {
        Self {
            engine,
            script,
            text: String::new(),
            pending: SmallVec::new(),
            head: 0,
        }
    }

    /// The sentence-local text of the last `set_text`.
    #[inline(always)]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[inline(always)]
    pub fn script(&self) -> NativeScript {
        self.script
    }

    #[inline(always)]
    fn front(&self) -> Option<usize> {
        self.pending.get(self.head).copied()
    }

    #[inline]
    fn pop_front(&mut self) {
        self.head += 1;
        if self.head >= self.pending.len() {
            self.clear_pending();
        }
    }

    #[inline]
    fn clear_pending(&mut self) {
        self.pending.clear();
        self.head = 0;
    }

    /// Pull the next raw span from the engine and queue any seams inside it.
    fn scan_for_transitions(&mut self) -> Option<usize> {
        let prev = self.engine.current();
        let curr = self.engine.next();
        let (Some(start), Some(end)) = (prev, curr) else {
            return curr;
        };
        if end <= start {
            return curr;
        }
        let Some(span) = self.text.get(start..end) else {
            return curr;
        };

        let mut last = ScriptClass::Neither;
        for (i, c) in span.char_indices() {
            let class = classify(c, self.script);
            if is_transition(last, class) {
                log::trace!("script seam at {} in span {start}..{end}", start + i);
                self.pending.push(start + i);
            }
            last = class;
        }

        if self.pending.is_empty() {
            return curr;
        }
        self.pending.push(end);
        self.front()
    }
}

impl<E: BoundaryEngine> BoundaryEngine for BoundaryCorrector<E> {
    fn set_text(&mut self, text: &str) {
        self.clear_pending();
        self.text.clear();
        self.text.push_str(text);
        self.engine.set_text(text);
    }

    #[inline]
    fn current(&self) -> Option<usize> {
        self.front().or_else(|| self.engine.current())
    }

    fn next(&mut self) -> Option<usize> {
        if self.front().is_some() {
            self.pop_front();
            if let Some(b) = self.front() {
                return Some(b);
            }
        }
        self.scan_for_transitions()
    }
}
