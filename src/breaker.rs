//! Word boundary engines.
//!
//! A [`BoundaryEngine`] walks the boundaries of one piece of text, one call
//! at a time, the way a dictionary break iterator does:
//!
//! * `set_text` positions the engine at offset `0` of a new text.
//! * `current` reports the last boundary returned (initially `Some(0)`).
//! * `next` advances and returns the following boundary, or `None` once the
//!   text is exhausted. `None` is sticky until the next `set_text`.
//!
//! Boundaries are UTF-8 byte offsets into the text, strictly increasing, and
//! the last one is `text.len()`.
//!
//! [`IcuWordEngine`] is the production engine. [`BoundaryCorrector`] wraps any
//! engine and splits its spans further at native/foreign script seams; it
//! honours the same contract, so it can stand in wherever an engine is
//! expected. [`FixedBoundaries`] replays boundaries computed elsewhere.

pub mod corrector;
pub mod icu;

pub use corrector::BoundaryCorrector;
pub use icu::IcuWordEngine;

use crate::script::NativeScript;
use smallvec::SmallVec;
use std::sync::OnceLock;

pub trait BoundaryEngine {
    /// Reset the engine onto `text`, positioned at its start.
    fn set_text(&mut self, text: &str);

    /// The most recently returned boundary. Never advances.
    fn current(&self) -> Option<usize>;

    /// Advance to the next boundary. `None` means exhausted.
    fn next(&mut self) -> Option<usize>;
}

/// Cursor over a precomputed, sorted boundary list.
///
/// Shared by [`IcuWordEngine`] (which fills it from ICU4X) and
/// [`FixedBoundaries`] (which fills it from the caller).
#[derive(Debug, Clone, Default)]
pub(crate) struct BoundaryCursor {
    points: SmallVec<[usize; 32]>,
    // `None` once exhausted
    pos: Option<usize>,
}

impl BoundaryCursor {
    /// Load `points` for a text of `len` bytes. The list is clamped to
    /// `[0, len]`, made strictly increasing and framed by `0` and `len`.
    pub(crate) fn load(&mut self, points: impl IntoIterator<Item = usize>, len: usize) {
        self.points.clear();
        self.points.push(0);
        for p in points {
            if p > len {
                break;
            }
            if self.points.last().is_some_and(|&last| p > last) {
                self.points.push(p);
            }
        }
        if self.points.last() != Some(&len) {
            self.points.push(len);
        }
        self.pos = Some(0);
    }

    #[inline]
    pub(crate) fn current(&self) -> Option<usize> {
        self.pos.and_then(|i| self.points.get(i).copied())
    }

    #[inline]
    pub(crate) fn next(&mut self) -> Option<usize> {
        let i = self.pos? + 1;
        match self.points.get(i) {
            Some(&p) => {
                self.pos = Some(i);
                Some(p)
            }
            None => {
                self.pos = None;
                None
            }
        }
    }
}

/// An engine that replays a fixed boundary list on every `set_text`.
///
/// Useful when a segmentation was produced upstream (an external
/// dictionary, a cached analysis) and only needs correcting and emitting.
/// Boundaries beyond the current text or inside a character are dropped;
/// `0` and `text.len()` are always reported.
#[derive(Debug, Clone, Default)]
pub struct FixedBoundaries {
    boundaries: Vec<usize>,
    cursor: BoundaryCursor,
}

impl FixedBoundaries {
    pub fn new(boundaries: impl Into<Vec<usize>>) -> Self {
        let mut boundaries = boundaries.into();
        boundaries.sort_unstable();
        boundaries.dedup();
        Self {
            boundaries,
            cursor: BoundaryCursor::default(),
        }
    }
}

impl BoundaryEngine for FixedBoundaries {
    fn set_text(&mut self, text: &str) {
        let points = self
            .boundaries
            .iter()
            .copied()
            .filter(|&p| text.is_char_boundary(p));
        self.cursor.load(points, text.len());
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

static AVAILABLE: [OnceLock<bool>; NativeScript::ALL.len()] =
    [const { OnceLock::new() }; NativeScript::ALL.len()];

/// Whether a working dictionary engine exists for `script`.
///
/// Checked once per script per process; later calls return the cached answer.
pub fn dictionary_available(script: NativeScript) -> bool {
    *AVAILABLE[script.index()].get_or_init(|| {
        let ok = splits_sample(script);
        if ok {
            log::debug!("dictionary word segmentation available for {script}");
        } else {
            log::warn!("dictionary word segmentation unavailable for {script}");
        }
        ok
    })
}

fn splits_sample(script: NativeScript) -> bool {
    let sample = script.sample_phrase();
    let mut engine = IcuWordEngine::new();
    engine.set_text(sample);
    std::iter::from_fn(|| engine.next()).any(|b| b > 0 && b < sample.len())
}
