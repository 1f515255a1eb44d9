use crate::{
    offset::{OffsetChain, OffsetMap},
    unicode::{contains_format_controls, is_format_control, zwsp},
};
use std::{borrow::Cow, sync::Arc};

/// Text rewritten ahead of tokenization, with the map that takes offsets in
/// the rewritten text back to the original.
#[derive(Debug, Clone)]
pub struct Filtered<'a> {
    pub text: Cow<'a, str>,
    pub offsets: OffsetMap,
}

impl<'a> Filtered<'a> {
    /// Untouched input: borrowed text, empty map.
    #[inline]
    pub fn unchanged(text: &'a str) -> Self {
        Self {
            text: Cow::Borrowed(text),
            offsets: OffsetMap::new(),
        }
    }
}

/// A pre-tokenization rewrite step.
pub trait CharFilter: Send + Sync {
    /// Human-readable name, used in logs.
    fn name(&self) -> &'static str;

    /// Fast pre-check. Returning `false` means `apply` would return the input
    /// unchanged and may be skipped.
    fn needs_apply(&self, text: &str) -> bool;

    /// Allocation-aware transformation. Must always be correct, even when
    /// `needs_apply` would have returned `false`.
    fn apply<'a>(&self, text: &'a str) -> Filtered<'a>;
}

/// Run `filters` in order. Returns the final text and the chain of offset
/// corrections; borrows `text` when no filter changed it.
pub fn apply_filters<'a>(
    filters: &[Arc<dyn CharFilter>],
    text: &'a str,
) -> (Cow<'a, str>, OffsetChain) {
    let mut current = Cow::Borrowed(text);
    let mut chain = OffsetChain::new();
    for filter in filters {
        if !filter.needs_apply(&current) {
            continue;
        }
        let rewritten = match filter.apply(&current) {
            Filtered {
                text: Cow::Owned(out),
                offsets,
            } => Some((out, offsets)),
            Filtered {
                text: Cow::Borrowed(_),
                ..
            } => None,
        };
        if let Some((out, offsets)) = rewritten {
            log::trace!("{}: {} -> {} bytes", filter.name(), current.len(), out.len());
            current = Cow::Owned(out);
            chain.push(offsets);
        }
    }
    (current, chain)
}

/// Rewrite Unicode format controls (General Category `Cf`) ahead of
/// segmentation.
///
/// Thai writers and editors use ZERO WIDTH SPACE as an invisible word break,
/// so it becomes a plain space and still separates words. Every other
/// format control is removed:
/// - ZWNJ, ZWJ, word joiner and invisible operators
/// - Bidirectional marks, embeddings, overrides and isolates
/// - Byte Order Mark (BOM U+FEFF)
///
/// Zero-copy when clean. Offsets of tokens found in the rewritten text are
/// mapped back onto the original input.
#[derive(Debug, Default, Clone, Copy)]
pub struct FormatControlFilter;

impl CharFilter for FormatControlFilter {
    fn name(&self) -> &'static str {
        "format_controls"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str) -> bool {
        contains_format_controls(text)
    }

    fn apply<'a>(&self, text: &'a str) -> Filtered<'a> {
        if !self.needs_apply(text) {
            return Filtered::unchanged(text);
        }

        let mut out = String::with_capacity(text.len());
        let mut offsets = OffsetMap::new();
        let mut diff = 0isize;
        for c in text.chars() {
            if !is_format_control(c) {
                out.push(c);
                continue;
            }
            let removed = if c == zwsp() {
                out.push(' ');
                c.len_utf8() - 1
            } else {
                c.len_utf8()
            };
            // Format controls are 3 bytes in UTF-8; never overflows
            diff += removed as isize;
            offsets.add(out.len(), diff);
        }
        log::trace!(
            "{}: {} -> {} bytes, {} corrections",
            self.name(),
            text.len(),
            out.len(),
            offsets.len()
        );
        Filtered {
            text: Cow::Owned(out),
            offsets,
        }
    }
}
