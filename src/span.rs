/// Half-open `[start, end)` byte range into a caller-owned buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TextSpan {
    pub start: usize,
    pub end: usize,
}

impl TextSpan {
    #[inline(always)]
    pub const fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    #[inline(always)]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// The covered slice, or `None` if the span is out of range or splits a char.
    #[inline]
    pub fn slice<'a>(&self, text: &'a str) -> Option<&'a str> {
        text.get(self.start..self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_inverted_bounds() {
        let inverted = TextSpan { start: 3, end: 2 };
        assert_eq!(inverted.len(), 0);
        assert_eq!(inverted.slice("abcd"), None);
        let span = TextSpan { start: 2, end: 2 };
        assert!(span.is_empty());
        assert_eq!(span.len(), 0);
    }

    #[test]
    fn slice_respects_char_boundaries() {
        let text = "ไทย123";
        assert_eq!(TextSpan { start: 0, end: 9 }.slice(text), Some("ไทย"));
        assert_eq!(TextSpan { start: 9, end: 12 }.slice(text), Some("123"));
        assert_eq!(TextSpan { start: 1, end: 9 }.slice(text), None);
        assert_eq!(TextSpan { start: 9, end: 20 }.slice(text), None);
    }
}
