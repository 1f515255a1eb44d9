/// Where an accepted word goes. `set_token_text` and `set_token_offsets` are
/// always called together, once per token.
pub trait TokenSink {
    fn set_token_text(&mut self, text: &str);
    fn set_token_offsets(&mut self, start: usize, end: usize);
}

/// One indexable word: its surface text and its offsets into the original
/// input (UTF-8 bytes, after offset correction).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Token {
    pub text: String,
    pub start: usize,
    pub end: usize,
    /// 0-based ordinal of the token in its stream.
    pub position: usize,
}

impl Token {
    pub fn new(text: impl Into<String>, start: usize, end: usize) -> Self {
        Self {
            text: text.into(),
            start,
            end,
            position: 0,
        }
    }

    #[inline(always)]
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl TokenSink for Token {
    #[inline]
    fn set_token_text(&mut self, text: &str) {
        // Reuse the allocation across tokens
        self.text.clear();
        self.text.push_str(text);
    }

    #[inline]
    fn set_token_offsets(&mut self, start: usize, end: usize) {
        self.start = start;
        self.end = end;
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}\t{}\t{}", self.text, self.start, self.end)
    }
}
