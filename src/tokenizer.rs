//! Whole-input tokenization: configuration, capability check, buffer
//! windows and sentence iteration around [`WordTokenizer`].
use crate::{
    breaker::{IcuWordEngine, dictionary_available},
    char_filter::{CharFilter, FormatControlFilter, apply_filters},
    offset::{OffsetChain, OffsetCorrector},
    script::NativeScript,
    sentence::SentenceSplitter,
    span::TextSpan,
    token::Token,
    window::WindowCutter,
    word::WordTokenizer,
};
use smallvec::SmallVec;
use std::{borrow::Cow, fmt, iter::FusedIterator, sync::Arc};
use thiserror::Error;

pub const DEFAULT_BUFFER_CAPACITY: usize = 4096;
/// A window must hold at least one UTF-8 scalar.
pub const MIN_BUFFER_CAPACITY: usize = 4;
pub const DEFAULT_OFFSET_GAP: usize = 1;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenizerError {
    #[error("dictionary word segmentation is unavailable for {script}")]
    EngineUnavailable { script: &'static str },

    #[error("buffer capacity {0} is below the minimum of {min} bytes", min = MIN_BUFFER_CAPACITY)]
    InvalidBufferCapacity(usize),

    #[error("invalid sentence span {start}..{end} over a buffer of {len} bytes")]
    InvalidSentence { start: usize, end: usize, len: usize },

    #[error("boundaries {start}..{end} do not delimit a slice of the text")]
    InvalidBoundary { start: usize, end: usize },

    #[error("advance called before any sentence was supplied")]
    NoSentence,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenizerConfig {
    /// Script the dictionary engine segments.
    pub script: NativeScript,
    /// Run [`FormatControlFilter`] ahead of tokenization, before any other
    /// char filter.
    pub strip_format_controls: bool,
    /// Upper bound, in bytes, of one buffer window.
    pub buffer_capacity: usize,
    /// Offset distance between consecutive values in
    /// [`Tokenizer::tokenize_values`].
    pub offset_gap: usize,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self {
            script: NativeScript::default(),
            strip_format_controls: false,
            buffer_capacity: DEFAULT_BUFFER_CAPACITY,
            offset_gap: DEFAULT_OFFSET_GAP,
        }
    }
}

/// Configured, reusable word tokenizer.
///
/// Holds no per-text state: each [`stream`](Self::stream) gets its own
/// engine, so one `Tokenizer` can be shared across threads.
///
/// ```no_run
/// use thaitok::Tokenizer;
///
/// let tokenizer = Tokenizer::new()?;
/// let words: Vec<String> = tokenizer
///     .tokenize("ราคา๑๒๓456บาท")?
///     .into_iter()
///     .map(|t| t.text)
///     .collect();
/// assert!(words.contains(&"456".to_string()));
/// # Ok::<(), thaitok::TokenizerError>(())
/// ```
#[derive(Clone)]
pub struct Tokenizer {
    config: TokenizerConfig,
    filters: Vec<Arc<dyn CharFilter>>,
}

impl Tokenizer {
    /// Thai tokenizer with default settings.
    ///
    /// # Errors
    /// [`TokenizerError::EngineUnavailable`] if no dictionary engine exists.
    pub fn new() -> Result<Self, TokenizerError> {
        Self::builder().build()
    }

    pub fn builder() -> TokenizerBuilder {
        TokenizerBuilder::default()
    }

    /// # Errors
    /// [`TokenizerError::InvalidBufferCapacity`] or
    /// [`TokenizerError::EngineUnavailable`].
    pub fn with_config(config: TokenizerConfig) -> Result<Self, TokenizerError> {
        TokenizerBuilder {
            config,
            filters: Vec::new(),
        }
        .build()
    }

    #[inline]
    pub fn config(&self) -> &TokenizerConfig {
        &self.config
    }

    /// Names of the char filters, in the order they run.
    pub fn char_filters(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.filters.iter().map(|f| f.name())
    }

    /// Pull-based token stream over `text`.
    pub fn stream<'a>(&self, text: &'a str) -> TokenStream<'a> {
        TokenStream::new(self, text, 0, 0)
    }

    /// # Errors
    /// Only on an internal invariant violation.
    pub fn tokenize(&self, text: &str) -> Result<Vec<Token>, TokenizerError> {
        self.stream(text).collect()
    }

    /// Tokenize several values of one field as a single stream: offsets of
    /// each value start `offset_gap` past the end of the previous one and
    /// positions keep counting.
    ///
    /// # Errors
    /// Only on an internal invariant violation.
    pub fn tokenize_values<'v, I>(&self, values: I) -> Result<Vec<Token>, TokenizerError>
    where
        I: IntoIterator<Item = &'v str>,
    {
        let mut tokens = Vec::new();
        let mut base = 0;
        let mut position = 0;
        for value in values {
            let mut stream = TokenStream::new(self, value, base, position);
            for token in stream.by_ref() {
                tokens.push(token?);
            }
            base = stream.end() + self.config.offset_gap;
            position = stream.position;
        }
        Ok(tokens)
    }
}

impl fmt::Debug for Tokenizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tokenizer")
            .field("config", &self.config)
            .field("char_filters", &self.char_filters().collect::<Vec<_>>())
            .finish()
    }
}

#[derive(Clone, Default)]
pub struct TokenizerBuilder {
    config: TokenizerConfig,
    filters: Vec<Arc<dyn CharFilter>>,
}

impl TokenizerBuilder {
    pub fn script(mut self, script: NativeScript) -> Self {
        self.config.script = script;
        self
    }

    pub fn strip_format_controls(mut self, strip: bool) -> Self {
        self.config.strip_format_controls = strip;
        self
    }

    /// Run `filter` over the input before tokenization. Filters run in the
    /// order they are added; token offsets always point into the unfiltered
    /// input.
    pub fn add_char_filter<F: CharFilter + 'static>(mut self, filter: F) -> Self {
        self.filters.push(Arc::new(filter));
        self
    }

    pub fn buffer_capacity(mut self, bytes: usize) -> Self {
        self.config.buffer_capacity = bytes;
        self
    }

    pub fn offset_gap(mut self, gap: usize) -> Self {
        self.config.offset_gap = gap;
        self
    }

    /// # Errors
    /// [`TokenizerError::InvalidBufferCapacity`] when the capacity cannot
    /// hold a UTF-8 scalar, [`TokenizerError::EngineUnavailable`] when no
    /// dictionary engine exists for the script.
    pub fn build(self) -> Result<Tokenizer, TokenizerError> {
        let Self { config, filters } = self;
        if config.buffer_capacity < MIN_BUFFER_CAPACITY {
            return Err(TokenizerError::InvalidBufferCapacity(config.buffer_capacity));
        }
        if !dictionary_available(config.script) {
            return Err(TokenizerError::EngineUnavailable {
                script: config.script.name(),
            });
        }
        let filters: Vec<Arc<dyn CharFilter>> = config
            .strip_format_controls
            .then(|| Arc::new(FormatControlFilter) as Arc<dyn CharFilter>)
            .into_iter()
            .chain(filters)
            .collect();
        log::debug!(
            "tokenizer ready: {config:?}, {} char filter(s)",
            filters.len()
        );
        Ok(Tokenizer { config, filters })
    }
}

impl fmt::Debug for TokenizerBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.filters.iter().map(|f| f.name()).collect();
        f.debug_struct("TokenizerBuilder")
            .field("config", &self.config)
            .field("char_filters", &names)
            .finish()
    }
}

/// Filter corrections plus the base offset of the current value.
struct ValueOffsets<'m> {
    chain: &'m OffsetChain,
    base: usize,
}

impl OffsetCorrector for ValueOffsets<'_> {
    #[inline]
    fn correct_offset(&self, offset: usize) -> usize {
        self.base + self.chain.correct_offset(offset)
    }
}

/// Tokens of one text, produced on demand.
///
/// The (filtered) text is walked in windows of at most `buffer_capacity`
/// bytes, cut by [`WindowCutter`] so that no word straddles two windows.
/// Every window is split into sentences and every sentence into words.
#[derive(Debug)]
pub struct TokenStream<'a> {
    text: Cow<'a, str>,
    offsets: OffsetChain,
    base: usize,
    capacity: usize,
    cutter: WindowCutter,
    splitter: SentenceSplitter,
    words: WordTokenizer<IcuWordEngine>,
    window: TextSpan,
    sentences: SmallVec<[TextSpan; 16]>,
    next_sentence: usize,
    in_sentence: bool,
    position: usize,
    finished: bool,
}

impl<'a> TokenStream<'a> {
    fn new(tokenizer: &Tokenizer, text: &'a str, base: usize, position: usize) -> Self {
        let config = &tokenizer.config;
        let (text, offsets) = apply_filters(&tokenizer.filters, text);
        Self {
            text,
            offsets,
            base,
            capacity: config.buffer_capacity.max(MIN_BUFFER_CAPACITY),
            cutter: WindowCutter::new(),
            splitter: SentenceSplitter::new(),
            words: WordTokenizer::new(IcuWordEngine::new(), config.script),
            window: TextSpan::default(),
            sentences: SmallVec::new(),
            next_sentence: 0,
            in_sentence: false,
            position,
            finished: false,
        }
    }

    /// Write the next token into `token`. Returns `Ok(false)` at the end of
    /// the input.
    ///
    /// # Errors
    /// Only on an internal invariant violation.
    pub fn increment_token(&mut self, token: &mut Token) -> Result<bool, TokenizerError> {
        if self.finished {
            return Ok(false);
        }
        loop {
            if self.in_sentence {
                let offsets = ValueOffsets {
                    chain: &self.offsets,
                    base: self.base,
                };
                if self.words.advance(&offsets, token)? {
                    token.position = self.position;
                    self.position += 1;
                    return Ok(true);
                }
                self.in_sentence = false;
            }

            if let Some(sentence) = self.sentences.get(self.next_sentence).copied() {
                self.next_sentence += 1;
                let window = window_text(&self.text, self.window)?;
                self.words
                    .on_new_sentence(window, sentence.start, sentence.end)?;
                self.in_sentence = true;
                continue;
            }

            if !self.refill()? {
                self.finished = true;
                return Ok(false);
            }
        }
    }

    /// Final offset: the corrected end of the input.
    pub fn end(&self) -> usize {
        self.base + self.offsets.correct_offset(self.text.len())
    }

    /// Move to the next window. `false` when the input is consumed.
    fn refill(&mut self) -> Result<bool, TokenizerError> {
        let start = self.window.end;
        if start >= self.text.len() {
            return Ok(false);
        }
        let end = self.cutter.window_end(&self.text, start, self.capacity);
        self.window = TextSpan { start, end };
        self.sentences = self.splitter.split(window_text(&self.text, self.window)?);
        self.next_sentence = 0;
        self.words.set_buffer_offset(start);
        log::trace!(
            "window {start}..{end}: {} sentence(s)",
            self.sentences.len()
        );
        Ok(true)
    }
}

#[inline]
fn window_text(text: &str, window: TextSpan) -> Result<&str, TokenizerError> {
    window.slice(text).ok_or(TokenizerError::InvalidBoundary {
        start: window.start,
        end: window.end,
    })
}

impl Iterator for TokenStream<'_> {
    type Item = Result<Token, TokenizerError>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut token = Token::default();
        match self.increment_token(&mut token) {
            Ok(true) => Some(Ok(token)),
            Ok(false) => None,
            Err(e) => {
                self.finished = true;
                Some(Err(e))
            }
        }
    }
}

impl FusedIterator for TokenStream<'_> {}
