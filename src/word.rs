use crate::{
    breaker::{BoundaryCorrector, BoundaryEngine},
    offset::OffsetCorrector,
    script::NativeScript,
    token::TokenSink,
    tokenizer::TokenizerError,
    unicode::is_letter_or_digit,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SentenceState {
    /// No sentence supplied yet.
    Idle,
    /// Absolute bounds of the sentence being tokenized.
    Ready { start: usize, end: usize },
    /// Every word of the current sentence has been emitted.
    Exhausted,
}

/// Turns one sentence at a time into word tokens.
///
/// Words come from a [`BoundaryCorrector`] over the engine `E`; spans whose
/// first character is not a letter or digit (spaces, punctuation) are
/// skipped, and every other span is emitted with its offsets translated from
/// the sentence-local frame to the original input.
#[derive(Debug, Clone)]
pub struct WordTokenizer<E: BoundaryEngine> {
    corrector: BoundaryCorrector<E>,
    state: SentenceState,
    buffer_offset: usize,
}

impl<E: BoundaryEngine> WordTokenizer<E> {
    pub fn new(engine: E, script: NativeScript) -> Self {
        Self {
            corrector: BoundaryCorrector::new(engine, script),
            state: SentenceState::Idle,
            buffer_offset: 0,
        }
    }

    /// Base of the current buffer window within the whole input.
    #[inline]
    pub fn set_buffer_offset(&mut self, base: usize) {
        self.buffer_offset = base;
    }

    /// Start tokenizing `buffer[start..end]`.
    ///
    /// # Errors
    /// [`TokenizerError::InvalidSentence`] if the span is inverted, out of
    /// range or splits a character. The previous state is left untouched.
    pub fn on_new_sentence(
        &mut self,
        buffer: &str,
        start: usize,
        end: usize,
    ) -> Result<(), TokenizerError> {
        let text = (start <= end)
            .then(|| buffer.get(start..end))
            .flatten()
            .ok_or(TokenizerError::InvalidSentence {
                start,
                end,
                len: buffer.len(),
            })?;
        self.corrector.set_text(text);
        self.state = SentenceState::Ready { start, end };
        Ok(())
    }

    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.state == SentenceState::Exhausted
    }

    /// Emit the next word of the current sentence into `sink`.
    ///
    /// Returns `Ok(false)` once the sentence has no more words; further
    /// calls keep returning `Ok(false)` until the next
    /// [`on_new_sentence`](Self::on_new_sentence).
    ///
    /// # Errors
    /// [`TokenizerError::NoSentence`] if no sentence was ever supplied;
    /// [`TokenizerError::InvalidBoundary`] if the engine reports a boundary
    /// that is out of order, out of range or inside a character.
    pub fn advance<C, S>(&mut self, offsets: &C, sink: &mut S) -> Result<bool, TokenizerError>
    where
        C: OffsetCorrector + ?Sized,
        S: TokenSink + ?Sized,
    {
        let sentence_start = match self.state {
            SentenceState::Idle => return Err(TokenizerError::NoSentence),
            SentenceState::Exhausted => return Ok(false),
            SentenceState::Ready { start, .. } => start,
        };

        let Some(mut start) = self.corrector.current() else {
            self.state = SentenceState::Exhausted;
            return Ok(false);
        };
        let mut end = self.corrector.next();
        while let Some(e) = end {
            if self.word_span(start, e)?.starts_with(is_letter_or_digit) {
                break;
            }
            start = e;
            end = self.corrector.next();
        }
        let Some(end) = end else {
            self.state = SentenceState::Exhausted;
            return Ok(false);
        };

        let text = self.word_span(start, end)?;
        let base = self.buffer_offset + sentence_start;
        sink.set_token_text(text);
        sink.set_token_offsets(
            offsets.correct_offset(base + start),
            offsets.correct_offset(base + end),
        );
        Ok(true)
    }

    /// Sentence text between two engine boundaries.
    #[inline]
    fn word_span(&self, start: usize, end: usize) -> Result<&str, TokenizerError> {
        self.corrector
            .text()
            .get(start..end)
            .ok_or(TokenizerError::InvalidBoundary { start, end })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        breaker::{FixedBoundaries, IcuWordEngine},
        offset::{Identity, OffsetMap},
        token::Token,
    };

    const THAI: NativeScript = NativeScript::Thai;

    fn words<E: BoundaryEngine>(
        wt: &mut WordTokenizer<E>,
        buffer: &str,
        start: usize,
        end: usize,
    ) -> Vec<Token> {
        wt.on_new_sentence(buffer, start, end).unwrap();
        let mut out = Vec::new();
        let mut token = Token::default();
        while wt.advance(&Identity, &mut token).unwrap() {
            out.push(token.clone());
        }
        out
    }

    fn fixed(points: &[usize]) -> WordTokenizer<FixedBoundaries> {
        WordTokenizer::new(FixedBoundaries::new(points.to_vec()), THAI)
    }

    #[test]
    fn splits_numeral_seam() {
        let text = "๑๒๓456";
        let tokens = words(&mut fixed(&[]), text, 0, text.len());
        assert_eq!(
            tokens,
            [Token::new("๑๒๓", 0, 9), Token::new("456", 9, 12)]
        );
    }

    #[test]
    fn native_word_followed_by_ascii_digits() {
        // six Thai characters, 18 bytes
        let text = "สวัสดี123";
        assert_eq!(text.chars().count(), 9);
        let tokens = words(&mut fixed(&[]), text, 0, text.len());
        assert_eq!(
            tokens,
            [Token::new("สวัสดี", 0, 18), Token::new("123", 18, 21)]
        );
    }

    #[test]
    fn punctuation_only_sentence_yields_nothing() {
        let mut wt = fixed(&[1, 2]);
        wt.on_new_sentence("...", 0, 3).unwrap();
        let mut token = Token::default();
        assert!(!wt.advance(&Identity, &mut token).unwrap());
        assert!(wt.is_exhausted());
        assert_eq!(token, Token::default());
    }

    #[test]
    fn skips_separator_spans() {
        let text = "ab, cd!";
        let tokens = words(&mut fixed(&[2, 3, 4, 6]), text, 0, text.len());
        assert_eq!(tokens, [Token::new("ab", 0, 2), Token::new("cd", 4, 6)]);
    }

    #[test]
    fn offsets_are_absolute_and_corrected() {
        let buffer = "xx ๑๒๓456 yy";
        let mut wt = fixed(&[]);
        wt.set_buffer_offset(100);
        wt.on_new_sentence(buffer, 3, 15).unwrap();
        let mut map = OffsetMap::new();
        map.add(0, 5);
        let mut token = Token::default();
        assert!(wt.advance(&map, &mut token).unwrap());
        assert_eq!(token, Token::new("๑๒๓", 108, 117));
        assert!(wt.advance(&map, &mut token).unwrap());
        assert_eq!(token, Token::new("456", 117, 120));
        assert!(!wt.advance(&map, &mut token).unwrap());
    }

    #[test]
    fn exhaustion_is_stable_until_next_sentence() {
        let mut wt = fixed(&[]);
        wt.on_new_sentence("abc", 0, 3).unwrap();
        let mut token = Token::default();
        assert!(wt.advance(&Identity, &mut token).unwrap());
        for _ in 0..3 {
            assert!(!wt.advance(&Identity, &mut token).unwrap());
            assert_eq!(token, Token::new("abc", 0, 3));
        }
        wt.on_new_sentence("abc", 1, 3).unwrap();
        assert!(wt.advance(&Identity, &mut token).unwrap());
        assert_eq!(token, Token::new("bc", 1, 3));
    }

    #[test]
    fn advance_before_any_sentence_is_an_error() {
        let mut wt = fixed(&[]);
        let mut token = Token::default();
        assert!(matches!(
            wt.advance(&Identity, &mut token),
            Err(TokenizerError::NoSentence)
        ));
    }

    #[test]
    fn invalid_sentences_are_rejected() {
        let mut wt = fixed(&[]);
        let buffer = "ไทย";
        for (start, end) in [(2, 1), (0, 10), (1, 3)] {
            assert!(matches!(
                wt.on_new_sentence(buffer, start, end),
                Err(TokenizerError::InvalidSentence { len: 9, .. })
            ));
        }
        // still idle
        let mut token = Token::default();
        assert!(wt.advance(&Identity, &mut token).is_err());
    }

    /// Replays its list verbatim, without the checks `FixedBoundaries` does.
    struct Verbatim {
        points: Vec<usize>,
        pos: Option<usize>,
    }

    impl BoundaryEngine for Verbatim {
        fn set_text(&mut self, _text: &str) {
            self.pos = Some(0);
        }

        fn current(&self) -> Option<usize> {
            self.pos.and_then(|i| self.points.get(i).copied())
        }

        fn next(&mut self) -> Option<usize> {
            let i = self.pos? + 1;
            self.pos = self.points.get(i).map(|_| i);
            self.current()
        }
    }

    fn verbatim(points: &[usize]) -> WordTokenizer<Verbatim> {
        let engine = Verbatim {
            points: points.to_vec(),
            pos: None,
        };
        WordTokenizer::new(engine, THAI)
    }

    #[test]
    fn boundary_inside_a_character_is_an_error() {
        let mut wt = verbatim(&[0, 1, 9]);
        wt.on_new_sentence("ไทย", 0, 9).unwrap();
        let mut token = Token::default();
        assert_eq!(
            wt.advance(&Identity, &mut token),
            Err(TokenizerError::InvalidBoundary { start: 0, end: 1 })
        );
        assert_eq!(token, Token::default());
    }

    #[test]
    fn boundary_out_of_order_is_an_error() {
        let mut wt = verbatim(&[0, 5, 3, 6]);
        wt.on_new_sentence("abcdef", 0, 6).unwrap();
        let mut token = Token::default();
        assert!(wt.advance(&Identity, &mut token).unwrap());
        assert_eq!(token, Token::new("abcde", 0, 5));
        assert_eq!(
            wt.advance(&Identity, &mut token),
            Err(TokenizerError::InvalidBoundary { start: 5, end: 3 })
        );
    }

    #[test]
    fn bad_boundary_in_a_skipped_span_is_an_error() {
        let mut wt = verbatim(&[0, 1, 2, 12]);
        wt.on_new_sentence(" ๑๒๓456", 0, 13).unwrap();
        let mut token = Token::default();
        assert_eq!(
            wt.advance(&Identity, &mut token),
            Err(TokenizerError::InvalidBoundary { start: 1, end: 2 })
        );
    }

    #[test]
    fn empty_sentence() {
        assert!(words(&mut fixed(&[]), "abc", 1, 1).is_empty());
    }

    #[test]
    fn end_to_end_over_icu() {
        let text = "๑๒๓456";
        let mut wt = WordTokenizer::new(IcuWordEngine::new(), THAI);
        let tokens = words(&mut wt, text, 0, text.len());
        let texts: Vec<&str> = tokens.iter().map(Token::as_str).collect();
        assert_eq!(texts, ["๑๒๓", "456"]);
    }
}
