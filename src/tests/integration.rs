#[cfg(test)]
mod integration_tests {
    use crate::{NativeScript, Token, Tokenizer, TokenizerError};

    fn texts(tokens: &[Token]) -> Vec<&str> {
        tokens.iter().map(Token::as_str).collect()
    }

    fn assert_slices_match(text: &str, tokens: &[Token]) {
        for token in tokens {
            assert_eq!(
                text.get(token.start..token.end),
                Some(token.as_str()),
                "token {token:?} does not match its offsets"
            );
        }
    }

    #[test]
    fn tokenizer_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Tokenizer>();
    }

    #[test]
    fn same_tokens_from_every_thread() {
        let tokenizer = Tokenizer::new().unwrap();
        let text = "ภาษาไทย๑๒๓456 and English";
        let expected = tokenizer.tokenize(text).unwrap();
        std::thread::scope(|s| {
            for _ in 0..4 {
                s.spawn(|| assert_eq!(tokenizer.tokenize(text).unwrap(), expected));
            }
        });
    }

    #[test]
    fn mixed_script_sentences() {
        let text = "ราคา 100 บาท. Price is 100 baht! ๑๒๓456";
        let tokens = Tokenizer::new().unwrap().tokenize(text).unwrap();
        assert_slices_match(text, &tokens);
        let all = texts(&tokens);
        for expected in ["ราคา", "100", "บาท", "Price", "is", "baht", "๑๒๓", "456"] {
            assert!(all.contains(&expected), "{expected} missing from {all:?}");
        }
        assert!(all.iter().all(|t| !t.contains(' ') && !t.contains('.')));
    }

    #[test]
    fn separated_numerals_stay_whole() {
        let tokens = Tokenizer::new().unwrap().tokenize("๑๒๓ 456").unwrap();
        assert_eq!(texts(&tokens), ["๑๒๓", "456"]);
        assert_eq!((tokens[1].start, tokens[1].end), (10, 13));
    }

    #[test]
    fn positions_count_up_from_zero() {
        let tokens = Tokenizer::new().unwrap().tokenize("a b c. d e").unwrap();
        let positions: Vec<usize> = tokens.iter().map(|t| t.position).collect();
        assert_eq!(positions, [0, 1, 2, 3, 4]);
    }

    #[test]
    fn windowing_matches_a_single_window_on_short_lines() {
        let text = ["สวัสดีครับ\n", "hello world 123\n", "๑๒๓456 ok\n"].repeat(20).concat();
        let whole = Tokenizer::new().unwrap().tokenize(&text).unwrap();
        let windowed = Tokenizer::builder()
            .buffer_capacity(64)
            .build()
            .unwrap()
            .tokenize(&text)
            .unwrap();
        assert_eq!(windowed, whole);
        assert_slices_match(&text, &windowed);
    }

    #[test]
    fn zero_width_space_separates_words() {
        let text = "hello\u{200B}world";
        let tokenizer = Tokenizer::builder()
            .strip_format_controls(true)
            .build()
            .unwrap();
        let tokens = tokenizer.tokenize(text).unwrap();
        assert_eq!(
            tokens,
            [
                Token {
                    text: "hello".into(),
                    start: 0,
                    end: 5,
                    position: 0
                },
                Token {
                    text: "world".into(),
                    start: 8,
                    end: 13,
                    position: 1
                },
            ]
        );
    }

    #[test]
    fn values_continue_offsets_and_positions() {
        let tokenizer = Tokenizer::new().unwrap();
        let tokens = tokenizer
            .tokenize_values(["๑๒๓456", "", "abc"])
            .unwrap();
        assert_eq!(texts(&tokens), ["๑๒๓", "456", "abc"]);
        // 12 + 1, then 13 + 1
        assert_eq!((tokens[2].start, tokens[2].end), (14, 17));
        assert_eq!(tokens[2].position, 2);
    }

    #[test]
    fn lao_numerals() {
        match Tokenizer::builder().script(NativeScript::Lao).build() {
            Ok(tokenizer) => {
                let tokens = tokenizer.tokenize("໑໒34").unwrap();
                assert_eq!(texts(&tokens), ["໑໒", "34"]);
            }
            Err(e) => assert_eq!(e, TokenizerError::EngineUnavailable { script: "Lao" }),
        }
    }

    #[test]
    fn every_script_builds_or_reports_itself() {
        for script in NativeScript::ALL {
            if let Err(e) = Tokenizer::builder().script(script).build() {
                assert_eq!(
                    e,
                    TokenizerError::EngineUnavailable {
                        script: script.name()
                    }
                );
                assert!(e.to_string().contains(script.name()));
            }
        }
    }
}
