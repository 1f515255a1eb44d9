use crate::breaker::BoundaryEngine;

/// Inputs every engine must survive: empty, ASCII, native script, digit
/// seams, separators, mixed scripts.
pub const SAMPLES: &[&str] = &[
    "",
    "a",
    "hello world",
    "ภาษาไทย",
    "๑๒๓456",
    "๑๒๓ 456",
    "abc๑๒๓",
    "สวัสดีครับ, hello! ๑๒๓",
    "กaขb",
    "...",
    "Hello 世界 русский ไทย ລາວ ខ្មែរ",
];

/// Assert that an engine satisfies the boundary contract on every input:
///
/// 1. `current()` is `Some(0)` right after `set_text`.
/// 2. `next()` is strictly increasing and ends at `text.len()`.
/// 3. Every boundary falls on a char boundary.
/// 4. `current()` reports the last value `next()` returned.
/// 5. Exhaustion is sticky: `next()` and `current()` keep returning `None`.
/// 6. `set_text` fully resets: a second pass gives the same sequence.
///
/// Failure of any contract is a bug in the engine.
pub fn assert_engine_contract<E: BoundaryEngine>(mut engine: E, samples: &[&str]) {
    for &text in samples {
        let first = walk(&mut engine, text);
        assert_eq!(first.first(), Some(&0), "no initial boundary for `{text}`");
        assert_eq!(
            first.last(),
            Some(&text.len()),
            "last boundary is not the end of `{text}`: {first:?}"
        );
        assert!(
            first.windows(2).all(|w| w[0] < w[1]),
            "boundaries not strictly increasing for `{text}`: {first:?}"
        );
        assert!(
            first.iter().all(|&b| text.is_char_boundary(b)),
            "boundary inside a character for `{text}`: {first:?}"
        );

        for _ in 0..3 {
            assert_eq!(engine.next(), None, "exhaustion not sticky for `{text}`");
            assert_eq!(engine.current(), None, "current() revived for `{text}`");
        }

        let second = walk(&mut engine, text);
        assert_eq!(first, second, "set_text did not reset for `{text}`");
    }
}

fn walk<E: BoundaryEngine>(engine: &mut E, text: &str) -> Vec<usize> {
    engine.set_text(text);
    let mut out: Vec<usize> = engine.current().into_iter().collect();
    while let Some(b) = engine.next() {
        assert_eq!(
            engine.current(),
            Some(b),
            "current() does not track next() for `{text}`"
        );
        out.push(b);
    }
    out
}
