use crate::script::NativeScript;

/// Per-character class used to find script seams inside one engine span.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[repr(u8)]
pub enum ScriptClass {
    Native,             // Inside the native script's block(s)
    OtherLetterOrDigit, // Latin, ASCII digits, Cyrillic, Han, ...
    Neither,            // Whitespace, punctuation, symbols
}

#[inline(always)]
pub fn classify(c: char, script: NativeScript) -> ScriptClass {
    // Fast path: ASCII is never native
    if c.is_ascii() {
        return if c.is_ascii_alphanumeric() {
            ScriptClass::OtherLetterOrDigit
        } else {
            ScriptClass::Neither
        };
    }
    if script.contains(c) {
        return ScriptClass::Native;
    }
    if c.is_alphanumeric() {
        ScriptClass::OtherLetterOrDigit
    } else {
        ScriptClass::Neither
    }
}

/// A seam between two classified runs. `Neither` never takes part.
#[inline(always)]
pub fn is_transition(prev: ScriptClass, curr: ScriptClass) -> bool {
    matches!(
        (prev, curr),
        (ScriptClass::Native, ScriptClass::OtherLetterOrDigit)
            | (ScriptClass::OtherLetterOrDigit, ScriptClass::Native)
    )
}

/// Letter or digit by general category; spans that start otherwise are separators.
#[inline(always)]
pub fn is_letter_or_digit(c: char) -> bool {
    c.is_alphanumeric()
}

#[inline(always)]
pub const fn is_format_control(c: char) -> bool {
    let cp = c as u32;

    // Early exit: 99.9% of characters are outside this range
    if cp < 0x200B || cp > 0xFEFF {
        return false;
    }

    matches!(cp,
        0x200B..=0x200F |
        0x202A..=0x202E |
        0x2060..=0x2064 |
        0x2066..=0x2069 |
        0x206A..=0x206F |
        0xFEFF
    )
}

#[inline]
pub fn contains_format_controls(text: &str) -> bool {
    text.chars().any(is_format_control)
}

#[inline(always)]
pub fn zwsp() -> char {
    '\u{200B}'
}

/// Characters after which a buffer window may be cut without splitting a
/// sentence: hard line and paragraph breaks.
#[inline(always)]
pub const fn is_safe_end(c: char) -> bool {
    matches!(
        c as u32,
        0x000D | // CR
        0x000A | // LF
        0x0085 | // NEL
        0x2028 | // LINE SEPARATOR
        0x2029 // PARAGRAPH SEPARATOR
    )
}
