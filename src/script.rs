/// The unspaced "native" script the dictionary engine is tuned for.
///
/// Every script here is segmented by a dictionary in ICU4X and uses no
/// spaces between words, so a run of its letters needs the boundary engine,
/// while embedded Latin letters or ASCII digits do not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NativeScript {
    #[default]
    Thai,
    Lao,
    Khmer,
    Myanmar,
}

impl NativeScript {
    pub const ALL: [NativeScript; 4] = [Self::Thai, Self::Lao, Self::Khmer, Self::Myanmar];

    /// ISO 15924 code.
    #[inline(always)]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Thai => "Thai",
            Self::Lao => "Laoo",
            Self::Khmer => "Khmr",
            Self::Myanmar => "Mymr",
        }
    }

    #[inline(always)]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Thai => "Thai",
            Self::Lao => "Lao",
            Self::Khmer => "Khmer",
            Self::Myanmar => "Myanmar",
        }
    }

    /// Case-insensitive lookup by ISO 15924 code.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|s| s.code().eq_ignore_ascii_case(code))
    }

    #[inline(always)]
    pub(crate) const fn index(&self) -> usize {
        *self as usize
    }

    /// Block membership, not script property: native digits, marks and
    /// currency signs inside the block count as native.
    #[inline(always)]
    pub const fn contains(&self, c: char) -> bool {
        let cp = c as u32;
        match self {
            Self::Thai => matches!(cp, 0x0E00..=0x0E7F),
            Self::Lao => matches!(cp, 0x0E80..=0x0EFF),
            Self::Khmer => matches!(cp,
                0x1780..=0x17FF | // Khmer
                0x19E0..=0x19FF   // Khmer Symbols
            ),
            Self::Myanmar => matches!(cp,
                0x1000..=0x109F | // Myanmar
                0xAA60..=0xAA7F | // Myanmar Ext-A
                0xA9E0..=0xA9FF   // Myanmar Ext-B
            ),
        }
    }

    /// A short phrase a working dictionary engine must split at least once.
    pub const fn sample_phrase(&self) -> &'static str {
        match self {
            Self::Thai => "ภาษาไทย",
            Self::Lao => "ພາສາລາວ",
            Self::Khmer => "ភាសាខ្មែរ",
            Self::Myanmar => "မြန်မာဘာသာစကား",
        }
    }
}

impl std::fmt::Display for NativeScript {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
