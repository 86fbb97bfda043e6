use unicode_normalization::UnicodeNormalization;

const SOFT_HYPHEN: char = '\u{ad}';

/// Transliteration table used to turn a word into a URL path segment.
///
/// Sites disagree on capitalization of the digraph for uppercase umlauts and
/// a wrong guess 404s silently, so the tables are kept separate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    /// Duden's URL scheme, including its irregular `Ö -> OE`
    Duden,
    /// DIN 5007-2 transliteration: uppercase umlauts keep an uppercase `E`.
    ///
    /// No source uses it; Duden URLs need [`Dialect::Duden`].
    Din5007,
}

const DUDEN: &[(char, &str)] = &[
    ('Ü', "Ue"),
    ('Ä', "Ae"),
    ('Ö', "OE"),
    ('ü', "ue"),
    ('ä', "ae"),
    ('ö', "oe"),
    ('ß', "ss"),
];

const DIN_5007: &[(char, &str)] = &[
    ('Ü', "UE"),
    ('Ä', "AE"),
    ('Ö', "OE"),
    ('ü', "ue"),
    ('ä', "ae"),
    ('ö', "oe"),
    ('ß', "ss"),
];

impl Dialect {
    fn table(self) -> &'static [(char, &'static str)] {
        match self {
            Dialect::Duden => DUDEN,
            Dialect::Din5007 => DIN_5007,
        }
    }

    fn substitute(self, c: char) -> Option<&'static str> {
        self.table()
            .iter()
            .find(|(from, _)| *from == c)
            .map(|(_, to)| *to)
    }
}

/// Canonical, ASCII-transliterated form of a word for the given dialect.
///
/// Soft hyphens go first so they cannot block composition, and the result is
/// composed and trimmed once more so that normalizing twice changes nothing.
pub fn normalize(word: &str, dialect: Dialect) -> String {
    let composed: String = word.chars().filter(|c| *c != SOFT_HYPHEN).nfc().collect();

    let mut out = String::with_capacity(composed.len());
    for c in composed.chars() {
        match dialect.substitute(c) {
            Some(replacement) => out.push_str(replacement),
            None => out.push(c),
        }
    }

    out.nfc().collect::<String>().trim().to_string()
}
