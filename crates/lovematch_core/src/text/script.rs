//! Table-driven script classification for scoring heuristics.
//!
//! Classification is a pure lookup over code-point ranges; nothing here
//! consults locale data, so every platform sees identical letter values and
//! vowel sets.

/// Writing system of a single character, as far as scoring cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Script {
    Latin,
    LatinExtended,
    Greek,
    Cyrillic,
    Hebrew,
    Arabic,
    Devanagari,
    Hiragana,
    Katakana,
    Cjk,
    Hangul,
    Other,
}

const SCRIPT_RANGES: &[(u32, u32, Script)] = &[
    (0x0000, 0x007F, Script::Latin),
    (0x0080, 0x024F, Script::LatinExtended),
    (0x0370, 0x03FF, Script::Greek),
    (0x1F00, 0x1FFF, Script::Greek),
    (0x0400, 0x04FF, Script::Cyrillic),
    (0x0590, 0x05FF, Script::Hebrew),
    (0x0600, 0x06FF, Script::Arabic),
    (0x0900, 0x097F, Script::Devanagari),
    (0x3040, 0x309F, Script::Hiragana),
    (0x30A0, 0x30FF, Script::Katakana),
    (0x4E00, 0x9FFF, Script::Cjk),
    (0xAC00, 0xD7AF, Script::Hangul),
];

const LATIN_VOWELS: &str = "aeiouAEIOU";
const LATIN_EXTENDED_VOWELS: &str = "àáâãäåæèéêëìíîïòóôõöøùúûüýÿ\
ÀÁÂÃÄÅÆÈÉÊËÌÍÎÏÒÓÔÕÖØÙÚÛÜÝŸāēīōūǖǘǎěǐǒǔǚǜ";
const GREEK_VOWELS: &str = "αειουηωάέίόύήώΑΕΙΟΥΗΩ";
const CYRILLIC_VOWELS: &str = "аеёиоуыэюяАЕЁИОУЫЭЮЯ";
const HEBREW_VOWELS: &str = "אהוי";
const ARABIC_VOWELS: &str = "اوي";
const DEVANAGARI_VOWELS: &str = "अआइईउऊएऐओऔ";
const HIRAGANA_VOWELS: &str = "あいうえお";
const KATAKANA_VOWELS: &str = "アイウエオ";

impl Script {
    /// Classifies one character by its code point.
    pub fn of(ch: char) -> Self {
        let code = u32::from(ch);
        SCRIPT_RANGES
            .iter()
            .find(|(start, end, _)| (*start..=*end).contains(&code))
            .map(|(_, _, script)| *script)
            .unwrap_or(Script::Other)
    }

    /// Vowel characters recognised for this script; empty when the script
    /// has no vowel letters in this sense (CJK ideographs, Hangul syllables).
    pub fn vowels(self) -> &'static str {
        match self {
            Self::Latin => LATIN_VOWELS,
            Self::LatinExtended => LATIN_EXTENDED_VOWELS,
            Self::Greek => GREEK_VOWELS,
            Self::Cyrillic => CYRILLIC_VOWELS,
            Self::Hebrew => HEBREW_VOWELS,
            Self::Arabic => ARABIC_VOWELS,
            Self::Devanagari => DEVANAGARI_VOWELS,
            Self::Hiragana => HIRAGANA_VOWELS,
            Self::Katakana => KATAKANA_VOWELS,
            Self::Cjk | Self::Hangul | Self::Other => "",
        }
    }
}

/// Returns whether `ch` is a vowel in its own script.
pub fn is_vowel(ch: char) -> bool {
    Script::of(ch).vowels().contains(ch)
}

/// Maps a letter onto the 1..=26 wheel used by name metrics.
///
/// ASCII `a..=z` keep their alphabet position; every other character lands on
/// `(code point mod 26)`, with 0 folded to 26.
pub fn letter_value(ch: char) -> u32 {
    if ch.is_ascii_lowercase() {
        return u32::from(ch) - u32::from('a') + 1;
    }
    match u32::from(ch) % 26 {
        0 => 26,
        value => value,
    }
}
