//! Character-level normalization steps.
//!
//! All of these are total over any input: characters that cannot be
//! represented are dropped, never reported.

use regex::Regex;
use std::sync::OnceLock;
use unicode_normalization::UnicodeNormalization;

/// Lowercase the text.
pub fn lowercase(text: &str) -> String {
    text.to_lowercase()
}

/// Turkish lowercasing: dotless capital I maps to dotless small ı first.
pub fn turkish_lowercase(text: &str) -> String {
    text.replace('I', "ı").to_lowercase()
}

/// Collapse runs of whitespace into a single space.
pub fn collapse_whitespace(text: &str) -> String {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(r"\s+").expect("Invalid regex pattern"));
    re.replace_all(text, " ").into_owned()
}

/// Transliterate to ASCII.
///
/// Applies compatibility decomposition, then keeps the ASCII part: accents
/// fall away from their base letters and symbols without an ASCII form are
/// removed.
pub fn convert_to_ascii(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.nfkd() {
        if c.is_ascii() {
            result.push(c);
            continue;
        }
        let ascii = match c {
            'ß' => "ss",
            'æ' => "ae",
            'Æ' => "AE",
            'œ' => "oe",
            'Œ' => "OE",
            'ø' => "o",
            'Ø' => "O",
            'ł' => "l",
            'Ł' => "L",
            'đ' => "d",
            'Đ' => "D",
            'þ' => "th",
            'Þ' => "TH",
            '\u{2018}' | '\u{2019}' => "'",
            '\u{201C}' | '\u{201D}' => "\"",
            '\u{2013}' | '\u{2014}' => "-",
            _ => "",
        };
        result.push_str(ascii);
    }
    result
}

/// Replace symbols the alphabets do not carry with spoken or pausing forms.
pub fn replace_symbols(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            ';' | ':' => result.push(','),
            '-' => result.push(' '),
            '&' => result.push_str(" and "),
            c => result.push(c),
        }
    }
    result
}

/// Remove brackets, angle brackets and double quotes.
pub fn remove_aux_symbols(text: &str) -> String {
    text.chars()
        .filter(|c| !matches!(c, '<' | '>' | '(' | ')' | '[' | ']' | '"'))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(collapse_whitespace("a  b\t\n c"), "a b c");
        assert_eq!(collapse_whitespace(""), "");
    }

    #[test]
    fn test_convert_to_ascii() {
        assert_eq!(convert_to_ascii("café naïve"), "cafe naive");
        assert_eq!(
            convert_to_ascii("Straße Æsir encyclopædia"),
            "Strasse AEsir encyclopaedia"
        );
        assert_eq!(convert_to_ascii("“quoted”"), "\"quoted\"");
        assert_eq!(convert_to_ascii("日本"), "");
    }

    #[test]
    fn test_turkish_lowercase() {
        assert_eq!(turkish_lowercase("IŞIK"), "ışık");
    }

    #[test]
    fn test_replace_symbols() {
        assert_eq!(replace_symbols("a;b:c-d&e"), "a,b,c d and e");
    }

    #[test]
    fn test_remove_aux_symbols() {
        assert_eq!(remove_aux_symbols("<a> (b) [c] \"d\""), "a b c d");
    }
}
