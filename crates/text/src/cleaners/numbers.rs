//! Spelling out numbers, currency, ordinals and clock times in English.

use regex::{Captures, Regex};
use std::sync::OnceLock;

const ONES: [&str; 20] = [
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
    "eleven", "twelve", "thirteen", "fourteen", "fifteen", "sixteen", "seventeen", "eighteen",
    "nineteen",
];
const TENS: [&str; 10] = [
    "", "", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];
const SCALES: [&str; 7] = [
    "",
    "thousand",
    "million",
    "billion",
    "trillion",
    "quadrillion",
    "quintillion",
];

macro_rules! regex {
    ($pattern:expr) => {{
        static RE: OnceLock<Regex> = OnceLock::new();
        RE.get_or_init(|| Regex::new($pattern).expect("Invalid regex pattern"))
    }};
}

/// Cardinal words for `n`, e.g. `1234` -> `one thousand two hundred thirty-four`.
pub fn number_to_words(n: u64) -> String {
    if n == 0 {
        return ONES[0].to_string();
    }

    let mut groups = Vec::new();
    let mut rest = n;
    let mut scale = 0;
    while rest > 0 {
        let chunk = rest % 1000;
        if chunk > 0 {
            let mut words = below_thousand(chunk);
            if scale > 0 {
                words.push(' ');
                words.push_str(SCALES[scale]);
            }
            groups.push(words);
        }
        rest /= 1000;
        scale += 1;
    }

    groups.reverse();
    groups.join(" ")
}

fn below_thousand(n: u64) -> String {
    let hundreds = n / 100;
    let rest = n % 100;
    match (hundreds, rest) {
        (0, r) => below_hundred(r),
        (h, 0) => format!("{} hundred", ONES[h as usize]),
        (h, r) => format!("{} hundred {}", ONES[h as usize], below_hundred(r)),
    }
}

fn below_hundred(n: u64) -> String {
    let n = n as usize;
    if n < 20 {
        return ONES[n].to_string();
    }
    match n % 10 {
        0 => TENS[n / 10].to_string(),
        ones => format!("{}-{}", TENS[n / 10], ONES[ones]),
    }
}

/// Ordinal words for `n`, e.g. `21` -> `twenty-first`.
pub fn ordinal_to_words(n: u64) -> String {
    let cardinal = number_to_words(n);
    let split = cardinal
        .rfind(|c| c == ' ' || c == '-')
        .map(|i| i + 1)
        .unwrap_or(0);
    let (head, last) = cardinal.split_at(split);

    let last = match last {
        "one" => "first".to_string(),
        "two" => "second".to_string(),
        "three" => "third".to_string(),
        "five" => "fifth".to_string(),
        "eight" => "eighth".to_string(),
        "nine" => "ninth".to_string(),
        "twelve" => "twelfth".to_string(),
        w if w.ends_with('y') => format!("{}ieth", &w[..w.len() - 1]),
        w => format!("{w}th"),
    };
    format!("{head}{last}")
}

/// Read a number the way English speakers read it in running text.
///
/// Values between 1000 and 3000 are read as years.
fn spoken_number(digits: &str) -> String {
    let Ok(num) = digits.parse::<u64>() else {
        // Too long for u64: spell digit by digit
        return digits
            .chars()
            .filter_map(|c| c.to_digit(10))
            .map(|d| ONES[d as usize])
            .collect::<Vec<_>>()
            .join(" ");
    };

    if num > 1000 && num < 3000 {
        if num == 2000 {
            return "two thousand".to_string();
        }
        if num > 2000 && num < 2010 {
            return format!("two thousand {}", number_to_words(num % 100));
        }
        if num % 100 == 0 {
            return format!("{} hundred", number_to_words(num / 100));
        }
        let (high, low) = (num / 100, num % 100);
        return if low < 10 {
            format!("{} oh {}", number_to_words(high), ONES[low as usize])
        } else {
            format!("{} {}", number_to_words(high), below_hundred(low))
        };
    }

    number_to_words(num)
}

fn expand_dollars(amount: &str) -> String {
    let parts: Vec<&str> = amount.split('.').collect();
    if parts.len() > 2 {
        return format!("{amount} dollars");
    }

    let parse = |s: &str| s.parse::<u64>().unwrap_or(0);
    let dollars = parts.first().map(|s| parse(s)).unwrap_or(0);
    let cents = parts.get(1).map(|s| parse(s)).unwrap_or(0);
    let dollar_unit = if dollars == 1 { "dollar" } else { "dollars" };
    let cent_unit = if cents == 1 { "cent" } else { "cents" };

    match (dollars, cents) {
        (0, 0) => "zero dollars".to_string(),
        (d, 0) => format!("{d} {dollar_unit}"),
        (0, c) => format!("{c} {cent_unit}"),
        (d, c) => format!("{d} {dollar_unit}, {c} {cent_unit}"),
    }
}

/// Spell out every number in the text.
///
/// Thousands separators are dropped, `£` and `$` amounts get their units,
/// decimals are read with "point", and ordinals such as `3rd` become words.
pub fn expand_numbers(text: &str) -> String {
    let text = regex!(r"[0-9][0-9,]+[0-9]")
        .replace_all(text, |caps: &Captures| caps[0].replace(',', ""));
    let text = regex!(r"£([0-9,]*[0-9]+)").replace_all(&text, "$1 pounds");
    let text = regex!(r"\$([0-9.,]*[0-9]+)")
        .replace_all(&text, |caps: &Captures| expand_dollars(&caps[1]));
    let text = regex!(r"([0-9]+)\.([0-9]+)").replace_all(&text, "$1 point $2");
    let text = regex!(r"([0-9]+)(?:st|nd|rd|th)").replace_all(&text, |caps: &Captures| {
        caps[1]
            .parse::<u64>()
            .map(ordinal_to_words)
            .unwrap_or_else(|_| caps[0].to_string())
    });
    regex!(r"[0-9]+")
        .replace_all(&text, |caps: &Captures| spoken_number(&caps[0]))
        .into_owned()
}

/// Spell out clock times such as `3:30pm` or `14:05`.
pub fn expand_time_english(text: &str) -> String {
    regex!(r"(?i)\b([01]?[0-9]|2[0-3]):([0-5][0-9])(?:\s*(a\.m\.|p\.m\.|a\.m|p\.m|am|pm))?")
        .replace_all(text, |caps: &Captures| {
            let mut hour: u64 = caps[1].parse().unwrap_or(0);
            let minute: u64 = caps[2].parse().unwrap_or(0);
            let mut past_noon = hour >= 12;
            if hour > 12 {
                hour -= 12;
            } else if hour == 0 {
                hour = 12;
                past_noon = false;
            }

            let mut words = vec![number_to_words(hour)];
            if minute > 0 {
                if minute < 10 {
                    words.push("oh".to_string());
                }
                words.push(number_to_words(minute));
            }
            match caps.get(3) {
                Some(suffix) => words.extend(
                    suffix
                        .as_str()
                        .chars()
                        .filter(|c| *c != '.')
                        .map(|c| c.to_ascii_lowercase().to_string()),
                ),
                None if past_noon => words.push("p m".to_string()),
                None => words.push("a m".to_string()),
            }
            words.join(" ")
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_to_words() {
        assert_eq!(number_to_words(0), "zero");
        assert_eq!(number_to_words(7), "seven");
        assert_eq!(number_to_words(42), "forty-two");
        assert_eq!(number_to_words(100), "one hundred");
        assert_eq!(number_to_words(1234), "one thousand two hundred thirty-four");
        assert_eq!(number_to_words(1_000_001), "one million one");
    }

    #[test]
    fn test_ordinals() {
        assert_eq!(ordinal_to_words(1), "first");
        assert_eq!(ordinal_to_words(12), "twelfth");
        assert_eq!(ordinal_to_words(20), "twentieth");
        assert_eq!(ordinal_to_words(23), "twenty-third");
        assert_eq!(ordinal_to_words(104), "one hundred fourth");
    }

    #[test]
    fn test_years() {
        assert_eq!(expand_numbers("1999"), "nineteen ninety-nine");
        assert_eq!(expand_numbers("1905"), "nineteen oh five");
        assert_eq!(expand_numbers("2005"), "two thousand five");
        assert_eq!(expand_numbers("1900"), "nineteen hundred");
        assert_eq!(expand_numbers("2000"), "two thousand");
    }

    #[test]
    fn test_currency() {
        assert_eq!(expand_numbers("$1"), "one dollar");
        assert_eq!(expand_numbers("$2.50"), "two dollars, fifty cents");
        assert_eq!(expand_numbers("$0.01"), "one cent");
        assert_eq!(expand_numbers("£3"), "three pounds");
    }

    #[test]
    fn test_commas_decimals_ordinals() {
        assert_eq!(expand_numbers("10,000 people"), "ten thousand people");
        assert_eq!(expand_numbers("3.14"), "three point fourteen");
        assert_eq!(expand_numbers("the 3rd time"), "the third time");
    }

    #[test]
    fn test_huge_number_spelled_by_digit() {
        assert_eq!(
            expand_numbers("99999999999999999999"),
            vec!["nine"; 20].join(" ")
        );
    }

    #[test]
    fn test_time() {
        assert_eq!(expand_time_english("at 3:30pm"), "at three thirty p m");
        assert_eq!(expand_time_english("at 14:05"), "at two oh five p m");
        assert_eq!(expand_time_english("at 9:00"), "at nine a m");
        assert_eq!(expand_time_english("at 0:15"), "at twelve fifteen a m");
        assert_eq!(expand_time_english("11:45 A.M."), "eleven forty-five a m");
    }
}
