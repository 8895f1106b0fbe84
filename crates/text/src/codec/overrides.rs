//! Inline `{...}` pronunciation overrides.

/// A piece of input text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Ordinary text, with `\{` escapes resolved
    Text(String),
    /// Whitespace-separated ARPAbet symbols from inside a brace pair
    Override(&'a str),
}

/// Split text into plain runs and override groups, left to right.
///
/// A group starts at an unescaped `{` and ends at the next `}`; it must
/// contain at least one character. A `{` without a closing brace, or `{}`,
/// stays in the text.
pub fn split_overrides(text: &str) -> Vec<Segment<'_>> {
    let mut segments = Vec::new();
    let mut plain = String::new();
    let mut rest = text;

    while let Some(open) = find_open(rest) {
        let after = &rest[open + 1..];
        match after.find('}') {
            Some(close) if close > 0 => {
                unescape_into(&rest[..open], &mut plain);
                if !plain.is_empty() {
                    segments.push(Segment::Text(std::mem::take(&mut plain)));
                }
                segments.push(Segment::Override(&after[..close]));
                rest = &after[close + 1..];
            }
            _ => {
                unescape_into(&rest[..=open], &mut plain);
                rest = after;
            }
        }
    }

    unescape_into(rest, &mut plain);
    if !plain.is_empty() {
        segments.push(Segment::Text(plain));
    }
    segments
}

fn find_open(text: &str) -> Option<usize> {
    let mut escaped = false;
    for (i, c) in text.char_indices() {
        if c == '{' && !escaped {
            return Some(i);
        }
        escaped = c == '\\' && !escaped;
    }
    None
}

fn unescape_into(chunk: &str, out: &mut String) {
    out.push_str(&chunk.replace("\\{", "{"));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> Segment<'static> {
        Segment::Text(s.to_string())
    }

    #[test]
    fn test_single_group() {
        assert_eq!(
            split_overrides("Turn left on {HH AW1 S S T AH0 N} Street."),
            vec![
                text("Turn left on "),
                Segment::Override("HH AW1 S S T AH0 N"),
                text(" Street."),
            ]
        );
    }

    #[test]
    fn test_adjacent_groups() {
        assert_eq!(
            split_overrides("{HH AH0}{L OW1}"),
            vec![Segment::Override("HH AH0"), Segment::Override("L OW1")]
        );
    }

    #[test]
    fn test_escaped_and_unclosed() {
        assert_eq!(split_overrides(r"a \{b} c"), vec![text("a {b} c")]);
        assert_eq!(split_overrides("a {b"), vec![text("a {b")]);
        assert_eq!(
            split_overrides("{} {K}"),
            vec![text("{} "), Segment::Override("K")]
        );
    }

    #[test]
    fn test_plain() {
        assert_eq!(split_overrides("plain"), vec![text("plain")]);
        assert!(split_overrides("").is_empty());
    }
}
