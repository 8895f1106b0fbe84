//! Token-level rules used by the segmenter.

/// Characters that can terminate a sentence.
pub(crate) fn is_terminal(c: char) -> bool {
    matches!(c, '.' | '!' | '?' | '…')
}

/// Paired punctuation tracked while scanning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Enclosure {
    Double,
    Single,
    Paren,
    Square,
    Curly,
    Guillemet,
}

pub(crate) fn opener(c: char) -> Option<Enclosure> {
    match c {
        '"' | '“' | '„' => Some(Enclosure::Double),
        '\'' | '‘' => Some(Enclosure::Single),
        '(' => Some(Enclosure::Paren),
        '[' => Some(Enclosure::Square),
        '{' => Some(Enclosure::Curly),
        '«' => Some(Enclosure::Guillemet),
        _ => None,
    }
}

pub(crate) fn closer(c: char) -> Option<Enclosure> {
    match c {
        '"' | '”' => Some(Enclosure::Double),
        '\'' | '’' => Some(Enclosure::Single),
        ')' => Some(Enclosure::Paren),
        ']' => Some(Enclosure::Square),
        '}' => Some(Enclosure::Curly),
        '»' => Some(Enclosure::Guillemet),
        _ => None,
    }
}

/// Byte offset where the trailing run of terminals and closers begins.
pub(crate) fn tail_start(token: &str) -> usize {
    token
        .char_indices()
        .rev()
        .take_while(|&(_, c)| is_terminal(c) || closer(c).is_some())
        .last()
        .map_or(token.len(), |(i, _)| i)
}

/// Openers at the front of a token, stopping before the tail.
///
/// A single quote only opens when a capital letter follows, so elisions
/// such as `'em` or `'90s` are left alone.
pub(crate) fn leading_openers(token: &str) -> Vec<Enclosure> {
    let head = &token[..tail_start(token)];
    let mut openers = Vec::new();
    let mut chars = head.chars().peekable();
    while let Some(c) = chars.next() {
        let Some(kind) = opener(c) else { break };
        if kind == Enclosure::Single && !chars.peek().is_some_and(|n| n.is_uppercase()) {
            break;
        }
        openers.push(kind);
    }
    openers
}

/// Closers in the tail of a token, in order.
pub(crate) fn trailing_closers(token: &str) -> Vec<Enclosure> {
    token[tail_start(token)..].chars().filter_map(closer).collect()
}

/// The word in front of the tail, without leading openers.
pub(crate) fn stem(token: &str) -> &str {
    token[..tail_start(token)].trim_start_matches(|c| opener(c).is_some())
}

/// `U.K`, `u.s.a`: single letters joined by periods.
pub(crate) fn is_dotted_acronym(word: &str) -> bool {
    let mut parts = 0;
    for part in word.split('.') {
        let mut chars = part.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_alphabetic() => parts += 1,
            _ => return false,
        }
    }
    parts >= 2
}

/// A single capital letter, as in `J. Smith`.
pub(crate) fn is_initial(word: &str) -> bool {
    let mut chars = word.chars();
    matches!((chars.next(), chars.next()), (Some(c), None) if c.is_uppercase())
}

/// URLs and email addresses, whose periods are never abbreviations.
pub(crate) fn is_url_like(word: &str) -> bool {
    if word.contains("://") || word.to_ascii_lowercase().starts_with("www.") {
        return true;
    }
    match word.split_once('@') {
        Some((user, domain)) => {
            !user.is_empty()
                && domain.contains('.')
                && domain.split('.').all(|label| !label.is_empty())
        }
        None => false,
    }
}

/// Enumeration label at the start of a list item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ListMarker {
    Number(u32),
    Letter(char),
}

impl ListMarker {
    /// Whether this marker is the one after `previous`.
    pub(crate) fn follows(self, previous: ListMarker) -> bool {
        match (previous, self) {
            (ListMarker::Number(a), ListMarker::Number(b)) => a.checked_add(1) == Some(b),
            (ListMarker::Letter(a), ListMarker::Letter(b)) => {
                char::from_u32(a as u32 + 1) == Some(b)
            }
            _ => false,
        }
    }

    /// Whether this marker can open a list.
    pub(crate) fn is_first(self) -> bool {
        matches!(self, ListMarker::Number(1) | ListMarker::Letter('a'))
    }
}

/// Parse `1.)`, `1)`, `a.`, `a)` anywhere, and `1.` only at the start of a
/// line where it cannot be a number ending a sentence.
pub(crate) fn list_marker(token: &str, line_start: bool) -> Option<ListMarker> {
    let digits = token.bytes().take_while(u8::is_ascii_digit).count();
    if digits > 0 {
        if digits > 3 {
            return None;
        }
        let n: u32 = token[..digits].parse().ok()?;
        return match &token[digits..] {
            ".)" | ")" => Some(ListMarker::Number(n)),
            "." if line_start => Some(ListMarker::Number(n)),
            _ => None,
        };
    }

    let mut chars = token.chars();
    let letter = chars.next().filter(char::is_ascii_lowercase)?;
    match chars.as_str() {
        "." | ")" | ".)" => Some(ListMarker::Letter(letter)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tail_start() {
        assert_eq!(tail_start("yet!'"), 3);
        assert_eq!(tail_start("word"), 4);
        assert_eq!(tail_start("2.)"), 1);
        assert_eq!(tail_start("!!"), 0);
        assert_eq!(tail_start("Jr.'s"), 5);
    }

    #[test]
    fn test_leading_openers() {
        assert_eq!(leading_openers("(\"Go"), vec![Enclosure::Paren, Enclosure::Double]);
        assert_eq!(leading_openers("'You"), vec![Enclosure::Single]);
        assert!(leading_openers("'em").is_empty());
        // a bare quote is a closer
        assert!(leading_openers("\"").is_empty());
    }

    #[test]
    fn test_trailing_closers() {
        assert_eq!(trailing_closers("yet!'"), vec![Enclosure::Single]);
        assert_eq!(trailing_closers("end.)”"), vec![Enclosure::Paren, Enclosure::Double]);
    }

    #[test]
    fn test_stem() {
        assert_eq!(stem("(co.)"), "co");
        assert_eq!(stem("U.K."), "U.K");
        assert_eq!(stem("“Hi!”"), "Hi");
    }

    #[test]
    fn test_word_shapes() {
        assert!(is_dotted_acronym("U.K"));
        assert!(is_dotted_acronym("u.s.a"));
        assert!(!is_dotted_acronym("google.com"));
        assert!(!is_dotted_acronym("K"));
        assert!(is_initial("J"));
        assert!(!is_initial("j"));
        assert!(is_url_like("https://example.com/path"));
        assert!(is_url_like("www.example.org"));
        assert!(is_url_like("jane.doe@mail.example.com"));
        assert!(!is_url_like("@handle"));
        assert!(!is_url_like("google.com"));
    }

    #[test]
    fn test_list_marker() {
        assert_eq!(list_marker("1.)", false), Some(ListMarker::Number(1)));
        assert_eq!(list_marker("12)", false), Some(ListMarker::Number(12)));
        assert_eq!(list_marker("3.", false), None);
        assert_eq!(list_marker("3.", true), Some(ListMarker::Number(3)));
        assert_eq!(list_marker("b.", false), Some(ListMarker::Letter('b')));
        assert_eq!(list_marker("B.", false), None);
        assert_eq!(list_marker("2010.", true), None);
        assert_eq!(list_marker("ab.", false), None);
    }

    #[test]
    fn test_marker_sequence() {
        assert!(ListMarker::Number(2).follows(ListMarker::Number(1)));
        assert!(ListMarker::Letter('c').follows(ListMarker::Letter('b')));
        assert!(!ListMarker::Letter('c').follows(ListMarker::Number(2)));
        assert!(ListMarker::Letter('a').is_first());
        assert!(!ListMarker::Number(2).is_first());
    }
}
