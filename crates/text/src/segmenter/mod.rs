//! Rule-based sentence segmentation.
//!
//! Text is scanned as whitespace-separated tokens. A token whose tail holds
//! terminal punctuation is a boundary candidate; abbreviations, initials,
//! acronyms, URLs, open quotes and list markers decide whether it really
//! ends a sentence. Blank lines always end one.

mod abbreviations;
mod rules;

pub use abbreviations::{AbbreviationKind, Abbreviations};

use phonoseq_core::{Result, TextError};
use rules::{Enclosure, ListMarker};
use std::iter::Peekable;

/// Tokens an open quote or bracket may span before it is given up on.
const MAX_ENCLOSED_TOKENS: usize = 64;

/// Segmenter options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmenterConfig {
    /// Hold boundaries back while a quote or bracket is open
    pub defer_inside_quotes: bool,
    /// Extra abbreviations on top of the language set
    pub extra_abbreviations: Vec<(String, AbbreviationKind)>,
}

impl Default for SegmenterConfig {
    fn default() -> Self {
        Self {
            defer_inside_quotes: true,
            extra_abbreviations: Vec::new(),
        }
    }
}

/// Splits text into sentences for one language.
#[derive(Debug, Clone)]
pub struct Segmenter {
    language: String,
    abbreviations: Abbreviations,
    defer_inside_quotes: bool,
}

impl Segmenter {
    /// Create a segmenter with default options.
    ///
    /// English (`en`, `en-us`, `en_GB`, ...) is supported; anything else is
    /// an [`TextError::UnsupportedLanguage`].
    pub fn new(language: &str) -> Result<Self> {
        Self::with_config(language, SegmenterConfig::default())
    }

    /// Create a segmenter with explicit options.
    pub fn with_config(language: &str, config: SegmenterConfig) -> Result<Self> {
        let language = language.trim().to_lowercase().replace('_', "-");
        let mut abbreviations = match language.split('-').next() {
            Some("en") => Abbreviations::english(),
            _ => return Err(TextError::UnsupportedLanguage(language)),
        };
        for (abbr, kind) in &config.extra_abbreviations {
            abbreviations.insert(abbr, *kind);
        }

        Ok(Self {
            language,
            abbreviations,
            defer_inside_quotes: config.defer_inside_quotes,
        })
    }

    /// Normalized language tag.
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Add or reclassify an abbreviation.
    pub fn add_abbreviation(&mut self, abbreviation: &str, kind: AbbreviationKind) {
        self.abbreviations.insert(abbreviation, kind);
    }

    /// Lazily iterate over the sentences of `text`.
    ///
    /// Sentences are slices of the input running from their first to their
    /// last non-whitespace character.
    pub fn segment<'s, 'a>(&'s self, text: &'a str) -> Sentences<'s, 'a> {
        Sentences {
            segmenter: self,
            text,
            tokens: Tokens { text, pos: 0 }.peekable(),
            pending: None,
            start: None,
            end: 0,
            stack: Vec::new(),
            enclosed_tokens: 0,
            last_marker: None,
            after_colon: false,
        }
    }

    /// Split `text` into owned sentences.
    pub fn split(&self, text: &str) -> Vec<String> {
        self.segment(text).map(str::to_string).collect()
    }
}

/// Split `text` with a default segmenter for `language`.
pub fn split_into_sentences(text: &str, language: &str) -> Result<Vec<String>> {
    Ok(Segmenter::new(language)?.split(text))
}

#[derive(Debug, Clone, Copy)]
struct Token<'a> {
    text: &'a str,
    start: usize,
    end: usize,
    line_start: bool,
    paragraph_break: bool,
}

#[derive(Debug, Clone)]
struct Tokens<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        let rest = &self.text[self.pos..];
        let skip = rest.find(|c: char| !c.is_whitespace())?;
        let newlines = rest[..skip].matches('\n').count();
        let first = self.pos == 0;

        let start = self.pos + skip;
        let end = self.text[start..]
            .find(char::is_whitespace)
            .map_or(self.text.len(), |len| start + len);
        self.pos = end;

        Some(Token {
            text: &self.text[start..end],
            start,
            end,
            line_start: first || newlines > 0,
            paragraph_break: newlines > 1,
        })
    }
}

/// Iterator over sentences, created by [`Segmenter::segment`].
#[derive(Debug, Clone)]
pub struct Sentences<'s, 'a> {
    segmenter: &'s Segmenter,
    text: &'a str,
    tokens: Peekable<Tokens<'a>>,
    /// Token that opened a new sentence after the previous one was returned
    pending: Option<Token<'a>>,
    start: Option<usize>,
    end: usize,
    stack: Vec<Enclosure>,
    enclosed_tokens: usize,
    last_marker: Option<ListMarker>,
    after_colon: bool,
}

impl<'s, 'a> Sentences<'s, 'a> {
    fn close(&mut self) -> Option<&'a str> {
        self.start.take().map(|start| &self.text[start..self.end])
    }

    fn accepts(&self, marker: ListMarker, token: &Token<'a>) -> bool {
        let clause_start = self.start.is_none() || self.after_colon;
        token.line_start
            || (marker.is_first() && clause_start)
            || self.continues_list(marker)
    }

    fn continues_list(&self, marker: ListMarker) -> bool {
        self.last_marker.is_some_and(|previous| marker.follows(previous))
    }

    /// Whether a single quote opened by `token` is closed later in the
    /// paragraph, within the enclosure window.
    fn single_quote_closes(&self, token: &str) -> bool {
        let closes = |text: &str| rules::trailing_closers(text).contains(&Enclosure::Single);
        if closes(token) {
            return true;
        }
        self.tokens
            .clone()
            .take(MAX_ENCLOSED_TOKENS)
            .take_while(|next| !next.paragraph_break)
            .any(|next| closes(next.text))
    }

    fn track_enclosures(&mut self, token: &str) {
        let mut openers = rules::leading_openers(token);
        if let Some(single) = openers.iter().position(|&open| open == Enclosure::Single) {
            if !self.single_quote_closes(token) {
                openers.truncate(single);
            }
        }
        self.stack.extend(openers);
        for closer in rules::trailing_closers(token) {
            if let Some(depth) = self.stack.iter().rposition(|&open| open == closer) {
                self.stack.truncate(depth);
            }
        }

        if self.stack.is_empty() {
            self.enclosed_tokens = 0;
        } else {
            self.enclosed_tokens += 1;
            if self.enclosed_tokens > MAX_ENCLOSED_TOKENS {
                log::debug!("dropping {} unclosed quotes or brackets", self.stack.len());
                self.stack.clear();
                self.enclosed_tokens = 0;
            }
        }
    }

    fn ends_sentence(&mut self, token: &str) -> bool {
        let tail = &token[rules::tail_start(token)..];
        if !tail.chars().any(rules::is_terminal) {
            return false;
        }
        if self.segmenter.defer_inside_quotes && !self.stack.is_empty() {
            return false;
        }

        let Some(next) = self.tokens.peek().copied() else {
            return true;
        };
        if next.paragraph_break {
            return true;
        }
        let next_first = next.text.chars().find(|c| c.is_alphanumeric());

        let word = rules::stem(token);
        let period_only = tail.chars().filter(|&c| rules::is_terminal(c)).all(|c| c == '.');
        if period_only && !word.is_empty() && !rules::is_url_like(word) {
            let kind = self.segmenter.abbreviations.classify(word).or_else(|| {
                rules::is_dotted_acronym(word).then_some(AbbreviationKind::General)
            });
            match kind {
                Some(AbbreviationKind::Title) => return false,
                Some(AbbreviationKind::Numeric)
                    if next_first.is_some_and(|c| c.is_ascii_digit()) =>
                {
                    return false
                }
                Some(AbbreviationKind::Numeric | AbbreviationKind::General) => {
                    return next_first.is_some_and(char::is_uppercase)
                }
                None if rules::is_initial(word) => return false,
                None => {}
            }
        }

        !next_first.is_some_and(char::is_lowercase)
    }
}

impl<'s, 'a> Iterator for Sentences<'s, 'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        loop {
            let Some(token) = self.pending.take().or_else(|| self.tokens.next()) else {
                return self.close();
            };

            let marker = rules::list_marker(token.text, token.line_start)
                .filter(|&marker| self.accepts(marker, &token));

            if self.start.is_some() {
                let starts_item =
                    marker.is_some_and(|m| token.line_start || self.continues_list(m));
                if token.paragraph_break || starts_item {
                    if token.paragraph_break {
                        self.stack.clear();
                        self.enclosed_tokens = 0;
                        self.last_marker = None;
                    }
                    self.pending = Some(token);
                    return self.close();
                }
            }

            if self.start.is_none() {
                self.start = Some(token.start);
                // A sentence that does not open with the next item ends the list
                if marker.is_none() {
                    self.last_marker = None;
                }
            }
            self.end = token.end;

            if let Some(marker) = marker {
                self.last_marker = Some(marker);
                self.after_colon = false;
                continue;
            }
            self.after_colon = token.text.ends_with(':');
            self.track_enclosures(token.text);

            if self.ends_sentence(token.text) {
                log::trace!("sentence boundary after {:?}", token.text);
                return self.close();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn split(text: &str) -> Vec<String> {
        split_into_sentences(text, "en").unwrap()
    }

    #[test]
    fn test_two_sentences() {
        assert_eq!(split("Hello. Two sentences"), vec!["Hello.", "Two sentences"]);
    }

    #[test]
    fn test_company_abbreviation() {
        assert_eq!(
            split("He went to meet the adviser from Scott, Waltman & Co. next morning."),
            vec!["He went to meet the adviser from Scott, Waltman & Co. next morning."]
        );
        assert_eq!(
            split("Let's run it past Sarah and co. They'll want to see this."),
            vec!["Let's run it past Sarah and co.", "They'll want to see this."]
        );
        assert_eq!(
            split("Were David and co. at the event?"),
            vec!["Were David and co. at the event?"]
        );
    }

    #[test]
    fn test_possessive_after_abbreviation() {
        assert_eq!(
            split("Where is Bobby Jr.'s rabbit?"),
            vec!["Where is Bobby Jr.'s rabbit?"]
        );
    }

    #[test]
    fn test_dotted_acronym() {
        assert_eq!(
            split("Please inform the U.K. authorities right away."),
            vec!["Please inform the U.K. authorities right away."]
        );
    }

    #[test]
    fn test_lowercase_title() {
        assert_eq!(
            split("paging dr. green, please come to theatre four immediately."),
            vec!["paging dr. green, please come to theatre four immediately."]
        );
    }

    #[test]
    fn test_email_and_url() {
        assert_eq!(
            split(
                "The email format is Firstname.Lastname@example.com. I think you reversed them."
            ),
            vec![
                "The email format is Firstname.Lastname@example.com.",
                "I think you reversed them."
            ]
        );
        assert_eq!(
            split(
                "The demo site is: https://top100.example.com/subsection/latestnews.html. \
                 Please send us your feedback."
            ),
            vec![
                "The demo site is: https://top100.example.com/subsection/latestnews.html.",
                "Please send us your feedback."
            ]
        );
        assert_eq!(
            split("The address is not google.com."),
            vec!["The address is not google.com."]
        );
    }

    #[test]
    fn test_quoted_exclamation() {
        assert_eq!(
            split("Scowling at him, 'You are not done yet!' she yelled."),
            vec!["Scowling at him, 'You are not done yet!' she yelled."]
        );
        assert_eq!(
            split("If you can't remember a quote, “at least make up a memorable one that's plausible...\""),
            vec!["If you can't remember a quote, “at least make up a memorable one that's plausible...\""]
        );
    }

    #[test]
    fn test_exclamations() {
        assert_eq!(split("Hey!! So good to see you."), vec!["Hey!!", "So good to see you."]);
        assert_eq!(
            split("He went to Yahoo! but I don't know the division."),
            vec!["He went to Yahoo! but I don't know the division."]
        );
    }

    #[test]
    fn test_inline_lists() {
        assert_eq!(
            split("1.) The first item 2.) The second item"),
            vec!["1.) The first item", "2.) The second item"]
        );
        assert_eq!(
            split("1) The first item 2) The second item"),
            vec!["1) The first item", "2) The second item"]
        );
        assert_eq!(
            split("a. The first item b. The second item c. The third list item"),
            vec!["a. The first item", "b. The second item", "c. The third list item"]
        );
    }

    #[test]
    fn test_list_ends_with_plain_sentence() {
        assert_eq!(
            split("a. Buy milk. I prefer plan b. It is cheaper."),
            vec!["a. Buy milk.", "I prefer plan b.", "It is cheaper."]
        );
        assert_eq!(
            split("a. Buy milk. b. Buy eggs."),
            vec!["a. Buy milk.", "b. Buy eggs."]
        );
        assert_eq!(
            split("1) Mix it 2) Bake it\n\nWe used plan 3) for the rest"),
            vec!["1) Mix it", "2) Bake it", "We used plan 3) for the rest"]
        );
    }

    #[test]
    fn test_line_start_list() {
        assert_eq!(
            split("Steps:\n1. Mix it.\n2. Bake it."),
            vec!["Steps:", "1. Mix it.", "2. Bake it."]
        );
    }

    #[test]
    fn test_initials_and_numeric_abbreviations() {
        assert_eq!(
            split("J. R. R. Tolkien wrote it."),
            vec!["J. R. R. Tolkien wrote it."]
        );
        assert_eq!(
            split("See fig. 3 for details. Then stop."),
            vec!["See fig. 3 for details.", "Then stop."]
        );
    }

    #[test]
    fn test_paragraph_break() {
        assert_eq!(
            split("First line without a stop\n\nSecond paragraph"),
            vec!["First line without a stop", "Second paragraph"]
        );
    }

    #[test]
    fn test_quotes_defer_boundaries() {
        let text = "He said \"Stop. Go now.\" and left.";
        assert_eq!(split(text), vec![text]);

        let config = SegmenterConfig {
            defer_inside_quotes: false,
            ..Default::default()
        };
        let segmenter = Segmenter::with_config("en", config).unwrap();
        assert_eq!(
            segmenter.split(text),
            vec!["He said \"Stop.", "Go now.\" and left."]
        );
    }

    #[test]
    fn test_elided_words_do_not_open_quotes() {
        assert_eq!(
            split("'Twas the night before. Nobody stirred. The end came."),
            vec!["'Twas the night before.", "Nobody stirred.", "The end came."]
        );
        assert_eq!(
            split("'Cause I said so. Go home."),
            vec!["'Cause I said so.", "Go home."]
        );
    }

    #[test]
    fn test_unclosed_single_quote_does_not_defer() {
        assert_eq!(
            split("'Hello there. Nobody answered."),
            vec!["'Hello there.", "Nobody answered."]
        );
        let quoted = "She said 'Stop. Go now.' and left.";
        assert_eq!(split(quoted), vec![quoted]);
    }

    #[test]
    fn test_sentences_restart_from_clone() {
        let segmenter = Segmenter::new("en").unwrap();
        let mut sentences = segmenter.segment("One. Two. Three. Four.");
        assert_eq!(sentences.next(), Some("One."));

        let copy = sentences.clone();
        let rest: Vec<&str> = sentences.collect();
        assert_eq!(rest, vec!["Two.", "Three.", "Four."]);
        assert_eq!(copy.collect::<Vec<_>>(), rest);
    }

    #[test]
    fn test_extra_abbreviation() {
        let text = "Ask Gov. Smith. He knows.";
        assert_eq!(split(text), vec!["Ask Gov. Smith.", "He knows."]);

        let mut segmenter = Segmenter::new("en-us").unwrap();
        segmenter.add_abbreviation("Smith", AbbreviationKind::Title);
        assert_eq!(segmenter.split(text), vec![text]);
    }

    #[test]
    fn test_empty_and_whitespace() {
        assert!(split("").is_empty());
        assert!(split(" \n\t ").is_empty());
        assert_eq!(split("  padded.  "), vec!["padded."]);
    }

    #[test]
    fn test_sentences_borrow_input() {
        let text = "One. Two.";
        let segmenter = Segmenter::new("en").unwrap();
        let sentences: Vec<&str> = segmenter.segment(text).collect();
        assert_eq!(sentences, vec!["One.", "Two."]);
        assert!(std::ptr::eq(sentences[0].as_ptr(), text.as_ptr()));
    }

    #[test]
    fn test_unsupported_language() {
        assert!(matches!(
            Segmenter::new("de"),
            Err(TextError::UnsupportedLanguage(lang)) if lang == "de"
        ));
        assert_eq!(Segmenter::new("EN_gb").unwrap().language(), "en-gb");
    }
}
