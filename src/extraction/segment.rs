/*! First paragraph / first sentence heuristics

This is not a tokenizer:
- a paragraph is a newline-delimited segment of the plain index rendering,
- a sentence ends at a whitespace that follows `.`, `?` or `!`,
  unless the next character is a lowercase letter (`1. ledna`) or
  the word before the period is a known abbreviation (`Dr. Novák`).

Quotes and nested punctuation are not handled.
!*/
use std::collections::HashSet;

/// Characters that may end a sentence.
const SENTENCE_END: [char; 3] = ['.', '?', '!'];

/// Lowercase letters that mark a continuation after a period.
const LOWERCASE_CONTINUATION: &str = "abcdefghijklmnopqrstuvwxyzěščřžýáíéúůďťň";

/// Words that are followed by a period without ending the sentence.
pub const DEFAULT_ABBREVIATIONS: &[&str] = &[
    "Dr", "Mr", "Mrs", "Ms", "Prof", "prof", "Ing", "Mgr", "Bc", "MUDr", "JUDr", "PhDr", "RNDr",
    "doc", "St", "sv", "tzv", "např", "mj", "tj", "resp", "cca", "cf", "vs",
];

/// First newline-delimited segment, empty if the text is.
pub fn first_paragraph(text: &str) -> &str {
    text.split('\n').next().unwrap_or("")
}

/// Sentence segmenter. See module documentation for the heuristic.
#[derive(Debug, Clone)]
pub struct Segmenter {
    abbreviations: HashSet<String>,
}

impl Default for Segmenter {
    fn default() -> Self {
        Self::new(DEFAULT_ABBREVIATIONS.iter().copied())
    }
}

impl Segmenter {
    /// Segmenter with a custom abbreviation list (words without the trailing period).
    pub fn new<I, S>(abbreviations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            abbreviations: abbreviations.into_iter().map(Into::into).collect(),
        }
    }

    /// checks if `text` (that ends with a sentence end character) ends with an abbreviation.
    fn ends_with_abbreviation(&self, text: &str) -> bool {
        let Some(word) = text.strip_suffix('.') else {
            return false;
        };
        let word = word
            .rsplit(char::is_whitespace)
            .next()
            .unwrap_or("")
            .trim_start_matches(|c: char| !c.is_alphanumeric());

        self.abbreviations.contains(word)
    }

    /// Returns the first sentence of `paragraph`, or the whole paragraph if no boundary is found.
    pub fn first_sentence<'a>(&self, paragraph: &'a str) -> &'a str {
        let mut chars = paragraph.char_indices().peekable();
        let mut prev = None;

        while let Some((idx, c)) = chars.next() {
            if c.is_whitespace() && prev.map_or(false, |p| SENTENCE_END.contains(&p)) {
                let continues = chars
                    .peek()
                    .map_or(false, |(_, next)| LOWERCASE_CONTINUATION.contains(*next));

                if !continues && !self.ends_with_abbreviation(&paragraph[..idx]) {
                    return &paragraph[..idx];
                }
            }
            prev = Some(c);
        }

        paragraph
    }
}

/// Replaces newlines and tabs so that the text fits in a single tab separated field.
pub fn single_line(text: &str) -> String {
    text.replace(&['\n', '\t'][..], " ")
}
