/*! Field extraction

Header parsing, canonical URI derivation, hyperlink removal and media reference handling.
!*/
use std::borrow::Cow;

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::{Error, ParseError};

lazy_static! {
    // title is non-greedy and stops at the first `">`. Titles with a literal `"` are not supported.
    static ref HEADER: Regex =
        Regex::new(r#"<doc\s+id="(\d+)"\s+url="([^"]+)"\s+title="(.+?)">"#).unwrap();
    static ref WRAPPER: Regex = Regex::new(r"</?doc(?:\s[^>]*)?>").unwrap();
    static ref LINK: Regex = Regex::new(r"<a(?:\s[^>]*)?>(.*?)</a>").unwrap();
}

/// Attributes of the `<doc>` wrapper tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub id: String,
    pub url: String,
    pub title: String,
}

/// Parses the single header of a block.
pub fn parse_header(text: &str) -> Result<Header, ParseError> {
    let mut headers = HEADER.captures_iter(text);
    let caps = headers.next().ok_or(ParseError::MissingHeader)?;

    let others = headers.count();
    if others > 0 {
        return Err(ParseError::MultipleHeaders(others + 1));
    }

    Ok(Header {
        id: caps[1].to_string(),
        url: caps[2].to_string(),
        title: caps[3].to_string(),
    })
}

/// Replaces spaces with underscores, as in article URLs.
pub fn underscored(title: &str) -> String {
    title.replace(' ', "_")
}

/// Derives the title-based URI from the id-based source one.
///
/// Everything from the first `?` is replaced by `/<title>`:
/// `https://cs.wikipedia.org/wiki?curid=10` with title `Hlavní město` becomes
/// `https://cs.wikipedia.org/wiki/Hlavní_město`.
///
/// URIs without a query string are kept untouched.
pub fn canonical_uri(source_uri: &str, title: &str) -> String {
    match source_uri.find('?') {
        Some(idx) if idx + 1 < source_uri.len() => {
            format!("{}/{}", &source_uri[..idx], underscored(title))
        }
        _ => source_uri.to_string(),
    }
}

/// Removes the `<doc ...>` and `</doc>` tags.
pub fn strip_wrapper(text: &str) -> Cow<str> {
    WRAPPER.replace_all(text, "")
}

/// Replaces hyperlinks with their anchor text.
pub fn replace_links(text: &str) -> Cow<str> {
    LINK.replace_all(text, "$1")
}

/// Extracts links to media (files, images) and builds their full URIs.
///
/// Media links are `<a href="<namespace>%3A<reference>">label</a>`.
pub struct MediaResolver {
    anchor: Regex,
    domain: String,
}

impl MediaResolver {
    /// `namespace` is the media namespace of the wiki (`Soubor` for the czech one, `File` for the english one).
    pub fn new(domain: &str, namespace: &str) -> Result<Self, Error> {
        let anchor = Regex::new(&format!(
            r#"<a\s+href="{}%3A([^"]+)"[^>]*>.*?</a>"#,
            regex::escape(namespace)
        ))?;

        Ok(Self {
            anchor,
            domain: domain.to_string(),
        })
    }

    /// Removes media links (markup and label) from the text,
    /// returning the raw references in order of appearance, duplicates included.
    pub fn take(&self, text: &str) -> (String, Vec<String>) {
        let references = self
            .anchor
            .captures_iter(text)
            .map(|caps| caps[1].to_string())
            .collect();
        let text = self.anchor.replace_all(text, "").into_owned();

        (text, references)
    }

    /// Builds the full URI of a media reference found in the article `title`.
    pub fn resolve(&self, title: &str, reference: &str) -> String {
        format!(
            "{}/wiki/{}#/media/File:{}",
            self.domain,
            underscored(title),
            reference.replace("%20", "_")
        )
    }
}

impl Default for MediaResolver {
    /// Czech Wikipedia defaults
    fn default() -> Self {
        Self {
            anchor: Regex::new(r#"<a\s+href="Soubor%3A([^"]+)"[^>]*>.*?</a>"#).unwrap(),
            domain: "cs.wikipedia.org".to_string(),
        }
    }
}
