/*! Article extraction

Turns the text of a [crate::io::reader::RawBlock] into an [ArticleRecord].

# Processing
Order matters, each step relies on the previous ones having removed some markup:
1. entities are decoded twice (see [entities]),
1. media links are extracted and removed,
1. the `<doc>` header is parsed and the canonical URI derived,
1. the `<doc>` tags are removed, hyperlinks are replaced by their text,
1. media references are resolved into full URIs,
1. both renderings are produced (see [format]), and the first paragraph/sentence are taken
   from the plain one (see [segment]).
!*/
pub mod entities;
pub mod fields;
pub mod format;
pub mod segment;

use crate::error::{Error, ParseError};

use fields::MediaResolver;
use segment::Segmenter;

/// Everything extracted from an article.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleRecord {
    pub id: String,
    pub source_uri: String,
    pub canonical_uri: String,
    pub title: String,
    pub first_sentence: String,
    pub first_paragraph: String,
    pub full_text: String,
    pub media_uris: Vec<String>,
}

/// Per-block extractor.
pub struct Extractor {
    media: MediaResolver,
    segmenter: Segmenter,
}

impl Default for Extractor {
    fn default() -> Self {
        Self {
            media: MediaResolver::default(),
            segmenter: Segmenter::default(),
        }
    }
}

impl Extractor {
    /// Extractor for a wiki hosted on `domain`, whose media namespace is `media_namespace`.
    pub fn new(domain: &str, media_namespace: &str) -> Result<Self, Error> {
        Ok(Self {
            media: MediaResolver::new(domain, media_namespace)?,
            segmenter: Segmenter::default(),
        })
    }

    /// Extracts an article from the (newline joined) lines of a block.
    pub fn extract(&self, block: &str) -> Result<ArticleRecord, ParseError> {
        let text = entities::decode_twice(block);

        let (text, media_refs) = self.media.take(&text);

        let header = fields::parse_header(&text)?;
        let canonical_uri = fields::canonical_uri(&header.url, &header.title);

        let body = fields::strip_wrapper(&text);
        let body = fields::replace_links(&body);

        let media_uris = media_refs
            .iter()
            .map(|reference| self.media.resolve(&header.title, reference))
            .collect();

        let plain = format::plain_index(&body);
        let full_text = format::full_text(&body);

        let first_paragraph = segment::first_paragraph(&plain);
        let first_sentence = self.segmenter.first_sentence(first_paragraph);

        Ok(ArticleRecord {
            id: header.id,
            source_uri: header.url,
            canonical_uri,
            title: header.title,
            first_sentence: segment::single_line(first_sentence),
            first_paragraph: segment::single_line(first_paragraph),
            full_text,
            media_uris,
        })
    }
}
