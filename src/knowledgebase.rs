/*! Knowledgebase

Tab separated index of the extracted articles, one line per article.

Two column layouts are available (see [KbLayout]):
- `media`: `title, uri, id, first paragraph, media uris ('|' separated)`
- `basic`: `id, uri, title, first paragraph`

Titles are emitted without their parenthesized disambiguation suffix (`Praha (město)` → `Praha`).
!*/
use std::fmt;
use std::io::Write;
use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::Error;
use crate::extraction::segment::single_line;
use crate::extraction::ArticleRecord;

/// Separator of media uris in the last column of the `media` layout.
pub const MEDIA_SEPARATOR: &str = "|";

lazy_static! {
    static ref TITLE_SUFFIX: Regex = Regex::new(r"\s*\([^()]*\)\s*$").unwrap();
}

/// Column layout of the knowledgebase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KbLayout {
    #[default]
    Media,
    Basic,
}

impl FromStr for KbLayout {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "media" => Ok(KbLayout::Media),
            "basic" => Ok(KbLayout::Basic),
            other => Err(format!(
                "unknown knowledgebase layout {:?} (expected media or basic)",
                other
            )),
        }
    }
}

impl fmt::Display for KbLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KbLayout::Media => write!(f, "media"),
            KbLayout::Basic => write!(f, "basic"),
        }
    }
}

/// Removes a trailing parenthesized part of a title.
pub fn strip_title_suffix(title: &str) -> &str {
    match TITLE_SUFFIX.find(title) {
        // keep titles that are only a parenthesized part
        Some(m) if m.start() > 0 => &title[..m.start()],
        _ => title,
    }
}

/// Discards pages that are not articles (disambiguations, home page).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleFilter {
    disambiguation_markers: Vec<String>,
    home_pages: Vec<String>,
}

impl Default for TitleFilter {
    /// Czech Wikipedia markers.
    fn default() -> Self {
        Self {
            disambiguation_markers: vec!["(rozcestník)".to_string()],
            home_pages: vec!["Hlavní strana".to_string()],
        }
    }
}

impl TitleFilter {
    /// returns `true` if the page titled `title` has to be kept.
    pub fn accepts(&self, title: &str) -> bool {
        !(self.home_pages.iter().any(|home| home == title)
            || self
                .disambiguation_markers
                .iter()
                .any(|marker| title.contains(marker.as_str())))
    }
}

/// Writes knowledgebase lines.
pub struct KnowledgebaseWriter<W: Write> {
    writer: csv::Writer<W>,
    layout: KbLayout,
}

impl<W: Write> KnowledgebaseWriter<W> {
    pub fn new(writer: W, layout: KbLayout) -> Self {
        // fields are written as is: no quoting, tabs are expected to be absent from fields.
        let writer = csv::WriterBuilder::new()
            .delimiter(b'\t')
            .quote_style(csv::QuoteStyle::Never)
            .from_writer(writer);

        Self { writer, layout }
    }

    pub fn write(&mut self, record: &ArticleRecord) -> Result<(), Error> {
        let title = single_line(strip_title_suffix(&record.title));
        let title = title.as_str();
        match self.layout {
            KbLayout::Media => {
                let media = record.media_uris.join(MEDIA_SEPARATOR);
                self.writer.write_record([
                    title,
                    record.canonical_uri.as_str(),
                    record.id.as_str(),
                    record.first_paragraph.as_str(),
                    media.as_str(),
                ])?
            }
            KbLayout::Basic => self.writer.write_record([
                record.id.as_str(),
                record.canonical_uri.as_str(),
                title,
                record.first_paragraph.as_str(),
            ])?,
        }
        Ok(())
    }

    pub fn flush(&mut self) -> Result<(), Error> {
        self.writer.flush()?;
        Ok(())
    }

    /// Flushes and returns the inner writer.
    pub fn into_inner(self) -> Result<W, Error> {
        self.writer
            .into_inner()
            .map_err(|e| Error::Io(std::io::Error::new(e.error().kind(), e.to_string())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> ArticleRecord {
        ArticleRecord {
            id: "42".to_string(),
            source_uri: "https://cs.wikipedia.org/wiki?curid=42".to_string(),
            canonical_uri: "https://cs.wikipedia.org/wiki/Praha_(město)".to_string(),
            title: "Praha (město)".to_string(),
            first_sentence: "Praha je město.".to_string(),
            first_paragraph: "Praha je město. Je \"hlavní\".".to_string(),
            full_text: String::new(),
            media_uris: vec!["a.jpg".to_string(), "b.png".to_string()],
        }
    }

    fn written(layout: KbLayout, records: &[ArticleRecord]) -> String {
        let mut w = KnowledgebaseWriter::new(Vec::new(), layout);
        for r in records {
            w.write(r).unwrap();
        }
        String::from_utf8(w.into_inner().unwrap()).unwrap()
    }

    #[test]
    fn media_layout() {
        assert_eq!(
            written(KbLayout::Media, &[record()]),
            "Praha\thttps://cs.wikipedia.org/wiki/Praha_(město)\t42\tPraha je město. Je \"hlavní\".\ta.jpg|b.png\n"
        );
    }

    #[test]
    fn basic_layout() {
        let mut no_media = record();
        no_media.media_uris.clear();
        assert_eq!(
            written(KbLayout::Basic, &[record(), no_media]),
            "42\thttps://cs.wikipedia.org/wiki/Praha_(město)\tPraha\tPraha je město. Je \"hlavní\".\n\
             42\thttps://cs.wikipedia.org/wiki/Praha_(město)\tPraha\tPraha je město. Je \"hlavní\".\n"
        );
    }

    #[test]
    fn empty_media_column() {
        let mut r = record();
        r.media_uris.clear();
        r.first_paragraph.clear();
        assert_eq!(
            written(KbLayout::Media, &[r]),
            "Praha\thttps://cs.wikipedia.org/wiki/Praha_(město)\t42\t\t\n"
        );
    }

    #[test]
    fn fixed_columns() {
        let mut r = record();
        r.title = "Tab\tv názvu (město)".to_string();
        let line = written(KbLayout::Basic, &[r]);
        assert_eq!(line.trim_end_matches('\n').split('\t').count(), 4);
        assert!(line.contains("\tTab v názvu\t"));
    }

    #[test]
    fn layout_from_str() {
        assert_eq!("media".parse::<KbLayout>(), Ok(KbLayout::Media));
        assert_eq!("basic".parse::<KbLayout>(), Ok(KbLayout::Basic));
        assert!("other".parse::<KbLayout>().is_err());
    }

    #[test]
    fn title_suffix() {
        assert_eq!(strip_title_suffix("Praha (město)"), "Praha");
        assert_eq!(strip_title_suffix("Praha"), "Praha");
        assert_eq!(strip_title_suffix("Merkur (planeta) (rozcestník)"), "Merkur (planeta)");
        assert_eq!(strip_title_suffix("(Ne)jistota"), "(Ne)jistota");
        assert_eq!(strip_title_suffix("(1)"), "(1)");
    }

    #[test]
    fn title_filter() {
        let f = TitleFilter::default();
        assert!(f.accepts("Praha"));
        assert!(f.accepts("Praha (město)"));
        assert!(!f.accepts("Merkur (rozcestník)"));
        assert!(!f.accepts("Hlavní strana"));
        assert!(f.accepts("Hlavní strana (film)"));
    }
}
