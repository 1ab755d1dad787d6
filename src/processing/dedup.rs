/*! Deduplication against an existing knowledgebase

Records of a generated knowledgebase whose url is already present in an existing knowledgebase are removed.

Urls are compared without their scheme, so that `https://cs.wikipedia.org/wiki/Foo`
and `//cs.wikipedia.org/wiki/Foo` are considered equal.

The url column of the existing knowledgebase is either given by position,
or looked up in a header schema file, whose tab separated column names may be prefixed by
type annotations (`<person>ID`, `{m}[image]IMAGE`, ...). The column named `WIKI_URL` is used.
!*/
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Read, Write};

use lazy_static::lazy_static;
use log::{debug, info};
use regex::Regex;

use crate::config::DedupConfig;
use crate::error::Error;

/// Name of the url column in header schemas.
pub const URL_COLUMN_NAME: &str = "WIKI_URL";

/// Number of records between two progress messages.
const PROGRESS_STEP: usize = 20_000;

lazy_static! {
    static ref TYPE_ANNOTATIONS: Regex = Regex::new(r"^(?:<[^>]*>|\{[^}]*\}|\[[^\]]*\])*").unwrap();
}

/// Column holding the url.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UrlColumn {
    Last,
    Index(usize),
}

impl UrlColumn {
    fn get<'a>(&self, record: &'a csv::StringRecord) -> Option<&'a str> {
        match self {
            UrlColumn::Last => record.iter().last(),
            UrlColumn::Index(i) => record.get(*i),
        }
    }
}

/// Records kept and removed by [filter_rows].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DedupStats {
    pub retained: usize,
    pub removed: usize,
}

/// Comparison key of an url: trimmed, without scheme.
pub fn url_key(url: &str) -> &str {
    let url = url.trim();
    url.strip_prefix("https:")
        .or_else(|| url.strip_prefix("http:"))
        .unwrap_or(url)
}

/// Finds the index of the `WIKI_URL` column in a header schema.
///
/// Returns `None` if no line of the schema has such a column.
pub fn schema_url_column<R: BufRead>(schema: R) -> Result<Option<usize>, Error> {
    for line in schema.lines() {
        let line = line?;
        let found = line
            .split('\t')
            .position(|name| TYPE_ANNOTATIONS.replace(name.trim(), "") == URL_COLUMN_NAME);
        if found.is_some() {
            return Ok(found);
        }
    }
    Ok(None)
}

/// Reads the url keys of a knowledgebase.
pub fn existing_urls<R: Read>(reader: R, column: UrlColumn) -> Result<HashSet<String>, Error> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .from_reader(reader);

    let mut urls = HashSet::new();
    for record in reader.records() {
        let record = record?;
        if let Some(url) = column.get(&record) {
            urls.insert(url_key(url).to_string());
        }
    }
    Ok(urls)
}

/// Copies the lines of `generated` whose url key is not in `existing`, in order.
///
/// Lines are copied verbatim. Lines without a url column are kept.
pub fn filter_rows<R: BufRead, W: Write>(
    mut generated: R,
    mut output: W,
    existing: &HashSet<String>,
    column: usize,
) -> Result<DedupStats, Error> {
    let mut stats = DedupStats::default();
    let mut line = String::new();

    while generated.read_line(&mut line)? > 0 {
        let url = line
            .trim_end_matches(&['\n', '\r'][..])
            .split('\t')
            .nth(column);

        match url {
            Some(url) if existing.contains(url_key(url)) => stats.removed += 1,
            _ => {
                output.write_all(line.as_bytes())?;
                stats.retained += 1;
            }
        }

        let processed = stats.retained + stats.removed;
        if processed % PROGRESS_STEP == 0 {
            info!("==== Processed {} records ====", processed);
        }
        line.clear();
    }

    output.flush()?;
    Ok(stats)
}

/// Runs the whole deduplication step described by `config`.
pub fn run(config: &DedupConfig) -> Result<DedupStats, Error> {
    info!("==== Removing existing records ====");
    config.validate()?;

    let column = match &config.schema {
        Some(schema) => match schema_url_column(BufReader::new(File::open(schema)?))? {
            Some(i) => UrlColumn::Index(i),
            None => {
                return Err(Error::Custom(format!(
                    "no {} column in schema {:?}",
                    URL_COLUMN_NAME, schema
                )))
            }
        },
        None => config.existing_column,
    };
    debug!("existing knowledgebase url column: {:?}", column);

    let existing = existing_urls(File::open(&config.existing)?, column)?;
    info!("{} existing urls loaded", existing.len());

    let generated = BufReader::new(File::open(&config.generated)?);
    let output = BufWriter::new(File::create(&config.output)?);
    let stats = filter_rows(generated, output, &existing, config.generated_column)?;

    info!(
        "==== Deduplication done. Records removed: {}. Length of the resulting knowledgebase: {} ====",
        stats.removed, stats.retained
    );
    Ok(stats)
}
