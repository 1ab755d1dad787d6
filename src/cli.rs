//! Command line arguments and parameters management/parsing.
use std::path::{Path, PathBuf};

use structopt::StructOpt;

use crate::knowledgebase::KbLayout;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "wikiextract",
    about = "Plain text and knowledgebase extraction from WikiExtractor HTML dumps."
)]
/// Holds every command that is callable by the `wikiextract` command.
pub enum Wikiextract {
    #[structopt(about = "Extract first sentences, first paragraphs, full texts and knowledgebase")]
    Extract(Extract),
    #[structopt(about = "Remove knowledgebase records already present in another knowledgebase")]
    Dedup(Dedup),
    #[structopt(about = "Extract first sentences from a paragraphs file")]
    Sentences(Sentences),
}

impl Wikiextract {
    /// Log file requested by the command, if any.
    pub fn logfile(&self) -> Option<&Path> {
        match self {
            Wikiextract::Extract(e) => e.logfile.as_deref(),
            Wikiextract::Dedup(d) => d.logfile.as_deref(),
            Wikiextract::Sentences(s) => s.logfile.as_deref(),
        }
    }
}

#[derive(Debug, StructOpt)]
/// Extraction command and parameters.
///
/// ```sh
/// wikiextract extract -d <predump> -o <results> [-s] [-p] [-f] [--kb]
/// ```
///
/// Using every output flag at once is the most efficient way to extract data:
/// each page is fully processed anyway, flags only select what gets written.
pub struct Extract {
    #[structopt(
        short = "d",
        long = "datadir",
        parse(from_os_str),
        help = "WikiExtractor output directory (the one that contains AA, AB, ...)"
    )]
    pub datadir: PathBuf,
    #[structopt(
        short = "o",
        long = "outputdir",
        parse(from_os_str),
        help = "result directory, created if needed"
    )]
    pub outputdir: PathBuf,
    #[structopt(short = "s", help = "extract first sentences into <outputdir>/sentences.txt")]
    pub sentences: bool,
    #[structopt(short = "p", help = "extract first paragraphs into <outputdir>/paragraphs.txt")]
    pub paragraphs: bool,
    #[structopt(short = "f", help = "extract full texts into <outputdir>/fulltexts/")]
    pub fulltexts: bool,
    #[structopt(
        long = "kb",
        help = "generate a knowledgebase into <outputdir>/knowledgebase.txt"
    )]
    pub knowledgebase: bool,
    #[structopt(
        long = "kb-layout",
        default_value = "media",
        possible_values = &["media", "basic"],
        help = "knowledgebase columns. media: title, uri, id, paragraph, media uris. basic: id, uri, title, paragraph"
    )]
    pub kb_layout: KbLayout,
    #[structopt(
        long = "flat-fulltexts",
        help = "write full texts directly in <outputdir>/fulltexts/ instead of title buckets"
    )]
    pub flat_fulltexts: bool,
    #[structopt(long = "strict", help = "abort on the first malformed page")]
    pub strict: bool,
    #[structopt(
        long = "domain",
        default_value = "cs.wikipedia.org",
        help = "wiki domain, used to build media uris"
    )]
    pub domain: String,
    #[structopt(
        long = "media-namespace",
        default_value = "Soubor",
        help = "namespace of media links"
    )]
    pub media_namespace: String,
    #[structopt(
        short = "l",
        long = "logfile",
        parse(from_os_str),
        help = "also write logs into this file"
    )]
    pub logfile: Option<PathBuf>,
}

#[derive(Debug, StructOpt)]
/// Dedup command and parameters.
///
/// Records of `generated` whose url is present in `existing` are removed,
/// the remaining ones are written into `output`.
pub struct Dedup {
    #[structopt(long = "existing", parse(from_os_str), help = "existing knowledgebase")]
    pub existing: PathBuf,
    #[structopt(long = "generated", parse(from_os_str), help = "generated knowledgebase")]
    pub generated: PathBuf,
    #[structopt(
        long = "output",
        parse(from_os_str),
        help = "filtered knowledgebase destination"
    )]
    pub output: PathBuf,
    #[structopt(
        long = "schema",
        parse(from_os_str),
        help = "header file of the existing knowledgebase, used to find its WIKI_URL column"
    )]
    pub schema: Option<PathBuf>,
    #[structopt(
        long = "existing-column",
        help = "url column of the existing knowledgebase (0-based). Default is the last one."
    )]
    pub existing_column: Option<usize>,
    #[structopt(
        long = "generated-column",
        default_value = "1",
        help = "url column of the generated knowledgebase (0-based)"
    )]
    pub generated_column: usize,
    #[structopt(
        short = "l",
        long = "logfile",
        parse(from_os_str),
        help = "also write logs into this file"
    )]
    pub logfile: Option<PathBuf>,
}

#[derive(Debug, StructOpt)]
/// Sentences command and parameters.
///
/// Reads `<uri>\t<paragraph>` lines and writes `<uri>\t<first sentence>` lines.
pub struct Sentences {
    #[structopt(short = "i", long = "input", parse(from_os_str), help = "paragraphs file")]
    pub input: PathBuf,
    #[structopt(short = "o", long = "output", parse(from_os_str), help = "sentences file")]
    pub output: PathBuf,
    #[structopt(
        short = "l",
        long = "logfile",
        parse(from_os_str),
        help = "also write logs into this file"
    )]
    pub logfile: Option<PathBuf>,
}
