/*! Run configuration

Immutable configuration built once from the command line,
validated before any processing and then passed to the pipelines.
!*/
use std::path::{Path, PathBuf};

use log::error;

use crate::cli;
use crate::error::Error;
use crate::knowledgebase::{KbLayout, TitleFilter};
use crate::processing::dedup::UrlColumn;
use crate::sharding::{FulltextLayout, FULLTEXTS_DIR};

/// Selected outputs of an extraction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutputModes {
    pub sentences: bool,
    pub paragraphs: bool,
    pub fulltexts: bool,
    pub knowledgebase: bool,
}

impl OutputModes {
    pub fn any(&self) -> bool {
        self.sentences || self.paragraphs || self.fulltexts || self.knowledgebase
    }
}

/// Logs every problem and turns them into a single [Error::Precondition].
fn check(problems: Vec<String>) -> Result<(), Error> {
    if problems.is_empty() {
        return Ok(());
    }
    for problem in &problems {
        error!("{}", problem);
    }
    Err(Error::Precondition(problems.join("; ")))
}

#[derive(Debug, Clone)]
pub struct ExtractConfig {
    pub datadir: PathBuf,
    pub outputdir: PathBuf,
    pub modes: OutputModes,
    pub kb_layout: KbLayout,
    pub fulltext_layout: FulltextLayout,
    pub strict: bool,
    pub domain: String,
    pub media_namespace: String,
    pub title_filter: TitleFilter,
}

impl ExtractConfig {
    /// Configuration with czech Wikipedia defaults.
    pub fn new(datadir: &Path, outputdir: &Path, modes: OutputModes) -> Self {
        Self {
            datadir: datadir.to_path_buf(),
            outputdir: outputdir.to_path_buf(),
            modes,
            kb_layout: KbLayout::default(),
            fulltext_layout: FulltextLayout::default(),
            strict: false,
            domain: "cs.wikipedia.org".to_string(),
            media_namespace: "Soubor".to_string(),
            title_filter: TitleFilter::default(),
        }
    }

    /// Checks that the dump exists and that something has to be done,
    /// then creates output directories.
    ///
    /// Every problem is logged before returning.
    pub fn validate(&self) -> Result<(), Error> {
        let mut problems = Vec::new();

        if !self.datadir.is_dir() {
            problems.push(format!("Could not find data directory {:?}", self.datadir));
        }

        if !self.modes.any() {
            problems.push(
                "No extraction option specified (-s, -p, -f, --kb), nothing to do".to_string(),
            );
        }

        if let Err(e) = std::fs::create_dir_all(&self.outputdir) {
            problems.push(format!(
                "Cannot create output directory {:?}: {}",
                self.outputdir, e
            ));
        } else if self.modes.fulltexts {
            let fulltexts = self.outputdir.join(FULLTEXTS_DIR);
            if let Err(e) = std::fs::create_dir_all(&fulltexts) {
                problems.push(format!("Cannot create directory {:?}: {}", fulltexts, e));
            }
        }

        check(problems)
    }
}

impl From<cli::Extract> for ExtractConfig {
    fn from(e: cli::Extract) -> Self {
        let modes = OutputModes {
            sentences: e.sentences,
            paragraphs: e.paragraphs,
            fulltexts: e.fulltexts,
            knowledgebase: e.knowledgebase,
        };

        Self {
            kb_layout: e.kb_layout,
            fulltext_layout: if e.flat_fulltexts {
                FulltextLayout::Flat
            } else {
                FulltextLayout::Sharded
            },
            strict: e.strict,
            domain: e.domain,
            media_namespace: e.media_namespace,
            ..Self::new(&e.datadir, &e.outputdir, modes)
        }
    }
}

#[derive(Debug, Clone)]
pub struct DedupConfig {
    pub existing: PathBuf,
    pub generated: PathBuf,
    pub output: PathBuf,
    /// Header file of the existing knowledgebase. Takes precedence over `existing_column`.
    pub schema: Option<PathBuf>,
    pub existing_column: UrlColumn,
    pub generated_column: usize,
}

impl DedupConfig {
    pub fn validate(&self) -> Result<(), Error> {
        let mut problems = Vec::new();

        if !self.existing.is_file() {
            problems.push(format!(
                "Could not find existing knowledgebase {:?}",
                self.existing
            ));
        }
        if !self.generated.is_file() {
            problems.push(format!(
                "Could not find generated knowledgebase {:?}",
                self.generated
            ));
        }
        if let Some(schema) = &self.schema {
            if !schema.is_file() {
                problems.push(format!("Could not find schema file {:?}", schema));
            }
        }
        if self.output == self.existing || self.output == self.generated {
            problems.push(format!(
                "Output {:?} would overwrite an input knowledgebase",
                self.output
            ));
        }

        check(problems)
    }
}

impl From<cli::Dedup> for DedupConfig {
    fn from(d: cli::Dedup) -> Self {
        Self {
            existing: d.existing,
            generated: d.generated,
            output: d.output,
            schema: d.schema,
            existing_column: d
                .existing_column
                .map_or(UrlColumn::Last, UrlColumn::Index),
            generated_column: d.generated_column,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ResegmentConfig {
    pub input: PathBuf,
    pub output: PathBuf,
}

impl ResegmentConfig {
    pub fn validate(&self) -> Result<(), Error> {
        let mut problems = Vec::new();
        if !self.input.is_file() {
            problems.push(format!("Could not find paragraphs file {:?}", self.input));
        }
        if self.input == self.output {
            problems.push(format!("Output {:?} would overwrite the input", self.output));
        }
        check(problems)
    }
}

impl From<cli::Sentences> for ResegmentConfig {
    fn from(s: cli::Sentences) -> Self {
        Self {
            input: s.input,
            output: s.output,
        }
    }
}
