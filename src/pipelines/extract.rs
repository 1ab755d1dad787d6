//! Extraction pipeline
//!
//! Walks a WikiExtractor dump and writes the selected outputs.
//!
//! # Processing
//! 1. Dump files are visited in lexical order, one at a time, block by block.
//! 1. Each block is turned into an [ArticleRecord]. Malformed blocks are logged and skipped,
//!    unless strict mode is on, in which case the run is aborted.
//! 1. Disambiguation pages and the home page are discarded.
//! 1. The record is written to every selected output.
use log::{debug, error, info, warn};

use crate::config::ExtractConfig;
use crate::error::Error;
use crate::extraction::{ArticleRecord, Extractor};
use crate::io::reader::{Dump, RawBlock};
use crate::io::writer::OutputFiles;
use crate::pipelines::pipeline::Pipeline;

/// Number of pages between two progress messages.
const PROGRESS_STEP: usize = 10_000;

/// Counts of a finished extraction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    /// pages written.
    pub pages: usize,
    /// pages discarded by the title filter.
    pub filtered: usize,
    /// malformed or truncated blocks that were skipped.
    pub bad_blocks: usize,
}

pub struct Extraction {
    config: ExtractConfig,
}

impl Extraction {
    pub fn new(config: ExtractConfig) -> Self {
        Self { config }
    }

    /// Turns a raw block into a record, locating parse errors.
    fn extract(extractor: &Extractor, block: &RawBlock) -> Result<ArticleRecord, Error> {
        extractor
            .extract(&block.text())
            .map_err(|source| Error::Parse {
                path: block.path().to_path_buf(),
                block: block.seq(),
                line: block.line(),
                source,
            })
    }

    /// Decides whether a block-level error aborts the run.
    fn on_bad_block(&self, e: Error, summary: &mut Summary) -> Result<(), Error> {
        match e {
            Error::Parse { .. } | Error::TruncatedBlock { .. } if !self.config.strict => {
                warn!("skipping block: {}", e);
                summary.bad_blocks += 1;
                Ok(())
            }
            e => {
                error!("{}", e);
                Err(e)
            }
        }
    }
}

impl Pipeline<Summary> for Extraction {
    fn run(&self) -> Result<Summary, Error> {
        info!("==== Performing extraction ====");
        debug!("{:#?}", self.config);

        self.config.validate()?;

        let extractor = Extractor::new(&self.config.domain, &self.config.media_namespace)?;
        let mut outputs = OutputFiles::create(&self.config)?;
        let mut summary = Summary::default();

        for block in Dump::new(&self.config.datadir).blocks()? {
            let record = match block.and_then(|block| Self::extract(&extractor, &block)) {
                Ok(record) => record,
                Err(e) => {
                    self.on_bad_block(e, &mut summary)?;
                    continue;
                }
            };

            if !self.config.title_filter.accepts(&record.title) {
                debug!("discarding {:?}", record.title);
                summary.filtered += 1;
                continue;
            }

            outputs.write(&record)?;
            summary.pages += 1;

            if summary.pages % PROGRESS_STEP == 0 {
                info!("{} pages processed", summary.pages);
            }
        }

        outputs.flush()?;

        info!(
            "==== Extraction done: {} pages written, {} filtered out, {} bad blocks skipped ====",
            summary.pages, summary.filtered, summary.bad_blocks
        );

        Ok(summary)
    }
}
