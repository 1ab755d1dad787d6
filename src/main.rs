//! # wikiextract
//!
//! Extraction of plain text and of a knowledgebase from a
//! [WikiExtractor](https://github.com/attardi/wikiextractor) HTML dump.
//!
//! ## Getting started
//!
//! ```sh
//! wikiextract 1.0.0
//! Plain text and knowledgebase extraction from WikiExtractor HTML dumps.
//!
//! USAGE:
//!     wikiextract <SUBCOMMAND>
//!
//! SUBCOMMANDS:
//!     dedup        Remove knowledgebase records already present in another knowledgebase
//!     extract      Extract first sentences, first paragraphs, full texts and knowledgebase
//!     help         Prints this message or the help of the given subcommand(s)
//!     sentences    Extract first sentences from a paragraphs file
//! ```
use log::{debug, error, info};
use structopt::StructOpt;

use wikiextract::cli::Wikiextract;
use wikiextract::config::{DedupConfig, ExtractConfig, ResegmentConfig};
use wikiextract::error::Error;
use wikiextract::logging;
use wikiextract::pipelines::{Extraction, Pipeline};
use wikiextract::processing::{dedup, resegment};

fn run(opt: Wikiextract) -> Result<(), Error> {
    match opt {
        Wikiextract::Extract(e) => {
            let p = Extraction::new(ExtractConfig::from(e));
            p.run()?;
        }
        Wikiextract::Dedup(d) => {
            dedup::run(&DedupConfig::from(d))?;
        }
        Wikiextract::Sentences(s) => {
            resegment::run(&ResegmentConfig::from(s))?;
        }
    };
    Ok(())
}

fn main() -> Result<(), Error> {
    let opt = Wikiextract::from_args();
    logging::init(opt.logfile())?;
    debug!("cli args\n{:#?}", opt);

    info!("==== Started ====");
    if let Err(e) = run(opt) {
        error!("==== Terminating with exit status [1] ====");
        return Err(e);
    }
    info!("==== Successfully finished with exit status [0] ====");
    Ok(())
}
