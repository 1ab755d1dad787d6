//! First sentences from an existing paragraphs file.
//!
//! Reads `<uri>\t<paragraph>` lines and writes `<uri>\t<first sentence>` lines,
//! so that sentences can be re-derived without a new pass over the dump.
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};

use log::{debug, info};

use crate::config::ResegmentConfig;
use crate::error::Error;
use crate::extraction::segment::{single_line, Segmenter};

const PROGRESS_STEP: usize = 10_000;

/// Writes the first sentence of each paragraph line of `paragraphs` into `sentences`.
///
/// Lines without a tab are skipped. Returns the number of written sentences.
pub fn resegment<R: BufRead, W: Write>(
    paragraphs: R,
    mut sentences: W,
    segmenter: &Segmenter,
) -> Result<usize, Error> {
    let mut nb_sentences = 0;

    for (idx, line) in paragraphs.lines().enumerate() {
        let line = line?;
        let (uri, paragraph) = match line.split_once('\t') {
            Some(fields) => fields,
            None => {
                debug!("line {}: no paragraph, skipping", idx + 1);
                continue;
            }
        };

        let sentence = single_line(segmenter.first_sentence(paragraph.trim()));
        writeln!(sentences, "{}\t{}", uri, sentence)?;
        nb_sentences += 1;

        if nb_sentences % PROGRESS_STEP == 0 {
            info!("Extracted {} sentences.", nb_sentences);
        }
    }

    sentences.flush()?;
    Ok(nb_sentences)
}

pub fn run(config: &ResegmentConfig) -> Result<usize, Error> {
    info!("==== Performing sentence extraction from paragraphs file ====");
    config.validate()?;

    let paragraphs = BufReader::new(File::open(&config.input)?);
    let sentences = BufWriter::new(File::create(&config.output)?);
    let nb_sentences = resegment(paragraphs, sentences, &Segmenter::default())?;

    info!("Finished extraction of {} sentences.", nb_sentences);
    Ok(nb_sentences)
}
