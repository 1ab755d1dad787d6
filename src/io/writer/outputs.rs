use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use log::info;

use crate::config::ExtractConfig;
use crate::error::Error;
use crate::extraction::ArticleRecord;
use crate::knowledgebase::KnowledgebaseWriter;

use super::FulltextWriter;

pub const SENTENCES_FILE: &str = "sentences.txt";
pub const PARAGRAPHS_FILE: &str = "paragraphs.txt";
pub const KNOWLEDGEBASE_FILE: &str = "knowledgebase.txt";

/// Holds a writer for each selected output.
pub struct OutputFiles {
    sentences: Option<BufWriter<File>>,
    paragraphs: Option<BufWriter<File>>,
    knowledgebase: Option<KnowledgebaseWriter<BufWriter<File>>>,
    fulltexts: Option<FulltextWriter>,
}

fn create(dst: &Path, filename: &str) -> Result<BufWriter<File>, Error> {
    let path = dst.join(filename);
    info!("creating {:?}", path);
    Ok(BufWriter::new(File::create(path)?))
}

impl OutputFiles {
    /// Creates (truncating) the files of the outputs selected in `config`.
    pub fn create(config: &ExtractConfig) -> Result<Self, Error> {
        let dst = config.outputdir.as_path();
        let modes = &config.modes;

        let sentences = if modes.sentences {
            Some(create(dst, SENTENCES_FILE)?)
        } else {
            None
        };
        let paragraphs = if modes.paragraphs {
            Some(create(dst, PARAGRAPHS_FILE)?)
        } else {
            None
        };
        let knowledgebase = if modes.knowledgebase {
            Some(KnowledgebaseWriter::new(
                create(dst, KNOWLEDGEBASE_FILE)?,
                config.kb_layout,
            ))
        } else {
            None
        };
        let fulltexts = if modes.fulltexts {
            Some(FulltextWriter::new(dst, config.fulltext_layout))
        } else {
            None
        };

        Ok(Self {
            sentences,
            paragraphs,
            knowledgebase,
            fulltexts,
        })
    }

    /// Writes the record to every open output.
    pub fn write(&mut self, record: &ArticleRecord) -> Result<(), Error> {
        if let Some(w) = &mut self.sentences {
            writeln!(w, "{}\t{}", record.canonical_uri, record.first_sentence)?;
        }
        if let Some(w) = &mut self.paragraphs {
            writeln!(w, "{}\t{}", record.canonical_uri, record.first_paragraph)?;
        }
        if let Some(w) = &mut self.knowledgebase {
            w.write(record)?;
        }
        if let Some(w) = &mut self.fulltexts {
            w.write(&record.title, &record.full_text)?;
        }
        Ok(())
    }

    pub fn flush(&mut self) -> Result<(), Error> {
        if let Some(w) = &mut self.sentences {
            w.flush()?;
        }
        if let Some(w) = &mut self.paragraphs {
            w.flush()?;
        }
        if let Some(w) = &mut self.knowledgebase {
            w.flush()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputModes;

    fn record() -> ArticleRecord {
        ArticleRecord {
            id: "1".to_string(),
            source_uri: "https://cs.wikipedia.org/wiki?curid=1".to_string(),
            canonical_uri: "https://cs.wikipedia.org/wiki/Praha".to_string(),
            title: "Praha".to_string(),
            first_sentence: "Praha je město.".to_string(),
            first_paragraph: "Praha je město. Je velká.".to_string(),
            full_text: "Praha je město. Je velká.".to_string(),
            media_uris: Vec::new(),
        }
    }

    #[test]
    fn selected_only() {
        let dst = tempfile::tempdir().unwrap();
        let modes = OutputModes {
            sentences: true,
            paragraphs: true,
            ..Default::default()
        };
        let config = ExtractConfig::new(dst.path(), dst.path(), modes);

        let mut out = OutputFiles::create(&config).unwrap();
        out.write(&record()).unwrap();
        out.flush().unwrap();

        assert_eq!(
            std::fs::read_to_string(dst.path().join(SENTENCES_FILE)).unwrap(),
            "https://cs.wikipedia.org/wiki/Praha\tPraha je město.\n"
        );
        assert_eq!(
            std::fs::read_to_string(dst.path().join(PARAGRAPHS_FILE)).unwrap(),
            "https://cs.wikipedia.org/wiki/Praha\tPraha je město. Je velká.\n"
        );
        assert!(!dst.path().join(KNOWLEDGEBASE_FILE).exists());
        assert!(!dst.path().join("fulltexts").exists());
    }
}
