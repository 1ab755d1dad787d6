//! One file per article writer.
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::error::Error;
use crate::sharding::{fulltext_path, FulltextLayout};

/// Full text writer.
///
/// Bucket directories are created on first use.
/// Files are truncated when they already exist, so that an article whose title
/// appears twice ends up with the content of the last occurrence.
pub struct FulltextWriter {
    dst: PathBuf,
    layout: FulltextLayout,
    dirs: HashSet<PathBuf>,
    pub nb_files: u64,
}

impl FulltextWriter {
    /// Create a new [FulltextWriter] writing under `<dst>/fulltexts`.
    /// Note that nothing is created unless a write is performed.
    pub fn new(dst: &Path, layout: FulltextLayout) -> Self {
        Self {
            dst: dst.to_path_buf(),
            layout,
            dirs: HashSet::new(),
            nb_files: 0,
        }
    }

    /// Writes `=<title>=` followed by the full text into the file of the article.
    pub fn write(&mut self, title: &str, full_text: &str) -> Result<PathBuf, Error> {
        let path = fulltext_path(&self.dst, title, self.layout);

        if let Some(parent) = path.parent() {
            if !self.dirs.contains(parent) {
                debug!("creating {:?}", parent);
                std::fs::create_dir_all(parent)?;
                self.dirs.insert(parent.to_path_buf());
            }
        }

        if path.exists() {
            warn!("overwriting {:?}", path);
        }

        let mut file = BufWriter::new(File::create(&path)?);
        writeln!(file, "={}=", title)?;
        file.write_all(full_text.as_bytes())?;
        file.flush()?;

        self.nb_files += 1;
        Ok(path)
    }
}
