/*! Dump traversal

A WikiExtractor dump is a two-level tree: `<root>/<AA, AB, ...>/<wiki_00, wiki_01, ...>`.

Files are visited in lexical order so that output files are reproducible from one run to another.
!*/
use std::{
    fs::File,
    path::{Path, PathBuf},
};

use itertools::Itertools;
use log::debug;

use crate::error::Error;

use super::blockreader::{BlockReader, RawBlock};

pub struct Dump {
    root: PathBuf,
}

impl Dump {
    pub fn new(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
        }
    }

    /// Lists `<root>/*/*` regular files, sorted.
    pub fn files(&self) -> Result<Vec<PathBuf>, Error> {
        // escape the root so that brackets or stars in it are not taken as wildcards
        let pattern = format!(
            "{}/*/*",
            glob::Pattern::escape(&self.root.to_string_lossy())
        );

        debug!("listing dump files with {}", pattern);
        let mut files = Vec::new();
        for path in glob::glob(&pattern)? {
            let path = path?;
            if path.is_file() {
                files.push(path);
            }
        }

        Ok(files.into_iter().sorted().collect())
    }

    /// Lazily iterates over every block of every file.
    ///
    /// Only one file is open at a time.
    pub fn blocks(&self) -> Result<Blocks, Error> {
        Ok(Blocks {
            files: self.files()?.into_iter(),
            current: None,
        })
    }
}

/// Iterator over the blocks of a [Dump]. See [Dump::blocks].
pub struct Blocks {
    files: std::vec::IntoIter<PathBuf>,
    current: Option<BlockReader<File>>,
}

impl Iterator for Blocks {
    type Item = Result<RawBlock, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(reader) = &mut self.current {
                if let Some(block) = reader.next() {
                    return Some(block);
                }
            }

            // current file is exhausted (or none was opened yet)
            let path = self.files.next()?;
            debug!("opening {:?}", path);
            match BlockReader::from_path(&path) {
                Ok(reader) => self.current = Some(reader),
                Err(e) => {
                    self.current = None;
                    return Some(Err(e));
                }
            }
        }
    }
}
