/*! Document block reading

WikiExtractor dumps hold many articles per file, each one wrapped in a
`<doc id=".." url=".." title="..">` / `</doc>` pair:

```text
<doc id="10" url="https://cs.wikipedia.org/wiki?curid=10" title="Astronomie">
<h1>Astronomie</h1>
Astronomie je věda...

</doc>
```

[BlockReader] iterates over those blocks, yielding a [RawBlock] per article.
!*/
use std::{
    borrow::Cow,
    fs::File,
    io::{BufRead, BufReader, Read},
    path::{Path, PathBuf},
};

use log::warn;

use crate::error::Error;

/// Prefix of a (trimmed) line opening a block.
pub const DOC_OPEN: &str = "<doc";
/// Literal (trimmed) line closing a block.
pub const DOC_CLOSE: &str = "</doc>";

/// Lines of a single article, from the opening tag to the closing one (included).
///
/// Lines are trimmed and blank lines are discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawBlock {
    path: PathBuf,
    seq: usize,
    line: usize,
    lines: Vec<String>,
}

impl RawBlock {
    pub fn new(path: PathBuf, seq: usize, line: usize, lines: Vec<String>) -> Self {
        Self {
            path,
            seq,
            line,
            lines,
        }
    }

    /// Joins lines with a newline, since newlines separate paragraphs in the dump.
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    /// File the block was read from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Position of the block in its file (1-based).
    pub fn seq(&self) -> usize {
        self.seq
    }

    /// Line of the opening tag (1-based).
    pub fn line(&self) -> usize {
        self.line
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

/// Reader that yields [RawBlock]s from a dump file.
///
/// Text outside of blocks is ignored.
/// Reaching the end of input inside a block yields a [Error::TruncatedBlock] and ends the iteration.
#[derive(Debug)]
pub struct BlockReader<T> {
    path: PathBuf,
    reader: BufReader<T>,
    buf: Vec<u8>,
    line_nb: usize,
    nb_blocks: usize,
    done: bool,
}

impl BlockReader<File> {
    pub fn from_path(path: &Path) -> Result<Self, Error> {
        let file = File::open(path)?;
        Ok(Self::new(file, path.to_path_buf()))
    }
}

impl<T: Read> BlockReader<T> {
    /// `path` is only used to locate blocks in logs and errors.
    pub fn new(reader: T, path: PathBuf) -> Self {
        Self {
            path,
            reader: BufReader::new(reader),
            buf: Vec::new(),
            line_nb: 0,
            nb_blocks: 0,
            done: false,
        }
    }

    /// Get next line, keeping track of the line number.
    ///
    /// Invalid UTF-8 sequences are replaced with U+FFFD.
    fn next_line(&mut self) -> Option<Result<String, Error>> {
        self.buf.clear();
        match self.reader.read_until(b'\n', &mut self.buf) {
            Ok(0) => return None,
            Ok(_) => (),
            Err(e) => return Some(Err(Error::Io(e))),
        }
        self.line_nb += 1;

        let line = String::from_utf8_lossy(&self.buf);
        if matches!(line, Cow::Owned(_)) {
            warn!(
                "{:?}: invalid UTF-8 at line {}, replaced",
                self.path, self.line_nb
            );
        }

        Some(Ok(line.trim_end_matches(&['\n', '\r'][..]).to_string()))
    }
}

impl<T: Read> Iterator for BlockReader<T> {
    type Item = Result<RawBlock, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        // skip until an opening tag
        let (start, first) = loop {
            match self.next_line() {
                None => {
                    self.done = true;
                    return None;
                }
                Some(Err(e)) => {
                    self.done = true;
                    return Some(Err(e));
                }
                Some(Ok(line)) => {
                    let line = line.trim();
                    if line.starts_with(DOC_OPEN) {
                        break (self.line_nb, line.to_string());
                    }
                }
            }
        };

        let mut lines = vec![first];
        loop {
            match self.next_line() {
                None => {
                    self.done = true;
                    return Some(Err(Error::TruncatedBlock {
                        path: self.path.clone(),
                        line: start,
                    }));
                }
                Some(Err(e)) => {
                    self.done = true;
                    return Some(Err(e));
                }
                Some(Ok(line)) => {
                    let line = line.trim();
                    if !line.is_empty() {
                        lines.push(line.to_string());
                    }
                    if line == DOC_CLOSE {
                        break;
                    }
                }
            }
        }

        self.nb_blocks += 1;
        Some(Ok(RawBlock::new(
            self.path.clone(),
            self.nb_blocks,
            start,
            lines,
        )))
    }
}
