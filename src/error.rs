//! Error enum
use std::fmt;
use std::path::PathBuf;

/// Reasons a single document block could not be turned into an article.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// no `<doc id=".." url=".." title="..">` header in the block.
    MissingHeader,
    /// more than one header matched in the same block.
    MultipleHeaders(usize),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::MissingHeader => write!(f, "no document header found"),
            ParseError::MultipleHeaders(n) => write!(f, "expected one document header, found {}", n),
        }
    }
}

impl std::error::Error for ParseError {}

#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    Csv(csv::Error),
    Regex(regex::Error),
    Glob(glob::GlobError),
    GlobPattern(glob::PatternError),
    /// A block that could not be parsed, located by file, block sequence number (1-based)
    /// and line of its opening tag.
    Parse {
        path: PathBuf,
        block: usize,
        line: usize,
        source: ParseError,
    },
    /// End of file reached inside a block.
    TruncatedBlock { path: PathBuf, line: usize },
    /// Invalid invocation detected before any processing.
    Precondition(String),
    Custom(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "i/o error: {}", e),
            Error::Csv(e) => write!(f, "tsv error: {}", e),
            Error::Regex(e) => write!(f, "invalid pattern: {}", e),
            Error::Glob(e) => write!(f, "directory listing error: {}", e),
            Error::GlobPattern(e) => write!(f, "invalid directory pattern: {}", e),
            Error::Parse {
                path,
                block,
                line,
                source,
            } => write!(
                f,
                "{:?}: block #{} (line {}): {}",
                path, block, line, source
            ),
            Error::TruncatedBlock { path, line } => write!(
                f,
                "{:?}: block starting at line {} is not closed before end of file",
                path, line
            ),
            Error::Precondition(msg) => write!(f, "{}", msg),
            Error::Custom(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            Error::Csv(e) => Some(e),
            Error::Regex(e) => Some(e),
            Error::Glob(e) => Some(e),
            Error::GlobPattern(e) => Some(e),
            Error::Parse { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Error {
        Error::Io(e)
    }
}

impl From<csv::Error> for Error {
    fn from(e: csv::Error) -> Error {
        Error::Csv(e)
    }
}

impl From<regex::Error> for Error {
    fn from(e: regex::Error) -> Error {
        Error::Regex(e)
    }
}

impl From<glob::GlobError> for Error {
    fn from(e: glob::GlobError) -> Error {
        Error::Glob(e)
    }
}

impl From<glob::PatternError> for Error {
    fn from(e: glob::PatternError) -> Error {
        Error::GlobPattern(e)
    }
}

impl From<String> for Error {
    fn from(s: String) -> Error {
        Error::Custom(s)
    }
}
