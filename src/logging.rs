//! Logger initialization.
//!
//! Log lines look like `[<timestamp>]-[<target>]-[<LEVEL>]: <message>`.
//! The level defaults to `info` and can be changed with `RUST_LOG`.
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

use env_logger::{Builder, Env, Target};

use crate::error::Error;

/// Writes to stderr and to a log file.
struct Tee {
    file: File,
}

impl Write for Tee {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        io::stderr().write_all(buf)?;
        self.file.write_all(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stderr().flush()?;
        self.file.flush()
    }
}

fn builder() -> Builder {
    let mut builder = Builder::from_env(Env::default().default_filter_or("info"));
    builder.format(|buf, record| {
        writeln!(
            buf,
            "[{}]-[{}]-[{}]: {}",
            buf.timestamp(),
            record.target(),
            record.level(),
            record.args()
        )
    });
    builder
}

/// Initializes the global logger.
///
/// When `logfile` is set, lines are appended to it in addition to stderr.
pub fn init(logfile: Option<&Path>) -> Result<(), Error> {
    let mut builder = builder();

    if let Some(path) = logfile {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        builder.target(Target::Pipe(Box::new(Tee { file })));
    }

    builder
        .try_init()
        .map_err(|e| Error::Custom(format!("could not initialize logger: {}", e)))
}
