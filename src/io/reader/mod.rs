/*! Dump reading utilities

- [BlockReader] splits a single dump file into [RawBlock]s.
- [Dump] walks the two-level dump tree and chains the blocks of every file.
!*/
mod blockreader;
mod dump;

pub use blockreader::{BlockReader, RawBlock, DOC_CLOSE, DOC_OPEN};
pub use dump::{Blocks, Dump};
