/*!
# Output files

Extraction results are written into a single output directory:

- `sentences.txt`: `<canonical uri>\t<first sentence>` lines,
- `paragraphs.txt`: `<canonical uri>\t<first paragraph>` lines,
- `knowledgebase.txt`: see [crate::knowledgebase],
- `fulltexts/`: one file per article, see [crate::sharding].

[OutputFiles] opens the files of the selected outputs only, and dispatches each record to them.
!*/
mod fulltext;
mod outputs;

pub use fulltext::FulltextWriter;
pub use outputs::{OutputFiles, KNOWLEDGEBASE_FILE, PARAGRAPHS_FILE, SENTENCES_FILE};
