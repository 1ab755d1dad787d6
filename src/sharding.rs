/*! Full text file naming

Full texts are written one file per article. To keep directory sizes bounded,
files are bucketed by the first two characters of the (escaped) title:

| title          | bucket     |
|----------------|------------|
| ``             | `others`   |
| `3D tisk`      | `numeric`  |
| `Apple`        | `AP`       |
| `AA Battery`   | `alpha_XX` |
| `A1 paper`     | `AlNum`    |
| `(Ne)jistota`  | `others`   |

The bucket only depends on the title, so the file of an article can be found without any index.

File names are limited to [MAX_FILENAME_BYTES]. Longer titles are cut on a character boundary
and suffixed with a hash of the whole escaped title, so that titles sharing a long prefix
still get distinct files.
!*/
use std::borrow::Cow;
use std::hash::Hasher;
use std::path::{Path, PathBuf};

use twox_hash::XxHash64;

/// Replacement for `/`, that can't be used in file names.
pub const SLASH_ESCAPE: &str = "_backslash_";

/// Directory (under the output directory) holding full texts.
pub const FULLTEXTS_DIR: &str = "fulltexts";

pub const BUCKET_OTHERS: &str = "others";
pub const BUCKET_NUMERIC: &str = "numeric";
pub const BUCKET_DOUBLE_LETTER: &str = "alpha_XX";
pub const BUCKET_ALNUM: &str = "AlNum";

/// Maximum length (in bytes) of a file name on common filesystems.
pub const MAX_FILENAME_BYTES: usize = 255;

const SHARDED_PREFIX: &str = "wp_";
const EXTENSION: &str = ".txt";

/// How full text files are laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FulltextLayout {
    /// `fulltexts/d_<bucket>/wp_<escaped title>.txt`
    #[default]
    Sharded,
    /// `fulltexts/<escaped title>.txt`
    Flat,
}

/// Makes a title usable as a file name.
pub fn escape_title(title: &str) -> String {
    title.replace('/', SLASH_ESCAPE)
}

/// Bucket name of an (escaped) title.
pub fn bucket(title: &str) -> String {
    let mut chars = title.chars();
    let (first, second) = match (chars.next(), chars.next()) {
        (None, _) => return BUCKET_OTHERS.to_string(),
        (Some(first), second) => (first, second),
    };

    if first.is_ascii_digit() {
        return BUCKET_NUMERIC.to_string();
    }

    match second {
        Some(second) if first.is_alphabetic() && second.is_alphabetic() => {
            if first.to_lowercase().eq(second.to_lowercase()) {
                BUCKET_DOUBLE_LETTER.to_string()
            } else {
                first.to_uppercase().chain(second.to_uppercase()).collect()
            }
        }
        Some(second) if first.is_alphabetic() && second.is_ascii_digit() => {
            BUCKET_ALNUM.to_string()
        }
        _ => BUCKET_OTHERS.to_string(),
    }
}

/// Fits an escaped title into `max` bytes.
fn file_stem(escaped: &str, max: usize) -> Cow<str> {
    if escaped.len() <= max {
        return Cow::Borrowed(escaped);
    }

    let mut hasher = XxHash64::with_seed(0);
    hasher.write(escaped.as_bytes());
    let suffix = format!("_{:016x}", hasher.finish());

    let mut end = max - suffix.len();
    while !escaped.is_char_boundary(end) {
        end -= 1;
    }

    Cow::Owned(format!("{}{}", &escaped[..end], suffix))
}

/// Path of the full text file of the article `title`, relative to `outputdir`.
///
/// The bucket and file name are computed from the escaped title as is,
/// parenthesized suffixes included.
pub fn fulltext_path(outputdir: &Path, title: &str, layout: FulltextLayout) -> PathBuf {
    let escaped = escape_title(title);
    let mut path = outputdir.join(FULLTEXTS_DIR);
    match layout {
        FulltextLayout::Sharded => {
            let stem = file_stem(
                &escaped,
                MAX_FILENAME_BYTES - SHARDED_PREFIX.len() - EXTENSION.len(),
            );
            path.push(format!("d_{}", bucket(&escaped)));
            path.push(format!("{}{}{}", SHARDED_PREFIX, stem, EXTENSION));
        }
        FulltextLayout::Flat => {
            let stem = file_stem(&escaped, MAX_FILENAME_BYTES - EXTENSION.len());
            path.push(format!("{}{}", stem, EXTENSION));
        }
    }
    path
}
