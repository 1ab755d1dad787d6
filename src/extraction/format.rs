/*! Text renderings

Two renderings are produced from the same header/link-free body:

- [plain_index]: no headings, no markup. Only used to get the first paragraph/sentence.
- [full_text]: headings are kept as `== Heading ==` lines,
  list items as `* item` lines and description lists as `* term`/`` `-> description`` lines.

Tags are matched by name only, attributes are ignored.
Downstream tools rely on the exact markers, so these are plain string substitutions
rather than a markup-aware conversion.
!*/
use lazy_static::lazy_static;
use regex::{Captures, Regex};

/// Prefix of list items and description terms.
pub const BULLET: &str = "* ";
/// Prefix of descriptions in description lists.
pub const ARROW: &str = "`-> ";

lazy_static! {
    // one pattern per level, `.` does not cross lines.
    static ref HEADING_BLOCKS: Vec<Regex> = (1..=6)
        .map(|n| Regex::new(&format!(r"<h{n}(?:\s[^>]*)?>.*?</h{n}>")).unwrap())
        .collect();
    static ref HEADING_OPEN: Regex = Regex::new(r"<h([1-6])(?:\s[^>]*)?>").unwrap();
    static ref HEADING_CLOSE: Regex = Regex::new(r"</h([1-6])>").unwrap();
    static ref LINE_BREAK: Regex = Regex::new(r"<br(?:\s[^>]*)?/?>").unwrap();
    static ref LIST: Regex = Regex::new(r"</?(?:ul|ol)(?:\s[^>]*)?>").unwrap();
    static ref LIST_ITEM_OPEN: Regex = Regex::new(r"<li(?:\s[^>]*)?>").unwrap();
    static ref LIST_ITEM_CLOSE: Regex = Regex::new(r"</li>").unwrap();
    static ref DESCRIPTION_LIST: Regex = Regex::new(r"</?dl(?:\s[^>]*)?>").unwrap();
    static ref TERM_OPEN: Regex = Regex::new(r"<dt(?:\s[^>]*)?>").unwrap();
    static ref DESCRIPTION_OPEN: Regex = Regex::new(r"<dd(?:\s[^>]*)?>").unwrap();
    static ref DESCRIPTION_CLOSE: Regex = Regex::new(r"</d[td]>").unwrap();
    static ref TAG: Regex = Regex::new(r"</?\w+(?:\s[^<>]*)?/?>").unwrap();
    static ref NEWLINES: Regex = Regex::new(r"\n+").unwrap();
}

/// Removes every remaining tag, collapses newline runs and trims.
fn finish(text: &str) -> String {
    let text = TAG.replace_all(text, "");
    let text = NEWLINES.replace_all(&text, "\n");
    text.trim().to_string()
}

fn heading_marker(caps: &Captures, opening: bool) -> String {
    let level: usize = caps[1].parse().unwrap_or(1);
    let marker = "=".repeat(level);
    if opening {
        format!("{} ", marker)
    } else {
        format!(" {}", marker)
    }
}

/// Heading-free, markup-free rendering.
pub fn plain_index(body: &str) -> String {
    let mut text = body.to_string();
    for heading in HEADING_BLOCKS.iter() {
        text = heading.replace_all(&text, "").into_owned();
    }

    finish(&text)
}

/// Rendering with heading markers, bullets and arrows.
///
/// A level `n` heading becomes `n` equal signs on each side: `<h3>Odkazy</h3>` gives `=== Odkazy ===`.
pub fn full_text(body: &str) -> String {
    let text = HEADING_OPEN.replace_all(body, |caps: &Captures| heading_marker(caps, true));
    let text = HEADING_CLOSE.replace_all(&text, |caps: &Captures| heading_marker(caps, false));
    let text = LINE_BREAK.replace_all(&text, "\n");

    let text = LIST.replace_all(&text, "");
    let text = LIST_ITEM_OPEN.replace_all(&text, BULLET);
    let text = LIST_ITEM_CLOSE.replace_all(&text, "");

    let text = DESCRIPTION_LIST.replace_all(&text, "");
    let text = TERM_OPEN.replace_all(&text, BULLET);
    let text = DESCRIPTION_OPEN.replace_all(&text, ARROW);
    let text = DESCRIPTION_CLOSE.replace_all(&text, "");

    finish(&text)
}
