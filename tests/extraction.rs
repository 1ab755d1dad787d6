use std::fs;
use std::path::Path;

use wikiextract::config::{ExtractConfig, OutputModes};
use wikiextract::error::Error;
use wikiextract::knowledgebase::KbLayout;
use wikiextract::pipelines::{Extraction, Pipeline, Summary};
use wikiextract::sharding::FulltextLayout;

const AA_00: &str = r#"<doc id="1" url="https://cs.wikipedia.org/wiki?curid=1" title="Praha">
<h1>Praha</h1>
Praha je hlavní město. Leží na Vltavě.

<h2>Historie</h2>
Založena dávno.
</doc>
<doc id="2" url="https://cs.wikipedia.org/wiki?curid=2" title="Merkur (rozcestník)">
Merkur může být planeta.
</doc>
"#;

const AB_00: &str = r#"<doc id="3" title="Bez adresy">
Nic.
</doc>
<doc id="4" url="https://cs.wikipedia.org/wiki?curid=4" title="AC/DC">
<a href="Soubor%3AAC%20DC.jpg">logo</a>
AC/DC je kapela. Hraje <a href="Rock">rock</a>.
</doc>
"#;

/// Builds a two-level dump. `AB` is created first to check that traversal order doesn't depend on creation order.
fn dump(root: &Path) {
    for (dir, content) in [("AB", AB_00), ("AA", AA_00)] {
        fs::create_dir_all(root.join(dir)).unwrap();
        fs::write(root.join(dir).join("wiki_00"), content).unwrap();
    }
}

fn all_modes() -> OutputModes {
    OutputModes {
        sentences: true,
        paragraphs: true,
        fulltexts: true,
        knowledgebase: true,
    }
}

#[test_log::test]
fn extract_all() {
    let src = tempfile::tempdir().unwrap();
    let dst = tempfile::tempdir().unwrap();
    dump(src.path());

    let config = ExtractConfig::new(src.path(), dst.path(), all_modes());
    let summary = Extraction::new(config).run().unwrap();

    assert_eq!(
        summary,
        Summary {
            pages: 2,
            filtered: 1,
            bad_blocks: 1
        }
    );

    assert_eq!(
        fs::read_to_string(dst.path().join("sentences.txt")).unwrap(),
        "https://cs.wikipedia.org/wiki/Praha\tPraha je hlavní město.\n\
         https://cs.wikipedia.org/wiki/AC/DC\tAC/DC je kapela.\n"
    );
    assert_eq!(
        fs::read_to_string(dst.path().join("paragraphs.txt")).unwrap(),
        "https://cs.wikipedia.org/wiki/Praha\tPraha je hlavní město. Leží na Vltavě.\n\
         https://cs.wikipedia.org/wiki/AC/DC\tAC/DC je kapela. Hraje rock.\n"
    );
    assert_eq!(
        fs::read_to_string(dst.path().join("knowledgebase.txt")).unwrap(),
        "Praha\thttps://cs.wikipedia.org/wiki/Praha\t1\tPraha je hlavní město. Leží na Vltavě.\t\n\
         AC/DC\thttps://cs.wikipedia.org/wiki/AC/DC\t4\tAC/DC je kapela. Hraje rock.\tcs.wikipedia.org/wiki/AC/DC#/media/File:AC_DC.jpg\n"
    );

    let fulltexts = dst.path().join("fulltexts");
    assert_eq!(
        fs::read_to_string(fulltexts.join("d_PR").join("wp_Praha.txt")).unwrap(),
        "=Praha=\n= Praha =\nPraha je hlavní město. Leží na Vltavě.\n== Historie ==\nZaložena dávno."
    );
    assert_eq!(
        fs::read_to_string(fulltexts.join("d_AC").join("wp_AC_backslash_DC.txt")).unwrap(),
        "=AC/DC=\nAC/DC je kapela. Hraje rock."
    );
    assert!(!fulltexts.join("d_ME").exists());
}

#[test]
fn extract_basic_flat() {
    let src = tempfile::tempdir().unwrap();
    let dst = tempfile::tempdir().unwrap();
    dump(src.path());

    let modes = OutputModes {
        fulltexts: true,
        knowledgebase: true,
        ..Default::default()
    };
    let mut config = ExtractConfig::new(src.path(), dst.path(), modes);
    config.kb_layout = KbLayout::Basic;
    config.fulltext_layout = FulltextLayout::Flat;

    Extraction::new(config).run().unwrap();

    assert_eq!(
        fs::read_to_string(dst.path().join("knowledgebase.txt")).unwrap(),
        "1\thttps://cs.wikipedia.org/wiki/Praha\tPraha\tPraha je hlavní město. Leží na Vltavě.\n\
         4\thttps://cs.wikipedia.org/wiki/AC/DC\tAC/DC\tAC/DC je kapela. Hraje rock.\n"
    );
    assert!(dst.path().join("fulltexts").join("Praha.txt").is_file());
    assert!(dst.path().join("fulltexts").join("AC_backslash_DC.txt").is_file());
    assert!(!dst.path().join("sentences.txt").exists());
}

#[test_log::test]
fn extract_strict() {
    let src = tempfile::tempdir().unwrap();
    let dst = tempfile::tempdir().unwrap();
    dump(src.path());

    let mut config = ExtractConfig::new(src.path(), dst.path(), all_modes());
    config.strict = true;

    match Extraction::new(config).run() {
        Err(Error::Parse {
            path, block, line, ..
        }) => {
            assert!(path.ends_with("AB/wiki_00"));
            assert_eq!(block, 1);
            assert_eq!(line, 1);
        }
        other => panic!("expected a parse error, got {:?}", other),
    }
}

#[test_log::test]
fn extract_truncated() {
    let src = tempfile::tempdir().unwrap();
    let dst = tempfile::tempdir().unwrap();
    fs::create_dir_all(src.path().join("AA")).unwrap();
    fs::write(
        src.path().join("AA").join("wiki_00"),
        "<doc id=\"1\" url=\"https://cs.wikipedia.org/wiki?curid=1\" title=\"Praha\">\nPraha je město.\n",
    )
    .unwrap();

    let modes = OutputModes {
        paragraphs: true,
        ..Default::default()
    };
    let config = ExtractConfig::new(src.path(), dst.path(), modes);
    let summary = Extraction::new(config.clone()).run().unwrap();
    assert_eq!(summary.pages, 0);
    assert_eq!(summary.bad_blocks, 1);
    assert_eq!(
        fs::read_to_string(dst.path().join("paragraphs.txt")).unwrap(),
        ""
    );

    let strict = ExtractConfig {
        strict: true,
        ..config
    };
    assert!(matches!(
        Extraction::new(strict).run(),
        Err(Error::TruncatedBlock { line: 1, .. })
    ));
}

#[test]
fn extract_preconditions() {
    let dst = tempfile::tempdir().unwrap();

    let missing = ExtractConfig::new(&dst.path().join("missing"), dst.path(), all_modes());
    assert!(matches!(
        Extraction::new(missing).run(),
        Err(Error::Precondition(_))
    ));

    let nothing = ExtractConfig::new(dst.path(), dst.path(), OutputModes::default());
    assert!(matches!(
        Extraction::new(nothing).run(),
        Err(Error::Precondition(_))
    ));
}

#[test]
fn extract_long_title_and_invalid_utf8() {
    let src = tempfile::tempdir().unwrap();
    let dst = tempfile::tempdir().unwrap();
    fs::create_dir_all(src.path().join("AA")).unwrap();

    let mut content = format!(
        "<doc id=\"1\" url=\"https://cs.wikipedia.org/wiki?curid=1\" title=\"{}\">\nDlouhý název.\n</doc>\n",
        "Č".repeat(125)
    )
    .into_bytes();
    content.extend_from_slice(
        b"<doc id=\"2\" url=\"https://cs.wikipedia.org/wiki?curid=2\" title=\"Zlo\">\nZlo\xff.\n</doc>\n",
    );
    content.extend_from_slice(
        "<doc id=\"3\" url=\"https://cs.wikipedia.org/wiki?curid=3\" title=\"Praha\">\nPraha je město.\n</doc>\n"
            .as_bytes(),
    );
    fs::write(src.path().join("AA").join("wiki_00"), content).unwrap();

    let modes = OutputModes {
        paragraphs: true,
        fulltexts: true,
        ..Default::default()
    };
    let config = ExtractConfig::new(src.path(), dst.path(), modes);
    let summary = Extraction::new(config).run().unwrap();
    assert_eq!(summary.pages, 3);

    let paragraphs = fs::read_to_string(dst.path().join("paragraphs.txt")).unwrap();
    assert!(paragraphs.contains("https://cs.wikipedia.org/wiki/Zlo\tZlo\u{fffd}.\n"));
    assert!(paragraphs.ends_with("https://cs.wikipedia.org/wiki/Praha\tPraha je město.\n"));

    let fulltexts = dst.path().join("fulltexts");
    assert_eq!(fs::read_dir(fulltexts.join("d_alpha_XX")).unwrap().count(), 1);
    assert!(fulltexts.join("d_PR").join("wp_Praha.txt").is_file());
}
