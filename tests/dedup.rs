use std::fs;

use wikiextract::config::DedupConfig;
use wikiextract::processing::dedup::{self, DedupStats, UrlColumn};

const GENERATED: &str = "Foo\thttps://cs.wikipedia.org/wiki/Foo\t1\tFoo je.\t\n\
                         Bar\thttps://cs.wikipedia.org/wiki/Bar\t2\tBar je.\t\n\
                         Baz\thttps://cs.wikipedia.org/wiki/Baz\t3\tBaz je.\t\n";

#[test_log::test]
fn last_column() {
    let tmp = tempfile::tempdir().unwrap();
    let existing = tmp.path().join("kb_cs");
    let generated = tmp.path().join("kb.txt");
    let output = tmp.path().join("kb_filtered.txt");

    fs::write(&existing, "p:1\tperson\tFoo\t//cs.wikipedia.org/wiki/Foo\n").unwrap();
    fs::write(&generated, GENERATED).unwrap();

    let config = DedupConfig {
        existing,
        generated: generated.clone(),
        output: output.clone(),
        schema: None,
        existing_column: UrlColumn::Last,
        generated_column: 1,
    };

    let stats = dedup::run(&config).unwrap();
    assert_eq!(
        stats,
        DedupStats {
            retained: 2,
            removed: 1
        }
    );
    assert_eq!(
        fs::read_to_string(output).unwrap(),
        "Bar\thttps://cs.wikipedia.org/wiki/Bar\t2\tBar je.\t\n\
         Baz\thttps://cs.wikipedia.org/wiki/Baz\t3\tBaz je.\t\n"
    );
    // inputs are left untouched
    assert_eq!(fs::read_to_string(generated).unwrap(), GENERATED);
}

#[test]
fn schema_column() {
    let tmp = tempfile::tempdir().unwrap();
    let existing = tmp.path().join("kb_cs");
    let generated = tmp.path().join("kb.txt");
    let output = tmp.path().join("kb_filtered.txt");
    let schema = tmp.path().join("HEAD-KB");

    fs::write(
        &existing,
        "p:1\thttp://cs.wikipedia.org/wiki/Baz\tBaz\n\
         p:2\thttps://cs.wikipedia.org/wiki/Bar\tBar\n",
    )
    .unwrap();
    fs::write(&generated, GENERATED).unwrap();
    fs::write(&schema, "<person>ID\t{u}WIKI_URL\tNAME\n").unwrap();

    let config = DedupConfig {
        existing,
        generated,
        output: output.clone(),
        schema: Some(schema),
        // the schema wins
        existing_column: UrlColumn::Index(2),
        generated_column: 1,
    };

    let stats = dedup::run(&config).unwrap();
    assert_eq!(stats.removed, 2);
    assert_eq!(
        fs::read_to_string(output).unwrap(),
        "Foo\thttps://cs.wikipedia.org/wiki/Foo\t1\tFoo je.\t\n"
    );
}

#[test]
fn schema_without_url() {
    let tmp = tempfile::tempdir().unwrap();
    let existing = tmp.path().join("kb_cs");
    let generated = tmp.path().join("kb.txt");
    let schema = tmp.path().join("HEAD-KB");

    fs::write(&existing, "").unwrap();
    fs::write(&generated, GENERATED).unwrap();
    fs::write(&schema, "ID\tNAME\n").unwrap();

    let config = DedupConfig {
        existing,
        generated,
        output: tmp.path().join("out.txt"),
        schema: Some(schema),
        existing_column: UrlColumn::Last,
        generated_column: 1,
    };

    assert!(dedup::run(&config).is_err());
}
