use std::fs;

use wikiextract::config::ResegmentConfig;
use wikiextract::error::Error;
use wikiextract::processing::resegment;

#[test]
fn from_paragraphs() {
    let tmp = tempfile::tempdir().unwrap();
    let input = tmp.path().join("paragraphs.txt");
    let output = tmp.path().join("sentences.txt");

    fs::write(
        &input,
        "https://cs.wikipedia.org/wiki/Praha\tPraha je hlavní město. Leží na Vltavě.\n\
         https://cs.wikipedia.org/wiki/Brno\tBrno leží na Moravě!\n",
    )
    .unwrap();

    let config = ResegmentConfig {
        input,
        output: output.clone(),
    };
    assert_eq!(resegment::run(&config).unwrap(), 2);
    assert_eq!(
        fs::read_to_string(output).unwrap(),
        "https://cs.wikipedia.org/wiki/Praha\tPraha je hlavní město.\n\
         https://cs.wikipedia.org/wiki/Brno\tBrno leží na Moravě!\n"
    );
}

#[test]
fn missing_input() {
    let tmp = tempfile::tempdir().unwrap();
    let config = ResegmentConfig {
        input: tmp.path().join("missing.txt"),
        output: tmp.path().join("sentences.txt"),
    };
    assert!(matches!(resegment::run(&config), Err(Error::Precondition(_))));
}
