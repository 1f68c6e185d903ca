//! Dictionary loading tests.

use std::fs;

use domovoy_foundation::ErrorKind;
use domovoy_morphology::{MorphAnalyzer, Morphology, load_dictionary, parse_dictionary};

const TORSHER: &str = "\
# floor lamp
100
ТОРШЕР\tNOUN,inan,masc sing,nomn
ТОРШЕРА\tNOUN,inan,masc sing,gent
ТОРШЕР\tNOUN,inan,masc sing,accs
ТОРШЕРОМ\tNOUN,inan,masc sing,ablt
";

#[test]
fn extra_lexicon_extends_standard() {
    let mut morph = MorphAnalyzer::standard().unwrap();
    let before = morph.lexicon().len();
    morph.extend(parse_dictionary(TORSHER).unwrap());

    assert_eq!(morph.lexicon().len(), before + 1);
    assert_eq!(morph.normalize("торшера"), "торшер");
    assert_eq!(morph.normalize("лампы"), "лампа");
}

#[test]
fn errors_carry_line_numbers() {
    let err = parse_dictionary("1\nЛАМПА\tNOUN,inan,femn sing,nomn\nЛАМПЫ NOUN\n").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::DictionaryError { line: 3, .. }));

    let err = parse_dictionary("\nлампа\n").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::DictionaryError { line: 2, .. }));

    let err = parse_dictionary("1\nЛАМПА\tNOUN,glowing\n").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::DictionaryError { line: 2, .. }));
}

#[test]
fn load_from_file_names_the_source() {
    let dir = std::env::temp_dir().join(format!("domovoy-dict-{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();

    let good = dir.join("good.txt");
    fs::write(&good, TORSHER).unwrap();
    assert_eq!(load_dictionary(&good).unwrap().len(), 1);

    let bad = dir.join("bad.txt");
    fs::write(&bad, "x\n").unwrap();
    let err = load_dictionary(&bad).unwrap_err();
    let source = err.context.unwrap().source.unwrap();
    assert!(source.ends_with("bad.txt"));

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn missing_file_is_io_error() {
    let err = load_dictionary("/nonexistent/dict.txt").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::IoError(_)));
}

#[test]
fn opencorpora_dump_entries_load_and_inflect() {
    let dump = "\
7
СУДЬЯ\tNOUN,anim,Ms-f sing,nomn
СУДЬИ\tNOUN,anim,Ms-f sing,gent
СУДЬЮ\tNOUN,anim,Ms-f sing,accs
СУДЬЕЙ\tNOUN,anim,Ms-f sing,ablt
";
    let mut morph = MorphAnalyzer::standard().unwrap();
    morph.extend(parse_dictionary(dump).unwrap());

    assert_eq!(morph.normalize("судьи"), "судья");
    let tag = morph.tag("судьёй").unwrap();
    assert_eq!(tag.to_string(), "NOUN,anim,Ms-f,sing,ablt");
}
