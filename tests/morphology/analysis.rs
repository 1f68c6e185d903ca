//! Analyzer tests over the bundled lexicon.

use domovoy_morphology::{Grammemes, Inflection, MorphAnalyzer, Morphology, PartOfSpeech};

fn morph() -> MorphAnalyzer {
    MorphAnalyzer::standard().unwrap()
}

// =============================================================================
// Normalization
// =============================================================================

#[test]
fn normalizes_inflected_nouns() {
    let morph = morph();
    for word in ["лампы", "лампой", "ЛАМПУ", "лампах"] {
        assert_eq!(morph.normalize(word), "лампа", "{word}");
    }
    assert_eq!(morph.normalize("спальне"), "спальня");
    assert_eq!(morph.normalize("кухне"), "кухня");
}

#[test]
fn normalizes_verb_forms_to_infinitive() {
    let morph = morph();
    assert_eq!(morph.normalize("включи"), "включить");
    assert_eq!(morph.normalize("выключила"), "выключить");
    assert_eq!(morph.normalize("откройте"), "открыть");
}

#[test]
fn yo_is_folded() {
    let morph = morph();
    assert_eq!(morph.normalize("зелёной"), morph.normalize("зеленой"));
    assert_eq!(morph.normalize("тёплым"), "тёплый");
}

#[test]
fn unknown_word_normalizes_to_itself() {
    assert_eq!(morph().normalize("  Торшер "), "торшер");
}

// =============================================================================
// Tagging
// =============================================================================

#[test]
fn tag_of_most_likely_parse() {
    let morph = morph();
    let tag = morph.tag("лампу").unwrap();
    assert_eq!(tag.pos, PartOfSpeech::Noun);
    assert!(tag.contains(Grammemes::FEMN | Grammemes::SING | Grammemes::ACCS));
    assert!(morph.tag("торшер").is_none());
}

#[test]
fn first_parse_where_scans_ranked_parses() {
    let morph = morph();
    let verb = morph.first_parse_where("включите", &|p| p.tag.contains(Grammemes::IMPR));
    assert_eq!(verb.unwrap().tag.pos, PartOfSpeech::Verb);
    assert!(morph.first_parse_where("лампа", &|p| p.tag.pos.is_verbal()).is_none());
}

// =============================================================================
// Inflection
// =============================================================================

#[test]
fn narrator_past_of_every_verb() {
    let morph = morph();
    let past = Inflection::new(Grammemes::FEMN | Grammemes::PAST | Grammemes::INDC);
    for (verb, expected) in [
        ("включить", "включила"),
        ("выключить", "выключила"),
        ("открыть", "открыла"),
        ("закрыть", "закрыла"),
        ("сделать", "сделала"),
    ] {
        let parse = morph.parse(verb).remove(0);
        assert_eq!(morph.inflect(&parse, past).unwrap().word, expected);
    }
}

#[test]
fn accusative_of_devices() {
    let morph = morph();
    let accs = Inflection::new(Grammemes::ACCS);
    for (noun, expected) in [("лампа", "лампу"), ("люстра", "люстру"), ("чайник", "чайник"), ("свет", "свет")] {
        let parse = morph.parse(noun).remove(0);
        assert_eq!(morph.inflect(&parse, accs).unwrap().word, expected, "{noun}");
    }
}

#[test]
fn adjective_agrees_with_noun() {
    let morph = morph();
    let target = morph.tag("лампа").unwrap().with_case(Grammemes::ABLT).agreement();
    let parse = morph.parse("красный").remove(0);
    assert_eq!(morph.inflect(&parse, Inflection::new(target)).unwrap().word, "красной");

    let target = morph.tag("свет").unwrap().with_case(Grammemes::ABLT).agreement();
    assert_eq!(morph.inflect(&parse, Inflection::new(target)).unwrap().word, "красным");
}

#[test]
fn missing_form_is_none() {
    let morph = morph();
    // "свет" is singular-only.
    let parse = morph.parse("свет").remove(0);
    assert!(morph.inflect(&parse, Inflection::new(Grammemes::PLUR)).is_none());
}

#[test]
fn inflection_can_require_part_of_speech() {
    let morph = morph();
    let parse = morph.parse("включи").remove(0);
    let infn = Inflection::new(Grammemes::PERF).with_pos(PartOfSpeech::Infinitive);
    let inflected = morph.inflect(&parse, infn).unwrap();
    assert_eq!(inflected.word, "включить");
    assert_eq!(inflected.tag.pos, PartOfSpeech::Infinitive);
}
