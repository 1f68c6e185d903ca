//! Utterance matching tests.

use domovoy_intent::{Catalogue, IntentEngine};
use serde_json::json;

fn home() -> IntentEngine {
    IntentEngine::standard(
        Catalogue::from_json_value(json!([
            {
                "command": "включить",
                "items": [
                    {"word": "лампа", "topic": "cmnd/u_01/cmnd/Power"},
                    {"word": "свет", "topic": "cmnd/u_02/cmnd/Power", "addition": "в спальне"},
                    {"word": "свет", "topic": "cmnd/u_04/cmnd/Power", "addition": "на кухне"}
                ],
                "parameters": [{"ALL": "ON"}]
            },
            {
                "command": "выключить",
                "items": [{"word": "лампа", "topic": "cmnd/u_01/cmnd/Power"}],
                "parameters": [{"ALL": "OFF"}]
            },
            {
                "command": "сделать",
                "items": [{"word": "люстра", "topic": "cmnd/u_05/cmnd/Color"}],
                "parameters": [
                    {"word": "красный", "data": "255,0,0"},
                    {"word": "тёплый", "data": "255,180,100"}
                ]
            }
        ]))
        .unwrap(),
    )
    .unwrap()
}

#[test]
fn trigger_plus_object() {
    let engine = home();
    let pattern = engine.match_phrase("лампу", Some("включи")).unwrap();
    assert_eq!(pattern.topic, "cmnd/u_01/cmnd/Power");
    assert_eq!(pattern.payload(), "ON");
}

#[test]
fn word_order_after_trigger_is_irrelevant() {
    let engine = home();
    let a = engine.match_phrase("лампу", Some("включи"));
    let b = engine.match_phrase("лампу включи", Some("включи"));
    assert!(a.is_some());
    assert_eq!(a, b);

    let c = engine.match_phrase("в спальне свет", Some("включи")).unwrap();
    assert_eq!(c.topic, "cmnd/u_02/cmnd/Power");
}

#[test]
fn inflected_item_matches_base_form() {
    let engine = home();
    let pattern = engine.match_phrase("включи лампы", None).unwrap();
    assert_eq!(pattern.words, vec!["включить", "лампа"]);
}

#[test]
fn missing_item_is_no_match() {
    let engine = IntentEngine::standard(
        Catalogue::from_json_value(json!([{
            "command": "включить",
            "items": [{"word": "чайник", "topic": "t"}],
            "parameters": [{"ALL": "ON"}]
        }]))
        .unwrap(),
    )
    .unwrap();
    assert!(engine.match_phrase("включи лампу", None).is_none());
}

#[test]
fn action_must_match() {
    let engine = home();
    assert_eq!(engine.match_phrase("выключи лампу", None).unwrap().payload(), "OFF");
    assert!(engine.match_phrase("открой лампу", None).is_none());
}

#[test]
fn addition_selects_the_room() {
    let engine = home();
    let kitchen = engine.match_phrase("свет на кухне", Some("включи")).unwrap();
    assert_eq!(kitchen.topic, "cmnd/u_04/cmnd/Power");
    assert!(engine.match_phrase("свет", Some("включи")).is_none());
}

#[test]
fn parameter_adjective_in_any_form() {
    let engine = home();
    let pattern = engine.match_phrase("люстру тёплой", Some("сделай")).unwrap();
    assert_eq!(pattern.payload(), "255,180,100");
    assert_eq!(pattern.answer, "сделала люстру тёплой");

    let pattern = engine.match_phrase("сделай люстру теплой", None).unwrap();
    assert_eq!(pattern.payload(), "255,180,100");
}

#[test]
fn extra_words_and_punctuation_are_ignored() {
    let engine = home();
    let pattern = engine
        .match_phrase("Включи, пожалуйста, лампу!", None)
        .unwrap();
    assert_eq!(pattern.topic, "cmnd/u_01/cmnd/Power");
}

#[test]
fn first_token_must_be_a_verb() {
    let engine = home();
    assert!(engine.match_phrase("лампу включи", None).is_none());
    assert!(engine.match_phrase("пожалуйста включи лампу", None).is_none());
    assert!(engine.match_phrase("", None).is_none());
}

#[test]
fn any_form_of_the_action_verb_is_accepted() {
    let engine = home();
    assert!(engine.match_phrase("включите лампу", None).is_some());
    assert!(engine.match_phrase("включишь лампу", None).is_some());
}

#[test]
fn unknown_item_matches_with_or_without_yo() {
    let engine = IntentEngine::standard(
        Catalogue::from_json_value(json!([{
            "command": "включить",
            "items": [{"word": "ёлка", "topic": "cmnd/u_07/cmnd/Power"}],
            "parameters": [{"ALL": "ON"}]
        }]))
        .unwrap(),
    )
    .unwrap();

    for utterance in ["ёлка", "елка", "ЁЛКА"] {
        let pattern = engine.match_phrase(utterance, Some("включи"));
        assert_eq!(pattern.map(|p| p.topic.as_str()), Some("cmnd/u_07/cmnd/Power"), "{utterance}");
    }
}
