//! Pattern compilation tests.

use domovoy_intent::{Catalogue, CompiledPattern, IntentEngine};
use serde_json::json;

fn engine(value: serde_json::Value) -> IntentEngine {
    IntentEngine::standard(Catalogue::from_json_value(value).unwrap()).unwrap()
}

#[test]
fn single_catch_all_action() {
    let engine = engine(json!([{
        "command": "включить",
        "items": [{"word": "лампа", "topic": "cmnd/u_01/cmnd/Power"}],
        "parameters": [{"ALL": "ON"}]
    }]));

    let patterns = engine.patterns();
    assert_eq!(patterns.len(), 1);
    assert_eq!(patterns[0].words, vec!["включить", "лампа"]);
    assert_eq!(patterns[0].topic, "cmnd/u_01/cmnd/Power");
    assert_eq!(patterns[0].data, json!("ON"));
    assert_eq!(patterns[0].action(), "включить");
}

#[test]
fn cross_product_with_named_parameters() {
    let engine = engine(json!([{
        "command": "сделать",
        "items": [
            {"word": "лампа", "topic": "cmnd/u_01/cmnd/Color"},
            {"word": "люстра", "topic": "cmnd/u_05/cmnd/Color"}
        ],
        "parameters": [
            {"word": "красный", "data": "255,0,0"},
            {"word": "синий", "data": "0,0,255"}
        ]
    }]));

    let words: Vec<_> = engine.patterns().iter().map(|p| p.words.join(" ")).collect();
    assert_eq!(
        words,
        vec![
            "сделать лампа красный",
            "сделать лампа синий",
            "сделать люстра красный",
            "сделать люстра синий",
        ]
    );
}

#[test]
fn cross_product_with_catch_all() {
    let engine = engine(json!([{
        "command": "выключить",
        "items": [
            {"word": "лампа", "topic": "a"},
            {"word": "чайник", "topic": "b"}
        ],
        "parameters": [{"ALL": "OFF"}]
    }]));
    assert_eq!(engine.patterns().len(), 2);
    assert!(engine.patterns().iter().all(|p| p.words.len() == 2));
}

#[test]
fn addition_contributes_its_last_token() {
    let engine = engine(json!([{
        "command": "включить",
        "items": [{"word": "свет", "topic": "t", "addition": "в дальней спальне"}],
        "parameters": [{"ALL": 1}]
    }]));
    assert_eq!(engine.patterns()[0].words, vec!["включить", "свет", "спальне"]);
}

#[test]
fn confirmation_sentences() {
    let engine = engine(json!([
        {
            "command": "сделать",
            "items": [
                {"word": "лампа", "topic": "a"},
                {"word": "свет", "topic": "b", "addition": "в спальне"}
            ],
            "parameters": [{"word": "зелёный", "data": "0,255,0"}]
        },
        {
            "command": "закрыть",
            "items": [{"word": "штора", "topic": "c"}],
            "parameters": [{"ALL": 0}]
        }
    ]));

    let answers: Vec<_> = engine.patterns().iter().map(|p| p.answer.as_str()).collect();
    assert_eq!(
        answers,
        vec!["сделала лампу зелёной", "сделала свет в спальне зелёным", "закрыла штору"]
    );
}

#[test]
fn unknown_item_degrades_confirmation_only() {
    let engine = engine(json!([{
        "command": "включить",
        "items": [{"word": "торшер", "topic": "cmnd/u_07/cmnd/Power"}],
        "parameters": [{"ALL": "ON"}]
    }]));
    let pattern = &engine.patterns()[0];
    assert_eq!(pattern.answer, "включила");
    assert_eq!(pattern.words, vec!["включить", "торшер"]);
}

#[test]
fn compiled_list_is_stable_across_reads() {
    let engine = engine(json!([{
        "command": "включить",
        "items": [{"word": "лампа", "topic": "a"}, {"word": "чайник", "topic": "b"}],
        "parameters": [{"ALL": "ON"}]
    }]));
    let first: Vec<CompiledPattern> = engine.patterns().to_vec();
    assert_eq!(engine.patterns(), first.as_slice());
    assert!(std::ptr::eq(engine.patterns(), engine.patterns()));
}

#[test]
fn patterns_serialize_without_lemmas() {
    let engine = engine(json!([{
        "command": "включить",
        "items": [{"word": "лампа", "topic": "a"}],
        "parameters": [{"ALL": "ON"}]
    }]));
    let value = serde_json::to_value(&engine.patterns()[0]).unwrap();
    assert_eq!(
        value,
        json!({"words": ["включить", "лампа"], "topic": "a", "data": "ON", "answer": "включила лампу"})
    );
}
