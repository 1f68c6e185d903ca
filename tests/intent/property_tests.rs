//! Property-based tests for triggers and matching.

use domovoy_intent::{Catalogue, IntentEngine, TriggerDeriver};
use domovoy_morphology::{MorphAnalyzer, Morphology};
use proptest::prelude::*;
use serde_json::json;

const ACTIONS: [&str; 5] = ["включить", "выключить", "открыть", "закрыть", "сделать"];
const FILLERS: [&str; 4] = ["пожалуйста", "в", "на", "лампу"];

fn engine() -> IntentEngine {
    IntentEngine::standard(
        Catalogue::from_json_value(json!([{
            "command": "включить",
            "items": [
                {"word": "лампа", "topic": "a"},
                {"word": "свет", "topic": "b", "addition": "в спальне"}
            ],
            "parameters": [{"word": "красный", "data": 1}, {"ALL": 0}]
        }]))
        .unwrap(),
    )
    .unwrap()
}

proptest! {
    #[test]
    fn trigger_round_trip_is_lemma_equal(index in 0..ACTIONS.len()) {
        let morph = MorphAnalyzer::standard().unwrap();
        let deriver = TriggerDeriver::new(&morph);
        let action = ACTIONS[index];

        let trigger = deriver.derive_trigger(action).unwrap();
        let back = deriver.derive_infinitive(&trigger).unwrap();
        prop_assert_eq!(morph.normalize(&back), morph.normalize(action));
    }

    #[test]
    fn token_order_after_trigger_is_irrelevant(
        words in Just(vec!["свет", "в", "спальне", "красным", "пожалуйста"]).prop_shuffle()
    ) {
        let engine = engine();
        let utterance = words.join(" ");
        let shuffled = engine.match_phrase(&utterance, Some("включи"));
        let canonical = engine.match_phrase("свет в спальне красным", Some("включи"));
        prop_assert!(shuffled.is_some());
        prop_assert_eq!(shuffled, canonical);
    }

    #[test]
    fn filler_words_never_change_the_match(
        fillers in prop::collection::vec(prop::sample::select(FILLERS.to_vec()), 0..6)
    ) {
        let engine = engine();
        let utterance = format!("включи лампу {}", fillers.join(" "));
        let found = engine.match_phrase(&utterance, None).map(|p| p.topic.clone());
        prop_assert_eq!(found.as_deref(), Some("a"));
    }

    #[test]
    fn matching_never_panics(input in "\\PC{0,40}") {
        let engine = engine();
        let _ = engine.match_phrase(&input, None);
        let _ = engine.match_phrase(&input, Some("включи"));
    }
}
