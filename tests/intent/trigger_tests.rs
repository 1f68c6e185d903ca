//! Trigger derivation and registration tests.

use domovoy_foundation::{ErrorKind, Result};
use domovoy_intent::{
    Catalogue, CommandRegistrar, IntentEngine, TriggerBinding, TriggerDeriver,
};
use domovoy_morphology::MorphAnalyzer;
use serde_json::json;

#[test]
fn imperative_triggers() {
    let morph = MorphAnalyzer::standard().unwrap();
    let deriver = TriggerDeriver::new(&morph);
    for (action, trigger) in [
        ("включить", "включи"),
        ("выключить", "выключи"),
        ("открыть", "открой"),
        ("закрыть", "закрой"),
        ("сделать", "сделай"),
    ] {
        assert_eq!(deriver.derive_trigger(action).unwrap(), trigger);
        assert_eq!(deriver.derive_infinitive(trigger).unwrap(), action);
    }
}

#[test]
fn non_verb_action_is_rejected() {
    let morph = MorphAnalyzer::standard().unwrap();
    let err = TriggerDeriver::new(&morph).derive_trigger("лампа").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::NoVerbParse(_)));
}

struct Host {
    bound: Vec<(String, u8, String)>,
}

impl CommandRegistrar<u8> for Host {
    fn register_command(&mut self, binding: TriggerBinding<u8>) -> Result<()> {
        self.bound
            .push((binding.trigger, binding.handler, binding.action));
        Ok(())
    }
}

#[test]
fn engine_registers_typed_bindings() {
    let engine = IntentEngine::standard(
        Catalogue::from_json_value(json!([
            {"command": "включить", "items": [{"word": "лампа", "topic": "a"}], "parameters": [{"ALL": "ON"}]},
            {"command": "открыть", "items": [{"word": "штора", "topic": "b"}], "parameters": [{"ALL": 100}]}
        ]))
        .unwrap(),
    )
    .unwrap();

    let mut host = Host { bound: Vec::new() };
    engine.register(&7u8, &mut host).unwrap();
    assert_eq!(
        host.bound,
        vec![
            ("включи".to_string(), 7, "включить".to_string()),
            ("открой".to_string(), 7, "открыть".to_string()),
        ]
    );
}

#[test]
fn trigger_table_lookup() {
    let engine = IntentEngine::standard(
        Catalogue::from_json_value(json!([
            {"command": "закрыть", "items": [], "parameters": []}
        ]))
        .unwrap(),
    )
    .unwrap();
    assert_eq!(engine.triggers().action_for("закрой"), Some("закрыть"));
    assert!(engine.patterns().is_empty());
}
