//! Assistant dispatch tests.

use domovoy_intent::Catalogue;
use domovoy_runtime::{
    Assistant, AssistantConfig, EnsureConnected, MemoryBus, Message, Outcome, RecordingSpeaker,
};
use serde_json::json;

type Host = Assistant<EnsureConnected<MemoryBus>, RecordingSpeaker>;

fn host_with(bus: MemoryBus) -> Host {
    let catalogue = Catalogue::from_json_value(json!([
        {
            "command": "включить",
            "items": [
                {"word": "лампа", "topic": "cmnd/u_01/cmnd/Power"},
                {"word": "свет", "topic": "cmnd/u_02/cmnd/Power", "addition": "в спальне"}
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
            "items": [{"word": "лампа", "topic": "cmnd/u_01/cmnd/Color"}],
            "parameters": [{"word": "синий", "data": "0,0,255"}]
        }
    ]))
    .unwrap();
    let config = AssistantConfig::default().with_catalogue(catalogue);
    Assistant::from_config(&config, EnsureConnected::new(bus), RecordingSpeaker::new()).unwrap()
}

fn host() -> Host {
    host_with(MemoryBus::new())
}

#[test]
fn conversation() {
    let mut host = host();

    host.hear("Включи лампу").unwrap();
    host.hear("сделай лампу синей").unwrap();
    host.hear("включи свет в спальне").unwrap();
    host.hear("выключи лампу").unwrap();

    assert_eq!(
        host.speaker().phrases(),
        [
            "включила лампу",
            "сделала лампу синей",
            "включила свет в спальне",
            "выключила лампу",
        ]
    );
    assert_eq!(
        host.bus().inner().messages().last(),
        Some(&Message {
            topic: "cmnd/u_01/cmnd/Power".to_string(),
            payload: "OFF".to_string(),
        })
    );
    // One connect, then the connection is reused.
    assert_eq!(host.bus().inner().connect_count(), 1);
}

#[test]
fn reconnects_when_the_broker_dropped() {
    let mut host = host();
    host.hear("включи лампу").unwrap();
    host.bus_mut().inner_mut().disconnect();
    host.hear("выключи лампу").unwrap();
    assert_eq!(host.bus().inner().connect_count(), 2);
    assert_eq!(host.bus().inner().messages().len(), 2);
}

#[test]
fn fallback_when_nothing_matches() {
    let mut host = host();
    assert_eq!(host.hear("включи чайник").unwrap(), Outcome::NotFound);
    assert_eq!(host.hear("включи свет").unwrap(), Outcome::NotFound);
    assert_eq!(
        host.speaker().phrases(),
        ["Не нашла устройство", "Не нашла устройство"]
    );
}

#[test]
fn unreachable_broker_reports_failure() {
    let mut host = host_with(MemoryBus::unreachable());
    let outcome = host.hear("включи лампу").unwrap();
    assert!(matches!(outcome, Outcome::PublishFailed { .. }));
    assert_eq!(host.speaker().last(), Some("Ошибка, команда не отправлена"));
}

#[test]
fn only_registered_triggers_dispatch() {
    let mut host = host();
    assert_eq!(host.hear("открой лампу").unwrap(), Outcome::Ignored);
    assert_eq!(host.hear("лампу").unwrap(), Outcome::Ignored);
    assert!(host.speaker().phrases().is_empty());

    let triggers: Vec<_> = host.bindings().collect();
    assert_eq!(
        triggers,
        vec![
            ("включи", "включить"),
            ("выключи", "выключить"),
            ("сделай", "сделать"),
        ]
    );
}

#[test]
fn malformed_catalogue_fails_startup() {
    let catalogue = Catalogue::from_json_value(json!([
        {"command": "лампа", "items": [], "parameters": [{"ALL": 1}]}
    ]))
    .unwrap();
    let config = AssistantConfig::default().with_catalogue(catalogue);
    let result = Assistant::from_config(
        &config,
        EnsureConnected::new(MemoryBus::new()),
        RecordingSpeaker::new(),
    );
    assert!(result.is_err());
}
