//! Configuration tests.

use std::fs;

use domovoy_foundation::ErrorKind;
use domovoy_runtime::{AssistantConfig, BrokerConfig};

#[test]
fn full_config_file() {
    let text = r#"{
        "broker": {
            "client_id": "kitchen_voice",
            "host": "192.168.1.10",
            "port": 1884,
            "username": "home",
            "password": "secret"
        },
        "fallback": "Нет такого устройства",
        "catalogue": [
            {
                "command": "включить",
                "items": [{"word": "лампа", "topic": "cmnd/u_01/cmnd/Power"}],
                "parameters": [{"ALL": "ON"}]
            }
        ]
    }"#;
    let config = AssistantConfig::from_json_str(text).unwrap();

    assert_eq!(
        config.broker,
        BrokerConfig {
            client_id: "kitchen_voice".to_string(),
            host: "192.168.1.10".to_string(),
            port: 1884,
            username: Some("home".to_string()),
            password: Some("secret".to_string()),
        }
    );
    assert_eq!(config.fallback, "Нет такого устройства");
    assert_eq!(config.publish_error, "Ошибка, команда не отправлена");
    assert_eq!(config.catalogue.actions().len(), 1);
}

#[test]
fn empty_object_is_all_defaults() {
    assert_eq!(
        AssistantConfig::from_json_str("{}").unwrap(),
        AssistantConfig::default()
    );
}

#[test]
fn malformed_catalogue_is_config_error() {
    let err = AssistantConfig::from_json_str(r#"{"catalogue": [{"command": 1}]}"#).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::ConfigError(_)));
}

#[test]
fn extra_lexicon_is_merged() {
    let dir = std::env::temp_dir().join(format!("domovoy-runtime-{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    fs::write(
        dir.join("extra.txt"),
        "1\nТОРШЕР\tNOUN,inan,masc sing,nomn\nТОРШЕРА\tNOUN,inan,masc sing,gent\n",
    )
    .unwrap();
    fs::write(dir.join("config.json"), r#"{"lexicon": "extra.txt"}"#).unwrap();

    let config = AssistantConfig::load(dir.join("config.json")).unwrap();
    let morph = config.morphology().unwrap();
    assert_eq!(
        domovoy_morphology::Morphology::normalize(&morph, "торшера"),
        "торшер"
    );

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn missing_lexicon_file_fails() {
    let config = AssistantConfig::default().with_lexicon("/nonexistent/extra.txt");
    let err = config.morphology().unwrap_err();
    assert!(matches!(err.kind, ErrorKind::IoError(_)));
}
