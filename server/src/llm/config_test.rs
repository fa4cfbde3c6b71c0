use std::collections::HashMap;

use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_apply_when_only_key_is_set() {
    let lookup = lookup_from(&[("LLM_API_KEY_ENV", "TEST_KEY"), ("TEST_KEY", "secret")]);
    let cfg = LlmConfig::from_lookup(&lookup).unwrap();
    assert_eq!(cfg.api_key, "secret");
    assert_eq!(cfg.model, DEFAULT_MODEL);
    assert_eq!(cfg.openai_base_url, DEFAULT_OPENAI_BASE_URL);
    assert_eq!(
        cfg.timeouts,
        LlmTimeouts { request_secs: DEFAULT_LLM_REQUEST_TIMEOUT_SECS, connect_secs: DEFAULT_LLM_CONNECT_TIMEOUT_SECS }
    );
}

#[test]
fn overrides_are_read_and_base_url_trimmed() {
    let lookup = lookup_from(&[
        ("LLM_API_KEY_ENV", "TEST_KEY"),
        ("TEST_KEY", "secret"),
        ("LLM_MODEL", "gpt-4.1"),
        ("LLM_OPENAI_BASE_URL", "http://localhost:11434/v1/"),
        ("LLM_REQUEST_TIMEOUT_SECS", "30"),
        ("LLM_CONNECT_TIMEOUT_SECS", "2"),
    ]);
    let cfg = LlmConfig::from_lookup(&lookup).unwrap();
    assert_eq!(cfg.model, "gpt-4.1");
    assert_eq!(cfg.openai_base_url, "http://localhost:11434/v1");
    assert_eq!(cfg.timeouts, LlmTimeouts { request_secs: 30, connect_secs: 2 });
}

#[test]
fn missing_key_var_is_reported() {
    let err = LlmConfig::from_lookup(&lookup_from(&[])).unwrap_err();
    assert_eq!(err, ConfigError::MissingKey { var: "LLM_API_KEY_ENV".to_owned() });
}

#[test]
fn key_var_pointing_nowhere_is_reported() {
    let err = LlmConfig::from_lookup(&lookup_from(&[("LLM_API_KEY_ENV", "OPENAI_API_KEY")])).unwrap_err();
    assert_eq!(err, ConfigError::MissingKey { var: "OPENAI_API_KEY".to_owned() });
}

#[test]
fn bad_timeout_is_reported() {
    let lookup = lookup_from(&[
        ("LLM_API_KEY_ENV", "TEST_KEY"),
        ("TEST_KEY", "secret"),
        ("LLM_CONNECT_TIMEOUT_SECS", "-1"),
    ]);
    let err = LlmConfig::from_lookup(&lookup).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidNumber { var, .. } if var == "LLM_CONNECT_TIMEOUT_SECS"));
}
