use super::*;

#[test]
fn resolve_uses_defaults_when_unset() {
    let config = ClientConfig::resolve(None, None, None);
    assert_eq!(config.chat_url, DEFAULT_CHAT_URL);
    assert_eq!(config.voice_token_url, DEFAULT_VOICE_TOKEN_URL);
    assert_eq!(config.publishable_key, "");
}

#[test]
fn resolve_treats_blank_urls_as_unset() {
    let config = ClientConfig::resolve(Some("  "), Some(""), Some(" pk_live "));
    assert_eq!(config.chat_url, DEFAULT_CHAT_URL);
    assert_eq!(config.voice_token_url, DEFAULT_VOICE_TOKEN_URL);
    assert_eq!(config.publishable_key, "pk_live");
}

#[test]
fn resolve_keeps_overrides() {
    let config = ClientConfig::resolve(
        Some("https://shop.example/api/chat"),
        Some("/voice"),
        Some("pk_test"),
    );
    assert_eq!(config.chat_url, "https://shop.example/api/chat");
    assert_eq!(config.voice_token_url, "/voice");
    assert_eq!(config.bearer(), "Bearer pk_test");
}

#[test]
fn bearer_with_empty_key_still_has_scheme() {
    let config = ClientConfig::resolve(None, None, None);
    assert_eq!(config.bearer(), "Bearer ");
}
