use super::*;

#[test]
fn default_config_is_offline() {
    assert!(AuthConfig::default().is_offline());
    assert_eq!(AuthConfig::offline(), AuthConfig::default());
}

#[test]
fn hosted_config_is_online() {
    let config = AuthConfig::hosted("https://auth.example.com", "anon");
    assert!(!config.is_offline());
    assert_eq!(config.anon_key, "anon");
}

#[test]
fn from_meta_treats_blank_url_as_offline() {
    let config = AuthConfig::from_meta(Some("   "), Some("anon"));
    assert_eq!(config.url, None);
    assert!(config.is_offline());
}

#[test]
fn from_meta_trims_values() {
    let config = AuthConfig::from_meta(Some(" https://auth.example.com "), Some(" anon "));
    assert_eq!(config, AuthConfig::hosted("https://auth.example.com", "anon"));
}

#[test]
fn from_meta_missing_tags_is_offline() {
    assert_eq!(AuthConfig::from_meta(None, None), AuthConfig::offline());
}

#[tokio::test]
async fn offline_provider_starts_without_session() {
    let provider = AuthConfig::offline().provider();
    assert_eq!(provider.current_identity().await, None);
}

#[test]
fn from_document_without_browser_is_offline() {
    assert!(AuthConfig::from_document().is_offline());
}
