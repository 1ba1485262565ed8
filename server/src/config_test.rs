use std::collections::HashMap;

use super::*;

fn config_from(pairs: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
    let env: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    ServerConfig::from_lookup(|key| env.get(key).cloned())
}

// =============================================================================
// parse_bool
// =============================================================================

#[test]
fn parse_bool_true_variants() {
    for val in ["1", "true", "yes", "on", "TRUE", "On", "  yes  "] {
        assert_eq!(parse_bool(val), Some(true), "expected true for {val:?}");
    }
}

#[test]
fn parse_bool_false_variants() {
    for val in ["0", "false", "no", "off", "FALSE"] {
        assert_eq!(parse_bool(val), Some(false), "expected false for {val:?}");
    }
}

#[test]
fn parse_bool_invalid_returns_none() {
    assert_eq!(parse_bool("maybe"), None);
    assert_eq!(parse_bool(""), None);
}

// =============================================================================
// ServerConfig
// =============================================================================

#[test]
fn empty_env_is_offline_on_default_port() {
    let config = config_from(&[]).unwrap();
    assert_eq!(config.port, DEFAULT_PORT);
    assert!(config.auth.is_offline());
}

#[test]
fn port_is_parsed() {
    assert_eq!(config_from(&[("PORT", "8080")]).unwrap().port, 8080);
}

#[test]
fn invalid_port_errors() {
    assert_eq!(config_from(&[("PORT", "http")]), Err(ConfigError::InvalidPort("http".to_owned())));
}

#[test]
fn auth_url_with_key_is_hosted() {
    let config = config_from(&[
        ("ACADEMY_AUTH_URL", "https://auth.example.com/"),
        ("ACADEMY_AUTH_ANON_KEY", "anon"),
    ])
    .unwrap();
    assert_eq!(config.auth, AuthConfig::hosted("https://auth.example.com", "anon"));
}

#[test]
fn auth_url_without_key_errors() {
    assert_eq!(
        config_from(&[("ACADEMY_AUTH_URL", "https://auth.example.com")]),
        Err(ConfigError::MissingAnonKey)
    );
}

#[test]
fn blank_auth_url_is_offline() {
    let config = config_from(&[("ACADEMY_AUTH_URL", "  ")]).unwrap();
    assert!(config.auth.is_offline());
}

#[test]
fn offline_flag_overrides_url() {
    let config = config_from(&[("ACADEMY_AUTH_URL", "https://auth.example.com"), ("ACADEMY_OFFLINE", "yes")]).unwrap();
    assert!(config.auth.is_offline());
}

#[test]
fn invalid_offline_flag_errors() {
    assert_eq!(
        config_from(&[("ACADEMY_OFFLINE", "sometimes")]),
        Err(ConfigError::InvalidBool { var: "ACADEMY_OFFLINE", value: "sometimes".to_owned() })
    );
}
