use std::collections::HashMap;
use std::env::VarError;

use super::*;

fn lookup_from_map<'a>(
    map: &'a HashMap<&'a str, &'a str>,
) -> impl Fn(&str) -> Result<String, VarError> + 'a {
    move |key| {
        map.get(key)
            .map(|v| (*v).to_string())
            .ok_or(VarError::NotPresent)
    }
}

/// Returns a map with all required env vars populated with valid defaults.
fn full_env<'a>() -> HashMap<&'a str, &'a str> {
    let mut m = HashMap::new();
    m.insert("STOREFRONT_API_BASE_URL", "https://api.example.com/api/v1");
    m
}

#[test]
fn parse_environment_known_values() {
    assert_eq!(parse_environment("development"), Environment::Development);
    assert_eq!(parse_environment("test"), Environment::Test);
    assert_eq!(parse_environment("production"), Environment::Production);
}

#[test]
fn parse_environment_unknown_defaults_to_development() {
    assert_eq!(parse_environment("staging"), Environment::Development);
}

#[test]
fn build_app_config_fails_without_api_base_url() {
    let map: HashMap<&str, &str> = HashMap::new();
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::MissingEnvVar(ref v)) if v == "STOREFRONT_API_BASE_URL"),
        "expected MissingEnvVar(STOREFRONT_API_BASE_URL), got: {result:?}"
    );
}

#[test]
fn build_app_config_treats_blank_api_base_url_as_missing() {
    let mut map = full_env();
    map.insert("STOREFRONT_API_BASE_URL", "   ");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::MissingEnvVar(ref v)) if v == "STOREFRONT_API_BASE_URL"),
        "expected MissingEnvVar(STOREFRONT_API_BASE_URL), got: {result:?}"
    );
}

#[test]
fn build_app_config_succeeds_with_defaults() {
    let map = full_env();
    let result = build_app_config(lookup_from_map(&map));
    assert!(result.is_ok(), "expected Ok, got: {result:?}");
    let cfg = result.unwrap();
    assert_eq!(cfg.env, Environment::Development);
    assert_eq!(cfg.bind_addr.to_string(), "0.0.0.0:3000");
    assert_eq!(cfg.log_level, "info");
    assert_eq!(cfg.api_base_url, "https://api.example.com/api/v1");
    assert_eq!(cfg.messages_dir, std::path::PathBuf::from("./messages"));
    assert_eq!(cfg.api_timeout_secs, 10);
    assert_eq!(cfg.user_agent, "storefront/0.1");
}

#[test]
fn build_app_config_applies_overrides() {
    let mut map = full_env();
    map.insert("STOREFRONT_ENV", "production");
    map.insert("STOREFRONT_BIND_ADDR", "127.0.0.1:8080");
    map.insert("STOREFRONT_LOG_LEVEL", "debug");
    map.insert("STOREFRONT_MESSAGES_DIR", "/srv/messages");
    map.insert("STOREFRONT_API_TIMEOUT_SECS", "3");
    map.insert("STOREFRONT_USER_AGENT", "custom-agent/2.0");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.env, Environment::Production);
    assert_eq!(cfg.bind_addr.to_string(), "127.0.0.1:8080");
    assert_eq!(cfg.log_level, "debug");
    assert_eq!(cfg.messages_dir, std::path::PathBuf::from("/srv/messages"));
    assert_eq!(cfg.api_timeout_secs, 3);
    assert_eq!(cfg.user_agent, "custom-agent/2.0");
}

#[test]
fn build_app_config_fails_with_invalid_bind_addr() {
    let mut map = full_env();
    map.insert("STOREFRONT_BIND_ADDR", "not-a-socket-addr");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "STOREFRONT_BIND_ADDR"),
        "expected InvalidEnvVar(STOREFRONT_BIND_ADDR), got: {result:?}"
    );
}

#[test]
fn build_app_config_fails_with_invalid_timeout() {
    let mut map = full_env();
    map.insert("STOREFRONT_API_TIMEOUT_SECS", "not-a-number");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "STOREFRONT_API_TIMEOUT_SECS"),
        "expected InvalidEnvVar(STOREFRONT_API_TIMEOUT_SECS), got: {result:?}"
    );
}

#[test]
fn build_app_config_rejects_zero_timeout() {
    let mut map = full_env();
    map.insert("STOREFRONT_API_TIMEOUT_SECS", "0");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "STOREFRONT_API_TIMEOUT_SECS"),
        "expected InvalidEnvVar(STOREFRONT_API_TIMEOUT_SECS), got: {result:?}"
    );
}
