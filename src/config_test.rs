use super::*;

#[test]
fn from_values_defaults() {
    let cfg = ClientConfig::from_values(None, None).unwrap();
    assert_eq!(cfg, ClientConfig::default());
    assert_eq!(cfg.api_base_url, DEFAULT_API_BASE_URL);
    assert_eq!(cfg.server_error_policy, ServerErrorPolicy::LocalFirst);
}

#[test]
fn from_values_trims_base_url() {
    let cfg = ClientConfig::from_values(Some(" https://auth.example.test/api/ "), None).unwrap();
    assert_eq!(cfg.api_base_url, "https://auth.example.test/api");
}

#[test]
fn from_values_rejects_blank_base_url() {
    assert_eq!(ClientConfig::from_values(Some(" / "), None), Err(ConfigError::EmptyBaseUrl));
}

#[test]
fn from_values_parses_server_until_edited() {
    let cfg = ClientConfig::from_values(None, Some("server_until_edited")).unwrap();
    assert_eq!(cfg.server_error_policy, ServerErrorPolicy::ServerUntilEdited);
}

#[test]
fn from_values_rejects_unknown_policy() {
    let err = ClientConfig::from_values(None, Some("sticky")).unwrap_err();
    assert_eq!(err, ConfigError::UnknownPolicy("sticky".to_owned()));
    assert!(err.to_string().contains("sticky"));
}
