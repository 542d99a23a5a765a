use figment::{
    Figment,
    providers::{Format, Toml},
};

use crate::AppConfig;

const BASE: &str = r#"
    app_name = "app-web"
    app_env = "development"

    [server]
    host = "0.0.0.0"
    port = 7208

    [client]
    endpoint = "http://localhost:7208"
"#;

fn extract(toml: &str) -> AppConfig {
    Figment::new()
        .merge(Toml::string(toml))
        .extract()
        .expect("config should extract")
}

#[test]
fn test_telemetry_defaults() {
    let config = extract(BASE);
    assert_eq!(config.telemetry.log_level, "info");
}

#[test]
fn test_environment_flags() {
    let config = extract(BASE);
    assert!(config.is_development());
    assert!(!config.is_production());

    let prod = extract(&BASE.replace("development", "production"));
    assert!(prod.is_production());
}

#[test]
fn test_server_and_client_sections() {
    let config = extract(BASE);
    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.server.port, 7208);
    assert_eq!(config.client.endpoint, "http://localhost:7208");
}

#[test]
fn test_explicit_log_level_wins() {
    let toml = format!("{BASE}\n[telemetry]\nlog_level = \"debug\"\n");
    let config = extract(&toml);
    assert_eq!(config.telemetry.log_level, "debug");
}
