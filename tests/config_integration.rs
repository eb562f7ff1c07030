use chatai_web::config::AppConfig;
use serial_test::serial;
use std::env;

// Helper to clear environment variables that might interfere with tests
fn clear_env_vars() {
    unsafe {
        env::remove_var("CHATAI_SERVER__PORT");
        env::remove_var("CHATAI_BACKEND__BASE_URL");
        env::remove_var("CHATAI_RESILIENCE__TIMEOUT_DISABLED");
        env::remove_var("PORT");
        env::remove_var("BACKEND_URL");
        env::remove_var("TIMEOUT_DISABLED");
    }
}

#[test]
#[serial]
fn test_default_config() {
    clear_env_vars();

    let config = AppConfig::load_from_args(["chatai-web"]).expect("Failed to load config");
    assert_eq!(config.server.port, 3000);
    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.backend.base_url, "http://127.0.0.1:5000");
    assert!(!config.resilience.timeout_disabled);
}

#[test]
#[serial]
fn test_env_override() {
    clear_env_vars();
    unsafe {
        env::set_var("CHATAI_SERVER__PORT", "9090");
        env::set_var("CHATAI_BACKEND__BASE_URL", "http://10.0.0.1:5000");
        env::set_var("CHATAI_RESILIENCE__TIMEOUT_DISABLED", "true");
    }

    let config = AppConfig::load_from_args(["chatai-web"]).expect("Failed to load config");
    assert_eq!(config.server.port, 9090);
    assert_eq!(config.backend.base_url, "http://10.0.0.1:5000");
    assert!(config.resilience.timeout_disabled);

    clear_env_vars();
}

#[test]
#[serial]
fn test_cli_overrides_env() {
    clear_env_vars();
    unsafe {
        env::set_var("CHATAI_SERVER__PORT", "9090");
    }

    let config =
        AppConfig::load_from_args(["chatai-web", "--port", "7070", "--backend-url", "http://b:1"])
            .expect("Failed to load config");
    assert_eq!(config.server.port, 7070);
    assert_eq!(config.backend.base_url, "http://b:1");

    clear_env_vars();
}

#[test]
#[serial]
fn test_timeout_disabled_flag() {
    clear_env_vars();

    let config = AppConfig::load_from_args(["chatai-web", "--timeout-disabled", "true"])
        .expect("Failed to load config");
    assert!(config.resilience.timeout_disabled);
}
