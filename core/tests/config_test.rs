use serial_test::serial;
use wellbeing_core::{ApiConfig, API_BASE_ENV};

#[test]
#[serial]
fn test_from_env_reads_base_url() {
    std::env::set_var(API_BASE_ENV, "http://127.0.0.1:8000/");

    let config = ApiConfig::from_env();
    assert_eq!(config.base_url, "http://127.0.0.1:8000/");
    assert_eq!(config.api_base().full("/health"), "http://127.0.0.1:8000/health");

    std::env::remove_var(API_BASE_ENV);
}

#[test]
#[serial]
fn test_from_env_without_variable_falls_back_to_build_value() {
    std::env::remove_var(API_BASE_ENV);

    let config = ApiConfig::from_env();
    assert_eq!(config.base_url, option_env!("API_BASE_URL").unwrap_or(""));
}

#[test]
fn test_explicit_config() {
    let config = ApiConfig::new("");
    assert!(config.api_base().is_same_origin());
    assert_eq!(config.api_base().full("api/daylight"), "/api/daylight");
}

#[test]
fn test_empty_base_falls_back_to_origin() {
    let config = ApiConfig::new("").or_origin("https://wellbeing.example.com");
    assert!(!config.api_base().is_same_origin());
    assert_eq!(
        config.api_base().full("/health"),
        "https://wellbeing.example.com/health"
    );

    // "/" strips to an empty base as well
    let config = ApiConfig::new("/").or_origin("http://localhost:8080");
    assert_eq!(config.base_url, "http://localhost:8080");
}

#[test]
fn test_configured_base_ignores_origin() {
    let config = ApiConfig::new("http://127.0.0.1:8000").or_origin("https://wellbeing.example.com");
    assert_eq!(config.base_url, "http://127.0.0.1:8000");
}
