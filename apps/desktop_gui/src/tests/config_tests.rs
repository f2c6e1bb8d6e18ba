use super::*;

use std::{
    env, fs,
    time::{SystemTime, UNIX_EPOCH},
};

fn temp_dir(label: &str) -> PathBuf {
    let suffix = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock")
        .as_nanos();
    let dir = env::temp_dir().join(format!("employees_desktop_{label}_{suffix}"));
    fs::create_dir_all(&dir).expect("temp dir");
    dir
}

#[test]
fn defaults_to_local_api() {
    assert_eq!(Settings::default().api_base_url, "http://127.0.0.1:8000/api");
}

#[test]
fn normalizes_trailing_slash_and_blank_values() {
    assert_eq!(
        normalize_api_base_url(" http://example.test/api/ ").expect("normalize"),
        "http://example.test/api"
    );
    assert_eq!(
        normalize_api_base_url("").expect("normalize"),
        DEFAULT_API_BASE_URL
    );
}

#[test]
fn rejects_non_http_urls() {
    assert!(normalize_api_base_url("ftp://example.test/api").is_err());
    assert!(normalize_api_base_url("not a url").is_err());
}

#[test]
fn later_env_var_overrides_earlier() {
    let mut settings = Settings::default();
    apply_env(&mut settings, |key| match key {
        "EMPLOYEES_API_URL" => Some("http://first.test/api".into()),
        "APP__API_BASE_URL" => Some("http://second.test/api".into()),
        _ => None,
    });
    assert_eq!(settings.api_base_url, "http://second.test/api");

    let mut settings = Settings::default();
    apply_env(&mut settings, |_| None);
    assert_eq!(settings, Settings::default());
}

#[test]
fn reads_api_base_url_from_toml_file() {
    let dir = temp_dir("file");
    let path = dir.join("employees.toml");
    fs::write(&path, "api_base_url = \"http://file.test/api/\"\n").expect("write");

    let mut settings = Settings::default();
    apply_config_file(&mut settings, &path, true).expect("apply");
    assert_eq!(settings.api_base_url, "http://file.test/api/");

    fs::remove_dir_all(dir).expect("cleanup");
}

#[test]
fn missing_file_is_only_an_error_when_named() {
    let dir = temp_dir("missing");
    let path = dir.join("absent.toml");

    let mut settings = Settings::default();
    apply_config_file(&mut settings, &path, false).expect("optional file");
    assert_eq!(settings, Settings::default());
    assert!(apply_config_file(&mut settings, &path, true).is_err());

    fs::remove_dir_all(dir).expect("cleanup");
}

#[test]
fn command_line_wins_over_file() {
    let dir = temp_dir("cli");
    let path = dir.join("employees.toml");
    fs::write(&path, "api_base_url = \"http://file.test/api\"\n").expect("write");

    let settings =
        load_settings(Some(&path), Some("https://cli.test/api/")).expect("load settings");
    assert_eq!(settings.api_base_url, "https://cli.test/api");

    fs::remove_dir_all(dir).expect("cleanup");
}
