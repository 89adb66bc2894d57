use serial_test::serial;
use slides_shell::config::AppConfig;
use std::env;
use std::fs;
use std::io::Write;

// Helper to clear environment variables that might interfere with tests
fn clear_env_vars() {
    unsafe {
        env::remove_var("SLIDES_SERVER__PORT");
        env::remove_var("SLIDES_BRAND__DISPLAY_TEXT");
        env::remove_var("CONFIG_FILE");
        env::remove_var("PORT");
        env::remove_var("HOST");
        env::remove_var("STATIC_DIR");
        env::remove_var("LOG_JSON");
    }
}

fn load() -> AppConfig {
    AppConfig::load_from_args(["slides-shell"]).expect("Failed to load config")
}

#[test]
#[serial]
fn test_default_config() {
    clear_env_vars();

    let config = load();
    assert_eq!(config.server.port, 3000);
    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.brand.display_text, "AI Slides");
    assert!(config.brand.style_override.is_none());
    assert_eq!(config.assets.static_dir, "static");
    assert!(!config.log.json);
}

#[test]
#[serial]
fn test_env_override() {
    clear_env_vars();
    unsafe {
        env::set_var("SLIDES_SERVER__PORT", "9090");
        env::set_var("SLIDES_BRAND__DISPLAY_TEXT", "Deck Maker");
    }

    let config = load();
    assert_eq!(config.server.port, 9090);
    assert_eq!(config.brand_config().display_text, "Deck Maker");

    clear_env_vars();
}

#[test]
#[serial]
fn test_file_load() {
    clear_env_vars();

    let mut file = tempfile::Builder::new()
        .suffix(".yaml")
        .tempfile()
        .expect("Failed to create temp config");
    write!(
        file,
        r#"
server:
  port: 7070
upload:
  accept: ".pdf"
"#
    )
    .expect("Failed to write temp config");

    // Point AppConfig at the file through the CLI env var
    unsafe {
        env::set_var("CONFIG_FILE", file.path());
    }

    let config = load();
    assert_eq!(config.server.port, 7070);
    assert_eq!(config.upload_step().accept, ".pdf");

    clear_env_vars();
}

#[test]
#[serial]
fn test_missing_explicit_file_is_an_error() {
    clear_env_vars();

    let result = AppConfig::load_from_args(["slides-shell", "--config", "does-not-exist.yaml"]);
    assert!(result.is_err());
}

#[test]
#[serial]
fn test_cli_beats_env() {
    clear_env_vars();
    unsafe {
        env::set_var("SLIDES_SERVER__PORT", "9090");
    }

    let config = AppConfig::load_from_args(["slides-shell", "--port", "8088"]).unwrap();
    assert_eq!(config.server.port, 8088);

    clear_env_vars();
}

#[test]
#[serial]
fn test_cwd_config_fallback() {
    clear_env_vars();

    let config_content = r#"
server:
  port: 6060
brand:
  display_text: "Slides"
  style_override: "tracking-wide"
    "#;
    let cwd_path = "config.yaml";
    fs::write(cwd_path, config_content).expect("Failed to write ./config.yaml");

    let config = load();

    let result = std::panic::catch_unwind(|| {
        assert_eq!(config.server.port, 6060);
        assert_eq!(
            config.brand_config().style_override.as_deref(),
            Some("tracking-wide")
        );
    });

    fs::remove_file(cwd_path).unwrap();

    if let Err(e) = result {
        std::panic::resume_unwind(e);
    }
}
