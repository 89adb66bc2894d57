use clap::{ArgAction, Parser};
use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::ui::components::BrandConfig;
use crate::ui::upload::DropzoneStep;

/// Config file picked up from the working directory when none is given.
const DEFAULT_CONFIG_FILE: &str = "config.yaml";

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file path
    #[arg(short, long, env = "CONFIG_FILE")]
    pub config: Option<String>,

    /// Address to bind
    #[arg(long, env = "HOST")]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(long, env = "PORT")]
    pub port: Option<u16>,

    /// Directory served under /static
    #[arg(long, env = "STATIC_DIR")]
    pub static_dir: Option<String>,

    /// Emit logs as JSON
    #[arg(long, env = "LOG_JSON", action = ArgAction::SetTrue)]
    pub log_json: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub brand: BrandSettings,
    pub assets: AssetsConfig,
    pub upload: UploadConfig,
    pub log: LogConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
    pub request_timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct BrandSettings {
    pub display_text: String,
    #[serde(default)]
    pub style_override: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AssetsConfig {
    pub static_dir: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct UploadConfig {
    pub heading: String,
    pub hint: String,
    pub accept: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LogConfig {
    pub json: bool,
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from_args(std::env::args())
    }

    /// Load with priority: CLI flag > CLI env var > `SLIDES_` env >
    /// config file > defaults.
    pub fn load_from_args<I, T>(args: I) -> Result<Self, config::ConfigError>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let cli =
            Cli::try_parse_from(args).map_err(|e| config::ConfigError::Message(e.to_string()))?;

        let upload = DropzoneStep::default();
        let mut builder = Config::builder()
            .set_default("server.port", 3000)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.request_timeout_secs", 30)?
            .set_default("brand.display_text", "AI Slides")?
            .set_default("assets.static_dir", "static")?
            .set_default("upload.heading", upload.heading)?
            .set_default("upload.hint", upload.hint)?
            .set_default("upload.accept", upload.accept)?
            .set_default("log.json", false)?;

        // An explicit file must exist; the working-directory one is optional.
        match &cli.config {
            Some(path) => builder = builder.add_source(File::with_name(path).required(true)),
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
                builder = builder.add_source(File::with_name(DEFAULT_CONFIG_FILE).required(false));
            }
            None => {}
        }

        // E.g. SLIDES_SERVER__PORT=8000
        builder = builder.add_source(
            Environment::with_prefix("SLIDES")
                .separator("__")
                .try_parsing(true),
        );

        if let Some(host) = cli.host {
            builder = builder.set_override("server.host", host)?;
        }
        if let Some(port) = cli.port {
            builder = builder.set_override("server.port", port)?;
        }
        if let Some(dir) = cli.static_dir {
            builder = builder.set_override("assets.static_dir", dir)?;
        }
        // Absent flag leaves the file/env value alone.
        if cli.log_json {
            builder = builder.set_override("log.json", true)?;
        }

        builder.build()?.try_deserialize()
    }

    /// Base wordmark settings shared by every view.
    #[must_use]
    pub fn brand_config(&self) -> BrandConfig {
        let brand = BrandConfig::new(self.brand.display_text.clone());
        match &self.brand.style_override {
            Some(classes) => brand.style_override(classes),
            None => brand,
        }
    }

    /// Workflow embedded in the upload page.
    #[must_use]
    pub fn upload_step(&self) -> DropzoneStep {
        DropzoneStep {
            heading: self.upload.heading.clone(),
            hint: self.upload.hint.clone(),
            accept: self.upload.accept.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_port_override() {
        let config = AppConfig::load_from_args(["slides-shell", "--port", "4321"]).unwrap();
        assert_eq!(config.server.port, 4321);
    }

    #[test]
    fn test_log_json_is_a_bare_flag() {
        let config = AppConfig::load_from_args(["slides-shell", "--log-json"]).unwrap();
        assert!(config.log.json);

        let config = AppConfig::load_from_args(["slides-shell", "--log-json", "--port", "4000"])
            .unwrap();
        assert!(config.log.json);
        assert_eq!(config.server.port, 4000);
    }

    #[test]
    fn test_brand_config_carries_override() {
        let mut config = AppConfig::load_from_args(["slides-shell"]).unwrap();
        config.brand.display_text = "Deck".to_string();
        config.brand.style_override = Some("tracking-wide".to_string());

        let brand = config.brand_config();
        assert_eq!(brand.display_text, "Deck");
        assert_eq!(brand.style_override.as_deref(), Some("tracking-wide"));
    }
}
