pub mod toml_config;

use crate::adapters::DEFAULT_BASE_URL;
use crate::app::{OutputFormat, DEFAULT_PAGE_TITLE};
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use toml_config::TomlConfig;

#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Default, Serialize, Deserialize, Parser)]
#[command(name = "breed-cards")]
#[command(about = "Fetch the dog breed catalog and show it as cards")]
pub struct CliConfig {
    /// Origin of the breed API [default: https://dog.ceo/api]
    #[arg(long)]
    pub base_url: Option<String>,

    /// Path to a TOML settings file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Output format [default: text]
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Page title shown above the cards [default: Home Page]
    #[arg(long)]
    pub title: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,
}

/// Effective settings after merging the config file and command line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub base_url: String,
    pub title: String,
    pub format: OutputFormat,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            title: DEFAULT_PAGE_TITLE.to_string(),
            format: OutputFormat::default(),
        }
    }
}

impl Settings {
    /// Applies file values over the defaults.
    pub fn from_file_config(file: &TomlConfig) -> Result<Self> {
        file.validate()?;

        let mut settings = Settings::default();
        if let Some(base_url) = &file.api.base_url {
            settings.base_url = base_url.clone();
        }
        if let Some(title) = &file.page.title {
            settings.title = title.clone();
        }
        if let Some(format) = file.output_format()? {
            settings.format = format;
        }
        Ok(settings)
    }

    /// Loads the optional config file, then lets command-line flags win.
    #[cfg(feature = "cli")]
    pub fn resolve(cli: &CliConfig) -> Result<Self> {
        let mut settings = match &cli.config {
            Some(path) => {
                tracing::debug!("Loading settings from {}", path);
                Self::from_file_config(&TomlConfig::from_file(path)?)?
            }
            None => Settings::default(),
        };

        if let Some(base_url) = &cli.base_url {
            settings.base_url = base_url.clone();
        }
        if let Some(title) = &cli.title {
            settings.title = title.clone();
        }
        if let Some(format) = cli.format {
            settings.format = format;
        }

        settings.validate()?;
        Ok(settings)
    }
}

impl ConfigProvider for Settings {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn page_title(&self) -> &str {
        &self.title
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validation::validate_url("base_url", &self.base_url)?;
        validation::validate_non_empty_string("title", &self.title)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::AppError;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.base_url(), "https://dog.ceo/api");
        assert_eq!(settings.page_title(), "Home Page");
        assert_eq!(settings.format, OutputFormat::Text);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_from_file_config_overrides_defaults() {
        let file = TomlConfig::from_toml_str(
            r#"
[api]
base_url = "http://localhost:9000"

[output]
format = "json"
"#,
        )
        .unwrap();

        let settings = Settings::from_file_config(&file).unwrap();
        assert_eq!(settings.base_url, "http://localhost:9000");
        assert_eq!(settings.title, "Home Page");
        assert_eq!(settings.format, OutputFormat::Json);
    }

    #[cfg(feature = "cli")]
    #[test]
    fn test_cli_flags_win_over_file() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"[api]\nbase_url = \"http://file.example\"\n[page]\ntitle = \"File\"\n")
            .unwrap();

        let cli = CliConfig::parse_from([
            "breed-cards",
            "--config",
            file.path().to_str().unwrap(),
            "--title",
            "Flags",
            "--format",
            "csv",
        ]);

        let settings = Settings::resolve(&cli).unwrap();
        assert_eq!(settings.base_url, "http://file.example");
        assert_eq!(settings.title, "Flags");
        assert_eq!(settings.format, OutputFormat::Csv);
    }

    #[cfg(feature = "cli")]
    #[test]
    fn test_resolve_rejects_bad_base_url() {
        let cli = CliConfig::parse_from(["breed-cards", "--base-url", "dog.ceo"]);
        assert!(matches!(
            Settings::resolve(&cli),
            Err(AppError::InvalidConfigValueError { .. })
        ));
    }

    #[cfg(feature = "cli")]
    #[test]
    fn test_resolve_missing_file_is_io_error() {
        let cli = CliConfig::parse_from(["breed-cards", "-c", "/definitely/not/here.toml"]);
        assert!(matches!(Settings::resolve(&cli), Err(AppError::IoError(_))));
    }
}
