use crate::error::{CauseListError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_PORTAL_URL: &str =
    "https://services.ecourts.gov.in/ecourtindia_v6/?p=cause_list/index";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub portal: PortalConfig,
    pub browser: BrowserConfig,
    pub report: ReportConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PortalConfig {
    pub url: String,
    pub table_id: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BrowserConfig {
    pub window_width: u32,
    pub window_height: u32,
    pub nav_timeout: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ReportConfig {
    pub output_path: PathBuf,
    pub title: String,
    pub font_size: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            portal: PortalConfig::default(),
            browser: BrowserConfig::default(),
            report: ReportConfig::default(),
        }
    }
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_PORTAL_URL.to_string(),
            table_id: "dispTable".to_string(),
        }
    }
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            window_width: 1400,
            window_height: 900,
            nav_timeout: 60,
        }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            output_path: PathBuf::from("Cause_List.pdf"),
            title: "District Court Cause List".to_string(),
            font_size: 9.0,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(CauseListError::Config {
                message: format!("Configuration file not found: {}", path.display()),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| CauseListError::Config {
            message: format!("Failed to read config file {}: {}", path.display(), e),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| CauseListError::Config {
            message: format!("Failed to parse config file {}: {}", path.display(), e),
        })?;

        Ok(config)
    }

    pub fn load_with_defaults<P: AsRef<Path>>(config_path: Option<P>) -> Result<Self> {
        match config_path {
            Some(path) => Self::load_from_file(path),
            None => {
                let default_paths = ["causelist.toml", ".causelist.toml"];

                for default_path in &default_paths {
                    if Path::new(default_path).exists() {
                        return Self::load_from_file(default_path);
                    }
                }

                Ok(Self::default())
            }
        }
    }

    pub fn merge_with_cli_args(&mut self, cli_args: &CliOverrides) {
        if let Some(ref url) = cli_args.portal_url {
            self.portal.url = url.clone();
        }

        if let Some(ref output_path) = cli_args.output_path {
            self.report.output_path = output_path.clone();
        }

        if let Some(timeout) = cli_args.nav_timeout {
            self.browser.nav_timeout = timeout;
        }

        if let Some(ref title) = cli_args.title {
            self.report.title = title.clone();
        }
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let content = toml::to_string_pretty(self).map_err(|e| CauseListError::Config {
            message: format!("Failed to serialize config: {}", e),
        })?;

        std::fs::write(path, content).map_err(|e| CauseListError::Config {
            message: format!("Failed to write config file {}: {}", path.display(), e),
        })?;

        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        let url = url::Url::parse(&self.portal.url).map_err(|_| CauseListError::InvalidUrl {
            url: self.portal.url.clone(),
        })?;

        if url.scheme() != "https" {
            return Err(CauseListError::InvalidUrl {
                url: self.portal.url.clone(),
            });
        }

        if self.portal.table_id.trim().is_empty() {
            return Err(CauseListError::Config {
                message: "Portal table_id must not be empty".to_string(),
            });
        }

        if self.browser.nav_timeout == 0 {
            return Err(CauseListError::Config {
                message: "Browser navigation timeout must be greater than 0".to_string(),
            });
        }

        if self.report.font_size <= 0.0 {
            return Err(CauseListError::Config {
                message: "Report font size must be greater than 0".to_string(),
            });
        }

        if self.report.output_path.as_os_str().is_empty() {
            return Err(CauseListError::Config {
                message: "Report output path must not be empty".to_string(),
            });
        }

        if let Some(parent) = self.report.output_path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                return Err(CauseListError::Config {
                    message: format!("Output directory does not exist: {}", parent.display()),
                });
            }
        }

        Ok(())
    }

    pub fn nav_timeout_duration(&self) -> Duration {
        Duration::from_secs(self.browser.nav_timeout)
    }

    pub fn create_sample_config() -> String {
        let sample_config = Self::default();
        toml::to_string_pretty(&sample_config).unwrap_or_else(|_| String::new())
    }
}

#[derive(Debug, Default)]
pub struct CliOverrides {
    pub portal_url: Option<String>,
    pub output_path: Option<PathBuf>,
    pub nav_timeout: Option<u64>,
    pub title: Option<String>,
}

impl CliOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_portal_url(mut self, url: Option<String>) -> Self {
        self.portal_url = url;
        self
    }

    pub fn with_output_path(mut self, output_path: Option<PathBuf>) -> Self {
        self.output_path = output_path;
        self
    }

    pub fn with_nav_timeout(mut self, timeout: Option<u64>) -> Self {
        self.nav_timeout = timeout;
        self
    }

    pub fn with_title(mut self, title: Option<String>) -> Self {
        self.title = title;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.portal.table_id, "dispTable");
        assert!(config.portal.url.contains("ecourts.gov.in"));
        assert_eq!(config.report.output_path, PathBuf::from("Cause_List.pdf"));
        assert_eq!(config.browser.nav_timeout, 60);
    }

    #[test]
    fn test_config_validation() {
        let mut config = Config::default();
        assert!(config.validate().is_ok());

        config.portal.url = "ftp://example.com".to_string();
        assert!(config.validate().is_err());

        config.portal.url = DEFAULT_PORTAL_URL.to_string();
        config.portal.table_id = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_file_operations() {
        let config = Config::default();
        let temp_file = NamedTempFile::new().unwrap();

        config.save_to_file(temp_file.path()).unwrap();

        let loaded_config = Config::load_from_file(temp_file.path()).unwrap();
        assert_eq!(config.portal.url, loaded_config.portal.url);
        assert_eq!(config.report.title, loaded_config.report.title);
    }

    #[test]
    fn test_missing_config_file() {
        let result = Config::load_from_file("/nonexistent/causelist.toml");
        assert!(matches!(result, Err(CauseListError::Config { .. })));
    }

    #[test]
    fn test_cli_overrides() {
        let mut config = Config::default();

        let overrides = CliOverrides::new()
            .with_nav_timeout(Some(120))
            .with_output_path(Some(PathBuf::from("today.pdf")));

        config.merge_with_cli_args(&overrides);

        assert_eq!(config.browser.nav_timeout, 120);
        assert_eq!(config.report.output_path, PathBuf::from("today.pdf"));
        assert_eq!(config.portal.url, DEFAULT_PORTAL_URL);
    }

    #[test]
    fn test_sample_config_generation() {
        let sample = Config::create_sample_config();
        assert!(!sample.is_empty());
        assert!(sample.contains("[portal]"));
        assert!(sample.contains("[browser]"));
        assert!(sample.contains("[report]"));
    }
}
