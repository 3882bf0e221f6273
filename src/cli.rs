use crate::config::{CliOverrides, Config};
use crate::error::Result;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use url::Url;

#[derive(Parser, Debug)]
#[command(name = "causelist")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Capture a district court cause list as a styled PDF report")]
#[command(
    long_about = "CauseList opens the eCourts cause list page in a visible browser, waits while \
                       you select State, District, Court and Date and solve the captcha, then \
                       snapshots the loaded table and writes it out as a paginated PDF."
)]
#[command(after_help = "EXAMPLES:\n  \
    causelist\n  \
    causelist --output reports/cause_list_today.pdf\n  \
    causelist --url https://services.ecourts.gov.in/ecourtindia_v6/?p=cause_list/index -v\n  \
    causelist --config my-config.toml --output-format json\n\n\
    The captcha must be solved by hand; the tool waits for you to press Enter.")]
pub struct Cli {
    /// Output PDF path (defaults to Cause_List.pdf)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Cause list portal URL
    #[arg(long, value_parser = validate_portal_url)]
    pub url: Option<String>,

    /// Configuration file path
    #[arg(short, long, help = "Path to TOML configuration file")]
    pub config: Option<PathBuf>,

    /// Output format for results
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    pub output_format: OutputFormat,

    /// Report title line
    #[arg(long, help = "Title printed at the top of the report")]
    pub title: Option<String>,

    /// Page navigation timeout in seconds
    #[arg(long, help = "Timeout for the initial page load (seconds)")]
    pub timeout: Option<u64>,

    /// Verbose output level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Dry run (show the resolved configuration without launching a browser)
    #[arg(long, help = "Show what would be captured without opening a browser")]
    pub dry_run: bool,

    /// Generate sample configuration file
    #[arg(long, help = "Generate a sample configuration file")]
    pub generate_config: bool,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable colored output
    Human,
    /// JSON formatted output
    Json,
    /// Plain text output
    Plain,
}

impl Cli {
    pub fn load_config(&self) -> Result<Config> {
        let mut config = Config::load_with_defaults(self.config.as_ref())?;

        let overrides = self.create_cli_overrides();
        config.merge_with_cli_args(&overrides);
        config.validate()?;

        Ok(config)
    }

    pub fn create_cli_overrides(&self) -> CliOverrides {
        CliOverrides::new()
            .with_portal_url(self.url.clone())
            .with_output_path(self.output.clone())
            .with_nav_timeout(self.timeout)
            .with_title(self.title.clone())
    }

    pub fn is_verbose(&self) -> bool {
        self.verbose > 0 && !self.quiet
    }

    pub fn verbosity_level(&self) -> u8 {
        if self.quiet {
            0
        } else {
            self.verbose
        }
    }
}

pub fn validate_portal_url(s: &str) -> std::result::Result<String, String> {
    let url =
        Url::parse(s).map_err(|_| "Invalid URL format. Please provide a valid URL.".to_string())?;

    if url.scheme() != "https" {
        return Err("Only HTTPS portal URLs are supported".to_string());
    }

    let host = url
        .host_str()
        .ok_or("URL must include a valid hostname".to_string())?;

    if host.is_empty() {
        return Err("URL must include a valid hostname".to_string());
    }

    Ok(s.to_string())
}
