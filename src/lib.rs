pub mod browser;
pub mod cli;
pub mod config;
pub mod error;
pub mod extract;
pub mod report;
pub mod ui;

// Public API re-exports
pub use cli::{Cli, OutputFormat};
pub use config::{BrowserConfig, CliOverrides, Config, PortalConfig, ReportConfig};
pub use error::{CauseListError, Result, UserFriendlyError};

// Core functionality re-exports
pub use browser::{PortalSession, RowSource};
pub use extract::{extract_records, CaseRecord, RawCell, RawRow, REPORT_HEADER};
pub use report::{render_report, ReportLayout, ReportSummary};
pub use ui::{GracefulShutdown, OutputFormatter, OutputMode, ProgressManager};

use serde::Serialize;
use std::path::{Path, PathBuf};
use tokio::task;

/// Outcome of one capture run, printed as the final report.
#[derive(Debug, Clone, Serialize)]
pub struct CaptureReport {
    pub records: usize,
    pub pages: usize,
    pub bytes: u64,
    pub output_path: PathBuf,
}

/// Main library interface: one browser-assisted capture per run.
pub struct CauseList {
    config: Config,
    output_formatter: OutputFormatter,
    progress_manager: ProgressManager,
    shutdown: GracefulShutdown,
}

impl CauseList {
    /// Create a new CauseList instance with the provided configuration
    pub fn new(config: Config, output_mode: OutputMode, verbose: u8, quiet: bool) -> Result<Self> {
        let output_formatter = OutputFormatter::new(output_mode, verbose, quiet);
        let progress_manager = ProgressManager::new(!quiet);
        let shutdown = GracefulShutdown::new()?;

        Ok(Self {
            config,
            output_formatter,
            progress_manager,
            shutdown,
        })
    }

    /// Create a new CauseList instance for testing (no signal handler conflicts)
    #[cfg(test)]
    pub fn new_for_test(config: Config, output_mode: OutputMode, verbose: u8, quiet: bool) -> Self {
        let output_formatter = OutputFormatter::new(output_mode, verbose, quiet);
        let progress_manager = ProgressManager::new(!quiet);
        let shutdown = GracefulShutdown::new_for_test();

        Self {
            config,
            output_formatter,
            progress_manager,
            shutdown,
        }
    }

    /// Create CauseList instance from CLI arguments
    pub fn from_cli(cli_args: &Cli) -> Result<Self> {
        let config = cli_args.load_config()?;
        let output_mode = match cli_args.output_format {
            crate::cli::OutputFormat::Human => OutputMode::Human,
            crate::cli::OutputFormat::Json => OutputMode::Json,
            crate::cli::OutputFormat::Plain => OutputMode::Plain,
        };

        Self::new(config, output_mode, cli_args.verbose, cli_args.quiet)
    }

    /// Runs one capture: open the portal, wait for the operator,
    /// snapshot and classify the table, render the PDF.
    ///
    /// The browser session is released on every path out of the
    /// snapshot phase, including cancellation and the empty-table case,
    /// before any document is written.
    pub async fn capture(&self) -> Result<CaptureReport> {
        self.shutdown.check_shutdown()?;
        self.output_formatter
            .start_operation("Starting cause list capture");

        let records = self.snapshot_records().await?;
        self.shutdown.check_shutdown()?;

        if records.is_empty() {
            return Err(CauseListError::NoCaseRecords);
        }

        self.output_formatter
            .info(&format!("Found {} case records", records.len()));

        let summary = self.render_records(&records)?;

        self.output_formatter.success(&format!(
            "PDF created successfully: {}",
            summary.path.display()
        ));

        Ok(CaptureReport {
            records: records.len(),
            pages: summary.pages,
            bytes: summary.bytes,
            output_path: summary.path,
        })
    }

    /// Opens the browser session, gates extraction on the operator
    /// prompt, snapshots the table and closes the session.
    async fn snapshot_records(&self) -> Result<Vec<CaseRecord>> {
        let spinner = self
            .progress_manager
            .create_spinner("Opening the cause list portal");
        let session = PortalSession::open(&self.config).await;
        spinner.finish_and_clear();
        let session = session?;

        let result = self.gated_snapshot(&session).await;

        // Single release point for the session, reached from success,
        // cancellation and every extraction error.
        if let Err(e) = session.close().await {
            self.output_formatter
                .warning(&format!("Browser session did not shut down cleanly: {}", e));
        }

        result
    }

    async fn gated_snapshot(&self, session: &PortalSession) -> Result<Vec<CaseRecord>> {
        self.output_formatter.info(
            "Please select State, District, Court and Date in the browser, \
             solve the captcha, and click 'View Cause List'.",
        );

        let prompt =
            "After the cause list table has fully loaded, press Enter here to continue...";
        task::spawn_blocking({
            let prompt = prompt.to_string();
            move || ui::wait_for_operator(&prompt)
        })
        .await
        .map_err(|e| CauseListError::Extraction {
            message: format!("operator prompt task failed: {}", e),
        })??;

        self.shutdown.check_shutdown()?;

        let spinner = self
            .progress_manager
            .create_spinner("Reading the cause list table");
        let records = collect_records(session).await;
        spinner.finish_and_clear();
        records
    }

    fn render_records(&self, records: &[CaseRecord]) -> Result<ReportSummary> {
        let spinner = self.progress_manager.create_spinner("Rendering PDF report");
        let layout = ReportLayout::default().with_font_size(self.config.report.font_size);
        let summary = render_report(
            &REPORT_HEADER,
            records,
            &self.config.report.output_path,
            &layout,
            &self.config.report.title,
        );
        spinner.finish_and_clear();
        summary
    }

    /// Get configuration reference
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get output formatter reference
    pub fn output_formatter(&self) -> &OutputFormatter {
        &self.output_formatter
    }

    /// Check if shutdown has been requested
    pub fn is_running(&self) -> bool {
        self.shutdown.is_running()
    }

    /// Request graceful shutdown
    pub fn request_shutdown(&self) {
        self.shutdown.request_shutdown();
    }

    /// Handle error with user-friendly output
    pub fn handle_error(&self, error: &CauseListError) {
        self.output_formatter.print_user_friendly_error(error);
    }

    /// Generate sample configuration file
    pub fn generate_sample_config<P: AsRef<Path>>(output_path: P) -> Result<()> {
        let sample_config = Config::create_sample_config();
        std::fs::write(output_path.as_ref(), sample_config).map_err(CauseListError::Io)?;
        Ok(())
    }
}

/// Snapshots rows from any source and classifies them into records.
/// Separated from the session so fixtures can stand in for a browser.
pub async fn collect_records(source: &(dyn RowSource + Sync)) -> Result<Vec<CaseRecord>> {
    let rows = source.rows().await?;
    Ok(extract_records(&rows))
}

/// Validate a cause list portal URL
pub fn validate_portal_url(url: &str) -> Result<String> {
    cli::validate_portal_url(url).map_err(|msg| CauseListError::InvalidUrl { url: msg })
}

/// Get version information
pub fn version_info() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    struct FixtureSource {
        rows: Vec<RawRow>,
        fail: bool,
    }

    #[async_trait]
    impl RowSource for FixtureSource {
        async fn rows(&self) -> Result<Vec<RawRow>> {
            if self.fail {
                return Err(CauseListError::TableNotFound {
                    table_id: "dispTable".to_string(),
                });
            }
            Ok(self.rows.clone())
        }
    }

    #[test]
    fn test_causelist_creation() {
        let config = Config::default();
        let causelist = CauseList::new_for_test(config, OutputMode::Human, 1, false);
        assert!(causelist.is_running());
        assert_eq!(causelist.config().portal.table_id, "dispTable");
    }

    #[test]
    fn test_shutdown_handling() {
        let config = Config::default();
        let causelist = CauseList::new_for_test(config, OutputMode::Human, 0, true);

        assert!(causelist.is_running());
        causelist.request_shutdown();
        assert!(!causelist.is_running());
    }

    #[tokio::test]
    async fn test_collect_records_from_fixture() {
        let source = FixtureSource {
            rows: vec![
                RawRow {
                    cells: vec![RawCell::spanning("Urgent Cases", "4")],
                },
                RawRow::from_texts(&["1", "View CC/12/2024", "A vs B", "Adv. K"]),
            ],
            fail: false,
        };

        let records = collect_records(&source).await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].case_info, "CC/12/2024");
    }

    #[tokio::test]
    async fn test_collect_records_propagates_source_errors() {
        let source = FixtureSource {
            rows: vec![],
            fail: true,
        };

        let result = collect_records(&source).await;
        assert!(matches!(result, Err(CauseListError::TableNotFound { .. })));
    }

    #[tokio::test]
    async fn test_collect_records_empty_table_is_a_value() {
        let source = FixtureSource {
            rows: vec![],
            fail: false,
        };

        let records = collect_records(&source).await.unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_sample_config_generation() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let config_path = temp_dir.path().join("sample.toml");

        CauseList::generate_sample_config(&config_path).unwrap();
        assert!(config_path.exists());

        let content = std::fs::read_to_string(&config_path).unwrap();
        assert!(content.contains("[portal]"));
        assert!(content.contains("[report]"));
    }

    #[test]
    fn test_url_validation() {
        assert!(validate_portal_url("https://services.ecourts.gov.in/ecourtindia_v6/").is_ok());
        assert!(validate_portal_url("http://insecure.example.com").is_err());
        assert!(validate_portal_url("not-a-url").is_err());
    }

    #[test]
    fn test_version_info() {
        assert!(!version_info().is_empty());
    }
}
