use causelist::{CauseList, CauseListError, Cli, OutputFormatter, OutputMode, UserFriendlyError};
use clap::Parser;
use std::process;

#[tokio::main]
async fn main() {
    let exit_code = run().await;
    process::exit(exit_code);
}

async fn run() -> i32 {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Handle special commands first
    if cli.generate_config {
        return handle_generate_config(&cli);
    }

    // Create CauseList instance
    let causelist = match CauseList::from_cli(&cli) {
        Ok(causelist) => causelist,
        Err(e) => {
            print_startup_error(&e);
            return 1;
        }
    };

    // Handle dry run mode
    if cli.dry_run {
        return handle_dry_run(&causelist);
    }

    // Execute the capture workflow
    match causelist.capture().await {
        Ok(report) => {
            causelist.output_formatter().print_capture_report(&report);
            0
        }
        Err(CauseListError::NoCaseRecords) => {
            // Soft notice, not a failure: the browser has already been
            // released and no document was produced.
            causelist.handle_error(&CauseListError::NoCaseRecords);
            0
        }
        Err(e) => {
            causelist.handle_error(&e);

            // Map error types to appropriate exit codes
            match e {
                CauseListError::Cancelled => 130, // Interrupted (SIGINT)
                CauseListError::InvalidUrl { .. } => 2,
                CauseListError::BrowserLaunch { .. } => 3,
                CauseListError::Navigation { .. } => 4,
                CauseListError::TableNotFound { .. } => 5,
                CauseListError::Extraction { .. } => 5,
                CauseListError::Render { .. } => 7,
                CauseListError::Io(_) => 7,
                _ => 1, // General error
            }
        }
    }
}

fn handle_generate_config(cli: &Cli) -> i32 {
    let config_path = cli
        .config
        .as_ref()
        .map(|p| p.to_string_lossy().to_string())
        .unwrap_or_else(|| "causelist.toml".to_string());

    match CauseList::generate_sample_config(&config_path) {
        Ok(()) => {
            println!("Generated sample configuration file: {}", config_path);
            println!("\nTo use this configuration:");
            println!("  causelist --config {}", config_path);
            println!("\nEdit the file to customize the portal URL and report settings.");
            0
        }
        Err(e) => {
            eprintln!("Failed to generate configuration file: {}", e.user_message());
            if let Some(suggestion) = e.suggestion() {
                eprintln!("Suggestion: {}", suggestion);
            }
            1
        }
    }
}

fn handle_dry_run(causelist: &CauseList) -> i32 {
    let formatter = causelist.output_formatter();
    let config = causelist.config();

    formatter.info("DRY RUN MODE - No browser will be opened");
    formatter.print_separator();

    formatter.info("Configuration that would be used:");
    println!("  Portal URL:    {}", config.portal.url);
    println!("  Table element: #{}", config.portal.table_id);
    println!(
        "  Browser:       {}x{} window, {}s page load timeout",
        config.browser.window_width, config.browser.window_height, config.browser.nav_timeout
    );
    println!("  Report title:  {}", config.report.title);
    println!("  Output file:   {}", config.report.output_path.display());

    formatter.print_separator();
    formatter.success("Dry run completed successfully");
    formatter.info("Run without --dry-run to perform the capture");

    0
}

fn print_startup_error(error: &CauseListError) {
    // Create a basic formatter for startup errors
    let formatter = OutputFormatter::new(OutputMode::Human, 0, false);
    formatter.print_user_friendly_error(error);
}
