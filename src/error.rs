use thiserror::Error;

#[derive(Error, Debug)]
pub enum CauseListError {
    #[error("IO operation failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid portal URL: {url}")]
    InvalidUrl { url: String },

    #[error("Failed to launch browser: {message}")]
    BrowserLaunch { message: String },

    #[error("Navigation to {url} failed: {message}")]
    Navigation { url: String, message: String },

    #[error("Cause list table '{table_id}' not found on the page")]
    TableNotFound { table_id: String },

    #[error("Error reading cause list table: {message}")]
    Extraction { message: String },

    #[error("No valid case data found in the cause list table")]
    NoCaseRecords,

    #[error("Failed to render report: {message}")]
    Render { message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Operation was cancelled by user")]
    Cancelled,
}

pub trait UserFriendlyError {
    fn user_message(&self) -> String;
    fn suggestion(&self) -> Option<String>;
}

impl UserFriendlyError for CauseListError {
    fn user_message(&self) -> String {
        match self {
            CauseListError::InvalidUrl { url } => {
                format!("Invalid portal URL: {}", url)
            }
            CauseListError::BrowserLaunch { message } => {
                format!("Could not start the browser: {}", message)
            }
            CauseListError::Navigation { url, message } => {
                format!("Could not open {}: {}", url, message)
            }
            CauseListError::TableNotFound { table_id } => {
                format!("The cause list table '{}' was not found on the page", table_id)
            }
            CauseListError::Extraction { message } => {
                format!("Error reading cause list table: {}", message)
            }
            CauseListError::NoCaseRecords => {
                "No valid case data found in the cause list table".to_string()
            }
            CauseListError::Render { message } => {
                format!("Failed to write the PDF report: {}", message)
            }
            CauseListError::Config { message } => {
                format!("Configuration error: {}", message)
            }
            CauseListError::Cancelled => "Operation was cancelled by user".to_string(),
            _ => self.to_string(),
        }
    }

    fn suggestion(&self) -> Option<String> {
        match self {
            CauseListError::InvalidUrl { .. } => Some(
                "Provide an HTTPS URL pointing at the eCourts cause list page (e.g., https://services.ecourts.gov.in/ecourtindia_v6/?p=cause_list/index)".to_string(),
            ),
            CauseListError::BrowserLaunch { .. } => Some(
                "Ensure Chrome or Chromium is installed and reachable on PATH. A visible browser window is required for the captcha step.".to_string(),
            ),
            CauseListError::Navigation { .. } => Some(
                "Check your internet connection and try again. The eCourts portal may be temporarily unavailable.".to_string(),
            ),
            CauseListError::TableNotFound { .. } => Some(
                "Make sure the cause list has fully loaded in the browser before pressing Enter, and that you clicked 'View Cause List'.".to_string(),
            ),
            CauseListError::NoCaseRecords => Some(
                "Ensure the table has fully loaded before pressing Enter. Section headers alone do not count as case records.".to_string(),
            ),
            CauseListError::Render { .. } | CauseListError::Io(_) => Some(
                "Check that the output path is writable and the containing directory exists.".to_string(),
            ),
            CauseListError::Config { .. } => Some(
                "Check your configuration file syntax and ensure all required fields are present.".to_string(),
            ),
            _ => None,
        }
    }
}

impl From<url::ParseError> for CauseListError {
    fn from(_: url::ParseError) -> Self {
        CauseListError::InvalidUrl {
            url: "invalid URL".to_string(),
        }
    }
}

impl From<toml::de::Error> for CauseListError {
    fn from(error: toml::de::Error) -> Self {
        CauseListError::Config {
            message: error.to_string(),
        }
    }
}

impl From<chromiumoxide::error::CdpError> for CauseListError {
    fn from(error: chromiumoxide::error::CdpError) -> Self {
        CauseListError::Extraction {
            message: error.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CauseListError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_friendly_messages() {
        let error = CauseListError::InvalidUrl {
            url: "not-a-url".to_string(),
        };
        assert!(error.user_message().contains("Invalid portal URL"));
        assert!(error.suggestion().is_some());
    }

    #[test]
    fn test_no_case_records_notice() {
        let error = CauseListError::NoCaseRecords;
        assert!(error.user_message().contains("No valid case data"));
        assert!(error.suggestion().unwrap().contains("fully loaded"));
    }

    #[test]
    fn test_url_error_conversion() {
        let parse_err = url::Url::parse("::not a url::").unwrap_err();
        let err = CauseListError::from(parse_err);
        assert!(matches!(err, CauseListError::InvalidUrl { .. }));
    }

    #[test]
    fn test_cancelled_has_no_suggestion() {
        assert!(CauseListError::Cancelled.suggestion().is_none());
    }
}
