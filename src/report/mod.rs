pub mod layout;
pub mod pdf;

pub use layout::{ReportLayout, Rgb};
pub use pdf::{render_report, ReportSummary};
