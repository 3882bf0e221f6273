use crate::extract::normalize::CellCleaner;
use serde::{Deserialize, Serialize};

/// Column labels for the rendered report, in table order.
pub const REPORT_HEADER: [&str; 4] = ["Sr No", "Case Info", "Party Name", "Advocate"];

/// A single cell as captured from the rendered table.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawCell {
    #[serde(default)]
    pub text: String,
    /// The cell's colspan attribute, if declared. Banner rows such as
    /// "Urgent Cases" span the full table width and carry one.
    #[serde(default, rename = "colSpan")]
    pub col_span: Option<String>,
}

impl RawCell {
    pub fn text(text: &str) -> Self {
        Self {
            text: text.to_string(),
            col_span: None,
        }
    }

    pub fn spanning(text: &str, span: &str) -> Self {
        Self {
            text: text.to_string(),
            col_span: Some(span.to_string()),
        }
    }
}

/// One captured table row, cells in document order.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawRow {
    #[serde(default)]
    pub cells: Vec<RawCell>,
}

impl RawRow {
    pub fn from_texts(texts: &[&str]) -> Self {
        Self {
            cells: texts.iter().map(|t| RawCell::text(t)).collect(),
        }
    }
}

/// A normalized cause list entry: serial number, cleaned case info,
/// party names and advocate names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CaseRecord {
    pub serial: String,
    pub case_info: String,
    pub parties: String,
    pub advocate: String,
}

/// Classifies captured rows and produces normalized case records.
///
/// Rows with no cells, fewer than four cells, or any cell declaring a
/// non-empty colspan attribute are section headers or decoration and
/// are dropped. Output order matches input order. An empty result is a
/// value, not an error; the caller decides how to surface it.
pub fn extract_records(rows: &[RawRow]) -> Vec<CaseRecord> {
    let cleaner = CellCleaner::new();

    rows.iter()
        .filter(|row| is_case_row(row))
        .map(|row| CaseRecord {
            serial: cleaner.clean_serial(&row.cells[0].text),
            case_info: cleaner.clean_case_info(&row.cells[1].text),
            parties: cleaner.clean_text(&row.cells[2].text),
            advocate: cleaner.clean_text(&row.cells[3].text),
        })
        .collect()
}

fn is_case_row(row: &RawRow) -> bool {
    if row.cells.len() < 4 {
        return false;
    }

    !row.cells
        .iter()
        .any(|cell| cell.col_span.as_deref().is_some_and(|s| !s.is_empty()))
}
