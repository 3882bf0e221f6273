pub mod classifier;
pub mod normalize;

pub use classifier::{extract_records, CaseRecord, RawCell, RawRow, REPORT_HEADER};
pub use normalize::CellCleaner;
