use regex::Regex;

/// Cleans raw cell text captured from the rendered cause list table.
///
/// The portal renders case info with embedded newlines, non-breaking
/// spaces, "View" button labels and stray quote characters; everything
/// here reduces a cell to a single clean line.
pub struct CellCleaner {
    quote_chars: Regex,
    multi_space: Regex,
}

impl CellCleaner {
    pub fn new() -> Self {
        Self {
            quote_chars: Regex::new(r#"['"]+"#).expect("quote pattern is valid"),
            multi_space: Regex::new(r"\s{2,}").expect("whitespace pattern is valid"),
        }
    }

    /// Serial numbers are only trimmed; they never contain markup.
    pub fn clean_serial(&self, raw: &str) -> String {
        raw.trim().to_string()
    }

    /// Baseline cleanup for party and advocate cells: newlines and
    /// non-breaking spaces become ordinary spaces, runs of whitespace
    /// collapse to one space, then the result is trimmed.
    pub fn clean_text(&self, raw: &str) -> String {
        let text = raw.replace('\n', " ").replace('\u{00A0}', " ");
        self.multi_space.replace_all(&text, " ").trim().to_string()
    }

    /// Case info cleanup: baseline cleanup plus removal of the portal's
    /// literal "View"/"view" button labels (exactly those two casings)
    /// and of single/double quote characters.
    pub fn clean_case_info(&self, raw: &str) -> String {
        let text = raw
            .replace('\n', " ")
            .replace('\u{00A0}', " ")
            .replace("View", "")
            .replace("view", "");
        let text = self.quote_chars.replace_all(&text, "");
        self.multi_space.replace_all(&text, " ").trim().to_string()
    }
}

impl Default for CellCleaner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serial_trimmed_only() {
        let cleaner = CellCleaner::new();
        assert_eq!(cleaner.clean_serial("  12 \n"), "12");
        assert_eq!(cleaner.clean_serial("3  4"), "3  4"); // interior untouched
    }

    #[test]
    fn test_newlines_become_spaces() {
        let cleaner = CellCleaner::new();
        assert_eq!(cleaner.clean_text("State\nvs\nAccused"), "State vs Accused");
    }

    #[test]
    fn test_non_breaking_spaces() {
        let cleaner = CellCleaner::new();
        assert_eq!(cleaner.clean_text("A\u{00A0}\u{00A0}B"), "A B");
    }

    #[test]
    fn test_whitespace_collapse() {
        let cleaner = CellCleaner::new();
        assert_eq!(cleaner.clean_text("a  b\t\tc   d"), "a b c d");
    }

    #[test]
    fn test_view_label_removed_case_sensitively() {
        let cleaner = CellCleaner::new();
        assert_eq!(cleaner.clean_case_info("View Case No. 42"), "Case No. 42");
        assert_eq!(cleaner.clean_case_info("case view details"), "case details");
        // Only the two exact casings are stripped
        assert_eq!(cleaner.clean_case_info("VIEW Case"), "VIEW Case");
        // "Viewing" loses its "View" prefix because the match is a plain substring
        assert_eq!(cleaner.clean_case_info("Viewing"), "ing");
    }

    #[test]
    fn test_quotes_stripped_from_case_info() {
        let cleaner = CellCleaner::new();
        assert_eq!(cleaner.clean_case_info("CC/\"123\"/2024"), "CC/123/2024");
        assert_eq!(cleaner.clean_case_info("It's listed"), "Its listed");
    }

    #[test]
    fn test_quotes_preserved_outside_case_info() {
        let cleaner = CellCleaner::new();
        assert_eq!(cleaner.clean_text("M/s \"Acme\" Ltd"), "M/s \"Acme\" Ltd");
    }

    #[test]
    fn test_normalization_is_idempotent() {
        let cleaner = CellCleaner::new();
        let inputs = [
            "View Case No. 123\n  vs  ",
            "\u{00A0}State of MP\nvs\nRam 'K'",
            "plain text",
            "",
        ];

        for input in inputs {
            let once = cleaner.clean_case_info(input);
            let twice = cleaner.clean_case_info(&once);
            assert_eq!(once, twice, "case info cleanup not idempotent for {input:?}");

            let once = cleaner.clean_text(input);
            let twice = cleaner.clean_text(&once);
            assert_eq!(once, twice, "text cleanup not idempotent for {input:?}");
        }
    }

    #[test]
    fn test_empty_and_whitespace_cells_degrade_to_empty() {
        let cleaner = CellCleaner::new();
        assert_eq!(cleaner.clean_text(""), "");
        assert_eq!(cleaner.clean_text(" \n \u{00A0} "), "");
        assert_eq!(cleaner.clean_case_info("View view"), "");
    }
}
