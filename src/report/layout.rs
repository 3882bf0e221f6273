//! Page geometry, table styling and text wrapping for the PDF report.

/// An RGB color in the 0.0..=1.0 range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xFF) as f32 / 255.0,
            g: ((hex >> 8) & 0xFF) as f32 / 255.0,
            b: (hex & 0xFF) as f32 / 255.0,
        }
    }
}

pub const BLACK: Rgb = Rgb::new(0.0, 0.0, 0.0);

const POINTS_PER_INCH: f32 = 72.0;

/// Fixed layout parameters for the cause list report.
///
/// Page size is A4 landscape; column widths are the narrow serial /
/// wide case info / wide party / medium advocate split the cause list
/// table needs. Colors mirror the portal's report styling: dark blue
/// header with light text, zebra-striped data rows, thin grey grid.
#[derive(Debug, Clone)]
pub struct ReportLayout {
    pub page_width: f32,
    pub page_height: f32,
    pub margin: f32,
    pub col_widths: [f32; 4],
    pub font_size: f32,
    pub leading: f32,
    pub title_size: f32,
    pub title_gap: f32,
    pub pad_x: f32,
    pub pad_y: f32,
    pub header_bg: Rgb,
    pub header_fg: Rgb,
    pub row_shades: [Rgb; 2],
    pub grid: Rgb,
    pub grid_width: f32,
}

impl Default for ReportLayout {
    fn default() -> Self {
        Self {
            // A4 landscape
            page_width: 841.89,
            page_height: 595.28,
            margin: 30.0,
            col_widths: [
                0.6 * POINTS_PER_INCH,
                3.2 * POINTS_PER_INCH,
                3.5 * POINTS_PER_INCH,
                2.8 * POINTS_PER_INCH,
            ],
            font_size: 9.0,
            leading: 11.0,
            title_size: 16.0,
            title_gap: 12.0,
            pad_x: 6.0,
            pad_y: 4.0,
            header_bg: Rgb::from_hex(0x003366),
            header_fg: Rgb::new(0.96, 0.96, 0.96),
            row_shades: [Rgb::new(1.0, 1.0, 1.0), Rgb::from_hex(0xF3F3F3)],
            grid: Rgb::new(0.5, 0.5, 0.5),
            grid_width: 0.25,
        }
    }
}

impl ReportLayout {
    pub fn with_font_size(mut self, size: f32) -> Self {
        self.font_size = size;
        self.leading = size + 2.0;
        self
    }

    pub fn table_width(&self) -> f32 {
        self.col_widths.iter().sum()
    }

    /// Horizontal start of the given column.
    pub fn col_x(&self, col: usize) -> f32 {
        self.margin + self.col_widths[..col].iter().sum::<f32>()
    }

    pub fn row_height(&self, line_count: usize) -> f32 {
        2.0 * self.pad_y + line_count.max(1) as f32 * self.leading
    }

    /// Vertical space for the title line plus the gap below it.
    pub fn title_block_height(&self) -> f32 {
        self.title_size * 1.2 + self.title_gap
    }

    /// Wraps cell text to fit the given column's inner width.
    pub fn wrap_cell(&self, text: &str, col: usize) -> Vec<String> {
        let max_width = self.col_widths[col] - 2.0 * self.pad_x;
        wrap_text(text, max_width, self.font_size)
    }
}

/// Greedy word wrap with a character-split fallback for runs that do
/// not fit a line on their own. Never truncates.
pub fn wrap_text(text: &str, max_width: f32, font_size: f32) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{current} {word}")
        };

        if text_width(&candidate, font_size) <= max_width {
            current = candidate;
            continue;
        }

        if !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }

        if text_width(word, font_size) <= max_width {
            current = word.to_string();
        } else {
            // Unbroken run wider than the column: split at characters.
            for c in word.chars() {
                let mut candidate = current.clone();
                candidate.push(c);
                if !current.is_empty() && text_width(&candidate, font_size) > max_width {
                    lines.push(std::mem::take(&mut current));
                    current.push(c);
                } else {
                    current = candidate;
                }
            }
        }
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }

    lines
}

/// Approximate advance width of a string in points, using Helvetica
/// AFM metrics for ASCII and a full em for anything wider.
pub fn text_width(text: &str, font_size: f32) -> f32 {
    let units: u32 = text.chars().map(char_width_units).sum();
    units as f32 / 1000.0 * font_size
}

/// Helvetica advance widths in 1/1000 em for 0x20..=0x7E.
const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // ' '..'/'
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, // '0'..'9'
    278, 278, 584, 584, 584, 556, 1015, // ':'..'@'
    667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778, 667, 778, 722,
    667, 611, 722, 667, 944, 667, 667, 611, // 'A'..'Z'
    278, 278, 278, 469, 556, 333, // '['..'`'
    556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556, 556, 556, 333,
    500, 278, 556, 500, 722, 500, 500, 500, // 'a'..'z'
    334, 260, 334, 584, // '{'..'~'
];

fn char_width_units(c: char) -> u32 {
    let code = c as u32;
    if (0x20..=0x7E).contains(&code) {
        HELVETICA_WIDTHS[(code - 0x20) as usize] as u32
    } else {
        1000
    }
}
