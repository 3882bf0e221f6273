//! Renders normalized case records into a paginated PDF table.
//!
//! Built directly on `pdf-writer`: one catalog, one page tree, the two
//! Helvetica base fonts, and one content stream per page. No timestamps
//! or document IDs are embedded, so identical input produces identical
//! bytes.

use crate::error::{CauseListError, Result};
use crate::extract::CaseRecord;
use crate::report::layout::{ReportLayout, Rgb, BLACK};
use pdf_writer::{Content, Finish, Name, Pdf, Rect, Ref, Str};
use std::io::Write;
use std::path::{Path, PathBuf};

const FONT_REGULAR: Name = Name(b"F1");
const FONT_BOLD: Name = Name(b"F2");

/// Outcome of a successful render.
#[derive(Debug, Clone)]
pub struct ReportSummary {
    pub path: PathBuf,
    pub rows: usize,
    pub pages: usize,
    pub bytes: u64,
}

/// A table row with its cells wrapped to column widths.
struct PreparedRow {
    lines: [Vec<String>; 4],
    height: f32,
    is_header: bool,
    shade: Rgb,
}

/// Renders the header row plus all records to a single PDF at `path`,
/// overwriting any existing file. The file appears atomically: content
/// is written to a temporary file in the target directory and renamed
/// into place only once complete.
pub fn render_report(
    header: &[&str; 4],
    records: &[CaseRecord],
    path: &Path,
    layout: &ReportLayout,
    title: &str,
) -> Result<ReportSummary> {
    let rows = prepare_rows(header, records, layout);
    let pages = paginate(&rows, layout);
    let bytes = build_document(&pages, layout, title);

    write_atomic(path, &bytes)?;

    Ok(ReportSummary {
        path: path.to_path_buf(),
        rows: rows.len(),
        pages: pages.len(),
        bytes: bytes.len() as u64,
    })
}

fn prepare_rows(
    header: &[&str; 4],
    records: &[CaseRecord],
    layout: &ReportLayout,
) -> Vec<PreparedRow> {
    let mut rows = Vec::with_capacity(records.len() + 1);

    rows.push(prepare_row(
        [header[0], header[1], header[2], header[3]],
        layout,
        true,
        layout.header_bg,
    ));

    for (index, record) in records.iter().enumerate() {
        rows.push(prepare_row(
            [
                record.serial.as_str(),
                record.case_info.as_str(),
                record.parties.as_str(),
                record.advocate.as_str(),
            ],
            layout,
            false,
            layout.row_shades[index % 2],
        ));
    }

    rows
}

fn prepare_row(cells: [&str; 4], layout: &ReportLayout, is_header: bool, shade: Rgb) -> PreparedRow {
    let lines: [Vec<String>; 4] = std::array::from_fn(|col| layout.wrap_cell(cells[col], col));
    let max_lines = lines.iter().map(Vec::len).max().unwrap_or(1);

    PreparedRow {
        height: layout.row_height(max_lines),
        lines,
        is_header,
        shade,
    }
}

/// Splits rows into pages. A row never straddles a page break; a row
/// taller than a whole page gets a page to itself.
fn paginate<'a>(rows: &'a [PreparedRow], layout: &ReportLayout) -> Vec<Vec<&'a PreparedRow>> {
    let full_budget = layout.page_height - 2.0 * layout.margin;
    let mut pages: Vec<Vec<&PreparedRow>> = Vec::new();
    let mut current: Vec<&PreparedRow> = Vec::new();
    // The title block only occupies the first page.
    let mut remaining = full_budget - layout.title_block_height();

    for row in rows {
        if row.height > remaining && !current.is_empty() {
            pages.push(std::mem::take(&mut current));
            remaining = full_budget;
        }
        remaining -= row.height;
        current.push(row);
    }

    if !current.is_empty() || pages.is_empty() {
        pages.push(current);
    }

    pages
}

fn build_document(pages: &[Vec<&PreparedRow>], layout: &ReportLayout, title: &str) -> Vec<u8> {
    let mut pdf = Pdf::new();

    let catalog_id = Ref::new(1);
    let page_tree_id = Ref::new(2);
    let regular_id = Ref::new(3);
    let bold_id = Ref::new(4);

    pdf.catalog(catalog_id).pages(page_tree_id);
    // WinAnsi matches Latin-1 over 0xA0..=0xFF, so the single-byte
    // passthrough in encode_text stays glyph-correct for accented names.
    pdf.type1_font(regular_id)
        .base_font(Name(b"Helvetica"))
        .encoding_predefined(Name(b"WinAnsiEncoding"));
    pdf.type1_font(bold_id)
        .base_font(Name(b"Helvetica-Bold"))
        .encoding_predefined(Name(b"WinAnsiEncoding"));

    let mut next_id = 5;
    let mut page_ids = Vec::with_capacity(pages.len());

    for (page_index, page_rows) in pages.iter().enumerate() {
        let page_id = Ref::new(next_id);
        let content_id = Ref::new(next_id + 1);
        next_id += 2;

        let content = draw_page(page_rows, layout, title, page_index == 0);
        pdf.stream(content_id, &content.finish());

        let mut page = pdf.page(page_id);
        page.media_box(Rect::new(0.0, 0.0, layout.page_width, layout.page_height));
        page.parent(page_tree_id);
        page.contents(content_id);
        {
            let mut resources = page.resources();
            let mut fonts = resources.fonts();
            fonts.pair(FONT_REGULAR, regular_id);
            fonts.pair(FONT_BOLD, bold_id);
        }
        page.finish();
        page_ids.push(page_id);
    }

    pdf.pages(page_tree_id)
        .kids(page_ids.iter().copied())
        .count(page_ids.len() as i32);

    pdf.finish()
}

fn draw_page(rows: &[&PreparedRow], layout: &ReportLayout, title: &str, first: bool) -> Content {
    let mut content = Content::new();
    let mut y = layout.page_height - layout.margin;

    if first {
        let baseline = y - layout.title_size;
        content.begin_text();
        content.set_font(FONT_BOLD, layout.title_size);
        content.set_fill_rgb(BLACK.r, BLACK.g, BLACK.b);
        content.next_line(layout.margin, baseline);
        content.show(Str(&encode_text(title)));
        content.end_text();
        y -= layout.title_block_height();
    }

    for row in rows {
        draw_row(&mut content, row, layout, y);
        y -= row.height;
    }

    content
}

fn draw_row(content: &mut Content, row: &PreparedRow, layout: &ReportLayout, top: f32) {
    let bottom = top - row.height;

    // Background shade spanning the full table width
    content.set_fill_rgb(row.shade.r, row.shade.g, row.shade.b);
    content.rect(layout.margin, bottom, layout.table_width(), row.height);
    content.fill_nonzero();

    // Cell borders
    content.set_stroke_rgb(layout.grid.r, layout.grid.g, layout.grid.b);
    content.set_line_width(layout.grid_width);
    for col in 0..4 {
        content.rect(layout.col_x(col), bottom, layout.col_widths[col], row.height);
    }
    content.stroke();

    // Cell text, top-aligned with uniform padding
    let (font, fg) = if row.is_header {
        (FONT_BOLD, layout.header_fg)
    } else {
        (FONT_REGULAR, BLACK)
    };

    for col in 0..4 {
        let x = layout.col_x(col) + layout.pad_x;
        for (line_index, line) in row.lines[col].iter().enumerate() {
            if line.is_empty() {
                continue;
            }
            let baseline =
                top - layout.pad_y - layout.font_size - line_index as f32 * layout.leading;
            content.begin_text();
            content.set_font(font, layout.font_size);
            content.set_fill_rgb(fg.r, fg.g, fg.b);
            content.next_line(x, baseline);
            content.show(Str(&encode_text(line)));
            content.end_text();
        }
    }
}

/// Maps text to single-byte codes for the Helvetica base fonts.
/// Characters outside Latin-1 render as '?'.
fn encode_text(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| {
            let code = c as u32;
            if code <= 0xFF {
                code as u8
            } else {
                b'?'
            }
        })
        .collect()
}

fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };

    let mut temp = tempfile::NamedTempFile::new_in(&dir).map_err(|e| CauseListError::Render {
        message: format!("cannot create temporary file in {}: {}", dir.display(), e),
    })?;

    temp.write_all(bytes).map_err(|e| CauseListError::Render {
        message: format!("cannot write report data: {}", e),
    })?;

    temp.persist(path).map_err(|e| CauseListError::Render {
        message: format!("cannot move report into place at {}: {}", path.display(), e.error),
    })?;

    Ok(())
}
