//! # Report Layout
//!
//! Turns report rows and metadata into positioned drawing operations on
//! landscape A4 pages. The PDF writer only serializes what this module
//! decides, so every layout rule is testable without parsing PDF.
//!
//! ## Page Structure
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │ Title (bold)                                             │  first page only
//! │ Fecha: … | Producto: … | Proveedor: … | Responsable: …   │
//! │ Cumplimiento total: N%                                   │
//! │ Cumple: … | No cumple: … | No aplica: … | Sin responder: │
//! │ ┌──────┬──────┬───────────────┬─────────┬──────────────┐ │
//! │ │ Ítem │Estado│ Recomendación │Referencia│ Observación │ │  header, every page
//! │ ├──────┼──────┼───────────────┼─────────┼──────────────┤ │
//! │ │ …    │ …    │ …             │ …       │ …            │ │
//! │ └──────┴──────┴───────────────┴─────────┴──────────────┘ │
//! │ No conformidades                                         │  only if any
//! │                                          Página n de m   │  footer, every page
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Pagination
//!
//! A row that does not fit the space left moves to a new page under a
//! fresh header. A row taller than a whole page body is split at line
//! boundaries; each continuation starts a new page under the header.
//! Text within a row is emitted column by column, line by line, so the
//! lines of one cell stay consecutive in the content stream.

use labelcheck_core::{AuditStatus, Timestamp};
use labelcheck_state::{non_conformities, AggregateStats, ReportRow};

use crate::error::ReportError;
use crate::font::Font;
use crate::metadata::ReportMetadata;
use crate::options::ReportOptions;
use crate::wrap::Wrapper;

const MM: f64 = 72.0 / 25.4;

/// Page width in points (A4 landscape).
pub const PAGE_WIDTH: f64 = 842.0;
/// Page height in points (A4 landscape).
pub const PAGE_HEIGHT: f64 = 595.0;
/// Margin on every side, 15 mm.
pub const MARGIN: f64 = 15.0 * MM;

/// Table column headers.
pub const COLUMN_HEADERS: [&str; 5] = ["Ítem", "Estado", "Recomendación", "Referencia", "Observación"];

/// Relative column widths.
pub const COLUMN_WEIGHTS: [u32; 5] = [70, 25, 75, 40, 80];

/// Heading of the trailing summary.
pub const NON_CONFORMITY_HEADING: &str = "No conformidades";

const NOTE_COLUMN: usize = 4;
const CELL_PADDING: f64 = 3.0;
const LEADING_FACTOR: f64 = 1.2;
const HEADING_DELTA: f64 = 2.0;
const HEADER_GRAY: f64 = 0.949;
const GRID_GRAY: f64 = 0.5;
const GRID_LINE_WIDTH: f64 = 0.25;
const BLOCK_GAP: f64 = 4.0 * MM;
const ITEM_GAP: f64 = 2.0 * MM;
const LEFT: f64 = MARGIN;
const RIGHT: f64 = PAGE_WIDTH - MARGIN;
const TOP: f64 = PAGE_HEIGHT - MARGIN;
const BOTTOM: f64 = MARGIN;
const FOOTER_BASELINE: f64 = MARGIN / 2.0;
const EPSILON: f64 = 1e-9;

/// A line of text at a baseline position.
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    /// Left edge.
    pub x: f64,
    /// Baseline.
    pub y: f64,
    /// Face.
    pub font: Font,
    /// Size in points.
    pub size: f64,
    /// The text.
    pub text: String,
}

/// An axis-aligned rectangle, origin at the bottom-left.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Left edge.
    pub x: f64,
    /// Bottom edge.
    pub y: f64,
    /// Width.
    pub width: f64,
    /// Height.
    pub height: f64,
}

/// One drawing operation.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    /// Fill with a gray level.
    FillRect { rect: Rect, gray: f64 },
    /// Outline with a gray level and line width.
    StrokeRect { rect: Rect, gray: f64, line_width: f64 },
    /// Show text.
    Text(TextRun),
}

/// The operations of one page, in painting order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    /// Operations in painting order.
    pub ops: Vec<DrawOp>,
}

impl Page {
    /// Text runs in painting order.
    pub fn texts(&self) -> impl Iterator<Item = &TextRun> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Text(run) => Some(run),
            _ => None,
        })
    }

    /// Whether some run on the page equals `text`.
    pub fn has_text(&self, text: &str) -> bool {
        self.texts().any(|run| run.text == text)
    }
}

/// A laid-out report.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    /// Document title, for the info dictionary.
    pub title: String,
    /// Creation time, for the info dictionary.
    pub created: Timestamp,
    /// Pages in order.
    pub pages: Vec<Page>,
}

impl Document {
    /// Number of pages.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }
}

/// One table column: left edge and width.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Column {
    x: f64,
    width: f64,
}

fn table_columns() -> [Column; 5] {
    let total: u32 = COLUMN_WEIGHTS.iter().sum();
    let printable = RIGHT - LEFT;
    let mut x = LEFT;
    COLUMN_WEIGHTS.map(|weight| {
        let width = printable * f64::from(weight) / f64::from(total);
        let column = Column { x, width };
        x += width;
        column
    })
}

/// Wrapped lines of every cell of one table row.
struct RowCells {
    cells: [Vec<String>; 5],
}

impl RowCells {
    fn line_count(&self) -> usize {
        self.cells.iter().map(Vec::len).max().unwrap_or(0).max(1)
    }
}

/// Lay out a report.
///
/// # Errors
///
/// [`ReportError::EmptyReport`] for zero rows;
/// [`ReportError::InvalidMetadata`] for out-of-range metadata;
/// [`ReportError::InvalidOptions`] for out-of-range options.
pub fn layout_report(
    rows: &[ReportRow],
    meta: &ReportMetadata,
    options: &ReportOptions,
) -> Result<Document, ReportError> {
    if rows.is_empty() {
        return Err(ReportError::EmptyReport);
    }
    options.validate()?;
    meta.validate()?;

    let title = meta.title_or(&options.title).to_string();
    let mut composer = Composer::new(options);
    composer.title_block(&title, meta);
    composer.table(rows);
    let summarized = composer.non_conformity_section(rows);
    let pages = composer.finish();

    tracing::debug!(
        rows = rows.len(),
        non_conformities = summarized,
        pages = pages.len(),
        "report laid out"
    );

    Ok(Document {
        title,
        created: meta.generated_at,
        pages,
    })
}

struct Composer<'a> {
    options: &'a ReportOptions,
    size: f64,
    leading: f64,
    columns: [Column; 5],
    header: RowCells,
    finished: Vec<Page>,
    current: Page,
    cursor: f64,
}

impl<'a> Composer<'a> {
    fn new(options: &'a ReportOptions) -> Self {
        let size = options.font_size;
        let columns = table_columns();
        let header = RowCells {
            cells: std::array::from_fn(|i| {
                Wrapper::new(Font::Bold, size, columns[i].width - 2.0 * CELL_PADDING)
                    .wrap(COLUMN_HEADERS[i])
            }),
        };
        Self {
            options,
            size,
            leading: size * LEADING_FACTOR,
            columns,
            header,
            finished: Vec::new(),
            current: Page::default(),
            cursor: TOP,
        }
    }

    fn new_page(&mut self) {
        self.finished.push(std::mem::take(&mut self.current));
        self.cursor = TOP;
    }

    fn remaining(&self) -> f64 {
        self.cursor - BOTTOM
    }

    fn push_text(&mut self, x: f64, y: f64, font: Font, size: f64, text: String) {
        self.current.ops.push(DrawOp::Text(TextRun {
            x,
            y,
            font,
            size,
            text,
        }));
    }

    // ── free text ────────────────────────────────────────────────────

    fn paragraph(&mut self, lines: Vec<String>, font: Font, size: f64, indent: f64) {
        let leading = size * LEADING_FACTOR;
        for line in lines {
            if self.remaining() < leading {
                self.new_page();
            }
            let baseline = self.cursor - size;
            self.push_text(LEFT + indent, baseline, font, size, line);
            self.cursor -= leading;
        }
    }

    fn wrapped(&self, font: Font, size: f64, indent: f64) -> Wrapper {
        Wrapper::new(font, size, RIGHT - LEFT - indent)
    }

    fn title_block(&mut self, title: &str, meta: &ReportMetadata) {
        let heading = self.size + HEADING_DELTA;
        let lines = self.wrapped(Font::Bold, heading, 0.0).wrap(title);
        self.paragraph(lines, Font::Bold, heading, 0.0);
        self.cursor -= BLOCK_GAP;

        let info = format!(
            "Fecha: {} | Producto: {} | Proveedor: {} | Responsable: {}",
            meta.generated_at.report_date(),
            meta.product_or_placeholder(),
            meta.provider_or_placeholder(),
            meta.responsible_or_placeholder(),
        );
        let lines = self.wrapped(Font::Regular, self.size, 0.0).wrap(&info);
        self.paragraph(lines, Font::Regular, self.size, 0.0);
        self.cursor -= BLOCK_GAP;

        let pct = format!("Cumplimiento total: {}%", meta.compliance_percentage);
        let lines = self.wrapped(Font::Bold, heading, 0.0).wrap(&pct);
        self.paragraph(lines, Font::Bold, heading, 0.0);

        let lines = self
            .wrapped(Font::Regular, self.size, 0.0)
            .wrap(&counts_line(&meta.stats));
        self.paragraph(lines, Font::Regular, self.size, 0.0);
        self.cursor -= BLOCK_GAP;
    }

    // ── table ────────────────────────────────────────────────────────

    fn row_height(&self, lines: usize) -> f64 {
        2.0 * CELL_PADDING + lines as f64 * self.leading
    }

    fn lines_fitting(&self, height: f64) -> usize {
        let usable = height - 2.0 * CELL_PADDING;
        if usable < self.leading {
            return 0;
        }
        (usable / self.leading).floor() as usize
    }

    fn row_cells(&self, row: &ReportRow) -> RowCells {
        let texts = [
            row.title.as_str(),
            row.status_label(),
            row.recommendation.as_str(),
            row.reference.as_str(),
            row.note.as_str(),
        ];
        RowCells {
            cells: std::array::from_fn(|i| {
                let mut wrapper =
                    Wrapper::new(Font::Regular, self.size, self.columns[i].width - 2.0 * CELL_PADDING);
                if i == NOTE_COLUMN {
                    wrapper = wrapper.with_chunking(self.options.note_chunk_chars);
                }
                wrapper.wrap(texts[i])
            }),
        }
    }

    fn header_height(&self) -> f64 {
        self.row_height(self.header.line_count())
    }

    fn draw_header(&mut self) {
        let height = self.header_height();
        let top = self.cursor;
        self.current.ops.push(DrawOp::FillRect {
            rect: Rect {
                x: LEFT,
                y: top - height,
                width: RIGHT - LEFT,
                height,
            },
            gray: HEADER_GRAY,
        });
        let lines = self.header.line_count();
        let cells = self.header.cells.clone();
        self.draw_cells(&cells, 0..lines, Font::Bold);
    }

    fn draw_cells(&mut self, cells: &[Vec<String>; 5], range: std::ops::Range<usize>, font: Font) {
        let height = self.row_height(range.len());
        let top = self.cursor;
        for column in self.columns {
            self.current.ops.push(DrawOp::StrokeRect {
                rect: Rect {
                    x: column.x,
                    y: top - height,
                    width: column.width,
                    height,
                },
                gray: GRID_GRAY,
                line_width: GRID_LINE_WIDTH,
            });
        }
        for (column, lines) in self.columns.into_iter().zip(cells.iter()) {
            let end = range.end.min(lines.len());
            let start = range.start.min(end);
            for (offset, line) in lines[start..end].iter().enumerate() {
                let baseline = top - CELL_PADDING - self.size - offset as f64 * self.leading;
                self.push_text(column.x + CELL_PADDING, baseline, font, self.size, line.clone());
            }
        }
        self.cursor -= height;
    }

    fn start_table_page(&mut self) {
        self.new_page();
        self.draw_header();
    }

    fn table(&mut self, rows: &[ReportRow]) {
        let header_height = self.header_height();
        let page_capacity = TOP - BOTTOM - header_height;
        let first_needed = rows
            .first()
            .map(|row| self.row_height(self.row_cells(row).line_count()))
            .unwrap_or(0.0);
        let room = self.remaining() - header_height;
        if room < self.row_height(1) || (first_needed > room && first_needed <= page_capacity) {
            self.new_page();
        }
        self.draw_header();

        for row in rows {
            let cells = self.row_cells(row);
            let total = cells.line_count();
            let mut start = 0;
            while start < total {
                let needed = self.row_height(total - start);
                if needed <= self.remaining() {
                    self.draw_cells(&cells.cells, start..total, Font::Regular);
                    break;
                }
                let at_top = self.remaining() >= page_capacity - EPSILON;
                if needed <= page_capacity && !at_top {
                    self.start_table_page();
                    continue;
                }
                let mut fit = self.lines_fitting(self.remaining());
                if fit == 0 {
                    if !at_top {
                        self.start_table_page();
                        continue;
                    }
                    fit = 1;
                }
                let end = (start + fit).min(total);
                self.draw_cells(&cells.cells, start..end, Font::Regular);
                start = end;
                if start < total {
                    self.start_table_page();
                }
            }
        }
    }

    // ── non-conformity summary ───────────────────────────────────────

    fn non_conformity_section(&mut self, rows: &[ReportRow]) -> usize {
        let failing: Vec<&ReportRow> = non_conformities(rows).collect();
        if failing.is_empty() {
            return 0;
        }

        let heading = self.size + HEADING_DELTA;
        self.cursor -= BLOCK_GAP;
        if self.remaining() < heading * LEADING_FACTOR + 2.0 * self.leading {
            self.new_page();
        }
        self.paragraph(
            vec![NON_CONFORMITY_HEADING.to_string()],
            Font::Bold,
            heading,
            0.0,
        );
        self.cursor -= ITEM_GAP;

        let indent = 4.0 * MM;
        for (i, row) in failing.iter().enumerate() {
            let mut head = format!(
                "{}. {} ({}) | Estado: {}",
                i + 1,
                row.title,
                row.reference,
                row.status_label()
            );
            if let Some(severity) = row.severity {
                head.push_str(&format!(" | Severidad: {}", severity.label()));
            }
            let lines = self.wrapped(Font::Bold, self.size, 0.0).wrap(&head);
            self.paragraph(lines, Font::Bold, self.size, 0.0);

            let lines = self
                .wrapped(Font::Regular, self.size, indent)
                .wrap(&format!("Recomendación: {}", row.recommendation));
            self.paragraph(lines, Font::Regular, self.size, indent);

            if !row.note.trim().is_empty() {
                let lines = self
                    .wrapped(Font::Regular, self.size, indent)
                    .with_chunking(self.options.note_chunk_chars)
                    .wrap(&format!("Observación: {}", row.note));
                self.paragraph(lines, Font::Regular, self.size, indent);
            }
            self.cursor -= ITEM_GAP;
        }
        failing.len()
    }

    // ── footer ───────────────────────────────────────────────────────

    fn finish(mut self) -> Vec<Page> {
        self.finished.push(std::mem::take(&mut self.current));
        let total = self.finished.len();
        for (i, page) in self.finished.iter_mut().enumerate() {
            let text = page_label(i + 1, total);
            let width = Font::Regular.text_width(&text, self.size);
            page.ops.push(DrawOp::Text(TextRun {
                x: RIGHT - width,
                y: FOOTER_BASELINE,
                font: Font::Regular,
                size: self.size,
                text,
            }));
        }
        self.finished
    }
}

/// Footer text of page `number` of `total`.
pub fn page_label(number: usize, total: usize) -> String {
    format!("Página {number} de {total}")
}

/// `Cumple: n | No cumple: n | No aplica: n | Sin responder: n`.
pub fn counts_line(stats: &AggregateStats) -> String {
    AuditStatus::all()
        .iter()
        .map(|status| format!("{}: {}", status.label(), stats.count(*status)))
        .collect::<Vec<_>>()
        .join(" | ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use labelcheck_core::{SessionMetadata, Severity};

    fn row(i: usize, status: AuditStatus, note: &str) -> ReportRow {
        ReportRow {
            category: "General".into(),
            title: format!("Requisito {i}"),
            status,
            recommendation: format!("Corregir el requisito {i} según la norma"),
            reference: format!("Res. 5109/2005 Art. {i}"),
            note: note.into(),
            severity: None,
        }
    }

    fn meta_for(rows: &[ReportRow]) -> ReportMetadata {
        let stats = AggregateStats::from_statuses(rows.iter().map(|r| r.status));
        ReportMetadata::new(
            &SessionMetadata {
                product: Some("Café molido".into()),
                ..Default::default()
            },
            stats,
            Timestamp::from_utc(Utc.with_ymd_and_hms(2026, 5, 1, 9, 0, 0).unwrap()),
        )
    }

    fn layout(rows: &[ReportRow]) -> Document {
        layout_report(rows, &meta_for(rows), &ReportOptions::default()).unwrap()
    }

    fn column_text(doc: &Document, column: usize) -> Vec<String> {
        let x = table_columns()[column].x + CELL_PADDING;
        doc.pages
            .iter()
            .flat_map(|p| p.texts())
            .filter(|run| (run.x - x).abs() < 1e-6 && run.font == Font::Regular)
            .map(|run| run.text.clone())
            .collect()
    }

    // ── preconditions ────────────────────────────────────────────────

    #[test]
    fn test_empty_rows_rejected() {
        let meta = meta_for(&[]);
        assert_eq!(
            layout_report(&[], &meta, &ReportOptions::default()).unwrap_err(),
            ReportError::EmptyReport
        );
    }

    #[test]
    fn test_invalid_percentage_rejected() {
        let rows = vec![row(1, AuditStatus::Compliant, "")];
        let mut meta = meta_for(&rows);
        meta.compliance_percentage = 120;
        assert!(matches!(
            layout_report(&rows, &meta, &ReportOptions::default()),
            Err(ReportError::InvalidMetadata { .. })
        ));
    }

    // ── geometry ─────────────────────────────────────────────────────

    #[test]
    fn test_columns_span_printable_width() {
        let columns = table_columns();
        assert!((columns[0].x - LEFT).abs() < 1e-9);
        let last = columns[4];
        assert!((last.x + last.width - RIGHT).abs() < 1e-9);
        // 70 : 25
        assert!((columns[0].width / columns[1].width - 2.8).abs() < 1e-9);
    }

    #[test]
    fn test_text_stays_inside_margins() {
        let rows: Vec<ReportRow> = (1..=40)
            .map(|i| row(i, AuditStatus::NonCompliant, &"observación larga ".repeat(i)))
            .collect();
        let doc = layout(&rows);
        for page in &doc.pages {
            for run in page.texts() {
                assert!(run.x >= LEFT - 1e-6, "{} starts left of the margin", run.text);
                let right = run.x + run.font.text_width(&run.text, run.size);
                assert!(right <= RIGHT + 1e-6, "{} overflows the right margin", run.text);
                assert!(run.y >= FOOTER_BASELINE - 1e-6);
                assert!(run.y <= TOP);
            }
        }
    }

    // ── header block ─────────────────────────────────────────────────

    #[test]
    fn test_title_block_lines() {
        let rows = vec![
            row(1, AuditStatus::Compliant, ""),
            row(2, AuditStatus::NonCompliant, ""),
            row(3, AuditStatus::NotApplicable, ""),
        ];
        let doc = layout(&rows);
        let first = &doc.pages[0];
        assert!(first.has_text(crate::options::DEFAULT_TITLE));
        assert!(first.has_text(
            "Fecha: 2026-05-01 | Producto: Café molido | Proveedor: - | Responsable: -"
        ));
        assert!(first.has_text("Cumplimiento total: 50%"));
        assert!(first.has_text("Cumple: 1 | No cumple: 1 | No aplica: 1 | Sin responder: 0"));
    }

    // ── table ────────────────────────────────────────────────────────

    #[test]
    fn test_header_repeated_on_every_page() {
        let rows: Vec<ReportRow> = (1..=120).map(|i| row(i, AuditStatus::Compliant, "")).collect();
        let doc = layout(&rows);
        assert!(doc.page_count() > 2);
        for (i, page) in doc.pages.iter().enumerate() {
            for header in COLUMN_HEADERS {
                assert!(page.has_text(header), "page {} lacks header {header}", i + 1);
            }
        }
    }

    #[test]
    fn test_every_row_listed_once_in_order() {
        let rows: Vec<ReportRow> = (1..=120).map(|i| row(i, AuditStatus::Compliant, "")).collect();
        let doc = layout(&rows);
        let titles = column_text(&doc, 0);
        let expected: Vec<String> = rows.iter().map(|r| r.title.clone()).collect();
        assert_eq!(titles, expected);
    }

    #[test]
    fn test_footer_on_every_page() {
        let rows: Vec<ReportRow> = (1..=120).map(|i| row(i, AuditStatus::Compliant, "")).collect();
        let doc = layout(&rows);
        let total = doc.page_count();
        for (i, page) in doc.pages.iter().enumerate() {
            assert!(page.has_text(&page_label(i + 1, total)));
        }
    }

    #[test]
    fn test_500_char_note_not_truncated() {
        let note = "ABCDEFGHIJ".repeat(50);
        let rows = vec![row(1, AuditStatus::NonCompliant, &note), row(2, AuditStatus::Compliant, "")];
        let doc = layout(&rows);
        let note_lines = column_text(&doc, NOTE_COLUMN);
        assert!(note_lines.len() > 1);
        assert_eq!(note_lines.concat(), note);
    }

    #[test]
    fn test_oversized_row_split_across_pages() {
        let note = "x".repeat(20_000);
        let rows = vec![row(1, AuditStatus::Compliant, ""), row(2, AuditStatus::Compliant, &note)];
        let doc = layout(&rows);
        assert!(doc.page_count() >= 3);
        assert_eq!(column_text(&doc, NOTE_COLUMN).concat(), note);
        for page in &doc.pages {
            assert!(page.has_text("Observación"));
        }
    }

    #[test]
    fn test_row_moves_whole_when_it_fits_next_page() {
        // 15 one-line rows leave too little room on page 1 for a ~43-line note.
        let mut rows: Vec<ReportRow> = (1..=15).map(|i| row(i, AuditStatus::Compliant, "")).collect();
        rows.push(row(16, AuditStatus::Compliant, &"palabra ".repeat(300)));
        let doc = layout(&rows);
        let holding: Vec<usize> = doc
            .pages
            .iter()
            .enumerate()
            .filter(|(_, p)| p.texts().any(|r| r.text.starts_with("palabra")))
            .map(|(i, _)| i)
            .collect();
        assert_eq!(holding, vec![1], "a row that fits one page was split");
        assert!(doc.pages[1].has_text("Requisito 16"));
    }

    #[test]
    fn test_first_row_moves_whole_when_title_block_leaves_no_room() {
        // 2250 'x' wrap to about 45 lines: taller than the space under the
        // title block, shorter than a full page body.
        let rows = vec![row(1, AuditStatus::Compliant, &"x".repeat(2250))];
        let doc = layout(&rows);
        let holding: Vec<usize> = doc
            .pages
            .iter()
            .enumerate()
            .filter(|(_, p)| p.texts().any(|r| !r.text.is_empty() && r.text.chars().all(|c| c == 'x')))
            .map(|(i, _)| i)
            .collect();
        assert_eq!(holding, vec![1], "a first row that fits one page was split");
        assert!(doc.pages[1].has_text("Requisito 1"));
        assert!(doc.pages[1].has_text(COLUMN_HEADERS[0]));
        assert!(!doc.pages[0].has_text(COLUMN_HEADERS[0]), "header left alone on the title page");
        assert!(doc.pages[0].has_text("Cumplimiento total: 100%"));
    }

    // ── non-conformity summary ───────────────────────────────────────

    #[test]
    fn test_summary_absent_without_non_conformities() {
        let rows: Vec<ReportRow> = (1..=5).map(|i| row(i, AuditStatus::NotApplicable, "")).collect();
        let doc = layout(&rows);
        assert!(!doc.pages.iter().any(|p| p.has_text(NON_CONFORMITY_HEADING)));
        assert_eq!(column_text(&doc, 1), vec!["No aplica"; 5]);
    }

    #[test]
    fn test_summary_lists_only_non_conformities() {
        let mut rows = vec![
            row(1, AuditStatus::Compliant, ""),
            row(2, AuditStatus::NonCompliant, "Lote ilegible"),
            row(3, AuditStatus::Unanswered, ""),
        ];
        rows[1].severity = Some(Severity::Critical);
        let doc = layout(&rows);
        let texts: Vec<&str> = doc
            .pages
            .iter()
            .flat_map(|p| p.texts())
            .map(|r| r.text.as_str())
            .collect();
        let heading = texts.iter().position(|t| *t == NON_CONFORMITY_HEADING).unwrap();
        let after = &texts[heading..];
        assert!(after.contains(
            &"1. Requisito 2 (Res. 5109/2005 Art. 2) | Estado: No cumple | Severidad: Crítico"
        ));
        assert!(after.contains(&"Recomendación: Corregir el requisito 2 según la norma"));
        assert!(after.contains(&"Observación: Lote ilegible"));
        assert!(!after.iter().any(|t| t.contains("Requisito 1 ") || t.contains("Requisito 3 ")));
    }
}
