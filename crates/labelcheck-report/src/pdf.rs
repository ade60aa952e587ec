//! # PDF Serialization
//!
//! Writes a laid-out [`Document`] as PDF 1.4. The file is deliberately
//! small: two base-14 fonts referenced by name, one uncompressed content
//! stream per page, an info dictionary, and a classic cross-reference
//! table.
//!
//! ## Object Layout
//!
//! | Object       | Contents                         |
//! |--------------|----------------------------------|
//! | 1            | Catalog                          |
//! | 2            | Page tree                        |
//! | 3, 4         | Helvetica, Helvetica-Bold        |
//! | 5            | Info dictionary                  |
//! | 6 + 2i       | Page `i`                         |
//! | 7 + 2i       | Content stream of page `i`       |

use std::fmt::Write as _;

use crate::font::{encode_win_ansi_lossy, Font};
use crate::layout::{DrawOp, Document, Rect, TextRun, PAGE_HEIGHT, PAGE_WIDTH};

const CATALOG: usize = 1;
const PAGES: usize = 2;
const FONT_REGULAR: usize = 3;
const FONT_BOLD: usize = 4;
const INFO: usize = 5;
const FIRST_PAGE: usize = 6;

/// Producer recorded in the info dictionary.
pub const PRODUCER: &str = "labelcheck";

fn page_object(index: usize) -> usize {
    FIRST_PAGE + 2 * index
}

fn content_object(index: usize) -> usize {
    FIRST_PAGE + 2 * index + 1
}

/// Serialize `doc` to PDF bytes.
pub fn write_pdf(doc: &Document) -> Vec<u8> {
    let mut out = PdfBuffer::new();
    out.raw(b"%PDF-1.4\n%\xe2\xe3\xcf\xd3\n");

    out.object(
        CATALOG,
        format!("<< /Type /Catalog /Pages {PAGES} 0 R >>").as_bytes(),
    );

    let kids: Vec<String> = (0..doc.pages.len())
        .map(|i| format!("{} 0 R", page_object(i)))
        .collect();
    out.object(
        PAGES,
        format!(
            "<< /Type /Pages /Kids [{}] /Count {} >>",
            kids.join(" "),
            doc.pages.len()
        )
        .as_bytes(),
    );

    for (id, font) in [(FONT_REGULAR, Font::Regular), (FONT_BOLD, Font::Bold)] {
        out.object(
            id,
            format!(
                "<< /Type /Font /Subtype /Type1 /BaseFont /{} /Encoding /WinAnsiEncoding >>",
                font.base_font()
            )
            .as_bytes(),
        );
    }

    let mut info = b"<< /Title ".to_vec();
    info.extend(literal_string(&doc.title));
    info.extend(b" /Producer ");
    info.extend(literal_string(PRODUCER));
    info.extend(b" /CreationDate ");
    info.extend(literal_string(&doc.created.to_pdf_date()));
    info.extend(b" >>");
    out.object(INFO, &info);

    for (i, page) in doc.pages.iter().enumerate() {
        let content = content_stream(&page.ops);
        out.object(
            page_object(i),
            format!(
                "<< /Type /Page /Parent {PAGES} 0 R /MediaBox [0 0 {} {}] \
                 /Resources << /Font << /{} {FONT_REGULAR} 0 R /{} {FONT_BOLD} 0 R >> >> \
                 /Contents {} 0 R >>",
                num(PAGE_WIDTH),
                num(PAGE_HEIGHT),
                Font::Regular.resource_name(),
                Font::Bold.resource_name(),
                content_object(i)
            )
            .as_bytes(),
        );

        let mut stream = format!("<< /Length {} >>\nstream\n", content.len()).into_bytes();
        stream.extend(&content);
        stream.extend(b"\nendstream");
        out.object(content_object(i), &stream);
    }

    out.finish(CATALOG, INFO)
}

/// Byte buffer that records object offsets for the xref table.
struct PdfBuffer {
    bytes: Vec<u8>,
    offsets: Vec<(usize, usize)>,
}

impl PdfBuffer {
    fn new() -> Self {
        Self {
            bytes: Vec::new(),
            offsets: Vec::new(),
        }
    }

    fn raw(&mut self, data: &[u8]) {
        self.bytes.extend_from_slice(data);
    }

    fn object(&mut self, id: usize, body: &[u8]) {
        self.offsets.push((id, self.bytes.len()));
        self.raw(format!("{id} 0 obj\n").as_bytes());
        self.raw(body);
        self.raw(b"\nendobj\n");
    }

    fn finish(mut self, root: usize, info: usize) -> Vec<u8> {
        self.offsets.sort_unstable();
        let size = self.offsets.len() + 1;
        let xref_at = self.bytes.len();

        let mut xref = format!("xref\n0 {size}\n0000000000 65535 f \n");
        for (_, offset) in &self.offsets {
            let _ = writeln!(xref, "{offset:010} 00000 n ");
        }
        let _ = writeln!(
            xref,
            "trailer\n<< /Size {size} /Root {root} 0 R /Info {info} 0 R >>\nstartxref\n{xref_at}\n%%EOF"
        );
        self.raw(xref.as_bytes());
        self.bytes
    }
}

fn content_stream(ops: &[DrawOp]) -> Vec<u8> {
    let mut out = Vec::new();
    for op in ops {
        match op {
            DrawOp::FillRect { rect, gray } => {
                out.extend(format!("{} g\n{} re f\n", num(*gray), rect_operands(rect)).as_bytes());
            }
            DrawOp::StrokeRect {
                rect,
                gray,
                line_width,
            } => {
                out.extend(
                    format!(
                        "{} G\n{} w\n{} re S\n",
                        num(*gray),
                        num(*line_width),
                        rect_operands(rect)
                    )
                    .as_bytes(),
                );
            }
            DrawOp::Text(run) => text_operators(run, &mut out),
        }
    }
    out
}

fn text_operators(run: &TextRun, out: &mut Vec<u8>) {
    out.extend(
        format!(
            "BT\n0 g\n/{} {} Tf\n{} {} Td\n",
            run.font.resource_name(),
            num(run.size),
            num(run.x),
            num(run.y)
        )
        .as_bytes(),
    );
    out.extend(literal_string(&run.text));
    out.extend(b" Tj\nET\n");
}

fn rect_operands(rect: &Rect) -> String {
    format!(
        "{} {} {} {}",
        num(rect.x),
        num(rect.y),
        num(rect.width),
        num(rect.height)
    )
}

/// A number with at most two decimals and no trailing zeros.
fn num(value: f64) -> String {
    let fixed = format!("{value:.2}");
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    match trimmed {
        "" | "-0" => "0".to_string(),
        other => other.to_string(),
    }
}

/// A WinAnsi-encoded PDF literal string, parentheses included.
fn literal_string(text: &str) -> Vec<u8> {
    let mut out = vec![b'('];
    for byte in encode_win_ansi_lossy(text) {
        match byte {
            b'(' | b')' | b'\\' => {
                out.push(b'\\');
                out.push(byte);
            }
            0x20..=0x7e => out.push(byte),
            _ => out.extend(format!("\\{byte:03o}").as_bytes()),
        }
    }
    out.push(b')');
    out
}
