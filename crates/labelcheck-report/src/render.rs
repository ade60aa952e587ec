//! Entry point: rows and metadata in, PDF bytes out.

use labelcheck_state::ReportRow;

use crate::error::ReportError;
use crate::layout::layout_report;
use crate::metadata::ReportMetadata;
use crate::options::ReportOptions;
use crate::pdf::write_pdf;

/// Render a complete report.
///
/// The whole document is assembled in memory; on error nothing is
/// returned.
///
/// # Errors
///
/// [`ReportError::EmptyReport`] when `rows` is empty,
/// [`ReportError::InvalidMetadata`] when `meta` holds out-of-range values
/// and [`ReportError::InvalidOptions`] when `options` do.
pub fn render_report(
    rows: &[ReportRow],
    meta: &ReportMetadata,
    options: &ReportOptions,
) -> Result<Vec<u8>, ReportError> {
    let document = layout_report(rows, meta, options)?;
    let bytes = write_pdf(&document);
    tracing::info!(
        rows = rows.len(),
        pages = document.page_count(),
        bytes = bytes.len(),
        compliance = meta.compliance_percentage,
        "report rendered"
    );
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use labelcheck_core::{AuditStatus, SessionMetadata, Timestamp};
    use labelcheck_state::AggregateStats;

    fn rows_with_note(note: &str) -> Vec<ReportRow> {
        vec![ReportRow {
            category: "General".into(),
            title: "Lote legible".into(),
            status: AuditStatus::NonCompliant,
            recommendation: "Imprimir el lote con tinta indeleble".into(),
            reference: "Res. 5109/2005".into(),
            note: note.into(),
            severity: None,
        }]
    }

    fn meta(rows: &[ReportRow]) -> ReportMetadata {
        ReportMetadata::new(
            &SessionMetadata::default(),
            AggregateStats::from_statuses(rows.iter().map(|r| r.status)),
            Timestamp::from_utc(Utc.with_ymd_and_hms(2026, 7, 1, 12, 0, 0).unwrap()),
        )
    }

    /// Concatenation of the literal strings shown by `Tj`, in stream order.
    fn shown_text(pdf: &[u8]) -> Vec<u8> {
        let mut out = Vec::new();
        let mut i = 0;
        while i < pdf.len() {
            if pdf[i] == b'(' && pdf[..i].ends_with(b"Td\n") {
                let mut j = i + 1;
                while pdf[j] != b')' {
                    if pdf[j] == b'\\' {
                        j += 1;
                    }
                    out.push(pdf[j]);
                    j += 1;
                }
                i = j;
            }
            i += 1;
        }
        out
    }

    #[test]
    fn test_empty_rows_fail() {
        let rows = rows_with_note("");
        assert_eq!(
            render_report(&[], &meta(&rows), &ReportOptions::default()).unwrap_err(),
            ReportError::EmptyReport
        );
    }

    #[test]
    fn test_long_note_survives_in_pdf_bytes() {
        let note = "ABCDEFGHIJ".repeat(50);
        let rows = rows_with_note(&note);
        let pdf = render_report(&rows, &meta(&rows), &ReportOptions::default()).unwrap();
        let shown = String::from_utf8_lossy(&shown_text(&pdf)).into_owned();
        assert!(shown.contains(&note), "note was truncated in the content stream");
    }

    #[test]
    fn test_pdf_has_placeholders_and_percentage() {
        let rows = rows_with_note("");
        let pdf = render_report(&rows, &meta(&rows), &ReportOptions::default()).unwrap();
        let text = String::from_utf8_lossy(&pdf);
        assert!(text.starts_with("%PDF-1.4"));
        assert!(text.contains("(Fecha: 2026-07-01 | Producto: - | Proveedor: - | Responsable: -) Tj"));
        assert!(text.contains("(Cumplimiento total: 0%) Tj"));
        assert!(text.contains("(No conformidades) Tj"));
        assert!(text.contains("(P\\341gina 1 de 1) Tj"));
    }
}
