//! One-call label generation from raw form rows.

use log::debug;

use crate::error::Result;
use crate::label::LabelDocument;
use crate::render::render_document;
use crate::rows::{RowInput, collect_label_rows};
use crate::style::{LabelStyle, LabelVariant, PDF_MIME};

/// A finished label PDF, ready to save or offer for download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPdf {
    pub bytes: Vec<u8>,
    pub page_count: usize,
    pub filename: &'static str,
    pub mime: &'static str,
}

/// Generate labels for `rows` using one of the built-in variants.
///
/// Rows with a blank barcode are skipped. If none remain this returns
/// [`LabelError::NoValidRows`](crate::LabelError::NoValidRows) and
/// produces nothing.
pub fn generate_pdf(rows: &[RowInput], variant: LabelVariant) -> Result<GeneratedPdf> {
    debug!("Generating labels with variant '{}'", variant.key());
    generate_pdf_with_style(rows, &variant.style())
}

/// Generate labels for `rows` with an explicit style.
pub fn generate_pdf_with_style(rows: &[RowInput], style: &LabelStyle) -> Result<GeneratedPdf> {
    let document = LabelDocument::new(collect_label_rows(rows))?;
    debug!(
        "{} of {} rows have a barcode",
        document.len(),
        rows.len()
    );
    let bytes = render_document(&document, style)?;

    Ok(GeneratedPdf {
        bytes,
        page_count: document.len(),
        filename: style.filename,
        mime: PDF_MIME,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LabelError;
    use crate::render::testing::{load, page_contents, placed_text, shows};

    #[test]
    fn test_generate_single_label() {
        let rows = vec![RowInput::new("1001", "Widget A", "")];
        let pdf = generate_pdf(&rows, LabelVariant::WideWithExtraId).unwrap();

        assert_eq!(pdf.page_count, 1);
        assert_eq!(pdf.mime, "application/pdf");
        assert_eq!(pdf.filename, "2x4_labels_with_extra_id.pdf");

        let doc = load(&pdf.bytes);
        let contents = page_contents(&doc);
        assert_eq!(contents.len(), 1);
        assert!(shows(&contents[0], "1001"));
        assert!(shows(&contents[0], "Widget A"));
    }

    #[test]
    fn test_blank_rows_skipped() {
        let rows = vec![
            RowInput::new("  ", "ignored", "X"),
            RowInput::new(" 1001 ", "Widget A", ""),
            RowInput::new("", "", ""),
            RowInput::new("1002", "", ""),
        ];
        let pdf = generate_pdf(&rows, LabelVariant::Wide).unwrap();

        assert_eq!(pdf.page_count, 2);
        let doc = load(&pdf.bytes);
        let contents = page_contents(&doc);
        assert_eq!(contents.len(), 2);
        assert!(shows(&contents[0], "1001"));
        assert!(shows(&contents[1], "1002"));
        assert!(!shows(&contents[0], "ignored"));
    }

    #[test]
    fn test_no_rows_is_warning() {
        let result = generate_pdf(&[], LabelVariant::Compact);
        assert!(matches!(result, Err(LabelError::NoValidRows)));

        let rows = vec![RowInput::new("   ", "Widget", "LOT5")];
        let result = generate_pdf(&rows, LabelVariant::Compact);
        assert!(matches!(result, Err(LabelError::NoValidRows)));
    }

    #[test]
    fn test_extra_id_only_in_supporting_variant() {
        let rows = vec![RowInput::new("1001", "Widget A", "LOT5")];

        let with = generate_pdf(&rows, LabelVariant::WideWithExtraId).unwrap();
        let without = generate_pdf(&rows, LabelVariant::Wide).unwrap();

        assert!(shows(&page_contents(&load(&with.bytes))[0], "LOT5"));
        let page = &page_contents(&load(&without.bytes))[0];
        assert!(!shows(page, "LOT5"));
        assert_eq!(placed_text(page).len(), 2);
    }

    #[test]
    fn test_duplicates_produce_pages() {
        let rows = vec![RowInput::new("1001", "", ""), RowInput::new("1001", "", "")];
        let pdf = generate_pdf(&rows, LabelVariant::Compact).unwrap();
        assert_eq!(pdf.page_count, 2);
        assert_eq!(load(&pdf.bytes).get_pages().len(), 2);
    }

    #[test]
    fn test_charset_switch_character_aborts_document() {
        let rows = vec![RowInput::new("1001", "", ""), RowInput::new("AĆ12", "", "")];
        let result = generate_pdf(&rows, LabelVariant::Wide);
        match result {
            Err(LabelError::Barcode { value, .. }) => assert_eq!(value, "AĆ12"),
            other => panic!("Expected Barcode error, got {other:?}"),
        }
    }

    #[test]
    fn test_custom_style_filename() {
        let style = LabelStyle {
            filename: "custom.pdf",
            ..LabelStyle::default()
        };
        let pdf = generate_pdf_with_style(&[RowInput::new("1", "", "")], &style).unwrap();
        assert_eq!(pdf.filename, "custom.pdf");
    }
}
