//! Row collection: the editable list of label rows behind the form.
//!
//! The form shows a number of rows, each with three text fields. The row
//! count is plain state that callers own and thread through
//! [`apply_row_action`]; [`RowSheet`] pairs that count with the row
//! contents, indexed by position.
//!
//! ```
//! use labels_rs::{RowAction, RowSheet, RowField};
//!
//! let mut sheet = RowSheet::new();
//! sheet.apply(RowAction::Add);
//! sheet.set_field(0, RowField::Barcode, "  1001 ");
//! sheet.set_field(1, RowField::Barcode, "   ");
//!
//! let rows = sheet.label_rows();
//! assert_eq!(rows.len(), 1);
//! assert_eq!(rows[0].barcode, "1001");
//! ```

use crate::label::LabelRow;

/// A request to grow or shrink the row list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    /// Append one empty row.
    Add,
    /// Drop the last row, never going below one row.
    Remove,
}

/// Minimum number of rows the form always shows.
pub const MIN_ROWS: usize = 1;

/// Compute the row count after applying `action` to `count`.
///
/// A count below [`MIN_ROWS`] is treated as [`MIN_ROWS`].
pub fn apply_row_action(count: usize, action: RowAction) -> usize {
    let count = count.max(MIN_ROWS);
    match action {
        RowAction::Add => count + 1,
        RowAction::Remove => (count - 1).max(MIN_ROWS),
    }
}

/// One of the three text fields in a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowField {
    Barcode,
    Description,
    ExtraId,
}

/// Raw, untrimmed contents of one form row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowInput {
    pub barcode: String,
    pub description: String,
    pub extra_id: String,
}

impl RowInput {
    pub fn new(
        barcode: impl Into<String>,
        description: impl Into<String>,
        extra_id: impl Into<String>,
    ) -> Self {
        Self {
            barcode: barcode.into(),
            description: description.into(),
            extra_id: extra_id.into(),
        }
    }

    /// Get a field by kind.
    pub fn field(&self, field: RowField) -> &str {
        match field {
            RowField::Barcode => &self.barcode,
            RowField::Description => &self.description,
            RowField::ExtraId => &self.extra_id,
        }
    }

    /// Replace a field by kind.
    pub fn set_field(&mut self, field: RowField, value: impl Into<String>) {
        let value = value.into();
        match field {
            RowField::Barcode => self.barcode = value,
            RowField::Description => self.description = value,
            RowField::ExtraId => self.extra_id = value,
        }
    }

    /// Trim all fields, returning `None` when the barcode is blank.
    pub fn to_label_row(&self) -> Option<LabelRow> {
        let barcode = self.barcode.trim();
        if barcode.is_empty() {
            return None;
        }
        Some(LabelRow {
            barcode: barcode.to_string(),
            description: self.description.trim().to_string(),
            extra_id: self.extra_id.trim().to_string(),
        })
    }
}

/// Keep the rows with a non-blank barcode, trimmed, in input order.
///
/// Duplicate barcodes are kept; each produces its own page.
pub fn collect_label_rows(rows: &[RowInput]) -> Vec<LabelRow> {
    rows.iter().filter_map(RowInput::to_label_row).collect()
}

/// Ordered row inputs whose length is the displayed row count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowSheet {
    rows: Vec<RowInput>,
}

impl Default for RowSheet {
    fn default() -> Self {
        Self::new()
    }
}

impl RowSheet {
    /// A sheet with a single empty row.
    pub fn new() -> Self {
        Self {
            rows: vec![RowInput::default(); MIN_ROWS],
        }
    }

    /// Build a sheet from existing rows, padding to at least one row.
    pub fn from_rows(mut rows: Vec<RowInput>) -> Self {
        if rows.len() < MIN_ROWS {
            rows.resize(MIN_ROWS, RowInput::default());
        }
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Always false: a sheet holds at least one row.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[RowInput] {
        &self.rows
    }

    pub fn row_mut(&mut self, index: usize) -> Option<&mut RowInput> {
        self.rows.get_mut(index)
    }

    /// Grow or shrink the sheet. Rows that stay keep their contents.
    pub fn apply(&mut self, action: RowAction) {
        let count = apply_row_action(self.rows.len(), action);
        self.rows.resize(count, RowInput::default());
    }

    /// Edit one field of one row. Out-of-range indexes are ignored.
    pub fn set_field(&mut self, index: usize, field: RowField, value: impl Into<String>) {
        if let Some(row) = self.rows.get_mut(index) {
            row.set_field(field, value);
        }
    }

    /// Rows ready for rendering.
    pub fn label_rows(&self) -> Vec<LabelRow> {
        collect_label_rows(&self.rows)
    }
}

/// Parse delimited text into row inputs.
///
/// Each non-empty line is one row: `barcode<d>description<d>extra_id`.
/// Missing trailing fields are empty; anything after the second delimiter
/// belongs to the extra ID. Lines starting with `#` are comments.
pub fn parse_rows(text: &str, delimiter: char) -> Vec<RowInput> {
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .filter(|line| !line.trim_start().starts_with('#'))
        .map(|line| {
            let mut fields = line.splitn(3, delimiter);
            RowInput {
                barcode: fields.next().unwrap_or_default().to_string(),
                description: fields.next().unwrap_or_default().to_string(),
                extra_id: fields.next().unwrap_or_default().to_string(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_increments() {
        assert_eq!(apply_row_action(1, RowAction::Add), 2);
        assert_eq!(apply_row_action(5, RowAction::Add), 6);
    }

    #[test]
    fn test_remove_floor_is_one() {
        assert_eq!(apply_row_action(3, RowAction::Remove), 2);
        assert_eq!(apply_row_action(1, RowAction::Remove), 1);
        assert_eq!(apply_row_action(0, RowAction::Remove), 1);
    }

    #[test]
    fn test_repeated_remove_never_below_one() {
        let mut count = 4;
        for _ in 0..20 {
            count = apply_row_action(count, RowAction::Remove);
            assert!(count >= 1);
        }
        assert_eq!(count, 1);
    }

    #[test]
    fn test_collect_trims_and_drops_blank() {
        let rows = vec![
            RowInput::new("  1001 ", " Widget A ", ""),
            RowInput::new("", "orphan description", "LOT1"),
            RowInput::new(" \t ", "", ""),
            RowInput::new("1002", "", " LOT5 "),
        ];

        let labels = collect_label_rows(&rows);

        assert_eq!(labels.len(), 2);
        assert_eq!(labels[0].barcode, "1001");
        assert_eq!(labels[0].description, "Widget A");
        assert_eq!(labels[1].barcode, "1002");
        assert_eq!(labels[1].extra_id, "LOT5");
    }

    #[test]
    fn test_collect_keeps_order_and_duplicates() {
        let rows = vec![
            RowInput::new("B", "", ""),
            RowInput::new("A", "", ""),
            RowInput::new("B", "", ""),
        ];
        let barcodes: Vec<String> = collect_label_rows(&rows)
            .into_iter()
            .map(|r| r.barcode)
            .collect();
        assert_eq!(barcodes, vec!["B", "A", "B"]);
    }

    #[test]
    fn test_sheet_starts_with_one_row() {
        let sheet = RowSheet::new();
        assert_eq!(sheet.len(), 1);
        assert!(sheet.label_rows().is_empty());
    }

    #[test]
    fn test_sheet_add_remove_keeps_contents() {
        let mut sheet = RowSheet::new();
        sheet.set_field(0, RowField::Barcode, "1001");
        sheet.apply(RowAction::Add);
        sheet.apply(RowAction::Add);
        sheet.set_field(2, RowField::Barcode, "1003");
        assert_eq!(sheet.len(), 3);

        sheet.apply(RowAction::Remove);
        assert_eq!(sheet.len(), 2);
        assert_eq!(sheet.rows()[0].barcode, "1001");

        sheet.apply(RowAction::Remove);
        sheet.apply(RowAction::Remove);
        assert_eq!(sheet.len(), 1);
        assert_eq!(sheet.rows()[0].barcode, "1001");
    }

    #[test]
    fn test_sheet_set_field_out_of_range_ignored() {
        let mut sheet = RowSheet::new();
        sheet.set_field(7, RowField::Barcode, "1001");
        assert!(sheet.label_rows().is_empty());
    }

    #[test]
    fn test_from_rows_pads_empty() {
        let sheet = RowSheet::from_rows(Vec::new());
        assert_eq!(sheet.len(), 1);
    }

    #[test]
    fn test_parse_rows_tab_delimited() {
        let text = "# barcode\tdescription\textra\n1001\tWidget A\n\n1002\t\tLOT5\n1003\n";
        let rows = parse_rows(text, '\t');

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0], RowInput::new("1001", "Widget A", ""));
        assert_eq!(rows[1], RowInput::new("1002", "", "LOT5"));
        assert_eq!(rows[2], RowInput::new("1003", "", ""));
    }

    #[test]
    fn test_parse_rows_extra_keeps_delimiter() {
        let rows = parse_rows("1001,Bolt, M4,LOT 7", ',');
        assert_eq!(rows[0].description, "Bolt");
        assert_eq!(rows[0].extra_id, " M4,LOT 7");
    }
}
