//! # labels-rs
//!
//! Printable 4"x2" label PDFs with Code128 barcodes.
//!
//! Each label page carries:
//! - **Description**: optional wrapped line near the top edge
//! - **Barcode**: Code128 symbol, centered, squeezed horizontally if too wide
//! - **Value**: the barcode string in bold under the symbol
//! - **Extra ID**: optional bold text pinned to the bottom-left corner
//!   (extra-ID variant only)
//!
//! ## Example
//!
//! ```
//! use labels_rs::{LabelVariant, RowInput, generate_pdf};
//!
//! let rows = vec![
//!     RowInput::new("1001", "Widget A", "LOT5"),
//!     RowInput::new("   ", "skipped: no barcode", ""),
//!     RowInput::new("1002", "", ""),
//! ];
//!
//! let pdf = generate_pdf(&rows, LabelVariant::WideWithExtraId).unwrap();
//!
//! assert_eq!(pdf.page_count, 2);
//! assert_eq!(pdf.filename, "2x4_labels_with_extra_id.pdf");
//! ```

pub mod code128;
pub mod error;
pub mod generate;
pub mod label;
pub mod layout;
pub mod metrics;
pub mod render;
pub mod rows;
pub mod style;

pub use code128::{CharacterSet, Symbol};
pub use error::{LabelError, Result};
pub use generate::{GeneratedPdf, generate_pdf, generate_pdf_with_style};
pub use label::{LabelDocument, LabelRow};
pub use layout::{PageLayout, layout_label};
pub use render::render_document;
pub use rows::{
    RowAction, RowField, RowInput, RowSheet, apply_row_action, collect_label_rows, parse_rows,
};
pub use style::{INCH, LabelStyle, LabelVariant, PDF_MIME};
