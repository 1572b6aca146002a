//! Label rows and the ordered document they form.

use crate::error::{LabelError, Result};

/// One label: a trimmed, non-empty barcode value plus optional text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelRow {
    pub barcode: String,
    pub description: String,
    pub extra_id: String,
}

impl LabelRow {
    pub fn has_description(&self) -> bool {
        !self.description.is_empty()
    }

    pub fn has_extra_id(&self) -> bool {
        !self.extra_id.is_empty()
    }
}

/// Non-empty ordered list of labels, one page each.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelDocument {
    labels: Vec<LabelRow>,
}

impl LabelDocument {
    /// Wrap collected rows. Fails with [`LabelError::NoValidRows`] when
    /// there is nothing to print or a row slipped through with a blank
    /// barcode.
    pub fn new(labels: Vec<LabelRow>) -> Result<Self> {
        if labels.is_empty() || labels.iter().any(|l| l.barcode.trim().is_empty()) {
            return Err(LabelError::NoValidRows);
        }
        Ok(Self { labels })
    }

    pub fn labels(&self) -> &[LabelRow] {
        &self.labels
    }

    /// Number of pages the document renders to.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}
