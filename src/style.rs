//! Label geometry presets.
//!
//! All lengths are PDF points (1/72 inch), origin at the bottom-left of
//! the page.

/// Points per inch.
pub const INCH: f32 = 72.0;

/// Page width of a 4"x2" label.
pub const PAGE_WIDTH: f32 = 4.0 * INCH;

/// Page height of a 4"x2" label.
pub const PAGE_HEIGHT: f32 = 2.0 * INCH;

/// MIME type of the generated document.
pub const PDF_MIME: &str = "application/pdf";

/// The three label layouts the tool ships.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LabelVariant {
    /// Narrow bars, no quiet zone.
    Compact,
    /// Wide, tall bars with quiet zones for easy scanning.
    Wide,
    /// Same as `Wide`, plus the extra ID in the bottom-left corner.
    #[default]
    WideWithExtraId,
}

impl LabelVariant {
    pub const ALL: [LabelVariant; 3] = [
        LabelVariant::Compact,
        LabelVariant::Wide,
        LabelVariant::WideWithExtraId,
    ];

    /// Short identifier used by the CLI and the UI selector.
    pub fn key(self) -> &'static str {
        match self {
            LabelVariant::Compact => "compact",
            LabelVariant::Wide => "wide",
            LabelVariant::WideWithExtraId => "extra-id",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.key() == key)
    }

    /// Human-readable name.
    pub fn title(self) -> &'static str {
        match self {
            LabelVariant::Compact => "Compact barcode",
            LabelVariant::Wide => "Wide & clear barcode",
            LabelVariant::WideWithExtraId => "Wide barcode + extra ID",
        }
    }

    pub fn style(self) -> LabelStyle {
        match self {
            LabelVariant::Compact => LabelStyle {
                bar_width: 0.014 * INCH,
                bar_height: 0.6 * INCH,
                quiet_zone: 0.0,
                max_barcode_width: 3.8 * INCH,
                barcode_offset: 0.1 * INCH,
                value_font_size: 12.0,
                value_gap: 0.2 * INCH,
                show_extra_id: false,
                filename: "2x4_labels.pdf",
                ..LabelStyle::base()
            },
            LabelVariant::Wide => LabelStyle {
                show_extra_id: false,
                filename: "2x4_labels_wide_barcode.pdf",
                ..LabelStyle::base()
            },
            LabelVariant::WideWithExtraId => LabelStyle::base(),
        }
    }
}

/// Every parameter of the label layout.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelStyle {
    pub page_width: f32,
    pub page_height: f32,
    /// Width of one Code128 module (the narrowest bar).
    pub bar_width: f32,
    pub bar_height: f32,
    /// Blank margin on each side of the symbol.
    pub quiet_zone: f32,
    /// Wider barcodes are squeezed horizontally to this width.
    pub max_barcode_width: f32,
    /// How far below the vertical center the barcode sits.
    pub barcode_offset: f32,
    pub value_font_size: f32,
    /// Distance from the barcode bottom to the value's baseline.
    pub value_gap: f32,
    pub description_font_size: f32,
    pub description_leading: f32,
    /// Distance from the top edge to the bottom of the description block.
    pub description_top: f32,
    /// Description wrap width as a fraction of the page width.
    pub description_width_ratio: f32,
    pub show_extra_id: bool,
    pub extra_id_x: f32,
    pub extra_id_y: f32,
    pub extra_id_font_size: f32,
    /// Suggested download name.
    pub filename: &'static str,
}

impl LabelStyle {
    /// The wide-barcode layout with the extra ID enabled.
    fn base() -> Self {
        Self {
            page_width: PAGE_WIDTH,
            page_height: PAGE_HEIGHT,
            bar_width: 0.025 * INCH,
            bar_height: 0.7 * INCH,
            quiet_zone: 0.15 * INCH,
            max_barcode_width: 3.6 * INCH,
            barcode_offset: 0.05 * INCH,
            value_font_size: 15.0,
            value_gap: 0.22 * INCH,
            description_font_size: 11.0,
            description_leading: 12.0,
            description_top: 0.4 * INCH,
            description_width_ratio: 0.9,
            show_extra_id: true,
            extra_id_x: 0.1 * INCH,
            extra_id_y: 0.12 * INCH,
            extra_id_font_size: 15.0,
            filename: "2x4_labels_with_extra_id.pdf",
        }
    }
}

impl Default for LabelStyle {
    fn default() -> Self {
        LabelVariant::default().style()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_is_four_by_two_inches() {
        for variant in LabelVariant::ALL {
            let style = variant.style();
            assert_eq!(style.page_width, 288.0);
            assert_eq!(style.page_height, 144.0);
        }
    }

    #[test]
    fn test_only_extra_id_variant_shows_corner_text() {
        assert!(!LabelVariant::Compact.style().show_extra_id);
        assert!(!LabelVariant::Wide.style().show_extra_id);
        assert!(LabelVariant::WideWithExtraId.style().show_extra_id);
    }

    #[test]
    fn test_wide_variants_have_quiet_zone() {
        assert_eq!(LabelVariant::Compact.style().quiet_zone, 0.0);
        assert!(LabelVariant::Wide.style().quiet_zone > 0.0);
        assert!((LabelVariant::Wide.style().max_barcode_width - 259.2).abs() < 1e-3);
    }

    #[test]
    fn test_filenames_are_distinct() {
        let names: Vec<&str> = LabelVariant::ALL.iter().map(|v| v.style().filename).collect();
        assert_eq!(
            names,
            vec![
                "2x4_labels.pdf",
                "2x4_labels_wide_barcode.pdf",
                "2x4_labels_with_extra_id.pdf"
            ]
        );
    }

    #[test]
    fn test_key_round_trip() {
        for variant in LabelVariant::ALL {
            assert_eq!(LabelVariant::from_key(variant.key()), Some(variant));
        }
        assert_eq!(LabelVariant::from_key("huge"), None);
    }
}
