//! Per-label page layout.
//!
//! Turns one [`LabelRow`] into positioned drawing primitives: text runs
//! and filled bar rectangles. The PDF writer in [`crate::render`] only
//! serializes what this module computes.

use crate::code128::Symbol;
use crate::error::Result;
use crate::label::LabelRow;
use crate::metrics::{Font, string_width, wrap_text};
use crate::style::LabelStyle;

/// A line of text with its baseline origin.
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    pub text: String,
    pub font: Font,
    pub size: f32,
    pub x: f32,
    pub y: f32,
}

/// A filled rectangle, one per bar of the barcode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bar {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Where the barcode landed on the page, including its quiet zones.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarcodePlacement {
    pub x: f32,
    pub y: f32,
    /// Full horizontal extent, quiet zones included.
    pub width: f32,
    pub height: f32,
    /// Effective module width after any horizontal scaling.
    pub module_width: f32,
    pub quiet_zone: f32,
    /// Horizontal scale factor applied (1.0 when the symbol fits).
    pub scale: f32,
}

/// Everything drawn on one label page.
#[derive(Debug, Clone, PartialEq)]
pub struct PageLayout {
    pub description: Vec<TextRun>,
    pub barcode: BarcodePlacement,
    pub bars: Vec<Bar>,
    pub value: TextRun,
    pub extra_id: Option<TextRun>,
}

impl PageLayout {
    /// All text runs on the page, top to bottom.
    pub fn text_runs(&self) -> impl Iterator<Item = &TextRun> {
        self.description
            .iter()
            .chain(std::iter::once(&self.value))
            .chain(self.extra_id.iter())
    }
}

/// Fit a symbol of `modules` modules into the style's barcode box.
pub fn place_barcode(modules: usize, style: &LabelStyle) -> BarcodePlacement {
    let natural = 2.0 * style.quiet_zone + modules as f32 * style.bar_width;
    let scale = if natural > style.max_barcode_width {
        style.max_barcode_width / natural
    } else {
        1.0
    };
    let width = natural * scale;
    let height = style.bar_height;

    BarcodePlacement {
        x: (style.page_width - width) / 2.0,
        y: style.page_height / 2.0 - height / 2.0 - style.barcode_offset,
        width,
        height,
        module_width: style.bar_width * scale,
        quiet_zone: style.quiet_zone * scale,
        scale,
    }
}

fn centered(text: &str, font: Font, size: f32, y: f32, style: &LabelStyle) -> TextRun {
    let width = string_width(text, font, size);
    TextRun {
        text: text.to_string(),
        font,
        size,
        x: (style.page_width - width) / 2.0,
        y,
    }
}

/// Wrapped description lines, centered, the block's bottom fixed below the
/// top edge so additional lines grow upward.
fn layout_description(description: &str, style: &LabelStyle) -> Vec<TextRun> {
    let font = Font::Helvetica;
    let size = style.description_font_size;
    let max_width = style.page_width * style.description_width_ratio;
    let lines = wrap_text(description, font, size, max_width);

    let bottom = style.page_height - style.description_top;
    let block_height = lines.len() as f32 * style.description_leading;
    let first_baseline = bottom + block_height - size;

    lines
        .iter()
        .enumerate()
        .map(|(i, line)| {
            let y = first_baseline - i as f32 * style.description_leading;
            centered(line, font, size, y, style)
        })
        .collect()
}

/// Lay out one label page.
pub fn layout_label(label: &LabelRow, style: &LabelStyle) -> Result<PageLayout> {
    let symbol = Symbol::encode(&label.barcode)?;
    let barcode = place_barcode(symbol.module_count(), style);

    let bars = symbol
        .bar_runs()
        .into_iter()
        .map(|run| Bar {
            x: barcode.x + barcode.quiet_zone + run.start as f32 * barcode.module_width,
            y: barcode.y,
            width: run.len as f32 * barcode.module_width,
            height: barcode.height,
        })
        .collect();

    let description = if label.has_description() {
        layout_description(&label.description, style)
    } else {
        Vec::new()
    };

    let value = centered(
        &label.barcode,
        Font::HelveticaBold,
        style.value_font_size,
        barcode.y - style.value_gap,
        style,
    );

    let extra_id = (style.show_extra_id && label.has_extra_id()).then(|| TextRun {
        text: label.extra_id.clone(),
        font: Font::HelveticaBold,
        size: style.extra_id_font_size,
        x: style.extra_id_x,
        y: style.extra_id_y,
    });

    Ok(PageLayout {
        description,
        barcode,
        bars,
        value,
        extra_id,
    })
}
