//! PDF serialization of laid-out label pages.
//!
//! Object layout: catalog, page tree, document info, the two shared
//! Type1 fonts, then one page object and one content stream per label.

use log::{debug, info};
use pdf_writer::{Content, Finish, Name, Pdf, Rect, Ref, Str, TextStr};

use crate::error::Result;
use crate::label::LabelDocument;
use crate::layout::{PageLayout, TextRun, layout_label};
use crate::metrics::{Font, encode_win_ansi};
use crate::style::LabelStyle;

const CATALOG_ID: Ref = Ref::new(1);
const PAGE_TREE_ID: Ref = Ref::new(2);
const INFO_ID: Ref = Ref::new(3);
const REGULAR_FONT_ID: Ref = Ref::new(4);
const BOLD_FONT_ID: Ref = Ref::new(5);
/// First id handed out to per-page objects.
const FIRST_PAGE_OBJECT: i32 = 6;

const PRODUCER: &str = concat!("labels-rs ", env!("CARGO_PKG_VERSION"));

/// Write the drawing operators for one page.
fn page_content(layout: &PageLayout) -> Vec<u8> {
    let mut content = Content::new();

    content.set_fill_gray(0.0);
    for bar in &layout.bars {
        content.rect(bar.x, bar.y, bar.width, bar.height);
    }
    if !layout.bars.is_empty() {
        content.fill_nonzero();
    }

    for run in layout.text_runs() {
        show_text(&mut content, run);
    }

    content.finish()
}

fn show_text(content: &mut Content, run: &TextRun) {
    content.begin_text();
    content.set_font(Name(run.font.resource_name()), run.size);
    content.next_line(run.x, run.y);
    content.show(Str(&encode_win_ansi(&run.text)));
    content.end_text();
}

/// Render every label in `document` to a PDF byte buffer, one page each.
pub fn render_document(document: &LabelDocument, style: &LabelStyle) -> Result<Vec<u8>> {
    let layouts = document
        .labels()
        .iter()
        .map(|label| layout_label(label, style))
        .collect::<Result<Vec<_>>>()?;

    let mut pdf = Pdf::new();
    let mut next_id = FIRST_PAGE_OBJECT;
    let mut page_ids = Vec::with_capacity(layouts.len());

    for (index, layout) in layouts.iter().enumerate() {
        let page_id = Ref::new(next_id);
        let content_id = Ref::new(next_id + 1);
        next_id += 2;

        let mut page = pdf.page(page_id);
        page.media_box(Rect::new(0.0, 0.0, style.page_width, style.page_height));
        page.parent(PAGE_TREE_ID);
        page.contents(content_id);
        page.resources()
            .fonts()
            .pair(Name(Font::Helvetica.resource_name()), REGULAR_FONT_ID)
            .pair(Name(Font::HelveticaBold.resource_name()), BOLD_FONT_ID);
        page.finish();

        pdf.stream(content_id, &page_content(layout));
        page_ids.push(page_id);

        debug!(
            "Page {}: {} bars, {} text runs, barcode scale {:.3}",
            index + 1,
            layout.bars.len(),
            layout.text_runs().count(),
            layout.barcode.scale
        );
    }

    pdf.catalog(CATALOG_ID).pages(PAGE_TREE_ID);
    pdf.pages(PAGE_TREE_ID)
        .kids(page_ids.iter().copied())
        .count(page_ids.len() as i32);
    pdf.document_info(INFO_ID)
        .title(TextStr("Labels"))
        .producer(TextStr(PRODUCER));

    for (id, font) in [
        (REGULAR_FONT_ID, Font::Helvetica),
        (BOLD_FONT_ID, Font::HelveticaBold),
    ] {
        pdf.type1_font(id)
            .base_font(Name(font.base_name()))
            .encoding_predefined(Name(b"WinAnsiEncoding"));
    }

    let bytes = pdf.finish();
    info!(
        "PDF generated: {} pages, {} bytes",
        page_ids.len(),
        bytes.len()
    );
    Ok(bytes)
}

#[cfg(test)]
pub(crate) mod testing {
    //! Helpers for inspecting generated PDFs.

    use lopdf::content::Content;
    use lopdf::{Document, Object};

    pub fn load(bytes: &[u8]) -> Document {
        Document::load_mem(bytes).expect("generated PDF should parse")
    }

    /// Raw content stream of every page, in page order.
    pub fn page_contents(doc: &Document) -> Vec<Vec<u8>> {
        doc.get_pages()
            .values()
            .map(|id| doc.get_page_content(*id).expect("page content"))
            .collect()
    }

    /// MediaBox of every page as `[x0, y0, x1, y1]`.
    pub fn media_boxes(doc: &Document) -> Vec<Vec<f32>> {
        doc.get_pages()
            .values()
            .map(|id| {
                let page = doc.get_dictionary(*id).expect("page dictionary");
                let mb = page
                    .get(b"MediaBox")
                    .and_then(Object::as_array)
                    .expect("media box");
                mb.iter()
                    .map(|o| o.as_float().expect("numeric MediaBox entry") as f32)
                    .collect()
            })
            .collect()
    }

    pub fn contains(haystack: &[u8], needle: &[u8]) -> bool {
        haystack.windows(needle.len()).any(|w| w == needle)
    }

    /// Every string shown on a page with its text origin.
    pub fn placed_text(content: &[u8]) -> Vec<(f32, f32, String)> {
        let ops = Content::decode(content).expect("content stream").operations;
        let mut origin = (0.0f32, 0.0f32);
        let mut shown = Vec::new();
        for op in ops {
            match op.operator.as_str() {
                "Td" if op.operands.len() == 2 => {
                    let x = op.operands[0].as_float().unwrap_or_default() as f32;
                    let y = op.operands[1].as_float().unwrap_or_default() as f32;
                    origin = (x, y);
                }
                "Tj" => {
                    if let Some(Object::String(bytes, _)) = op.operands.first() {
                        let text = String::from_utf8_lossy(bytes).into_owned();
                        shown.push((origin.0, origin.1, text));
                    }
                }
                _ => {}
            }
        }
        shown
    }

    /// Whether a page shows exactly `text` in one run.
    pub fn shows(content: &[u8], text: &str) -> bool {
        placed_text(content).iter().any(|(_, _, t)| t == text)
    }
}
