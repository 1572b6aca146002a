//! Main application component.

use std::rc::Rc;

use labels_rs::{
    GeneratedPdf, LabelError, LabelVariant, RowAction, RowField, RowSheet, generate_pdf,
};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};
use yew::prelude::*;

use crate::components::{OutputPanel, RowEditor, Status, Toolbar};

/// Main application state.
#[derive(Clone, PartialEq)]
pub struct AppState {
    /// Form rows, one per displayed item.
    pub sheet: RowSheet,
    /// Selected label layout.
    pub variant: LabelVariant,
    /// Result message of the last generation.
    pub status: Status,
    /// Last generated document, offered for download.
    pub pdf: Option<Rc<GeneratedPdf>>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            sheet: RowSheet::new(),
            variant: LabelVariant::default(),
            status: Status::Idle,
            pdf: None,
        }
    }
}

impl AppState {
    /// Drop any previous result; the form changed.
    fn invalidate(&mut self) {
        self.status = Status::Idle;
        self.pdf = None;
    }

    pub fn apply_row_action(&mut self, action: RowAction) {
        self.sheet.apply(action);
        self.invalidate();
    }

    pub fn edit(&mut self, index: usize, field: RowField, value: String) {
        self.sheet.set_field(index, field, value);
        self.invalidate();
    }

    pub fn select_variant(&mut self, variant: LabelVariant) {
        self.variant = variant;
        self.invalidate();
    }

    /// Build the PDF from the current rows and record the outcome.
    pub fn generate(&mut self) {
        match generate_pdf(self.sheet.rows(), self.variant) {
            Ok(pdf) => {
                let mut message = format!("\u{2705} Generated {} labels", pdf.page_count);
                if self.variant.style().show_extra_id {
                    message.push_str(" with extra ID in bottom-left");
                }
                self.status = Status::Generated(message);
                self.pdf = Some(Rc::new(pdf));
            }
            Err(LabelError::NoValidRows) => {
                self.status =
                    Status::Warning(format!("\u{26A0}\u{FE0F} {}", LabelError::NoValidRows));
                self.pdf = None;
            }
            Err(e) => {
                self.status = Status::Failed(e.to_string());
                self.pdf = None;
            }
        }
    }
}

/// Offer `pdf` to the browser as a file download.
fn download_pdf(pdf: &GeneratedPdf) -> Result<(), JsValue> {
    let parts = js_sys::Array::new();
    parts.push(&js_sys::Uint8Array::from(pdf.bytes.as_slice()));

    let options = BlobPropertyBag::new();
    options.set_type(pdf.mime);
    let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &options)?;
    let url = Url::create_object_url_with_blob(&blob)?;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let anchor: HtmlAnchorElement = document.create_element("a")?.dyn_into()?;

    anchor.set_href(&url);
    anchor.set_download(pdf.filename);
    anchor.click();

    Url::revoke_object_url(&url)
}

/// Main application component.
#[function_component(App)]
pub fn app() -> Html {
    let state = use_state(AppState::default);

    let on_add = {
        let state = state.clone();
        Callback::from(move |_: ()| {
            let mut new_state = (*state).clone();
            new_state.apply_row_action(RowAction::Add);
            state.set(new_state);
        })
    };

    let on_remove = {
        let state = state.clone();
        Callback::from(move |_: ()| {
            let mut new_state = (*state).clone();
            new_state.apply_row_action(RowAction::Remove);
            state.set(new_state);
        })
    };

    let on_variant = {
        let state = state.clone();
        Callback::from(move |variant: LabelVariant| {
            let mut new_state = (*state).clone();
            new_state.select_variant(variant);
            state.set(new_state);
        })
    };

    let on_row_change = {
        let state = state.clone();
        Callback::from(move |(index, field, value): (usize, RowField, String)| {
            let mut new_state = (*state).clone();
            new_state.edit(index, field, value);
            state.set(new_state);
        })
    };

    let on_generate = {
        let state = state.clone();
        Callback::from(move |_: ()| {
            let mut new_state = (*state).clone();
            new_state.generate();
            match &new_state.status {
                Status::Failed(msg) => {
                    gloo::console::error!(format!("Label generation failed: {msg}"))
                }
                other => gloo::console::log!(format!("Label generation: {other:?}")),
            }
            state.set(new_state);
        })
    };

    let on_download = {
        let state = state.clone();
        Callback::from(move |_: ()| {
            if let Some(pdf) = &state.pdf
                && let Err(e) = download_pdf(pdf)
            {
                gloo::console::error!("Download failed:", e);
            }
        })
    };

    let show_extra_id = state.variant.style().show_extra_id;

    html! {
        <div class="app">
            <header class="header">
                <div class="header-left">
                    <h1>{ "\u{1F5A8}\u{FE0F} 2\u{00D7}4 Label Generator" }</h1>
                    <p class="subtitle">{ state.variant.title() }</p>
                </div>
            </header>

            <main class="main">
                <Toolbar
                    variant={state.variant}
                    row_count={state.sheet.len()}
                    on_add={on_add}
                    on_remove={on_remove}
                    on_variant={on_variant}
                />

                <div class="panels">
                    { for state.sheet.rows().iter().enumerate().map(|(index, row)| html! {
                        <RowEditor
                            key={index}
                            index={index}
                            row={row.clone()}
                            show_extra_id={show_extra_id}
                            on_change={on_row_change.clone()}
                        />
                    })}
                </div>

                <OutputPanel
                    status={state.status.clone()}
                    filename={state.pdf.as_ref().map(|p| p.filename.to_string())}
                    on_generate={on_generate}
                    on_download={on_download}
                />
            </main>

            <footer class="footer">
                <div class="footer-row">
                    <span>{ "4\" \u{00D7} 2\" labels | Code128 | One label per page" }</span>
                </div>
                <div class="footer-row">
                    <span class="footer-build">
                        { format!("Build: {} {}", env!("BUILD_COMMIT"), env!("BUILD_TIMESTAMP")) }
                    </span>
                </div>
            </footer>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state_has_one_row() {
        let state = AppState::default();
        assert_eq!(state.sheet.len(), 1);
        assert_eq!(state.variant, LabelVariant::WideWithExtraId);
        assert_eq!(state.status, Status::Idle);
    }

    #[test]
    fn test_remove_keeps_one_row() {
        let mut state = AppState::default();
        state.apply_row_action(RowAction::Remove);
        state.apply_row_action(RowAction::Remove);
        assert_eq!(state.sheet.len(), 1);
        state.apply_row_action(RowAction::Add);
        assert_eq!(state.sheet.len(), 2);
    }

    #[test]
    fn test_generate_without_barcodes_warns() {
        let mut state = AppState::default();
        state.edit(0, RowField::Description, "Widget A".to_string());
        state.generate();

        assert!(state.pdf.is_none());
        match &state.status {
            Status::Warning(msg) => assert!(msg.contains("Please enter at least one item number.")),
            other => panic!("Expected warning, got {other:?}"),
        }
    }

    #[test]
    fn test_generate_success_offers_download() {
        let mut state = AppState::default();
        state.apply_row_action(RowAction::Add);
        state.edit(0, RowField::Barcode, "1001".to_string());
        state.edit(0, RowField::Description, "Widget A".to_string());
        state.edit(1, RowField::Barcode, "1002".to_string());
        state.generate();

        let pdf = state.pdf.as_ref().expect("pdf generated");
        assert_eq!(pdf.page_count, 2);
        assert_eq!(pdf.filename, "2x4_labels_with_extra_id.pdf");
        match &state.status {
            Status::Generated(msg) => assert!(msg.contains("Generated 2 labels")),
            other => panic!("Expected success, got {other:?}"),
        }
    }

    #[test]
    fn test_generate_encoding_failure() {
        let mut state = AppState::default();
        state.edit(0, RowField::Barcode, "\u{00FC}ber".to_string());
        state.generate();

        assert!(state.pdf.is_none());
        assert!(matches!(state.status, Status::Failed(_)));
    }

    #[test]
    fn test_edit_clears_previous_result() {
        let mut state = AppState::default();
        state.edit(0, RowField::Barcode, "1001".to_string());
        state.generate();
        assert!(state.pdf.is_some());

        state.edit(0, RowField::Barcode, "1002".to_string());
        assert!(state.pdf.is_none());
        assert_eq!(state.status, Status::Idle);
    }

    #[test]
    fn test_variant_changes_filename() {
        let mut state = AppState::default();
        state.edit(0, RowField::Barcode, "1001".to_string());
        state.select_variant(LabelVariant::Compact);
        state.generate();
        assert_eq!(state.pdf.as_ref().unwrap().filename, "2x4_labels.pdf");
    }
}
