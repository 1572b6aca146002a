//! UI Components for the label form.

use labels_rs::{LabelVariant, RowField, RowInput};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

/// Add/remove row buttons and the layout picker.
#[derive(Properties, PartialEq)]
pub struct ToolbarProps {
    pub variant: LabelVariant,
    pub row_count: usize,
    pub on_add: Callback<()>,
    pub on_remove: Callback<()>,
    pub on_variant: Callback<LabelVariant>,
}

#[function_component(Toolbar)]
pub fn toolbar(props: &ToolbarProps) -> Html {
    let on_add_click = {
        let on_add = props.on_add.clone();
        Callback::from(move |_| on_add.emit(()))
    };

    let on_remove_click = {
        let on_remove = props.on_remove.clone();
        Callback::from(move |_| on_remove.emit(()))
    };

    let on_select = {
        let on_variant = props.on_variant.clone();
        Callback::from(move |e: Event| {
            let target: HtmlSelectElement = e.target_unchecked_into();
            if let Some(variant) = LabelVariant::from_key(&target.value()) {
                on_variant.emit(variant);
            }
        })
    };

    html! {
        <div class="toolbar">
            <div class="button-group">
                <button class="add-button" onclick={on_add_click}>{ "\u{2795} Add Item" }</button>
                <button
                    class="remove-button"
                    onclick={on_remove_click}
                    disabled={props.row_count <= 1}
                >
                    { "\u{2796} Remove Item" }
                </button>
            </div>
            <label class="variant-label">
                { "Layout: " }
                <select class="variant-select" onchange={on_select}>
                    { for LabelVariant::ALL.iter().map(|v| html! {
                        <option value={v.key()} selected={*v == props.variant}>
                            { v.title() }
                        </option>
                    })}
                </select>
            </label>
        </div>
    }
}

/// One text field bound to a row slot.
#[derive(Properties, PartialEq)]
struct FieldInputProps {
    label: &'static str,
    value: String,
    field: RowField,
    on_change: Callback<(RowField, String)>,
}

#[function_component(FieldInput)]
fn field_input(props: &FieldInputProps) -> Html {
    let on_input = {
        let on_change = props.on_change.clone();
        let field = props.field;
        Callback::from(move |e: InputEvent| {
            let target: HtmlInputElement = e.target_unchecked_into();
            on_change.emit((field, target.value()));
        })
    };

    html! {
        <label class="field">
            <span class="field-label">{ props.label }</span>
            <input type="text" value={props.value.clone()} oninput={on_input} spellcheck="false" />
        </label>
    }
}

/// The three inputs of one label row.
#[derive(Properties, PartialEq)]
pub struct RowEditorProps {
    pub index: usize,
    pub row: RowInput,
    pub show_extra_id: bool,
    pub on_change: Callback<(usize, RowField, String)>,
}

#[function_component(RowEditor)]
pub fn row_editor(props: &RowEditorProps) -> Html {
    let on_field = {
        let on_change = props.on_change.clone();
        let index = props.index;
        Callback::from(move |(field, value): (RowField, String)| {
            on_change.emit((index, field, value));
        })
    };

    html! {
        <div class="panel row-panel">
            <div class="panel-header">
                <h2>{ format!("Item {}", props.index + 1) }</h2>
            </div>
            <div class="panel-content row-fields">
                <FieldInput
                    label="Item Number (Barcode)"
                    value={props.row.barcode.clone()}
                    field={RowField::Barcode}
                    on_change={on_field.clone()}
                />
                <FieldInput
                    label="Description"
                    value={props.row.description.clone()}
                    field={RowField::Description}
                    on_change={on_field.clone()}
                />
                if props.show_extra_id {
                    <FieldInput
                        label="Extra ID (e.g., Lot)"
                        value={props.row.extra_id.clone()}
                        field={RowField::ExtraId}
                        on_change={on_field}
                    />
                }
            </div>
        </div>
    }
}

/// Outcome of the last Generate click.
#[derive(Clone, PartialEq, Debug, Default)]
pub enum Status {
    #[default]
    Idle,
    /// Nothing to print.
    Warning(String),
    /// Encoding or rendering failed.
    Failed(String),
    Generated(String),
}

/// Generate button, status message, and download button.
#[derive(Properties, PartialEq)]
pub struct OutputPanelProps {
    pub status: Status,
    pub filename: Option<String>,
    pub on_generate: Callback<()>,
    pub on_download: Callback<()>,
}

#[function_component(OutputPanel)]
pub fn output_panel(props: &OutputPanelProps) -> Html {
    let on_generate_click = {
        let on_generate = props.on_generate.clone();
        Callback::from(move |_| on_generate.emit(()))
    };

    let on_download_click = {
        let on_download = props.on_download.clone();
        Callback::from(move |_| on_download.emit(()))
    };

    html! {
        <div class="panel output-panel">
            <div class="panel-header">
                <button class="run-button" onclick={on_generate_click}>
                    { "\u{1F4C4} Generate PDF" }
                </button>
            </div>
            <div class="panel-content">
                {
                    match &props.status {
                        Status::Idle => html! {},
                        Status::Warning(msg) => html! { <div class="warning">{ msg }</div> },
                        Status::Failed(msg) => html! { <div class="error">{ msg }</div> },
                        Status::Generated(msg) => html! { <div class="success">{ msg }</div> },
                    }
                }
                if let Some(filename) = &props.filename {
                    <button
                        class="save-button"
                        onclick={on_download_click}
                        title={filename.clone()}
                    >
                        { "\u{2B07}\u{FE0F} Download PDF" }
                    </button>
                }
            </div>
        </div>
    }
}
