//! Labelled dropdown with an optional search box.
//!
//! # Design
//! - Options arrive already deduplicated; filtering happens here on each keystroke.
//! - Selecting an option closes the panel and clears the query.

use crate::core::logic::{DropdownOption, filter_options};
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct DropdownFieldProps {
    /// DOM id of the toggle; the option list id is derived from it.
    pub(crate) id: AttrValue,
    /// Field label.
    pub(crate) label: AttrValue,
    /// Text shown while nothing is selected.
    pub(crate) placeholder: AttrValue,
    /// Options in display order.
    pub(crate) options: Vec<DropdownOption>,
    /// Code of the selected option; empty when none.
    #[prop_or_default]
    pub(crate) selected: AttrValue,
    /// Disable the toggle and hide the panel.
    #[prop_or_default]
    pub(crate) disabled: bool,
    /// Mark the label as mandatory.
    #[prop_or_default]
    pub(crate) required: bool,
    /// Help text shown next to the label.
    #[prop_or_default]
    pub(crate) tooltip: Option<AttrValue>,
    /// Placeholder for the search box; the box is shown only when set.
    #[prop_or_default]
    pub(crate) search_placeholder: Option<AttrValue>,
    /// Text shown when the filter leaves nothing.
    #[prop_or_default]
    pub(crate) empty_label: AttrValue,
    /// Fired with the picked option's code.
    pub(crate) on_select: Callback<String>,
}

#[function_component(DropdownField)]
pub(crate) fn dropdown_field(props: &DropdownFieldProps) -> Html {
    let open = use_state(|| false);
    let query = use_state(String::new);

    let toggle = {
        let open = open.clone();
        Callback::from(move |_: MouseEvent| open.set(!*open))
    };
    let on_query = {
        let query = query.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                query.set(input.value());
            }
        })
    };

    let shown = props
        .options
        .iter()
        .find(|option| option.field_code == props.selected.as_str())
        .map_or_else(
            || props.placeholder.to_string(),
            |option| option.field_value.clone(),
        );
    let visible = filter_options(&props.options, &query);

    let panel = (*open && !props.disabled).then(|| {
        html! {
            <div class="dropdown-panel">
                {props.search_placeholder.clone().map(|placeholder| html! {
                    <input
                        class="input input-bordered input-sm"
                        type="search"
                        placeholder={placeholder}
                        value={(*query).clone()}
                        oninput={on_query.clone()}
                    />
                }).unwrap_or_default()}
                <ul role="listbox" id={format!("{}-options", props.id)}>
                    { for visible.iter().map(|option| {
                        let code = option.field_code.clone();
                        let onclick = {
                            let on_select = props.on_select.clone();
                            let open = open.clone();
                            let query = query.clone();
                            Callback::from(move |_: MouseEvent| {
                                on_select.emit(code.clone());
                                open.set(false);
                                query.set(String::new());
                            })
                        };
                        let selected = option.field_code == props.selected.as_str();
                        html! {
                            <li
                                role="option"
                                aria-selected={selected.to_string()}
                                class={classes!("dropdown-option", selected.then_some("selected"))}
                                onclick={onclick}
                            >
                                <span>{option.field_value.clone()}</span>
                                {option.field_description.clone().map(|text| html! {
                                    <small class="muted">{text}</small>
                                }).unwrap_or_default()}
                            </li>
                        }
                    }) }
                </ul>
                if visible.is_empty() {
                    <p class="muted">{props.empty_label.clone()}</p>
                }
            </div>
        }
    });

    html! {
        <div class={classes!("dropdown-field", props.disabled.then_some("disabled"))}>
            <label class="field-label" for={props.id.clone()}>
                {props.label.clone()}
                if props.required {
                    <span class="required">{"*"}</span>
                }
                {props.tooltip.clone().map(|tip| html! {
                    <span class="tooltip" data-tip={tip.clone()} aria-label={tip}>{"ⓘ"}</span>
                }).unwrap_or_default()}
            </label>
            <button
                id={props.id.clone()}
                type="button"
                class={classes!("dropdown-toggle", props.selected.is_empty().then_some("placeholder"))}
                disabled={props.disabled}
                aria-haspopup="listbox"
                aria-expanded={(*open).to_string()}
                onclick={toggle}
            >
                <span>{shown}</span>
                <span class="chevron">{"▾"}</span>
            </button>
            {panel.unwrap_or_default()}
        </div>
    }
}
