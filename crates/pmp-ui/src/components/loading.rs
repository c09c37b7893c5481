//! Full-panel spinner.

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct LoadingProps {
    /// Extra classes on the spinner.
    #[prop_or_default]
    pub(crate) class: Classes,
    /// Accessible label for the spinner.
    #[prop_or_default]
    pub(crate) label: Option<AttrValue>,
}

#[function_component(Loading)]
pub(crate) fn loading(props: &LoadingProps) -> Html {
    let classes = classes!("loading", "loading-spinner", "loading-lg", props.class.clone());
    html! {
        <div class="loading-overlay">
            <span class={classes} role="status" aria-label={props.label.clone()} />
        </div>
    }
}
