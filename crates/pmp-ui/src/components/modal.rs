//! Dialog shell shared by the key popup and the navigation prompt.

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct ModalProps {
    /// Whether the dialog is visible.
    #[prop_or_default]
    pub(crate) open: bool,
    /// Heading rendered above the content.
    #[prop_or_default]
    pub(crate) title: Option<AttrValue>,
    /// Extra classes on the dialog root.
    #[prop_or_default]
    pub(crate) class: Classes,
    /// Dialog body.
    #[prop_or_default]
    pub(crate) children: Children,
    /// Fired when the backdrop is clicked.
    #[prop_or_default]
    pub(crate) on_close: Callback<()>,
}

#[function_component(Modal)]
pub(crate) fn modal(props: &ModalProps) -> Html {
    let classes = classes!(
        "modal",
        props.open.then_some("modal-open"),
        props.class.clone()
    );

    let on_close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_| on_close.emit(()))
    };

    html! {
        <div class={classes} role="dialog" aria-modal="true">
            <div class="modal-box">
                {props.title.clone().map(|title| html! { <h3 class="modal-title">{title}</h3> }).unwrap_or_default()}
                { for props.children.iter() }
            </div>
            <button class="modal-backdrop" onclick={on_close}></button>
        </div>
    }
}
