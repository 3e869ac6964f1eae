use dioxus::prelude::*;
use dioxus_primitives::label as prim;

/// Caption bound to a form control through `html_for`.
#[component]
pub fn Label(mut props: prim::LabelProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "field-label", None, false));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        prim::Label { ..props }
    }
}
