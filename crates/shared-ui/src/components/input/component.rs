use dioxus::prelude::*;

/// Single-line text field. `input_type` maps to the HTML `type` so mobile
/// webviews pick the matching keyboard (e.g. `"email"`).
#[component]
pub fn Input(
    #[props(default)] value: String,
    #[props(default)] on_input: EventHandler<FormEvent>,
    #[props(default)] placeholder: String,
    #[props(default = "text".to_string())] input_type: String,
    #[props(default = false)] disabled: bool,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let base = vec![Attribute::new("class", "input", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);
    let autocapitalize = if input_type == "email" { "none" } else { "sentences" };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        input {
            r#type: "{input_type}",
            value: value,
            placeholder: placeholder,
            disabled: disabled,
            autocapitalize: autocapitalize,
            oninput: move |evt| on_input.call(evt),
            ..merged,
        }
    }
}
