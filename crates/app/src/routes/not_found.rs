use dioxus::prelude::*;

use crate::routes::Route;

/// Catch-all for paths outside the auth stack.
#[component]
pub fn NotFound(route: Vec<String>) -> Element {
    let path = format!("/{}", route.join("/"));
    tracing::debug!(%path, "Unknown route");

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./not_found.css") }

        div { class: "not-found",
            h1 { "404" }
            p { "Nothing lives at " code { "{path}" } "." }
            Link { to: Route::Login {}, class: "button", "Back To Login" }
        }
    }
}
