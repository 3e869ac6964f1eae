use crate::routes::Route;
use dioxus::prelude::*;
use shared_ui::{Card, CardContent, CardDescription, CardFooter, CardHeader, CardTitle};

/// Entry screen of the auth stack. Sign-in itself is handled by the
/// storefront account pages; this screen links out to password recovery.
#[component]
pub fn Login() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./login.css") }

        div { class: "auth-page",
            Card {
                class: "auth-card",

                CardHeader {
                    CardTitle { "Sign In" }
                    CardDescription { "Use your store account to sign in" }
                }

                CardContent {
                    div { class: "auth-forgot-password",
                        Link { to: Route::ForgotPassword {}, "Forgot password?" }
                    }
                }

                CardFooter {
                    p { class: "auth-link",
                        "Trouble signing in? Reset your password and try again."
                    }
                }
            }
        }
    }
}
