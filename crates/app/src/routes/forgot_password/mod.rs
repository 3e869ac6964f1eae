mod state;

pub use state::*;

use crate::routes::Route;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdCircleAlert, LdCircleCheck};
use dioxus_free_icons::Icon;
use shared_ui::{
    AlertDialogAction, AlertDialogActions, AlertDialogContent, AlertDialogDescription,
    AlertDialogRoot, AlertDialogTitle, Card, CardContent, CardDescription, CardFooter, CardHeader,
    CardTitle, Input, Label,
};

/// Forgot password screen. Asks the storefront to email a reset link and
/// reports the outcome in a modal.
#[component]
pub fn ForgotPassword() -> Element {
    let mut state = use_signal(ForgotPasswordForm::new);

    use_drop(move || {
        if let Ok(mut f) = state.try_write() {
            f.unmount();
        }
    });

    let handle_submit = move |evt: FormEvent| async move {
        evt.prevent_default();

        let Ok(Submission { ticket, request }) = state.write().begin_submit() else {
            return;
        };

        let outcome = server::api::forgot_password(request.email)
            .await
            .map_err(|e| failure_from_server_fn(&e.to_string()));
        if let Err(e) = &outcome {
            tracing::warn!(kind = %e.kind, "Password reset request failed");
        }

        let applied = state.write().complete(ticket, outcome);
        if applied && state.read().phase() == SubmitPhase::Confirmed {
            crate::notify::send(SUCCESS_TITLE, SUCCESS_MESSAGE);
        }
    };

    let mut dismiss = move || {
        if state.write().dismiss() == DismissAction::NavigateToLogin {
            navigator().push(Route::Login {});
        }
    };

    let modal = state.read().modal();
    let loading = state.read().is_loading();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("../login.css") }

        div { class: "auth-page",
            Card {
                class: "auth-card",

                CardHeader {
                    CardTitle { "Reset Password" }
                    CardDescription { "Enter your email to receive a password reset link" }
                }

                CardContent {
                    form { onsubmit: handle_submit,
                        div { class: "auth-field",
                            Label { html_for: "email", "Email Address" }
                            Input {
                                input_type: "email",
                                id: "email",
                                placeholder: "you@example.com",
                                autofocus: true,
                                value: state.read().email().to_string(),
                                on_input: move |e: FormEvent| state.write().set_email(e.value()),
                            }
                        }
                        button {
                            r#type: "submit",
                            class: "auth-submit button",
                            disabled: loading,
                            if loading { "Sending..." } else { "Reset Password" }
                        }
                    }
                }

                CardFooter {
                    p { class: "auth-link",
                        "Remember your password? "
                        Link { to: Route::Login {}, "Sign in" }
                    }
                }
            }

            if let Some(content) = modal {
                AlertDialogRoot {
                    open: true,
                    on_open_change: move |open: bool| {
                        if !open {
                            dismiss();
                        }
                    },
                    AlertDialogContent {
                        div {
                            class: if content.is_error { "auth-modal-icon auth-modal-icon-error" } else { "auth-modal-icon" },
                            if content.is_error {
                                Icon { icon: LdCircleAlert, width: 32, height: 32 }
                            } else {
                                Icon { icon: LdCircleCheck, width: 32, height: 32 }
                            }
                        }
                        AlertDialogTitle { {content.title} }
                        AlertDialogDescription { {content.message} }
                        AlertDialogActions {
                            AlertDialogAction {
                                on_click: move |_| dismiss(),
                                {content.button_label}
                            }
                        }
                    }
                }
            }
        }
    }
}
