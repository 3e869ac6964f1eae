//! Form state for the forgot-password screen.
//!
//! The screen holds one [`ForgotPasswordForm`] in a signal. Every event
//! (typing, submitting, a settled request, dismissing the modal) is a method
//! call here, so the component only wires events to methods and renders
//! [`ForgotPasswordForm::modal`].

use shared_types::{AppError, CustomerRecoverPayload, ForgotPasswordRequest, GENERIC_ERROR_MESSAGE};

pub const ERROR_TITLE: &str = "An Error Occurred!";
pub const SUCCESS_TITLE: &str = "Email Has Been Sent!";
pub const SUCCESS_MESSAGE: &str =
    "Please check your email. An email has been sent to reset your password.";
pub const EMPTY_EMAIL_MESSAGE: &str = "Please check your email address and try again.";
pub const RETRY_LABEL: &str = "Try Again";
pub const BACK_TO_LOGIN_LABEL: &str = "Back To Login";

/// Where the current submission cycle stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitPhase {
    #[default]
    Idle,
    /// A request is in flight. Only a completion carrying this ticket is applied.
    Requesting { ticket: u64 },
    Confirmed,
    Failed,
}

/// Why `begin_submit` did not start a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitRejection {
    /// A request is already outstanding.
    AlreadyRequesting,
    /// The email field is blank. The error modal is now showing.
    EmptyEmail,
}

/// A request the caller must send, tagged with the ticket to complete it with.
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    pub ticket: u64,
    pub request: ForgotPasswordRequest,
}

/// What the screen should do after the modal button is pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissAction {
    /// No request outcome was on screen.
    None,
    /// Error dismissed; stay on the form with the email intact.
    Retry,
    /// Success dismissed; go back to the login screen.
    NavigateToLogin,
}

/// Content of the confirmation modal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalContent {
    pub is_error: bool,
    pub title: &'static str,
    pub message: String,
    pub button_label: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ForgotPasswordForm {
    email: String,
    visible: bool,
    error: String,
    phase: SubmitPhase,
    next_ticket: u64,
    mounted: bool,
}

impl Default for ForgotPasswordForm {
    fn default() -> Self {
        Self::new()
    }
}

impl ForgotPasswordForm {
    pub fn new() -> Self {
        Self {
            email: String::new(),
            visible: false,
            error: String::new(),
            phase: SubmitPhase::Idle,
            next_ticket: 1,
            mounted: true,
        }
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn error(&self) -> &str {
        &self.error
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    pub fn is_error(&self) -> bool {
        !self.error.is_empty()
    }

    /// True while a request is outstanding; the submit control is inert.
    pub fn is_loading(&self) -> bool {
        matches!(self.phase, SubmitPhase::Requesting { .. })
    }

    // Raw field setters. They do not move `phase`, so only an outcome
    // reached through `begin_submit`/`complete` decides what `dismiss` does.

    pub fn set_email(&mut self, value: impl Into<String>) {
        self.email = value.into();
    }

    pub fn set_error(&mut self, value: impl Into<String>) {
        self.error = value.into();
    }

    pub fn toggle_visible(&mut self) {
        self.visible = !self.visible;
    }

    /// Validate locally and, if the email is present, move to `Requesting`.
    pub fn begin_submit(&mut self) -> Result<Submission, SubmitRejection> {
        if self.is_loading() {
            return Err(SubmitRejection::AlreadyRequesting);
        }

        let request = ForgotPasswordRequest::from_input(&self.email);
        if request.email.is_empty() {
            self.show_outcome(SubmitPhase::Failed, EMPTY_EMAIL_MESSAGE.to_string());
            return Err(SubmitRejection::EmptyEmail);
        }

        let ticket = self.next_ticket;
        self.next_ticket += 1;
        self.error.clear();
        self.visible = false;
        self.phase = SubmitPhase::Requesting { ticket };
        Ok(Submission { ticket, request })
    }

    /// Apply a settled request. Returns `false` when the completion was
    /// ignored: the screen is gone, or `ticket` is not the outstanding one.
    pub fn complete(
        &mut self,
        ticket: u64,
        outcome: Result<CustomerRecoverPayload, AppError>,
    ) -> bool {
        if !self.mounted || self.phase != (SubmitPhase::Requesting { ticket }) {
            return false;
        }

        match outcome {
            Ok(payload) => match payload.first_error_message() {
                Some(message) => {
                    let message = non_blank_or_generic(message);
                    self.show_outcome(SubmitPhase::Failed, message);
                }
                None => self.show_outcome(SubmitPhase::Confirmed, String::new()),
            },
            Err(err) => self.show_outcome(SubmitPhase::Failed, err.display_message()),
        }
        true
    }

    /// Error text and visibility always change together.
    fn show_outcome(&mut self, phase: SubmitPhase, error: String) {
        self.phase = phase;
        self.error = error;
        self.visible = true;
    }

    /// What the modal shows, or `None` while it is hidden.
    pub fn modal(&self) -> Option<ModalContent> {
        if !self.visible {
            return None;
        }
        Some(if self.is_error() {
            ModalContent {
                is_error: true,
                title: ERROR_TITLE,
                message: self.error.clone(),
                button_label: RETRY_LABEL,
            }
        } else {
            ModalContent {
                is_error: false,
                title: SUCCESS_TITLE,
                message: SUCCESS_MESSAGE.to_string(),
                button_label: BACK_TO_LOGIN_LABEL,
            }
        })
    }

    /// Handle the modal button.
    pub fn dismiss(&mut self) -> DismissAction {
        if !self.visible {
            return DismissAction::None;
        }
        self.visible = false;

        match self.phase {
            SubmitPhase::Failed => {
                self.phase = SubmitPhase::Idle;
                self.error.clear();
                DismissAction::Retry
            }
            SubmitPhase::Confirmed => {
                self.phase = SubmitPhase::Idle;
                self.email.clear();
                DismissAction::NavigateToLogin
            }
            SubmitPhase::Idle | SubmitPhase::Requesting { .. } => {
                self.error.clear();
                DismissAction::None
            }
        }
    }

    /// Mark the screen as gone; later completions are dropped.
    pub fn unmount(&mut self) {
        self.mounted = false;
    }
}

/// Turn a failed server function call into the error the modal shows.
///
/// A structured `AppError` sent by the server is kept as is. Anything else
/// (transport failures, a panic message) becomes `Unavailable` with the
/// generic fallback text.
pub fn failure_from_server_fn(raw: &str) -> AppError {
    AppError::from_server_error(raw)
        .unwrap_or_else(|| AppError::unavailable(AppError::friendly_message(raw)))
}

fn non_blank_or_generic(message: &str) -> String {
    if message.trim().is_empty() {
        GENERIC_ERROR_MESSAGE.to_string()
    } else {
        message.to_string()
    }
}
