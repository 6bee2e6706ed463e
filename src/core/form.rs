#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitPhase {
    Idle,
    Sending,
    /// Response arrived with `success: true`.
    Sent,
    /// Response arrived with `success: false`.
    Failed,
    /// The request itself failed (network error, bad response body).
    Errored,
}

impl SubmitPhase {
    /// Label shown while in this phase; `None` means the original label.
    pub fn label(self) -> Option<&'static str> {
        match self {
            SubmitPhase::Idle => None,
            SubmitPhase::Sending => Some("Sending..."),
            SubmitPhase::Sent => Some("Message Sent!"),
            SubmitPhase::Failed => Some("Failed. Try again"),
            SubmitPhase::Errored => Some("Error. Try email"),
        }
    }

    pub fn is_disabled(self) -> bool {
        matches!(self, SubmitPhase::Sending | SubmitPhase::Sent)
    }

    /// Whether this phase schedules a label revert back to Idle.
    pub fn reverts(self) -> bool {
        matches!(
            self,
            SubmitPhase::Sent | SubmitPhase::Failed | SubmitPhase::Errored
        )
    }

    /// Whether the revert also clears the form fields.
    pub fn clears_form(self) -> bool {
        self == SubmitPhase::Sent
    }

    /// Phase after a response with the given success flag.
    pub fn on_response(success: bool) -> SubmitPhase {
        if success {
            SubmitPhase::Sent
        } else {
            SubmitPhase::Failed
        }
    }
}
