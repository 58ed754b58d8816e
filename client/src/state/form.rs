//! Submission state for a single form.
//!
//! Only the triggering control is disabled while a request is in flight; a
//! second submit during that window is rejected rather than queued.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormState {
    pub submitting: bool,
    pub error: Option<String>,
}

impl FormState {
    /// Mark the form as submitting. Returns `false` if a submit is already in flight.
    pub fn try_begin(&mut self) -> bool {
        if self.submitting {
            return false;
        }
        self.submitting = true;
        self.error = None;
        true
    }

    pub fn succeed(&mut self) {
        self.submitting = false;
        self.error = None;
    }

    /// Request failed; keep the user's input and show `message`.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.submitting = false;
        self.error = Some(message.into());
    }

    /// Local validation failed before any request was sent.
    pub fn reject(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }
}
