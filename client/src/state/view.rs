//! Per-page resource view state: fetched data, loading flag, inline error.
//!
//! DESIGN
//! ======
//! Every page fetches on mount and re-fetches after a successful mutation.
//! `reload_seq` is the refresh trigger: pages key their fetch effect on it,
//! and mutations call `invalidate` instead of patching the data locally.
//! `request_seq` numbers each fetch so a late answer to an older request
//! cannot overwrite a newer one.

#[cfg(test)]
#[path = "view_test.rs"]
mod view_test;

/// Fetched resource plus its request status.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ViewState<T> {
    pub data: Option<T>,
    pub loading: bool,
    pub error: Option<String>,
    pub reload_seq: u64,
    pub request_seq: u64,
}

impl<T> Default for ViewState<T> {
    fn default() -> Self {
        Self { data: None, loading: true, error: None, reload_seq: 0, request_seq: 0 }
    }
}

impl<T> ViewState<T> {
    /// Enter the loading state for a new fetch.
    ///
    /// The full-page loading indicator only shows before the first result;
    /// a refresh keeps the previous data on screen. Returns the ticket to
    /// hand back to `finish_request`.
    pub fn begin_load(&mut self) -> u64 {
        self.loading = self.data.is_none();
        self.error = None;
        self.request_seq = self.request_seq.wrapping_add(1);
        self.request_seq
    }

    /// Apply a fetch result. A failure keeps whatever data was already shown.
    pub fn finish(&mut self, result: Result<T, String>) {
        self.loading = false;
        match result {
            Ok(data) => {
                self.data = Some(data);
                self.error = None;
            }
            Err(message) => self.error = Some(message),
        }
    }

    /// Apply the result of the request issued with `ticket`, unless a newer
    /// request has started since. Returns whether the result was applied.
    pub fn finish_request(&mut self, ticket: u64, result: Result<T, String>) -> bool {
        if ticket != self.request_seq {
            return false;
        }
        self.finish(result);
        true
    }

    /// Request a re-fetch after a mutation.
    pub fn invalidate(&mut self) {
        self.reload_seq = self.reload_seq.wrapping_add(1);
    }
}
