//! # List view state
//!
//! Pure state shared by every entity view:
//!
//! - [`RequestSequence`] hands out [`Ticket`]s. Only the most recently issued
//!   ticket may apply its response; anything older settles as
//!   [`Completion::Stale`] and is dropped. The last *request* wins, not the last
//!   response.
//! - [`ViewState`] is what a view renders: loading, data, the empty notice, an
//!   error, or the role gate's refusal.
//! - [`BannerSlot`] holds the one transient banner a view shows. Every banner
//!   gets a fresh id, and a timer may only expire the id it was started for.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::error::{ApiError, ApiResult};

/// Text shown in place of a table with no rows.
pub const NO_DATA: &str = "No data available.";

/// Issues monotonically increasing request tickets for one view.
#[derive(Clone, Debug, Default)]
pub struct RequestSequence {
    latest: Arc<AtomicU64>,
}

/// A claim on the view's state for one request.
#[derive(Clone, Debug)]
pub struct Ticket {
    seq: u64,
    latest: Arc<AtomicU64>,
}

/// Outcome of settling a ticket.
#[derive(Debug)]
pub enum Completion<T> {
    Applied(T),
    /// A newer request was issued; the response is discarded.
    Stale,
    Failed(ApiError),
}

impl RequestSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a request. Every earlier ticket becomes stale.
    pub fn issue(&self) -> Ticket {
        let seq = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
        Ticket {
            seq,
            latest: Arc::clone(&self.latest),
        }
    }
}

impl Ticket {
    pub fn is_current(&self) -> bool {
        self.latest.load(Ordering::SeqCst) == self.seq
    }

    /// Decide what to do with a response that arrived for this ticket.
    pub fn settle<T>(&self, result: ApiResult<T>) -> Completion<T> {
        if !self.is_current() {
            tracing::debug!("Dropping stale response for request #{}", self.seq);
            return Completion::Stale;
        }
        match result {
            Ok(value) => Completion::Applied(value),
            Err(e) => Completion::Failed(e),
        }
    }
}

/// What a view currently renders.
#[derive(Clone, Debug, PartialEq)]
pub enum ViewState<T> {
    Idle,
    Loading,
    Ready(T),
    /// The request succeeded with no rows.
    Empty,
    Failed(String),
    /// The role gate refused; nothing was fetched.
    Denied(String),
}

impl<T> Default for ViewState<T> {
    fn default() -> Self {
        ViewState::Idle
    }
}

impl<T> ViewState<T> {
    /// Map a single-value result.
    pub fn from_result(result: ApiResult<T>) -> Self {
        match result {
            Ok(value) => ViewState::Ready(value),
            Err(e) => Self::from_error(&e),
        }
    }

    pub fn from_error(error: &ApiError) -> Self {
        if error.is_unauthorized() {
            ViewState::Denied(error.user_message())
        } else {
            ViewState::Failed(error.user_message())
        }
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            ViewState::Ready(value) => Some(value),
            _ => None,
        }
    }

    /// Text to render instead of data, if any.
    pub fn notice(&self) -> Option<&str> {
        match self {
            ViewState::Empty => Some(NO_DATA),
            ViewState::Failed(message) | ViewState::Denied(message) => Some(message),
            ViewState::Idle | ViewState::Loading | ViewState::Ready(_) => None,
        }
    }
}

impl<T> ViewState<Vec<T>> {
    /// Map a list result; an empty list becomes [`ViewState::Empty`].
    pub fn from_list(result: ApiResult<Vec<T>>) -> Self {
        match result {
            Ok(items) if items.is_empty() => ViewState::Empty,
            other => Self::from_result(other),
        }
    }

    /// Rows to render; empty unless the list is ready.
    pub fn rows(&self) -> &[T] {
        self.value().map(Vec::as_slice).unwrap_or(&[])
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Success,
    Error,
}

impl Tone {
    pub fn class(self) -> &'static str {
        match self {
            Tone::Success => "banner banner-success",
            Tone::Error => "banner banner-error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Banner {
    pub id: u64,
    pub tone: Tone,
    pub text: String,
}

/// The single transient banner of a view.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BannerSlot {
    current: Option<Banner>,
    next_id: u64,
}

impl BannerSlot {
    /// Replace the current banner. Returns the id its timer must expire.
    pub fn show(&mut self, tone: Tone, text: impl Into<String>) -> u64 {
        self.next_id += 1;
        self.current = Some(Banner {
            id: self.next_id,
            tone,
            text: text.into(),
        });
        self.next_id
    }

    pub fn success(&mut self, text: impl Into<String>) -> u64 {
        self.show(Tone::Success, text)
    }

    pub fn error(&mut self, text: impl Into<String>) -> u64 {
        self.show(Tone::Error, text)
    }

    /// Show `error`'s banner text and log it.
    pub fn failure(&mut self, error: &ApiError) -> u64 {
        if error.is_unauthorized() {
            tracing::debug!("{}", error);
        } else {
            tracing::warn!("{}", error);
        }
        self.error(error.user_message())
    }

    pub fn current(&self) -> Option<&Banner> {
        self.current.as_ref()
    }

    /// Clear the banner only if it is still the one with `id`.
    pub fn expire(&mut self, id: u64) -> bool {
        if self.current.as_ref().is_some_and(|b| b.id == id) {
            self.current = None;
            true
        } else {
            false
        }
    }

    pub fn dismiss(&mut self) {
        self.current = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roles::{Access, UserType};

    #[test]
    fn test_older_request_arriving_last_is_dropped() {
        let sequence = RequestSequence::new();
        let mut shown: Vec<&str> = Vec::new();

        let filter_a = sequence.issue();
        let filter_ab = sequence.issue();

        // "AB" answers first
        if let Completion::Applied(rows) = filter_ab.settle(Ok(vec!["AB row"])) {
            shown = rows;
        }
        // "A" answers last and must not overwrite
        let late = filter_a.settle(Ok(vec!["A row", "AB row"]));
        assert!(matches!(late, Completion::Stale));
        assert_eq!(shown, vec!["AB row"]);
    }

    #[test]
    fn test_stale_failure_is_not_reported() {
        let sequence = RequestSequence::new();
        let old = sequence.issue();
        let _new = sequence.issue();
        let settled: Completion<()> = old.settle(Err(ApiError::Malformed("x".into())));
        assert!(matches!(settled, Completion::Stale));
    }

    #[test]
    fn test_cancel_invalidates_outstanding() {
        let sequence = RequestSequence::new();
        let ticket = sequence.issue();
        assert!(ticket.is_current());
        sequence.cancel();
        assert!(!ticket.is_current());
    }

    #[test]
    fn test_empty_list_is_not_an_error() {
        let state: ViewState<Vec<u32>> = ViewState::from_list(Ok(Vec::new()));
        assert_eq!(state, ViewState::Empty);
        assert_eq!(state.notice(), Some(NO_DATA));
        assert!(state.rows().is_empty());
    }

    #[test]
    fn test_gate_refusal_and_failure_differ() {
        let denied: ViewState<Vec<u32>> =
            ViewState::from_list(Err(ApiError::Unauthorized(Access::Kind(UserType::Admin))));
        assert!(matches!(denied, ViewState::Denied(_)));

        let failed: ViewState<Vec<u32>> =
            ViewState::from_list(Err(ApiError::Malformed("not a list".into())));
        assert!(matches!(failed, ViewState::Failed(_)));
        assert_ne!(failed.notice(), Some(NO_DATA));
    }

    #[test]
    fn test_old_timer_does_not_clear_newer_banner() {
        let mut slot = BannerSlot::default();
        let first = slot.success("Issue created");
        let second = slot.error("Failed to delete");

        assert!(!slot.expire(first));
        assert_eq!(slot.current().map(|b| b.text.as_str()), Some("Failed to delete"));

        assert!(slot.expire(second));
        assert!(slot.current().is_none());
    }

    #[test]
    fn test_dismiss() {
        let mut slot = BannerSlot::default();
        let id = slot.failure(&ApiError::Status {
            status: 403,
            message: String::new(),
        });
        assert_eq!(slot.current().map(|b| b.tone), Some(Tone::Error));
        slot.dismiss();
        assert!(!slot.expire(id));
    }
}
