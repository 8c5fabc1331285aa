//! The fetch → render → mutate → refetch cycle every entity view shares.
//!
//! [`use_records`] gates on the session, issues the fetch through a
//! [`RequestSequence`] so only the newest request lands, and keeps the result
//! in a [`ViewState`] signal. Signals read synchronously inside the `fetch`
//! closure (filters) are tracked: changing one re-issues the request.

use std::future::Future;

use api::view::{Completion, NO_DATA};
use api::{gated, Access, ApiResult, Portal, RequestSequence, ViewState};
use dioxus::prelude::*;

use crate::auth::{use_client, use_session};
use crate::banner::Banner;

pub struct Records<T: 'static> {
    state: Signal<ViewState<Vec<T>>>,
    generation: Signal<u64>,
}

impl<T> Clone for Records<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Records<T> {}

impl<T> PartialEq for Records<T> {
    fn eq(&self, other: &Self) -> bool {
        self.state == other.state && self.generation == other.generation
    }
}

impl<T: Clone + 'static> Records<T> {
    pub fn rows(&self) -> Vec<T> {
        self.state.read().rows().to_vec()
    }

    /// Status text to show instead of the table, if any.
    pub fn notice(&self) -> Option<String> {
        let state = self.state.read();
        match &*state {
            ViewState::Idle | ViewState::Loading => Some("Loading...".to_string()),
            other => other.notice().map(str::to_string),
        }
    }

    /// Fetch again with the current filters.
    pub fn reload(&mut self) {
        *self.generation.write() += 1;
    }

    /// Run one mutation, report it on the banner, then reload whatever the
    /// outcome.
    pub fn mutate<Fut>(&self, mut banner: Banner, success: impl Into<String> + 'static, request: Fut)
    where
        Fut: Future<Output = ApiResult<()>> + 'static,
    {
        let mut records = *self;
        spawn(async move {
            match request.await {
                Ok(()) => banner.success(success),
                Err(e) => banner.failure(&e),
            }
            records.reload();
        });
    }
}

/// Fetch a list for a view guarded by `access`.
///
/// When the session does not satisfy `access`, `fetch`'s future is never
/// polled and the state becomes [`ViewState::Denied`].
pub fn use_records<T, F, Fut>(access: Access, banner: Banner, fetch: F) -> Records<T>
where
    T: 'static,
    F: Fn(Portal) -> Fut + 'static,
    Fut: Future<Output = ApiResult<Vec<T>>> + 'static,
{
    let client = use_client();
    let identity = use_session();
    let mut state = use_signal(ViewState::default);
    let generation = use_signal(|| 0u64);
    let sequence = use_hook(RequestSequence::new);

    let _loader = use_resource(move || {
        let _ = generation();
        let who = identity();
        let ticket = sequence.issue();
        let request = fetch(client.clone());
        async move {
            let mut banner = banner;
            state.set(ViewState::Loading);
            let result = gated(&who, access, || request).await;
            match ticket.settle(result) {
                Completion::Applied(rows) => state.set(ViewState::from_list(Ok(rows))),
                Completion::Stale => {}
                Completion::Failed(e) => {
                    if !e.is_unauthorized() {
                        banner.failure(&e);
                    }
                    state.set(ViewState::from_error(&e));
                }
            }
        }
    });

    Records { state, generation }
}

/// A single record (profiles). Same gating and sequencing as [`use_records`].
pub fn use_record<T, F, Fut>(access: Access, fetch: F) -> Signal<ViewState<T>>
where
    T: 'static,
    F: Fn(Portal) -> Fut + 'static,
    Fut: Future<Output = ApiResult<T>> + 'static,
{
    let client = use_client();
    let identity = use_session();
    let mut state = use_signal(ViewState::default);
    let sequence = use_hook(RequestSequence::new);

    let _loader = use_resource(move || {
        let who = identity();
        let ticket = sequence.issue();
        let request = fetch(client.clone());
        async move {
            state.set(ViewState::Loading);
            let result = gated(&who, access, || request).await;
            match ticket.settle(result) {
                Completion::Applied(value) => state.set(ViewState::Ready(value)),
                Completion::Stale => {}
                Completion::Failed(e) => state.set(ViewState::from_error(&e)),
            }
        }
    });

    state
}

/// Status line shown in place of a table.
#[component]
pub fn Notice(text: String) -> Element {
    let class = if text == NO_DATA {
        "notice notice-empty"
    } else {
        "notice"
    };
    rsx! {
        p { class: "{class}", "{text}" }
    }
}
