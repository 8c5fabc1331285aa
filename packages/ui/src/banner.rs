//! Transient success/error banner.
//!
//! Each view owns one [`Banner`]. Showing a message arms a timer spawned in the
//! calling component's scope, so it dies with the view. The timer expires only
//! the banner it was started for.

use std::time::Duration;

use api::view::BannerSlot;
use api::ApiError;
use dioxus::prelude::*;

use crate::auth::use_config;
use crate::storage::sleep;

#[derive(Clone, Copy, PartialEq)]
pub struct Banner {
    slot: Signal<BannerSlot>,
    timeout: Duration,
}

pub fn use_banner() -> Banner {
    let timeout = Duration::from_millis(use_config().ui.banner_timeout_ms);
    let slot = use_signal(BannerSlot::default);
    Banner { slot, timeout }
}

impl Banner {
    pub fn success(&mut self, text: impl Into<String>) {
        let id = self.slot.write().success(text);
        self.arm(id);
    }

    pub fn error(&mut self, text: impl Into<String>) {
        let id = self.slot.write().error(text);
        self.arm(id);
    }

    pub fn failure(&mut self, error: &ApiError) {
        let id = self.slot.write().failure(error);
        self.arm(id);
    }

    pub fn dismiss(&mut self) {
        self.slot.write().dismiss();
    }

    fn arm(&self, id: u64) {
        let mut slot = self.slot;
        let timeout = self.timeout;
        spawn(async move {
            sleep(timeout).await;
            slot.write().expire(id);
        });
    }
}

/// Renders the current banner, if any. Click to dismiss.
#[component]
pub fn BannerView(banner: Banner) -> Element {
    let mut banner = banner;
    let current = banner.slot.read().current().cloned();
    let Some(current) = current else {
        return rsx! {};
    };

    rsx! {
        div {
            class: current.tone.class(),
            role: "alert",
            onclick: move |_| banner.dismiss(),
            "{current.text}"
        }
    }
}
