//! # API crate: the Panchayat portal client
//!
//! Everything the portal does that is not rendering lives here, so it can be
//! tested without a browser. The `ui` crate renders what this crate computes.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`transport`] | `Transport` seam, request builder, `reqwest` transport |
//! | [`envelope`] | Normalises `{statusCode, message, data}`, bare arrays and bare objects into one `Result` |
//! | [`client`] | `PortalClient`: generic verbs with the live bearer token |
//! | [`endpoints`] | Typed calls per audience (citizen, employee, agency, admin, public) |
//! | [`session`] | `SessionStore`: the persisted, observable identity |
//! | [`roles`] | User types, staff roles and the client-side gates |
//! | [`nav`] | Which menu entries an identity sees |
//! | [`auth`] | Login, logout and the two-step registration form |
//! | [`models`] | Entity records, drafts and the in-memory filters over them |
//! | [`view`] | Request sequencing, view state and the transient banner |
//! | [`query`] | Sorting and substring/range helpers shared by the filters |
//! | [`documents`] | Base64 PDF payload codec |
//! | [`error`] | `ApiError` and its banner text |
//!
//! ## Flow of a list view
//!
//! 1. The view checks its [`Access`] against the session [`Identity`]
//!    ([`gated`]). A mismatch never reaches the network.
//! 2. It takes a [`view::Ticket`] and calls an endpoint.
//! 3. The reply is settled against the ticket. A stale reply is dropped; a
//!    current one becomes the [`view::ViewState`].
//! 4. Mutations send one request and then reload the list.

pub mod auth;
pub mod client;
pub mod documents;
pub mod endpoints;
pub mod envelope;
pub mod error;
pub mod models;
pub mod nav;
pub mod query;
pub mod roles;
pub mod session;
pub mod transport;
pub mod view;

pub use client::{Portal, PortalClient};
pub use error::{ApiError, ApiResult};
pub use nav::{sections, Section};
pub use roles::{gated, Access, Role, UserType};
pub use session::{Identity, SessionStore};
pub use transport::{HttpTransport, Transport};
pub use view::{BannerSlot, Completion, RequestSequence, ViewState};

pub use store::{PortalConfig, SessionStorage};
