//! ChatAI Web
//!
//! A server-rendered web client for a character-chat backend. The app
//! renders a gallery of AI model profiles, a profile detail view, and a
//! chat view that loads prior history and exchanges messages with the
//! backend REST API. All conversation state lives upstream; each page
//! fetches what it shows and discards it after rendering.
//!
//! # Architecture
//!
//! - **Server**: Axum HTTP server serving HTML pages and an HTMX fragment
//!   endpoint for sending messages
//! - **Backend client**: thin typed `reqwest` wrapper over the backend
//!   contract (`/models`, `/profiles`, `/history/load`, `/chat`)
//! - **UI**: server-rendered HTML + HTMX + Alpine, local assets only
//!
//! # Modules
//!
//! - [`backend`]: backend REST client and wire types
//! - [`config`]: layered application configuration
//! - [`server`]: routes and handlers
//! - [`ui`]: page and fragment rendering

// Allow pedantic clippy warnings that don't add value for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::missing_fields_in_debug)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::cargo_common_metadata)]
#![allow(clippy::multiple_crate_versions)]
#![allow(clippy::unused_async)]

pub mod backend;
pub mod config;
pub mod server;
pub mod ui;

use std::sync::Arc;

use backend::BackendClient;

/// Application state shared across all handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Client for the chat backend REST API.
    pub backend: Arc<BackendClient>,
}
