//! Server-rendered UI.
//!
//! Pages are plain HTML strings with HTMX attributes for interactivity and
//! Alpine for the small bits of local state (disclosure toggles, the message
//! draft). No templating engine: content functions compose into
//! [`shell::html_shell`].
//!
//! - [`shell`]: outer document (nav, main slot)
//! - [`pages`]: landing, model gallery, profile detail
//! - [`chat`]: chat panel, sidebar, message bubbles
//! - [`markup`]: chat message text to HTML

pub mod chat;
pub mod markup;
pub mod pages;
pub mod shell;

/// Avatar URL with the bundled fallback.
#[must_use]
pub fn avatar_url(profile_image: Option<&str>) -> &str {
    profile_image.unwrap_or("/static/default-avatar.svg")
}
