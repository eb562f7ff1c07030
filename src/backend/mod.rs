//! Chat backend REST client.
//!
//! The backend owns all models, profiles, and conversation history; this
//! crate only fetches and renders. Everything here is a thin typed wrapper
//! over four endpoints:
//!
//! - `GET /models` - installed model names
//! - `GET /profiles` and `GET /profiles/{name}` - display profiles
//! - `GET /history/load?model_name=` - prior conversation history
//! - `POST /chat` - send a prompt, receive the assistant reply

mod client;
mod types;

pub use client::{BackendClient, BackendError};
pub use types::{ChatMessage, Character, Profile, Role};
