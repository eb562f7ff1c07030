//! Wire types for the chat backend API.
//!
//! These are display-oriented DTOs received verbatim from the backend and
//! held only for the duration of a single render.

use serde::{Deserialize, Serialize};

/// A selectable chat persona with display metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    /// Model name, as reported by `/models`.
    pub name: String,
    /// Avatar image URL, if the backend assigned one.
    #[serde(default)]
    pub profile_image: Option<String>,
    /// Free-form profile description.
    #[serde(default)]
    pub description: Option<String>,
    /// Sub-personas bundled in a multi-character profile.
    #[serde(default)]
    pub characters: Vec<Character>,
    /// Whether this profile bundles several named sub-personas.
    #[serde(rename = "IsMultiCharacter", default)]
    pub is_multi_character: bool,
}

/// A named sub-persona inside a multi-character profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Character {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub profile_image: Option<String>,
}

/// Role of a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
    System,
}

impl Role {
    /// Lowercase wire/CSS name for the role.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
            Role::System => "system",
        }
    }
}

/// A single entry in a conversation history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    #[must_use]
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    #[must_use]
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// Envelope returned by `POST /chat`.
///
/// The backend reports either a `response` or an `error`, never both.
#[derive(Debug, Deserialize)]
pub(crate) struct ChatEnvelope {
    #[serde(default)]
    pub response: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_deserializes_wire_names() {
        let json = r#"{
            "name": "llama3:8b",
            "profile_image": "https://example.com/a.png",
            "characters": [
                {"name": "Ava", "description": "A pilot", "profile_image": null}
            ],
            "IsMultiCharacter": false
        }"#;

        let profile: Profile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.name, "llama3:8b");
        assert!(!profile.is_multi_character);
        assert_eq!(profile.characters.len(), 1);
        assert_eq!(profile.characters[0].description, "A pilot");
        assert!(profile.description.is_none());
    }

    #[test]
    fn profile_tolerates_missing_optional_fields() {
        let profile: Profile = serde_json::from_str(r#"{"name": "mistral"}"#).unwrap();
        assert!(profile.profile_image.is_none());
        assert!(profile.characters.is_empty());
        assert!(!profile.is_multi_character);
    }

    #[test]
    fn roles_use_lowercase_wire_names() {
        let msg: ChatMessage =
            serde_json::from_str(r#"{"role": "assistant", "content": "hi"}"#).unwrap();
        assert_eq!(msg.role, Role::Assistant);
        assert_eq!(
            serde_json::to_string(&ChatMessage::user("hey")).unwrap(),
            r#"{"role":"user","content":"hey"}"#
        );
    }
}
