//! Page content for the landing, gallery, and profile views.

use crate::backend::Profile;

use super::avatar_url;
use super::markup::escape;

/// Landing page content.
#[must_use]
pub fn landing_content() -> &'static str {
    r#"
    <div class="flex flex-col items-center justify-center min-h-[92vh] text-center">
        <h1 class="text-4xl font-bold mb-4">Welcome to the Chat App</h1>
        <p class="text-lg text-zinc-400 mb-6">Select a model and start chatting!</p>
        <a href="/models" class="px-6 py-2 bg-blue-600 rounded-md hover:bg-blue-700">View Models</a>
    </div>
    "#
}

/// Model gallery content: one entry per profile.
#[must_use]
pub fn gallery_content(profiles: &[Profile]) -> String {
    let mut entries = String::new();

    if profiles.is_empty() {
        entries.push_str(r#"<p class="text-zinc-400">No models installed.</p>"#);
    } else {
        entries.push_str("<ul>");
        for profile in profiles {
            let name = escape(&profile.name);
            let badge = if profile.is_multi_character {
                r#" <span class="ml-2 px-2 py-0.5 text-xs bg-purple-900 rounded-full">multi-character</span>"#
            } else {
                ""
            };
            entries.push_str(&format!(
                r#"<li class="mb-2 model-entry">
                    <a href="/profile/{href}" class="text-blue-400 hover:underline flex items-center gap-3 w-max">
                        <img src="{avatar}" alt="{name}" class="w-10 h-10 rounded-full border-2 border-zinc-700">
                        <span>{name}</span>{badge}
                    </a>
                </li>"#,
                href = escape(&profile.name.replace('/', "-")),
                avatar = escape(avatar_url(profile.profile_image.as_deref())),
            ));
        }
        entries.push_str("</ul>");
    }

    format!(
        r#"
    <div class="p-6 min-h-[92vh]">
        <h2 class="text-2xl font-bold mb-4">Available Models</h2>
        {entries}
    </div>
    "#
    )
}

/// Gallery fallback when the backend is unreachable.
#[must_use]
pub fn gallery_error_content() -> &'static str {
    r#"
    <div class="p-6 min-h-[92vh]">
        <h2 class="text-2xl font-bold mb-4">Available Models</h2>
        <p class="text-zinc-400">Could not load models. Is the backend running?</p>
    </div>
    "#
}

/// Profile detail content.
#[must_use]
pub fn profile_content(profile: &Profile) -> String {
    let name = escape(&profile.name);

    let description = profile.description.as_deref().map_or_else(String::new, |d| {
        format!(r#"<p class="text-zinc-400 mb-4">{}</p>"#, escape(d))
    });

    let body = if profile.is_multi_character {
        let mut list = String::from(
            r#"<h3 class="text-lg font-bold">Characters:</h3><ul>"#,
        );
        for character in &profile.characters {
            list.push_str(&format!(
                r#"<li class="text-zinc-300 flex items-center w-max mb-4 mt-1 character-entry">
                    <img src="{avatar}" alt="{char_name}" class="w-12 h-12 rounded-full mr-2">
                    <div>{char_name} - {desc}</div>
                </li>"#,
                avatar = escape(avatar_url(character.profile_image.as_deref())),
                char_name = escape(&character.name),
                desc = escape(&character.description),
            ));
        }
        list.push_str("</ul>");
        list
    } else {
        format!(
            r#"<img src="{avatar}" alt="{name}" class="w-24 h-24 rounded-full mb-4">"#,
            avatar = escape(avatar_url(profile.profile_image.as_deref())),
        )
    };

    format!(
        r#"
    <div class="p-6 min-h-[92vh]">
        <h2 class="text-2xl font-bold mb-4">{name}</h2>
        {description}
        {body}
        <a href="/chat?model={href}" class="inline-block mt-4 px-6 py-2 bg-blue-600 rounded-md hover:bg-blue-700">Start Chat</a>
    </div>
    "#,
        href = escape(&profile.name),
    )
}

/// Profile fallback when the model is unknown or the backend failed.
#[must_use]
pub fn profile_error_content(model: &str) -> String {
    format!(
        r#"
    <div class="p-6 min-h-[92vh]">
        <h2 class="text-2xl font-bold mb-4">{}</h2>
        <p class="text-zinc-400">Could not load this profile.</p>
        <a href="/models" class="inline-block mt-4 px-6 py-2 bg-blue-600 rounded-md hover:bg-blue-700">Back to Models</a>
    </div>
    "#,
        escape(model)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::Character;

    fn profile(name: &str) -> Profile {
        Profile {
            name: name.to_string(),
            profile_image: None,
            description: None,
            characters: Vec::new(),
            is_multi_character: false,
        }
    }

    #[test]
    fn gallery_renders_one_entry_per_profile() {
        let profiles = vec![profile("llama3"), profile("mistral"), profile("phi3")];
        let html = gallery_content(&profiles);
        assert_eq!(html.matches("model-entry").count(), 3);
        assert!(html.contains("llama3"));
        assert!(html.contains("mistral"));
        assert!(html.contains("phi3"));
    }

    #[test]
    fn gallery_escapes_model_names() {
        let html = gallery_content(&[profile("<script>")]);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn gallery_links_use_sanitized_names() {
        let html = gallery_content(&[profile("library/llama3")]);
        assert!(html.contains(r#"href="/profile/library-llama3""#));
    }

    #[test]
    fn multi_character_profile_lists_characters() {
        let mut p = profile("storyteller");
        p.is_multi_character = true;
        p.characters = vec![
            Character {
                name: "Ava".to_string(),
                description: "A pilot".to_string(),
                profile_image: None,
            },
            Character {
                name: "Bren".to_string(),
                description: "A smuggler".to_string(),
                profile_image: None,
            },
        ];

        let html = profile_content(&p);
        assert_eq!(html.matches("character-entry").count(), 2);
        assert!(html.contains("Ava - A pilot"));
        assert!(html.contains("Bren - A smuggler"));
    }

    #[test]
    fn single_character_profile_shows_avatar_only() {
        let html = profile_content(&profile("llama3"));
        assert!(!html.contains("Characters:"));
        assert!(html.contains("/static/default-avatar.svg"));
    }
}
