//! Chat view: model sidebar, conversation panel, and message bubbles.

use crate::backend::{ChatMessage, Profile, Role};

use super::avatar_url;
use super::markup::{escape, render_message_html};

/// A selected conversation: the profile plus its loaded history.
#[derive(Debug)]
pub struct Conversation {
    pub profile: Profile,
    pub history: Vec<ChatMessage>,
}

/// Chat page content.
///
/// Without a selected model only the sidebar and an empty-state prompt are
/// rendered. `conversation` is `Err(())` when a model was selected but its
/// profile or history could not be fetched.
#[must_use]
pub fn chat_content(models: &[String], conversation: Option<Result<&Conversation, ()>>) -> String {
    let panel = match conversation {
        None => r#"<p class="m-auto text-center text-zinc-400">Select a model to start chatting</p>"#.to_string(),
        Some(Err(())) => r#"<p class="m-auto text-center text-zinc-400">Could not load this conversation.</p>"#.to_string(),
        Some(Ok(conv)) => chat_panel(conv),
    };

    format!(
        r#"
    <div class="flex h-[92vh] bg-zinc-900 text-white relative">
        {sidebar}
        <div class="flex flex-col w-full p-4">
            {panel}
        </div>
    </div>
    "#,
        sidebar = sidebar(models),
    )
}

/// Sidebar listing the available models.
fn sidebar(models: &[String]) -> String {
    let mut items = String::new();
    for model in models {
        items.push_str(&format!(
            r#"<a href="/chat?model={href}" class="block w-full text-left p-2 rounded-md hover:bg-zinc-700 whitespace-nowrap sidebar-model">{name}</a>"#,
            href = escape(model),
            name = escape(model),
        ));
    }

    format!(
        r#"<div class="max-w-1/4 h-full overflow-y-auto border-r border-zinc-700 bg-zinc-900 min-w-max p-2" hx-boost="true">
            <h2 class="text-lg font-bold mb-2">Available Models</h2>
            {items}
        </div>"#
    )
}

/// The conversation panel: header, history, and input form.
fn chat_panel(conv: &Conversation) -> String {
    let profile = &conv.profile;
    let name = escape(&profile.name);
    let avatar = escape(avatar_url(profile.profile_image.as_deref()));

    let characters = if profile.is_multi_character {
        let mut spans = String::new();
        for character in &profile.characters {
            spans.push_str(&format!(
                r#"<span class="block m-1">{} - ({})</span>"#,
                escape(&character.name),
                escape(&character.description),
            ));
        }
        format!(
            r#"<p class="mb-2 text-sm" x-show="charactersOpen">Characters: {spans}</p>"#
        )
    } else {
        String::new()
    };

    let mut messages = String::new();
    for msg in &conv.history {
        messages.push_str(&message_bubble(&profile.name, profile.profile_image.as_deref(), msg));
    }

    format!(
        r#"
        <div x-data="{{ charactersOpen: false }}">
            <div class="flex items-center mb-4 cursor-pointer" x-on:click="charactersOpen = !charactersOpen">
                <img src="{avatar}" alt="{name}" class="w-12 h-12 rounded-full mr-3">
                <h2 class="text-lg font-bold whitespace-nowrap">{name}</h2>
            </div>
            {characters}
        </div>

        <div id="chat-messages" class="flex-1 overflow-y-auto border border-zinc-700 rounded-md p-3 mb-3">
            {messages}
        </div>

        <form
            id="chat-form"
            class="flex items-center"
            hx-post="/api/chat"
            hx-trigger="submit"
            hx-swap="none"
            hx-on--before-request="window.chatBeforeSend(this)"
            hx-on--after-request="window.chatAfterSend(this, event)"
            x-data="{{ message: '' }}"
        >
            <input type="hidden" name="model_name" value="{name}">
            <input type="hidden" name="avatar" value="{avatar}">

            <textarea
                name="message"
                placeholder="Type a message..."
                class="w-full p-2 bg-zinc-800 rounded-md focus:outline-none resize-none"
                rows="1"
                x-model="message"
                x-on:keydown.enter.prevent="if (!$event.shiftKey && message.trim()) {{ $el.form.requestSubmit() }}"
                x-on:input="$el.rows = Math.min(2, Math.max(1, $el.value.split('\n').length))"
                required
            ></textarea>
            <button
                type="submit"
                class="ml-2 px-4 py-2 bg-blue-600 rounded-md hover:bg-blue-700"
                x-bind:disabled="!message.trim()"
            >Send</button>
        </form>
    "#
    )
}

/// A single message bubble.
///
/// User messages align right and carry no avatar; everything else renders
/// left under the model's name, matching how the history is displayed.
#[must_use]
pub fn message_bubble(model_name: &str, model_avatar: Option<&str>, msg: &ChatMessage) -> String {
    let is_user = msg.role == Role::User;
    let (align, bg) = if is_user {
        ("text-right", "bg-zinc-700")
    } else {
        ("text-left", "bg-zinc-800")
    };

    let speaker = if is_user {
        "You".to_string()
    } else {
        format!(
            r#"<img src="{}" alt="{}" class="w-4 h-4 rounded-full inline-block mr-3">{}"#,
            escape(avatar_url(model_avatar)),
            escape(model_name),
            escape(model_name),
        )
    };

    format!(
        r#"<div class="mb-2 {align} chat-msg" data-role="{role}">
            <span class="inline-block px-3 py-1 mb-2">{speaker}</span><br>
            <span class="inline-block px-3 py-2 rounded-md {bg} sm:max-w-3/4 max-w-full">{body}</span>
        </div>"#,
        role = msg.role.as_str(),
        body = render_message_html(&msg.content),
    )
}
