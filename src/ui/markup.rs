//! Chat message text rendering.
//!
//! Assistant output is close to plain text with two light conventions:
//! triple-backtick fenced code blocks and `*asides*` the models use for
//! stage directions. Rendering splits a message into those segments and
//! escapes everything on the way out.
//!
//! - ` ``` ` fences become a code block with a copy button (fence contents
//!   trimmed, backticks stripped).
//! - `*text*` becomes a muted inline span.
//! - Newlines become `<br>`.
//! - An unterminated fence is left as ordinary text.

const FENCE: &str = "```";

/// Render a chat message body to HTML.
#[must_use]
pub fn render_message_html(content: &str) -> String {
    let mut out = String::with_capacity(content.len() + 64);
    let mut rest = content;

    while let Some(open) = rest.find(FENCE) {
        let after_open = &rest[open + FENCE.len()..];
        let Some(close) = after_open.find(FENCE) else {
            // Unterminated fence: everything left is ordinary text.
            break;
        };

        render_text(&rest[..open], &mut out);
        render_code_block(after_open[..close].trim(), &mut out);
        rest = &after_open[close + FENCE.len()..];
    }

    render_text(rest, &mut out);
    out
}

/// Render plain text with line breaks and `*emphasis*` spans.
fn render_text(text: &str, out: &mut String) {
    if text.is_empty() {
        return;
    }

    for (i, line) in text.split('\n').enumerate() {
        if i > 0 {
            out.push_str("<br>");
        }
        render_line(line, out);
    }
}

fn render_line(line: &str, out: &mut String) {
    let mut rest = line;

    while let Some(open) = rest.find('*') {
        let after_open = &rest[open + 1..];
        // Emphasis needs a non-empty body and a closing star on this line.
        let Some(close) = after_open.find('*') else { break };
        if close == 0 {
            escape_into(&rest[..open + 1], out);
            rest = after_open;
            continue;
        }

        escape_into(&rest[..open], out);
        out.push_str(r#"<span class="msg-aside">"#);
        escape_into(&after_open[..close], out);
        out.push_str("</span>");
        rest = &after_open[close + 1..];
    }

    escape_into(rest, out);
}

fn render_code_block(code: &str, out: &mut String) {
    out.push_str(r#"<div class="code-block">"#);
    out.push_str(r#"<button type="button" class="copy-btn">Copy</button>"#);
    out.push_str("<pre><code>");
    escape_into(code, out);
    out.push_str("</code></pre></div>");
}

/// HTML-escape `text`, appending to `out`.
pub fn escape_into(text: &str, out: &mut String) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
}

/// HTML-escape `text` into a new string.
#[must_use]
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    escape_into(text, &mut out);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_passes_through_escaped() {
        assert_eq!(render_message_html("hello"), "hello");
        assert_eq!(render_message_html("a < b & c"), "a &lt; b &amp; c");
    }

    #[test]
    fn newlines_become_breaks() {
        assert_eq!(render_message_html("one\ntwo"), "one<br>two");
    }

    #[test]
    fn fenced_code_becomes_code_block() {
        let html = render_message_html("before\n```\nlet x = 1;\n```\nafter");
        assert!(html.contains("<pre><code>let x = 1;</code></pre>"));
        assert!(html.contains(r#"class="copy-btn""#));
        assert!(html.starts_with("before<br>"));
        assert!(html.ends_with("<br>after"));
    }

    #[test]
    fn code_content_is_escaped_and_trimmed() {
        let html = render_message_html("```\n  if a < b {}\n```");
        assert!(html.contains("<code>if a &lt; b {}</code>"));
    }

    #[test]
    fn unterminated_fence_is_plain_text() {
        let html = render_message_html("```rust\nno closing fence");
        assert!(!html.contains("<pre>"));
        assert!(html.contains("rust<br>no closing fence"));
    }

    #[test]
    fn emphasis_renders_as_aside_span() {
        assert_eq!(
            render_message_html("she *smiles* warmly"),
            r#"she <span class="msg-aside">smiles</span> warmly"#
        );
    }

    #[test]
    fn empty_emphasis_is_literal() {
        assert_eq!(render_message_html("a ** b"), "a ** b");
    }

    #[test]
    fn lone_star_is_literal() {
        assert_eq!(render_message_html("2 * 3"), "2 * 3");
    }

    #[test]
    fn emphasis_does_not_cross_lines() {
        let html = render_message_html("*open\nclose*");
        assert!(!html.contains("msg-aside"));
        assert_eq!(html, "*open<br>close*");
    }
}
