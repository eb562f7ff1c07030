//! Outer HTML document shell.

/// Generate the HTML shell for the application.
///
/// All scripts are local (`/static/vendor`) so the app stays
/// CDN-free and inspectable.
#[must_use]
pub fn html_shell(title: &str, content: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en" class="dark">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <meta name="description" content="Character chat client">
    <title>{title} - ChatAI</title>

    <!-- HTMX and Alpine (local) -->
    <script src="/static/vendor/htmx-2.0.8.min.js"></script>
    <script defer src="/static/vendor/alpine.min.js"></script>

    <!-- Application bundle -->
    <script type="module" src="/static/main.js"></script>
    <link rel="stylesheet" href="/static/app.css">
</head>
<body class="min-h-screen bg-zinc-900 text-white antialiased">
    <div id="app-shell" class="flex flex-col min-h-screen">
        <nav class="p-4 h-[8vh] border-b border-zinc-700 flex items-center justify-between bg-zinc-900/80 backdrop-blur-md">
            <a href="/" class="text-xl font-bold flex items-center gap-2">
                <span class="bg-gradient-to-r from-blue-500 to-purple-500 text-transparent bg-clip-text">ChatAI</span>
                <div class="w-2 h-2 bg-emerald-500 rounded-full animate-pulse"></div>
            </a>
            <div class="flex gap-4" hx-boost="true">
                <a href="/models" class="hover:text-blue-400 transition-colors">Models</a>
                <a href="/chat" class="px-3 py-1 bg-zinc-800 rounded-md hover:bg-zinc-700 transition-colors">
                    Start Chatting
                </a>
            </div>
        </nav>

        <main id="app" class="flex-1 flex flex-col">
            {content}
        </main>
    </div>
</body>
</html>"#
    )
}
