//! Axum server: routes, page handlers, and the chat proxy endpoint.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    Form, Router,
    extract::{Path, Query, Request, State},
    http::StatusCode,
    middleware::Next,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};
use serde::Deserialize;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::AppState;
use crate::backend::BackendClient;
use crate::config::AppConfig;
use crate::ui::chat::{Conversation, chat_content, message_bubble};
use crate::ui::pages::{
    gallery_content, gallery_error_content, landing_content, profile_content,
    profile_error_content,
};
use crate::ui::shell::html_shell;

/// Start the Axum server with the provided configuration.
pub async fn start_server(config: Arc<AppConfig>) -> anyhow::Result<()> {
    let backend = Arc::new(BackendClient::new(
        &config.backend.base_url,
        config.backend.request_timeout(),
    ));

    info!(
        name: "backend.config.loaded",
        base_url = %config.backend.base_url,
        "Backend configuration loaded"
    );

    let state = AppState { backend };

    let app = build_router(state, &config);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!(
        name: "server.started",
        address = %addr,
        "Server started"
    );

    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}

/// Build the application router.
///
/// Separate from [`start_server`] so tests can mount the router against a
/// mock backend without binding a listener.
pub fn build_router(state: AppState, config: &AppConfig) -> Router {
    // Router layer types change when a layer is conditional, so a disabled
    // timeout keeps the layer with an effectively unbounded duration.
    let timeout_duration = if config.resilience.timeout_disabled {
        Duration::from_secs(365 * 24 * 60 * 60)
    } else {
        Duration::from_secs(30)
    };

    Router::new()
        // HTML pages
        .route("/", get(landing_page))
        .route("/models", get(gallery_page))
        .route("/profile/{model}", get(profile_page))
        .route("/chat", get(chat_page))
        // API routes
        .route("/api/chat", post(api_chat))
        // Static assets
        .nest_service("/static", ServeDir::new("static"))
        .layer(axum::middleware::from_fn(
            move |req: Request, next: Next| {
                let duration = timeout_duration;
                async move {
                    match tokio::time::timeout(duration, next.run(req)).await {
                        Ok(res) => res,
                        Err(_) => {
                            (StatusCode::REQUEST_TIMEOUT, "Request timed out").into_response()
                        }
                    }
                }
            },
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// ─────────────────────────────────────────────────────────────────────────────
// HTML Page Handlers
// ─────────────────────────────────────────────────────────────────────────────

/// GET / - landing page.
async fn landing_page() -> Html<String> {
    Html(html_shell("Home", landing_content()))
}

/// GET /models - model gallery, one entry per profile.
async fn gallery_page(State(state): State<AppState>) -> Html<String> {
    let content = match state.backend.list_profiles().await {
        Ok(profiles) => gallery_content(&profiles),
        Err(e) => {
            tracing::error!(error = %e, "Failed to fetch profiles");
            gallery_error_content().to_string()
        }
    };

    Html(html_shell("Models", &content))
}

/// GET /profile/{model} - profile detail page.
async fn profile_page(State(state): State<AppState>, Path(model): Path<String>) -> Html<String> {
    let content = match state.backend.profile(&model).await {
        Ok(profile) => profile_content(&profile),
        Err(e) => {
            tracing::error!(model = %model, error = %e, "Failed to fetch profile");
            profile_error_content(&model)
        }
    };

    Html(html_shell("Profile", &content))
}

/// Query parameters for the chat page.
#[derive(Debug, Deserialize)]
struct ChatPageQuery {
    /// Selected model, if any.
    #[serde(default)]
    model: Option<String>,
}

/// GET /chat - chat page, optionally with a selected model.
///
/// Selecting a model triggers exactly one profile fetch and one history
/// fetch. A failed history load degrades to an empty conversation; a failed
/// profile load renders the fallback panel.
async fn chat_page(
    State(state): State<AppState>,
    Query(query): Query<ChatPageQuery>,
) -> Html<String> {
    let models = match state.backend.list_models().await {
        Ok(models) => models,
        Err(e) => {
            tracing::error!(error = %e, "Failed to fetch models");
            Vec::new()
        }
    };

    let conversation = match &query.model {
        None => None,
        Some(model) => match state.backend.profile(model).await {
            Ok(profile) => {
                let history = match state.backend.load_history(model).await {
                    Ok(history) => history,
                    Err(e) => {
                        tracing::error!(model = %model, error = %e, "Failed to fetch chat history");
                        Vec::new()
                    }
                };
                Some(Ok(Conversation { profile, history }))
            }
            Err(e) => {
                tracing::error!(model = %model, error = %e, "Failed to fetch profile");
                Some(Err(()))
            }
        },
    };

    let content = chat_content(
        &models,
        conversation.as_ref().map(|res| res.as_ref().map_err(|&()| ())),
    );
    Html(html_shell("Chat", &content))
}

// ─────────────────────────────────────────────────────────────────────────────
// API Handlers
// ─────────────────────────────────────────────────────────────────────────────

/// Form body for the chat proxy endpoint.
#[derive(Debug, Deserialize)]
struct SendMessageForm {
    /// Model the message is addressed to.
    model_name: String,
    /// Draft message text.
    message: String,
    /// Avatar URL of the selected profile, carried through so the reply
    /// bubble renders without a second profile fetch.
    #[serde(default)]
    avatar: Option<String>,
}

/// POST /api/chat - send a message and return the assistant reply bubble.
///
/// Blank messages are dropped without touching the backend. The user bubble
/// is appended client-side before the request fires, so the fragment only
/// carries the assistant entry.
async fn api_chat(State(state): State<AppState>, Form(form): Form<SendMessageForm>) -> Response {
    if form.message.trim().is_empty() {
        return StatusCode::NO_CONTENT.into_response();
    }

    let request_id = uuid::Uuid::new_v4().to_string();
    info!(
        request_id = %request_id,
        model = %form.model_name,
        message_length = form.message.len(),
        "Received chat message"
    );

    let reply = match state
        .backend
        .send_chat(&form.model_name, &form.message)
        .await
    {
        Ok(reply) => crate::backend::ChatMessage::assistant(reply),
        Err(e) => {
            tracing::error!(
                request_id = %request_id,
                model = %form.model_name,
                error = %e,
                "Chat request failed"
            );
            crate::backend::ChatMessage::assistant(
                "Something went wrong talking to the model. Please try again.",
            )
        }
    };

    let fragment = message_bubble(&form.model_name, form.avatar.as_deref(), &reply);
    Html(fragment).into_response()
}
