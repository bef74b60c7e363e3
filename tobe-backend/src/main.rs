use anyhow::Context;
use axum::{
    Router,
    extract::{DefaultBodyLimit, Json, State},
    http::header,
    response::{Html, IntoResponse},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tobe_grammar::{Classification, Classifier};
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};

static INDEX_HTML: &str = include_str!("../static/index.html");
static APP_JS: &str = include_str!("../static/app.js");

const DEFAULT_PORT: u16 = 8080;

/// Learners send one sentence at a time; anything bigger is refused before
/// it reaches the classifier.
const MAX_BODY_BYTES: usize = 16 * 1024;

#[derive(Debug, Deserialize)]
struct ValidateRequest {
    #[serde(default)]
    sentence: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct ValidateResponse {
    result: String,
}

/// The chat page checks the leading glyph to decide whether to offer
/// another round.
fn render(classification: Classification) -> String {
    if classification.is_valid() {
        format!("✅ {classification}")
    } else {
        format!("❌ {classification}")
    }
}

async fn validate(
    State(classifier): State<Arc<Classifier>>,
    Json(request): Json<ValidateRequest>,
) -> Json<ValidateResponse> {
    let classification = classifier.classify(&request.sentence);
    log::info!("{:?} -> {classification:?}", request.sentence);
    Json(ValidateResponse {
        result: render(classification),
    })
}

async fn app_js() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/javascript")], APP_JS)
}

fn app(classifier: Arc<Classifier>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
        .expose_headers(Any);

    Router::new()
        .route("/", get(|| async { Html(INDEX_HTML) }))
        .route("/static/app.js", get(app_js))
        .route("/validate", post(validate))
        .with_state(classifier)
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(
            ServiceBuilder::new()
                .layer(CompressionLayer::new())
                .layer(cors),
        )
}

fn port_from_env() -> anyhow::Result<u16> {
    match std::env::var("PORT") {
        Ok(port) => port
            .parse()
            .with_context(|| format!("PORT is not a valid port number: {port:?}")),
        Err(_) => Ok(DEFAULT_PORT),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let port = port_from_env()?;
    let classifier = Arc::new(Classifier::new());

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port))
        .await
        .with_context(|| format!("Failed to bind port {port}"))?;
    log::info!("Listening on port {port}");
    axum::serve(listener, app(classifier))
        .await
        .context("Server error")?;
    Ok(())
}
