use std::{net::SocketAddr, sync::Arc, time::Instant};

use anyhow::{Context, Result};
use axum::{
    Json, Router,
    extract::State,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;
use tracing::info;

use crate::{
    config::DialectOptions,
    phonology::{g2p::Lexicon, respell::respell},
    scoring::{self, PronunciationReport},
};

#[derive(Clone)]
struct AppState {
    lexicon: Arc<Lexicon>,
}

#[derive(Debug, Deserialize)]
struct PronounceRequest {
    text: String,
    #[serde(default)]
    options: Option<DialectOptions>,
    #[serde(default = "default_respell")]
    respell: bool,
}

const fn default_respell() -> bool {
    true
}

#[derive(Serialize)]
struct TokenBreakdown {
    token: String,
    baseline_ipa: String,
    dialect_ipa: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    respelling: Option<String>,
}

#[derive(Serialize)]
struct PronounceResponse {
    text: String,
    tokens: Vec<TokenBreakdown>,
}

#[derive(Debug, Deserialize)]
struct ScoreRequest {
    expected_text: String,
    heard_text: String,
    #[serde(default)]
    options: Option<DialectOptions>,
}

#[derive(Serialize)]
struct ScoreResponse {
    #[serde(flatten)]
    report: PronunciationReport,
    duration_ms: u128,
}

#[derive(Serialize)]
struct ServiceDescriptor {
    name: &'static str,
    health: &'static str,
    pronounce: &'static str,
    score: &'static str,
}

pub async fn serve(addr: SocketAddr, lexicon: Lexicon) -> Result<()> {
    let state = AppState {
        lexicon: Arc::new(lexicon),
    };

    let app = Router::new()
        .route("/", get(index))
        .route("/healthz", get(health))
        .route("/v1/pronounce", post(pronounce))
        .route("/v1/pronunciation/score", post(score))
        .with_state(state);

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind HTTP listener on {addr}"))?;
    info!("listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app.into_make_service())
        .await
        .context("HTTP server terminated unexpectedly")
}

async fn health() -> &'static str {
    "ok"
}

async fn index() -> Json<ServiceDescriptor> {
    Json(ServiceDescriptor {
        name: "latam-pron-server",
        health: "/healthz",
        pronounce: "/v1/pronounce",
        score: "/v1/pronunciation/score",
    })
}

async fn pronounce(
    State(state): State<AppState>,
    Json(payload): Json<PronounceRequest>,
) -> Json<PronounceResponse> {
    let options = payload.options.unwrap_or_default();
    let tokens = scoring::pronounce(&payload.text, &state.lexicon, &options)
        .into_iter()
        .map(|form| TokenBreakdown {
            respelling: payload.respell.then(|| respell(&form.dialect_ipa)),
            token: form.word,
            baseline_ipa: form.baseline_ipa,
            dialect_ipa: form.dialect_ipa,
        })
        .collect();
    Json(PronounceResponse {
        text: payload.text,
        tokens,
    })
}

async fn score(
    State(state): State<AppState>,
    Json(payload): Json<ScoreRequest>,
) -> Json<ScoreResponse> {
    let options = payload.options.unwrap_or_default();
    let start = Instant::now();
    let report = scoring::score_pronunciation(
        &payload.expected_text,
        &payload.heard_text,
        &state.lexicon,
        &options,
    );
    Json(ScoreResponse {
        report,
        duration_ms: start.elapsed().as_millis(),
    })
}
