use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use tracing::{error, info};

use crate::error::AnalysisError;
use crate::llm::Llm;
use crate::pipeline::analyze;
use crate::types::VerificationResult;

/// Shared per-process state: the injected remote model plus the verification
/// fan-out cap.
pub struct Engine {
    pub llm: Arc<dyn Llm>,
    pub concurrency: usize,
}

#[derive(Deserialize)]
pub struct AnalyzeRequest {
    pub text: String,
}

/// `POST /api/analyze` — runs the full pipeline over the submitted text.
///
/// The client shows exactly one of: the result, or an error message with a
/// retry that starts a fresh request. There is no partial-result response,
/// so failures map to plain `(status, message)` pairs.
pub async fn analyze_text(
    State(engine): State<Arc<Engine>>,
    Json(req): Json<AnalyzeRequest>,
) -> Result<Json<VerificationResult>, (StatusCode, String)> {
    match analyze(engine.llm.as_ref(), &req.text, engine.concurrency).await {
        Ok(result) => {
            info!(trust_score = result.trust_score, claims = result.claims.len(), "analysis complete");
            Ok(Json(result))
        }
        Err(err @ AnalysisError::EmptyInput) => {
            Err((StatusCode::UNPROCESSABLE_ENTITY, err.to_string()))
        }
        Err(err @ AnalysisError::Extraction(_)) => {
            error!(error = %err, "analysis aborted");
            Err((StatusCode::BAD_GATEWAY, err.to_string()))
        }
    }
}

async fn healthz() -> &'static str {
    "ok"
}

pub fn router(engine: Arc<Engine>) -> Router {
    Router::new()
        .route("/api/analyze", post(analyze_text))
        .route("/healthz", get(healthz))
        .with_state(engine)
}

pub async fn run_server(engine: Engine, addr: &str) -> anyhow::Result<()> {
    let app = router(Arc::new(engine));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "listening");
    axum::serve(listener, app).await?;
    Ok(())
}
