//! End-to-end analysis: extract, align, fan out verification, score,
//! summarize.

use futures::{stream, StreamExt};
use tracing::{info, warn};

use crate::align::align;
use crate::error::AnalysisError;
use crate::llm::Llm;
use crate::scoring::trust_score;
use crate::types::{FactualClaim, VerificationResult};
use crate::verification::verify_claim;

pub const SUMMARY_FALLBACK: &str = "Summary unavailable.";

/// Verification fan-out width. Unbounded fan-out would trip the remote
/// service's rate limits on long inputs.
pub const DEFAULT_CONCURRENCY: usize = 8;

/// Analyzes `text` and produces an immutable [`VerificationResult`].
///
/// Empty or whitespace-only input is rejected before any remote call. An
/// extraction failure aborts the whole request; per-claim verification faults
/// are absorbed by the verifier and summary faults fall back to a fixed
/// string, so neither can fail an analysis.
pub async fn analyze(
    llm: &dyn Llm,
    text: &str,
    concurrency: usize,
) -> Result<VerificationResult, AnalysisError> {
    if text.trim().is_empty() {
        return Err(AnalysisError::EmptyInput);
    }

    let raw = llm.extract(text).await.map_err(AnalysisError::Extraction)?;
    let claims = align(text, &raw);
    info!(extracted = raw.len(), aligned = claims.len(), "claims extracted");

    let claims = verify_all(llm, claims, concurrency).await;
    let score = trust_score(&claims);

    let pairs: Vec<_> = claims
        .iter()
        .map(|c| (c.claim.clone(), c.status))
        .collect();
    let summary = match llm.summarize(&pairs).await {
        Ok(s) if !s.trim().is_empty() => s,
        Ok(_) => SUMMARY_FALLBACK.to_string(),
        Err(err) => {
            warn!(error = %err, "summary call failed, using fallback");
            SUMMARY_FALLBACK.to_string()
        }
    };

    Ok(VerificationResult {
        trust_score: score,
        claims,
        summary,
    })
}

/// Verifies every claim concurrently and restores extraction order. Claims
/// fail independently: each slot settles on its own, and the whole batch is
/// awaited before scoring.
async fn verify_all(
    llm: &dyn Llm,
    claims: Vec<FactualClaim>,
    concurrency: usize,
) -> Vec<FactualClaim> {
    let tasks = claims
        .into_iter()
        .enumerate()
        .map(|(idx, claim)| async move { (idx, verify_claim(llm, claim).await) });

    let mut judged = stream::iter(tasks)
        .buffer_unordered(concurrency.max(1))
        .collect::<Vec<_>>()
        .await;
    judged.sort_by_key(|(idx, _)| *idx);
    judged.into_iter().map(|(_, claim)| claim).collect()
}
