pub mod gemini;

use crate::types::{GroundedResponse, RawClaim, VerificationStatus};
use anyhow::Result;

/// The remote model boundary. Everything hard — extraction, web-grounded
/// judgment, summarization — lives on the other side of this trait, so tests
/// swap in deterministic fakes.
#[async_trait::async_trait]
pub trait Llm: Send + Sync {
    /// Extracts atomic verifiable claims from raw text as structured records.
    async fn extract(&self, text: &str) -> Result<Vec<RawClaim>>;

    /// Runs one web-grounded verification over a claim's assertion text.
    async fn verify(&self, claim_text: &str) -> Result<GroundedResponse>;

    /// Produces a natural-language reliability summary for the judged claims.
    async fn summarize(&self, pairs: &[(String, VerificationStatus)]) -> Result<String>;
}
