//! Gemini `generateContent` client: structured-output extraction, search-
//! grounded verification, and plain-text summarization.

use std::num::NonZeroU32;
use std::time::Duration;

use anyhow::{Context, Result};
use governor::{DefaultDirectRateLimiter, Quota, RateLimiter};
use nonzero_ext::nonzero;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;

use super::Llm;
use crate::types::{GroundedResponse, RawClaim, VerificationStatus};

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

const EXTRACTION_PROMPT: &str = "Act as VeriSynth AI. Identify every atomic, verifiable factual \
assertion (names, dates, statistics, event descriptions) in the following text. Ignore opinions \
or subjective statements.\n\nFor each assertion, extract:\n1. The exact substring from the text \
(originalText).\n2. The core factual claim (claim).\n\nReturn the data as a JSON array.";

const VERIFICATION_PROTOCOL: &str = "Act as VeriSynth AI Hallucination Detection Engine.\n\n\
VERIFICATION PROTOCOL:\n\
1. REAL-TIME SEARCH: Use live web data. Prioritize official news (AP, BBC, Reuters), government \
databases, and peer-reviewed journals.\n\
2. TRIANGULATION:\n\
   - VERIFIED: Confirmed by at least TWO independent, reputable sources.\n\
   - DOUBTFUL: Found in only ONE reputable source.\n\
   - UNVERIFIABLE: Search results do not confirm this (no data found).\n\
   - HALLUCINATION/FAKE: Explicitly contradicted by reliable sources OR zero substantiation for \
high-impact claims.\n\
3. SELF-CORRECTION: If social media rumors are not confirmed by official reports, flag as \
high-confidence hallucination.\n\n\
RESPONSE FORMAT:\n\
You MUST include a \"status\" field in your response text chosen from: \"verified\", \
\"doubtful\", \"unverifiable\", or \"hallucination\". Provide the evidence snippet and list of \
sources used.";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
    #[serde(default)]
    grounding_metadata: Option<GroundingMetadata>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GroundingMetadata {
    #[serde(default)]
    grounding_chunks: Vec<GroundingChunk>,
}

#[derive(Debug, Deserialize)]
struct GroundingChunk {
    #[serde(default)]
    web: Option<WebChunk>,
}

#[derive(Debug, Deserialize)]
struct WebChunk {
    #[serde(default)]
    uri: Option<String>,
}

impl GenerateContentResponse {
    fn text(&self) -> String {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .map(|c| {
                c.parts
                    .iter()
                    .filter_map(|p| p.text.as_deref())
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default()
    }

    /// URIs from the structured grounding block, the authoritative source
    /// list. The free-text body is never mined for links.
    fn grounding_uris(&self) -> Vec<String> {
        self.candidates
            .first()
            .and_then(|c| c.grounding_metadata.as_ref())
            .map(|m| {
                m.grounding_chunks
                    .iter()
                    .filter_map(|g| g.web.as_ref().and_then(|w| w.uri.clone()))
                    .collect()
            })
            .unwrap_or_default()
    }
}

pub struct GeminiClient {
    http: Client,
    base_url: String,
    key: String,
    model: String,
    limiter: DefaultDirectRateLimiter,
}

impl GeminiClient {
    pub fn new(
        key: String,
        model: String,
        base_url: Option<String>,
        qps: u32,
        timeout_ms: u64,
    ) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .build()?;
        let qps = NonZeroU32::new(qps).unwrap_or(nonzero!(1u32));
        let limiter = RateLimiter::direct(Quota::per_second(qps));
        Ok(Self {
            http,
            base_url: base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            key,
            model,
            limiter,
        })
    }

    async fn generate(&self, body: serde_json::Value) -> Result<GenerateContentResponse> {
        self.limiter.until_ready().await;
        let url = format!("{}/models/{}:generateContent", self.base_url, self.model);
        let resp = self
            .http
            .post(&url)
            .header("x-goog-api-key", &self.key)
            .json(&body)
            .send()
            .await?
            .error_for_status()?
            .json::<GenerateContentResponse>()
            .await?;
        Ok(resp)
    }
}

#[async_trait::async_trait]
impl Llm for GeminiClient {
    async fn extract(&self, text: &str) -> Result<Vec<RawClaim>> {
        let body = json!({
            "contents": [{ "parts": [{ "text": format!("{EXTRACTION_PROMPT}\n\nText: \"{text}\"") }] }],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": {
                    "type": "ARRAY",
                    "items": {
                        "type": "OBJECT",
                        "properties": {
                            "originalText": { "type": "STRING" },
                            "claim": { "type": "STRING" }
                        },
                        "required": ["originalText", "claim"]
                    }
                }
            }
        });
        let resp = self.generate(body).await?;
        let raw = resp.text();
        let claims: Vec<RawClaim> =
            serde_json::from_str(raw.trim()).context("extraction returned malformed JSON")?;
        Ok(claims)
    }

    async fn verify(&self, claim_text: &str) -> Result<GroundedResponse> {
        let body = json!({
            "contents": [{ "parts": [{ "text": format!("Verify this claim: \"{claim_text}\"") }] }],
            "systemInstruction": { "parts": [{ "text": VERIFICATION_PROTOCOL }] },
            "tools": [{ "googleSearch": {} }]
        });
        let resp = self.generate(body).await?;
        Ok(GroundedResponse {
            text: resp.text(),
            sources: resp.grounding_uris(),
        })
    }

    async fn summarize(&self, pairs: &[(String, VerificationStatus)]) -> Result<String> {
        let judged = pairs
            .iter()
            .map(|(claim, status)| json!({ "claim": claim, "status": status }))
            .collect::<Vec<_>>();
        let prompt = format!(
            "As VeriSynth AI, provide a structured summary of this text's reliability:\n{}",
            serde_json::to_string(&judged)?
        );
        let body = json!({
            "contents": [{ "parts": [{ "text": prompt }] }]
        });
        let resp = self.generate(body).await?;
        Ok(resp.text())
    }
}
