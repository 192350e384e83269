use serde::{Deserialize, Serialize};

/// Terminal judgment for a single claim. `Checking` is the pre-verification
/// state a claim carries between alignment and the verifier's single write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerificationStatus {
    Checking,
    Verified,
    /// Corroborated by only a single reputable source.
    Doubtful,
    Unverifiable,
    Hallucination,
}

impl Default for VerificationStatus {
    fn default() -> Self {
        VerificationStatus::Checking
    }
}

/// One record as returned by the remote extraction call: the exact substring
/// of the input plus the normalized assertion derived from it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawClaim {
    pub original_text: String,
    pub claim: String,
}

/// A claim anchored to a byte range of the source text.
///
/// Invariant: `start_index < end_index <= text.len()` and
/// `text[start_index..end_index] == original_text` for the text the claim was
/// aligned against. Claims that cannot be anchored are dropped at alignment
/// time, never stored with sentinel offsets.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FactualClaim {
    pub id: String,
    pub original_text: String,
    pub claim: String,
    #[serde(default)]
    pub status: VerificationStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evidence: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sources: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
    pub start_index: usize,
    pub end_index: usize,
}

/// Final product of one analysis request. Immutable once built; a new request
/// produces a wholly new result.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationResult {
    pub trust_score: u8,
    /// Claims in extraction order, not sorted by score or offset.
    pub claims: Vec<FactualClaim>,
    pub summary: String,
}

/// What the remote grounded-verification call hands back: the free-text body
/// (status signal and evidence) plus the URIs from the structured grounding
/// metadata, which are the authoritative source list.
#[derive(Debug, Clone, Default)]
pub struct GroundedResponse {
    pub text: String,
    pub sources: Vec<String>,
}
