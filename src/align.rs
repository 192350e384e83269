//! Anchors extracted claims to byte ranges of the source text.
//!
//! Known ambiguity: a claim substring that repeats verbatim in the source
//! always binds to its first occurrence. Extraction gives us no positional
//! hint, so there is nothing better to bind to.

use crate::types::{FactualClaim, RawClaim, VerificationStatus};

/// Locates each raw claim's `original_text` in `text` and assigns half-open
/// byte offsets. Raw claims whose substring does not occur are dropped.
///
/// IDs are `claim-<n>` where `n` is the position in the pre-filter input, so
/// identical `(text, raw_claims)` pairs always reproduce identical IDs even
/// when some claims are dropped.
pub fn align(text: &str, raw_claims: &[RawClaim]) -> Vec<FactualClaim> {
    raw_claims
        .iter()
        .enumerate()
        .filter_map(|(idx, raw)| {
            let start = text.find(&raw.original_text)?;
            Some(FactualClaim {
                id: format!("claim-{idx}"),
                original_text: raw.original_text.clone(),
                claim: raw.claim.clone(),
                status: VerificationStatus::Checking,
                evidence: None,
                sources: None,
                explanation: None,
                start_index: start,
                end_index: start + raw.original_text.len(),
            })
        })
        .collect()
}
