use tracing::warn;

use crate::classify::classify;
use crate::llm::Llm;
use crate::types::{FactualClaim, VerificationStatus};

/// Runs one grounded verification over a claim and returns the judged
/// replacement. Each claim is verified independently; any fault in the remote
/// call is absorbed here as `Unverifiable` with an explanation, so one bad
/// call never disturbs its siblings.
pub async fn verify_claim(llm: &dyn Llm, claim: FactualClaim) -> FactualClaim {
    match llm.verify(&claim.claim).await {
        Ok(grounded) => FactualClaim {
            status: classify(&grounded.text),
            evidence: Some(grounded.text),
            sources: Some(dedup_preserving_order(grounded.sources)),
            ..claim
        },
        Err(err) => {
            warn!(claim_id = %claim.id, error = %err, "claim verification failed");
            FactualClaim {
                status: VerificationStatus::Unverifiable,
                explanation: Some("System timeout or grounding error.".to_string()),
                ..claim
            }
        }
    }
}

fn dedup_preserving_order(sources: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(sources.len());
    for s in sources {
        if !out.contains(&s) {
            out.push(s);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{GroundedResponse, RawClaim, VerificationStatus};
    use anyhow::{anyhow, Result};

    struct FakeVerify {
        text: &'static str,
        sources: Vec<&'static str>,
        fail: bool,
    }

    #[async_trait::async_trait]
    impl Llm for FakeVerify {
        async fn extract(&self, _text: &str) -> Result<Vec<RawClaim>> {
            unreachable!("verifier never extracts")
        }

        async fn verify(&self, _claim_text: &str) -> Result<GroundedResponse> {
            if self.fail {
                return Err(anyhow!("rate limited"));
            }
            Ok(GroundedResponse {
                text: self.text.to_string(),
                sources: self.sources.iter().map(|s| s.to_string()).collect(),
            })
        }

        async fn summarize(&self, _pairs: &[(String, VerificationStatus)]) -> Result<String> {
            unreachable!("verifier never summarizes")
        }
    }

    fn claim() -> FactualClaim {
        FactualClaim {
            id: "claim-0".into(),
            original_text: "walked on Mars in 2023".into(),
            claim: "Elon Musk walked on Mars in 2023".into(),
            status: VerificationStatus::Checking,
            evidence: None,
            sources: None,
            explanation: None,
            start_index: 10,
            end_index: 32,
        }
    }

    #[tokio::test]
    async fn successful_verification_sets_status_evidence_and_sources() {
        let llm = FakeVerify {
            text: "Status: hallucination. No record of any crewed Mars landing.",
            sources: vec![],
            fail: false,
        };
        let out = verify_claim(&llm, claim()).await;
        assert_eq!(out.status, VerificationStatus::Hallucination);
        assert_eq!(out.sources, Some(vec![]));
        assert!(out.evidence.unwrap().contains("crewed Mars landing"));
        // Alignment data rides along untouched.
        assert_eq!(out.start_index, 10);
        assert_eq!(out.end_index, 32);
    }

    #[tokio::test]
    async fn sources_are_deduplicated_in_first_seen_order() {
        let llm = FakeVerify {
            text: "verified",
            sources: vec!["https://a", "https://b", "https://a", "https://c", "https://b"],
            fail: false,
        };
        let out = verify_claim(&llm, claim()).await;
        assert_eq!(
            out.sources.unwrap(),
            vec!["https://a", "https://b", "https://c"]
        );
    }

    #[tokio::test]
    async fn remote_fault_downgrades_to_unverifiable_with_explanation() {
        let llm = FakeVerify { text: "", sources: vec![], fail: true };
        let out = verify_claim(&llm, claim()).await;
        assert_eq!(out.status, VerificationStatus::Unverifiable);
        assert!(out.evidence.is_none());
        assert!(out.explanation.is_some());
    }
}
