use crate::types::{FactualClaim, VerificationStatus};

/// Points contributed per claim under the weighted policy: full credit for
/// verified, partial for the middle tiers, nothing for a hallucination.
fn points(status: VerificationStatus) -> u32 {
    match status {
        VerificationStatus::Verified => 100,
        VerificationStatus::Doubtful | VerificationStatus::Unverifiable => 20,
        VerificationStatus::Hallucination => 0,
        // Never reached after verification; counts as unconfirmed if it were.
        VerificationStatus::Checking => 20,
    }
}

/// Weighted trust score: rounded mean of per-claim points, in `[0, 100]`.
/// An empty claim set scores 100 — nothing to distrust.
pub fn trust_score(claims: &[FactualClaim]) -> u8 {
    if claims.is_empty() {
        return 100;
    }
    let total: u32 = claims.iter().map(|c| points(c.status)).sum();
    let mean = (total as f64 / claims.len() as f64).round();
    mean as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn claim(status: VerificationStatus) -> FactualClaim {
        FactualClaim {
            id: "claim-0".into(),
            original_text: "x".into(),
            claim: "x".into(),
            status,
            evidence: None,
            sources: None,
            explanation: None,
            start_index: 0,
            end_index: 1,
        }
    }

    #[test]
    fn empty_set_scores_100() {
        assert_eq!(trust_score(&[]), 100);
    }

    #[test]
    fn all_verified_is_100_all_hallucinated_is_0() {
        let verified = vec![claim(VerificationStatus::Verified); 3];
        assert_eq!(trust_score(&verified), 100);
        let fake = vec![claim(VerificationStatus::Hallucination); 3];
        assert_eq!(trust_score(&fake), 0);
    }

    #[test]
    fn mixed_statuses_round_the_mean() {
        // 100 + 20 + 0 = 120 over 3 claims -> 40.
        let claims = vec![
            claim(VerificationStatus::Verified),
            claim(VerificationStatus::Unverifiable),
            claim(VerificationStatus::Hallucination),
        ];
        assert_eq!(trust_score(&claims), 40);
        // 100 + 20 = 120 over 2 -> 60.
        let claims = vec![
            claim(VerificationStatus::Verified),
            claim(VerificationStatus::Doubtful),
        ];
        assert_eq!(trust_score(&claims), 60);
    }

    #[test]
    fn upgrading_a_claim_never_lowers_the_score() {
        let tiers = [
            VerificationStatus::Hallucination,
            VerificationStatus::Unverifiable,
            VerificationStatus::Doubtful,
            VerificationStatus::Verified,
        ];
        for window in tiers.windows(2) {
            let lower = vec![claim(window[0]), claim(VerificationStatus::Verified)];
            let upper = vec![claim(window[1]), claim(VerificationStatus::Verified)];
            assert!(trust_score(&upper) >= trust_score(&lower));
        }
    }

    #[test]
    fn score_stays_in_range() {
        let claims = vec![claim(VerificationStatus::Doubtful); 7];
        let s = trust_score(&claims);
        assert!(s <= 100);
    }
}
