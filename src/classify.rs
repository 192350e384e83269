//! Maps the verifier's free-text response onto a status.
//!
//! The remote model is instructed to name one of the status words in its
//! reply, but responses are unstructured and may hedge with several of them.
//! Precedence decides the tie-break, so the table order is load-bearing.

use crate::types::VerificationStatus;

/// Keyword precedence, highest first. First hit wins.
const PRECEDENCE: &[(&str, VerificationStatus)] = &[
    ("verified", VerificationStatus::Verified),
    ("hallucination", VerificationStatus::Hallucination),
    ("fake", VerificationStatus::Hallucination),
    ("doubtful", VerificationStatus::Doubtful),
    ("unverifiable", VerificationStatus::Unverifiable),
];

/// Best-effort keyword classifier; defaults to `Unverifiable` when the
/// response names no status at all.
pub fn classify(response_text: &str) -> VerificationStatus {
    let lower = response_text.to_lowercase();
    PRECEDENCE
        .iter()
        .find(|(kw, _)| lower.contains(kw))
        .map(|(_, status)| *status)
        .unwrap_or(VerificationStatus::Unverifiable)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_keyword_maps_directly() {
        assert_eq!(classify("Status: verified by AP and Reuters."), VerificationStatus::Verified);
        assert_eq!(classify("This is a hallucination."), VerificationStatus::Hallucination);
        assert_eq!(classify("Likely fake news."), VerificationStatus::Hallucination);
        assert_eq!(classify("Status: doubtful, one source only."), VerificationStatus::Doubtful);
        assert_eq!(classify("unverifiable as of now"), VerificationStatus::Unverifiable);
    }

    #[test]
    fn precedence_breaks_ties_on_hedged_responses() {
        // A hedge naming both beats the lower tier.
        assert_eq!(
            classify("The claim could not be verified... status: unverifiable"),
            VerificationStatus::Verified
        );
        assert_eq!(
            classify("Not doubtful, this is an outright hallucination."),
            VerificationStatus::Hallucination
        );
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(classify("STATUS: VERIFIED"), VerificationStatus::Verified);
        assert_eq!(classify("Hallucination/Fake"), VerificationStatus::Hallucination);
    }

    #[test]
    fn no_keyword_defaults_to_unverifiable() {
        assert_eq!(classify("I am not sure what to say."), VerificationStatus::Unverifiable);
        assert_eq!(classify(""), VerificationStatus::Unverifiable);
    }
}
