use thiserror::Error;

/// Failures that abort a whole analysis request. Per-claim verification
/// faults are absorbed inside the verifier and never surface here.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("input text is empty; nothing to analyze")]
    EmptyInput,
    /// The extraction call itself failed, so no claims are known and no
    /// partial result can be produced.
    #[error("claim extraction failed: {0}")]
    Extraction(#[source] anyhow::Error),
}
