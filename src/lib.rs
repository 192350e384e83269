pub mod align;
pub mod classify;
pub mod error;
pub mod llm;
pub mod pipeline;
pub mod scoring;
pub mod server;
pub mod types;
pub mod verification;
