use std::io::Read;
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use verisynth::llm::gemini::GeminiClient;
use verisynth::pipeline::{analyze, DEFAULT_CONCURRENCY};
use verisynth::server::{run_server, Engine};

#[derive(Parser)]
#[command(name = "verisynth", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Cmd,
    /// Gemini API key
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    api_key: String,
    /// Model used for extraction, verification and summarization
    #[arg(long, env = "GEMINI_MODEL", default_value = "gemini-3-pro-preview")]
    model: String,
    /// Override the API base URL (useful against a local stub)
    #[arg(long, env = "GEMINI_BASE_URL")]
    base_url: Option<String>,
    /// Requests per second allowed against the API
    #[arg(long, default_value_t = 4)]
    qps: u32,
    /// Per-request timeout in milliseconds
    #[arg(long, default_value_t = 60_000)]
    timeout_ms: u64,
    /// Concurrent verification requests per analysis
    #[arg(long, default_value_t = DEFAULT_CONCURRENCY)]
    concurrency: usize,
}

#[derive(Subcommand)]
enum Cmd {
    /// Serve the analysis API over HTTP
    Serve {
        #[arg(long, default_value = "127.0.0.1:8080")]
        addr: String,
    },
    /// Analyze one text and print the result as JSON (reads stdin if no arg)
    Analyze {
        text: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let cli = Cli::parse();
    let llm = GeminiClient::new(
        cli.api_key,
        cli.model,
        cli.base_url,
        cli.qps,
        cli.timeout_ms,
    )?;

    match cli.cmd {
        Cmd::Serve { addr } => {
            let engine = Engine {
                llm: Arc::new(llm),
                concurrency: cli.concurrency,
            };
            run_server(engine, &addr).await
        }
        Cmd::Analyze { text } => {
            let text = match text {
                Some(t) => t,
                None => {
                    let mut buf = String::new();
                    std::io::stdin().read_to_string(&mut buf)?;
                    buf
                }
            };
            let result = analyze(&llm, &text, cli.concurrency).await?;
            println!("{}", serde_json::to_string_pretty(&result)?);
            Ok(())
        }
    }
}
