//! Feature Insight - Rust Backend
//!
//! CLI front end over the provider abstraction: extract feature records from
//! an article, or generate an implementation guide for one feature.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use feature_insight_backend::config::LlmConfig;
use feature_insight_backend::llm::{FeatureRecord, LlmClient, Provider, DEFAULT_INDUSTRY};

/// Command line arguments
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable debug level logging
    #[arg(long, default_value_t = false)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Extract feature records from a plain-text article file
    Extract {
        /// Path to the article
        file: PathBuf,

        /// LLM provider: "gemini" or "openai"
        #[arg(long, default_value = "gemini")]
        provider: String,
    },
    /// Generate an implementation guide for one extracted feature
    Guide {
        /// Path to a JSON file holding a single feature record
        feature: PathBuf,

        /// Use case to anchor the guide on
        #[arg(long)]
        use_case: String,

        /// LLM provider: "gemini" or "openai"
        #[arg(long, default_value = "gemini")]
        provider: String,

        /// Industry framing for the guide
        #[arg(long, default_value = DEFAULT_INDUSTRY)]
        industry: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Determine log level based on --debug flag
    let log_level = if args.debug { "debug" } else { "info" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    // Initialize logging (File + Stderr; stdout stays clean for command output)
    let file_appender = tracing_appender::rolling::daily("logs", "feature_insights.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false), // File output matches plain text
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(env_filter)
        .init();

    // Load environment variables
    dotenvy::dotenv().ok();

    // Missing keys are reported loudly here, not on first call
    let config = LlmConfig::from_env();
    let client = LlmClient::new(config);

    match args.command {
        Command::Extract { file, provider } => {
            let article_text = std::fs::read_to_string(&file)?;
            let provider = Provider::parse(&provider);
            tracing::info!("Extracting features from {:?} via {}", file, provider);

            let features = client.extract_features(&article_text, provider).await;
            println!("{}", serde_json::to_string_pretty(&features)?);
        }
        Command::Guide {
            feature,
            use_case,
            provider,
            industry,
        } => {
            let raw = std::fs::read_to_string(&feature)?;
            let record: FeatureRecord = serde_json::from_str(&raw)?;
            let provider = Provider::parse(&provider);
            tracing::info!(
                "Generating {} guide for \"{}\" via {}",
                industry,
                record.feature_name,
                provider
            );

            let guide = client
                .generate_guide(&record, &use_case, provider, &industry)
                .await;
            println!("{}", guide);
        }
    }

    Ok(())
}
