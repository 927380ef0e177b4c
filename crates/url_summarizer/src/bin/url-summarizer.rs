use std::{net::SocketAddr, time::Duration};

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use url_summarizer::{
    config::SummarizerConfig, groq::GroqClient, tracing::init_tracing_subscriber,
    web::create_router, SummarizeRequest,
};

#[derive(Parser)]
#[command(
    name = "url-summarizer",
    about = "Summarize the content of a YouTube video or a website"
)]
struct Cli {
    #[command(flatten)]
    settings: Settings,

    #[command(subcommand)]
    command: Command,
}

#[derive(Args)]
struct Settings {
    /// Groq OpenAI compatible api base url
    #[arg(long, env = "GROQ_BASE_URL", default_value = GroqClient::BASE_URL, global = true)]
    groq_base_url: String,

    /// Model used for summarization
    #[arg(long, env = "SUMMARIZER_MODEL", default_value = GroqClient::DEFAULT_MODEL, global = true)]
    model: String,

    /// Timeout in seconds for each outgoing http request
    #[arg(long, env = "REQUEST_TIMEOUT_SECS", default_value = "120", global = true)]
    timeout: u64,

    /// Preferred transcript languages, most preferred first
    #[arg(
        long,
        env = "TRANSCRIPT_LANGUAGES",
        default_value = "en",
        value_delimiter = ',',
        global = true
    )]
    languages: Vec<String>,
}

#[derive(Subcommand)]
enum Command {
    /// Summarize a single url and print the result
    Summarize {
        /// Video or website url
        #[arg(long)]
        url: String,

        /// Groq API key
        #[arg(long, env = "GROQ_API_KEY", hide_env_values = true)]
        api_key: String,
    },
    /// Serve the web page
    Serve {
        /// Address to listen on
        #[arg(long, env = "BIND_ADDR", default_value = "127.0.0.1:8501")]
        addr: SocketAddr,
    },
}

impl From<Settings> for SummarizerConfig {
    fn from(settings: Settings) -> Self {
        SummarizerConfig {
            groq_base_url: settings.groq_base_url,
            model: settings.model,
            request_timeout: Duration::from_secs(settings.timeout),
            transcript_languages: settings.languages,
        }
    }
}

async fn summarize(config: &SummarizerConfig, url: String, api_key: String) -> anyhow::Result<()> {
    let pipeline = config.build_pipeline()?;
    let request = SummarizeRequest::new(api_key, url);

    let summary = pipeline
        .run(&request)
        .await
        .map_err(|e| anyhow::anyhow!(e.user_message()))?;

    println!("{}", summary.text);
    Ok(())
}

async fn serve(config: &SummarizerConfig, addr: SocketAddr) -> anyhow::Result<()> {
    let app = create_router(config.build_pipeline()?);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    tracing::info!(%addr, model = %config.model, "Listening");
    axum::serve(listener, app).await?;

    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    let _guard = sentry::init((
        std::env::var("SENTRY_DSN").unwrap_or_default(),
        sentry::ClientOptions {
            release: sentry::release_name!(),
            ..Default::default()
        },
    ));

    let cli = Cli::parse();
    init_tracing_subscriber()?;

    let config = SummarizerConfig::from(cli.settings);

    match cli.command {
        Command::Summarize { url, api_key } => summarize(&config, url, api_key).await?,
        Command::Serve { addr } => serve(&config, addr).await?,
    }

    Ok(())
}
