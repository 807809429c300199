use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::{Read, Write};
use std::path::PathBuf;
use std::sync::Arc;
use text_publisher::{
    convert_text_to_html_with_title, create_router, AppState, Config, ConversionService,
    FileStore, GithubClient, LlmClient, MemoryFileStore, DEFAULT_TITLE,
};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "text-publisher", version)]
#[command(about = "Convert pasted text to HTML and publish it to GitHub")]
struct Args {
    /// Config file path (extension optional)
    #[arg(short, long, default_value = "config/text-publisher")]
    config: String,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run the HTTP API (default)
    Serve,

    /// Convert a text file offline with the rule-based converter
    Convert {
        /// Input file, or `-` for stdin
        input: PathBuf,

        /// Output file; stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Document title
        #[arg(short, long, default_value = DEFAULT_TITLE)]
        title: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    match args.command.unwrap_or(Command::Serve) {
        Command::Serve => serve(&args.config).await,
        Command::Convert {
            input,
            output,
            title,
        } => convert(&input, output.as_deref(), &title),
    }
}

async fn serve(config_path: &str) -> Result<()> {
    let cfg = Config::load(config_path)?;

    info!("{} v{}", cfg.service.name, env!("CARGO_PKG_VERSION"));

    let github = GithubClient::from_config(&cfg.github).context("Failed to create GitHub client")?;
    if cfg.github.resolve_token().is_none() {
        warn!("No GitHub token configured; publishing will be rejected until GITHUB_TOKEN is set");
    }

    let converter = match LlmClient::from_config(&cfg.llm).context("Failed to create LLM client")? {
        Some(llm) => ConversionService::with_generator(Arc::new(llm)),
        None => ConversionService::rules_only(),
    };

    let store: Arc<dyn FileStore> = Arc::new(MemoryFileStore::new());
    let state = AppState::new(store, Arc::new(github), converter, cfg.github.web_url.clone());
    let app = create_router(state);

    let addr = format!("{}:{}", cfg.service.http.bind, cfg.service.http.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!("HTTP server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown requested");
}

fn convert(input: &std::path::Path, output: Option<&std::path::Path>, title: &str) -> Result<()> {
    let text = if input.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read stdin")?;
        buf
    } else {
        std::fs::read_to_string(input)
            .with_context(|| format!("Failed to read {}", input.display()))?
    };

    let html = convert_text_to_html_with_title(&text, title);

    match output {
        Some(path) => {
            std::fs::write(path, &html)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Wrote {} ({} bytes)", path.display(), html.len());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(html.as_bytes())?;
            stdout.write_all(b"\n")?;
        }
    }

    Ok(())
}
