//! CLI that reads one HTML page and prints its capture as JSON.
//!
//! ```text
//! curl -s https://example.com/post | extract_page --url https://example.com/post
//! extract_page --url https://example.com/post --file post.html --payload
//! ```
//!
//! Logs go to stderr; set `RUST_LOG=page_capture=debug` for per-stage detail.

use std::error::Error;
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use clap::Parser;
use page_capture::{dom, encoding, extract_with_options, CapturePayload, ContentSelector, Options, PageLocation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Debug, Parser)]
#[command(name = "extract_page", about = "Extract text, structure, videos and clean HTML from a page")]
struct Args {
    /// URL the page was loaded from (base for relative links and the favicon).
    #[arg(long, default_value = "")]
    url: String,

    /// Page title; defaults to the document's <title>.
    #[arg(long)]
    title: Option<String>,

    /// Read HTML from this file instead of stdin.
    #[arg(long)]
    file: Option<PathBuf>,

    /// JSON file with extraction options.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Content root selector, in priority order (repeatable). Replaces the defaults.
    #[arg(long = "selector")]
    selectors: Vec<ContentSelector>,

    /// Report src/href values exactly as written.
    #[arg(long)]
    no_resolve_urls: bool,

    /// Print the upload envelope instead of the raw extraction result.
    #[arg(long)]
    payload: bool,
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(io::stderr))
        .try_init();
}

fn load_options(args: &Args) -> Result<Options, Box<dyn Error>> {
    let mut options = match &args.config {
        Some(path) => serde_json::from_str(&fs::read_to_string(path)?)?,
        None => Options::default(),
    };
    if !args.selectors.is_empty() {
        options.content_selectors.clone_from(&args.selectors);
    }
    if args.no_resolve_urls {
        options.resolve_urls = false;
    }
    Ok(options)
}

fn read_input(file: Option<&PathBuf>) -> io::Result<Vec<u8>> {
    match file {
        Some(path) => fs::read(path),
        None => {
            let mut bytes = Vec::new();
            io::stdin().read_to_end(&mut bytes)?;
            Ok(bytes)
        }
    }
}

fn run(args: &Args) -> Result<String, Box<dyn Error>> {
    let options = load_options(args)?;
    let html = encoding::decode_html(&read_input(args.file.as_ref())?);
    let document = dom::parse(&html);

    let title = args
        .title
        .clone()
        .or_else(|| document.title())
        .unwrap_or_default();
    let location = PageLocation::new(args.url.clone(), title);

    let result = extract_with_options(&document, &location, &options)?;
    tracing::info!(
        tier = ?result.display_tier(),
        chars = result.text.len(),
        videos = result.youtube_videos.len(),
        "page extracted"
    );

    if args.payload {
        Ok(CapturePayload::now(&result)?.to_json()?)
    } else {
        Ok(serde_json::to_string_pretty(&result)?)
    }
}

fn main() -> std::process::ExitCode {
    init_tracing();
    let args = Args::parse();

    match run(&args) {
        Ok(json) => {
            println!("{json}");
            std::process::ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!("extraction failed: {err}");
            eprintln!("extract_page: {err}");
            std::process::ExitCode::FAILURE
        }
    }
}
