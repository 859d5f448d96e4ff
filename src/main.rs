//! `glyphgrid` CLI - Extract and display ASCII art from published Google Docs

use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Duration;

use anyhow::{bail, ensure, Context, Result};
use clap::{ArgGroup, Parser};
use tokio::io::AsyncReadExt;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use glyphgrid::error::parse_fill;
use glyphgrid::render::render;
use glyphgrid::{
    grid, parse_document, validate_url, Config, DocumentFetcher, GlyphError, OutputMode,
};

#[derive(Parser)]
#[command(name = "glyphgrid")]
#[command(about = "Extract and display ASCII art from published Google Docs")]
#[command(version)]
#[command(after_help = "\
Examples:
  glyphgrid --url \"https://docs.google.com/document/d/e/2PACX-.../pub\"
  glyphgrid -u \"https://docs.google.com/.../pub\" --fill \".\"
  glyphgrid --file saved.html --border")]
#[command(group(ArgGroup::new("source").required(true).args(["url", "file"])))]
struct Cli {
    /// Published Google Docs URL (must contain /pub)
    #[arg(short, long)]
    url: Option<String>,

    /// Read HTML from a local file instead of fetching ("-" for stdin)
    #[arg(long, value_name = "PATH")]
    file: Option<PathBuf>,

    /// Character to fill empty cells [default: space]
    #[arg(short, long, value_name = "CHAR")]
    fill: Option<String>,

    /// Display the art inside a decorative border
    #[arg(long)]
    border: bool,

    /// Title shown in the border
    #[arg(long)]
    title: Option<String>,

    /// Show grid statistics before the art
    #[arg(long)]
    info: bool,

    /// Print a JSON report instead of the art
    #[arg(long)]
    json: bool,

    /// Request timeout in seconds [default: 15]
    #[arg(long, value_name = "SECS")]
    timeout: Option<u64>,

    /// Enable debug logging
    #[arg(long, conflicts_with = "quiet")]
    debug: bool,

    /// Only show warnings and errors
    #[arg(short, long)]
    quiet: bool,

    /// Config file to use instead of the default location
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

impl Cli {
    fn output_mode(&self) -> OutputMode {
        if self.json {
            OutputMode::Json
        } else if self.info {
            OutputMode::Info
        } else if self.border {
            OutputMode::Bordered
        } else {
            OutputMode::Plain
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let debug = cli.debug;
    init_logging(debug, cli.quiet);

    tokio::select! {
        result = run(cli) => match result {
            Ok(()) => ExitCode::SUCCESS,
            Err(err) => {
                if debug {
                    eprintln!("Error: {err:?}");
                } else {
                    eprintln!("Error: {err:#}");
                }
                ExitCode::FAILURE
            }
        },
        _ = tokio::signal::ctrl_c() => {
            eprintln!("\nOperation cancelled by user.");
            ExitCode::from(130)
        }
    }
}

fn init_logging(debug: bool, quiet: bool) {
    let level = if quiet {
        "warn"
    } else if debug {
        "debug"
    } else {
        "info"
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("warn,glyphgrid={level}")));

    FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(debug)
        .compact()
        .init();
}

async fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let fill = parse_fill(cli.fill.as_deref().unwrap_or(&config.fill))?;
    let timeout = cli.timeout.unwrap_or(config.timeout_secs);
    if timeout == 0 {
        return Err(GlyphError::InvalidTimeout(timeout).into());
    }

    let html = match (&cli.url, &cli.file) {
        (Some(url), _) => {
            if !validate_url(url) {
                return Err(GlyphError::InvalidUrl(url.clone()).into());
            }
            let fetcher =
                DocumentFetcher::with_options(Duration::from_secs(timeout), &config.user_agent)?;
            fetcher.fetch_text(url).await?
        }
        (None, Some(path)) => read_input(path).await?,
        (None, None) => bail!("either --url or --file is required"),
    };

    let cells = parse_document(&html);
    if cells.is_empty() {
        return Err(GlyphError::NoArtFound.into());
    }

    let bounds = cells.bounds();
    if !grid::fits(&bounds) {
        return Err(GlyphError::GridTooLarge {
            width: bounds.width(),
            height: bounds.height(),
            limit: grid::MAX_GRID_AREA,
        }
        .into());
    }

    let rows = grid::assemble(&cells, fill);
    ensure!(!rows.is_empty(), "Failed to generate ASCII art grid.");

    let title = cli.title.as_deref().unwrap_or(&config.border_title);
    println!("{}", render(cli.output_mode(), &cells, &rows, title)?);

    info!(
        lines = rows.len(),
        cells = cells.len(),
        "Successfully displayed ASCII art"
    );
    Ok(())
}

async fn read_input(path: &Path) -> Result<String> {
    let bytes = if path == Path::new("-") {
        let mut buf = Vec::new();
        tokio::io::stdin()
            .read_to_end(&mut buf)
            .await
            .context("failed to read stdin")?;
        buf
    } else {
        tokio::fs::read(path)
            .await
            .with_context(|| format!("failed to read {}", path.display()))?
    };
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
