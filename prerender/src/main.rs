//! # aviz-prerender
//!
//! Writes the static `index.html` for the Aviz Convent School site.
//!
//! ```bash
//! # Defaults: ./site.toml (optional) -> dist/index.html
//! aviz-prerender
//!
//! # Explicit paths, HTML on stdout
//! aviz-prerender --config deploy/site.toml --out -
//! ```

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use aviz_prerender::{SiteConfig, render_page};

#[derive(Parser, Debug)]
#[command(name = "aviz-prerender")]
#[command(about = "Render the Aviz Convent School landing page to static HTML")]
#[command(version)]
struct Args {
    /// Site configuration (TOML). A missing file means built-in defaults
    #[arg(short, long, default_value = "site.toml")]
    config: PathBuf,

    /// Output file, or `-` for stdout
    #[arg(short, long, default_value = "dist/index.html")]
    out: PathBuf,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Logs go to stderr so `--out -` keeps stdout clean
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| args.log_level.parse().unwrap_or_default()),
        )
        .init();

    let config = SiteConfig::load(&args.config)
        .with_context(|| format!("Failed to load config from {}", args.config.display()))?;
    info!(
        config = %args.config.display(),
        delay_ms = config.popup.delay_ms,
        scroll_threshold = config.popup.scroll_threshold,
        bundle = config.bundle.js.is_some(),
        "Rendering landing page"
    );

    let html = render_page(&config);
    write_output(&args.out, &html)?;

    info!(bytes = html.len(), "Wrote {}", describe(&args.out));
    Ok(())
}

fn write_output(out: &Path, html: &str) -> Result<()> {
    if out == Path::new("-") {
        let mut stdout = std::io::stdout().lock();
        stdout
            .write_all(html.as_bytes())
            .context("Failed to write HTML to stdout")?;
        return stdout.flush().context("Failed to flush stdout");
    }

    if let Some(parent) = out.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    std::fs::write(out, html).with_context(|| format!("Failed to write {}", out.display()))
}

fn describe(out: &Path) -> String {
    if out == Path::new("-") {
        "stdout".to_string()
    } else {
        out.display().to_string()
    }
}
