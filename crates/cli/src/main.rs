mod renderer;

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use chrono::Datelike;
use folio_core::ContentStore;
use folio_core::validate::validate;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

const USAGE: &str = "Usage: folio <check|render> [content.json]";

fn main() -> Result<()> {
    init_logger();

    let args: Vec<String> = std::env::args().collect();
    let Some(command) = args.get(1) else {
        eprintln!("{USAGE}");
        std::process::exit(1);
    };
    let content = load_content(args.get(2).map(PathBuf::from))?;

    match command.as_str() {
        "check" => check(&content),
        "render" => {
            let year = chrono::Local::now().year();
            let html = renderer::render_page(&content, year);
            let mut out = std::io::stdout().lock();
            writeln!(out, "{html}").context("writing page to stdout")?;
            Ok(())
        }
        other => bail!("unknown command {other:?}\n{USAGE}"),
    }
}

fn init_logger() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("folio=info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .init();
}

fn load_content(path: Option<PathBuf>) -> Result<ContentStore> {
    match path {
        Some(path) => {
            let data = std::fs::read_to_string(&path)
                .with_context(|| format!("reading {}", path.display()))?;
            let content = ContentStore::from_json(&data)
                .with_context(|| format!("parsing {}", path.display()))?;
            tracing::debug!(path = %path.display(), "loaded content");
            Ok(content)
        }
        None => Ok(ContentStore::builtin()?),
    }
}

/// Log every missing field; fail if there was any.
fn check(content: &ContentStore) -> Result<()> {
    let diagnostics = validate(content);
    for diagnostic in &diagnostics {
        tracing::error!("{diagnostic}");
    }
    if !diagnostics.is_empty() {
        bail!("{} required field(s) missing", diagnostics.len());
    }
    tracing::info!(
        projects = content.projects().len(),
        skills = content.skills().len(),
        "content ok"
    );
    Ok(())
}
