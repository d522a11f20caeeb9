use anyhow::Result;
use denguerain::{config::JobConfig, job};
use std::path::Path;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_span_events(fmt::format::FmtSpan::CLOSE)
        .init();
    info!("startup");

    // ─── 2) load config ──────────────────────────────────────────────
    let config = match std::env::args().nth(1) {
        Some(path) => JobConfig::load(Path::new(&path))?,
        None => JobConfig::default(),
    };
    info!(
        dengue = %config.dengue_path.display(),
        rain = %config.rain_path.display(),
        "loaded config"
    );

    // ─── 3) run the batch ────────────────────────────────────────────
    let summary = job::run_job(&config)?;
    info!(joined_rows = summary.joined_rows, "all done");
    Ok(())
}
