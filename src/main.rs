use anyhow::{Context, Result};
use std::io::{self, BufWriter, Write};
use tracing::info;

use digital_store::{build_sample_store, init_logging, render, ReportEngine, VERSION};

fn main() -> Result<()> {
    init_logging();
    info!(version = VERSION, "digital-store starting");

    let engine = ReportEngine::new();

    // 1. Sample products, customers, payments and subscriptions
    let store = build_sample_store(engine.today).context("Failed to build sample store")?;

    // 2. Every report over the same records
    let report = engine.run(&store.payments, &store.subscriptions);

    // 3. Print
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    render(&report, &mut out).context("Failed to write report")?;
    out.flush().context("Failed to flush stdout")?;

    Ok(())
}
