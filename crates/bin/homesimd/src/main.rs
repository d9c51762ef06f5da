//! # homesimd: home simulation daemon
//!
//! Loads the configuration, builds the home and runs the demo while a
//! printer task writes every journal entry to stdout. Diagnostics go to
//! stderr through `tracing`.

use anyhow::Context;
use homesimd::config::Config;
use homesimd::demo;
use homesimd::home::Home;
use homesimd::render::JournalPrinter;
use tokio::sync::oneshot;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let config = Config::load().context("failed to load configuration")?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .with_writer(std::io::stderr)
        .init();

    let home = Home::build(&config).context("failed to build the home")?;
    let printer = JournalPrinter::new(
        home.journal().clone(),
        config.output.format,
        std::io::stdout(),
    );
    let (done, finished) = oneshot::channel();
    let renderer = tokio::spawn(printer.follow(finished));

    let results = demo::run(&home);
    for snapshot in home.snapshots() {
        tracing::info!(
            device = %snapshot.name,
            kind = %snapshot.kind,
            on = snapshot.is_on,
            locked = ?snapshot.is_locked,
            temperature = ?snapshot.temperature,
            "final state"
        );
    }
    tracing::info!(
        steps = results.len(),
        undo_depth = home.invoker().len(),
        "demo finished"
    );

    if done.send(()).is_err() {
        tracing::warn!("journal printer stopped before the demo finished");
    }
    renderer
        .await
        .context("journal printer panicked")?
        .context("failed to write the journal")?;
    Ok(())
}
