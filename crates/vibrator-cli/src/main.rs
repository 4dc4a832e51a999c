mod cli;
mod logging;

use anyhow::Context;
use clap::Parser;
use cli::{Cli, Command};
use std::sync::Arc;
use tokio::sync::Notify;
use tracing::{debug, info};
use vibrator_hal::{CallbackRef, Vibrator, VibratorService};
use vibrator_hardware::mock::{MockSink, MockSinkHandle};
use vibrator_hardware::settings::VibratorSettings;
use vibrator_hardware::sysfs::SysfsSink;
use vibrator_hardware::AnyControlSink;

fn load_settings(cli: &Cli) -> anyhow::Result<VibratorSettings> {
    let mut settings = match &cli.config {
        Some(path) => VibratorSettings::load(path)
            .with_context(|| format!("Unable to load settings from {}", path.display()))?,
        None => VibratorSettings::default(),
    };
    if let Some(table) = cli.table {
        settings.sequence_table = table;
    }
    if let Some(policy) = cli.notifier_policy() {
        settings.notifier_policy = policy;
    }
    Ok(settings)
}

fn build_sink(cli: &Cli) -> (AnyControlSink, Option<MockSinkHandle>) {
    if cli.dry_run {
        let (sink, handle) = MockSink::new();
        return (sink.into(), Some(handle));
    }
    let sink = match &cli.sysfs_root {
        Some(root) => SysfsSink::with_root(root),
        None => SysfsSink::new(),
    };
    (sink.into(), None)
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let settings = load_settings(&cli)?;
    let (sink, dry_run) = build_sink(&cli);
    let vibrator = Vibrator::new(sink, settings);

    match cli.command {
        Command::On { duration_ms, wait } => {
            let done = Arc::new(Notify::new());
            let callback = wait.then(|| {
                let signal = Arc::clone(&done);
                let callback: CallbackRef = Arc::new(move || -> vibrator_core::Result<()> {
                    info!("Vibration complete");
                    signal.notify_one();
                    Ok(())
                });
                callback
            });
            let scheduled = callback.is_some() && duration_ms >= 1;

            vibrator
                .on(duration_ms, callback)
                .await
                .with_context(|| format!("Unable to vibrate for {duration_ms}ms"))?;
            info!("Vibrator on for {}ms", duration_ms);

            if scheduled {
                debug!("Waiting for completion");
                done.notified().await;
            }
        }
        Command::Off => {
            vibrator.off().await.context("Unable to stop vibrator")?;
            info!("Vibrator off");
        }
        Command::Capabilities => {
            let caps = vibrator.get_capabilities()?;
            println!("{caps}");
        }
        Command::ShowConfig => {
            println!("{}", vibrator.settings().to_json_pretty()?);
        }
    }

    if let Some(handle) = dry_run {
        for write in handle.writes() {
            println!("{write}");
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::setup(cli.verbose);
    run(cli).await
}
