//! The `gatepass` binary.
//!
//! Wires the scan loop to a line-fed reader: tag UIDs arrive on stdin (one
//! per line, any accepted hex form), outcomes go to the indicator log and
//! the MQTT topic from the configuration file. `--demo` replaces stdin with
//! a scripted sequence that walks every registered tag through its full
//! entry/exit cycle and finishes with an unknown tag.
//!
//! ```console
//! $ gatepass --config gatepass.toml
//! $ echo "35 F2 B3 02" | gatepass
//! $ gatepass --demo
//! ```

use anyhow::Context;
use clap::Parser;
use gatepass_access::AccessController;
use gatepass_controller::{GateConfig, GateLoop, spawn_supervisor};
use gatepass_events::{FanoutSink, LogSink, MqttSink};
use gatepass_hardware::mock::{MockReader, MockReaderHandle};
use gatepass_hardware::{HardwareError, Indicator, LedColor};
use std::path::PathBuf;
use std::time::Duration;
use tokio::io::AsyncBufReadExt;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "gatepass", version, about = "RFID entry/exit gate controller")]
struct Cli {
    /// Path to the configuration file
    #[arg(short, long, default_value = "gatepass.toml")]
    config: PathBuf,

    /// Run a scripted scan sequence instead of reading UIDs from stdin
    #[arg(long)]
    demo: bool,

    /// Pause between scripted demo scans, in milliseconds
    #[arg(long, default_value_t = 1000)]
    demo_interval_ms: u64,
}

/// Indicator that renders colors into the log.
///
/// Stands in for the RGB LED when running without hardware; the scan loop
/// drives it exactly as it would a physical driver.
struct ConsoleIndicator;

impl Indicator for ConsoleIndicator {
    async fn show(&mut self, color: LedColor) -> gatepass_hardware::Result<()> {
        let (r, g, b) = color.as_rgb();
        info!(r, g, b, "indicator on");
        Ok(())
    }

    async fn clear(&mut self) -> gatepass_hardware::Result<()> {
        debug!("indicator off");
        Ok(())
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let config = GateConfig::load(&cli.config)
        .with_context(|| format!("failed to load {}", cli.config.display()))?;
    let registry = config.identity_registry().context("invalid registry")?;
    info!(
        team = %config.team,
        broker = %config.broker.host,
        tags = registry.len(),
        "gatepass starting"
    );

    let (mqtt_sink, event_loop) = MqttSink::connect(&config.mqtt_config());
    let supervisor = spawn_supervisor(event_loop, config.backoff());
    let sink = FanoutSink::new(LogSink::new(), mqtt_sink);

    let (reader, reader_handle) = MockReader::new();

    let feeder = if cli.demo {
        let uids: Vec<_> = registry.identities().map(|id| id.uid.clone()).collect();
        let interval = Duration::from_millis(cli.demo_interval_ms);
        tokio::spawn(feed_demo(reader_handle, uids, interval))
    } else {
        tokio::spawn(feed_stdin(reader_handle))
    };

    let mut gate = GateLoop::new(
        &config,
        AccessController::new(registry),
        reader,
        ConsoleIndicator,
        sink,
    );

    let result = gate.run().await;
    supervisor.abort();
    feeder.abort();

    match result {
        // The feeder dropping its handle is the normal end of input.
        Err(HardwareError::Disconnected { .. }) => {
            info!("input finished, shutting down");
            Ok(())
        }
        Err(err) => Err(err).context("scan loop failed"),
        Ok(()) => Ok(()),
    }
}

/// Feed UIDs from stdin, one per line, until EOF.
async fn feed_stdin(handle: MockReaderHandle) {
    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    let mut lines = stdin.lines();

    info!("reading tag UIDs from stdin, one per line");
    while let Ok(Some(line)) = lines.next_line().await {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match line.parse() {
            Ok(uid) => {
                if handle.present_uid(uid).await.is_err() {
                    break;
                }
            }
            Err(err) => warn!(%err, input = line, "ignoring unparseable UID"),
        }
    }
    // Dropping the handle disconnects the reader and ends the scan loop.
}

/// Scripted sequence: every registered tag scans three times (entry, exit,
/// then no-pass), followed by one unknown tag.
async fn feed_demo(
    handle: MockReaderHandle,
    uids: Vec<gatepass_core::TagUid>,
    interval: Duration,
) {
    info!(tags = uids.len(), "running demo scan sequence");

    for uid in &uids {
        for _ in 0..3 {
            if handle.present_uid(uid.clone()).await.is_err() {
                return;
            }
            tokio::time::sleep(interval).await;
        }
    }

    if let Ok(stranger) = "DE AD BE EF".parse() {
        let _ = handle.present_uid(stranger).await;
        tokio::time::sleep(interval).await;
    }
}
