//! The scan loop.
//!
//! One cooperative task owns the reader, the indicator, the access
//! controller, and the event sink. Each scan is fully processed before the
//! next is accepted: resolve, decide, show the outcome color, publish the
//! event, dwell, clear. Indicator and sink failures are logged and
//! swallowed; only losing the reader ends the loop, since there is nothing
//! left to process without it.

use crate::config::GateConfig;
use gatepass_access::{AccessController, ScanOutcome};
use gatepass_core::EventTimestamp;
use gatepass_events::{AccessEvent, EventSink};
use gatepass_hardware::{Indicator, TagReader, traits::TagScan};
use std::time::Duration;
use tokio::time::sleep;
use tracing::{info, warn};

/// Scan-processing loop over a reader, an indicator, and an event sink.
pub struct GateLoop<R, I, S> {
    controller: AccessController,
    reader: R,
    indicator: I,
    sink: S,
    team: String,
    grant_dwell: Duration,
    deny_dwell: Duration,
}

impl<R, I, S> GateLoop<R, I, S>
where
    R: TagReader,
    I: Indicator,
    S: EventSink,
{
    /// Assemble a loop from its collaborators and the runtime config.
    pub fn new(
        config: &GateConfig,
        controller: AccessController,
        reader: R,
        indicator: I,
        sink: S,
    ) -> Self {
        Self {
            controller,
            reader,
            indicator,
            sink,
            team: config.team.clone(),
            grant_dwell: config.grant_dwell(),
            deny_dwell: config.deny_dwell(),
        }
    }

    /// Run until the reader disappears.
    ///
    /// Scans are processed strictly in arrival order, one at a time.
    ///
    /// # Errors
    ///
    /// Returns the reader's error when it disconnects; all other
    /// collaborator failures are handled inside the loop.
    pub async fn run(&mut self) -> gatepass_hardware::Result<()> {
        info!(team = %self.team, "scan loop started");
        loop {
            let scan = self.reader.next_scan().await?;
            self.handle_scan(&scan).await;
        }
    }

    /// Process a single scan to completion.
    ///
    /// Always produces exactly one indicator flash and one event record;
    /// there is no silent-failure path.
    pub async fn handle_scan(&mut self, scan: &TagScan) -> ScanOutcome {
        let outcome = self.controller.process_scan(&scan.uid);
        info!(
            uid = %outcome.uid,
            name = %outcome.display_name,
            label = outcome.label(),
            "scan processed"
        );

        if let Err(err) = self.indicator.show(outcome.color).await {
            warn!(%err, "indicator failed to show outcome color");
        }

        let event = AccessEvent::new(
            self.team.as_str(),
            outcome.display_name.as_str(),
            outcome.uid.as_str(),
            outcome.label(),
            &EventTimestamp::now(),
        );
        if let Err(err) = self.sink.publish(&event).await {
            warn!(%err, "event publication failed");
        }

        sleep(self.dwell_for(&outcome)).await;
        if let Err(err) = self.indicator.clear().await {
            warn!(%err, "indicator failed to clear");
        }

        outcome
    }

    fn dwell_for(&self, outcome: &ScanOutcome) -> Duration {
        if outcome.is_granted() {
            self.grant_dwell
        } else {
            self.deny_dwell
        }
    }

    /// The controller, for state inspection.
    pub fn controller(&self) -> &AccessController {
        &self.controller
    }
}
