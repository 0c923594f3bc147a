//! MQTT connection supervision.
//!
//! The rumqttc event loop must be polled for the connection to make any
//! progress; this module runs that polling on a dedicated task so the scan
//! loop never blocks on the network. Connection errors trigger the
//! exponential backoff schedule before the next attempt, and a successful
//! `ConnAck` resets it.

use crate::backoff::Backoff;
use rumqttc::{Event, EventLoop, Packet};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

/// Drive the broker connection forever.
///
/// Intended to be spawned; see [`spawn_supervisor`]. Ends only when the
/// task is aborted.
pub async fn supervise_connection(mut event_loop: EventLoop, mut backoff: Backoff) {
    loop {
        match event_loop.poll().await {
            Ok(Event::Incoming(Packet::ConnAck(_))) => {
                info!("connected to broker");
                backoff.reset();
            }
            Ok(event) => {
                debug!(?event, "broker event");
            }
            Err(err) => {
                let delay = backoff.next_delay();
                warn!(%err, delay_ms = delay.as_millis() as u64, "broker connection error, backing off");
                tokio::time::sleep(delay).await;
            }
        }
    }
}

/// Spawn the connection supervisor on the current runtime.
///
/// The returned handle can be aborted at shutdown; in-flight publications
/// queued in the client are dropped with it.
pub fn spawn_supervisor(event_loop: EventLoop, backoff: Backoff) -> JoinHandle<()> {
    tokio::spawn(supervise_connection(event_loop, backoff))
}
