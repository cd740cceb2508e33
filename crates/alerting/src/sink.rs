//! Alert sink implementations

use tracing::{info, warn};

/// Receiver of alert on/off transitions.
///
/// Implementations own the actual signalling mechanism (audio loop, buzzer
/// GPIO, desktop notification). `alert_started` begins a repeating alert;
/// `alert_stopped` silences it.
pub trait AlertSink {
    fn alert_started(&mut self);
    fn alert_stopped(&mut self);
}

/// Sink that only logs transitions; the default when no audio backend is
/// wired up.
#[derive(Debug, Default)]
pub struct LogAlertSink;

impl AlertSink for LogAlertSink {
    fn alert_started(&mut self) {
        warn!("drowsiness alert started");
    }

    fn alert_stopped(&mut self) {
        info!("drowsiness alert stopped");
    }
}

/// Sink that ignores all transitions
#[derive(Debug, Default)]
pub struct NullAlertSink;

impl AlertSink for NullAlertSink {
    fn alert_started(&mut self) {}
    fn alert_stopped(&mut self) {}
}
