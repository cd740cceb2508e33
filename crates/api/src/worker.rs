//! Frame loop driving the drowsiness monitor

use std::time::Duration;

use alerting::{AlertGate, AlertSink};
use drowsiness::DrowsinessMonitor;
use tracing::info;

use crate::source::FrameSource;
use crate::SharedState;

/// Pull frames from `source` and drive the monitor until the stream ends.
///
/// The monitor is stepped strictly sequentially from this single task. Each
/// iteration snapshots the shared configuration, so settings updates landing
/// mid-step are seen whole on the next frame, and publishes the derived
/// status for the poll endpoint. Returns the alert gate so callers can
/// inspect or reclaim the sink.
pub async fn run_monitor_loop<F, S>(
    state: SharedState,
    mut source: F,
    sink: S,
    frame_interval: Duration,
) -> AlertGate<S>
where
    F: FrameSource,
    S: AlertSink,
{
    let config = state.read().await.config.clone();
    let mut monitor = DrowsinessMonitor::new(&config);
    let mut gate = AlertGate::new(sink);
    let mut interval = tokio::time::interval(frame_interval.max(Duration::from_millis(1)));

    info!("monitor loop started");
    while let Some(faces) = source.next_frame() {
        interval.tick().await;

        let config = state.read().await.config.clone();
        let outcome = monitor.step(&config, &faces);
        gate.update(outcome.alert_active, config.audio_enabled);

        state.write().await.status = outcome.status;
    }
    info!("frame source ended, monitor loop stopping");

    gate
}
