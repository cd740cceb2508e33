//! Alert transition gating

use crate::sink::AlertSink;

/// Turns the per-frame alert flag into start/stop calls on a sink.
///
/// The sink is signalled only on edges: a false-to-true flag starts the
/// alert, true-to-false stops it, and a steady flag is silent. The alert
/// therefore lives exactly as long as the alerting condition, instead of
/// sounding forever once started. With audio disabled, start edges are
/// swallowed; disabling audio while the alert is sounding stops it on the
/// next update.
#[derive(Debug)]
pub struct AlertGate<S: AlertSink> {
    sink: S,
    sounding: bool,
}

impl<S: AlertSink> AlertGate<S> {
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            sounding: false,
        }
    }

    /// Feed one frame's alert flag and audio setting
    pub fn update(&mut self, alert_active: bool, audio_enabled: bool) {
        let should_sound = alert_active && audio_enabled;
        if should_sound && !self.sounding {
            self.sink.alert_started();
        } else if !should_sound && self.sounding {
            self.sink.alert_stopped();
        }
        self.sounding = should_sound;
    }

    /// Whether the alert is currently sounding
    pub fn is_sounding(&self) -> bool {
        self.sounding
    }

    /// Consume the gate, returning the sink
    pub fn into_sink(self) -> S {
        self.sink
    }
}
