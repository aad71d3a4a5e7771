//! Match clock
//!
//! Maps real time spent playing onto a 90 minute match. Before kick-off the
//! clock reads minute 0.
//!
//! Time spent paused is not counted. The earlier web version measured from
//! the first kick-off, so its clock kept running through pauses; banking
//! only active time here is deliberate.

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_MATCH_SECONDS, FULL_TIME_MINUTE};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchClock {
    /// Real milliseconds a full match takes
    pub duration_ms: f64,
    /// Playing time banked before the current run (ms)
    banked_ms: f64,
    /// Wall-clock start of the current run, if running
    running_since: Option<f64>,
    kicked_off: bool,
}

impl Default for MatchClock {
    fn default() -> Self {
        Self::new(DEFAULT_MATCH_SECONDS)
    }
}

impl MatchClock {
    pub fn new(match_seconds: f64) -> Self {
        Self {
            duration_ms: match_seconds * 1000.0,
            banked_ms: 0.0,
            running_since: None,
            kicked_off: false,
        }
    }

    /// Start or resume counting at `now_ms`
    pub fn start(&mut self, now_ms: f64) {
        if self.running_since.is_none() {
            self.running_since = Some(now_ms);
            self.kicked_off = true;
        }
    }

    /// Stop counting at `now_ms`
    pub fn pause(&mut self, now_ms: f64) {
        if let Some(since) = self.running_since.take() {
            self.banked_ms += (now_ms - since).max(0.0);
        }
    }

    /// Back to before kick-off
    pub fn reset(&mut self) {
        self.banked_ms = 0.0;
        self.running_since = None;
        self.kicked_off = false;
    }

    pub fn is_running(&self) -> bool {
        self.running_since.is_some()
    }

    pub fn has_kicked_off(&self) -> bool {
        self.kicked_off
    }

    /// Playing time so far (ms)
    pub fn elapsed_ms(&self, now_ms: f64) -> f64 {
        let current = self
            .running_since
            .map_or(0.0, |since| (now_ms - since).max(0.0));
        self.banked_ms + current
    }

    /// Match minute: 0 before kick-off, then 1 through 90
    pub fn minute(&self, now_ms: f64) -> u32 {
        if !self.kicked_off {
            return 0;
        }
        let fraction = self.elapsed_ms(now_ms) / self.duration_ms;
        let minute = (fraction * FULL_TIME_MINUTE as f64).floor() as u32 + 1;
        minute.min(FULL_TIME_MINUTE)
    }

    pub fn is_full_time(&self, now_ms: f64) -> bool {
        self.minute(now_ms) >= FULL_TIME_MINUTE
    }
}
