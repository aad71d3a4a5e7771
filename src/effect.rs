//! Goal celebration pulse
//!
//! A one-shot flag with a wall-clock deadline. It expires after a fixed
//! real-time duration no matter how many steps ran (or whether the match
//! is paused), so the flash looks the same on any display.

use serde::{Deserialize, Serialize};

use crate::consts::GOAL_EFFECT_MS;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GoalEffect {
    /// Lifetime of one pulse (ms)
    pub duration_ms: f64,
    /// Wall-clock time the current pulse ends, if one is running
    expires_at: Option<f64>,
}

impl Default for GoalEffect {
    fn default() -> Self {
        Self::new(GOAL_EFFECT_MS)
    }
}

impl GoalEffect {
    pub fn new(duration_ms: f64) -> Self {
        Self {
            duration_ms,
            expires_at: None,
        }
    }

    /// Start (or restart) the pulse at `now_ms`
    pub fn trigger(&mut self, now_ms: f64) {
        self.expires_at = Some(now_ms + self.duration_ms);
    }

    /// Whether the pulse is showing at `now_ms`
    pub fn is_active(&self, now_ms: f64) -> bool {
        self.expires_at.is_some_and(|end| now_ms < end)
    }

    /// Drop any running pulse
    pub fn cancel(&mut self) {
        self.expires_at = None;
    }
}
