//! Match driver
//!
//! Glue between the render loop and the simulation. The host calls
//! `frame` once per display refresh with the current wall-clock time;
//! pausing simply means `frame` stops stepping the pitch.

use crate::effect::GoalEffect;
use crate::match_clock::MatchClock;
use crate::settings::Settings;
use crate::sim::{GameEvent, Pitch};

/// A match in progress
#[derive(Debug, Clone)]
pub struct Match {
    pub pitch: Pitch,
    pub clock: MatchClock,
    pub goal_effect: GoalEffect,
    /// Flash/shake on goals
    pub effects_enabled: bool,
    playing: bool,
}

impl Match {
    pub fn new(seed: u64, settings: &Settings) -> Self {
        Self {
            pitch: Pitch::new(seed),
            clock: MatchClock::new(settings.effective_match_seconds()),
            goal_effect: GoalEffect::default(),
            effects_enabled: settings.effective_goal_effect(),
            playing: false,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Play/pause button. Kicks off on the first press; ignored at full time.
    pub fn toggle_play(&mut self, now_ms: f64) {
        if self.clock.is_full_time(now_ms) {
            log::info!("Full time, reset to play again");
            return;
        }

        if self.playing {
            self.clock.pause(now_ms);
            self.playing = false;
            log::info!("Paused at {}'", self.clock.minute(now_ms));
        } else {
            if !self.clock.has_kicked_off() {
                log::info!("Kick-off!");
            }
            self.clock.start(now_ms);
            self.playing = true;
        }
    }

    /// Reset button: fresh pitch, clock back to 0', not playing
    pub fn reset(&mut self) {
        self.pitch.reset();
        self.clock.reset();
        self.goal_effect.cancel();
        self.playing = false;
    }

    /// Run one display frame
    ///
    /// Steps the pitch exactly once while playing, starts the goal effect on
    /// a goal and blows the final whistle at minute 90.
    pub fn frame(&mut self, now_ms: f64) -> Option<GameEvent> {
        if !self.playing {
            return None;
        }

        let event = self.pitch.step();
        if matches!(event, Some(GameEvent::Goal { .. })) && self.effects_enabled {
            self.goal_effect.trigger(now_ms);
        }

        if self.clock.is_full_time(now_ms) {
            self.clock.pause(now_ms);
            self.playing = false;
            let score = self.pitch.score();
            log::info!(
                "Full time: {}-{} ({} goals)",
                score.team1,
                score.team2,
                score.total()
            );
        }

        event
    }

    /// Current match minute (0-90)
    pub fn minute(&self, now_ms: f64) -> u32 {
        self.clock.minute(now_ms)
    }

    /// Whether the goal effect should be showing
    pub fn goal_effect_active(&self, now_ms: f64) -> bool {
        self.goal_effect.is_active(now_ms)
    }
}
