//! Roto Goal - A rotating circular arena football arcade game
//!
//! Core modules:
//! - `sim`: Simulation core (ball integration, boundary and goal classification)
//! - `game`: Match driver (play/pause/reset, one step per frame)
//! - `match_clock`: Real time to match minute mapping
//! - `effect`: Wall-clock goal effect pulse
//! - `settings`: Presentation preferences

pub mod effect;
pub mod game;
pub mod match_clock;
pub mod settings;
pub mod sim;

pub use effect::GoalEffect;
pub use game::Match;
pub use match_clock::MatchClock;
pub use settings::Settings;

use glam::DVec2;

/// Game configuration constants
pub mod consts {
    /// Arena dimensions
    pub const ARENA_RADIUS: f64 = 140.0;

    /// Goal mouth opening (chord at the arena radius)
    pub const GOAL_WIDTH: f64 = 35.0;
    /// Goal pocket depth, rendering only
    pub const GOAL_HEIGHT: f64 = 12.0;
    /// Goal rotation per step (radians)
    pub const ROTATION_SPEED: f64 = 0.02;
    /// Extra clearance around a post center that counts as a hit
    pub const POST_MARGIN: f64 = 3.0;
    /// Goals further than this from the ball angle are not examined
    pub const GOAL_SEARCH_ANGLE: f64 = 0.5;

    /// Ball defaults
    pub const BALL_RADIUS: f64 = 10.0;
    /// Downward acceleration (units/step²)
    pub const GRAVITY: f64 = 0.15;
    /// Speed multiplier on a wall bounce
    pub const SPEED_BOOST: f64 = 1.1;
    /// Post bounces use a reduced boost of SPEED_BOOST * POST_BOOST_FACTOR
    pub const POST_BOOST_FACTOR: f64 = 0.9;
    /// Maximum ball speed (units/step)
    pub const MAX_SPEED: f64 = 8.0;
    /// Visual spin per unit of horizontal velocity
    pub const SPIN_FACTOR: f64 = 0.05;

    /// Kick-off horizontal velocity is uniform in ±this
    pub const KICKOFF_VX_RANGE: f64 = 1.5;
    /// Kick-off vertical velocity (negative is up)
    pub const KICKOFF_VY: f64 = -2.0;

    /// Goal effect lifetime (wall-clock milliseconds)
    pub const GOAL_EFFECT_MS: f64 = 500.0;

    /// Match length
    pub const FULL_TIME_MINUTE: u32 = 90;
    /// Real seconds a full match takes by default
    pub const DEFAULT_MATCH_SECONDS: f64 = 15.0;
}

/// Normalized angle to [-π, π)
#[inline]
pub fn normalize_angle(mut angle: f64) -> f64 {
    use std::f64::consts::PI;
    while angle >= PI {
        angle -= 2.0 * PI;
    }
    while angle < -PI {
        angle += 2.0 * PI;
    }
    angle
}

/// Wrap angle to [0, 2π)
#[inline]
pub fn wrap_angle(angle: f64) -> f64 {
    use std::f64::consts::TAU;
    let wrapped = angle.rem_euclid(TAU);
    // rem_euclid can round up to TAU for tiny negative inputs
    if wrapped >= TAU { 0.0 } else { wrapped }
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f64, theta: f64) -> DVec2 {
    DVec2::new(r * theta.cos(), r * theta.sin())
}

/// Convert cartesian (x, y) to polar (r, theta)
#[inline]
pub fn cartesian_to_polar(pos: DVec2) -> (f64, f64) {
    (pos.length(), pos.y.atan2(pos.x))
}
