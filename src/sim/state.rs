//! Simulation state and core types
//!
//! `Pitch` owns every mutable entity of a match: the ball, both goals and
//! the score. It is an explicit instance, so separate matches (and tests)
//! never share state.

use glam::DVec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::goal::{Goal, PostSide, Team};
use crate::consts::*;

/// Something noteworthy that happened during a step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Ball bounced off the plain rim
    WallBounce,
    /// Ball struck a post of the goal defended by `defender`
    PostHit { defender: Team, side: PostSide },
    /// Ball went in; `scorer` gets the point
    Goal { scorer: Team },
}

/// The ball
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    /// Position relative to the arena center
    pub pos: DVec2,
    /// Velocity in units/step
    pub vel: DVec2,
    pub radius: f64,
    /// Visual spin accumulator (radians)
    pub rotation: f64,
}

impl Ball {
    /// A ball at the center, at rest
    pub fn new() -> Self {
        Self {
            pos: DVec2::ZERO,
            vel: DVec2::ZERO,
            radius: BALL_RADIUS,
            rotation: 0.0,
        }
    }

    /// Put the ball on the center spot with a kick-off velocity
    pub fn kick_off(&mut self, vx: f64) {
        self.pos = DVec2::ZERO;
        self.vel = DVec2::new(vx, KICKOFF_VY);
        self.rotation = 0.0;
    }
}

impl Default for Ball {
    fn default() -> Self {
        Self::new()
    }
}

/// Goals per team
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub team1: u32,
    pub team2: u32,
}

impl Score {
    /// Award one goal to `team`
    pub fn credit(&mut self, team: Team) {
        match team {
            Team::One => self.team1 += 1,
            Team::Two => self.team2 += 1,
        }
    }

    pub fn get(&self, team: Team) -> u32 {
        match team {
            Team::One => self.team1,
            Team::Two => self.team2,
        }
    }

    pub fn total(&self) -> u32 {
        self.team1 + self.team2
    }
}

/// Read-only view handed to the presentation layer between steps
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub ball: Ball,
    pub goal1: Goal,
    pub goal2: Goal,
    pub score: Score,
}

/// Complete simulation state for one match
#[derive(Debug, Clone)]
pub struct Pitch {
    /// Seed the kick-off RNG was created with
    pub seed: u64,
    pub ball: Ball,
    /// goal1 (defended by team 1) and goal2 (defended by team 2), π apart
    pub goals: [Goal; 2],
    pub score: Score,
    /// Steps simulated since the last reset
    pub time_steps: u64,
    rng: Pcg32,
}

impl Pitch {
    /// Create a new pitch with the given kick-off seed
    pub fn new(seed: u64) -> Self {
        let mut pitch = Self {
            seed,
            ball: Ball::new(),
            goals: Self::initial_goals(),
            score: Score::default(),
            time_steps: 0,
            rng: Pcg32::seed_from_u64(seed),
        };
        pitch.kick_off();
        pitch
    }

    fn initial_goals() -> [Goal; 2] {
        [
            Goal::new(0.0, Team::One),
            Goal::new(std::f64::consts::PI, Team::Two),
        ]
    }

    /// Back to kick-off: ball centered, goals at 0/π, score 0-0
    ///
    /// The RNG keeps its stream, so only the kick-off `vx` differs between
    /// consecutive resets.
    pub fn reset(&mut self) {
        self.goals = Self::initial_goals();
        self.score = Score::default();
        self.time_steps = 0;
        self.kick_off();
        log::info!("Pitch reset (kick-off vx {:.3})", self.ball.vel.x);
    }

    /// Center the ball with a random horizontal and fixed upward velocity
    pub fn kick_off(&mut self) {
        let vx = self.rng.random_range(-KICKOFF_VX_RANGE..KICKOFF_VX_RANGE);
        self.ball.kick_off(vx);
    }

    pub fn ball(&self) -> &Ball {
        &self.ball
    }

    pub fn goal1(&self) -> &Goal {
        &self.goals[0]
    }

    pub fn goal2(&self) -> &Goal {
        &self.goals[1]
    }

    pub fn score(&self) -> Score {
        self.score
    }

    /// Copy of everything a renderer needs
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            ball: self.ball.clone(),
            goal1: self.goals[0].clone(),
            goal2: self.goals[1].clone(),
            score: self.score,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_new_pitch_is_at_kick_off() {
        let pitch = Pitch::new(7);
        assert_eq!(pitch.ball.pos, DVec2::ZERO);
        assert_eq!(pitch.ball.vel.y, KICKOFF_VY);
        assert!(pitch.ball.vel.x.abs() < KICKOFF_VX_RANGE);
        assert_eq!(pitch.ball.radius, BALL_RADIUS);
        assert_eq!(pitch.goal1().angle, 0.0);
        assert_eq!(pitch.goal2().angle, PI);
        assert_eq!(pitch.goal1().defender, Team::One);
        assert_eq!(pitch.goal2().defender, Team::Two);
        assert_eq!(pitch.score(), Score::default());
    }

    #[test]
    fn test_same_seed_same_kick_off() {
        let a = Pitch::new(1234);
        let b = Pitch::new(1234);
        assert_eq!(a.ball, b.ball);
    }

    #[test]
    fn test_score_credit() {
        let mut score = Score::default();
        score.credit(Team::Two);
        score.credit(Team::Two);
        score.credit(Team::One);
        assert_eq!(score.get(Team::One), 1);
        assert_eq!(score.get(Team::Two), 2);
        assert_eq!(score.total(), 3);
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut pitch = Pitch::new(99);
        pitch.ball.pos = DVec2::new(50.0, -20.0);
        pitch.ball.rotation = 4.2;
        pitch.goals[0].angle = 3.0;
        pitch.goals[1].angle = 3.0 + PI;
        pitch.score.credit(Team::One);
        pitch.time_steps = 300;

        pitch.reset();

        assert_eq!(pitch.ball.pos, DVec2::ZERO);
        assert_eq!(pitch.ball.rotation, 0.0);
        assert_eq!(pitch.ball.vel.y, KICKOFF_VY);
        assert_eq!(pitch.goal1().angle, 0.0);
        assert_eq!(pitch.goal2().angle, PI);
        assert_eq!(pitch.score(), Score::default());
        assert_eq!(pitch.time_steps, 0);
    }

    #[test]
    fn test_snapshot_serializes() {
        let pitch = Pitch::new(5);
        let value = serde_json::to_value(pitch.snapshot()).unwrap();
        assert_eq!(value["score"]["team1"], 0);
        assert_eq!(value["score"]["team2"], 0);
        assert_eq!(value["goal1"]["defender"], "One");
        assert_eq!(value["goal2"]["defender"], "Two");
        assert_eq!(value["ball"]["radius"], BALL_RADIUS);
        assert_eq!(value["ball"]["pos"][0], 0.0);
    }
}
