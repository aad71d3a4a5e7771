//! Per-frame simulation step
//!
//! One call advances the match by one frame. There is no fixed timestep:
//! the driver calls `step` once per render callback, so the simulation runs
//! faster on faster displays.

use super::collision::{BoundaryHit, classify_boundary, contain, resolve_post, resolve_wall};
use super::state::{GameEvent, Pitch};
use crate::consts::*;

impl Pitch {
    /// Advance the simulation by one step
    ///
    /// Order is fixed: gravity, Euler integration, one boundary
    /// classification, goal rotation, ball spin. A goal re-centers the ball
    /// and skips the spin update, but the goals still rotate.
    pub fn step(&mut self) -> Option<GameEvent> {
        self.time_steps += 1;

        self.ball.vel.y += GRAVITY;
        self.ball.pos += self.ball.vel;

        let hit = classify_boundary(self.ball.pos, self.ball.radius, ARENA_RADIUS, &self.goals);

        let event = match hit {
            Some(BoundaryHit::Goal { scorer }) => {
                self.score.credit(scorer);
                self.kick_off();
                log::info!(
                    "GOAL for {:?}! Score {}-{}",
                    scorer,
                    self.score.team1,
                    self.score.team2
                );
                Some(GameEvent::Goal { scorer })
            }
            Some(BoundaryHit::Post(contact)) => {
                resolve_post(&mut self.ball, &contact);
                contain(&mut self.ball, ARENA_RADIUS);
                log::debug!("{:?} post of {:?} goal hit", contact.side, contact.defender);
                Some(GameEvent::PostHit {
                    defender: contact.defender,
                    side: contact.side,
                })
            }
            Some(BoundaryHit::Wall) => {
                resolve_wall(&mut self.ball, ARENA_RADIUS);
                Some(GameEvent::WallBounce)
            }
            None => None,
        };

        for goal in &mut self.goals {
            goal.advance(ROTATION_SPEED);
        }

        if !matches!(event, Some(GameEvent::Goal { .. })) {
            self.ball.rotation += self.ball.vel.x * SPIN_FACTOR;
        }

        event
    }
}
