//! Goal geometry on the arena rim
//!
//! A goal is a mouth cut into the arena circle, described by:
//! - angle: angular position of the mouth center
//! - width: chord between the two posts at the arena radius
//! - height: pocket depth (rendering only)
//!
//! The posts sit at `angle ± atan2(width / 2, R)`. Left is the post on the
//! counter-clockwise side (toward increasing angle).

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::consts::{GOAL_HEIGHT, GOAL_WIDTH};
use crate::{normalize_angle, polar_to_cartesian, wrap_angle};

/// The two sides of the match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Team {
    One,
    Two,
}

impl Team {
    /// The other team
    pub fn opponent(self) -> Team {
        match self {
            Team::One => Team::Two,
            Team::Two => Team::One,
        }
    }
}

/// Which post of a goal mouth
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PostSide {
    /// Post at `angle + half_span`
    Left,
    /// Post at `angle - half_span`
    Right,
}

impl PostSide {
    /// +1 for the left post, -1 for the right post (along the goal perpendicular)
    #[inline]
    pub fn sign(self) -> f64 {
        match self {
            PostSide::Left => 1.0,
            PostSide::Right => -1.0,
        }
    }
}

/// A rotating goal on the arena rim
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    /// Mouth center angle (radians, unbounded accumulator)
    pub angle: f64,
    /// Chord between the posts
    pub width: f64,
    /// Pocket depth
    pub height: f64,
    /// Team defending this goal; a breach scores for the opponent
    pub defender: Team,
}

impl Goal {
    pub fn new(angle: f64, defender: Team) -> Self {
        Self {
            angle,
            width: GOAL_WIDTH,
            height: GOAL_HEIGHT,
            defender,
        }
    }

    /// Angular half-span of the mouth at the given arena radius
    #[inline]
    pub fn half_span(&self, arena_radius: f64) -> f64 {
        (self.width / 2.0).atan2(arena_radius)
    }

    /// Angle of a post (not normalized)
    pub fn post_angle(&self, side: PostSide, arena_radius: f64) -> f64 {
        self.angle + side.sign() * self.half_span(arena_radius)
    }

    /// Cartesian position of a post center on the rim
    pub fn post_position(&self, side: PostSide, arena_radius: f64) -> DVec2 {
        polar_to_cartesian(arena_radius, self.post_angle(side, arena_radius))
    }

    /// Unit vector perpendicular to the goal's radial axis, pointing toward the left post
    #[inline]
    pub fn perpendicular(&self) -> DVec2 {
        DVec2::new(-self.angle.sin(), self.angle.cos())
    }

    /// Shortest angular distance between `theta` and the mouth center
    #[inline]
    pub fn angular_distance(&self, theta: f64) -> f64 {
        normalize_angle(theta - self.angle).abs()
    }

    /// Whether `theta` lies strictly between the two posts
    pub fn mouth_contains(&self, theta: f64, arena_radius: f64) -> bool {
        let theta = wrap_angle(theta);
        let left = wrap_angle(self.post_angle(PostSide::Left, arena_radius));
        let right = wrap_angle(self.post_angle(PostSide::Right, arena_radius));

        if right < left {
            theta > right && theta < left
        } else {
            // Mouth straddles 0; outside the smaller arc
            theta > right || theta < left
        }
    }

    /// Rotate the goal by `delta` radians
    #[inline]
    pub fn advance(&mut self, delta: f64) {
        self.angle += delta;
    }
}
