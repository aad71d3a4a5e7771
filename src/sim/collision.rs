//! Boundary classification and collision response
//!
//! The tricky part of Roto Goal: deciding whether a ball that reached the
//! rim slipped through a rotating goal mouth, clipped a post, or simply hit
//! the wall, then computing the matching response.

use glam::DVec2;

use super::goal::{Goal, PostSide, Team};
use super::state::Ball;
use crate::cartesian_to_polar;
use crate::consts::{GOAL_SEARCH_ANGLE, MAX_SPEED, POST_BOOST_FACTOR, POST_MARGIN, SPEED_BOOST};

/// Contact between the ball and a goal post
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PostContact {
    /// Team defending the goal whose post was hit
    pub defender: Team,
    /// Which post
    pub side: PostSide,
    /// Post center on the rim
    pub post: DVec2,
    /// Goal perpendicular axis (unit, toward the left post)
    pub perpendicular: DVec2,
    /// Overlap between the ball and the post clearance circle
    pub penetration: f64,
}

/// How the ball met the arena boundary this step
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BoundaryHit {
    /// Plain rim bounce
    Wall,
    /// Ball passed between the posts; `scorer` is the attacking team
    Goal { scorer: Team },
    /// Ball struck a post
    Post(PostContact),
}

/// Classify the ball's interaction with the arena boundary
///
/// Returns `None` when the ball does not overlap the rim, or when the ball
/// sits at the exact center so no boundary normal exists.
pub fn classify_boundary(
    ball_pos: DVec2,
    ball_radius: f64,
    arena_radius: f64,
    goals: &[Goal],
) -> Option<BoundaryHit> {
    let (dist, ball_theta) = cartesian_to_polar(ball_pos);

    if dist + ball_radius <= arena_radius || dist <= f64::EPSILON {
        return None;
    }

    for goal in goals {
        if goal.angular_distance(ball_theta) > GOAL_SEARCH_ANGLE {
            continue;
        }

        if let Some(contact) = check_post_collision(ball_pos, ball_radius, arena_radius, goal) {
            return Some(BoundaryHit::Post(contact));
        }

        if goal.mouth_contains(ball_theta, arena_radius) {
            return Some(BoundaryHit::Goal {
                scorer: goal.defender.opponent(),
            });
        }
    }

    Some(BoundaryHit::Wall)
}

/// Check both posts of a goal, left first
fn check_post_collision(
    ball_pos: DVec2,
    ball_radius: f64,
    arena_radius: f64,
    goal: &Goal,
) -> Option<PostContact> {
    let threshold = ball_radius + POST_MARGIN;

    [PostSide::Left, PostSide::Right].into_iter().find_map(|side| {
        let post = goal.post_position(side, arena_radius);
        let dist = ball_pos.distance(post);
        (dist < threshold).then(|| PostContact {
            defender: goal.defender,
            side,
            post,
            perpendicular: goal.perpendicular(),
            penetration: threshold - dist,
        })
    })
}

/// Reflect velocity off a surface
///
/// Standard reflection: v' = v - 2(v·n)n
#[inline]
pub fn reflect_velocity(velocity: DVec2, normal: DVec2) -> DVec2 {
    velocity - 2.0 * velocity.dot(normal) * normal
}

/// Uniformly rescale velocity so its length does not exceed `max_speed`
#[inline]
pub fn clamp_speed(velocity: DVec2, max_speed: f64) -> DVec2 {
    let speed = velocity.length();
    if speed > max_speed {
        velocity / speed * max_speed
    } else {
        velocity
    }
}

/// Bounce the ball off the rim and move it back inside
///
/// Reflect about the outward normal, boost, clamp, then push back by the
/// exact penetration so `|pos| + radius == arena_radius`.
pub fn resolve_wall(ball: &mut Ball, arena_radius: f64) {
    let dist = ball.pos.length();
    if dist <= f64::EPSILON {
        return;
    }
    let normal = ball.pos / dist;

    ball.vel = reflect_velocity(ball.vel, normal) * SPEED_BOOST;
    ball.vel = clamp_speed(ball.vel, MAX_SPEED);

    let overlap = dist + ball.radius - arena_radius;
    ball.pos -= normal * overlap;
}

/// Bounce the ball off a goal post
///
/// Reflects about the goal's perpendicular axis with a reduced boost and
/// pushes the ball along that axis by the penetration depth, toward the
/// outside of the struck post.
pub fn resolve_post(ball: &mut Ball, contact: &PostContact) {
    let axis = contact.perpendicular;
    ball.vel = reflect_velocity(ball.vel, axis) * (SPEED_BOOST * POST_BOOST_FACTOR);
    ball.vel = clamp_speed(ball.vel, MAX_SPEED);
    ball.pos += axis * contact.side.sign() * contact.penetration;
}

/// Project the ball back inside the arena without touching its velocity
pub fn contain(ball: &mut Ball, arena_radius: f64) {
    let dist = ball.pos.length();
    if dist <= f64::EPSILON {
        return;
    }
    let overlap = dist + ball.radius - arena_radius;
    if overlap > 0.0 {
        ball.pos -= ball.pos / dist * overlap;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{ARENA_RADIUS, BALL_RADIUS};
    use crate::polar_to_cartesian;
    use std::f64::consts::{FRAC_PI_2, PI};

    fn goals_at(angle1: f64) -> [Goal; 2] {
        [Goal::new(angle1, Team::One), Goal::new(angle1 + PI, Team::Two)]
    }

    fn ball_at(pos: DVec2, vel: DVec2) -> Ball {
        Ball {
            pos,
            vel,
            radius: BALL_RADIUS,
            rotation: 0.0,
        }
    }

    #[test]
    fn test_inside_arena_is_not_a_boundary_event() {
        let goals = goals_at(0.0);
        let hit = classify_boundary(DVec2::new(100.0, 0.0), BALL_RADIUS, ARENA_RADIUS, &goals);
        assert_eq!(hit, None);

        // Exactly touching is not an overlap
        let hit = classify_boundary(DVec2::new(130.0, 0.0), BALL_RADIUS, ARENA_RADIUS, &goals);
        assert_eq!(hit, None);
    }

    #[test]
    fn test_zero_distance_is_degenerate() {
        let goals = goals_at(0.0);
        // Ball bigger than the arena, sitting at the center
        assert_eq!(classify_boundary(DVec2::ZERO, 200.0, ARENA_RADIUS, &goals), None);
    }

    #[test]
    fn test_wall_away_from_goals() {
        let goals = goals_at(0.0);
        let pos = polar_to_cartesian(135.0, FRAC_PI_2);
        let hit = classify_boundary(pos, BALL_RADIUS, ARENA_RADIUS, &goals);
        assert_eq!(hit, Some(BoundaryHit::Wall));
    }

    #[test]
    fn test_goal1_breach_scores_for_team2() {
        let goals = goals_at(-FRAC_PI_2);
        let pos = DVec2::new(0.0, -135.85);
        let hit = classify_boundary(pos, BALL_RADIUS, ARENA_RADIUS, &goals);
        assert_eq!(hit, Some(BoundaryHit::Goal { scorer: Team::Two }));
    }

    #[test]
    fn test_goal2_breach_scores_for_team1() {
        let goals = goals_at(-FRAC_PI_2);
        let pos = DVec2::new(0.0, 135.85);
        let hit = classify_boundary(pos, BALL_RADIUS, ARENA_RADIUS, &goals);
        assert_eq!(hit, Some(BoundaryHit::Goal { scorer: Team::One }));
    }

    #[test]
    fn test_ball_on_post_is_post_not_goal() {
        let goals = goals_at(0.3);
        for side in [PostSide::Left, PostSide::Right] {
            let post = goals[0].post_position(side, ARENA_RADIUS);
            match classify_boundary(post, BALL_RADIUS, ARENA_RADIUS, &goals) {
                Some(BoundaryHit::Post(contact)) => {
                    assert_eq!(contact.side, side);
                    assert_eq!(contact.defender, Team::One);
                    assert!((contact.penetration - (BALL_RADIUS + POST_MARGIN)).abs() < 1e-9);
                }
                other => panic!("expected post contact, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_goal_just_outside_search_angle_is_wall() {
        let goals = goals_at(0.0);
        let pos = polar_to_cartesian(135.0, GOAL_SEARCH_ANGLE + 0.01);
        let hit = classify_boundary(pos, BALL_RADIUS, ARENA_RADIUS, &goals);
        assert_eq!(hit, Some(BoundaryHit::Wall));
    }

    #[test]
    fn test_reflect_velocity() {
        // Ball moving right, hits vertical wall (normal pointing left)
        let reflected = reflect_velocity(DVec2::new(100.0, 0.0), DVec2::new(-1.0, 0.0));
        assert!((reflected.x + 100.0).abs() < 1e-9);
        assert!(reflected.y.abs() < 1e-9);
    }

    #[test]
    fn test_clamp_speed() {
        let v = clamp_speed(DVec2::new(30.0, 40.0), MAX_SPEED);
        assert!((v.length() - MAX_SPEED).abs() < 1e-9);
        assert!((v.x / v.y - 0.75).abs() < 1e-9);

        let slow = DVec2::new(1.0, 2.0);
        assert_eq!(clamp_speed(slow, MAX_SPEED), slow);
    }

    #[test]
    fn test_resolve_wall_restores_invariant() {
        let mut ball = ball_at(DVec2::new(138.0, 10.0), DVec2::new(3.0, 1.0));
        resolve_wall(&mut ball, ARENA_RADIUS);
        assert!((ball.pos.length() + ball.radius - ARENA_RADIUS).abs() < 1e-9);
        // Now moving inward
        assert!(ball.vel.dot(ball.pos) < 0.0);
        assert!(ball.vel.length() <= MAX_SPEED + 1e-9);
    }

    #[test]
    fn test_resolve_wall_clamps_speed() {
        let mut ball = ball_at(DVec2::new(0.0, 135.0), DVec2::new(0.0, 7.9));
        resolve_wall(&mut ball, ARENA_RADIUS);
        assert!((ball.vel.length() - MAX_SPEED).abs() < 1e-9);
        assert!(ball.vel.y < 0.0);
    }

    #[test]
    fn test_resolve_post_pushes_outward_of_struck_post() {
        let goal = Goal::new(0.0, Team::One);
        let left = goal.post_position(PostSide::Left, ARENA_RADIUS);
        let mut ball = ball_at(left, DVec2::new(1.0, 2.0));
        let contact = PostContact {
            defender: Team::One,
            side: PostSide::Left,
            post: left,
            perpendicular: goal.perpendicular(),
            penetration: 4.0,
        };

        resolve_post(&mut ball, &contact);

        // Perpendicular at angle 0 is +y: vy flips, reduced boost applied
        let boost = SPEED_BOOST * POST_BOOST_FACTOR;
        assert!((ball.vel.x - 1.0 * boost).abs() < 1e-9);
        assert!((ball.vel.y + 2.0 * boost).abs() < 1e-9);
        assert!((ball.pos.y - (left.y + 4.0)).abs() < 1e-9);
        assert!((ball.pos.x - left.x).abs() < 1e-9);
    }

    #[test]
    fn test_resolve_post_right_side_pushes_negative() {
        let goal = Goal::new(0.0, Team::Two);
        let right = goal.post_position(PostSide::Right, ARENA_RADIUS);
        let mut ball = ball_at(right, DVec2::ZERO);
        let contact = PostContact {
            defender: Team::Two,
            side: PostSide::Right,
            post: right,
            perpendicular: goal.perpendicular(),
            penetration: 2.5,
        };

        resolve_post(&mut ball, &contact);
        assert!((ball.pos.y - (right.y - 2.5)).abs() < 1e-9);
    }

    #[test]
    fn test_contain_moves_position_only() {
        let mut ball = ball_at(DVec2::new(0.0, 139.0), DVec2::new(2.0, 3.0));
        contain(&mut ball, ARENA_RADIUS);
        assert!((ball.pos.y - 130.0).abs() < 1e-9);
        assert_eq!(ball.vel, DVec2::new(2.0, 3.0));

        let mut inside = ball_at(DVec2::new(10.0, 10.0), DVec2::ZERO);
        contain(&mut inside, ARENA_RADIUS);
        assert_eq!(inside.pos, DVec2::new(10.0, 10.0));
    }
}
