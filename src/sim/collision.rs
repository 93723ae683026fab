//! Collision detection and response for the actor against bricks
//!
//! The actor is a circle, bricks are axis-aligned rectangles. A hit is
//! classified by the compass direction of the separation vector, and the
//! actor is pushed back along that single axis.

use glam::Vec2;

use super::level::Brick;
use super::shapes::{Circle, Rect, rect_overlap};
use super::state::Actor;

/// Compass direction of a separation vector.
///
/// Declaration order is the tie-break order: on an exact 45° hit the earlier
/// direction wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    /// Unit vector for this direction
    pub fn compass(self) -> Vec2 {
        match self {
            Direction::Up => Vec2::new(0.0, 1.0),
            Direction::Right => Vec2::new(1.0, 0.0),
            Direction::Down => Vec2::new(0.0, -1.0),
            Direction::Left => Vec2::new(-1.0, 0.0),
        }
    }

    #[inline]
    pub fn is_horizontal(self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }
}

/// Which compass direction a vector is facing.
///
/// A zero (or non-finite) vector has no direction and maps to `Up`.
pub fn classify_direction(v: Vec2) -> Direction {
    let Some(n) = v.try_normalize() else {
        return Direction::Up;
    };

    let mut best = Direction::Up;
    let mut best_dot = f32::NEG_INFINITY;
    for dir in Direction::ALL {
        let dot = n.dot(dir.compass());
        if dot > best_dot {
            best_dot = dot;
            best = dir;
        }
    }
    best
}

/// Result of a circle vs rectangle check
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Collision {
    None,
    Hit {
        direction: Direction,
        /// Closest point on the rectangle minus the circle center
        separation: Vec2,
    },
}

impl Collision {
    #[inline]
    pub fn is_hit(&self) -> bool {
        matches!(self, Collision::Hit { .. })
    }
}

/// Circle vs AABB test.
///
/// Strictly less than the radius: a circle resting exactly tangent to the
/// rectangle (the state collision response leaves it in) is not a hit.
pub fn circle_rect_overlap(circle: Circle, rect: &Rect) -> Collision {
    let closest = rect.closest_point(circle.center);
    let separation = closest - circle.center;

    if separation.length() < circle.radius {
        Collision::Hit {
            direction: classify_direction(separation),
            separation,
        }
    } else {
        Collision::None
    }
}

/// What happened during one collision pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollisionReport {
    /// Number of bricks the actor hit
    pub hits: u32,
    /// Indices of bricks destroyed this pass, in hit order
    pub destroyed: Vec<usize>,
    /// A vertical hit occurred (actor may jump again)
    pub landed: bool,
}

/// Test the actor against every surviving brick and resolve each hit in turn.
///
/// Bricks are visited in container order with no early exit, so later tests
/// see the position already corrected by earlier hits.
pub fn resolve_actor_collisions(actor: &mut Actor, bricks: &mut [Brick]) -> CollisionReport {
    let mut report = CollisionReport::default();

    for (index, brick) in bricks.iter_mut().enumerate() {
        if brick.destroyed {
            continue;
        }
        // Cheap reject before the circle test
        if !rect_overlap(&actor.bounds(), &brick.rect()) {
            continue;
        }

        let Collision::Hit {
            direction,
            separation,
        } = circle_rect_overlap(actor.circle(), &brick.rect())
        else {
            continue;
        };

        report.hits += 1;
        if !brick.is_solid {
            brick.destroyed = true;
            report.destroyed.push(index);
        }

        if direction.is_horizontal() {
            actor.vel.x = 0.0;
            let penetration = actor.radius - separation.x.abs();
            if direction == Direction::Left {
                actor.pos.x += penetration;
            } else {
                actor.pos.x -= penetration;
            }
        } else {
            report.landed = true;
            actor.vel.y = 0.0;
            let penetration = actor.radius - separation.y.abs();
            if direction == Direction::Up {
                actor.pos.y -= penetration;
            } else {
                actor.pos.y += penetration;
            }
        }
    }

    report
}
