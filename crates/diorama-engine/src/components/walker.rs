use glam::Vec2;

use crate::components::sprite::FacingSet;

/// A cyclic sequence of waypoints an avatar walks in order, wrapping back
/// to the first point after the last.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    points: Vec<Vec2>,
}

impl Route {
    /// A route needs at least two waypoints. Anything shorter yields None,
    /// and the avatar simply stands where it was spawned.
    pub fn new(points: Vec<Vec2>) -> Option<Self> {
        if points.len() < 2 {
            return None;
        }
        Some(Self { points })
    }

    /// Number of waypoints (always at least 2).
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Waypoint at the given index, wrapping past the end.
    pub fn point(&self, idx: usize) -> Vec2 {
        self.points[idx % self.points.len()]
    }

    /// The starting waypoint.
    pub fn start(&self) -> Vec2 {
        self.points[0]
    }
}

/// Which way a walker faced on its most recent step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    Left,
    Right,
    #[default]
    Idle,
}

/// Route-walking component. Each frame the motion system moves the owning
/// entity toward the next waypoint at `speed` and swaps its facing sprite
/// from the sign of the horizontal movement.
#[derive(Debug, Clone)]
pub struct Walker {
    /// The waypoints to cycle through.
    pub route: Route,
    /// Index of the waypoint currently being walked toward.
    pub next: usize,
    /// Movement speed in world units per second.
    pub speed: f32,
    /// Facing sprite set; None leaves the entity's sprite untouched.
    pub facing: Option<FacingSet>,
    /// Facing chosen on the most recent step.
    pub heading: Facing,
}

impl Walker {
    /// Walkers are expected to spawn on the route's first waypoint, so they
    /// start out heading for the second.
    pub fn new(route: Route, speed: f32) -> Self {
        Self {
            route,
            next: 1,
            speed,
            facing: None,
            heading: Facing::Idle,
        }
    }

    pub fn with_facing(mut self, facing: FacingSet) -> Self {
        self.facing = Some(facing);
        self
    }
}
