//! Swept collision detection and response for a box-shaped ball bouncing
//! between paddles and playfield walls.

pub mod math;
pub mod shapes;
pub mod collision;
pub mod objects;
pub mod world;
pub mod common;

// Re-export key types for easier use
pub use math::vec2::Vec2;
pub use shapes::{Edge, LineSegment, Rect};
pub use collision::{check_box_sweep, intersect, closest_intersection, resolve, SweepHit};
pub use objects::{Actor, Direction, Paddle};
pub use world::{resolve_ball_motion, Arena, Court, MotionReport, PlayMode, Scene, Side, SpeedRamp};
pub use common::{CourtLayout, PhysicsConfig, PhysicsError, Result};
