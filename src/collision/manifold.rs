use crate::math::vec2::Vec2;
use crate::shapes::Edge;

/// Result of sweeping a moving box against a target box.
///
/// Lives for a single pass of the resolution loop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepHit {
    /// Which edge of the target box was struck.
    pub edge: Edge,
    /// Where the winning corner ray met the edge.
    pub contact: Vec2,
    /// The corner of the moving box the winning ray started from.
    pub corner: Vec2,
    /// Center of the moving box at the moment of contact.
    pub center: Vec2,
    /// Fraction of the displacement travelled before contact.
    pub t: f64,
}

/// Nearest (ray, edge) crossing found by [`closest_intersection`](super::closest_intersection).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    pub point: Vec2,
    /// Index into the ray slice.
    pub ray: usize,
    /// Index into the edge slice.
    pub edge: usize,
    /// Parameter along the ray.
    pub t: f64,
}
