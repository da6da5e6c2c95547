//! Axis-aligned boxes described by center and size.
//!
//! Corners, edges and sweep rays are always derived from `center` and
//! `size` on demand, so moving or resizing a box can never leave them
//! out of sync.

use crate::common::error::{PhysicsError, Result};
use crate::math::vec2::Vec2;
use super::line_segment::LineSegment;

/// One side of a [`Rect`], in canonical order `Top, Bottom, Left, Right`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edge {
    Top,
    Bottom,
    Left,
    Right,
}

impl Edge {
    /// All edges in canonical order.
    pub const ALL: [Edge; 4] = [Edge::Top, Edge::Bottom, Edge::Left, Edge::Right];

    /// Outward normal, with y growing downwards.
    pub fn normal(self) -> Vec2 {
        match self {
            Edge::Top => Vec2::new(0.0, -1.0),
            Edge::Bottom => Vec2::new(0.0, 1.0),
            Edge::Left => Vec2::new(-1.0, 0.0),
            Edge::Right => Vec2::new(1.0, 0.0),
        }
    }

    pub fn opposite(self) -> Edge {
        match self {
            Edge::Top => Edge::Bottom,
            Edge::Bottom => Edge::Top,
            Edge::Left => Edge::Right,
            Edge::Right => Edge::Left,
        }
    }

    /// True for `Top` and `Bottom`.
    pub fn is_horizontal(self) -> bool {
        matches!(self, Edge::Top | Edge::Bottom)
    }
}

/// Axis-aligned rectangle tracked by its center and full size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub center: Vec2,
    pub size: Vec2,
}

impl Rect {
    /// Creates a box without validating `size`; see [`Rect::try_new`].
    pub fn new(center: Vec2, size: Vec2) -> Self {
        Self { center, size }
    }

    /// Creates a box, rejecting zero, negative or non-finite sizes.
    pub fn try_new(center: Vec2, size: Vec2) -> Result<Self> {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        if !valid(size.x) || !valid(size.y) {
            return Err(PhysicsError::NonPositiveSize { width: size.x, height: size.y });
        }
        Ok(Self::new(center, size))
    }

    pub fn half_size(&self) -> Vec2 {
        self.size / 2.0
    }

    pub fn top_left(&self) -> Vec2 {
        self.center - self.half_size()
    }

    pub fn bottom_right(&self) -> Vec2 {
        self.center + self.half_size()
    }

    pub fn top_right(&self) -> Vec2 {
        Vec2::new(self.bottom_right().x, self.top_left().y)
    }

    pub fn bottom_left(&self) -> Vec2 {
        Vec2::new(self.top_left().x, self.bottom_right().y)
    }

    /// Corners in sweep order: TL, TR, BL, BR.
    pub fn corners(&self) -> [Vec2; 4] {
        [self.top_left(), self.top_right(), self.bottom_left(), self.bottom_right()]
    }

    /// The segment running along `edge`.
    pub fn edge(&self, edge: Edge) -> LineSegment {
        let (tl, tr, bl, br) = (self.top_left(), self.top_right(), self.bottom_left(), self.bottom_right());
        match edge {
            Edge::Top => LineSegment::new(tl, tr),
            Edge::Bottom => LineSegment::new(bl, br),
            Edge::Left => LineSegment::new(tl, bl),
            Edge::Right => LineSegment::new(tr, br),
        }
    }

    /// All four edges in canonical order.
    pub fn edges(&self) -> [LineSegment; 4] {
        Edge::ALL.map(|e| self.edge(e))
    }

    /// One ray per corner, from the corner to `corner + displacement`.
    ///
    /// This approximates the swept volume of the box: a thin obstacle
    /// crossing a diagonal sweep between two corner rays is not caught.
    pub fn sweep_rays(&self, displacement: Vec2) -> [LineSegment; 4] {
        self.corners().map(|c| LineSegment::new(c, c + displacement))
    }

    /// Returns a copy moved by `delta`.
    pub fn translated(&self, delta: Vec2) -> Self {
        Self::new(self.center + delta, self.size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_box() -> Rect {
        Rect::new(Vec2::new(10.0, 20.0), Vec2::new(4.0, 2.0))
    }

    #[test]
    fn test_try_new_rejects_bad_sizes() {
        assert!(Rect::try_new(Vec2::ZERO, Vec2::new(1.0, 1.0)).is_ok());
        assert_eq!(
            Rect::try_new(Vec2::ZERO, Vec2::new(0.0, 1.0)),
            Err(PhysicsError::NonPositiveSize { width: 0.0, height: 1.0 })
        );
        assert!(Rect::try_new(Vec2::ZERO, Vec2::new(1.0, -2.0)).is_err());
        assert!(Rect::try_new(Vec2::ZERO, Vec2::new(f64::NAN, 1.0)).is_err());
    }

    #[test]
    fn test_corners() {
        let r = unit_box();
        assert_eq!(r.top_left(), Vec2::new(8.0, 19.0));
        assert_eq!(r.top_right(), Vec2::new(12.0, 19.0));
        assert_eq!(r.bottom_left(), Vec2::new(8.0, 21.0));
        assert_eq!(r.bottom_right(), Vec2::new(12.0, 21.0));
        assert_eq!(r.corners()[0], r.top_left());
        assert_eq!(r.corners()[3], r.bottom_right());
    }

    #[test]
    fn test_edges_canonical_order() {
        let r = unit_box();
        let edges = r.edges();
        assert_eq!(edges[0], LineSegment::new(r.top_left(), r.top_right()));
        assert_eq!(edges[1], LineSegment::new(r.bottom_left(), r.bottom_right()));
        assert_eq!(edges[2], LineSegment::new(r.top_left(), r.bottom_left()));
        assert_eq!(edges[3], LineSegment::new(r.top_right(), r.bottom_right()));
        for (segment, edge) in edges.iter().zip(Edge::ALL) {
            assert_eq!(*segment, r.edge(edge));
        }
    }

    #[test]
    fn test_edge_normals_point_outward() {
        let r = unit_box();
        for edge in Edge::ALL {
            let seg = r.edge(edge);
            let midpoint = seg.point_at(0.5);
            // The normal points away from the center
            assert!((midpoint - r.center).dot(edge.normal()) > 0.0);
            assert_eq!(edge.opposite().normal(), -edge.normal());
        }
        assert!(Edge::Top.is_horizontal());
        assert!(!Edge::Left.is_horizontal());
    }

    #[test]
    fn test_moving_center_moves_edges() {
        let mut r = unit_box();
        r.center += Vec2::new(5.0, -5.0);
        assert_eq!(r.top_left(), Vec2::new(13.0, 14.0));
        assert_eq!(r.edge(Edge::Right).end, Vec2::new(17.0, 16.0));

        r.size = Vec2::new(8.0, 8.0);
        assert_eq!(r.top_left(), Vec2::new(11.0, 11.0));
        assert_eq!(r.translated(Vec2::new(1.0, 1.0)).center, Vec2::new(16.0, 16.0));
    }

    #[test]
    fn test_sweep_rays() {
        let r = unit_box();
        let d = Vec2::new(3.0, -1.0);
        let rays = r.sweep_rays(d);
        for (ray, corner) in rays.iter().zip(r.corners()) {
            assert_eq!(ray.start, corner);
            assert_eq!(ray.end, corner + d);
        }
    }
}
