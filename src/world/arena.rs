use crate::math::vec2::Vec2;
use crate::shapes::{Edge, LineSegment, Rect};

/// Which side of the court the ball left through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// The playfield boundary. The ball lives inside it, so its walls push inwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arena {
    pub playfield: Rect,
}

impl Arena {
    pub fn new(playfield: Rect) -> Self {
        Self { playfield }
    }

    /// Normal of a wall as seen from inside the playfield.
    pub fn wall_normal(&self, edge: Edge) -> Vec2 {
        edge.opposite().normal()
    }

    /// The wall along `edge`, treated as an infinite line.
    ///
    /// The line is cut down to a segment just wide enough to cover every ray
    /// in `rays`, so a ray can never slip past its end.
    pub fn wall_segment(&self, edge: Edge, rays: &[LineSegment]) -> LineSegment {
        let wall = self.playfield.edge(edge);
        let points = rays.iter().flat_map(|r| [r.start, r.end]);

        if edge.is_horizontal() {
            let (lo, hi) = extent(points.map(|p| p.x), wall.start.x, wall.end.x);
            let y = wall.start.y;
            LineSegment::new(Vec2::new(lo, y), Vec2::new(hi, y))
        } else {
            let (lo, hi) = extent(points.map(|p| p.y), wall.start.y, wall.end.y);
            let x = wall.start.x;
            LineSegment::new(Vec2::new(x, lo), Vec2::new(x, hi))
        }
    }

    /// Reports a ball that has completely left the playfield sideways.
    pub fn check_miss(&self, ball: &Rect) -> Option<Side> {
        if ball.bottom_right().x < self.playfield.top_left().x {
            Some(Side::Left)
        } else if ball.top_left().x > self.playfield.bottom_right().x {
            Some(Side::Right)
        } else {
            None
        }
    }
}

/// Smallest and largest of `values` and the wall's own ends, padded by one unit.
fn extent(values: impl Iterator<Item = f64>, a: f64, b: f64) -> (f64, f64) {
    let (lo, hi) = values.fold((a.min(b), a.max(b)), |(lo, hi), v| (lo.min(v), hi.max(v)));
    (lo - 1.0, hi + 1.0)
}
