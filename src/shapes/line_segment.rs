use crate::math::vec2::Vec2;

/// A directed segment from `start` to `end`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment {
    pub start: Vec2,
    pub end: Vec2,
}

impl LineSegment {
    pub fn new(start: Vec2, end: Vec2) -> Self {
        Self { start, end }
    }

    /// Returns the direction vector of the line segment (from start to end).
    pub fn direction(&self) -> Vec2 {
        self.end - self.start
    }

    /// Point at parameter `t` along the segment (`t = 0` is `start`, `t = 1` is `end`).
    pub fn point_at(&self, t: f64) -> Vec2 {
        self.start + self.direction() * t
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_segment_new() {
        let a = Vec2::new(1.0, 2.0);
        let b = Vec2::new(4.0, 6.0);
        let line = LineSegment::new(a, b);
        assert_eq!(line.start, a);
        assert_eq!(line.end, b);
    }

    #[test]
    fn test_line_segment_direction_and_point_at() {
        let line = LineSegment::new(Vec2::new(1.0, 2.0), Vec2::new(4.0, 6.0));
        assert_eq!(line.direction(), Vec2::new(3.0, 4.0));
        assert_eq!(line.point_at(0.0), line.start);
        assert_eq!(line.point_at(1.0), line.end);
        assert_eq!(line.point_at(0.5), Vec2::new(2.5, 4.0));
    }
}
