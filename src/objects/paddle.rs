use crate::math::vec2::Vec2;
use crate::shapes::{Edge, Rect};
use super::actor::Actor;

/// Vertical movement request for a paddle, as read from input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    Up,
    #[default]
    Still,
    Down,
}

impl Direction {
    /// Maps an input axis value to a direction by its sign.
    pub fn from_axis(axis: i32) -> Self {
        match axis.signum() {
            -1 => Direction::Up,
            1 => Direction::Down,
            _ => Direction::Still,
        }
    }

    /// -1 for up, 1 for down, 0 otherwise (y grows downwards).
    pub fn sign(self) -> f64 {
        match self {
            Direction::Up => -1.0,
            Direction::Still => 0.0,
            Direction::Down => 1.0,
        }
    }
}

/// A paddle: a moving box plus the data that makes it a paddle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    pub actor: Actor,
    /// The edge facing the playfield.
    pub front: Edge,
    /// Smoothed position used for drawing and for placing a served ball.
    pub render_center: Vec2,
    pub serving: bool,
}

impl Paddle {
    pub fn new(rect: Rect, front: Edge) -> Self {
        Self {
            actor: Actor::new(rect),
            front,
            render_center: rect.center,
            serving: false,
        }
    }

    pub fn rect(&self) -> &Rect {
        &self.actor.rect
    }

    /// Outward normal of the front edge.
    pub fn front_normal(&self) -> Vec2 {
        self.front.normal()
    }

    /// Bounce normal for a ball whose center was at `hit_center` when it
    /// struck the face.
    ///
    /// The face normal is tilted along the face tangent (the normal turned a
    /// quarter clockwise) by how far from the middle the ball landed, scaled
    /// by `english`. A low hit on the left paddle goes up, on the right
    /// paddle down. The result is not normalised.
    pub fn face_normal(&self, hit_center: Vec2, english: f64) -> Vec2 {
        let rect = self.rect();
        let normal = self.front_normal();
        let tangent = -normal.perpendicular();
        let offset = if self.front.is_horizontal() {
            (hit_center.x - rect.center.x) / rect.size.x
        } else {
            (hit_center.y - rect.center.y) / rect.size.y
        };
        normal + tangent * (offset * english)
    }

    /// Moves the paddle vertically, keeping it inside `playfield`.
    pub fn drive(&mut self, direction: Direction, speed: f64, dt: f64, playfield: &Rect, smoothing: f64) {
        let half = self.rect().half_size().y;
        let lo = playfield.top_left().y + half;
        let hi = playfield.bottom_right().y - half;

        self.actor.velocity = Vec2::new(0.0, direction.sign() * speed);
        let y = self.actor.rect.center.y + self.actor.velocity.y * dt;
        self.actor.rect.center.y = y.max(lo).min(hi);

        let blend = (smoothing * dt).clamp(0.0, 1.0);
        self.render_center = self.render_center.lerp(self.actor.rect.center, blend);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn left_paddle() -> Paddle {
        Paddle::new(Rect::new(Vec2::new(128.0, 360.0), Vec2::new(32.0, 128.0)), Edge::Right)
    }

    fn playfield() -> Rect {
        Rect::new(Vec2::new(640.0, 360.0), Vec2::new(1280.0, 720.0))
    }

    #[test]
    fn test_direction_from_axis() {
        assert_eq!(Direction::from_axis(-1), Direction::Up);
        assert_eq!(Direction::from_axis(0), Direction::Still);
        assert_eq!(Direction::from_axis(1), Direction::Down);
        assert_eq!(Direction::from_axis(-7), Direction::Up);
        assert_eq!(Direction::Up.sign(), -1.0);
    }

    #[test]
    fn test_face_normal_center_hit_is_straight() {
        let paddle = left_paddle();
        assert_eq!(paddle.face_normal(Vec2::new(160.0, 360.0), 0.5), Vec2::UNIT_X);
    }

    #[test]
    fn test_face_normal_tilts_with_offset() {
        let paddle = left_paddle();
        // Quarter of the paddle height below center tilts the left paddle up
        let n = paddle.face_normal(Vec2::new(160.0, 392.0), 0.5);
        assert_abs_diff_eq!(n.x, 1.0);
        assert_abs_diff_eq!(n.y, -0.125);

        let n = paddle.face_normal(Vec2::new(160.0, 328.0), 0.5);
        assert_abs_diff_eq!(n.y, 0.125);

        // The mirrored paddle tilts the other way for the same offset
        let mut right = left_paddle();
        right.front = Edge::Left;
        let n = right.face_normal(Vec2::new(96.0, 392.0), 0.5);
        assert_abs_diff_eq!(n.x, -1.0);
        assert_abs_diff_eq!(n.y, 0.125);
    }

    #[test]
    fn test_face_normal_horizontal_face() {
        let paddle = Paddle::new(Rect::new(Vec2::new(640.0, 40.0), Vec2::new(128.0, 32.0)), Edge::Bottom);
        // Normal (0, 1), tangent (1, 0)
        let n = paddle.face_normal(Vec2::new(672.0, 72.0), 0.5);
        assert_abs_diff_eq!(n.x, 0.125);
        assert_abs_diff_eq!(n.y, 1.0);
    }

    #[test]
    fn test_drive_moves_and_sets_velocity() {
        let mut paddle = left_paddle();
        paddle.drive(Direction::Up, 350.0, 0.1, &playfield(), 15.0);
        assert_eq!(paddle.actor.velocity, Vec2::new(0.0, -350.0));
        assert_abs_diff_eq!(paddle.rect().center.y, 325.0, epsilon = 1e-9);

        paddle.drive(Direction::Still, 350.0, 0.1, &playfield(), 15.0);
        assert_eq!(paddle.actor.velocity, Vec2::ZERO);
        assert_abs_diff_eq!(paddle.rect().center.y, 325.0, epsilon = 1e-9);
    }

    #[test]
    fn test_drive_clamps_to_playfield() {
        let mut paddle = left_paddle();
        paddle.drive(Direction::Up, 350.0, 10.0, &playfield(), 15.0);
        assert_eq!(paddle.rect().center.y, 64.0);
        paddle.drive(Direction::Down, 350.0, 10.0, &playfield(), 15.0);
        assert_eq!(paddle.rect().center.y, 656.0);
    }

    #[test]
    fn test_render_center_lags_behind() {
        let mut paddle = left_paddle();
        paddle.drive(Direction::Down, 100.0, 0.01, &playfield(), 15.0);
        let target = paddle.rect().center.y;
        assert!(paddle.render_center.y > 360.0);
        assert!(paddle.render_center.y < target);

        // Large steps snap straight to the physics position
        paddle.drive(Direction::Still, 100.0, 1.0, &playfield(), 15.0);
        assert_eq!(paddle.render_center, paddle.rect().center);
    }
}
