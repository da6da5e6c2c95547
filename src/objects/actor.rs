use crate::math::vec2::Vec2;
use crate::shapes::Rect;

/// A box that moves: the ball, or the body of a paddle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Actor {
    /// Current authoritative position and size.
    pub rect: Rect,
    pub velocity: Vec2,
}

impl Actor {
    /// Creates an actor at rest.
    pub fn new(rect: Rect) -> Self {
        Self { rect, velocity: Vec2::ZERO }
    }

    pub fn with_velocity(rect: Rect, velocity: Vec2) -> Self {
        Self { rect, velocity }
    }

    pub fn center(&self) -> Vec2 {
        self.rect.center
    }

    pub fn speed(&self) -> f64 {
        self.velocity.magnitude()
    }

    pub fn is_idle(&self) -> bool {
        self.velocity.is_zero()
    }

    /// Displacement covered in `dt` seconds at the current velocity.
    pub fn displacement(&self, dt: f64) -> Vec2 {
        self.velocity * dt
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_actor_new_is_idle() {
        let actor = Actor::new(Rect::new(Vec2::new(1.0, 2.0), Vec2::new(4.0, 4.0)));
        assert!(actor.is_idle());
        assert_eq!(actor.center(), Vec2::new(1.0, 2.0));
        assert_eq!(actor.speed(), 0.0);
    }

    #[test]
    fn test_actor_displacement() {
        let rect = Rect::new(Vec2::ZERO, Vec2::new(1.0, 1.0));
        let actor = Actor::with_velocity(rect, Vec2::new(3.0, -4.0));
        assert!(!actor.is_idle());
        assert_eq!(actor.speed(), 5.0);
        assert_eq!(actor.displacement(0.5), Vec2::new(1.5, -2.0));
    }
}
