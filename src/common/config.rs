//! Tunables for the motion driver and the court layout.

use crate::common::error::{PhysicsError, Result};
use crate::math::vec2::Vec2;
use crate::shapes::Rect;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Parameters of the per-frame collision loop and the difficulty ramp.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PhysicsConfig {
    /// Factor applied to ball speed and paddle speed on every paddle hit.
    pub speed_multiplier: f64,
    /// Distance the ball is pushed off a surface after a hit.
    pub surface_offset: f64,
    /// How strongly the strike position on a paddle face skews the bounce normal.
    pub english: f64,
    /// Upper bound on resolution passes in a single frame.
    pub max_passes: usize,
    /// Ball speed along each axis when served.
    pub ball_start_speed: f64,
    /// Paddle speed at the start of every rally.
    pub paddle_start_speed: f64,
    /// Gap between a serving paddle's face and the ball.
    pub serve_offset: f64,
    /// Rate at which a paddle's drawn position catches up with its physics position.
    pub render_smoothing: f64,
}

impl PhysicsConfig {
    /// Checks every field, returning the first problem found.
    pub fn validate(&self) -> Result<()> {
        if !self.speed_multiplier.is_finite() || self.speed_multiplier < 1.0 {
            return Err(PhysicsError::InvalidMultiplier(self.speed_multiplier));
        }
        if self.max_passes == 0 {
            return Err(PhysicsError::ZeroPassLimit);
        }
        let fields = [
            ("surface_offset", self.surface_offset),
            ("english", self.english),
            ("ball_start_speed", self.ball_start_speed),
            ("paddle_start_speed", self.paddle_start_speed),
            ("serve_offset", self.serve_offset),
            ("render_smoothing", self.render_smoothing),
        ];
        for (name, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(PhysicsError::NegativeParameter { name, value });
            }
        }
        Ok(())
    }
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        PhysicsConfig {
            speed_multiplier: 1.03,
            surface_offset: 0.01,
            english: 0.5,
            max_passes: 16,
            ball_start_speed: 200.0,
            paddle_start_speed: 350.0,
            serve_offset: 8.0,
            render_smoothing: 15.0,
        }
    }
}

/// Dimensions of the court. Y grows downwards.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CourtLayout {
    pub screen_size: Vec2,
    /// Total inset of the playfield from the screen border (split evenly per side).
    pub playfield_margin: Vec2,
    /// Horizontal distance between the screen border and a paddle's center.
    pub paddle_offset: f64,
    pub paddle_size: Vec2,
    pub ball_size: Vec2,
}

impl CourtLayout {
    /// The playfield box, centered on the screen.
    pub fn playfield(&self) -> Result<Rect> {
        Rect::try_new(self.screen_size / 2.0, self.screen_size - self.playfield_margin)
    }
}

impl Default for CourtLayout {
    fn default() -> Self {
        CourtLayout {
            screen_size: Vec2::new(1280.0, 720.0),
            playfield_margin: Vec2::ZERO,
            paddle_offset: 128.0,
            paddle_size: Vec2::new(32.0, 128.0),
            ball_size: Vec2::new(32.0, 32.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = PhysicsConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.speed_multiplier, 1.03);
        assert_eq!(config.max_passes, 16);
    }

    #[test]
    fn test_validate_rejects_slowdown_multiplier() {
        let config = PhysicsConfig { speed_multiplier: 0.9, ..Default::default() };
        assert_eq!(config.validate(), Err(PhysicsError::InvalidMultiplier(0.9)));

        let config = PhysicsConfig { speed_multiplier: f64::NAN, ..Default::default() };
        assert!(matches!(config.validate(), Err(PhysicsError::InvalidMultiplier(_))));
    }

    #[test]
    fn test_validate_rejects_zero_passes() {
        let config = PhysicsConfig { max_passes: 0, ..Default::default() };
        assert_eq!(config.validate(), Err(PhysicsError::ZeroPassLimit));
    }

    #[test]
    fn test_validate_names_negative_field() {
        let config = PhysicsConfig { english: -0.5, ..Default::default() };
        assert_eq!(
            config.validate(),
            Err(PhysicsError::NegativeParameter { name: "english", value: -0.5 })
        );
    }

    #[test]
    fn test_layout_playfield() {
        let layout = CourtLayout::default();
        let field = layout.playfield().unwrap();
        assert_eq!(field.center, Vec2::new(640.0, 360.0));
        assert_eq!(field.top_left(), Vec2::ZERO);
        assert_eq!(field.bottom_right(), Vec2::new(1280.0, 720.0));

        let margin = CourtLayout { playfield_margin: Vec2::new(0.0, 40.0), ..layout };
        let field = margin.playfield().unwrap();
        assert_eq!(field.top_left(), Vec2::new(0.0, 20.0));
    }

    #[test]
    fn test_layout_margin_larger_than_screen_fails() {
        let layout = CourtLayout { playfield_margin: Vec2::new(2000.0, 0.0), ..Default::default() };
        assert!(matches!(layout.playfield(), Err(PhysicsError::NonPositiveSize { .. })));
    }
}
