use crate::common::{CourtLayout, PhysicsConfig, Result};
use crate::math::vec2::Vec2;
use crate::objects::{Actor, Direction, Paddle};
use crate::shapes::{Edge, Rect};
use super::arena::{Arena, Side};
use super::motion::{resolve_ball_motion, MotionReport, PlayMode, Scene, SpeedRamp};

/// A two-paddle court: owns the ball, the paddles and the arena, and exposes
/// the per-frame operations a game loop drives.
#[derive(Debug, Clone, PartialEq)]
pub struct Court {
    pub ball: Actor,
    pub paddles: Vec<Paddle>,
    pub arena: Arena,
    pub config: PhysicsConfig,
    pub ramp: SpeedRamp,
    layout: CourtLayout,
}

impl Court {
    /// Builds the standard layout: one paddle on each side facing the middle,
    /// the left one serving, and the ball drifting diagonally from the center.
    pub fn new(layout: CourtLayout, config: PhysicsConfig) -> Result<Self> {
        config.validate()?;
        let arena = Arena::new(layout.playfield()?);

        let mid_y = layout.screen_size.y / 2.0;
        let left = Rect::try_new(Vec2::new(layout.paddle_offset, mid_y), layout.paddle_size)?;
        let right = Rect::try_new(
            Vec2::new(layout.screen_size.x - layout.paddle_offset, mid_y),
            layout.paddle_size,
        )?;
        let mut paddles = vec![Paddle::new(left, Edge::Right), Paddle::new(right, Edge::Left)];
        paddles[0].serving = true;

        let ball_rect = Rect::try_new(layout.screen_size / 2.0, layout.ball_size)?;
        let ball = Actor::with_velocity(ball_rect, Self::drift_velocity(&config));

        Ok(Self {
            ball,
            paddles,
            arena,
            ramp: SpeedRamp::new(config.paddle_start_speed),
            config,
            layout,
        })
    }

    pub fn layout(&self) -> &CourtLayout {
        &self.layout
    }

    fn drift_velocity(config: &PhysicsConfig) -> Vec2 {
        Vec2::new(config.ball_start_speed, config.ball_start_speed)
    }

    /// Advances the ball by `dt`. Paddles only take part in a rally.
    pub fn step_ball(&mut self, mode: PlayMode, dt: f64) -> MotionReport {
        let paddles: &[Paddle] = match mode {
            PlayMode::Rally => &self.paddles,
            PlayMode::Attract => &[],
        };
        let scene = Scene { paddles, arena: &self.arena, mode, config: &self.config };
        resolve_ball_motion(&mut self.ball, &scene, &mut self.ramp, dt)
    }

    /// Moves each paddle by its requested direction at the current ramp speed.
    /// Paddles without an entry in `directions` stay still.
    pub fn drive_paddles(&mut self, directions: &[Direction], dt: f64) {
        let playfield = self.arena.playfield;
        for (i, paddle) in self.paddles.iter_mut().enumerate() {
            let direction = directions.get(i).copied().unwrap_or_default();
            paddle.drive(direction, self.ramp.paddle_speed, dt, &playfield, self.config.render_smoothing);
        }
    }

    /// Where the ball sits while paddle `index` is serving: in front of its
    /// face, following its drawn position.
    pub fn serve_position(&self, index: usize) -> Option<Vec2> {
        let paddle = self.paddles.get(index)?;
        let n = paddle.front_normal();
        let gap = paddle.rect().half_size().x + self.ball.rect.half_size().x;
        Some(paddle.render_center + n * self.config.serve_offset + n * gap)
    }

    /// Pins the ball to a serving paddle. Returns false if it is not serving.
    pub fn track_serve(&mut self, index: usize) -> bool {
        if !self.paddles.get(index).is_some_and(|p| p.serving) {
            return false;
        }
        match self.serve_position(index) {
            Some(position) => {
                self.ball.rect.center = position;
                true
            }
            None => false,
        }
    }

    /// Sends the ball off a serving paddle, angled the way the player is
    /// moving (downwards when still).
    pub fn launch(&mut self, index: usize, direction: Direction) -> bool {
        let Some(paddle) = self.paddles.get_mut(index).filter(|p| p.serving) else {
            return false;
        };
        paddle.serving = false;

        let vertical = match direction {
            Direction::Still => 1.0,
            other => other.sign(),
        };
        let start = self.config.ball_start_speed;
        self.ball.velocity = paddle.front_normal() * start + Vec2::new(0.0, start * vertical);
        tracing::debug!(paddle = index, velocity = ?self.ball.velocity, "serve");
        true
    }

    /// The side the ball has fully left through, if any.
    pub fn check_miss(&self) -> Option<Side> {
        let miss = self.arena.check_miss(&self.ball.rect);
        if let Some(side) = miss {
            tracing::debug!(?side, "ball missed");
        }
        miss
    }

    /// Hands the serve to the paddle on `side` and slows everything back down.
    pub fn award_serve(&mut self, side: Side) {
        let index = match side {
            Side::Left => 0,
            Side::Right => 1,
        };
        for (i, paddle) in self.paddles.iter_mut().enumerate() {
            paddle.serving = i == index;
        }
        self.reset_speed();
    }

    pub fn reset_speed(&mut self) {
        self.ramp.paddle_speed = self.config.paddle_start_speed;
    }

    /// Puts the ball back in the middle with its title-screen drift.
    pub fn reset_ball(&mut self) {
        self.ball.rect.center = self.layout.screen_size / 2.0;
        self.ball.velocity = Self::drift_velocity(&self.config);
    }
}
