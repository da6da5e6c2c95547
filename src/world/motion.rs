//! Per-frame swept motion of the ball.
//!
//! Each frame the ball's displacement is swept against the live paddles and
//! the walls. Every hit consumes part of the displacement and reflects the
//! rest, and the sweep is repeated with what is left until a pass finds
//! nothing to hit or the pass limit is reached.

use crate::collision::{check_box_sweep, closest_intersection, deflect, Deflection};
use crate::collision::detection::sweep_hit;
use crate::common::PhysicsConfig;
use crate::math::vec2::Vec2;
use crate::objects::{Actor, Paddle};
use crate::shapes::{Edge, LineSegment, Rect};
use super::arena::Arena;

/// Which surfaces the ball can bounce off this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlayMode {
    /// Title screen: no paddles, the ball bounces off all four walls.
    #[default]
    Attract,
    /// A rally between paddles; left and right are open.
    Rally,
}

/// How a paddle was struck.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitKind {
    /// The front edge: bounce with a tilt depending on where it landed.
    Face,
    /// Any other edge: the ball is sent straight back.
    Side,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Surface {
    Paddle { index: usize, kind: HitKind },
    Wall(Edge),
}

/// A single resolved collision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounce {
    pub surface: Surface,
    /// Ball center at the moment of contact.
    pub center: Vec2,
}

/// What happened while resolving one frame.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MotionReport {
    /// Number of sweep passes run.
    pub passes: usize,
    pub bounces: Vec<Bounce>,
    /// True when the pass limit cut the frame short.
    pub capped: bool,
}

impl MotionReport {
    pub fn paddle_hits(&self) -> usize {
        self.bounces
            .iter()
            .filter(|b| matches!(b.surface, Surface::Paddle { .. }))
            .count()
    }
}

/// Paddle speed shared by both players; grows with every paddle hit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeedRamp {
    pub paddle_speed: f64,
}

impl SpeedRamp {
    pub fn new(paddle_speed: f64) -> Self {
        Self { paddle_speed }
    }
}

/// Everything the ball can collide with in one frame.
#[derive(Debug, Clone, Copy)]
pub struct Scene<'a> {
    /// Paddles taking part, in priority order.
    pub paddles: &'a [Paddle],
    pub arena: &'a Arena,
    pub mode: PlayMode,
    pub config: &'a PhysicsConfig,
}

/// A collision found during one pass, ready to apply.
struct Contact {
    bounce: Bounce,
    normal: Vec2,
    deflection: Deflection,
}

/// Moves `ball` through one frame of `dt` seconds, bouncing off whatever
/// `scene` contains.
///
/// The ball's speed only changes through paddle hits (each multiplies it by
/// `speed_multiplier`, as it does `ramp.paddle_speed`); bounces only change
/// its direction. A paddle is struck at most once per frame, so a ball
/// overlapping a paddle is pushed out instead of rattling around inside it.
pub fn resolve_ball_motion(
    ball: &mut Actor,
    scene: &Scene<'_>,
    ramp: &mut SpeedRamp,
    dt: f64,
) -> MotionReport {
    let mut report = MotionReport::default();
    if dt <= 0.0 || ball.is_idle() {
        return report;
    }

    let mut displacement = ball.displacement(dt);
    // Nothing to sweep; also catches a non-finite velocity
    let Some(mut direction) = displacement.try_normalize() else {
        return report;
    };

    let config = scene.config;
    let mut speed = ball.speed();
    let mut rect = ball.rect;
    let mut struck: Vec<usize> = Vec::new();

    loop {
        if report.passes >= config.max_passes {
            tracing::warn!(
                passes = report.passes,
                center = ?rect.center,
                ?displacement,
                "collision passes exhausted, dropping rest of frame"
            );
            report.capped = true;
            break;
        }
        report.passes += 1;
        tracing::trace!(pass = report.passes, ?displacement, "sweep pass");

        let contact = paddle_contact(&rect, displacement, scene, &struck)
            .or_else(|| wall_contact(&rect, displacement, scene));

        let Some(contact) = contact else {
            rect = rect.translated(displacement);
            break;
        };

        tracing::debug!(surface = ?contact.bounce.surface, center = ?contact.bounce.center, "bounce");

        rect.center = contact.bounce.center + contact.normal * config.surface_offset;
        direction = contact.deflection.direction;
        displacement = contact.deflection.displacement();

        if let Surface::Paddle { index, .. } = contact.bounce.surface {
            struck.push(index);
            speed *= config.speed_multiplier;
            ramp.paddle_speed *= config.speed_multiplier;
        }
        report.bounces.push(contact.bounce);
    }

    ball.rect = rect;
    ball.velocity = direction * speed;
    report
}

/// First paddle (in scene order) the sweep reaches; the rest are skipped,
/// as are paddles listed in `struck`.
fn paddle_contact(
    rect: &Rect,
    displacement: Vec2,
    scene: &Scene<'_>,
    struck: &[usize],
) -> Option<Contact> {
    if scene.mode != PlayMode::Rally {
        return None;
    }

    scene.paddles.iter().enumerate().find_map(|(index, paddle)| {
        if struck.contains(&index) {
            return None;
        }
        let hit = check_box_sweep(rect, paddle.rect(), displacement)?;

        let (kind, normal) = if hit.edge == paddle.front {
            (HitKind::Face, paddle.face_normal(hit.center, scene.config.english))
        } else {
            (HitKind::Side, -displacement)
        };
        let normal = normal.try_normalize()?;
        let deflection = deflect(rect.center, hit.center, normal, displacement)?;

        Some(Contact {
            bounce: Bounce { surface: Surface::Paddle { index, kind }, center: hit.center },
            normal,
            deflection,
        })
    })
}

/// Walls the ball is travelling towards: top or bottom always, left or right
/// only on the title screen.
fn approached_walls(displacement: Vec2, mode: PlayMode) -> Vec<Edge> {
    let mut walls = Vec::with_capacity(2);
    if displacement.y < 0.0 {
        walls.push(Edge::Top);
    } else if displacement.y > 0.0 {
        walls.push(Edge::Bottom);
    }
    if mode == PlayMode::Attract {
        if displacement.x < 0.0 {
            walls.push(Edge::Left);
        } else if displacement.x > 0.0 {
            walls.push(Edge::Right);
        }
    }
    walls
}

fn wall_contact(rect: &Rect, displacement: Vec2, scene: &Scene<'_>) -> Option<Contact> {
    let walls = approached_walls(displacement, scene.mode);
    if walls.is_empty() {
        return None;
    }

    let rays = rect.sweep_rays(displacement);
    let segments: Vec<LineSegment> = walls.iter().map(|&w| scene.arena.wall_segment(w, &rays)).collect();
    let ray_hit = closest_intersection(&rays, &segments)?;
    let wall = walls[ray_hit.edge];
    let hit = sweep_hit(rect, &rays, ray_hit, wall);

    let normal = scene.arena.wall_normal(wall);
    let deflection = deflect(rect.center, hit.center, normal, displacement)?;

    Some(Contact {
        bounce: Bounce { surface: Surface::Wall(wall), center: hit.center },
        normal,
        deflection,
    })
}
