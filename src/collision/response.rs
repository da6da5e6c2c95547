use crate::math::vec2::Vec2;

/// Outcome of bouncing a displacement off a surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Deflection {
    /// Unit direction of travel after the bounce.
    pub direction: Vec2,
    /// Distance still to travel this frame, never negative.
    pub remaining: f64,
}

impl Deflection {
    /// The remaining displacement as a vector.
    pub fn displacement(&self) -> Vec2 {
        self.direction * self.remaining
    }
}

/// Reflects `displacement` off a surface hit at `hit`, starting from `start`.
///
/// The distance already travelled (`|start - hit|`) is subtracted from the
/// displacement's length and the rest continues along the reflected
/// direction. `normal` is normalised before use. A hit further away than the
/// displacement reaches (an overlapping start) leaves zero distance to travel
/// instead of a negative one.
///
/// Returns `None` when the displacement or the normal has zero length.
pub fn deflect(start: Vec2, hit: Vec2, normal: Vec2, displacement: Vec2) -> Option<Deflection> {
    let direction = displacement.try_normalize()?;
    let normal = normal.try_normalize()?;

    let travel = displacement.magnitude();
    let to_hit = start.distance(hit);
    let remaining = (travel - to_hit).max(0.0);

    let reflected = direction.reflect(normal).try_normalize()?;
    Some(Deflection { direction: reflected, remaining })
}

/// Remaining displacement after reflecting off the surface; zero when the
/// bounce is undefined.
pub fn resolve(start: Vec2, hit: Vec2, normal: Vec2, displacement: Vec2) -> Vec2 {
    deflect(start, hit, normal, displacement)
        .map(|d| d.displacement())
        .unwrap_or(Vec2::ZERO)
}
