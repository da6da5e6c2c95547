use crate::math::vec2::Vec2;
use crate::shapes::{Edge, LineSegment, Rect};
use super::manifold::{RayHit, SweepHit};

/// Intersects two segments using the parametric form
/// `A(t) = a.start + t·(a.end - a.start)`, `B(u) = b.start + u·(b.end - b.start)`.
///
/// Returns the intersection point (taken from `a`) and `t`, or `None` when the
/// segments are parallel or cross outside `[0, 1]` on either one. Both bounds
/// are inclusive, so touching endpoints count as hits. Collinear overlap is
/// reported as no intersection.
pub fn intersect(a: &LineSegment, b: &LineSegment) -> Option<(Vec2, f64)> {
    let da = a.direction();
    let db = b.direction();
    let denominator = da.cross(db);

    // Parallel or collinear
    if denominator == 0.0 {
        return None;
    }

    let delta_start = b.start - a.start;

    let t = delta_start.cross(db) / denominator;
    if !(0.0..=1.0).contains(&t) {
        return None;
    }

    let u = delta_start.cross(da) / denominator;
    if !(0.0..=1.0).contains(&u) {
        return None;
    }

    Some((a.point_at(t), t))
}

/// Tests every (ray, edge) pair and returns the crossing with the smallest `t`.
///
/// Edges are the outer loop and rays the inner one; on an exact tie the first
/// pair found is kept. Because every ray carries the same displacement,
/// comparing `t` is the same as comparing travelled distance.
pub fn closest_intersection(rays: &[LineSegment], edges: &[LineSegment]) -> Option<RayHit> {
    let mut closest: Option<RayHit> = None;

    for (edge_idx, edge) in edges.iter().enumerate() {
        for (ray_idx, ray) in rays.iter().enumerate() {
            let Some((point, t)) = intersect(ray, edge) else {
                continue;
            };
            if closest.map_or(true, |best| t < best.t) {
                closest = Some(RayHit { point, ray: ray_idx, edge: edge_idx, t });
            }
        }
    }

    closest
}

/// Sweeps `moving` along `displacement` against all four edges of `target`.
pub fn check_box_sweep(moving: &Rect, target: &Rect, displacement: Vec2) -> Option<SweepHit> {
    check_box_sweep_edges(moving, target, displacement, &Edge::ALL)
}

/// Like [`check_box_sweep`] but only against the listed edges of `target`.
pub fn check_box_sweep_edges(
    moving: &Rect,
    target: &Rect,
    displacement: Vec2,
    edges: &[Edge],
) -> Option<SweepHit> {
    let rays = moving.sweep_rays(displacement);
    let segments: Vec<LineSegment> = edges.iter().map(|&e| target.edge(e)).collect();
    let hit = closest_intersection(&rays, &segments)?;
    Some(sweep_hit(moving, &rays, hit, edges[hit.edge]))
}

/// Translates a corner-ray hit back into the moving box's center at contact.
pub(crate) fn sweep_hit(moving: &Rect, rays: &[LineSegment], hit: RayHit, edge: Edge) -> SweepHit {
    let corner = rays[hit.ray].start;
    SweepHit {
        edge,
        contact: hit.point,
        corner,
        center: hit.point + moving.center - corner,
        t: hit.t,
    }
}
