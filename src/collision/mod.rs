pub mod detection;
pub mod manifold;
pub mod response;

// Re-export key types
pub use detection::{check_box_sweep, check_box_sweep_edges, closest_intersection, intersect};
pub use manifold::{RayHit, SweepHit};
pub use response::{deflect, resolve, Deflection};
