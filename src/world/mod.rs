pub mod arena;
pub mod court;
pub mod motion;

pub use arena::{Arena, Side};
pub use court::Court;
pub use motion::{resolve_ball_motion, Bounce, HitKind, MotionReport, PlayMode, Scene, SpeedRamp, Surface};
