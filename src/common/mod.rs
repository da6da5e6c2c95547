pub mod config;
pub mod error;

pub use config::{CourtLayout, PhysicsConfig};
pub use error::{PhysicsError, Result};
