pub mod actor;
pub mod paddle;

pub use actor::Actor;
pub use paddle::{Direction, Paddle};
