//! Driver-side simulation lifecycle: editing a starting pattern, then running it

pub mod error;
pub mod simulation;

pub use error::SessionError;
pub use simulation::{Phase, Session};
