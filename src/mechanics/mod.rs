pub mod clamp;
pub mod classify;

pub use clamp::*;
pub use classify::*;
