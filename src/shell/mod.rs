// src/shell/mod.rs

//! Headless presentation shell around the calculator.
//!
//! The shell owns the three raw control values and nothing else. Every
//! event (a setter call, a reset, a session line) hands those values by
//! value to [`crate::compute_with`] and renders the fresh [`crate::Outcome`].
//! Keep rendering here and keep arithmetic in `mechanics`; the view never
//! re-derives counts, it reads them off the outcome.

pub mod session;
pub mod state;
pub mod view;

pub use session::{Command, Session};
pub use state::{Control, Inputs};
