//! Command implementations

pub mod resolve;
pub mod simple;

pub use resolve::{ResolveResult, resolve_guess};
pub use simple::{SessionEnd, play_session, run_simple};
