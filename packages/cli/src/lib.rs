//! Boundary plumbing around the `dyscalc-algo` core: quiz-pool loading
//! and validation, difficulty-label normalization, the interactive
//! console session, and a self-play simulation mode.

pub mod logging;
pub mod pool;
pub mod session;
pub mod sim;
