//! Pure derived-value services plus the driver that re-runs them.

pub mod refresh;
pub mod services;
pub mod utils;
