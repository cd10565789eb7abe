//! plot-grid: ruled lines and labeled axes over a rectangular viewport.
//!
//! Picks nice tick values for linear and logarithmic ranges, maps them to
//! horizontal, vertical, radial or angular layouts, and keeps a keyed pool of
//! renderer elements in sync across updates.

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod render;
pub mod telemetry;

pub use api::{GridConfig, GridOverlay, GridUpdate};
pub use error::{GridError, GridResult};
