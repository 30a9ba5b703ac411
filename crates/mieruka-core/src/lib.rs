//! Core library for the Mieruka configurator.
//!
//! Owns the monitor-relative window geometry engine: monitor identity and
//! merging, per-app monitor resolution, bounds clamping, and zone-based
//! retargeting between monitors of different resolution.

pub mod errors;
pub mod events;
pub mod logging;
pub mod monitors;
pub mod placement;

pub use logging::init_logging;
pub use monitors::{MonitorInfo, MonitorKey, Orientation, Point, Rect};
pub use placement::{AppConfig, ClampOutcome, WindowConfig, WindowInputs, ZoneRect};
