mod errors;
mod handler;
mod identity;
mod merge;
mod resolve;
mod types;

pub use errors::MonitorError;
pub use handler::{known_monitors, load_live_monitors};
pub use identity::{create_stable_identifier, identifiers_match, monitors_match};
pub use merge::merge_monitor_sources;
pub use resolve::{
    MonitorResolution, find_by_key, find_by_stable_id, primary_or_first, resolve_monitor_for_app,
    resolve_monitor_or_default,
};
pub use types::{MonitorInfo, MonitorKey, Orientation, Point, Rect};
