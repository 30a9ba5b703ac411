use serde::Serialize;

use mieruka_core::{MonitorInfo, Rect, ZoneRect};

/// Monitor with its derived stable identifier (used by the monitors command).
///
/// `identifier` is the derived key; the flattened monitor keeps its own
/// optional `stable_id` field as stored.
#[derive(Serialize)]
pub struct IdentifiedMonitor<'a> {
    pub identifier: String,
    #[serde(flatten)]
    pub monitor: &'a MonitorInfo,
}

/// Placement computed for one configured app (used by the resolve command).
#[derive(Serialize)]
pub struct ResolvedPlacement {
    pub app_id: String,
    pub name: String,
    pub monitor: Option<String>,
    pub resolution: &'static str,
    pub bounds: Option<Rect>,
    pub virtual_bounds: Option<Rect>,
    pub overlay_bounds: Option<Rect>,
    pub zone: Option<ZoneRect>,
}
