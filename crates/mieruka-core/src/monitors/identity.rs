use super::types::MonitorInfo;

/// Derive a stable string key for a monitor.
///
/// The first non-blank of `stable_id`, `device_name` and `key.device_id`
/// wins. Without any of those the key is a composite of the adapter LUID
/// (8-digit uppercase hex halves), the target id and the bounds, so two
/// monitors only collide when every identifying field matches.
pub fn create_stable_identifier(monitor: &MonitorInfo) -> String {
    if let Some(stable_id) = monitor
        .stable_id
        .as_deref()
        .filter(|id| !id.trim().is_empty())
    {
        return stable_id.to_string();
    }

    if !monitor.device_name.trim().is_empty() {
        return monitor.device_name.clone();
    }

    if monitor.key.has_device_id() {
        return monitor.key.device_id.clone();
    }

    let bounds = &monitor.bounds;
    format!(
        "{:08X}|{:08X}|{}|{}|{}|{}|{}",
        monitor.key.adapter_luid_high,
        monitor.key.adapter_luid_low,
        monitor.key.target_id,
        bounds.x,
        bounds.y,
        bounds.width,
        bounds.height
    )
}

/// Normalized form used for identifier comparison.
///
/// Case-insensitive, and surrounding whitespace is ignored, matching how
/// `AppConfig::target_monitor` trims the saved stable id. `"DISPLAY1 "` and
/// `"display1"` therefore name the same monitor.
pub(crate) fn identifier_fold(identifier: &str) -> String {
    identifier.trim().to_lowercase()
}

/// Whether two identifiers name the same monitor (case-insensitive, trimmed).
pub fn identifiers_match(a: &str, b: &str) -> bool {
    identifier_fold(a) == identifier_fold(b)
}

/// Whether two snapshots describe the same physical monitor.
pub fn monitors_match(a: &MonitorInfo, b: &MonitorInfo) -> bool {
    identifiers_match(&create_stable_identifier(a), &create_stable_identifier(b))
}
