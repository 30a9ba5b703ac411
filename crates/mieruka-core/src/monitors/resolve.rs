use tracing::{debug, warn};

use super::identity::{create_stable_identifier, identifiers_match};
use super::types::{MonitorInfo, MonitorKey};
use crate::placement::AppConfig;

/// Find a monitor by stable identifier (case-insensitive).
pub fn find_by_stable_id<'a>(
    monitors: &'a [MonitorInfo],
    stable_id: &str,
) -> Option<&'a MonitorInfo> {
    if stable_id.trim().is_empty() {
        return None;
    }
    monitors
        .iter()
        .find(|m| identifiers_match(&create_stable_identifier(m), stable_id))
}

/// Find a monitor whose key equals `key` exactly.
///
/// Trivial keys never match, and partially matching keys are treated as
/// not found.
pub fn find_by_key<'a>(monitors: &'a [MonitorInfo], key: &MonitorKey) -> Option<&'a MonitorInfo> {
    if key.is_empty() {
        return None;
    }
    monitors.iter().find(|m| m.key == *key)
}

/// Primary monitor, else the first one. Default for unresolved apps.
pub fn primary_or_first(monitors: &[MonitorInfo]) -> Option<&MonitorInfo> {
    monitors.iter().find(|m| m.is_primary).or_else(|| monitors.first())
}

/// Resolve the live monitor a configured app belongs to.
///
/// A non-blank `target_monitor_stable_id` is authoritative: when it is set
/// the structural key is never consulted, even if the stable id finds
/// nothing. Configurations saved without a stable id fall back to an exact
/// match on `window.monitor`.
pub fn resolve_monitor_for_app<'a>(
    app: &AppConfig,
    known_monitors: &'a [MonitorInfo],
) -> Option<&'a MonitorInfo> {
    if let Some(stable_id) = app.target_monitor() {
        let found = find_by_stable_id(known_monitors, stable_id);
        match found {
            Some(monitor) => {
                let key = &app.window.monitor;
                if !key.is_empty() && monitor.key != *key {
                    debug!(
                        event = "core.monitor.resolve_key_disagrees",
                        app_id = app.id,
                        stable_id = stable_id,
                        "Stable id and saved monitor key disagree; using stable id"
                    );
                }
            }
            None => {
                debug!(
                    event = "core.monitor.resolve_stable_id_missing",
                    app_id = app.id,
                    stable_id = stable_id
                );
            }
        }
        return found;
    }

    if app.window.monitor.is_empty() {
        return None;
    }

    let found = find_by_key(known_monitors, &app.window.monitor);
    debug!(
        event = "core.monitor.resolve_by_key",
        app_id = app.id,
        found = found.is_some()
    );
    found
}

/// How an app's monitor was chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonitorResolution {
    /// Found through the app's own stable id or saved key
    Resolved,
    /// App reference missed; the default or primary/first monitor was used
    Fallback,
}

impl MonitorResolution {
    pub fn as_str(&self) -> &'static str {
        match self {
            MonitorResolution::Resolved => "resolved",
            MonitorResolution::Fallback => "fallback",
        }
    }
}

/// Resolve an app's monitor, falling back when its references miss.
///
/// The fallback is `default_stable_id` when it names a known monitor, else
/// the primary monitor, else the first one. `None` only when `known_monitors`
/// is empty.
pub fn resolve_monitor_or_default<'a>(
    app: &AppConfig,
    known_monitors: &'a [MonitorInfo],
    default_stable_id: Option<&str>,
) -> Option<(&'a MonitorInfo, MonitorResolution)> {
    if let Some(monitor) = resolve_monitor_for_app(app, known_monitors) {
        return Some((monitor, MonitorResolution::Resolved));
    }

    let fallback = default_stable_id
        .and_then(|id| find_by_stable_id(known_monitors, id))
        .or_else(|| primary_or_first(known_monitors))?;

    warn!(
        event = "core.monitor.resolve_fallback",
        app_id = app.id,
        fallback = create_stable_identifier(fallback)
    );
    Some((fallback, MonitorResolution::Fallback))
}
