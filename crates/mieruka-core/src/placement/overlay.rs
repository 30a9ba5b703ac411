use super::handler::{get_monitor_bounds, resolve_bounds};
use super::types::WindowConfig;
use crate::monitors::{MonitorInfo, Rect};

/// Convert a monitor-relative rectangle to virtual-desktop coordinates.
pub fn to_virtual(rect: Rect, monitor: &MonitorInfo) -> Rect {
    let origin = get_monitor_bounds(monitor);
    rect.offset(origin.x, origin.y)
}

/// Convert a virtual-desktop rectangle to monitor-relative coordinates.
pub fn to_monitor_local(rect: Rect, monitor: &MonitorInfo) -> Rect {
    let origin = get_monitor_bounds(monitor);
    rect.offset_neg(origin.x, origin.y)
}

/// Monitor-relative rectangle for the layout preview.
///
/// Same as [`resolve_bounds`], but cut down to the monitor's work area so the
/// preview shows what the OS will actually allow (a window cannot extend under
/// the taskbar). An empty work area, or one that does not overlap the window,
/// leaves the resolved rectangle unchanged.
pub fn calculate_monitor_relative_bounds(window: &WindowConfig, monitor: &MonitorInfo) -> Rect {
    let relative = resolve_bounds(window, monitor);
    if monitor.work_area.is_empty() {
        return relative;
    }

    let absolute = to_virtual(relative, monitor);
    match absolute.intersect(&monitor.work_area) {
        Some(visible) => to_monitor_local(visible, monitor),
        None => relative,
    }
}

/// Preview rectangle for windows pinned always-on-top, `None` otherwise.
pub fn always_on_top_overlay(window: &WindowConfig, monitor: &MonitorInfo) -> Option<Rect> {
    window
        .always_on_top
        .then(|| calculate_monitor_relative_bounds(window, monitor))
}
