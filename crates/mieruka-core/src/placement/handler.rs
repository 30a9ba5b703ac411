use tracing::{debug, warn};

use super::types::{WindowConfig, ZoneRect};
use crate::monitors::{MonitorInfo, Rect, create_stable_identifier};

/// Smallest bounds dimension trusted from a live display query.
///
/// Display settings occasionally report zero-sized bounds while a monitor
/// sleeps or is hot-plugged; anything smaller than this falls back to the
/// monitor's nominal size.
pub const MIN_VALID_SURFACE: i32 = 50;

/// Virtual-desktop bounds of a monitor.
///
/// Returns `monitor.bounds` when both dimensions reach [`MIN_VALID_SURFACE`],
/// otherwise a rectangle at the origin built from the nominal width/height
/// (each at least 1).
pub fn get_monitor_bounds(monitor: &MonitorInfo) -> Rect {
    let bounds = monitor.bounds;
    if bounds.width >= MIN_VALID_SURFACE && bounds.height >= MIN_VALID_SURFACE {
        return bounds;
    }

    warn!(
        event = "core.placement.degenerate_bounds",
        stable_id = create_stable_identifier(monitor),
        bounds_width = bounds.width,
        bounds_height = bounds.height,
        nominal_width = monitor.width,
        nominal_height = monitor.height
    );
    Rect::new(0, 0, monitor.width.max(1), monitor.height.max(1))
}

/// Width and height every clamp is measured against, each at least 1.
pub fn monitor_size(monitor: &MonitorInfo) -> (i32, i32) {
    let bounds = get_monitor_bounds(monitor);
    (bounds.width.max(1), bounds.height.max(1))
}

/// Monitor-relative rectangle a window should occupy.
///
/// Full-screen windows cover the whole monitor and their stored rectangle is
/// ignored. Otherwise unset width/height default to the monitor size and
/// unset x/y to 0; size is clamped to `[1, monitor]` first and position to
/// `[0, monitor - size]`, so the result always fits.
pub fn resolve_bounds(window: &WindowConfig, monitor: &MonitorInfo) -> Rect {
    let (monitor_width, monitor_height) = monitor_size(monitor);
    if window.full_screen {
        return Rect::new(0, 0, monitor_width, monitor_height);
    }

    let width = window.width.unwrap_or(monitor_width).clamp(1, monitor_width);
    let height = window
        .height
        .unwrap_or(monitor_height)
        .clamp(1, monitor_height);
    let x = window.x.unwrap_or(0).clamp(0, monitor_width - width);
    let y = window.y.unwrap_or(0).clamp(0, monitor_height - height);

    Rect::new(x, y, width, height)
}

/// Window config whose rectangle is guaranteed valid on `monitor`.
///
/// Non-full-screen windows get their resolved rectangle written back; every
/// other field is preserved. Full-screen windows are returned as-is. Applying
/// it twice gives the same result as applying it once.
pub fn clamp_window_bounds(window: &WindowConfig, monitor: &MonitorInfo) -> WindowConfig {
    if window.full_screen {
        return window.clone();
    }
    window.with_rect(resolve_bounds(window, monitor))
}

/// Express a window's rectangle as percentages of its monitor.
///
/// `None` for full-screen windows, which have no meaningful zone.
pub fn create_zone_from_window(window: &WindowConfig, monitor: &MonitorInfo) -> Option<ZoneRect> {
    if window.full_screen {
        return None;
    }

    let rect = resolve_bounds(window, monitor);
    let (monitor_width, monitor_height) = monitor_size(monitor);
    let width = f64::from(monitor_width);
    let height = f64::from(monitor_height);

    Some(ZoneRect::new(
        100.0 * f64::from(rect.x) / width,
        100.0 * f64::from(rect.y) / height,
        100.0 * f64::from(rect.width) / width,
        100.0 * f64::from(rect.height) / height,
    ))
}

/// Rebuild an absolute monitor-relative rectangle from a zone.
///
/// Used when a window moves to a monitor of different resolution: relative
/// position and size are kept, not pixels. Rounding is half away from zero.
pub fn resolve_absolute_from_zone(zone: &ZoneRect, monitor: &MonitorInfo) -> Rect {
    let (monitor_width, monitor_height) = monitor_size(monitor);

    let width = scale(monitor_width, zone.width_percentage).clamp(1, monitor_width);
    let height = scale(monitor_height, zone.height_percentage).clamp(1, monitor_height);
    let x = scale(monitor_width, zone.left_percentage).clamp(0, monitor_width - width);
    let y = scale(monitor_height, zone.top_percentage).clamp(0, monitor_height - height);

    Rect::new(x, y, width, height)
}

fn scale(dimension: i32, percentage: f64) -> i32 {
    // `f64::round` rounds half away from zero; `as` saturates and maps NaN to 0.
    (f64::from(dimension) * percentage / 100.0).round() as i32
}

/// Move a window to another monitor, keeping its relative placement.
///
/// The rectangle is converted to a zone on `from` and resolved on `to`.
/// Full-screen windows keep their stored rectangle. Either way the window's
/// monitor key is rebound to `to`.
pub fn retarget_window(
    window: &WindowConfig,
    from: &MonitorInfo,
    to: &MonitorInfo,
) -> WindowConfig {
    let Some(zone) = create_zone_from_window(window, from) else {
        debug!(
            event = "core.placement.retarget_full_screen",
            to = create_stable_identifier(to)
        );
        return window.with_monitor(to.key.clone());
    };

    let rect = resolve_absolute_from_zone(&zone, to);
    debug!(
        event = "core.placement.retarget_completed",
        from = create_stable_identifier(from),
        to = create_stable_identifier(to),
        rect = %rect
    );
    window.with_rect(rect).with_monitor(to.key.clone())
}

/// Clamp a window to `monitor` and record that monitor as its home.
pub fn rebind_window(window: &WindowConfig, monitor: &MonitorInfo) -> WindowConfig {
    clamp_window_bounds(window, monitor).with_monitor(monitor.key.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::monitors::MonitorKey;

    fn monitor(width: i32, height: i32) -> MonitorInfo {
        MonitorInfo::new("Test", Rect::new(0, 0, width, height))
    }

    #[test]
    fn test_get_monitor_bounds_uses_bounds_when_valid() {
        let m = MonitorInfo::new("A", Rect::new(1920, -200, 2560, 1440));
        assert_eq!(get_monitor_bounds(&m), Rect::new(1920, -200, 2560, 1440));
    }

    #[test]
    fn test_get_monitor_bounds_falls_back_to_nominal() {
        let m = MonitorInfo::new("A", Rect::new(1920, 0, 0, 0)).with_nominal_size(1280, 1024);
        assert_eq!(get_monitor_bounds(&m), Rect::new(0, 0, 1280, 1024));

        let small = MonitorInfo::new("B", Rect::new(0, 0, 49, 1080)).with_nominal_size(1920, 1080);
        assert_eq!(get_monitor_bounds(&small), Rect::new(0, 0, 1920, 1080));
    }

    #[test]
    fn test_get_monitor_bounds_never_below_one() {
        let m = MonitorInfo::new("A", Rect::default());
        assert_eq!(get_monitor_bounds(&m), Rect::new(0, 0, 1, 1));
    }

    #[test]
    fn test_resolve_bounds_defaults_fill_monitor() {
        let m = monitor(1920, 1080);
        assert_eq!(
            resolve_bounds(&WindowConfig::default(), &m),
            Rect::new(0, 0, 1920, 1080)
        );
    }

    #[test]
    fn test_resolve_bounds_clamps_size_then_position() {
        let m = monitor(1920, 1080);
        let window = WindowConfig::at(1800, 1000, 400, 300);
        assert_eq!(resolve_bounds(&window, &m), Rect::new(1520, 780, 400, 300));

        let oversized = WindowConfig::at(-50, -50, 5000, 0);
        assert_eq!(resolve_bounds(&oversized, &m), Rect::new(0, 0, 1920, 1));
    }

    #[test]
    fn test_resolve_bounds_full_screen_ignores_rect() {
        let m = monitor(2560, 1440);
        let window = WindowConfig {
            full_screen: true,
            ..WindowConfig::at(999, 999, 1, 1)
        };
        assert_eq!(resolve_bounds(&window, &m), Rect::new(0, 0, 2560, 1440));
    }

    #[test]
    fn test_clamp_window_bounds_preserves_metadata() {
        let m = monitor(1920, 1080);
        let window = WindowConfig::at(3000, 10, 800, 600)
            .with_title("Sales")
            .with_always_on_top(true);
        let clamped = clamp_window_bounds(&window, &m);

        assert_eq!(clamped.x, Some(1120));
        assert_eq!(clamped.y, Some(10));
        assert_eq!(clamped.title, "Sales");
        assert!(clamped.always_on_top);
        assert!(!clamped.full_screen);
    }

    #[test]
    fn test_clamp_window_bounds_keeps_full_screen_fields() {
        let m = monitor(1920, 1080);
        let window = WindowConfig {
            full_screen: true,
            ..WindowConfig::at(5000, 5000, 10, 10)
        };
        assert_eq!(clamp_window_bounds(&window, &m), window);
    }

    #[test]
    fn test_create_zone_from_window() {
        let m = monitor(1920, 1080);
        let zone = create_zone_from_window(&WindowConfig::at(960, 540, 480, 270), &m).unwrap();
        assert_eq!(zone.left_percentage, 50.0);
        assert_eq!(zone.top_percentage, 50.0);
        assert_eq!(zone.width_percentage, 25.0);
        assert_eq!(zone.height_percentage, 25.0);
    }

    #[test]
    fn test_create_zone_skips_full_screen() {
        let m = monitor(1920, 1080);
        assert!(create_zone_from_window(&WindowConfig::full_screen(), &m).is_none());
    }

    #[test]
    fn test_zone_scales_to_larger_monitor() {
        let a = monitor(1920, 1080);
        let b = monitor(3840, 2160);
        let zone = create_zone_from_window(&WindowConfig::at(960, 540, 480, 270), &a).unwrap();
        assert_eq!(resolve_absolute_from_zone(&zone, &b), Rect::new(1920, 1080, 960, 540));
    }

    #[test]
    fn test_zone_rounds_half_away_from_zero() {
        let m = monitor(101, 101);
        let zone = ZoneRect::new(50.0, 0.0, 50.0, 100.0);
        // 101 * 0.5 = 50.5 rounds up to 51 for both width and x, then x clamps.
        assert_eq!(resolve_absolute_from_zone(&zone, &m), Rect::new(50, 0, 51, 101));
    }

    #[test]
    fn test_zone_minimum_size_is_one() {
        let m = monitor(1920, 1080);
        let zone = ZoneRect::new(100.0, 100.0, 0.0, 0.0);
        assert_eq!(resolve_absolute_from_zone(&zone, &m), Rect::new(1919, 1079, 1, 1));
    }

    #[test]
    fn test_zone_fits_different_aspect_ratio() {
        let wide = monitor(3440, 1440);
        let portrait = monitor(1080, 1920);
        let window = WindowConfig::at(2000, 100, 1440, 1300);
        let zone = create_zone_from_window(&window, &wide).unwrap();
        let rect = resolve_absolute_from_zone(&zone, &portrait);

        assert!(rect.x >= 0 && rect.y >= 0);
        assert!(rect.right() <= 1080);
        assert!(rect.bottom() <= 1920);
    }

    #[test]
    fn test_retarget_window_scales_and_rebinds() {
        let key_b = MonitorKey {
            device_id: "DEV-B".to_string(),
            ..Default::default()
        };
        let a = monitor(1920, 1080);
        let b = monitor(3840, 2160).with_key(key_b.clone());

        let moved = retarget_window(&WindowConfig::at(960, 540, 480, 270), &a, &b);
        assert_eq!(moved.x, Some(1920));
        assert_eq!(moved.y, Some(1080));
        assert_eq!(moved.width, Some(960));
        assert_eq!(moved.height, Some(540));
        assert_eq!(moved.monitor, key_b);
    }

    #[test]
    fn test_retarget_full_screen_only_rebinds() {
        let key_b = MonitorKey {
            target_id: 3,
            ..Default::default()
        };
        let a = monitor(1920, 1080);
        let b = monitor(1280, 720).with_key(key_b.clone());
        let window = WindowConfig {
            full_screen: true,
            ..WindowConfig::at(10, 10, 100, 100)
        };

        let moved = retarget_window(&window, &a, &b);
        assert_eq!(moved.x, Some(10));
        assert_eq!(moved.width, Some(100));
        assert_eq!(moved.monitor, key_b);
    }

    #[test]
    fn test_rebind_window_is_idempotent() {
        let m = monitor(1280, 720).with_key(MonitorKey {
            device_id: "DEV".to_string(),
            ..Default::default()
        });
        let window = WindowConfig::at(2000, 2000, 4000, 300);
        let once = rebind_window(&window, &m);
        let twice = rebind_window(&once, &m);
        assert_eq!(once, twice);
        assert_eq!(once.monitor.device_id, "DEV");
    }
}
