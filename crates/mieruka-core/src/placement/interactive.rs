use tracing::trace;

use super::handler::monitor_size;
use super::types::{ClampOutcome, WindowInputs};
use crate::monitors::{MonitorInfo, Point};

/// Live clamp applied while the user drags or types placement values.
///
/// With no monitor selected, or with full screen active and
/// `allow_full_screen` unset, the values come back untouched. Otherwise size
/// is clamped first (`[1, monitor]`) because the position range depends on
/// it, then the position is clamped to `[0, monitor - size]`. A `pointer`
/// supplies the desired top-left; without one the current x/y are re-clamped
/// against the new size.
///
/// `changed` is true only when a value actually differs, so callers can skip
/// redrawing the preview for no-op clamps.
pub fn clamp_window_inputs_to_monitor(
    pointer: Option<Point>,
    current: WindowInputs,
    monitor: Option<&MonitorInfo>,
    full_screen: bool,
    allow_full_screen: bool,
) -> ClampOutcome {
    let Some(monitor) = monitor else {
        trace!(event = "core.placement.interactive_no_monitor");
        return ClampOutcome::unchanged(current);
    };

    if full_screen && !allow_full_screen {
        return ClampOutcome::unchanged(current);
    }

    let (monitor_width, monitor_height) = monitor_size(monitor);
    let width = current.width.clamp(1, monitor_width);
    let height = current.height.clamp(1, monitor_height);

    let (desired_x, desired_y) = match pointer {
        Some(point) => (point.x, point.y),
        None => (current.x, current.y),
    };
    let x = desired_x.clamp(0, monitor_width - width);
    let y = desired_y.clamp(0, monitor_height - height);

    let values = WindowInputs::new(x, y, width, height);
    let changed = values != current;
    if changed {
        trace!(
            event = "core.placement.interactive_clamped",
            x = x,
            y = y,
            width = width,
            height = height
        );
    }

    ClampOutcome { changed, values }
}
