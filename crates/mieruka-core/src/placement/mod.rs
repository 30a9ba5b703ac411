mod handler;
mod interactive;
mod overlay;
mod types;


pub use handler::{
    MIN_VALID_SURFACE, clamp_window_bounds, create_zone_from_window, get_monitor_bounds,
    monitor_size, rebind_window, resolve_absolute_from_zone, resolve_bounds, retarget_window,
};
pub use interactive::clamp_window_inputs_to_monitor;
pub use overlay::{
    always_on_top_overlay, calculate_monitor_relative_bounds, to_monitor_local, to_virtual,
};
pub use types::{AppConfig, ClampOutcome, WindowConfig, WindowInputs, ZoneRect};
