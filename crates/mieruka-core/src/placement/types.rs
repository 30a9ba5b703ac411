use serde::{Deserialize, Serialize};

use crate::monitors::{MonitorKey, Rect};

/// Desired placement for one configured application window.
///
/// Coordinates are monitor-relative. `None` means "unspecified" and is filled
/// in by bounds resolution. When `full_screen` is set the rectangle fields are
/// ignored for resolution but kept so they survive toggling full screen off.
///
/// Treated as an immutable value: geometry operations return a new config.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub full_screen: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<i32>,
    pub title: String,
    pub always_on_top: bool,
    /// Snapshot of the monitor this window was last configured against
    pub monitor: MonitorKey,
}

impl WindowConfig {
    pub fn full_screen() -> Self {
        Self {
            full_screen: true,
            ..Default::default()
        }
    }

    pub fn at(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            width: Some(width),
            height: Some(height),
            ..Default::default()
        }
    }

    /// Copy of this config with the rectangle fields set from `rect`.
    pub fn with_rect(&self, rect: Rect) -> Self {
        Self {
            x: Some(rect.x),
            y: Some(rect.y),
            width: Some(rect.width),
            height: Some(rect.height),
            ..self.clone()
        }
    }

    pub fn with_monitor(&self, monitor: MonitorKey) -> Self {
        Self {
            monitor,
            ..self.clone()
        }
    }

    pub fn with_title(&self, title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..self.clone()
        }
    }

    pub fn with_always_on_top(&self, always_on_top: bool) -> Self {
        Self {
            always_on_top,
            ..self.clone()
        }
    }
}

/// A configured application or site.
///
/// `target` is whatever the launcher runs (executable path or URL); the
/// geometry engine only reads the monitor references and the window.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub target: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_monitor_stable_id: Option<String>,
    #[serde(default)]
    pub window: WindowConfig,
}

impl AppConfig {
    pub fn new(id: impl Into<String>, window: WindowConfig) -> Self {
        Self {
            id: id.into(),
            window,
            ..Default::default()
        }
    }

    pub fn with_target_monitor(mut self, stable_id: impl Into<String>) -> Self {
        self.target_monitor_stable_id = Some(stable_id.into());
        self
    }

    /// The stable id when present and not blank.
    pub fn target_monitor(&self) -> Option<&str> {
        self.target_monitor_stable_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
    }
}

/// Window rectangle expressed as percentages of its monitor's size.
///
/// Derived, never stored. Each component is within `[0, 100]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ZoneRect {
    pub left_percentage: f64,
    pub top_percentage: f64,
    pub width_percentage: f64,
    pub height_percentage: f64,
}

impl ZoneRect {
    /// Build a zone, clamping every component into `[0, 100]`.
    ///
    /// Non-finite values collapse to 0.
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left_percentage: clamp_percentage(left),
            top_percentage: clamp_percentage(top),
            width_percentage: clamp_percentage(width),
            height_percentage: clamp_percentage(height),
        }
    }
}

fn clamp_percentage(value: f64) -> f64 {
    if value.is_finite() {
        value.clamp(0.0, 100.0)
    } else {
        0.0
    }
}

/// Raw numeric field values from the placement editor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowInputs {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl WindowInputs {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn as_rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

/// Result of an interactive clamp.
///
/// `changed` tells the editor whether any field was adjusted, so the preview
/// overlay is only redrawn when something actually moved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClampOutcome {
    pub changed: bool,
    pub values: WindowInputs,
}

impl ClampOutcome {
    pub fn unchanged(values: WindowInputs) -> Self {
        Self {
            changed: false,
            values,
        }
    }
}
