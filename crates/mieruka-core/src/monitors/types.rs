use serde::{Deserialize, Serialize};

/// Integer pixel rectangle.
///
/// Used both for virtual-desktop coordinates (monitor bounds, work areas) and
/// for monitor-relative window placement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> i32 {
        self.x.saturating_add(self.width)
    }

    pub fn bottom(&self) -> i32 {
        self.y.saturating_add(self.height)
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    pub fn offset(&self, dx: i32, dy: i32) -> Rect {
        Rect::new(
            self.x.saturating_add(dx),
            self.y.saturating_add(dy),
            self.width,
            self.height,
        )
    }

    /// Shift by `-dx, -dy`. Subtracts with saturation, so an origin of
    /// `i32::MIN` cannot overflow.
    pub fn offset_neg(&self, dx: i32, dy: i32) -> Rect {
        Rect::new(
            self.x.saturating_sub(dx),
            self.y.saturating_sub(dy),
            self.width,
            self.height,
        )
    }

    /// Overlapping area of two rectangles, or `None` when they only touch or
    /// do not overlap at all.
    pub fn intersect(&self, other: &Rect) -> Option<Rect> {
        let left = self.x.max(other.x);
        let top = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());
        if right <= left || bottom <= top {
            return None;
        }
        Some(Rect::new(left, top, right - left, bottom - top))
    }

    pub fn contains_point(&self, point: Point) -> bool {
        point.x >= self.x && point.x < self.right() && point.y >= self.y && point.y < self.bottom()
    }
}

impl std::fmt::Display for Rect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}x{} @ ({}, {})",
            self.width, self.height, self.x, self.y
        )
    }
}

/// Pointer position in monitor-relative pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Display orientation as reported by the platform.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    #[default]
    Landscape,
    Portrait,
    LandscapeFlipped,
    PortraitFlipped,
}

impl Orientation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Orientation::Landscape => "landscape",
            Orientation::Portrait => "portrait",
            Orientation::LandscapeFlipped => "landscape_flipped",
            Orientation::PortraitFlipped => "portrait_flipped",
        }
    }
}

impl std::fmt::Display for Orientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Structural identity of a monitor.
///
/// Saved window configurations keep a snapshot of this key so their home
/// monitor can be found again even if enumeration order changes between
/// sessions. Equality compares every field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct MonitorKey {
    pub device_id: String,
    pub display_index: i32,
    pub adapter_luid_high: u32,
    pub adapter_luid_low: u32,
    pub target_id: u32,
}

impl MonitorKey {
    /// True when the key carries no identity at all (every field zero/empty).
    pub fn is_empty(&self) -> bool {
        self.device_id.trim().is_empty()
            && self.display_index == 0
            && self.adapter_luid_high == 0
            && self.adapter_luid_low == 0
            && self.target_id == 0
    }

    pub fn has_device_id(&self) -> bool {
        !self.device_id.trim().is_empty()
    }

    pub fn has_adapter_target(&self) -> bool {
        self.adapter_luid_high != 0 || self.adapter_luid_low != 0 || self.target_id != 0
    }
}

/// Snapshot of a physical display.
///
/// Built fresh on every enumeration and never mutated afterwards; the `with_*`
/// builders return new values. Two snapshots of the same display are unified
/// by their stable identifier, not by reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonitorInfo {
    #[serde(default)]
    pub key: MonitorKey,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub device_name: String,
    /// Nominal pixel width, the last known-good value
    pub width: i32,
    /// Nominal pixel height, the last known-good value
    pub height: i32,
    /// Rectangle in virtual-desktop coordinates
    pub bounds: Rect,
    /// Bounds minus OS chrome such as taskbars
    #[serde(default)]
    pub work_area: Rect,
    #[serde(default = "default_scale")]
    pub scale: f64,
    #[serde(default)]
    pub orientation: Orientation,
    #[serde(default)]
    pub rotation: i32,
    #[serde(default)]
    pub is_primary: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stable_id: Option<String>,
}

fn default_scale() -> f64 {
    1.0
}

impl MonitorInfo {
    /// Monitor whose bounds and work area both equal `bounds`.
    pub fn new(name: impl Into<String>, bounds: Rect) -> Self {
        Self {
            key: MonitorKey::default(),
            name: name.into(),
            device_name: String::new(),
            width: bounds.width,
            height: bounds.height,
            bounds,
            work_area: bounds,
            scale: 1.0,
            orientation: Orientation::Landscape,
            rotation: 0,
            is_primary: false,
            stable_id: None,
        }
    }

    pub fn with_key(mut self, key: MonitorKey) -> Self {
        self.key = key;
        self
    }

    pub fn with_device_name(mut self, device_name: impl Into<String>) -> Self {
        self.device_name = device_name.into();
        self
    }

    pub fn with_work_area(mut self, work_area: Rect) -> Self {
        self.work_area = work_area;
        self
    }

    pub fn with_nominal_size(mut self, width: i32, height: i32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_orientation(mut self, orientation: Orientation, rotation: i32) -> Self {
        self.orientation = orientation;
        self.rotation = rotation;
        self
    }

    pub fn with_primary(mut self, is_primary: bool) -> Self {
        self.is_primary = is_primary;
        self
    }

    pub fn with_stable_id(mut self, stable_id: impl Into<String>) -> Self {
        self.stable_id = Some(stable_id.into());
        self
    }

    /// Human-facing label: the friendly name, else the device name.
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            &self.device_name
        } else {
            &self.name
        }
    }
}
