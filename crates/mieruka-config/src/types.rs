use mieruka_core::{AppConfig, MonitorInfo};
use serde::{Deserialize, Serialize};

/// Seconds each item stays in front during a cycle.
pub const DEFAULT_CYCLE_INTERVAL_SECS: u64 = 30;

/// Operator-level settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub cycle_interval_secs: u64,
    /// Stable id of the monitor used when an app's monitor cannot be resolved
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_monitor: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            cycle_interval_secs: DEFAULT_CYCLE_INTERVAL_SECS,
            default_monitor: None,
        }
    }
}

/// A saved configurator profile.
///
/// `monitors` holds monitors remembered from earlier sessions; they rank
/// below live enumeration when merged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub settings: Settings,
    pub monitors: Vec<MonitorInfo>,
    pub apps: Vec<AppConfig>,
}

impl Profile {
    pub fn find_app(&self, id: &str) -> Option<&AppConfig> {
        self.apps.iter().find(|app| app.id == id)
    }

    /// Replace the app with the same id, or append it.
    pub fn upsert_app(&mut self, app: AppConfig) {
        match self.apps.iter_mut().find(|existing| existing.id == app.id) {
            Some(existing) => *existing = app,
            None => self.apps.push(app),
        }
    }

    /// Remember a monitor, replacing an earlier snapshot of the same display.
    pub fn remember_monitor(&mut self, monitor: MonitorInfo) {
        match self
            .monitors
            .iter_mut()
            .find(|known| mieruka_core::monitors::monitors_match(known, &monitor))
        {
            Some(known) => *known = monitor,
            None => self.monitors.push(monitor),
        }
    }
}
