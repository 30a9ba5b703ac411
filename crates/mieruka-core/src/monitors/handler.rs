use std::path::Path;

use tracing::{info, warn};

use super::errors::MonitorError;
use super::identity::create_stable_identifier;
use super::merge::merge_monitor_sources;
use super::types::MonitorInfo;

/// Read a live monitor list (a JSON array of monitors) produced by the
/// platform display-enumeration service.
pub fn load_live_monitors(path: &Path) -> Result<Vec<MonitorInfo>, MonitorError> {
    info!(event = "core.monitor.live_load_started", path = %path.display());

    let content =
        std::fs::read_to_string(path).map_err(|e| MonitorError::LiveSourceUnreadable {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

    let monitors: Vec<MonitorInfo> =
        serde_json::from_str(&content).map_err(|e| MonitorError::LiveSourceInvalid {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

    for monitor in monitors.iter().filter(|m| m.width < 1 || m.height < 1) {
        warn!(
            event = "core.monitor.live_nominal_size_invalid",
            stable_id = create_stable_identifier(monitor),
            width = monitor.width,
            height = monitor.height
        );
    }

    info!(
        event = "core.monitor.live_load_completed",
        path = %path.display(),
        count = monitors.len()
    );
    Ok(monitors)
}

/// Live monitors first, remembered monitors after, deduplicated.
pub fn known_monitors(
    live: Option<&[MonitorInfo]>,
    remembered: &[MonitorInfo],
) -> Vec<MonitorInfo> {
    let merged = merge_monitor_sources([live, Some(remembered)]);
    info!(
        event = "core.monitor.known_resolved",
        live = live.map(|m| m.len()).unwrap_or(0),
        remembered = remembered.len(),
        merged = merged.len()
    );
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::MierukaError;
    use crate::monitors::types::Rect;
    use std::io::Write;

    #[test]
    fn test_load_live_monitors_reads_json_array() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{
                "device_name": "\\\\.\\DISPLAY1",
                "width": 1920,
                "height": 1080,
                "bounds": {{ "x": 0, "y": 0, "width": 1920, "height": 1080 }},
                "work_area": {{ "x": 0, "y": 0, "width": 1920, "height": 1040 }},
                "is_primary": true
            }}]"#
        )
        .unwrap();

        let monitors = load_live_monitors(file.path()).unwrap();
        assert_eq!(monitors.len(), 1);
        assert_eq!(monitors[0].device_name, "\\\\.\\DISPLAY1");
        assert_eq!(monitors[0].work_area.height, 1040);
        assert!(monitors[0].is_primary);
    }

    #[test]
    fn test_load_live_monitors_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_live_monitors(&dir.path().join("absent.json")).unwrap_err();
        assert_eq!(err.error_code(), "LIVE_SOURCE_UNREADABLE");
    }

    #[test]
    fn test_load_live_monitors_invalid_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not a list").unwrap();
        let err = load_live_monitors(file.path()).unwrap_err();
        assert_eq!(err.error_code(), "LIVE_SOURCE_INVALID");
        assert!(err.is_user_error());
    }

    #[test]
    fn test_known_monitors_prefers_live() {
        let live = vec![
            MonitorInfo::new("Live", Rect::new(0, 0, 2560, 1440)).with_device_name("DISPLAY1"),
        ];
        let remembered = vec![
            MonitorInfo::new("Old", Rect::new(0, 0, 1920, 1080)).with_device_name("DISPLAY1"),
            MonitorInfo::new("Gone", Rect::new(1920, 0, 1920, 1080)).with_device_name("DISPLAY2"),
        ];

        let known = known_monitors(Some(live.as_slice()), &remembered);
        let names: Vec<_> = known.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["Live", "Gone"]);

        assert_eq!(known_monitors(None, &remembered).len(), 2);
    }
}
