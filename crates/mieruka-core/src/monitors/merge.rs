use std::collections::HashSet;

use tracing::debug;

use super::identity::{create_stable_identifier, identifier_fold};
use super::types::MonitorInfo;

/// Merge monitor lists from several sources into one deduplicated list.
///
/// Sources are given in priority order (live enumeration first, remembered
/// monitors after) and may be absent or empty. Duplicates are detected by
/// stable identifier, case-insensitively and ignoring surrounding whitespace;
/// the first occurrence wins and the
/// first-seen order is kept. Monitors that only appear in a lower-priority
/// source are retained so saved configurations can still reference them.
pub fn merge_monitor_sources<'a, I>(sources: I) -> Vec<MonitorInfo>
where
    I: IntoIterator<Item = Option<&'a [MonitorInfo]>>,
{
    let mut seen = HashSet::new();
    let mut merged = Vec::new();
    let mut skipped = 0usize;

    for monitor in sources.into_iter().flatten().flatten() {
        let fold = identifier_fold(&create_stable_identifier(monitor));
        if seen.insert(fold) {
            merged.push(monitor.clone());
        } else {
            skipped += 1;
        }
    }

    debug!(
        event = "core.monitor.merge_completed",
        count = merged.len(),
        duplicates = skipped
    );
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::monitors::types::Rect;

    fn named(device: &str, x: i32) -> MonitorInfo {
        MonitorInfo::new(device, Rect::new(x, 0, 1920, 1080)).with_device_name(device)
    }

    #[test]
    fn test_merge_dedups_and_preserves_order() {
        let a = named("A", 0);
        let b = named("B", 1920);
        let c = named("C", 3840);

        let live = vec![a.clone(), b.clone()];
        let remembered = vec![b.clone(), c.clone()];
        let merged = merge_monitor_sources([Some(live.as_slice()), Some(remembered.as_slice())]);

        let names: Vec<_> = merged.iter().map(|m| m.device_name.as_str()).collect();
        assert_eq!(names, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_merge_first_source_wins() {
        let live = vec![named("B", 0).with_primary(true)];
        let remembered = vec![named("b", 1920)];
        let merged = merge_monitor_sources([Some(live.as_slice()), Some(remembered.as_slice())]);

        assert_eq!(merged.len(), 1);
        assert!(merged[0].is_primary);
        assert_eq!(merged[0].bounds.x, 0);
    }

    #[test]
    fn test_merge_tolerates_missing_and_empty_sources() {
        let only = vec![named("A", 0)];
        let merged = merge_monitor_sources([None, Some(&[][..]), Some(only.as_slice()), None]);
        assert_eq!(merged.len(), 1);

        let none: Vec<Option<&[MonitorInfo]>> = Vec::new();
        assert!(merge_monitor_sources(none).is_empty());
    }

    #[test]
    fn test_merge_dedups_within_one_source() {
        let source = vec![named("A", 0), named("A", 0), named("B", 1920)];
        let merged = merge_monitor_sources([Some(source.as_slice())]);
        assert_eq!(merged.len(), 2);
    }
}
