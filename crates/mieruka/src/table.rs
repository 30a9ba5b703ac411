use mieruka_core::monitors::{MonitorInfo, create_stable_identifier};

use crate::color;
use crate::commands::json_types::ResolvedPlacement;

fn border(left: &str, mid: &str, right: &str, widths: &[usize]) -> String {
    let segments: Vec<String> = widths.iter().map(|w| "─".repeat(w + 2)).collect();
    format!("{}{}{}", left, segments.join(mid), right)
}

fn row(cells: &[String]) -> String {
    format!("│ {} │", cells.join(" │ "))
}

fn column_width<'a>(values: impl Iterator<Item = &'a str>, min: usize, max: usize) -> usize {
    values
        .map(|v| v.chars().count())
        .max()
        .unwrap_or(min)
        .clamp(min, max)
}

/// Print a formatted table of monitors
pub fn print_monitors_table(monitors: &[MonitorInfo]) {
    let ids: Vec<String> = monitors.iter().map(create_stable_identifier).collect();

    let id_width = column_width(ids.iter().map(String::as_str), 9, 36);
    let name_width = column_width(monitors.iter().map(|m| m.display_name()), 4, 30);
    let size_width = 11; // "3840x2160"
    let pos_width = 13; // "x:-1920 y:0"
    let work_width = 22; // "1920x1040 @ (0, 0)"
    let primary_width = 7;
    let widths = [
        id_width,
        name_width,
        size_width,
        pos_width,
        work_width,
        primary_width,
    ];

    println!("{}", border("┌", "┬", "┐", &widths));
    println!(
        "{}",
        row(&[
            truncate("Stable ID", id_width),
            truncate("Name", name_width),
            truncate("Size", size_width),
            truncate("Position", pos_width),
            truncate("Work area", work_width),
            truncate("Primary", primary_width),
        ])
    );
    println!("{}", border("├", "┼", "┤", &widths));

    for (monitor, id) in monitors.iter().zip(&ids) {
        let size = format!("{}x{}", monitor.bounds.width, monitor.bounds.height);
        let pos = format!("x:{} y:{}", monitor.bounds.x, monitor.bounds.y);
        let work = if monitor.work_area.is_empty() {
            "-".to_string()
        } else {
            monitor.work_area.to_string()
        };
        let primary = if monitor.is_primary { "Yes" } else { "No" };

        println!(
            "{}",
            row(&[
                truncate(id, id_width),
                truncate(monitor.display_name(), name_width),
                truncate(&size, size_width),
                truncate(&pos, pos_width),
                truncate(&work, work_width),
                truncate(primary, primary_width),
            ])
        );
    }

    println!("{}", border("└", "┴", "┘", &widths));
    println!("\nTotal: {} monitor(s)", monitors.len());
}

/// Print a formatted table of resolved app placements
pub fn print_placements_table(placements: &[ResolvedPlacement]) {
    let app_width = column_width(placements.iter().map(|p| p.app_id.as_str()), 3, 24);
    let monitor_width = column_width(
        placements.iter().map(|p| p.monitor.as_deref().unwrap_or("-")),
        7,
        36,
    );
    let resolution_width = 10;
    let bounds_width = 24;
    let virtual_width = 26;
    let widths = [
        app_width,
        monitor_width,
        resolution_width,
        bounds_width,
        virtual_width,
    ];

    println!("{}", border("┌", "┬", "┐", &widths));
    println!(
        "{}",
        row(&[
            truncate("App", app_width),
            truncate("Monitor", monitor_width),
            truncate("Source", resolution_width),
            truncate("Bounds", bounds_width),
            truncate("Virtual", virtual_width),
        ])
    );
    println!("{}", border("├", "┼", "┤", &widths));

    for placement in placements {
        let bounds = placement
            .bounds
            .map(|r| r.to_string())
            .unwrap_or_else(|| "-".to_string());
        let virtual_bounds = placement
            .virtual_bounds
            .map(|r| r.to_string())
            .unwrap_or_else(|| "-".to_string());

        println!(
            "{}",
            row(&[
                truncate(&placement.app_id, app_width),
                truncate(placement.monitor.as_deref().unwrap_or("-"), monitor_width),
                colored_cell(placement.resolution, resolution_width),
                truncate(&bounds, bounds_width),
                truncate(&virtual_bounds, virtual_width),
            ])
        );
    }

    println!("{}", border("└", "┴", "┘", &widths));
    println!("\nTotal: {} app(s)", placements.len());
}

/// Colored resolution label, padded by its visible width.
fn colored_cell(resolution: &str, width: usize) -> String {
    let padding = width.saturating_sub(resolution.chars().count());
    format!("{}{}", color::resolution(resolution), " ".repeat(padding))
}

/// Truncate a string to a maximum display width, adding "..." if truncated.
///
/// Uses character count (not byte count) to safely handle UTF-8 strings.
pub fn truncate(s: &str, max_len: usize) -> String {
    let char_count = s.chars().count();
    if char_count <= max_len {
        format!("{:<width$}", s, width = max_len)
    } else {
        let truncated: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{:<width$}", format!("{}...", truncated), width = max_len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("DISPLAY1", 10), "DISPLAY1  ");
        assert_eq!(truncate("0000A1B2|00000000|4357|1|1|", 10), "0000A1B...");
        assert_eq!(truncate("exact", 5), "exact");
    }

    #[test]
    fn test_truncate_edge_cases() {
        assert_eq!(truncate("", 5), "     ");
        assert_eq!(truncate("abcd", 3), "...");
    }

    #[test]
    fn test_truncate_utf8_safety() {
        let result = truncate("Écran intégré principal", 10);
        assert_eq!(result.chars().count(), 10);
        assert!(result.ends_with("..."));
    }

    #[test]
    fn test_border_and_row() {
        assert_eq!(border("┌", "┬", "┐", &[1, 2]), "┌───┬────┐");
        assert_eq!(row(&["a".to_string(), "bc".to_string()]), "│ a │ bc │");
    }

    #[test]
    fn test_column_width_clamps() {
        assert_eq!(column_width(["ab"].into_iter(), 4, 10), 4);
        assert_eq!(column_width(["a-very-long-name"].into_iter(), 4, 10), 10);
        assert_eq!(column_width(std::iter::empty(), 4, 10), 4);
    }
}
