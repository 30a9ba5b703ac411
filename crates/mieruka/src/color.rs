//! CLI color helpers.
//!
//! All functions respect `NO_COLOR`, `FORCE_COLOR`, and TTY detection via
//! `owo-colors`' `if_supports_color()`.

use owo_colors::OwoColorize;
use owo_colors::Stream::{Stderr, Stdout};

/// Call once from main.rs when `--no-color` is passed.
pub fn set_no_color() {
    // SAFETY: Called once at startup before any threads are spawned.
    unsafe { std::env::set_var("NO_COLOR", "1") };
}

// Accent: #7CB4C8
const ACCENT: (u8, u8, u8) = (124, 180, 200);

// Success: #6B8F5E
const SUCCESS: (u8, u8, u8) = (107, 143, 94);

// Warning: #C49A5C
const WARNING: (u8, u8, u8) = (196, 154, 92);

// Error: #B87060
const ERROR: (u8, u8, u8) = (184, 112, 96);

// Muted: #5C6370
const MUTED: (u8, u8, u8) = (92, 99, 112);

/// Stable identifiers and other primary values.
pub fn accent(text: &str) -> String {
    text.if_supports_color(Stdout, |t| t.truecolor(ACCENT.0, ACCENT.1, ACCENT.2))
        .to_string()
}

pub fn success(text: &str) -> String {
    text.if_supports_color(Stdout, |t| t.truecolor(SUCCESS.0, SUCCESS.1, SUCCESS.2))
        .to_string()
}

pub fn bold(text: &str) -> String {
    text.if_supports_color(Stdout, |t| t.bold()).to_string()
}

pub fn muted(text: &str) -> String {
    text.if_supports_color(Stdout, |t| t.truecolor(MUTED.0, MUTED.1, MUTED.2))
        .to_string()
}

/// Color-code how an app's monitor was found (resolved/fallback/unresolved).
pub fn resolution(source: &str) -> String {
    match source {
        "resolved" => success(source),
        "fallback" => source
            .if_supports_color(Stdout, |t| t.truecolor(WARNING.0, WARNING.1, WARNING.2))
            .to_string(),
        "unresolved" => source
            .if_supports_color(Stdout, |t| t.truecolor(ERROR.0, ERROR.1, ERROR.2))
            .to_string(),
        _ => source.to_string(),
    }
}

/// Error styling for stderr messages.
pub fn error(text: &str) -> String {
    text.if_supports_color(Stderr, |t| t.truecolor(ERROR.0, ERROR.1, ERROR.2))
        .to_string()
}

/// Warning styling for stderr messages.
pub fn warning(text: &str) -> String {
    text.if_supports_color(Stderr, |t| t.truecolor(WARNING.0, WARNING.1, WARNING.2))
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_functions_contain_original_text() {
        assert!(accent("DISPLAY1").contains("DISPLAY1"));
        assert!(success("ok").contains("ok"));
        assert!(bold("Header").contains("Header"));
        assert!(muted("-").contains("-"));
        assert!(error("failed").contains("failed"));
        assert!(warning("careful").contains("careful"));
    }

    #[test]
    fn test_resolution_maps_correctly() {
        assert!(resolution("resolved").contains("resolved"));
        assert!(resolution("fallback").contains("fallback"));
        assert!(resolution("unresolved").contains("unresolved"));
        assert_eq!(resolution("other"), "other");
    }
}
