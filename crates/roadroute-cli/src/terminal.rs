//! Terminal styling and color utilities.
//!
//! This module provides ANSI escape code definitions and color detection
//! for terminal output formatting.

use roadroute_lib::Instruction;

/// ANSI escape codes for text styling and colors.
pub mod colors {
    /// Reset all styling.
    pub const RESET: &str = "\x1b[0m";

    /// Bold reverse green for the Start instruction.
    pub const TAG_START: &str = "\x1b[1;7;32m";

    /// Bright bold white for emphasis (street names, totals).
    pub const WHITE_BOLD: &str = "\x1b[1;97m";
    /// Gray for secondary elements (coordinates, labels).
    pub const GRAY: &str = "\x1b[90m";
    /// Green for continuing straight.
    pub const GREEN: &str = "\x1b[32m";
    /// Cyan for left and right turns.
    pub const CYAN: &str = "\x1b[36m";
    /// Orange (256-color) for turning back.
    pub const ORANGE: &str = "\x1b[38;5;208m";
}

/// A collection of resolved color codes, either actual ANSI sequences
/// or empty strings when color is disabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorPalette {
    pub reset: &'static str,
    pub tag_start: &'static str,
    pub white_bold: &'static str,
    pub gray: &'static str,
    pub straight: &'static str,
    pub turn: &'static str,
    pub turn_back: &'static str,
}

impl ColorPalette {
    /// Create a palette with actual ANSI color codes.
    #[must_use]
    pub const fn colored() -> Self {
        Self {
            reset: colors::RESET,
            tag_start: colors::TAG_START,
            white_bold: colors::WHITE_BOLD,
            gray: colors::GRAY,
            straight: colors::GREEN,
            turn: colors::CYAN,
            turn_back: colors::ORANGE,
        }
    }

    /// Create a palette with no colors (empty strings).
    #[must_use]
    pub const fn plain() -> Self {
        Self {
            reset: "",
            tag_start: "",
            white_bold: "",
            gray: "",
            straight: "",
            turn: "",
            turn_back: "",
        }
    }

    /// Create a palette based on terminal capabilities.
    ///
    /// Returns `colored()` if the terminal supports ANSI colors,
    /// otherwise returns `plain()`.
    #[must_use]
    pub fn detect() -> Self {
        if supports_color() {
            Self::colored()
        } else {
            Self::plain()
        }
    }

    /// Color used for an instruction label.
    #[must_use]
    pub const fn instruction(&self, instruction: Instruction) -> &'static str {
        match instruction {
            Instruction::Start => self.tag_start,
            Instruction::Straight => self.straight,
            Instruction::TurnLeft | Instruction::TurnRight => self.turn,
            Instruction::TurnBack => self.turn_back,
        }
    }
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self::detect()
    }
}

/// Check if the terminal supports ANSI color codes.
///
/// This function respects:
/// - The `NO_COLOR` environment variable (https://no-color.org/)
/// - The `TERM=dumb` convention for non-capable terminals
#[must_use]
pub fn supports_color() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    if let Ok(term) = std::env::var("TERM") {
        if term.eq_ignore_ascii_case("dumb") {
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colored_palette_has_codes() {
        let p = ColorPalette::colored();
        assert!(!p.reset.is_empty());
        assert!(!p.tag_start.is_empty());
        assert!(!p.turn.is_empty());
    }

    #[test]
    fn plain_palette_is_empty() {
        let p = ColorPalette::plain();
        for instruction in [
            Instruction::Start,
            Instruction::Straight,
            Instruction::TurnLeft,
            Instruction::TurnRight,
            Instruction::TurnBack,
        ] {
            assert!(p.instruction(instruction).is_empty());
        }
        assert!(p.reset.is_empty());
    }

    #[test]
    fn turns_share_a_color_and_turn_back_stands_out() {
        let p = ColorPalette::colored();
        assert_eq!(
            p.instruction(Instruction::TurnLeft),
            p.instruction(Instruction::TurnRight)
        );
        assert_ne!(
            p.instruction(Instruction::TurnBack),
            p.instruction(Instruction::TurnRight)
        );
        assert_eq!(p.instruction(Instruction::Start), colors::TAG_START);
    }

    // Environment variables are process-global, so tests touching them are
    // serialized through this mutex.
    use std::sync::Mutex;

    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    mod supports_color_tests {
        use super::*;
        use std::env;

        /// Run `f` with temporary environment variable changes.
        fn with_env_vars<F, R>(vars: &[(&str, Option<&str>)], f: F) -> R
        where
            F: FnOnce() -> R,
        {
            let _guard = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());

            let saved: Vec<_> = vars.iter().map(|(k, _)| (*k, env::var_os(k))).collect();

            for (key, value) in vars {
                match value {
                    Some(v) => env::set_var(key, v),
                    None => env::remove_var(key),
                }
            }

            let result = f();

            for (key, value) in saved {
                match value {
                    Some(v) => env::set_var(key, v),
                    None => env::remove_var(key),
                }
            }

            result
        }

        #[test]
        fn no_color_disables_colors() {
            with_env_vars(&[("NO_COLOR", Some("1")), ("TERM", None)], || {
                assert!(!supports_color());
                assert_eq!(ColorPalette::detect(), ColorPalette::plain());
            });
        }

        #[test]
        fn dumb_terminal_disables_colors() {
            with_env_vars(&[("NO_COLOR", None), ("TERM", Some("DUMB"))], || {
                assert!(!supports_color());
            });
        }

        #[test]
        fn regular_terminal_supports_colors() {
            with_env_vars(
                &[("NO_COLOR", None), ("TERM", Some("xterm-256color"))],
                || {
                    assert!(supports_color());
                    assert_eq!(ColorPalette::detect(), ColorPalette::colored());
                },
            );
        }
    }
}
