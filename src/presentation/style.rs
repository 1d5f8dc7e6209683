// src/presentation/style.rs
//! ANSI styling for table output.

const RESET: &str = "\x1B[0m";
const BOLD: &str = "\x1B[1m";
const GREEN: &str = "\x1B[32m";
const YELLOW: &str = "\x1B[33m";
const CYAN: &str = "\x1B[36m";

/// Escape sequences to wrap text in; every field is empty when colour is off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub reset: &'static str,
    pub bold: &'static str,
    pub success: &'static str,
    pub highlight: &'static str,
    pub info: &'static str,
}

impl Palette {
    pub const PLAIN: Self = Self { reset: "", bold: "", success: "", highlight: "", info: "" };
    pub const ANSI: Self =
        Self { reset: RESET, bold: BOLD, success: GREEN, highlight: YELLOW, info: CYAN };

    pub const fn new(enabled: bool) -> Self {
        if enabled { Self::ANSI } else { Self::PLAIN }
    }

    pub fn paint(&self, style: &str, text: &str) -> String {
        if style.is_empty() { text.to_string() } else { format!("{style}{text}{}", self.reset) }
    }
}
