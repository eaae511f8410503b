//! Theme system for the plotter.
//!
//! Four visual roles need distinct treatments: axis/origin, the primary
//! curve, the derivative curve, and the header line (reverse + bold).

use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};

/// Theme configuration, colors as hex strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Theme {
    /// Axis, tick, and origin color.
    #[serde(default = "default_axis")]
    pub axis: String,

    /// Primary function curve color.
    #[serde(default = "default_curve")]
    pub curve: String,

    /// Derivative curve color.
    #[serde(default = "default_derivative")]
    pub derivative: String,

    /// Header line color (rendered reverse + bold).
    #[serde(default = "default_header")]
    pub header: String,
}

fn default_axis() -> String {
    "#c0caf5".to_string()
}
fn default_curve() -> String {
    "#7dcfff".to_string()
}
fn default_derivative() -> String {
    "#f7768e".to_string()
}
fn default_header() -> String {
    "#c0caf5".to_string()
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            axis: default_axis(),
            curve: default_curve(),
            derivative: default_derivative(),
            header: default_header(),
        }
    }
}

impl Theme {
    /// Creates a new default theme.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Style for axis lines, ticks, and the origin marker.
    #[must_use]
    pub fn axis_style(&self) -> Style {
        Style::default().fg(parse_color(&self.axis))
    }

    /// Style for the primary function curve.
    #[must_use]
    pub fn curve_style(&self) -> Style {
        Style::default().fg(parse_color(&self.curve))
    }

    /// Style for the derivative curve.
    #[must_use]
    pub fn derivative_style(&self) -> Style {
        Style::default().fg(parse_color(&self.derivative))
    }

    /// Style for the expression header: reverse video, bold.
    #[must_use]
    pub fn header_style(&self) -> Style {
        Style::default()
            .fg(parse_color(&self.header))
            .add_modifier(Modifier::REVERSED | Modifier::BOLD)
    }
}

/// Parses a hex color string to a ratatui Color.
fn parse_color(hex: &str) -> Color {
    let hex = hex.trim_start_matches('#');

    if hex.len() != 6 {
        return Color::White;
    }

    let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(255);
    let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(255);
    let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(255);

    Color::Rgb(r, g, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_color() {
        assert_eq!(parse_color("#FF0000"), Color::Rgb(255, 0, 0));
        assert_eq!(parse_color("#00FF00"), Color::Rgb(0, 255, 0));
        assert_eq!(parse_color("#0000FF"), Color::Rgb(0, 0, 255));
    }

    #[test]
    fn test_parse_color_invalid_falls_back_to_white() {
        assert_eq!(parse_color("#FFF"), Color::White);
        assert_eq!(parse_color("not-a-color"), Color::White);
    }

    #[test]
    fn test_theme_styles_are_distinct() {
        let theme = Theme::new();
        assert_ne!(theme.curve_style(), theme.derivative_style());
    }

    #[test]
    fn test_header_style_is_reverse_bold() {
        let theme = Theme::new();
        let style = theme.header_style();
        assert!(style.add_modifier.contains(Modifier::REVERSED));
        assert!(style.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn test_theme_deserializes_partial() {
        let theme: Theme = serde_yaml_ng::from_str("curve: \"#00FF00\"").expect("valid yaml");
        assert_eq!(theme.curve, "#00FF00");
        assert_eq!(theme.axis, default_axis());
    }
}
