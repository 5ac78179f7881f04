//! Color scheme definitions for the scatter plot.
//!
//! A [`ColorScheme`] sets the egui visuals and provides the [`Palette`] used to
//! paint (and export) the chart.

use eframe::egui::{Color32, Context, Visuals};
use serde::{Deserialize, Serialize};

/// Visual theme for the plot UI.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColorScheme {
    /// Dark egui visuals.
    Dark,
    /// Light egui visuals; closest to the classic look of the chart.
    #[default]
    Light,
    /// ggplot2-inspired: light grey panel with muted blue markers.
    GgPlot,
}

/// Colors used by the chart itself.
#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
    pub background: Color32,
    pub plot_background: Color32,
    pub axis: Color32,
    pub tick_label: Color32,
    pub marker_fill: Color32,
    pub marker_stroke: Color32,
    pub marker_text: Color32,
    pub label_active: Color32,
    pub label_inactive: Color32,
    pub label_hover: Color32,
    pub tooltip_background: Color32,
    pub tooltip_text: Color32,
}

impl ColorScheme {
    pub fn all() -> &'static [ColorScheme] {
        &[ColorScheme::Dark, ColorScheme::Light, ColorScheme::GgPlot]
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            ColorScheme::Dark => "Dark",
            ColorScheme::Light => "Light",
            ColorScheme::GgPlot => "ggplot2",
        }
    }

    /// Apply this scheme's visuals to an egui context.
    pub fn apply(&self, ctx: &Context) {
        match self {
            ColorScheme::Dark => ctx.set_visuals(Visuals::dark()),
            ColorScheme::Light => ctx.set_visuals(Visuals::light()),
            ColorScheme::GgPlot => {
                let mut v = Visuals::light();
                v.panel_fill = Color32::from_rgb(235, 235, 235);
                v.window_fill = Color32::from_rgb(250, 250, 250);
                ctx.set_visuals(v);
            }
        }
    }

    pub fn palette(&self) -> Palette {
        match self {
            ColorScheme::Dark => Palette {
                background: Color32::from_rgb(27, 27, 27),
                plot_background: Color32::from_rgb(27, 27, 27),
                axis: Color32::from_gray(190),
                tick_label: Color32::from_gray(200),
                marker_fill: Color32::from_rgb(137, 189, 211),
                marker_stroke: Color32::from_rgb(224, 238, 244),
                marker_text: Color32::WHITE,
                label_active: Color32::WHITE,
                label_inactive: Color32::from_gray(110),
                label_hover: Color32::from_gray(230),
                tooltip_background: Color32::from_rgb(60, 60, 60),
                tooltip_text: Color32::WHITE,
            },
            ColorScheme::Light => Palette {
                background: Color32::WHITE,
                plot_background: Color32::WHITE,
                axis: Color32::BLACK,
                tick_label: Color32::BLACK,
                marker_fill: Color32::from_rgb(137, 189, 211),
                marker_stroke: Color32::from_rgb(224, 238, 244),
                marker_text: Color32::WHITE,
                label_active: Color32::BLACK,
                label_inactive: Color32::from_gray(170),
                label_hover: Color32::BLACK,
                tooltip_background: Color32::BLACK,
                tooltip_text: Color32::WHITE,
            },
            ColorScheme::GgPlot => Palette {
                background: Color32::WHITE,
                plot_background: Color32::from_rgb(235, 235, 235),
                axis: Color32::from_gray(77),
                tick_label: Color32::from_gray(77),
                marker_fill: Color32::from_rgb(0, 114, 178),
                marker_stroke: Color32::WHITE,
                marker_text: Color32::WHITE,
                label_active: Color32::from_gray(26),
                label_inactive: Color32::from_gray(150),
                label_hover: Color32::from_gray(26),
                tooltip_background: Color32::from_gray(50),
                tooltip_text: Color32::WHITE,
            },
        }
    }
}

/// `#rrggbb` form of a color (alpha dropped), for SVG attributes.
pub fn to_hex(c: Color32) -> String {
    format!("#{:02x}{:02x}{:02x}", c.r(), c.g(), c.b())
}

/// Linear blend from `a` (t = 0) to `b` (t = 1).
pub fn lerp_color(a: Color32, b: Color32, t: f32) -> Color32 {
    let t = t.clamp(0.0, 1.0);
    let mix = |x: u8, y: u8| (x as f32 + (y as f32 - x as f32) * t).round() as u8;
    Color32::from_rgba_unmultiplied(
        mix(a.r(), b.r()),
        mix(a.g(), b.g()),
        mix(a.b(), b.b()),
        mix(a.a(), b.a()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_drops_alpha() {
        assert_eq!(to_hex(Color32::from_rgb(137, 189, 211)), "#89bdd3");
    }

    #[test]
    fn lerp_hits_both_ends() {
        let a = Color32::from_gray(170);
        let b = Color32::BLACK;
        assert_eq!(lerp_color(a, b, 0.0), a);
        assert_eq!(lerp_color(a, b, 1.0), b);
        assert_eq!(lerp_color(a, b, 0.5), Color32::from_gray(85));
    }
}
