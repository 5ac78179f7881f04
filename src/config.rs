//! Configuration types for the scatter plot.
//!
//! Everything here is fixed once the chart is laid out: the canvas geometry
//! feeds the scale ranges, the transition timing is shared by every layer.
//! A [`ScatterConfig`] can be written to and read from YAML or JSON.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::color_scheme::ColorScheme;
use crate::data::attributes::{AttributeKey, AxisRole};
use crate::data::tooltip::TooltipFormat;
use crate::error::ConfigError;
use crate::render::transition::{Easing, Transition};

// ─────────────────────────────────────────────────────────────────────────────
// Viewport geometry
// ─────────────────────────────────────────────────────────────────────────────

/// Space between the canvas edge and the plot area, in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Default for Margins {
    fn default() -> Self {
        Self {
            top: 20.0,
            right: 40.0,
            bottom: 95.0,
            left: 75.0,
        }
    }
}

/// Canvas size and margins. The plot area is what remains inside the margins.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub margin: Margins,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 900.0,
            height: 500.0,
            margin: Margins::default(),
        }
    }
}

impl Viewport {
    pub fn plot_width(&self) -> f64 {
        self.width - self.margin.left - self.margin.right
    }

    pub fn plot_height(&self) -> f64 {
        self.height - self.margin.top - self.margin.bottom
    }

    /// Pixel range a scale maps onto. Y is inverted so larger values plot
    /// higher on screen.
    pub fn pixel_range(&self, role: AxisRole) -> (f64, f64) {
        match role {
            AxisRole::X => (0.0, self.plot_width()),
            AxisRole::Y => (self.plot_height(), 0.0),
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !(self.plot_width() > 0.0 && self.plot_height() > 0.0) {
            return Err(ConfigError::Invalid {
                message: format!(
                    "margins leave no plot area ({}x{})",
                    self.plot_width(),
                    self.plot_height()
                ),
            });
        }
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Sub-configs
// ─────────────────────────────────────────────────────────────────────────────

/// Timing shared by every layer of one selection change.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransitionSettings {
    pub duration_ms: u64,
    pub easing: Easing,
}

impl Default for TransitionSettings {
    fn default() -> Self {
        Self {
            duration_ms: Transition::DEFAULT_DURATION.as_millis() as u64,
            easing: Easing::CubicInOut,
        }
    }
}

impl TransitionSettings {
    pub fn transition(&self) -> Transition {
        Transition::new(Duration::from_millis(self.duration_ms), self.easing)
    }
}

/// Marker glyph geometry.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkerSettings {
    pub radius: f64,
    /// Added to the label's Y so the text sits centred in the circle.
    pub label_offset_y: f64,
    pub label_font_size: f32,
}

impl Default for MarkerSettings {
    fn default() -> Self {
        Self {
            radius: 13.0,
            label_offset_y: 3.0,
            label_font_size: 11.0,
        }
    }
}

/// Hover tooltip placement and content.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TooltipSettings {
    /// `[dy, dx]` offset from the marker centre, in pixels.
    pub offset: [f64; 2],
    pub format: TooltipFormat,
}

impl Default for TooltipSettings {
    fn default() -> Self {
        Self {
            offset: [5.0, 20.0],
            format: TooltipFormat::default(),
        }
    }
}

/// Axis tick generation and the dimension labels below/left of the plot.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AxisSettings {
    /// Approximate number of ticks per axis.
    pub tick_count: usize,
    pub tick_size: f64,
    pub tick_font_size: f32,
    pub x_label_font_size: f32,
    pub y_label_font_size: f32,
}

impl Default for AxisSettings {
    fn default() -> Self {
        Self {
            tick_count: 10,
            tick_size: 6.0,
            tick_font_size: 10.0,
            x_label_font_size: 12.0,
            y_label_font_size: 14.0,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// ScatterConfig
// ─────────────────────────────────────────────────────────────────────────────

/// Top-level configuration.
///
/// | Field          | Purpose |
/// |----------------|---------|
/// | `viewport`     | Canvas size and margins (scale ranges derive from it) |
/// | `transition`   | Duration and easing of every animated change |
/// | `markers`      | Marker radius and label offset |
/// | `tooltip`      | Tooltip offset and reference attributes |
/// | `axes`         | Tick count and label font sizes |
/// | `color_scheme` | Visual theme |
/// | `initial_x/y`  | Startup selection (defaults to the first eligible key) |
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScatterConfig {
    /// Native window title.
    pub title: String,
    pub viewport: Viewport,
    pub transition: TransitionSettings,
    pub markers: MarkerSettings,
    pub tooltip: TooltipSettings,
    pub axes: AxisSettings,
    pub color_scheme: ColorScheme,
    pub initial_x: Option<AttributeKey>,
    pub initial_y: Option<AttributeKey>,
}

impl Default for ScatterConfig {
    fn default() -> Self {
        Self {
            title: "Switchplot".to_string(),
            viewport: Viewport::default(),
            transition: TransitionSettings::default(),
            markers: MarkerSettings::default(),
            tooltip: TooltipSettings::default(),
            axes: AxisSettings::default(),
            color_scheme: ColorScheme::default(),
            initial_x: None,
            initial_y: None,
        }
    }
}

enum Format {
    Yaml,
    Json,
}

fn format_for(path: &Path) -> Result<Format, ConfigError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "yaml" | "yml" => Ok(Format::Yaml),
        "json" => Ok(Format::Json),
        _ => Err(ConfigError::UnsupportedFormat(ext)),
    }
}

impl ScatterConfig {
    /// Startup attribute for `role`.
    pub fn initial_attribute(&self, role: AxisRole) -> AttributeKey {
        let configured = match role {
            AxisRole::X => self.initial_x,
            AxisRole::Y => self.initial_y,
        };
        configured.unwrap_or_else(|| role.default_attribute())
    }

    /// Check values a file could get wrong.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.viewport.validate()?;
        for role in AxisRole::ALL {
            let key = self.initial_attribute(role);
            if !key.is_eligible_for(role) {
                return Err(ConfigError::Invalid {
                    message: format!("initial {role} attribute `{key}` belongs to the {} axis", key.role()),
                });
            }
        }
        if self.tooltip.format.reference_attributes.is_empty() {
            return Err(ConfigError::Invalid {
                message: "tooltip needs at least one reference attribute".to_string(),
            });
        }
        Ok(())
    }

    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        let cfg: Self = serde_yaml::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        let cfg: Self = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Load from a `.yaml`/`.yml` or `.json` file.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let format = format_for(path)?;
        let text = std::fs::read_to_string(path)?;
        let cfg = match format {
            Format::Yaml => Self::from_yaml_str(&text)?,
            Format::Json => Self::from_json_str(&text)?,
        };
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(cfg)
    }

    /// Save to a `.yaml`/`.yml` or `.json` file, creating parent directories.
    pub fn save_to_path(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let text = match format_for(path)? {
            Format::Yaml => serde_yaml::to_string(self)?,
            Format::Json => serde_json::to_string_pretty(self)?,
        };
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, text)?;
        Ok(())
    }
}
