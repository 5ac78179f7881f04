//! Static SVG/PNG snapshots of a [`SceneFrame`].
//!
//! The document mirrors the on-screen chart: a plot group translated by the
//! margins holding both axes, the markers with their short labels and the six
//! dimension labels carrying an `active` or `inactive` class.

use std::fmt::Write as _;
use std::path::Path;

use crate::color_scheme::{lerp_color, to_hex, Palette};
use crate::config::ScatterConfig;
use crate::data::attributes::AxisRole;
use crate::error::ExportError;

use super::graph::{ResolvedTick, SceneFrame};

/// Gap between a tick mark and its label.
const TICK_PADDING: f64 = 3.0;

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }
    out
}

fn write_axis(
    svg: &mut String,
    role: AxisRole,
    ticks: &[ResolvedTick],
    cfg: &ScatterConfig,
    palette: &Palette,
) {
    let vp = &cfg.viewport;
    let axes = &cfg.axes;
    let stroke = to_hex(palette.axis);
    let text_fill = to_hex(palette.tick_label);
    match role {
        AxisRole::X => {
            let _ = writeln!(
                svg,
                r#"<g class="x-axis" transform="translate(0,{})" font-size="{}" text-anchor="middle">"#,
                vp.plot_height(),
                axes.tick_font_size
            );
            let _ = writeln!(
                svg,
                r#"<line x1="0" y1="0" x2="{}" y2="0" stroke="{stroke}"/>"#,
                vp.plot_width()
            );
            for t in ticks {
                let _ = writeln!(
                    svg,
                    r#"<g class="tick" opacity="{:.3}"><line x1="{p:.2}" y1="0" x2="{p:.2}" y2="{}" stroke="{stroke}"/><text x="{p:.2}" y="{}" fill="{text_fill}">{}</text></g>"#,
                    t.opacity,
                    axes.tick_size,
                    axes.tick_size + TICK_PADDING + axes.tick_font_size as f64,
                    escape(&t.label),
                    p = t.position,
                );
            }
        }
        AxisRole::Y => {
            let _ = writeln!(
                svg,
                r#"<g class="y-axis" font-size="{}" text-anchor="end">"#,
                axes.tick_font_size
            );
            let _ = writeln!(
                svg,
                r#"<line x1="0" y1="0" x2="0" y2="{}" stroke="{stroke}"/>"#,
                vp.plot_height()
            );
            for t in ticks {
                let _ = writeln!(
                    svg,
                    r#"<g class="tick" opacity="{:.3}"><line x1="0" y1="{p:.2}" x2="{}" y2="{p:.2}" stroke="{stroke}"/><text x="{}" y="{p:.2}" dy="0.32em" fill="{text_fill}">{}</text></g>"#,
                    t.opacity,
                    -axes.tick_size,
                    -(axes.tick_size + TICK_PADDING),
                    escape(&t.label),
                    p = t.position,
                );
            }
        }
    }
    svg.push_str("</g>\n");
}

/// Serialize `frame` as a standalone SVG document sized to the viewport.
pub fn render_svg(frame: &SceneFrame, cfg: &ScatterConfig) -> String {
    let vp = &cfg.viewport;
    let palette = cfg.color_scheme.palette();
    let mut svg = String::new();

    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" font-family="sans-serif">"#,
        w = vp.width,
        h = vp.height
    );
    let _ = writeln!(
        svg,
        r#"<rect width="{}" height="{}" fill="{}"/>"#,
        vp.width,
        vp.height,
        to_hex(palette.background)
    );
    let _ = writeln!(
        svg,
        r#"<g transform="translate({},{})">"#,
        vp.margin.left, vp.margin.top
    );
    let _ = writeln!(
        svg,
        r#"<rect class="plot-area" width="{}" height="{}" fill="{}"/>"#,
        vp.plot_width(),
        vp.plot_height(),
        to_hex(palette.plot_background)
    );

    write_axis(&mut svg, AxisRole::X, &frame.x_ticks, cfg, &palette);
    write_axis(&mut svg, AxisRole::Y, &frame.y_ticks, cfg, &palette);

    svg.push_str("<g class=\"markers\">\n");
    for m in &frame.markers {
        let _ = writeln!(
            svg,
            r#"<circle class="stateCircle" cx="{:.2}" cy="{:.2}" r="{}" fill="{}" stroke="{}"/>"#,
            m.center.0,
            m.center.1,
            m.radius,
            to_hex(palette.marker_fill),
            to_hex(palette.marker_stroke)
        );
    }
    svg.push_str("</g>\n");

    let _ = writeln!(
        svg,
        r#"<g class="point-labels" font-size="{}" text-anchor="middle" fill="{}">"#,
        cfg.markers.label_font_size,
        to_hex(palette.marker_text)
    );
    for l in &frame.point_labels {
        let _ = writeln!(
            svg,
            r#"<text class="stateText" x="{:.2}" y="{:.2}">{}</text>"#,
            l.pos.0,
            l.pos.1,
            escape(&l.text)
        );
    }
    svg.push_str("</g>\n");

    for l in &frame.dimension_labels {
        let role = l.key.role();
        let size = match role {
            AxisRole::X => cfg.axes.x_label_font_size,
            AxisRole::Y => cfg.axes.y_label_font_size,
        };
        let color = lerp_color(palette.label_inactive, palette.label_active, l.emphasis as f32);
        let (cx, cy) = l.anchor.center;
        let rotate = match role {
            AxisRole::X => String::new(),
            AxisRole::Y => format!(
                r#" transform="rotate({:.1} {cx:.2} {cy:.2})""#,
                l.anchor.angle.to_degrees()
            ),
        };
        let _ = writeln!(
            svg,
            r#"<text class="{}" data-attribute="{}" x="{cx:.2}" y="{cy:.2}" dy="0.32em" font-size="{size}" text-anchor="middle" fill="{}"{rotate}>{}</text>"#,
            l.style.class(),
            l.key.column(),
            to_hex(color),
            escape(l.text)
        );
    }

    svg.push_str("</g>\n</svg>\n");
    svg
}

/// Write `frame` as an SVG file.
pub fn write_svg(
    path: impl AsRef<Path>,
    frame: &SceneFrame,
    cfg: &ScatterConfig,
) -> Result<(), ExportError> {
    let path = path.as_ref();
    std::fs::write(path, render_svg(frame, cfg))?;
    tracing::info!(path = %path.display(), "SVG written");
    Ok(())
}

/// Rasterize `frame` at the viewport size and write it as a PNG file.
pub fn write_png(
    path: impl AsRef<Path>,
    frame: &SceneFrame,
    cfg: &ScatterConfig,
) -> Result<(), ExportError> {
    let path = path.as_ref();
    let svg = render_svg(frame, cfg);

    let mut options = usvg::Options::default();
    options.fontdb_mut().load_system_fonts();
    let tree = usvg::Tree::from_data(svg.as_bytes(), &options)?;

    let size = tree.size().to_int_size();
    let mut pixmap = tiny_skia::Pixmap::new(size.width(), size.height()).ok_or_else(|| {
        ExportError::Raster {
            message: format!("cannot allocate {}x{} pixmap", size.width(), size.height()),
        }
    })?;
    resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());
    pixmap.save_png(path).map_err(|e| ExportError::Raster {
        message: e.to_string(),
    })?;
    tracing::info!(path = %path.display(), "PNG written");
    Ok(())
}
