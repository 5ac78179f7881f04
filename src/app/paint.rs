//! Painting a [`SceneFrame`] with the egui painter.

use egui::{
    epaint::TextShape, Align2, Color32, CursorIcon, FontId, Id, LayerId, Order, Pos2, Rect,
    Painter, Sense, Stroke, Ui, Vec2,
};

use crate::chart::ScatterChart;
use crate::color_scheme::{lerp_color, Palette};
use crate::config::ScatterConfig;
use crate::data::attributes::{AttributeKey, AxisRole};
use crate::scene::{ResolvedLabel, SceneFrame};

const TICK_PADDING: f32 = 3.0;
const TOOLTIP_PADDING: f32 = 6.0;

/// Maps plot coordinates (f64, origin at the plot's top-left) to screen.
#[derive(Clone, Copy)]
struct PlotTransform {
    origin: Pos2,
}

impl PlotTransform {
    fn to_screen(self, (x, y): (f64, f64)) -> Pos2 {
        self.origin + Vec2::new(x as f32, y as f32)
    }

    fn to_plot(self, p: Pos2) -> (f64, f64) {
        let d = p - self.origin;
        (d.x as f64, d.y as f64)
    }
}

fn with_opacity(c: Color32, opacity: f64) -> Color32 {
    c.gamma_multiply(opacity.clamp(0.0, 1.0) as f32)
}

/// Paint the whole chart. Returns the dimension label clicked this frame.
pub(super) fn chart(ui: &mut Ui, chart: &ScatterChart, now: f64) -> Option<AttributeKey> {
    let cfg = chart.config();
    let vp = &cfg.viewport;
    let palette = cfg.color_scheme.palette();
    let frame = chart.frame();

    let (response, painter) = ui.allocate_painter(
        Vec2::new(vp.width as f32, vp.height as f32),
        Sense::hover(),
    );
    let canvas = response.rect;
    let xf = PlotTransform {
        origin: canvas.min + Vec2::new(vp.margin.left as f32, vp.margin.top as f32),
    };

    painter.rect_filled(canvas, 0.0, palette.background);
    let plot_rect = Rect::from_min_size(
        xf.origin,
        Vec2::new(vp.plot_width() as f32, vp.plot_height() as f32),
    );
    painter.rect_filled(plot_rect, 0.0, palette.plot_background);

    axes(&painter, &frame, cfg, &palette, xf);

    let stroke = Stroke::new(1.0, palette.marker_stroke);
    for m in &frame.markers {
        painter.circle(xf.to_screen(m.center), m.radius as f32, palette.marker_fill, stroke);
    }
    let label_font = FontId::proportional(cfg.markers.label_font_size);
    for l in &frame.point_labels {
        // Labels are positioned by their baseline.
        painter.text(
            xf.to_screen(l.pos),
            Align2::CENTER_BOTTOM,
            &l.text,
            label_font.clone(),
            palette.marker_text,
        );
    }

    let mut clicked = None;
    for label in &frame.dimension_labels {
        if dimension_label(ui, &painter, label, cfg, &palette, xf) {
            clicked = Some(label.key);
        }
    }

    if let Some(pointer) = response.hover_pos() {
        let scene = chart.scene().borrow();
        if let Some(i) = scene.hit_marker(xf.to_plot(pointer), now) {
            if let (Some(content), Some(marker)) = (scene.tooltip(i), frame.markers.get(i)) {
                tooltip(ui.ctx(), &content.to_text(), marker.center, marker.radius, cfg, &palette, xf);
            }
        }
    }

    clicked
}

fn axes(
    painter: &Painter,
    frame: &SceneFrame,
    cfg: &ScatterConfig,
    palette: &Palette,
    xf: PlotTransform,
) {
    let vp = &cfg.viewport;
    let tick_size = cfg.axes.tick_size as f32;
    let font = FontId::proportional(cfg.axes.tick_font_size);
    let axis_stroke = Stroke::new(1.0, palette.axis);
    let (w, h) = (vp.plot_width(), vp.plot_height());

    painter.line_segment([xf.to_screen((0.0, h)), xf.to_screen((w, h))], axis_stroke);
    for t in frame.ticks(AxisRole::X) {
        let base = xf.to_screen((t.position, h));
        let color = with_opacity(palette.axis, t.opacity);
        painter.line_segment([base, base + Vec2::new(0.0, tick_size)], Stroke::new(1.0, color));
        painter.text(
            base + Vec2::new(0.0, tick_size + TICK_PADDING),
            Align2::CENTER_TOP,
            &t.label,
            font.clone(),
            with_opacity(palette.tick_label, t.opacity),
        );
    }

    painter.line_segment([xf.to_screen((0.0, 0.0)), xf.to_screen((0.0, h))], axis_stroke);
    for t in frame.ticks(AxisRole::Y) {
        let base = xf.to_screen((0.0, t.position));
        let color = with_opacity(palette.axis, t.opacity);
        painter.line_segment([base, base - Vec2::new(tick_size, 0.0)], Stroke::new(1.0, color));
        painter.text(
            base - Vec2::new(tick_size + TICK_PADDING, 0.0),
            Align2::RIGHT_CENTER,
            &t.label,
            font.clone(),
            with_opacity(palette.tick_label, t.opacity),
        );
    }
}

/// Paint one clickable dimension label; true when it was clicked.
fn dimension_label(
    ui: &Ui,
    painter: &Painter,
    label: &ResolvedLabel,
    cfg: &ScatterConfig,
    palette: &Palette,
    xf: PlotTransform,
) -> bool {
    let role = label.key.role();
    let size = match role {
        AxisRole::X => cfg.axes.x_label_font_size,
        AxisRole::Y => cfg.axes.y_label_font_size,
    };
    let center = xf.to_screen(label.anchor.center);

    let galley = painter.layout_no_wrap(
        label.text.to_string(),
        FontId::proportional(size),
        Color32::PLACEHOLDER,
    );
    let text = galley.size();
    let hit = match role {
        AxisRole::X => Rect::from_center_size(center, text),
        AxisRole::Y => Rect::from_center_size(center, Vec2::new(text.y, text.x)),
    };
    let response = ui
        .interact(hit, Id::new(("switchplot_dimension_label", label.key.column())), Sense::click())
        .on_hover_cursor(CursorIcon::PointingHand);

    let mut color = lerp_color(palette.label_inactive, palette.label_active, label.emphasis as f32);
    if response.hovered() && !label.style.is_active() {
        color = palette.label_hover;
    }
    match role {
        AxisRole::X => {
            painter.galley(center - text / 2.0, galley, color);
        }
        AxisRole::Y => {
            // Rotation pivots on the galley's top-left corner.
            let pos = center + Vec2::new(-text.y / 2.0, text.x / 2.0);
            painter.add(TextShape::new(pos, galley, color).with_angle(label.anchor.angle));
        }
    }

    response.clicked()
}

/// Tooltip box whose bottom centre sits on the marker's top edge, shifted by
/// the configured `[dy, dx]` offset.
fn tooltip(
    ctx: &egui::Context,
    text: &str,
    center: (f64, f64),
    radius: f64,
    cfg: &ScatterConfig,
    palette: &Palette,
    xf: PlotTransform,
) {
    let [dy, dx] = cfg.tooltip.offset;
    let painter = ctx.layer_painter(LayerId::new(Order::Tooltip, Id::new("switchplot_tooltip")));
    let galley = painter.layout_no_wrap(text.to_string(), FontId::proportional(12.0), palette.tooltip_text);
    let size = galley.size() + Vec2::splat(TOOLTIP_PADDING * 2.0);
    let anchor = xf.to_screen((center.0 + dx, center.1 - radius + dy));
    let rect = Rect::from_min_size(anchor - Vec2::new(size.x / 2.0, size.y), size);
    painter.rect_filled(rect, 4.0, palette.tooltip_background);
    painter.galley(rect.min + Vec2::splat(TOOLTIP_PADDING), galley, palette.tooltip_text);
}
