//! Top-level entry point for running the scatter plot as a native window.

use eframe::egui;

use crate::chart::ScatterChart;
use crate::controllers::SelectionController;

use super::ScatterApp;

/// Window icon: three markers on a pair of axes.
const APP_ICON_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="64" height="64" viewBox="0 0 64 64">
<rect width="64" height="64" rx="10" fill="#ffffff"/>
<path d="M10 8 V54 H58" stroke="#333333" stroke-width="3" fill="none"/>
<circle cx="22" cy="40" r="6" fill="#89bdd3" stroke="#e0eef4"/>
<circle cx="34" cy="26" r="6" fill="#89bdd3" stroke="#e0eef4"/>
<circle cx="48" cy="18" r="6" fill="#89bdd3" stroke="#e0eef4"/>
</svg>"##;

/// Open a native window showing `chart` and block until it is closed.
///
/// When `controller` is given it is attached before the first frame, so
/// [`SelectionController::current`] is valid as soon as the window is up.
pub fn run_scatter(
    chart: ScatterChart,
    controller: Option<SelectionController>,
) -> eframe::Result<()> {
    let title = chart.config().title.clone();
    let vp = chart.config().viewport;

    let mut app = ScatterApp::new(chart);
    if let Some(ctrl) = controller {
        app = app.with_controller(ctrl);
    }

    let mut viewport = egui::ViewportBuilder::default()
        .with_title(title.clone())
        .with_inner_size(egui::vec2(vp.width as f32 + 32.0, vp.height as f32 + 64.0));
    if let Some(icon) = load_app_icon_svg() {
        viewport = viewport.with_icon(icon);
    }
    let opts = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        &title,
        opts,
        Box::new(|cc| {
            let mut fonts = egui::FontDefinitions::default();
            egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
            cc.egui_ctx.set_fonts(fonts);
            Ok(Box::new(app))
        }),
    )
}

/// Rasterize [`APP_ICON_SVG`]; `None` if it cannot be rendered.
fn load_app_icon_svg() -> Option<egui::IconData> {
    let opt = usvg::Options::default();
    let tree = usvg::Tree::from_data(APP_ICON_SVG.as_bytes(), &opt).ok()?;
    let size = tree.size().to_int_size();
    if size.width() == 0 || size.height() == 0 {
        return None;
    }
    let mut pixmap = tiny_skia::Pixmap::new(size.width(), size.height())?;
    let mut canvas = pixmap.as_mut();
    resvg::render(&tree, tiny_skia::Transform::default(), &mut canvas);
    let rgba = pixmap.take();
    Some(egui::IconData {
        rgba,
        width: size.width(),
        height: size.height(),
    })
}
