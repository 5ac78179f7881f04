//! Native window for the scatter plot.
//!
//! | Sub-module | Responsibility |
//! | ---------- | -------------- |
//! | [`paint`]  | Painting a sampled scene frame, label hit areas and the hover tooltip |
//! | [`run`]    | [`run_scatter()`] entry point and icon loading |

mod paint;
mod run;

pub use run::run_scatter;

use eframe::egui;
use egui_phosphor::regular::{FILE_PNG, FILE_SVG, PALETTE};

use crate::chart::ScatterChart;
use crate::color_scheme::ColorScheme;
use crate::controllers::SelectionController;

/// Standalone application that implements [`eframe::App`].
///
/// Each frame it advances the scene clock, applies queued controller
/// requests, paints the chart and routes label clicks back into the chart.
pub struct ScatterApp {
    pub chart: ScatterChart,
    pub selection_ctrl: Option<SelectionController>,
    color_scheme_applied: bool,
}

impl ScatterApp {
    pub fn new(chart: ScatterChart) -> Self {
        Self {
            chart,
            selection_ctrl: None,
            color_scheme_applied: false,
        }
    }

    /// Wire an external controller; it immediately reports the current
    /// selection.
    pub fn with_controller(mut self, ctrl: SelectionController) -> Self {
        ctrl.attach(self.chart.state());
        self.selection_ctrl = Some(ctrl);
        self
    }

    fn toolbar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            if ui
                .button(format!("{FILE_SVG} Export SVG"))
                .on_hover_text("Save the chart as SVG")
                .clicked()
            {
                if let Some(path) = rfd::FileDialog::new()
                    .set_file_name("scatter.svg")
                    .add_filter("SVG", &["svg"])
                    .save_file()
                {
                    if let Err(e) = self.chart.export_svg(&path) {
                        tracing::error!(path = %path.display(), error = %e, "SVG export failed");
                    }
                }
            }
            if ui
                .button(format!("{FILE_PNG} Export PNG"))
                .on_hover_text("Save the chart as PNG")
                .clicked()
            {
                if let Some(path) = rfd::FileDialog::new()
                    .set_file_name("scatter.png")
                    .add_filter("PNG", &["png"])
                    .save_file()
                {
                    if let Err(e) = self.chart.export_png(&path) {
                        tracing::error!(path = %path.display(), error = %e, "PNG export failed");
                    }
                }
            }

            ui.separator();
            let current = self.chart.config().color_scheme;
            let mut selected = current;
            egui::ComboBox::from_label(PALETTE.to_string())
                .selected_text(selected.label())
                .show_ui(ui, |ui| {
                    for scheme in ColorScheme::all() {
                        ui.selectable_value(&mut selected, *scheme, scheme.label());
                    }
                });
            if selected != current {
                self.chart.config_mut().color_scheme = selected;
                selected.apply(ui.ctx());
            }
        });
    }
}

impl eframe::App for ScatterApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.color_scheme_applied {
            self.chart.config().color_scheme.apply(ctx);
            self.color_scheme_applied = true;
        }

        let now = ctx.input(|i| i.time);
        self.chart.set_clock(now);

        if let Some(ctrl) = &self.selection_ctrl {
            for e in self.chart.process_controller(ctrl) {
                tracing::error!(error = %e, "selection request rejected");
            }
        }

        egui::TopBottomPanel::top("switchplot_toolbar").show(ctx, |ui| {
            self.toolbar(ui);
        });

        let mut clicked = None;
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::both().show(ui, |ui| {
                clicked = paint::chart(ui, &self.chart, now);
            });
        });

        if let Some(key) = clicked {
            if let Err(e) = self.chart.activate(key, self.selection_ctrl.as_ref()) {
                tracing::error!(%key, error = %e, "selection failed");
            }
        }

        if self.chart.scene().borrow().is_animating(now) {
            ctx.request_repaint();
        }
    }
}
