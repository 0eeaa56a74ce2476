use eframe::egui::{CentralPanel, Context, RichText, Visuals};
use eframe::{CreationContext, Frame};

use crate::config::plot::PLOT_CONFIG;
use crate::domain::ScatterSeries;
use crate::ui::date_axis::DateAxis;
use crate::ui::plot_view::show_scatter_plot;

/// Read-only viewer over one file's cleaned series.
pub struct ScatterApp {
    source_name: String,
    scatter: ScatterSeries,
    axis: DateAxis,
}

impl ScatterApp {
    pub fn new(cc: &CreationContext<'_>, source_name: String, scatter: ScatterSeries) -> Self {
        cc.egui_ctx.set_visuals(Visuals::dark());
        let axis = DateAxis::from_scatter(&scatter, PLOT_CONFIG.date_tick_stride);

        Self {
            source_name,
            scatter,
            axis,
        }
    }

    fn summary(&self) -> String {
        format!(
            "{}  |  {} dates  |  {}: {}  {}: {}  {}: {}",
            self.source_name,
            self.scatter.date_labels.len(),
            PLOT_CONFIG.bid_label,
            self.scatter.bid.len(),
            PLOT_CONFIG.ask_label,
            self.scatter.ask.len(),
            PLOT_CONFIG.last_price_label,
            self.scatter.last_price.len(),
        )
    }
}

impl eframe::App for ScatterApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        CentralPanel::default().show(ctx, |ui| {
            ui.label(RichText::new(self.summary()).small());
            show_scatter_plot(ui, &self.scatter, &self.axis);
        });
    }
}
