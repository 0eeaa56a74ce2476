use eframe::egui::Color32;
use egui_plot::{MarkerShape, PlotPoints, PlotUi, Points};

use crate::config::plot::PLOT_CONFIG;
use crate::domain::{CleanedPair, ScatterSeries};
use crate::ui::date_axis::{DateAxis, series_points};

pub(crate) struct LayerContext<'a> {
    pub scatter: &'a ScatterSeries,
    pub axis: &'a DateAxis,
}

pub(crate) trait PlotLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext);
}

/// Which of the three price series a layer draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceKind {
    Bid,
    Ask,
    LastPrice,
}

impl PriceKind {
    pub const ALL: [Self; 3] = [Self::Bid, Self::Ask, Self::LastPrice];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Bid => PLOT_CONFIG.bid_label,
            Self::Ask => PLOT_CONFIG.ask_label,
            Self::LastPrice => PLOT_CONFIG.last_price_label,
        }
    }

    pub fn color(&self) -> Color32 {
        match self {
            Self::Bid => PLOT_CONFIG.bid_color,
            Self::Ask => PLOT_CONFIG.ask_color,
            Self::LastPrice => PLOT_CONFIG.last_price_color,
        }
    }

    pub fn series<'a>(&self, scatter: &'a ScatterSeries) -> &'a CleanedPair<String> {
        match self {
            Self::Bid => &scatter.bid,
            Self::Ask => &scatter.ask,
            Self::LastPrice => &scatter.last_price,
        }
    }
}

pub(crate) struct PriceScatterLayer {
    pub kind: PriceKind,
}

impl PlotLayer for PriceScatterLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext) {
        let points = series_points(self.kind.series(ctx.scatter), ctx.axis);

        // An empty series still gets its legend entry
        plot_ui.points(
            Points::new(self.kind.label(), PlotPoints::new(points))
                .color(self.kind.color())
                .shape(MarkerShape::Circle)
                .filled(true)
                .radius(PLOT_CONFIG.marker_radius),
        );
    }
}
