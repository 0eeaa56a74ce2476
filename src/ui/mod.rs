mod app;
mod date_axis;
mod plot_layers;
mod plot_view;

pub use app::ScatterApp;
pub use date_axis::{DateAxis, DateTick, series_points};
pub use plot_layers::PriceKind;
pub use plot_view::show_scatter_plot;
