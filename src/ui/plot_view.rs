use eframe::egui::epaint::TextShape;
use eframe::egui::{FontId, Pos2, Ui};
use egui_plot::{GridMark, Legend, Plot, PlotTransform};

use crate::config::plot::PLOT_CONFIG;
use crate::domain::ScatterSeries;
use crate::ui::date_axis::{DateAxis, DateTick};
use crate::ui::plot_layers::{LayerContext, PlotLayer, PriceKind, PriceScatterLayer};

/// Draw the three price series against the categorical date axis.
///
/// egui_plot can't rotate axis labels, so the built-in x axis is hidden and
/// the date labels are painted under the plot frame instead.
pub fn show_scatter_plot(ui: &mut Ui, scatter: &ScatterSeries, axis: &DateAxis) {
    let plot_height = (ui.available_height() - PLOT_CONFIG.date_label_band_height).max(0.0);

    let ticks = axis.ticks();
    let tick_positions: Vec<f64> = ticks.iter().map(|t| t.position as f64).collect();
    let tick_step = axis.stride() as f64;
    let categories = axis.categories().to_vec();

    let response = Plot::new(PLOT_CONFIG.plot_id)
        .height(plot_height)
        .legend(Legend::default())
        .show_axes([false, true])
        .y_axis_label(PLOT_CONFIG.y_axis_label)
        .x_grid_spacer(move |_input| {
            tick_positions
                .iter()
                .map(|&value| GridMark { value, step_size: tick_step })
                .collect()
        })
        .label_formatter(move |name, value| {
            if name.is_empty() {
                return String::new();
            }
            let idx = value.x.round().max(0.0) as usize;
            let date = categories.get(idx).map_or("", String::as_str);
            format!("{name}\n{date}\n{:.4}", value.y)
        })
        .show(ui, |plot_ui| {
            let ctx = LayerContext { scatter, axis };
            for kind in PriceKind::ALL {
                PriceScatterLayer { kind }.render(plot_ui, &ctx);
            }
        });

    paint_date_labels(ui, &response.transform, &ticks);
}

fn paint_date_labels(ui: &Ui, transform: &PlotTransform, ticks: &[DateTick]) {
    let frame = *transform.frame();
    let painter = ui.painter();
    // Negative = counter-clockwise, so the text reads bottom to top
    let angle = -PLOT_CONFIG.date_label_rotation_deg.to_radians();
    let font = FontId::proportional(PLOT_CONFIG.date_label_font_size);

    for tick in ticks.iter().filter(|t| !t.label.is_empty()) {
        let x = transform.position_from_point_x(tick.position as f64);
        if x < frame.left() || x > frame.right() {
            continue;
        }

        let galley = painter.layout_no_wrap(
            tick.label.clone(),
            font.clone(),
            PLOT_CONFIG.date_label_color,
        );
        let size = galley.size();
        // Pivot is the galley's top-left corner; after rotation the text
        // spans upward from it and its line height extends to the right.
        let pivot = Pos2::new(
            x - size.y / 2.0,
            frame.bottom() + PLOT_CONFIG.date_label_padding + size.x,
        );
        painter.add(TextShape::new(pivot, galley, PLOT_CONFIG.date_label_color).with_angle(angle));
    }
}
