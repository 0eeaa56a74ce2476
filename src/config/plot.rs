//! Plot visualization configuration

use eframe::egui::Color32;

pub struct PlotConfig {
    pub window_title: &'static str,
    pub plot_id: &'static str,

    // --- SERIES ---
    pub bid_color: Color32,
    pub ask_color: Color32,
    pub last_price_color: Color32,
    /// Legend names, in bid / ask / last order
    pub bid_label: &'static str,
    pub ask_label: &'static str,
    pub last_price_label: &'static str,
    /// Scatter marker radius (pixels)
    pub marker_radius: f32,

    // --- DATE AXIS ---
    /// Label every n-th position of the unfiltered date sequence
    pub date_tick_stride: usize,
    /// Rotation of the date labels, in degrees (90 = reads bottom to top)
    pub date_label_rotation_deg: f32,
    pub date_label_font_size: f32,
    pub date_label_color: Color32,
    /// Space reserved under the plot for the rotated date labels
    pub date_label_band_height: f32,
    pub date_label_padding: f32,

    pub y_axis_label: &'static str,
}

pub const PLOT_CONFIG: PlotConfig = PlotConfig {
    window_title: "Bond Scatter - CleanBid / CleanAsk / LastPrice",
    plot_id: "price_scatter",

    bid_color: Color32::RED,
    ask_color: Color32::GREEN,
    last_price_color: Color32::BLUE,
    bid_label: "CleanBid",
    ask_label: "CleanAsk",
    last_price_label: "LastPrice",
    marker_radius: 3.0,

    date_tick_stride: 5,
    date_label_rotation_deg: 90.0,
    date_label_font_size: 11.0,
    date_label_color: Color32::LIGHT_GRAY,
    date_label_band_height: 72.0,
    date_label_padding: 4.0,

    y_axis_label: "Price",
};
