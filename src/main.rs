use anyhow::{Context, Result, anyhow};
use clap::Parser;
use eframe::NativeOptions;

use bond_scatter::config::plot::PLOT_CONFIG;
use bond_scatter::utils::{init_logger, install_panic_hook};
use bond_scatter::{Cli, load_scatter, run_app};

fn main() -> Result<()> {
    install_panic_hook();
    init_logger(env!("CARGO_CRATE_NAME"));

    let args = Cli::parse();
    let scatter = load_scatter(&args.path, args.sort_order)
        .with_context(|| format!("could not build price series from {}", args.path.display()))?;

    let source_name = args
        .path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| args.path.display().to_string());

    let options = NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_title(PLOT_CONFIG.window_title),
        ..Default::default()
    };

    log::info!("Opening plot window for {}", source_name);
    // Blocks until the window is closed
    eframe::run_native(
        PLOT_CONFIG.window_title,
        options,
        Box::new(move |cc| Ok(Box::new(run_app(cc, source_name, scatter)))),
    )
    .map_err(|err| anyhow!("plot window failed: {err}"))
}
