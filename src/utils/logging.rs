use std::panic;

/// Dependencies log at `Warn` and this crate at `Info` in debug builds; both at `Error` in release.
/// `bin_crate` is the calling binary's `CARGO_CRATE_NAME`, so its own log lines get the crate level too.
pub fn init_logger(bin_crate: &str) {
    let (global_level, my_code_level) = if cfg!(debug_assertions) {
        (log::LevelFilter::Warn, log::LevelFilter::Info)
    } else {
        (log::LevelFilter::Error, log::LevelFilter::Error)
    };

    let mut builder = env_logger::Builder::new();

    builder
        .filter(None, global_level)
        .filter(Some("bond_scatter"), my_code_level)
        .filter(Some(bin_crate), my_code_level)
        .init();
}

pub fn install_panic_hook() {
    panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::force_capture();
        log::error!("CRITICAL PANIC:\n{}\nStack Trace:\n{}", info, backtrace);
    }));
}
