mod logging;

pub use logging::{init_logger, install_panic_hook};
