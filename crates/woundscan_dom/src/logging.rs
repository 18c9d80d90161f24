//! Logger setup for browser and native builds.

use log::LevelFilter;

/// Install the global logger at the given level.
///
/// Routes to the browser console on wasm and to stderr natively. Calling it
/// twice is harmless: the second install is ignored.
pub fn init(level: LevelFilter) {
    #[cfg(target_arch = "wasm32")]
    {
        match level.to_level() {
            Some(level) => {
                if console_log::init_with_level(level).is_err() {
                    log::debug!("Logger already installed");
                }
            }
            None => log::set_max_level(LevelFilter::Off),
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        if env_logger::Builder::new()
            .filter_level(level)
            .try_init()
            .is_err()
        {
            log::debug!("Logger already installed");
        }
    }
}
