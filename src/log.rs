use log::LevelFilter;

/// Initialize logging for the CLI
///
/// Warnings and errors are shown by default, everything from debug up with
/// `debug_enabled`. `RUST_LOG` overrides both when set.
pub fn init_logger(debug_enabled: bool) {
    let level = if debug_enabled {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    let mut builder = env_logger::Builder::new();
    builder
        .filter(None, level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false);

    if let Ok(spec) = std::env::var("RUST_LOG") {
        builder.parse_filters(&spec);
    }

    // A second init (tests, embedding) keeps the first logger
    if builder.try_init().is_ok() {
        log::debug!("logger initialized at {level:?} level");
    }
}
