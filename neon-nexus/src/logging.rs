use log::LevelFilter;

/// Installs the global logger. `RUST_LOG` wins over the default `warn`
/// filter; `verbose` forces debug output for this crate.
pub fn init(verbose: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if verbose {
        builder.filter_module("neon_nexus_lib", LevelFilter::Debug);
    }
    // A second init (tests, embedding) keeps the first logger.
    let _ = builder.format_timestamp(None).try_init();
}
