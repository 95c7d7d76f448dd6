use log::LevelFilter;

pub fn build_logger() -> env_logger::Builder {
    let mut builder = env_logger::Builder::new();

    // Quiet unless RUST_LOG says otherwise; stdout is reserved for the listing.
    if std::env::var_os("RUST_LOG").is_none() {
        builder.filter_level(LevelFilter::Warn);
    }

    builder.parse_env("RUST_LOG");

    builder
}
