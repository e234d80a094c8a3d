/// How much the binaries log. Each level maps to the most detailed
/// [`tracing::Level`] that is still printed.
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Silent,
    Normal,
    Verbose,
    Debug,
}

impl From<Verbosity> for tracing::Level {
    fn from(value: Verbosity) -> Self {
        match value {
            Verbosity::Silent => tracing::Level::ERROR,
            Verbosity::Normal => tracing::Level::INFO,
            Verbosity::Verbose => tracing::Level::DEBUG,
            Verbosity::Debug => tracing::Level::TRACE,
        }
    }
}

/// Install the compact stderr subscriber used by the binaries.
pub fn init_logging(verbosity: Verbosity, colour: bool) {
    let level: tracing::Level = verbosity.into();
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_ansi(colour)
        .with_line_number(true)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}
