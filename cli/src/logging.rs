//! Stderr logging, level picked from the command line.

use std::error::Error;

use tracing_subscriber::{
    EnvFilter,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    Normal,
    Verbose,
}

impl Verbosity {
    pub fn from_flags(verbose: bool, quiet: bool) -> Self {
        match (verbose, quiet) {
            (true, _) => Verbosity::Verbose,
            (false, true) => Verbosity::Quiet,
            (false, false) => Verbosity::Normal,
        }
    }

    pub fn filter_directive(self) -> &'static str {
        match self {
            Verbosity::Quiet => "warn",
            Verbosity::Normal => "info",
            Verbosity::Verbose => "info,pullsift_core=debug,pullsift_cli=debug",
        }
    }
}

pub fn init(verbosity: Verbosity) {
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_span_events(FmtSpan::NONE);

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(EnvFilter::new(verbosity.filter_directive()))
        .init();

    tracing::debug!(?verbosity, "Logging initialized");
}

/// Display messages of `err` and each of its sources, outermost first.
pub fn error_chain(err: &dyn Error) -> Vec<String> {
    let mut messages = vec![err.to_string()];
    let mut source = err.source();
    while let Some(cause) = source {
        messages.push(format!("caused by: {cause}"));
        source = cause.source();
    }
    messages
}

pub fn log_error_chain(err: &dyn Error) {
    for message in error_chain(err) {
        tracing::error!("{message}");
    }
}
