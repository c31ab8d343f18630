//! Subscriber construction

use crate::reload::{ReloadHandle, convert_level_to_filter};
use protogen_core::LogLevel;
use tracing::Subscriber;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{Registry, fmt, reload};

/// Build a subscriber that formats events to `writer`, filtered at `level`.
///
/// The returned handle changes the level of this subscriber only.
pub fn build_subscriber<W>(
    level: LogLevel,
    writer: W,
) -> (
    impl Subscriber + Send + Sync + 'static,
    reload::Handle<LevelFilter, Registry>,
)
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let (filter, handle) = reload::Layer::new(convert_level_to_filter(level));

    let subscriber = tracing_subscriber::registry().with(filter).with(
        fmt::layer()
            .with_writer(writer)
            .with_ansi(false)
            .with_target(false)
            .without_time(),
    );

    (subscriber, handle)
}

/// Install the stderr subscriber as the global default.
///
/// Returns `false` when a subscriber was already installed; in that case the
/// level of the one installed here earlier is updated instead.
pub fn init_logging(level: LogLevel) -> bool {
    let (subscriber, handle) = build_subscriber(level, std::io::stderr);

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        let _ = ReloadHandle::global().reload_level(level);
        return false;
    }

    ReloadHandle::global().set_handle(handle, level);
    true
}
