use color_eyre::eyre::Result;
use tracing_error::ErrorLayer;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use super::constants::{DEFAULT_LOG_FILTER, LOG_FILTER};

/// Installs the global subscriber. Log output goes to stderr so that stdout
/// only carries the roster itself.
pub fn init_tracing() -> Result<()> {
    let fmt_layer = fmt::layer().compact().with_writer(std::io::stderr);
    let (filter_layer, rejected) = build_filter(LOG_FILTER.as_str());

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .with(ErrorLayer::default())
        .try_init()?;

    if let Some(rejected) = rejected {
        tracing::warn!(
            "Ignoring invalid log filter {:?}, using {:?}",
            rejected,
            DEFAULT_LOG_FILTER
        );
    }

    Ok(())
}

/// Parses `directives`, falling back to the default filter when they are
/// invalid. The rejected directives are returned alongside the filter.
fn build_filter(directives: &str) -> (EnvFilter, Option<String>) {
    match EnvFilter::try_new(directives) {
        Ok(filter) => (filter, None),
        Err(_) => (
            EnvFilter::new(DEFAULT_LOG_FILTER),
            Some(directives.to_owned()),
        ),
    }
}

/// Runs `f` under a scoped subscriber and returns everything it logged.
#[cfg(test)]
pub(crate) fn capture_logs(f: impl FnOnce()) -> String {
    use std::{
        io,
        sync::{Arc, Mutex},
    };

    #[derive(Clone, Default)]
    struct LogBuffer(Arc<Mutex<Vec<u8>>>);

    impl io::Write for LogBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0
                .lock()
                .expect("Log buffer lock poisoned")
                .extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    let buffer = LogBuffer::default();
    let writer = buffer.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_max_level(tracing::Level::TRACE)
        .with_ansi(false)
        .finish();

    tracing::subscriber::with_default(subscriber, f);

    let bytes = buffer.0.lock().expect("Log buffer lock poisoned").clone();
    String::from_utf8(bytes).expect("Logs should be UTF-8")
}
