use std::error::Error;
use tracing::Level;

pub mod domain;
pub mod services;
pub mod utils;

pub use services::roster::Roster;
use utils::constants::LOG_SEPARATOR_WIDTH;

/// Logs `e` followed by every error in its `source()` chain as one event.
pub fn log_error_chain(e: &(dyn Error + 'static), level: Level) {
    let separator = "-".repeat(LOG_SEPARATOR_WIDTH);
    let causes = std::iter::successors(e.source(), |&cause| cause.source())
        .map(|cause| format!("Caused by: {cause}"))
        .collect::<Vec<_>>();

    let report = if causes.is_empty() {
        format!("\n{separator}\n{e}\n{separator}")
    } else {
        format!("\n{separator}\n{e}\n{}\n{separator}", causes.join("\n"))
    };

    match level {
        Level::ERROR => tracing::error!("{}", report),
        Level::WARN => tracing::warn!("{}", report),
        Level::INFO => tracing::info!("{}", report),
        Level::DEBUG => tracing::debug!("{}", report),
        Level::TRACE => tracing::trace!("{}", report),
    }
}
