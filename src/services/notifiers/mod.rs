mod recording_notifier;
mod stdout_notifier;

pub use recording_notifier::*;
pub use stdout_notifier::*;
