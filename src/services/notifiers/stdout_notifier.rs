use std::io::{self, Write};

use crate::domain::{Notifier, NotifierError};

#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutNotifier;

impl StdoutNotifier {
    /// Writes `message` as a single line to `writer`.
    pub fn notify_to<W: Write>(
        &self,
        writer: &mut W,
        message: &str,
    ) -> Result<(), NotifierError> {
        writeln!(writer, "{message}")
            .and_then(|_| writer.flush())
            .map_err(NotifierError::DeliveryError)
    }
}

impl Notifier for StdoutNotifier {
    #[tracing::instrument(name = "Send notification to stdout", skip_all)]
    fn notify(&self, message: &str) -> Result<(), NotifierError> {
        self.notify_to(&mut io::stdout().lock(), message)
    }
}
