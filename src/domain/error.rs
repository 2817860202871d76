use color_eyre::eyre::Report;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RosterError {
    #[error("Failed to write roster output")]
    OutputError(#[source] std::io::Error),
}

impl PartialEq for RosterError {
    fn eq(&self, other: &Self) -> bool {
        matches!((self, other), (Self::OutputError(_), Self::OutputError(_)))
    }
}

#[derive(Debug, Error)]
pub enum NotifierError {
    #[error("Failed to deliver notification")]
    DeliveryError(#[source] std::io::Error),
    #[error("Unexpected error")]
    UnexpectedError(#[source] Report),
}

impl PartialEq for NotifierError {
    fn eq(&self, other: &Self) -> bool {
        matches!(
            (self, other),
            (Self::DeliveryError(_), Self::DeliveryError(_))
                | (Self::UnexpectedError(_), Self::UnexpectedError(_))
        )
    }
}
