use super::NotifierError;

/// Destination for the messages a roster emits as members join.
pub trait Notifier {
    fn notify(&self, message: &str) -> Result<(), NotifierError>;
}
