mod error;
mod member;
mod notifier;

pub use error::*;
pub use member::*;
pub use notifier::*;
