pub mod notifiers;
pub mod roster;
