//! Business logic: formatting and delivery.

pub mod format;
pub mod notifications;
