//! Notification entity and kind enum.

pub mod kind;
pub mod model;

pub use kind::NotificationKind;
pub use model::{NewNotification, Notification};
