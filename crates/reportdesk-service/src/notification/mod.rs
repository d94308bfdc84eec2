//! Notification fanout and read-state management.

pub mod fanout;
pub mod service;

pub use fanout::NotificationFanout;
pub use service::NotificationService;
