//! Announcement service.

pub mod service;

pub use service::AnnouncementService;
