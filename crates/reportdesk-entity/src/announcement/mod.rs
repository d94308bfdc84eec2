//! Announcement entity.

pub mod model;

pub use model::{Announcement, NewAnnouncement, MAX_TITLE_LENGTH};
