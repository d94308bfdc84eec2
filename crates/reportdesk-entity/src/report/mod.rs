//! Report entity and status enum.

pub mod model;
pub mod status;

pub use model::{NewReport, Report};
pub use status::ReportStatus;
