//! Report lifecycle service.

pub mod service;

pub use service::ReportService;
