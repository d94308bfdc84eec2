//! User account service.

pub mod service;

pub use service::UserService;
