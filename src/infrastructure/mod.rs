//! Infrastructure layer - Storage backends, services and auth implementations

pub mod auth;
pub mod logging;
pub mod movie;
pub mod storage;
pub mod user;
