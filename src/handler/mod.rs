//! Request handler module
//!
//! Maps request paths onto the static root and serves what it finds there.

pub mod resolve;
pub mod router;
pub mod static_files;

// Re-export main entry point
pub use router::handle_request;
