//! HTTP protocol layer module
//!
//! Content typing and response building, decoupled from path resolution.

pub mod mime;
pub mod response;

// Re-export commonly used items
pub use mime::content_type_for;
pub use response::{
    build_error_response, build_file_response, build_not_found_response,
    build_read_error_response,
};
