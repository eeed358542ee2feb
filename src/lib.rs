//! Static file server for a built front-end bundle.
//!
//! Request paths are mapped onto a root directory (`dist/` by default),
//! directories resolve to their index file, and content types come from a
//! fixed extension table.

pub mod config;
pub mod error;
pub mod flow;
pub mod handler;
pub mod http;
pub mod logger;
pub mod server;
