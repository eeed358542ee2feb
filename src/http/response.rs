//! HTTP response building module
//!
//! One builder per outcome of a file request.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::header::{CONTENT_LENGTH, CONTENT_TYPE, SERVER};
use hyper::{Response, StatusCode};

use crate::error::ServeError;

const TEXT_PLAIN: &str = "text/plain";

/// Build 200 response carrying the file bytes
pub fn build_file_response(
    data: Bytes,
    content_type: &str,
    server_name: &str,
) -> Response<Full<Bytes>> {
    let content_length = data.len();
    Response::builder()
        .status(StatusCode::OK)
        .header(CONTENT_TYPE, content_type)
        .header(CONTENT_LENGTH, content_length)
        .header(SERVER, server_name)
        .body(Full::new(data))
        .unwrap_or_else(|e| {
            log_build_error("200", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build 404 response naming the resolved path
pub fn build_not_found_response(message: String, server_name: &str) -> Response<Full<Bytes>> {
    build_text_response(StatusCode::NOT_FOUND, message, server_name)
}

/// Build 500 response for a file that exists but could not be read
pub fn build_read_error_response(message: String, server_name: &str) -> Response<Full<Bytes>> {
    build_text_response(StatusCode::INTERNAL_SERVER_ERROR, message, server_name)
}

/// Map a request error onto its response
pub fn build_error_response(err: &ServeError, server_name: &str) -> Response<Full<Bytes>> {
    match err {
        ServeError::NotFound { .. } => build_not_found_response(err.to_string(), server_name),
        ServeError::ReadFailure { .. } => build_read_error_response(err.to_string(), server_name),
    }
}

fn build_text_response(
    status: StatusCode,
    message: String,
    server_name: &str,
) -> Response<Full<Bytes>> {
    let fallback = message.clone();
    Response::builder()
        .status(status)
        .header(CONTENT_TYPE, TEXT_PLAIN)
        .header(SERVER, server_name)
        .body(Full::new(Bytes::from(message)))
        .unwrap_or_else(|e| {
            log_build_error(status.as_str(), &e);
            let mut resp = Response::new(Full::new(Bytes::from(fallback)));
            *resp.status_mut() = status;
            resp
        })
}

/// Log response build error
fn log_build_error(status: &str, error: &hyper::http::Error) {
    crate::logger::log_error(&format!("Failed to build {status} response: {error}"));
}
