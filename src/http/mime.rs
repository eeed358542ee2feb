//! MIME type detection module
//!
//! Returns the corresponding Content-Type based on file extension.

use std::path::Path;

pub const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

/// Get MIME Content-Type based on file extension (without the leading dot)
///
/// Matching ignores ASCII case, so `HTML` and `html` are the same entry.
///
/// # Examples
/// ```
/// use dist_server::http::mime::get_content_type;
/// assert_eq!(get_content_type(Some("html")), "text/html");
/// assert_eq!(get_content_type(Some("SVG")), "image/svg+xml");
/// assert_eq!(get_content_type(None), "application/octet-stream");
/// ```
pub fn get_content_type(extension: Option<&str>) -> &'static str {
    let Some(ext) = extension else {
        return DEFAULT_CONTENT_TYPE;
    };

    match ext.to_ascii_lowercase().as_str() {
        "html" => "text/html",
        "js" => "text/javascript",
        "css" => "text/css",
        "png" => "image/png",
        "jpg" => "image/jpeg",
        "gif" => "image/gif",
        "svg" => "image/svg+xml",
        "json" => "application/json",
        _ => DEFAULT_CONTENT_TYPE,
    }
}

/// Content-Type for a file path, keyed on the text after the last `.` of its final segment
pub fn content_type_for(path: &Path) -> &'static str {
    get_content_type(path.extension().and_then(|e| e.to_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table() {
        assert_eq!(get_content_type(Some("html")), "text/html");
        assert_eq!(get_content_type(Some("js")), "text/javascript");
        assert_eq!(get_content_type(Some("css")), "text/css");
        assert_eq!(get_content_type(Some("png")), "image/png");
        assert_eq!(get_content_type(Some("jpg")), "image/jpeg");
        assert_eq!(get_content_type(Some("gif")), "image/gif");
        assert_eq!(get_content_type(Some("svg")), "image/svg+xml");
        assert_eq!(get_content_type(Some("json")), "application/json");
    }

    #[test]
    fn test_unknown_extension() {
        assert_eq!(get_content_type(Some("xyz")), DEFAULT_CONTENT_TYPE);
        // Not in the table even though they are common
        assert_eq!(get_content_type(Some("jpeg")), DEFAULT_CONTENT_TYPE);
        assert_eq!(get_content_type(Some("htm")), DEFAULT_CONTENT_TYPE);
        assert_eq!(get_content_type(None), DEFAULT_CONTENT_TYPE);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(get_content_type(Some("HTML")), "text/html");
        assert_eq!(get_content_type(Some("Js")), "text/javascript");
    }

    #[test]
    fn test_content_type_for_path() {
        assert_eq!(content_type_for(Path::new("dist/index.html")), "text/html");
        assert_eq!(content_type_for(Path::new("dist/lib.min.js")), "text/javascript");
        assert_eq!(content_type_for(Path::new("dist/v1.2/LICENSE")), DEFAULT_CONTENT_TYPE);
        assert_eq!(content_type_for(Path::new("dist/.gitignore")), DEFAULT_CONTENT_TYPE);
    }
}
