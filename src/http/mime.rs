//! MIME type detection module
//!
//! Returns the corresponding Content-Type based on file extension.

/// Get MIME Content-Type based on file extension
///
/// The table deliberately covers only the asset types the front-end bundle
/// ships; everything else is served as `application/octet-stream`. Matching
/// is case-sensitive, so `Some("HTML")` falls through to the default.
pub fn get_content_type(extension: Option<&str>) -> &'static str {
    match extension {
        // Text
        Some("html") => "text/html",
        Some("css") => "text/css",

        // JavaScript/JSON
        Some("js") => "text/javascript",
        Some("json") => "application/json",

        // Images
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("png") => "image/png",

        // Default
        _ => "application/octet-stream",
    }
}
