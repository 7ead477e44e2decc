// API response utility functions module

use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};
use serde::Serialize;

/// Build JSON response
///
/// HEAD requests get the headers of the equivalent GET, including
/// Content-Length, with an empty body.
pub fn json_response<T: Serialize>(
    status: StatusCode,
    body: &T,
    is_head: bool,
) -> Response<Full<Bytes>> {
    let json = match serde_json::to_string(body) {
        Ok(j) => j,
        Err(e) => {
            logger::log_error(&format!("Failed to serialize response: {e}"));
            return Response::builder()
                .status(StatusCode::INTERNAL_SERVER_ERROR)
                .header("Content-Type", "application/json")
                .body(Full::new(Bytes::from(
                    r#"{"error":"Internal server error"}"#,
                )))
                .unwrap_or_else(|_| Response::new(Full::new(Bytes::from("Error"))));
        }
    };

    let content_length = json.len();
    let body = if is_head {
        Bytes::new()
    } else {
        Bytes::from(json)
    };

    Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .header("Content-Length", content_length)
        .body(Full::new(body))
        .unwrap_or_else(|e| {
            logger::log_error(&format!("Failed to build response: {e}"));
            Response::new(Full::new(Bytes::from("Error")))
        })
}

/// 404 Not Found response for unknown API endpoints
pub fn not_found(is_head: bool) -> Response<Full<Bytes>> {
    const BODY: &str = r#"{"error":"API endpoint not found"}"#;
    let body = if is_head {
        Bytes::new()
    } else {
        Bytes::from(BODY)
    };

    Response::builder()
        .status(StatusCode::NOT_FOUND)
        .header("Content-Type", "application/json")
        .header("Content-Length", BODY.len())
        .body(Full::new(body))
        .unwrap_or_else(|_| Response::new(Full::new(Bytes::from("Not Found"))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    #[tokio::test]
    async fn test_json_response_body() {
        let payload = serde_json::json!({"status": "ok"});
        let response = json_response(StatusCode::OK, &payload, false);
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()["Content-Type"], "application/json");
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&bytes[..], br#"{"status":"ok"}"#);
    }

    #[tokio::test]
    async fn test_json_response_head_is_empty() {
        let payload = serde_json::json!({"status": "ok"});
        let response = json_response(StatusCode::OK, &payload, true);
        assert_eq!(response.headers()["Content-Length"], "15");
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        assert!(bytes.is_empty());
    }

    #[tokio::test]
    async fn test_not_found_body() {
        let response = not_found(false);
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&bytes[..], br#"{"error":"API endpoint not found"}"#);
    }
}
