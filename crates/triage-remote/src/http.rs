//! Shared HTTP response helpers.

use triage_core::responses::ErrorBody;

use crate::error::RemoteError;

/// Check an HTTP response for a non-success status.
///
/// Returns the response unchanged on success. Otherwise yields
/// [`RemoteError::Api`] carrying the `error` field of a JSON error body, or
/// the raw body when it is not one.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, RemoteError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    let body = resp.text().await.unwrap_or_default();
    Err(RemoteError::Api {
        status: status.as_u16(),
        message: error_message(&body),
    })
}

fn error_message(body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body).map_or_else(|_| body.trim().to_string(), |b| b.error)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mock_response(status: u16, body: &str) -> reqwest::Response {
        reqwest::Response::from(
            ::http::Response::builder()
                .status(status)
                .body(body.to_string())
                .unwrap(),
        )
    }

    #[test]
    fn error_message_prefers_error_field() {
        assert_eq!(
            error_message(r#"{"error": "Email content is required"}"#),
            "Email content is required"
        );
    }

    #[test]
    fn error_message_falls_back_to_raw_body() {
        assert_eq!(error_message("  Bad Gateway\n"), "Bad Gateway");
    }

    #[tokio::test]
    async fn check_response_api_error() {
        let resp = mock_response(500, r#"{"error": "boom"}"#);
        let err = check_response(resp).await.unwrap_err();
        assert!(matches!(
            err,
            RemoteError::Api { status: 500, ref message } if message == "boom"
        ));
    }

    #[tokio::test]
    async fn check_response_success() {
        let resp = mock_response(200, "{}");
        assert!(check_response(resp).await.is_ok());
    }
}
