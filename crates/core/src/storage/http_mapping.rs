//! Pure functions for mapping store HTTP responses to [`StoreError`]s.
//!
//! The I/O side hands over the status code, the `Content-Type` header and
//! the body text; everything that decides *which* error that is lives here.

use serde::Deserialize;

use super::StoreError;

/// Error body shape used by the store: `{"error": "..."}`.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// Returns true if the response declares an HTML body.
pub fn is_html_content_type(content_type: Option<&str>) -> bool {
    content_type.is_some_and(|ct| ct.to_ascii_lowercase().contains("text/html"))
}

/// Returns true if the response declares a JSON body, or declares nothing.
pub fn is_json_content_type(content_type: Option<&str>) -> bool {
    content_type.is_none_or(|ct| ct.to_ascii_lowercase().contains("json"))
}

/// Rejects responses whose body cannot be the JSON the store speaks.
///
/// HTML is rejected on every response (an error page from a proxy or a
/// wrong base URL). When `require_json` is set, any other non-JSON
/// declared type is rejected too.
pub fn check_content_type(
    status: u16,
    content_type: Option<&str>,
    require_json: bool,
) -> Result<(), StoreError> {
    if is_html_content_type(content_type) || (require_json && !is_json_content_type(content_type))
    {
        return Err(StoreError::BackendMisconfigured {
            status,
            content_type: content_type.unwrap_or("unknown").to_string(),
        });
    }
    Ok(())
}

/// Extracts the human-readable message from an error body, accepting either
/// `{"error": "..."}` or plain text.
pub fn error_message(body: &str) -> String {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(parsed) => parsed.error,
        Err(_) if body.trim().is_empty() => "Unknown error".to_string(),
        Err(_) => body.trim().to_string(),
    }
}

/// Maps a non-success status to a [`StoreError`].
///
/// - 400 -> `Validation`
/// - 404 -> `NotFound` (carrying `target`, the id that was addressed)
/// - 409 -> `Conflict` with the server's message
/// - anything else -> `Backend`
///
/// # Examples
///
/// ```
/// use gymdesk_core::storage::{status_to_store_error, StoreError};
///
/// let error = status_to_store_error(409, r#"{"error": "Member ID 007 already exists"}"#, "");
/// assert_eq!(error, StoreError::Conflict("Member ID 007 already exists".to_string()));
/// ```
pub fn status_to_store_error(status: u16, body: &str, target: &str) -> StoreError {
    let message = error_message(body);
    match status {
        400 => StoreError::Validation(message),
        404 => StoreError::NotFound(target.to_string()),
        409 => StoreError::Conflict(message),
        _ => StoreError::Backend { status, message },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conflict_carries_server_message() {
        let error = status_to_store_error(409, r#"{"error": "duplicate key: mId"}"#, "");
        assert_eq!(error, StoreError::Conflict("duplicate key: mId".to_string()));
    }

    #[test]
    fn test_bad_request_maps_to_validation() {
        let error = status_to_store_error(
            400,
            r#"{"error": "Invalid date format. Use YYYY-MM-DD"}"#,
            "",
        );
        assert_eq!(
            error,
            StoreError::Validation("Invalid date format. Use YYYY-MM-DD".to_string())
        );
    }

    #[test]
    fn test_not_found_carries_target() {
        let error = status_to_store_error(404, r#"{"error": "Member not found"}"#, "65f0c0ffee");
        assert_eq!(error, StoreError::NotFound("65f0c0ffee".to_string()));
    }

    #[test]
    fn test_other_status_maps_to_backend_with_plain_text() {
        let error = status_to_store_error(503, "Service Unavailable\n", "");
        assert_eq!(
            error,
            StoreError::Backend {
                status: 503,
                message: "Service Unavailable".to_string()
            }
        );
    }

    #[test]
    fn test_empty_body_message() {
        assert_eq!(error_message(""), "Unknown error");
    }

    #[test]
    fn test_html_is_always_rejected() {
        assert_eq!(
            check_content_type(200, Some("text/html; charset=utf-8"), false),
            Err(StoreError::BackendMisconfigured {
                status: 200,
                content_type: "text/html; charset=utf-8".to_string()
            })
        );
    }

    #[test]
    fn test_plain_text_rejected_only_when_json_required() {
        assert!(check_content_type(500, Some("text/plain"), false).is_ok());
        assert!(check_content_type(200, Some("text/plain"), true).is_err());
    }

    #[test]
    fn test_json_and_missing_content_type_accepted() {
        assert!(check_content_type(200, Some("application/json"), true).is_ok());
        assert!(check_content_type(200, None, true).is_ok());
    }
}
