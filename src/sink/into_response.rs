//! axum integration: hand recorded envelopes and errors to the server.

use ::axum::body::Body;
use ::axum::response::{IntoResponse, Response};
use http::StatusCode;

use super::RecordedResponse;
use crate::codec;
use crate::envelope::ErrorInfo;
use crate::types::Error;

impl IntoResponse for RecordedResponse {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status).unwrap_or_else(|_| {
            tracing::warn!("invalid status {} recorded, answering 500", self.status);
            StatusCode::INTERNAL_SERVER_ERROR
        });

        let mut response = Response::new(Body::from(self.body));
        *response.status_mut() = status;
        *response.headers_mut() = self.headers;
        response
    }
}

/// Error envelope using the error's own code as status. Codes that are not
/// valid HTTP statuses are answered with 500.
impl IntoResponse for ErrorInfo {
    fn into_response(self) -> Response {
        let code = self
            .status()
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR.as_u16());

        let mut recorded = RecordedResponse::new();
        codec::write_error(&mut recorded, &self.message, code);
        recorded.into_response()
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::Remote(info) => info.into_response(),
            other => {
                ErrorInfo::new(other.status_code().into(), other.to_string()).into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::ResponseSink;

    async fn body_string(response: Response) -> String {
        let bytes = ::axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn recorded_response_keeps_status_headers_body() {
        let mut rec = RecordedResponse::new();
        codec::write_response(&mut rec, &serde_json::json!({"ok": true}), 201);

        let response = rec.into_response();
        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(
            response.headers().get("content-type").unwrap(),
            codec::CONTENT_TYPE
        );
        assert_eq!(body_string(response).await, "{\"data\":{\"ok\":true}}\n");
    }

    #[tokio::test]
    async fn invalid_recorded_status_becomes_500() {
        let mut rec = RecordedResponse::new();
        rec.set_status(0);
        assert_eq!(rec.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn error_info_into_response() {
        let response = ErrorInfo::new(404, "no such user").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            body_string(response).await,
            "{\"error\":{\"code\":404,\"message\":\"no such user\"}}\n"
        );
    }

    #[tokio::test]
    async fn decode_error_into_response_is_bad_request() {
        let err = crate::read_response::<u8, _>(&b"nope"[..]).unwrap_err();
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(body_string(response)
            .await
            .contains("failed to decode JSON response"));
    }
}
