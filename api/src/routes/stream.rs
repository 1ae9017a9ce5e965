use axum::body::Bytes;
use axum::extract::State;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::state::AppState;

const SESSION_ID_HEADER: &str = "x-session-id";

const LOGIN_REQUIRED_MESSAGE: &str = "Needs to login first by going to the login url.\n\
     Show the login url as clickable link if client supports it. Otherwise display the URL for users to copy and paste into a browser. \n\
     Ask users to come back and let you know once they are done with login in their browser";

pub fn router() -> Router<AppState> {
    Router::new().route("/mcp/stream", post(call_tool))
}

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct ToolCallRequest {
    pub tool_name: String,
}

/// Application-level "please log in" instruction. Returned with HTTP 400 but
/// not an error: it is the normal branch for a session that has not
/// completed the login flow yet.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct LoginRequiredResponse {
    pub status: &'static str,
    pub login_url: String,
    pub message: &'static str,
}

/// Invoke a tool for the calling session
///
/// Resolution order per request: session, allow-list, body, fixture. The
/// body is only parsed once the identity has passed the allow-list, and the
/// fixture store is only addressed for allowed identities.
#[utoipa::path(
    post,
    path = "/mcp/stream",
    request_body = ToolCallRequest,
    responses(
        (status = 200, description = "Fixture JSON recorded for (phone number, tool name), returned verbatim"),
        (status = 400, description = "No session for X-Session-ID — body carries login instructions", body = LoginRequiredResponse),
        (status = 403, description = "Phone number is not on the allow-list", body = finmock_core::error::ApiError),
        (status = 500, description = "Fixture missing or unreadable", body = finmock_core::error::ApiError)
    ),
    tag = "tools"
)]
pub async fn call_tool(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let session_id = headers
        .get(SESSION_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();

    let Some(phone_number) = state.sessions.resolve(session_id) else {
        tracing::info!(session_id, "session not found, returning login instructions");
        return login_required(state.config.port, session_id);
    };

    tracing::debug!(session_id, phone_number = %phone_number, "session resolved");

    if !state.config.is_allowed(&phone_number) {
        tracing::warn!(
            session_id,
            phone_number = %phone_number,
            "phone number is not on the allow-list"
        );
        return AppError::Forbidden {
            message: "Phone number is not allowed".to_string(),
        }
        .into_response();
    }

    let request: ToolCallRequest = match serde_json::from_slice(&body) {
        Ok(request) => request,
        Err(err) => {
            return AppError::Validation {
                message: format!("Could not decode request body: {err}"),
                field: None,
                received: None,
            }
            .into_response();
        }
    };

    match state.fixtures.resolve(&phone_number, &request.tool_name) {
        Ok(data) => ([(CONTENT_TYPE, "application/json")], data).into_response(),
        Err(err) => AppError::from(err).into_response(),
    }
}

fn login_required(port: u16, session_id: &str) -> Response {
    let query: String = url::form_urlencoded::Serializer::new(String::new())
        .append_pair("sessionId", session_id)
        .finish();

    let payload = LoginRequiredResponse {
        status: "login_required",
        login_url: format!("http://localhost:{port}/mockWebPage?{query}"),
        message: LOGIN_REQUIRED_MESSAGE,
    };

    (StatusCode::BAD_REQUEST, Json(payload)).into_response()
}
