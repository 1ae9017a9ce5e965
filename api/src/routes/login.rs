use axum::extract::{Query, State};
use axum::response::Html;
use axum::routing::{get, post};
use axum::{Form, Router};
use serde::Deserialize;

use crate::error::AppError;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/mockWebPage", get(login_page))
        // Alias for clients that resolve the documented login path.
        .route("/loginPage", get(login_page))
        .route("/login", post(login_submit))
}

// ──────────────────────────────────────────────
// GET /mockWebPage
// ──────────────────────────────────────────────

#[derive(Debug, Deserialize, utoipa::IntoParams)]
pub struct LoginPageParams {
    /// Session id the login form will bind the chosen phone number to
    #[serde(rename = "sessionId", default)]
    pub session_id: String,
}

/// Render the mock login page
///
/// Lists the allow-listed phone numbers as selectable choices and posts the
/// chosen number together with the session id to /login.
#[utoipa::path(
    get,
    path = "/mockWebPage",
    params(LoginPageParams),
    responses(
        (status = 200, description = "Login page HTML"),
        (status = 400, description = "Missing sessionId", body = finmock_core::error::ApiError)
    ),
    tag = "login"
)]
pub async fn login_page(
    State(state): State<AppState>,
    Query(params): Query<LoginPageParams>,
) -> Result<Html<String>, AppError> {
    if params.session_id.is_empty() {
        return Err(AppError::Validation {
            message: "sessionId is required".to_string(),
            field: Some("sessionId".to_string()),
            received: None,
        });
    }

    Ok(Html(render_login_page(
        &params.session_id,
        state.config.allowed_numbers(),
    )))
}

// ──────────────────────────────────────────────
// POST /login
// ──────────────────────────────────────────────

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct LoginSubmit {
    #[serde(rename = "sessionId", default)]
    pub session_id: String,
    #[serde(rename = "phoneNumber", default)]
    pub phone_number: String,
}

/// Register a session for the claimed phone number
///
/// Trust-on-first-use: the claimed number is bound to the session id
/// unconditionally, with no credential check. The allow-list is enforced
/// later, on every tool request, so registering an unknown number succeeds
/// here and fails there.
#[utoipa::path(
    post,
    path = "/login",
    request_body(content = LoginSubmit, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Confirmation page HTML"),
        (status = 400, description = "Missing form fields", body = finmock_core::error::ApiError)
    ),
    tag = "login"
)]
pub async fn login_submit(
    State(state): State<AppState>,
    Form(form): Form<LoginSubmit>,
) -> Result<Html<String>, AppError> {
    if form.session_id.is_empty() || form.phone_number.is_empty() {
        return Err(AppError::Validation {
            message: "sessionId and phoneNumber are required".to_string(),
            field: None,
            received: None,
        });
    }

    state
        .sessions
        .register(&form.session_id, &form.phone_number);
    tracing::info!(
        session_id = %form.session_id,
        phone_number = %form.phone_number,
        "session registered"
    );

    Ok(Html(render_login_successful()))
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

fn render_login_page(session_id: &str, allowed_numbers: &[String]) -> String {
    let choices: String = allowed_numbers
        .iter()
        .map(|number| {
            let escaped = html_escape(number);
            format!(
                "<label><input type=\"radio\" name=\"phoneNumber\" value=\"{escaped}\" required> {escaped}</label>\n"
            )
        })
        .collect();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>finmock — Login</title>
<style>
body {{ font-family: system-ui, sans-serif; max-width: 400px; margin: 60px auto; padding: 0 20px; }}
h1 {{ font-size: 1.4em; }}
label {{ display: block; margin-top: 8px; }}
button {{ margin-top: 20px; padding: 10px 24px; background: #111; color: #fff; border: none; cursor: pointer; font-size: 1em; }}
.info {{ color: #666; font-size: 0.9em; margin-top: 8px; }}
</style>
</head>
<body>
<h1>Sign in to finmock</h1>
<p class="info">Pick a test phone number. Each number maps to a different pre-recorded data scenario.</p>
<form method="POST" action="/login">
<input type="hidden" name="sessionId" value="{session_id_escaped}">
{choices}<button type="submit">Login</button>
</form>
</body>
</html>"#,
        session_id_escaped = html_escape(session_id),
        choices = choices,
    )
}

fn render_login_successful() -> String {
    r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>finmock — Login successful</title>
<style>
body { font-family: system-ui, sans-serif; max-width: 400px; margin: 60px auto; padding: 0 20px; }
h1 { font-size: 1.4em; }
.info { color: #666; font-size: 0.9em; margin-top: 8px; }
</style>
</head>
<body>
<h1>Login successful</h1>
<p class="info">You can close this window and return to the application.</p>
</body>
</html>"#
        .to_string()
}

#[cfg(test)]
mod tests {
    use axum::Router;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use finmock_core::config::AppConfig;

    use crate::state::AppState;

    fn test_state() -> AppState {
        AppState::new(AppConfig::new(
            8080,
            vec!["9999999999".to_string(), "1111111111".to_string()],
            "test_data_dir",
        ))
    }

    fn app() -> (Router, AppState) {
        let state = test_state();
        let app = super::router().with_state(state.clone());
        (app, state)
    }

    #[tokio::test]
    async fn login_page_renders_session_id_and_choices() {
        let (app, _) = app();
        let response = app
            .oneshot(
                Request::get("/mockWebPage?sessionId=session-xyz")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let html = String::from_utf8(body.to_vec()).unwrap();
        assert!(html.contains("session-xyz"));
        assert!(html.contains("9999999999"));
        assert!(html.contains("1111111111"));
    }

    #[tokio::test]
    async fn login_page_alias_serves_the_same_form() {
        let (app, _) = app();
        let response = app
            .oneshot(
                Request::get("/loginPage?sessionId=session-xyz")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn login_page_without_session_id_is_rejected() {
        let (app, _) = app();
        let response = app
            .oneshot(Request::get("/mockWebPage").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn login_page_escapes_the_session_id() {
        let (app, _) = app();
        let response = app
            .oneshot(
                Request::get("/mockWebPage?sessionId=%3Cscript%3E")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let html = String::from_utf8(body.to_vec()).unwrap();
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[tokio::test]
    async fn login_registers_the_session() {
        let (app, state) = app();
        let response = app
            .oneshot(
                Request::post("/login")
                    .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                    .body(Body::from("sessionId=abc&phoneNumber=9999999999"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(state.sessions.resolve("abc").as_deref(), Some("9999999999"));
    }

    #[tokio::test]
    async fn login_accepts_numbers_outside_the_allow_list() {
        // Trust-on-first-use: registration always succeeds; gating happens
        // on the tool endpoint.
        let (app, state) = app();
        let response = app
            .oneshot(
                Request::post("/login")
                    .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                    .body(Body::from("sessionId=abc&phoneNumber=0000000000"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(state.sessions.resolve("abc").as_deref(), Some("0000000000"));
    }

    #[tokio::test]
    async fn login_with_missing_fields_is_rejected() {
        for body in ["sessionId=abc", "phoneNumber=9999999999", ""] {
            let (app, state) = app();
            let response = app
                .oneshot(
                    Request::post("/login")
                        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                        .body(Body::from(body))
                        .unwrap(),
                )
                .await
                .unwrap();

            assert_eq!(response.status(), StatusCode::BAD_REQUEST, "body: {body:?}");
            assert_eq!(state.sessions.resolve("abc"), None);
        }
    }
}
