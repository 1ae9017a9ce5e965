use serde::Serialize;
use utoipa::ToSchema;

/// Structured error response returned by every failing endpoint.
/// Carries enough context for an agent to understand what went wrong
/// without reading server logs.
#[derive(Debug, Serialize, ToSchema)]
pub struct ApiError {
    /// Machine-readable error code (e.g. "validation_failed", "forbidden")
    pub error: String,
    /// Human/agent-readable description of what went wrong
    pub message: String,
    /// Which field caused the error (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    /// The value that was received (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub received: Option<serde_json::Value>,
    /// Request ID for tracing and debugging
    pub request_id: String,
}

/// Error codes used across the API
pub mod codes {
    pub const VALIDATION_FAILED: &str = "validation_failed";
    pub const FORBIDDEN: &str = "forbidden";
    pub const TOOL_DATA_UNAVAILABLE: &str = "tool_data_unavailable";
    pub const INTERNAL_ERROR: &str = "internal_error";
}
