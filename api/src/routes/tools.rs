use axum::{Json, Router, routing::get};
use serde::Serialize;

use finmock_core::tools::{TOOLS, ToolSpec};

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/tools", get(list_tools))
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct ToolListResponse {
    pub tools: Vec<ToolSpec>,
}

/// List the tools this mock can serve
///
/// Static metadata only. Invoking a tool goes through POST /mcp/stream,
/// which never consults this catalog.
#[utoipa::path(
    get,
    path = "/tools",
    responses((status = 200, description = "Tool catalog", body = ToolListResponse)),
    tag = "tools"
)]
pub async fn list_tools() -> Json<ToolListResponse> {
    Json(ToolListResponse {
        tools: TOOLS.to_vec(),
    })
}
