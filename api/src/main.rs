use std::net::SocketAddr;

use tower::ServiceBuilder;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use finmock_core::config::AppConfig;

mod error;
mod middleware;
mod routes;
mod state;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "finmock",
        version = "0.1.0",
        description = "Mock financial-data tool server. Serves pre-recorded fixtures keyed by (phone number, tool name) behind a web login flow, for development and testing."
    ),
    paths(
        routes::health::health_check,
        routes::tools::list_tools,
        routes::login::login_page,
        routes::login::login_submit,
        routes::stream::call_tool,
    ),
    components(schemas(
        routes::health::HealthResponse,
        routes::tools::ToolListResponse,
        routes::login::LoginSubmit,
        routes::stream::ToolCallRequest,
        routes::stream::LoginRequiredResponse,
        finmock_core::error::ApiError,
        finmock_core::tools::ToolSpec,
    ))
)]
struct ApiDoc;

#[tokio::main]
async fn main() {
    // Load .env if present (dev only)
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "finmock_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env();
    let port = config.port;
    tracing::info!(
        allowed_numbers = config.allowed_numbers().len(),
        data_dir = %config.data_dir.display(),
        "loaded configuration"
    );

    let app_state = state::AppState::new(config);

    let cors_layer = middleware::cors::build_cors_layer();

    let app = routes::app(app_state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-doc/openapi.json", ApiDoc::openapi()))
        .nest_service("/static", ServeDir::new("static"))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors_layer),
        );

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("finmock listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app.into_make_service())
        .await
        .unwrap();
}
