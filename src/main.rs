//! Bookshelf - GraphQL API server for a small book catalog
//!
//! This is the main entry point for the Bookshelf backend.
//! All operations are exposed via GraphQL at /graphql.

use std::net::SocketAddr;
use std::sync::Arc;

use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::http::HeaderMap;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bookshelf::config::Config;
use bookshelf::{api, graphql, store, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;
    let config = Arc::new(config);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bookshelf=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Bookshelf Backend");

    // Seed the in-memory catalog. This stands in for a real data source and
    // lives for the whole process.
    let store = Arc::new(store::seed());
    tracing::info!("Catalog store seeded");

    // Build GraphQL schema
    let schema = graphql::build_schema(store);
    tracing::info!("GraphQL schema built");

    // Build application state
    let state = AppState {
        config: config.clone(),
        schema,
    };

    // Build router - GraphQL is the primary API
    let app = Router::new()
        // Health endpoint (no GraphQL involved)
        .merge(api::health::router())
        // GraphQL endpoint (handles all queries and mutations)
        .route("/graphql", get(graphiql).post(graphql_handler))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Bind first so an ephemeral port (PORT=0) resolves before logging URLs.
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    let addr = listener.local_addr()?;

    let host = config.host.as_deref().unwrap_or("localhost");
    tracing::info!("Listening on {}", addr);
    println!("Server ready at http://{}:{}/graphql", host, addr.port());

    axum::serve(listener, app).await?;

    Ok(())
}

/// GraphQL query/mutation handler
async fn graphql_handler(
    axum::extract::State(state): axum::extract::State<AppState>,
    req: GraphQLRequest,
) -> GraphQLResponse {
    state.schema.execute(req.into_inner()).await.into()
}

/// GraphiQL interactive playground (only for browsers)
async fn graphiql(headers: HeaderMap) -> impl IntoResponse {
    // Check if this is a browser request (accepts HTML)
    let accepts_html = headers
        .get(axum::http::header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.contains("text/html"))
        .unwrap_or(false);

    if accepts_html {
        axum::response::Html(GraphiQLSource::build().endpoint("/graphql").finish())
            .into_response()
    } else {
        // Return a helpful JSON error for non-browser requests
        (
            axum::http::StatusCode::METHOD_NOT_ALLOWED,
            axum::Json(serde_json::json!({
                "error": "GET requests are not supported for GraphQL queries. Use POST with Content-Type: application/json"
            })),
        )
            .into_response()
    }
}
