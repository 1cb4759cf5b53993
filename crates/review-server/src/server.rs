//! HTTP server setup and routing.

use anyhow::Result;
use async_graphql::http::{playground_source, GraphQLPlaygroundConfig};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    response::{Html, IntoResponse},
    routing::get,
    Extension, Router,
};
use reviewdb::Store;
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, warn};

use crate::{create_schema, AppSchema, ServerConfig};

async fn graphql_handler(
    Extension(schema): Extension<AppSchema>,
    req: GraphQLRequest,
) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

async fn graphql_playground() -> impl IntoResponse {
    Html(playground_source(GraphQLPlaygroundConfig::new("/graphql")))
}

/// Build the router serving `schema`.
///
/// GraphQL requests are accepted on `POST /graphql` and `POST /`; `GET` on
/// either path serves the playground.
pub fn router(schema: AppSchema) -> Router {
    Router::new()
        .route("/", get(graphql_playground).post(graphql_handler))
        .route("/graphql", get(graphql_playground).post(graphql_handler))
        .layer(Extension(schema))
        .layer(CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any))
}

/// Run the GraphQL server until Ctrl-C.
pub async fn run(config: &ServerConfig, store: Store) -> Result<()> {
    let games = store.games()?.len();
    let id_upper_bound = store.config().id_upper_bound;
    let schema = create_schema(store);
    info!(games, id_upper_bound, "store ready");

    let app = router(schema);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("GraphQL playground: http://{}/graphql", addr);

    axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        // Without a signal handler the server runs until killed.
        warn!("failed to install Ctrl-C handler: {}", e);
        std::future::pending::<()>().await;
    }
    info!("shutdown requested");
}
