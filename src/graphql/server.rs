use std::net::SocketAddr;

use async_graphql::http::GraphiQLSource;
use async_graphql::parser::{parse_query, types::OperationType};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse, rejection::GraphQLRejection};
use axum::{
    Router,
    extract::{RawQuery, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
};
use tokio::net::TcpListener;
use tracing::info;

use super::schema::BookshelfSchema;

pub const GRAPHQL_PATH: &str = "/graphql";

#[derive(Clone)]
struct ServerState {
    schema: BookshelfSchema,
    graphiql: bool,
}

async fn graphql_post(
    State(state): State<ServerState>,
    request: GraphQLRequest,
) -> GraphQLResponse {
    state.schema.execute(request.into_inner()).await.into()
}

/// `GET /graphql` executes `?query=...`; without a query it shows GraphiQL
/// when enabled, and reports the missing query otherwise.
async fn graphql_get(
    State(state): State<ServerState>,
    RawQuery(raw_query): RawQuery,
    request: Result<GraphQLRequest, GraphQLRejection>,
) -> Response {
    if state.graphiql && !has_query_param(raw_query.as_deref()) {
        return Html(GraphiQLSource::build().endpoint(GRAPHQL_PATH).finish()).into_response();
    }

    let request = match request {
        Ok(request) => request.into_inner(),
        Err(rejection) => return rejection.into_response(),
    };
    if selects_mutation(&request) {
        return (
            StatusCode::METHOD_NOT_ALLOWED,
            "Mutations can only be sent with POST",
        )
            .into_response();
    }

    GraphQLResponse::from(state.schema.execute(request).await).into_response()
}

fn has_query_param(raw_query: Option<&str>) -> bool {
    raw_query.is_some_and(|q| {
        q.split('&')
            .any(|pair| pair == "query" || pair.starts_with("query="))
    })
}

/// Whether the operation this request would run is a mutation. Unparsable
/// documents are left for execution to report.
fn selects_mutation(request: &async_graphql::Request) -> bool {
    let Ok(document) = parse_query(&request.query) else {
        return false;
    };
    document.operations.iter().any(|(name, operation)| {
        let selected = match (&request.operation_name, name) {
            (Some(wanted), Some(name)) => name.as_str() == wanted.as_str(),
            (Some(_), None) => false,
            (None, _) => true,
        };
        selected && operation.node.ty == OperationType::Mutation
    })
}

/// Routes `/graphql`: POST executes; GET executes a query string or, when
/// enabled, serves the GraphiQL explorer.
pub fn router(schema: BookshelfSchema, graphiql_enabled: bool) -> Router {
    let state = ServerState {
        schema,
        graphiql: graphiql_enabled,
    };

    Router::new()
        .route(GRAPHQL_PATH, get(graphql_get).post(graphql_post))
        .with_state(state)
}

/// Serve on an already bound listener until the process is stopped.
pub async fn serve(listener: TcpListener, app: Router) -> std::io::Result<()> {
    let addr: SocketAddr = listener.local_addr()?;
    info!(%addr, path = GRAPHQL_PATH, "GraphQL server listening");
    axum::serve(listener, app).await
}

pub async fn run_server(
    schema: BookshelfSchema,
    address: &str,
    graphiql_enabled: bool,
) -> std::io::Result<()> {
    let listener = TcpListener::bind(address).await?;
    serve(listener, router(schema, graphiql_enabled)).await
}
