use async_graphql::{Request, Variables};
use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;
use tracing::{debug, instrument, warn};

use super::schema::UserSchema;
use crate::state::AppState;

/// Body of `POST /graphql`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphQLBody {
    pub query: String,
    #[serde(default)]
    pub operation_name: Option<String>,
    #[serde(default)]
    pub variables: Option<serde_json::Map<String, serde_json::Value>>,
}

pub fn graphql_routes() -> Router<AppState> {
    Router::new().route("/graphql", post(graphql))
}

/// Runs one document against the schema and returns the `{data, errors}` envelope.
pub async fn execute(schema: &UserSchema, body: GraphQLBody) -> async_graphql::Response {
    let mut req = Request::new(body.query);
    if let Some(op) = body.operation_name {
        req = req.operation_name(op);
    }
    if let Some(vars) = body.variables {
        req = req.variables(Variables::from_json(serde_json::Value::Object(vars)));
    }

    let res = schema.execute(req).await;
    if !res.errors.is_empty() {
        debug!(errors = res.errors.len(), "graphql response carries errors");
    }
    res
}

/// The body is decoded whatever its `Content-Type`; only a body that is not a
/// `GraphQLBody` gets a 400.
#[instrument(skip(state, raw))]
pub async fn graphql(State(state): State<AppState>, raw: Bytes) -> Response {
    let body = match serde_json::from_slice::<GraphQLBody>(&raw) {
        Ok(b) => b,
        Err(e) => {
            warn!(error = %e, "malformed graphql request body");
            return (StatusCode::BAD_REQUEST, Json(json!({ "error": e.to_string() })))
                .into_response();
        }
    };

    Json(execute(&state.schema, body).await).into_response()
}
