//! HTTP server mode for REST API access to schema validation

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use serde_json::{json, Value};
use std::collections::BTreeMap;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::builtin::list_builtin;
use crate::error::{Error, Result};
use crate::loader::{load_schema, load_schemas_from_dir};
use crate::schema::{Schema, SchemaValidator};

/// Server configuration
#[derive(Clone, Debug, Default)]
pub struct ServerConfig {
    /// Directory containing additional schema YAML files
    pub schemas_dir: Option<PathBuf>,
}

/// A loaded schema and its validator
struct LoadedSchema {
    schema: Schema,
    validator: SchemaValidator,
}

/// App state shared across handlers
struct AppState {
    schemas: BTreeMap<String, Arc<LoadedSchema>>,
}

impl AppState {
    /// Load built-in schemas, then schemas from the configured directory
    fn load(config: &ServerConfig) -> Result<Self> {
        let mut schemas = BTreeMap::new();

        for name in list_builtin() {
            let schema = load_schema(name)?;
            schemas.insert(schema.name.clone(), schema);
        }

        if let Some(dir) = &config.schemas_dir {
            for (name, schema) in load_schemas_from_dir(dir)? {
                if schemas.contains_key(&name) {
                    tracing::info!(schema = %name, "Overriding built-in schema");
                }
                schemas.insert(name, schema);
            }
        }

        let schemas = schemas
            .into_iter()
            .map(|(name, schema)| {
                let validator = SchemaValidator::new(&schema);
                (name, Arc::new(LoadedSchema { schema, validator }))
            })
            .collect();

        Ok(Self { schemas })
    }
}

/// Response wrapper
#[derive(Debug, Serialize)]
struct ApiResponse<T> {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    fn error(msg: impl Into<String>) -> ApiResponse<()> {
        ApiResponse {
            success: false,
            data: None,
            error: Some(msg.into()),
        }
    }
}

/// Start the HTTP server
pub async fn serve(config: ServerConfig, port: u16) -> Result<()> {
    let app = router(&config)?;

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Starting HTTP server on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| Error::config(format!("Failed to bind to port {port}: {e}")))?;

    axum::serve(listener, app)
        .await
        .map_err(|e| Error::config(format!("Server error: {e}")))?;

    Ok(())
}

/// Build the application router
fn router(config: &ServerConfig) -> Result<Router> {
    let state = AppState::load(config)?;
    tracing::info!(schemas = state.schemas.len(), "Loaded schemas");

    // Build CORS layer - allow all origins for development
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Ok(Router::new()
        .route("/health", get(health))
        .route("/schemas", get(list_schemas))
        .route("/schemas/:name/validate", post(validate_config))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(state)))
}

/// Health check endpoint
async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

/// List loaded schemas
async fn list_schemas(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let schemas: Vec<Value> = state
        .schemas
        .values()
        .map(|loaded| {
            let discriminators: Vec<String> = loaded
                .validator
                .discriminators()
                .into_iter()
                .map(|(location, _)| location)
                .collect();

            json!({
                "name": loaded.schema.name,
                "description": loaded.schema.description,
                "discriminators": discriminators
            })
        })
        .collect();

    Json(ApiResponse::success(json!({
        "type": "SCHEMAS",
        "schemas": schemas
    })))
}

/// Validate a configuration against a schema
async fn validate_config(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
    Json(body): Json<Value>,
) -> Response {
    let Some(loaded) = state.schemas.get(&name) else {
        return (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::<()>::error(
                Error::schema_not_found(name).to_string(),
            )),
        )
            .into_response();
    };

    let config = match loaded.schema.decode(&body) {
        Ok(config) => config,
        Err(e) => {
            return (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ApiResponse::<()>::error(e.to_string())),
            )
                .into_response();
        }
    };

    let diagnostics = loaded.validator.validate(&config);
    tracing::debug!(
        schema = %name,
        errors = diagnostics.error_count(),
        "Validated configuration"
    );

    (
        StatusCode::OK,
        Json(ApiResponse::success(json!({
            "type": "DIAGNOSTICS",
            "schema": name,
            "valid": !diagnostics.has_error(),
            "diagnostics": diagnostics
        }))),
    )
        .into_response()
}
