//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: Snapshot loaded with content
/// - **503 Service Unavailable**: Snapshot empty or unreadable
///
/// # Components Checked
///
/// 1. **Content**: Number of published nodes (must be non-zero)
/// 2. **Domains**: Number of domain registrations
/// 3. **Alias lookup**: Whether alias URLs are enabled (informational)
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let content_check = check_content(&state).await;
    let domains_check = check_domains(&state).await;
    let alias_check = check_alias_lookup(&state);

    let all_healthy = content_check.status == "ok" && domains_check.status == "ok";

    let response = HealthResponse {
        status: if all_healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            content: content_check,
            domains: domains_check,
            alias_lookup: alias_check,
        },
    };

    if all_healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

async fn check_content(state: &AppState) -> CheckStatus {
    match state.content_store.count().await {
        Ok(0) => CheckStatus {
            status: "error".to_string(),
            message: Some("Snapshot has no content nodes".to_string()),
        },
        Ok(count) => CheckStatus {
            status: "ok".to_string(),
            message: Some(format!("{count} nodes")),
        },
        Err(e) => CheckStatus {
            status: "error".to_string(),
            message: Some(format!("Content store error: {e}")),
        },
    }
}

async fn check_domains(state: &AppState) -> CheckStatus {
    match state.domain_registry.count().await {
        Ok(count) => CheckStatus {
            status: "ok".to_string(),
            message: Some(format!("{count} domains")),
        },
        Err(e) => CheckStatus {
            status: "error".to_string(),
            message: Some(format!("Domain registry error: {e}")),
        },
    }
}

fn check_alias_lookup(state: &AppState) -> CheckStatus {
    CheckStatus {
        status: "ok".to_string(),
        message: Some(
            if state.alias_lookup_enabled {
                "enabled"
            } else {
                "disabled"
            }
            .to_string(),
        ),
    }
}
