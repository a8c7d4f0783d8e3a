use crate::infra::AppState;
use axum::extract::Path;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use lead_intake::error::AppError;
use lead_intake::intake::{
    validate, Field, FormError, FormValues, FormVariant, SchedulerLink, ValidationReport,
    VariantKind,
};
use lead_intake::redirects::with_legacy_redirects;
use serde::Serialize;
use serde_json::json;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

/// Public description of one form so the page can render and pre-validate it.
#[derive(Debug, Serialize)]
pub(crate) struct FormSummary {
    #[serde(flatten)]
    pub(crate) variant: FormVariant,
    pub(crate) fields: BTreeSet<Field>,
}

impl From<FormVariant> for FormSummary {
    fn from(variant: FormVariant) -> Self {
        let fields = variant.fields();
        Self { variant, fields }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct BookingSummary {
    pub(crate) quick_request: FormSummary,
    pub(crate) self_schedule: FormSummary,
    pub(crate) scheduler: SchedulerLink,
}

/// All site routes, wrapped with the legacy redirect table.
pub fn build_router(state: AppState) -> Router {
    let redirects = Arc::clone(&state.redirects);
    let router = Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/forms", get(list_forms))
        .route("/api/forms/:variant", get(form_endpoint))
        .route("/api/forms/:variant/validate", post(validate_endpoint))
        .route("/api/booking", get(booking_endpoint))
        .layer(Extension(state));

    with_legacy_redirects(router, redirects)
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn list_forms() -> Json<Vec<FormSummary>> {
    Json(FormVariant::all().into_iter().map(FormSummary::from).collect())
}

pub(crate) async fn form_endpoint(
    Path(variant): Path<String>,
) -> Result<Json<FormSummary>, AppError> {
    let kind: VariantKind = variant.parse()?;
    Ok(Json(FormVariant::for_kind(kind).into()))
}

/// Run the same checks the browser runs; nothing is forwarded to the intake endpoint.
pub(crate) async fn validate_endpoint(
    Path(variant): Path<String>,
    Json(body): Json<BTreeMap<String, String>>,
) -> Result<Json<ValidationReport>, AppError> {
    let kind: VariantKind = variant.parse()?;
    let mut values = FormValues::new();
    for (name, value) in body {
        let field: Field = name.parse().map_err(FormError::from)?;
        values.set(field, value);
    }

    Ok(Json(validate(&FormVariant::for_kind(kind), &values)))
}

pub(crate) async fn booking_endpoint(
    Extension(state): Extension<AppState>,
) -> Json<BookingSummary> {
    Json(BookingSummary {
        quick_request: FormVariant::booking_quick_request().into(),
        self_schedule: FormVariant::booking_self_schedule().into(),
        scheduler: state.scheduler.clone(),
    })
}
