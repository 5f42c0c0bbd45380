//! JSON endpoints.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use folio_contact::{ContactError, ContactPayload};
use folio_content::{CaseStudy, CaseStudySummary, ContentError};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};

use crate::AppState;

pub(crate) const MISSING_FIELDS: &str = "Missing required fields.";
pub(crate) const DELIVERY_FAILED: &str = "Email failed to send.";
pub(crate) const INVALID_BODY: &str = "Invalid request body.";
pub(crate) const NOT_FOUND: &str = "Not found.";
pub(crate) const CONTENT_UNAVAILABLE: &str = "Content unavailable.";

/// Envelope returned by every JSON endpoint except successful content reads.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ApiResponse {
    pub ok: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ApiResponse {
    pub fn ok() -> Self {
        Self { ok: true, error: None }
    }

    pub fn error(message: &str) -> Self {
        Self {
            ok: false,
            error: Some(message.to_string()),
        }
    }
}

fn reply(status: StatusCode, body: ApiResponse) -> (StatusCode, Json<ApiResponse>) {
    (status, Json(body))
}

pub(crate) async fn health() -> Json<ApiResponse> {
    Json(ApiResponse::ok())
}

pub(crate) async fn contact_handler(
    State(state): State<AppState>,
    payload: Result<Json<ContactPayload>, JsonRejection>,
) -> (StatusCode, Json<ApiResponse>) {
    let Json(payload) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            warn!("Rejected contact request body: {rejection}");
            return reply(StatusCode::BAD_REQUEST, ApiResponse::error(INVALID_BODY));
        }
    };

    match state.relay.submit(payload).await {
        Ok(_) => reply(StatusCode::OK, ApiResponse::ok()),
        Err(ContactError::Validation { .. }) => {
            reply(StatusCode::BAD_REQUEST, ApiResponse::error(MISSING_FIELDS))
        }
        Err(ContactError::Delivery { .. }) => reply(
            StatusCode::INTERNAL_SERVER_ERROR,
            ApiResponse::error(DELIVERY_FAILED),
        ),
    }
}

/// Maps content errors to generic responses; detail only goes to the log.
pub(crate) struct ContentFailure(ContentError);

impl From<ContentError> for ContentFailure {
    fn from(e: ContentError) -> Self {
        Self(e)
    }
}

impl IntoResponse for ContentFailure {
    fn into_response(self) -> Response {
        match self.0 {
            ContentError::NotFound(_) => {
                reply(StatusCode::NOT_FOUND, ApiResponse::error(NOT_FOUND)).into_response()
            }
            e => {
                error!("Case study read failed: {e}");
                reply(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ApiResponse::error(CONTENT_UNAVAILABLE),
                )
                .into_response()
            }
        }
    }
}

pub(crate) async fn list_case_studies(
    State(state): State<AppState>,
) -> Result<Json<Vec<CaseStudySummary>>, ContentFailure> {
    Ok(Json(state.content.list().await?))
}

pub(crate) async fn get_case_study(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<CaseStudy>, ContentFailure> {
    Ok(Json(state.content.load(&slug).await?))
}
