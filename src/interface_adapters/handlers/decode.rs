use crate::interface_adapters::protocol::{DecodeRequest, DecodeResponse, UsageErrorResponse};
use crate::interface_adapters::state::AppState;
use crate::use_cases::DecodeImageUseCase;
use axum::{Json, extract::State, http::StatusCode};
use serde_json::Value;
use std::sync::Arc;
use uuid::Uuid;

// Fetch the image behind `url` and answer with the first QR payload found.
#[tracing::instrument(name = "decode", skip_all, fields(request_id = %Uuid::new_v4()))]
pub async fn decode(
    State(state): State<Arc<AppState>>,
    Json(body): Json<Value>,
) -> Result<Json<DecodeResponse>, (StatusCode, Json<UsageErrorResponse>)> {
    tracing::debug!(%body, "decode request received");

    let request = DecodeRequest::from_body(&body).map_err(|err| {
        tracing::warn!(code = err.code(), key = err.key(), "rejected decode request");
        (StatusCode::BAD_REQUEST, Json(UsageErrorResponse::from(&err)))
    })?;

    let use_case = DecodeImageUseCase {
        fetcher: state.fetcher.clone(),
        decoder: state.decoder.clone(),
        scratch: state.scratch.clone(),
    };
    let outcome = use_case.execute(&request.url).await;

    tracing::info!(url = %request.url, outcome = outcome.label(), "decode finished");

    Ok(Json(DecodeResponse {
        url: request.url,
        text: outcome.into_text(),
    }))
}
