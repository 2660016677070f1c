//! Classification endpoint
//!
//! `POST /bfhl` with `{"data": [string, ...]}`.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use bfhl_common::{classify, BfhlResponse, DataRequest};
use tracing::{debug, warn};

use crate::{ApiError, ApiResult, AppState};

/// POST /bfhl
///
/// Body rejections (missing `data`, non-string elements, bad JSON) are
/// returned as client errors and the classifier never runs. Once the body is
/// accepted the response is always 200; a classification failure yields the
/// unsuccessful response shape instead of an error status.
pub async fn process_bfhl(
    State(state): State<AppState>,
    payload: Result<Json<DataRequest>, JsonRejection>,
) -> ApiResult<Json<BfhlResponse>> {
    let Json(request) = payload.map_err(|rejection| {
        warn!("Rejected /bfhl request body: {}", rejection.body_text());
        ApiError::from(rejection)
    })?;

    let response = match classify(&request.data) {
        Ok(classification) => {
            debug!(
                tokens = request.data.len(),
                odd = classification.odd_numbers.len(),
                even = classification.even_numbers.len(),
                alphabets = classification.alphabets.len(),
                special = classification.special_characters.len(),
                "Classified request"
            );
            BfhlResponse::success(&state.identity, classification)
        }
        Err(e) => {
            warn!("Classification failed, returning unsuccessful response: {}", e);
            BfhlResponse::failure(&state.identity)
        }
    };

    Ok(Json(response))
}
