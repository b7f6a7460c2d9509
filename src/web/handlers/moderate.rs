// POST /moderate — scan one piece of user-submitted content.
//
// Response contract:
//   200 with a verdict for every scan, including every fail-open path
//   400 when the body is missing or not valid JSON
//   500 when the oracle client was never initialized (missing credential)
//
// The configuration check runs before body parsing: with no oracle there
// is nothing useful to do with even a well-formed request.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::scan::models::ModerationRequest;
use crate::web::{api_error, AppState};

pub async fn moderate(
    State(state): State<AppState>,
    payload: Result<Json<ModerationRequest>, JsonRejection>,
) -> Response {
    let Some(moderator) = state.moderator else {
        return api_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Configuration error: oracle client not initialized",
        );
    };

    let Ok(Json(request)) = payload else {
        return api_error(StatusCode::BAD_REQUEST, "Invalid JSON");
    };

    let verdict = moderator.moderate(&request).await;
    (StatusCode::OK, Json(verdict)).into_response()
}
