//! Leaderboard handlers.
//!
//! Submissions are parsed from raw bytes so a malformed body maps onto
//! the invalid-request error. Scores are client-asserted; the store only
//! keeps the higher of the stored and submitted values.

use axum::{
	body::Bytes,
	extract::State,
	response::Json,
};
use framepay_leaderboard::SubmitOutcome;
use framepay_types::ApiError;
use serde::Deserialize;

use crate::server::AppState;

const TOP_LIMIT: usize = 10;

/// A score submission body.
#[derive(Debug, Deserialize)]
pub struct SubmitRequest {
	pub fid: u64,
	pub username: String,
	pub score: u64,
}

/// Handles GET /leaderboard.
pub async fn top(State(state): State<AppState>) -> Json<serde_json::Value> {
	let entries = state.leaderboard.top(TOP_LIMIT).await;
	Json(serde_json::json!({ "leaderboard": entries }))
}

/// Handles POST /leaderboard/submit.
pub async fn submit(
	State(state): State<AppState>,
	body: Bytes,
) -> Result<Json<SubmitOutcome>, ApiError> {
	let request: SubmitRequest =
		serde_json::from_slice(&body).map_err(|e| ApiError::InvalidRequest {
			message: format!("Malformed score submission: {}", e),
		})?;
	if request.username.trim().is_empty() {
		return Err(ApiError::InvalidRequest {
			message: "username must not be empty".to_string(),
		});
	}

	let outcome = state
		.leaderboard
		.submit(request.fid, request.username, request.score)
		.await;
	tracing::info!(
		fid = request.fid,
		score = request.score,
		rank = outcome.rank,
		"Score submitted"
	);
	Ok(Json(outcome))
}
