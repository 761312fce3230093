//! Static page handlers: the mini-app embed and the flow entry frames.

use axum::{extract::State, response::Html};
use framepay_frames::{claim_frame, embed_page, payment_frame};
use framepay_types::{format_token_amount, ApiError};

use crate::server::AppState;

/// Handles GET /.
///
/// Serves the mini-app embed page pointing at the payment frame.
pub async fn index(State(state): State<AppState>) -> Html<String> {
	let frames = &state.config.frames;
	let title = format!(
		"Pay {} USDC to Play",
		format_token_amount(state.config.payment.amount, 6)
	);
	Html(embed_page(&frames.start_image_url, &frames.public_url, &title))
}

/// Handles GET /pay/frame.
///
/// Serves the payment entry frame with the transaction button.
pub async fn payment_frame_page(State(state): State<AppState>) -> Html<String> {
	let frames = &state.config.frames;
	let label = format!(
		"Pay {} USDC",
		format_token_amount(state.config.payment.amount, 6)
	);
	Html(payment_frame(
		&frames.start_image_url,
		&frames.public_url,
		&label,
	))
}

/// Handles GET /claim/frame.
///
/// Serves the claim entry frame. Eligibility is only checked on the
/// POST action, so the unauthenticated GET always renders the frame.
pub async fn claim_frame_page(
	State(state): State<AppState>,
) -> Result<Html<String>, ApiError> {
	let claim = state.config.claim.as_ref().ok_or_else(|| ApiError::ConfigMissing {
		message: "claim flow is not configured".to_string(),
	})?;
	let frames = &state.config.frames;
	let label = format!("Claim {} USDC", format_token_amount(claim.amount, 6));
	Ok(Html(claim_frame(
		&frames.claim_image_url,
		&frames.public_url,
		&label,
	)))
}
