//! Pay-to-play flow handlers.
//!
//! The transaction endpoint answers a frame `tx` button with a stablecoin
//! transfer descriptor; the verify endpoint classifies the resulting
//! receipt and renders the next frame.

use axum::{
	body::Bytes,
	extract::State,
	response::{Html, Json},
};
use framepay_chain::payment_descriptor;
use framepay_frames::{payment_frame, render_next_state, select_next_state, Flow};
use framepay_types::{format_token_amount, ApiError, TransactionDescriptor};

use crate::server::AppState;

/// Handles POST /pay/frame.
///
/// The retry prompt posts the signed action back here; authenticating it
/// and re-rendering the payment frame re-enters the flow.
pub async fn frame_action(
	State(state): State<AppState>,
	body: Bytes,
) -> Result<Html<String>, ApiError> {
	let envelope = super::parse_envelope(&body)?;
	let action = state.authenticator.authenticate(&envelope).await?;

	tracing::info!(fid = action.fid, "Re-entering payment flow");

	let frames = &state.config.frames;
	let label = format!(
		"Pay {} USDC",
		format_token_amount(state.config.payment.amount, 6)
	);
	Ok(Html(payment_frame(
		&frames.start_image_url,
		&frames.public_url,
		&label,
	)))
}

/// Handles POST /pay/transaction.
///
/// Authenticates the frame action, then returns the fixed-recipient
/// transfer descriptor. The descriptor never depends on client-asserted
/// data.
pub async fn transaction(
	State(state): State<AppState>,
	body: Bytes,
) -> Result<Json<TransactionDescriptor>, ApiError> {
	let envelope = super::parse_envelope(&body)?;
	let action = state.authenticator.authenticate(&envelope).await?;

	tracing::info!(fid = action.fid, "Building payment transaction descriptor");

	Ok(Json(payment_descriptor(
		state.config.chain.chain_id,
		state.usdc,
		state.payout,
		state.config.payment.amount,
	)))
}

/// Handles POST /pay/verify.
///
/// Authenticates the callback, verifies the reported transaction hash
/// against the chain, and renders the unlocked or retry frame.
pub async fn verify(
	State(state): State<AppState>,
	body: Bytes,
) -> Result<Html<String>, ApiError> {
	let envelope = super::parse_envelope(&body)?;
	let action = state.authenticator.authenticate(&envelope).await?;

	let outcome = super::verify_reported_hash(&state, &action).await?;
	tracing::info!(fid = action.fid, ?outcome, "Payment verification completed");

	let next = select_next_state(Flow::Payment, &outcome, &state.routes());
	Ok(Html(render_next_state(&next, &state.images())))
}
