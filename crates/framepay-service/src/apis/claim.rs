//! Claim-reward flow handlers.
//!
//! Every claim endpoint requires the optional `[claim]` configuration
//! section; without it the endpoints answer with a missing-configuration
//! error instead of guessing a contract address.

use axum::{
	body::Bytes,
	extract::State,
	response::{Html, Json},
};
use framepay_chain::{claim_descriptor, EligibilityChecker};
use framepay_config::ClaimConfig;
use framepay_frames::{
	claim_cooldown_frame, claim_frame, render_next_state, select_next_state, Flow,
};
use framepay_identity::resolve_recipient;
use framepay_types::{
	format_cooldown, format_token_amount, ApiError, EligibilityResponse, TransactionDescriptor,
};
use std::sync::Arc;

use crate::server::AppState;

/// The claim configuration, or the missing-configuration error.
fn claim_config(state: &AppState) -> Result<&ClaimConfig, ApiError> {
	state.config.claim.as_ref().ok_or_else(|| ApiError::ConfigMissing {
		message: "claim flow is not configured".to_string(),
	})
}

/// The eligibility checker, or the missing-configuration error.
fn eligibility_checker(state: &AppState) -> Result<&Arc<EligibilityChecker>, ApiError> {
	state.eligibility.as_ref().ok_or_else(|| ApiError::ConfigMissing {
		message: "claim flow is not configured".to_string(),
	})
}

/// Button label naming the reward amount.
fn claim_button_label(claim: &ClaimConfig) -> String {
	format!("Claim {} USDC", format_token_amount(claim.amount, 6))
}

/// Handles POST /claim/frame.
///
/// Authenticates the action, checks the actor's cooldown on-chain, and
/// renders either the claim transaction frame or the cooldown frame.
pub async fn frame_action(
	State(state): State<AppState>,
	body: Bytes,
) -> Result<Html<String>, ApiError> {
	let envelope = super::parse_envelope(&body)?;
	let action = state.authenticator.authenticate(&envelope).await?;

	let claim = claim_config(&state)?;
	let record = eligibility_checker(&state)?.claim_info(action.fid).await?;

	let frames = &state.config.frames;
	if record.can_claim_now {
		tracing::info!(fid = action.fid, "Rendering claim transaction frame");
		Ok(Html(claim_frame(
			&frames.claim_image_url,
			&frames.public_url,
			&claim_button_label(claim),
		)))
	} else {
		let wait = format_cooldown(record.seconds_remaining);
		tracing::info!(fid = action.fid, %wait, "Actor is in the claim cooldown window");
		Ok(Html(claim_cooldown_frame(
			&frames.claim_image_url,
			&frames.public_url,
			&wait,
		)))
	}
}

/// Handles POST /claim/check-eligibility.
///
/// Authenticates the action and returns the actor's eligibility record
/// as JSON, with a human-readable wait message.
pub async fn check_eligibility(
	State(state): State<AppState>,
	body: Bytes,
) -> Result<Json<EligibilityResponse>, ApiError> {
	let envelope = super::parse_envelope(&body)?;
	let action = state.authenticator.authenticate(&envelope).await?;

	let record = eligibility_checker(&state)?.claim_info(action.fid).await?;

	let formatted = format_cooldown(record.seconds_remaining);
	let message = if record.can_claim_now {
		"You can claim now!".to_string()
	} else {
		format!("Please wait {} before claiming again.", formatted)
	};

	Ok(Json(EligibilityResponse {
		fid: action.fid,
		eligible: record.can_claim_now,
		last_claim_timestamp: record.last_claim_timestamp,
		total_claims: record.total_claims,
		time_remaining: record.seconds_remaining,
		time_remaining_formatted: formatted,
		message,
	}))
}

/// Handles POST /claim/transaction.
///
/// Authenticates the action, resolves the reward recipient from the
/// verified identity, and returns the claim call descriptor.
pub async fn transaction(
	State(state): State<AppState>,
	body: Bytes,
) -> Result<Json<TransactionDescriptor>, ApiError> {
	let envelope = super::parse_envelope(&body)?;
	let action = state.authenticator.authenticate(&envelope).await?;

	claim_config(&state)?;
	let contract = state.claim_contract.ok_or_else(|| ApiError::ConfigMissing {
		message: "claim flow is not configured".to_string(),
	})?;
	let recipient = resolve_recipient(&action)?;

	tracing::info!(
		fid = action.fid,
		%recipient,
		"Building claim transaction descriptor"
	);

	Ok(Json(claim_descriptor(
		state.config.chain.chain_id,
		contract,
		action.fid,
		recipient,
	)))
}

/// Handles POST /claim/verify.
///
/// Authenticates the callback, verifies the reported transaction hash,
/// and renders the claim-succeeded or retry frame.
pub async fn verify(
	State(state): State<AppState>,
	body: Bytes,
) -> Result<Html<String>, ApiError> {
	let envelope = super::parse_envelope(&body)?;
	let action = state.authenticator.authenticate(&envelope).await?;

	let outcome = super::verify_reported_hash(&state, &action).await?;
	tracing::info!(fid = action.fid, ?outcome, "Claim verification completed");

	let next = select_next_state(Flow::Claim, &outcome, &state.routes());
	Ok(Html(render_next_state(&next, &state.images())))
}
