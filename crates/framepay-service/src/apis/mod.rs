//! Request handlers for the framepay API.
//!
//! Handlers parse envelope bodies from raw bytes so a malformed envelope
//! maps onto the auth-rejected error instead of a framework rejection.

pub mod claim;
pub mod leaderboard;
pub mod pages;
pub mod pay;

use framepay_types::{ApiError, FrameEnvelope, VerificationOutcome, VerifiedAction};

use crate::server::AppState;

/// Parses a frame action envelope from a request body.
pub(crate) fn parse_envelope(body: &[u8]) -> Result<FrameEnvelope, ApiError> {
	serde_json::from_slice(body).map_err(|e| ApiError::AuthRejected {
		message: format!("Malformed frame action envelope: {}", e),
	})
}

/// Verifies the transaction hash the client reported in its action.
///
/// A missing hash is classified as a rejected verification rather than a
/// request error, so the caller still renders a retry frame.
pub(crate) async fn verify_reported_hash(
	state: &AppState,
	action: &VerifiedAction,
) -> Result<VerificationOutcome, ApiError> {
	match action.transaction_hash.as_deref() {
		Some(hash) => Ok(state.verifier.verify(hash).await?),
		None => {
			tracing::warn!(fid = action.fid, "Frame action carried no transaction hash");
			Ok(VerificationOutcome::Rejected {
				reason: "no transaction hash in frame action".to_string(),
			})
		}
	}
}
