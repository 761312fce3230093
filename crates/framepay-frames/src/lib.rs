//! Frame state selection and rendering for the framepay system.
//!
//! The selector is the core's only true state machine: a pure total
//! mapping from a verification outcome to the next UI state. The
//! templating side holds exactly one canonical definition per named frame;
//! handlers never assemble markup themselves.

use framepay_types::VerificationOutcome;

pub mod templates;

pub use templates::{
	claim_cooldown_frame, claim_frame, embed_page, payment_frame, redirect_frame, render_next_state,
	retry_frame, FrameImages,
};

/// Which of the two flows a verification belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
	/// Pay-to-play stablecoin transfer.
	Payment,
	/// Reward claim.
	Claim,
}

/// The closed set of next UI states a verification can produce.
///
/// All state lives in the single request/response exchange; nothing here
/// is persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NextState {
	/// Payment verified: offer the game link.
	Unlocked { target_url: String },
	/// Claim verified: offer to play again.
	ClaimSucceeded { target_url: String },
	/// Verification did not succeed: offer a retry post back into the
	/// flow's entry frame. Pending and confirmed-failure land here
	/// identically; there is no polling loop, the user resubmits.
	RetryPrompt { flow: Flow, post_url: String },
}

/// Public URLs the selector needs to populate states with.
#[derive(Debug, Clone)]
pub struct FrameRoutes {
	/// Public base URL of this service.
	pub public_url: String,
	/// Downstream game URL.
	pub game_url: String,
}

impl FrameRoutes {
	/// Retry post target for a flow.
	fn retry_url(&self, flow: Flow) -> String {
		match flow {
			Flow::Payment => format!("{}/pay/frame", self.public_url),
			Flow::Claim => format!("{}/claim/frame", self.public_url),
		}
	}
}

/// Maps a verification outcome to the next UI state.
///
/// Pure and total: every outcome variant maps to exactly one state.
pub fn select_next_state(
	flow: Flow,
	outcome: &VerificationOutcome,
	routes: &FrameRoutes,
) -> NextState {
	match outcome {
		VerificationOutcome::Confirmed { success: true, .. } => match flow {
			Flow::Payment => NextState::Unlocked {
				target_url: routes.game_url.clone(),
			},
			Flow::Claim => NextState::ClaimSucceeded {
				target_url: routes.game_url.clone(),
			},
		},
		VerificationOutcome::Confirmed { success: false, .. }
		| VerificationOutcome::Pending
		| VerificationOutcome::Rejected { .. } => NextState::RetryPrompt {
			flow,
			post_url: routes.retry_url(flow),
		},
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn routes() -> FrameRoutes {
		FrameRoutes {
			public_url: "https://frames.example".to_string(),
			game_url: "https://game.example".to_string(),
		}
	}

	fn confirmed(success: bool) -> VerificationOutcome {
		VerificationOutcome::Confirmed {
			success,
			event: None,
		}
	}

	#[test]
	fn payment_success_unlocks_the_game() {
		let state = select_next_state(Flow::Payment, &confirmed(true), &routes());
		assert_eq!(
			state,
			NextState::Unlocked {
				target_url: "https://game.example".to_string()
			}
		);
	}

	#[test]
	fn claim_success_offers_replay() {
		let state = select_next_state(Flow::Claim, &confirmed(true), &routes());
		assert_eq!(
			state,
			NextState::ClaimSucceeded {
				target_url: "https://game.example".to_string()
			}
		);
	}

	#[test]
	fn pending_and_failure_produce_identical_retry_states() {
		let from_pending =
			select_next_state(Flow::Payment, &VerificationOutcome::Pending, &routes());
		let from_failure = select_next_state(Flow::Payment, &confirmed(false), &routes());
		let from_rejection = select_next_state(
			Flow::Payment,
			&VerificationOutcome::Rejected {
				reason: "missing transaction hash".to_string(),
			},
			&routes(),
		);

		assert_eq!(from_pending, from_failure);
		assert_eq!(from_pending, from_rejection);
		assert_eq!(
			from_pending,
			NextState::RetryPrompt {
				flow: Flow::Payment,
				post_url: "https://frames.example/pay/frame".to_string()
			}
		);
	}

	#[test]
	fn claim_retry_posts_back_into_the_claim_frame() {
		let state = select_next_state(Flow::Claim, &VerificationOutcome::Pending, &routes());
		assert_eq!(
			state,
			NextState::RetryPrompt {
				flow: Flow::Claim,
				post_url: "https://frames.example/claim/frame".to_string()
			}
		);
	}
}
