//! Chain interaction module for the framepay system.
//!
//! This module owns every contact point with the EVM network: encoding
//! unsigned transaction descriptors for client wallets, classifying
//! transaction receipts, and reading claim-cooldown state from the claim
//! contract. Descriptor encoding is pure; the verifier and eligibility
//! checker hold a reusable RPC provider created once per process.

use framepay_types::ApiError;
use thiserror::Error;

pub mod descriptor;
pub mod eligibility;
pub mod verifier;

pub use descriptor::{claim_descriptor, payment_descriptor};
pub use eligibility::EligibilityChecker;
pub use verifier::ChainVerifier;

/// Errors that can occur during chain operations.
#[derive(Debug, Error)]
pub enum ChainError {
	/// The RPC endpoint could not be reached, timed out, or returned an
	/// unusable response.
	#[error("RPC error: {0}")]
	Rpc(String),
	/// The configured RPC endpoint URL is invalid.
	#[error("Invalid RPC endpoint: {0}")]
	Endpoint(String),
}

impl From<ChainError> for ApiError {
	fn from(err: ChainError) -> Self {
		ApiError::VerifierUnavailable {
			message: err.to_string(),
		}
	}
}

/// Contract bindings used across the module.
///
/// Only the minimal fragments the flows need: the stablecoin transfer for
/// payment, and the claim function plus its read-side views and event.
pub mod contracts {
	use alloy_sol_types::sol;

	sol! {
		/// Stablecoin payment transfer.
		function transfer(address to, uint256 amount);

		/// Reward claim for a Farcaster identity.
		function claim(uint256 fid, address recipient);

		/// Cooldown state view on the claim contract.
		function getClaimInfo(uint256 fid) external view returns (uint256 lastClaim, uint256 claims, bool canClaimNow, uint256 timeRemaining);

		/// Emitted by the claim contract on a successful claim.
		event Claimed(uint256 indexed fid, address indexed recipient, uint256 amount, uint256 timestamp);
	}
}
