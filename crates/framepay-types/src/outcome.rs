//! Chain verification outcomes and eligibility records.

use alloy_primitives::U256;
use serde::{Deserialize, Serialize};

/// Result of classifying an on-chain transaction's receipt.
///
/// Derived per verification call and never cached; every call re-queries
/// the chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerificationOutcome {
	/// A receipt exists; `success` reflects its execution status.
	Confirmed {
		success: bool,
		/// Decoded `Claimed` event when one was found in the receipt's
		/// logs. Best-effort: absence never changes the outcome.
		event: Option<ClaimedEvent>,
	},
	/// No receipt indexed yet. Never treated as a failure.
	Pending,
	/// The action could not be verified at all, e.g. the callback carried
	/// no transaction hash.
	Rejected { reason: String },
}

/// Decoded `Claimed(uint256 indexed fid, address indexed recipient,
/// uint256 amount, uint256 timestamp)` event from a claim receipt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimedEvent {
	#[serde(with = "u256_serde")]
	pub fid: U256,
	pub recipient: String,
	#[serde(with = "u256_serde")]
	pub amount: U256,
	#[serde(with = "u256_serde")]
	pub timestamp: U256,
}

/// Cooldown state read from the claim contract for a single identity.
///
/// Owned entirely by the contract; this side only reads and formats it.
/// Enforcement happens on-chain at claim time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EligibilityRecord {
	/// Unix timestamp of the actor's last successful claim.
	pub last_claim_timestamp: u64,
	/// Total number of successful claims by the actor.
	pub total_claims: u64,
	/// Whether the cooldown has elapsed.
	pub can_claim_now: bool,
	/// Seconds remaining in the cooldown window.
	pub seconds_remaining: u64,
}

/// Serde module for U256 serialization as decimal strings.
pub mod u256_serde {
	use alloy_primitives::U256;
	use serde::{de::Error, Deserialize, Deserializer, Serialize, Serializer};

	pub fn serialize<S>(value: &U256, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		value.to_string().serialize(serializer)
	}

	pub fn deserialize<'de, D>(deserializer: D) -> Result<U256, D::Error>
	where
		D: Deserializer<'de>,
	{
		let s = String::deserialize(deserializer)?;
		U256::from_str_radix(&s, 10).map_err(D::Error::custom)
	}
}
