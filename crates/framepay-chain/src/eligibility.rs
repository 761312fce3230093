//! Claim eligibility reads.
//!
//! Read-only `getClaimInfo` calls against the claim contract. This side
//! only informs the UI; the contract itself enforces the cooldown at
//! claim time.

use crate::contracts::getClaimInfoCall;
use crate::ChainError;
use alloy_primitives::{Address, U256};
use alloy_provider::{Provider, RootProvider};
use alloy_rpc_types::TransactionRequest;
use alloy_sol_types::SolCall;
use alloy_transport_http::Http;
use framepay_types::EligibilityRecord;
use std::time::Duration;

/// Reads cooldown state for an identity from the claim contract.
pub struct EligibilityChecker {
	provider: RootProvider<Http<reqwest::Client>>,
	contract: Address,
	timeout: Duration,
}

impl EligibilityChecker {
	/// Creates a new checker against the given RPC endpoint and contract.
	pub fn new(
		rpc_url: &str,
		contract: Address,
		timeout_seconds: u64,
	) -> Result<Self, ChainError> {
		let url = rpc_url
			.parse()
			.map_err(|e| ChainError::Endpoint(format!("Invalid RPC URL: {}", e)))?;

		Ok(Self {
			provider: RootProvider::new_http(url),
			contract,
			timeout: Duration::from_secs(timeout_seconds),
		})
	}

	/// Queries `getClaimInfo(fid)` and maps the returned tuple.
	pub async fn claim_info(&self, fid: u64) -> Result<EligibilityRecord, ChainError> {
		let call_data = getClaimInfoCall {
			fid: U256::from(fid),
		}
		.abi_encode();

		let request = TransactionRequest::default()
			.to(self.contract)
			.input(call_data.into());

		let result = tokio::time::timeout(self.timeout, self.provider.call(&request))
			.await
			.map_err(|_| ChainError::Rpc("Eligibility query timed out".to_string()))?
			.map_err(|e| ChainError::Rpc(format!("Failed to call getClaimInfo: {}", e)))?;

		let decoded = getClaimInfoCall::abi_decode_returns(&result, true)
			.map_err(|e| ChainError::Rpc(format!("Invalid getClaimInfo response: {}", e)))?;

		let record = record_from_return(
			decoded.lastClaim,
			decoded.claims,
			decoded.canClaimNow,
			decoded.timeRemaining,
		);
		tracing::debug!(
			fid,
			eligible = record.can_claim_now,
			seconds_remaining = record.seconds_remaining,
			"Read claim info"
		);
		Ok(record)
	}
}

/// Maps the raw contract return values into an [`EligibilityRecord`].
///
/// Word-sized values are saturated into u64; the contract stores
/// timestamps and counters that fit comfortably.
fn record_from_return(
	last_claim: U256,
	claims: U256,
	can_claim_now: bool,
	time_remaining: U256,
) -> EligibilityRecord {
	EligibilityRecord {
		last_claim_timestamp: last_claim.saturating_to::<u64>(),
		total_claims: claims.saturating_to::<u64>(),
		can_claim_now,
		seconds_remaining: time_remaining.saturating_to::<u64>(),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn maps_contract_return_values() {
		let record = record_from_return(
			U256::from(1_700_000_000u64),
			U256::from(3u64),
			false,
			U256::from(90_061u64),
		);
		assert_eq!(record.last_claim_timestamp, 1_700_000_000);
		assert_eq!(record.total_claims, 3);
		assert!(!record.can_claim_now);
		assert_eq!(record.seconds_remaining, 90_061);
	}

	#[test]
	fn oversized_words_saturate() {
		let record = record_from_return(U256::MAX, U256::ZERO, true, U256::ZERO);
		assert_eq!(record.last_claim_timestamp, u64::MAX);
		assert!(record.can_claim_now);
	}
}
