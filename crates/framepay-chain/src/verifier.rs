//! Transaction receipt verification.
//!
//! Queries the chain for a transaction's receipt and classifies the
//! outcome. A missing receipt is `Pending`, never a failure; an
//! unreachable endpoint is a distinct error so callers never conflate an
//! outage with a rejected transaction.

use crate::contracts::Claimed;
use crate::ChainError;
use alloy_primitives::{FixedBytes, Log};
use alloy_provider::{Provider, RootProvider};
use alloy_sol_types::SolEvent;
use alloy_transport_http::Http;
use framepay_types::{ClaimedEvent, VerificationOutcome};
use std::time::Duration;

/// Receipt-based transaction verifier.
///
/// Holds a reusable RPC provider created once per process; every
/// verification call re-queries the chain, nothing is cached.
pub struct ChainVerifier {
	provider: RootProvider<Http<reqwest::Client>>,
	timeout: Duration,
}

impl ChainVerifier {
	/// Creates a new verifier against the given RPC endpoint.
	pub fn new(rpc_url: &str, timeout_seconds: u64) -> Result<Self, ChainError> {
		let url = rpc_url
			.parse()
			.map_err(|e| ChainError::Endpoint(format!("Invalid RPC URL: {}", e)))?;

		Ok(Self {
			provider: RootProvider::new_http(url),
			timeout: Duration::from_secs(timeout_seconds),
		})
	}

	/// Fetches and classifies the receipt for a transaction hash.
	///
	/// An unparseable hash verifies as `Rejected` rather than erroring:
	/// the client supplied it, so it renders as a retry state.
	pub async fn verify(&self, tx_hash: &str) -> Result<VerificationOutcome, ChainError> {
		let hash: FixedBytes<32> = match tx_hash.parse() {
			Ok(hash) => hash,
			Err(e) => {
				return Ok(VerificationOutcome::Rejected {
					reason: format!("Invalid transaction hash: {}", e),
				})
			}
		};

		let receipt = tokio::time::timeout(self.timeout, self.provider.get_transaction_receipt(hash))
			.await
			.map_err(|_| ChainError::Rpc("Receipt query timed out".to_string()))?
			.map_err(|e| ChainError::Rpc(format!("Failed to get receipt: {}", e)))?;

		let outcome = match receipt {
			None => classify(None, &[]),
			Some(receipt) => {
				let logs: Vec<Log> = receipt
					.inner
					.logs()
					.iter()
					.map(|log| log.inner.clone())
					.collect();
				classify(Some(receipt.status()), &logs)
			}
		};

		tracing::info!(tx_hash = %tx_hash, outcome = outcome_tag(&outcome), "Verified transaction");
		Ok(outcome)
	}
}

/// Classifies a receipt lookup result into a verification outcome.
///
/// `status: None` means no receipt was found (not yet mined). Log decoding
/// is best-effort only: a receipt with a success status is
/// `Confirmed { success: true }` whether or not a `Claimed` event decodes.
pub fn classify(status: Option<bool>, logs: &[Log]) -> VerificationOutcome {
	match status {
		None => VerificationOutcome::Pending,
		Some(false) => VerificationOutcome::Confirmed {
			success: false,
			event: None,
		},
		Some(true) => VerificationOutcome::Confirmed {
			success: true,
			event: decode_claimed_event(logs),
		},
	}
}

/// Locates and decodes a `Claimed` event in a receipt's log list.
///
/// Returns `None` when no log decodes; failures are logged and never
/// escalate into the verification result.
fn decode_claimed_event(logs: &[Log]) -> Option<ClaimedEvent> {
	for log in logs {
		match Claimed::decode_log_data(&log.data, true) {
			Ok(event) => {
				tracing::info!(
					fid = %event.fid,
					recipient = %event.recipient,
					amount = %event.amount,
					"Decoded Claimed event"
				);
				return Some(ClaimedEvent {
					fid: event.fid,
					recipient: event.recipient.to_string(),
					amount: event.amount,
					timestamp: event.timestamp,
				});
			}
			Err(e) => {
				tracing::debug!("Log did not decode as Claimed event: {}", e);
			}
		}
	}
	None
}

fn outcome_tag(outcome: &VerificationOutcome) -> &'static str {
	match outcome {
		VerificationOutcome::Confirmed { success: true, .. } => "confirmed_success",
		VerificationOutcome::Confirmed { success: false, .. } => "confirmed_failure",
		VerificationOutcome::Pending => "pending",
		VerificationOutcome::Rejected { .. } => "rejected",
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use alloy_primitives::{Address, Bytes, LogData, U256};

	fn claimed_log() -> Log {
		let event = Claimed {
			fid: U256::from(194),
			recipient: "0x3333333333333333333333333333333333333333"
				.parse::<Address>()
				.unwrap(),
			amount: U256::from(50_000u64),
			timestamp: U256::from(1_700_000_000u64),
		};
		Log {
			address: "0x2222222222222222222222222222222222222222"
				.parse()
				.unwrap(),
			data: event.encode_log_data(),
		}
	}

	fn unrelated_log() -> Log {
		Log {
			address: Address::ZERO,
			data: LogData::new_unchecked(vec![FixedBytes::ZERO], Bytes::new()),
		}
	}

	#[test]
	fn missing_receipt_is_pending() {
		assert_eq!(classify(None, &[]), VerificationOutcome::Pending);
	}

	#[test]
	fn failed_receipt_is_confirmed_failure() {
		assert_eq!(
			classify(Some(false), &[claimed_log()]),
			VerificationOutcome::Confirmed {
				success: false,
				event: None
			}
		);
	}

	#[test]
	fn successful_receipt_decodes_claimed_event() {
		let outcome = classify(Some(true), &[unrelated_log(), claimed_log()]);
		match outcome {
			VerificationOutcome::Confirmed {
				success: true,
				event: Some(event),
			} => {
				assert_eq!(event.fid, U256::from(194));
				assert_eq!(event.amount, U256::from(50_000u64));
			}
			other => panic!("unexpected outcome: {:?}", other),
		}
	}

	#[test]
	fn event_decode_failure_never_downgrades_success() {
		let outcome = classify(Some(true), &[unrelated_log()]);
		assert_eq!(
			outcome,
			VerificationOutcome::Confirmed {
				success: true,
				event: None
			}
		);
	}

	#[tokio::test]
	async fn invalid_hash_verifies_as_rejected() {
		let verifier = ChainVerifier::new("http://127.0.0.1:1", 1).unwrap();
		let outcome = verifier.verify("not-a-hash").await.unwrap();
		assert!(matches!(outcome, VerificationOutcome::Rejected { .. }));
	}
}
