//! Neynar-backed frame-action authenticator.
//!
//! Forwards the signed message bytes of an envelope to the Neynar
//! `frame/validate` endpoint and maps the validated action into a
//! [`VerifiedAction`]. The underlying HTTP client is created once with an
//! explicit timeout and reused across requests.

use crate::{ActionAuthenticator, IdentityError};
use async_trait::async_trait;
use framepay_types::{with_0x_prefix, FrameEnvelope, SecretString, VerifiedAction};
use serde::Deserialize;
use std::time::Duration;

/// Path of the provider's frame validation endpoint.
const VALIDATE_PATH: &str = "/v2/farcaster/frame/validate";

/// Identity provider client validating frame actions via Neynar.
pub struct NeynarAuthenticator {
	/// Reusable HTTP client with connection pooling and a request timeout.
	client: reqwest::Client,
	/// Base URL of the provider API.
	api_url: String,
	/// Provider API key, sent as the `api_key` header.
	api_key: SecretString,
}

impl NeynarAuthenticator {
	/// Creates a new authenticator for the given provider endpoint.
	pub fn new(
		api_url: String,
		api_key: SecretString,
		timeout_seconds: u64,
	) -> Result<Self, IdentityError> {
		let client = reqwest::Client::builder()
			.timeout(Duration::from_secs(timeout_seconds))
			.build()
			.map_err(|e| IdentityError::Unavailable(format!("Failed to build client: {}", e)))?;

		Ok(Self {
			client,
			api_url: api_url.trim_end_matches('/').to_string(),
			api_key,
		})
	}
}

/// Provider response for a frame validation call.
#[derive(Debug, Deserialize)]
struct ValidateResponse {
	valid: bool,
	action: Option<ValidatedAction>,
}

#[derive(Debug, Deserialize)]
struct ValidatedAction {
	interactor: Interactor,
	/// Address that signed the in-flight wallet transaction, present on
	/// transaction-carrying callbacks.
	address: Option<String>,
	transaction: Option<ActionTransaction>,
}

#[derive(Debug, Deserialize)]
struct Interactor {
	fid: u64,
	custody_address: Option<String>,
	verified_addresses: Option<VerifiedAddresses>,
}

#[derive(Debug, Deserialize)]
struct VerifiedAddresses {
	#[serde(default)]
	eth_addresses: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct ActionTransaction {
	hash: Option<String>,
}

impl From<ValidatedAction> for VerifiedAction {
	fn from(action: ValidatedAction) -> Self {
		VerifiedAction {
			fid: action.interactor.fid,
			transaction_signer: action.address,
			verified_addresses: action
				.interactor
				.verified_addresses
				.map(|v| v.eth_addresses)
				.unwrap_or_default(),
			custody_address: action.interactor.custody_address,
			transaction_hash: action.transaction.and_then(|t| t.hash),
		}
	}
}

#[async_trait]
impl ActionAuthenticator for NeynarAuthenticator {
	async fn authenticate(
		&self,
		envelope: &FrameEnvelope,
	) -> Result<VerifiedAction, IdentityError> {
		let message_bytes = envelope.trusted_data.message_bytes.trim();
		if message_bytes.is_empty() {
			return Err(IdentityError::Rejected(
				"Invalid request: missing trustedData".to_string(),
			));
		}

		let url = format!("{}{}", self.api_url, VALIDATE_PATH);
		let body = serde_json::json!({
			"message_bytes_in_hex": with_0x_prefix(message_bytes),
		});

		let response = self
			.client
			.post(&url)
			.header("api_key", self.api_key.expose_secret())
			.json(&body)
			.send()
			.await
			.map_err(|e| {
				IdentityError::Unavailable(format!("Provider request failed: {}", e))
			})?;

		let status = response.status();
		if status.is_server_error() {
			return Err(IdentityError::Unavailable(format!(
				"Provider returned {}",
				status
			)));
		}
		if !status.is_success() {
			return Err(IdentityError::Rejected(format!(
				"Provider rejected envelope with {}",
				status
			)));
		}

		let validation: ValidateResponse = response.json().await.map_err(|e| {
			IdentityError::Unavailable(format!("Invalid provider response: {}", e))
		})?;

		if !validation.valid {
			return Err(IdentityError::Rejected(
				"Frame action failed validation".to_string(),
			));
		}

		let action = validation.action.ok_or_else(|| {
			IdentityError::Rejected("Validation response missing action".to_string())
		})?;

		let verified: VerifiedAction = action.into();
		tracing::debug!(fid = verified.fid, "Validated frame action");
		Ok(verified)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn maps_validated_action_fields() {
		let action = ValidatedAction {
			interactor: Interactor {
				fid: 194,
				custody_address: Some("0x00000000000000000000000000000000000000aa".into()),
				verified_addresses: Some(VerifiedAddresses {
					eth_addresses: vec!["0x00000000000000000000000000000000000000bb".into()],
				}),
			},
			address: Some("0x00000000000000000000000000000000000000cc".into()),
			transaction: Some(ActionTransaction {
				hash: Some("0xdeadbeef".into()),
			}),
		};

		let verified: VerifiedAction = action.into();
		assert_eq!(verified.fid, 194);
		assert_eq!(
			verified.transaction_signer.as_deref(),
			Some("0x00000000000000000000000000000000000000cc")
		);
		assert_eq!(verified.verified_addresses.len(), 1);
		assert_eq!(verified.transaction_hash.as_deref(), Some("0xdeadbeef"));
	}

	#[test]
	fn missing_profile_addresses_map_to_empty() {
		let action = ValidatedAction {
			interactor: Interactor {
				fid: 7,
				custody_address: None,
				verified_addresses: None,
			},
			address: None,
			transaction: None,
		};

		let verified: VerifiedAction = action.into();
		assert!(verified.verified_addresses.is_empty());
		assert!(verified.custody_address.is_none());
		assert!(verified.transaction_hash.is_none());
	}

	#[tokio::test]
	async fn empty_message_bytes_rejected_without_network() {
		// Points at an unroutable address; the empty envelope must be
		// rejected before any request is attempted.
		let auth = NeynarAuthenticator::new(
			"http://127.0.0.1:1".to_string(),
			SecretString::from("test"),
			1,
		)
		.unwrap();

		let envelope = FrameEnvelope {
			untrusted_data: None,
			trusted_data: framepay_types::TrustedData {
				message_bytes: "  ".to_string(),
			},
		};

		let result = auth.authenticate(&envelope).await;
		assert!(matches!(result, Err(IdentityError::Rejected(_))));
	}
}
