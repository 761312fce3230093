//! API types for the framepay HTTP endpoints.
//!
//! This module defines the structured error taxonomy returned by the API
//! and the JSON response bodies shared between handlers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
	/// Error type/code
	pub error: String,
	/// Human-readable description
	pub message: String,
}

/// Structured API error type with appropriate HTTP status mapping.
///
/// Authentication and configuration failures abort the request with one of
/// these. Chain-verification failures deliberately do NOT map here: they are
/// converted into a renderable retry state instead, because the frame
/// protocol expects a document even on logical failure.
#[derive(Debug)]
pub enum ApiError {
	/// Required server configuration is absent (500). The message names the
	/// missing setting but never exposes secret values.
	ConfigMissing { message: String },
	/// The envelope is missing, malformed, or failed provider-side
	/// validation (400).
	AuthRejected { message: String },
	/// A non-envelope request body failed validation (400).
	InvalidRequest { message: String },
	/// No Ethereum address could be resolved for the actor (400). This is
	/// user-actionable: the actor should link a wallet.
	NoRecipientAddress { message: String },
	/// The chain RPC endpoint or identity provider is unreachable (500).
	VerifierUnavailable { message: String },
}

impl ApiError {
	/// Get the HTTP status code for this error.
	pub fn status_code(&self) -> u16 {
		match self {
			ApiError::ConfigMissing { .. } => 500,
			ApiError::AuthRejected { .. } => 400,
			ApiError::InvalidRequest { .. } => 400,
			ApiError::NoRecipientAddress { .. } => 400,
			ApiError::VerifierUnavailable { .. } => 500,
		}
	}

	/// Convert to ErrorResponse for JSON serialization.
	pub fn to_error_response(&self) -> ErrorResponse {
		let (error, message) = match self {
			ApiError::ConfigMissing { message } => ("config_missing", message),
			ApiError::AuthRejected { message } => ("auth_rejected", message),
			ApiError::InvalidRequest { message } => ("invalid_request", message),
			ApiError::NoRecipientAddress { message } => ("no_recipient_address", message),
			ApiError::VerifierUnavailable { message } => ("verifier_unavailable", message),
		};
		ErrorResponse {
			error: error.to_string(),
			message: message.clone(),
		}
	}
}

impl fmt::Display for ApiError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			ApiError::ConfigMissing { message } => write!(f, "Missing configuration: {}", message),
			ApiError::AuthRejected { message } => write!(f, "Auth rejected: {}", message),
			ApiError::InvalidRequest { message } => write!(f, "Invalid request: {}", message),
			ApiError::NoRecipientAddress { message } => {
				write!(f, "No recipient address: {}", message)
			}
			ApiError::VerifierUnavailable { message } => {
				write!(f, "Verifier unavailable: {}", message)
			}
		}
	}
}

impl std::error::Error for ApiError {}

impl axum::response::IntoResponse for ApiError {
	fn into_response(self) -> axum::response::Response {
		use axum::{http::StatusCode, response::Json};

		let status = match self.status_code() {
			400 => StatusCode::BAD_REQUEST,
			500 => StatusCode::INTERNAL_SERVER_ERROR,
			_ => StatusCode::INTERNAL_SERVER_ERROR,
		};

		let error_response = self.to_error_response();
		(status, Json(error_response)).into_response()
	}
}

/// Response body for the claim eligibility endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EligibilityResponse {
	pub fid: u64,
	pub eligible: bool,
	#[serde(rename = "lastClaimTimestamp")]
	pub last_claim_timestamp: u64,
	#[serde(rename = "totalClaims")]
	pub total_claims: u64,
	#[serde(rename = "timeRemaining")]
	pub time_remaining: u64,
	#[serde(rename = "timeRemainingFormatted")]
	pub time_remaining_formatted: String,
	pub message: String,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn status_codes_follow_taxonomy() {
		let auth = ApiError::AuthRejected {
			message: "missing trustedData".into(),
		};
		let config = ApiError::ConfigMissing {
			message: "claim contract address".into(),
		};
		let recipient = ApiError::NoRecipientAddress {
			message: "no linked wallet".into(),
		};
		let upstream = ApiError::VerifierUnavailable {
			message: "rpc timeout".into(),
		};

		assert_eq!(auth.status_code(), 400);
		assert_eq!(config.status_code(), 500);
		assert_eq!(recipient.status_code(), 400);
		assert_eq!(upstream.status_code(), 500);
	}

	#[test]
	fn eligibility_response_serializes_camel_case_keys() {
		let response = EligibilityResponse {
			fid: 194,
			eligible: false,
			last_claim_timestamp: 1_700_000_000,
			total_claims: 3,
			time_remaining: 90_061,
			time_remaining_formatted: "1h 1m 1s".to_string(),
			message: "Please wait 1h 1m 1s before claiming again.".to_string(),
		};

		let json = serde_json::to_value(&response).unwrap();
		assert_eq!(json["fid"], 194);
		assert_eq!(json["lastClaimTimestamp"], 1_700_000_000);
		assert_eq!(json["totalClaims"], 3);
		assert_eq!(json["timeRemaining"], 90_061);
		assert_eq!(json["timeRemainingFormatted"], "1h 1m 1s");
		assert_eq!(json["eligible"], false);
	}

	#[test]
	fn error_response_carries_code_and_message() {
		let err = ApiError::NoRecipientAddress {
			message: "No Ethereum address found. Please connect a wallet.".into(),
		};
		let body = err.to_error_response();
		assert_eq!(body.error, "no_recipient_address");
		assert!(body.message.contains("connect a wallet"));
	}
}
