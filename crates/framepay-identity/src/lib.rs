//! Identity module for the framepay system.
//!
//! This module authenticates inbound frame actions against the
//! social-platform identity provider and derives the Ethereum address that
//! should receive funds for a verified actor. Nothing downstream of this
//! module runs on behalf of an unauthenticated request.

use async_trait::async_trait;
use framepay_types::{ApiError, FrameEnvelope, VerifiedAction};
use thiserror::Error;

pub mod neynar;
pub mod recipient;

pub use neynar::NeynarAuthenticator;
pub use recipient::resolve_recipient;

/// Errors that can occur during identity operations.
#[derive(Debug, Error)]
pub enum IdentityError {
	/// The envelope is missing, malformed, or failed provider validation.
	#[error("Auth rejected: {0}")]
	Rejected(String),
	/// The identity provider could not be reached or timed out.
	#[error("Identity provider unavailable: {0}")]
	Unavailable(String),
	/// No Ethereum address could be derived for the actor.
	#[error("No recipient address: {0}")]
	NoRecipientAddress(String),
}

impl From<IdentityError> for ApiError {
	fn from(err: IdentityError) -> Self {
		match err {
			IdentityError::Rejected(message) => ApiError::AuthRejected { message },
			IdentityError::Unavailable(message) => ApiError::VerifierUnavailable { message },
			IdentityError::NoRecipientAddress(message) => {
				ApiError::NoRecipientAddress { message }
			}
		}
	}
}

/// Trait defining the interface for frame-action authentication.
///
/// Implemented by the identity provider client; the service holds it as a
/// process-wide singleton shared across request handlers.
#[async_trait]
pub trait ActionAuthenticator: Send + Sync {
	/// Validates a signed envelope and extracts the verified actor.
	///
	/// Returns [`IdentityError::Rejected`] for anything the provider does
	/// not vouch for, and [`IdentityError::Unavailable`] when the provider
	/// itself cannot be reached.
	async fn authenticate(&self, envelope: &FrameEnvelope)
		-> Result<VerifiedAction, IdentityError>;
}
