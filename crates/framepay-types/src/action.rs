//! Frame action envelope and verified actor types.
//!
//! An inbound frame action carries an opaque signed payload asserting
//! "this identity performed this action". The envelope is untrusted until
//! the identity provider has validated it; only then does the request gain
//! a [`VerifiedAction`].

use serde::{Deserialize, Serialize};

/// Raw frame action envelope as posted by the Farcaster client.
///
/// Only `trustedData.messageBytes` is forwarded to the identity provider.
/// The `untrustedData` block is client-asserted and never used for
/// authentication decisions.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FrameEnvelope {
	/// Client-asserted action data. Ignored by the verification flow.
	#[serde(rename = "untrustedData", default, skip_serializing_if = "Option::is_none")]
	pub untrusted_data: Option<serde_json::Value>,
	/// Signed message payload validated server-side.
	#[serde(rename = "trustedData")]
	pub trusted_data: TrustedData,
}

/// The signed portion of a frame action envelope.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TrustedData {
	/// Hex-encoded signed message bytes.
	#[serde(rename = "messageBytes")]
	pub message_bytes: String,
}

/// Actor identity produced by a successful envelope validation.
///
/// Built once per inbound request and immutable for the request's lifetime.
/// A transaction descriptor is never constructed without one of these in
/// hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifiedAction {
	/// Numeric Farcaster identity of the actor.
	pub fid: u64,
	/// Address that signed the in-flight wallet transaction, when the
	/// action is a transaction-carrying callback.
	pub transaction_signer: Option<String>,
	/// Addresses the actor has verified on their profile, in profile order.
	pub verified_addresses: Vec<String>,
	/// Custody address of the actor's Farcaster account.
	pub custody_address: Option<String>,
	/// Hash of the transaction the client reports having submitted.
	pub transaction_hash: Option<String>,
}

impl VerifiedAction {
	/// Creates a minimal verified action carrying only an identity.
	pub fn new(fid: u64) -> Self {
		Self {
			fid,
			transaction_signer: None,
			verified_addresses: Vec::new(),
			custody_address: None,
			transaction_hash: None,
		}
	}
}
