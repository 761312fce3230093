//! Recipient address resolution.
//!
//! Derives the single Ethereum address that should receive funds for a
//! verified actor. The priority order is total and deterministic:
//! the in-flight transaction signer wins over the first verified profile
//! address, which wins over the custody address.

use crate::IdentityError;
use alloy_primitives::Address;
use framepay_types::VerifiedAction;

/// Selects exactly one recipient address for a verified actor.
///
/// Candidates are tried in priority order and the first one that parses as
/// an address wins. Failing entirely is a user-facing, recoverable
/// condition: the actor should link a wallet to their account.
pub fn resolve_recipient(action: &VerifiedAction) -> Result<Address, IdentityError> {
	let candidates = action
		.transaction_signer
		.iter()
		.chain(action.verified_addresses.first())
		.chain(action.custody_address.iter());

	for candidate in candidates {
		match candidate.parse::<Address>() {
			Ok(address) => return Ok(address),
			Err(e) => {
				tracing::warn!(candidate = %candidate, "Skipping unparseable recipient candidate: {}", e);
			}
		}
	}

	Err(IdentityError::NoRecipientAddress(
		"No Ethereum address found. Please connect a wallet to your Farcaster account."
			.to_string(),
	))
}

#[cfg(test)]
mod tests {
	use super::*;

	const SIGNER: &str = "0x1111111111111111111111111111111111111111";
	const VERIFIED: &str = "0x2222222222222222222222222222222222222222";
	const VERIFIED_SECOND: &str = "0x3333333333333333333333333333333333333333";
	const CUSTODY: &str = "0x4444444444444444444444444444444444444444";

	fn action_with(
		signer: Option<&str>,
		verified: Vec<&str>,
		custody: Option<&str>,
	) -> VerifiedAction {
		VerifiedAction {
			fid: 42,
			transaction_signer: signer.map(str::to_string),
			verified_addresses: verified.into_iter().map(str::to_string).collect(),
			custody_address: custody.map(str::to_string),
			transaction_hash: None,
		}
	}

	#[test]
	fn signer_always_wins() {
		let action = action_with(Some(SIGNER), vec![VERIFIED, VERIFIED_SECOND], Some(CUSTODY));
		let resolved = resolve_recipient(&action).unwrap();
		assert_eq!(resolved, SIGNER.parse::<Address>().unwrap());
	}

	#[test]
	fn first_verified_address_beats_custody() {
		let action = action_with(None, vec![VERIFIED, VERIFIED_SECOND], Some(CUSTODY));
		let resolved = resolve_recipient(&action).unwrap();
		assert_eq!(resolved, VERIFIED.parse::<Address>().unwrap());
	}

	#[test]
	fn custody_is_the_last_resort() {
		let action = action_with(None, vec![], Some(CUSTODY));
		let resolved = resolve_recipient(&action).unwrap();
		assert_eq!(resolved, CUSTODY.parse::<Address>().unwrap());
	}

	#[test]
	fn no_address_is_a_recoverable_rejection() {
		let action = action_with(None, vec![], None);
		let result = resolve_recipient(&action);
		assert!(matches!(result, Err(IdentityError::NoRecipientAddress(_))));
	}

	#[test]
	fn unparseable_signer_falls_through_to_verified() {
		let action = action_with(Some("not-an-address"), vec![VERIFIED], None);
		let resolved = resolve_recipient(&action).unwrap();
		assert_eq!(resolved, VERIFIED.parse::<Address>().unwrap());
	}
}
