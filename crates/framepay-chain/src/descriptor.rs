//! Unsigned transaction descriptor construction.
//!
//! Pure encoding: no network I/O, and identical inputs always yield
//! byte-identical calldata. Callers must hold a verified action before
//! asking for a descriptor; nothing here checks that, the handlers do.

use crate::contracts::{claimCall, transferCall};
use alloy_primitives::{Address, U256};
use alloy_sol_types::SolCall;
use framepay_types::{with_0x_prefix, TransactionDescriptor};

/// Human-readable ABI fragment for the payment transfer.
pub const TRANSFER_ABI: &str = "function transfer(address to, uint256 amount)";

/// Human-readable ABI fragment for the reward claim.
pub const CLAIM_ABI: &str = "function claim(uint256 fid, address recipient)";

/// Builds the pay-to-play descriptor: a stablecoin `transfer` of the
/// configured amount to the configured payout wallet.
pub fn payment_descriptor(
	chain_id: u64,
	token: Address,
	payout: Address,
	amount: u64,
) -> TransactionDescriptor {
	let call = transferCall {
		to: payout,
		amount: U256::from(amount),
	};
	let data = with_0x_prefix(&hex::encode(call.abi_encode()));

	TransactionDescriptor::new(
		chain_id,
		vec![TRANSFER_ABI.to_string()],
		token.to_string(),
		data,
	)
}

/// Builds the reward-claim descriptor: `claim(fid, recipient)` on the
/// claim contract.
pub fn claim_descriptor(
	chain_id: u64,
	contract: Address,
	fid: u64,
	recipient: Address,
) -> TransactionDescriptor {
	let call = claimCall {
		fid: U256::from(fid),
		recipient,
	};
	let data = with_0x_prefix(&hex::encode(call.abi_encode()));

	TransactionDescriptor::new(
		chain_id,
		vec![CLAIM_ABI.to_string()],
		contract.to_string(),
		data,
	)
}

#[cfg(test)]
mod tests {
	use super::*;

	const USDC: &str = "0x833589fCD6eDb6E08f4c7C32D4f71b54bda02913";
	const PAYOUT: &str = "0x1111111111111111111111111111111111111111";
	const CLAIMS: &str = "0x2222222222222222222222222222222222222222";
	const RECIPIENT: &str = "0x3333333333333333333333333333333333333333";

	fn addr(s: &str) -> Address {
		s.parse().unwrap()
	}

	#[test]
	fn payment_descriptor_is_deterministic() {
		let a = payment_descriptor(8453, addr(USDC), addr(PAYOUT), 250_000);
		let b = payment_descriptor(8453, addr(USDC), addr(PAYOUT), 250_000);
		assert_eq!(a, b);
		assert_eq!(a.chain_id, "eip155:8453");
		assert_eq!(a.params.value, "0");
		// transfer(address,uint256) selector
		assert!(a.params.data.starts_with("0xa9059cbb"));
	}

	#[test]
	fn payment_calldata_depends_on_every_input() {
		let base = payment_descriptor(8453, addr(USDC), addr(PAYOUT), 250_000);
		let other_amount = payment_descriptor(8453, addr(USDC), addr(PAYOUT), 250_001);
		let other_payout = payment_descriptor(8453, addr(USDC), addr(RECIPIENT), 250_000);

		assert_ne!(base.params.data, other_amount.params.data);
		assert_ne!(base.params.data, other_payout.params.data);
	}

	#[test]
	fn claim_descriptor_is_deterministic() {
		let a = claim_descriptor(8453, addr(CLAIMS), 194, addr(RECIPIENT));
		let b = claim_descriptor(8453, addr(CLAIMS), 194, addr(RECIPIENT));
		assert_eq!(a, b);
		assert_eq!(a.params.to, addr(CLAIMS).to_string());
		assert_eq!(a.params.abi, vec![CLAIM_ABI.to_string()]);
	}

	#[test]
	fn claim_calldata_depends_on_fid_and_recipient() {
		let base = claim_descriptor(8453, addr(CLAIMS), 194, addr(RECIPIENT));
		let other_fid = claim_descriptor(8453, addr(CLAIMS), 195, addr(RECIPIENT));
		let other_recipient = claim_descriptor(8453, addr(CLAIMS), 194, addr(PAYOUT));

		assert_ne!(base.params.data, other_fid.params.data);
		assert_ne!(base.params.data, other_recipient.params.data);
	}
}
