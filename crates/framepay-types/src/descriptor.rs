//! Unsigned transaction descriptor types.
//!
//! A descriptor tells the client wallet exactly what to sign: the target
//! contract, the encoded calldata, and the minimal ABI fragment needed to
//! display the call. Descriptors are built fresh per request and never
//! persisted.

use serde::{Deserialize, Serialize};

/// Wallet RPC method requested for every descriptor.
pub const ETH_SEND_TRANSACTION: &str = "eth_sendTransaction";

/// Unsigned transaction descriptor consumable by a client wallet.
///
/// Serializes to the frame transaction response shape:
/// `{ "chainId": "eip155:8453", "method": "eth_sendTransaction", "params": { .. } }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionDescriptor {
	/// CAIP-2 chain identifier, e.g. `eip155:8453`.
	#[serde(rename = "chainId")]
	pub chain_id: String,
	/// Wallet method, always [`ETH_SEND_TRANSACTION`].
	pub method: String,
	/// Call parameters for the wallet.
	pub params: TransactionParams,
}

/// Call parameters embedded in a [`TransactionDescriptor`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionParams {
	/// Minimal human-readable ABI fragment for the called function.
	pub abi: Vec<String>,
	/// Target contract address, checksummed hex.
	pub to: String,
	/// Hex-encoded calldata with `0x` prefix.
	pub data: String,
	/// Native value in wei as a decimal string. Always `"0"`: value moves
	/// through the encoded stablecoin call, not the transaction itself.
	pub value: String,
}

impl TransactionDescriptor {
	/// Builds a descriptor for the given chain and call parameters.
	pub fn new(chain_id: u64, abi: Vec<String>, to: String, data: String) -> Self {
		Self {
			chain_id: format!("eip155:{}", chain_id),
			method: ETH_SEND_TRANSACTION.to_string(),
			params: TransactionParams {
				abi,
				to,
				data,
				value: "0".to_string(),
			},
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn serializes_to_frame_response_shape() {
		let descriptor = TransactionDescriptor::new(
			8453,
			vec!["function transfer(address to, uint256 amount)".to_string()],
			"0x833589fCD6eDb6E08f4c7C32D4f71b54bda02913".to_string(),
			"0xa9059cbb".to_string(),
		);

		let json = serde_json::to_value(&descriptor).unwrap();
		assert_eq!(json["chainId"], "eip155:8453");
		assert_eq!(json["method"], "eth_sendTransaction");
		assert_eq!(json["params"]["value"], "0");
		assert_eq!(
			json["params"]["to"],
			"0x833589fCD6eDb6E08f4c7C32D4f71b54bda02913"
		);
	}
}
