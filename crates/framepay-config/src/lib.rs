//! Configuration module for the framepay system.
//!
//! This module provides structures and utilities for managing service
//! configuration. It supports loading configuration from TOML files with
//! `${ENV_VAR}` / `${ENV_VAR:-default}` expansion and validates that all
//! security-relevant values are properly set before the service starts.
//! Missing credentials or contract addresses fail loudly; there are no
//! silent defaults for them.

use alloy_primitives::Address;
use framepay_types::SecretString;
use regex::Regex;
use serde::Deserialize;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

/// Errors that can occur during configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
	/// Error that occurs during file I/O operations.
	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),
	/// Error that occurs when parsing TOML configuration.
	#[error("Configuration error: {0}")]
	Parse(String),
	/// Error that occurs when configuration validation fails.
	#[error("Validation error: {0}")]
	Validation(String),
}

impl From<toml::de::Error> for ConfigError {
	fn from(err: toml::de::Error) -> Self {
		// Extract just the message without the huge input dump
		let message = err.message().to_string();
		ConfigError::Parse(message)
	}
}

/// Main configuration structure for the framepay service.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
	/// HTTP server bind configuration.
	#[serde(default)]
	pub server: ServerConfig,
	/// Identity provider (frame-action validation) configuration.
	pub identity: IdentityConfig,
	/// Chain RPC and token contract configuration.
	pub chain: ChainConfig,
	/// Payment (pay-to-play) configuration.
	pub payment: PaymentConfig,
	/// Claim (reward) configuration. Claim endpoints answer 500 with a
	/// missing-configuration error when this section is absent.
	pub claim: Option<ClaimConfig>,
	/// Frame rendering configuration: public URLs and imagery.
	pub frames: FramesConfig,
}

/// HTTP server bind configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
	/// Host address to bind the server to.
	#[serde(default = "default_host")]
	pub host: String,
	/// Port to bind the server to.
	#[serde(default = "default_port")]
	pub port: u16,
}

impl Default for ServerConfig {
	fn default() -> Self {
		Self {
			host: default_host(),
			port: default_port(),
		}
	}
}

fn default_host() -> String {
	"127.0.0.1".to_string()
}

fn default_port() -> u16 {
	3000
}

/// Identity provider configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct IdentityConfig {
	/// Base URL of the identity provider API.
	#[serde(default = "default_identity_api_url")]
	pub api_url: String,
	/// Provider API key. Required; redacted in all output.
	pub api_key: SecretString,
	/// Request timeout in seconds for provider calls.
	#[serde(default = "default_identity_timeout")]
	pub timeout_seconds: u64,
}

fn default_identity_api_url() -> String {
	"https://api.neynar.com".to_string()
}

fn default_identity_timeout() -> u64 {
	10
}

/// Chain RPC and token configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ChainConfig {
	/// HTTP RPC endpoint URL for the supported network.
	pub rpc_url: String,
	/// Numeric chain ID of the single supported network.
	#[serde(default = "default_chain_id")]
	pub chain_id: u64,
	/// Stablecoin (USDC) contract address used for the payment transfer.
	pub usdc_address: String,
	/// Request timeout in seconds for RPC calls.
	#[serde(default = "default_rpc_timeout")]
	pub timeout_seconds: u64,
}

fn default_chain_id() -> u64 {
	8453 // Base mainnet
}

fn default_rpc_timeout() -> u64 {
	10
}

/// Payment flow configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct PaymentConfig {
	/// Wallet address receiving the pay-to-play transfer.
	pub payout_address: String,
	/// Payment amount in raw token units (6 decimals for USDC).
	#[serde(default = "default_payment_amount")]
	pub amount: u64,
}

fn default_payment_amount() -> u64 {
	250_000 // 0.25 USDC
}

/// Claim flow configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ClaimConfig {
	/// Claim contract address.
	pub contract_address: String,
	/// Reward amount in raw token units, for display.
	#[serde(default = "default_claim_amount")]
	pub amount: u64,
}

fn default_claim_amount() -> u64 {
	50_000 // 0.05 USDC
}

/// Frame rendering configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct FramesConfig {
	/// Public base URL of this service, used for frame post targets.
	pub public_url: String,
	/// Downstream game URL opened on unlock and replay.
	pub game_url: String,
	/// Image shown on the entry and payment frames.
	pub start_image_url: String,
	/// Image shown after a verified payment.
	pub success_image_url: String,
	/// Image shown on the payment retry frame.
	pub failed_image_url: String,
	/// Image shown on the claim frame.
	pub claim_image_url: String,
	/// Image shown after a verified claim. Falls back to the payment
	/// success image when unset.
	pub claim_success_image_url: Option<String>,
	/// Image shown on the claim retry frame. Falls back to the payment
	/// failed image when unset.
	pub claim_failed_image_url: Option<String>,
}

impl FramesConfig {
	/// Image for the claim-success frame, with fallback.
	pub fn claim_success_image(&self) -> &str {
		self.claim_success_image_url
			.as_deref()
			.unwrap_or(&self.success_image_url)
	}

	/// Image for the claim-retry frame, with fallback.
	pub fn claim_failed_image(&self) -> &str {
		self.claim_failed_image_url
			.as_deref()
			.unwrap_or(&self.failed_image_url)
	}
}

impl Config {
	/// Loads configuration from a TOML file, resolving environment
	/// variables before parsing.
	pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
		let content = std::fs::read_to_string(path)?;
		content.parse()
	}

	/// Validates the configuration after loading.
	///
	/// Address-shaped values must parse; required strings must be present.
	pub fn validate(&self) -> Result<(), ConfigError> {
		if self.identity.api_key.is_empty() {
			return Err(ConfigError::Validation(
				"identity.api_key must not be empty".to_string(),
			));
		}
		require_non_empty("chain.rpc_url", &self.chain.rpc_url)?;
		require_address("chain.usdc_address", &self.chain.usdc_address)?;
		require_address("payment.payout_address", &self.payment.payout_address)?;
		if let Some(claim) = &self.claim {
			require_address("claim.contract_address", &claim.contract_address)?;
		}
		require_non_empty("frames.public_url", &self.frames.public_url)?;
		require_non_empty("frames.game_url", &self.frames.game_url)?;
		Ok(())
	}
}

impl FromStr for Config {
	type Err = ConfigError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let resolved = resolve_env_vars(s)?;
		let config: Config = toml::from_str(&resolved)?;
		config.validate()?;
		Ok(config)
	}
}

fn require_non_empty(name: &str, value: &str) -> Result<(), ConfigError> {
	if value.trim().is_empty() {
		Err(ConfigError::Validation(format!(
			"{} must not be empty",
			name
		)))
	} else {
		Ok(())
	}
}

fn require_address(name: &str, value: &str) -> Result<(), ConfigError> {
	value.parse::<Address>().map(|_| ()).map_err(|e| {
		ConfigError::Validation(format!("{} is not a valid address: {}", name, e))
	})
}

/// Resolves `${VAR}` and `${VAR:-default}` references against the process
/// environment. A reference without a default for an unset variable is an
/// error: security-relevant values never fall back silently.
pub(crate) fn resolve_env_vars(input: &str) -> Result<String, ConfigError> {
	// Limit input size to prevent ReDoS attacks
	const MAX_INPUT_SIZE: usize = 1024 * 1024; // 1MB
	if input.len() > MAX_INPUT_SIZE {
		return Err(ConfigError::Validation(format!(
			"Configuration file too large: {} bytes (max: {} bytes)",
			input.len(),
			MAX_INPUT_SIZE
		)));
	}

	let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]{0,127})(?::-([^}]{0,256}))?\}")
		.map_err(|e| ConfigError::Parse(format!("Regex error: {}", e)))?;

	let mut result = input.to_string();
	let mut replacements = Vec::new();

	for cap in re.captures_iter(input) {
		let full_match = cap.get(0).unwrap();
		let var_name = cap.get(1).unwrap().as_str();
		let default_value = cap.get(2).map(|m| m.as_str());

		let value = match std::env::var(var_name) {
			Ok(v) => v,
			Err(_) => {
				if let Some(default) = default_value {
					default.to_string()
				} else {
					return Err(ConfigError::Validation(format!(
						"Environment variable '{}' not found",
						var_name
					)));
				}
			}
		};

		replacements.push((full_match.start(), full_match.end(), value));
	}

	// Apply replacements in reverse order to maintain positions
	for (start, end, value) in replacements.iter().rev() {
		result.replace_range(start..end, value);
	}

	Ok(result)
}

#[cfg(test)]
mod tests {
	use super::*;

	const BASE_CONFIG: &str = r#"
[identity]
api_key = "test-key"

[chain]
rpc_url = "http://localhost:8545"
usdc_address = "0x833589fCD6eDb6E08f4c7C32D4f71b54bda02913"

[payment]
payout_address = "0x1234567890123456789012345678901234567890"

[claim]
contract_address = "0x0987654321098765432109876543210987654321"

[frames]
public_url = "https://frames.example"
game_url = "https://game.example"
start_image_url = "https://img.example/start.png"
success_image_url = "https://img.example/ok.png"
failed_image_url = "https://img.example/fail.png"
claim_image_url = "https://img.example/claim.png"
"#;

	#[test]
	fn parses_with_defaults() {
		let config: Config = BASE_CONFIG.parse().unwrap();
		assert_eq!(config.server.host, "127.0.0.1");
		assert_eq!(config.server.port, 3000);
		assert_eq!(config.chain.chain_id, 8453);
		assert_eq!(config.payment.amount, 250_000);
		assert_eq!(config.claim.as_ref().unwrap().amount, 50_000);
		// Claim imagery falls back to the payment imagery
		assert_eq!(config.frames.claim_success_image(), "https://img.example/ok.png");
		assert_eq!(config.frames.claim_failed_image(), "https://img.example/fail.png");
	}

	#[test]
	fn claim_section_is_optional() {
		let without_claim = BASE_CONFIG.replace(
			"[claim]\ncontract_address = \"0x0987654321098765432109876543210987654321\"\n",
			"",
		);
		let config: Config = without_claim.parse().unwrap();
		assert!(config.claim.is_none());
	}

	#[test]
	fn rejects_invalid_payout_address() {
		let bad = BASE_CONFIG.replace(
			"payout_address = \"0x1234567890123456789012345678901234567890\"",
			"payout_address = \"not-an-address\"",
		);
		let result: Result<Config, _> = bad.parse();
		assert!(matches!(result, Err(ConfigError::Validation(_))));
	}

	#[test]
	fn env_var_resolution() {
		std::env::set_var("FRAMEPAY_TEST_KEY", "from-env");
		let input = "api_key = \"${FRAMEPAY_TEST_KEY}\"";
		let result = resolve_env_vars(input).unwrap();
		assert_eq!(result, "api_key = \"from-env\"");
		std::env::remove_var("FRAMEPAY_TEST_KEY");
	}

	#[test]
	fn env_var_missing_without_default_is_an_error() {
		let input = "api_key = \"${FRAMEPAY_TEST_UNSET_VAR}\"";
		let result = resolve_env_vars(input);
		assert!(matches!(result, Err(ConfigError::Validation(_))));
	}

	#[test]
	fn env_var_default_applies_when_unset() {
		let input = "host = \"${FRAMEPAY_TEST_UNSET_HOST:-0.0.0.0}\"";
		let result = resolve_env_vars(input).unwrap();
		assert_eq!(result, "host = \"0.0.0.0\"");
	}

	#[test]
	fn loads_from_file() {
		use std::io::Write;

		let mut file = tempfile::NamedTempFile::new().unwrap();
		file.write_all(BASE_CONFIG.as_bytes()).unwrap();

		let config = Config::from_file(file.path()).unwrap();
		assert_eq!(config.frames.public_url, "https://frames.example");
	}
}
