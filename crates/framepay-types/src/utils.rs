//! Formatting utilities.
//!
//! Provides functions for hex string prefix management and for rendering a
//! cooldown duration as a human-readable breakdown.

/// Adds "0x" prefix to a hex string if it doesn't already have one.
pub fn with_0x_prefix(hex_str: &str) -> String {
	if hex_str.to_lowercase().starts_with("0x") {
		hex_str.to_string()
	} else {
		format!("0x{}", hex_str)
	}
}

/// Formats a raw token amount with decimal places for display.
///
/// Converts an on-chain integer amount to a human-readable string with
/// proper decimal placement, e.g. `250000` with 6 decimals renders as
/// `"0.25"`.
pub fn format_token_amount(amount: u64, decimals: u8) -> String {
	if decimals == 0 {
		return amount.to_string();
	}

	let raw = amount.to_string();
	let decimal_places = decimals as usize;

	let (integer_part, decimal_part) = if raw.len() <= decimal_places {
		let decimal_str = format!("{:0>width$}", raw, width = decimal_places);
		("0".to_string(), decimal_str)
	} else {
		let split_pos = raw.len() - decimal_places;
		(raw[..split_pos].to_string(), raw[split_pos..].to_string())
	};

	let decimal_trimmed = decimal_part.trim_end_matches('0');

	if decimal_trimmed.is_empty() {
		integer_part
	} else {
		format!("{}.{}", integer_part, decimal_trimmed)
	}
}

/// Formats a cooldown duration in seconds as a human-readable breakdown.
///
/// Leading zero units are omitted: `90061` renders as `"1h 1m 1s"`, `45`
/// as `"45s"`. Zero renders as `"0 seconds"` to read naturally in the
/// eligibility message.
pub fn format_cooldown(seconds: u64) -> String {
	if seconds == 0 {
		return "0 seconds".to_string();
	}

	let hours = seconds / 3600;
	let minutes = (seconds % 3600) / 60;
	let secs = seconds % 60;

	if hours > 0 {
		format!("{}h {}m {}s", hours, minutes, secs)
	} else if minutes > 0 {
		format!("{}m {}s", minutes, secs)
	} else {
		format!("{}s", secs)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_with_0x_prefix() {
		assert_eq!(
			with_0x_prefix("833589fcd6edb6e08f4c7c32d4f71b54bda02913"),
			"0x833589fcd6edb6e08f4c7c32d4f71b54bda02913"
		);
		assert_eq!(with_0x_prefix("0xabc"), "0xabc");
		assert_eq!(with_0x_prefix("0Xabc"), "0Xabc");
	}

	#[test]
	fn test_format_token_amount() {
		assert_eq!(format_token_amount(250_000, 6), "0.25");
		assert_eq!(format_token_amount(50_000, 6), "0.05");
		assert_eq!(format_token_amount(1_000_000, 6), "1");
		assert_eq!(format_token_amount(1_500_000, 6), "1.5");
		assert_eq!(format_token_amount(42, 0), "42");
	}

	#[test]
	fn cooldown_breakdown_omits_leading_zero_units() {
		assert_eq!(format_cooldown(90061), "1h 1m 1s");
		assert_eq!(format_cooldown(3600), "1h 0m 0s");
		assert_eq!(format_cooldown(61), "1m 1s");
		assert_eq!(format_cooldown(45), "45s");
	}

	#[test]
	fn cooldown_zero_reads_as_words() {
		assert_eq!(format_cooldown(0), "0 seconds");
	}
}
