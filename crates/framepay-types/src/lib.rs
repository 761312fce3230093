//! Common types module for the framepay system.
//!
//! This module defines the core data types and structures used throughout
//! the payment and claim workflow. It provides a centralized location for
//! shared types to ensure consistency across all components.

/// Frame action envelope and verified actor identity types.
pub mod action;
/// API error taxonomy and HTTP response structures.
pub mod api;
/// Unsigned transaction descriptor types served to client wallets.
pub mod descriptor;
/// Chain verification outcomes and on-chain eligibility records.
pub mod outcome;
/// Secure string type for handling sensitive configuration values.
pub mod secret_string;
/// Formatting utilities for hex strings and cooldown durations.
pub mod utils;

// Re-export all types for convenient access
pub use action::*;
pub use api::*;
pub use descriptor::*;
pub use outcome::*;
pub use secret_string::SecretString;
pub use utils::{format_cooldown, format_token_amount, with_0x_prefix};
