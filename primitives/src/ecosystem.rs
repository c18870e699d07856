//! Ecosystem Constants for the Permissioned Ledger
//!
//! This module centralizes system-level constants: pallet IDs used to derive
//! pallet-owned accounts and the default parameters of the reward engine.
//!
//! These constants are the single source of truth and are re-used by pallet
//! configurations via the primitives crate.

/// Balance type alias for consistency across the ledger pallets
pub type Balance = u128;

/// Pallet identifiers for deriving pallet-owned accounts.
///
/// Used by `PalletId::into_sub_account_truncating()` to derive one account per
/// reward engine instance.
pub mod pallet_ids {
  /// Reward Disburser pallet ID (engine-held balances)
  pub const REWARD_DISBURSER_PALLET_ID: &[u8; 8] = b"py/rwrds";
}

/// Ecosystem parameters shared by pallet configurations.
pub mod params {
  use super::Balance;

  /// Version identifier reported by reward engines.
  ///
  /// Encoded as `MAJOR * 10^7 + MINOR * 10^4 + PATCH` (1.001.0002).
  pub const REWARD_ENGINE_VERSION: u32 = 10_010_002;

  /// Minimum base amount a freshly created reward engine accepts for disbursement.
  pub const DEFAULT_MIN_BASE: Balance = 100;

  /// Multiplier applied by the reference reward formula (payout = base * 2).
  pub const REFERENCE_REWARD_MULTIPLIER: u32 = 2;

  /// Upper bound for token decimals so that `10^decimals` fits into a `u128`.
  pub const MAX_DECIMALS: u8 = 38;
}
