//! Ecosystem Constants for the Tollgate Fee-Collection System
//!
//! This module centralizes all system-level constants, including pallet IDs for
//! deriving pallet-owned accounts and the fundamental economic parameters of the
//! fee schedule and conversion engine.
//!
//! These constants are the single source of truth and are re-used across all
//! runtime configurations via the primitives crate.

/// Balance type alias for consistency across the system
pub type Balance = u128;

/// Pallet identifiers for deriving pallet-owned accounts.
///
/// These IDs are used by Polkadot SDK's `PalletId::into_account_truncating()`
/// to deterministically generate accounts for pallet-specific operations.
pub mod pallet_ids {
  /// Fee Engine pallet ID (fee accrual pools and conversion engine)
  pub const FEE_ENGINE_PALLET_ID: &[u8; 8] = b"py/feeng";

  /// Market Registry pallet ID (account classification flags)
  pub const MARKET_REGISTRY_PALLET_ID: &[u8; 8] = b"mktregis";
}

/// System parameters defining the fee schedule and conversion thresholds.
///
/// These parameters are global and coordinate the economic properties of the
/// fee-collection engine.
pub mod params {
  use super::Balance;
  use sp_arithmetic::Permill;

  /// Precision scalar for token amounts (10^12).
  pub const PRECISION: Balance = 1_000_000_000_000;

  /// Fee rates are expressed as parts-per-thousand over this denominator.
  ///
  /// A rate of 50 over 1000 is 5%. Per-mille granularity matches the fee
  /// schedule's tuning range; finer precision is not needed.
  pub const FEE_DENOMINATOR: u32 = 1_000;

  /// Hard ceiling on the combined sell-side fee (10%).
  ///
  /// `sell_royalty + sell_liquidity` may never exceed this, enforced at the
  /// moment of any rate change.
  pub const MAX_SELL_FEE: u32 = 100;

  /// Default royalty fee charged on sells (5%).
  pub const DEFAULT_SELL_ROYALTY_FEE: u32 = 50;

  /// Default liquidity fee charged on sells (3%).
  pub const DEFAULT_SELL_LIQUIDITY_FEE: u32 = 30;

  /// Default liquidity fee charged on buys (2%).
  pub const DEFAULT_BUY_LIQUIDITY_FEE: u32 = 20;

  /// Default royalty-pool balance that triggers automatic conversion (500 tokens).
  pub const FEE_ENGINE_MIN_ROYALTY_SWAP: Balance = 500 * PRECISION;

  /// Default liquidity-pool balance that triggers automatic conversion (500 tokens).
  pub const FEE_ENGINE_MIN_LIQUIDITY_SWAP: Balance = 500 * PRECISION;

  /// Fee Engine slippage tolerance on pool-to-native swaps (2%).
  pub const FEE_ENGINE_SLIPPAGE_TOLERANCE: Permill = Permill::from_percent(2);
}
