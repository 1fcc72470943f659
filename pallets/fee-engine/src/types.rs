use codec::{Decode, DecodeWithMemTracking, Encode, MaxEncodedLen};
use polkadot_sdk::frame_support::pallet_prelude::*;
use primitives::ecosystem::params;
use scale_info::TypeInfo;
use scale_info::prelude::vec::Vec;

// Re-export AssetKind from primitives as the single source of truth
pub use primitives::AssetKind;

/// Transfer fee rates in parts-per-thousand over `params::FEE_DENOMINATOR`.
///
/// Sells (transfers to a market pair) pay `sell_royalty + sell_liquidity`;
/// buys (transfers from a market pair) pay `buy_liquidity` only.
#[derive(
  Clone, Copy, Debug, Decode, DecodeWithMemTracking, Encode, Eq, MaxEncodedLen, PartialEq, TypeInfo,
)]
pub struct FeeSchedule {
  pub sell_royalty: u32,
  pub buy_liquidity: u32,
  pub sell_liquidity: u32,
}

impl Default for FeeSchedule {
  fn default() -> Self {
    Self {
      sell_royalty: params::DEFAULT_SELL_ROYALTY_FEE,
      buy_liquidity: params::DEFAULT_BUY_LIQUIDITY_FEE,
      sell_liquidity: params::DEFAULT_SELL_LIQUIDITY_FEE,
    }
  }
}

impl FeeSchedule {
  /// Combined sell-side rate, checked against `params::MAX_SELL_FEE`
  pub fn sell_total(&self) -> u32 {
    self.sell_royalty.saturating_add(self.sell_liquidity)
  }
}

/// Which conversion is currently holding the reentrancy latch.
///
/// A single tagged state instead of two independent flags: both conversions
/// being active at once is unrepresentable.
#[derive(
  Clone,
  Copy,
  Debug,
  Decode,
  DecodeWithMemTracking,
  Default,
  Encode,
  Eq,
  MaxEncodedLen,
  PartialEq,
  TypeInfo,
)]
pub enum ConversionPhase {
  #[default]
  Idle,
  Royalty,
  Liquidity,
}

/// How a conversion was initiated
#[derive(
  Clone, Copy, Debug, Decode, DecodeWithMemTracking, Encode, Eq, MaxEncodedLen, PartialEq, TypeInfo,
)]
pub enum ConversionTrigger {
  /// Fired inline with a qualifying sell once a pool crossed its threshold
  Automatic,
  /// Fired by an admin extrinsic
  Manual,
}

/// Exchange capability trait for XYK pools
pub trait DexApi<AccountId, Balance> {
  /// Get the pool ID for a given asset pair
  fn get_pool_id(asset1: AssetKind, asset2: AssetKind) -> Option<[u8; 32]>;

  /// Get the reserves for a given pool
  fn get_pool_reserves(pool_id: [u8; 32]) -> Option<(Balance, Balance)>;

  /// Quote the output of an exact-in swap at current reserves
  fn quote_price_exact_tokens_for_tokens(
    asset_in: AssetKind,
    asset_out: AssetKind,
    amount_in: Balance,
    include_fee: bool,
  ) -> Option<Balance>;

  /// Execute an exact-in swap along `path`, enforcing `min_amount_out`
  fn swap_exact_tokens_for_tokens(
    who: &AccountId,
    path: Vec<AssetKind>,
    amount_in: Balance,
    min_amount_out: Balance,
  ) -> Result<Balance, DispatchError>;

  /// Deposit two-sided liquidity. Returns (amount1 used, amount2 used, LP minted).
  fn add_liquidity(
    who: &AccountId,
    asset1: AssetKind,
    asset2: AssetKind,
    amount1_desired: Balance,
    amount2_desired: Balance,
    amount1_min: Balance,
    amount2_min: Balance,
  ) -> Result<(Balance, Balance, Balance), DispatchError>;
}
