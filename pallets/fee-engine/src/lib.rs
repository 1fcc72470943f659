//! Fee Engine Pallet
//!
//! Intercepts managed-token transfers, collects buy/sell fees into royalty and
//! liquidity pools, and converts pools through an external DEX once they cross
//! their thresholds: royalty proceeds are forwarded to the fee recipient as
//! native tokens, liquidity proceeds are re-deposited as trading liquidity.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub use pallet::*;

pub mod types;
pub use types::*;

#[cfg(test)]
pub mod mock;

#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;

pub mod weights;
pub use weights::WeightInfo;

/// Helper for benchmarking
#[cfg(feature = "runtime-benchmarks")]
pub trait BenchmarkHelper<AssetKind, AccountId, Balance> {
  fn ensure_funded(
    who: &AccountId,
    asset: AssetKind,
    amount: Balance,
  ) -> frame::deps::sp_runtime::DispatchResult;
  fn create_pool(asset1: AssetKind, asset2: AssetKind) -> frame::deps::sp_runtime::DispatchResult;
  fn add_liquidity(
    who: &AccountId,
    asset1: AssetKind,
    asset2: AssetKind,
    amount1: Balance,
    amount2: Balance,
  ) -> frame::deps::sp_runtime::DispatchResult;
  fn set_market_pair(who: &AccountId) -> frame::deps::sp_runtime::DispatchResult;
}

#[frame::pallet]
pub mod pallet {
  use super::WeightInfo;
  use crate::types::{ConversionPhase, ConversionTrigger, DexApi, FeeSchedule};
  use alloc::vec;
  use frame::deps::{
    frame_support::traits::{
      fungible::{Inspect as NativeInspect, Mutate as NativeMutate},
      fungibles::{Inspect as FungiblesInspect, Mutate as FungiblesMutate},
      tokens::Preservation,
    },
    sp_runtime::{
      DispatchError, Permill,
      traits::{AccountIdConversion, Zero},
    },
  };
  use frame::prelude::*;
  use primitives::{AccountClassifier, AssetInspector, AssetKind, ecosystem::params};

  /// Configuration trait for the fee engine pallet
  #[pallet::config]
  pub trait Config: frame_system::Config<RuntimeEvent: From<Event<Self>>> {
    /// The assets pallet holding the managed token (AssetKind::Local)
    type Assets: FungiblesInspect<Self::AccountId, AssetId = u32, Balance = u128>
      + FungiblesMutate<Self::AccountId, AssetId = u32, Balance = u128>;

    /// The currency trait for the native reference asset
    type Currency: NativeInspect<Self::AccountId, Balance = u128>
      + NativeMutate<Self::AccountId, Balance = u128>;

    /// The exchange used to convert accrued pools
    type Dex: DexApi<Self::AccountId, u128>;

    /// Account classification flags (exemptions, market pairs, deny list)
    type Classifier: AccountClassifier<Self::AccountId>;

    /// The pallet ID for the fee engine
    #[pallet::constant]
    type PalletId: Get<PalletId>;

    /// The managed token whose transfers are taxed
    #[pallet::constant]
    type ManagedAsset: Get<AssetKind>;

    /// Default royalty-pool balance that triggers automatic conversion
    #[pallet::constant]
    type DefaultMinRoyaltySwap: Get<u128>;

    /// Default liquidity-pool balance that triggers automatic conversion
    #[pallet::constant]
    type DefaultMinLiquiditySwap: Get<u128>;

    /// Default slippage tolerance for pool-to-native swaps
    #[pallet::constant]
    type DefaultSlippageTolerance: Get<Permill>;

    /// Origin that can perform governance operations
    type AdminOrigin: EnsureOrigin<Self::RuntimeOrigin>;

    /// Weight information for extrinsics
    type WeightInfo: WeightInfo;

    /// Helper for benchmarking
    #[cfg(feature = "runtime-benchmarks")]
    type BenchmarkHelper: crate::BenchmarkHelper<AssetKind, Self::AccountId, u128>;
  }

  /// The pallet struct
  #[pallet::pallet]
  pub struct Pallet<T>(PhantomData<T>);

  /// Current fee rates (can be updated by governance)
  #[pallet::storage]
  #[pallet::getter(fn fee_rates)]
  pub type FeeRates<T: Config> = StorageValue<_, FeeSchedule, ValueQuery>;

  /// Royalty fees collected but not yet converted, in managed-token units.
  ///
  /// Together with `LiquidityPool`, never exceeds the engine account's
  /// managed-token balance.
  #[pallet::storage]
  #[pallet::getter(fn royalty_pool)]
  pub type RoyaltyPool<T: Config> = StorageValue<_, u128, ValueQuery>;

  /// Liquidity fees collected but not yet converted, in managed-token units
  #[pallet::storage]
  #[pallet::getter(fn liquidity_pool)]
  pub type LiquidityPool<T: Config> = StorageValue<_, u128, ValueQuery>;

  /// Royalty-pool conversion threshold (can be updated by governance)
  #[pallet::storage]
  #[pallet::getter(fn min_royalty_swap)]
  pub type MinRoyaltySwap<T: Config> =
    StorageValue<_, u128, ValueQuery, T::DefaultMinRoyaltySwap>;

  /// Liquidity-pool conversion threshold (can be updated by governance)
  #[pallet::storage]
  #[pallet::getter(fn min_liquidity_swap)]
  pub type MinLiquiditySwap<T: Config> =
    StorageValue<_, u128, ValueQuery, T::DefaultMinLiquiditySwap>;

  /// Current slippage tolerance (can be updated by governance)
  #[pallet::storage]
  #[pallet::getter(fn slippage_tolerance)]
  pub type SlippageTolerance<T: Config> =
    StorageValue<_, Permill, ValueQuery, T::DefaultSlippageTolerance>;

  /// Destination for converted royalty proceeds.
  ///
  /// Royalty conversions fail with `RecipientNotSet` until configured; once
  /// set it can be changed but never cleared.
  #[pallet::storage]
  #[pallet::getter(fn fee_recipient)]
  pub type FeeRecipient<T: Config> = StorageValue<_, T::AccountId, OptionQuery>;

  #[pallet::type_value]
  pub fn DefaultSwapEnabled<T: Config>() -> bool {
    true
  }

  /// Global switch for automatic conversions. Manual conversions ignore it.
  #[pallet::storage]
  #[pallet::getter(fn swap_enabled)]
  pub type SwapEnabled<T: Config> = StorageValue<_, bool, ValueQuery, DefaultSwapEnabled<T>>;

  /// The conversion reentrancy latch. Set before external exchange calls,
  /// cleared only after all conversion effects are final.
  #[pallet::storage]
  #[pallet::getter(fn active_conversion)]
  pub type ActiveConversion<T: Config> = StorageValue<_, ConversionPhase, ValueQuery>;

  /// Events for the fee engine pallet
  #[pallet::event]
  #[pallet::generate_deposit(pub(super) fn deposit_event)]
  pub enum Event<T: Config> {
    /// Fees were extracted from a transfer and credited to the pools
    FeesAccrued {
      from: T::AccountId,
      to: T::AccountId,
      amount: u128,
      royalty_fee: u128,
      liquidity_fee: u128,
    },
    /// The royalty pool was swapped to native and forwarded to the recipient
    RoyaltyConverted {
      token_amount: u128,
      native_received: u128,
      recipient: T::AccountId,
      trigger: ConversionTrigger,
    },
    /// The liquidity pool was half-swapped and re-deposited as liquidity
    LiquidityConverted {
      token_swapped: u128,
      token_deposited: u128,
      native_deposited: u128,
      lp_minted: u128,
      trigger: ConversionTrigger,
    },
    /// Fee rates updated
    FeeRatesUpdated {
      old_rates: FeeSchedule,
      new_rates: FeeSchedule,
    },
    /// Conversion thresholds updated
    SwapThresholdsUpdated {
      min_royalty_swap: u128,
      min_liquidity_swap: u128,
    },
    /// Fee recipient updated
    FeeRecipientUpdated {
      old_recipient: Option<T::AccountId>,
      new_recipient: T::AccountId,
    },
    /// Automatic conversions enabled or disabled
    SwapEnabledSet { enabled: bool },
    /// Slippage tolerance updated
    SlippageToleranceUpdated {
      old_tolerance: Permill,
      new_tolerance: Permill,
    },
  }

  /// Errors for the fee engine pallet
  #[pallet::error]
  pub enum Error<T> {
    /// Transfer amount must be positive
    ZeroAmount,
    /// Sender or receiver is on the deny list
    AccountDenied,
    /// Combined sell fee would exceed the hard ceiling
    FeeCeilingExceeded,
    /// A single rate exceeds the fee denominator
    InvalidFeeRate,
    /// No fee recipient has been configured
    RecipientNotSet,
    /// Another conversion is already in progress
    ConversionInProgress,
    /// The pool to convert is empty
    NothingToConvert,
    /// Pool too small to split for conversion
    AmountTooSmall,
    /// No DEX pool exists for the managed token and native asset
    PoolNotFound,
    /// The DEX returned no quote for the swap
    QuoteUnavailable,
    /// Arithmetic overflow occurred
    ArithmeticOverflow,
    /// The managed asset must be a local token
    UnsupportedAsset,
  }

  /// Implementation of the fee engine pallet
  #[pallet::call]
  impl<T: Config> Pallet<T> {
    /// Transfer managed tokens, extracting fees and possibly triggering a
    /// pool conversion when the receiver is a market pair.
    #[pallet::call_index(0)]
    #[pallet::weight(T::WeightInfo::transfer())]
    pub fn transfer(origin: OriginFor<T>, to: T::AccountId, amount: u128) -> DispatchResult {
      let from = ensure_signed(origin)?;
      Self::do_transfer(from, to, amount)
    }

    /// Convert the royalty pool now, regardless of threshold or the
    /// automatic-conversion switch (governance only).
    #[pallet::call_index(1)]
    #[pallet::weight(T::WeightInfo::process_royalty_fees())]
    pub fn process_royalty_fees(origin: OriginFor<T>) -> DispatchResult {
      T::AdminOrigin::ensure_origin(origin)?;
      Self::convert_royalty_pool(ConversionTrigger::Manual)
    }

    /// Convert the liquidity pool now, regardless of threshold or the
    /// automatic-conversion switch (governance only).
    #[pallet::call_index(2)]
    #[pallet::weight(T::WeightInfo::process_liquidity_fees())]
    pub fn process_liquidity_fees(origin: OriginFor<T>) -> DispatchResult {
      T::AdminOrigin::ensure_origin(origin)?;
      Self::convert_liquidity_pool(ConversionTrigger::Manual)
    }

    /// Update fee rates (governance only). Rejected if the combined sell fee
    /// exceeds the hard ceiling; prior rates remain in effect on rejection.
    #[pallet::call_index(3)]
    #[pallet::weight(T::WeightInfo::set_fee_rates())]
    pub fn set_fee_rates(
      origin: OriginFor<T>,
      sell_royalty: u32,
      buy_liquidity: u32,
      sell_liquidity: u32,
    ) -> DispatchResult {
      T::AdminOrigin::ensure_origin(origin)?;
      let new_rates = FeeSchedule {
        sell_royalty,
        buy_liquidity,
        sell_liquidity,
      };
      ensure!(
        sell_royalty <= params::FEE_DENOMINATOR
          && buy_liquidity <= params::FEE_DENOMINATOR
          && sell_liquidity <= params::FEE_DENOMINATOR,
        Error::<T>::InvalidFeeRate
      );
      ensure!(
        new_rates.sell_total() <= params::MAX_SELL_FEE,
        Error::<T>::FeeCeilingExceeded
      );
      let old_rates = FeeRates::<T>::get();
      FeeRates::<T>::put(new_rates);
      Self::deposit_event(Event::FeeRatesUpdated {
        old_rates,
        new_rates,
      });
      Ok(())
    }

    /// Update conversion thresholds (governance only)
    #[pallet::call_index(4)]
    #[pallet::weight(T::WeightInfo::set_swap_thresholds())]
    pub fn set_swap_thresholds(
      origin: OriginFor<T>,
      min_royalty_swap: u128,
      min_liquidity_swap: u128,
    ) -> DispatchResult {
      T::AdminOrigin::ensure_origin(origin)?;
      MinRoyaltySwap::<T>::put(min_royalty_swap);
      MinLiquiditySwap::<T>::put(min_liquidity_swap);
      Self::deposit_event(Event::SwapThresholdsUpdated {
        min_royalty_swap,
        min_liquidity_swap,
      });
      Ok(())
    }

    /// Update the royalty proceeds recipient (governance only)
    #[pallet::call_index(5)]
    #[pallet::weight(T::WeightInfo::set_fee_recipient())]
    pub fn set_fee_recipient(origin: OriginFor<T>, recipient: T::AccountId) -> DispatchResult {
      T::AdminOrigin::ensure_origin(origin)?;
      let old_recipient = FeeRecipient::<T>::get();
      FeeRecipient::<T>::put(&recipient);
      Self::deposit_event(Event::FeeRecipientUpdated {
        old_recipient,
        new_recipient: recipient,
      });
      Ok(())
    }

    /// Enable or disable automatic conversions (governance only)
    #[pallet::call_index(6)]
    #[pallet::weight(T::WeightInfo::set_swap_enabled())]
    pub fn set_swap_enabled(origin: OriginFor<T>, enabled: bool) -> DispatchResult {
      T::AdminOrigin::ensure_origin(origin)?;
      SwapEnabled::<T>::put(enabled);
      Self::deposit_event(Event::SwapEnabledSet { enabled });
      Ok(())
    }

    /// Update slippage tolerance (governance only)
    #[pallet::call_index(7)]
    #[pallet::weight(T::WeightInfo::set_slippage_tolerance())]
    pub fn set_slippage_tolerance(
      origin: OriginFor<T>,
      new_tolerance: Permill,
    ) -> DispatchResult {
      T::AdminOrigin::ensure_origin(origin)?;
      let old_tolerance = SlippageTolerance::<T>::get();
      SlippageTolerance::<T>::put(new_tolerance);
      Self::deposit_event(Event::SlippageToleranceUpdated {
        old_tolerance,
        new_tolerance,
      });
      Ok(())
    }
  }

  impl<T: Config> Pallet<T> {
    pub fn account_id() -> T::AccountId {
      T::PalletId::get().into_account_truncating()
    }

    fn managed_token_id() -> Result<u32, DispatchError> {
      Ok(
        T::ManagedAsset::get()
          .local_id()
          .ok_or(Error::<T>::UnsupportedAsset)?,
      )
    }

    /// One fee component: floor of `amount * rate / FEE_DENOMINATOR`
    fn fee_part(amount: u128, rate: u32) -> Result<u128, DispatchError> {
      let scaled = amount
        .checked_mul(rate as u128)
        .ok_or(Error::<T>::ArithmeticOverflow)?;
      Ok(scaled / params::FEE_DENOMINATOR as u128)
    }

    /// Fee extraction, pool accrual, conversion trigger, then net settlement.
    /// Any failure along the way aborts the whole transfer.
    fn do_transfer(from: T::AccountId, to: T::AccountId, amount: u128) -> DispatchResult {
      ensure!(!amount.is_zero(), Error::<T>::ZeroAmount);
      ensure!(
        !T::Classifier::is_denied(&from) && !T::Classifier::is_denied(&to),
        Error::<T>::AccountDenied
      );

      let token = Self::managed_token_id()?;
      let is_sell = T::Classifier::is_market_pair(&to);
      let is_buy = T::Classifier::is_market_pair(&from);
      let exempt = T::Classifier::is_fee_exempt(&from) || T::Classifier::is_fee_exempt(&to);

      let mut royalty_fee = 0u128;
      let mut liquidity_fee = 0u128;
      if !exempt {
        let rates = FeeRates::<T>::get();
        if is_sell {
          royalty_fee = Self::fee_part(amount, rates.sell_royalty)?;
          liquidity_fee = Self::fee_part(amount, rates.sell_liquidity)?;
        } else if is_buy && rates.buy_liquidity > 0 {
          liquidity_fee = Self::fee_part(amount, rates.buy_liquidity)?;
        }
      }

      let total_fee = royalty_fee
        .checked_add(liquidity_fee)
        .ok_or(Error::<T>::ArithmeticOverflow)?;
      if !total_fee.is_zero() {
        let engine = Self::account_id();
        T::Assets::transfer(token, &from, &engine, total_fee, Preservation::Expendable)?;
        RoyaltyPool::<T>::mutate(|pool| *pool = pool.saturating_add(royalty_fee));
        LiquidityPool::<T>::mutate(|pool| *pool = pool.saturating_add(liquidity_fee));
        Self::deposit_event(Event::FeesAccrued {
          from: from.clone(),
          to: to.clone(),
          amount,
          royalty_fee,
          liquidity_fee,
        });
      }

      // At most one conversion per sell. Royalty has priority.
      if is_sell
        && SwapEnabled::<T>::get()
        && ActiveConversion::<T>::get() == ConversionPhase::Idle
      {
        if RoyaltyPool::<T>::get() >= MinRoyaltySwap::<T>::get() {
          Self::convert_royalty_pool(ConversionTrigger::Automatic)?;
        } else if LiquidityPool::<T>::get() >= MinLiquiditySwap::<T>::get() {
          Self::convert_liquidity_pool(ConversionTrigger::Automatic)?;
        }
      }

      let net = amount.saturating_sub(total_fee);
      T::Assets::transfer(token, &from, &to, net, Preservation::Expendable)?;
      Ok(())
    }

    /// Swap `amount` of the managed token to native from the engine account,
    /// with the acceptable output floored by the slippage tolerance.
    /// Returns the engine's measured native balance delta.
    fn swap_pool_to_native(amount: u128) -> Result<u128, DispatchError> {
      let engine = Self::account_id();
      let token = T::ManagedAsset::get();
      let native = AssetKind::Native;
      ensure!(
        T::Dex::get_pool_id(token, native).is_some(),
        Error::<T>::PoolNotFound
      );
      let expected = T::Dex::quote_price_exact_tokens_for_tokens(token, native, amount, true)
        .filter(|quote| !quote.is_zero())
        .ok_or(Error::<T>::QuoteUnavailable)?;
      let min_amount_out =
        expected.saturating_sub(SlippageTolerance::<T>::get().mul_floor(expected));
      let before = <T::Currency as NativeInspect<T::AccountId>>::balance(&engine);
      T::Dex::swap_exact_tokens_for_tokens(&engine, vec![token, native], amount, min_amount_out)?;
      let after = <T::Currency as NativeInspect<T::AccountId>>::balance(&engine);
      Ok(after.saturating_sub(before))
    }

    /// Swap the whole royalty pool to native and forward it to the recipient
    pub fn convert_royalty_pool(trigger: ConversionTrigger) -> DispatchResult {
      ensure!(
        ActiveConversion::<T>::get() == ConversionPhase::Idle,
        Error::<T>::ConversionInProgress
      );
      let pool = RoyaltyPool::<T>::get();
      ensure!(!pool.is_zero(), Error::<T>::NothingToConvert);
      let recipient = FeeRecipient::<T>::get().ok_or(Error::<T>::RecipientNotSet)?;

      ActiveConversion::<T>::put(ConversionPhase::Royalty);
      RoyaltyPool::<T>::put(0);
      let native_received = Self::swap_pool_to_native(pool)?;
      let engine = Self::account_id();
      <T::Currency as NativeMutate<T::AccountId>>::transfer(
        &engine,
        &recipient,
        native_received,
        Preservation::Expendable,
      )?;
      ActiveConversion::<T>::put(ConversionPhase::Idle);

      Self::deposit_event(Event::RoyaltyConverted {
        token_amount: pool,
        native_received,
        recipient,
        trigger,
      });
      Ok(())
    }

    /// Swap the floor-half of the liquidity pool to native and deposit the
    /// remainder together with the proceeds as two-sided liquidity
    pub fn convert_liquidity_pool(trigger: ConversionTrigger) -> DispatchResult {
      ensure!(
        ActiveConversion::<T>::get() == ConversionPhase::Idle,
        Error::<T>::ConversionInProgress
      );
      let pool = LiquidityPool::<T>::get();
      ensure!(!pool.is_zero(), Error::<T>::NothingToConvert);
      // Halves always sum to the original pool
      let swap_amount = pool / 2;
      let deposit_amount = pool - swap_amount;
      ensure!(!swap_amount.is_zero(), Error::<T>::AmountTooSmall);

      ActiveConversion::<T>::put(ConversionPhase::Liquidity);
      LiquidityPool::<T>::put(0);
      let native_received = Self::swap_pool_to_native(swap_amount)?;
      let engine = Self::account_id();
      // Swap leg carries the slippage floor; the deposit side uses zero minimums
      let (token_deposited, native_deposited, lp_minted) = T::Dex::add_liquidity(
        &engine,
        T::ManagedAsset::get(),
        AssetKind::Native,
        deposit_amount,
        native_received,
        0,
        0,
      )?;
      ActiveConversion::<T>::put(ConversionPhase::Idle);

      Self::deposit_event(Event::LiquidityConverted {
        token_swapped: swap_amount,
        token_deposited,
        native_deposited,
        lp_minted,
        trigger,
      });
      Ok(())
    }
  }

  /// Genesis configuration — seeds the recipient and makes the engine
  /// account ED-free
  #[pallet::genesis_config]
  #[derive(frame::prelude::DefaultNoBound)]
  pub struct GenesisConfig<T: Config> {
    pub fee_recipient: Option<T::AccountId>,
  }

  #[pallet::genesis_build]
  impl<T: Config> BuildGenesisConfig for GenesisConfig<T> {
    fn build(&self) {
      // Engine account survives zero native balance via provider reference
      frame_system::Pallet::<T>::inc_providers(&Pallet::<T>::account_id());
      if let Some(recipient) = &self.fee_recipient {
        FeeRecipient::<T>::put(recipient);
      }
    }
  }
}
