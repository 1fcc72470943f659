use crate::*;
use polkadot_sdk::frame_benchmarking::v2::*;
use polkadot_sdk::frame_system::RawOrigin;
use polkadot_sdk::sp_runtime::Permill;
use primitives::{AssetKind, ecosystem::params::PRECISION};

fn setup_market<T: Config>(pair: &T::AccountId) -> Result<(), BenchmarkError> {
  let token = T::ManagedAsset::get();
  T::BenchmarkHelper::create_pool(token, AssetKind::Native)?;
  let seeder: T::AccountId = account("seeder", 0, 0);
  T::BenchmarkHelper::ensure_funded(&seeder, token, 100_000 * PRECISION)?;
  T::BenchmarkHelper::ensure_funded(&seeder, AssetKind::Native, 100_000 * PRECISION)?;
  T::BenchmarkHelper::add_liquidity(
    &seeder,
    token,
    AssetKind::Native,
    100_000 * PRECISION,
    100_000 * PRECISION,
  )?;
  T::BenchmarkHelper::set_market_pair(pair)?;
  Ok(())
}

#[benchmarks]
mod benches {
  use super::*;

  // Worst case: a sell that crosses the royalty threshold and converts inline
  #[benchmark]
  fn transfer() -> Result<(), BenchmarkError> {
    let caller: T::AccountId = whitelisted_caller();
    let pair: T::AccountId = account("pair", 0, 0);
    let recipient: T::AccountId = account("recipient", 0, 0);
    setup_market::<T>(&pair)?;
    T::BenchmarkHelper::ensure_funded(&caller, T::ManagedAsset::get(), 10_000 * PRECISION)?;
    FeeRecipient::<T>::put(&recipient);
    MinRoyaltySwap::<T>::put(1);

    #[extrinsic_call]
    transfer(
      RawOrigin::Signed(caller),
      pair.clone(),
      1_000 * PRECISION,
    );

    assert_eq!(RoyaltyPool::<T>::get(), 0);
    assert!(LiquidityPool::<T>::get() > 0);
    Ok(())
  }

  #[benchmark]
  fn process_royalty_fees() -> Result<(), BenchmarkError> {
    let pair: T::AccountId = account("pair", 0, 0);
    let recipient: T::AccountId = account("recipient", 0, 0);
    setup_market::<T>(&pair)?;
    let engine = Pallet::<T>::account_id();
    T::BenchmarkHelper::ensure_funded(&engine, T::ManagedAsset::get(), 500 * PRECISION)?;
    RoyaltyPool::<T>::put(500 * PRECISION);
    FeeRecipient::<T>::put(&recipient);

    #[extrinsic_call]
    process_royalty_fees(RawOrigin::Root);

    assert_eq!(RoyaltyPool::<T>::get(), 0);
    Ok(())
  }

  #[benchmark]
  fn process_liquidity_fees() -> Result<(), BenchmarkError> {
    let pair: T::AccountId = account("pair", 0, 0);
    setup_market::<T>(&pair)?;
    let engine = Pallet::<T>::account_id();
    T::BenchmarkHelper::ensure_funded(&engine, T::ManagedAsset::get(), 500 * PRECISION)?;
    LiquidityPool::<T>::put(500 * PRECISION);

    #[extrinsic_call]
    process_liquidity_fees(RawOrigin::Root);

    assert_eq!(LiquidityPool::<T>::get(), 0);
    Ok(())
  }

  #[benchmark]
  fn set_fee_rates() {
    #[extrinsic_call]
    set_fee_rates(RawOrigin::Root, 10, 5, 10);

    assert_eq!(FeeRates::<T>::get().sell_royalty, 10);
  }

  #[benchmark]
  fn set_swap_thresholds() {
    #[extrinsic_call]
    set_swap_thresholds(RawOrigin::Root, 100 * PRECISION, 200 * PRECISION);

    assert_eq!(MinRoyaltySwap::<T>::get(), 100 * PRECISION);
  }

  #[benchmark]
  fn set_fee_recipient() {
    let recipient: T::AccountId = account("recipient", 0, 0);

    #[extrinsic_call]
    set_fee_recipient(RawOrigin::Root, recipient.clone());

    assert_eq!(FeeRecipient::<T>::get(), Some(recipient));
  }

  #[benchmark]
  fn set_swap_enabled() {
    #[extrinsic_call]
    set_swap_enabled(RawOrigin::Root, false);

    assert!(!SwapEnabled::<T>::get());
  }

  #[benchmark]
  fn set_slippage_tolerance() {
    #[extrinsic_call]
    set_slippage_tolerance(RawOrigin::Root, Permill::from_percent(5));

    assert_eq!(SlippageTolerance::<T>::get(), Permill::from_percent(5));
  }

  #[cfg(test)]
  use crate::mock::{Test, new_test_ext};
  #[cfg(test)]
  impl_benchmark_test_suite!(Pallet, new_test_ext(), Test);
}
