use crate::*;
use polkadot_sdk::frame_benchmarking::v2::*;
use polkadot_sdk::frame_system::RawOrigin;

#[benchmarks]
mod benches {
  use super::*;

  #[benchmark]
  fn set_fee_exempt() {
    let who: T::AccountId = account("exempt", 0, 0);

    #[extrinsic_call]
    set_fee_exempt(RawOrigin::Root, who.clone(), true);

    assert!(FeeExemptAccounts::<T>::contains_key(&who));
  }

  #[benchmark]
  fn set_market_pair() {
    let who: T::AccountId = account("pair", 0, 0);

    #[extrinsic_call]
    set_market_pair(RawOrigin::Root, who.clone(), true);

    assert!(MarketPairs::<T>::contains_key(&who));
  }

  #[benchmark]
  fn rebind_canonical_pair() {
    let old_pair: T::AccountId = account("pair", 0, 0);
    let new_pair: T::AccountId = account("pair", 1, 0);
    MarketPairs::<T>::insert(&old_pair, ());
    CanonicalPair::<T>::put(&old_pair);

    #[extrinsic_call]
    rebind_canonical_pair(RawOrigin::Root, new_pair.clone());

    assert_eq!(CanonicalPair::<T>::get(), Some(new_pair));
  }

  #[benchmark]
  fn set_denied() {
    let who: T::AccountId = account("denied", 0, 0);

    #[extrinsic_call]
    set_denied(RawOrigin::Root, who.clone(), true);

    assert!(DeniedAccounts::<T>::contains_key(&who));
  }

  #[cfg(test)]
  use crate::mock::{Test, new_test_ext};
  #[cfg(test)]
  impl_benchmark_test_suite!(Pallet, new_test_ext(), Test);
}
