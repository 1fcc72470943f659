//! Market Registry Pallet
//!
//! Account classification for the fee engine: fee exemptions, market-pair
//! venues, the deny list, and the protected canonical trading pair.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub use pallet::*;

#[cfg(test)]
pub mod mock;

#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;

pub mod weights;
pub use weights::WeightInfo;

#[frame::pallet]
pub mod pallet {
  use super::WeightInfo;
  use alloc::vec::Vec;
  use frame::prelude::*;
  use primitives::AccountClassifier;

  #[pallet::config]
  pub trait Config: frame_system::Config<RuntimeEvent: From<Event<Self>>> {
    /// Origin that can change account classifications (e.g. Governance or Root)
    type RegistryOrigin: EnsureOrigin<Self::RuntimeOrigin>;

    /// Weight information for extrinsics
    type WeightInfo: WeightInfo;
  }

  #[pallet::pallet]
  pub struct Pallet<T>(PhantomData<T>);

  /// Accounts exempt from all transfer fees
  #[pallet::storage]
  #[pallet::getter(fn fee_exempt_accounts)]
  pub type FeeExemptAccounts<T: Config> =
    StorageMap<_, Blake2_128Concat, T::AccountId, (), OptionQuery>;

  /// Recognized trading venues. Transfers to them are sells, from them are buys.
  #[pallet::storage]
  #[pallet::getter(fn market_pairs)]
  pub type MarketPairs<T: Config> = StorageMap<_, Blake2_128Concat, T::AccountId, (), OptionQuery>;

  /// Accounts that may neither send nor receive
  #[pallet::storage]
  #[pallet::getter(fn denied_accounts)]
  pub type DeniedAccounts<T: Config> =
    StorageMap<_, Blake2_128Concat, T::AccountId, (), OptionQuery>;

  /// The canonical token/reference-asset venue.
  ///
  /// Invariant: while set, the account is always flagged in `MarketPairs` and
  /// the generic setter can never clear that flag.
  #[pallet::storage]
  #[pallet::getter(fn canonical_pair)]
  pub type CanonicalPair<T: Config> = StorageValue<_, T::AccountId, OptionQuery>;

  #[pallet::event]
  #[pallet::generate_deposit(pub(super) fn deposit_event)]
  pub enum Event<T: Config> {
    /// An account's fee exemption flag was changed
    FeeExemptionChanged { who: T::AccountId, exempt: bool },
    /// An account's market-pair flag was changed
    MarketPairChanged { who: T::AccountId, is_pair: bool },
    /// An account's deny-list flag was changed
    DenyListChanged { who: T::AccountId, denied: bool },
    /// The canonical pair was re-pointed to a new venue
    CanonicalPairRebound {
      old_pair: Option<T::AccountId>,
      new_pair: T::AccountId,
    },
  }

  #[pallet::error]
  pub enum Error<T> {
    /// The canonical pair's market-pair flag cannot be cleared by the generic setter
    CanonicalPairProtected,
  }

  #[pallet::call]
  impl<T: Config> Pallet<T> {
    /// Set or clear an account's fee exemption.
    #[pallet::call_index(0)]
    #[pallet::weight(T::WeightInfo::set_fee_exempt())]
    pub fn set_fee_exempt(origin: OriginFor<T>, who: T::AccountId, exempt: bool) -> DispatchResult {
      T::RegistryOrigin::ensure_origin(origin)?;
      if exempt {
        FeeExemptAccounts::<T>::insert(&who, ());
      } else {
        FeeExemptAccounts::<T>::remove(&who);
      }
      Self::deposit_event(Event::FeeExemptionChanged { who, exempt });
      Ok(())
    }

    /// Set or clear an account's market-pair flag.
    ///
    /// Clearing is rejected for the canonical pair; use
    /// `rebind_canonical_pair` for that migration.
    #[pallet::call_index(1)]
    #[pallet::weight(T::WeightInfo::set_market_pair())]
    pub fn set_market_pair(origin: OriginFor<T>, who: T::AccountId, is_pair: bool) -> DispatchResult {
      T::RegistryOrigin::ensure_origin(origin)?;
      if is_pair {
        MarketPairs::<T>::insert(&who, ());
      } else {
        ensure!(
          CanonicalPair::<T>::get().as_ref() != Some(&who),
          Error::<T>::CanonicalPairProtected
        );
        MarketPairs::<T>::remove(&who);
      }
      Self::deposit_event(Event::MarketPairChanged { who, is_pair });
      Ok(())
    }

    /// Re-point the canonical pair to a new venue.
    ///
    /// The explicit migration path: flags the new account as a market pair and
    /// moves the protection to it. The previous venue keeps its generic
    /// market-pair flag until cleared separately.
    #[pallet::call_index(2)]
    #[pallet::weight(T::WeightInfo::rebind_canonical_pair())]
    pub fn rebind_canonical_pair(origin: OriginFor<T>, new_pair: T::AccountId) -> DispatchResult {
      T::RegistryOrigin::ensure_origin(origin)?;
      let old_pair = CanonicalPair::<T>::get();
      MarketPairs::<T>::insert(&new_pair, ());
      CanonicalPair::<T>::put(&new_pair);
      Self::deposit_event(Event::CanonicalPairRebound { old_pair, new_pair });
      Ok(())
    }

    /// Add or remove an account from the deny list.
    #[pallet::call_index(3)]
    #[pallet::weight(T::WeightInfo::set_denied())]
    pub fn set_denied(origin: OriginFor<T>, who: T::AccountId, denied: bool) -> DispatchResult {
      T::RegistryOrigin::ensure_origin(origin)?;
      if denied {
        DeniedAccounts::<T>::insert(&who, ());
      } else {
        DeniedAccounts::<T>::remove(&who);
      }
      Self::deposit_event(Event::DenyListChanged { who, denied });
      Ok(())
    }
  }

  impl<T: Config> AccountClassifier<T::AccountId> for Pallet<T> {
    fn is_fee_exempt(who: &T::AccountId) -> bool {
      FeeExemptAccounts::<T>::contains_key(who)
    }

    fn is_market_pair(who: &T::AccountId) -> bool {
      MarketPairs::<T>::contains_key(who)
    }

    fn is_denied(who: &T::AccountId) -> bool {
      DeniedAccounts::<T>::contains_key(who)
    }
  }

  /// Genesis configuration — seeds the canonical pair and initial exemptions
  #[pallet::genesis_config]
  #[derive(frame::prelude::DefaultNoBound)]
  pub struct GenesisConfig<T: Config> {
    pub canonical_pair: Option<T::AccountId>,
    pub fee_exempt: Vec<T::AccountId>,
    pub market_pairs: Vec<T::AccountId>,
  }

  #[pallet::genesis_build]
  impl<T: Config> BuildGenesisConfig for GenesisConfig<T> {
    fn build(&self) {
      for who in &self.fee_exempt {
        FeeExemptAccounts::<T>::insert(who, ());
      }
      for who in &self.market_pairs {
        MarketPairs::<T>::insert(who, ());
      }
      if let Some(pair) = &self.canonical_pair {
        MarketPairs::<T>::insert(pair, ());
        CanonicalPair::<T>::put(pair);
      }
    }
  }
}
