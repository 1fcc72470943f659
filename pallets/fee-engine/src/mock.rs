extern crate alloc;

use crate as pallet_fee_engine;
use alloc::vec::Vec;
use polkadot_sdk::frame_support::traits::fungibles::{Inspect, Mutate};
use polkadot_sdk::frame_support::traits::tokens::{Fortitude, Precision, Preservation};
use polkadot_sdk::frame_support::{
  PalletId, construct_runtime, derive_impl,
  traits::{ConstU32, ConstU128, Get},
};
use polkadot_sdk::frame_system;
use polkadot_sdk::sp_runtime::{
  BuildStorage, DispatchError, Permill,
  testing::H256,
  traits::{BlakeTwo256, IdentityLookup, IntegerSquareRoot},
};
use primitives::{AssetKind, ecosystem::params::PRECISION};
use std::cell::RefCell;
use std::collections::BTreeMap;

// State containers for the stateful DEX mock
thread_local! {
    // XYK pools: sorted (AssetA, AssetB) -> (ReserveA, ReserveB)
    pub static POOLS: RefCell<BTreeMap<(AssetKind, AssetKind), (u128, u128)>> = const { RefCell::new(BTreeMap::new()) };

    // Reverse mapping: pool_id -> sorted asset pair (for get_pool_reserves lookup)
    static POOL_ID_MAP: RefCell<BTreeMap<[u8; 32], (AssetKind, AssetKind)>> = const { RefCell::new(BTreeMap::new()) };

    // LP tokens minted per pool
    pub static LP_TOKENS: RefCell<BTreeMap<(AssetKind, AssetKind), u32>> = const { RefCell::new(BTreeMap::new()) };

    static NEXT_LP_ID: RefCell<u32> = const { RefCell::new(1_000) };

    // Quote overrides: (AssetIn, AssetOut) -> price per PRECISION input unit.
    // When set, quotes come from here instead of pool math, letting tests
    // force a gap between the expected and executed output.
    pub static QUOTE_PRICES: RefCell<BTreeMap<(AssetKind, AssetKind), u128>> = const { RefCell::new(BTreeMap::new()) };
}

fn sorted_pair(a: AssetKind, b: AssetKind) -> (AssetKind, AssetKind) {
  if a < b { (a, b) } else { (b, a) }
}

fn deterministic_pool_id(a: AssetKind, b: AssetKind) -> [u8; 32] {
  use polkadot_sdk::sp_core::Encode;
  use polkadot_sdk::sp_runtime::traits::Hash;
  let key = sorted_pair(a, b);
  BlakeTwo256::hash(&key.encode()).into()
}

// Helper methods to setup state
pub fn set_pool(asset_a: AssetKind, asset_b: AssetKind, reserve_a: u128, reserve_b: u128) {
  let key = sorted_pair(asset_a, asset_b);
  let reserves = if asset_a < asset_b {
    (reserve_a, reserve_b)
  } else {
    (reserve_b, reserve_a)
  };
  POOLS.with(|p| p.borrow_mut().insert(key, reserves));
}

pub fn pool_reserves(asset_a: AssetKind, asset_b: AssetKind) -> Option<(u128, u128)> {
  let key = sorted_pair(asset_a, asset_b);
  let reserves = POOLS.with(|p| p.borrow().get(&key).cloned())?;
  if asset_a < asset_b {
    Some(reserves)
  } else {
    Some((reserves.1, reserves.0))
  }
}

pub fn set_quote_price(asset_in: AssetKind, asset_out: AssetKind, price: u128) {
  QUOTE_PRICES.with(|p| p.borrow_mut().insert((asset_in, asset_out), price));
}

type Block = frame_system::mocking::MockBlock<Test>;

construct_runtime!(
  pub struct Test {
    System: frame_system,
    Balances: polkadot_sdk::pallet_balances,
    Assets: polkadot_sdk::pallet_assets,
    MarketRegistry: pallet_market_registry,
    FeeEngine: pallet_fee_engine,
  }
);

#[derive_impl(frame_system::config_preludes::TestDefaultConfig)]
impl frame_system::Config for Test {
  type Block = Block;
  type AccountId = u64;
  type Lookup = IdentityLookup<Self::AccountId>;
  type Hash = H256;
  type Hashing = BlakeTwo256;
  type AccountData = polkadot_sdk::pallet_balances::AccountData<u128>;
}

impl polkadot_sdk::pallet_balances::Config for Test {
  type MaxLocks = ();
  type MaxReserves = ();
  type ReserveIdentifier = [u8; 8];
  type Balance = u128;
  type DustRemoval = ();
  type RuntimeEvent = RuntimeEvent;
  type ExistentialDeposit = ConstU128<1>;
  type AccountStore = System;
  type WeightInfo = ();
  type FreezeIdentifier = ();
  type MaxFreezes = ();
  type RuntimeHoldReason = ();
  type RuntimeFreezeReason = ();
  type DoneSlashHandler = ();
}

impl polkadot_sdk::pallet_assets::Config for Test {
  type RuntimeEvent = RuntimeEvent;
  type Balance = u128;
  type AssetId = u32;
  type AssetIdParameter = u32;
  type Currency = Balances;
  type CreateOrigin = polkadot_sdk::frame_support::traits::AsEnsureOriginWithArg<
    frame_system::EnsureSigned<Self::AccountId>,
  >;
  type ForceOrigin = frame_system::EnsureRoot<Self::AccountId>;
  type AssetDeposit = ConstU128<1>;
  type AssetAccountDeposit = ConstU128<1>;
  type MetadataDepositBase = ConstU128<1>;
  type MetadataDepositPerByte = ConstU128<1>;
  type ApprovalDeposit = ConstU128<1>;
  type StringLimit = ConstU32<50>;
  type Freezer = ();
  type Extra = ();
  type ReserveData = ();
  type CallbackHandle = ();
  type WeightInfo = ();
  type RemoveItemsLimit = ConstU32<5>;
  type Holder = ();
  #[cfg(feature = "runtime-benchmarks")]
  type BenchmarkHelper = AssetBenchmarkHelper;
}

#[cfg(feature = "runtime-benchmarks")]
pub struct AssetBenchmarkHelper;

#[cfg(feature = "runtime-benchmarks")]
impl polkadot_sdk::pallet_assets::BenchmarkHelper<u32, ()> for AssetBenchmarkHelper {
  fn create_asset_id_parameter(id: u32) -> u32 {
    id
  }
  fn create_reserve_id_parameter(_id: u32) -> () {
    ()
  }
}

impl pallet_market_registry::Config for Test {
  type RegistryOrigin = frame_system::EnsureRoot<u64>;
  type WeightInfo = ();
}

pub struct MockDex;

impl MockDex {
  fn take_asset(who: &u64, asset: AssetKind, amount: u128) -> Result<(), DispatchError> {
    match asset {
      AssetKind::Native => {
        let _ = <Balances as polkadot_sdk::frame_support::traits::Currency<u64>>::withdraw(
          who,
          amount,
          polkadot_sdk::frame_support::traits::WithdrawReasons::TRANSFER,
          polkadot_sdk::frame_support::traits::ExistenceRequirement::KeepAlive,
        )?;
      }
      AssetKind::Local(id) => {
        <Assets as Mutate<u64>>::burn_from(
          id,
          who,
          amount,
          Preservation::Expendable,
          Precision::Exact,
          Fortitude::Polite,
        )?;
      }
    }
    Ok(())
  }

  fn give_asset(who: &u64, asset: AssetKind, amount: u128) -> Result<(), DispatchError> {
    match asset {
      AssetKind::Native => {
        let _ = <Balances as polkadot_sdk::frame_support::traits::Currency<u64>>::deposit_creating(
          who, amount,
        );
      }
      AssetKind::Local(id) => {
        <Assets as Mutate<u64>>::mint_into(id, who, amount)?;
      }
    }
    Ok(())
  }
}

impl pallet_fee_engine::DexApi<u64, u128> for MockDex {
  fn get_pool_id(asset1: AssetKind, asset2: AssetKind) -> Option<[u8; 32]> {
    let key = sorted_pair(asset1, asset2);
    POOLS.with(|p| {
      if p.borrow().contains_key(&key) {
        let id = deterministic_pool_id(asset1, asset2);
        POOL_ID_MAP.with(|m| m.borrow_mut().insert(id, key));
        Some(id)
      } else {
        None
      }
    })
  }

  fn get_pool_reserves(pool_id: [u8; 32]) -> Option<(u128, u128)> {
    POOL_ID_MAP.with(|m| {
      let key = m.borrow().get(&pool_id).cloned()?;
      POOLS.with(|p| p.borrow().get(&key).cloned())
    })
  }

  fn quote_price_exact_tokens_for_tokens(
    asset_in: AssetKind,
    asset_out: AssetKind,
    amount_in: u128,
    _include_fee: bool,
  ) -> Option<u128> {
    if let Some(price) = QUOTE_PRICES.with(|p| p.borrow().get(&(asset_in, asset_out)).cloned()) {
      return Some(amount_in.saturating_mul(price) / PRECISION);
    }
    let key = sorted_pair(asset_in, asset_out);
    let (res_a, res_b) = POOLS.with(|p| p.borrow().get(&key).cloned())?;
    let (reserve_in, reserve_out) = if asset_in < asset_out {
      (res_a, res_b)
    } else {
      (res_b, res_a)
    };
    if reserve_in == 0 || reserve_out == 0 {
      return None;
    }
    Some((amount_in.saturating_mul(reserve_out)) / (reserve_in.saturating_add(amount_in)))
  }

  fn swap_exact_tokens_for_tokens(
    who: &u64,
    path: Vec<AssetKind>,
    amount_in: u128,
    min_amount_out: u128,
  ) -> Result<u128, DispatchError> {
    let asset_in = *path.first().ok_or(DispatchError::Other("Empty path"))?;
    let asset_out = *path.last().ok_or(DispatchError::Other("Empty path"))?;

    let key = sorted_pair(asset_in, asset_out);

    let (res_a, res_b) = POOLS
      .with(|p| p.borrow().get(&key).cloned())
      .ok_or(DispatchError::Other("Pool not found"))?;

    let (reserve_in, reserve_out) = if asset_in < asset_out {
      (res_a, res_b)
    } else {
      (res_b, res_a)
    };

    if reserve_in == 0 || reserve_out == 0 {
      return Err(DispatchError::Other("Empty reserves"));
    }

    // XYK swap math: y_out = (x_in * y_res) / (x_res + x_in)
    let amount_out =
      (amount_in.saturating_mul(reserve_out)) / (reserve_in.saturating_add(amount_in));

    if amount_out < min_amount_out {
      return Err(DispatchError::Other("Slippage exceeded"));
    }

    let (new_res_a, new_res_b) = if asset_in < asset_out {
      (
        res_a.saturating_add(amount_in),
        res_b.saturating_sub(amount_out),
      )
    } else {
      (
        res_a.saturating_sub(amount_out),
        res_b.saturating_add(amount_in),
      )
    };

    POOLS.with(|p| p.borrow_mut().insert(key, (new_res_a, new_res_b)));

    Self::take_asset(who, asset_in, amount_in)?;
    Self::give_asset(who, asset_out, amount_out)?;

    Ok(amount_out)
  }

  fn add_liquidity(
    who: &u64,
    asset1: AssetKind,
    asset2: AssetKind,
    amount1_desired: u128,
    amount2_desired: u128,
    amount1_min: u128,
    amount2_min: u128,
  ) -> Result<(u128, u128, u128), DispatchError> {
    let key = sorted_pair(asset1, asset2);

    let (res_a, res_b) = POOLS
      .with(|p| p.borrow().get(&key).cloned())
      .ok_or(DispatchError::Other("Pool not found"))?;

    // Align desired amounts to the sorted pair order
    let (amount_a_desired, amount_b_desired) = if asset1 == key.0 {
      (amount1_desired, amount2_desired)
    } else {
      (amount2_desired, amount1_desired)
    };

    let (amount_a, amount_b, shares) = if res_a == 0 && res_b == 0 {
      let shares = (amount_a_desired * amount_b_desired).integer_sqrt();
      (amount_a_desired, amount_b_desired, shares)
    } else {
      let amount_b_optimal = (amount_a_desired * res_b) / res_a;
      if amount_b_optimal <= amount_b_desired {
        let shares = (amount_a_desired * 1_000_000_000) / res_a;
        (amount_a_desired, amount_b_optimal, shares)
      } else {
        let amount_a_optimal = (amount_b_desired * res_a) / res_b;
        let shares = (amount_b_desired * 1_000_000_000) / res_b;
        (amount_a_optimal, amount_b_desired, shares)
      }
    };

    let (used1, used2) = if asset1 == key.0 {
      (amount_a, amount_b)
    } else {
      (amount_b, amount_a)
    };
    if used1 < amount1_min || used2 < amount2_min {
      return Err(DispatchError::Other("Below deposit minimum"));
    }

    POOLS.with(|p| {
      p.borrow_mut()
        .insert(key, (res_a + amount_a, res_b + amount_b))
    });

    Self::take_asset(who, asset1, used1)?;
    Self::take_asset(who, asset2, used2)?;

    let lp_id = LP_TOKENS.with(|lp| lp.borrow().get(&key).cloned());
    let lp_id = match lp_id {
      Some(id) => id,
      None => {
        let id = NEXT_LP_ID.with(|n| {
          let mut next = n.borrow_mut();
          let current = *next;
          *next += 1;
          current
        });
        LP_TOKENS.with(|lp| lp.borrow_mut().insert(key, id));
        if !Assets::asset_exists(id) {
          let _ = Assets::force_create(frame_system::RawOrigin::Root.into(), id, 1, true, 1);
        }
        id
      }
    };
    <Assets as Mutate<u64>>::mint_into(lp_id, who, shares)?;

    Ok((used1, used2, shares))
  }
}

pub struct PalletIdStub;
impl Get<PalletId> for PalletIdStub {
  fn get() -> PalletId {
    PalletId(*primitives::pallet_ids::FEE_ENGINE_PALLET_ID)
  }
}

pub struct SlippageToleranceStub;
impl Get<Permill> for SlippageToleranceStub {
  fn get() -> Permill {
    primitives::ecosystem::params::FEE_ENGINE_SLIPPAGE_TOLERANCE
  }
}

pub const MANAGED_ASSET_ID: u32 = 1;

pub struct ManagedAssetStub;
impl Get<AssetKind> for ManagedAssetStub {
  fn get() -> AssetKind {
    AssetKind::Local(MANAGED_ASSET_ID)
  }
}

impl pallet_fee_engine::Config for Test {
  #[cfg(feature = "runtime-benchmarks")]
  type BenchmarkHelper = FeeEngineBenchmarkHelper;
  type AdminOrigin = polkadot_sdk::frame_system::EnsureRoot<u64>;
  type Assets = Assets;
  type Currency = Balances;
  type Dex = MockDex;
  type Classifier = MarketRegistry;
  type PalletId = PalletIdStub;
  type ManagedAsset = ManagedAssetStub;
  type DefaultMinRoyaltySwap =
    ConstU128<{ primitives::ecosystem::params::FEE_ENGINE_MIN_ROYALTY_SWAP }>;
  type DefaultMinLiquiditySwap =
    ConstU128<{ primitives::ecosystem::params::FEE_ENGINE_MIN_LIQUIDITY_SWAP }>;
  type DefaultSlippageTolerance = SlippageToleranceStub;
  type WeightInfo = ();
}

#[cfg(feature = "runtime-benchmarks")]
pub struct FeeEngineBenchmarkHelper;

#[cfg(feature = "runtime-benchmarks")]
impl crate::BenchmarkHelper<AssetKind, u64, u128> for FeeEngineBenchmarkHelper {
  fn ensure_funded(
    who: &u64,
    asset: AssetKind,
    amount: u128,
  ) -> polkadot_sdk::sp_runtime::DispatchResult {
    use polkadot_sdk::frame_support::traits::Currency;
    match asset {
      AssetKind::Native => {
        let _ = Balances::deposit_creating(who, amount);
      }
      AssetKind::Local(id) => {
        if !Assets::asset_exists(id) {
          let _ = Assets::force_create(frame_system::RawOrigin::Root.into(), id, 1, true, 1);
        }
        <Assets as Mutate<u64>>::mint_into(id, who, amount)?;
      }
    }
    Ok(())
  }

  fn create_pool(asset1: AssetKind, asset2: AssetKind) -> polkadot_sdk::sp_runtime::DispatchResult {
    let key = sorted_pair(asset1, asset2);
    POOLS.with(|p| p.borrow_mut().insert(key, (0, 0)));
    Ok(())
  }

  fn add_liquidity(
    _who: &u64,
    asset1: AssetKind,
    asset2: AssetKind,
    amount1: u128,
    amount2: u128,
  ) -> polkadot_sdk::sp_runtime::DispatchResult {
    let key = sorted_pair(asset1, asset2);
    POOLS.with(|p| {
      let mut pools = p.borrow_mut();
      let (r1, r2) = pools.get(&key).cloned().unwrap_or((0, 0));
      let (new_r1, new_r2) = if key.0 == asset1 {
        (r1 + amount1, r2 + amount2)
      } else {
        (r1 + amount2, r2 + amount1)
      };
      pools.insert(key, (new_r1, new_r2));
    });
    Ok(())
  }

  fn set_market_pair(who: &u64) -> polkadot_sdk::sp_runtime::DispatchResult {
    pallet_market_registry::MarketPairs::<Test>::insert(who, ());
    Ok(())
  }
}

pub fn new_test_ext() -> polkadot_sdk::sp_io::TestExternalities {
  let mut t = frame_system::GenesisConfig::<Test>::default()
    .build_storage()
    .unwrap();

  polkadot_sdk::pallet_assets::GenesisConfig::<Test> {
    assets: alloc::vec![(MANAGED_ASSET_ID, 1, true, 1)], // owner 1, sufficient, min_bal 1
    metadata: alloc::vec![],
    accounts: alloc::vec![],
    reserves: alloc::vec![],
    next_asset_id: None,
  }
  .assimilate_storage(&mut t)
  .unwrap();

  // Engine genesis: pallet account gets provider ref (ED-free)
  pallet_fee_engine::GenesisConfig::<Test>::default()
    .assimilate_storage(&mut t)
    .unwrap();

  // Reset state
  POOLS.with(|p| p.borrow_mut().clear());
  POOL_ID_MAP.with(|p| p.borrow_mut().clear());
  LP_TOKENS.with(|p| p.borrow_mut().clear());
  NEXT_LP_ID.with(|n| *n.borrow_mut() = 1_000);
  QUOTE_PRICES.with(|p| p.borrow_mut().clear());

  t.into()
}
