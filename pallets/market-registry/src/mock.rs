extern crate alloc;

use crate as pallet_market_registry;
use polkadot_sdk::frame_support::{construct_runtime, derive_impl};
use polkadot_sdk::frame_system;
use polkadot_sdk::sp_runtime::{
  BuildStorage,
  testing::H256,
  traits::{BlakeTwo256, IdentityLookup},
};

type Block = frame_system::mocking::MockBlock<Test>;

construct_runtime!(
  pub struct Test {
    System: frame_system,
    MarketRegistry: pallet_market_registry,
  }
);

#[derive_impl(frame_system::config_preludes::TestDefaultConfig)]
impl frame_system::Config for Test {
  type Block = Block;
  type AccountId = u64;
  type Lookup = IdentityLookup<Self::AccountId>;
  type Hash = H256;
  type Hashing = BlakeTwo256;
}

impl pallet_market_registry::Config for Test {
  type RegistryOrigin = frame_system::EnsureRoot<u64>;
  type WeightInfo = ();
}

pub fn new_test_ext() -> polkadot_sdk::sp_io::TestExternalities {
  let t = frame_system::GenesisConfig::<Test>::default()
    .build_storage()
    .unwrap();
  t.into()
}

/// Externalities with a canonical pair and exemptions pre-seeded
pub fn new_test_ext_with_genesis(
  canonical_pair: Option<u64>,
  fee_exempt: alloc::vec::Vec<u64>,
) -> polkadot_sdk::sp_io::TestExternalities {
  let mut t = frame_system::GenesisConfig::<Test>::default()
    .build_storage()
    .unwrap();
  pallet_market_registry::GenesisConfig::<Test> {
    canonical_pair,
    fee_exempt,
    market_pairs: alloc::vec![],
  }
  .assimilate_storage(&mut t)
  .unwrap();
  t.into()
}
