#![cfg_attr(rustfmt, rustfmt_skip)]
#![allow(unused_parens)]
#![allow(unused_imports)]
#![allow(missing_docs)]

use polkadot_sdk::frame_support::{traits::Get, weights::{Weight, constants::RocksDbWeight}};
use core::marker::PhantomData;

pub trait WeightInfo {
	fn set_fee_exempt() -> Weight;
	fn set_market_pair() -> Weight;
	fn rebind_canonical_pair() -> Weight;
	fn set_denied() -> Weight;
}

pub struct SubstrateWeight<T>(PhantomData<T>);
impl<T: polkadot_sdk::frame_system::Config> WeightInfo for SubstrateWeight<T> {
	fn set_fee_exempt() -> Weight {
		Weight::from_parts(10_000_000, 1500)
			.saturating_add(T::DbWeight::get().writes(1))
	}
	fn set_market_pair() -> Weight {
		Weight::from_parts(12_000_000, 1500)
			.saturating_add(T::DbWeight::get().reads(1))
			.saturating_add(T::DbWeight::get().writes(1))
	}
	fn rebind_canonical_pair() -> Weight {
		Weight::from_parts(14_000_000, 1500)
			.saturating_add(T::DbWeight::get().reads(1))
			.saturating_add(T::DbWeight::get().writes(2))
	}
	fn set_denied() -> Weight {
		Weight::from_parts(10_000_000, 1500)
			.saturating_add(T::DbWeight::get().writes(1))
	}
}

impl WeightInfo for () {
	fn set_fee_exempt() -> Weight {
		Weight::from_parts(10_000_000, 1500)
	}
	fn set_market_pair() -> Weight {
		Weight::from_parts(12_000_000, 1500)
	}
	fn rebind_canonical_pair() -> Weight {
		Weight::from_parts(14_000_000, 1500)
	}
	fn set_denied() -> Weight {
		Weight::from_parts(10_000_000, 1500)
	}
}
