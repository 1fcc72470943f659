#![cfg_attr(rustfmt, rustfmt_skip)]
#![allow(unused_parens)]
#![allow(unused_imports)]
#![allow(missing_docs)]

use polkadot_sdk::frame_support::{traits::Get, weights::{Weight, constants::RocksDbWeight}};
use core::marker::PhantomData;

pub trait WeightInfo {
	fn transfer() -> Weight;
	fn process_royalty_fees() -> Weight;
	fn process_liquidity_fees() -> Weight;
	fn set_fee_rates() -> Weight;
	fn set_swap_thresholds() -> Weight;
	fn set_fee_recipient() -> Weight;
	fn set_swap_enabled() -> Weight;
	fn set_slippage_tolerance() -> Weight;
}

pub struct SubstrateWeight<T>(PhantomData<T>);
impl<T: polkadot_sdk::frame_system::Config> WeightInfo for SubstrateWeight<T> {
	// Worst case includes an inline pool conversion
	fn transfer() -> Weight {
		Weight::from_parts(120_000_000, 6000)
			.saturating_add(T::DbWeight::get().reads(10))
			.saturating_add(T::DbWeight::get().writes(8))
	}
	fn process_royalty_fees() -> Weight {
		Weight::from_parts(80_000_000, 5000)
			.saturating_add(T::DbWeight::get().reads(6))
			.saturating_add(T::DbWeight::get().writes(5))
	}
	fn process_liquidity_fees() -> Weight {
		Weight::from_parts(90_000_000, 5000)
			.saturating_add(T::DbWeight::get().reads(6))
			.saturating_add(T::DbWeight::get().writes(6))
	}
	fn set_fee_rates() -> Weight {
		Weight::from_parts(15_000_000, 1500)
			.saturating_add(T::DbWeight::get().reads(1))
			.saturating_add(T::DbWeight::get().writes(1))
	}
	fn set_swap_thresholds() -> Weight {
		Weight::from_parts(12_000_000, 1500)
			.saturating_add(T::DbWeight::get().writes(2))
	}
	fn set_fee_recipient() -> Weight {
		Weight::from_parts(12_000_000, 1500)
			.saturating_add(T::DbWeight::get().reads(1))
			.saturating_add(T::DbWeight::get().writes(1))
	}
	fn set_swap_enabled() -> Weight {
		Weight::from_parts(10_000_000, 1500)
			.saturating_add(T::DbWeight::get().writes(1))
	}
	fn set_slippage_tolerance() -> Weight {
		Weight::from_parts(12_000_000, 1500)
			.saturating_add(T::DbWeight::get().reads(1))
			.saturating_add(T::DbWeight::get().writes(1))
	}
}

impl WeightInfo for () {
	fn transfer() -> Weight {
		Weight::from_parts(120_000_000, 6000)
	}
	fn process_royalty_fees() -> Weight {
		Weight::from_parts(80_000_000, 5000)
	}
	fn process_liquidity_fees() -> Weight {
		Weight::from_parts(90_000_000, 5000)
	}
	fn set_fee_rates() -> Weight {
		Weight::from_parts(15_000_000, 1500)
	}
	fn set_swap_thresholds() -> Weight {
		Weight::from_parts(12_000_000, 1500)
	}
	fn set_fee_recipient() -> Weight {
		Weight::from_parts(12_000_000, 1500)
	}
	fn set_swap_enabled() -> Weight {
		Weight::from_parts(10_000_000, 1500)
	}
	fn set_slippage_tolerance() -> Weight {
		Weight::from_parts(12_000_000, 1500)
	}
}
