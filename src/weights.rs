//! Weights for pallet_amm.
//!
//! These are hand-written estimates, not benchmark output. The storage comments list the
//! reads and writes each call performs; the ref-time figures are placeholders to be replaced
//! by running the `runtime-benchmarks` suite in `benchmarking.rs` against a target runtime.

#![cfg_attr(rustfmt, rustfmt_skip)]
#![allow(unused_parens)]
#![allow(unused_imports)]

use frame_support::{traits::Get, weights::{Weight, constants::RocksDbWeight}};
use sp_std::marker::PhantomData;

/// Weight functions needed for pallet_amm.
pub trait WeightInfo {
	fn create_pair() -> Weight;
	fn mint() -> Weight;
	fn burn() -> Weight;
	fn swap() -> Weight;
	fn skim() -> Weight;
	fn sync() -> Weight;
	fn transfer_shares() -> Weight;
	fn add_liquidity() -> Weight;
	fn add_liquidity_native() -> Weight;
	fn remove_liquidity() -> Weight;
	fn remove_liquidity_native() -> Weight;
	fn swap_exact_tokens_for_tokens(n: u32, ) -> Weight;
	fn swap_tokens_for_exact_tokens(n: u32, ) -> Weight;
	fn swap_exact_native_for_tokens(n: u32, ) -> Weight;
	fn swap_tokens_for_exact_native(n: u32, ) -> Weight;
	fn swap_exact_tokens_for_native(n: u32, ) -> Weight;
	fn swap_native_for_exact_tokens(n: u32, ) -> Weight;
	fn set_fee_to() -> Weight;
	fn set_fee_to_setter() -> Weight;
	fn set_paused() -> Weight;
	fn set_max_trade_percent() -> Weight;
}

/// Weights for pallet_amm using the Substrate node and recommended hardware.
pub struct SubstrateWeight<T>(PhantomData<T>);
impl<T: frame_system::Config> WeightInfo for SubstrateWeight<T> {
	// Storage: Amm PairIndex (r:1 w:1)
	// Storage: Assets Asset (r:2 w:0)
	// Storage: Amm NextPoolIndex (r:1 w:1)
	// Storage: Amm Pools (r:1 w:1)
	// Storage: System Account (r:2 w:2)
	fn create_pair() -> Weight {
		Weight::from_parts(34_020_000, 6196)
			.saturating_add(T::DbWeight::get().reads(7_u64))
			.saturating_add(T::DbWeight::get().writes(5_u64))
	}
	// Storage: Amm PoolLocks (r:1 w:1)
	// Storage: Amm Pools (r:1 w:1)
	// Storage: Assets Account (r:2 w:0)
	// Storage: Amm FeeTo (r:1 w:0)
	// Storage: Amm TotalShares (r:1 w:1)
	// Storage: Amm Shares (r:2 w:2)
	fn mint() -> Weight {
		Weight::from_parts(48_907_000, 7404)
			.saturating_add(T::DbWeight::get().reads(8_u64))
			.saturating_add(T::DbWeight::get().writes(5_u64))
	}
	// Storage: Amm PoolLocks (r:1 w:1)
	// Storage: Amm Pools (r:1 w:1)
	// Storage: Assets Account (r:4 w:4)
	// Storage: Amm FeeTo (r:1 w:0)
	// Storage: Amm TotalShares (r:1 w:1)
	// Storage: Amm Shares (r:1 w:1)
	fn burn() -> Weight {
		Weight::from_parts(79_630_000, 10_402)
			.saturating_add(T::DbWeight::get().reads(9_u64))
			.saturating_add(T::DbWeight::get().writes(8_u64))
	}
	// Storage: Amm PoolLocks (r:1 w:1)
	// Storage: Amm Pools (r:1 w:1)
	// Storage: Assets Account (r:3 w:3)
	fn swap() -> Weight {
		Weight::from_parts(61_254_000, 8_799)
			.saturating_add(T::DbWeight::get().reads(5_u64))
			.saturating_add(T::DbWeight::get().writes(5_u64))
	}
	// Storage: Amm PoolLocks (r:1 w:1)
	// Storage: Amm Pools (r:1 w:0)
	// Storage: Assets Account (r:4 w:4)
	fn skim() -> Weight {
		Weight::from_parts(52_118_000, 10_402)
			.saturating_add(T::DbWeight::get().reads(6_u64))
			.saturating_add(T::DbWeight::get().writes(5_u64))
	}
	// Storage: Amm PoolLocks (r:1 w:1)
	// Storage: Amm Pools (r:1 w:1)
	// Storage: Assets Account (r:2 w:0)
	fn sync() -> Weight {
		Weight::from_parts(24_561_000, 6_208)
			.saturating_add(T::DbWeight::get().reads(4_u64))
			.saturating_add(T::DbWeight::get().writes(2_u64))
	}
	// Storage: Amm Pools (r:1 w:0)
	// Storage: Amm Shares (r:2 w:2)
	fn transfer_shares() -> Weight {
		Weight::from_parts(21_830_000, 6_112)
			.saturating_add(T::DbWeight::get().reads(3_u64))
			.saturating_add(T::DbWeight::get().writes(2_u64))
	}
	// Storage: Amm Paused (r:1 w:0)
	// Storage: Amm PairIndex (r:1 w:0)
	// Storage: Amm Pools (r:1 w:1)
	// Storage: Assets Account (r:4 w:4)
	// Storage: Amm PoolLocks (r:1 w:1)
	// Storage: Amm FeeTo (r:1 w:0)
	// Storage: Amm TotalShares (r:1 w:1)
	// Storage: Amm Shares (r:2 w:2)
	fn add_liquidity() -> Weight {
		Weight::from_parts(98_404_000, 10_402)
			.saturating_add(T::DbWeight::get().reads(12_u64))
			.saturating_add(T::DbWeight::get().writes(9_u64))
	}
	// Storage: System Account (r:2 w:2)
	fn add_liquidity_native() -> Weight {
		Weight::from_parts(121_370_000, 10_402)
			.saturating_add(T::DbWeight::get().reads(15_u64))
			.saturating_add(T::DbWeight::get().writes(11_u64))
	}
	// Storage: Amm Paused (r:1 w:0)
	// Storage: Amm PairIndex (r:1 w:0)
	// Storage: Amm Pools (r:1 w:1)
	// Storage: Amm Shares (r:2 w:2)
	// Storage: Assets Account (r:4 w:4)
	// Storage: Amm PoolLocks (r:1 w:1)
	// Storage: Amm FeeTo (r:1 w:0)
	// Storage: Amm TotalShares (r:1 w:1)
	fn remove_liquidity() -> Weight {
		Weight::from_parts(104_115_000, 10_402)
			.saturating_add(T::DbWeight::get().reads(12_u64))
			.saturating_add(T::DbWeight::get().writes(9_u64))
	}
	// Storage: System Account (r:2 w:2)
	fn remove_liquidity_native() -> Weight {
		Weight::from_parts(139_022_000, 13_598)
			.saturating_add(T::DbWeight::get().reads(17_u64))
			.saturating_add(T::DbWeight::get().writes(14_u64))
	}
	/// The range of component `n` is `[2, 4]`.
	fn swap_exact_tokens_for_tokens(n: u32, ) -> Weight {
		Weight::from_parts(20_480_000, 990)
			.saturating_add(Weight::from_parts(61_907_000, 0).saturating_mul(n.into()))
			.saturating_add(T::DbWeight::get().reads(4_u64))
			.saturating_add(T::DbWeight::get().reads((5_u64).saturating_mul(n.into())))
			.saturating_add(T::DbWeight::get().writes((5_u64).saturating_mul(n.into())))
			.saturating_add(Weight::from_parts(0, 3_402).saturating_mul(n.into()))
	}
	/// The range of component `n` is `[2, 4]`.
	fn swap_tokens_for_exact_tokens(n: u32, ) -> Weight {
		Weight::from_parts(21_013_000, 990)
			.saturating_add(Weight::from_parts(62_440_000, 0).saturating_mul(n.into()))
			.saturating_add(T::DbWeight::get().reads(4_u64))
			.saturating_add(T::DbWeight::get().reads((5_u64).saturating_mul(n.into())))
			.saturating_add(T::DbWeight::get().writes((5_u64).saturating_mul(n.into())))
			.saturating_add(Weight::from_parts(0, 3_402).saturating_mul(n.into()))
	}
	/// The range of component `n` is `[2, 4]`.
	fn swap_exact_native_for_tokens(n: u32, ) -> Weight {
		Weight::from_parts(43_652_000, 3_593)
			.saturating_add(Weight::from_parts(61_907_000, 0).saturating_mul(n.into()))
			.saturating_add(T::DbWeight::get().reads(6_u64))
			.saturating_add(T::DbWeight::get().reads((5_u64).saturating_mul(n.into())))
			.saturating_add(T::DbWeight::get().writes(3_u64))
			.saturating_add(T::DbWeight::get().writes((5_u64).saturating_mul(n.into())))
			.saturating_add(Weight::from_parts(0, 3_402).saturating_mul(n.into()))
	}
	/// The range of component `n` is `[2, 4]`.
	fn swap_tokens_for_exact_native(n: u32, ) -> Weight {
		Weight::from_parts(58_210_000, 3_593)
			.saturating_add(Weight::from_parts(62_440_000, 0).saturating_mul(n.into()))
			.saturating_add(T::DbWeight::get().reads(7_u64))
			.saturating_add(T::DbWeight::get().reads((5_u64).saturating_mul(n.into())))
			.saturating_add(T::DbWeight::get().writes(4_u64))
			.saturating_add(T::DbWeight::get().writes((5_u64).saturating_mul(n.into())))
			.saturating_add(Weight::from_parts(0, 3_402).saturating_mul(n.into()))
	}
	/// The range of component `n` is `[2, 4]`.
	fn swap_exact_tokens_for_native(n: u32, ) -> Weight {
		Weight::from_parts(58_210_000, 3_593)
			.saturating_add(Weight::from_parts(61_907_000, 0).saturating_mul(n.into()))
			.saturating_add(T::DbWeight::get().reads(7_u64))
			.saturating_add(T::DbWeight::get().reads((5_u64).saturating_mul(n.into())))
			.saturating_add(T::DbWeight::get().writes(4_u64))
			.saturating_add(T::DbWeight::get().writes((5_u64).saturating_mul(n.into())))
			.saturating_add(Weight::from_parts(0, 3_402).saturating_mul(n.into()))
	}
	/// The range of component `n` is `[2, 4]`.
	fn swap_native_for_exact_tokens(n: u32, ) -> Weight {
		Weight::from_parts(43_652_000, 3_593)
			.saturating_add(Weight::from_parts(62_440_000, 0).saturating_mul(n.into()))
			.saturating_add(T::DbWeight::get().reads(6_u64))
			.saturating_add(T::DbWeight::get().reads((5_u64).saturating_mul(n.into())))
			.saturating_add(T::DbWeight::get().writes(3_u64))
			.saturating_add(T::DbWeight::get().writes((5_u64).saturating_mul(n.into())))
			.saturating_add(Weight::from_parts(0, 3_402).saturating_mul(n.into()))
	}
	// Storage: Amm FeeToSetter (r:1 w:0)
	// Storage: Amm FeeTo (r:0 w:1)
	fn set_fee_to() -> Weight {
		Weight::from_parts(12_304_000, 1_517)
			.saturating_add(T::DbWeight::get().reads(1_u64))
			.saturating_add(T::DbWeight::get().writes(1_u64))
	}
	// Storage: Amm FeeToSetter (r:0 w:1)
	fn set_fee_to_setter() -> Weight {
		Weight::from_parts(8_903_000, 0)
			.saturating_add(T::DbWeight::get().writes(1_u64))
	}
	// Storage: Amm Paused (r:0 w:1)
	fn set_paused() -> Weight {
		Weight::from_parts(8_211_000, 0)
			.saturating_add(T::DbWeight::get().writes(1_u64))
	}
	// Storage: Amm MaxTradePercent (r:0 w:1)
	fn set_max_trade_percent() -> Weight {
		Weight::from_parts(8_307_000, 0)
			.saturating_add(T::DbWeight::get().writes(1_u64))
	}
}

// For backwards compatibility and tests
impl WeightInfo for () {
	fn create_pair() -> Weight {
		Weight::from_parts(34_020_000, 6196)
			.saturating_add(RocksDbWeight::get().reads(7_u64))
			.saturating_add(RocksDbWeight::get().writes(5_u64))
	}
	fn mint() -> Weight {
		Weight::from_parts(48_907_000, 7404)
			.saturating_add(RocksDbWeight::get().reads(8_u64))
			.saturating_add(RocksDbWeight::get().writes(5_u64))
	}
	fn burn() -> Weight {
		Weight::from_parts(79_630_000, 10_402)
			.saturating_add(RocksDbWeight::get().reads(9_u64))
			.saturating_add(RocksDbWeight::get().writes(8_u64))
	}
	fn swap() -> Weight {
		Weight::from_parts(61_254_000, 8_799)
			.saturating_add(RocksDbWeight::get().reads(5_u64))
			.saturating_add(RocksDbWeight::get().writes(5_u64))
	}
	fn skim() -> Weight {
		Weight::from_parts(52_118_000, 10_402)
			.saturating_add(RocksDbWeight::get().reads(6_u64))
			.saturating_add(RocksDbWeight::get().writes(5_u64))
	}
	fn sync() -> Weight {
		Weight::from_parts(24_561_000, 6_208)
			.saturating_add(RocksDbWeight::get().reads(4_u64))
			.saturating_add(RocksDbWeight::get().writes(2_u64))
	}
	fn transfer_shares() -> Weight {
		Weight::from_parts(21_830_000, 6_112)
			.saturating_add(RocksDbWeight::get().reads(3_u64))
			.saturating_add(RocksDbWeight::get().writes(2_u64))
	}
	fn add_liquidity() -> Weight {
		Weight::from_parts(98_404_000, 10_402)
			.saturating_add(RocksDbWeight::get().reads(12_u64))
			.saturating_add(RocksDbWeight::get().writes(9_u64))
	}
	fn add_liquidity_native() -> Weight {
		Weight::from_parts(121_370_000, 10_402)
			.saturating_add(RocksDbWeight::get().reads(15_u64))
			.saturating_add(RocksDbWeight::get().writes(11_u64))
	}
	fn remove_liquidity() -> Weight {
		Weight::from_parts(104_115_000, 10_402)
			.saturating_add(RocksDbWeight::get().reads(12_u64))
			.saturating_add(RocksDbWeight::get().writes(9_u64))
	}
	fn remove_liquidity_native() -> Weight {
		Weight::from_parts(139_022_000, 13_598)
			.saturating_add(RocksDbWeight::get().reads(17_u64))
			.saturating_add(RocksDbWeight::get().writes(14_u64))
	}
	fn swap_exact_tokens_for_tokens(n: u32, ) -> Weight {
		Weight::from_parts(20_480_000, 990)
			.saturating_add(Weight::from_parts(61_907_000, 0).saturating_mul(n.into()))
			.saturating_add(RocksDbWeight::get().reads(4_u64))
			.saturating_add(RocksDbWeight::get().reads((5_u64).saturating_mul(n.into())))
			.saturating_add(RocksDbWeight::get().writes((5_u64).saturating_mul(n.into())))
			.saturating_add(Weight::from_parts(0, 3_402).saturating_mul(n.into()))
	}
	fn swap_tokens_for_exact_tokens(n: u32, ) -> Weight {
		Weight::from_parts(21_013_000, 990)
			.saturating_add(Weight::from_parts(62_440_000, 0).saturating_mul(n.into()))
			.saturating_add(RocksDbWeight::get().reads(4_u64))
			.saturating_add(RocksDbWeight::get().reads((5_u64).saturating_mul(n.into())))
			.saturating_add(RocksDbWeight::get().writes((5_u64).saturating_mul(n.into())))
			.saturating_add(Weight::from_parts(0, 3_402).saturating_mul(n.into()))
	}
	fn swap_exact_native_for_tokens(n: u32, ) -> Weight {
		Weight::from_parts(43_652_000, 3_593)
			.saturating_add(Weight::from_parts(61_907_000, 0).saturating_mul(n.into()))
			.saturating_add(RocksDbWeight::get().reads(6_u64))
			.saturating_add(RocksDbWeight::get().reads((5_u64).saturating_mul(n.into())))
			.saturating_add(RocksDbWeight::get().writes(3_u64))
			.saturating_add(RocksDbWeight::get().writes((5_u64).saturating_mul(n.into())))
			.saturating_add(Weight::from_parts(0, 3_402).saturating_mul(n.into()))
	}
	fn swap_tokens_for_exact_native(n: u32, ) -> Weight {
		Weight::from_parts(58_210_000, 3_593)
			.saturating_add(Weight::from_parts(62_440_000, 0).saturating_mul(n.into()))
			.saturating_add(RocksDbWeight::get().reads(7_u64))
			.saturating_add(RocksDbWeight::get().reads((5_u64).saturating_mul(n.into())))
			.saturating_add(RocksDbWeight::get().writes(4_u64))
			.saturating_add(RocksDbWeight::get().writes((5_u64).saturating_mul(n.into())))
			.saturating_add(Weight::from_parts(0, 3_402).saturating_mul(n.into()))
	}
	fn swap_exact_tokens_for_native(n: u32, ) -> Weight {
		Weight::from_parts(58_210_000, 3_593)
			.saturating_add(Weight::from_parts(61_907_000, 0).saturating_mul(n.into()))
			.saturating_add(RocksDbWeight::get().reads(7_u64))
			.saturating_add(RocksDbWeight::get().reads((5_u64).saturating_mul(n.into())))
			.saturating_add(RocksDbWeight::get().writes(4_u64))
			.saturating_add(RocksDbWeight::get().writes((5_u64).saturating_mul(n.into())))
			.saturating_add(Weight::from_parts(0, 3_402).saturating_mul(n.into()))
	}
	fn swap_native_for_exact_tokens(n: u32, ) -> Weight {
		Weight::from_parts(43_652_000, 3_593)
			.saturating_add(Weight::from_parts(62_440_000, 0).saturating_mul(n.into()))
			.saturating_add(RocksDbWeight::get().reads(6_u64))
			.saturating_add(RocksDbWeight::get().reads((5_u64).saturating_mul(n.into())))
			.saturating_add(RocksDbWeight::get().writes(3_u64))
			.saturating_add(RocksDbWeight::get().writes((5_u64).saturating_mul(n.into())))
			.saturating_add(Weight::from_parts(0, 3_402).saturating_mul(n.into()))
	}
	fn set_fee_to() -> Weight {
		Weight::from_parts(12_304_000, 1_517)
			.saturating_add(RocksDbWeight::get().reads(1_u64))
			.saturating_add(RocksDbWeight::get().writes(1_u64))
	}
	fn set_fee_to_setter() -> Weight {
		Weight::from_parts(8_903_000, 0)
			.saturating_add(RocksDbWeight::get().writes(1_u64))
	}
	fn set_paused() -> Weight {
		Weight::from_parts(8_211_000, 0)
			.saturating_add(RocksDbWeight::get().writes(1_u64))
	}
	fn set_max_trade_percent() -> Weight {
		Weight::from_parts(8_307_000, 0)
			.saturating_add(RocksDbWeight::get().writes(1_u64))
	}
}
