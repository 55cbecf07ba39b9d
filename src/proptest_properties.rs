//! Property-based tests for the pool invariants.
//!
//! 1. **Invariant preservation**: the reserve product never decreases across a swap.
//! 2. **Quote consistency**: `get_amount_in(get_amount_out(x))` is at most `x + 1` and buys the quoted output.
//! 3. **Share conservation**: per-account shares always sum to the pool total.
//! 4. **Liquidity round trip**: adding then removing never returns more than deposited.
//! 5. **Accumulator monotonicity**: price accumulators only grow while time advances.
//! 6. **Path composition**: a multi-hop quote is the chain of single-hop quotes.

use proptest::prelude::*;
use sp_core::U256;

use crate::mock::*;
use crate::Shares;

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

fn reserve_strategy() -> impl Strategy<Value = u128> {
    10_000u128..100_000_000_000u128
}

fn product(pool_id: u32) -> U256 {
    let Some(pool) = Amm::pools(pool_id) else {
        panic!("pool exists");
    };
    U256::from(pool.reserve_a) * U256::from(pool.reserve_b)
}

fn shares_sum(pool_id: u32) -> Balance {
    Shares::<Test>::iter_prefix_values(pool_id).sum()
}

// ---------------------------------------------------------------------------
// 1. Invariant preservation
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_product_never_decreases(
        reserve_a in reserve_strategy(),
        reserve_b in reserve_strategy(),
        percent in 1u128..=30,
        a_to_b in any::<bool>(),
    ) {
        new_test_ext().execute_with(|| {
            provide_liquidity(ALICE, ASSET_A, ASSET_B, reserve_a, reserve_b);
            let before = product(0);
            let (path, reserve_in) = if a_to_b {
                (vec![ASSET_A, ASSET_B], reserve_a)
            } else {
                (vec![ASSET_B, ASSET_A], reserve_b)
            };
            let amount_in = (reserve_in * percent / 100).max(1);
            if Amm::get_amounts_out(amount_in, &path).is_err() {
                return Ok(());
            }
            prop_assert!(Amm::swap_exact_tokens_for_tokens(
                RuntimeOrigin::signed(BOB),
                amount_in,
                0,
                path,
                BOB,
                DEADLINE,
            )
            .is_ok());
            prop_assert!(product(0) >= before, "product decreased");
            Ok(())
        })?;
    }
}

// ---------------------------------------------------------------------------
// 2. Quote consistency
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_amount_in_round_trip_within_one_unit(
        reserve_in in reserve_strategy(),
        reserve_out in reserve_strategy(),
        amount_in in 1u128..1_000_000_000u128,
    ) {
        let Ok(amount_out) = Amm::get_amount_out(amount_in, reserve_in, reserve_out) else {
            return Ok(());
        };
        prop_assume!(amount_out > 0);
        let Ok(required) = Amm::get_amount_in(amount_out, reserve_in, reserve_out) else {
            panic!("quotable output");
        };
        // One unit of slack for the rounding up of `get_amount_in`
        prop_assert!(required <= amount_in + 1, "{} > {}", required, amount_in + 1);
        // and the required input does buy that output
        let Ok(bought) = Amm::get_amount_out(required, reserve_in, reserve_out) else {
            panic!("quotable input");
        };
        prop_assert!(bought >= amount_out);
    }
}

// ---------------------------------------------------------------------------
// 3 & 4. Share conservation and liquidity round trip
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_shares_conserved(
        reserve_a in reserve_strategy(),
        reserve_b in reserve_strategy(),
        deposit_a in 1_000u128..1_000_000_000u128,
        deposit_b in 1_000u128..1_000_000_000u128,
        withdraw_percent in 1u128..=100,
    ) {
        new_test_ext().execute_with(|| {
            provide_liquidity(ALICE, ASSET_A, ASSET_B, reserve_a, reserve_b);
            prop_assert_eq!(shares_sum(0), Amm::total_shares(0));

            if Amm::add_liquidity(
                RuntimeOrigin::signed(BOB),
                ASSET_A,
                ASSET_B,
                deposit_a,
                deposit_b,
                0,
                0,
                BOB,
                DEADLINE,
            )
            .is_err()
            {
                // Deposit too small for a single share
                return Ok(());
            }
            prop_assert_eq!(shares_sum(0), Amm::total_shares(0));

            let spent_a = INIT_BALANCE - Assets::balance(ASSET_A, BOB);
            let spent_b = INIT_BALANCE - Assets::balance(ASSET_B, BOB);
            prop_assert!(spent_a <= deposit_a && spent_b <= deposit_b);

            let liquidity = (Amm::shares(0, BOB) * withdraw_percent / 100).max(1);
            if Amm::remove_liquidity(
                RuntimeOrigin::signed(BOB),
                ASSET_A,
                ASSET_B,
                liquidity,
                0,
                0,
                BOB,
                DEADLINE,
            )
            .is_ok()
            {
                prop_assert_eq!(shares_sum(0), Amm::total_shares(0));
                prop_assert!(Assets::balance(ASSET_A, BOB) <= INIT_BALANCE);
                prop_assert!(Assets::balance(ASSET_B, BOB) <= INIT_BALANCE);
            }
            Ok(())
        })?;
    }
}

// ---------------------------------------------------------------------------
// 5. Accumulator monotonicity
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_accumulators_grow(
        reserve_a in reserve_strategy(),
        reserve_b in reserve_strategy(),
        steps in proptest::collection::vec((1u64..10_000, 1u128..=30), 1..5),
    ) {
        new_test_ext().execute_with(|| {
            provide_liquidity(ALICE, ASSET_A, ASSET_B, reserve_a, reserve_b);
            let mut now = 1u64;
            let Some(pool) = Amm::pools(0) else {
                panic!("pool exists");
            };
            let (mut last_a, mut last_b) = (pool.price_a_cumulative, pool.price_b_cumulative);
            for (elapsed, percent) in steps {
                now += elapsed;
                set_time(now);
                let (pool_a, _) = Amm::get_reserves(&ASSET_A, &ASSET_B).unwrap_or_default();
                let amount_in = (pool_a * percent / 100).max(1);
                let _ = Amm::swap_exact_tokens_for_tokens(
                    RuntimeOrigin::signed(BOB),
                    amount_in,
                    0,
                    vec![ASSET_A, ASSET_B],
                    BOB,
                    DEADLINE,
                );
                prop_assert!(Amm::sync(RuntimeOrigin::signed(BOB), 0).is_ok());
                let Some(pool) = Amm::pools(0) else {
                    panic!("pool exists");
                };
                prop_assert!(pool.price_a_cumulative > last_a);
                prop_assert!(pool.price_b_cumulative > last_b);
                (last_a, last_b) = (pool.price_a_cumulative, pool.price_b_cumulative);
            }
            Ok(())
        })?;
    }
}

// ---------------------------------------------------------------------------
// 6. Path composition
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_path_is_chain_of_hops(
        reserve_ab in (reserve_strategy(), reserve_strategy()),
        reserve_bc in (reserve_strategy(), reserve_strategy()),
        amount_in in 1u128..1_000_000u128,
    ) {
        new_test_ext().execute_with(|| {
            provide_liquidity(ALICE, ASSET_A, ASSET_B, reserve_ab.0, reserve_ab.1);
            provide_liquidity(ALICE, ASSET_B, ASSET_C, reserve_bc.0, reserve_bc.1);
            let path = [ASSET_A, ASSET_B, ASSET_C];
            let hop_1 = Amm::get_amount_out(amount_in, reserve_ab.0, reserve_ab.1);
            let hop_2 = hop_1.and_then(|out| Amm::get_amount_out(out, reserve_bc.0, reserve_bc.1));
            match (Amm::get_amounts_out(amount_in, &path), hop_1, hop_2) {
                (Ok(amounts), Ok(out_1), Ok(out_2)) => {
                    prop_assert_eq!(amounts, vec![amount_in, out_1, out_2]);
                },
                (Ok(amounts), _, _) => prop_assert!(false, "path quoted as {:?}", amounts),
                (Err(_), _, _) => {},
            }
            Ok(())
        })?;
    }
}
