use crate::{AccountIdOf, Call, Config, Pallet};
use frame_benchmarking::{benchmarks, whitelisted_caller, BenchmarkError};
use frame_support::{
    pallet_prelude::DispatchResult,
    traits::{
        fungible,
        fungibles::{self, Create, Inspect},
        EnsureOrigin, Get,
    },
};
use frame_system::RawOrigin;
use sp_runtime::DispatchError;
use sp_std::{vec, vec::Vec};

const INIT_BALANCE: u128 = 1_000_000_000_000_000;
const INIT_LIQUIDITY: u128 = 1_000_000_000_000;
const TRADE: u128 = 1_000_000;
const DEADLINE: u64 = u64::MAX;
/// First id of the assets created by the benchmarks.
const ASSET_BASE: u32 = 201;

fn funded_caller<T>() -> AccountIdOf<T>
where
    T: Config<AssetId = u32, Balance = u128>,
{
    let caller: T::AccountId = whitelisted_caller();
    <T::Currency as fungible::Mutate<_>>::set_balance(&caller, INIT_BALANCE);
    caller
}

fn create_asset<T>(asset_id: u32, owner: &AccountIdOf<T>) -> DispatchResult
where
    T: Config<AssetId = u32, Balance = u128>,
    T::Assets: Create<AccountIdOf<T>>,
{
    if !T::Assets::asset_exists(asset_id) {
        T::Assets::create(asset_id, owner.clone(), true, 1)?;
    }
    <T::Assets as fungibles::Mutate<_>>::mint_into(asset_id, owner, INIT_BALANCE)?;
    Ok(())
}

fn add_pool<T>(caller: &AccountIdOf<T>, asset_a: u32, asset_b: u32) -> DispatchResult
where
    T: Config<AssetId = u32, Balance = u128>,
{
    Pallet::<T>::add_liquidity(
        RawOrigin::Signed(caller.clone()).into(),
        asset_a,
        asset_b,
        INIT_LIQUIDITY,
        INIT_LIQUIDITY,
        0,
        0,
        caller.clone(),
        DEADLINE,
    )
}

fn add_native_pool<T>(caller: &AccountIdOf<T>, asset: u32) -> DispatchResult
where
    T: Config<AssetId = u32, Balance = u128>,
{
    Pallet::<T>::add_liquidity_native(
        RawOrigin::Signed(caller.clone()).into(),
        asset,
        INIT_LIQUIDITY,
        INIT_LIQUIDITY,
        0,
        0,
        caller.clone(),
        DEADLINE,
    )
}

/// Fresh assets `ASSET_BASE..ASSET_BASE + n` with a funded pool between each neighbour.
fn prepare_path<T>(caller: &AccountIdOf<T>, n: u32) -> Result<Vec<u32>, DispatchError>
where
    T: Config<AssetId = u32, Balance = u128>,
    T::Assets: Create<AccountIdOf<T>>,
{
    let path: Vec<u32> = (ASSET_BASE..ASSET_BASE + n).collect();
    for asset in &path {
        create_asset::<T>(*asset, caller)?;
    }
    for pair in path.windows(2) {
        add_pool::<T>(caller, pair[0], pair[1])?;
    }
    Ok(path)
}

/// Path of `n` assets starting with the wrapped native asset.
fn prepare_native_path<T>(caller: &AccountIdOf<T>, n: u32) -> Result<Vec<u32>, DispatchError>
where
    T: Config<AssetId = u32, Balance = u128>,
    T::Assets: Create<AccountIdOf<T>>,
{
    let tail = prepare_path::<T>(caller, n - 1)?;
    add_native_pool::<T>(caller, tail[0])?;
    let mut path = vec![T::WrappedNative::get()];
    path.extend(tail);
    Ok(path)
}

fn reversed(mut path: Vec<u32>) -> Vec<u32> {
    path.reverse();
    path
}

benchmarks! {
    where_clause {
        where
            T: Config<AssetId = u32, Balance = u128>,
            T::Assets: Create<AccountIdOf<T>>,
    }

    create_pair {
        let caller = funded_caller::<T>();
        create_asset::<T>(ASSET_BASE, &caller)?;
        create_asset::<T>(ASSET_BASE + 1, &caller)?;
    }: _(RawOrigin::Signed(caller), ASSET_BASE + 1, ASSET_BASE)
    verify {
        assert!(Pallet::<T>::get_pair(&ASSET_BASE, &(ASSET_BASE + 1)).is_some());
    }

    mint {
        let caller = funded_caller::<T>();
        create_asset::<T>(ASSET_BASE, &caller)?;
        create_asset::<T>(ASSET_BASE + 1, &caller)?;
        let pool_id = Pallet::<T>::do_create_pair(&caller, ASSET_BASE, ASSET_BASE + 1)?;
        let pool_account = Pallet::<T>::pool_account(pool_id);
        Pallet::<T>::transfer_asset(&ASSET_BASE, &caller, &pool_account, INIT_LIQUIDITY)?;
        Pallet::<T>::transfer_asset(&(ASSET_BASE + 1), &caller, &pool_account, INIT_LIQUIDITY)?;
    }: _(RawOrigin::Signed(caller.clone()), pool_id, caller.clone())
    verify {
        assert!(Pallet::<T>::shares(pool_id, &caller) > 0);
    }

    burn {
        let caller = funded_caller::<T>();
        let path = prepare_path::<T>(&caller, 2)?;
        let pool_id = Pallet::<T>::get_pair(&path[0], &path[1]).ok_or("pool not created")?;
        Pallet::<T>::do_transfer_shares(pool_id, &caller, &Pallet::<T>::pool_account(pool_id), TRADE)?;
        let total = Pallet::<T>::total_shares(pool_id);
    }: _(RawOrigin::Signed(caller.clone()), pool_id, caller.clone())
    verify {
        assert_eq!(Pallet::<T>::total_shares(pool_id), total - TRADE);
    }

    swap {
        let caller = funded_caller::<T>();
        let path = prepare_path::<T>(&caller, 2)?;
        let pool_id = Pallet::<T>::get_pair(&path[0], &path[1]).ok_or("pool not created")?;
        Pallet::<T>::transfer_asset(&path[0], &caller, &Pallet::<T>::pool_account(pool_id), TRADE)?;
        let amount_out = Pallet::<T>::get_amount_out(TRADE, INIT_LIQUIDITY, INIT_LIQUIDITY)
            .map_err(DispatchError::from)?;
    }: _(RawOrigin::Signed(caller.clone()), pool_id, 0, amount_out, caller.clone(), Vec::new())
    verify {
        let pool = Pallet::<T>::pools(pool_id).ok_or("pool removed")?;
        assert_eq!(pool.reserve_a, INIT_LIQUIDITY + TRADE);
    }

    skim {
        let caller = funded_caller::<T>();
        let path = prepare_path::<T>(&caller, 2)?;
        let pool_id = Pallet::<T>::get_pair(&path[0], &path[1]).ok_or("pool not created")?;
        Pallet::<T>::transfer_asset(&path[0], &caller, &Pallet::<T>::pool_account(pool_id), TRADE)?;
        let before = T::Assets::balance(path[0], &caller);
    }: _(RawOrigin::Signed(caller.clone()), pool_id, caller.clone())
    verify {
        assert_eq!(T::Assets::balance(path[0], &caller), before + TRADE);
    }

    sync {
        let caller = funded_caller::<T>();
        let path = prepare_path::<T>(&caller, 2)?;
        let pool_id = Pallet::<T>::get_pair(&path[0], &path[1]).ok_or("pool not created")?;
        Pallet::<T>::transfer_asset(&path[0], &caller, &Pallet::<T>::pool_account(pool_id), TRADE)?;
    }: _(RawOrigin::Signed(caller), pool_id)
    verify {
        let pool = Pallet::<T>::pools(pool_id).ok_or("pool removed")?;
        assert_eq!(pool.reserve_a, INIT_LIQUIDITY + TRADE);
    }

    transfer_shares {
        let caller = funded_caller::<T>();
        let path = prepare_path::<T>(&caller, 2)?;
        let pool_id = Pallet::<T>::get_pair(&path[0], &path[1]).ok_or("pool not created")?;
        let receiver: T::AccountId = frame_benchmarking::account("receiver", 0, 0);
    }: _(RawOrigin::Signed(caller), pool_id, receiver.clone(), TRADE)
    verify {
        assert_eq!(Pallet::<T>::shares(pool_id, &receiver), TRADE);
    }

    add_liquidity {
        let caller = funded_caller::<T>();
        create_asset::<T>(ASSET_BASE, &caller)?;
        create_asset::<T>(ASSET_BASE + 1, &caller)?;
    }: _(
        RawOrigin::Signed(caller.clone()),
        ASSET_BASE,
        ASSET_BASE + 1,
        INIT_LIQUIDITY,
        INIT_LIQUIDITY,
        0,
        0,
        caller.clone(),
        DEADLINE
    )
    verify {
        assert!(Pallet::<T>::get_pair(&ASSET_BASE, &(ASSET_BASE + 1)).is_some());
    }

    add_liquidity_native {
        let caller = funded_caller::<T>();
        create_asset::<T>(ASSET_BASE, &caller)?;
    }: _(
        RawOrigin::Signed(caller.clone()),
        ASSET_BASE,
        INIT_LIQUIDITY,
        INIT_LIQUIDITY,
        0,
        0,
        caller.clone(),
        DEADLINE
    )
    verify {
        assert!(Pallet::<T>::get_pair(&ASSET_BASE, &T::WrappedNative::get()).is_some());
    }

    remove_liquidity {
        let caller = funded_caller::<T>();
        let path = prepare_path::<T>(&caller, 2)?;
        let pool_id = Pallet::<T>::get_pair(&path[0], &path[1]).ok_or("pool not created")?;
        let before = Pallet::<T>::shares(pool_id, &caller);
    }: _(RawOrigin::Signed(caller.clone()), path[0], path[1], TRADE, 0, 0, caller.clone(), DEADLINE)
    verify {
        assert_eq!(Pallet::<T>::shares(pool_id, &caller), before - TRADE);
    }

    remove_liquidity_native {
        let caller = funded_caller::<T>();
        create_asset::<T>(ASSET_BASE, &caller)?;
        add_native_pool::<T>(&caller, ASSET_BASE)?;
        let native = <T::Currency as fungible::Inspect<_>>::balance(&caller);
    }: _(RawOrigin::Signed(caller.clone()), ASSET_BASE, TRADE, 0, 0, caller.clone(), DEADLINE)
    verify {
        assert!(<T::Currency as fungible::Inspect<_>>::balance(&caller) > native);
    }

    swap_exact_tokens_for_tokens {
        let n in 2 .. T::MaxSwapPathLength::get();
        let caller = funded_caller::<T>();
        let path = prepare_path::<T>(&caller, n)?;
        let last = path[path.len() - 1];
        let before = T::Assets::balance(last, &caller);
    }: _(RawOrigin::Signed(caller.clone()), TRADE, 0, path, caller.clone(), DEADLINE)
    verify {
        assert!(T::Assets::balance(last, &caller) > before);
    }

    swap_tokens_for_exact_tokens {
        let n in 2 .. T::MaxSwapPathLength::get();
        let caller = funded_caller::<T>();
        let path = prepare_path::<T>(&caller, n)?;
        let last = path[path.len() - 1];
        let before = T::Assets::balance(last, &caller);
    }: _(RawOrigin::Signed(caller.clone()), TRADE, INIT_LIQUIDITY, path, caller.clone(), DEADLINE)
    verify {
        assert_eq!(T::Assets::balance(last, &caller), before + TRADE);
    }

    swap_exact_native_for_tokens {
        let n in 2 .. T::MaxSwapPathLength::get();
        let caller = funded_caller::<T>();
        let path = prepare_native_path::<T>(&caller, n)?;
        let last = path[path.len() - 1];
        let before = T::Assets::balance(last, &caller);
    }: _(RawOrigin::Signed(caller.clone()), TRADE, 0, path, caller.clone(), DEADLINE)
    verify {
        assert!(T::Assets::balance(last, &caller) > before);
    }

    swap_tokens_for_exact_native {
        let n in 2 .. T::MaxSwapPathLength::get();
        let caller = funded_caller::<T>();
        let path = reversed(prepare_native_path::<T>(&caller, n)?);
        let before = <T::Currency as fungible::Inspect<_>>::balance(&caller);
    }: _(RawOrigin::Signed(caller.clone()), TRADE, INIT_LIQUIDITY, path, caller.clone(), DEADLINE)
    verify {
        assert_eq!(<T::Currency as fungible::Inspect<_>>::balance(&caller), before + TRADE);
    }

    swap_exact_tokens_for_native {
        let n in 2 .. T::MaxSwapPathLength::get();
        let caller = funded_caller::<T>();
        let path = reversed(prepare_native_path::<T>(&caller, n)?);
        let before = <T::Currency as fungible::Inspect<_>>::balance(&caller);
    }: _(RawOrigin::Signed(caller.clone()), TRADE, 0, path, caller.clone(), DEADLINE)
    verify {
        assert!(<T::Currency as fungible::Inspect<_>>::balance(&caller) > before);
    }

    swap_native_for_exact_tokens {
        let n in 2 .. T::MaxSwapPathLength::get();
        let caller = funded_caller::<T>();
        let path = prepare_native_path::<T>(&caller, n)?;
        let last = path[path.len() - 1];
        let before = T::Assets::balance(last, &caller);
    }: _(RawOrigin::Signed(caller.clone()), TRADE, INIT_LIQUIDITY, path, caller.clone(), DEADLINE)
    verify {
        assert_eq!(T::Assets::balance(last, &caller), before + TRADE);
    }

    set_fee_to {
        let caller = funded_caller::<T>();
        crate::FeeToSetter::<T>::put(caller.clone());
    }: _(RawOrigin::Signed(caller.clone()), Some(caller.clone()))
    verify {
        assert_eq!(Pallet::<T>::fee_to(), Some(caller));
    }

    set_fee_to_setter {
        let origin = T::AdminOrigin::try_successful_origin()
            .map_err(|_| BenchmarkError::Weightless)?;
        let setter: T::AccountId = whitelisted_caller();
    }: _<T::RuntimeOrigin>(origin, setter.clone())
    verify {
        assert_eq!(Pallet::<T>::fee_to_setter(), Some(setter));
    }

    set_paused {
        let origin = T::AdminOrigin::try_successful_origin()
            .map_err(|_| BenchmarkError::Weightless)?;
    }: _<T::RuntimeOrigin>(origin, true)
    verify {
        assert!(Pallet::<T>::paused());
    }

    set_max_trade_percent {
        let origin = T::AdminOrigin::try_successful_origin()
            .map_err(|_| BenchmarkError::Weightless)?;
    }: _<T::RuntimeOrigin>(origin, 50)
    verify {
        assert_eq!(Pallet::<T>::max_trade_percent(), 50);
    }

    impl_benchmark_test_suite!(Pallet, crate::mock::new_test_ext(), crate::mock::Test);
}
