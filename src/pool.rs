//! Pool engine: pair registry, share accounting, mint/burn/swap settlement, price accumulators
//! and the protocol fee.

use crate::{
    types::{PoolLock, FEE_DENOMINATOR, FEE_NUMERATOR, Q112},
    AccountIdOf, AssetIdOf, BalanceOf, Config, Error, Event, FeeTo, NextPoolIndex, PairIndex,
    Pallet, PoolIndex, PoolInfo, PoolInfoOf, Pools, Shares, SwapCallback, TotalShares, LOG_TARGET,
    MAX_RESERVE, MINIMUM_LIQUIDITY,
};
use frame_support::{
    dispatch::DispatchResult,
    ensure,
    traits::{fungibles, Get, UnixTime},
};
use sp_core::U256;
use sp_runtime::{
    traits::{AccountIdConversion, CheckedAdd, CheckedSub, Saturating, Zero},
    DispatchError, SaturatedConversion,
};

/// Price accumulator timestamps are seconds modulo 2^32.
const TIMESTAMP_MODULUS: u64 = 1 << 32;

impl<T: Config> Pallet<T> {
    // ------------------------------- Accounts ------------------------------

    /// Sovereign account holding the balances of a pool.
    pub fn pool_account(pool_id: PoolIndex) -> AccountIdOf<T> {
        T::PalletId::get().into_sub_account_truncating((*b"pool", pool_id))
    }

    /// Keyless holder of the minimum liquidity shares of every pool.
    pub fn locked_account() -> AccountIdOf<T> {
        T::PalletId::get().into_sub_account_truncating(*b"lock")
    }

    pub(crate) fn ensure_provider(who: &AccountIdOf<T>) {
        if frame_system::Pallet::<T>::providers(who).is_zero() {
            frame_system::Pallet::<T>::inc_providers(who);
        }
    }

    // ------------------------------- Registry ------------------------------

    /// Index of the pool trading `asset_a` against `asset_b`, in either order.
    pub fn get_pair(asset_a: &AssetIdOf<T>, asset_b: &AssetIdOf<T>) -> Option<PoolIndex> {
        let key = Self::sort_assets(asset_a.clone(), asset_b.clone()).ok()?;
        PairIndex::<T>::get(key)
    }

    pub(crate) fn get_pool(pool_id: PoolIndex) -> Result<PoolInfoOf<T>, Error<T>> {
        Pools::<T>::get(pool_id).ok_or(Error::<T>::PoolNotFound)
    }

    pub(crate) fn do_create_pair(
        creator: &AccountIdOf<T>,
        asset_a: AssetIdOf<T>,
        asset_b: AssetIdOf<T>,
    ) -> Result<PoolIndex, DispatchError> {
        let (asset_a, asset_b) = Self::sort_assets(asset_a, asset_b)?;
        ensure!(
            <T::Assets as fungibles::Inspect<_>>::asset_exists(asset_a.clone()),
            Error::<T>::AssetNotFound
        );
        ensure!(
            <T::Assets as fungibles::Inspect<_>>::asset_exists(asset_b.clone()),
            Error::<T>::AssetNotFound
        );
        let key = (asset_a.clone(), asset_b.clone());
        ensure!(!PairIndex::<T>::contains_key(&key), Error::<T>::PoolExists);

        let pool_id = NextPoolIndex::<T>::get();
        NextPoolIndex::<T>::put(pool_id.checked_add(1).ok_or(Error::<T>::Overflow)?);
        PairIndex::<T>::insert(key, pool_id);
        Self::do_initialize(pool_id, asset_a.clone(), asset_b.clone())?;

        // Pallet accounts hold no native deposit, so they need their own provider reference to
        // receive assets that are not sufficient.
        let pool_account = Self::pool_account(pool_id);
        frame_system::Pallet::<T>::inc_providers(&pool_account);
        Self::ensure_provider(&Self::router_account());
        log::debug!(
            target: LOG_TARGET,
            "created pool {pool_id} for {asset_a:?}/{asset_b:?}"
        );
        Self::deposit_event(Event::PoolCreated {
            creator: creator.clone(),
            pool_id,
            asset_a,
            asset_b,
            pool_account,
        });
        Ok(pool_id)
    }

    /// Bind a pool to its pair. A pool can only be initialized once.
    pub(crate) fn do_initialize(
        pool_id: PoolIndex,
        asset_a: AssetIdOf<T>,
        asset_b: AssetIdOf<T>,
    ) -> DispatchResult {
        ensure!(!Pools::<T>::contains_key(pool_id), Error::<T>::AlreadyInitialized);
        let (asset_a, asset_b) = Self::sort_assets(asset_a, asset_b)?;
        Pools::<T>::insert(pool_id, PoolInfo::new(asset_a, asset_b));
        Ok(())
    }

    // -------------------------------- Shares -------------------------------

    fn mint_shares(
        pool_id: PoolIndex,
        who: &AccountIdOf<T>,
        amount: BalanceOf<T>,
    ) -> Result<(), Error<T>> {
        TotalShares::<T>::try_mutate(pool_id, |total| -> Result<(), Error<T>> {
            *total = total.checked_add(&amount).ok_or(Error::<T>::Overflow)?;
            Ok(())
        })?;
        // Cannot overflow, an account never holds more than the total.
        Shares::<T>::mutate(pool_id, who, |balance| balance.saturating_accrue(amount));
        Ok(())
    }

    fn burn_shares(
        pool_id: PoolIndex,
        who: &AccountIdOf<T>,
        amount: BalanceOf<T>,
    ) -> Result<(), Error<T>> {
        Shares::<T>::try_mutate(pool_id, who, |balance| -> Result<(), Error<T>> {
            *balance = balance.checked_sub(&amount).ok_or(Error::<T>::InsufficientShares)?;
            Ok(())
        })?;
        TotalShares::<T>::mutate(pool_id, |total| total.saturating_reduce(amount));
        Ok(())
    }

    pub(crate) fn do_transfer_shares(
        pool_id: PoolIndex,
        from: &AccountIdOf<T>,
        to: &AccountIdOf<T>,
        amount: BalanceOf<T>,
    ) -> DispatchResult {
        ensure!(Pools::<T>::contains_key(pool_id), Error::<T>::PoolNotFound);
        ensure!(*from != Self::locked_account(), Error::<T>::SharesLocked);
        Shares::<T>::try_mutate(pool_id, from, |balance| -> Result<(), Error<T>> {
            *balance = balance.checked_sub(&amount).ok_or(Error::<T>::InsufficientShares)?;
            Ok(())
        })?;
        Shares::<T>::mutate(pool_id, to, |balance| balance.saturating_accrue(amount));
        Self::deposit_event(Event::SharesTransferred {
            pool_id,
            from: from.clone(),
            to: to.clone(),
            amount,
        });
        Ok(())
    }

    // ---------------------------- Pool operations --------------------------

    /// Mint shares to `to` for the balances deposited since the last reserve update.
    pub(crate) fn do_mint(
        sender: &AccountIdOf<T>,
        pool_id: PoolIndex,
        to: &AccountIdOf<T>,
    ) -> Result<BalanceOf<T>, DispatchError> {
        let _lock = PoolLock::<T>::acquire(pool_id)?;
        let mut pool = Self::get_pool(pool_id)?;
        let pool_account = Self::pool_account(pool_id);

        let (balance_a, balance_b) = Self::pool_balances(&pool, &pool_account);
        let amount_a = balance_a.checked_sub(&pool.reserve_a).ok_or(Error::<T>::Overflow)?;
        let amount_b = balance_b.checked_sub(&pool.reserve_b).ok_or(Error::<T>::Overflow)?;

        let fee_on = Self::mint_protocol_fee(pool_id, &mut pool)?;
        // Read after the protocol fee, which may have minted shares.
        let total = TotalShares::<T>::get(pool_id);
        let liquidity = if total.is_zero() {
            let root = Self::to_u256(amount_a)
                .checked_mul(Self::to_u256(amount_b))
                .ok_or(Error::<T>::Overflow)?
                .integer_sqrt();
            let liquidity = root
                .checked_sub(U256::from(MINIMUM_LIQUIDITY))
                .ok_or(Error::<T>::InsufficientLiquidityMinted)?;
            Self::mint_shares(pool_id, &Self::locked_account(), Self::from_u128(MINIMUM_LIQUIDITY)?)?;
            Self::from_u256(liquidity)?
        } else {
            let by_a = Self::mul_div(amount_a, total, pool.reserve_a)?;
            let by_b = Self::mul_div(amount_b, total, pool.reserve_b)?;
            by_a.min(by_b)
        };
        ensure!(!liquidity.is_zero(), Error::<T>::InsufficientLiquidityMinted);
        Self::mint_shares(pool_id, to, liquidity)?;

        Self::update(pool_id, &mut pool, balance_a, balance_b)?;
        if fee_on {
            pool.k_last = Self::reserve_product(&pool);
        }
        Pools::<T>::insert(pool_id, pool);

        log::debug!(
            target: LOG_TARGET,
            "pool {pool_id}: minted {liquidity:?} shares for {amount_a:?}/{amount_b:?}"
        );
        Self::deposit_event(Event::Mint {
            sender: sender.clone(),
            pool_id,
            amount_a,
            amount_b,
            to: to.clone(),
            liquidity,
        });
        Ok(liquidity)
    }

    /// Redeem the shares held by the pool account, paying both assets out to `to`.
    pub(crate) fn do_burn(
        sender: &AccountIdOf<T>,
        pool_id: PoolIndex,
        to: &AccountIdOf<T>,
    ) -> Result<(BalanceOf<T>, BalanceOf<T>), DispatchError> {
        let _lock = PoolLock::<T>::acquire(pool_id)?;
        let mut pool = Self::get_pool(pool_id)?;
        let pool_account = Self::pool_account(pool_id);

        let (balance_a, balance_b) = Self::pool_balances(&pool, &pool_account);
        let liquidity = Shares::<T>::get(pool_id, &pool_account);

        let fee_on = Self::mint_protocol_fee(pool_id, &mut pool)?;
        let total = TotalShares::<T>::get(pool_id);
        ensure!(!total.is_zero(), Error::<T>::InsufficientLiquidityBurned);
        let amount_a = Self::mul_div(liquidity, balance_a, total)?;
        let amount_b = Self::mul_div(liquidity, balance_b, total)?;
        ensure!(
            !amount_a.is_zero() && !amount_b.is_zero(),
            Error::<T>::InsufficientLiquidityBurned
        );

        Self::burn_shares(pool_id, &pool_account, liquidity)?;
        Self::transfer_asset(&pool.asset_a, &pool_account, to, amount_a)?;
        Self::transfer_asset(&pool.asset_b, &pool_account, to, amount_b)?;

        let (balance_a, balance_b) = Self::pool_balances(&pool, &pool_account);
        Self::update(pool_id, &mut pool, balance_a, balance_b)?;
        if fee_on {
            pool.k_last = Self::reserve_product(&pool);
        }
        Pools::<T>::insert(pool_id, pool);

        log::debug!(
            target: LOG_TARGET,
            "pool {pool_id}: burned {liquidity:?} shares for {amount_a:?}/{amount_b:?}"
        );
        Self::deposit_event(Event::Burn {
            sender: sender.clone(),
            pool_id,
            amount_a,
            amount_b,
            to: to.clone(),
            liquidity,
        });
        Ok((amount_a, amount_b))
    }

    /// Pay out the requested amounts first, then require the fee-adjusted invariant to hold
    /// on whatever the pool holds afterwards.
    pub(crate) fn do_swap(
        sender: &AccountIdOf<T>,
        pool_id: PoolIndex,
        amount_a_out: BalanceOf<T>,
        amount_b_out: BalanceOf<T>,
        to: &AccountIdOf<T>,
        data: &[u8],
    ) -> DispatchResult {
        // -------------------------- Validation part --------------------------
        ensure!(
            !amount_a_out.is_zero() || !amount_b_out.is_zero(),
            Error::<T>::InsufficientOutputAmount
        );
        let _lock = PoolLock::<T>::acquire(pool_id)?;
        let mut pool = Self::get_pool(pool_id)?;
        ensure!(
            amount_a_out < pool.reserve_a && amount_b_out < pool.reserve_b,
            Error::<T>::InsufficientLiquidity
        );
        let pool_account = Self::pool_account(pool_id);
        ensure!(*to != pool_account, Error::<T>::InvalidRecipient);

        // ---------------------------- Optimistic payout ------------------------
        Self::transfer_asset(&pool.asset_a, &pool_account, to, amount_a_out)?;
        Self::transfer_asset(&pool.asset_b, &pool_account, to, amount_b_out)?;
        if !data.is_empty() {
            T::SwapCallback::on_swap(sender, pool_id, amount_a_out, amount_b_out, data)?;
        }

        // --------------------------- Check invariant ---------------------------
        let (balance_a, balance_b) = Self::pool_balances(&pool, &pool_account);
        let amount_a_in = Self::amount_in(balance_a, pool.reserve_a, amount_a_out);
        let amount_b_in = Self::amount_in(balance_b, pool.reserve_b, amount_b_out);
        ensure!(
            !amount_a_in.is_zero() || !amount_b_in.is_zero(),
            Error::<T>::InsufficientInputAmount
        );
        let adjusted_a = Self::fee_adjusted(balance_a, amount_a_in)?;
        let adjusted_b = Self::fee_adjusted(balance_b, amount_b_in)?;
        let k_before = Self::reserve_product(&pool)
            .checked_mul(U256::from(FEE_DENOMINATOR) * U256::from(FEE_DENOMINATOR))
            .ok_or(Error::<T>::Overflow)?;
        let k_after = adjusted_a.checked_mul(adjusted_b).ok_or(Error::<T>::Overflow)?;
        ensure!(k_after >= k_before, Error::<T>::InvariantViolated);

        // ----------------------------- State update ----------------------------
        Self::update(pool_id, &mut pool, balance_a, balance_b)?;
        Pools::<T>::insert(pool_id, pool);

        // ---------------------------- Emit event -----------------------------
        log::debug!(
            target: LOG_TARGET,
            "pool {pool_id}: swapped in {amount_a_in:?}/{amount_b_in:?} out {amount_a_out:?}/{amount_b_out:?}"
        );
        Self::deposit_event(Event::Swap {
            sender: sender.clone(),
            pool_id,
            amount_a_in,
            amount_b_in,
            amount_a_out,
            amount_b_out,
            to: to.clone(),
        });
        Ok(())
    }

    /// Send balances in excess of the reserves to `to`.
    pub(crate) fn do_skim(pool_id: PoolIndex, to: &AccountIdOf<T>) -> DispatchResult {
        let _lock = PoolLock::<T>::acquire(pool_id)?;
        let pool = Self::get_pool(pool_id)?;
        let pool_account = Self::pool_account(pool_id);
        let (balance_a, balance_b) = Self::pool_balances(&pool, &pool_account);
        Self::transfer_asset(
            &pool.asset_a,
            &pool_account,
            to,
            balance_a.saturating_sub(pool.reserve_a),
        )?;
        Self::transfer_asset(
            &pool.asset_b,
            &pool_account,
            to,
            balance_b.saturating_sub(pool.reserve_b),
        )?;
        Ok(())
    }

    /// Force the reserves to match the pool account's balances.
    pub(crate) fn do_sync(pool_id: PoolIndex) -> DispatchResult {
        let _lock = PoolLock::<T>::acquire(pool_id)?;
        let mut pool = Self::get_pool(pool_id)?;
        let (balance_a, balance_b) = Self::pool_balances(&pool, &Self::pool_account(pool_id));
        Self::update(pool_id, &mut pool, balance_a, balance_b)?;
        Pools::<T>::insert(pool_id, pool);
        Ok(())
    }

    // ------------------------------- Internals -----------------------------

    fn pool_balances(
        pool: &PoolInfoOf<T>,
        pool_account: &AccountIdOf<T>,
    ) -> (BalanceOf<T>, BalanceOf<T>) {
        (
            <T::Assets as fungibles::Inspect<_>>::balance(pool.asset_a.clone(), pool_account),
            <T::Assets as fungibles::Inspect<_>>::balance(pool.asset_b.clone(), pool_account),
        )
    }

    /// Whatever the pool received on one side beyond `reserve - amount_out`.
    fn amount_in(
        balance: BalanceOf<T>,
        reserve: BalanceOf<T>,
        amount_out: BalanceOf<T>,
    ) -> BalanceOf<T> {
        balance.saturating_sub(reserve.saturating_sub(amount_out))
    }

    /// `balance * 1000 - amount_in * 3`
    fn fee_adjusted(balance: BalanceOf<T>, amount_in: BalanceOf<T>) -> Result<U256, Error<T>> {
        let fee = U256::from(FEE_DENOMINATOR - FEE_NUMERATOR);
        Self::to_u256(balance)
            .checked_mul(U256::from(FEE_DENOMINATOR))
            .and_then(|scaled| scaled.checked_sub(Self::to_u256(amount_in).checked_mul(fee)?))
            .ok_or(Error::<T>::Overflow)
    }

    fn reserve_product(pool: &PoolInfoOf<T>) -> U256 {
        // Both reserves fit in 112 bits.
        Self::to_u256(pool.reserve_a).saturating_mul(Self::to_u256(pool.reserve_b))
    }

    pub(crate) fn block_timestamp() -> u32 {
        (T::Time::now().as_secs() % TIMESTAMP_MODULUS).saturated_into()
    }

    /// Store new reserves. On the first update of a timestamp, accumulate the prices that held
    /// since the previous update.
    fn update(
        pool_id: PoolIndex,
        pool: &mut PoolInfoOf<T>,
        balance_a: BalanceOf<T>,
        balance_b: BalanceOf<T>,
    ) -> Result<(), Error<T>> {
        ensure!(
            Self::to_u128(balance_a) <= MAX_RESERVE && Self::to_u128(balance_b) <= MAX_RESERVE,
            Error::<T>::Overflow
        );
        let now = Self::block_timestamp();
        let elapsed = now.wrapping_sub(pool.last_update);
        if elapsed > 0 && !pool.reserve_a.is_zero() && !pool.reserve_b.is_zero() {
            let reserve_a = Self::to_u256(pool.reserve_a);
            let reserve_b = Self::to_u256(pool.reserve_b);
            let q112 = U256::from(Q112);
            let elapsed = U256::from(elapsed);
            // Overflow of the accumulators is expected and harmless for TWAP consumers,
            // which only look at differences.
            let price_a = (reserve_b * q112 / reserve_a).overflowing_mul(elapsed).0;
            let price_b = (reserve_a * q112 / reserve_b).overflowing_mul(elapsed).0;
            pool.price_a_cumulative = pool.price_a_cumulative.overflowing_add(price_a).0;
            pool.price_b_cumulative = pool.price_b_cumulative.overflowing_add(price_b).0;
        }
        pool.reserve_a = balance_a;
        pool.reserve_b = balance_b;
        pool.last_update = now;
        Self::deposit_event(Event::Sync { pool_id, reserve_a: balance_a, reserve_b: balance_b });
        Ok(())
    }

    /// Mint a sixth of the growth of `sqrt(k)` since the last liquidity event to the protocol
    /// fee recipient, if one is set. Returns whether the protocol fee is on.
    fn mint_protocol_fee(pool_id: PoolIndex, pool: &mut PoolInfoOf<T>) -> Result<bool, Error<T>> {
        let Some(fee_to) = FeeTo::<T>::get() else {
            if !pool.k_last.is_zero() {
                pool.k_last = U256::zero();
            }
            return Ok(false)
        };
        if pool.k_last.is_zero() {
            return Ok(true)
        }
        let root_k = Self::reserve_product(pool).integer_sqrt();
        let root_k_last = pool.k_last.integer_sqrt();
        if root_k > root_k_last {
            let total = Self::to_u256(TotalShares::<T>::get(pool_id));
            let numerator = total
                .checked_mul(root_k - root_k_last)
                .ok_or(Error::<T>::Overflow)?;
            let denominator = root_k
                .checked_mul(U256::from(5u32))
                .and_then(|d| d.checked_add(root_k_last))
                .ok_or(Error::<T>::Overflow)?;
            let shares = Self::from_u256(numerator / denominator)?;
            if !shares.is_zero() {
                Self::mint_shares(pool_id, &fee_to, shares)?;
                log::debug!(target: LOG_TARGET, "pool {pool_id}: protocol fee {shares:?} shares");
                Self::deposit_event(Event::ProtocolFeeMinted { pool_id, fee_to, shares });
            }
        }
        Ok(true)
    }

    // ------------------------------ Conversions ----------------------------

    pub(crate) fn to_u128(value: BalanceOf<T>) -> u128 {
        value.saturated_into::<u128>()
    }

    pub(crate) fn to_u256(value: BalanceOf<T>) -> U256 {
        U256::from(Self::to_u128(value))
    }

    pub(crate) fn from_u128(value: u128) -> Result<BalanceOf<T>, Error<T>> {
        BalanceOf::<T>::try_from(value).map_err(|_| Error::<T>::Overflow)
    }

    pub(crate) fn from_u256(value: U256) -> Result<BalanceOf<T>, Error<T>> {
        let value: u128 = value.try_into().map_err(|_| Error::<T>::Overflow)?;
        Self::from_u128(value)
    }

    /// `a * b / c` in 256-bit precision, rounded down.
    pub(crate) fn mul_div(
        a: BalanceOf<T>,
        b: BalanceOf<T>,
        c: BalanceOf<T>,
    ) -> Result<BalanceOf<T>, Error<T>> {
        let product = Self::to_u256(a)
            .checked_mul(Self::to_u256(b))
            .ok_or(Error::<T>::Overflow)?;
        let quotient = product.checked_div(Self::to_u256(c)).ok_or(Error::<T>::Overflow)?;
        Self::from_u256(quotient)
    }
}
