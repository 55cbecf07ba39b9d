//! Router: quoting, path execution, liquidity helpers and the native currency wrapper.

use crate::{
    types::{FEE_DENOMINATOR, FEE_NUMERATOR},
    AccountIdOf, AssetIdOf, BalanceOf, Config, Error, Pallet, PoolIndex, LOG_TARGET,
};
use frame_support::{
    dispatch::DispatchResult,
    ensure,
    traits::{
        fungible, fungibles,
        tokens::{Fortitude, Precision, Preservation},
        Get,
    },
};
use sp_core::U256;
use sp_runtime::{
    traits::{AccountIdConversion, Zero},
    DispatchError,
};
use sp_std::vec::Vec;

impl<T: Config> Pallet<T> {
    // ------------------------------- Quoting -------------------------------

    /// Order two assets canonically.
    pub fn sort_assets(
        asset_a: AssetIdOf<T>,
        asset_b: AssetIdOf<T>,
    ) -> Result<(AssetIdOf<T>, AssetIdOf<T>), Error<T>> {
        ensure!(asset_a != asset_b, Error::<T>::IdenticalAssets);
        if asset_a < asset_b {
            Ok((asset_a, asset_b))
        } else {
            Ok((asset_b, asset_a))
        }
    }

    /// Reserves of the pool for `asset_a` and `asset_b`, in the order requested.
    pub fn get_reserves(
        asset_a: &AssetIdOf<T>,
        asset_b: &AssetIdOf<T>,
    ) -> Result<(BalanceOf<T>, BalanceOf<T>), Error<T>> {
        let pool_id = Self::get_pair(asset_a, asset_b).ok_or(Error::<T>::PoolNotFound)?;
        let pool = Self::get_pool(pool_id)?;
        if *asset_a == pool.asset_a {
            Ok((pool.reserve_a, pool.reserve_b))
        } else {
            Ok((pool.reserve_b, pool.reserve_a))
        }
    }

    /// Amount of the other asset worth `amount_a` at the current ratio, without fee.
    pub fn quote(
        amount_a: BalanceOf<T>,
        reserve_a: BalanceOf<T>,
        reserve_b: BalanceOf<T>,
    ) -> Result<BalanceOf<T>, Error<T>> {
        ensure!(!amount_a.is_zero(), Error::<T>::ZeroAmount);
        ensure!(
            !reserve_a.is_zero() && !reserve_b.is_zero(),
            Error::<T>::InsufficientLiquidity
        );
        Self::mul_div(amount_a, reserve_b, reserve_a)
    }

    /// Output received for an exact input, after the swap fee. Rounded down.
    pub fn get_amount_out(
        amount_in: BalanceOf<T>,
        reserve_in: BalanceOf<T>,
        reserve_out: BalanceOf<T>,
    ) -> Result<BalanceOf<T>, Error<T>> {
        ensure!(!amount_in.is_zero(), Error::<T>::InsufficientInputAmount);
        ensure!(
            !reserve_in.is_zero() && !reserve_out.is_zero(),
            Error::<T>::InsufficientLiquidity
        );
        let amount_in_with_fee = Self::to_u256(amount_in)
            .checked_mul(U256::from(FEE_NUMERATOR))
            .ok_or(Error::<T>::Overflow)?;
        let numerator = amount_in_with_fee
            .checked_mul(Self::to_u256(reserve_out))
            .ok_or(Error::<T>::Overflow)?;
        let denominator = Self::to_u256(reserve_in)
            .checked_mul(U256::from(FEE_DENOMINATOR))
            .and_then(|d| d.checked_add(amount_in_with_fee))
            .ok_or(Error::<T>::Overflow)?;
        Self::from_u256(numerator / denominator)
    }

    /// Input required for an exact output, after the swap fee. Rounded down, plus one.
    pub fn get_amount_in(
        amount_out: BalanceOf<T>,
        reserve_in: BalanceOf<T>,
        reserve_out: BalanceOf<T>,
    ) -> Result<BalanceOf<T>, Error<T>> {
        ensure!(!amount_out.is_zero(), Error::<T>::InsufficientOutputAmount);
        ensure!(
            !reserve_in.is_zero() && !reserve_out.is_zero(),
            Error::<T>::InsufficientLiquidity
        );
        ensure!(amount_out < reserve_out, Error::<T>::InsufficientLiquidity);
        let numerator = Self::to_u256(reserve_in)
            .checked_mul(Self::to_u256(amount_out))
            .and_then(|n| n.checked_mul(U256::from(FEE_DENOMINATOR)))
            .ok_or(Error::<T>::Overflow)?;
        // Cannot underflow, `amount_out < reserve_out`.
        let denominator = (Self::to_u256(reserve_out) - Self::to_u256(amount_out))
            .checked_mul(U256::from(FEE_NUMERATOR))
            .ok_or(Error::<T>::Overflow)?;
        let amount_in = (numerator / denominator)
            .checked_add(U256::one())
            .ok_or(Error::<T>::Overflow)?;
        Self::from_u256(amount_in)
    }

    /// Amounts at every step of `path` for an exact input. `amounts[0] == amount_in`.
    pub fn get_amounts_out(
        amount_in: BalanceOf<T>,
        path: &[AssetIdOf<T>],
    ) -> Result<Vec<BalanceOf<T>>, Error<T>> {
        ensure!(path.len() >= 2, Error::<T>::InvalidPath);
        let mut amounts = Vec::with_capacity(path.len());
        amounts.push(amount_in);
        let mut amount = amount_in;
        for pair in path.windows(2) {
            let (reserve_in, reserve_out) = Self::get_reserves(&pair[0], &pair[1])?;
            amount = Self::get_amount_out(amount, reserve_in, reserve_out)?;
            ensure!(!amount.is_zero(), Error::<T>::InsufficientOutput);
            amounts.push(amount);
        }
        Ok(amounts)
    }

    /// Amounts at every step of `path` for an exact output. The last entry is `amount_out`.
    pub fn get_amounts_in(
        amount_out: BalanceOf<T>,
        path: &[AssetIdOf<T>],
    ) -> Result<Vec<BalanceOf<T>>, Error<T>> {
        ensure!(path.len() >= 2, Error::<T>::InvalidPath);
        let mut amounts = Vec::with_capacity(path.len());
        amounts.push(amount_out);
        let mut amount = amount_out;
        for pair in path.windows(2).rev() {
            let (reserve_in, reserve_out) = Self::get_reserves(&pair[0], &pair[1])?;
            amount = Self::get_amount_in(amount, reserve_in, reserve_out)?;
            amounts.push(amount);
        }
        amounts.reverse();
        Ok(amounts)
    }

    // ------------------------------ Validation -----------------------------

    pub(crate) fn validate_path(path: &[AssetIdOf<T>]) -> Result<(), Error<T>> {
        ensure!(
            path.len() >= 2 && path.len() <= T::MaxSwapPathLength::get() as usize,
            Error::<T>::InvalidPath
        );
        Ok(())
    }

    /// Reject inputs above the configured share of the first pool's input reserve.
    /// Later hops are bounded by the output of the previous one.
    pub(crate) fn check_trade_size(
        path: &[AssetIdOf<T>],
        amounts: &[BalanceOf<T>],
    ) -> Result<(), Error<T>> {
        let (reserve_in, _) = Self::get_reserves(&path[0], &path[1])?;
        let amount_in = Self::to_u256(amounts[0]).saturating_mul(U256::from(100u32));
        let limit =
            Self::to_u256(reserve_in).saturating_mul(U256::from(Self::max_trade_percent()));
        ensure!(amount_in <= limit, Error::<T>::TradeTooLarge);
        Ok(())
    }

    // ------------------------------- Execution -----------------------------

    /// Swap through every pool of `path`. The input must already sit in the first pool; each
    /// hop pays straight into the next pool and the last one pays `to`.
    pub(crate) fn do_swap_path(
        sender: &AccountIdOf<T>,
        amounts: &[BalanceOf<T>],
        path: &[AssetIdOf<T>],
        to: &AccountIdOf<T>,
    ) -> DispatchResult {
        for (hop, pair) in path.windows(2).enumerate() {
            let (input, output) = (&pair[0], &pair[1]);
            let pool_id = Self::get_pair(input, output).ok_or(Error::<T>::PoolNotFound)?;
            let pool = Self::get_pool(pool_id)?;
            let amount_out = amounts[hop + 1];
            let (amount_a_out, amount_b_out) = if *input == pool.asset_a {
                (Zero::zero(), amount_out)
            } else {
                (amount_out, Zero::zero())
            };
            let recipient = match path.get(hop + 2) {
                Some(next) => Self::pool_account(
                    Self::get_pair(output, next).ok_or(Error::<T>::PoolNotFound)?,
                ),
                None => to.clone(),
            };
            Self::do_swap(sender, pool_id, amount_a_out, amount_b_out, &recipient, &[])?;
        }
        Ok(())
    }

    /// Largest deposit within the desired amounts that keeps the pool ratio. An empty pool
    /// takes both desired amounts as they are.
    pub(crate) fn resolve_liquidity_amounts(
        asset_a: &AssetIdOf<T>,
        asset_b: &AssetIdOf<T>,
        amount_a_desired: BalanceOf<T>,
        amount_b_desired: BalanceOf<T>,
        amount_a_min: BalanceOf<T>,
        amount_b_min: BalanceOf<T>,
    ) -> Result<(BalanceOf<T>, BalanceOf<T>), Error<T>> {
        let (reserve_a, reserve_b) = Self::get_reserves(asset_a, asset_b)?;
        let (amount_a, amount_b) = if reserve_a.is_zero() && reserve_b.is_zero() {
            (amount_a_desired, amount_b_desired)
        } else {
            let amount_b_optimal = Self::quote(amount_a_desired, reserve_a, reserve_b)?;
            if amount_b_optimal <= amount_b_desired {
                (amount_a_desired, amount_b_optimal)
            } else {
                let amount_a_optimal = Self::quote(amount_b_desired, reserve_b, reserve_a)?;
                ensure!(amount_a_optimal <= amount_a_desired, Error::<T>::InsufficientAmountA);
                (amount_a_optimal, amount_b_desired)
            }
        };
        ensure!(amount_a >= amount_a_min, Error::<T>::InsufficientAmountA);
        ensure!(amount_b >= amount_b_min, Error::<T>::InsufficientAmountB);
        Ok((amount_a, amount_b))
    }

    /// Burn `liquidity` of `who`'s shares, paying out to `to`. Returns the pool and the
    /// withdrawn amounts in the order requested.
    pub(crate) fn do_remove_liquidity(
        who: &AccountIdOf<T>,
        asset_a: &AssetIdOf<T>,
        asset_b: &AssetIdOf<T>,
        liquidity: BalanceOf<T>,
        amount_a_min: BalanceOf<T>,
        amount_b_min: BalanceOf<T>,
        to: &AccountIdOf<T>,
    ) -> Result<(PoolIndex, BalanceOf<T>, BalanceOf<T>), DispatchError> {
        let pool_id = Self::get_pair(asset_a, asset_b).ok_or(Error::<T>::PoolNotFound)?;
        let pool = Self::get_pool(pool_id)?;
        Self::do_transfer_shares(pool_id, who, &Self::pool_account(pool_id), liquidity)?;
        let (amount_0, amount_1) = Self::do_burn(who, pool_id, to)?;
        let (amount_a, amount_b) =
            if *asset_a == pool.asset_a { (amount_0, amount_1) } else { (amount_1, amount_0) };
        ensure!(amount_a >= amount_a_min, Error::<T>::InsufficientAmountA);
        ensure!(amount_b >= amount_b_min, Error::<T>::InsufficientAmountB);
        Ok((pool_id, amount_a, amount_b))
    }

    // ------------------------------- Transfers -----------------------------

    /// Move an asset balance, reporting any failure of the asset layer as `TransferFailed`.
    /// Zero amounts are a no-op.
    pub(crate) fn transfer_asset(
        asset: &AssetIdOf<T>,
        from: &AccountIdOf<T>,
        to: &AccountIdOf<T>,
        amount: BalanceOf<T>,
    ) -> DispatchResult {
        if amount.is_zero() {
            return Ok(())
        }
        <T::Assets as fungibles::Mutate<_>>::transfer(
            asset.clone(),
            from,
            to,
            amount,
            Preservation::Expendable,
        )
        .map_err(|err| {
            log::debug!(
                target: LOG_TARGET,
                "transfer of {amount:?} {asset:?} from {from:?} failed: {err:?}"
            );
            Error::<T>::TransferFailed
        })?;
        Ok(())
    }

    /// Temporary holder of outputs that are unwrapped or forwarded within the same call.
    pub(crate) fn router_account() -> AccountIdOf<T> {
        T::PalletId::get().into_sub_account_truncating(*b"rout")
    }

    /// Holder of the native currency backing the wrapped asset.
    pub fn wrapper_account() -> AccountIdOf<T> {
        T::PalletId::get().into_sub_account_truncating(*b"wrap")
    }

    /// Take `amount` of native currency from `from` and mint the same amount of the wrapped
    /// asset to `to`.
    pub(crate) fn wrap_native(
        from: &AccountIdOf<T>,
        to: &AccountIdOf<T>,
        amount: BalanceOf<T>,
    ) -> DispatchResult {
        if amount.is_zero() {
            return Ok(())
        }
        <T::Currency as fungible::Mutate<_>>::transfer(
            from,
            &Self::wrapper_account(),
            amount,
            Preservation::Preserve,
        )
        .map_err(|err| {
            log::debug!(target: LOG_TARGET, "wrapping {amount:?} from {from:?} failed: {err:?}");
            Error::<T>::TransferFailed
        })?;
        <T::Assets as fungibles::Mutate<_>>::mint_into(T::WrappedNative::get(), to, amount)?;
        Ok(())
    }

    /// Burn `amount` of the wrapped asset held by `holder` and release the same amount of
    /// native currency to `to`.
    pub(crate) fn unwrap_native(
        holder: &AccountIdOf<T>,
        to: &AccountIdOf<T>,
        amount: BalanceOf<T>,
    ) -> DispatchResult {
        if amount.is_zero() {
            return Ok(())
        }
        <T::Assets as fungibles::Mutate<_>>::burn_from(
            T::WrappedNative::get(),
            holder,
            amount,
            Precision::Exact,
            Fortitude::Polite,
        )?;
        <T::Currency as fungible::Mutate<_>>::transfer(
            &Self::wrapper_account(),
            to,
            amount,
            Preservation::Expendable,
        )
        .map_err(|err| {
            log::debug!(target: LOG_TARGET, "unwrapping {amount:?} to {to:?} failed: {err:?}");
            Error::<T>::TransferFailed
        })?;
        Ok(())
    }
}
