use crate::{Config, Error, PoolLocks};
use codec::{Decode, Encode};
use frame_support::{dispatch::DispatchResult, ensure, RuntimeDebug};
use scale_info::TypeInfo;
use sp_core::U256;
use sp_runtime::DispatchError;
use sp_std::marker::PhantomData;

/// Sequential identifier of a pool, assigned by `create_pair`.
pub type PoolIndex = u32;

/// Shares minted to the locked holder on a pool's first deposit. They can never be redeemed,
/// which keeps the share price of an emptied pool from collapsing to zero.
pub const MINIMUM_LIQUIDITY: u128 = 1_000;

/// Upper bound for either reserve, so that price accumulators stay in 224 bits.
pub const MAX_RESERVE: u128 = (1u128 << 112) - 1;

/// `2^112`, the fixed-point scale of the price accumulators (UQ112x112).
pub const Q112: u128 = 1u128 << 112;

/// Swap fee: the input is credited at `FEE_NUMERATOR / FEE_DENOMINATOR` of its value.
pub const FEE_NUMERATOR: u32 = 997;
pub const FEE_DENOMINATOR: u32 = 1_000;

/// Full state of a single pair. Assets are stored in canonical (ascending) order.
#[derive(Clone, Encode, Decode, Eq, PartialEq, RuntimeDebug, TypeInfo)]
pub struct PoolInfo<AssetId, Balance> {
    pub asset_a: AssetId,
    pub asset_b: AssetId,
    pub reserve_a: Balance,
    pub reserve_b: Balance,
    /// Timestamp of the last reserve update, in seconds modulo 2^32.
    pub last_update: u32,
    /// Time-weighted sum of the price of `asset_a` in `asset_b` (UQ112x112), wrapping.
    pub price_a_cumulative: U256,
    /// Time-weighted sum of the price of `asset_b` in `asset_a` (UQ112x112), wrapping.
    pub price_b_cumulative: U256,
    /// `reserve_a * reserve_b` right after the latest liquidity event, while the protocol
    /// fee is enabled. Zero otherwise.
    pub k_last: U256,
}

impl<AssetId, Balance: Default> PoolInfo<AssetId, Balance> {
    pub fn new(asset_a: AssetId, asset_b: AssetId) -> Self {
        Self {
            asset_a,
            asset_b,
            reserve_a: Default::default(),
            reserve_b: Default::default(),
            last_update: 0,
            price_a_cumulative: U256::zero(),
            price_b_cumulative: U256::zero(),
            k_last: U256::zero(),
        }
    }
}

/// Hook run by `swap` after the optimistic payout and before the invariant check, whenever
/// the caller attached non-empty `data`. Implementations repay the pool from `sender`.
pub trait SwapCallback<AccountId, Balance> {
    fn on_swap(
        sender: &AccountId,
        pool_id: PoolIndex,
        amount_a_out: Balance,
        amount_b_out: Balance,
        data: &[u8],
    ) -> DispatchResult;
}

impl<AccountId, Balance> SwapCallback<AccountId, Balance> for () {
    fn on_swap(
        _sender: &AccountId,
        _pool_id: PoolIndex,
        _amount_a_out: Balance,
        _amount_b_out: Balance,
        _data: &[u8],
    ) -> DispatchResult {
        Err(DispatchError::Unavailable)
    }
}

/// Holds the per-pool reentrancy flag for as long as it lives.
pub(crate) struct PoolLock<T: Config> {
    pool_id: PoolIndex,
    _marker: PhantomData<T>,
}

impl<T: Config> PoolLock<T> {
    pub(crate) fn acquire(pool_id: PoolIndex) -> Result<Self, Error<T>> {
        PoolLocks::<T>::try_mutate(pool_id, |locked| -> Result<(), Error<T>> {
            ensure!(!*locked, Error::<T>::Locked);
            *locked = true;
            Ok(())
        })?;
        Ok(Self {
            pool_id,
            _marker: PhantomData,
        })
    }
}

impl<T: Config> Drop for PoolLock<T> {
    fn drop(&mut self) {
        PoolLocks::<T>::remove(self.pool_id);
    }
}
