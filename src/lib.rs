//! # AMM pallet
//!
//! ## Overview
//!
//! This pallet implements a constant-product automated market maker in the style of
//! Uniswap V2. Please refer to the [protocol description](https://docs.uniswap.org/contracts/v2/overview)
//! for the background.
//! Any account may create a pool for a pair of fungible assets, supply it with liquidity in exchange
//! for pool shares, and trade against it. Every trade pays a 0.3% fee to liquidity providers; a
//! sixth of the fee growth can optionally be diverted to a protocol fee recipient.
//!
//! The pallet is split in two layers:
//!   * the pool engine (`mint`, `burn`, `swap`, `skim`, `sync`) which enforces the invariant
//!     `reserve_a * reserve_b` (fee-adjusted) never decreases and keeps time-weighted price
//!     accumulators,
//!   * the router (`add_liquidity`, `remove_liquidity`, `swap_*`) which quotes amounts, enforces
//!     deadlines and slippage bounds, and chains swaps along a path of pools.
//!
//! The native currency takes part in trading through a wrapped asset (`WrappedNative`), which
//! the pallet mints and burns 1:1 against native balance held in its own account.
//! Reserves and prices can also be queried by custom RPC methods.
//!

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;
#[cfg(test)]
mod mock;
mod pool;
#[cfg(test)]
mod proptest_properties;
mod router;
pub mod rpc;
pub mod types;
pub mod weights;

use sp_std::prelude::*;

pub use pallet::*;
pub use types::{PoolIndex, PoolInfo, SwapCallback, MAX_RESERVE, MINIMUM_LIQUIDITY};
pub use weights::WeightInfo;

pub(crate) const LOG_TARGET: &str = "runtime::amm";

pub type AccountIdOf<T> = <T as frame_system::Config>::AccountId;
pub type BalanceOf<T> = <T as Config>::Balance;
pub type AssetIdOf<T> = <T as Config>::AssetId;
pub type PoolInfoOf<T> = PoolInfo<AssetIdOf<T>, BalanceOf<T>>;

#[frame_support::pallet]
pub mod pallet {
    use super::*;
    use frame_support::{
        pallet_prelude::*,
        traits::{
            fungible, fungibles,
            tokens::{AssetId, Balance},
            UnixTime,
        },
        PalletId,
    };
    use frame_system::pallet_prelude::*;

    #[pallet::pallet]
    #[pallet::without_storage_info]
    pub struct Pallet<T>(_);

    #[pallet::config]
    pub trait Config: frame_system::Config {
        /// The overarching event type.
        type RuntimeEvent: From<Event<Self>> + IsType<<Self as frame_system::Config>::RuntimeEvent>;

        /// The balance type shared by the native currency, assets and pool shares.
        type Balance: Balance;

        /// The asset ID type. Its ordering defines the canonical order of a pair.
        type AssetId: AssetId + Ord;

        /// The type for tradable assets. Must also know the `WrappedNative` asset.
        type Assets: fungibles::Inspect<Self::AccountId, AssetId = Self::AssetId, Balance = Self::Balance>
            + fungibles::Mutate<Self::AccountId>;

        /// The native currency, traded through its wrapped representation.
        type Currency: fungible::Inspect<Self::AccountId, Balance = Self::Balance>
            + fungible::Mutate<Self::AccountId>;

        /// Source of wall-clock time for deadlines and price accumulators.
        type Time: UnixTime;

        /// Receiver of flash swap callbacks. Use `()` to disable flash swaps.
        type SwapCallback: SwapCallback<Self::AccountId, Self::Balance>;

        /// Origin allowed to change the fee setter, the pause switch and the trade size limit.
        type AdminOrigin: EnsureOrigin<Self::RuntimeOrigin>;

        /// Information on runtime weights.
        type WeightInfo: WeightInfo;

        /// Pallet ID. Pool accounts and the internal holder accounts are derived from it.
        #[pallet::constant]
        type PalletId: Get<PalletId>;

        /// Asset representing the native currency inside pools.
        #[pallet::constant]
        type WrappedNative: Get<Self::AssetId>;

        /// Maximum number of assets in a swap path.
        #[pallet::constant]
        type MaxSwapPathLength: Get<u32>;

        /// Largest allowed swap input, as a percentage of the first pool's input reserve,
        /// until changed with `set_max_trade_percent`.
        #[pallet::constant]
        type DefaultMaxTradePercent: Get<u8>;
    }

    #[pallet::storage]
    #[pallet::getter(fn next_pool_index)]
    pub type NextPoolIndex<T: Config> = StorageValue<_, PoolIndex, ValueQuery>;

    /// Canonical (ascending) asset pair to pool.
    #[pallet::storage]
    pub type PairIndex<T: Config> =
        StorageMap<_, Blake2_128Concat, (AssetIdOf<T>, AssetIdOf<T>), PoolIndex, OptionQuery>;

    #[pallet::storage]
    #[pallet::getter(fn pools)]
    pub type Pools<T: Config> = StorageMap<_, Twox64Concat, PoolIndex, PoolInfoOf<T>, OptionQuery>;

    #[pallet::storage]
    #[pallet::getter(fn total_shares)]
    pub type TotalShares<T: Config> =
        StorageMap<_, Twox64Concat, PoolIndex, BalanceOf<T>, ValueQuery>;

    #[pallet::storage]
    #[pallet::getter(fn shares)]
    pub type Shares<T: Config> = StorageDoubleMap<
        _,
        Twox64Concat,
        PoolIndex,
        Blake2_128Concat,
        AccountIdOf<T>,
        BalanceOf<T>,
        ValueQuery,
    >;

    /// Pools currently inside a lock-guarded operation.
    #[pallet::storage]
    pub type PoolLocks<T: Config> = StorageMap<_, Twox64Concat, PoolIndex, bool, ValueQuery>;

    /// Recipient of the protocol fee. The fee is off while unset.
    #[pallet::storage]
    #[pallet::getter(fn fee_to)]
    pub type FeeTo<T: Config> = StorageValue<_, AccountIdOf<T>, OptionQuery>;

    /// The only account allowed to change `FeeTo`.
    #[pallet::storage]
    #[pallet::getter(fn fee_to_setter)]
    pub type FeeToSetter<T: Config> = StorageValue<_, AccountIdOf<T>, OptionQuery>;

    #[pallet::storage]
    #[pallet::getter(fn paused)]
    pub type Paused<T: Config> = StorageValue<_, bool, ValueQuery>;

    #[pallet::storage]
    pub type MaxTradePercent<T: Config> = StorageValue<_, u8, OptionQuery>;

    #[pallet::event]
    #[pallet::generate_deposit(pub(super) fn deposit_event)]
    pub enum Event<T: Config> {
        /// A new pool was created for a pair of assets.
        PoolCreated {
            creator: AccountIdOf<T>,
            pool_id: PoolIndex,
            asset_a: AssetIdOf<T>,
            asset_b: AssetIdOf<T>,
            pool_account: AccountIdOf<T>,
        },
        /// Deposited balances were converted into pool shares.
        Mint {
            sender: AccountIdOf<T>,
            pool_id: PoolIndex,
            amount_a: BalanceOf<T>,
            amount_b: BalanceOf<T>,
            to: AccountIdOf<T>,
            liquidity: BalanceOf<T>,
        },
        /// Shares held by the pool account were redeemed for the underlying assets.
        Burn {
            sender: AccountIdOf<T>,
            pool_id: PoolIndex,
            amount_a: BalanceOf<T>,
            amount_b: BalanceOf<T>,
            to: AccountIdOf<T>,
            liquidity: BalanceOf<T>,
        },
        /// A swap was settled against a pool.
        Swap {
            sender: AccountIdOf<T>,
            pool_id: PoolIndex,
            amount_a_in: BalanceOf<T>,
            amount_b_in: BalanceOf<T>,
            amount_a_out: BalanceOf<T>,
            amount_b_out: BalanceOf<T>,
            to: AccountIdOf<T>,
        },
        /// Reserves of a pool changed.
        Sync { pool_id: PoolIndex, reserve_a: BalanceOf<T>, reserve_b: BalanceOf<T> },
        /// Shares changed hands.
        SharesTransferred {
            pool_id: PoolIndex,
            from: AccountIdOf<T>,
            to: AccountIdOf<T>,
            amount: BalanceOf<T>,
        },
        /// Shares were minted to the protocol fee recipient.
        ProtocolFeeMinted { pool_id: PoolIndex, fee_to: AccountIdOf<T>, shares: BalanceOf<T> },
        /// Liquidity was added through the router.
        LiquidityAdded {
            who: AccountIdOf<T>,
            mint_to: AccountIdOf<T>,
            pool_id: PoolIndex,
            amount_a: BalanceOf<T>,
            amount_b: BalanceOf<T>,
            liquidity: BalanceOf<T>,
        },
        /// Liquidity was removed through the router. Amounts follow the order requested by the caller.
        LiquidityRemoved {
            who: AccountIdOf<T>,
            withdraw_to: AccountIdOf<T>,
            pool_id: PoolIndex,
            amount_a: BalanceOf<T>,
            amount_b: BalanceOf<T>,
            liquidity: BalanceOf<T>,
        },
        /// A routed swap went through every pool of `path`.
        SwapExecuted {
            who: AccountIdOf<T>,
            send_to: AccountIdOf<T>,
            path: Vec<AssetIdOf<T>>,
            amounts: Vec<BalanceOf<T>>,
        },
        /// The protocol fee recipient was changed.
        FeeToSet { fee_to: Option<AccountIdOf<T>> },
        /// The protocol fee setter was changed.
        FeeToSetterSet { setter: AccountIdOf<T> },
        /// The router and pool creation were paused or resumed.
        PausedSet { paused: bool },
        /// The trade size limit was changed.
        MaxTradePercentSet { percent: u8 },
    }

    #[pallet::error]
    pub enum Error<T> {
        /// Both sides of the pair are the same asset
        IdenticalAssets,
        /// Asset with the specified ID does not exist
        AssetNotFound,
        /// Swap path is too short, too long or contains a pair without a pool
        InvalidPath,
        /// Swap path does not start (or end) with the wrapped native asset
        InvalidNativePath,
        /// The pool account cannot be the recipient of its own swap
        InvalidRecipient,
        /// Zero value provided for an amount which must be positive
        ZeroAmount,
        /// Deposit is too small to mint any shares
        InsufficientLiquidityMinted,
        /// Burned shares are worth nothing in one of the assets
        InsufficientLiquidityBurned,
        /// Pool reserves cannot cover the requested amount, or are empty
        InsufficientLiquidity,
        /// Specified account doesn't own enough shares
        InsufficientShares,
        /// Minimum liquidity shares can never be moved
        SharesLocked,
        /// No pool found for the given pair or index
        PoolNotFound,
        /// A pool for the given pair already exists
        PoolExists,
        /// Swap output is zero or lower than the specified minimum
        InsufficientOutputAmount,
        /// Required swap input is higher than the specified maximum
        ExcessiveInputAmount,
        /// Amount of the first asset is lower than the specified minimum
        InsufficientAmountA,
        /// Amount of the second asset is lower than the specified minimum
        InsufficientAmountB,
        /// Swap would decrease the fee-adjusted product of reserves
        InvariantViolated,
        /// Overflow occurred
        Overflow,
        /// Nothing was paid into the pool for a swap
        InsufficientInputAmount,
        /// Computed output does not fit the pool
        InsufficientOutput,
        /// Pool has already been initialized
        AlreadyInitialized,
        /// Caller is not the protocol fee setter
        NotFeeSetter,
        /// Deadline specified for the operation has passed
        DeadlinePassed,
        /// Swap input exceeds the allowed share of the pool reserve
        TradeTooLarge,
        /// Trading is paused
        Paused,
        /// Trade size limit must be between 1 and 100 percent
        InvalidTradePercent,
        /// Underlying asset or currency transfer failed
        TransferFailed,
        /// Pool is already in the middle of an operation
        Locked,
    }

    #[pallet::hooks]
    impl<T: Config> Hooks<BlockNumberFor<T>> for Pallet<T> {
        fn integrity_test() {
            assert!(
                T::MaxSwapPathLength::get() >= 2,
                "a swap path needs at least two assets"
            );
            assert!(
                (1..=100).contains(&T::DefaultMaxTradePercent::get()),
                "default trade size limit must be a percentage between 1 and 100"
            );
        }
    }

    #[pallet::call]
    impl<T: Config> Pallet<T> {
        /// Create a new pool for a pair of assets. The pair is stored in canonical order,
        /// so `(a, b)` and `(b, a)` refer to the same pool. Emit `PoolCreated` on success.
        ///
        /// **Parameters:**
        ///   * `origin` – Origin for the call. Must be signed.
        ///   * `asset_a`, `asset_b` – The two assets of the pair. Both must exist.
        ///
        /// **Errors:**
        ///   * `Paused` – Trading is paused.
        ///   * `IdenticalAssets` – Both assets are the same.
        ///   * `AssetNotFound` – One of the assets does not exist.
        ///   * `PoolExists` – A pool for the pair already exists.
        #[pallet::call_index(0)]
        #[pallet::weight(T::WeightInfo::create_pair())]
        pub fn create_pair(
            origin: OriginFor<T>,
            asset_a: AssetIdOf<T>,
            asset_b: AssetIdOf<T>,
        ) -> DispatchResult {
            let caller = ensure_signed(origin)?;
            Self::ensure_active()?;
            Self::do_create_pair(&caller, asset_a, asset_b)?;
            Ok(())
        }

        /// Convert whatever the pool account holds above its reserves into shares for `to`.
        /// The deposit must be transferred to the pool account beforehand.
        ///
        /// **Errors:**
        ///   * `PoolNotFound` – There is no pool with the given index.
        ///   * `InsufficientLiquidityMinted` – The deposit is worth no shares. The first deposit
        ///     must be worth more than `MINIMUM_LIQUIDITY` shares.
        ///   * `Overflow` – Resulting reserves would not fit in 112 bits.
        #[pallet::call_index(1)]
        #[pallet::weight(T::WeightInfo::mint())]
        pub fn mint(origin: OriginFor<T>, pool_id: PoolIndex, to: AccountIdOf<T>) -> DispatchResult {
            let caller = ensure_signed(origin)?;
            Self::do_mint(&caller, pool_id, &to)?;
            Ok(())
        }

        /// Redeem the shares held by the pool account and send the underlying assets to `to`.
        /// Shares must be transferred to the pool account beforehand.
        ///
        /// **Errors:**
        ///   * `PoolNotFound` – There is no pool with the given index.
        ///   * `InsufficientLiquidityBurned` – The burned shares are worth nothing in one of the assets.
        #[pallet::call_index(2)]
        #[pallet::weight(T::WeightInfo::burn())]
        pub fn burn(origin: OriginFor<T>, pool_id: PoolIndex, to: AccountIdOf<T>) -> DispatchResult {
            let caller = ensure_signed(origin)?;
            Self::do_burn(&caller, pool_id, &to)?;
            Ok(())
        }

        /// Low-level swap. Pay out the requested amounts to `to`, optionally run the flash swap
        /// callback, then require the pool to be paid back so that the fee-adjusted product of
        /// reserves does not decrease.
        ///
        /// **Parameters:**
        ///   * `origin` – Origin for the call. Must be signed.
        ///   * `pool_id` – Index of the pool.
        ///   * `amount_a_out`, `amount_b_out` – Amounts to withdraw. At least one must be positive.
        ///   * `to` – Recipient of the output. Must not be the pool account.
        ///   * `data` – If non-empty, passed to the flash swap callback.
        ///
        /// **Errors:**
        ///   * `InsufficientOutputAmount` – Both output amounts are zero.
        ///   * `InsufficientLiquidity` – An output amount is not below its reserve.
        ///   * `InvalidRecipient` – `to` is the pool account.
        ///   * `InsufficientInputAmount` – Nothing was paid into the pool.
        ///   * `InvariantViolated` – The payment does not cover the output plus the fee.
        ///   * `Locked` – The pool is already in the middle of an operation.
        #[pallet::call_index(3)]
        #[pallet::weight(T::WeightInfo::swap())]
        pub fn swap(
            origin: OriginFor<T>,
            pool_id: PoolIndex,
            amount_a_out: BalanceOf<T>,
            amount_b_out: BalanceOf<T>,
            to: AccountIdOf<T>,
            data: Vec<u8>,
        ) -> DispatchResult {
            let caller = ensure_signed(origin)?;
            Self::do_swap(&caller, pool_id, amount_a_out, amount_b_out, &to, &data)
        }

        /// Send the pool account's balances in excess of the reserves to `to`.
        #[pallet::call_index(4)]
        #[pallet::weight(T::WeightInfo::skim())]
        pub fn skim(origin: OriginFor<T>, pool_id: PoolIndex, to: AccountIdOf<T>) -> DispatchResult {
            ensure_signed(origin)?;
            Self::do_skim(pool_id, &to)
        }

        /// Set the reserves to the pool account's actual balances.
        #[pallet::call_index(5)]
        #[pallet::weight(T::WeightInfo::sync())]
        pub fn sync(origin: OriginFor<T>, pool_id: PoolIndex) -> DispatchResult {
            ensure_signed(origin)?;
            Self::do_sync(pool_id)
        }

        /// Transfer pool shares to another account.
        ///
        /// **Errors:**
        ///   * `PoolNotFound` – There is no pool with the given index.
        ///   * `InsufficientShares` – The caller owns fewer than `amount` shares.
        #[pallet::call_index(6)]
        #[pallet::weight(T::WeightInfo::transfer_shares())]
        pub fn transfer_shares(
            origin: OriginFor<T>,
            pool_id: PoolIndex,
            to: AccountIdOf<T>,
            amount: BalanceOf<T>,
        ) -> DispatchResult {
            let caller = ensure_signed(origin)?;
            Self::do_transfer_shares(pool_id, &caller, &to, amount)
        }

        /// Add liquidity to the pool of `asset_a` and `asset_b`, creating the pool if needed.
        /// The deposit follows the current pool ratio: the desired amount of one asset is
        /// taken in full and the other one is reduced to match. Emit `LiquidityAdded` on success.
        ///
        /// **Parameters:**
        ///   * `origin` – Origin for the call. Must be signed.
        ///   * `asset_a`, `asset_b` – The pair, in any order.
        ///   * `amount_a_desired`, `amount_b_desired` – Upper bounds of the deposit.
        ///   * `amount_a_min`, `amount_b_min` – Lower bounds of the deposit.
        ///   * `to` – Recipient of the minted shares.
        ///   * `deadline` – Last unix timestamp (in seconds) at which the call may execute.
        ///
        /// **Errors:**
        ///   * `DeadlinePassed` – The current time is past `deadline`.
        ///   * `InsufficientAmountA`, `InsufficientAmountB` – The deposit would fall below a minimum.
        ///   * `InsufficientLiquidityMinted` – The deposit is worth no shares.
        ///   * `TransferFailed` – The caller cannot pay the deposit.
        #[pallet::call_index(7)]
        #[pallet::weight(T::WeightInfo::add_liquidity())]
        pub fn add_liquidity(
            origin: OriginFor<T>,
            asset_a: AssetIdOf<T>,
            asset_b: AssetIdOf<T>,
            amount_a_desired: BalanceOf<T>,
            amount_b_desired: BalanceOf<T>,
            amount_a_min: BalanceOf<T>,
            amount_b_min: BalanceOf<T>,
            to: AccountIdOf<T>,
            deadline: u64,
        ) -> DispatchResult {
            // -------------------------- Validation part --------------------------
            let caller = ensure_signed(origin)?;
            Self::ensure_active()?;
            Self::check_deadline(deadline)?;
            let pool_id = match Self::get_pair(&asset_a, &asset_b) {
                Some(pool_id) => pool_id,
                None => Self::do_create_pair(&caller, asset_a.clone(), asset_b.clone())?,
            };

            // ------------------------- Compute deposit ---------------------------
            let (amount_a, amount_b) = Self::resolve_liquidity_amounts(
                &asset_a,
                &asset_b,
                amount_a_desired,
                amount_b_desired,
                amount_a_min,
                amount_b_min,
            )?;

            // ----------------------------- State update ----------------------------
            let pool_account = Self::pool_account(pool_id);
            Self::transfer_asset(&asset_a, &caller, &pool_account, amount_a)?;
            Self::transfer_asset(&asset_b, &caller, &pool_account, amount_b)?;
            let liquidity = Self::do_mint(&caller, pool_id, &to)?;

            // ---------------------------- Emit event -----------------------------
            Self::deposit_event(Event::LiquidityAdded {
                who: caller,
                mint_to: to,
                pool_id,
                amount_a,
                amount_b,
                liquidity,
            });
            Ok(())
        }

        /// Same as `add_liquidity`, with native currency as the second asset. Only the resolved
        /// native amount is taken from the caller.
        #[pallet::call_index(8)]
        #[pallet::weight(T::WeightInfo::add_liquidity_native())]
        pub fn add_liquidity_native(
            origin: OriginFor<T>,
            asset: AssetIdOf<T>,
            amount_asset_desired: BalanceOf<T>,
            amount_native_desired: BalanceOf<T>,
            amount_asset_min: BalanceOf<T>,
            amount_native_min: BalanceOf<T>,
            to: AccountIdOf<T>,
            deadline: u64,
        ) -> DispatchResult {
            // -------------------------- Validation part --------------------------
            let caller = ensure_signed(origin)?;
            Self::ensure_active()?;
            Self::check_deadline(deadline)?;
            let native = T::WrappedNative::get();
            let pool_id = match Self::get_pair(&asset, &native) {
                Some(pool_id) => pool_id,
                None => Self::do_create_pair(&caller, asset.clone(), native.clone())?,
            };

            // ------------------------- Compute deposit ---------------------------
            let (amount_asset, amount_native) = Self::resolve_liquidity_amounts(
                &asset,
                &native,
                amount_asset_desired,
                amount_native_desired,
                amount_asset_min,
                amount_native_min,
            )?;

            // ----------------------------- State update ----------------------------
            let pool_account = Self::pool_account(pool_id);
            Self::transfer_asset(&asset, &caller, &pool_account, amount_asset)?;
            Self::wrap_native(&caller, &pool_account, amount_native)?;
            let liquidity = Self::do_mint(&caller, pool_id, &to)?;

            // ---------------------------- Emit event -----------------------------
            Self::deposit_event(Event::LiquidityAdded {
                who: caller,
                mint_to: to,
                pool_id,
                amount_a: amount_asset,
                amount_b: amount_native,
                liquidity,
            });
            Ok(())
        }

        /// Burn `liquidity` of the caller's shares and send the underlying assets to `to`.
        /// Emit `LiquidityRemoved` on success.
        ///
        /// **Errors:**
        ///   * `DeadlinePassed` – The current time is past `deadline`.
        ///   * `PoolNotFound` – There is no pool for the pair.
        ///   * `InsufficientShares` – The caller owns fewer than `liquidity` shares.
        ///   * `InsufficientAmountA`, `InsufficientAmountB` – A withdrawn amount is below its minimum.
        #[pallet::call_index(9)]
        #[pallet::weight(T::WeightInfo::remove_liquidity())]
        pub fn remove_liquidity(
            origin: OriginFor<T>,
            asset_a: AssetIdOf<T>,
            asset_b: AssetIdOf<T>,
            liquidity: BalanceOf<T>,
            amount_a_min: BalanceOf<T>,
            amount_b_min: BalanceOf<T>,
            to: AccountIdOf<T>,
            deadline: u64,
        ) -> DispatchResult {
            let caller = ensure_signed(origin)?;
            Self::ensure_active()?;
            Self::check_deadline(deadline)?;
            let (pool_id, amount_a, amount_b) = Self::do_remove_liquidity(
                &caller,
                &asset_a,
                &asset_b,
                liquidity,
                amount_a_min,
                amount_b_min,
                &to,
            )?;
            Self::deposit_event(Event::LiquidityRemoved {
                who: caller,
                withdraw_to: to,
                pool_id,
                amount_a,
                amount_b,
                liquidity,
            });
            Ok(())
        }

        /// Same as `remove_liquidity` for a pool paired with the native currency. The native side
        /// is unwrapped before it is sent to `to`.
        #[pallet::call_index(10)]
        #[pallet::weight(T::WeightInfo::remove_liquidity_native())]
        pub fn remove_liquidity_native(
            origin: OriginFor<T>,
            asset: AssetIdOf<T>,
            liquidity: BalanceOf<T>,
            amount_asset_min: BalanceOf<T>,
            amount_native_min: BalanceOf<T>,
            to: AccountIdOf<T>,
            deadline: u64,
        ) -> DispatchResult {
            let caller = ensure_signed(origin)?;
            Self::ensure_active()?;
            Self::check_deadline(deadline)?;
            let native = T::WrappedNative::get();
            let router = Self::router_account();
            let (pool_id, amount_asset, amount_native) = Self::do_remove_liquidity(
                &caller,
                &asset,
                &native,
                liquidity,
                amount_asset_min,
                amount_native_min,
                &router,
            )?;
            Self::transfer_asset(&asset, &router, &to, amount_asset)?;
            Self::unwrap_native(&router, &to, amount_native)?;
            Self::deposit_event(Event::LiquidityRemoved {
                who: caller,
                withdraw_to: to,
                pool_id,
                amount_a: amount_asset,
                amount_b: amount_native,
                liquidity,
            });
            Ok(())
        }

        /// Swap an exact amount of `path[0]` for as much of the last asset of `path` as possible.
        /// Emit `SwapExecuted` on success.
        ///
        /// **Parameters:**
        ///   * `origin` – Origin for the call. Must be signed.
        ///   * `amount_in` – Exact amount of `path[0]` to sell.
        ///   * `amount_out_min` – The minimum amount of the last asset to receive.
        ///   * `path` – Assets to trade through. Every consecutive pair must have a pool.
        ///   * `to` – Recipient of the output.
        ///   * `deadline` – Last unix timestamp (in seconds) at which the call may execute.
        ///
        /// **Errors:**
        ///   * `DeadlinePassed` – The current time is past `deadline`.
        ///   * `InvalidPath` – The path has fewer than two or more than `MaxSwapPathLength` assets.
        ///   * `PoolNotFound` – A pair of the path has no pool.
        ///   * `InsufficientOutputAmount` – The output would be lower than `amount_out_min`.
        ///   * `TradeTooLarge` – The input exceeds the trade size limit of the first pool.
        ///   * `TransferFailed` – The caller cannot pay the input.
        #[pallet::call_index(11)]
        #[pallet::weight(T::WeightInfo::swap_exact_tokens_for_tokens(path.len() as u32))]
        pub fn swap_exact_tokens_for_tokens(
            origin: OriginFor<T>,
            amount_in: BalanceOf<T>,
            amount_out_min: BalanceOf<T>,
            path: Vec<AssetIdOf<T>>,
            to: AccountIdOf<T>,
            deadline: u64,
        ) -> DispatchResult {
            // -------------------------- Validation part --------------------------
            let caller = ensure_signed(origin)?;
            Self::check_swap_preconditions(&path, deadline)?;

            // --------------------------- Compute price ---------------------------
            let amounts = Self::get_amounts_out(amount_in, &path)?;
            Self::check_amount_out_min(&amounts, amount_out_min)?;
            Self::check_trade_size(&path, &amounts)?;

            // --------------------------- Perform trade ---------------------------
            Self::transfer_asset(&path[0], &caller, &Self::first_pool_account(&path)?, amounts[0])?;
            Self::do_swap_path(&caller, &amounts, &path, &to)?;
            Self::deposit_swap_executed(caller, to, path, amounts);
            Ok(())
        }

        /// Swap as little of `path[0]` as possible for an exact amount of the last asset of `path`.
        /// Emit `SwapExecuted` on success.
        ///
        /// **Errors:**
        ///   * `ExcessiveInputAmount` – The required input is higher than `amount_in_max`.
        ///   * Otherwise as `swap_exact_tokens_for_tokens`.
        #[pallet::call_index(12)]
        #[pallet::weight(T::WeightInfo::swap_tokens_for_exact_tokens(path.len() as u32))]
        pub fn swap_tokens_for_exact_tokens(
            origin: OriginFor<T>,
            amount_out: BalanceOf<T>,
            amount_in_max: BalanceOf<T>,
            path: Vec<AssetIdOf<T>>,
            to: AccountIdOf<T>,
            deadline: u64,
        ) -> DispatchResult {
            // -------------------------- Validation part --------------------------
            let caller = ensure_signed(origin)?;
            Self::check_swap_preconditions(&path, deadline)?;

            // --------------------------- Compute price ---------------------------
            let amounts = Self::get_amounts_in(amount_out, &path)?;
            ensure!(amounts[0] <= amount_in_max, Error::<T>::ExcessiveInputAmount);
            Self::check_trade_size(&path, &amounts)?;

            // --------------------------- Perform trade ---------------------------
            Self::transfer_asset(&path[0], &caller, &Self::first_pool_account(&path)?, amounts[0])?;
            Self::do_swap_path(&caller, &amounts, &path, &to)?;
            Self::deposit_swap_executed(caller, to, path, amounts);
            Ok(())
        }

        /// Swap an exact amount of native currency for as much of the last asset of `path` as
        /// possible. `path[0]` must be `WrappedNative`.
        #[pallet::call_index(13)]
        #[pallet::weight(T::WeightInfo::swap_exact_native_for_tokens(path.len() as u32))]
        pub fn swap_exact_native_for_tokens(
            origin: OriginFor<T>,
            amount_in: BalanceOf<T>,
            amount_out_min: BalanceOf<T>,
            path: Vec<AssetIdOf<T>>,
            to: AccountIdOf<T>,
            deadline: u64,
        ) -> DispatchResult {
            // -------------------------- Validation part --------------------------
            let caller = ensure_signed(origin)?;
            Self::check_swap_preconditions(&path, deadline)?;
            ensure!(path[0] == T::WrappedNative::get(), Error::<T>::InvalidNativePath);

            // --------------------------- Compute price ---------------------------
            let amounts = Self::get_amounts_out(amount_in, &path)?;
            Self::check_amount_out_min(&amounts, amount_out_min)?;
            Self::check_trade_size(&path, &amounts)?;

            // --------------------------- Perform trade ---------------------------
            Self::wrap_native(&caller, &Self::first_pool_account(&path)?, amounts[0])?;
            Self::do_swap_path(&caller, &amounts, &path, &to)?;
            Self::deposit_swap_executed(caller, to, path, amounts);
            Ok(())
        }

        /// Swap as little of `path[0]` as possible for an exact amount of native currency.
        /// The last asset of `path` must be `WrappedNative`.
        #[pallet::call_index(14)]
        #[pallet::weight(T::WeightInfo::swap_tokens_for_exact_native(path.len() as u32))]
        pub fn swap_tokens_for_exact_native(
            origin: OriginFor<T>,
            amount_out: BalanceOf<T>,
            amount_in_max: BalanceOf<T>,
            path: Vec<AssetIdOf<T>>,
            to: AccountIdOf<T>,
            deadline: u64,
        ) -> DispatchResult {
            // -------------------------- Validation part --------------------------
            let caller = ensure_signed(origin)?;
            Self::check_swap_preconditions(&path, deadline)?;
            ensure!(path.last() == Some(&T::WrappedNative::get()), Error::<T>::InvalidNativePath);

            // --------------------------- Compute price ---------------------------
            let amounts = Self::get_amounts_in(amount_out, &path)?;
            ensure!(amounts[0] <= amount_in_max, Error::<T>::ExcessiveInputAmount);
            Self::check_trade_size(&path, &amounts)?;

            // --------------------------- Perform trade ---------------------------
            let router = Self::router_account();
            Self::transfer_asset(&path[0], &caller, &Self::first_pool_account(&path)?, amounts[0])?;
            Self::do_swap_path(&caller, &amounts, &path, &router)?;
            Self::unwrap_native(&router, &to, amount_out)?;
            Self::deposit_swap_executed(caller, to, path, amounts);
            Ok(())
        }

        /// Swap an exact amount of `path[0]` for as much native currency as possible.
        /// The last asset of `path` must be `WrappedNative`.
        #[pallet::call_index(15)]
        #[pallet::weight(T::WeightInfo::swap_exact_tokens_for_native(path.len() as u32))]
        pub fn swap_exact_tokens_for_native(
            origin: OriginFor<T>,
            amount_in: BalanceOf<T>,
            amount_out_min: BalanceOf<T>,
            path: Vec<AssetIdOf<T>>,
            to: AccountIdOf<T>,
            deadline: u64,
        ) -> DispatchResult {
            // -------------------------- Validation part --------------------------
            let caller = ensure_signed(origin)?;
            Self::check_swap_preconditions(&path, deadline)?;
            ensure!(path.last() == Some(&T::WrappedNative::get()), Error::<T>::InvalidNativePath);

            // --------------------------- Compute price ---------------------------
            let amounts = Self::get_amounts_out(amount_in, &path)?;
            let amount_out = Self::check_amount_out_min(&amounts, amount_out_min)?;
            Self::check_trade_size(&path, &amounts)?;

            // --------------------------- Perform trade ---------------------------
            let router = Self::router_account();
            Self::transfer_asset(&path[0], &caller, &Self::first_pool_account(&path)?, amounts[0])?;
            Self::do_swap_path(&caller, &amounts, &path, &router)?;
            Self::unwrap_native(&router, &to, amount_out)?;
            Self::deposit_swap_executed(caller, to, path, amounts);
            Ok(())
        }

        /// Swap as little native currency as possible for an exact amount of the last asset
        /// of `path`. `path[0]` must be `WrappedNative`. Only the quoted input is taken.
        #[pallet::call_index(16)]
        #[pallet::weight(T::WeightInfo::swap_native_for_exact_tokens(path.len() as u32))]
        pub fn swap_native_for_exact_tokens(
            origin: OriginFor<T>,
            amount_out: BalanceOf<T>,
            amount_in_max: BalanceOf<T>,
            path: Vec<AssetIdOf<T>>,
            to: AccountIdOf<T>,
            deadline: u64,
        ) -> DispatchResult {
            // -------------------------- Validation part --------------------------
            let caller = ensure_signed(origin)?;
            Self::check_swap_preconditions(&path, deadline)?;
            ensure!(path[0] == T::WrappedNative::get(), Error::<T>::InvalidNativePath);

            // --------------------------- Compute price ---------------------------
            let amounts = Self::get_amounts_in(amount_out, &path)?;
            ensure!(amounts[0] <= amount_in_max, Error::<T>::ExcessiveInputAmount);
            Self::check_trade_size(&path, &amounts)?;

            // --------------------------- Perform trade ---------------------------
            Self::wrap_native(&caller, &Self::first_pool_account(&path)?, amounts[0])?;
            Self::do_swap_path(&caller, &amounts, &path, &to)?;
            Self::deposit_swap_executed(caller, to, path, amounts);
            Ok(())
        }

        /// Change the protocol fee recipient. `None` turns the protocol fee off.
        ///
        /// **Errors:**
        ///   * `NotFeeSetter` – The caller is not the current fee setter.
        #[pallet::call_index(17)]
        #[pallet::weight(T::WeightInfo::set_fee_to())]
        pub fn set_fee_to(origin: OriginFor<T>, fee_to: Option<AccountIdOf<T>>) -> DispatchResult {
            let caller = ensure_signed(origin)?;
            ensure!(FeeToSetter::<T>::get() == Some(caller), Error::<T>::NotFeeSetter);
            FeeTo::<T>::set(fee_to.clone());
            Self::deposit_event(Event::FeeToSet { fee_to });
            Ok(())
        }

        /// Change the account allowed to set the protocol fee recipient.
        #[pallet::call_index(18)]
        #[pallet::weight(T::WeightInfo::set_fee_to_setter())]
        pub fn set_fee_to_setter(origin: OriginFor<T>, setter: AccountIdOf<T>) -> DispatchResult {
            T::AdminOrigin::ensure_origin(origin)?;
            FeeToSetter::<T>::put(setter.clone());
            Self::deposit_event(Event::FeeToSetterSet { setter });
            Ok(())
        }

        /// Pause or resume pool creation and every router call.
        #[pallet::call_index(19)]
        #[pallet::weight(T::WeightInfo::set_paused())]
        pub fn set_paused(origin: OriginFor<T>, paused: bool) -> DispatchResult {
            T::AdminOrigin::ensure_origin(origin)?;
            Paused::<T>::put(paused);
            log::info!(target: LOG_TARGET, "trading paused: {paused}");
            Self::deposit_event(Event::PausedSet { paused });
            Ok(())
        }

        /// Change the largest swap input allowed by the router, as a percentage of the input
        /// reserve of the first pool.
        ///
        /// **Errors:**
        ///   * `InvalidTradePercent` – `percent` is not between 1 and 100.
        #[pallet::call_index(20)]
        #[pallet::weight(T::WeightInfo::set_max_trade_percent())]
        pub fn set_max_trade_percent(origin: OriginFor<T>, percent: u8) -> DispatchResult {
            T::AdminOrigin::ensure_origin(origin)?;
            ensure!((1..=100).contains(&percent), Error::<T>::InvalidTradePercent);
            MaxTradePercent::<T>::put(percent);
            Self::deposit_event(Event::MaxTradePercentSet { percent });
            Ok(())
        }
    }

    impl<T: Config> Pallet<T> {
        pub(crate) fn ensure_active() -> Result<(), Error<T>> {
            ensure!(!Paused::<T>::get(), Error::<T>::Paused);
            Ok(())
        }

        pub(crate) fn check_deadline(deadline: u64) -> Result<(), Error<T>> {
            ensure!(T::Time::now().as_secs() <= deadline, Error::<T>::DeadlinePassed);
            Ok(())
        }

        /// Current trade size limit in percent.
        pub fn max_trade_percent() -> u8 {
            MaxTradePercent::<T>::get().unwrap_or_else(T::DefaultMaxTradePercent::get)
        }

        fn check_swap_preconditions(path: &[AssetIdOf<T>], deadline: u64) -> DispatchResult {
            Self::ensure_active()?;
            Self::check_deadline(deadline)?;
            Self::validate_path(path)?;
            Ok(())
        }

        fn check_amount_out_min(
            amounts: &[BalanceOf<T>],
            amount_out_min: BalanceOf<T>,
        ) -> Result<BalanceOf<T>, Error<T>> {
            let amount_out = *amounts.last().ok_or(Error::<T>::InvalidPath)?;
            ensure!(amount_out >= amount_out_min, Error::<T>::InsufficientOutputAmount);
            Ok(amount_out)
        }

        fn first_pool_account(path: &[AssetIdOf<T>]) -> Result<AccountIdOf<T>, Error<T>> {
            let pool_id = Self::get_pair(&path[0], &path[1]).ok_or(Error::<T>::PoolNotFound)?;
            Ok(Self::pool_account(pool_id))
        }

        fn deposit_swap_executed(
            who: AccountIdOf<T>,
            send_to: AccountIdOf<T>,
            path: Vec<AssetIdOf<T>>,
            amounts: Vec<BalanceOf<T>>,
        ) {
            log::debug!(target: LOG_TARGET, "routed swap {amounts:?} through {path:?}");
            Self::deposit_event(Event::SwapExecuted { who, send_to, path, amounts });
        }
    }
}
