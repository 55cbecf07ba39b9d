#![cfg_attr(not(feature = "std"), no_std)]

use codec::Codec;
pub use pallet_amm::rpc::{RpcError, RpcResult};
use sp_runtime::traits::MaybeDisplay;
use sp_std::vec::Vec;

sp_api::decl_runtime_apis! {
    /// Read-only pricing queries, backed by `Pallet::query_*`.
    pub trait AmmApi<AssetId, Balance> where
        AssetId: Codec + MaybeDisplay,
        Balance: Codec + MaybeDisplay,
    {
        /// Reserves of the pool for `asset_a` and `asset_b`, in that order.
        fn get_reserves(asset_a: AssetId, asset_b: AssetId) -> RpcResult<(Balance, Balance)>;
        fn get_amounts_out(amount_in: Balance, path: Vec<AssetId>) -> RpcResult<Vec<Balance>>;
        fn get_amounts_in(amount_out: Balance, path: Vec<AssetId>) -> RpcResult<Vec<Balance>>;
        fn quote(amount_a: Balance, reserve_a: Balance, reserve_b: Balance) -> RpcResult<Balance>;
    }
}
