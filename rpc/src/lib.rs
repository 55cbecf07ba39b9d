use codec::Codec;
use jsonrpsee::{
    core::{async_trait, Error as JsonRpseeError, RpcResult},
    proc_macros::rpc,
    types::error::{CallError, ErrorObject},
};
use sp_api::ProvideRuntimeApi;
use sp_blockchain::HeaderBackend;
use sp_runtime::traits::MaybeDisplay;
use std::fmt::Debug;
use std::marker::PhantomData;
use std::sync::Arc;

pub use pallet_amm_rpc_runtime_api::{AmmApi as AmmRuntimeApi, RpcError as AmmRpcError};

#[cfg(test)]
mod tests;

const RUNTIME_ERROR: i32 = 1;
const POOL_NOT_FOUND: i32 = 2;
const INSUFFICIENT_LIQUIDITY: i32 = 3;
const OVERFLOW: i32 = 4;
const INVALID_PATH: i32 = 5;

#[rpc(server)]
pub trait AmmApi<BlockHash, AssetId, Balance> {
    #[method(name = "amm_getReserves")]
    fn get_reserves(
        &self,
        asset_a: AssetId,
        asset_b: AssetId,
        at: Option<BlockHash>,
    ) -> RpcResult<(Balance, Balance)>;

    #[method(name = "amm_getAmountsOut")]
    fn get_amounts_out(
        &self,
        amount_in: Balance,
        path: Vec<AssetId>,
        at: Option<BlockHash>,
    ) -> RpcResult<Vec<Balance>>;

    #[method(name = "amm_getAmountsIn")]
    fn get_amounts_in(
        &self,
        amount_out: Balance,
        path: Vec<AssetId>,
        at: Option<BlockHash>,
    ) -> RpcResult<Vec<Balance>>;

    #[method(name = "amm_quote")]
    fn quote(
        &self,
        amount_a: Balance,
        reserve_a: Balance,
        reserve_b: Balance,
        at: Option<BlockHash>,
    ) -> RpcResult<Balance>;
}

pub struct Amm<Client, Block> {
    client: Arc<Client>,
    _marker: PhantomData<Block>,
}

type HashOf<Block> = <Block as sp_runtime::traits::Block>::Hash;

impl<Client, Block> Amm<Client, Block>
where
    Block: sp_runtime::traits::Block,
    Client: HeaderBackend<Block>,
{
    pub fn new(client: Arc<Client>) -> Self {
        Self {
            client,
            _marker: Default::default(),
        }
    }

    #[inline(always)]
    fn block_hash(&self, block_hash: Option<HashOf<Block>>) -> HashOf<Block> {
        // If the block hash is not supplied assume the best block.
        block_hash.unwrap_or_else(|| self.client.info().best_hash)
    }
}

#[async_trait]
impl<Client, Block, AssetId, Balance> AmmApiServer<HashOf<Block>, AssetId, Balance>
    for Amm<Client, Block>
where
    Block: sp_runtime::traits::Block,
    Client: ProvideRuntimeApi<Block> + HeaderBackend<Block> + Send + Sync + 'static,
    Client::Api: AmmRuntimeApi<Block, AssetId, Balance>,
    AssetId: Codec + MaybeDisplay + Clone + Send + Sync + 'static,
    Balance: Codec + MaybeDisplay + Copy + Send + Sync + 'static,
{
    fn get_reserves(
        &self,
        asset_a: AssetId,
        asset_b: AssetId,
        at: Option<Block::Hash>,
    ) -> RpcResult<(Balance, Balance)> {
        let at = self.block_hash(at);
        self.client
            .runtime_api()
            .get_reserves(at, asset_a, asset_b)
            .map_err(runtime_error)?
            .map_err(amm_rpc_error)
    }

    fn get_amounts_out(
        &self,
        amount_in: Balance,
        path: Vec<AssetId>,
        at: Option<Block::Hash>,
    ) -> RpcResult<Vec<Balance>> {
        let at = self.block_hash(at);
        self.client
            .runtime_api()
            .get_amounts_out(at, amount_in, path)
            .map_err(runtime_error)?
            .map_err(amm_rpc_error)
    }

    fn get_amounts_in(
        &self,
        amount_out: Balance,
        path: Vec<AssetId>,
        at: Option<Block::Hash>,
    ) -> RpcResult<Vec<Balance>> {
        let at = self.block_hash(at);
        self.client
            .runtime_api()
            .get_amounts_in(at, amount_out, path)
            .map_err(runtime_error)?
            .map_err(amm_rpc_error)
    }

    fn quote(
        &self,
        amount_a: Balance,
        reserve_a: Balance,
        reserve_b: Balance,
        at: Option<Block::Hash>,
    ) -> RpcResult<Balance> {
        let at = self.block_hash(at);
        self.client
            .runtime_api()
            .quote(at, amount_a, reserve_a, reserve_b)
            .map_err(runtime_error)?
            .map_err(amm_rpc_error)
    }
}

fn runtime_error(err: impl Debug) -> JsonRpseeError {
    CallError::Custom(ErrorObject::owned(
        RUNTIME_ERROR,
        "Runtime error",
        Some(format!("{:?}", err)),
    ))
    .into()
}

fn amm_rpc_error(err: AmmRpcError) -> JsonRpseeError {
    let (code, message, data) = match err {
        AmmRpcError::PoolNotFound => (POOL_NOT_FOUND, "Pool not found", None),
        AmmRpcError::InsufficientLiquidity => {
            (INSUFFICIENT_LIQUIDITY, "Insufficient liquidity", None)
        },
        AmmRpcError::InvalidPath => (INVALID_PATH, "Invalid path", None),
        AmmRpcError::Overflow => (OVERFLOW, "Overflow", None),
        AmmRpcError::Unexpected(msg) => (RUNTIME_ERROR, "Runtime error", Some(msg)),
    };
    CallError::Custom(ErrorObject::owned(code, message, data)).into()
}
