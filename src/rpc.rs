use crate::{AssetIdOf, BalanceOf, Config, Error, Pallet};
use codec::{Decode, Encode};
use scale_info::prelude::format;
use sp_std::vec::Vec;

#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode)]
pub enum RpcError {
    PoolNotFound,
    InsufficientLiquidity,
    InvalidPath,
    Overflow,
    Unexpected(Vec<u8>),
}

pub type RpcResult<T> = Result<T, RpcError>;

impl<T: Config> From<Error<T>> for RpcError {
    fn from(err: Error<T>) -> Self {
        match err {
            Error::PoolNotFound => Self::PoolNotFound,
            Error::InsufficientLiquidity => Self::InsufficientLiquidity,
            Error::InvalidPath => Self::InvalidPath,
            Error::Overflow => Self::Overflow,
            err => Self::Unexpected(format!("{err:?}").into_bytes()),
        }
    }
}

impl<T: Config> Pallet<T> {
    /// Reserves of the pool for a pair, in the order requested.
    pub fn query_reserves(
        asset_a: AssetIdOf<T>,
        asset_b: AssetIdOf<T>,
    ) -> RpcResult<(BalanceOf<T>, BalanceOf<T>)> {
        Ok(Self::get_reserves(&asset_a, &asset_b)?)
    }

    /// Amounts at every step of a fixed-input trade along `path`,
    /// i.e. 'How much would I get at each hop if I paid this much'?
    pub fn query_amounts_out(
        amount_in: BalanceOf<T>,
        path: Vec<AssetIdOf<T>>,
    ) -> RpcResult<Vec<BalanceOf<T>>> {
        Self::validate_path(&path)?;
        Ok(Self::get_amounts_out(amount_in, &path)?)
    }

    /// Amounts at every step of a fixed-output trade along `path`,
    /// i.e. 'How much do I have to pay at each hop to get this much'?
    pub fn query_amounts_in(
        amount_out: BalanceOf<T>,
        path: Vec<AssetIdOf<T>>,
    ) -> RpcResult<Vec<BalanceOf<T>>> {
        Self::validate_path(&path)?;
        Ok(Self::get_amounts_in(amount_out, &path)?)
    }

    /// Amount of the other asset worth `amount_a` at the given reserves, without fee.
    pub fn query_quote(
        amount_a: BalanceOf<T>,
        reserve_a: BalanceOf<T>,
        reserve_b: BalanceOf<T>,
    ) -> RpcResult<BalanceOf<T>> {
        Ok(Self::quote(amount_a, reserve_a, reserve_b)?)
    }
}
