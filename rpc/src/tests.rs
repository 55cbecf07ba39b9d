use super::*;
use mock::*;

type AssetId = u32;
type Balance = u128;
type RpcResult<T> = Result<T, AmmRpcError>;

const ASSET_A: AssetId = 1;
const ASSET_B: AssetId = 2;
const ASSET_C: AssetId = 3;
const AMOUNT: Balance = 100;
const POOL_NOT_FOUND_MESSAGE: &str = "Pool not found";
const INSUFFICIENT_LIQUIDITY_MESSAGE: &str = "Insufficient liquidity";
const INVALID_PATH_MESSAGE: &str = "Invalid path";
const OVERFLOW_MESSAGE: &str = "Overflow";
const RUNTIME_ERROR_MESSAGE: &str = "Runtime error";
const UNEXPECTED: &[u8] = b"ZeroAmount";

fn assert(error: JsonRpseeError, code: i32, message: &str, data: Option<&[u8]>) {
    assert!(matches!(error, JsonRpseeError::Call(e) if matches!(&e, CallError::Custom(e)
    if e.code() == code && e.message() == message &&
        e.data().map(|v| v.get().to_string()) == data.map(|d| format!("{d:?}").replace(' ', "")))));
}

fn api(expectation: Expectation) -> Amm<TestApi, Block> {
    Amm::new(Arc::new(TestApi::new(expectation)))
}

#[tokio::test]
async fn get_reserves_defaults_to_best_block() {
    let expectation = Expectation::GetReserves(best_hash(), ASSET_A, ASSET_B, Some(Ok((1_000, 4_000))));

    let result = api(expectation).get_reserves(ASSET_A, ASSET_B, None).unwrap();

    assert_eq!((1_000, 4_000), result);
}

#[tokio::test]
async fn get_reserves_at_given_block() {
    let at = other_hash();
    let expectation = Expectation::GetReserves(at, ASSET_B, ASSET_A, Some(Ok((4_000, 1_000))));

    let result = api(expectation).get_reserves(ASSET_B, ASSET_A, Some(at)).unwrap();

    assert_eq!((4_000, 1_000), result);
}

#[tokio::test]
async fn get_reserves_with_pool_not_found() {
    let expectation =
        Expectation::GetReserves(best_hash(), ASSET_A, ASSET_C, Some(Err(AmmRpcError::PoolNotFound)));

    let error = api(expectation).get_reserves(ASSET_A, ASSET_C, None).unwrap_err();

    assert(error, POOL_NOT_FOUND, POOL_NOT_FOUND_MESSAGE, None)
}

#[tokio::test]
async fn get_amounts_out_with_success() {
    let path = vec![ASSET_A, ASSET_B, ASSET_C];
    let expectation =
        Expectation::GetAmountsOut(best_hash(), AMOUNT, path.clone(), Some(Ok(vec![100, 362, 331])));

    let result = api(expectation).get_amounts_out(AMOUNT, path, None).unwrap();

    assert_eq!(vec![100, 362, 331], result);
}

#[tokio::test]
async fn get_amounts_out_with_insufficient_liquidity() {
    let path = vec![ASSET_A, ASSET_B];
    let expectation = Expectation::GetAmountsOut(
        best_hash(),
        AMOUNT,
        path.clone(),
        Some(Err(AmmRpcError::InsufficientLiquidity)),
    );

    let error = api(expectation).get_amounts_out(AMOUNT, path, None).unwrap_err();

    assert(error, INSUFFICIENT_LIQUIDITY, INSUFFICIENT_LIQUIDITY_MESSAGE, None)
}

#[tokio::test]
async fn get_amounts_out_with_runtime_api_failure() {
    let path = vec![ASSET_A, ASSET_B];
    let expectation = Expectation::GetAmountsOut(best_hash(), AMOUNT, path.clone(), None);

    let error = api(expectation).get_amounts_out(AMOUNT, path, None).unwrap_err();

    assert!(matches!(error, JsonRpseeError::Call(CallError::Custom(e))
        if e.code() == RUNTIME_ERROR && e.message() == RUNTIME_ERROR_MESSAGE && e.data().is_some()));
}

#[tokio::test]
async fn get_amounts_in_with_success() {
    let path = vec![ASSET_A, ASSET_B];
    let expectation =
        Expectation::GetAmountsIn(best_hash(), 362, path.clone(), Some(Ok(vec![100, 362])));

    let result = api(expectation).get_amounts_in(362, path, None).unwrap();

    assert_eq!(vec![100, 362], result);
}

#[tokio::test]
async fn get_amounts_in_with_invalid_path() {
    let path = vec![ASSET_A];
    let expectation =
        Expectation::GetAmountsIn(best_hash(), AMOUNT, path.clone(), Some(Err(AmmRpcError::InvalidPath)));

    let error = api(expectation).get_amounts_in(AMOUNT, path, None).unwrap_err();

    assert(error, INVALID_PATH, INVALID_PATH_MESSAGE, None)
}

#[tokio::test]
async fn quote_with_success() {
    let expectation = Expectation::Quote(best_hash(), AMOUNT, 1_000, 4_000, Some(Ok(400)));

    let result = api(expectation).quote(AMOUNT, 1_000, 4_000, None).unwrap();

    assert_eq!(400, result);
}

#[tokio::test]
async fn quote_with_overflow() {
    let expectation =
        Expectation::Quote(best_hash(), Balance::MAX, 1, 2, Some(Err(AmmRpcError::Overflow)));

    let error = api(expectation).quote(Balance::MAX, 1, 2, None).unwrap_err();

    assert(error, OVERFLOW, OVERFLOW_MESSAGE, None)
}

#[tokio::test]
async fn quote_with_unexpected() {
    let expectation = Expectation::Quote(
        best_hash(),
        0,
        1_000,
        4_000,
        Some(Err(AmmRpcError::Unexpected(UNEXPECTED.to_vec()))),
    );

    let error = api(expectation).quote(0, 1_000, 4_000, None).unwrap_err();

    assert(error, RUNTIME_ERROR, RUNTIME_ERROR_MESSAGE, Some(UNEXPECTED))
}

mod mock {
    use crate::tests::{AssetId, Balance, RpcResult};
    use pallet_amm_rpc_runtime_api::AmmApi as AmmRuntimeApi;
    use sp_api::{ApiError, ApiRef, ProvideRuntimeApi};
    use sp_blockchain::HeaderBackend;
    use sp_runtime::traits::{Block as BlockT, NumberFor, Zero};
    pub(crate) use substrate_test_runtime_client::runtime::Block;

    pub(crate) type Hash = <Block as BlockT>::Hash;

    pub(crate) fn best_hash() -> Hash {
        [7u8; 32].into()
    }

    pub(crate) fn other_hash() -> Hash {
        [9u8; 32].into()
    }

    pub struct TestApi {
        pub(super) expectation: Expectation,
    }

    impl TestApi {
        pub(super) fn new(expectation: Expectation) -> Self {
            Self { expectation }
        }
    }

    impl ProvideRuntimeApi<Block> for TestApi {
        type Api = TestRuntimeApi;

        fn runtime_api(&self) -> ApiRef<Self::Api> {
            TestRuntimeApi {
                call: self.expectation.clone(),
            }
            .into()
        }
    }

    impl HeaderBackend<Block> for TestApi {
        fn header(&self, _hash: Hash) -> Result<Option<<Block as BlockT>::Header>, sp_blockchain::Error> {
            Ok(None)
        }

        fn info(&self) -> sc_client_api::blockchain::Info<Block> {
            sc_client_api::blockchain::Info {
                best_hash: best_hash(),
                best_number: Zero::zero(),
                finalized_hash: Default::default(),
                finalized_number: Zero::zero(),
                genesis_hash: Default::default(),
                number_leaves: Default::default(),
                finalized_state: None,
                block_gap: None,
            }
        }

        fn status(
            &self,
            _hash: Hash,
        ) -> Result<sc_client_api::blockchain::BlockStatus, sp_blockchain::Error> {
            Ok(sc_client_api::blockchain::BlockStatus::Unknown)
        }

        fn number(&self, _hash: Hash) -> Result<Option<NumberFor<Block>>, sp_blockchain::Error> {
            Ok(None)
        }

        fn hash(&self, _number: NumberFor<Block>) -> Result<Option<Hash>, sp_blockchain::Error> {
            Ok(None)
        }
    }

    pub struct TestRuntimeApi {
        pub(super) call: Expectation,
    }

    // `None` as the expected result makes the runtime call itself fail.
    fn respond<T: Clone>(result: &Option<RpcResult<T>>, at: Hash) -> Result<RpcResult<T>, ApiError> {
        result.clone().ok_or_else(|| ApiError::UnknownBlock(format!("{at:?}")))
    }

    sp_api::mock_impl_runtime_apis! {
        // Compares the block and the arguments of each call with the expected ones
        impl AmmRuntimeApi<Block, AssetId, Balance> for TestRuntimeApi {
            #[advanced]
            fn get_reserves(
                &self,
                at: <Block as BlockT>::Hash,
                asset_a: AssetId,
                asset_b: AssetId,
            ) -> Result<RpcResult<(Balance, Balance)>, ApiError> {
                match &self.call {
                    Expectation::GetReserves(expected_at, expected_a, expected_b, result)
                        if at == *expected_at && asset_a == *expected_a && asset_b == *expected_b => respond(result, at),
                    _ => panic!()
                }
            }

            #[advanced]
            fn get_amounts_out(
                &self,
                at: <Block as BlockT>::Hash,
                amount_in: Balance,
                path: Vec<AssetId>,
            ) -> Result<RpcResult<Vec<Balance>>, ApiError> {
                match &self.call {
                    Expectation::GetAmountsOut(expected_at, expected_amount, expected_path, result)
                        if at == *expected_at && amount_in == *expected_amount && path == *expected_path => respond(result, at),
                    _ => panic!()
                }
            }

            #[advanced]
            fn get_amounts_in(
                &self,
                at: <Block as BlockT>::Hash,
                amount_out: Balance,
                path: Vec<AssetId>,
            ) -> Result<RpcResult<Vec<Balance>>, ApiError> {
                match &self.call {
                    Expectation::GetAmountsIn(expected_at, expected_amount, expected_path, result)
                        if at == *expected_at && amount_out == *expected_amount && path == *expected_path => respond(result, at),
                    _ => panic!()
                }
            }

            #[advanced]
            fn quote(
                &self,
                at: <Block as BlockT>::Hash,
                amount_a: Balance,
                reserve_a: Balance,
                reserve_b: Balance,
            ) -> Result<RpcResult<Balance>, ApiError> {
                match &self.call {
                    Expectation::Quote(expected_at, expected_amount, expected_a, expected_b, result)
                        if at == *expected_at && amount_a == *expected_amount
                            && reserve_a == *expected_a && reserve_b == *expected_b => respond(result, at),
                    _ => panic!()
                }
            }
        }
    }

    #[derive(PartialEq, Debug, Clone)]
    pub(crate) enum Expectation {
        GetReserves(Hash, AssetId, AssetId, Option<RpcResult<(Balance, Balance)>>),
        GetAmountsOut(Hash, Balance, Vec<AssetId>, Option<RpcResult<Vec<Balance>>>),
        GetAmountsIn(Hash, Balance, Vec<AssetId>, Option<RpcResult<Vec<Balance>>>),
        Quote(Hash, Balance, Balance, Balance, Option<RpcResult<Balance>>),
    }
}
