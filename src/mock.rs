use crate as pallet_amm;
use crate::{PoolIndex, SwapCallback};
use frame_support::{
    assert_ok,
    dispatch::DispatchResult,
    parameter_types,
    traits::{
        fungibles::Mutate, tokens::Preservation, AsEnsureOriginWithArg, ConstU128, ConstU16,
        ConstU32, ConstU64, ConstU8, Everything,
    },
    PalletId,
};
use frame_system::{EnsureRoot, EnsureSigned};
use sp_core::H256;
use sp_runtime::{
    traits::{BlakeTwo256, IdentityLookup},
    AccountId32, BuildStorage, DispatchError,
};

type Block = frame_system::mocking::MockBlock<Test>;
pub(crate) type AccountId = AccountId32;
pub(crate) type Balance = u128;

frame_support::construct_runtime!(
    pub enum Test {
        System: frame_system,
        Timestamp: pallet_timestamp,
        Balances: pallet_balances,
        Assets: pallet_assets,
        Amm: pallet_amm,
    }
);

impl frame_system::Config for Test {
    type BaseCallFilter = Everything;
    type BlockWeights = ();
    type BlockLength = ();
    type DbWeight = ();
    type RuntimeOrigin = RuntimeOrigin;
    type RuntimeCall = RuntimeCall;
    type Nonce = u64;
    type Hash = H256;
    type Hashing = BlakeTwo256;
    type AccountId = AccountId;
    type Lookup = IdentityLookup<Self::AccountId>;
    type Block = Block;
    type RuntimeEvent = RuntimeEvent;
    type BlockHashCount = ConstU64<250>;
    type Version = ();
    type PalletInfo = PalletInfo;
    type AccountData = pallet_balances::AccountData<Balance>;
    type OnNewAccount = ();
    type OnKilledAccount = ();
    type SystemWeightInfo = ();
    type SS58Prefix = ConstU16<42>;
    type OnSetCode = ();
    type MaxConsumers = ConstU32<16>;
}

impl pallet_timestamp::Config for Test {
    type Moment = u64;
    type OnTimestampSet = ();
    type MinimumPeriod = ConstU64<1>;
    type WeightInfo = ();
}

impl pallet_balances::Config for Test {
    type Balance = Balance;
    type DustRemoval = ();
    type RuntimeEvent = RuntimeEvent;
    type ExistentialDeposit = ConstU128<1>;
    type AccountStore = System;
    type WeightInfo = ();
    type MaxLocks = ();
    type MaxReserves = ();
    type ReserveIdentifier = [u8; 8];
    type FreezeIdentifier = ();
    type MaxFreezes = ();
    type RuntimeHoldReason = ();
    type MaxHolds = ();
}

impl pallet_assets::Config for Test {
    type RuntimeEvent = RuntimeEvent;
    type Balance = Balance;
    type RemoveItemsLimit = ConstU32<1000>;
    type AssetId = u32;
    type AssetIdParameter = u32;
    type Currency = Balances;
    type CreateOrigin = AsEnsureOriginWithArg<EnsureSigned<AccountId>>;
    type ForceOrigin = EnsureRoot<AccountId>;
    type AssetDeposit = ConstU128<1>;
    type AssetAccountDeposit = ConstU128<10>;
    type MetadataDepositBase = ConstU128<1>;
    type MetadataDepositPerByte = ConstU128<1>;
    type ApprovalDeposit = ConstU128<1>;
    type StringLimit = ConstU32<50>;
    type Freezer = ();
    type Extra = ();
    type CallbackHandle = ();
    type WeightInfo = ();
    #[cfg(feature = "runtime-benchmarks")]
    type BenchmarkHelper = ();
}

parameter_types! {
    pub const AmmPalletId: PalletId = PalletId(*b"py/cpamm");
    pub const WrappedNative: u32 = WNATIVE;
}

impl pallet_amm::Config for Test {
    type RuntimeEvent = RuntimeEvent;
    type Balance = Balance;
    type AssetId = u32;
    type Assets = Assets;
    type Currency = Balances;
    type Time = Timestamp;
    type SwapCallback = TestCallback;
    type AdminOrigin = EnsureRoot<AccountId>;
    type WeightInfo = ();
    type PalletId = AmmPalletId;
    type WrappedNative = WrappedNative;
    type MaxSwapPathLength = ConstU32<4>;
    type DefaultMaxTradePercent = ConstU8<30>;
}

/// Flash swap borrower: repays the borrowed amount plus the 0.3% fee.
pub(crate) const REPAY_WITH_FEE: u8 = 1;
/// Flash swap borrower: repays exactly the borrowed amount.
pub(crate) const REPAY_WITHOUT_FEE: u8 = 2;
/// Flash swap borrower: calls back into the pool before repaying.
pub(crate) const REENTER: u8 = 3;

/// Borrows a single side of the pool and behaves according to the first byte of `data`.
pub struct TestCallback;

impl SwapCallback<AccountId, Balance> for TestCallback {
    fn on_swap(
        sender: &AccountId,
        pool_id: PoolIndex,
        amount_a_out: Balance,
        amount_b_out: Balance,
        data: &[u8],
    ) -> DispatchResult {
        let pool = Amm::pools(pool_id).ok_or(DispatchError::Other("unknown pool"))?;
        let (asset, borrowed) = if amount_a_out > 0 {
            (pool.asset_a, amount_a_out)
        } else {
            (pool.asset_b, amount_b_out)
        };
        let repay = match data.first() {
            Some(&REPAY_WITH_FEE) => borrowed * 1_000 / 997 + 1,
            Some(&REPAY_WITHOUT_FEE) => borrowed,
            Some(&REENTER) => return Amm::sync(RuntimeOrigin::signed(sender.clone()), pool_id),
            _ => return Ok(()),
        };
        <Assets as Mutate<AccountId>>::transfer(
            asset,
            sender,
            &Amm::pool_account(pool_id),
            repay,
            Preservation::Expendable,
        )?;
        Ok(())
    }
}

pub(crate) const ALICE: AccountId = AccountId::new([1u8; 32]);
pub(crate) const BOB: AccountId = AccountId::new([2u8; 32]);
pub(crate) const CHARLIE: AccountId = AccountId::new([3u8; 32]);
pub(crate) const FEE_SINK: AccountId = AccountId::new([9u8; 32]);

pub(crate) const ASSET_A: u32 = 1;
pub(crate) const ASSET_B: u32 = 2;
pub(crate) const ASSET_C: u32 = 3;
/// Created by the tests that need an asset which is not sufficient.
pub(crate) const ASSET_D: u32 = 4;
pub(crate) const WNATIVE: u32 = 100;

pub(crate) const INIT_BALANCE: Balance = 1_000_000_000_000;
/// Initial wall-clock time of every test, in milliseconds.
pub(crate) const INIT_MOMENT: u64 = 1_000;
pub(crate) const DEADLINE: u64 = 1_000_000;

pub(crate) fn new_test_ext() -> sp_io::TestExternalities {
    let mut storage = frame_system::GenesisConfig::<Test>::default().build_storage().unwrap();
    pallet_balances::GenesisConfig::<Test> {
        balances: vec![(ALICE, INIT_BALANCE), (BOB, INIT_BALANCE), (CHARLIE, INIT_BALANCE)],
    }
    .assimilate_storage(&mut storage)
    .unwrap();
    pallet_assets::GenesisConfig::<Test> {
        assets: vec![
            (ASSET_A, ALICE, true, 1),
            (ASSET_B, ALICE, true, 1),
            (ASSET_C, ALICE, true, 1),
            (WNATIVE, ALICE, true, 1),
        ],
        metadata: vec![],
        accounts: vec![
            (ASSET_A, ALICE, INIT_BALANCE),
            (ASSET_B, ALICE, INIT_BALANCE),
            (ASSET_C, ALICE, INIT_BALANCE),
            (ASSET_A, BOB, INIT_BALANCE),
            (ASSET_B, BOB, INIT_BALANCE),
            (ASSET_C, BOB, INIT_BALANCE),
        ],
    }
    .assimilate_storage(&mut storage)
    .unwrap();
    let mut test_ext: sp_io::TestExternalities = storage.into();
    test_ext.execute_with(|| {
        System::set_block_number(1);
        Timestamp::set_timestamp(INIT_MOMENT);
    });
    test_ext
}

/// Move the clock to `seconds` after the unix epoch.
pub(crate) fn set_time(seconds: u64) {
    Timestamp::set_timestamp(seconds * 1_000);
}

pub(crate) fn create_pool(asset_a: u32, asset_b: u32) -> PoolIndex {
    assert_ok!(Amm::create_pair(RuntimeOrigin::signed(ALICE), asset_a, asset_b));
    Amm::get_pair(&asset_a, &asset_b).unwrap()
}

pub(crate) fn provide_liquidity(
    who: AccountId,
    asset_a: u32,
    asset_b: u32,
    amount_a: Balance,
    amount_b: Balance,
) {
    assert_ok!(Amm::add_liquidity(
        RuntimeOrigin::signed(who.clone()),
        asset_a,
        asset_b,
        amount_a,
        amount_b,
        0,
        0,
        who,
        DEADLINE,
    ));
}

/// Plain asset transfer, e.g. to pay into a pool account.
pub(crate) fn send(asset: u32, from: &AccountId, to: &AccountId, amount: Balance) {
    assert_ok!(<Assets as Mutate<AccountId>>::transfer(
        asset,
        from,
        to,
        amount,
        Preservation::Expendable
    ));
}

pub(crate) fn last_event() -> pallet_amm::Event<Test> {
    System::events()
        .into_iter()
        .map(|r| r.event)
        .filter_map(|e| {
            if let RuntimeEvent::Amm(inner) = e {
                Some(inner)
            } else {
                None
            }
        })
        .last()
        .unwrap()
}
