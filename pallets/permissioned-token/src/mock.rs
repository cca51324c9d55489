use crate as pallet_permissioned_token;
use crate::{AllowlistRegistry, FungiblesRecovery};
use core::cell::RefCell;
use frame_support::{
    assert_ok, derive_impl, parameter_types,
    traits::{fungibles, AsEnsureOriginWithArg, ConstU32, ConstU64},
    PalletId,
};
use frame_system::{EnsureRoot, EnsureSigned};
use sp_core::H256;
use sp_runtime::{
    traits::{BlakeTwo256, IdentityLookup},
    BuildStorage,
};
use std::collections::{BTreeMap, BTreeSet};

type Block = frame_system::mocking::MockBlock<Test>;

// Configure a mock runtime to test the pallet.
frame_support::construct_runtime!(
    pub enum Test {
        System: frame_system,
        NativeBalances: pallet_balances,
        ForeignAssets: pallet_assets,
        PermissionedToken: pallet_permissioned_token,
    }
);

#[derive_impl(frame_system::config_preludes::TestDefaultConfig)]
impl frame_system::Config for Test {
    type BaseCallFilter = frame_support::traits::Everything;
    type BlockWeights = ();
    type BlockLength = ();
    type DbWeight = ();
    type RuntimeOrigin = RuntimeOrigin;
    type RuntimeCall = RuntimeCall;
    type Nonce = u64;
    type Hash = H256;
    type Hashing = BlakeTwo256;
    type AccountId = u64;
    type Lookup = IdentityLookup<Self::AccountId>;
    type Block = Block;
    type RuntimeEvent = RuntimeEvent;
    type BlockHashCount = ConstU64<250>;
    type Version = ();
    type PalletInfo = PalletInfo;
    type AccountData = pallet_balances::AccountData<u64>;
    type OnNewAccount = ();
    type OnKilledAccount = ();
    type SystemWeightInfo = ();
    type SS58Prefix = ();
    type OnSetCode = ();
    type MaxConsumers = ConstU32<16>;
}

#[derive_impl(pallet_balances::config_preludes::TestDefaultConfig)]
impl pallet_balances::Config for Test {
    type AccountStore = System;
}

#[derive_impl(pallet_assets::config_preludes::TestDefaultConfig)]
impl pallet_assets::Config for Test {
    type Currency = NativeBalances;
    type CreateOrigin = AsEnsureOriginWithArg<EnsureSigned<u64>>;
    type ForceOrigin = EnsureRoot<u64>;
    type Freezer = ();
    type Holder = ();
}

pub const ADMIN: u64 = 1;
pub const ALICE: u64 = 2;
pub const BOB: u64 = 3;
/// Holds a balance but is not in any registry.
pub const CHARLIE: u64 = 4;
/// Registry seeded at genesis with `ALICE` and `BOB`.
pub const GENESIS_REGISTRY: u32 = 0;
/// Sufficient asset created at genesis, so holders need no native balance.
pub const FOREIGN_ASSET: u32 = 7;

parameter_types! {
    pub const TokenPalletId: PalletId = PalletId(*b"py/ptokn");
}

thread_local! {
    static REGISTRIES: RefCell<BTreeMap<u32, BTreeSet<u64>>> = RefCell::new(BTreeMap::new());
}

/// Allowlist registries keyed by index, standing in for an external membership service.
pub struct MockRegistry;

impl AllowlistRegistry<u64> for MockRegistry {
    type Handle = u32;

    fn is_member(registry: &u32, who: &u64) -> bool {
        REGISTRIES.with(|r| r.borrow().get(registry).is_some_and(|members| members.contains(who)))
    }
}

pub fn add_member(registry: u32, who: u64) {
    REGISTRIES.with(|r| {
        r.borrow_mut().entry(registry).or_default().insert(who);
    });
}

pub fn remove_member(registry: u32, who: u64) {
    REGISTRIES.with(|r| {
        if let Some(members) = r.borrow_mut().get_mut(&registry) {
            members.remove(&who);
        }
    });
}

pub fn fund_foreign(asset: u32, who: u64, amount: u64) {
    assert_ok!(<ForeignAssets as fungibles::Mutate<u64>>::mint_into(asset, &who, amount));
}

pub fn foreign_balance(asset: u32, who: u64) -> u64 {
    <ForeignAssets as fungibles::Inspect<u64>>::balance(asset, &who)
}

#[cfg(feature = "runtime-benchmarks")]
pub struct MockBenchmarkHelper;

#[cfg(feature = "runtime-benchmarks")]
impl crate::BenchmarkHelper<u32, u32, u64> for MockBenchmarkHelper {
    fn registry() -> u32 {
        GENESIS_REGISTRY
    }

    fn asset() -> u32 {
        FOREIGN_ASSET
    }

    fn fund_asset(asset: &u32, who: &u64, amount: u128) {
        fund_foreign(*asset, *who, amount as u64);
    }
}

impl pallet_permissioned_token::Config for Test {
    type Registry = MockRegistry;
    type Assets = FungiblesRecovery<ForeignAssets>;
    type PalletId = TokenPalletId;
    type WeightInfo = ();
    #[cfg(feature = "runtime-benchmarks")]
    type BenchmarkHelper = MockBenchmarkHelper;
}

// Build genesis storage according to the mock runtime.
pub fn new_test_ext() -> sp_io::TestExternalities {
    REGISTRIES.with(|r| r.borrow_mut().clear());
    add_member(GENESIS_REGISTRY, ALICE);
    add_member(GENESIS_REGISTRY, BOB);

    let mut t = frame_system::GenesisConfig::<Test>::default().build_storage().unwrap();

    pallet_permissioned_token::GenesisConfig::<Test> {
        admin: Some(ADMIN),
        token_name: b"Test Token".to_vec(),
        token_symbol: b"TST".to_vec(),
        decimals: 6,
        allowlist_registry: Some(GENESIS_REGISTRY),
        initial_balances: vec![(ALICE, 1_000_000), (BOB, 500_000), (CHARLIE, 250_000)],
    }
    .assimilate_storage(&mut t)
    .unwrap();

    let mut ext = sp_io::TestExternalities::new(t);
    ext.execute_with(|| {
        System::set_block_number(1);
        assert_ok!(ForeignAssets::force_create(
            RuntimeOrigin::root(),
            FOREIGN_ASSET,
            ADMIN,
            true,
            1
        ));
    });
    ext
}
