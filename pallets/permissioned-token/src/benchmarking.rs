//! Benchmarking setup for pallet-permissioned-token
//!
//! The registry is external, so benchmarks cannot enrol members. Gated calls are made by
//! the administrator, who passes the allowlist, and every debtor carries an enabled budget
//! so the budget read and write are always measured.

use super::*;

#[allow(unused)]
use crate::Pallet as PermissionedToken;
use frame_benchmarking::v2::*;
use frame_system::RawOrigin;

const SEED: u32 = 0;
const FUNDS: u128 = 10_000_000;
const AMOUNT: u128 = 1_000_000;

fn setup_admin<T: Config>() -> T::AccountId {
    let admin: T::AccountId = whitelisted_caller();
    Admin::<T>::put(&admin);
    ActiveRegistry::<T>::put(T::BenchmarkHelper::registry());
    admin
}

fn fund<T: Config>(who: &T::AccountId) {
    Ledger::<T>::mint(who, FUNDS).expect("benchmark funds fit in u128");
}

fn limit<T: Config>(who: &T::AccountId) {
    TransferLimits::<T>::insert(who, TransferLimit { enabled: true, remaining: FUNDS });
}

#[benchmarks]
mod benchmarks {
    use super::*;

    #[benchmark]
    fn transfer() {
        let admin = setup_admin::<T>();
        let recipient: T::AccountId = account("recipient", 0, SEED);
        fund::<T>(&admin);
        limit::<T>(&admin);

        #[extrinsic_call]
        _(RawOrigin::Signed(admin.clone()), recipient.clone(), AMOUNT);

        assert_eq!(Balances::<T>::get(&recipient), AMOUNT);
        assert_eq!(TransferLimits::<T>::get(&admin).remaining, FUNDS - AMOUNT);
    }

    #[benchmark]
    fn transfer_from() {
        let admin = setup_admin::<T>();
        let owner: T::AccountId = account("owner", 0, SEED);
        let recipient: T::AccountId = account("recipient", 0, SEED);
        fund::<T>(&owner);
        limit::<T>(&owner);
        Allowances::<T>::insert(&owner, &admin, FUNDS);

        #[extrinsic_call]
        _(RawOrigin::Signed(admin.clone()), owner.clone(), recipient.clone(), AMOUNT);

        assert_eq!(Balances::<T>::get(&recipient), AMOUNT);
        assert_eq!(Allowances::<T>::get(&owner, &admin), FUNDS - AMOUNT);
    }

    #[benchmark]
    fn approve() {
        let admin = setup_admin::<T>();
        let spender: T::AccountId = account("spender", 0, SEED);

        #[extrinsic_call]
        _(RawOrigin::Signed(admin.clone()), spender.clone(), AMOUNT);

        assert_eq!(Allowances::<T>::get(&admin, &spender), AMOUNT);
    }

    #[benchmark]
    fn increase_allowance() {
        let admin = setup_admin::<T>();
        let spender: T::AccountId = account("spender", 0, SEED);
        Allowances::<T>::insert(&admin, &spender, AMOUNT);

        #[extrinsic_call]
        _(RawOrigin::Signed(admin.clone()), spender.clone(), AMOUNT);

        assert_eq!(Allowances::<T>::get(&admin, &spender), 2 * AMOUNT);
    }

    #[benchmark]
    fn decrease_allowance() {
        let admin = setup_admin::<T>();
        let spender: T::AccountId = account("spender", 0, SEED);
        Allowances::<T>::insert(&admin, &spender, 2 * AMOUNT);

        #[extrinsic_call]
        _(RawOrigin::Signed(admin.clone()), spender.clone(), AMOUNT);

        assert_eq!(Allowances::<T>::get(&admin, &spender), AMOUNT);
    }

    #[benchmark]
    fn burn() {
        let admin = setup_admin::<T>();
        fund::<T>(&admin);
        limit::<T>(&admin);

        #[extrinsic_call]
        _(RawOrigin::Signed(admin.clone()), AMOUNT);

        assert_eq!(Balances::<T>::get(&admin), FUNDS - AMOUNT);
    }

    #[benchmark]
    fn burn_from() {
        let admin = setup_admin::<T>();
        let owner: T::AccountId = account("owner", 0, SEED);
        fund::<T>(&owner);
        limit::<T>(&owner);
        Allowances::<T>::insert(&owner, &admin, FUNDS);

        #[extrinsic_call]
        _(RawOrigin::Signed(admin.clone()), owner.clone(), AMOUNT);

        assert_eq!(Balances::<T>::get(&owner), FUNDS - AMOUNT);
    }

    #[benchmark]
    fn mint() {
        let admin = setup_admin::<T>();

        #[extrinsic_call]
        _(RawOrigin::Signed(admin.clone()), AMOUNT);

        assert_eq!(Balances::<T>::get(&admin), AMOUNT);
    }

    #[benchmark]
    fn renounce_mintable() {
        let admin = setup_admin::<T>();

        #[extrinsic_call]
        _(RawOrigin::Signed(admin));

        assert_eq!(Minting::<T>::get(), MintAuthority::Renounced);
    }

    #[benchmark]
    fn admin_transfer() {
        let admin = setup_admin::<T>();
        let from: T::AccountId = account("from", 0, SEED);
        let to: T::AccountId = account("to", 0, SEED);
        fund::<T>(&from);

        #[extrinsic_call]
        _(RawOrigin::Signed(admin), from.clone(), to.clone(), AMOUNT);

        assert_eq!(Balances::<T>::get(&to), AMOUNT);
    }

    #[benchmark]
    fn admin_burn() {
        let admin = setup_admin::<T>();
        let account: T::AccountId = account("holder", 0, SEED);
        fund::<T>(&account);

        #[extrinsic_call]
        _(RawOrigin::Signed(admin), account.clone(), AMOUNT);

        assert_eq!(Balances::<T>::get(&account), FUNDS - AMOUNT);
    }

    #[benchmark]
    fn pause() {
        let admin = setup_admin::<T>();

        #[extrinsic_call]
        _(RawOrigin::Signed(admin));

        assert_eq!(Paused::<T>::get(), true);
    }

    #[benchmark]
    fn unpause() {
        let admin = setup_admin::<T>();
        Paused::<T>::put(true);

        #[extrinsic_call]
        _(RawOrigin::Signed(admin));

        assert_eq!(Paused::<T>::get(), false);
    }

    #[benchmark]
    fn enable_transfer_limitable() {
        let admin = setup_admin::<T>();
        TransferLimitable::<T>::put(false);

        #[extrinsic_call]
        _(RawOrigin::Signed(admin));

        assert_eq!(TransferLimitable::<T>::get(), true);
    }

    #[benchmark]
    fn disable_transfer_limitable() {
        let admin = setup_admin::<T>();

        #[extrinsic_call]
        _(RawOrigin::Signed(admin));

        assert_eq!(TransferLimitable::<T>::get(), false);
    }

    #[benchmark]
    fn set_transfer_limit() {
        let admin = setup_admin::<T>();
        let account: T::AccountId = account("holder", 0, SEED);

        #[extrinsic_call]
        _(RawOrigin::Signed(admin), account.clone(), AMOUNT);

        assert_eq!(TransferLimits::<T>::get(&account).remaining, AMOUNT);
    }

    #[benchmark]
    fn unset_transfer_limit() {
        let admin = setup_admin::<T>();
        let account: T::AccountId = account("holder", 0, SEED);
        limit::<T>(&account);

        #[extrinsic_call]
        _(RawOrigin::Signed(admin), account.clone());

        assert_eq!(TransferLimits::<T>::get(&account), TransferLimit::default());
    }

    #[benchmark]
    fn increase_transfer_limit() {
        let admin = setup_admin::<T>();
        let account: T::AccountId = account("holder", 0, SEED);
        limit::<T>(&account);

        #[extrinsic_call]
        _(RawOrigin::Signed(admin), account.clone(), AMOUNT);

        assert_eq!(TransferLimits::<T>::get(&account).remaining, FUNDS + AMOUNT);
    }

    #[benchmark]
    fn decrease_transfer_limit() {
        let admin = setup_admin::<T>();
        let account: T::AccountId = account("holder", 0, SEED);
        limit::<T>(&account);

        #[extrinsic_call]
        _(RawOrigin::Signed(admin), account.clone(), AMOUNT);

        assert_eq!(TransferLimits::<T>::get(&account).remaining, FUNDS - AMOUNT);
    }

    #[benchmark]
    fn set_allowlist_registry() {
        let admin = setup_admin::<T>();
        ActiveRegistry::<T>::kill();
        let registry = T::BenchmarkHelper::registry();

        #[extrinsic_call]
        _(RawOrigin::Signed(admin), registry.clone());

        assert_eq!(ActiveRegistry::<T>::get(), Some(registry));
    }

    #[benchmark]
    fn emergency_withdraw() {
        let admin = setup_admin::<T>();
        let asset = T::BenchmarkHelper::asset();
        let pallet_account = PermissionedToken::<T>::account_id();
        T::BenchmarkHelper::fund_asset(&asset, &pallet_account, AMOUNT);
        let before = T::Assets::balance(&asset, &admin);

        #[extrinsic_call]
        _(RawOrigin::Signed(admin.clone()), asset.clone());

        assert_eq!(T::Assets::balance(&asset, &pallet_account), 0);
        assert_eq!(T::Assets::balance(&asset, &admin), before + AMOUNT);
    }

    impl_benchmark_test_suite!(PermissionedToken, crate::mock::new_test_ext(), crate::mock::Test);
}
