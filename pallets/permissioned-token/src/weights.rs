//! Weights for `pallet-permissioned-token`.
//!
//! Hand-estimated from storage access counts; regenerate with `frame-benchmarking-cli`
//! against the reference hardware before relying on them for fees.

#![allow(unused_parens)]
#![allow(unused_imports)]

use frame_support::{
    traits::Get,
    weights::{constants::RocksDbWeight, Weight},
};
use sp_std::marker::PhantomData;

pub trait WeightInfo {
    fn transfer() -> Weight;
    fn transfer_from() -> Weight;
    fn approve() -> Weight;
    fn increase_allowance() -> Weight;
    fn decrease_allowance() -> Weight;
    fn burn() -> Weight;
    fn burn_from() -> Weight;
    fn mint() -> Weight;
    fn renounce_mintable() -> Weight;
    fn admin_transfer() -> Weight;
    fn admin_burn() -> Weight;
    fn pause() -> Weight;
    fn unpause() -> Weight;
    fn enable_transfer_limitable() -> Weight;
    fn disable_transfer_limitable() -> Weight;
    fn set_transfer_limit() -> Weight;
    fn unset_transfer_limit() -> Weight;
    fn increase_transfer_limit() -> Weight;
    fn decrease_transfer_limit() -> Weight;
    fn set_allowlist_registry() -> Weight;
    fn emergency_withdraw() -> Weight;
}

/// Weights for the pallet using the runtime's configured database weights.
pub struct SubstrateWeight<T>(PhantomData<T>);

impl<T: frame_system::Config> WeightInfo for SubstrateWeight<T> {
    // Admin, Paused, ActiveRegistry, TransferLimitable, TransferLimits, 2x Balances;
    // plus three registry lookups.
    fn transfer() -> Weight {
        Weight::from_parts(40_000_000, 3_593)
            .saturating_add(T::DbWeight::get().reads(10))
            .saturating_add(T::DbWeight::get().writes(3))
    }
    fn transfer_from() -> Weight {
        Weight::from_parts(48_000_000, 3_593)
            .saturating_add(T::DbWeight::get().reads(11))
            .saturating_add(T::DbWeight::get().writes(4))
    }
    fn approve() -> Weight {
        Weight::from_parts(28_000_000, 3_593)
            .saturating_add(T::DbWeight::get().reads(6))
            .saturating_add(T::DbWeight::get().writes(1))
    }
    fn increase_allowance() -> Weight {
        Weight::from_parts(30_000_000, 3_593)
            .saturating_add(T::DbWeight::get().reads(7))
            .saturating_add(T::DbWeight::get().writes(1))
    }
    fn decrease_allowance() -> Weight {
        Weight::from_parts(30_000_000, 3_593)
            .saturating_add(T::DbWeight::get().reads(7))
            .saturating_add(T::DbWeight::get().writes(1))
    }
    fn burn() -> Weight {
        Weight::from_parts(38_000_000, 3_593)
            .saturating_add(T::DbWeight::get().reads(9))
            .saturating_add(T::DbWeight::get().writes(3))
    }
    fn burn_from() -> Weight {
        Weight::from_parts(46_000_000, 3_593)
            .saturating_add(T::DbWeight::get().reads(10))
            .saturating_add(T::DbWeight::get().writes(4))
    }
    fn mint() -> Weight {
        Weight::from_parts(22_000_000, 3_593)
            .saturating_add(T::DbWeight::get().reads(4))
            .saturating_add(T::DbWeight::get().writes(2))
    }
    fn renounce_mintable() -> Weight {
        Weight::from_parts(12_000_000, 1_489)
            .saturating_add(T::DbWeight::get().reads(2))
            .saturating_add(T::DbWeight::get().writes(1))
    }
    fn admin_transfer() -> Weight {
        Weight::from_parts(24_000_000, 3_593)
            .saturating_add(T::DbWeight::get().reads(3))
            .saturating_add(T::DbWeight::get().writes(2))
    }
    fn admin_burn() -> Weight {
        Weight::from_parts(22_000_000, 3_593)
            .saturating_add(T::DbWeight::get().reads(3))
            .saturating_add(T::DbWeight::get().writes(2))
    }
    fn pause() -> Weight {
        Weight::from_parts(11_000_000, 1_489)
            .saturating_add(T::DbWeight::get().reads(2))
            .saturating_add(T::DbWeight::get().writes(1))
    }
    fn unpause() -> Weight {
        Weight::from_parts(11_000_000, 1_489)
            .saturating_add(T::DbWeight::get().reads(2))
            .saturating_add(T::DbWeight::get().writes(1))
    }
    fn enable_transfer_limitable() -> Weight {
        Weight::from_parts(11_000_000, 1_489)
            .saturating_add(T::DbWeight::get().reads(2))
            .saturating_add(T::DbWeight::get().writes(1))
    }
    fn disable_transfer_limitable() -> Weight {
        Weight::from_parts(11_000_000, 1_489)
            .saturating_add(T::DbWeight::get().reads(2))
            .saturating_add(T::DbWeight::get().writes(1))
    }
    fn set_transfer_limit() -> Weight {
        Weight::from_parts(15_000_000, 3_529)
            .saturating_add(T::DbWeight::get().reads(2))
            .saturating_add(T::DbWeight::get().writes(1))
    }
    fn unset_transfer_limit() -> Weight {
        Weight::from_parts(15_000_000, 3_529)
            .saturating_add(T::DbWeight::get().reads(2))
            .saturating_add(T::DbWeight::get().writes(1))
    }
    fn increase_transfer_limit() -> Weight {
        Weight::from_parts(15_000_000, 3_529)
            .saturating_add(T::DbWeight::get().reads(2))
            .saturating_add(T::DbWeight::get().writes(1))
    }
    fn decrease_transfer_limit() -> Weight {
        Weight::from_parts(15_000_000, 3_529)
            .saturating_add(T::DbWeight::get().reads(2))
            .saturating_add(T::DbWeight::get().writes(1))
    }
    fn set_allowlist_registry() -> Weight {
        Weight::from_parts(12_000_000, 1_489)
            .saturating_add(T::DbWeight::get().reads(1))
            .saturating_add(T::DbWeight::get().writes(1))
    }
    // Asset transfer cost depends on the configured `Assets`; budget for two accounts.
    fn emergency_withdraw() -> Weight {
        Weight::from_parts(45_000_000, 6_208)
            .saturating_add(T::DbWeight::get().reads(4))
            .saturating_add(T::DbWeight::get().writes(2))
    }
}

// For backwards compatibility and tests.
impl WeightInfo for () {
    fn transfer() -> Weight {
        Weight::from_parts(40_000_000, 3_593)
            .saturating_add(RocksDbWeight::get().reads_writes(10, 3))
    }
    fn transfer_from() -> Weight {
        Weight::from_parts(48_000_000, 3_593)
            .saturating_add(RocksDbWeight::get().reads_writes(11, 4))
    }
    fn approve() -> Weight {
        Weight::from_parts(28_000_000, 3_593)
            .saturating_add(RocksDbWeight::get().reads_writes(6, 1))
    }
    fn increase_allowance() -> Weight {
        Weight::from_parts(30_000_000, 3_593)
            .saturating_add(RocksDbWeight::get().reads_writes(7, 1))
    }
    fn decrease_allowance() -> Weight {
        Weight::from_parts(30_000_000, 3_593)
            .saturating_add(RocksDbWeight::get().reads_writes(7, 1))
    }
    fn burn() -> Weight {
        Weight::from_parts(38_000_000, 3_593)
            .saturating_add(RocksDbWeight::get().reads_writes(9, 3))
    }
    fn burn_from() -> Weight {
        Weight::from_parts(46_000_000, 3_593)
            .saturating_add(RocksDbWeight::get().reads_writes(10, 4))
    }
    fn mint() -> Weight {
        Weight::from_parts(22_000_000, 3_593)
            .saturating_add(RocksDbWeight::get().reads_writes(4, 2))
    }
    fn renounce_mintable() -> Weight {
        Weight::from_parts(12_000_000, 1_489)
            .saturating_add(RocksDbWeight::get().reads_writes(2, 1))
    }
    fn admin_transfer() -> Weight {
        Weight::from_parts(24_000_000, 3_593)
            .saturating_add(RocksDbWeight::get().reads_writes(3, 2))
    }
    fn admin_burn() -> Weight {
        Weight::from_parts(22_000_000, 3_593)
            .saturating_add(RocksDbWeight::get().reads_writes(3, 2))
    }
    fn pause() -> Weight {
        Weight::from_parts(11_000_000, 1_489)
            .saturating_add(RocksDbWeight::get().reads_writes(2, 1))
    }
    fn unpause() -> Weight {
        Weight::from_parts(11_000_000, 1_489)
            .saturating_add(RocksDbWeight::get().reads_writes(2, 1))
    }
    fn enable_transfer_limitable() -> Weight {
        Weight::from_parts(11_000_000, 1_489)
            .saturating_add(RocksDbWeight::get().reads_writes(2, 1))
    }
    fn disable_transfer_limitable() -> Weight {
        Weight::from_parts(11_000_000, 1_489)
            .saturating_add(RocksDbWeight::get().reads_writes(2, 1))
    }
    fn set_transfer_limit() -> Weight {
        Weight::from_parts(15_000_000, 3_529)
            .saturating_add(RocksDbWeight::get().reads_writes(2, 1))
    }
    fn unset_transfer_limit() -> Weight {
        Weight::from_parts(15_000_000, 3_529)
            .saturating_add(RocksDbWeight::get().reads_writes(2, 1))
    }
    fn increase_transfer_limit() -> Weight {
        Weight::from_parts(15_000_000, 3_529)
            .saturating_add(RocksDbWeight::get().reads_writes(2, 1))
    }
    fn decrease_transfer_limit() -> Weight {
        Weight::from_parts(15_000_000, 3_529)
            .saturating_add(RocksDbWeight::get().reads_writes(2, 1))
    }
    fn set_allowlist_registry() -> Weight {
        Weight::from_parts(12_000_000, 1_489)
            .saturating_add(RocksDbWeight::get().reads_writes(1, 1))
    }
    fn emergency_withdraw() -> Weight {
        Weight::from_parts(45_000_000, 6_208)
            .saturating_add(RocksDbWeight::get().reads_writes(4, 2))
    }
}
