//! # Permissioned Token Pallet
//!
//! An account-balance ledger whose every caller-initiated mutation passes through three
//! independent policies, always in this order:
//!
//! 1. **Pause switch**: a global latch that stops the whole transfer family.
//! 2. **Allowlist gate**: caller and both parties must be members of an external registry.
//!    The administrator bypasses this check.
//! 3. **Transfer budget**: a per-account decrementing spend allowance, enforced only while
//!    both the contract-wide latch and the account's own flag are on.
//!
//! Only after all gates pass is the ledger touched. Administrator overrides
//! (`admin_transfer`, `admin_burn`, `emergency_withdraw`) skip every gate, pause included.
//! Minting is an administrator capability that can be renounced exactly once.
#![cfg_attr(not(feature = "std"), no_std)]
#![allow(clippy::let_unit_value)]

use frame_support::{dispatch::DispatchResult, ensure, pallet_prelude::*, PalletId};
use frame_system::{ensure_signed, pallet_prelude::*};
use sp_runtime::traits::AccountIdConversion;
use sp_std::prelude::*;

pub use pallet::*;
pub use traits::{AllowlistRegistry, FungiblesRecovery, RecoverableAssets};
pub use types::{AlreadyRenounced, LimitError, MintAuthority, TransferLimit};
pub use weights::{SubstrateWeight, WeightInfo};

mod ledger;
pub mod traits;
pub mod types;
pub mod weights;

use ledger::Ledger;

#[cfg(test)]
mod mock;


#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;

/// The current storage version.
const STORAGE_VERSION: StorageVersion = StorageVersion::new(1);

pub(crate) const LOG_TARGET: &str = "runtime::permissioned-token";

pub type RegistryHandleOf<T> = <<T as Config>::Registry as AllowlistRegistry<
    <T as frame_system::Config>::AccountId,
>>::Handle;

pub type AssetIdOf<T> = <<T as Config>::Assets as RecoverableAssets<
    <T as frame_system::Config>::AccountId,
>>::AssetId;

/// Supplies values the benchmarks cannot construct generically.
#[cfg(feature = "runtime-benchmarks")]
pub trait BenchmarkHelper<Handle, AssetId, AccountId> {
    fn registry() -> Handle;
    fn asset() -> AssetId;
    /// Credit `who` with `amount` of `asset`, creating the asset first if needed.
    fn fund_asset(asset: &AssetId, who: &AccountId, amount: u128);
}

#[frame_support::pallet]
pub mod pallet {
    use super::*;

    #[pallet::config]
    pub trait Config: frame_system::Config {
        /// Membership oracle consulted by the allowlist gate.
        type Registry: AllowlistRegistry<Self::AccountId>;

        /// Foreign assets the administrator may sweep out of the pallet account.
        type Assets: RecoverableAssets<Self::AccountId>;

        /// Identifier of the pallet account that receives stray foreign assets.
        #[pallet::constant]
        type PalletId: Get<PalletId>;

        type WeightInfo: WeightInfo;

        #[cfg(feature = "runtime-benchmarks")]
        type BenchmarkHelper: BenchmarkHelper<
            RegistryHandleOf<Self>,
            AssetIdOf<Self>,
            Self::AccountId,
        >;
    }

    #[pallet::pallet]
    #[pallet::storage_version(STORAGE_VERSION)]
    pub struct Pallet<T>(_);

    /// Token name, at most 64 bytes
    #[pallet::storage]
    pub type TokenName<T> = StorageValue<_, BoundedVec<u8, ConstU32<64>>, ValueQuery>;

    /// Token symbol, at most 16 bytes
    #[pallet::storage]
    pub type TokenSymbol<T> = StorageValue<_, BoundedVec<u8, ConstU32<16>>, ValueQuery>;

    /// Display decimals
    #[pallet::storage]
    pub type Decimals<T> = StorageValue<_, u8, ValueQuery>;

    /// Total token supply
    #[pallet::storage]
    pub type TotalSupply<T> = StorageValue<_, u128, ValueQuery>;

    /// Account balances
    #[pallet::storage]
    pub type Balances<T: Config> = StorageMap<_, Blake2_128Concat, T::AccountId, u128, ValueQuery>;

    /// Spending grants, keyed by (owner, spender)
    #[pallet::storage]
    pub type Allowances<T: Config> = StorageDoubleMap<
        _,
        Blake2_128Concat,
        T::AccountId,
        Blake2_128Concat,
        T::AccountId,
        u128,
        ValueQuery,
    >;

    /// The single administrator identity
    #[pallet::storage]
    pub type Admin<T: Config> = StorageValue<_, T::AccountId, OptionQuery>;

    /// Global pause latch for the transfer family
    #[pallet::storage]
    pub type Paused<T> = StorageValue<_, bool, ValueQuery>;

    #[pallet::type_value]
    pub fn DefaultTransferLimitable() -> bool {
        true
    }

    /// Contract-wide switch for per-account transfer budgets
    #[pallet::storage]
    pub type TransferLimitable<T> =
        StorageValue<_, bool, ValueQuery, DefaultTransferLimitable>;

    /// Per-account transfer budgets
    #[pallet::storage]
    pub type TransferLimits<T: Config> =
        StorageMap<_, Blake2_128Concat, T::AccountId, TransferLimit, ValueQuery>;

    #[pallet::storage]
    pub type Minting<T> = StorageValue<_, MintAuthority, ValueQuery>;

    /// Registry consulted by the allowlist gate
    #[pallet::storage]
    pub type ActiveRegistry<T: Config> = StorageValue<_, RegistryHandleOf<T>, OptionQuery>;

    #[pallet::event]
    #[pallet::generate_deposit(pub(super) fn deposit_event)]
    pub enum Event<T: Config> {
        /// Tokens moved by a holder or an approved spender
        Transferred { from: T::AccountId, to: T::AccountId, amount: u128 },
        /// A spending grant was set to `amount`
        Approval { owner: T::AccountId, spender: T::AccountId, amount: u128 },
        /// Tokens destroyed by a holder or an approved spender
        Burned { account: T::AccountId, amount: u128 },
        /// New tokens minted to the administrator
        Minted { to: T::AccountId, amount: u128 },
        /// Minting permanently disabled
        MintingRenounced,
        /// Tokens moved by the administrator, bypassing all gates
        AdminTransferred { from: T::AccountId, to: T::AccountId, amount: u128 },
        /// Tokens destroyed by the administrator, bypassing all gates
        AdminBurned { account: T::AccountId, amount: u128 },
        Paused { account: T::AccountId },
        Unpaused { account: T::AccountId },
        TransferLimitableEnabled,
        TransferLimitableDisabled,
        TransferLimitSet { account: T::AccountId, amount: u128 },
        TransferLimitUnset { account: T::AccountId },
        TransferLimitIncreased { account: T::AccountId, amount: u128, remaining: u128 },
        TransferLimitDecreased { account: T::AccountId, amount: u128, remaining: u128 },
        /// The allowlist gate now consults `registry`
        AllowlistRegistrySet { registry: RegistryHandleOf<T> },
        /// A foreign asset balance was swept from the pallet account
        EmergencyWithdrawn { asset: AssetIdOf<T>, to: T::AccountId, amount: u128 },
    }

    #[pallet::error]
    pub enum Error<T> {
        /// Caller is not the administrator
        NotAuthorized,
        /// Transfers are paused
        Paused,
        /// Transfers are not paused
        NotPaused,
        AlreadyPaused,
        /// Caller or a party is not a member of the allowlist registry
        NotAllowlisted,
        /// Amount exceeds the account's remaining transfer budget
        LimitExceeded,
        /// The account already has a transfer limit
        AccountLimitEnabled,
        /// The account has no transfer limit
        AccountLimitDisabled,
        /// Transfer limits are already enforced contract-wide
        AlreadyEnabled,
        /// Transfer limits are already lifted contract-wide
        AlreadyDisabled,
        MintingRenounced,
        InsufficientBalance,
        InsufficientAllowance,
        Overflow,
    }

    impl<T> From<LimitError> for Error<T> {
        fn from(err: LimitError) -> Self {
            match err {
                LimitError::Exceeded => Error::LimitExceeded,
                LimitError::AlreadyEnabled => Error::AccountLimitEnabled,
                LimitError::NotEnabled => Error::AccountLimitDisabled,
                LimitError::Overflow => Error::Overflow,
            }
        }
    }

    impl<T> From<AlreadyRenounced> for Error<T> {
        fn from(_: AlreadyRenounced) -> Self {
            Error::MintingRenounced
        }
    }

    #[pallet::hooks]
    impl<T: Config> Hooks<BlockNumberFor<T>> for Pallet<T> {
        #[cfg(feature = "try-runtime")]
        fn try_state(_n: BlockNumberFor<T>) -> Result<(), sp_runtime::TryRuntimeError> {
            Self::do_try_state()
        }
    }

    #[pallet::call]
    impl<T: Config> Pallet<T> {
        #[pallet::call_index(0)]
        #[pallet::weight(T::WeightInfo::transfer())]
        pub fn transfer(origin: OriginFor<T>, to: T::AccountId, amount: u128) -> DispatchResult {
            let sender = ensure_signed(origin)?;
            Self::guarded_debit(&sender, (&sender, &to), &sender, amount, || {
                Ledger::<T>::transfer(&sender, &to, amount)
            })?;
            Self::deposit_event(Event::Transferred { from: sender, to, amount });
            Ok(())
        }

        #[pallet::call_index(1)]
        #[pallet::weight(T::WeightInfo::transfer_from())]
        pub fn transfer_from(
            origin: OriginFor<T>,
            from: T::AccountId,
            to: T::AccountId,
            amount: u128,
        ) -> DispatchResult {
            let spender = ensure_signed(origin)?;
            Self::guarded_debit(&spender, (&from, &to), &from, amount, || {
                let left = Ledger::<T>::checked_allowance(&from, &spender, amount)?;
                Ledger::<T>::transfer(&from, &to, amount)?;
                Ledger::<T>::set_allowance(&from, &spender, left);
                Ok(())
            })?;
            Self::deposit_event(Event::Transferred { from, to, amount });
            Ok(())
        }

        #[pallet::call_index(2)]
        #[pallet::weight(T::WeightInfo::approve())]
        pub fn approve(
            origin: OriginFor<T>,
            spender: T::AccountId,
            amount: u128,
        ) -> DispatchResult {
            let owner = ensure_signed(origin)?;
            Self::guarded_grant(&owner, &spender, || Ok(amount))?;
            Self::deposit_event(Event::Approval { owner, spender, amount });
            Ok(())
        }

        #[pallet::call_index(3)]
        #[pallet::weight(T::WeightInfo::increase_allowance())]
        pub fn increase_allowance(
            origin: OriginFor<T>,
            spender: T::AccountId,
            added: u128,
        ) -> DispatchResult {
            let owner = ensure_signed(origin)?;
            let amount = Self::guarded_grant(&owner, &spender, || {
                Ledger::<T>::allowance_of(&owner, &spender)
                    .checked_add(added)
                    .ok_or(Error::<T>::Overflow)
            })?;
            Self::deposit_event(Event::Approval { owner, spender, amount });
            Ok(())
        }

        #[pallet::call_index(4)]
        #[pallet::weight(T::WeightInfo::decrease_allowance())]
        pub fn decrease_allowance(
            origin: OriginFor<T>,
            spender: T::AccountId,
            subtracted: u128,
        ) -> DispatchResult {
            let owner = ensure_signed(origin)?;
            let amount = Self::guarded_grant(&owner, &spender, || {
                Ledger::<T>::checked_allowance(&owner, &spender, subtracted)
            })?;
            Self::deposit_event(Event::Approval { owner, spender, amount });
            Ok(())
        }

        #[pallet::call_index(5)]
        #[pallet::weight(T::WeightInfo::burn())]
        pub fn burn(origin: OriginFor<T>, amount: u128) -> DispatchResult {
            let account = ensure_signed(origin)?;
            Self::guarded_debit(&account, (&account, &account), &account, amount, || {
                Ledger::<T>::burn(&account, amount)
            })?;
            Self::deposit_event(Event::Burned { account, amount });
            Ok(())
        }

        #[pallet::call_index(6)]
        #[pallet::weight(T::WeightInfo::burn_from())]
        pub fn burn_from(
            origin: OriginFor<T>,
            account: T::AccountId,
            amount: u128,
        ) -> DispatchResult {
            let spender = ensure_signed(origin)?;
            Self::guarded_debit(&spender, (&spender, &account), &account, amount, || {
                let left = Ledger::<T>::checked_allowance(&account, &spender, amount)?;
                Ledger::<T>::burn(&account, amount)?;
                Ledger::<T>::set_allowance(&account, &spender, left);
                Ok(())
            })?;
            Self::deposit_event(Event::Burned { account, amount });
            Ok(())
        }

        /// Mint `amount` new tokens to the administrator's own balance.
        #[pallet::call_index(7)]
        #[pallet::weight(T::WeightInfo::mint())]
        pub fn mint(origin: OriginFor<T>, amount: u128) -> DispatchResult {
            let admin = Self::ensure_admin(origin)?;
            Minting::<T>::get().ensure_mintable().map_err(Error::<T>::from)?;
            Ledger::<T>::mint(&admin, amount)?;
            Self::deposit_event(Event::Minted { to: admin, amount });
            Ok(())
        }

        /// Give up the mint authority for good. There is no way back.
        #[pallet::call_index(8)]
        #[pallet::weight(T::WeightInfo::renounce_mintable())]
        pub fn renounce_mintable(origin: OriginFor<T>) -> DispatchResult {
            let _ = Self::ensure_admin(origin)?;
            let next = Minting::<T>::get().renounce().map_err(Error::<T>::from)?;
            Minting::<T>::put(next);
            log::info!(target: LOG_TARGET, "mint authority renounced");
            Self::deposit_event(Event::MintingRenounced);
            Ok(())
        }

        #[pallet::call_index(9)]
        #[pallet::weight(T::WeightInfo::admin_transfer())]
        pub fn admin_transfer(
            origin: OriginFor<T>,
            from: T::AccountId,
            to: T::AccountId,
            amount: u128,
        ) -> DispatchResult {
            let _ = Self::ensure_admin(origin)?;
            Ledger::<T>::transfer(&from, &to, amount)?;
            log::info!(target: LOG_TARGET, "admin transfer of {amount} from {from:?} to {to:?}");
            Self::deposit_event(Event::AdminTransferred { from, to, amount });
            Ok(())
        }

        #[pallet::call_index(10)]
        #[pallet::weight(T::WeightInfo::admin_burn())]
        pub fn admin_burn(
            origin: OriginFor<T>,
            account: T::AccountId,
            amount: u128,
        ) -> DispatchResult {
            let _ = Self::ensure_admin(origin)?;
            Ledger::<T>::burn(&account, amount)?;
            log::info!(target: LOG_TARGET, "admin burn of {amount} from {account:?}");
            Self::deposit_event(Event::AdminBurned { account, amount });
            Ok(())
        }

        #[pallet::call_index(11)]
        #[pallet::weight(T::WeightInfo::pause())]
        pub fn pause(origin: OriginFor<T>) -> DispatchResult {
            let admin = Self::ensure_admin(origin)?;
            ensure!(!Paused::<T>::get(), Error::<T>::AlreadyPaused);
            Paused::<T>::put(true);
            log::info!(target: LOG_TARGET, "transfers paused");
            Self::deposit_event(Event::Paused { account: admin });
            Ok(())
        }

        #[pallet::call_index(12)]
        #[pallet::weight(T::WeightInfo::unpause())]
        pub fn unpause(origin: OriginFor<T>) -> DispatchResult {
            let admin = Self::ensure_admin(origin)?;
            ensure!(Paused::<T>::get(), Error::<T>::NotPaused);
            Paused::<T>::put(false);
            log::info!(target: LOG_TARGET, "transfers unpaused");
            Self::deposit_event(Event::Unpaused { account: admin });
            Ok(())
        }

        #[pallet::call_index(13)]
        #[pallet::weight(T::WeightInfo::enable_transfer_limitable())]
        pub fn enable_transfer_limitable(origin: OriginFor<T>) -> DispatchResult {
            let _ = Self::ensure_admin(origin)?;
            ensure!(!TransferLimitable::<T>::get(), Error::<T>::AlreadyEnabled);
            TransferLimitable::<T>::put(true);
            log::info!(target: LOG_TARGET, "transfer limits enforced");
            Self::deposit_event(Event::TransferLimitableEnabled);
            Ok(())
        }

        #[pallet::call_index(14)]
        #[pallet::weight(T::WeightInfo::disable_transfer_limitable())]
        pub fn disable_transfer_limitable(origin: OriginFor<T>) -> DispatchResult {
            let _ = Self::ensure_admin(origin)?;
            ensure!(TransferLimitable::<T>::get(), Error::<T>::AlreadyDisabled);
            TransferLimitable::<T>::put(false);
            log::info!(target: LOG_TARGET, "transfer limits lifted");
            Self::deposit_event(Event::TransferLimitableDisabled);
            Ok(())
        }

        #[pallet::call_index(15)]
        #[pallet::weight(T::WeightInfo::set_transfer_limit())]
        pub fn set_transfer_limit(
            origin: OriginFor<T>,
            account: T::AccountId,
            amount: u128,
        ) -> DispatchResult {
            let _ = Self::ensure_admin(origin)?;
            let next = TransferLimits::<T>::get(&account).set(amount).map_err(Error::<T>::from)?;
            TransferLimits::<T>::insert(&account, next);
            log::info!(target: LOG_TARGET, "transfer limit of {amount} set for {account:?}");
            Self::deposit_event(Event::TransferLimitSet { account, amount });
            Ok(())
        }

        #[pallet::call_index(16)]
        #[pallet::weight(T::WeightInfo::unset_transfer_limit())]
        pub fn unset_transfer_limit(origin: OriginFor<T>, account: T::AccountId) -> DispatchResult {
            let _ = Self::ensure_admin(origin)?;
            TransferLimits::<T>::get(&account).unset().map_err(Error::<T>::from)?;
            TransferLimits::<T>::remove(&account);
            log::info!(target: LOG_TARGET, "transfer limit removed for {account:?}");
            Self::deposit_event(Event::TransferLimitUnset { account });
            Ok(())
        }

        #[pallet::call_index(17)]
        #[pallet::weight(T::WeightInfo::increase_transfer_limit())]
        pub fn increase_transfer_limit(
            origin: OriginFor<T>,
            account: T::AccountId,
            amount: u128,
        ) -> DispatchResult {
            let _ = Self::ensure_admin(origin)?;
            let next =
                TransferLimits::<T>::get(&account).increase(amount).map_err(Error::<T>::from)?;
            TransferLimits::<T>::insert(&account, next);
            log::info!(
                target: LOG_TARGET,
                "transfer limit of {account:?} raised by {amount} to {}",
                next.remaining
            );
            Self::deposit_event(Event::TransferLimitIncreased {
                account,
                amount,
                remaining: next.remaining,
            });
            Ok(())
        }

        /// Lower an account's budget. Saturates at zero rather than failing.
        #[pallet::call_index(18)]
        #[pallet::weight(T::WeightInfo::decrease_transfer_limit())]
        pub fn decrease_transfer_limit(
            origin: OriginFor<T>,
            account: T::AccountId,
            amount: u128,
        ) -> DispatchResult {
            let _ = Self::ensure_admin(origin)?;
            let next =
                TransferLimits::<T>::get(&account).decrease(amount).map_err(Error::<T>::from)?;
            TransferLimits::<T>::insert(&account, next);
            log::info!(
                target: LOG_TARGET,
                "transfer limit of {account:?} lowered by {amount} to {}",
                next.remaining
            );
            Self::deposit_event(Event::TransferLimitDecreased {
                account,
                amount,
                remaining: next.remaining,
            });
            Ok(())
        }

        /// Point the allowlist gate at another registry. The new registry is not inspected.
        #[pallet::call_index(19)]
        #[pallet::weight(T::WeightInfo::set_allowlist_registry())]
        pub fn set_allowlist_registry(
            origin: OriginFor<T>,
            registry: RegistryHandleOf<T>,
        ) -> DispatchResult {
            let _ = Self::ensure_admin(origin)?;
            ActiveRegistry::<T>::put(registry.clone());
            log::info!(target: LOG_TARGET, "allowlist registry set to {registry:?}");
            Self::deposit_event(Event::AllowlistRegistrySet { registry });
            Ok(())
        }

        /// Sweep the pallet account's whole holding of a foreign asset to the administrator.
        #[pallet::call_index(20)]
        #[pallet::weight(T::WeightInfo::emergency_withdraw())]
        pub fn emergency_withdraw(origin: OriginFor<T>, asset: AssetIdOf<T>) -> DispatchResult {
            let admin = Self::ensure_admin(origin)?;
            let amount = T::Assets::transfer_all(&asset, &Self::account_id(), &admin)?;
            log::info!(target: LOG_TARGET, "recovered {amount} of asset {asset:?}");
            Self::deposit_event(Event::EmergencyWithdrawn { asset, to: admin, amount });
            Ok(())
        }
    }

    #[pallet::genesis_config]
    #[derive(frame_support::DefaultNoBound)]
    pub struct GenesisConfig<T: Config> {
        /// The administrator account. Required; the chain cannot be administered without it.
        pub admin: Option<T::AccountId>,
        /// Token name
        pub token_name: Vec<u8>,
        /// Token symbol
        pub token_symbol: Vec<u8>,
        /// Token decimals
        pub decimals: u8,
        /// Registry the allowlist gate starts with
        pub allowlist_registry: Option<RegistryHandleOf<T>>,
        /// Initial token balances (account, amount)
        pub initial_balances: Vec<(T::AccountId, u128)>,
    }

    #[pallet::genesis_build]
    impl<T: Config> BuildGenesisConfig for GenesisConfig<T> {
        fn build(&self) {
            let name: BoundedVec<u8, ConstU32<64>> =
                self.token_name.clone().try_into().expect("Token name too long (max 64 bytes)");
            TokenName::<T>::put(name);

            let symbol: BoundedVec<u8, ConstU32<16>> =
                self.token_symbol.clone().try_into().expect("Token symbol too long (max 16 bytes)");
            TokenSymbol::<T>::put(symbol);

            Decimals::<T>::put(self.decimals);

            let admin = self.admin.as_ref().expect("Genesis must name an administrator");
            Admin::<T>::put(admin);

            if let Some(ref registry) = self.allowlist_registry {
                ActiveRegistry::<T>::put(registry);
            }

            for (account, amount) in &self.initial_balances {
                Ledger::<T>::mint(account, *amount).expect("Initial balances overflow u128");
            }
        }
    }
}

// Gate pipeline. Each guard decides pass/fail without writing; only the final ledger step
// and the budget commit that follows it mutate storage.
impl<T: Config> Pallet<T> {
    /// Account that holds foreign assets sent to this pallet by mistake.
    pub fn account_id() -> T::AccountId {
        T::PalletId::get().into_account_truncating()
    }

    pub fn is_admin(who: &T::AccountId) -> bool {
        Admin::<T>::get().as_ref() == Some(who)
    }

    fn ensure_admin(origin: OriginFor<T>) -> Result<T::AccountId, DispatchError> {
        let who = ensure_signed(origin)?;
        ensure!(Self::is_admin(&who), Error::<T>::NotAuthorized);
        Ok(who)
    }

    fn ensure_not_paused() -> Result<(), Error<T>> {
        ensure!(!Paused::<T>::get(), Error::<T>::Paused);
        Ok(())
    }

    /// Allowlist predicate. The administrator always passes; anyone else needs the caller
    /// and both parties to be registry members. Looks the registry up afresh on every call.
    pub fn is_authorized(
        caller: &T::AccountId,
        party_a: &T::AccountId,
        party_b: &T::AccountId,
    ) -> bool {
        if Self::is_admin(caller) {
            return true;
        }
        let Some(registry) = ActiveRegistry::<T>::get() else {
            return false;
        };
        T::Registry::is_member(&registry, party_a) &&
            T::Registry::is_member(&registry, party_b) &&
            T::Registry::is_member(&registry, caller)
    }

    fn ensure_allowlisted(
        caller: &T::AccountId,
        party_a: &T::AccountId,
        party_b: &T::AccountId,
    ) -> Result<(), Error<T>> {
        if !Self::is_authorized(caller, party_a, party_b) {
            log::debug!(
                target: LOG_TARGET,
                "allowlist denied caller {caller:?} for ({party_a:?}, {party_b:?})"
            );
            return Err(Error::<T>::NotAllowlisted);
        }
        Ok(())
    }

    /// Budget record to store once `account` is debited `amount`, or `None` when no budget
    /// applies.
    fn checked_spend(
        account: &T::AccountId,
        amount: u128,
    ) -> Result<Option<TransferLimit>, Error<T>> {
        if !TransferLimitable::<T>::get() {
            return Ok(None);
        }
        let limit = TransferLimits::<T>::get(account);
        if !limit.enabled {
            return Ok(None);
        }
        limit.spend(amount).map(Some).map_err(Into::into)
    }

    /// Pause, then allowlist over `(caller, parties)`, then `debtor`'s budget, then `apply`.
    /// The budget is only written after `apply` succeeds.
    fn guarded_debit(
        caller: &T::AccountId,
        parties: (&T::AccountId, &T::AccountId),
        debtor: &T::AccountId,
        amount: u128,
        apply: impl FnOnce() -> Result<(), Error<T>>,
    ) -> Result<(), Error<T>> {
        Self::ensure_not_paused()?;
        Self::ensure_allowlisted(caller, parties.0, parties.1)?;
        let next_limit = Self::checked_spend(debtor, amount)?;
        apply()?;
        if let Some(limit) = next_limit {
            TransferLimits::<T>::insert(debtor, limit);
        }
        Ok(())
    }

    /// Pause and allowlist gates for allowance changes, which never touch the budget.
    /// `allowance` computes the new grant, which is stored on success and returned.
    fn guarded_grant(
        owner: &T::AccountId,
        spender: &T::AccountId,
        allowance: impl FnOnce() -> Result<u128, Error<T>>,
    ) -> Result<u128, Error<T>> {
        Self::ensure_not_paused()?;
        Self::ensure_allowlisted(owner, owner, spender)?;
        let amount = allowance()?;
        Ledger::<T>::set_allowance(owner, spender, amount);
        Ok(amount)
    }

    #[cfg(any(feature = "try-runtime", test))]
    pub fn do_try_state() -> Result<(), DispatchError> {
        let sum = Balances::<T>::iter_values()
            .try_fold(0u128, |acc, balance| acc.checked_add(balance))
            .ok_or(DispatchError::Other("sum of balances overflows"))?;
        ensure!(sum == TotalSupply::<T>::get(), "total supply differs from the sum of balances");

        for (_, limit) in TransferLimits::<T>::iter() {
            ensure!(limit.enabled || limit.remaining == 0, "disabled transfer limit holds budget");
        }
        Ok(())
    }
}

// Read-only queries.
impl<T: Config> Pallet<T> {
    pub fn balance_of(who: &T::AccountId) -> u128 {
        Ledger::<T>::balance_of(who)
    }

    pub fn allowance(owner: &T::AccountId, spender: &T::AccountId) -> u128 {
        Ledger::<T>::allowance_of(owner, spender)
    }

    pub fn total_supply() -> u128 {
        Ledger::<T>::total_supply()
    }

    pub fn paused() -> bool {
        Paused::<T>::get()
    }

    pub fn transfer_limitable() -> bool {
        TransferLimitable::<T>::get()
    }

    pub fn transfer_limit_of(account: &T::AccountId) -> (bool, u128) {
        let limit = TransferLimits::<T>::get(account);
        (limit.enabled, limit.remaining)
    }

    pub fn mintable() -> bool {
        Minting::<T>::get().is_mintable()
    }

    pub fn admin() -> Option<T::AccountId> {
        Admin::<T>::get()
    }

    pub fn allowlist_registry() -> Option<RegistryHandleOf<T>> {
        ActiveRegistry::<T>::get()
    }

    pub fn token_name() -> Vec<u8> {
        TokenName::<T>::get().into_inner()
    }

    pub fn token_symbol() -> Vec<u8> {
        TokenSymbol::<T>::get().into_inner()
    }

    pub fn decimals() -> u8 {
        Decimals::<T>::get()
    }
}
