//! Balance and allowance accounting.
//!
//! This is the primitive the policy layer authorizes access to. It knows nothing about
//! pauses, allowlists or budgets. Every operation computes all of its new values before
//! writing any of them, so a failed call leaves storage untouched.

use sp_std::marker::PhantomData;

use crate::{Allowances, Balances, Config, Error, TotalSupply};

pub(crate) struct Ledger<T>(PhantomData<T>);

impl<T: Config> Ledger<T> {
    pub fn balance_of(who: &T::AccountId) -> u128 {
        Balances::<T>::get(who)
    }

    pub fn allowance_of(owner: &T::AccountId, spender: &T::AccountId) -> u128 {
        Allowances::<T>::get(owner, spender)
    }

    pub fn total_supply() -> u128 {
        TotalSupply::<T>::get()
    }

    pub fn transfer(from: &T::AccountId, to: &T::AccountId, amount: u128) -> Result<(), Error<T>> {
        let from_balance =
            Balances::<T>::get(from).checked_sub(amount).ok_or(Error::<T>::InsufficientBalance)?;
        if from == to {
            return Ok(());
        }
        let to_balance = Balances::<T>::get(to).checked_add(amount).ok_or(Error::<T>::Overflow)?;

        Balances::<T>::insert(from, from_balance);
        Balances::<T>::insert(to, to_balance);
        Ok(())
    }

    pub fn mint(to: &T::AccountId, amount: u128) -> Result<(), Error<T>> {
        let supply = TotalSupply::<T>::get().checked_add(amount).ok_or(Error::<T>::Overflow)?;
        let balance = Balances::<T>::get(to).checked_add(amount).ok_or(Error::<T>::Overflow)?;

        TotalSupply::<T>::put(supply);
        Balances::<T>::insert(to, balance);
        Ok(())
    }

    pub fn burn(from: &T::AccountId, amount: u128) -> Result<(), Error<T>> {
        let balance =
            Balances::<T>::get(from).checked_sub(amount).ok_or(Error::<T>::InsufficientBalance)?;
        // Supply is at least any single balance, so this only fails on corrupted state.
        let supply = TotalSupply::<T>::get().checked_sub(amount).ok_or(Error::<T>::Overflow)?;

        Balances::<T>::insert(from, balance);
        TotalSupply::<T>::put(supply);
        Ok(())
    }

    pub fn set_allowance(owner: &T::AccountId, spender: &T::AccountId, amount: u128) {
        if amount == 0 {
            Allowances::<T>::remove(owner, spender);
        } else {
            Allowances::<T>::insert(owner, spender, amount);
        }
    }

    /// Allowance left after `spender` uses `amount` of `owner`'s grant. Writes nothing.
    pub fn checked_allowance(
        owner: &T::AccountId,
        spender: &T::AccountId,
        amount: u128,
    ) -> Result<u128, Error<T>> {
        Allowances::<T>::get(owner, spender)
            .checked_sub(amount)
            .ok_or(Error::<T>::InsufficientAllowance)
    }
}
