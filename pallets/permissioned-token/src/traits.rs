//! Collaborators the pallet consults but does not own.

use frame_support::{
    pallet_prelude::*,
    traits::{
        fungibles,
        tokens::{Fortitude, Preservation},
    },
};
use sp_runtime::{
    traits::{MaybeSerializeDeserialize, Zero},
    SaturatedConversion,
};
use sp_std::marker::PhantomData;

/// External membership oracle behind the allowlist gate.
///
/// The pallet stores only a `Handle` and asks the registry on every check, so swapping the
/// handle takes effect for the very next call.
pub trait AllowlistRegistry<AccountId> {
    /// Reference to one registry instance (an account, contract address or index).
    type Handle: Parameter + Member + MaxEncodedLen + MaybeSerializeDeserialize;

    fn is_member(registry: &Self::Handle, who: &AccountId) -> bool;
}

/// Foreign assets that can end up in the pallet account and be swept back out.
pub trait RecoverableAssets<AccountId> {
    type AssetId: Parameter + Member + MaxEncodedLen;

    fn balance(asset: &Self::AssetId, who: &AccountId) -> u128;

    /// Moves everything `from` holds of `asset` to `to` and returns the amount moved.
    fn transfer_all(
        asset: &Self::AssetId,
        from: &AccountId,
        to: &AccountId,
    ) -> Result<u128, DispatchError>;
}

/// [`RecoverableAssets`] over any `fungibles` implementation, e.g. `pallet-assets`.
pub struct FungiblesRecovery<F>(PhantomData<F>);

impl<AccountId, F> RecoverableAssets<AccountId> for FungiblesRecovery<F>
where
    AccountId: Eq,
    F: fungibles::Mutate<AccountId>,
{
    type AssetId = F::AssetId;

    fn balance(asset: &Self::AssetId, who: &AccountId) -> u128 {
        F::reducible_balance(asset.clone(), who, Preservation::Expendable, Fortitude::Polite)
            .saturated_into()
    }

    fn transfer_all(
        asset: &Self::AssetId,
        from: &AccountId,
        to: &AccountId,
    ) -> Result<u128, DispatchError> {
        let amount =
            F::reducible_balance(asset.clone(), from, Preservation::Expendable, Fortitude::Polite);
        if amount.is_zero() {
            return Ok(0);
        }
        let moved = F::transfer(asset.clone(), from, to, amount, Preservation::Expendable)?;
        Ok(moved.saturated_into())
    }
}
