//! Policy state records and their transition rules.
//!
//! These types hold no storage handles. Each transition takes the current value and either
//! returns the next one or a typed failure, so callers can check first and commit later.

use frame_support::pallet_prelude::*;

/// Per-account transfer budget.
///
/// `remaining` is only meaningful while `enabled` is set; the default record is
/// `{ enabled: false, remaining: 0 }`.
#[derive(
    Encode, Decode, Clone, Copy, PartialEq, Eq, Default, RuntimeDebug, TypeInfo, MaxEncodedLen,
)]
pub struct TransferLimit {
    pub enabled: bool,
    pub remaining: u128,
}

/// Reasons a [`TransferLimit`] transition is refused.
#[derive(Clone, Copy, PartialEq, Eq, RuntimeDebug)]
pub enum LimitError {
    /// The spend is larger than the remaining budget.
    Exceeded,
    /// The record is already enabled.
    AlreadyEnabled,
    /// The record is not enabled.
    NotEnabled,
    /// Raising the budget would overflow `u128`.
    Overflow,
}

impl TransferLimit {
    /// Enables the record with a fresh budget.
    pub fn set(self, amount: u128) -> Result<Self, LimitError> {
        if self.enabled {
            return Err(LimitError::AlreadyEnabled);
        }
        Ok(Self { enabled: true, remaining: amount })
    }

    /// Returns the record to its default, dropping any remaining budget.
    pub fn unset(self) -> Result<Self, LimitError> {
        if !self.enabled {
            return Err(LimitError::NotEnabled);
        }
        Ok(Self::default())
    }

    pub fn increase(self, amount: u128) -> Result<Self, LimitError> {
        if !self.enabled {
            return Err(LimitError::NotEnabled);
        }
        let remaining = self.remaining.checked_add(amount).ok_or(LimitError::Overflow)?;
        Ok(Self { remaining, ..self })
    }

    /// Lowers the budget, stopping at zero.
    pub fn decrease(self, amount: u128) -> Result<Self, LimitError> {
        if !self.enabled {
            return Err(LimitError::NotEnabled);
        }
        Ok(Self { remaining: self.remaining.saturating_sub(amount), ..self })
    }

    /// Consumes `amount` of the budget at debit time.
    ///
    /// Unlike [`Self::decrease`] this never saturates: a spend larger than the remaining
    /// budget is refused and the record is left as it was.
    pub fn spend(self, amount: u128) -> Result<Self, LimitError> {
        let remaining = self.remaining.checked_sub(amount).ok_or(LimitError::Exceeded)?;
        Ok(Self { remaining, ..self })
    }
}

/// Minting capability. The only legal transition is `Active -> Renounced`.
#[derive(
    Encode, Decode, Clone, Copy, PartialEq, Eq, Default, RuntimeDebug, TypeInfo, MaxEncodedLen,
)]
pub enum MintAuthority {
    #[default]
    Active,
    Renounced,
}

/// Returned by every [`MintAuthority`] operation once minting has been renounced.
#[derive(Clone, Copy, PartialEq, Eq, RuntimeDebug)]
pub struct AlreadyRenounced;

impl MintAuthority {
    pub fn is_mintable(&self) -> bool {
        matches!(self, Self::Active)
    }

    pub fn ensure_mintable(&self) -> Result<(), AlreadyRenounced> {
        match self {
            Self::Active => Ok(()),
            Self::Renounced => Err(AlreadyRenounced),
        }
    }

    pub fn renounce(self) -> Result<Self, AlreadyRenounced> {
        match self {
            Self::Active => Ok(Self::Renounced),
            Self::Renounced => Err(AlreadyRenounced),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_requires_disabled_record() {
        let limit = TransferLimit::default().set(1_000).unwrap();
        assert_eq!(limit, TransferLimit { enabled: true, remaining: 1_000 });
        assert_eq!(limit.set(5), Err(LimitError::AlreadyEnabled));
    }

    #[test]
    fn unset_clears_remaining() {
        let limit = TransferLimit { enabled: true, remaining: 42 };
        assert_eq!(limit.unset(), Ok(TransferLimit::default()));
        assert_eq!(TransferLimit::default().unset(), Err(LimitError::NotEnabled));
    }

    #[test]
    fn increase_refuses_to_wrap() {
        let limit = TransferLimit { enabled: true, remaining: u128::MAX - 1 };
        assert_eq!(limit.increase(1).unwrap().remaining, u128::MAX);
        assert_eq!(limit.increase(2), Err(LimitError::Overflow));
        assert_eq!(TransferLimit::default().increase(1), Err(LimitError::NotEnabled));
    }

    #[test]
    fn decrease_saturates_but_spend_does_not() {
        let limit = TransferLimit { enabled: true, remaining: 100 };
        assert_eq!(limit.decrease(500).unwrap().remaining, 0);
        assert_eq!(limit.spend(150), Err(LimitError::Exceeded));
        assert_eq!(limit.spend(100).unwrap().remaining, 0);
        assert_eq!(TransferLimit::default().decrease(1), Err(LimitError::NotEnabled));
    }

    #[test]
    fn mint_authority_only_moves_forward() {
        let authority = MintAuthority::default();
        assert!(authority.is_mintable());
        assert_eq!(authority.ensure_mintable(), Ok(()));

        let renounced = authority.renounce().unwrap();
        assert!(!renounced.is_mintable());
        assert_eq!(renounced.ensure_mintable(), Err(AlreadyRenounced));
        assert_eq!(renounced.renounce(), Err(AlreadyRenounced));
    }
}
