//! Pluggable policies of a reward engine.
//!
//! The runtime chooses how payouts are computed and who may trigger them; the
//! pallet only enforces thresholds, pausing and ledger movement.

use core::marker::PhantomData;
use frame::prelude::*;
use polkadot_sdk::sp_runtime::traits::CheckedMul;
use primitives::EngineId;

/// Computes the amount paid to `beneficiary` for a given `base`.
///
/// Returns `None` when the payout is undefined (e.g. overflow); the engine then
/// refuses to disburse.
pub trait RewardFormula<AccountId, Balance> {
  fn payout(beneficiary: &AccountId, base: Balance) -> Option<Balance>;
}

/// Decides whether `caller` may trigger a disbursement on `engine`.
pub trait DisburseGate<AccountId> {
  fn allows(engine: EngineId, owner: &AccountId, caller: &AccountId) -> bool;
}

/// `payout = base * M`.
pub struct LinearMultiplier<M>(PhantomData<M>);

impl<AccountId, Balance, M> RewardFormula<AccountId, Balance> for LinearMultiplier<M>
where
  Balance: AtLeast32BitUnsigned,
  M: Get<u32>,
{
  fn payout(_beneficiary: &AccountId, base: Balance) -> Option<Balance> {
    base.checked_mul(&Balance::from(M::get()))
  }
}

/// Only the engine owner may disburse.
pub struct OwnerOnly;

impl<AccountId: PartialEq> DisburseGate<AccountId> for OwnerOnly {
  fn allows(_engine: EngineId, owner: &AccountId, caller: &AccountId) -> bool {
    owner == caller
  }
}

/// Any signed caller may disburse.
pub struct AnyCaller;

impl<AccountId> DisburseGate<AccountId> for AnyCaller {
  fn allows(_engine: EngineId, _owner: &AccountId, _caller: &AccountId) -> bool {
    true
  }
}
