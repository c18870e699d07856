//! Access control building blocks shared by every ledger component.
//!
//! Each component embeds one [`Ownable`] and one or more [`PauseSwitch`]es in
//! its own storage record; the guards below are evaluated at the start of a
//! call, before any state is touched.

use codec::{Decode, DecodeWithMemTracking, Encode, MaxEncodedLen};
use scale_info::TypeInfo;

/// Failure of a shared guard. Pallets convert it into their own error type.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AccessError {
  /// Caller is not the privileged owner.
  NotOwner,
  /// The switch is engaged and the component refuses mutations.
  Suspended,
  /// The switch is already released.
  NotSuspended,
}

/// Single privileged identity of a component.
#[derive(
  Clone, Debug, Decode, DecodeWithMemTracking, Encode, Eq, PartialEq, TypeInfo, MaxEncodedLen,
)]
pub struct Ownable<AccountId> {
  owner: AccountId,
}

impl<AccountId: PartialEq + Clone> Ownable<AccountId> {
  pub fn new(owner: AccountId) -> Self {
    Self { owner }
  }

  pub fn owner(&self) -> &AccountId {
    &self.owner
  }

  pub fn is_owner(&self, who: &AccountId) -> bool {
    &self.owner == who
  }

  pub fn ensure_owner(&self, who: &AccountId) -> Result<(), AccessError> {
    if self.is_owner(who) {
      Ok(())
    } else {
      Err(AccessError::NotOwner)
    }
  }

  /// Hand ownership to `new_owner`, returning the previous owner.
  pub fn transfer(&mut self, caller: &AccountId, new_owner: AccountId) -> Result<AccountId, AccessError> {
    self.ensure_owner(caller)?;
    Ok(core::mem::replace(&mut self.owner, new_owner))
  }
}

/// Owner-toggled switch. While engaged, mutating operations of the component fail.
#[derive(
  Clone,
  Copy,
  Debug,
  Default,
  Decode,
  DecodeWithMemTracking,
  Encode,
  Eq,
  PartialEq,
  TypeInfo,
  MaxEncodedLen,
)]
pub struct PauseSwitch {
  engaged: bool,
}

impl PauseSwitch {
  pub const fn running() -> Self {
    Self { engaged: false }
  }

  pub fn is_engaged(&self) -> bool {
    self.engaged
  }

  pub fn ensure_running(&self) -> Result<(), AccessError> {
    if self.engaged {
      Err(AccessError::Suspended)
    } else {
      Ok(())
    }
  }

  pub fn engage(&mut self) -> Result<(), AccessError> {
    self.ensure_running()?;
    self.engaged = true;
    Ok(())
  }

  pub fn disengage(&mut self) -> Result<(), AccessError> {
    if !self.engaged {
      return Err(AccessError::NotSuspended);
    }
    self.engaged = false;
    Ok(())
  }
}
