use alloc::vec::Vec;
use codec::{Decode, DecodeWithMemTracking, Encode};
use scale_info::TypeInfo;
use sp_arithmetic::traits::{AtLeast32BitUnsigned, CheckedMul};

use crate::params::MAX_DECIMALS;

/// Identifier of a token hosted by the ledger. Each token is an independent ledger instance.
pub type TokenId = u32;

/// Identifier of a reward engine instance.
pub type EngineId = u32;

/// Metadata container for tokens
#[derive(Encode, Decode, DecodeWithMemTracking, Eq, PartialEq, Clone, Debug, TypeInfo)]
pub struct TokenMetadata {
  pub name: Vec<u8>,
  pub symbol: Vec<u8>,
  pub decimals: u8,
}

impl TokenMetadata {
  pub fn new(name: &[u8], symbol: &[u8], decimals: u8) -> Self {
    Self {
      name: name.to_vec(),
      symbol: symbol.to_vec(),
      decimals,
    }
  }

  /// Convert an amount of whole tokens into base units (`whole * 10^decimals`).
  ///
  /// Returns `None` when the decimals are out of range or the result overflows.
  pub fn to_base_units<Balance: AtLeast32BitUnsigned + Copy>(&self, whole: Balance) -> Option<Balance> {
    if self.decimals > MAX_DECIMALS {
      return None;
    }
    let ten = Balance::from(10u32);
    (0..self.decimals).try_fold(whole, |acc, _| acc.checked_mul(&ten))
  }
}
