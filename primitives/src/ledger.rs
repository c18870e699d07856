//! Capability surface of the balance ledger consumed by the issuance and
//! reward components.

use polkadot_sdk::sp_runtime::{DispatchError, DispatchResult};

use crate::token::{TokenId, TokenMetadata};

/// Ledger operations other pallets are allowed to perform.
///
/// `transfer` runs the full user-facing path (pause, freeze and balance checks).
/// `mint` is privileged: callers are expected to enforce their own issuance policy.
pub trait TokenLedger<AccountId, Balance> {
  fn exists(token: TokenId) -> bool;

  fn owner(token: TokenId) -> Option<AccountId>;

  fn balance(token: TokenId, who: &AccountId) -> Balance;

  fn total_supply(token: TokenId) -> Balance;

  /// Create a token owned by `owner`. `initial_supply` is given in whole units.
  fn create(
    owner: &AccountId,
    metadata: TokenMetadata,
    initial_supply: Balance,
    initial_holder: Option<(AccountId, Balance)>,
  ) -> Result<TokenId, DispatchError>;

  fn transfer(token: TokenId, from: &AccountId, to: &AccountId, amount: Balance) -> DispatchResult;

  fn mint(token: TokenId, to: &AccountId, amount: Balance) -> DispatchResult;
}
