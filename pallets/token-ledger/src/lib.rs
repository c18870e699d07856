//! Token Ledger Pallet
//!
//! Hosts any number of independent fungible tokens. Each token keeps its own
//! balances, allowances, freeze set, pause switch and owner. Other pallets reach
//! the ledger through [`primitives::TokenLedger`].

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub use pallet::*;

pub mod weights;
pub use weights::WeightInfo;

#[cfg(test)]
mod mock;

#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;

pub const LOG_TARGET: &str = "runtime::token-ledger";

#[frame::pallet]
pub mod pallet {
  use super::{LOG_TARGET, WeightInfo};
  use alloc::vec::Vec;
  use frame::prelude::*;
  use polkadot_sdk::{
    frame_support::{CloneNoBound, DebugNoBound, EqNoBound, PartialEqNoBound},
    sp_runtime::traits::{CheckedAdd, CheckedSub, TrailingZeroInput, Zero},
  };
  use primitives::{AccessError, Ownable, PauseSwitch, TokenId, TokenLedger, TokenMetadata};

  /// Per-token control record.
  #[derive(
    Clone, Debug, Decode, DecodeWithMemTracking, Encode, Eq, PartialEq, TypeInfo, MaxEncodedLen,
  )]
  pub struct TokenDetails<AccountId, Balance> {
    pub ownership: Ownable<AccountId>,
    pub pause: PauseSwitch,
    pub decimals: u8,
    /// Supply minted at creation, in base units.
    pub initial_supply: Balance,
    pub total_supply: Balance,
  }

  #[derive(
    CloneNoBound,
    DebugNoBound,
    Decode,
    DecodeWithMemTracking,
    Encode,
    EqNoBound,
    PartialEqNoBound,
    TypeInfo,
    MaxEncodedLen,
  )]
  #[scale_info(skip_type_params(StringLimit))]
  #[codec(mel_bound())]
  pub struct LedgerMetadata<StringLimit: Get<u32>> {
    pub name: BoundedVec<u8, StringLimit>,
    pub symbol: BoundedVec<u8, StringLimit>,
  }

  #[pallet::config]
  pub trait Config: frame_system::Config {
    type Balance: Parameter
      + Member
      + AtLeast32BitUnsigned
      + Default
      + Copy
      + MaybeSerializeDeserialize
      + MaxEncodedLen;

    /// Maximum length of a token name or symbol.
    #[pallet::constant]
    type StringLimit: Get<u32>;

    type WeightInfo: WeightInfo;
  }

  pub type BalanceOf<T> = <T as Config>::Balance;
  pub type TokenDetailsOf<T> = TokenDetails<<T as frame_system::Config>::AccountId, BalanceOf<T>>;
  pub type LedgerMetadataOf<T> = LedgerMetadata<<T as Config>::StringLimit>;

  #[pallet::pallet]
  pub struct Pallet<T>(_);

  #[pallet::storage]
  #[pallet::getter(fn next_token_id)]
  pub type NextTokenId<T> = StorageValue<_, TokenId, ValueQuery>;

  #[pallet::storage]
  pub type Tokens<T: Config> = StorageMap<_, Blake2_128Concat, TokenId, TokenDetailsOf<T>, OptionQuery>;

  #[pallet::storage]
  pub type Metadata<T: Config> =
    StorageMap<_, Blake2_128Concat, TokenId, LedgerMetadataOf<T>, OptionQuery>;

  /// Zero balances are not stored.
  #[pallet::storage]
  pub type Balances<T: Config> = StorageDoubleMap<
    _,
    Blake2_128Concat,
    TokenId,
    Blake2_128Concat,
    T::AccountId,
    BalanceOf<T>,
    ValueQuery,
  >;

  /// (token, owner, spender) -> remaining cap.
  #[pallet::storage]
  pub type Allowances<T: Config> = StorageNMap<
    _,
    (
      NMapKey<Blake2_128Concat, TokenId>,
      NMapKey<Blake2_128Concat, T::AccountId>,
      NMapKey<Blake2_128Concat, T::AccountId>,
    ),
    BalanceOf<T>,
    ValueQuery,
  >;

  /// Only frozen accounts are stored.
  #[pallet::storage]
  pub type Frozen<T: Config> =
    StorageDoubleMap<_, Blake2_128Concat, TokenId, Blake2_128Concat, T::AccountId, bool, ValueQuery>;

  #[pallet::genesis_config]
  #[derive(frame::prelude::DefaultNoBound)]
  pub struct GenesisConfig<T: Config> {
    /// `(owner, name, symbol, decimals, initial supply in whole units)`, ids assigned in order.
    pub tokens: Vec<(T::AccountId, Vec<u8>, Vec<u8>, u8, BalanceOf<T>)>,
    /// `(token, account, amount)` moved out of the token owner's initial allocation.
    pub accounts: Vec<(TokenId, T::AccountId, BalanceOf<T>)>,
  }

  #[pallet::genesis_build]
  impl<T: Config> BuildGenesisConfig for GenesisConfig<T> {
    fn build(&self) {
      for (owner, name, symbol, decimals, supply) in &self.tokens {
        Pallet::<T>::do_create(owner, TokenMetadata::new(name, symbol, *decimals), *supply, None)
          .expect("genesis token must be valid");
      }
      for (token, who, amount) in &self.accounts {
        let owner = Pallet::<T>::owner(*token).expect("genesis account refers to a known token");
        Pallet::<T>::do_transfer(*token, &owner, who, *amount)
          .expect("genesis allocation must fit the owner's supply");
      }
    }
  }

  #[pallet::event]
  #[pallet::generate_deposit(pub(super) fn deposit_event)]
  pub enum Event<T: Config> {
    Created {
      token: TokenId,
      owner: T::AccountId,
      decimals: u8,
      initial_supply: BalanceOf<T>,
    },
    /// `from: None` is issuance, `to: None` is destruction.
    Transfer {
      token: TokenId,
      from: Option<T::AccountId>,
      to: Option<T::AccountId>,
      value: BalanceOf<T>,
    },
    Approval {
      token: TokenId,
      owner: T::AccountId,
      spender: T::AccountId,
      value: BalanceOf<T>,
    },
    Pause {
      token: TokenId,
    },
    Unpause {
      token: TokenId,
    },
    FundsFrozen {
      token: TokenId,
      account: T::AccountId,
      state: bool,
    },
    OwnershipTransferred {
      token: TokenId,
      previous_owner: T::AccountId,
      new_owner: T::AccountId,
    },
  }

  #[pallet::error]
  pub enum Error<T> {
    UnknownToken,
    NotOwner,
    /// The token is paused.
    Suspended,
    NotSuspended,
    AccountFrozen,
    InsufficientBalance,
    InsufficientAllowance,
    ZeroAmount,
    /// The null identity cannot receive tokens or ownership.
    NullAccount,
    /// Name or symbol exceeds `StringLimit`.
    BadMetadata,
    Overflow,
  }

  impl<T: Config> From<AccessError> for Error<T> {
    fn from(err: AccessError) -> Self {
      match err {
        AccessError::NotOwner => Error::NotOwner,
        AccessError::Suspended => Error::Suspended,
        AccessError::NotSuspended => Error::NotSuspended,
      }
    }
  }

  #[pallet::hooks]
  impl<T: Config> Hooks<BlockNumberFor<T>> for Pallet<T> {
    #[cfg(feature = "try-runtime")]
    fn try_state(_n: BlockNumberFor<T>) -> Result<(), DispatchError> {
      Self::do_try_state()
    }
  }

  #[pallet::call]
  impl<T: Config> Pallet<T> {
    /// Create a token owned by the caller.
    ///
    /// `initial_supply` is in whole units and is scaled by `10^decimals`. When
    /// `initial_holder` is given, that account receives the stated base-unit amount
    /// and the owner receives the remainder.
    #[pallet::call_index(0)]
    #[pallet::weight(T::WeightInfo::create())]
    pub fn create(
      origin: OriginFor<T>,
      name: Vec<u8>,
      symbol: Vec<u8>,
      decimals: u8,
      initial_supply: BalanceOf<T>,
      initial_holder: Option<(T::AccountId, BalanceOf<T>)>,
    ) -> DispatchResult {
      let who = ensure_signed(origin)?;
      Self::do_create(
        &who,
        TokenMetadata::new(&name, &symbol, decimals),
        initial_supply,
        initial_holder,
      )?;
      Ok(())
    }

    #[pallet::call_index(1)]
    #[pallet::weight(T::WeightInfo::transfer())]
    pub fn transfer(
      origin: OriginFor<T>,
      token: TokenId,
      to: T::AccountId,
      amount: BalanceOf<T>,
    ) -> DispatchResult {
      let who = ensure_signed(origin)?;
      Self::do_transfer(token, &who, &to, amount)
    }

    /// Overwrite the caller's allowance for `spender`.
    #[pallet::call_index(2)]
    #[pallet::weight(T::WeightInfo::approve())]
    pub fn approve(
      origin: OriginFor<T>,
      token: TokenId,
      spender: T::AccountId,
      amount: BalanceOf<T>,
    ) -> DispatchResult {
      let who = ensure_signed(origin)?;
      let details = Self::token(token)?;
      details.pause.ensure_running().map_err(Error::<T>::from)?;
      Self::ensure_not_frozen(token, &who)?;
      ensure!(!Self::is_null(&spender), Error::<T>::NullAccount);
      if amount.is_zero() {
        Allowances::<T>::remove((token, &who, &spender));
      } else {
        Allowances::<T>::insert((token, &who, &spender), amount);
      }
      Self::deposit_event(Event::Approval {
        token,
        owner: who,
        spender,
        value: amount,
      });
      Ok(())
    }

    /// Move `amount` from `from` to `to` on behalf of `from`, consuming the caller's allowance.
    #[pallet::call_index(3)]
    #[pallet::weight(T::WeightInfo::transfer_from())]
    pub fn transfer_from(
      origin: OriginFor<T>,
      token: TokenId,
      from: T::AccountId,
      to: T::AccountId,
      amount: BalanceOf<T>,
    ) -> DispatchResult {
      let spender = ensure_signed(origin)?;
      let details = Self::token(token)?;
      details.pause.ensure_running().map_err(Error::<T>::from)?;
      Self::ensure_not_frozen(token, &from)?;
      Self::ensure_not_frozen(token, &to)?;
      ensure!(!Self::is_null(&to), Error::<T>::NullAccount);
      let remaining = Allowances::<T>::get((token, &from, &spender))
        .checked_sub(&amount)
        .ok_or(Error::<T>::InsufficientAllowance)?;
      Self::do_transfer(token, &from, &to, amount)?;
      if remaining.is_zero() {
        Allowances::<T>::remove((token, &from, &spender));
      } else {
        Allowances::<T>::insert((token, &from, &spender), remaining);
      }
      Ok(())
    }

    /// Destroy `amount` of the caller's balance, reducing total supply by the same amount.
    #[pallet::call_index(4)]
    #[pallet::weight(T::WeightInfo::burn())]
    pub fn burn(origin: OriginFor<T>, token: TokenId, amount: BalanceOf<T>) -> DispatchResult {
      let who = ensure_signed(origin)?;
      let mut details = Self::token(token)?;
      details.pause.ensure_running().map_err(Error::<T>::from)?;
      Self::ensure_not_frozen(token, &who)?;
      ensure!(!amount.is_zero(), Error::<T>::ZeroAmount);
      let balance = Balances::<T>::get(token, &who)
        .checked_sub(&amount)
        .ok_or(Error::<T>::InsufficientBalance)?;
      details.total_supply = details
        .total_supply
        .checked_sub(&amount)
        .ok_or(Error::<T>::InsufficientBalance)?;
      Self::write_balance(token, &who, balance);
      Tokens::<T>::insert(token, details);
      Self::deposit_event(Event::Transfer {
        token,
        from: Some(who),
        to: None,
        value: amount,
      });
      Ok(())
    }

    #[pallet::call_index(5)]
    #[pallet::weight(T::WeightInfo::pause())]
    pub fn pause(origin: OriginFor<T>, token: TokenId) -> DispatchResult {
      let who = ensure_signed(origin)?;
      Tokens::<T>::try_mutate(token, |maybe| -> DispatchResult {
        let details = maybe.as_mut().ok_or(Error::<T>::UnknownToken)?;
        details.ownership.ensure_owner(&who).map_err(Error::<T>::from)?;
        details.pause.engage().map_err(Error::<T>::from)?;
        Ok(())
      })?;
      log::debug!(target: LOG_TARGET, "token {token} paused by {who:?}");
      Self::deposit_event(Event::Pause { token });
      Ok(())
    }

    #[pallet::call_index(6)]
    #[pallet::weight(T::WeightInfo::unpause())]
    pub fn unpause(origin: OriginFor<T>, token: TokenId) -> DispatchResult {
      let who = ensure_signed(origin)?;
      Tokens::<T>::try_mutate(token, |maybe| -> DispatchResult {
        let details = maybe.as_mut().ok_or(Error::<T>::UnknownToken)?;
        details.ownership.ensure_owner(&who).map_err(Error::<T>::from)?;
        details.pause.disengage().map_err(Error::<T>::from)?;
        Ok(())
      })?;
      log::debug!(target: LOG_TARGET, "token {token} unpaused by {who:?}");
      Self::deposit_event(Event::Unpause { token });
      Ok(())
    }

    /// Set or clear the frozen flag of `account`. The owner may freeze itself.
    #[pallet::call_index(7)]
    #[pallet::weight(T::WeightInfo::freeze())]
    pub fn freeze(
      origin: OriginFor<T>,
      token: TokenId,
      account: T::AccountId,
      state: bool,
    ) -> DispatchResult {
      let who = ensure_signed(origin)?;
      let details = Self::token(token)?;
      details.ownership.ensure_owner(&who).map_err(Error::<T>::from)?;
      if state {
        Frozen::<T>::insert(token, &account, true);
      } else {
        Frozen::<T>::remove(token, &account);
      }
      log::debug!(target: LOG_TARGET, "token {token}: {account:?} frozen = {state}");
      Self::deposit_event(Event::FundsFrozen {
        token,
        account,
        state,
      });
      Ok(())
    }

    #[pallet::call_index(8)]
    #[pallet::weight(T::WeightInfo::transfer_ownership())]
    pub fn transfer_ownership(
      origin: OriginFor<T>,
      token: TokenId,
      new_owner: T::AccountId,
    ) -> DispatchResult {
      let who = ensure_signed(origin)?;
      ensure!(!Self::is_null(&new_owner), Error::<T>::NullAccount);
      let previous_owner = Tokens::<T>::try_mutate(token, |maybe| -> Result<_, DispatchError> {
        let details = maybe.as_mut().ok_or(Error::<T>::UnknownToken)?;
        let previous = details
          .ownership
          .transfer(&who, new_owner.clone())
          .map_err(Error::<T>::from)?;
        Ok(previous)
      })?;
      log::debug!(target: LOG_TARGET, "token {token} owner {previous_owner:?} -> {new_owner:?}");
      Self::deposit_event(Event::OwnershipTransferred {
        token,
        previous_owner,
        new_owner,
      });
      Ok(())
    }
  }

  impl<T: Config> Pallet<T> {
    pub fn name(token: TokenId) -> Option<Vec<u8>> {
      Metadata::<T>::get(token).map(|meta| meta.name.into_inner())
    }

    pub fn symbol(token: TokenId) -> Option<Vec<u8>> {
      Metadata::<T>::get(token).map(|meta| meta.symbol.into_inner())
    }

    pub fn decimals(token: TokenId) -> Option<u8> {
      Tokens::<T>::get(token).map(|details| details.decimals)
    }

    pub fn initial_supply(token: TokenId) -> Option<BalanceOf<T>> {
      Tokens::<T>::get(token).map(|details| details.initial_supply)
    }

    pub fn total_supply(token: TokenId) -> BalanceOf<T> {
      Tokens::<T>::get(token)
        .map(|details| details.total_supply)
        .unwrap_or_default()
    }

    pub fn balance_of(token: TokenId, who: &T::AccountId) -> BalanceOf<T> {
      Balances::<T>::get(token, who)
    }

    pub fn allowance(token: TokenId, owner: &T::AccountId, spender: &T::AccountId) -> BalanceOf<T> {
      Allowances::<T>::get((token, owner, spender))
    }

    pub fn is_frozen(token: TokenId, who: &T::AccountId) -> bool {
      Frozen::<T>::get(token, who)
    }

    pub fn owner(token: TokenId) -> Option<T::AccountId> {
      Tokens::<T>::get(token).map(|details| details.ownership.owner().clone())
    }

    pub fn is_paused(token: TokenId) -> bool {
      Tokens::<T>::get(token).is_some_and(|details| details.pause.is_engaged())
    }

    /// The identity decoded from all-zero bytes. It never holds tokens.
    pub fn is_null(who: &T::AccountId) -> bool {
      T::AccountId::decode(&mut TrailingZeroInput::zeroes()).is_ok_and(|null| &null == who)
    }

    fn token(token: TokenId) -> Result<TokenDetailsOf<T>, Error<T>> {
      Tokens::<T>::get(token).ok_or(Error::<T>::UnknownToken)
    }

    fn ensure_not_frozen(token: TokenId, who: &T::AccountId) -> Result<(), Error<T>> {
      ensure!(!Frozen::<T>::get(token, who), Error::<T>::AccountFrozen);
      Ok(())
    }

    fn write_balance(token: TokenId, who: &T::AccountId, amount: BalanceOf<T>) {
      if amount.is_zero() {
        Balances::<T>::remove(token, who);
      } else {
        Balances::<T>::insert(token, who, amount);
      }
    }

    pub(crate) fn do_create(
      owner: &T::AccountId,
      metadata: TokenMetadata,
      initial_supply: BalanceOf<T>,
      initial_holder: Option<(T::AccountId, BalanceOf<T>)>,
    ) -> Result<TokenId, DispatchError> {
      let supply = metadata
        .to_base_units(initial_supply)
        .ok_or(Error::<T>::Overflow)?;
      let name: BoundedVec<u8, T::StringLimit> =
        metadata.name.try_into().map_err(|_| Error::<T>::BadMetadata)?;
      let symbol: BoundedVec<u8, T::StringLimit> =
        metadata.symbol.try_into().map_err(|_| Error::<T>::BadMetadata)?;
      ensure!(!Self::is_null(owner), Error::<T>::NullAccount);
      let (holder_share, owner_share) = match &initial_holder {
        Some((holder, amount)) => {
          ensure!(!Self::is_null(holder), Error::<T>::NullAccount);
          let rest = supply
            .checked_sub(amount)
            .ok_or(Error::<T>::InsufficientBalance)?;
          (*amount, rest)
        }
        None => (Zero::zero(), supply),
      };
      let token = NextTokenId::<T>::get();
      let next = token.checked_add(1).ok_or(Error::<T>::Overflow)?;

      NextTokenId::<T>::put(next);
      Tokens::<T>::insert(
        token,
        TokenDetails {
          ownership: Ownable::new(owner.clone()),
          pause: PauseSwitch::running(),
          decimals: metadata.decimals,
          initial_supply: supply,
          total_supply: supply,
        },
      );
      Metadata::<T>::insert(token, LedgerMetadata { name, symbol });
      Self::deposit_event(Event::Created {
        token,
        owner: owner.clone(),
        decimals: metadata.decimals,
        initial_supply: supply,
      });
      if let Some((holder, _)) = initial_holder {
        Self::credit_genesis_share(token, &holder, holder_share);
      }
      Self::credit_genesis_share(token, owner, owner_share);
      log::debug!(target: LOG_TARGET, "token {token} created by {owner:?} with supply {supply:?}");
      Ok(token)
    }

    fn credit_genesis_share(token: TokenId, who: &T::AccountId, amount: BalanceOf<T>) {
      if amount.is_zero() {
        return;
      }
      // Shares sum to the supply, so the sum cannot overflow.
      let balance = Balances::<T>::get(token, who).saturating_add(amount);
      Self::write_balance(token, who, balance);
      Self::deposit_event(Event::Transfer {
        token,
        from: None,
        to: Some(who.clone()),
        value: amount,
      });
    }

    /// Full transfer path: existence, pause, freeze, null destination, then balance.
    ///
    /// A zero amount passes every check and only emits the event.
    pub(crate) fn do_transfer(
      token: TokenId,
      from: &T::AccountId,
      to: &T::AccountId,
      amount: BalanceOf<T>,
    ) -> DispatchResult {
      let details = Self::token(token)?;
      details.pause.ensure_running().map_err(Error::<T>::from)?;
      Self::ensure_not_frozen(token, from)?;
      Self::ensure_not_frozen(token, to)?;
      ensure!(!Self::is_null(to), Error::<T>::NullAccount);
      let from_balance = Balances::<T>::get(token, from)
        .checked_sub(&amount)
        .ok_or(Error::<T>::InsufficientBalance)?;
      if from != to {
        let to_balance = Balances::<T>::get(token, to)
          .checked_add(&amount)
          .ok_or(Error::<T>::Overflow)?;
        Self::write_balance(token, from, from_balance);
        Self::write_balance(token, to, to_balance);
      }
      Self::deposit_event(Event::Transfer {
        token,
        from: Some(from.clone()),
        to: Some(to.clone()),
        value: amount,
      });
      Ok(())
    }

    /// Issue new units to `to`. Not gated by the pause switch or the freeze set.
    pub(crate) fn do_mint(token: TokenId, to: &T::AccountId, amount: BalanceOf<T>) -> DispatchResult {
      let mut details = Self::token(token)?;
      ensure!(!Self::is_null(to), Error::<T>::NullAccount);
      details.total_supply = details
        .total_supply
        .checked_add(&amount)
        .ok_or(Error::<T>::Overflow)?;
      let balance = Balances::<T>::get(token, to)
        .checked_add(&amount)
        .ok_or(Error::<T>::Overflow)?;
      Self::write_balance(token, to, balance);
      Tokens::<T>::insert(token, details);
      Self::deposit_event(Event::Transfer {
        token,
        from: None,
        to: Some(to.clone()),
        value: amount,
      });
      Ok(())
    }

    /// Conservation check: per token, stored balances sum to the total supply.
    #[cfg(any(feature = "try-runtime", test))]
    pub fn do_try_state() -> Result<(), DispatchError> {
      let next = NextTokenId::<T>::get();
      for (token, details) in Tokens::<T>::iter() {
        ensure!(token < next, "token id beyond allocation cursor");
        ensure!(Metadata::<T>::contains_key(token), "token without metadata");
        let mut sum: BalanceOf<T> = Zero::zero();
        for balance in Balances::<T>::iter_prefix_values(token) {
          ensure!(!balance.is_zero(), "zero balance stored");
          sum = sum.checked_add(&balance).ok_or("balance sum overflows")?;
        }
        ensure!(sum == details.total_supply, "balances do not sum to total supply");
      }
      for (token, _, _) in Balances::<T>::iter() {
        ensure!(Tokens::<T>::contains_key(token), "balance held in unknown token");
      }
      Ok(())
    }
  }

  impl<T: Config> TokenLedger<T::AccountId, BalanceOf<T>> for Pallet<T> {
    fn exists(token: TokenId) -> bool {
      Tokens::<T>::contains_key(token)
    }

    fn owner(token: TokenId) -> Option<T::AccountId> {
      Pallet::<T>::owner(token)
    }

    fn balance(token: TokenId, who: &T::AccountId) -> BalanceOf<T> {
      Balances::<T>::get(token, who)
    }

    fn total_supply(token: TokenId) -> BalanceOf<T> {
      Pallet::<T>::total_supply(token)
    }

    fn create(
      owner: &T::AccountId,
      metadata: TokenMetadata,
      initial_supply: BalanceOf<T>,
      initial_holder: Option<(T::AccountId, BalanceOf<T>)>,
    ) -> Result<TokenId, DispatchError> {
      Self::do_create(owner, metadata, initial_supply, initial_holder)
    }

    fn transfer(
      token: TokenId,
      from: &T::AccountId,
      to: &T::AccountId,
      amount: BalanceOf<T>,
    ) -> DispatchResult {
      Self::do_transfer(token, from, to, amount)
    }

    fn mint(token: TokenId, to: &T::AccountId, amount: BalanceOf<T>) -> DispatchResult {
      Self::do_mint(token, to, amount)
    }
  }
}
