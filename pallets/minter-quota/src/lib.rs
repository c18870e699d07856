//! Minter Quota Pallet
//!
//! Attaches a quota registry to a ledger token. The token owner registers
//! minters, each with an issuance limit; minters issue new units through the
//! ledger until their limit is reached. Minting has its own pause switch,
//! independent of the token's transfer pause.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub use pallet::*;

pub mod weights;
pub use weights::WeightInfo;

#[cfg(test)]
mod mock;

#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;

pub const LOG_TARGET: &str = "runtime::minter-quota";

#[frame::pallet]
pub mod pallet {
  use super::{LOG_TARGET, WeightInfo};
  use alloc::vec::Vec;
  use frame::prelude::*;
  use polkadot_sdk::sp_runtime::traits::{CheckedAdd, Zero};
  use primitives::{AccessError, PauseSwitch, TokenId, TokenLedger, TokenMetadata};

  /// Issuance rights of one minter on one token. `issued <= limit` always holds.
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
  pub struct MinterRecord<Balance> {
    pub limit: Balance,
    pub issued: Balance,
    pub active: bool,
  }

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
  pub struct RegistryState {
    pub minting: PauseSwitch,
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

    /// Ledger hosting the governed tokens.
    type Ledger: TokenLedger<Self::AccountId, Self::Balance>;

    type WeightInfo: WeightInfo;
  }

  pub type BalanceOf<T> = <T as Config>::Balance;
  pub type MinterRecordOf<T> = MinterRecord<BalanceOf<T>>;

  #[pallet::pallet]
  pub struct Pallet<T>(_);

  /// Present only for quota-governed tokens.
  #[pallet::storage]
  pub type Registries<T: Config> = StorageMap<_, Blake2_128Concat, TokenId, RegistryState, OptionQuery>;

  #[pallet::storage]
  pub type Minters<T: Config> = StorageDoubleMap<
    _,
    Blake2_128Concat,
    TokenId,
    Blake2_128Concat,
    T::AccountId,
    MinterRecordOf<T>,
    OptionQuery,
  >;

  #[pallet::genesis_config]
  #[derive(frame::prelude::DefaultNoBound)]
  pub struct GenesisConfig<T: Config> {
    /// `(owner, name, symbol, decimals, initial supply in whole units, owner limit)`.
    pub mintable_tokens: Vec<(T::AccountId, Vec<u8>, Vec<u8>, u8, BalanceOf<T>, BalanceOf<T>)>,
    /// `(token, minter, limit)` registered on top of the owners.
    pub minters: Vec<(TokenId, T::AccountId, BalanceOf<T>)>,
  }

  #[pallet::genesis_build]
  impl<T: Config> BuildGenesisConfig for GenesisConfig<T> {
    fn build(&self) {
      for (owner, name, symbol, decimals, supply, owner_limit) in &self.mintable_tokens {
        Pallet::<T>::do_create_mintable_token(
          owner,
          TokenMetadata::new(name, symbol, *decimals),
          *supply,
          *owner_limit,
        )
        .expect("genesis mintable token must be valid");
      }
      for (token, minter, limit) in &self.minters {
        assert!(
          Registries::<T>::contains_key(token),
          "genesis minter refers to a token without registry"
        );
        assert!(!limit.is_zero(), "genesis minter limit must be positive");
        Minters::<T>::insert(token, minter, MinterRecord {
          limit: *limit,
          issued: Zero::zero(),
          active: true,
        });
      }
    }
  }

  #[pallet::event]
  #[pallet::generate_deposit(pub(super) fn deposit_event)]
  pub enum Event<T: Config> {
    MintableTokenCreated {
      token: TokenId,
      owner: T::AccountId,
    },
    /// A registry was attached to an existing token.
    MintingEnabled {
      token: TokenId,
    },
    MinterRegistered {
      token: TokenId,
      minter: T::AccountId,
      limit: BalanceOf<T>,
    },
    MinterUnregistered {
      token: TokenId,
      minter: T::AccountId,
    },
    MinterActivated {
      token: TokenId,
      minter: T::AccountId,
    },
    MinterDeactivated {
      token: TokenId,
      minter: T::AccountId,
    },
    MintPaused {
      token: TokenId,
    },
    MintResumed {
      token: TokenId,
    },
    Mint {
      token: TokenId,
      to: T::AccountId,
      amount: BalanceOf<T>,
    },
  }

  #[pallet::error]
  pub enum Error<T> {
    NotOwner,
    /// Caller is not a registered, active minter.
    NotMinter,
    MintingSuspended,
    NotSuspended,
    /// The mint would take the minter past its limit.
    QuotaExceeded,
    ZeroAmount,
    /// Limits must be positive.
    InvalidLimit,
    UnknownMinter,
    /// The token has no quota registry.
    NotMintable,
    AlreadyEnabled,
    UnknownToken,
  }

  impl<T: Config> From<AccessError> for Error<T> {
    fn from(err: AccessError) -> Self {
      match err {
        AccessError::NotOwner => Error::NotOwner,
        AccessError::Suspended => Error::MintingSuspended,
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
    /// Create a ledger token governed by a fresh registry. The caller owns both and
    /// is registered as an active minter with `owner_limit`.
    #[pallet::call_index(0)]
    #[pallet::weight(T::WeightInfo::create_mintable_token())]
    pub fn create_mintable_token(
      origin: OriginFor<T>,
      name: Vec<u8>,
      symbol: Vec<u8>,
      decimals: u8,
      initial_supply: BalanceOf<T>,
      owner_limit: BalanceOf<T>,
    ) -> DispatchResult {
      let who = ensure_signed(origin)?;
      Self::do_create_mintable_token(
        &who,
        TokenMetadata::new(&name, &symbol, decimals),
        initial_supply,
        owner_limit,
      )?;
      Ok(())
    }

    /// Attach a registry to a token the caller already owns.
    #[pallet::call_index(1)]
    #[pallet::weight(T::WeightInfo::enable_minting())]
    pub fn enable_minting(origin: OriginFor<T>, token: TokenId) -> DispatchResult {
      let who = ensure_signed(origin)?;
      let owner = T::Ledger::owner(token).ok_or(Error::<T>::UnknownToken)?;
      ensure!(owner == who, Error::<T>::NotOwner);
      ensure!(
        !Registries::<T>::contains_key(token),
        Error::<T>::AlreadyEnabled
      );
      Registries::<T>::insert(token, RegistryState::default());
      log::debug!(target: LOG_TARGET, "minting enabled on token {token}");
      Self::deposit_event(Event::MintingEnabled { token });
      Ok(())
    }

    /// Register or re-register `minter`. An existing record is replaced and its
    /// issued amount reset to zero.
    #[pallet::call_index(2)]
    #[pallet::weight(T::WeightInfo::register_minter())]
    pub fn register_minter(
      origin: OriginFor<T>,
      token: TokenId,
      minter: T::AccountId,
      limit: BalanceOf<T>,
    ) -> DispatchResult {
      let who = ensure_signed(origin)?;
      Self::ensure_registry_owner(token, &who)?;
      ensure!(!limit.is_zero(), Error::<T>::InvalidLimit);
      Self::put_minter(token, &minter, limit);
      Ok(())
    }

    #[pallet::call_index(3)]
    #[pallet::weight(T::WeightInfo::unregister_minter())]
    pub fn unregister_minter(
      origin: OriginFor<T>,
      token: TokenId,
      minter: T::AccountId,
    ) -> DispatchResult {
      let who = ensure_signed(origin)?;
      Self::ensure_registry_owner(token, &who)?;
      ensure!(
        Minters::<T>::contains_key(token, &minter),
        Error::<T>::UnknownMinter
      );
      Minters::<T>::remove(token, &minter);
      log::debug!(target: LOG_TARGET, "token {token}: minter {minter:?} unregistered");
      Self::deposit_event(Event::MinterUnregistered { token, minter });
      Ok(())
    }

    /// Re-enable a minter. Limit and issued amount are kept.
    #[pallet::call_index(4)]
    #[pallet::weight(T::WeightInfo::activate_minter())]
    pub fn activate_minter(
      origin: OriginFor<T>,
      token: TokenId,
      minter: T::AccountId,
    ) -> DispatchResult {
      let who = ensure_signed(origin)?;
      Self::ensure_registry_owner(token, &who)?;
      Self::set_active(token, &minter, true)?;
      Self::deposit_event(Event::MinterActivated { token, minter });
      Ok(())
    }

    /// Suspend a minter. Limit and issued amount are kept.
    #[pallet::call_index(5)]
    #[pallet::weight(T::WeightInfo::deactivate_minter())]
    pub fn deactivate_minter(
      origin: OriginFor<T>,
      token: TokenId,
      minter: T::AccountId,
    ) -> DispatchResult {
      let who = ensure_signed(origin)?;
      Self::ensure_registry_owner(token, &who)?;
      Self::set_active(token, &minter, false)?;
      Self::deposit_event(Event::MinterDeactivated { token, minter });
      Ok(())
    }

    #[pallet::call_index(6)]
    #[pallet::weight(T::WeightInfo::pause_minting())]
    pub fn pause_minting(origin: OriginFor<T>, token: TokenId) -> DispatchResult {
      let who = ensure_signed(origin)?;
      let mut registry = Self::ensure_registry_owner(token, &who)?;
      registry.minting.engage().map_err(Error::<T>::from)?;
      Registries::<T>::insert(token, registry);
      log::debug!(target: LOG_TARGET, "minting paused on token {token}");
      Self::deposit_event(Event::MintPaused { token });
      Ok(())
    }

    #[pallet::call_index(7)]
    #[pallet::weight(T::WeightInfo::resume_minting())]
    pub fn resume_minting(origin: OriginFor<T>, token: TokenId) -> DispatchResult {
      let who = ensure_signed(origin)?;
      let mut registry = Self::ensure_registry_owner(token, &who)?;
      registry.minting.disengage().map_err(Error::<T>::from)?;
      Registries::<T>::insert(token, registry);
      log::debug!(target: LOG_TARGET, "minting resumed on token {token}");
      Self::deposit_event(Event::MintResumed { token });
      Ok(())
    }

    /// Issue `amount` new units to `to`, charged against the caller's quota.
    #[pallet::call_index(8)]
    #[pallet::weight(T::WeightInfo::mint())]
    pub fn mint(
      origin: OriginFor<T>,
      token: TokenId,
      to: T::AccountId,
      amount: BalanceOf<T>,
    ) -> DispatchResult {
      let who = ensure_signed(origin)?;
      let registry = Registries::<T>::get(token).ok_or(Error::<T>::NotMintable)?;
      registry.minting.ensure_running().map_err(Error::<T>::from)?;
      let mut record = Minters::<T>::get(token, &who)
        .filter(|record| record.active)
        .ok_or(Error::<T>::NotMinter)?;
      ensure!(!amount.is_zero(), Error::<T>::ZeroAmount);
      let limit = record.limit;
      record.issued = record
        .issued
        .checked_add(&amount)
        .filter(|issued| *issued <= limit)
        .ok_or(Error::<T>::QuotaExceeded)?;
      T::Ledger::mint(token, &to, amount)?;
      Minters::<T>::insert(token, &who, record);
      Self::deposit_event(Event::Mint { token, to, amount });
      Ok(())
    }
  }

  impl<T: Config> Pallet<T> {
    /// `(limit, issued, active)`; `(0, 0, false)` for accounts without a record.
    pub fn minter_status(token: TokenId, who: &T::AccountId) -> (BalanceOf<T>, BalanceOf<T>, bool) {
      let record = Minters::<T>::get(token, who).unwrap_or_default();
      (record.limit, record.issued, record.active)
    }

    pub fn is_minting_paused(token: TokenId) -> bool {
      Registries::<T>::get(token).is_some_and(|registry| registry.minting.is_engaged())
    }

    pub fn is_mintable(token: TokenId) -> bool {
      Registries::<T>::contains_key(token)
    }

    /// Registry of `token`, provided `who` currently owns the token.
    fn ensure_registry_owner(token: TokenId, who: &T::AccountId) -> Result<RegistryState, Error<T>> {
      let registry = Registries::<T>::get(token).ok_or(Error::<T>::NotMintable)?;
      ensure!(
        T::Ledger::owner(token).as_ref() == Some(who),
        Error::<T>::NotOwner
      );
      Ok(registry)
    }

    pub(crate) fn put_minter(token: TokenId, minter: &T::AccountId, limit: BalanceOf<T>) {
      Minters::<T>::insert(token, minter, MinterRecord {
        limit,
        issued: Zero::zero(),
        active: true,
      });
      log::debug!(target: LOG_TARGET, "token {token}: minter {minter:?} registered with limit {limit:?}");
      Self::deposit_event(Event::MinterRegistered {
        token,
        minter: minter.clone(),
        limit,
      });
    }

    fn set_active(token: TokenId, minter: &T::AccountId, active: bool) -> Result<(), Error<T>> {
      Minters::<T>::try_mutate(token, minter, |maybe| -> Result<(), Error<T>> {
        let record = maybe.as_mut().ok_or(Error::<T>::UnknownMinter)?;
        record.active = active;
        Ok(())
      })
    }

    pub(crate) fn do_create_mintable_token(
      owner: &T::AccountId,
      metadata: TokenMetadata,
      initial_supply: BalanceOf<T>,
      owner_limit: BalanceOf<T>,
    ) -> Result<TokenId, DispatchError> {
      ensure!(!owner_limit.is_zero(), Error::<T>::InvalidLimit);
      let token = T::Ledger::create(owner, metadata, initial_supply, None)?;
      Registries::<T>::insert(token, RegistryState::default());
      Self::deposit_event(Event::MintableTokenCreated {
        token,
        owner: owner.clone(),
      });
      Self::put_minter(token, owner, owner_limit);
      Ok(token)
    }

    #[cfg(any(feature = "try-runtime", test))]
    pub fn do_try_state() -> Result<(), DispatchError> {
      for (token, _) in Registries::<T>::iter() {
        ensure!(T::Ledger::exists(token), "registry attached to unknown token");
      }
      for (token, _, record) in Minters::<T>::iter() {
        ensure!(Registries::<T>::contains_key(token), "minter without registry");
        ensure!(!record.limit.is_zero(), "minter with zero limit");
        ensure!(record.issued <= record.limit, "minter issued beyond limit");
      }
      Ok(())
    }
  }
}
