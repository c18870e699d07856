//! Reward Disburser Pallet
//!
//! Each reward engine holds a balance of one ledger token (its tokenizer) in a
//! deterministic engine account and pays beneficiaries an amount computed by
//! the runtime-provided [`RewardFormula`]. An owner can hand the whole holding
//! to a successor engine in a single ledger transfer.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub use pallet::*;

pub mod formula;
pub use formula::{AnyCaller, DisburseGate, LinearMultiplier, OwnerOnly, RewardFormula};

pub mod weights;
pub use weights::WeightInfo;

#[cfg(test)]
mod mock;
#[cfg(test)]
mod tests;

#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;

pub const LOG_TARGET: &str = "runtime::reward-disburser";

#[frame::pallet]
pub mod pallet {
  use super::{DisburseGate, LOG_TARGET, RewardFormula, WeightInfo};
  use alloc::vec::Vec;
  use frame::prelude::*;
  use polkadot_sdk::{
    frame_support::PalletId,
    sp_runtime::traits::{AccountIdConversion, TrailingZeroInput},
  };
  use primitives::{AccessError, EngineId, Ownable, PauseSwitch, TokenId, TokenLedger};

  #[derive(
    Clone, Debug, Decode, DecodeWithMemTracking, Encode, Eq, PartialEq, TypeInfo, MaxEncodedLen,
  )]
  pub struct RewardEngine<AccountId, Balance> {
    pub ownership: Ownable<AccountId>,
    /// Ledger token the engine pays out.
    pub tokenizer: TokenId,
    /// Smallest base accepted by `disburse`.
    pub min_base: Balance,
    pub pause: PauseSwitch,
    /// Account holding the engine's balance.
    pub account: AccountId,
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

    type Ledger: TokenLedger<Self::AccountId, Self::Balance>;

    /// Payout computation shared by `disburse` and `estimate_reward`.
    type RewardFormula: RewardFormula<Self::AccountId, Self::Balance>;

    /// Who may call `disburse`.
    type DisburseGate: DisburseGate<Self::AccountId>;

    /// Seed for engine accounts.
    #[pallet::constant]
    type PalletId: Get<PalletId>;

    /// Threshold given to freshly created engines.
    #[pallet::constant]
    type DefaultMinBase: Get<Self::Balance>;

    /// Reported by `version()`.
    #[pallet::constant]
    type Version: Get<u32>;

    type WeightInfo: WeightInfo;
  }

  pub type BalanceOf<T> = <T as Config>::Balance;
  pub type RewardEngineOf<T> = RewardEngine<<T as frame_system::Config>::AccountId, BalanceOf<T>>;

  #[pallet::pallet]
  pub struct Pallet<T>(_);

  #[pallet::storage]
  #[pallet::getter(fn next_engine_id)]
  pub type NextEngineId<T> = StorageValue<_, EngineId, ValueQuery>;

  #[pallet::storage]
  pub type Engines<T: Config> = StorageMap<_, Blake2_128Concat, EngineId, RewardEngineOf<T>, OptionQuery>;

  /// Reverse index of engine accounts, guards against derivation collisions.
  #[pallet::storage]
  pub type EngineAccounts<T: Config> =
    StorageMap<_, Blake2_128Concat, T::AccountId, EngineId, OptionQuery>;

  #[pallet::genesis_config]
  #[derive(frame::prelude::DefaultNoBound)]
  pub struct GenesisConfig<T: Config> {
    /// `(owner, tokenizer, min base)`, ids assigned in order.
    pub engines: Vec<(T::AccountId, TokenId, BalanceOf<T>)>,
  }

  #[pallet::genesis_build]
  impl<T: Config> BuildGenesisConfig for GenesisConfig<T> {
    fn build(&self) {
      for (owner, tokenizer, min_base) in &self.engines {
        let engine =
          Pallet::<T>::do_create_engine(owner, *tokenizer).expect("genesis engine must be valid");
        Engines::<T>::mutate(engine, |maybe| {
          if let Some(record) = maybe {
            record.min_base = *min_base;
          }
        });
      }
    }
  }

  #[pallet::event]
  #[pallet::generate_deposit(pub(super) fn deposit_event)]
  pub enum Event<T: Config> {
    EngineCreated {
      engine: EngineId,
      owner: T::AccountId,
      tokenizer: TokenId,
      account: T::AccountId,
    },
    TokenizerChanged {
      engine: EngineId,
      tokenizer: TokenId,
    },
    MinBaseUpdated {
      engine: EngineId,
      min_base: BalanceOf<T>,
    },
    Disburse {
      engine: EngineId,
      to: T::AccountId,
      amount: BalanceOf<T>,
    },
    /// The whole holding moved to `successor`.
    Upgraded {
      engine: EngineId,
      successor: EngineId,
      amount: BalanceOf<T>,
    },
    Pause {
      engine: EngineId,
    },
    Unpause {
      engine: EngineId,
    },
    OwnershipTransferred {
      engine: EngineId,
      previous_owner: T::AccountId,
      new_owner: T::AccountId,
    },
  }

  #[pallet::error]
  pub enum Error<T> {
    NotOwner,
    /// The engine is paused.
    Suspended,
    NotSuspended,
    /// `base` is below the engine's `min_base`.
    BelowMinBase,
    /// The successor is the engine itself.
    InvalidSuccessor,
    /// The formula has no defined payout for this base.
    Overflow,
    UnknownEngine,
    UnknownToken,
    /// The null identity cannot own an engine.
    NullAccount,
    EngineIdOverflow,
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
    /// Create an engine paying out `tokenizer`, owned by the caller.
    #[pallet::call_index(0)]
    #[pallet::weight(T::WeightInfo::create_engine())]
    pub fn create_engine(origin: OriginFor<T>, tokenizer: TokenId) -> DispatchResult {
      let who = ensure_signed(origin)?;
      Self::do_create_engine(&who, tokenizer)?;
      Ok(())
    }

    /// Point the engine at another token. Balances are not moved.
    #[pallet::call_index(1)]
    #[pallet::weight(T::WeightInfo::change_tokenizer())]
    pub fn change_tokenizer(
      origin: OriginFor<T>,
      engine: EngineId,
      tokenizer: TokenId,
    ) -> DispatchResult {
      let who = ensure_signed(origin)?;
      Engines::<T>::try_mutate(engine, |maybe| -> DispatchResult {
        let record = maybe.as_mut().ok_or(Error::<T>::UnknownEngine)?;
        record.ownership.ensure_owner(&who).map_err(Error::<T>::from)?;
        ensure!(T::Ledger::exists(tokenizer), Error::<T>::UnknownToken);
        record.tokenizer = tokenizer;
        Ok(())
      })?;
      log::debug!(target: LOG_TARGET, "engine {engine} now pays token {tokenizer}");
      Self::deposit_event(Event::TokenizerChanged { engine, tokenizer });
      Ok(())
    }

    #[pallet::call_index(2)]
    #[pallet::weight(T::WeightInfo::set_min_base())]
    pub fn set_min_base(
      origin: OriginFor<T>,
      engine: EngineId,
      min_base: BalanceOf<T>,
    ) -> DispatchResult {
      let who = ensure_signed(origin)?;
      Engines::<T>::try_mutate(engine, |maybe| -> DispatchResult {
        let record = maybe.as_mut().ok_or(Error::<T>::UnknownEngine)?;
        record.ownership.ensure_owner(&who).map_err(Error::<T>::from)?;
        record.min_base = min_base;
        Ok(())
      })?;
      Self::deposit_event(Event::MinBaseUpdated { engine, min_base });
      Ok(())
    }

    /// Pay `RewardFormula::payout(beneficiary, base)` from the engine's holding.
    #[pallet::call_index(3)]
    #[pallet::weight(T::WeightInfo::disburse())]
    pub fn disburse(
      origin: OriginFor<T>,
      engine: EngineId,
      beneficiary: T::AccountId,
      base: BalanceOf<T>,
    ) -> DispatchResult {
      let who = ensure_signed(origin)?;
      let record = Self::engine(engine)?;
      ensure!(
        T::DisburseGate::allows(engine, record.ownership.owner(), &who),
        Error::<T>::NotOwner
      );
      record.pause.ensure_running().map_err(Error::<T>::from)?;
      ensure!(base >= record.min_base, Error::<T>::BelowMinBase);
      let amount = T::RewardFormula::payout(&beneficiary, base).ok_or(Error::<T>::Overflow)?;
      T::Ledger::transfer(record.tokenizer, &record.account, &beneficiary, amount)?;
      Self::deposit_event(Event::Disburse {
        engine,
        to: beneficiary,
        amount,
      });
      Ok(())
    }

    /// Move the engine's entire balance of its tokenizer to `successor`'s account.
    #[pallet::call_index(4)]
    #[pallet::weight(T::WeightInfo::upgrade())]
    pub fn upgrade(origin: OriginFor<T>, engine: EngineId, successor: EngineId) -> DispatchResult {
      let who = ensure_signed(origin)?;
      let record = Self::engine(engine)?;
      record.ownership.ensure_owner(&who).map_err(Error::<T>::from)?;
      record.pause.ensure_running().map_err(Error::<T>::from)?;
      ensure!(successor != engine, Error::<T>::InvalidSuccessor);
      let next = Self::engine(successor)?;
      let amount = T::Ledger::balance(record.tokenizer, &record.account);
      T::Ledger::transfer(record.tokenizer, &record.account, &next.account, amount)?;
      log::info!(
        target: LOG_TARGET,
        "engine {engine} upgraded to {successor}, moved {amount:?} of token {}",
        record.tokenizer
      );
      Self::deposit_event(Event::Upgraded {
        engine,
        successor,
        amount,
      });
      Ok(())
    }

    #[pallet::call_index(5)]
    #[pallet::weight(T::WeightInfo::pause())]
    pub fn pause(origin: OriginFor<T>, engine: EngineId) -> DispatchResult {
      let who = ensure_signed(origin)?;
      Engines::<T>::try_mutate(engine, |maybe| -> DispatchResult {
        let record = maybe.as_mut().ok_or(Error::<T>::UnknownEngine)?;
        record.ownership.ensure_owner(&who).map_err(Error::<T>::from)?;
        record.pause.engage().map_err(Error::<T>::from)?;
        Ok(())
      })?;
      log::debug!(target: LOG_TARGET, "engine {engine} paused");
      Self::deposit_event(Event::Pause { engine });
      Ok(())
    }

    #[pallet::call_index(6)]
    #[pallet::weight(T::WeightInfo::unpause())]
    pub fn unpause(origin: OriginFor<T>, engine: EngineId) -> DispatchResult {
      let who = ensure_signed(origin)?;
      Engines::<T>::try_mutate(engine, |maybe| -> DispatchResult {
        let record = maybe.as_mut().ok_or(Error::<T>::UnknownEngine)?;
        record.ownership.ensure_owner(&who).map_err(Error::<T>::from)?;
        record.pause.disengage().map_err(Error::<T>::from)?;
        Ok(())
      })?;
      log::debug!(target: LOG_TARGET, "engine {engine} unpaused");
      Self::deposit_event(Event::Unpause { engine });
      Ok(())
    }

    #[pallet::call_index(7)]
    #[pallet::weight(T::WeightInfo::transfer_ownership())]
    pub fn transfer_ownership(
      origin: OriginFor<T>,
      engine: EngineId,
      new_owner: T::AccountId,
    ) -> DispatchResult {
      let who = ensure_signed(origin)?;
      ensure!(!Self::is_null(&new_owner), Error::<T>::NullAccount);
      let previous_owner = Engines::<T>::try_mutate(engine, |maybe| -> Result<_, DispatchError> {
        let record = maybe.as_mut().ok_or(Error::<T>::UnknownEngine)?;
        let previous = record
          .ownership
          .transfer(&who, new_owner.clone())
          .map_err(Error::<T>::from)?;
        Ok(previous)
      })?;
      log::debug!(target: LOG_TARGET, "engine {engine} owner {previous_owner:?} -> {new_owner:?}");
      Self::deposit_event(Event::OwnershipTransferred {
        engine,
        previous_owner,
        new_owner,
      });
      Ok(())
    }
  }

  impl<T: Config> Pallet<T> {
    /// Payout `disburse` would make right now, ignoring the pause switch and the
    /// engine's balance. `None` for unknown engines, bases below the threshold
    /// and undefined payouts.
    pub fn estimate_reward(
      engine: EngineId,
      beneficiary: &T::AccountId,
      base: BalanceOf<T>,
    ) -> Option<BalanceOf<T>> {
      let record = Engines::<T>::get(engine)?;
      if base < record.min_base {
        return None;
      }
      T::RewardFormula::payout(beneficiary, base)
    }

    pub fn tokenizer(engine: EngineId) -> Option<TokenId> {
      Engines::<T>::get(engine).map(|record| record.tokenizer)
    }

    pub fn min_base(engine: EngineId) -> Option<BalanceOf<T>> {
      Engines::<T>::get(engine).map(|record| record.min_base)
    }

    pub fn owner(engine: EngineId) -> Option<T::AccountId> {
      Engines::<T>::get(engine).map(|record| record.ownership.owner().clone())
    }

    pub fn is_paused(engine: EngineId) -> bool {
      Engines::<T>::get(engine).is_some_and(|record| record.pause.is_engaged())
    }

    pub fn engine_account(engine: EngineId) -> Option<T::AccountId> {
      Engines::<T>::get(engine).map(|record| record.account)
    }

    /// Balance the engine holds of its current tokenizer.
    pub fn engine_balance(engine: EngineId) -> BalanceOf<T> {
      Engines::<T>::get(engine)
        .map(|record| T::Ledger::balance(record.tokenizer, &record.account))
        .unwrap_or_default()
    }

    pub fn version() -> u32 {
      <T as Config>::Version::get()
    }

    /// Deterministic account of `engine`.
    pub fn engine_account_id(engine: EngineId) -> T::AccountId {
      let mut seed_input = T::PalletId::get().0.to_vec();
      seed_input.extend_from_slice(b"engine");
      seed_input.extend_from_slice(&engine.to_le_bytes());
      let seed = frame::hashing::blake2_256(&seed_input);
      // Spread the seed over the pallet id so short account types still differ per engine.
      let mut id_bytes = T::PalletId::get().0;
      for (i, b) in seed.iter().enumerate() {
        id_bytes[i % 8] ^= b;
      }
      PalletId(id_bytes).into_sub_account_truncating(engine)
    }

    fn is_null(who: &T::AccountId) -> bool {
      T::AccountId::decode(&mut TrailingZeroInput::zeroes()).is_ok_and(|null| &null == who)
    }

    fn engine(engine: EngineId) -> Result<RewardEngineOf<T>, Error<T>> {
      Engines::<T>::get(engine).ok_or(Error::<T>::UnknownEngine)
    }

    pub(crate) fn do_create_engine(
      owner: &T::AccountId,
      tokenizer: TokenId,
    ) -> Result<EngineId, DispatchError> {
      ensure!(T::Ledger::exists(tokenizer), Error::<T>::UnknownToken);
      // Ids whose derived account is already taken are skipped.
      let mut engine = NextEngineId::<T>::get();
      let mut account = Self::engine_account_id(engine);
      while EngineAccounts::<T>::contains_key(&account) {
        log::warn!(target: LOG_TARGET, "engine {engine} account collides, skipping id");
        engine = engine.checked_add(1).ok_or(Error::<T>::EngineIdOverflow)?;
        account = Self::engine_account_id(engine);
      }
      let next = engine.checked_add(1).ok_or(Error::<T>::EngineIdOverflow)?;

      NextEngineId::<T>::put(next);
      EngineAccounts::<T>::insert(&account, engine);
      Engines::<T>::insert(
        engine,
        RewardEngine {
          ownership: Ownable::new(owner.clone()),
          tokenizer,
          min_base: T::DefaultMinBase::get(),
          pause: PauseSwitch::running(),
          account: account.clone(),
        },
      );
      log::debug!(target: LOG_TARGET, "engine {engine} created for token {tokenizer}");
      Self::deposit_event(Event::EngineCreated {
        engine,
        owner: owner.clone(),
        tokenizer,
        account,
      });
      Ok(engine)
    }

    #[cfg(any(feature = "try-runtime", test))]
    pub fn do_try_state() -> Result<(), DispatchError> {
      let next = NextEngineId::<T>::get();
      let mut engines: u32 = 0;
      for (engine, record) in Engines::<T>::iter() {
        engines = engines.saturating_add(1);
        ensure!(engine < next, "engine id beyond allocation cursor");
        ensure!(
          record.account == Self::engine_account_id(engine),
          "engine account does not match derivation"
        );
        ensure!(
          EngineAccounts::<T>::get(&record.account) == Some(engine),
          "engine account missing from index"
        );
        ensure!(T::Ledger::exists(record.tokenizer), "engine pays an unknown token");
      }
      ensure!(
        EngineAccounts::<T>::iter().count() as u32 == engines,
        "engine account index out of sync"
      );
      Ok(())
    }
  }
}
