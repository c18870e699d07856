use crate::*;
use polkadot_sdk::frame_benchmarking::{account, v2::*};
use polkadot_sdk::frame_support::traits::Get;
use polkadot_sdk::frame_system::RawOrigin;
use primitives::{EngineId, TokenId, TokenLedger, TokenMetadata};

fn seed_token<T: Config>(owner: &T::AccountId) -> TokenId {
  T::Ledger::create(
    owner,
    TokenMetadata::new(b"Bench Reward", b"BRW", 0),
    1_000_000u32.into(),
    None,
  )
  .expect("benchmark token must be valid")
}

/// Engine owned by `owner` holding 100_000 units of a fresh token.
fn funded_engine<T: Config>(owner: &T::AccountId) -> (TokenId, EngineId) {
  let token = seed_token::<T>(owner);
  let engine = Pallet::<T>::do_create_engine(owner, token).expect("benchmark engine must be valid");
  let account = Pallet::<T>::engine_account_id(engine);
  T::Ledger::transfer(token, owner, &account, 100_000u32.into()).expect("owner holds the supply");
  (token, engine)
}

#[benchmarks]
mod benches {
  use super::*;

  #[benchmark]
  fn create_engine() {
    let caller: T::AccountId = whitelisted_caller();
    let token = seed_token::<T>(&caller);
    let engine = Pallet::<T>::next_engine_id();

    #[extrinsic_call]
    create_engine(RawOrigin::Signed(caller.clone()), token);

    assert_eq!(Pallet::<T>::owner(engine), Some(caller));
  }

  #[benchmark]
  fn change_tokenizer() {
    let caller: T::AccountId = whitelisted_caller();
    let (_, engine) = funded_engine::<T>(&caller);
    let other = seed_token::<T>(&caller);

    #[extrinsic_call]
    change_tokenizer(RawOrigin::Signed(caller), engine, other);

    assert_eq!(Pallet::<T>::tokenizer(engine), Some(other));
  }

  #[benchmark]
  fn set_min_base() {
    let caller: T::AccountId = whitelisted_caller();
    let (_, engine) = funded_engine::<T>(&caller);

    #[extrinsic_call]
    set_min_base(RawOrigin::Signed(caller), engine, 1u32.into());

    assert_eq!(Pallet::<T>::min_base(engine), Some(1u32.into()));
  }

  #[benchmark]
  fn disburse() {
    let caller: T::AccountId = whitelisted_caller();
    let beneficiary: T::AccountId = account("beneficiary", 0, 0);
    let (token, engine) = funded_engine::<T>(&caller);
    let base = T::DefaultMinBase::get();
    let expected = Pallet::<T>::estimate_reward(engine, &beneficiary, base)
      .expect("default threshold has a payout");

    #[extrinsic_call]
    disburse(RawOrigin::Signed(caller), engine, beneficiary.clone(), base);

    assert_eq!(T::Ledger::balance(token, &beneficiary), expected);
  }

  #[benchmark]
  fn upgrade() {
    let caller: T::AccountId = whitelisted_caller();
    let (token, engine) = funded_engine::<T>(&caller);
    let successor = Pallet::<T>::do_create_engine(&caller, token).expect("successor must be valid");

    #[extrinsic_call]
    upgrade(RawOrigin::Signed(caller), engine, successor);

    assert_eq!(Pallet::<T>::engine_balance(engine), 0u32.into());
    assert_eq!(Pallet::<T>::engine_balance(successor), 100_000u32.into());
  }

  #[benchmark]
  fn pause() {
    let caller: T::AccountId = whitelisted_caller();
    let (_, engine) = funded_engine::<T>(&caller);

    #[extrinsic_call]
    pause(RawOrigin::Signed(caller), engine);

    assert!(Pallet::<T>::is_paused(engine));
  }

  #[benchmark]
  fn unpause() {
    let caller: T::AccountId = whitelisted_caller();
    let (_, engine) = funded_engine::<T>(&caller);
    Engines::<T>::mutate(engine, |maybe| {
      if let Some(record) = maybe {
        let _ = record.pause.engage();
      }
    });

    #[extrinsic_call]
    unpause(RawOrigin::Signed(caller), engine);

    assert!(!Pallet::<T>::is_paused(engine));
  }

  #[benchmark]
  fn transfer_ownership() {
    let caller: T::AccountId = whitelisted_caller();
    let new_owner: T::AccountId = account("owner", 0, 0);
    let (_, engine) = funded_engine::<T>(&caller);

    #[extrinsic_call]
    transfer_ownership(RawOrigin::Signed(caller), engine, new_owner.clone());

    assert_eq!(Pallet::<T>::owner(engine), Some(new_owner));
  }

  impl_benchmark_test_suite!(Pallet, crate::mock::new_test_ext(), crate::mock::Test);
}
