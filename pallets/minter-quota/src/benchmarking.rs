extern crate alloc;

use crate::*;
use alloc::vec;
use polkadot_sdk::frame_benchmarking::{account, v2::*};
use polkadot_sdk::frame_system::RawOrigin;
use primitives::{TokenId, TokenLedger, TokenMetadata};

fn seed_registry<T: Config>(owner: &T::AccountId) -> TokenId {
  Pallet::<T>::do_create_mintable_token(
    owner,
    TokenMetadata::new(b"Bench Quota", b"BQ", 2),
    1_000u32.into(),
    1_000_000u32.into(),
  )
  .expect("benchmark registry must be valid")
}

#[benchmarks]
mod benches {
  use super::*;

  #[benchmark]
  fn create_mintable_token() {
    let caller: T::AccountId = whitelisted_caller();

    #[extrinsic_call]
    create_mintable_token(
      RawOrigin::Signed(caller.clone()),
      vec![b'n'; 16],
      vec![b's'; 8],
      2,
      1_000u32.into(),
      1_000u32.into(),
    );

    assert!(Minters::<T>::iter().any(|(_, who, _)| who == caller));
  }

  #[benchmark]
  fn enable_minting() {
    let caller: T::AccountId = whitelisted_caller();
    let token = T::Ledger::create(
      &caller,
      TokenMetadata::new(b"Plain", b"PLN", 0),
      10u32.into(),
      None,
    )
    .expect("benchmark token must be valid");

    #[extrinsic_call]
    enable_minting(RawOrigin::Signed(caller), token);

    assert!(Pallet::<T>::is_mintable(token));
  }

  #[benchmark]
  fn register_minter() {
    let caller: T::AccountId = whitelisted_caller();
    let minter: T::AccountId = account("minter", 0, 0);
    let token = seed_registry::<T>(&caller);

    #[extrinsic_call]
    register_minter(RawOrigin::Signed(caller), token, minter.clone(), 500u32.into());

    assert!(Minters::<T>::contains_key(token, &minter));
  }

  #[benchmark]
  fn unregister_minter() {
    let caller: T::AccountId = whitelisted_caller();
    let minter: T::AccountId = account("minter", 0, 0);
    let token = seed_registry::<T>(&caller);
    Pallet::<T>::put_minter(token, &minter, 500u32.into());

    #[extrinsic_call]
    unregister_minter(RawOrigin::Signed(caller), token, minter.clone());

    assert!(!Minters::<T>::contains_key(token, &minter));
  }

  #[benchmark]
  fn activate_minter() {
    let caller: T::AccountId = whitelisted_caller();
    let minter: T::AccountId = account("minter", 0, 0);
    let token = seed_registry::<T>(&caller);
    Pallet::<T>::put_minter(token, &minter, 500u32.into());

    #[extrinsic_call]
    activate_minter(RawOrigin::Signed(caller), token, minter.clone());

    assert!(Pallet::<T>::minter_status(token, &minter).2);
  }

  #[benchmark]
  fn deactivate_minter() {
    let caller: T::AccountId = whitelisted_caller();
    let minter: T::AccountId = account("minter", 0, 0);
    let token = seed_registry::<T>(&caller);
    Pallet::<T>::put_minter(token, &minter, 500u32.into());

    #[extrinsic_call]
    deactivate_minter(RawOrigin::Signed(caller), token, minter.clone());

    assert!(!Pallet::<T>::minter_status(token, &minter).2);
  }

  #[benchmark]
  fn pause_minting() {
    let caller: T::AccountId = whitelisted_caller();
    let token = seed_registry::<T>(&caller);

    #[extrinsic_call]
    pause_minting(RawOrigin::Signed(caller), token);

    assert!(Pallet::<T>::is_minting_paused(token));
  }

  #[benchmark]
  fn resume_minting() {
    let caller: T::AccountId = whitelisted_caller();
    let token = seed_registry::<T>(&caller);
    Registries::<T>::mutate(token, |maybe| {
      if let Some(registry) = maybe {
        let _ = registry.minting.engage();
      }
    });

    #[extrinsic_call]
    resume_minting(RawOrigin::Signed(caller), token);

    assert!(!Pallet::<T>::is_minting_paused(token));
  }

  #[benchmark]
  fn mint() {
    let caller: T::AccountId = whitelisted_caller();
    let to: T::AccountId = account("to", 0, 0);
    let token = seed_registry::<T>(&caller);

    #[extrinsic_call]
    mint(RawOrigin::Signed(caller.clone()), token, to.clone(), 100u32.into());

    assert_eq!(T::Ledger::balance(token, &to), 100u32.into());
  }

  impl_benchmark_test_suite!(Pallet, crate::mock::new_test_ext(), crate::mock::Test);
}
