extern crate alloc;

use crate::*;
use alloc::vec;
use frame::prelude::*;
use polkadot_sdk::frame_benchmarking::{account, v2::*};
use polkadot_sdk::frame_system::RawOrigin;
use primitives::TokenId;

fn seed_token<T: Config>(owner: &T::AccountId) -> TokenId {
  Pallet::<T>::do_create(
    owner,
    primitives::TokenMetadata::new(b"Bench Token", b"BNCH", 2),
    1_000_000u32.into(),
    None,
  )
  .expect("benchmark token must be valid")
}

#[benchmarks]
mod benches {
  use super::*;

  #[benchmark]
  fn create() {
    let caller: T::AccountId = whitelisted_caller();
    let holder: T::AccountId = account("holder", 0, 0);
    let token = Pallet::<T>::next_token_id();

    #[extrinsic_call]
    create(
      RawOrigin::Signed(caller.clone()),
      vec![b'n'; T::StringLimit::get() as usize],
      vec![b's'; T::StringLimit::get() as usize],
      2,
      1_000_000u32.into(),
      Some((holder, 1_000u32.into())),
    );

    assert_eq!(Pallet::<T>::owner(token), Some(caller));
  }

  #[benchmark]
  fn transfer() {
    let caller: T::AccountId = whitelisted_caller();
    let to: T::AccountId = account("to", 0, 0);
    let token = seed_token::<T>(&caller);

    #[extrinsic_call]
    transfer(RawOrigin::Signed(caller), token, to.clone(), 1_000u32.into());

    assert_eq!(Pallet::<T>::balance_of(token, &to), 1_000u32.into());
  }

  #[benchmark]
  fn approve() {
    let caller: T::AccountId = whitelisted_caller();
    let spender: T::AccountId = account("spender", 0, 0);
    let token = seed_token::<T>(&caller);

    #[extrinsic_call]
    approve(RawOrigin::Signed(caller.clone()), token, spender.clone(), 1_000u32.into());

    assert_eq!(Pallet::<T>::allowance(token, &caller, &spender), 1_000u32.into());
  }

  #[benchmark]
  fn transfer_from() {
    let owner: T::AccountId = account("owner", 0, 0);
    let caller: T::AccountId = whitelisted_caller();
    let to: T::AccountId = account("to", 0, 0);
    let token = seed_token::<T>(&owner);
    Allowances::<T>::insert((token, &owner, &caller), BalanceOf::<T>::from(2_000u32));

    #[extrinsic_call]
    transfer_from(RawOrigin::Signed(caller.clone()), token, owner.clone(), to.clone(), 1_000u32.into());

    assert_eq!(Pallet::<T>::allowance(token, &owner, &caller), 1_000u32.into());
  }

  #[benchmark]
  fn burn() {
    let caller: T::AccountId = whitelisted_caller();
    let token = seed_token::<T>(&caller);
    let supply = Pallet::<T>::total_supply(token);

    #[extrinsic_call]
    burn(RawOrigin::Signed(caller), token, 1_000u32.into());

    assert_eq!(Pallet::<T>::total_supply(token), supply - BalanceOf::<T>::from(1_000u32));
  }

  #[benchmark]
  fn pause() {
    let caller: T::AccountId = whitelisted_caller();
    let token = seed_token::<T>(&caller);

    #[extrinsic_call]
    pause(RawOrigin::Signed(caller), token);

    assert!(Pallet::<T>::is_paused(token));
  }

  #[benchmark]
  fn unpause() {
    let caller: T::AccountId = whitelisted_caller();
    let token = seed_token::<T>(&caller);
    Tokens::<T>::mutate(token, |maybe| {
      if let Some(details) = maybe {
        let _ = details.pause.engage();
      }
    });

    #[extrinsic_call]
    unpause(RawOrigin::Signed(caller), token);

    assert!(!Pallet::<T>::is_paused(token));
  }

  #[benchmark]
  fn freeze() {
    let caller: T::AccountId = whitelisted_caller();
    let target: T::AccountId = account("target", 0, 0);
    let token = seed_token::<T>(&caller);

    #[extrinsic_call]
    freeze(RawOrigin::Signed(caller), token, target.clone(), true);

    assert!(Pallet::<T>::is_frozen(token, &target));
  }

  #[benchmark]
  fn transfer_ownership() {
    let caller: T::AccountId = whitelisted_caller();
    let new_owner: T::AccountId = account("owner", 0, 1);
    let token = seed_token::<T>(&caller);

    #[extrinsic_call]
    transfer_ownership(RawOrigin::Signed(caller), token, new_owner.clone());

    assert_eq!(Pallet::<T>::owner(token), Some(new_owner));
  }

  impl_benchmark_test_suite!(Pallet, crate::mock::new_test_ext(), crate::mock::Test);
}
