#![cfg_attr(rustfmt, rustfmt_skip)]
#![allow(unused_parens)]
#![allow(unused_imports)]
#![allow(missing_docs)]

use core::marker::PhantomData;
use polkadot_sdk::frame_support::{
  traits::Get,
  weights::{constants::RocksDbWeight, Weight},
};

pub trait WeightInfo {
  fn create_mintable_token() -> Weight;
  fn enable_minting() -> Weight;
  fn register_minter() -> Weight;
  fn unregister_minter() -> Weight;
  fn activate_minter() -> Weight;
  fn deactivate_minter() -> Weight;
  fn pause_minting() -> Weight;
  fn resume_minting() -> Weight;
  fn mint() -> Weight;
}

pub struct SubstrateWeight<T>(PhantomData<T>);
impl<T: polkadot_sdk::frame_system::Config> WeightInfo for SubstrateWeight<T> {
  fn create_mintable_token() -> Weight {
    Weight::from_parts(45_000_000, 3500)
      .saturating_add(T::DbWeight::get().reads(2))
      .saturating_add(T::DbWeight::get().writes(7))
  }

  fn enable_minting() -> Weight {
    Weight::from_parts(15_000_000, 1500)
      .saturating_add(T::DbWeight::get().reads(2))
      .saturating_add(T::DbWeight::get().writes(1))
  }

  fn register_minter() -> Weight {
    Weight::from_parts(15_000_000, 1500)
      .saturating_add(T::DbWeight::get().reads(2))
      .saturating_add(T::DbWeight::get().writes(1))
  }

  fn unregister_minter() -> Weight {
    Weight::from_parts(15_000_000, 1500)
      .saturating_add(T::DbWeight::get().reads(3))
      .saturating_add(T::DbWeight::get().writes(1))
  }

  fn activate_minter() -> Weight {
    Weight::from_parts(15_000_000, 1500)
      .saturating_add(T::DbWeight::get().reads(3))
      .saturating_add(T::DbWeight::get().writes(1))
  }

  fn deactivate_minter() -> Weight {
    Weight::from_parts(15_000_000, 1500)
      .saturating_add(T::DbWeight::get().reads(3))
      .saturating_add(T::DbWeight::get().writes(1))
  }

  fn pause_minting() -> Weight {
    Weight::from_parts(12_000_000, 1200)
      .saturating_add(T::DbWeight::get().reads(2))
      .saturating_add(T::DbWeight::get().writes(1))
  }

  fn resume_minting() -> Weight {
    Weight::from_parts(12_000_000, 1200)
      .saturating_add(T::DbWeight::get().reads(2))
      .saturating_add(T::DbWeight::get().writes(1))
  }

  fn mint() -> Weight {
    Weight::from_parts(30_000_000, 2500)
      .saturating_add(T::DbWeight::get().reads(4))
      .saturating_add(T::DbWeight::get().writes(3))
  }
}

impl WeightInfo for () {
  fn create_mintable_token() -> Weight { Weight::from_parts(45_000_000, 3500) }
  fn enable_minting() -> Weight { Weight::from_parts(15_000_000, 1500) }
  fn register_minter() -> Weight { Weight::from_parts(15_000_000, 1500) }
  fn unregister_minter() -> Weight { Weight::from_parts(15_000_000, 1500) }
  fn activate_minter() -> Weight { Weight::from_parts(15_000_000, 1500) }
  fn deactivate_minter() -> Weight { Weight::from_parts(15_000_000, 1500) }
  fn pause_minting() -> Weight { Weight::from_parts(12_000_000, 1200) }
  fn resume_minting() -> Weight { Weight::from_parts(12_000_000, 1200) }
  fn mint() -> Weight { Weight::from_parts(30_000_000, 2500) }
}
