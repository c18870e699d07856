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
  fn create() -> Weight;
  fn transfer() -> Weight;
  fn approve() -> Weight;
  fn transfer_from() -> Weight;
  fn burn() -> Weight;
  fn pause() -> Weight;
  fn unpause() -> Weight;
  fn freeze() -> Weight;
  fn transfer_ownership() -> Weight;
}

pub struct SubstrateWeight<T>(PhantomData<T>);
impl<T: polkadot_sdk::frame_system::Config> WeightInfo for SubstrateWeight<T> {
  fn create() -> Weight {
    Weight::from_parts(40_000_000, 3000)
      .saturating_add(T::DbWeight::get().reads(1))
      .saturating_add(T::DbWeight::get().writes(5))
  }

  fn transfer() -> Weight {
    Weight::from_parts(30_000_000, 2500)
      .saturating_add(T::DbWeight::get().reads(4))
      .saturating_add(T::DbWeight::get().writes(2))
  }

  fn approve() -> Weight {
    Weight::from_parts(20_000_000, 2000)
      .saturating_add(T::DbWeight::get().reads(2))
      .saturating_add(T::DbWeight::get().writes(1))
  }

  fn transfer_from() -> Weight {
    Weight::from_parts(35_000_000, 3000)
      .saturating_add(T::DbWeight::get().reads(5))
      .saturating_add(T::DbWeight::get().writes(3))
  }

  fn burn() -> Weight {
    Weight::from_parts(25_000_000, 2000)
      .saturating_add(T::DbWeight::get().reads(3))
      .saturating_add(T::DbWeight::get().writes(2))
  }

  fn pause() -> Weight {
    Weight::from_parts(15_000_000, 1200)
      .saturating_add(T::DbWeight::get().reads(1))
      .saturating_add(T::DbWeight::get().writes(1))
  }

  fn unpause() -> Weight {
    Weight::from_parts(15_000_000, 1200)
      .saturating_add(T::DbWeight::get().reads(1))
      .saturating_add(T::DbWeight::get().writes(1))
  }

  fn freeze() -> Weight {
    Weight::from_parts(15_000_000, 1200)
      .saturating_add(T::DbWeight::get().reads(1))
      .saturating_add(T::DbWeight::get().writes(1))
  }

  fn transfer_ownership() -> Weight {
    Weight::from_parts(15_000_000, 1200)
      .saturating_add(T::DbWeight::get().reads(1))
      .saturating_add(T::DbWeight::get().writes(1))
  }
}

impl WeightInfo for () {
  fn create() -> Weight { Weight::from_parts(40_000_000, 3000) }
  fn transfer() -> Weight { Weight::from_parts(30_000_000, 2500) }
  fn approve() -> Weight { Weight::from_parts(20_000_000, 2000) }
  fn transfer_from() -> Weight { Weight::from_parts(35_000_000, 3000) }
  fn burn() -> Weight { Weight::from_parts(25_000_000, 2000) }
  fn pause() -> Weight { Weight::from_parts(15_000_000, 1200) }
  fn unpause() -> Weight { Weight::from_parts(15_000_000, 1200) }
  fn freeze() -> Weight { Weight::from_parts(15_000_000, 1200) }
  fn transfer_ownership() -> Weight { Weight::from_parts(15_000_000, 1200) }
}
