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
  fn create_engine() -> Weight;
  fn change_tokenizer() -> Weight;
  fn set_min_base() -> Weight;
  fn disburse() -> Weight;
  fn upgrade() -> Weight;
  fn pause() -> Weight;
  fn unpause() -> Weight;
  fn transfer_ownership() -> Weight;
}

pub struct SubstrateWeight<T>(PhantomData<T>);
impl<T: polkadot_sdk::frame_system::Config> WeightInfo for SubstrateWeight<T> {
  fn create_engine() -> Weight {
    Weight::from_parts(25_000_000, 2000)
      .saturating_add(T::DbWeight::get().reads(3))
      .saturating_add(T::DbWeight::get().writes(3))
  }

  fn change_tokenizer() -> Weight {
    Weight::from_parts(15_000_000, 1500)
      .saturating_add(T::DbWeight::get().reads(2))
      .saturating_add(T::DbWeight::get().writes(1))
  }

  fn set_min_base() -> Weight {
    Weight::from_parts(12_000_000, 1200)
      .saturating_add(T::DbWeight::get().reads(1))
      .saturating_add(T::DbWeight::get().writes(1))
  }

  fn disburse() -> Weight {
    Weight::from_parts(35_000_000, 3000)
      .saturating_add(T::DbWeight::get().reads(5))
      .saturating_add(T::DbWeight::get().writes(2))
  }

  fn upgrade() -> Weight {
    Weight::from_parts(40_000_000, 3500)
      .saturating_add(T::DbWeight::get().reads(6))
      .saturating_add(T::DbWeight::get().writes(2))
  }

  fn pause() -> Weight {
    Weight::from_parts(12_000_000, 1200)
      .saturating_add(T::DbWeight::get().reads(1))
      .saturating_add(T::DbWeight::get().writes(1))
  }

  fn unpause() -> Weight {
    Weight::from_parts(12_000_000, 1200)
      .saturating_add(T::DbWeight::get().reads(1))
      .saturating_add(T::DbWeight::get().writes(1))
  }

  fn transfer_ownership() -> Weight {
    Weight::from_parts(12_000_000, 1200)
      .saturating_add(T::DbWeight::get().reads(1))
      .saturating_add(T::DbWeight::get().writes(1))
  }
}

impl WeightInfo for () {
  fn create_engine() -> Weight { Weight::from_parts(25_000_000, 2000) }
  fn change_tokenizer() -> Weight { Weight::from_parts(15_000_000, 1500) }
  fn set_min_base() -> Weight { Weight::from_parts(12_000_000, 1200) }
  fn disburse() -> Weight { Weight::from_parts(35_000_000, 3000) }
  fn upgrade() -> Weight { Weight::from_parts(40_000_000, 3500) }
  fn pause() -> Weight { Weight::from_parts(12_000_000, 1200) }
  fn unpause() -> Weight { Weight::from_parts(12_000_000, 1200) }
  fn transfer_ownership() -> Weight { Weight::from_parts(12_000_000, 1200) }
}
