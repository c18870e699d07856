use crate as pallet_minter_quota;
use polkadot_sdk::frame_support::{
  construct_runtime,
  traits::{ConstU32, ConstU64},
};
use polkadot_sdk::sp_runtime::{
  BuildStorage,
  traits::{BlakeTwo256, IdentityLookup},
};

type Block = polkadot_sdk::frame_system::mocking::MockBlock<Test>;
pub type AccountId = u64;
pub type Balance = u128;

pub const ALICE: AccountId = 1;
pub const BOB: AccountId = 2;
pub const CHARLIE: AccountId = 3;
pub const DAVE: AccountId = 4;
pub const NULL: AccountId = 0;

/// Quota-governed token seeded at genesis: 100 whole units at 1 decimal, owner limit 100.
pub const QUOTA_TOKEN: u32 = 0;

construct_runtime!(
  pub enum Test {
    System: polkadot_sdk::frame_system,
    Ledger: pallet_token_ledger,
    MinterQuota: pallet_minter_quota,
  }
);

impl polkadot_sdk::frame_system::Config for Test {
  type BaseCallFilter = polkadot_sdk::frame_support::traits::Everything;
  type BlockWeights = ();
  type BlockLength = ();
  type DbWeight = ();
  type RuntimeOrigin = RuntimeOrigin;
  type RuntimeCall = RuntimeCall;
  type Nonce = u64;
  type Hash = polkadot_sdk::sp_core::H256;
  type Hashing = BlakeTwo256;
  type AccountId = AccountId;
  type Lookup = IdentityLookup<Self::AccountId>;
  type Block = Block;
  type RuntimeEvent = RuntimeEvent;
  type BlockHashCount = ConstU64<250>;
  type Version = ();
  type PalletInfo = PalletInfo;
  type AccountData = ();
  type OnNewAccount = ();
  type OnKilledAccount = ();
  type SystemWeightInfo = ();
  type SS58Prefix = ();
  type OnSetCode = ();
  type MaxConsumers = ConstU32<16>;
  type RuntimeTask = ();
  type ExtensionsWeightInfo = ();
  type SingleBlockMigrations = ();
  type MultiBlockMigrator = ();
  type PreInherents = ();
  type PostInherents = ();
  type PostTransactions = ();
}

impl pallet_token_ledger::Config for Test {
  type Balance = Balance;
  type StringLimit = ConstU32<32>;
  type WeightInfo = ();
}

impl pallet_minter_quota::Config for Test {
  type Balance = Balance;
  type Ledger = Ledger;
  type WeightInfo = ();
}

pub fn new_test_ext() -> polkadot_sdk::sp_io::TestExternalities {
  let mut t = polkadot_sdk::frame_system::GenesisConfig::<Test>::default()
    .build_storage()
    .unwrap();

  pallet_minter_quota::GenesisConfig::<Test> {
    mintable_tokens: vec![(ALICE, b"Quota Token".to_vec(), b"QTK".to_vec(), 1, 100, 100)],
    minters: vec![],
  }
  .assimilate_storage(&mut t)
  .unwrap();

  let mut ext = polkadot_sdk::sp_io::TestExternalities::new(t);
  ext.execute_with(|| System::set_block_number(1));
  ext
}
