use crate as pallet_reward_disburser;
use polkadot_sdk::frame_support::{
  PalletId, construct_runtime, parameter_types,
  traits::{ConstU32, ConstU64},
};
use polkadot_sdk::sp_runtime::{
  BuildStorage,
  traits::{BlakeTwo256, IdentityLookup},
};
use primitives::{
  pallet_ids::REWARD_DISBURSER_PALLET_ID,
  params::{DEFAULT_MIN_BASE, REFERENCE_REWARD_MULTIPLIER, REWARD_ENGINE_VERSION},
};

type Block = polkadot_sdk::frame_system::mocking::MockBlock<Test>;
pub type AccountId = u64;
pub type Balance = primitives::Balance;

pub const ALICE: AccountId = 1;
pub const BOB: AccountId = 2;
pub const CHARLIE: AccountId = 3;
/// Decodes from all-zero bytes.
pub const NULL: AccountId = 0;

/// Reward token seeded at genesis, owned by ALICE with 1_000_000 base units.
pub const REWARD_TOKEN: u32 = 0;
/// Second token owned by ALICE, used to test tokenizer changes.
pub const OTHER_TOKEN: u32 = 1;

construct_runtime!(
  pub enum Test {
    System: polkadot_sdk::frame_system,
    Ledger: pallet_token_ledger,
    Rewards: pallet_reward_disburser,
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

parameter_types! {
  pub const RewardsPalletId: PalletId = PalletId(*REWARD_DISBURSER_PALLET_ID);
  pub const DefaultMinBase: Balance = DEFAULT_MIN_BASE;
  pub const EngineVersion: u32 = REWARD_ENGINE_VERSION;
  pub const RewardMultiplier: u32 = REFERENCE_REWARD_MULTIPLIER;
}

impl pallet_reward_disburser::Config for Test {
  type Balance = Balance;
  type Ledger = Ledger;
  type RewardFormula = pallet_reward_disburser::LinearMultiplier<RewardMultiplier>;
  type DisburseGate = pallet_reward_disburser::OwnerOnly;
  type PalletId = RewardsPalletId;
  type DefaultMinBase = DefaultMinBase;
  type Version = EngineVersion;
  type WeightInfo = ();
}

pub fn new_test_ext() -> polkadot_sdk::sp_io::TestExternalities {
  let mut t = polkadot_sdk::frame_system::GenesisConfig::<Test>::default()
    .build_storage()
    .unwrap();

  pallet_token_ledger::GenesisConfig::<Test> {
    tokens: vec![
      (ALICE, b"Reward Token".to_vec(), b"RWD".to_vec(), 0, 1_000_000),
      (ALICE, b"Other Token".to_vec(), b"OTH".to_vec(), 0, 1_000_000),
    ],
    accounts: vec![],
  }
  .assimilate_storage(&mut t)
  .unwrap();

  let mut ext = polkadot_sdk::sp_io::TestExternalities::new(t);
  ext.execute_with(|| System::set_block_number(1));
  ext
}
