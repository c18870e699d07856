use crate::{EngineAccounts, Error, Event, mock::*};
use polkadot_sdk::frame_support::{assert_noop, assert_ok};
use polkadot_sdk::sp_runtime::BuildStorage;
use primitives::EngineId;

fn create_engine(owner: AccountId, token: u32) -> EngineId {
  assert_ok!(Rewards::create_engine(RuntimeOrigin::signed(owner), token));
  Rewards::next_engine_id() - 1
}

fn fund(engine: EngineId, token: u32, amount: Balance) {
  let account = Rewards::engine_account(engine).expect("engine exists");
  assert_ok!(Ledger::transfer(RuntimeOrigin::signed(ALICE), token, account, amount));
}

fn funded_engine() -> EngineId {
  let engine = create_engine(ALICE, REWARD_TOKEN);
  fund(engine, REWARD_TOKEN, 10_000);
  engine
}

#[test]
fn version_is_reported() {
  new_test_ext().execute_with(|| {
    assert_eq!(Rewards::version(), 10_010_002);
  });
}

#[test]
fn create_engine_uses_default_threshold() {
  new_test_ext().execute_with(|| {
    let engine = create_engine(ALICE, REWARD_TOKEN);
    let account = Rewards::engine_account(engine).expect("engine exists");
    assert_eq!(Rewards::owner(engine), Some(ALICE));
    assert_eq!(Rewards::tokenizer(engine), Some(REWARD_TOKEN));
    assert_eq!(Rewards::min_base(engine), Some(100));
    assert!(!Rewards::is_paused(engine));
    assert_eq!(account, Rewards::engine_account_id(engine));
    assert_eq!(EngineAccounts::<Test>::get(account), Some(engine));
    assert_eq!(Rewards::engine_balance(engine), 0);
    System::assert_last_event(
      Event::EngineCreated {
        engine,
        owner: ALICE,
        tokenizer: REWARD_TOKEN,
        account,
      }
      .into(),
    );
    assert_noop!(
      Rewards::create_engine(RuntimeOrigin::signed(ALICE), 9),
      Error::<Test>::UnknownToken
    );
    assert_ok!(Rewards::do_try_state());
  });
}

#[test]
fn engine_accounts_are_distinct() {
  new_test_ext().execute_with(|| {
    let first = create_engine(ALICE, REWARD_TOKEN);
    let second = create_engine(BOB, REWARD_TOKEN);
    let a = Rewards::engine_account(first).expect("engine exists");
    let b = Rewards::engine_account(second).expect("engine exists");
    assert_ne!(a, b);
    for account in [a, b] {
      assert!(![NULL, ALICE, BOB, CHARLIE].contains(&account));
    }
    assert_ok!(Rewards::do_try_state());
  });
}

#[test]
fn colliding_engine_account_skips_id() {
  new_test_ext().execute_with(|| {
    let taken = Rewards::engine_account_id(0);
    EngineAccounts::<Test>::insert(taken, 99);

    let engine = create_engine(ALICE, REWARD_TOKEN);
    assert_eq!(engine, 1);
    assert_eq!(Rewards::next_engine_id(), 2);
    assert_eq!(Rewards::owner(0), None);
    assert_eq!(Rewards::engine_account(1), Some(Rewards::engine_account_id(1)));
    assert_eq!(EngineAccounts::<Test>::get(taken), Some(99));
    assert_eq!(create_engine(BOB, REWARD_TOKEN), 2);
  });
}

#[test]
fn disburse_pays_formula_amount() {
  new_test_ext().execute_with(|| {
    let engine = funded_engine();
    assert_eq!(Rewards::estimate_reward(engine, &BOB, 240), Some(480));
    assert_ok!(Rewards::disburse(RuntimeOrigin::signed(ALICE), engine, BOB, 240));
    assert_eq!(Ledger::balance_of(REWARD_TOKEN, &BOB), 480);
    assert_eq!(Rewards::engine_balance(engine), 10_000 - 480);
    System::assert_last_event(
      Event::Disburse {
        engine,
        to: BOB,
        amount: 480,
      }
      .into(),
    );
  });
}

#[test]
fn threshold_gates_disbursement() {
  new_test_ext().execute_with(|| {
    let engine = funded_engine();
    assert_eq!(Rewards::estimate_reward(engine, &BOB, 60), None);
    assert_noop!(
      Rewards::disburse(RuntimeOrigin::signed(ALICE), engine, BOB, 60),
      Error::<Test>::BelowMinBase
    );

    assert_noop!(
      Rewards::set_min_base(RuntimeOrigin::signed(BOB), engine, 40),
      Error::<Test>::NotOwner
    );
    assert_ok!(Rewards::set_min_base(RuntimeOrigin::signed(ALICE), engine, 40));
    System::assert_last_event(Event::MinBaseUpdated { engine, min_base: 40 }.into());
    assert_eq!(Rewards::min_base(engine), Some(40));

    assert_eq!(Rewards::estimate_reward(engine, &BOB, 60), Some(120));
    assert_ok!(Rewards::disburse(RuntimeOrigin::signed(ALICE), engine, BOB, 60));
    assert_eq!(Ledger::balance_of(REWARD_TOKEN, &BOB), 120);
    assert_ok!(Rewards::disburse(RuntimeOrigin::signed(ALICE), engine, BOB, 40));
    assert_eq!(Ledger::balance_of(REWARD_TOKEN, &BOB), 200);
  });
}

#[test]
fn estimate_matches_disbursement() {
  new_test_ext().execute_with(|| {
    let engine = funded_engine();
    for base in [100, 101, 250, 1_000] {
      let expected = Rewards::estimate_reward(engine, &CHARLIE, base).expect("above threshold");
      let before = Ledger::balance_of(REWARD_TOKEN, &CHARLIE);
      assert_ok!(Rewards::disburse(RuntimeOrigin::signed(ALICE), engine, CHARLIE, base));
      assert_eq!(Ledger::balance_of(REWARD_TOKEN, &CHARLIE) - before, expected);
    }
  });
}

#[test]
fn estimate_is_none_when_undefined() {
  new_test_ext().execute_with(|| {
    let engine = funded_engine();
    assert_eq!(Rewards::estimate_reward(engine + 1, &BOB, 500), None);
    assert_eq!(Rewards::estimate_reward(engine, &BOB, Balance::MAX), None);
    assert_noop!(
      Rewards::disburse(RuntimeOrigin::signed(ALICE), engine, BOB, Balance::MAX),
      Error::<Test>::Overflow
    );
  });
}

#[test]
fn disburse_is_gated_to_owner() {
  new_test_ext().execute_with(|| {
    let engine = funded_engine();
    assert_noop!(
      Rewards::disburse(RuntimeOrigin::signed(BOB), engine, BOB, 240),
      Error::<Test>::NotOwner
    );
    assert_noop!(
      Rewards::disburse(RuntimeOrigin::signed(ALICE), engine + 1, BOB, 240),
      Error::<Test>::UnknownEngine
    );
  });
}

#[test]
fn disburse_fails_on_insufficient_holding() {
  new_test_ext().execute_with(|| {
    let engine = create_engine(ALICE, REWARD_TOKEN);
    fund(engine, REWARD_TOKEN, 300);
    assert_noop!(
      Rewards::disburse(RuntimeOrigin::signed(ALICE), engine, BOB, 200),
      pallet_token_ledger::Error::<Test>::InsufficientBalance
    );
    assert_ok!(Rewards::disburse(RuntimeOrigin::signed(ALICE), engine, BOB, 150));
    assert_eq!(Rewards::engine_balance(engine), 0);
  });
}

#[test]
fn disburse_respects_ledger_restrictions() {
  new_test_ext().execute_with(|| {
    let engine = funded_engine();
    assert_ok!(Ledger::freeze(RuntimeOrigin::signed(ALICE), REWARD_TOKEN, BOB, true));
    assert_noop!(
      Rewards::disburse(RuntimeOrigin::signed(ALICE), engine, BOB, 100),
      pallet_token_ledger::Error::<Test>::AccountFrozen
    );
    assert_ok!(Ledger::pause(RuntimeOrigin::signed(ALICE), REWARD_TOKEN));
    assert_noop!(
      Rewards::disburse(RuntimeOrigin::signed(ALICE), engine, CHARLIE, 100),
      pallet_token_ledger::Error::<Test>::Suspended
    );
  });
}

#[test]
fn pause_blocks_disbursement() {
  new_test_ext().execute_with(|| {
    let engine = funded_engine();
    assert_noop!(
      Rewards::pause(RuntimeOrigin::signed(BOB), engine),
      Error::<Test>::NotOwner
    );
    assert_noop!(
      Rewards::unpause(RuntimeOrigin::signed(ALICE), engine),
      Error::<Test>::NotSuspended
    );
    assert_ok!(Rewards::pause(RuntimeOrigin::signed(ALICE), engine));
    System::assert_last_event(Event::Pause { engine }.into());
    assert!(Rewards::is_paused(engine));
    assert_noop!(
      Rewards::pause(RuntimeOrigin::signed(ALICE), engine),
      Error::<Test>::Suspended
    );
    assert_noop!(
      Rewards::disburse(RuntimeOrigin::signed(ALICE), engine, BOB, 240),
      Error::<Test>::Suspended
    );
    assert_eq!(Rewards::estimate_reward(engine, &BOB, 240), Some(480));

    assert_ok!(Rewards::unpause(RuntimeOrigin::signed(ALICE), engine));
    System::assert_last_event(Event::Unpause { engine }.into());
    assert_ok!(Rewards::disburse(RuntimeOrigin::signed(ALICE), engine, BOB, 240));
  });
}

#[test]
fn change_tokenizer_repoints_payouts() {
  new_test_ext().execute_with(|| {
    let engine = funded_engine();
    assert_noop!(
      Rewards::change_tokenizer(RuntimeOrigin::signed(BOB), engine, OTHER_TOKEN),
      Error::<Test>::NotOwner
    );
    assert_noop!(
      Rewards::change_tokenizer(RuntimeOrigin::signed(ALICE), engine, 9),
      Error::<Test>::UnknownToken
    );
    assert_ok!(Rewards::change_tokenizer(
      RuntimeOrigin::signed(ALICE),
      engine,
      OTHER_TOKEN
    ));
    System::assert_last_event(
      Event::TokenizerChanged {
        engine,
        tokenizer: OTHER_TOKEN,
      }
      .into(),
    );
    assert_eq!(Rewards::tokenizer(engine), Some(OTHER_TOKEN));
    assert_eq!(Rewards::engine_balance(engine), 0);

    assert_noop!(
      Rewards::disburse(RuntimeOrigin::signed(ALICE), engine, BOB, 100),
      pallet_token_ledger::Error::<Test>::InsufficientBalance
    );
    fund(engine, OTHER_TOKEN, 1_000);
    assert_ok!(Rewards::disburse(RuntimeOrigin::signed(ALICE), engine, BOB, 100));
    assert_eq!(Ledger::balance_of(OTHER_TOKEN, &BOB), 200);
    assert_eq!(Ledger::balance_of(REWARD_TOKEN, &BOB), 0);
  });
}

#[test]
fn upgrade_moves_entire_holding() {
  new_test_ext().execute_with(|| {
    let engine = funded_engine();
    let successor = create_engine(ALICE, REWARD_TOKEN);
    fund(successor, REWARD_TOKEN, 5);

    assert_ok!(Rewards::pause(RuntimeOrigin::signed(ALICE), engine));
    assert_noop!(
      Rewards::upgrade(RuntimeOrigin::signed(ALICE), engine, successor),
      Error::<Test>::Suspended
    );
    assert_ok!(Rewards::unpause(RuntimeOrigin::signed(ALICE), engine));

    assert_ok!(Rewards::upgrade(RuntimeOrigin::signed(ALICE), engine, successor));
    System::assert_last_event(
      Event::Upgraded {
        engine,
        successor,
        amount: 10_000,
      }
      .into(),
    );
    assert_eq!(Rewards::engine_balance(engine), 0);
    assert_eq!(Rewards::engine_balance(successor), 10_005);
  });
}

#[test]
fn upgrade_validates_successor() {
  new_test_ext().execute_with(|| {
    let engine = funded_engine();
    let peer = create_engine(BOB, REWARD_TOKEN);

    assert_noop!(
      Rewards::upgrade(RuntimeOrigin::signed(BOB), engine, peer),
      Error::<Test>::NotOwner
    );
    assert_noop!(
      Rewards::upgrade(RuntimeOrigin::signed(ALICE), engine, engine),
      Error::<Test>::InvalidSuccessor
    );
    assert_noop!(
      Rewards::upgrade(RuntimeOrigin::signed(ALICE), engine, 42),
      Error::<Test>::UnknownEngine
    );
    // Any existing engine is a valid successor, whoever owns it.
    assert_ok!(Rewards::upgrade(RuntimeOrigin::signed(ALICE), engine, peer));
    assert_eq!(Rewards::engine_balance(peer), 10_000);
  });
}

#[test]
fn upgrade_to_engine_on_other_token() {
  new_test_ext().execute_with(|| {
    let engine = funded_engine();
    let foreign = create_engine(ALICE, OTHER_TOKEN);
    let foreign_account = Rewards::engine_account(foreign).expect("engine exists");

    assert_ok!(Rewards::upgrade(RuntimeOrigin::signed(ALICE), engine, foreign));
    System::assert_last_event(
      Event::Upgraded {
        engine,
        successor: foreign,
        amount: 10_000,
      }
      .into(),
    );
    assert_eq!(Rewards::engine_balance(engine), 0);
    assert_eq!(Ledger::balance_of(REWARD_TOKEN, &foreign_account), 10_000);
    assert_eq!(Rewards::engine_balance(foreign), 0);

    assert_ok!(Rewards::change_tokenizer(
      RuntimeOrigin::signed(ALICE),
      foreign,
      REWARD_TOKEN
    ));
    assert_eq!(Rewards::engine_balance(foreign), 10_000);
    assert_ok!(Rewards::do_try_state());
  });
}

#[test]
fn upgrade_of_empty_engine_moves_nothing() {
  new_test_ext().execute_with(|| {
    let engine = create_engine(ALICE, REWARD_TOKEN);
    let successor = create_engine(ALICE, REWARD_TOKEN);
    assert_ok!(Rewards::upgrade(RuntimeOrigin::signed(ALICE), engine, successor));
    System::assert_last_event(
      Event::Upgraded {
        engine,
        successor,
        amount: 0,
      }
      .into(),
    );
  });
}

#[test]
fn ownership_transfer_moves_privileges() {
  new_test_ext().execute_with(|| {
    let engine = funded_engine();
    assert_noop!(
      Rewards::transfer_ownership(RuntimeOrigin::signed(BOB), engine, BOB),
      Error::<Test>::NotOwner
    );
    assert_noop!(
      Rewards::transfer_ownership(RuntimeOrigin::signed(ALICE), engine, NULL),
      Error::<Test>::NullAccount
    );
    assert_eq!(Rewards::owner(engine), Some(ALICE));
    assert_ok!(Rewards::transfer_ownership(RuntimeOrigin::signed(ALICE), engine, BOB));
    System::assert_last_event(
      Event::OwnershipTransferred {
        engine,
        previous_owner: ALICE,
        new_owner: BOB,
      }
      .into(),
    );
    assert_eq!(Rewards::owner(engine), Some(BOB));
    assert_noop!(
      Rewards::disburse(RuntimeOrigin::signed(ALICE), engine, CHARLIE, 100),
      Error::<Test>::NotOwner
    );
    assert_ok!(Rewards::disburse(RuntimeOrigin::signed(BOB), engine, CHARLIE, 100));
  });
}

#[test]
fn genesis_creates_configured_engines() {
  let mut t = polkadot_sdk::frame_system::GenesisConfig::<Test>::default()
    .build_storage()
    .unwrap();
  pallet_token_ledger::GenesisConfig::<Test> {
    tokens: vec![(ALICE, b"Reward Token".to_vec(), b"RWD".to_vec(), 0, 1_000)],
    accounts: vec![],
  }
  .assimilate_storage(&mut t)
  .unwrap();
  crate::GenesisConfig::<Test> {
    engines: vec![(ALICE, REWARD_TOKEN, 40), (BOB, REWARD_TOKEN, 100)],
  }
  .assimilate_storage(&mut t)
  .unwrap();

  polkadot_sdk::sp_io::TestExternalities::new(t).execute_with(|| {
    assert_eq!(Rewards::next_engine_id(), 2);
    assert_eq!(Rewards::owner(0), Some(ALICE));
    assert_eq!(Rewards::min_base(0), Some(40));
    assert_eq!(Rewards::owner(1), Some(BOB));
    assert_eq!(Rewards::min_base(1), Some(100));
    assert_ok!(Rewards::do_try_state());
  });
}
