use rand::RngCore;
use crate::BinaryDigit;
use proptest::prelude::*;
use proptest::strategy::*;
use proptest::arbitrary::*;
use proptest::test_runner::*;

impl ValueTree for BinaryDigit {
  type Value = BinaryDigit;

  fn current(&self) -> BinaryDigit { *self }

  fn simplify(&mut self) -> bool { false }
  fn complicate(&mut self) -> bool { false }
}

#[derive(Debug)]
pub struct BinaryDigitStrategy;

impl Strategy for BinaryDigitStrategy {
  type Tree  = BinaryDigit;
  type Value = BinaryDigit;

  fn new_tree(&self, runner: &mut TestRunner) -> NewTree<Self> {
    let rng = runner.rng();
    Ok(BinaryDigit::from_bool(rng.next_u64() & 1 == 1))
  }
}

impl Arbitrary for BinaryDigit {
  type Parameters = ();
  type Strategy   = BinaryDigitStrategy;

  fn arbitrary_with(_: ()) -> Self::Strategy {
    BinaryDigitStrategy
  }
}

pub fn do_test<T: Arbitrary>
    ( s: fn ()  -> StrategyFor<T>
    , p: fn(T)  -> Option<bool>
    ) {
  let mut cfg: Config = <_>::default();
  cfg.failure_persistence = None;
  let mut runner = TestRunner::new(cfg);
  let strategy = s();
  runner.run(&strategy, |arg| {
    match p(arg) {
      Some(result) =>
        if result { Ok(()) }
        else {
          Err(TestCaseError::Fail("unexpected result".into()))
        },
      None => Err(TestCaseError::Reject("invalid input".into()))
    }
  }).unwrap()
}

impl BinaryDigit {
  pub fn sem(self) -> (BinaryDigit, bool) {
    (self, self.to_bool())
  }
}

pub fn unary() -> StrategyFor<BinaryDigit> {
  arbitrary_with(())
}

pub fn binary() -> StrategyFor<(BinaryDigit,BinaryDigit)> {
  arbitrary_with(((),()))
}

pub fn ternary() -> StrategyFor<(BinaryDigit,BinaryDigit,BinaryDigit)> {
  arbitrary_with(((),(),()))
}
