use crate::BinaryDigit;

impl BinaryDigit {

  /// The digit with the given boolean value.
  pub fn from_bool(value: bool) -> BinaryDigit {
    if value { BinaryDigit::True } else { BinaryDigit::False }
  }

}

impl From<bool> for BinaryDigit {
  fn from(value: bool) -> Self {
    BinaryDigit::from_bool(value)
  }
}

impl From<BinaryDigit> for bool {
  fn from(digit: BinaryDigit) -> Self {
    digit.to_bool()
  }
}
