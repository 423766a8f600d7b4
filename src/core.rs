// A single logical binary digit.

/// A binary digit, closed over exactly the two logical values.
///
/// The variants are the canonical instances of the type: every value is
/// one of `False` and `True`, and any two values that agree under
/// `to_bool` are interchangeable.  The type is immutable, so the
/// operators in `logic` always produce a fresh value rather than
/// changing an existing one.
///
/// `False` orders before `True`, matching the ordering of `bool`.
#[derive(Copy, Clone, Debug)]
pub enum BinaryDigit {
  False,
  True
}

impl BinaryDigit {

  /// The native boolean equivalent of this digit.
  pub fn to_bool(self) -> bool {
    match self {
      BinaryDigit::True  => true,
      BinaryDigit::False => false
    }
  }

}
