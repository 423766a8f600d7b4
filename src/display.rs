use std::fmt;
use crate::BinaryDigit;

impl fmt::Display for BinaryDigit {
  fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
    write!(fmt, "{}", if self.to_bool() { "True" } else { "False" })
  }
}
