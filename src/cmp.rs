use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use crate::BinaryDigit;

impl BinaryDigit {

  pub fn equal(self, other: BinaryDigit) -> bool {
    self.to_bool() == other.to_bool()
  }

}

impl PartialEq for BinaryDigit {
  fn eq(&self, other: &BinaryDigit) -> bool { self.equal(*other) }
}

impl Eq for BinaryDigit {}

impl PartialOrd for BinaryDigit {
  fn partial_cmp(&self, other: &BinaryDigit) -> Option<Ordering> {
    Some(self.cmp(other))
  }
}

impl Ord for BinaryDigit {
  fn cmp(&self, other: &BinaryDigit) -> Ordering {
    self.to_bool().cmp(&other.to_bool())
  }
}

impl Hash for BinaryDigit {
  fn hash<H: Hasher>(&self, state: &mut H) {
    // True hashes as 1, False as 0.
    state.write_u8(self.to_bool() as u8)
  }
}

#[cfg(test)]
mod test {
  use std::collections::HashSet;
  use std::collections::hash_map::DefaultHasher;
  use std::hash::{Hash, Hasher};
  use crate::BinaryDigit;
  use crate::BinaryDigit::{False, True};

  fn hash_of(digit: BinaryDigit) -> u64 {
    let mut hasher = DefaultHasher::new();
    digit.hash(&mut hasher);
    hasher.finish()
  }

  #[test]
  fn test_reflexive() {
    assert!(True.equal(True));
    assert!(False.equal(False));
  }

  #[test]
  fn test_symmetric() {
    let t1 = True;
    let t2 = True;
    assert!(t1.equal(t2));
    assert!(t2.equal(t1));
  }

  #[test]
  fn test_transitive() {
    let t1 = True;
    let t2 = True;
    let t3 = True;
    assert!(t1.equal(t2));
    assert!(t2.equal(t3));
    assert!(t3.equal(t1));
  }

  #[test]
  fn test_unequal_values() {
    assert!(!True.equal(False));
    assert!(!False.equal(True));
  }

  #[test]
  fn test_equal_values_have_equal_hashes() {
    assert_eq!(hash_of(True), hash_of(True));
    assert_eq!(hash_of(False), hash_of(False));
  }

  #[test]
  fn test_unchanged_value_hashes_the_same() {
    let digit = True;
    let h1 = hash_of(digit);
    let h2 = hash_of(digit);
    assert_eq!(h1, h2);
  }

  #[test]
  fn test_usable_as_set_element() {
    let mut seen = HashSet::new();
    seen.insert(True);
    seen.insert(True);
    seen.insert(False);
    assert_eq!(seen.len(), 2);
  }

  #[test]
  fn test_false_sorts_before_true() {
    assert!(False < True);
    assert_eq!(False.max(True), True);
  }

}
