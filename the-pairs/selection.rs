//! Cursor and selection ranges.
//!
//! A [`Range`] has an `anchor` and a `head`. The head is where the cursor
//! appears; the anchor is the fixed end. When both are equal the range is
//! an empty cursor.
//!
//! ```text
//! anchor=2, head=7: "he[llo w]orld"  (forward selection)
//! anchor=7, head=2: "he]llo w[orld"  (backward selection)
//! anchor=5, head=5: "hello|world"    (cursor)
//! ```
//!
//! Positions are char indices between characters: position `0` is before the
//! first character and `len_chars` is after the last one.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Range {
  pub anchor: usize,
  pub head:   usize,
}

impl Range {
  pub fn new(anchor: usize, head: usize) -> Self {
    Self { anchor, head }
  }

  #[inline]
  pub fn point(head: usize) -> Self {
    Self::new(head, head)
  }

  /// Start of the range
  #[inline]
  #[must_use]
  pub fn from(&self) -> usize {
    std::cmp::min(self.anchor, self.head)
  }

  /// End of the range
  #[inline]
  #[must_use]
  pub fn to(&self) -> usize {
    std::cmp::max(self.anchor, self.head)
  }

  #[inline]
  #[must_use]
  pub fn len(&self) -> usize {
    self.to() - self.from()
  }

  /// When the head and anchor are in the same position, we have no range.
  #[inline]
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.anchor == self.head
  }

  /// Pull both ends inside a document of `len` chars.
  #[must_use]
  pub fn clamp(self, len: usize) -> Self {
    Self::new(self.anchor.min(len), self.head.min(len))
  }
}

#[cfg(test)]
mod test {
  use super::*;

  #[test]
  fn bounds_ignore_direction() {
    let forward = Range::new(2, 7);
    let backward = Range::new(7, 2);
    assert_eq!((forward.from(), forward.to()), (2, 7));
    assert_eq!((backward.from(), backward.to()), (2, 7));
    assert_eq!(forward.len(), 5);
  }

  #[test]
  fn points_are_empty() {
    let point = Range::point(4);
    assert!(point.is_empty());
    assert_eq!(point.len(), 0);
    assert!(!Range::new(1, 3).is_empty());
  }

  #[test]
  fn clamp_pulls_ends_inside() {
    assert_eq!(Range::new(2, 9).clamp(5), Range::new(2, 5));
    assert_eq!(Range::point(8).clamp(3), Range::point(3));
    assert_eq!(Range::new(1, 2).clamp(3), Range::new(1, 2));
  }
}
