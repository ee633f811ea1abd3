//! Atomic text changes with an optional resulting selection.
//!
//! A [`Transaction`] carries at most one [`Change`] (a `(from, to, text)`
//! replacement) and the selection to install once the change is applied.
//! Bounds are validated before the rope is touched, so a transaction either
//! applies completely or leaves the text untouched.
//!
//! ```ignore
//! use ropey::Rope;
//! use the_pairs::transaction::Transaction;
//!
//! let mut doc = Rope::from("hello world");
//! let tx = Transaction::change(&doc, (6, 11, Some("rust".into()))).unwrap();
//! tx.apply(&mut doc).unwrap();
//! assert_eq!(doc.to_string(), "hello rust");
//! ```

use std::borrow::Cow;

use ropey::Rope;
use thiserror::Error;

use crate::{
  Tendril,
  selection::Range,
};

pub type Result<T> = std::result::Result<T, TransactionError>;

/// (from, to) replacement.
pub type Change = (usize, usize, Option<Tendril>);

#[derive(Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum TransactionError {
  #[error("invalid change range: start {from} is after end {to}")]
  InvalidRange { from: usize, to: usize },
  #[error("change range {from}..{to} is out of bounds for document length {len}")]
  RangeOutOfBounds {
    from: usize,
    to:   usize,
    len:  usize,
  },
}

fn validate_change_bounds(from: usize, to: usize, len: usize) -> Result<()> {
  if from > to {
    return Err(TransactionError::InvalidRange { from, to });
  }
  if to > len {
    return Err(TransactionError::RangeOutOfBounds { from, to, len });
  }
  Ok(())
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Transaction {
  change:    Option<Change>,
  selection: Option<Range>,
}

impl Transaction {
  pub fn change(doc: &Rope, change: Change) -> Result<Self> {
    let (from, to, _) = &change;
    validate_change_bounds(*from, *to, doc.len_chars())?;
    Ok(Self {
      change:    Some(change),
      selection: None,
    })
  }

  pub fn insert(doc: &Rope, pos: usize, text: Tendril) -> Result<Self> {
    Self::change(doc, (pos, pos, Some(text)))
  }

  pub fn delete(doc: &Rope, from: usize, to: usize) -> Result<Self> {
    Self::change(doc, (from, to, None))
  }

  pub fn with_selection(mut self, selection: Range) -> Self {
    self.selection = Some(selection);
    self
  }

  pub fn changes(&self) -> Option<&Change> {
    self.change.as_ref()
  }

  pub fn selection(&self) -> Option<&Range> {
    self.selection.as_ref()
  }

  /// Apply this transaction in-place.
  pub fn apply(&self, doc: &mut Rope) -> Result<()> {
    let Some((from, to, text)) = &self.change else {
      return Ok(());
    };
    validate_change_bounds(*from, *to, doc.len_chars())?;

    if from < to {
      doc.remove(*from..*to);
    }
    if let Some(text) = text {
      doc.insert(*from, text);
    }
    Ok(())
  }

  /// Generate a transaction that reverts this one.
  ///
  /// `original` is the document before this transaction was applied. The
  /// inverse carries no selection.
  pub fn invert(&self, original: &Rope) -> Result<Self> {
    let Some((from, to, text)) = &self.change else {
      return Ok(Self::default());
    };
    validate_change_bounds(*from, *to, original.len_chars())?;

    let removed = Cow::from(original.slice(*from..*to));
    let removed = (!removed.is_empty()).then(|| Tendril::from(removed.as_ref()));
    let inserted = text.as_ref().map_or(0, |text| text.chars().count());

    Ok(Self {
      change:    Some((*from, from + inserted, removed)),
      selection: None,
    })
  }
}

#[cfg(test)]
mod test {
  use super::*;

  #[test]
  fn replace() {
    let mut doc = Rope::from("hello world");
    let tx = Transaction::change(&doc, (6, 11, Some("rust".into()))).unwrap();
    tx.apply(&mut doc).unwrap();
    assert_eq!(doc, "hello rust");
  }

  #[test]
  fn insert_and_delete() {
    let mut doc = Rope::from("ab");
    Transaction::insert(&doc, 1, "()".into())
      .unwrap()
      .apply(&mut doc)
      .unwrap();
    assert_eq!(doc, "a()b");

    Transaction::delete(&doc, 1, 3)
      .unwrap()
      .apply(&mut doc)
      .unwrap();
    assert_eq!(doc, "ab");
  }

  #[test]
  fn rejects_bad_ranges() {
    let doc = Rope::from("abc");
    assert_eq!(
      Transaction::delete(&doc, 2, 1),
      Err(TransactionError::InvalidRange { from: 2, to: 1 })
    );
    assert_eq!(
      Transaction::delete(&doc, 2, 4),
      Err(TransactionError::RangeOutOfBounds {
        from: 2,
        to:   4,
        len:  3,
      })
    );
  }

  #[test]
  fn apply_leaves_doc_untouched_on_error() {
    let long = Rope::from("abcdef");
    let tx = Transaction::delete(&long, 4, 6).unwrap();

    let mut short = Rope::from("abc");
    assert!(tx.apply(&mut short).is_err());
    assert_eq!(short, "abc");
  }

  #[test]
  fn invert_restores_original() {
    let original = Rope::from("say wrap me now");
    let tx = Transaction::change(&original, (4, 11, Some("(wrap me)".into()))).unwrap();

    let mut doc = original.clone();
    tx.apply(&mut doc).unwrap();
    assert_eq!(doc, "say (wrap me) now");

    tx.invert(&original).unwrap().apply(&mut doc).unwrap();
    assert_eq!(doc, original);
  }

  #[test]
  fn selection_only() {
    let mut doc = Rope::from("()");
    let tx = Transaction::default().with_selection(Range::point(2));
    tx.apply(&mut doc).unwrap();
    assert_eq!(doc, "()");
    assert_eq!(tx.selection(), Some(&Range::point(2)));
    assert_eq!(tx.invert(&doc).unwrap(), Transaction::default());
  }
}
