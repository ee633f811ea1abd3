//! Rope-backed reference host for the pairing engine.
//!
//! The document models a rich-text buffer as plain text where every embedded
//! structural node (image, mention, ...) occupies one char, the object
//! replacement character [`OBJECT_REPLACEMENT`]. Neighbour queries report such
//! positions as [`Neighbor::Node`].
//!
//! Every applied [`Transaction`] is one revision: [`Document::undo`] reverts
//! it in a single step, text and selection together.
//!
//! ```
//! use the_pairs::{
//!   document::Document,
//!   selection::Range,
//!   transaction::Transaction,
//! };
//!
//! let mut doc = Document::new("hello");
//! let tx = Transaction::insert(doc.text(), 5, " world".into())
//!   .unwrap()
//!   .with_selection(Range::point(11));
//! doc.apply_transaction(&tx).unwrap();
//! assert_eq!(doc.to_string(), "hello world");
//!
//! doc.undo().unwrap();
//! assert_eq!(doc.to_string(), "hello");
//! ```

use std::{
  borrow::Cow,
  fmt,
};

use ropey::Rope;
use thiserror::Error;

use crate::{
  Tendril,
  host::{
    Neighbor,
    PairEdit,
    PairHost,
  },
  selection::Range,
  transaction::{
    Transaction,
    TransactionError,
  },
};

/// Stand-in char for an embedded non-text node.
pub const OBJECT_REPLACEMENT: char = '\u{FFFC}';

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DocumentError {
  #[error("document is readonly")]
  Readonly,
  #[error(transparent)]
  Transaction(#[from] TransactionError),
}

pub type Result<T> = std::result::Result<T, DocumentError>;

#[derive(Debug, Clone)]
struct Revision {
  transaction:      Transaction,
  inverse:          Transaction,
  selection_before: Range,
}

#[derive(Debug, Clone)]
pub struct Document {
  text:      Rope,
  selection: Range,
  readonly:  bool,
  undo:      Vec<Revision>,
  redo:      Vec<Revision>,
}

impl Document {
  pub fn new(text: &str) -> Self {
    Self {
      text:      Rope::from(text),
      selection: Range::point(0),
      readonly:  false,
      undo:      Vec::new(),
      redo:      Vec::new(),
    }
  }

  #[must_use]
  pub fn with_selection(mut self, selection: Range) -> Self {
    self.set_selection(selection);
    self
  }

  pub fn text(&self) -> &Rope {
    &self.text
  }

  pub fn selection(&self) -> Range {
    self.selection
  }

  /// Set the selection, clamped to the document.
  pub fn set_selection(&mut self, selection: Range) {
    self.selection = selection.clamp(self.text.len_chars());
  }

  pub fn readonly(&self) -> bool {
    self.readonly
  }

  pub fn set_readonly(&mut self, readonly: bool) {
    self.readonly = readonly;
  }

  /// Embed a structural node at `pos`.
  ///
  /// Nodes are not undoable, so this clears the undo and redo history.
  pub fn insert_node(&mut self, pos: usize) -> Result<()> {
    let tx = Transaction::insert(&self.text, pos, Tendril::from(OBJECT_REPLACEMENT.to_string()))?;
    tx.apply(&mut self.text)?;
    self.undo.clear();
    self.redo.clear();
    Ok(())
  }

  /// Number of revisions that can be undone.
  pub fn revisions(&self) -> usize {
    self.undo.len()
  }

  /// Apply `transaction` as one revision.
  ///
  /// Without an explicit selection the cursor collapses to the end of the
  /// changed range.
  pub fn apply_transaction(&mut self, transaction: &Transaction) -> Result<()> {
    if self.readonly {
      return Err(DocumentError::Readonly);
    }

    let inverse = transaction.invert(&self.text)?;
    transaction.apply(&mut self.text)?;

    let selection_before = self.selection;
    self.set_selection(selection_after(transaction, selection_before));

    self.undo.push(Revision {
      transaction: transaction.clone(),
      inverse,
      selection_before,
    });
    self.redo.clear();
    Ok(())
  }

  /// Revert the last revision. Returns `false` when there is nothing to undo.
  pub fn undo(&mut self) -> Result<bool> {
    if self.readonly {
      return Err(DocumentError::Readonly);
    }
    let Some(revision) = self.undo.pop() else {
      return Ok(false);
    };

    revision.inverse.apply(&mut self.text)?;
    self.set_selection(revision.selection_before);
    self.redo.push(revision);
    Ok(true)
  }

  /// Re-apply the last undone revision. Returns `false` when there is nothing
  /// to redo.
  pub fn redo(&mut self) -> Result<bool> {
    if self.readonly {
      return Err(DocumentError::Readonly);
    }
    let Some(revision) = self.redo.pop() else {
      return Ok(false);
    };

    revision.transaction.apply(&mut self.text)?;
    self.set_selection(selection_after(&revision.transaction, revision.selection_before));
    self.undo.push(revision);
    Ok(true)
  }

  fn neighbor_at(&self, idx: usize) -> Neighbor {
    match self.text.get_char(idx) {
      Some(OBJECT_REPLACEMENT) => Neighbor::Node,
      Some(ch) => Neighbor::Text(ch),
      None => Neighbor::Boundary,
    }
  }

  fn transaction_for(&self, edit: PairEdit) -> Result<Transaction> {
    let cursor = edit.cursor();
    let tx = match edit {
      PairEdit::Insert { pos, text, .. } => Transaction::insert(&self.text, pos, text)?,
      PairEdit::Replace { from, to, text, .. } => {
        Transaction::change(&self.text, (from, to, Some(text)))?
      },
      PairEdit::Delete { from, to } => Transaction::delete(&self.text, from, to)?,
      PairEdit::MoveCursor { .. } => Transaction::default(),
    };
    Ok(match cursor {
      Some(cursor) => tx.with_selection(Range::point(cursor)),
      None => tx,
    })
  }
}

/// Selection once `transaction` has been applied over `before`. Without an
/// explicit selection the cursor collapses to the end of the changed range.
fn selection_after(transaction: &Transaction, before: Range) -> Range {
  match (transaction.selection(), transaction.changes()) {
    (Some(selection), _) => *selection,
    (None, Some((from, _, text))) => {
      Range::point(from + text.as_ref().map_or(0, |text| text.chars().count()))
    },
    (None, None) => before,
  }
}

impl fmt::Display for Document {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for chunk in self.text.chunks() {
      f.write_str(chunk)?;
    }
    Ok(())
  }
}

impl PairHost for Document {
  type Error = DocumentError;

  fn selection(&self) -> Range {
    self.selection
  }

  fn neighbor_before(&self, pos: usize) -> Neighbor {
    match pos.checked_sub(1) {
      Some(idx) => self.neighbor_at(idx),
      None => Neighbor::Boundary,
    }
  }

  fn neighbor_after(&self, pos: usize) -> Neighbor {
    self.neighbor_at(pos)
  }

  fn slice(&self, from: usize, to: usize) -> Option<Tendril> {
    if from > to || to > self.text.len_chars() {
      return None;
    }
    let text = Cow::from(self.text.slice(from..to));
    Some(Tendril::from(text.as_ref()))
  }

  fn apply(&mut self, edit: PairEdit) -> Result<()> {
    let tx = self.transaction_for(edit)?;
    self.apply_transaction(&tx)
  }
}

#[cfg(test)]
mod test {
  use super::*;
  use crate::{
    adjacency::AdjacencyPolicy,
    auto_pairs::{
      delete_hook,
      hook,
    },
  };

  #[test]
  fn neighbours() {
    let mut doc = Document::new("ab");
    doc.insert_node(1).unwrap();
    assert_eq!(doc.to_string(), "a\u{FFFC}b");

    assert_eq!(doc.neighbor_before(0), Neighbor::Boundary);
    assert_eq!(doc.neighbor_after(0), Neighbor::Text('a'));
    assert_eq!(doc.neighbor_before(1), Neighbor::Text('a'));
    assert_eq!(doc.neighbor_after(1), Neighbor::Node);
    assert_eq!(doc.neighbor_before(2), Neighbor::Node);
    assert_eq!(doc.neighbor_after(3), Neighbor::Boundary);
    assert_eq!(doc.neighbor_before(3), Neighbor::Text('b'));
    assert_eq!(doc.neighbor_after(10), Neighbor::Boundary);
    assert_eq!(doc.revisions(), 0);
  }

  #[test]
  fn slices() {
    let doc = Document::new("wrap me");
    assert_eq!(doc.slice(0, 4).as_deref(), Some("wrap"));
    assert_eq!(doc.slice(3, 3).as_deref(), Some(""));
    assert_eq!(doc.slice(4, 2), None);
    assert_eq!(doc.slice(0, 8), None);
  }

  #[test]
  fn selection_is_clamped() {
    let doc = Document::new("abc").with_selection(Range::new(1, 9));
    assert_eq!(doc.selection(), Range::new(1, 3));
  }

  #[test]
  fn pair_edits() {
    let mut doc = Document::new("");
    doc
      .apply(PairEdit::Insert {
        pos:    0,
        text:   "()".into(),
        cursor: 1,
      })
      .unwrap();
    assert_eq!(doc.to_string(), "()");
    assert_eq!(doc.selection(), Range::point(1));

    doc.apply(PairEdit::MoveCursor { cursor: 2 }).unwrap();
    assert_eq!(doc.to_string(), "()");
    assert_eq!(doc.selection(), Range::point(2));

    doc.apply(PairEdit::Delete { from: 0, to: 2 }).unwrap();
    assert_eq!(doc.to_string(), "");
    assert_eq!(doc.selection(), Range::point(0));
  }

  #[test]
  fn cursor_past_end_is_clamped() {
    let mut doc = Document::new("x");
    doc.apply(PairEdit::MoveCursor { cursor: 5 }).unwrap();
    assert_eq!(doc.selection(), Range::point(1));
  }

  #[test]
  fn undo_reverts_one_edit_in_one_step() {
    let mut doc = Document::new("say wrap me").with_selection(Range::new(4, 11));
    doc
      .apply(PairEdit::Replace {
        from:   4,
        to:     11,
        text:   "(wrap me)".into(),
        cursor: 13,
      })
      .unwrap();
    assert_eq!(doc.to_string(), "say (wrap me)");
    assert_eq!(doc.revisions(), 1);

    assert!(doc.undo().unwrap());
    assert_eq!(doc.to_string(), "say wrap me");
    assert_eq!(doc.selection(), Range::new(4, 11));
    assert!(!doc.undo().unwrap());

    assert!(doc.redo().unwrap());
    assert_eq!(doc.to_string(), "say (wrap me)");
    assert_eq!(doc.selection(), Range::point(13));
    assert!(!doc.redo().unwrap());
  }

  #[test]
  fn redo_of_delete_keeps_cursor_inside() {
    let policy = AdjacencyPolicy::default();
    let mut doc = Document::new("()").with_selection(Range::point(1));
    assert!(delete_hook(&mut doc));
    assert_eq!(doc.selection(), Range::point(0));

    assert!(doc.undo().unwrap());
    assert_eq!(doc.to_string(), "()");
    assert_eq!(doc.selection(), Range::point(1));

    assert!(doc.redo().unwrap());
    assert_eq!(doc.to_string(), "");
    assert_eq!(doc.selection(), Range::point(0));

    assert!(hook(&mut doc, '[', &policy));
    assert_eq!(doc.to_string(), "[]");
    assert_eq!(doc.selection(), Range::point(1));
  }

  #[test]
  fn inserting_a_node_resets_history() {
    let mut doc = Document::new("ab").with_selection(Range::point(2));
    doc
      .apply(PairEdit::Insert {
        pos:    2,
        text:   "()".into(),
        cursor: 3,
      })
      .unwrap();
    assert_eq!(doc.revisions(), 1);

    doc.insert_node(0).unwrap();
    assert_eq!(doc.to_string(), "\u{FFFC}ab()");
    assert_eq!(doc.revisions(), 0);
    assert!(!doc.undo().unwrap());
    assert_eq!(doc.to_string(), "\u{FFFC}ab()");
  }

  #[test]
  fn readonly_rejects_edits() {
    let mut doc = Document::new("()").with_selection(Range::point(1));
    doc.set_readonly(true);
    let err = doc.apply(PairEdit::Delete { from: 0, to: 2 }).unwrap_err();
    assert!(matches!(err, DocumentError::Readonly));
    assert_eq!(doc.to_string(), "()");
    assert_eq!(doc.revisions(), 0);
  }

  #[test]
  fn out_of_bounds_edit_is_rejected_whole() {
    let mut doc = Document::new("ab").with_selection(Range::point(1));
    let err = doc.apply(PairEdit::Delete { from: 1, to: 3 }).unwrap_err();
    assert!(matches!(
      err,
      DocumentError::Transaction(TransactionError::RangeOutOfBounds { .. })
    ));
    assert_eq!(doc.to_string(), "ab");
    assert_eq!(doc.selection(), Range::point(1));
  }
}
