//! Contract between the pairing engine and the document that hosts it.
//!
//! The engine never owns text or selection state. It reads a snapshot
//! through [`PairHost`], decides, and hands back at most one [`PairEdit`]
//! which the host must apply as a single atomic change.

use crate::{
  Tendril,
  selection::Range,
};

/// What sits next to a position in the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Neighbor {
  /// A plain text character.
  Text(char),
  /// A structural node that carries no plain text (image, mention, ...).
  Node,
  /// Start or end of the document.
  Boundary,
}

impl Neighbor {
  /// The neighbouring character, if the neighbour is plain text.
  #[inline]
  pub fn text(self) -> Option<char> {
    match self {
      Neighbor::Text(ch) => Some(ch),
      Neighbor::Node | Neighbor::Boundary => None,
    }
  }
}

/// A single edit produced by the engine.
///
/// Positions are char indices into the document before the edit is
/// applied, except `cursor` which refers to the document after it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PairEdit {
  Insert {
    pos:    usize,
    text:   Tendril,
    cursor: usize,
  },
  Replace {
    from:   usize,
    to:     usize,
    text:   Tendril,
    cursor: usize,
  },
  /// Delete `from..to`, leaving cursor placement to the host.
  Delete { from: usize, to: usize },
  /// Move the cursor without touching the text.
  MoveCursor { cursor: usize },
}

impl PairEdit {
  /// Cursor position the edit asks for, if it picks one.
  pub fn cursor(&self) -> Option<usize> {
    match self {
      PairEdit::Insert { cursor, .. }
      | PairEdit::Replace { cursor, .. }
      | PairEdit::MoveCursor { cursor } => Some(*cursor),
      PairEdit::Delete { .. } => None,
    }
  }
}

pub trait PairHost {
  type Error: std::error::Error;

  /// The primary selection.
  fn selection(&self) -> Range;

  /// What precedes `pos`.
  fn neighbor_before(&self, pos: usize) -> Neighbor;

  /// What follows `pos`.
  fn neighbor_after(&self, pos: usize) -> Neighbor;

  /// Text of `from..to`, or `None` if the range cannot be read as text.
  fn slice(&self, from: usize, to: usize) -> Option<Tendril>;

  /// Apply `edit` as one atomic, undoable change and place the cursor.
  fn apply(&mut self, edit: PairEdit) -> Result<(), Self::Error>;
}
