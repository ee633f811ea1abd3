//! Whether the characters around the cursor allow a pairing action.
//!
//! Brackets always auto-close on an empty cursor. Quotes do not when they
//! touch a word character on either side, so typing `'` inside `don|t`
//! inserts a single apostrophe instead of `''`.

use the_core::chars::WordClass;

use crate::{
  host::Neighbor,
  pairs::is_quote,
};

/// The kind of interaction an opening character is typed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interaction {
  /// Empty cursor.
  Insert,
  /// Non-empty selection about to be wrapped.
  Wrap,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct AdjacencyPolicy {
  word_class: WordClass,
}

impl AdjacencyPolicy {
  pub const fn new(word_class: WordClass) -> Self {
    Self { word_class }
  }

  pub const fn word_class(&self) -> WordClass {
    self.word_class
  }

  /// Absent and non-text neighbours count as non-word.
  pub fn permits_auto_close(
    &self,
    open: char,
    interaction: Interaction,
    before: Neighbor,
    after: Neighbor,
  ) -> bool {
    if interaction == Interaction::Wrap || !is_quote(open) {
      return true;
    }

    let word_before = self.word_class.is_word_opt(before.text());
    let word_after = self.word_class.is_word_opt(after.text());
    tracing::trace!(open = ?open, word_before, word_after, "quote adjacency");
    !(word_before || word_after)
  }
}

pub fn permits_skip(cursor_is_empty: bool, next: Neighbor, typed: char) -> bool {
  cursor_is_empty && next.text() == Some(typed)
}
